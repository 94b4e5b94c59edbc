//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod history;
mod modal;
mod records;
mod search;

pub use history::HistoryState;
pub use modal::{Modal, ModalState};
pub use records::{RecordsState, SKELETON_ROWS};
pub use search::{InputTone, SearchState};
