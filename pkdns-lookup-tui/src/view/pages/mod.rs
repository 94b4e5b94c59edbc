//! 页面视图

pub mod records;
pub mod search;
