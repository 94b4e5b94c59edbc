//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ SearchMsg │               ▼               │   │
//！│  │   ┌─────────┐          │ HistoryMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ RecordsMsg│   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ pkdns-lookup-core │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod history;
//!         mod records;
//!         mod search;
//!
//!         pub use app::AppMessage;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!         #[derive(Debug, Clone)]
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             ToggleFocus,                        // 切换搜索页焦点
//!             Search(SearchMessage),              // 搜索页子消息
//!             History(HistoryMessage),            // 历史面板子消息
//!             Records(RecordsMessage),            // 结果页子消息
//!             GoBack,                             // 返回上一页
//!             ShowHelp,                           // 显示帮助
//!             CloseModal,                         // 关闭弹窗
//!             Tick(Instant),                      // 定时器（提示超时、刷新快照）
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     消息有两个来源：
//!         · event/handler.rs 把按键、粘贴事件翻译成消息
//!         · backend/core_service.rs 中的后台任务通过 mpsc 通道回传消息
//!             （LookupStarted / LookupFinished / ClientFailed）
//!
//!     主循环在每一轮把两者都交给 update::update 处理，
//!     于是 Update 层不需要关心消息来自键盘还是后台任务。
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod history;
mod records;
mod search;

pub use app::AppMessage;
pub use history::HistoryMessage;
pub use records::RecordsMessage;
pub use search::SearchMessage;
