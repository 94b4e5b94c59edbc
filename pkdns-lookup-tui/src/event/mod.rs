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
//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘和粘贴等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件，只处理 Press
//!             Event::Paste(String)                // 括号粘贴，整段文本一次到达
//!             Event::Resize(width , height)       // 下一帧自动重绘，不产生消息
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 全局快捷键，就地处理
//!                 - 搜索页：标签编辑器 > 输入框 > 历史面板
//!                 - 结果页：调用 handle_records_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 快捷键一览（keymap.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     全局：
//!             Alt+q / Ctrl+C  → AppMessage::Quit
//!             Alt+h           → AppMessage::ShowHelp
//!
//!     搜索页（输入框）：
//!             Ctrl+K          → SearchMessage::Focus
//!             Alt+v           → SearchMessage::PasteFromClipboard   // 替换输入框内容
//!             Enter           → SearchMessage::Submit
//!             Esc             → SearchMessage::Blur
//!             Tab             → AppMessage::ToggleFocus
//!             字符输入         → SearchMessage::Input(c)
//!
//!     搜索页（历史面板）：
//!             ↑/k ↓/j         → HistoryMessage::SelectPrevious / SelectNext
//!             Enter           → HistoryMessage::Open
//!             Alt+t           → HistoryMessage::EditTag
//!             Alt+d           → HistoryMessage::Remove
//!             x / Esc         → SearchMessage::DismissAlert
//!
//!     结果页：
//!             Alt+c           → RecordsMessage::CopyShareLink
//!             Alt+r           → RecordsMessage::Retry
//!             Esc             → AppMessage::GoBack
//!
//!
//!     即，handler.rs 使用 message 层定义的 AppMessage 枚举类型，
//!     创建一个对应的枚举值并返回；app.rs 再把它交给 update::update(app , msg)。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
