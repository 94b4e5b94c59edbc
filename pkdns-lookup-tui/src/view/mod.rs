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
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model，不修改任何状态。每一帧都从头渲染。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 页面 + 状态栏 + 弹窗
//!         mod components;         // 状态栏、弹窗
//!         mod pages;              // 搜索页、结果页
//!         pub mod theme;          // 主题颜色与常用样式
//!
//!
//!     主布局：
//!
//!         ┌──────────────────────────────────────────────┐
//!         │ PKDNS Lookup v0.1.0                          │  标题栏
//!         ├──────────────────────────────────────────────┤
//!         │                                              │
//!         │   pages::search  或  pages::records          │  页面
//!         │                                              │
//!         ├──────────────────────────────────────────────┤
//!         │ Enter Resolve │ Alt+v Paste │ ...            │  状态栏
//!         └──────────────────────────────────────────────┘
//!
//!     结果页的内容完全由 RecordsState::view() 推导出的 PageView 决定：
//!
//!         ClientInitializing / Loading    → 8 行骨架
//!         ClientError { message }         → 错误面板 + "Alt+r retry"
//!         Empty                           → "No records found"
//!         Populated { rows , .. }         → NAME / TYPE / VALUE / TTL 表格 + 页脚
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
