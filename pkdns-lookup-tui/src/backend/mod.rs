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
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 解耦，负责所有的 IO：解析、存储、剪贴板、配置。
//! 通过 pkdns-lookup-core 库实现真实的 PKDNS 查询功能。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod clipboard;                  // 系统剪贴板（arboard）
//!         mod config_service;             // 配置文件加载
//!         mod core_service;               // 核心服务入口
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/core_service.rs 中定义：
//!
//!         CoreService 是 Backend 层的入口，封装了 pkdns-lookup-core 库。
//!
//!         创建流程（from_config）：
//!             1. 创建 KeyValueStore（JSON 文件；无配置目录时为 NullStore）
//!             2. 组装 ServiceContext（共享 pkarr 客户端 + 公钥历史）
//!             3. 创建系统剪贴板
//!
//!         提供的能力：
//!             - history()             公钥历史（同步，直接读写存储）
//!             - client_snapshot()     共享客户端快照（供 PageView 推导）
//!             - spawn_lookup(key)     后台查询
//!             - spawn_retry(key)      重建客户端后查询
//!             - read/write_clipboard  剪贴板
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、后台任务与消息回传
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主循环是同步的，查询在 Tokio 运行时上以任务执行：
//!
//!         spawn_lookup(key) / spawn_retry(key)
//!             ↓
//!         ServiceContext::lookup
//!             ↓
//!         lifecycle.get() / retry()       // 共享客户端，首次调用时构建
//!             ├── Err → RecordsMessage::ClientFailed { key }
//!             └── Ok  → RecordsMessage::LookupStarted { key }
//!                         ↓
//!                     LookupService::lookup
//!                         ↓
//!                     RecordsMessage::LookupFinished { key, state }
//!
//!     消息通过 mpsc 无界通道发送，主循环每一轮取出并交给 Update 层。
//!     每条消息都带着公钥，页面已切换到别的公钥时 Update 层会丢弃它。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、配置（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：<config_dir>/pkdns-lookup/config.json
//!
//!         {
//!             "theme": "dark",                        // dark | light
//!             "language": "en-US",                    // en-US | zh-CN
//!             "share_base_url": "https://pkdns.net",
//!             "storage_path": null,                   // 覆盖历史存储位置
//!             "log_level": "info"                     // RUST_LOG 优先
//!         }
//!
//!         文件不存在时使用默认配置；文件损坏时回退到默认配置并提示。
//!

mod clipboard;
mod config_service;
mod core_service;

pub use clipboard::{ArboardClipboard, Clipboard};
pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
