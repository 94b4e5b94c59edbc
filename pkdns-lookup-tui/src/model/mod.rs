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
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和简单的状态方法，不直接访问网络或存储。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Input / History）
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//!     值得一提的是，虽说 page.rs 与 state/ 都表示页面状态，但两者有不同：
//!         - Page 是一个简单的枚举，表示当前应用处于哪个“页面”，相当于房间的门牌号，
//!             结果页只额外携带公钥，不存储任何查询数据；
//!         - State 是各个页面的业务数据容器，存储着输入、历史、查询状态等，
//!             相当于储存了房间的内容。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 搜索页焦点
//!             pub current_page: Page,             // 当前页面
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub share_base_url: String,         // 分享链接基础地址
//!
//!             // 以及各页面状态：
//!             pub search: SearchState,            // 输入框与校验提示
//!             pub history: HistoryState,          // 最近查询的公钥
//!             pub records: RecordsState,          // 查询状态与客户端快照
//!
//!             pub modal: ModalState,              // 弹窗状态
//!             pub backend: Arc<CoreService>,      // 后端服务
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（FocusPanel）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     搜索页有两个可聚焦区域：
//!         - Input：公钥输入框，字符按键直接输入
//!         - History：历史面板，↑↓ 选择，Enter 打开
//!
//!     数据流：
//!         用户按 Tab / Ctrl+K / Esc
//!             ↓
//!         event/handler.rs 返回 ToggleFocus / Search(Focus) / Search(Blur)
//!             ↓
//!         update 层修改 app.focus
//!             ↓
//!         view 层根据 app.focus 设置边框颜色和光标
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、页面状态（Page）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/page.rs 中定义页面枚举：
//!         - Search（搜索页）
//!         - Records { key }（携带公钥的结果页）
//!
//!     数据流：
//!         在搜索页提交合法公钥 / 在历史面板按 Enter → 进入结果页
//!         在结果页按 Esc → 返回搜索页
//!         命令行参数经 Route::parse 后直接决定初始页面
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、结果页状态（RecordsState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     RecordsState 只保存两份原始输入：
//!         - lookup: LookupState           本次查询（Idle / Loading / Finished）
//!         - client: LifecycleSnapshot     共享客户端快照
//!
//!     view() 通过 PageView::derive 推导出唯一的展示状态，
//!     View 层只需匹配 PageView 渲染骨架行、空状态、错误面板或表格。
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use page::Page;
pub use state::{HistoryState, Modal, ModalState, RecordsState, SearchState};
