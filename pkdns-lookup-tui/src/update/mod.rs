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
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod search;             // 搜索页子消息处理
//!         mod history;            // 历史面板子消息处理
//!         mod records;            // 结果页子消息处理（含后台任务回传）
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!         pub fn open_records(app: &mut App , key: String) {...}
//!
//!
//!         update() 使用 match 进行穷举，每个 Message 变体都对应一个状态变更。
//!         复杂的子消息委托给子模块处理（search、history、records）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 打开结果页（open_records）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     搜索提交、历史面板 Enter、命令行参数都走同一个入口：
//!
//!         1. history().record_visit(key)      // 合法公钥移到历史最前面
//!         2. 重置 RecordsState，取一次客户端快照
//!         3. current_page = Page::Records { key }
//!         4. backend.spawn_lookup(key)        // 结果稍后通过通道回到 records::update
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 定时器（Tick）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主循环每一轮都会发送 AppMessage::Tick(now)：
//!
//!         - 校验提示超过 5 秒自动消失
//!         - 复制成功的 ✓ 超过 2 秒消失
//!         - 结果页刷新共享客户端快照（初始化中 / 失败）
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod history;
mod records;
mod search;

use std::time::Instant;

use pkdns_lookup_core::services::validate_public_key;

use crate::message::AppMessage;
use crate::model::{App, FocusPanel, Page, RecordsState};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() && !app.current_page.is_detail_page() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
        }

        AppMessage::History(history_msg) => {
            history::update(app, history_msg);
        }

        AppMessage::Records(records_msg) => {
            records::update(app, records_msg);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else if app.current_page.is_detail_page() {
                // 如果在结果页，返回搜索页
                go_to_search(app);
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::CloseModal => {
            app.modal.close();
        }

        AppMessage::Tick(now) => {
            handle_tick(app, now);
        }

        AppMessage::Noop => {}
    }
}

/// 打开公钥的结果页并在后台查询
///
/// 合法公钥统一为小写后写入历史，命令行传入的非法公钥照常查询并显示为空结果。
pub fn open_records(app: &mut App, key: String) {
    let key = match validate_public_key(&key) {
        Ok(key) => {
            app.backend.history().record_visit(&key);
            app.reload_history();
            key
        }
        Err(_) => key,
    };

    app.records = RecordsState::new();
    app.records.client = app.backend.client_snapshot();
    app.current_page = Page::Records { key: key.clone() };
    app.clear_status();

    log::info!("Looking up {key}");
    app.backend.spawn_lookup(key);
}

/// 返回搜索页
fn go_to_search(app: &mut App) {
    app.current_page = Page::Search;
    app.records = RecordsState::new();
    app.focus = FocusPanel::Input;
    app.clear_status();
}

fn handle_tick(app: &mut App, now: Instant) {
    if app.search.alert_expired(now) {
        app.search.dismiss_alert();
    }

    app.records.expire_copied(now);

    if app.current_page.is_detail_page() {
        app.records.client = app.backend.client_snapshot();
    }
}
