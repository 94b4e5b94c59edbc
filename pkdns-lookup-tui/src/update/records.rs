//! 结果页更新逻辑
//!
//! 后台查询任务通过通道回传的消息也在这里处理。每条回传消息都带着公钥，
//! 与当前页面不一致时直接丢弃。

use std::time::Instant;

use pkdns_lookup_core::services::share_link;
use pkdns_lookup_core::types::LookupState;

use crate::i18n::t;
use crate::message::RecordsMessage;
use crate::model::App;

/// 处理结果页消息
pub fn update(app: &mut App, msg: RecordsMessage) {
    match msg {
        RecordsMessage::SelectPrevious => {
            app.records.select_previous();
        }
        RecordsMessage::SelectNext => {
            app.records.select_next();
        }
        RecordsMessage::CopyShareLink => {
            handle_copy_share_link(app, Instant::now());
        }
        RecordsMessage::Retry => {
            handle_retry(app);
        }

        // ========== 后台任务回传 ==========
        RecordsMessage::LookupStarted { key } => {
            if is_current(app, &key) {
                app.records.lookup = LookupState::Loading;
                app.records.client = app.backend.client_snapshot();
            } else {
                log::debug!("Discarding stale lookup start for {key}");
            }
        }
        RecordsMessage::LookupFinished { key, state } => {
            if is_current(app, &key) {
                handle_lookup_finished(app, state);
            } else {
                log::debug!("Discarding stale lookup result for {key}");
            }
        }
        RecordsMessage::ClientFailed { key } => {
            if is_current(app, &key) {
                app.records.client = app.backend.client_snapshot();
            }
        }
    }
}

/// 消息中的公钥是否仍是当前结果页的公钥
fn is_current(app: &App, key: &str) -> bool {
    app.current_page.key() == Some(key)
}

fn handle_lookup_finished(app: &mut App, state: LookupState) {
    // 解析错误不阻塞页面，只在状态栏提示
    if let Some(diagnostic) = state.diagnostic() {
        app.set_status(diagnostic.to_string());
    }
    app.records.finish(state);
    app.records.client = app.backend.client_snapshot();
}

fn handle_copy_share_link(app: &mut App, now: Instant) {
    let Some(key) = app.current_page.key() else {
        return;
    };

    let link = share_link(&app.share_base_url, key);
    match app.backend.write_clipboard(&link) {
        Ok(()) => {
            log::debug!("Copied share link {link}");
            app.records.mark_copied(now);
        }
        Err(e) => {
            log::warn!("Clipboard write failed: {e}");
            app.set_status(t().records.copy_failed);
        }
    }
}

/// 客户端失败时重建客户端，否则重新查询
fn handle_retry(app: &mut App) {
    let Some(key) = app.current_page.key().map(str::to_string) else {
        return;
    };

    app.records.finish(LookupState::Idle);
    app.clear_status();

    if app.backend.client_failed() {
        log::info!("Rebuilding pkarr client");
        app.backend.spawn_retry(key);
    } else {
        app.backend.spawn_lookup(key);
    }
    app.records.client = app.backend.client_snapshot();
}
