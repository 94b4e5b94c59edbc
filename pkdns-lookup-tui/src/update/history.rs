//! 公钥历史面板更新逻辑

use crate::message::HistoryMessage;
use crate::model::App;

/// 处理历史面板消息
pub fn update(app: &mut App, msg: HistoryMessage) {
    match msg {
        // ========== 列表导航 ==========
        HistoryMessage::SelectPrevious => {
            app.history.select_previous();
        }
        HistoryMessage::SelectNext => {
            app.history.select_next();
        }
        HistoryMessage::Open => {
            if let Some(entry) = app.history.selected_entry() {
                let key = entry.key.clone();
                super::open_records(app, key);
            }
        }

        // ========== 标签编辑 ==========
        HistoryMessage::EditTag => {
            app.history.begin_edit();
        }
        HistoryMessage::TagInput(c) => {
            if let Some(editor) = app.history.editor.as_mut() {
                editor.buffer.push(c);
            }
        }
        HistoryMessage::TagPaste(text) => {
            if let Some(editor) = app.history.editor.as_mut() {
                editor
                    .buffer
                    .extend(text.chars().filter(|c| !c.is_control()));
            }
        }
        HistoryMessage::TagBackspace => {
            if let Some(editor) = app.history.editor.as_mut() {
                editor.buffer.pop();
            }
        }
        HistoryMessage::SaveTag => {
            handle_save_tag(app);
        }
        HistoryMessage::CancelEdit => {
            app.history.editor = None;
        }

        // ========== 删除 ==========
        HistoryMessage::Remove => {
            handle_remove(app);
        }
    }
}

fn handle_save_tag(app: &mut App) {
    let Some(editor) = app.history.editor.take() else {
        return;
    };

    app.backend
        .history()
        .set_tag(&editor.key, editor.buffer.trim());
    app.reload_history();
}

fn handle_remove(app: &mut App) {
    let Some(key) = app.history.selected_entry().map(|entry| entry.key.clone()) else {
        return;
    };

    app.backend.history().remove(&key);
    app.reload_history();
    log::debug!("Removed {key} from history");
}
