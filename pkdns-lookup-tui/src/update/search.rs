//! 搜索页更新逻辑

use std::time::Instant;

use pkdns_lookup_core::services::validate_public_key;

use crate::i18n::t;
use crate::message::SearchMessage;
use crate::model::{App, FocusPanel};

/// 处理搜索页消息
pub fn update(app: &mut App, msg: SearchMessage) {
    match msg {
        SearchMessage::Focus => {
            app.focus = FocusPanel::Input;
            app.history.editor = None;
        }
        SearchMessage::Blur => {
            app.focus = FocusPanel::History;
            app.search.error = None;
            app.search.dismiss_alert();
        }
        SearchMessage::Input(c) => {
            app.search.push_char(c);
        }
        SearchMessage::Backspace => {
            app.search.backspace();
        }
        SearchMessage::Submit => {
            handle_submit(app, Instant::now());
        }
        SearchMessage::Paste(text) => {
            app.focus = FocusPanel::Input;
            app.search.paste(&text);
        }
        SearchMessage::PasteFromClipboard => {
            handle_clipboard_paste(app);
        }
        SearchMessage::DismissAlert => {
            app.search.dismiss_alert();
        }
    }
}

/// 校验输入，通过则打开结果页
fn handle_submit(app: &mut App, now: Instant) {
    match validate_public_key(&app.search.input) {
        Ok(key) => {
            app.search.clear_input();
            app.search.dismiss_alert();
            super::open_records(app, key);
        }
        Err(e) => {
            log::debug!("Rejected search input: {e}");
            app.search.show_error(e.to_string(), now);
        }
    }
}

/// 用剪贴板内容替换输入框
fn handle_clipboard_paste(app: &mut App) {
    match app.backend.read_clipboard() {
        Ok(text) => {
            app.focus = FocusPanel::Input;
            app.search.replace_input(&text);
        }
        Err(e) => {
            log::warn!("Clipboard read failed: {e}");
            app.set_status(t().search.paste_failed);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::model::Page;
    use crate::test_utils::{
        create_app, create_app_with_clipboard, MemoryClipboard, MockResolverFactory, OTHER_KEY,
        SAMPLE_KEY,
    };

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, SearchMessage::Input(c));
        }
    }

    #[tokio::test]
    async fn test_invalid_search_shows_alert() {
        let (mut app, _rx) = create_app(MockResolverFactory::new());

        update(&mut app, SearchMessage::Submit);
        assert_eq!(
            app.search.alert.as_ref().map(|a| a.message.as_str()),
            Some("Please enter a public key")
        );

        type_text(&mut app, "abc");
        update(&mut app, SearchMessage::Submit);
        assert_eq!(
            app.search.error.as_deref(),
            Some("Public key must be exactly 52 characters long")
        );
        assert_eq!(app.current_page, Page::Search);
        assert!(app.history.entries.is_empty());
    }

    #[tokio::test]
    async fn test_valid_search_navigates_and_records_visit() {
        let (mut app, _rx) = create_app(MockResolverFactory::new());
        type_text(&mut app, &format!("  {SAMPLE_KEY} "));

        update(&mut app, SearchMessage::Submit);
        assert_eq!(app.current_page.key(), Some(SAMPLE_KEY));
        assert!(app.search.input.is_empty());
        assert!(app.search.alert.is_none());
        assert_eq!(app.backend.history().list().entries()[0].key, SAMPLE_KEY);
    }

    #[tokio::test]
    async fn test_blur_clears_error_and_alert() {
        let (mut app, _rx) = create_app(MockResolverFactory::new());
        update(&mut app, SearchMessage::Submit);
        assert!(app.search.error.is_some());

        update(&mut app, SearchMessage::Blur);
        assert!(app.search.error.is_none());
        assert!(app.search.alert.is_none());
        assert_eq!(app.focus, FocusPanel::History);
    }

    #[tokio::test]
    async fn test_paste_from_clipboard_replaces_input() {
        let clipboard = Arc::new(MemoryClipboard::with_text(&format!("{OTHER_KEY}\n")));
        let (mut app, _rx) = create_app_with_clipboard(MockResolverFactory::new(), clipboard);
        type_text(&mut app, "old");

        update(&mut app, SearchMessage::PasteFromClipboard);
        assert_eq!(app.search.input, OTHER_KEY);
        assert!(app.status_message.is_none());
    }

    #[tokio::test]
    async fn test_clipboard_failure_goes_to_status_bar() {
        let clipboard = Arc::new(MemoryClipboard::broken());
        let (mut app, _rx) = create_app_with_clipboard(MockResolverFactory::new(), clipboard);

        update(&mut app, SearchMessage::PasteFromClipboard);
        assert_eq!(app.status_message.as_deref(), Some(t().search.paste_failed));
        assert!(app.search.input.is_empty());
    }

    #[tokio::test]
    async fn test_terminal_paste_appends() {
        let (mut app, _rx) = create_app(MockResolverFactory::new());
        app.focus = FocusPanel::History;
        type_text(&mut app, "c6en");

        update(&mut app, SearchMessage::Paste("34wj\n".to_string()));
        assert_eq!(app.search.input, "c6en34wj");
        assert_eq!(app.focus, FocusPanel::Input);
    }
}
