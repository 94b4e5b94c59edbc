//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, HistoryMessage, RecordsMessage, SearchMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Paste(text) => handle_paste(text, app),             // 括号粘贴
        _ => AppMessage::Noop, // 终端窗口大小改变等，下一帧自动重绘
    }
}

/// 处理粘贴事件
fn handle_paste(text: String, app: &App) -> AppMessage {
    if app.modal.is_open() {
        return AppMessage::Noop;
    }

    match &app.current_page {
        Page::Search if app.history.is_editing() => {
            AppMessage::History(HistoryMessage::TagPaste(text))
        }
        Page::Search => AppMessage::Search(SearchMessage::Paste(text)),
        Page::Records { .. } => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    // 根据当前页面处理按键
    match &app.current_page {
        Page::Search => handle_search_page_keys(key, app),
        Page::Records { .. } => handle_records_keys(key),
    }
}

/// 是否是普通文本输入（允许 Shift 输入大写字母和符号）
fn is_text_input(key: &KeyEvent) -> bool {
    key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT
}

/// 处理搜索页的按键
fn handle_search_page_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 标签编辑中，按键全部交给编辑器
    if app.history.is_editing() {
        return handle_tag_editor_keys(key);
    }

    if DefaultKeymap::FOCUS_SEARCH.matches(&key) {
        return AppMessage::Search(SearchMessage::Focus);
    }
    if DefaultKeymap::PASTE.matches(&key) {
        return AppMessage::Search(SearchMessage::PasteFromClipboard);
    }

    // Tab: 切换焦点面板
    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_input() {
        handle_input_keys(key)
    } else {
        handle_history_keys(key, app)
    }
}

/// 处理输入框的按键
fn handle_input_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Search(SearchMessage::Submit);
    }

    match key.code {
        // Backspace: 删除
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),
        // Esc: 离开输入框并清除错误
        KeyCode::Esc => AppMessage::Search(SearchMessage::Blur),
        // 字符输入（包括 ? 和 x）
        KeyCode::Char(c) if is_text_input(&key) => AppMessage::Search(SearchMessage::Input(c)),
        _ => AppMessage::Noop,
    }
}

/// 处理历史面板的按键
fn handle_history_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::EDIT_TAG.matches(&key) {
        return AppMessage::History(HistoryMessage::EditTag);
    }
    if DefaultKeymap::REMOVE.matches(&key) {
        return AppMessage::History(HistoryMessage::Remove);
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::History(HistoryMessage::Open);
    }

    // Esc 或 x: 关闭校验提示
    if DefaultKeymap::BACK.matches(&key)
        || (DefaultKeymap::DISMISS_ALERT.matches(&key) && app.search.alert.is_some())
    {
        return AppMessage::Search(SearchMessage::DismissAlert);
    }

    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::History(HistoryMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::History(HistoryMessage::SelectNext),
        // ?: 帮助
        KeyCode::Char('?') => AppMessage::ShowHelp,
        _ => AppMessage::Noop,
    }
}

/// 处理标签编辑器的按键
fn handle_tag_editor_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter => AppMessage::History(HistoryMessage::SaveTag),
        KeyCode::Esc => AppMessage::History(HistoryMessage::CancelEdit),
        KeyCode::Backspace => AppMessage::History(HistoryMessage::TagBackspace),
        KeyCode::Char(c) if is_text_input(&key) => AppMessage::History(HistoryMessage::TagInput(c)),
        _ => AppMessage::Noop,
    }
}

/// 处理结果页的按键
fn handle_records_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::COPY_LINK.matches(&key) {
        return AppMessage::Records(RecordsMessage::CopyShareLink);
    }
    if DefaultKeymap::RETRY.matches(&key) {
        return AppMessage::Records(RecordsMessage::Retry);
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::NAV_UP.matches(&key) || key.code == KeyCode::Char('k') {
        return AppMessage::Records(RecordsMessage::SelectPrevious);
    }
    if DefaultKeymap::NAV_DOWN.matches(&key) || key.code == KeyCode::Char('j') {
        return AppMessage::Records(RecordsMessage::SelectNext);
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => AppMessage::ShowHelp,
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    // Esc、Enter、? 和 Ctrl+C 都可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c'))
        | (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Enter)
        | (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => AppMessage::CloseModal,
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;
    use crate::test_utils::{create_app, MockResolverFactory, SAMPLE_KEY};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn alt(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT))
    }

    #[tokio::test]
    async fn test_typing_question_mark_in_input_is_text() {
        let (app, _rx) = create_app(MockResolverFactory::new());
        assert!(matches!(
            handle_event(press(KeyCode::Char('?')), &app),
            AppMessage::Search(SearchMessage::Input('?'))
        ));
    }

    #[tokio::test]
    async fn test_history_panel_keys() {
        let (mut app, _rx) = create_app(MockResolverFactory::new());
        app.focus = FocusPanel::History;

        assert!(matches!(
            handle_event(press(KeyCode::Char('?')), &app),
            AppMessage::ShowHelp
        ));
        assert!(matches!(
            handle_event(alt('t'), &app),
            AppMessage::History(HistoryMessage::EditTag)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::History(HistoryMessage::Open)
        ));
        // 没有提示时 x 不做任何事
        assert!(matches!(
            handle_event(press(KeyCode::Char('x')), &app),
            AppMessage::Noop
        ));
    }

    #[tokio::test]
    async fn test_global_shortcuts() {
        let (app, _rx) = create_app(MockResolverFactory::new());
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(ctrl_c, &app), AppMessage::Quit));
        assert!(matches!(handle_event(alt('q'), &app), AppMessage::Quit));
        assert!(matches!(handle_event(alt('h'), &app), AppMessage::ShowHelp));
        let ctrl_k = Event::Key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert!(matches!(
            handle_event(ctrl_k, &app),
            AppMessage::Search(SearchMessage::Focus)
        ));
    }

    #[tokio::test]
    async fn test_records_page_keys() {
        let (mut app, _rx) = create_app(MockResolverFactory::new());
        app.current_page = Page::Records {
            key: SAMPLE_KEY.to_string(),
        };

        assert!(matches!(
            handle_event(alt('c'), &app),
            AppMessage::Records(RecordsMessage::CopyShareLink)
        ));
        assert!(matches!(
            handle_event(alt('r'), &app),
            AppMessage::Records(RecordsMessage::Retry)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::GoBack
        ));
        assert!(matches!(
            handle_event(Event::Paste("x".into()), &app),
            AppMessage::Noop
        ));
    }

    #[tokio::test]
    async fn test_paste_goes_to_tag_editor_while_editing() {
        let (mut app, _rx) = create_app(MockResolverFactory::new());
        assert!(matches!(
            handle_event(Event::Paste(SAMPLE_KEY.into()), &app),
            AppMessage::Search(SearchMessage::Paste(_))
        ));

        app.backend.history().record_visit(SAMPLE_KEY);
        app.reload_history();
        app.history.begin_edit();
        assert!(matches!(
            handle_event(Event::Paste("work".into()), &app),
            AppMessage::History(HistoryMessage::TagPaste(_))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::History(HistoryMessage::CancelEdit)
        ));
    }

    #[tokio::test]
    async fn test_release_events_are_ignored() {
        let (app, _rx) = create_app(MockResolverFactory::new());
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
