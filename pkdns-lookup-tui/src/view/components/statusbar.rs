//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 复制成功的 ✓
    if app.current_page.is_detail_page() && app.records.show_copied() {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            t().hints.actions.copied,
            Style::default()
                .fg(colors().success)
                .add_modifier(Modifier::BOLD),
        ));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let mut hints = Vec::new();

    match &app.current_page {
        Page::Search if app.history.is_editing() => {
            hints.push((keys.enter, actions.save));
            hints.push((keys.esc, actions.cancel));
        }
        Page::Search => match app.focus {
            FocusPanel::Input => {
                hints.push((keys.enter, actions.resolve));
                hints.push(("Alt+v", actions.paste));
                hints.push((keys.esc, actions.blur));
                hints.push((keys.tab, actions.switch_panel));
            }
            FocusPanel::History => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.enter, actions.open));
                hints.push(("Alt+t", actions.edit_tag));
                hints.push(("Alt+d", actions.remove));
                hints.push(("Ctrl+K", actions.focus_search));
                if app.search.alert.is_some() {
                    hints.push(("x", actions.dismiss));
                }
            }
        },
        Page::Records { .. } => {
            hints.push((keys.arrows_ud, actions.select));
            hints.push(("Alt+c", actions.copy_link));
            if app.backend.client_failed() {
                hints.push(("Alt+r", actions.retry));
            }
            hints.push((keys.esc, texts.common.back));
        }
    }

    hints.push(("Alt+h", texts.common.help));
    hints.push(("Alt+q", texts.common.quit));

    hints
}
