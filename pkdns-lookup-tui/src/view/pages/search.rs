//! 搜索页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n::t;
use crate::model::state::InputTone;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染搜索页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // 标题 + 标语
            Constraint::Length(1), // 校验提示
            Constraint::Length(3), // 输入框
            Constraint::Min(3),    // 公钥历史
        ])
        .split(area);

    render_heading(frame, layout[0]);
    render_alert(app, frame, layout[1]);
    render_input(app, frame, layout[2]);
    render_history(app, frame, layout[3]);
}

/// 渲染标题和标语
fn render_heading(frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let heading = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.search.heading),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", texts.search.tagline),
            Style::default().fg(c.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(heading), area);
}

/// 渲染输入框上方的校验提示
fn render_alert(app: &App, frame: &mut Frame, area: Rect) {
    let Some(alert) = &app.search.alert else {
        return;
    };
    let c = colors();

    let line = Line::from(vec![
        Span::styled(format!("  ⚠ {}", alert.message), Style::default().fg(c.error)),
        Span::styled(
            format!("  (x / Esc {})", t().hints.actions.dismiss),
            Style::default().fg(c.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// 渲染公钥输入框
fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focused = app.focus.is_input() && !app.modal.is_open() && !app.history.is_editing();

    let block = Block::default()
        .title(format!(" {} ", texts.search.input_title))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = &app.search.input;
    if input.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            texts.search.placeholder,
            Style::default().fg(c.muted),
        ));
        frame.render_widget(placeholder, inner);
    } else {
        // 灰色：尚不合法；白色：合法；红色：提交失败
        let color = match app.search.tone() {
            InputTone::Pending => c.muted,
            InputTone::Valid => c.fg,
            InputTone::Error => c.error,
        };
        let visible = visible_tail(input, usize::from(inner.width.saturating_sub(1)));
        frame.render_widget(
            Paragraph::new(Span::styled(visible, Style::default().fg(color))),
            inner,
        );
    }

    if focused {
        let visible = visible_tail(input, usize::from(inner.width.saturating_sub(1)));
        let offset = u16::try_from(visible.width()).unwrap_or(inner.width);
        frame.set_cursor_position((inner.x + offset, inner.y));
    }
}

/// 取能放进 `max_width` 列的末尾部分，光标始终可见
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = index;
    }
    &text[start..]
}

/// 渲染公钥历史面板
fn render_history(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focused = app.focus.is_history() && !app.modal.is_open();

    let block = Block::default()
        .title(format!(" {} ", texts.history.title))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !app.history.available {
        let message = Paragraph::new(Span::styled(
            format!("  {}", texts.history.unavailable),
            Style::default().fg(c.warning),
        ));
        frame.render_widget(message, inner);
        return;
    }

    if app.history.entries.is_empty() {
        let message = Paragraph::new(Span::styled(
            format!("  {}", texts.history.empty),
            Style::default().fg(c.muted),
        ));
        frame.render_widget(message, inner);
        return;
    }

    let items: Vec<ListItem> = app
        .history
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_selected = focused && i == app.history.selected;
            let key_style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            let mut spans = vec![
                Span::raw("  "),
                Span::styled(entry.key.as_str(), key_style),
            ];

            // 正在编辑的条目显示行内编辑器
            match &app.history.editor {
                Some(editor) if editor.key == entry.key => {
                    spans.push(Span::styled(
                        format!("  {}: ", texts.history.tag_label),
                        Style::default().fg(c.muted),
                    ));
                    spans.push(Span::styled(
                        format!("{}▎", editor.buffer),
                        Style::default()
                            .fg(c.highlight)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                _ if !entry.tag.is_empty() => {
                    spans.push(Span::styled(
                        format!("  [{}]", entry.tag),
                        Style::default().fg(c.success),
                    ));
                }
                _ => {}
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.history.selected));

    frame.render_stateful_widget(list, inner, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_tail_keeps_end_of_input() {
        assert_eq!(visible_tail("abcdef", 10), "abcdef");
        assert_eq!(visible_tail("abcdef", 3), "def");
        assert_eq!(visible_tail("", 3), "");
        // 宽字符占两列
        assert_eq!(visible_tail("a公钥", 4), "公钥");
    }
}
