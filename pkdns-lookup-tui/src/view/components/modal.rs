//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use pkdns_lookup_core::types::DNS_RECORD_CONFIGS;

use crate::i18n::t;
use crate::model::{App, Modal};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内边距后的区域
fn inner_rect(area: Rect, vertical: u16) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + vertical,
        area.width.saturating_sub(4),
        area.height.saturating_sub(vertical * 2),
    )
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(60, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(message, Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(t().common.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_rect(area, 2));
}

/// 帮助中的一行快捷键说明
fn shortcut<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

fn section(title: &str) -> Line<'_> {
    Line::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

/// 帮助弹窗的内容
fn help_lines() -> Vec<Line<'static>> {
    let texts = t();
    let help = &texts.help;
    let actions = &help.actions;

    let mut lines = vec![
        section(help.global_shortcuts),
        shortcut("Alt+h / ?", actions.help),
        shortcut("Alt+q", actions.quit),
        Line::from(""),
        section(help.search_shortcuts),
        shortcut("Ctrl+K", actions.focus_search),
        shortcut("Enter", actions.resolve),
        shortcut("Alt+v", actions.paste),
        shortcut("Esc", actions.blur),
        shortcut("Tab", actions.switch_panel),
        Line::from(""),
        section(help.history_shortcuts),
        shortcut("↑↓/jk", actions.move_up_down),
        shortcut("Enter", actions.open),
        shortcut("Alt+t", actions.edit_tag),
        shortcut("Alt+d", actions.remove),
        Line::from(""),
        section(help.records_shortcuts),
        shortcut("Alt+c", actions.copy_link),
        shortcut("Alt+r", actions.retry),
        shortcut("Esc", actions.back),
        Line::from(""),
        section(help.record_types),
    ];

    // 记录类型图例，颜色与结果表格中的徽章一致
    for config in &DNS_RECORD_CONFIGS {
        let (r, g, b) = config.badge_color;
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<10}", config.name),
                Style::default()
                    .fg(Color::Rgb(r, g, b))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(config.description, Style::default().fg(Color::White)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        help.close_hint,
        Style::default().fg(Color::DarkGray),
    ));
    lines
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let lines = help_lines();

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(52, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", t().help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner_rect(area, 1));
}
