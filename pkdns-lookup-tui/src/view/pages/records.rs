//! 记录结果页视图

use chrono::{DateTime, Local, Utc};
use pkdns_lookup_core::types::{DisplayRecord, PageView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::state::SKELETON_ROWS;
use crate::model::App;
use crate::view::theme::{badge_color, colors, Styles};

/// 压缩后结果包的大小上限（字节）
const MAX_PACKET_SIZE: usize = 1000;

/// 表格列宽：NAME / TYPE / VALUE / TTL
const COLUMN_WIDTHS: [Constraint; 4] = [
    Constraint::Percentage(25),
    Constraint::Length(7),
    Constraint::Min(20),
    Constraint::Length(8),
];

/// 渲染结果页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // 记录表格
            Constraint::Length(1), // 页脚
        ])
        .split(area);

    match app.records.view() {
        PageView::ClientInitializing | PageView::Loading => render_skeleton(frame, layout[0]),
        PageView::ClientError { message } => render_client_error(frame, layout[0], &message),
        PageView::Empty => render_empty(frame, layout[0]),
        PageView::Populated {
            rows,
            last_updated,
            compressed_size,
        } => {
            render_table(app, frame, layout[0], &rows);
            render_footer(frame, layout[1], last_updated, compressed_size);
        }
    }
}

/// 表头
fn header_row() -> Row<'static> {
    let texts = t();
    let style = Style::default()
        .fg(colors().muted)
        .add_modifier(Modifier::BOLD);

    Row::new([
        texts.records.col_name,
        texts.records.col_type,
        texts.records.col_value,
        texts.records.col_ttl,
    ])
    .style(style)
    .bottom_margin(1)
}

/// 渲染加载中的骨架行
fn render_skeleton(frame: &mut Frame, area: Rect) {
    let c = colors();
    let style = Style::default().fg(c.skeleton);

    let rows = (0..SKELETON_ROWS).map(|i| {
        // 行宽交错，看起来更像真实数据
        let value_width = if i % 2 == 0 { 28 } else { 18 };
        Row::new([
            Cell::from("▆".repeat(10)),
            Cell::from("▆".repeat(4)),
            Cell::from("▆".repeat(value_width)),
            Cell::from("▆".repeat(4)),
        ])
        .style(style)
    });

    let table = Table::new(rows, COLUMN_WIDTHS).header(header_row());
    frame.render_widget(table, area);
}

/// 渲染客户端错误面板
fn render_client_error(frame: &mut Frame, area: Rect, message: &str) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.records.client_error_title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error));

    let content = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(texts.records.retry_hint, Style::default().fg(c.warning)),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", t().records.no_records),
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染记录表格
fn render_table(app: &App, frame: &mut Frame, area: Rect, records: &[DisplayRecord]) {
    let c = colors();

    let rows = records.iter().map(|record| {
        // 类型徽标使用每种记录类型的配色
        let badge = Span::styled(
            format!(" {} ", record.record_type),
            Style::default()
                .bg(badge_color(&record.record_type))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        Row::new([
            Cell::from(record.name.clone()).style(Style::default().fg(c.fg)),
            Cell::from(Line::from(badge)),
            Cell::from(record.value.clone()).style(Style::default().fg(c.fg)),
            Cell::from(record.ttl.to_string()).style(Style::default().fg(c.muted)),
        ])
    });

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header_row())
        .row_highlight_style(Styles::selected());

    let mut state = TableState::default();
    state.select(Some(app.records.selected));

    frame.render_stateful_widget(table, area, &mut state);
}

/// 渲染页脚：最后更新时间与压缩大小
fn render_footer(
    frame: &mut Frame,
    area: Rect,
    last_updated: Option<DateTime<Utc>>,
    compressed_size: Option<usize>,
) {
    let texts = t();
    let c = colors();

    let line = Line::from(vec![
        Span::styled(
            format!(" {}: ", texts.records.last_updated),
            Style::default().fg(c.muted),
        ),
        Span::styled(format_last_updated(last_updated), Style::default().fg(c.fg)),
        Span::styled(" │ ", Style::default().fg(c.border)),
        Span::styled(
            format!("{}: ", texts.records.compressed_size),
            Style::default().fg(c.muted),
        ),
        Span::styled(format_size(compressed_size), Style::default().fg(c.fg)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// 本地时间
fn format_last_updated(last_updated: Option<DateTime<Utc>>) -> String {
    last_updated.map_or_else(
        || "-".to_string(),
        |time| {
            time.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        },
    )
}

fn format_size(compressed_size: Option<usize>) -> String {
    compressed_size.map_or_else(
        || "-".to_string(),
        |size| format!("{size}/{MAX_PACKET_SIZE} bytes"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_formatting() {
        assert_eq!(format_size(Some(187)), "187/1000 bytes");
        assert_eq!(format_size(None), "-");
        assert_eq!(format_last_updated(None), "-");
        assert_eq!(format_last_updated(DateTime::from_timestamp(0, 0)).len(), 19);
    }
}
