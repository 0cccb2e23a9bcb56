use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::components::fit_width;
use crate::{
    format::{self, Metric},
    theme::Palette,
    types::StockSummary,
};

pub const HEADER_HEIGHT: u16 = 4;
const METRIC_CELL_HEIGHT: u16 = 4;
// below this the metrics grid folds into 2x2
const WIDE_LAYOUT_MIN_WIDTH: u16 = 80;

pub fn metric_columns(width: u16) -> usize {
    if width >= WIDE_LAYOUT_MIN_WIDTH { 4 } else { 2 }
}

pub fn metrics_height(width: u16) -> u16 {
    let rows = 4 / metric_columns(width) as u16;
    rows * METRIC_CELL_HEIGHT
}

pub fn render_summary(frame: &mut Frame, area: Rect, summary: &StockSummary, palette: &Palette) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
        .split(area);

    render_header(frame, vertical[0], summary, palette);
    render_metrics(frame, vertical[1], &format::metrics(summary), palette);
}

fn render_header(frame: &mut Frame, area: Rect, summary: &StockSummary, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let badge = format!(" {} ", summary.sector);
    let name_width = columns[0].width as usize;
    let left = vec![
        Line::from(vec![
            Span::styled(
                summary.symbol.clone(),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                badge,
                Style::default().fg(palette.badge_fg).bg(palette.badge_bg),
            ),
        ]),
        Line::styled(
            fit_width(&summary.company, name_width),
            Style::default().fg(palette.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(left), columns[0]);

    let change = format::format_change(summary.change, summary.change_percent);
    let right = vec![
        Line::styled(
            format::format_price(summary.price),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            change.text,
            Style::default()
                .fg(palette.tone(change.tone))
                .add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), columns[1]);
}

fn render_metrics(frame: &mut Frame, area: Rect, metrics: &[Metric], palette: &Palette) {
    let columns = metric_columns(area.width);
    let row_count = metrics.len().div_ceil(columns);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(METRIC_CELL_HEIGHT); row_count])
        .split(area);

    for (row_area, chunk) in rows.iter().zip(metrics.chunks(columns)) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (cell, metric) in cells.iter().zip(chunk) {
            render_metric_cell(frame, *cell, metric, palette);
        }
    }
}

fn render_metric_cell(frame: &mut Frame, area: Rect, metric: &Metric, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));
    let width = block.inner(area).width as usize;
    let lines = vec![
        Line::styled(fit_width(metric.label, width), Style::default().fg(palette.muted)),
        Line::styled(
            fit_width(&metric.value, width),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_missing(frame: &mut Frame, area: Rect, symbol: &str, palette: &Palette) {
    let paragraph = Paragraph::new(format!("No summary available for {symbol}"))
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(paragraph, area);
}
