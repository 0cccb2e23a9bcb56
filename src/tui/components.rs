use ratatui::{
    Frame,
    prelude::*,
    style::Style,
    symbols,
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::CLOSE_LABEL;
use crate::{dialog::DialogState, panel::TabPanel, theme::Palette, types::TabId};

const KEY_HINTS: &str = "Esc/q close • Tab/←/→ switch tab • 1-6 jump • ↑/↓ scroll";

pub fn render_close_bar(frame: &mut Frame, area: Rect, palette: &Palette) -> Rect {
    let width = (CLOSE_LABEL.width() as u16).min(area.width);
    let button = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height.min(1),
    };
    let label = Paragraph::new(CLOSE_LABEL)
        .style(Style::default().fg(palette.muted).add_modifier(Modifier::BOLD));
    frame.render_widget(label, button);
    button
}

pub fn render_tab_strip(
    frame: &mut Frame,
    area: Rect,
    active: TabId,
    palette: &Palette,
) -> Vec<(Rect, TabId)> {
    let titles: Vec<Line> = TabId::ALL
        .iter()
        .map(|tab| Line::from(tab.title()))
        .collect();

    let block = base_block("", palette);
    let inner = block.inner(area);
    let tabs = Tabs::new(titles)
        .block(block)
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .divider(symbols::line::VERTICAL)
        .select(active.index());
    frame.render_widget(tabs, area);

    tab_regions(inner)
}

// Tabs pads each title with one space per side and a one-column divider.
fn tab_regions(inner: Rect) -> Vec<(Rect, TabId)> {
    let mut regions = Vec::with_capacity(TabId::ALL.len());
    let right_edge = inner.x.saturating_add(inner.width);
    let mut x = inner.x;
    for tab in TabId::ALL {
        if x >= right_edge || inner.height == 0 {
            break;
        }
        let span = (tab.title().width() as u16 + 2).min(right_edge - x);
        regions.push((
            Rect {
                x,
                y: inner.y,
                width: span,
                height: 1,
            },
            tab,
        ));
        x = x.saturating_add(span + 1);
    }
    regions
}

pub fn render_panel(frame: &mut Frame, area: Rect, dialog: &DialogState, palette: &Palette) {
    let panel = TabPanel::for_tab(dialog.active_tab());
    let tab = panel.tab();
    let lines = vec![
        Line::styled(panel.placeholder(), Style::default().fg(palette.text)),
        Line::default(),
        Line::styled("Nothing to show yet.", Style::default().fg(palette.muted)),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((dialog.panel(tab).scroll, 0))
        .block(base_block(tab.title(), palette));
    frame.render_widget(paragraph, area);
}

pub fn render_key_hints(frame: &mut Frame, area: Rect, palette: &Palette) {
    let hint = Paragraph::new(KEY_HINTS)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Right);
    frame.render_widget(hint, area);
}

fn base_block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(title)
        .title_style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
}

pub fn fit_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
