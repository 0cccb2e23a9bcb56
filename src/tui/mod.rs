mod components;
mod summary;

use ratatui::{
    Frame,
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::{app::AppState, types::TabId};

const DIALOG_MAX_WIDTH: u16 = 120;
const CLOSE_LABEL: &str = "[ x ]";

/// Clickable areas from the last frame. Rebuilt on every draw.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HitRegions {
    pub close: Option<Rect>,
    pub tabs: Vec<(Rect, TabId)>,
}

impl HitRegions {
    pub fn is_close(&self, column: u16, row: u16) -> bool {
        self.close.is_some_and(|rect| contains(rect, column, row))
    }

    pub fn tab_at(&self, column: u16, row: u16) -> Option<TabId> {
        self.tabs
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, tab)| *tab)
    }
}

pub fn draw(frame: &mut Frame, state: &AppState) -> HitRegions {
    if !state.dialog.is_open() {
        return HitRegions::default();
    }

    let palette = &state.palette;
    let dialog_area = dialog_rect(frame.size());
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let summary_height = match &state.summary {
        Some(_) => summary::HEADER_HEIGHT + summary::metrics_height(inner.width),
        None => summary::HEADER_HEIGHT,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Close bar
            Constraint::Length(summary_height), // Header + metrics
            Constraint::Length(3),              // Tab strip
            Constraint::Min(0),                 // Active panel
            Constraint::Length(1),              // Key hints
        ])
        .split(inner);

    let close = components::render_close_bar(frame, rows[0], palette);

    match &state.summary {
        Some(summary) => summary::render_summary(frame, rows[1], summary, palette),
        None => {
            let symbol = state.dialog.selected_stock().unwrap_or_default();
            summary::render_missing(frame, rows[1], symbol, palette);
        }
    }

    let tabs = components::render_tab_strip(frame, rows[2], state.dialog.active_tab(), palette);
    components::render_panel(frame, rows[3], &state.dialog, palette);
    components::render_key_hints(frame, rows[4], palette);

    HitRegions {
        close: Some(close),
        tabs,
    }
}

fn dialog_rect(area: Rect) -> Rect {
    let width = area.width.min(DIALOG_MAX_WIDTH);
    let height = ((area.height as u32 * 9) / 10).max(1) as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height.min(area.height)) / 2,
        width,
        height: height.min(area.height),
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dialog::DialogState,
        theme::Palette,
        types::{StockSummary, sample_summary},
    };
    use ratatui::{Terminal, backend::TestBackend};

    fn state_with(summary: Option<StockSummary>) -> AppState {
        let symbol = summary.as_ref().map_or("ZZZZ", |s| s.symbol.as_str()).to_string();
        AppState {
            summary,
            dialog: DialogState::open(symbol, TabId::Overview),
            palette: Palette::dark(),
            regions: HitRegions::default(),
        }
    }

    fn render(state: &AppState, width: u16, height: u16) -> (String, HitRegions) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        let mut regions = HitRegions::default();
        terminal
            .draw(|frame| regions = draw(frame, state))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for row in 0..buffer.area.height {
            for col in 0..buffer.area.width {
                text.push_str(buffer.get(col, row).symbol());
            }
            text.push('\n');
        }
        (text, regions)
    }

    #[test]
    fn dialog_is_centered_and_capped() {
        let rect = dialog_rect(Rect::new(0, 0, 200, 50));
        assert_eq!(rect.width, DIALOG_MAX_WIDTH);
        assert_eq!(rect.x, 40);
        assert_eq!(rect.height, 45);
        assert_eq!(rect.y, 2);
    }

    #[test]
    fn renders_header_and_metrics() {
        let state = state_with(Some(sample_summary()));
        let (text, _) = render(&state, 110, 40);
        for needle in [
            "AAPL",
            "Technology",
            "Apple Inc.",
            "$150.75",
            "+5.25 (3.50%)",
            "$2500.0B",
            "30.5",
            "1.25%",
            "1200.0M",
            CLOSE_LABEL,
        ] {
            assert!(text.contains(needle), "missing {needle}:\n{text}");
        }
    }

    fn row_of(text: &str, needle: &str) -> Option<usize> {
        text.lines().position(|line| line.contains(needle))
    }

    #[test]
    fn wide_grid_keeps_metrics_on_one_row() {
        let state = state_with(Some(sample_summary()));
        let (text, _) = render(&state, 110, 40);
        let row = row_of(&text, "$2500.0B").expect("market cap");
        assert_eq!(row_of(&text, "1200.0M"), Some(row));
    }

    #[test]
    fn narrow_grid_folds_metrics_into_two_rows() {
        let state = state_with(Some(sample_summary()));
        let (text, _) = render(&state, 60, 40);
        for needle in ["$2500.0B", "30.5", "1.25%", "1200.0M", "+5.25 (3.50%)"] {
            assert!(text.contains(needle), "missing {needle}:\n{text}");
        }
        let top = row_of(&text, "$2500.0B").expect("market cap");
        assert_eq!(row_of(&text, "30.5"), Some(top));
        let bottom = row_of(&text, "1.25%").expect("dividend yield");
        assert!(bottom > top, "grid should fold:\n{text}");
        assert_eq!(row_of(&text, "1200.0M"), Some(bottom));
    }

    #[test]
    fn renders_every_tab_title_but_only_active_panel() {
        let state = state_with(Some(sample_summary()));
        let (text, _) = render(&state, 110, 40);
        for tab in TabId::ALL {
            assert!(text.contains(tab.title()), "missing tab {tab}");
        }
        assert!(text.contains("90-day price chart"));
        assert!(!text.contains("moving averages"));
    }

    #[test]
    fn missing_summary_shows_placeholder() {
        let state = state_with(None);
        let (text, _) = render(&state, 110, 40);
        assert!(text.contains("No summary available for ZZZZ"), "{text}");
        assert!(!text.contains("Market Cap"));
        assert!(text.contains("Overview"));
    }

    #[test]
    fn hit_regions_cover_close_and_tabs() {
        let state = state_with(Some(sample_summary()));
        let (_, regions) = render(&state, 110, 40);
        let close = regions.close.expect("close region");
        assert!(regions.is_close(close.x, close.y));
        assert_eq!(regions.tabs.len(), 6);
        for (rect, tab) in &regions.tabs {
            assert_eq!(regions.tab_at(rect.x, rect.y), Some(*tab));
        }
        assert_eq!(regions.tab_at(0, 0), None);
    }

    #[test]
    fn closed_dialog_draws_nothing() {
        let mut state = state_with(Some(sample_summary()));
        state.dialog.close();
        let (text, regions) = render(&state, 110, 40);
        assert!(!text.contains("AAPL"));
        assert_eq!(regions, HitRegions::default());
    }
}
