use std::{
    io::{self, Stdout},
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::runtime::Runtime;
use tracing::{info, instrument, warn};

use crate::{
    config::AppConfig,
    dialog::{DialogEvent, DialogState},
    logging,
    provider::{SummaryProvider, build_provider},
    theme::Palette,
    tui::{self, HitRegions},
    types::{StockSummary, SummaryError, TabId},
};

pub struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = AppConfig::load()?;
        logging::init(config.log_file.as_deref())?;
        info!(symbol = %config.symbol, provider = ?config.provider, "starting screener");

        let provider = build_provider(&config)?;
        let runtime = Runtime::new().context("failed to start async runtime")?;
        let state = runtime.block_on(AppState::load(provider.as_ref(), &config))?;
        info!(dark = state.palette.is_dark, tab = %config.initial_tab, "dialog opened");

        Ok(Self::with_state(state))
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let tick_rate = Duration::from_millis(150);

        loop {
            let mut regions = HitRegions::default();
            terminal.draw(|frame| regions = tui::draw(frame, &self.state))?;
            self.state.regions = regions;

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                let event = event::read()?;
                self.handle_event(event);
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
        self.dispatch_dialog_events();
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let dialog = &mut self.state.dialog;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') => {
                dialog.close();
            }
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                dialog.next_tab();
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                dialog.prev_tab();
            }
            KeyCode::Char(ch @ '1'..='6') => {
                let index = ch as usize - '1' as usize;
                if let Some(tab) = TabId::from_index(index) {
                    dialog.select_tab(tab);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => dialog.scroll_active(-1),
            KeyCode::Down | KeyCode::Char('j') => dialog.scroll_active(1),
            KeyCode::PageUp => dialog.scroll_active(-5),
            KeyCode::PageDown => dialog.scroll_active(5),
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let regions = &self.state.regions;
                if regions.is_close(mouse.column, mouse.row) {
                    self.state.dialog.close();
                } else if let Some(tab) = regions.tab_at(mouse.column, mouse.row) {
                    self.state.dialog.select_tab(tab);
                }
            }
            MouseEventKind::ScrollUp => self.state.dialog.scroll_active(-1),
            MouseEventKind::ScrollDown => self.state.dialog.scroll_active(1),
            _ => {}
        }
    }

    fn dispatch_dialog_events(&mut self) {
        for event in self.state.dialog.take_events() {
            match event {
                DialogEvent::Closed => {
                    info!("summary dialog closed");
                    self.should_quit = true;
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    // fetched once when the view opens, never refreshed
    pub summary: Option<StockSummary>,
    pub dialog: DialogState,
    pub palette: Palette,
    pub regions: HitRegions,
}

impl AppState {
    #[instrument(skip_all, fields(symbol = %config.symbol, provider = provider.name()))]
    pub async fn load(provider: &dyn SummaryProvider, config: &AppConfig) -> Result<Self> {
        let summary = provider
            .fetch(&config.symbol)
            .await
            .with_context(|| format!("failed to load summary for {}", config.symbol))?;

        if summary.is_none() {
            let error = SummaryError::Missing(config.symbol.clone());
            warn!(%error, "showing placeholder instead of metrics");
        }

        Ok(Self {
            summary,
            dialog: DialogState::open(config.symbol.clone(), config.initial_tab),
            palette: config.theme.resolve(),
            regions: HitRegions::default(),
        })
    }
}
