use tracing::debug;

use crate::{
    panel::{PanelSet, PanelState},
    types::TabId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    Closed,
}

#[derive(Debug, Clone)]
pub struct DialogState {
    selected_stock: Option<String>,
    active_tab: TabId,
    visibility: Visibility,
    panels: PanelSet,
    events: Vec<DialogEvent>,
}

impl DialogState {
    pub fn open(symbol: impl Into<String>, initial_tab: TabId) -> Self {
        Self {
            selected_stock: Some(symbol.into()),
            active_tab: initial_tab,
            visibility: Visibility::Open,
            panels: PanelSet::default(),
            events: Vec::new(),
        }
    }

    pub fn selected_stock(&self) -> Option<&str> {
        self.selected_stock.as_deref()
    }

    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn panel(&self, tab: TabId) -> &PanelState {
        self.panels.get(tab)
    }

    pub fn select_tab(&mut self, tab: TabId) -> bool {
        if !self.is_open() || self.active_tab == tab {
            return false;
        }
        debug!(from = %self.active_tab, to = %tab, "tab selected");
        self.active_tab = tab;
        true
    }

    pub fn next_tab(&mut self) -> bool {
        self.select_tab(self.active_tab.next())
    }

    pub fn prev_tab(&mut self) -> bool {
        self.select_tab(self.active_tab.prev())
    }

    pub fn scroll_active(&mut self, delta: i16) {
        if self.is_open() {
            self.panels.get_mut(self.active_tab).scroll_by(delta);
        }
    }

    // Closed is terminal: a second call emits nothing.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        debug!(symbol = ?self.selected_stock, "dialog closed");
        self.selected_stock = None;
        self.visibility = Visibility::Closed;
        self.events.push(DialogEvent::Closed);
        true
    }

    pub fn take_events(&mut self) -> Vec<DialogEvent> {
        std::mem::take(&mut self.events)
    }
}
