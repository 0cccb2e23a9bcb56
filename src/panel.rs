use crate::types::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabPanel {
    Overview,
    Charts,
    Financials,
    Technicals,
    Ownership,
    Similar,
}

impl TabPanel {
    pub fn for_tab(tab: TabId) -> Self {
        match tab {
            TabId::Overview => TabPanel::Overview,
            TabId::Charts => TabPanel::Charts,
            TabId::Financials => TabPanel::Financials,
            TabId::Technicals => TabPanel::Technicals,
            TabId::Ownership => TabPanel::Ownership,
            TabId::Similar => TabPanel::Similar,
        }
    }

    pub fn tab(self) -> TabId {
        match self {
            TabPanel::Overview => TabId::Overview,
            TabPanel::Charts => TabId::Charts,
            TabPanel::Financials => TabId::Financials,
            TabPanel::Technicals => TabId::Technicals,
            TabPanel::Ownership => TabId::Ownership,
            TabPanel::Similar => TabId::Similar,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            TabPanel::Overview => "Overview grid and 90-day price chart",
            TabPanel::Charts => "Price/volume chart with RSI",
            TabPanel::Financials => "Valuation, profitability and growth cards",
            TabPanel::Technicals => "Indicators and moving averages",
            TabPanel::Ownership => "Institutional owners and ownership stats",
            TabPanel::Similar => "Similar stock cards",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    pub scroll: u16,
}

impl PanelState {
    pub fn scroll_by(&mut self, delta: i16) {
        if delta < 0 {
            self.scroll = self.scroll.saturating_sub(delta.unsigned_abs());
        } else {
            self.scroll = self.scroll.saturating_add(delta as u16);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelSet {
    states: [PanelState; 6],
}

impl PanelSet {
    pub fn get(&self, tab: TabId) -> &PanelState {
        &self.states[tab.index()]
    }

    pub fn get_mut(&mut self, tab: TabId) -> &mut PanelState {
        &mut self.states[tab.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_maps_to_its_own_panel() {
        for tab in TabId::ALL {
            assert_eq!(TabPanel::for_tab(tab).tab(), tab);
            assert!(!TabPanel::for_tab(tab).placeholder().is_empty());
        }
    }

    #[test]
    fn scroll_saturates_at_top() {
        let mut state = PanelState::default();
        state.scroll_by(3);
        state.scroll_by(-5);
        assert_eq!(state.scroll, 0);
        state.scroll_by(4);
        state.scroll_by(-1);
        assert_eq!(state.scroll, 3);
    }

    #[test]
    fn panel_set_keeps_states_separate() {
        let mut panels = PanelSet::default();
        panels.get_mut(TabId::Charts).scroll_by(2);
        assert_eq!(panels.get(TabId::Charts).scroll, 2);
        assert_eq!(panels.get(TabId::Overview).scroll, 0);
    }
}
