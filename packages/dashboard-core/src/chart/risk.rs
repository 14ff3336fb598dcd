//! Risk panel: tabbed findings list, bar strip and two headline counters.

use serde::{Deserialize, Serialize};

use crate::counter::CountAnimation;
use crate::mock::{risk_bars, risk_items};
use crate::types::{RiskBar, RiskItem};

/// Tabs along the top of the risk panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskTab {
    #[default]
    Results,
    AssetsScanned,
    ChecksPerformed,
}

impl RiskTab {
    pub const OPTIONS: [RiskTab; 3] = [
        RiskTab::Results,
        RiskTab::AssetsScanned,
        RiskTab::ChecksPerformed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskTab::Results => "Results",
            RiskTab::AssetsScanned => "Assets Scanned",
            RiskTab::ChecksPerformed => "Checks Performed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskEvent {
    Loaded,
    SelectTab(RiskTab),
    RowEnter(usize),
    RowLeave,
    BarEnter(usize),
    BarLeave,
}

/// Per-instance state of the risk panel.
#[derive(Debug, Clone)]
pub struct RiskPanel {
    items: Vec<RiskItem>,
    bars: Vec<RiskBar>,
    tab: RiskTab,
    hovered_row: Option<usize>,
    hovered_bar: Option<usize>,
    loaded: bool,
}

impl RiskPanel {
    /// Headline "total assets" counter.
    pub const TOTAL_ASSETS: CountAnimation = CountAnimation::from_millis(57985, 2500, 300);
    /// Headline "vulnerable assets" counter.
    pub const VULNERABLE_ASSETS: CountAnimation = CountAnimation::from_millis(28374, 2500, 600);

    pub fn new() -> Self {
        Self::with_data(risk_items(), risk_bars())
    }

    pub fn with_data(items: Vec<RiskItem>, bars: Vec<RiskBar>) -> Self {
        Self {
            items,
            bars,
            tab: RiskTab::default(),
            hovered_row: None,
            hovered_bar: None,
            loaded: false,
        }
    }

    pub fn handle(&mut self, event: RiskEvent) {
        match event {
            RiskEvent::Loaded => self.loaded = true,
            RiskEvent::SelectTab(tab) => self.tab = tab,
            RiskEvent::RowEnter(index) => {
                self.hovered_row = Some(index).filter(|&i| i < self.items.len())
            }
            RiskEvent::RowLeave => self.hovered_row = None,
            RiskEvent::BarEnter(index) => {
                self.hovered_bar = Some(index).filter(|&i| i < self.bars.len())
            }
            RiskEvent::BarLeave => self.hovered_bar = None,
        }
    }

    pub fn items(&self) -> &[RiskItem] {
        &self.items
    }

    pub fn bars(&self) -> &[RiskBar] {
        &self.bars
    }

    pub fn tab(&self) -> RiskTab {
        self.tab
    }

    pub fn hovered_row(&self) -> Option<usize> {
        self.hovered_row
    }

    pub fn hovered_bar(&self) -> Option<&RiskBar> {
        self.bars.get(self.hovered_bar?)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Largest bar value, used to scale the strip's axis.
    pub fn bar_ceiling(&self) -> u64 {
        self.bars.iter().map(|b| b.value).max().unwrap_or(0)
    }
}

impl Default for RiskPanel {
    fn default() -> Self {
        Self::new()
    }
}
