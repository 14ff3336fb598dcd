//! Composition root: the portfolio plus every widget on the page.

use serde::{Deserialize, Serialize};

use crate::chart::{AllocationChart, PerformanceChart, RiskPanel};
use crate::mock::{mock_portfolio, performance_series};
use crate::types::Portfolio;

/// Sidebar navigation entries. Purely cosmetic: the rendered widgets are the
/// same whichever section is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Analytics,
    Activity,
    Settings,
}

impl Section {
    pub const OPTIONS: [Section; 4] = [
        Section::Dashboard,
        Section::Analytics,
        Section::Activity,
        Section::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Analytics => "Analytics",
            Section::Activity => "Activity",
            Section::Settings => "Settings",
        }
    }
}

/// The dashboard page.
#[derive(Debug, Clone)]
pub struct Dashboard {
    portfolio: Portfolio,
    active_section: Section,
    pub performance: PerformanceChart,
    pub allocation: AllocationChart,
    pub risk: RiskPanel,
}

impl Dashboard {
    /// Build the page from the mock portfolio.
    pub fn new() -> Self {
        Self::with_portfolio(mock_portfolio())
    }

    pub fn with_portfolio(portfolio: Portfolio) -> Self {
        Self {
            allocation: AllocationChart::new(&portfolio.stocks),
            performance: PerformanceChart::new(performance_series()),
            risk: RiskPanel::new(),
            active_section: Section::default(),
            portfolio,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn select_section(&mut self, section: Section) {
        self.active_section = section;
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dashboard() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.active_section(), Section::Dashboard);
        assert_eq!(dashboard.portfolio().stocks.len(), 5);
        assert_eq!(dashboard.allocation.slices().len(), 5);
        assert_eq!(dashboard.performance.displayed().len(), 9);
    }

    #[test]
    fn test_section_is_cosmetic() {
        let mut dashboard = Dashboard::new();
        let before = dashboard.portfolio().clone();
        dashboard.select_section(Section::Analytics);

        assert_eq!(dashboard.active_section(), Section::Analytics);
        assert_eq!(dashboard.portfolio(), &before);
    }
}
