//! Centralized application state
//!
//! The single source of truth for the running dashboard: the widget tree from
//! `dashboard-core`, the headline counters, the symbol search box and the
//! activity feed.

use chrono::{DateTime, Utc};
use dashboard_core::chart::RiskPanel;
use dashboard_core::{recent_activity, Activity, CountAnimation, CounterState, Dashboard};

use crate::api::SymbolMatch;

// ============================================================================
// Application State
// ============================================================================

/// Centralized application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub dashboard: Dashboard,

    // Headline counters
    pub total_assets: CounterState,
    pub vulnerable_assets: CounterState,

    // Search state
    pub search: SearchState,

    // Activity feed
    pub activity: Vec<Activity>,
}

impl AppState {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            dashboard: Dashboard::new(),
            total_assets: CounterState::default(),
            vulnerable_assets: CounterState::default(),
            search: SearchState::default(),
            activity: recent_activity(now),
        }
    }

    pub fn counter(&self, id: CounterId) -> CounterState {
        match id {
            CounterId::TotalAssets => self.total_assets,
            CounterId::VulnerableAssets => self.vulnerable_assets,
        }
    }

    pub fn set_counter(&mut self, id: CounterId, state: CounterState) {
        match id {
            CounterId::TotalAssets => self.total_assets = state,
            CounterId::VulnerableAssets => self.vulnerable_assets = state,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

// ============================================================================
// Counters
// ============================================================================

/// The animated counters shown on the risk panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterId {
    TotalAssets,
    VulnerableAssets,
}

impl CounterId {
    pub const ALL: [CounterId; 2] = [CounterId::TotalAssets, CounterId::VulnerableAssets];

    pub fn animation(&self) -> CountAnimation {
        match self {
            CounterId::TotalAssets => RiskPanel::TOTAL_ASSETS,
            CounterId::VulnerableAssets => RiskPanel::VULNERABLE_ASSETS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CounterId::TotalAssets => "Total assets",
            CounterId::VulnerableAssets => "Vulnerable assets",
        }
    }
}

// ============================================================================
// Search
// ============================================================================

/// Symbol search box.
///
/// Each submitted search gets a generation number; results are only applied
/// for the latest one, so a slow response never overwrites a newer search.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<SymbolMatch>,
    pub loading: bool,
    generation: u64,
}

impl SearchState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a search for the current query.
    ///
    /// Returns the generation to complete with, or `None` for a blank query.
    pub fn begin(&mut self) -> Option<u64> {
        if self.query.trim().is_empty() {
            return None;
        }
        self.generation += 1;
        self.loading = true;
        Some(self.generation)
    }

    /// Apply results for `generation`. Returns false if they were stale.
    pub fn complete(&mut self, generation: u64, results: Vec<SymbolMatch>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.results = results;
        self.loading = false;
        true
    }

    /// Drop any in-flight search so its response is ignored.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.loading = false;
    }
}
