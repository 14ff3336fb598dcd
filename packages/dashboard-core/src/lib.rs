//! Dashboard Core - Portfolio data and widget interaction state.
//!
//! This crate holds everything about the finance dashboard that does not
//! need a clock or a network:
//!
//! - **Data model**: portfolio, holdings, series points, risk findings
//! - **Mock data**: deterministic stand-ins for a real data source
//! - **Counters**: eased count-up math sampled by an external driver
//! - **Charts**: hover, zoom and toggle state machines per widget
//! - **Formatting**: currency, counts, percentages, relative times
//!
//! # Example
//!
//! ```rust
//! use dashboard_core::chart::PerformanceEvent;
//! use dashboard_core::Dashboard;
//!
//! let mut dashboard = Dashboard::new();
//! dashboard.performance.handle(PerformanceEvent::ToggleZoomMode);
//! dashboard.performance.handle(PerformanceEvent::ZoomPointerDown(0.1));
//! dashboard.performance.handle(PerformanceEvent::ZoomPointerMove(0.4));
//! dashboard.performance.handle(PerformanceEvent::ZoomPointerUp);
//!
//! assert_eq!(dashboard.performance.displayed().len(), 5);
//! ```

pub mod chart;
pub mod counter;
pub mod dashboard;
pub mod format;
pub mod mock;
pub mod types;

// Re-export commonly used types
pub use types::{
    Activity, ApiResponse, BarTone, Portfolio, RiskBar, RiskItem, RiskLevel, SeriesPoint, Stock,
};

pub use counter::{ease_out_cubic, CountAnimation, CounterState, FRAME_INTERVAL};
pub use dashboard::{Dashboard, Section};
pub use mock::{mock_portfolio, performance_series, recent_activity};

/// Error types for dashboard-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid zoom selection: {0}")]
    InvalidSelection(String),

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),
}

/// Result type for dashboard-core operations.
pub type Result<T> = std::result::Result<T, Error>;
