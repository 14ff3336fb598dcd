//! Core data types for the finance dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single holding shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    /// Ticker symbol, unique within a portfolio
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Number of shares held
    pub shares: f64,
    /// Last price per share
    pub price: f64,
    /// Position value (nominally shares * price, not enforced)
    pub value: f64,
    /// Daily change percentage
    pub change: f64,
    /// Display color token used by the allocation chart
    pub color: String,
}

impl Stock {
    /// Create a stock entry. The symbol is normalized to uppercase.
    pub fn new(
        symbol: &str,
        name: &str,
        shares: f64,
        price: f64,
        value: f64,
        change: f64,
        color: &str,
    ) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            name: name.to_string(),
            shares,
            price,
            value,
            change,
            color: color.to_string(),
        }
    }

    /// Whether the daily change is non-negative.
    pub fn is_gaining(&self) -> bool {
        self.change >= 0.0
    }
}

/// A portfolio snapshot. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Total account value
    pub total_value: f64,
    /// Signed change in currency units
    pub change: f64,
    /// Signed change percentage
    pub change_percent: f64,
    /// Holdings in display order
    pub stocks: Vec<Stock>,
}

impl Portfolio {
    /// Find a stock by symbol (case insensitive).
    pub fn stock(&self, symbol: &str) -> Option<&Stock> {
        let symbol_upper = symbol.to_uppercase();
        self.stocks.iter().find(|s| s.symbol == symbol_upper)
    }

    /// Find a stock by symbol, failing when it is not held.
    pub fn require_stock(&self, symbol: &str) -> Result<&Stock> {
        self.stock(symbol)
            .ok_or_else(|| Error::UnknownSymbol(symbol.to_uppercase()))
    }

    /// Sum of the listed stock values.
    pub fn stocks_value(&self) -> f64 {
        self.stocks.iter().map(|s| s.value).sum()
    }

    /// Whether the portfolio change is non-negative.
    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }
}

/// One point of the performance chart series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    /// Axis label, e.g. "31 Oct"
    pub date: String,
    pub line1: f64,
    pub line2: f64,
    /// Main value line, drives the tooltip
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(date: &str, line1: f64, line2: f64, value: f64) -> Self {
        Self {
            date: date.to_string(),
            line1,
            line2,
            value,
        }
    }
}

/// Severity of a risk finding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// A row of the risk panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskItem {
    pub level: RiskLevel,
    pub name: String,
    pub category: String,
    pub count: u32,
    pub target: String,
    pub is_active: bool,
}

/// Color family of a risk bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BarTone {
    Purple,
    Lime,
}

/// A bar of the risk panel's bar strip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskBar {
    pub value: u64,
    /// Rendered height in pixels
    pub height: u32,
    pub tone: BarTone,
    pub date: String,
}

/// An entry of the "last actions" feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// What the action ran against, e.g. a domain
    pub target: String,
    pub occurred_at: DateTime<Utc>,
}

/// API response wrapper used by the JSON command line output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
