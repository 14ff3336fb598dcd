//! Static stand-in data for the dashboard.
//!
//! Every function here is pure and returns the same payload on each call.
//! Nothing is randomized or persisted.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::types::{
    Activity, BarTone, Portfolio, RiskBar, RiskItem, RiskLevel, SeriesPoint, Stock,
};

/// Index of the point highlighted with a marker on the performance chart ("31 Oct").
pub const HIGHLIGHTED_POINT: usize = 2;

/// The mock portfolio shown on the dashboard.
pub fn mock_portfolio() -> Portfolio {
    Portfolio {
        total_value: 125_750.32,
        change: 1_250.32,
        change_percent: 1.02,
        stocks: vec![
            Stock::new("AAPL", "Apple Inc.", 10.0, 182.52, 1825.20, 1.5, "#FF6384"),
            Stock::new("MSFT", "Microsoft Corp.", 5.0, 420.21, 2101.05, 0.8, "#36A2EB"),
            Stock::new("GOOGL", "Alphabet Inc.", 3.0, 163.42, 490.26, -0.3, "#FFCE56"),
            Stock::new("AMZN", "Amazon.com Inc.", 4.0, 185.19, 740.76, 1.2, "#4BC0C0"),
            Stock::new("TSLA", "Tesla Inc.", 8.0, 177.58, 1420.64, -2.1, "#9966FF"),
        ],
    }
}

/// Nine daily points backing the performance chart, oldest first.
pub fn performance_series() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("29 Oct", 5000.0, 10000.0, 5674.0),
        SeriesPoint::new("30 Oct", 8000.0, 12000.0, 5800.0),
        SeriesPoint::new("31 Oct", 10000.0, 15000.0, 6200.0),
        SeriesPoint::new("1 Nov", 14000.0, 18000.0, 6000.0),
        SeriesPoint::new("2 Nov", 12000.0, 14000.0, 5400.0),
        SeriesPoint::new("3 Nov", 15000.0, 20000.0, 5800.0),
        SeriesPoint::new("4 Nov", 16000.0, 19000.0, 6100.0),
        SeriesPoint::new("5 Nov", 18000.0, 22000.0, 5900.0),
        SeriesPoint::new("6 Nov", 16500.0, 20500.0, 6300.0),
    ]
}

/// Findings listed in the risk panel.
pub fn risk_items() -> Vec<RiskItem> {
    let item = |level, name: &str, category: &str, count, is_active| RiskItem {
        level,
        name: name.to_string(),
        category: category.to_string(),
        count,
        target: "Vulnerable Assets".to_string(),
        is_active,
    };

    vec![
        item(RiskLevel::Low, "Git Directory Exposure", "Source code & Credentials", 158, false),
        item(RiskLevel::High, "SSL Certificate Exposure", "Source code & Credentials", 214, true),
        item(RiskLevel::Medium, "API Key Exposure", "Security Keys", 87, false),
    ]
}

/// Bars of the risk panel's bar strip.
pub fn risk_bars() -> Vec<RiskBar> {
    let bar = |value, height, tone, date: &str| RiskBar {
        value,
        height,
        tone,
        date: date.to_string(),
    };

    vec![
        bar(22435, 224, BarTone::Purple, "29 Oct"),
        bar(12887, 129, BarTone::Purple, "31 Oct"),
        bar(9425, 94, BarTone::Lime, "2 Nov"),
        bar(17632, 176, BarTone::Purple, "4 Nov"),
        bar(15145, 151, BarTone::Purple, "6 Nov"),
        bar(10982, 110, BarTone::Lime, "8 Nov"),
    ]
}

/// The "last actions" feed, newest first, relative to `now`.
pub fn recent_activity(now: DateTime<Utc>) -> Vec<Activity> {
    let archived = Utc
        .with_ymd_and_hms(2020, 10, 30, 12, 0, 0)
        .single()
        .unwrap_or(now);

    vec![
        Activity {
            target: "apple.com".to_string(),
            occurred_at: now - Duration::hours(3),
        },
        Activity {
            target: "dribbble.com/nikitinteam".to_string(),
            occurred_at: now - Duration::days(1),
        },
        Activity {
            target: "nikitinteam.com".to_string(),
            occurred_at: archived,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mock_portfolio_is_deterministic() {
        assert_eq!(mock_portfolio(), mock_portfolio());
    }

    #[test]
    fn test_mock_portfolio_symbols_unique() {
        let portfolio = mock_portfolio();
        let symbols: HashSet<_> = portfolio.stocks.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols.len(), portfolio.stocks.len());
        assert_eq!(portfolio.stocks[0].symbol, "AAPL");
        assert_eq!(portfolio.total_value, 125_750.32);
    }

    #[test]
    fn test_performance_series_shape() {
        let series = performance_series();
        assert_eq!(series.len(), 9);
        assert_eq!(series[HIGHLIGHTED_POINT].date, "31 Oct");
        assert_eq!(series.last().map(|p| p.date.as_str()), Some("6 Nov"));
    }

    #[test]
    fn test_recent_activity_order() {
        let now = Utc::now();
        let feed = recent_activity(now);
        assert_eq!(feed.len(), 3);
        assert!(feed.windows(2).all(|w| w[0].occurred_at >= w[1].occurred_at));
    }

    #[test]
    fn test_risk_fixtures() {
        assert_eq!(risk_items().iter().filter(|i| i.is_active).count(), 1);
        assert_eq!(risk_bars().len(), 6);
    }
}
