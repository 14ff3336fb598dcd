//! Plain-text snapshot of the dashboard

use std::fmt::Write;

use chrono::{DateTime, Utc};
use dashboard_core::chart::{AllocationStyle, SeriesStyle};
use dashboard_core::format::{format_count, format_currency, format_percent, relative_time};
use dashboard_core::Section;

use crate::state::{AppState, CounterId};

/// Render the whole page. `now` anchors the activity timestamps.
pub fn render(state: &AppState, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    render_nav(&mut out, state);
    render_portfolio(&mut out, state);
    render_allocation(&mut out, state);
    render_performance(&mut out, state);
    render_risk(&mut out, state);
    render_activity(&mut out, state, now);
    render_search(&mut out, state);
    out
}

fn render_nav(out: &mut String, state: &AppState) {
    let active = state.dashboard.active_section();
    let entries: Vec<String> = Section::OPTIONS
        .iter()
        .map(|section| {
            if *section == active {
                format!("[{}]", section.label())
            } else {
                section.label().to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "Finance Dashboard  {}", entries.join("  "));
}

fn render_portfolio(out: &mut String, state: &AppState) {
    let portfolio = state.dashboard.portfolio();
    let sign = if portfolio.is_positive() { "+" } else { "" };
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Portfolio value  {}  {}{} ({})",
        format_currency(portfolio.total_value),
        sign,
        format_currency(portfolio.change),
        format_percent(portfolio.change_percent)
    );

    for stock in &portfolio.stocks {
        let _ = writeln!(
            out,
            "  {:<6} {:<22} {:>8} sh  {:>12}  {}",
            stock.symbol,
            stock.name,
            stock.shares,
            format_currency(stock.value),
            format_percent(stock.change)
        );
    }
}

fn render_allocation(out: &mut String, state: &AppState) {
    let chart = &state.dashboard.allocation;
    let style = match chart.style() {
        AllocationStyle::Pie => "pie",
        AllocationStyle::Bar => "bar",
    };
    let _ = writeln!(out);
    let _ = writeln!(out, "Allocation ({})", style);
    if !chart.is_loaded() {
        let _ = writeln!(out, "  loading...");
        return;
    }

    for (index, slice) in chart.slices().iter().enumerate() {
        let marker = if chart.active_index() == Some(index) { ">" } else { " " };
        let _ = writeln!(
            out,
            " {} {:<6} {:>6.1}%",
            marker,
            slice.symbol,
            slice.percent * 100.0
        );
    }
}

fn render_performance(out: &mut String, state: &AppState) {
    let chart = &state.dashboard.performance;
    let style = match chart.style() {
        SeriesStyle::Area => "area",
        SeriesStyle::Candle => "candle",
    };
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Performance ({}, {}){}",
        chart.timeframe().label(),
        style,
        if chart.zoom_mode() { "  zoom on" } else { "" }
    );
    if !chart.is_loaded() {
        let _ = writeln!(out, "  loading...");
        return;
    }

    let points = chart.displayed();
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        let _ = writeln!(
            out,
            "  {} - {}  {} points{}",
            first.date,
            last.date,
            points.len(),
            if chart.is_zoomed() { " (zoomed)" } else { "" }
        );
    }
    if let Some((from, to)) = chart.selection_band() {
        let _ = writeln!(out, "  selecting {} - {}", from, to);
    }
    if let Some(tooltip) = chart.tooltip() {
        let _ = writeln!(
            out,
            "  {}: {} ({})",
            tooltip.date,
            format_currency(tooltip.value),
            format_percent(tooltip.change_percent)
        );
    }
}

fn render_risk(out: &mut String, state: &AppState) {
    let panel = &state.dashboard.risk;
    let _ = writeln!(out);
    let _ = writeln!(out, "Risk ({})", panel.tab().label());

    let counters: Vec<String> = CounterId::ALL
        .iter()
        .map(|id| format!("{} {}", id.label(), format_count(state.counter(*id).count)))
        .collect();
    let _ = writeln!(out, "  {}", counters.join("  "));

    if !panel.is_loaded() {
        return;
    }
    for (index, item) in panel.items().iter().enumerate() {
        let marker = if panel.hovered_row() == Some(index) { ">" } else { " " };
        let _ = writeln!(
            out,
            " {} {:<7} {:<28} {:>4}  {}",
            marker,
            item.level.label(),
            item.name,
            item.count,
            item.target
        );
    }
}

fn render_activity(out: &mut String, state: &AppState, now: DateTime<Utc>) {
    let _ = writeln!(out);
    let _ = writeln!(out, "Last actions");
    for activity in &state.activity {
        let _ = writeln!(
            out,
            "  {:<28} {}",
            activity.target,
            relative_time(activity.occurred_at, now)
        );
    }
}

fn render_search(out: &mut String, state: &AppState) {
    let search = &state.search;
    if search.query.is_empty() && search.results.is_empty() {
        return;
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Search \"{}\"{}",
        search.query,
        if search.loading { "  searching..." } else { "" }
    );
    for result in &search.results {
        let details: Vec<&str> = [&result.kind, &result.region, &result.currency]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .collect();
        let _ = write!(out, "  {:<8} {}", result.symbol, result.name);
        if !details.is_empty() {
            let _ = write!(out, "  ({})", details.join(", "));
        }
        if let Some(score) = &result.match_score {
            let _ = write!(out, "  score {}", score);
        }
        let _ = writeln!(out);
    }
    if !search.loading && search.results.is_empty() {
        let _ = writeln!(out, "  no matches");
    }
}
