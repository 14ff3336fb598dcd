//! Dashboard CLI - JSON views of the dashboard's data and widget logic.
//!
//! Every command prints an `ApiResponse` as pretty JSON.

use clap::{Parser, Subcommand};
use dashboard_core::{
    chart::{allocation_slices, try_resolve_range},
    format::format_count,
    mock_portfolio, performance_series, ApiResponse, CountAnimation, Result, FRAME_INTERVAL,
};
use serde::Serialize;
use serde_json::json;

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Finance dashboard CLI - mock portfolio and widget state")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the mock portfolio
    Portfolio {
        /// Only print this holding
        #[arg(short, long)]
        symbol: Option<String>,
    },
    /// Print the allocation chart slices
    Allocation,
    /// Print the performance series
    Series,
    /// Sample an animated counter
    Counter {
        /// Final value
        #[arg(short, long)]
        target: u64,
        /// Animation length in milliseconds
        #[arg(short, long, default_value = "2000")]
        duration: u64,
        /// Start delay in milliseconds
        #[arg(long, default_value = "0")]
        delay: u64,
        /// Sample at this many milliseconds after mount (omit for every frame)
        #[arg(long)]
        at: Option<u64>,
    },
    /// Resolve a zoom selection over the performance series
    Zoom {
        /// Selection start, 0.0 - 1.0
        #[arg(short, long)]
        start: f64,
        /// Selection end, 0.0 - 1.0
        #[arg(short, long)]
        end: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    let output = match run(cli.command) {
        Ok(output) => output,
        Err(e) => render(&ApiResponse::<()>::err(e.to_string())),
    };

    println!("{}", output);
}

fn run(command: Commands) -> Result<String> {
    match command {
        Commands::Portfolio { symbol } => {
            let portfolio = mock_portfolio();
            match symbol {
                Some(symbol) => {
                    let stock = portfolio.require_stock(&symbol)?;
                    to_json(&ApiResponse::ok(stock))
                }
                None => to_json(&ApiResponse::ok(&portfolio)),
            }
        }
        Commands::Allocation => {
            let slices = allocation_slices(&mock_portfolio().stocks);
            to_json(&ApiResponse::ok(slices))
        }
        Commands::Series => to_json(&ApiResponse::ok(performance_series())),
        Commands::Counter {
            target,
            duration,
            delay,
            at,
        } => handle_counter(CountAnimation::from_millis(target, duration, delay), at),
        Commands::Zoom { start, end } => {
            let series = performance_series();
            let range = try_resolve_range(start, end, series.len())?;
            to_json(&ApiResponse::ok(json!({
                "start_index": range.start(),
                "end_index": range.end(),
                "points": &series[range.clone()],
            })))
        }
    }
}

fn handle_counter(animation: CountAnimation, at: Option<u64>) -> Result<String> {
    if let Some(at) = at {
        let state = animation.state_at(std::time::Duration::from_millis(at));
        return to_json(&ApiResponse::ok(json!({
            "at_ms": at,
            "count": state.count,
            "display": format_count(state.count),
            "is_loaded": state.is_loaded,
        })));
    }

    let mut frames = Vec::new();
    let mut elapsed = std::time::Duration::ZERO;
    loop {
        frames.push(json!({
            "at_ms": elapsed.as_millis() as u64,
            "count": animation.value_at(elapsed),
        }));
        if animation.is_complete(elapsed) {
            break;
        }
        elapsed += FRAME_INTERVAL;
    }

    to_json(&ApiResponse::ok(json!({
        "target": animation.target,
        "frames": frames,
    })))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn render<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"ok\":false,\"error\":\"{}\"}}", e))
}
