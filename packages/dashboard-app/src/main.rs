//! Finance Dashboard - terminal front end
//!
//! Mounts the dashboard, lets its entrance timers and counters settle, and
//! prints a snapshot of the page. A configured startup query runs a symbol
//! search against the quote provider along the way.

mod animation;
mod api;
mod config;
mod events;
mod state;
mod view;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::animation::spawn_after;
use crate::api::QuoteClient;
use crate::config::DashboardConfig;
use crate::events::{run_event_loop, AppEvent, EventContext};
use crate::state::{AppState, CounterId};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Finance Dashboard");

    let config = DashboardConfig::load()?;
    let http = reqwest::Client::builder()
        .user_agent(concat!("finance-dashboard/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let client = QuoteClient::new(&config.base_url, &config.api_key).with_http_client(http);
    tracing::debug!("Using quote provider at {}", client.base_url());

    let (tx, rx) = mpsc::unbounded_channel();
    let ctx = EventContext {
        tx: tx.clone(),
        client: client.clone(),
        frame_interval: config.frame_interval(),
    };

    if let Some(symbol) = config.series_symbol.clone() {
        tokio::spawn(async move {
            if let Ok(series) = client.fetch_time_series(&symbol, "daily").await {
                let sections = series.as_object().map(|o| o.len()).unwrap_or_default();
                tracing::info!("Fetched daily series for {} ({} sections)", symbol, sections);
            }
        });
    }

    if let Some(query) = config.startup_query.clone() {
        tx.send(AppEvent::SetSearchQuery(query))?;
        tx.send(AppEvent::SubmitSearch)?;
    }
    tx.send(AppEvent::Navigate(config.section))?;
    tx.send(AppEvent::Render)?;

    // Print the settled page once the slowest counter has finished
    let settle = CounterId::ALL
        .iter()
        .map(|id| id.animation().total())
        .max()
        .unwrap_or_default()
        + config.frame_interval();
    let settle_tx = tx.clone();
    let _settle = spawn_after(settle, move || async move {
        let _ = settle_tx.send(AppEvent::Render);
        let _ = settle_tx.send(AppEvent::Shutdown);
    });

    let shutdown_tx = tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(AppEvent::Shutdown);
        }
    });

    let state = run_event_loop(AppState::default(), rx, ctx).await;
    tracing::info!(
        "Dashboard closed on {} with {} search results",
        state.dashboard.active_section().label(),
        state.search.results.len()
    );

    Ok(())
}
