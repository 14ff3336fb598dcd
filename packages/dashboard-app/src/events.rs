//! Event dispatch
//!
//! Every change to [`AppState`] arrives as an [`AppEvent`] on one channel and
//! is applied in order by [`run_event_loop`]. Timers and search requests run
//! on their own tasks and report back through the same channel.

use std::ops::ControlFlow;
use std::time::Duration;

use chrono::Utc;
use dashboard_core::chart::{AllocationEvent, PerformanceEvent, RiskEvent};
use dashboard_core::{CounterState, Section};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::animation::{spawn_after, spawn_counter, TimerSet};
use crate::api::{QuoteClient, SymbolMatch};
use crate::state::{AppState, CounterId};
use crate::view;

/// Entrance delay of the performance chart
pub const PERFORMANCE_ENTRANCE: Duration = Duration::from_millis(300);
/// Entrance delay of the allocation chart
pub const ALLOCATION_ENTRANCE: Duration = Duration::from_millis(500);
/// Entrance delay of the risk panel
pub const RISK_ENTRANCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Performance(PerformanceEvent),
    Allocation(AllocationEvent),
    Risk(RiskEvent),
    Navigate(Section),
    Counter { id: CounterId, state: CounterState },
    SetSearchQuery(String),
    SubmitSearch,
    SearchCompleted { generation: u64, results: Vec<SymbolMatch> },
    /// Print a snapshot of the page
    Render,
    Shutdown,
}

/// Handles shared by the loop and the tasks it spawns
#[derive(Debug, Clone)]
pub struct EventContext {
    pub tx: UnboundedSender<AppEvent>,
    pub client: QuoteClient,
    pub frame_interval: Duration,
}

/// Start the entrance timers and headline counters.
///
/// The returned set owns every timer; dropping it tears them all down.
pub fn mount(ctx: &EventContext) -> TimerSet {
    let mut timers = TimerSet::new();

    let entrances = [
        (PERFORMANCE_ENTRANCE, AppEvent::Performance(PerformanceEvent::Loaded)),
        (ALLOCATION_ENTRANCE, AppEvent::Allocation(AllocationEvent::Loaded)),
        (RISK_ENTRANCE, AppEvent::Risk(RiskEvent::Loaded)),
    ];
    for (delay, event) in entrances {
        let tx = ctx.tx.clone();
        timers.push(spawn_after(delay, move || async move {
            let _ = tx.send(event);
        }));
    }

    for id in CounterId::ALL {
        let tx = ctx.tx.clone();
        timers.push(spawn_counter(id.animation(), ctx.frame_interval, move |state| {
            let _ = tx.send(AppEvent::Counter { id, state });
        }));
    }

    tracing::debug!("Mounted dashboard with {} timers", timers.pending());
    timers
}

/// Apply a single event
pub fn handle_event(state: &mut AppState, event: AppEvent, ctx: &EventContext) -> ControlFlow<()> {
    match event {
        AppEvent::Performance(event) => {
            tracing::trace!("Performance chart: {:?}", event);
            state.dashboard.performance.handle(event);
        }

        AppEvent::Allocation(event) => {
            tracing::trace!("Allocation chart: {:?}", event);
            state.dashboard.allocation.handle(event);
        }

        AppEvent::Risk(event) => {
            tracing::trace!("Risk panel: {:?}", event);
            state.dashboard.risk.handle(event);
        }

        AppEvent::Navigate(section) => {
            tracing::debug!("Navigate to {}", section.label());
            state.dashboard.select_section(section);
        }

        AppEvent::Counter { id, state: counter } => {
            state.set_counter(id, counter);
        }

        AppEvent::SetSearchQuery(query) => {
            state.search.set_query(query);
        }

        AppEvent::SubmitSearch => submit_search(state, ctx),

        AppEvent::SearchCompleted {
            generation,
            results,
        } => {
            let count = results.len();
            if state.search.complete(generation, results) {
                tracing::debug!("Search {} applied with {} matches", generation, count);
            } else {
                tracing::debug!("Dropping stale search {} results", generation);
            }
        }

        AppEvent::Render => {
            println!("{}", view::render(state, Utc::now()));
        }

        AppEvent::Shutdown => {
            tracing::info!("Shutting down dashboard");
            return ControlFlow::Break(());
        }
    }

    ControlFlow::Continue(())
}

fn submit_search(state: &mut AppState, ctx: &EventContext) {
    let Some(generation) = state.search.begin() else {
        tracing::debug!("Ignoring empty search");
        return;
    };

    let query = state.search.query.trim().to_string();
    let client = ctx.client.clone();
    let tx = ctx.tx.clone();

    tracing::info!("Searching symbols for {:?}", query);
    tokio::spawn(async move {
        let results = client.search_symbols(&query).await;
        if tx
            .send(AppEvent::SearchCompleted {
                generation,
                results,
            })
            .is_err()
        {
            tracing::debug!("Search for {:?} finished after teardown", query);
        }
    });
}

/// Mount the dashboard and process events until [`AppEvent::Shutdown`].
///
/// Timers are torn down before the final state is returned.
pub async fn run_event_loop(
    mut state: AppState,
    mut rx: UnboundedReceiver<AppEvent>,
    ctx: EventContext,
) -> AppState {
    let timers = mount(&ctx);

    tracing::info!("Starting event loop");
    while let Some(event) = rx.recv().await {
        if handle_event(&mut state, event, &ctx).is_break() {
            break;
        }
    }

    drop(timers);
    state.search.invalidate();
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn context() -> (EventContext, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        // Nothing listens on the discard port
        let client = QuoteClient::new("http://127.0.0.1:9", "demo").with_http_client(http);
        let ctx = EventContext {
            tx,
            client,
            frame_interval: dashboard_core::FRAME_INTERVAL,
        };
        (ctx, rx)
    }

    #[tokio::test]
    async fn test_widget_events_are_routed() {
        let (ctx, _rx) = context();
        let mut state = AppState::default();

        let events = [
            AppEvent::Performance(PerformanceEvent::ToggleZoomMode),
            AppEvent::Allocation(AllocationEvent::SectorEnter(1)),
            AppEvent::Risk(RiskEvent::RowEnter(0)),
            AppEvent::Navigate(Section::Analytics),
        ];
        for event in events {
            assert!(handle_event(&mut state, event, &ctx).is_continue());
        }

        assert!(state.dashboard.performance.zoom_mode());
        assert_eq!(state.dashboard.allocation.active_index(), Some(1));
        assert_eq!(state.dashboard.risk.hovered_row(), Some(0));
        assert_eq!(state.dashboard.active_section(), Section::Analytics);
    }

    #[tokio::test]
    async fn test_shutdown_breaks() {
        let (ctx, _rx) = context();
        let mut state = AppState::default();
        assert!(handle_event(&mut state, AppEvent::Shutdown, &ctx).is_break());
    }

    #[tokio::test]
    async fn test_failed_search_completes_empty() {
        let (ctx, mut rx) = context();
        let mut state = AppState::default();

        handle_event(&mut state, AppEvent::SetSearchQuery("AAPL".into()), &ctx);
        handle_event(&mut state, AppEvent::SubmitSearch, &ctx);
        assert!(state.search.loading);

        let event = rx.recv().await.unwrap();
        assert!(matches!(
            &event,
            AppEvent::SearchCompleted { generation: 1, results } if results.is_empty()
        ));
        handle_event(&mut state, event, &ctx);
        assert!(!state.search.loading);
        assert!(state.search.results.is_empty());
    }

    #[tokio::test]
    async fn test_empty_search_is_not_sent() {
        let (ctx, mut rx) = context();
        let mut state = AppState::default();

        handle_event(&mut state, AppEvent::SubmitSearch, &ctx);
        assert!(!state.search.loading);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_stale_search_results_dropped() {
        let (ctx, _rx) = context();
        let mut state = AppState::default();
        state.search.set_query("app");
        let stale = state.search.begin().unwrap();
        state.search.set_query("apple");
        let current = state.search.begin().unwrap();

        let stale_event = AppEvent::SearchCompleted {
            generation: stale,
            results: vec![SymbolMatch::new("APP", "AppLovin")],
        };
        handle_event(&mut state, stale_event, &ctx);
        assert!(state.search.results.is_empty());
        assert!(state.search.loading);

        let current_event = AppEvent::SearchCompleted {
            generation: current,
            results: vec![SymbolMatch::new("AAPL", "Apple Inc")],
        };
        handle_event(&mut state, current_event, &ctx);
        assert_eq!(state.search.results.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_loop_settles_counters_and_entrances() {
        let (ctx, rx) = context();
        let tx = ctx.tx.clone();
        let settle = CounterId::ALL
            .iter()
            .map(|id| id.animation().total())
            .max()
            .unwrap_or_default()
            + ctx.frame_interval;
        let run = tokio::spawn(run_event_loop(AppState::default(), rx, ctx));

        tokio::time::sleep(settle).await;
        tx.send(AppEvent::Shutdown).unwrap();
        let state = run.await.unwrap();

        assert_eq!(state.total_assets.count, 57985);
        assert_eq!(state.vulnerable_assets.count, 28374);
        assert!(state.total_assets.is_loaded);
        assert!(state.dashboard.performance.is_loaded());
        assert!(state.dashboard.allocation.is_loaded());
        assert!(state.dashboard.risk.is_loaded());
    }

    #[tokio::test(start_paused = true)]
    async fn test_counter_is_zero_before_delay() {
        let (ctx, rx) = context();
        let tx = ctx.tx.clone();
        let run = tokio::spawn(run_event_loop(AppState::default(), rx, ctx));

        tokio::time::sleep(Duration::from_millis(200)).await;
        tx.send(AppEvent::Shutdown).unwrap();
        let state = run.await.unwrap();

        assert_eq!(state.total_assets.count, 0);
        assert!(!state.total_assets.is_loaded);
        assert!(!state.dashboard.allocation.is_loaded());
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_stops_timers() {
        let (ctx, mut rx) = context();
        let timers = mount(&ctx);
        drop(timers);

        tokio::time::sleep(Duration::from_millis(3200)).await;
        while let Ok(event) = rx.try_recv() {
            match event {
                AppEvent::Counter { state, .. } => assert_eq!(state.count, 0),
                other => panic!("timer fired after teardown: {:?}", other),
            }
        }
    }
}
