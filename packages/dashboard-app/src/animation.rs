//! Timer-driven animation scheduling
//!
//! Counters and entrance delays run as tokio tasks owned by a [`TimerSet`].
//! Dropping the set aborts every task, so nothing fires after teardown.

use async_stream::stream;
use dashboard_core::{CountAnimation, CounterState};
use futures::{Stream, StreamExt};
use std::future::Future;
use std::pin::pin;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep_until, Instant, MissedTickBehavior};

/// Lazily sample `animation` every `frame`.
///
/// Yields the mount value (0) immediately, waits out the delay, then emits one
/// state per tick until the target is reached.
pub fn counter_stream(animation: CountAnimation, frame: Duration) -> impl Stream<Item = CounterState> {
    stream! {
        let mounted = Instant::now();
        yield animation.state_at(Duration::ZERO);

        sleep_until(mounted + animation.delay).await;

        let mut ticks = interval(frame);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticks.tick().await;
            let elapsed = mounted.elapsed();
            yield animation.state_at(elapsed);
            if animation.is_complete(elapsed) {
                break;
            }
        }
    }
}

/// A running timer task. Aborted on [`cancel`](AnimationHandle::cancel) or drop.
#[derive(Debug)]
pub struct AnimationHandle {
    task: JoinHandle<()>,
}

impl AnimationHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Run `animation` on a task, handing every frame to `on_frame`.
pub fn spawn_counter<F>(animation: CountAnimation, frame: Duration, mut on_frame: F) -> AnimationHandle
where
    F: FnMut(CounterState) + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut frames = pin!(counter_stream(animation, frame));
        while let Some(state) = frames.next().await {
            on_frame(state);
        }
        tracing::trace!("Counter to {} settled", animation.target);
    });

    AnimationHandle { task }
}

/// Run `action` once after `delay`.
pub fn spawn_after<F, Fut>(delay: Duration, action: F) -> AnimationHandle
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        action().await;
    });

    AnimationHandle { task }
}

/// Timers owned by one mounted widget tree.
#[derive(Debug, Default)]
pub struct TimerSet {
    handles: Vec<AnimationHandle>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, handle: AnimationHandle) {
        self.handles.push(handle);
    }

    /// Timers that have not fired or settled yet.
    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    /// Abort every timer.
    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.cancel();
        }
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
