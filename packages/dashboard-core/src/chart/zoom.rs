//! Drag-to-zoom selection over a series.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::{Error, Result};

/// A horizontal selection in plot-relative coordinates (`0.0` = left edge).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoomSelection {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl ZoomSelection {
    /// A selection anchored at `x`.
    pub fn anchored(x: f64) -> Self {
        Self {
            start: Some(clamp_fraction(x)),
            end: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Move the live edge. Ignored when no drag is in progress.
    pub fn extend_to(&mut self, x: f64) {
        if self.start.is_some() {
            self.end = Some(clamp_fraction(x));
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Ordered `(low, high)` bounds, once both edges are known.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match (self.start, self.end) {
            (Some(a), Some(b)) => Some((a.min(b), a.max(b))),
            _ => None,
        }
    }

    /// Resolve to an index range over a series of `len` points.
    ///
    /// Returns `None` when either edge is missing or the selection covers a
    /// single point.
    pub fn resolve(&self, len: usize) -> Option<RangeInclusive<usize>> {
        let (low, high) = self.bounds()?;
        resolve_range(low, high, len)
    }
}

/// Map fractional bounds onto `[floor(low * len), ceil(high * len)]`.
///
/// The range must span more than one point; the upper index is clamped to the
/// last point of the series.
///
/// ```rust
/// use dashboard_core::chart::resolve_range;
///
/// assert_eq!(resolve_range(0.1, 0.4, 9), Some(0..=4));
/// assert_eq!(resolve_range(0.5, 0.52, 9), None);
/// ```
pub fn resolve_range(low: f64, high: f64, len: usize) -> Option<RangeInclusive<usize>> {
    if len == 0 {
        return None;
    }
    let (low, high) = (clamp_fraction(low.min(high)), clamp_fraction(low.max(high)));
    let start = (low * len as f64).floor() as usize;
    let end = (high * len as f64).ceil() as usize;

    if end.saturating_sub(start) <= 1 {
        return None;
    }

    Some(start..=end.min(len - 1))
}

/// Like [`resolve_range`], reporting why a selection cannot be committed.
pub fn try_resolve_range(low: f64, high: f64, len: usize) -> Result<RangeInclusive<usize>> {
    resolve_range(low, high, len).ok_or_else(|| {
        Error::InvalidSelection(format!(
            "{:.2}..{:.2} covers less than two of {} points",
            low.min(high),
            low.max(high),
            len
        ))
    })
}

fn clamp_fraction(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}
