//! Interaction state for the performance (area/candle) chart.

use serde::{Deserialize, Serialize};

use super::zoom::ZoomSelection;
use crate::mock::HIGHLIGHTED_POINT;
use crate::types::SeriesPoint;

/// Value the tooltip change percentage is measured against.
pub const TOOLTIP_BASELINE: f64 = 5000.0;

/// Timeframe buttons above the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1D")]
    OneDay,
    #[default]
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "ALL")]
    All,
}

impl Timeframe {
    pub const OPTIONS: [Timeframe; 5] = [
        Timeframe::OneDay,
        Timeframe::OneWeek,
        Timeframe::OneMonth,
        Timeframe::OneYear,
        Timeframe::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneDay => "1D",
            Timeframe::OneWeek => "1W",
            Timeframe::OneMonth => "1M",
            Timeframe::OneYear => "1Y",
            Timeframe::All => "All",
        }
    }
}

/// How the performance series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesStyle {
    #[default]
    Area,
    Candle,
}

/// Phase of the drag-to-zoom interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomPhase {
    Inactive,
    Selecting,
}

/// Input events for [`PerformanceChart`].
#[derive(Debug, Clone, PartialEq)]
pub enum PerformanceEvent {
    /// Entrance delay elapsed
    Loaded,
    /// Pointer over the data point at `index` of the displayed series
    PointerMove { index: usize, label: Option<String> },
    /// Pointer left the plot
    PointerLeave,
    ToggleZoomMode,
    /// Pointer pressed at a plot-relative x position
    ZoomPointerDown(f64),
    ZoomPointerMove(f64),
    ZoomPointerUp,
    /// Pointer left the zoom surface
    ZoomPointerLeave,
    Reset,
    SelectTimeframe(Timeframe),
    SelectStyle(SeriesStyle),
}

/// Tooltip contents for the hovered point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub date: String,
    pub value: f64,
    pub change_percent: f64,
}

/// Per-instance state of the performance chart.
#[derive(Debug, Clone)]
pub struct PerformanceChart {
    original: Vec<SeriesPoint>,
    displayed: Vec<SeriesPoint>,
    hovered_index: Option<usize>,
    hovered_date: Option<String>,
    timeframe: Timeframe,
    style: SeriesStyle,
    zoom_mode: bool,
    selection: ZoomSelection,
    loaded: bool,
}

impl PerformanceChart {
    pub fn new(series: Vec<SeriesPoint>) -> Self {
        Self {
            displayed: series.clone(),
            original: series,
            hovered_index: None,
            hovered_date: None,
            timeframe: Timeframe::default(),
            style: SeriesStyle::default(),
            zoom_mode: false,
            selection: ZoomSelection::default(),
            loaded: false,
        }
    }

    /// Apply one event.
    pub fn handle(&mut self, event: PerformanceEvent) {
        match event {
            PerformanceEvent::Loaded => self.loaded = true,
            PerformanceEvent::PointerMove { index, label } => self.hover(index, label),
            PerformanceEvent::PointerLeave => self.clear_hover(),
            PerformanceEvent::ToggleZoomMode => self.toggle_zoom_mode(),
            PerformanceEvent::ZoomPointerDown(x) => self.begin_selection(x),
            PerformanceEvent::ZoomPointerMove(x) => self.extend_selection(x),
            PerformanceEvent::ZoomPointerUp => self.commit_selection(),
            PerformanceEvent::ZoomPointerLeave => self.selection.clear(),
            PerformanceEvent::Reset => self.reset(),
            PerformanceEvent::SelectTimeframe(timeframe) => self.timeframe = timeframe,
            PerformanceEvent::SelectStyle(style) => self.style = style,
        }
    }

    fn hover(&mut self, index: usize, label: Option<String>) {
        if index >= self.displayed.len() {
            return;
        }
        self.hovered_index = Some(index);
        self.hovered_date = label;
    }

    fn clear_hover(&mut self) {
        self.hovered_index = None;
        self.hovered_date = None;
    }

    fn toggle_zoom_mode(&mut self) {
        self.zoom_mode = !self.zoom_mode;
        if !self.zoom_mode {
            self.selection.clear();
        }
    }

    fn begin_selection(&mut self, x: f64) {
        if self.zoom_mode {
            self.selection = ZoomSelection::anchored(x);
        }
    }

    fn extend_selection(&mut self, x: f64) {
        if self.zoom_mode {
            self.selection.extend_to(x);
        }
    }

    fn commit_selection(&mut self) {
        if !self.zoom_mode || !self.selection.is_active() {
            return;
        }
        if let Some(range) = self.selection.resolve(self.original.len()) {
            self.displayed = self.original[range].to_vec();
        }
        self.selection.clear();
    }

    fn reset(&mut self) {
        self.displayed = self.original.clone();
        self.selection.clear();
        self.zoom_mode = false;
    }

    pub fn displayed(&self) -> &[SeriesPoint] {
        &self.displayed
    }

    pub fn original(&self) -> &[SeriesPoint] {
        &self.original
    }

    pub fn is_zoomed(&self) -> bool {
        self.displayed.len() != self.original.len()
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered_index
    }

    pub fn hovered_date(&self) -> Option<&str> {
        self.hovered_date.as_deref()
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn style(&self) -> SeriesStyle {
        self.style
    }

    pub fn zoom_mode(&self) -> bool {
        self.zoom_mode
    }

    pub fn selection(&self) -> ZoomSelection {
        self.selection
    }

    pub fn zoom_phase(&self) -> ZoomPhase {
        if self.selection.is_active() {
            ZoomPhase::Selecting
        } else {
            ZoomPhase::Inactive
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Index of the marked point within the displayed series, if visible.
    pub fn highlighted_index(&self) -> Option<usize> {
        let marked = self.original.get(HIGHLIGHTED_POINT)?;
        self.displayed.iter().position(|p| p == marked)
    }

    /// Date labels bounding the live selection, for the shaded reference area.
    pub fn selection_band(&self) -> Option<(&str, &str)> {
        let (low, high) = self.selection.bounds()?;
        let len = self.displayed.len();
        let at = |x: f64| self.displayed.get((x * len as f64).floor() as usize);
        let first = at(low)?;
        let last = at(high).or_else(|| self.displayed.last())?;
        Some((first.date.as_str(), last.date.as_str()))
    }

    /// Tooltip for the hovered point.
    pub fn tooltip(&self) -> Option<Tooltip> {
        let point = self.displayed.get(self.hovered_index?)?;
        Some(Tooltip {
            date: point.date.clone(),
            value: point.value,
            change_percent: (point.value / TOOLTIP_BASELINE - 1.0) * 100.0,
        })
    }
}
