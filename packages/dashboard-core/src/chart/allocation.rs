//! Interaction state for the asset allocation (pie/bar) chart.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::Stock;

/// Stagger between slice entrance animations.
pub const SLICE_STAGGER: Duration = Duration::from_millis(150);

/// How the allocation is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationStyle {
    #[default]
    Pie,
    Bar,
}

/// A slice of the allocation chart, derived from a stock.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub symbol: String,
    pub name: String,
    pub value: f64,
    pub color: String,
    /// Share of the charted total, in `[0, 1]`
    pub percent: f64,
    #[serde(with = "millis")]
    pub animation_delay: Duration,
}

/// Input events for [`AllocationChart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationEvent {
    Loaded,
    SelectStyle(AllocationStyle),
    /// Pointer entered the pie sector at the given index
    SectorEnter(usize),
    SectorLeave,
    /// Bar chart pointer move; `None` when no tooltip is active
    BarHover(Option<usize>),
    PointerLeave,
}

/// Per-instance state of the allocation chart.
#[derive(Debug, Clone)]
pub struct AllocationChart {
    slices: Vec<AllocationSlice>,
    style: AllocationStyle,
    active_index: Option<usize>,
    loaded: bool,
}

impl AllocationChart {
    pub fn new(stocks: &[Stock]) -> Self {
        Self {
            slices: allocation_slices(stocks),
            style: AllocationStyle::default(),
            active_index: None,
            loaded: false,
        }
    }

    pub fn handle(&mut self, event: AllocationEvent) {
        match event {
            AllocationEvent::Loaded => self.loaded = true,
            AllocationEvent::SelectStyle(style) => self.style = style,
            AllocationEvent::SectorEnter(index) => self.set_active(Some(index)),
            AllocationEvent::BarHover(index) => self.set_active(index),
            AllocationEvent::SectorLeave | AllocationEvent::PointerLeave => {
                self.active_index = None
            }
        }
    }

    fn set_active(&mut self, index: Option<usize>) {
        self.active_index = index.filter(|&i| i < self.slices.len());
    }

    pub fn slices(&self) -> &[AllocationSlice] {
        &self.slices
    }

    pub fn style(&self) -> AllocationStyle {
        self.style
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_slice(&self) -> Option<&AllocationSlice> {
        self.slices.get(self.active_index?)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

/// Build chart slices from holdings, in holding order.
pub fn allocation_slices(stocks: &[Stock]) -> Vec<AllocationSlice> {
    let total: f64 = stocks.iter().map(|s| s.value).sum();

    stocks
        .iter()
        .enumerate()
        .map(|(index, stock)| AllocationSlice {
            symbol: stock.symbol.clone(),
            name: stock.name.clone(),
            value: stock.value,
            color: stock.color.clone(),
            percent: if total > 0.0 { stock.value / total } else { 0.0 },
            animation_delay: SLICE_STAGGER * index as u32,
        })
        .collect()
}

mod millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }
}
