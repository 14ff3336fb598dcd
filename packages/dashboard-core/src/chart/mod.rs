//! Chart interaction controllers.
//!
//! Each widget owns its state exclusively and is driven by discrete events
//! through its `handle` method. Hover state never interacts with zoom state.

mod allocation;
mod performance;
mod risk;
mod zoom;

pub use allocation::{
    allocation_slices, AllocationChart, AllocationEvent, AllocationSlice, AllocationStyle,
    SLICE_STAGGER,
};
pub use performance::{
    PerformanceChart, PerformanceEvent, SeriesStyle, Timeframe, Tooltip, ZoomPhase,
    TOOLTIP_BASELINE,
};
pub use risk::{RiskEvent, RiskPanel, RiskTab};
pub use zoom::{resolve_range, try_resolve_range, ZoomSelection};
