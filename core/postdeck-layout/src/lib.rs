//! Canvas and detail-pane sizing.
//!
//! The editor area shows a 4:5 canvas next to a fixed-width detail pane.
//! When the container is too narrow for both side by side, the layout
//! stacks them and both take the full row width.
//!
//! [`compute_layout`] is a pure function of the container's measured size.
//! [`LayoutTracker`] wraps it for whatever size-observation mechanism the
//! host has and only reports layouts that differ from the previous one.

mod engine;
mod tracker;

pub use engine::{
    CANVAS_MAX, CANVAS_MIN, CANVAS_RATIO, CanvasLayout, ContainerMetrics, DETAILS_WIDTH, GAP, PAD,
    STACK_THRESHOLD, compute_layout,
};
pub use tracker::LayoutTracker;
