//! Recomputes the layout whenever the observed container size changes.

use crate::engine::{CanvasLayout, ContainerMetrics, compute_layout};
use tracing::debug;

/// Holds the last measurement and layout.
///
/// Feed it every size observation (window resize, content change, anything
/// that re-measures the container). The first observation is always
/// reported; after that only layouts that differ from the last one are.
#[derive(Debug, Clone, Default)]
pub struct LayoutTracker {
    last_metrics: Option<ContainerMetrics>,
    layout: CanvasLayout,
}

impl LayoutTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current layout; [`CanvasLayout::default`] before any observation.
    #[must_use]
    pub fn layout(&self) -> CanvasLayout {
        self.layout
    }

    #[must_use]
    pub fn last_metrics(&self) -> Option<ContainerMetrics> {
        self.last_metrics
    }

    /// Records a measurement. Returns the layout on the first measurement and
    /// whenever it changed.
    pub fn observe(&mut self, metrics: ContainerMetrics) -> Option<CanvasLayout> {
        let previous = self.last_metrics.replace(metrics);
        if previous == Some(metrics) {
            return None;
        }

        let layout = compute_layout(metrics);
        if previous.is_some() && layout == self.layout {
            return None;
        }
        debug!(
            width = metrics.width,
            height = metrics.height,
            canvas_width = layout.canvas_width,
            stacked = layout.is_stacked,
            "layout changed"
        );
        self.layout = layout;
        Some(layout)
    }
}
