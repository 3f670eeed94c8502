//! The sizing algorithm.

use serde::{Deserialize, Serialize};

/// Canvas width / height (540 / 675, i.e. 4:5).
pub const CANVAS_RATIO: f64 = 540.0 / 675.0;
/// Widest the canvas ever gets.
pub const CANVAS_MAX: f64 = 540.0;
/// Narrowest side-by-side canvas.
pub const CANVAS_MIN: f64 = 360.0;
/// Container padding assumed in side-by-side mode.
pub const PAD: f64 = 24.0;
/// Default detail-pane width.
pub const DETAILS_WIDTH: f64 = 360.0;
/// Space between canvas and detail pane.
pub const GAP: f64 = 24.0;
/// Below this container width the layout stacks (792 px).
pub const STACK_THRESHOLD: f64 = PAD * 2.0 + CANVAS_MIN + GAP + DETAILS_WIDTH;

/// Measured size of the editor container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerMetrics {
    pub width: f64,
    pub height: f64,
    /// Horizontal padding the container actually reports (one side).
    pub padding_x: f64,
}

impl ContainerMetrics {
    pub fn new(width: f64, height: f64, padding_x: f64) -> Self {
        Self {
            width,
            height,
            padding_x,
        }
    }
}

/// Resulting pixel widths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasLayout {
    pub canvas_width: f64,
    /// `None` means the detail pane keeps [`DETAILS_WIDTH`].
    pub details_width: Option<f64>,
    pub is_stacked: bool,
}

impl Default for CanvasLayout {
    /// Layout used before the first measurement.
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_MAX,
            details_width: None,
            is_stacked: false,
        }
    }
}

impl CanvasLayout {
    /// Detail-pane width with the default filled in.
    #[must_use]
    pub fn effective_details_width(&self) -> f64 {
        self.details_width.unwrap_or(DETAILS_WIDTH)
    }

    /// Canvas height at the fixed 4:5 ratio.
    #[must_use]
    pub fn canvas_height(&self) -> f64 {
        self.canvas_width / CANVAS_RATIO
    }
}

/// Computes the layout for a container size.
///
/// Stacked: the canvas fills the padded row, clamped to
/// [`CANVAS_MIN`]..=[`CANVAS_MAX`] when the container reports at least
/// [`PAD`] of padding; with less padding the floor is 0 instead. The detail
/// pane matches the canvas.
///
/// Side by side: the canvas is limited by the width left after the detail
/// pane and by the height at 4:5, never below [`CANVAS_MIN`].
#[must_use]
pub fn compute_layout(metrics: ContainerMetrics) -> CanvasLayout {
    let stacked = metrics.width < STACK_THRESHOLD;

    if stacked {
        let available = metrics.width - metrics.padding_x * 2.0;
        let canvas_width = if metrics.padding_x >= PAD {
            available.max(CANVAS_MIN).min(CANVAS_MAX)
        } else {
            available.max(0.0).min(CANVAS_MAX)
        };
        CanvasLayout {
            canvas_width,
            details_width: Some(canvas_width),
            is_stacked: true,
        }
    } else {
        let available_width = metrics.width - PAD * 2.0 - GAP - DETAILS_WIDTH;
        let available_height = metrics.height - PAD * 2.0;
        let max_from_height = available_height * CANVAS_RATIO;
        let canvas_width = CANVAS_MAX
            .min(available_width)
            .min(max_from_height)
            .max(CANVAS_MIN);
        CanvasLayout {
            canvas_width,
            details_width: None,
            is_stacked: false,
        }
    }
}
