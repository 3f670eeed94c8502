//! Output settings handed to the editing surfaces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Settings for the crop surface. Every crop is exported at the canvas
/// size so slides never need rescaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropConfig {
    pub output_width: u32,
    pub output_height: u32,
    /// Aspect ratio as `(width, height)`.
    pub aspect: (u32, u32),
    pub mime_type: String,
    /// Encoder quality in `0.0..=1.0`.
    pub quality: f32,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            output_width: 540,
            output_height: 675,
            aspect: (4, 5),
            mime_type: "image/jpeg".into(),
            quality: 0.92,
        }
    }
}

impl CropConfig {
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.aspect.0) / f64::from(self.aspect.1)
    }
}

/// A tool the full editor can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditorTool {
    Adjust,
    FineTune,
    Filters,
    Annotate,
    Watermark,
    Crop,
    Rotate,
    Resize,
}

impl EditorTool {
    /// Tools offered by default, in tab order.
    pub const DEFAULT_TOOLS: [EditorTool; 5] = [
        Self::Adjust,
        Self::FineTune,
        Self::Filters,
        Self::Annotate,
        Self::Watermark,
    ];

    /// True for tools that would change the image's dimensions.
    #[must_use]
    pub fn changes_geometry(self) -> bool {
        matches!(self, Self::Crop | Self::Rotate | Self::Resize)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adjust => "adjust",
            Self::FineTune => "fine-tune",
            Self::Filters => "filters",
            Self::Annotate => "annotate",
            Self::Watermark => "watermark",
            Self::Crop => "crop",
            Self::Rotate => "rotate",
            Self::Resize => "resize",
        }
    }
}

impl fmt::Display for EditorTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for the full editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    tools: Vec<EditorTool>,
    pub mime_type: String,
    pub default_file_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tools: EditorTool::DEFAULT_TOOLS.to_vec(),
            mime_type: "image/jpeg".into(),
            default_file_name: "slide".into(),
        }
    }
}

impl EditorConfig {
    /// Builds a config offering `tools`. Geometry tools and repeats are
    /// dropped, since slides keep the canvas aspect ratio.
    #[must_use]
    pub fn with_tools(tools: impl IntoIterator<Item = EditorTool>) -> Self {
        let mut kept = Vec::new();
        for tool in tools {
            if !tool.changes_geometry() && !kept.contains(&tool) {
                kept.push(tool);
            }
        }
        Self {
            tools: kept,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn tools(&self) -> &[EditorTool] {
        &self.tools
    }

    /// The tab the editor opens on.
    #[must_use]
    pub fn default_tool(&self) -> Option<EditorTool> {
        self.tools.first().copied()
    }
}
