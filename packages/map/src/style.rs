//! Region styling for the highlight command.

use oslo_market_selection::Highlight;
use serde::Serialize;

/// How one district region is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionStyle {
    /// The selected district.
    Selected,
    /// The district under the pointer.
    Hovered,
    /// Every other district.
    Idle,
}

/// Paint properties for a region style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPaint {
    /// Fill colour.
    pub fill: &'static str,
    /// Outline colour.
    pub outline: &'static str,
    /// Outline width in pixels.
    pub outline_width: f64,
    /// Label colour.
    pub label: &'static str,
}

impl RegionStyle {
    /// Paint properties for this style.
    #[must_use]
    pub const fn paint(self) -> RegionPaint {
        match self {
            Self::Selected => RegionPaint {
                fill: "rgba(28, 37, 50, 0.9)",
                outline: "rgba(96, 165, 250, 0.8)",
                outline_width: 2.0,
                label: "rgba(255, 255, 255, 0.95)",
            },
            Self::Hovered => RegionPaint {
                fill: "rgba(28, 37, 50, 0.7)",
                outline: "rgba(90, 103, 120, 0.6)",
                outline_width: 1.0,
                label: "rgba(255, 255, 255, 0.95)",
            },
            Self::Idle => RegionPaint {
                fill: "rgba(17, 23, 32, 0.5)",
                outline: "rgba(48, 58, 72, 0.4)",
                outline_width: 1.0,
                label: "rgba(203, 213, 225, 0.7)",
            },
        }
    }
}

/// Style of region `id` under `highlight`. Selection wins over hover.
#[must_use]
pub fn region_style(id: &str, highlight: &Highlight) -> RegionStyle {
    if highlight.selected.as_deref() == Some(id) {
        RegionStyle::Selected
    } else if highlight.hovered.as_deref() == Some(id) {
        RegionStyle::Hovered
    } else {
        RegionStyle::Idle
    }
}
