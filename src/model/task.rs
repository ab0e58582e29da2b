use egui::Color32;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::hex_color;

/// The four fill colors a task shape is drawn with.
///
/// Which pair is used is decided by the host-owned selection flag, see
/// [`crate::ui::style::resolve_colors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSet {
    #[serde(with = "hex_color")]
    pub background_color: Color32,
    #[serde(with = "hex_color")]
    pub background_selected_color: Color32,
    #[serde(with = "hex_color")]
    pub progress_color: Color32,
    #[serde(with = "hex_color")]
    pub progress_selected_color: Color32,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self {
            background_color: Color32::from_rgb(184, 194, 204),
            background_selected_color: Color32::from_rgb(174, 184, 194),
            progress_color: Color32::from_rgb(163, 163, 255),
            progress_selected_color: Color32::from_rgb(130, 130, 245),
        }
    }
}

/// A task already laid out in final pixel space for the current scroll/zoom.
///
/// Produced by the host's layout engine; nothing in this crate mutates it.
/// Expected: `x2 >= x1`, `progress_width` within `[0, x2 - x1]` and a positive
/// `height`. Violations degrade to empty or odd-looking output, never a panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskGeometry {
    pub id: Uuid,
    pub name: String,
    /// Left pixel edge.
    pub x1: f32,
    /// Right pixel edge.
    pub x2: f32,
    /// Top pixel edge.
    pub y: f32,
    pub height: f32,
    /// Pixel offset of the filled progress segment.
    pub progress_x: f32,
    /// Pixel width of the filled progress segment.
    pub progress_width: f32,
    pub bar_corner_radius: f32,
    pub handle_width: f32,
    pub styles: StyleSet,
}

impl TaskGeometry {
    /// Create a geometry record with no progress and default styling.
    pub fn new(name: impl Into<String>, x1: f32, x2: f32, y: f32, height: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            x1,
            x2,
            y,
            height,
            progress_x: x1,
            progress_width: 0.0,
            bar_corner_radius: 3.0,
            handle_width: 8.0,
            styles: StyleSet::default(),
        }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }
}
