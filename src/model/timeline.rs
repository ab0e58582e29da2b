use chrono::NaiveDate;

use super::task::{StyleSet, TaskGeometry};
use uuid::Uuid;

/// Date-to-pixel mapping for the visible part of a chart.
///
/// Hosts use this to turn dated tasks into [`TaskGeometry`] records before
/// handing them to the renderer.
#[derive(Debug, Clone)]
pub struct TimelineViewport {
    /// The leftmost visible date.
    pub start: NaiveDate,
    /// The rightmost visible date.
    pub end: NaiveDate,
    /// Pixels per day (controls zoom level).
    pub pixels_per_day: f32,
}

impl TimelineViewport {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            pixels_per_day: 18.0,
        }
    }

    /// Convert a date to an x-pixel offset from the viewport start.
    pub fn date_to_x(&self, date: NaiveDate) -> f32 {
        let days = (date - self.start).num_days() as f32;
        days * self.pixels_per_day
    }

    /// Whole days covered by a horizontal pointer movement.
    pub fn drag_days(&self, delta_x: f32) -> i64 {
        (delta_x / self.pixels_per_day).round() as i64
    }

    /// Total width in pixels for the visible range.
    pub fn total_width(&self) -> f32 {
        self.date_to_x(self.end)
    }

    /// Zoom in (increase pixels per day).
    pub fn zoom_in(&mut self) {
        self.pixels_per_day = (self.pixels_per_day * 1.2).min(80.0);
    }

    /// Zoom out (decrease pixels per day).
    pub fn zoom_out(&mut self) {
        self.pixels_per_day = (self.pixels_per_day / 1.2).max(2.0);
    }

    /// Lay out a dated task in pixel space.
    ///
    /// The end date is inclusive, so a task spanning one day is one day wide.
    /// `progress` is clamped to `[0, 1]`.
    #[allow(clippy::too_many_arguments)]
    pub fn layout(
        &self,
        id: Uuid,
        name: &str,
        start: NaiveDate,
        end: NaiveDate,
        progress: f32,
        y: f32,
        height: f32,
        styles: StyleSet,
    ) -> TaskGeometry {
        let x1 = self.date_to_x(start);
        let x2 = self.date_to_x(end) + self.pixels_per_day;
        let progress_width = (x2 - x1).max(0.0) * progress.clamp(0.0, 1.0);
        TaskGeometry {
            id,
            name: name.to_string(),
            x1,
            x2,
            y,
            height,
            progress_x: x1,
            progress_width,
            bar_corner_radius: 3.0,
            handle_width: 8.0,
            styles,
        }
    }
}
