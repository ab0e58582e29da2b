//! The fixed primitive vocabulary task shapes are built from.

use egui::{Color32, Pos2, Rect, Vec2};

/// One drawable element of a task shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Filled rectangle with uniformly rounded corners.
    Rect {
        rect: Rect,
        rounding: f32,
        fill: Color32,
    },
    /// Filled convex polygon.
    Polygon { points: Vec<Pos2>, fill: Color32 },
    /// Single-line text centred in `rect`, cut with an ellipsis when too wide.
    Label {
        rect: Rect,
        text: String,
        color: Color32,
    },
}

impl Primitive {
    /// Rounded rect, or `None` when it would have no visible width.
    pub fn rounded_rect(rect: Rect, rounding: f32, fill: Color32) -> Option<Self> {
        if rect.width() <= 0.0 {
            return None;
        }
        Some(Primitive::Rect {
            rect,
            rounding,
            fill,
        })
    }

    pub fn fill(&self) -> Color32 {
        match self {
            Primitive::Rect { fill, .. } | Primitive::Polygon { fill, .. } => *fill,
            Primitive::Label { color, .. } => *color,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Primitive::Rect { rect, .. } | Primitive::Label { rect, .. } => *rect,
            Primitive::Polygon { points, .. } => Rect::from_points(points),
        }
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        match self {
            Primitive::Rect { rect, .. } | Primitive::Label { rect, .. } => rect.contains(pos),
            Primitive::Polygon { points, .. } => polygon_contains(points, pos),
        }
    }

    /// The same primitive shifted by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        match self {
            Primitive::Rect {
                rect,
                rounding,
                fill,
            } => Primitive::Rect {
                rect: rect.translate(offset),
                rounding: *rounding,
                fill: *fill,
            },
            Primitive::Polygon { points, fill } => Primitive::Polygon {
                points: points.iter().map(|p| *p + offset).collect(),
                fill: *fill,
            },
            Primitive::Label { rect, text, color } => Primitive::Label {
                rect: rect.translate(offset),
                text: text.clone(),
                color: *color,
            },
        }
    }
}

/// Even-odd point-in-polygon test.
fn polygon_contains(points: &[Pos2], pos: Pos2) -> bool {
    let mut inside = false;
    let mut j = points.len().wrapping_sub(1);
    for (i, a) in points.iter().enumerate() {
        let b = points[j];
        if (a.y > pos.y) != (b.y > pos.y) {
            let cross_x = (b.x - a.x) * (pos.y - a.y) / (b.y - a.y) + a.x;
            if pos.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Bounding box of a primitive list, or `None` when it is empty.
pub fn union_bounds<'a>(primitives: impl IntoIterator<Item = &'a Primitive>) -> Option<Rect> {
    primitives
        .into_iter()
        .map(Primitive::bounds)
        .reduce(|a, b| a.union(b))
}
