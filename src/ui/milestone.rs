//! Milestone shape: a rounded body between two slanted corner triangles,
//! a progress overlay, an optional label and a thin indicator bar underneath.

use egui::{pos2, vec2, Pos2, Rect};

use crate::config::RenderConfig;
use crate::model::{PointerEvent, StyleSet, TaskGeometry};
use crate::ui::shapes::{union_bounds, Primitive};
use crate::ui::style::{corner_colors, resolve_colors, ResolvedColors};

/// Inputs of the milestone renderer.
#[derive(Debug, Clone, Copy)]
pub struct MilestoneProps<'a> {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub progress_x: f32,
    pub progress_width: f32,
    pub bar_corner_radius: f32,
    /// Empty means no label.
    pub task_name: &'a str,
    pub styles: &'a StyleSet,
    pub selected: bool,
}

impl<'a> MilestoneProps<'a> {
    pub fn from_task(task: &'a TaskGeometry, selected: bool) -> Self {
        Self {
            x: task.x1,
            y: task.y,
            width: task.width(),
            height: task.height,
            progress_x: task.progress_x,
            progress_width: task.progress_width,
            bar_corner_radius: task.bar_corner_radius,
            task_name: &task.name,
            styles: &task.styles,
            selected,
        }
    }
}

/// The drawn milestone. Parts are listed in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneDisplay {
    pub colors: ResolvedColors,
    pub indicator: Option<Primitive>,
    pub body: Option<Primitive>,
    pub progress: Option<Primitive>,
    pub right_triangle: Primitive,
    pub left_triangle: Primitive,
    pub label: Option<Primitive>,
}

impl MilestoneDisplay {
    /// Build the shape, or `None` when the task has no positive width yet.
    pub fn new(props: &MilestoneProps<'_>, config: &RenderConfig) -> Option<Self> {
        let MilestoneProps {
            x,
            y,
            width,
            height,
            progress_x,
            progress_width,
            bar_corner_radius,
            ..
        } = *props;

        if width <= 0.0 {
            tracing::debug!(width, "milestone has no width, skipping");
            return None;
        }

        let colors = resolve_colors(props.styles, props.selected);
        let inset = config.triangle_width;
        let slant = config.skewed_triangle_width();

        let indicator = config
            .indicator
            .visible
            .then(|| {
                let top = y + height + config.indicator.gap;
                let size = vec2(width, height / config.indicator.height_divisor);
                Primitive::rounded_rect(
                    Rect::from_min_size(pos2(x, top), size),
                    bar_corner_radius,
                    config.indicator.color,
                )
            })
            .flatten();

        let body = Primitive::rounded_rect(
            Rect::from_min_size(pos2(x + inset, y), vec2(width - 2.0 * inset, height)),
            bar_corner_radius,
            colors.bar,
        );
        let progress = Primitive::rounded_rect(
            Rect::from_min_size(
                pos2(progress_x + inset, y),
                vec2(progress_width - 2.0 * inset, height),
            ),
            bar_corner_radius,
            colors.progress,
        );

        let (left_fill, right_fill) = corner_colors(colors, progress_width, width);
        let right_triangle = Primitive::Polygon {
            points: vec![
                pos2(x + width - slant, y),
                pos2(x + width, y + height / 2.0),
                pos2(x + width - slant, y + height),
            ],
            fill: right_fill,
        };
        let left_triangle = Primitive::Polygon {
            points: vec![
                pos2(x + slant, y),
                pos2(x, y + height / 2.0),
                pos2(x + slant, y + height),
            ],
            fill: left_fill,
        };

        let label = if props.task_name.is_empty() {
            None
        } else {
            let label_width = width - inset / 2.0 - config.label_right_padding;
            Some(Rect::from_min_size(
                pos2(x + inset / 2.0, y + height / 2.0 - config.label_height / 2.0),
                vec2(label_width, config.label_height),
            ))
            .filter(|rect| rect.width() > 0.0)
            .map(|rect| Primitive::Label {
                rect,
                text: props.task_name.to_string(),
                color: config.label_color,
            })
        };

        Some(Self {
            colors,
            indicator,
            body,
            progress,
            right_triangle,
            left_triangle,
            label,
        })
    }

    /// All parts in paint order.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.indicator
            .iter()
            .chain(self.body.iter())
            .chain(self.progress.iter())
            .chain(std::iter::once(&self.right_triangle))
            .chain(std::iter::once(&self.left_triangle))
            .chain(self.label.iter())
    }

    pub fn bounds(&self) -> Rect {
        union_bounds(self.primitives()).unwrap_or(Rect::NOTHING)
    }

    /// Whether a press at `pos` lands on any part of the shape.
    pub fn contains(&self, pos: Pos2) -> bool {
        self.primitives().any(|p| p.contains(pos))
    }

    /// Forward a press on the shape to `handler` unchanged.
    ///
    /// Presses outside the shape are ignored. Returns whether the handler ran.
    pub fn mouse_down(&self, event: &PointerEvent, handler: impl FnOnce(&PointerEvent)) -> bool {
        if !self.contains(event.pos) {
            return false;
        }
        handler(event);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(progress_width: f32) -> TaskGeometry {
        let mut task = TaskGeometry::new("Go-live", 0.0, 200.0, 0.0, 20.0);
        task.progress_width = progress_width;
        task
    }

    fn render(task: &TaskGeometry, selected: bool) -> Option<MilestoneDisplay> {
        MilestoneDisplay::new(&MilestoneProps::from_task(task, selected), &RenderConfig::default())
    }

    #[test]
    fn non_positive_width_renders_nothing() {
        let mut t = task(0.0);
        t.x2 = 0.0;
        assert!(render(&t, false).is_none());
        t.x2 = -10.0;
        assert!(render(&t, true).is_none());
    }

    #[test]
    fn body_is_inset_by_triangle_width() {
        let display = render(&task(0.0), false).unwrap();
        let body = display.body.unwrap().bounds();
        assert_eq!(body.left(), 25.0);
        assert_eq!(body.right(), 175.0);
        assert_eq!(body.height(), 20.0);
    }

    #[test]
    fn empty_progress_has_no_overlay() {
        let display = render(&task(0.0), false).unwrap();
        assert!(display.progress.is_none());

        let display = render(&task(120.0), false).unwrap();
        let overlay = display.progress.unwrap().bounds();
        assert_eq!(overlay.left(), 25.0);
        assert_eq!(overlay.width(), 70.0);
    }

    #[test]
    fn triangles_meet_the_vertical_centre() {
        let display = render(&task(0.0), false).unwrap();
        let Primitive::Polygon { points, .. } = &display.left_triangle else {
            panic!("left triangle is a polygon");
        };
        assert_eq!(points[1], pos2(0.0, 10.0));
        assert!((points[0].x - 27.05).abs() < 1e-3);

        let Primitive::Polygon { points, .. } = &display.right_triangle else {
            panic!("right triangle is a polygon");
        };
        assert_eq!(points[1], pos2(200.0, 10.0));
    }

    #[test]
    fn indicator_sits_below_shape() {
        let display = render(&task(0.0), true).unwrap();
        let indicator = display.indicator.unwrap();
        let bounds = indicator.bounds();
        assert_eq!(bounds.top(), 22.0);
        assert!((bounds.height() - 20.0 / 6.0).abs() < 1e-4);
        assert_eq!(bounds.width(), 200.0);
        assert_eq!(indicator.fill(), RenderConfig::default().indicator.color);
    }

    #[test]
    fn hidden_indicator_is_omitted() {
        let mut config = RenderConfig::default();
        config.indicator.visible = false;
        let t = task(0.0);
        let display = MilestoneDisplay::new(&MilestoneProps::from_task(&t, false), &config).unwrap();
        assert!(display.indicator.is_none());
    }

    #[test]
    fn label_only_with_a_name() {
        let display = render(&task(0.0), false).unwrap();
        let label = display.label.unwrap().bounds();
        assert_eq!(label.left(), 12.5);
        assert_eq!(label.top(), 2.0);
        assert_eq!(label.width(), 182.5);

        let mut unnamed = task(0.0);
        unnamed.name.clear();
        assert!(render(&unnamed, false).unwrap().label.is_none());
    }

    #[test]
    fn press_is_forwarded_only_on_the_shape() {
        let display = render(&task(0.0), false).unwrap();
        let mut seen = None;
        let inside = PointerEvent::primary(pos2(100.0, 10.0));
        assert!(display.mouse_down(&inside, |e| seen = Some(*e)));
        assert_eq!(seen, Some(inside));

        let outside = PointerEvent::primary(pos2(100.0, 40.0));
        assert!(!display.mouse_down(&outside, |_| panic!("outside press forwarded")));
    }
}
