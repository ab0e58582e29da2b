//! Interactive milestone: the display plus drag handles, and the dispatch of
//! pointer presses to the host as typed interaction starts.

use egui::{pos2, vec2, Pos2, Rect};

use crate::config::RenderConfig;
use crate::model::{Capabilities, InteractionKind, PointerEvent, TaskGeometry, TextDirection};
use crate::ui::milestone::{MilestoneDisplay, MilestoneProps};
use crate::ui::shapes::{union_bounds, Primitive};

/// Receiver of interaction starts. The host tracks the drag from here on.
pub trait OnEventStart {
    fn on_event_start(&mut self, kind: InteractionKind, task: &TaskGeometry, event: &PointerEvent);
}

impl<F> OnEventStart for F
where
    F: FnMut(InteractionKind, &TaskGeometry, &PointerEvent),
{
    fn on_event_start(&mut self, kind: InteractionKind, task: &TaskGeometry, event: &PointerEvent) {
        self(kind, task, event)
    }
}

/// X coordinate of the leading edge of the progress fill in reading order.
pub fn progress_point_x(direction: TextDirection, progress_x: f32, progress_width: f32) -> f32 {
    if direction.is_rtl() {
        progress_x
    } else {
        progress_x + progress_width
    }
}

/// Triangle marker pointing up at the progress point from the bottom edge.
pub fn progress_handle_points(point_x: f32, y: f32, height: f32, config: &RenderConfig) -> Vec<Pos2> {
    let bottom = y + height;
    vec![
        pos2(point_x - config.progress_handle_half_width, bottom),
        pos2(point_x + config.progress_handle_half_width, bottom),
        pos2(point_x, bottom - config.progress_handle_height),
    ]
}

/// A draggable element laid over the display.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    pub kind: InteractionKind,
    pub shape: Primitive,
}

/// Where a press landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Handle(InteractionKind),
    Body,
}

struct Decoration {
    name: &'static str,
    enabled: fn(Capabilities) -> bool,
    build: fn(&TaskGeometry, TextDirection, &RenderConfig) -> Vec<Handle>,
}

/// Optional handles, in paint order. Absent handles are not hit-tested either.
const DECORATIONS: [Decoration; 2] = [
    Decoration {
        name: "date handles",
        enabled: |caps| caps.date_changeable,
        build: date_handles,
    },
    Decoration {
        name: "progress handle",
        enabled: |caps| caps.progress_changeable,
        build: progress_handle,
    },
];

fn date_handles(task: &TaskGeometry, _: TextDirection, config: &RenderConfig) -> Vec<Handle> {
    let inset = config.handle_inset;
    let size = vec2(task.handle_width, task.height - 2.0 * inset);
    let top = task.y + inset;
    let handle = |kind, x| Handle {
        kind,
        shape: Primitive::Rect {
            rect: Rect::from_min_size(pos2(x, top), size),
            rounding: task.bar_corner_radius,
            fill: config.handle_color,
        },
    };
    vec![
        handle(InteractionKind::Start, task.x1 + inset),
        handle(InteractionKind::End, task.x2 - task.handle_width - inset),
    ]
}

fn progress_handle(task: &TaskGeometry, direction: TextDirection, config: &RenderConfig) -> Vec<Handle> {
    let x = progress_point_x(direction, task.progress_x, task.progress_width);
    vec![Handle {
        kind: InteractionKind::Progress,
        shape: Primitive::Polygon {
            points: progress_handle_points(x, task.y, task.height, config),
            fill: config.handle_color,
        },
    }]
}

/// A milestone with the affordances the host granted.
///
/// Rebuilt from fresh inputs on every frame; holds no state between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskItem {
    pub task: TaskGeometry,
    pub capabilities: Capabilities,
    pub direction: TextDirection,
    pub selected: bool,
    /// `None` while the task has no positive width.
    pub display: Option<MilestoneDisplay>,
    pub handles: Vec<Handle>,
}

impl TaskItem {
    pub fn new(
        task: TaskGeometry,
        capabilities: Capabilities,
        direction: TextDirection,
        selected: bool,
        config: &RenderConfig,
    ) -> Self {
        let display = MilestoneDisplay::new(&MilestoneProps::from_task(&task, selected), config);
        let handles = DECORATIONS
            .iter()
            .filter(|d| (d.enabled)(capabilities))
            .flat_map(|d| {
                tracing::trace!(decoration = d.name, task = %task.name, "adding decoration");
                (d.build)(&task, direction, config)
            })
            .collect();
        Self {
            task,
            capabilities,
            direction,
            selected,
            display,
            handles,
        }
    }

    pub fn handle(&self, kind: InteractionKind) -> Option<&Handle> {
        self.handles.iter().find(|h| h.kind == kind)
    }

    /// Everything drawn for this item: display first, handles on top.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.display
            .iter()
            .flat_map(MilestoneDisplay::primitives)
            .chain(self.handles.iter().map(|h| &h.shape))
    }

    pub fn bounds(&self) -> Option<Rect> {
        union_bounds(self.primitives())
    }

    /// Topmost element under `pos`.
    pub fn hit_test(&self, pos: Pos2) -> Option<HitTarget> {
        if let Some(handle) = self.handles.iter().rev().find(|h| h.shape.contains(pos)) {
            return Some(HitTarget::Handle(handle.kind));
        }
        self.display
            .as_ref()
            .filter(|d| d.contains(pos))
            .map(|_| HitTarget::Body)
    }

    /// Classify a press and report it to `handler`.
    ///
    /// Body presses start a move only when dates may change; otherwise the
    /// body is inert. Returns the kind that was raised.
    pub fn mouse_down(&self, event: &PointerEvent, handler: &mut impl OnEventStart) -> Option<InteractionKind> {
        let kind = match self.hit_test(event.pos)? {
            HitTarget::Handle(kind) => Some(kind),
            HitTarget::Body => {
                let mut kind = None;
                if let Some(display) = &self.display {
                    display.mouse_down(event, |_| {
                        if self.capabilities.date_changeable {
                            kind = Some(InteractionKind::Move);
                        }
                    });
                }
                kind
            }
        }?;
        tracing::debug!(%kind, task = %self.task.name, x = event.pos.x, y = event.pos.y, "interaction started");
        handler.on_event_start(kind, &self.task, event);
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> TaskGeometry {
        TaskGeometry::new("Sign-off", 0.0, 200.0, 0.0, 20.0)
    }

    fn item(caps: Capabilities) -> TaskItem {
        TaskItem::new(task(), caps, TextDirection::Ltr, false, &RenderConfig::default())
    }

    #[test]
    fn progress_point_follows_reading_direction() {
        assert_eq!(progress_point_x(TextDirection::Ltr, 100.0, 40.0), 140.0);
        assert_eq!(progress_point_x(TextDirection::Rtl, 100.0, 40.0), 100.0);
    }

    #[test]
    fn date_handles_sit_inside_the_edges() {
        let item = item(Capabilities::ALL);
        let start = item.handle(InteractionKind::Start).unwrap().shape.bounds();
        let end = item.handle(InteractionKind::End).unwrap().shape.bounds();
        assert_eq!(start.left(), 1.0);
        assert_eq!(end.left(), 191.0);
        assert_eq!(start.top(), 1.0);
        assert_eq!(start.height(), 18.0);
        assert_eq!(end.width(), 8.0);
    }

    #[test]
    fn capabilities_gate_handles() {
        assert!(item(Capabilities::READ_ONLY).handles.is_empty());
        let dates_only = item(Capabilities {
            date_changeable: true,
            progress_changeable: false,
        });
        assert_eq!(dates_only.handles.len(), 2);
        assert!(dates_only.handle(InteractionKind::Progress).is_none());
    }

    #[test]
    fn progress_handle_is_topmost() {
        let mut t = task();
        t.progress_width = 3.0;
        let item = TaskItem::new(t, Capabilities::ALL, TextDirection::Ltr, false, &RenderConfig::default());
        // (3, 18) lies on both the start handle and the progress triangle.
        assert_eq!(
            item.hit_test(pos2(3.0, 18.0)),
            Some(HitTarget::Handle(InteractionKind::Progress))
        );
        assert_eq!(
            item.hit_test(pos2(3.0, 5.0)),
            Some(HitTarget::Handle(InteractionKind::Start))
        );
        assert_eq!(item.hit_test(pos2(100.0, 10.0)), Some(HitTarget::Body));
        assert_eq!(item.hit_test(pos2(100.0, 60.0)), None);
    }

    #[test]
    fn presses_raise_matching_kinds() {
        let item = item(Capabilities::ALL);
        let mut raised = Vec::new();
        let mut handler = |kind: InteractionKind, task: &TaskGeometry, event: &PointerEvent| {
            raised.push((kind, task.id, event.pos));
        };
        item.mouse_down(&PointerEvent::primary(pos2(2.0, 5.0)), &mut handler);
        item.mouse_down(&PointerEvent::primary(pos2(195.0, 5.0)), &mut handler);
        item.mouse_down(&PointerEvent::primary(pos2(100.0, 5.0)), &mut handler);
        let kinds: Vec<_> = raised.iter().map(|(k, _, _)| *k).collect();
        assert_eq!(
            kinds,
            [InteractionKind::Start, InteractionKind::End, InteractionKind::Move]
        );
        assert!(raised.iter().all(|(_, id, _)| *id == item.task.id));
        assert_eq!(raised[2].2, pos2(100.0, 5.0));
    }

    #[test]
    fn body_is_inert_without_date_capability() {
        let item = item(Capabilities {
            date_changeable: false,
            progress_changeable: true,
        });
        let mut calls = 0;
        let mut handler = |_: InteractionKind, _: &TaskGeometry, _: &PointerEvent| calls += 1;
        assert_eq!(item.mouse_down(&PointerEvent::primary(pos2(100.0, 5.0)), &mut handler), None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn degenerate_task_keeps_handles_only() {
        let mut t = task();
        t.x2 = t.x1;
        let item = TaskItem::new(t, Capabilities::ALL, TextDirection::Ltr, false, &RenderConfig::default());
        assert!(item.display.is_none());
        assert_eq!(item.handles.len(), 3);
    }
}
