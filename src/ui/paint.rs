//! egui painting and pointer wiring for [`TaskItem`]s.

use egui::text::{LayoutJob, TextFormat, TextWrapping};
use egui::{pos2, CursorIcon, FontId, Painter, PointerButton, Response, Sense, Shape, Stroke, Ui, Vec2};

use crate::config::RenderConfig;
use crate::model::{InteractionKind, PointerEvent};
use crate::ui::shapes::Primitive;
use crate::ui::task_item::{HitTarget, OnEventStart, TaskItem};

/// Paint one primitive. `origin` maps chart space to screen space.
pub fn paint_primitive(painter: &Painter, origin: Vec2, primitive: &Primitive, config: &RenderConfig) {
    match primitive.translated(origin) {
        Primitive::Rect {
            rect,
            rounding,
            fill,
        } => {
            painter.add(Shape::rect_filled(rect, rounding, fill));
        }
        Primitive::Polygon { points, fill } => {
            painter.add(Shape::convex_polygon(points, fill, Stroke::NONE));
        }
        Primitive::Label { rect, text, color } => {
            let mut job = LayoutJob::single_section(
                text,
                TextFormat::simple(FontId::proportional(config.label_font_size), color),
            );
            job.wrap = TextWrapping {
                max_width: rect.width(),
                max_rows: 1,
                break_anywhere: true,
                overflow_character: Some('…'),
            };
            let galley = painter.layout_job(job);
            let size = galley.size();
            let pos = pos2(rect.center().x - size.x / 2.0, rect.center().y - size.y / 2.0);
            painter.with_clip_rect(rect).galley(pos, galley, color);
        }
    }
}

/// Paint the display and, when `show_handles` is set, the handles on top.
pub fn paint_task_item(
    painter: &Painter,
    origin: Vec2,
    item: &TaskItem,
    show_handles: bool,
    config: &RenderConfig,
) {
    if let Some(display) = &item.display {
        for primitive in display.primitives() {
            paint_primitive(painter, origin, primitive, config);
        }
    }
    if show_handles {
        for handle in &item.handles {
            paint_primitive(painter, origin, &handle.shape, config);
        }
    }
}

/// Paint `item`, sense presses over it and report interaction starts.
///
/// Handles stay hit-testable while hidden; they are drawn only while the item
/// is hovered, dragged or selected. Returns `None` when nothing was drawn.
pub fn show_task_item(
    ui: &mut Ui,
    origin: Vec2,
    item: &TaskItem,
    config: &RenderConfig,
    handler: &mut impl OnEventStart,
) -> Option<Response> {
    let bounds = item.bounds()?.translate(origin);
    let response = ui.interact(
        bounds,
        ui.make_persistent_id(("task-item", item.task.id)),
        Sense::click_and_drag(),
    );

    let show_handles = item.selected || response.hovered() || response.dragged();
    paint_task_item(ui.painter(), origin, item, show_handles, config);

    if let Some(pos) = response.hover_pos() {
        match item.hit_test(pos - origin) {
            Some(HitTarget::Handle(InteractionKind::Start | InteractionKind::End)) => {
                ui.ctx().set_cursor_icon(CursorIcon::ResizeHorizontal);
            }
            Some(HitTarget::Handle(_)) => ui.ctx().set_cursor_icon(CursorIcon::ResizeColumn),
            Some(HitTarget::Body) if item.capabilities.date_changeable => {
                ui.ctx().set_cursor_icon(CursorIcon::Grab);
            }
            _ => {}
        }
    }

    if let Some(event) = press_event(ui, &response, origin) {
        item.mouse_down(&event, handler);
    }

    Some(response)
}

/// The press that landed on `response` this frame, in chart space.
///
/// Fires on the press itself, before any movement, so a press that is held
/// or released in place still starts an interaction.
fn press_event(ui: &Ui, response: &Response, origin: Vec2) -> Option<PointerEvent> {
    if !response.is_pointer_button_down_on() {
        return None;
    }
    let (button, press, modifiers) = ui.input(|i| {
        let button = [PointerButton::Primary, PointerButton::Secondary, PointerButton::Middle]
            .into_iter()
            .find(|b| i.pointer.button_pressed(*b));
        (button, i.pointer.press_origin(), i.modifiers)
    });
    let button = button?;
    let pos = press.or_else(|| response.interact_pointer_pos())?;
    Some(PointerEvent {
        pos: pos - origin,
        button,
        modifiers,
    })
}
