use chrono::{Duration, NaiveDate};
use egui::{Pos2, Sense, Vec2};
use uuid::Uuid;

use gantt_milestone::model::{
    Capabilities, InteractionKind, PointerEvent, StyleSet, TaskGeometry, TextDirection, TimelineViewport,
};
use gantt_milestone::ui::{self, theme, OnEventStart, TaskItem};
use gantt_milestone::RenderConfig;

/// A dated milestone owned by the demo host.
#[derive(Debug, Clone)]
struct DemoTask {
    id: Uuid,
    name: String,
    start: NaiveDate,
    end: NaiveDate,
    /// From 0.0 (not started) to 1.0 (complete).
    progress: f32,
    styles: StyleSet,
}

impl DemoTask {
    fn new(name: &str, start: NaiveDate, days: i64, progress: f32, styles: StyleSet) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            start,
            end: start + Duration::days(days - 1),
            progress,
            styles,
        }
    }
}

/// Host-side state of a drag in progress.
#[derive(Debug, Clone)]
struct DragState {
    kind: InteractionKind,
    task_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
    start_pointer_x: f32,
}

/// Collects the interaction start raised during one frame.
#[derive(Default)]
struct StartedDrag(Option<(InteractionKind, Uuid, PointerEvent)>);

impl OnEventStart for StartedDrag {
    fn on_event_start(&mut self, kind: InteractionKind, task: &TaskGeometry, event: &PointerEvent) {
        self.0 = Some((kind, task.id, *event));
    }
}

/// Demo application: a handful of milestones the user can drag around.
pub struct GanttApp {
    tasks: Vec<DemoTask>,
    viewport: TimelineViewport,
    config: RenderConfig,
    capabilities: Capabilities,
    rtl: bool,
    selected_task: Option<Uuid>,
    drag: Option<DragState>,
    status_message: String,
}

impl GanttApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: RenderConfig) -> Self {
        let today = chrono::Local::now().date_naive();
        let tasks = Self::sample_tasks(today);
        let viewport = TimelineViewport::new(today - Duration::days(3), today + Duration::days(45));
        Self {
            tasks,
            viewport,
            config,
            capabilities: Capabilities::ALL,
            rtl: false,
            selected_task: None,
            drag: None,
            status_message: "Ready".to_string(),
        }
    }

    fn sample_tasks(today: NaiveDate) -> Vec<DemoTask> {
        let styles = |i: usize| theme::STYLE_SETS[i % theme::STYLE_SETS.len()];
        vec![
            DemoTask::new("Requirements signed off", today, 8, 1.0, styles(0)),
            DemoTask::new("Beta release", today + Duration::days(6), 12, 0.4, styles(1)),
            DemoTask::new("Security audit", today + Duration::days(14), 9, 0.0, styles(2)),
            DemoTask::new("General availability", today + Duration::days(24), 14, 0.1, styles(0)),
        ]
    }

    /// Pixel-space geometry of every task, mirrored when reading right to left.
    fn layout(&self) -> Vec<TaskGeometry> {
        let total = self.viewport.total_width();
        self.tasks
            .iter()
            .enumerate()
            .map(|(row, task)| {
                let y = theme::HEADER_HEIGHT
                    + row as f32 * theme::ROW_HEIGHT
                    + (theme::ROW_HEIGHT - theme::BAR_HEIGHT) / 2.0;
                let mut geometry = self.viewport.layout(
                    task.id,
                    &task.name,
                    task.start,
                    task.end,
                    task.progress,
                    y,
                    theme::BAR_HEIGHT,
                    task.styles,
                );
                if self.rtl {
                    let (x1, x2) = (total - geometry.x2, total - geometry.x1);
                    geometry.x1 = x1;
                    geometry.x2 = x2;
                    geometry.progress_x = x2 - geometry.progress_width;
                }
                geometry
            })
            .collect()
    }

    fn build_items(&self) -> Vec<TaskItem> {
        let direction = TextDirection::from_rtl(self.rtl);
        self.layout()
            .into_iter()
            .map(|geometry| {
                let selected = self.selected_task == Some(geometry.id);
                TaskItem::new(geometry, self.capabilities, direction, selected, &self.config)
            })
            .collect()
    }

    fn begin_drag(&mut self, kind: InteractionKind, task_id: Uuid, event: PointerEvent) {
        let Some(task) = self.tasks.iter().find(|t| t.id == task_id) else {
            return;
        };
        self.selected_task = Some(task_id);
        self.drag = Some(DragState {
            kind,
            task_id,
            start: task.start,
            end: task.end,
            start_pointer_x: event.pos.x,
        });
        self.status_message = format!("Dragging '{}' ({})", task.name, kind);
    }

    /// Apply the current pointer position to the dragged task.
    fn update_drag(&mut self, pointer_x: f32, geometry: Option<&TaskGeometry>) {
        let Some(drag) = self.drag.clone() else {
            return;
        };
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == drag.task_id) else {
            return;
        };
        let mut delta_x = pointer_x - drag.start_pointer_x;
        if self.rtl {
            delta_x = -delta_x;
        }
        let days = Duration::days(self.viewport.drag_days(delta_x));
        // In a mirrored chart the left handle moves the end date and vice versa.
        let kind = match (drag.kind, self.rtl) {
            (InteractionKind::Start, true) => InteractionKind::End,
            (InteractionKind::End, true) => InteractionKind::Start,
            (kind, _) => kind,
        };
        match kind {
            InteractionKind::Start => task.start = (drag.start + days).min(drag.end),
            InteractionKind::End => task.end = (drag.end + days).max(drag.start),
            InteractionKind::Move => {
                task.start = drag.start + days;
                task.end = drag.end + days;
            }
            InteractionKind::Progress => {
                if let Some(g) = geometry.filter(|g| g.width() > 0.0) {
                    let filled = if self.rtl {
                        g.x2 - pointer_x
                    } else {
                        pointer_x - g.x1
                    };
                    task.progress = (filled / g.width()).clamp(0.0, 1.0);
                }
            }
        }
    }

    fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            if let Some(task) = self.tasks.iter().find(|t| t.id == drag.task_id) {
                tracing::info!(kind = %drag.kind, task = %task.name, "drag committed");
                self.status_message = format!(
                    "'{}': {} → {}, {}% done",
                    task.name,
                    task.start.format("%d/%m/%Y"),
                    task.end.format("%d/%m/%Y"),
                    (task.progress * 100.0).round() as i32
                );
            }
        }
    }

    fn export_svg(&mut self) {
        let items = self.build_items();
        let size = Vec2::new(
            self.viewport.total_width(),
            theme::HEADER_HEIGHT + self.tasks.len() as f32 * theme::ROW_HEIGHT,
        );
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("SVG Files", &["svg"])
            .set_file_name("milestones.svg")
            .save_file()
        {
            match gantt_milestone::io::export_svg(&items, size, false, &path) {
                Ok(()) => self.status_message = format!("Exported {} milestones to SVG", items.len()),
                Err(e) => {
                    tracing::error!("{e}");
                    self.status_message = format!("SVG export failed: {}", e);
                }
            }
        }
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.capabilities.date_changeable, "Dates changeable");
            ui.checkbox(&mut self.capabilities.progress_changeable, "Progress changeable");
            ui.checkbox(&mut self.rtl, "Right to left");
            ui.separator();
            if ui.button("Zoom In").clicked() {
                self.viewport.zoom_in();
            }
            if ui.button("Zoom Out").clicked() {
                self.viewport.zoom_out();
            }
            ui.separator();
            if ui.button("Export SVG...").clicked() {
                self.export_svg();
            }
        });
    }

    fn show_chart(&mut self, ui: &mut egui::Ui) {
        let items = self.build_items();
        let size = Vec2::new(
            self.viewport.total_width().max(ui.available_width()),
            (theme::HEADER_HEIGHT + items.len() as f32 * theme::ROW_HEIGHT).max(ui.available_height()),
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        painter.rect_filled(response.rect, 0.0, theme::BG_DARK);
        let origin = response.rect.min.to_vec2();

        let mut started = StartedDrag::default();
        let mut consumed_click = false;
        for item in &items {
            if let Some(item_response) = ui::show_task_item(ui, origin, item, &self.config, &mut started) {
                if item_response.clicked() {
                    self.selected_task = Some(item.task.id);
                    consumed_click = true;
                }
            }
        }

        if let Some((kind, task_id, event)) = started.0 {
            self.begin_drag(kind, task_id, event);
        }

        if self.drag.is_some() {
            let (pointer, down) = ui.input(|i| (i.pointer.interact_pos(), i.pointer.primary_down()));
            if down {
                if let Some(pos) = pointer {
                    let local: Pos2 = pos - origin;
                    let task_id = self.drag.as_ref().map(|d| d.task_id);
                    let geometry = items.iter().map(|i| &i.task).find(|t| Some(t.id) == task_id);
                    self.update_drag(local.x, geometry);
                }
            } else {
                self.end_drag();
            }
        }

        if response.clicked() && !consumed_click {
            self.selected_task = None;
        }
    }
}

impl eframe::App for GanttApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        theme::apply_theme(ctx);

        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::E)) {
            self.export_svg();
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.show_toolbar(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    egui::RichText::new(&self.status_message)
                        .size(11.0)
                        .color(theme::TEXT_SECONDARY),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| self.show_chart(ui));
        });
    }
}
