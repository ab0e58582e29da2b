use egui::{Color32, Rounding, Stroke, Visuals};

use crate::model::StyleSet;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(24, 24, 32);
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 40);
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 52, 64);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const ACCENT: Color32 = Color32::from_rgb(80, 140, 220);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const ROW_HEIGHT: f32 = 50.0;
pub const BAR_HEIGHT: f32 = 26.0;
pub const HEADER_HEIGHT: f32 = 24.0;

// ── Milestone style sets ─────────────────────────────────────────────────────

/// Style sets cycled through by the demo rows.
pub const STYLE_SETS: &[StyleSet] = &[
    StyleSet {
        background_color: Color32::from_rgb(184, 194, 204),
        background_selected_color: Color32::from_rgb(174, 184, 194),
        progress_color: Color32::from_rgb(163, 163, 255),
        progress_selected_color: Color32::from_rgb(130, 130, 245),
    },
    StyleSet {
        background_color: Color32::from_rgb(255, 204, 128),
        background_selected_color: Color32::from_rgb(255, 183, 77),
        progress_color: Color32::from_rgb(251, 140, 0),
        progress_selected_color: Color32::from_rgb(230, 115, 0),
    },
    StyleSet {
        background_color: Color32::from_rgb(165, 214, 167),
        background_selected_color: Color32::from_rgb(129, 199, 132),
        progress_color: Color32::from_rgb(52, 168, 83),
        progress_selected_color: Color32::from_rgb(46, 125, 50),
    },
];

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.window_rounding = Rounding::same(8.0);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
