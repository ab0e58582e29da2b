//! Colour policy for task shapes.

use egui::Color32;

use crate::model::StyleSet;

/// The two fills a task shape is drawn with for the current selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColors {
    pub bar: Color32,
    pub progress: Color32,
}

/// Pick the selected or unselected variant of a style set.
pub fn resolve_colors(styles: &StyleSet, selected: bool) -> ResolvedColors {
    if selected {
        ResolvedColors {
            bar: styles.background_selected_color,
            progress: styles.progress_selected_color,
        }
    } else {
        ResolvedColors {
            bar: styles.background_color,
            progress: styles.progress_color,
        }
    }
}

/// Fills of the `(left, right)` corner triangles.
///
/// A corner takes the progress colour once progress has passed it: the left
/// one as soon as there is any progress, the right one when progress is
/// within one pixel of the full width.
pub fn corner_colors(colors: ResolvedColors, progress_width: f32, width: f32) -> (Color32, Color32) {
    let left = if progress_width > 0.0 {
        colors.progress
    } else {
        colors.bar
    };
    let right = if progress_width > width - 1.0 {
        colors.progress
    } else {
        colors.bar
    };
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> ResolvedColors {
        resolve_colors(&StyleSet::default(), false)
    }

    #[test]
    fn selection_picks_selected_pair() {
        let styles = StyleSet::default();
        let selected = resolve_colors(&styles, true);
        assert_eq!(selected.bar, styles.background_selected_color);
        assert_eq!(selected.progress, styles.progress_selected_color);
        assert_eq!(resolve_colors(&styles, true), selected);
    }

    #[test]
    fn right_corner_flips_just_past_width_minus_one() {
        let c = colors();
        assert_eq!(corner_colors(c, 99.0, 100.0).1, c.bar);
        assert_eq!(corner_colors(c, 99.01, 100.0).1, c.progress);
        assert_eq!(corner_colors(c, 100.0, 100.0).1, c.progress);
    }

    #[test]
    fn left_corner_needs_any_progress() {
        let c = colors();
        assert_eq!(corner_colors(c, 0.0, 100.0).0, c.bar);
        assert_eq!(corner_colors(c, 0.5, 100.0).0, c.progress);
    }
}
