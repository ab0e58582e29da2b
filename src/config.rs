//! Render configuration.
//!
//! Every fixed measurement of the milestone shape lives in [`RenderConfig`].
//! The file is JSON with `#RRGGBB` / `#RRGGBBAA` colour strings, and every
//! field carries `#[serde(default)]` so a partial file is valid.

use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ─── Hex-colour serde helper ────────────────────────────────────────────────

pub mod hex_color {
    use egui::Color32;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s).map_err(serde::de::Error::custom)
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(color: Color32) -> String {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    pub fn parse_hex_color(s: &str) -> Result<Color32, String> {
        let s = s.trim().trim_start_matches('#');
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color '{}': expected hex digits", s));
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).map_err(|e| e.to_string());
        match s.len() {
            6 => Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color32::from_rgba_unmultiplied(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => Err(format!("Invalid hex color '{}': expected 6 or 8 hex digits", s)),
        }
    }
}

// ─── Definition ─────────────────────────────────────────────────────────────

/// Fixed measurements and colours used when building milestone shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Horizontal inset of the body from each edge; room for the corner triangles.
    pub triangle_width: f32,
    /// Triangle base width is `triangle_width * triangle_skew`; controls the slant.
    pub triangle_skew: f32,
    pub label_height: f32,
    /// Gap kept free between the label and the right edge.
    pub label_right_padding: f32,
    pub label_font_size: f32,
    #[serde(with = "hex_color")]
    pub label_color: Color32,
    #[serde(with = "hex_color")]
    pub handle_color: Color32,
    /// Distance the date handles keep from the task edges and its top.
    pub handle_inset: f32,
    pub progress_handle_half_width: f32,
    pub progress_handle_height: f32,
    pub indicator: IndicatorConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            triangle_width: 25.0,
            triangle_skew: 1.082,
            label_height: 16.0,
            label_right_padding: 5.0,
            label_font_size: 12.0,
            label_color: Color32::from_rgb(34, 34, 34),
            handle_color: Color32::from_rgb(221, 221, 221),
            handle_inset: 1.0,
            progress_handle_half_width: 5.0,
            progress_handle_height: 8.66,
            indicator: IndicatorConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Base width of a corner triangle.
    pub fn skewed_triangle_width(&self) -> f32 {
        self.triangle_width * self.triangle_skew
    }

    /// Read a config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `render.json` from the user config directory.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// logged and also yields the defaults.
    pub fn load_or_default() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            tracing::debug!(?path, "no render config, using defaults");
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                tracing::info!(?path, "loaded render config");
                config
            }
            Err(e) => {
                tracing::warn!("{e}; using default render config");
                Self::default()
            }
        }
    }

    pub fn config_path() -> PathBuf {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "GanttMilestone") {
            proj_dirs.config_dir().join("render.json")
        } else {
            PathBuf::from(".").join("render.json")
        }
    }
}

/// The thin bar drawn underneath a milestone.
///
/// Placeholder for a baseline/original-dates indicator: it currently spans the
/// task's own extent in a neutral colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub visible: bool,
    #[serde(with = "hex_color")]
    pub color: Color32,
    /// Vertical gap between the shape's bottom edge and the indicator.
    pub gap: f32,
    /// Indicator height is the task height divided by this.
    pub height_divisor: f32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            visible: true,
            color: Color32::from_rgb(204, 204, 204),
            gap: 2.0,
            height_divisor: 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r##"{ "triangle_width": 20, "indicator": { "color": "#FF000080" } }"##)
                .unwrap();
        assert_eq!(config.triangle_width, 20.0);
        assert_eq!(config.triangle_skew, 1.082);
        assert_eq!(
            config.indicator.color,
            Color32::from_rgba_unmultiplied(255, 0, 0, 128)
        );
        assert!(config.indicator.visible);
    }

    #[test]
    fn hex_round_trips_opaque_colors() {
        let c = hex_color::parse_hex_color("#cccccc").unwrap();
        assert_eq!(c, Color32::from_rgb(204, 204, 204));
        assert_eq!(hex_color::to_hex(c), "#CCCCCC");
        assert!(hex_color::parse_hex_color("#abc").is_err());
    }

    #[test]
    fn hex_rejects_signs_and_non_digits() {
        assert!(hex_color::parse_hex_color("#+f+f+f").is_err());
        assert!(hex_color::parse_hex_color("#12345g").is_err());
        assert!(hex_color::parse_hex_color("#ééé").is_err());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = RenderConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RenderConfig::load(&dir.path().join("render.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
