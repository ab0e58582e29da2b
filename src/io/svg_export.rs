//! Standalone SVG export of task items.

use std::fmt::Write;
use std::path::Path;

use egui::{Color32, Vec2};

use crate::config::hex_color;
use crate::error::ExportError;
use crate::ui::shapes::Primitive;
use crate::ui::task_item::TaskItem;

/// Write an SVG document containing every item to `path`.
///
/// When `show_handles` is false the handles are left out, matching how the
/// chart looks when nothing is hovered.
pub fn export_svg(items: &[TaskItem], size: Vec2, show_handles: bool, path: &Path) -> Result<(), ExportError> {
    let svg = to_svg(items, size, show_handles);
    std::fs::write(path, svg).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(?path, items = items.len(), "exported svg");
    Ok(())
}

/// Serialise items into an SVG document of the given size.
pub fn to_svg(items: &[TaskItem], size: Vec2, show_handles: bool) -> String {
    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(size.x),
        h = num(size.y),
    );
    for item in items {
        let _ = writeln!(svg, r#"  <g class="barWrapper" data-task="{}">"#, item.task.id);
        if let Some(display) = &item.display {
            let _ = writeln!(svg, "    <g>");
            for primitive in display.primitives() {
                write_primitive(&mut svg, primitive, "      ");
            }
            let _ = writeln!(svg, "    </g>");
        }
        if show_handles && !item.handles.is_empty() {
            let _ = writeln!(svg, r#"    <g class="handleGroup">"#);
            for handle in &item.handles {
                write_primitive(&mut svg, &handle.shape, "      ");
            }
            let _ = writeln!(svg, "    </g>");
        }
        let _ = writeln!(svg, "  </g>");
    }
    svg.push_str("</svg>\n");
    svg
}

fn write_primitive(svg: &mut String, primitive: &Primitive, indent: &str) {
    match primitive {
        Primitive::Rect {
            rect,
            rounding,
            fill,
        } => {
            let _ = writeln!(
                svg,
                r#"{indent}<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{r}" ry="{r}" {fill}/>"#,
                x = num(rect.left()),
                y = num(rect.top()),
                w = num(rect.width()),
                h = num(rect.height()),
                r = num(*rounding),
                fill = fill_attrs(*fill),
            );
        }
        Primitive::Polygon { points, fill } => {
            let points = points
                .iter()
                .map(|p| format!("{},{}", num(p.x), num(p.y)))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(
                svg,
                r#"{indent}<polygon points="{points}" {fill}/>"#,
                fill = fill_attrs(*fill),
            );
        }
        Primitive::Label { rect, text, color } => {
            let _ = writeln!(
                svg,
                r#"{indent}<foreignObject x="{x}" y="{y}" width="{w}" height="{h}"><div xmlns="http://www.w3.org/1999/xhtml" style="{LABEL_STYLE} line-height: {h}px; color: {color}">{text}</div></foreignObject>"#,
                x = num(rect.left()),
                y = num(rect.top()),
                w = num(rect.width()),
                h = num(rect.height()),
                color = hex_color::to_hex(*color),
                text = escape_xml(text),
            );
        }
    }
}

/// Single centred line, cut with an ellipsis when wider than the box.
const LABEL_STYLE: &str = "width: 100%; height: 100%; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; text-align: center;";

fn fill_attrs(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == 255 {
        format!(r#"fill="{}""#, hex_color::to_hex(color))
    } else {
        format!(
            r#"fill="{}" fill-opacity="{}""#,
            hex_color::to_hex(Color32::from_rgb(r, g, b)),
            num(a as f32 / 255.0)
        )
    }
}

/// At most two decimals, no trailing zeros.
fn num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(num(200.0), "200");
        assert_eq!(num(27.050001), "27.05");
        assert_eq!(num(3.5), "3.5");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn long_label_is_cut_with_ellipsis() {
        let mut svg = String::new();
        let label = Primitive::Label {
            rect: egui::Rect::from_min_size(egui::pos2(12.5, 2.0), egui::vec2(40.0, 16.0)),
            text: "Quarterly infrastructure migration complete".to_string(),
            color: Color32::from_rgb(34, 34, 34),
        };
        write_primitive(&mut svg, &label, "");
        assert!(svg.starts_with(r#"<foreignObject x="12.5" y="2" width="40" height="16">"#));
        assert!(svg.contains("text-overflow: ellipsis;"));
        assert!(svg.contains("white-space: nowrap;"));
        assert!(svg.contains("overflow: hidden;"));
        assert!(svg.contains("color: #222222"));
        assert!(svg.contains(">Quarterly infrastructure migration complete</div></foreignObject>"));
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_xml(r#"R&D <"beta">"#), "R&amp;D &lt;&quot;beta&quot;&gt;");
    }

    #[test]
    fn translucent_fill_gets_opacity() {
        assert_eq!(fill_attrs(Color32::from_rgb(204, 204, 204)), r##"fill="#CCCCCC""##);
        assert!(fill_attrs(Color32::from_rgba_unmultiplied(0, 0, 0, 0)).contains("fill-opacity=\"0\""));
    }
}
