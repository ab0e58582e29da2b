use egui::vec2;
use pretty_assertions::assert_eq;

use gantt_milestone::io::{export_svg, to_svg};
use gantt_milestone::model::{Capabilities, TaskGeometry, TextDirection};
use gantt_milestone::ui::TaskItem;
use gantt_milestone::RenderConfig;

fn item(name: &str, capabilities: Capabilities) -> TaskItem {
    let mut task = TaskGeometry::new(name, 0.0, 200.0, 10.0, 20.0);
    task.progress_width = 100.0;
    TaskItem::new(task, capabilities, TextDirection::Ltr, false, &RenderConfig::default())
}

#[test]
fn document_lists_shapes_in_paint_order() {
    let svg = to_svg(&[item("Launch", Capabilities::READ_ONLY)], vec2(300.0, 60.0), true);
    let tags: Vec<&str> = svg
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("<rect") || l.starts_with("<polygon") || l.starts_with("<foreignObject"))
        .map(|l| l.split_whitespace().next().unwrap_or_default())
        .collect();
    assert_eq!(tags, ["<rect", "<rect", "<rect", "<polygon", "<polygon", "<foreignObject"]);
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="60""#));
    assert!(svg.contains(r##"<rect x="0" y="32" width="200" height="3.33" rx="3" ry="3" fill="#CCCCCC"/>"##));
    assert!(svg.contains(r#"<polygon points="172.95,10 200,20 172.95,30""#));
    assert!(svg.contains(">Launch</div>"));
    assert!(!svg.contains("handleGroup"));
}

#[test]
fn handles_are_optional_in_export() {
    let items = [item("Launch", Capabilities::ALL)];
    assert!(to_svg(&items, vec2(300.0, 60.0), true).contains(r#"<g class="handleGroup">"#));
    assert!(!to_svg(&items, vec2(300.0, 60.0), false).contains("handleGroup"));
}

#[test]
fn names_are_escaped() {
    let svg = to_svg(&[item("R&D <done>", Capabilities::ALL)], vec2(300.0, 60.0), false);
    assert!(svg.contains(">R&amp;D &lt;done&gt;</div>"));
}

#[test]
fn export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("milestones.svg");
    let items = [item("Launch", Capabilities::ALL)];
    export_svg(&items, vec2(300.0, 60.0), false, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, to_svg(&items, vec2(300.0, 60.0), false));
}

#[test]
fn export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.svg");
    let err = export_svg(&[], vec2(10.0, 10.0), false, &path).unwrap_err();
    assert!(err.to_string().contains("out.svg"));
}
