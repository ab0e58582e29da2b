pub mod svg_export;

pub use svg_export::{export_svg, to_svg};
