//! Interactive milestone shapes for Gantt charts.
//!
//! A host lays its tasks out in pixel space as [`model::TaskGeometry`]
//! records, wraps each in a [`ui::TaskItem`] together with the capabilities it
//! grants, and paints it with [`ui::show_task_item`]. Pointer presses come
//! back through [`ui::OnEventStart`] as a typed [`model::InteractionKind`];
//! tracking the drag afterwards is up to the host.

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod ui;

pub use config::RenderConfig;
pub use error::{ConfigError, ExportError};
