pub mod interaction;
pub mod task;
pub mod timeline;

pub use interaction::{Capabilities, InteractionKind, PointerEvent, TextDirection};
pub use task::{StyleSet, TaskGeometry};
pub use timeline::TimelineViewport;
