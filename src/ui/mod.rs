pub mod milestone;
pub mod paint;
pub mod shapes;
pub mod style;
pub mod task_item;
pub mod theme;

pub use milestone::{MilestoneDisplay, MilestoneProps};
pub use paint::{paint_task_item, show_task_item};
pub use shapes::Primitive;
pub use style::{resolve_colors, ResolvedColors};
pub use task_item::{progress_point_x, Handle, HitTarget, OnEventStart, TaskItem};
