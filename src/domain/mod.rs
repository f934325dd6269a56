pub mod enums;
pub mod task;
pub mod validate;
pub mod views;

pub use enums::{Filter, UiMode};
pub use task::{Task, TaskPatch};
pub use validate::{validate_text, ValidationError, MAX_TEXT_CHARS, MIN_TEXT_CHARS};
pub use views::{project, EmptyState, Projection, StatusCounts};
