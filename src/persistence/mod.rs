pub mod files;
pub mod store;

pub use files::{atomic_write, ensure_store_dir, get_store_dir, init_local_store};
pub use store::{seed_tasks, LoadOutcome, TaskStore, STORE_FILE};
