// tasklist - In-memory to-do list with copy-on-write snapshots

pub mod config;
pub mod error;
pub mod ids;
pub mod messages;
pub mod models;
pub mod screen;
pub mod store;

// Re-export main types for convenience
pub use config::Config;
pub use error::{Result, TaskError};
pub use ids::{ClockIds, IdGenerator, IdStrategy, SequentialIds};
pub use messages::{Locale, Messages};
pub use models::{EditTask, Task, now_ms};
pub use screen::{Command, Confirmation, Flow, Screen};
pub use store::{Snapshot, TaskStore};
