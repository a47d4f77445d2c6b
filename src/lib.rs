// todocore - Reactive task list core with SQLite task store and persisted filter preferences

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod preferences;
pub mod scope;
pub mod store;

// Re-export main types for convenience
pub use app::App;
pub use commands::{
    AddEditCommands, AddEditTaskEvent, DeleteAllCompletedCommand, INVALID_NAME_MESSAGE, SaveResult,
    TasksCommands, TasksEvent,
};
pub use config::Config;
pub use error::{Error, Result};
pub use events::{EventReceiver, EventSender};
pub use filter::TaskQuery;
pub use logging::init_logging;
pub use models::{FilterPreferences, SortOrder, Task, TaskId, UNASSIGNED_ID, now_ms};
pub use pipeline::FilterPipeline;
pub use preferences::PreferenceStore;
pub use scope::AppScope;
pub use store::{LiveQuery, Seed, TaskStore};
