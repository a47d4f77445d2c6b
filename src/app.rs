// Composition root: stores, pipeline and command handlers for one data dir

use crate::commands::{
    AddEditCommands, AddEditTaskEvent, DeleteAllCompletedCommand, TasksCommands, TasksEvent,
};
use crate::config::Config;
use crate::events::EventReceiver;
use crate::pipeline::FilterPipeline;
use crate::preferences::PreferenceStore;
use crate::scope::AppScope;
use crate::store::{Seed, TaskStore};
use eyre::{Context, Result};
use tracing::info;

/// The task list core, opened from a `Config`
pub struct App {
    config: Config,
    store: TaskStore,
    preferences: PreferenceStore,
    scope: AppScope,
    pipeline: FilterPipeline,
}

impl App {
    /// Open the stores and start the filter pipeline
    pub async fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let seed = if config.seed_example_tasks {
            Seed::Examples
        } else {
            Seed::Empty
        };
        let db_path = config.database_path();
        let store = tokio::task::spawn_blocking(move || TaskStore::open(&db_path, seed))
            .await
            .context("Task database open was interrupted")?
            .context("Failed to open task database")?;

        let preferences =
            PreferenceStore::open(config.preferences_path()).context("Failed to open preference store")?;

        let pipeline = FilterPipeline::spawn(store.clone(), preferences.clone())
            .await
            .context("Failed to start filter pipeline")?;
        info!(data_dir = %config.data_dir.display(), "Task list core ready");

        Ok(Self {
            config,
            store,
            preferences,
            scope: AppScope::new(),
            pipeline,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn pipeline(&self) -> &FilterPipeline {
        &self.pipeline
    }

    pub fn scope(&self) -> &AppScope {
        &self.scope
    }

    pub fn tasks_commands(&self) -> (TasksCommands, EventReceiver<TasksEvent>) {
        TasksCommands::new(
            self.store.clone(),
            self.preferences.clone(),
            self.config.event_capacity,
        )
    }

    pub fn add_edit_commands(&self) -> (AddEditCommands, EventReceiver<AddEditTaskEvent>) {
        AddEditCommands::new(self.store.clone(), self.config.event_capacity)
    }

    pub fn delete_all_completed_command(&self) -> DeleteAllCompletedCommand {
        DeleteAllCompletedCommand::new(self.store.clone(), self.scope.clone())
    }

    /// Stop the pipeline and wait briefly for application-scope jobs
    ///
    /// Returns false if jobs were still running when the grace period ended.
    pub async fn shutdown(self) -> bool {
        let Self {
            config,
            scope,
            pipeline,
            ..
        } = self;
        drop(pipeline);

        let drained = scope.shutdown(config.shutdown_grace()).await;
        info!(drained, "Task list core shut down");
        drained
    }
}
