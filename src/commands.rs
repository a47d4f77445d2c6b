// Command handlers: mutate the task store and emit one-shot events

use crate::error::{Error, Result};
use crate::events::{self, EventReceiver, EventSender};
use crate::models::{SortOrder, Task, TaskId};
use crate::preferences::PreferenceStore;
use crate::scope::AppScope;
use crate::store::TaskStore;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

pub const INVALID_NAME_MESSAGE: &str = "Name cannot be empty";

/// Outcome of a successful save on the add/edit screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveResult {
    Added,
    Updated,
}

impl SaveResult {
    /// Confirmation shown on the task list
    pub fn message(self) -> &'static str {
        match self {
            SaveResult::Added => "Task added",
            SaveResult::Updated => "Task updated",
        }
    }
}

/// Events for the task list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TasksEvent {
    /// Carries the full deleted task so it can be re-inserted
    ShowUndoDeleteTaskMessage(Task),
    NavigateToAddTaskScreen,
    NavigateToEditTaskScreen(Task),
    ShowTaskSavedConfirmationMessage(String),
    NavigateToDeleteAllCompletedScreen,
}

/// Events for the add/edit screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddEditTaskEvent {
    ShowInvalidInputMessage(String),
    NavigateBackWithResult(SaveResult),
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(INVALID_NAME_MESSAGE.to_string()));
    }
    Ok(())
}

// ============================================================================
// Task list
// ============================================================================

/// Commands issued from the task list
pub struct TasksCommands {
    store: TaskStore,
    preferences: PreferenceStore,
    events: EventSender<TasksEvent>,
}

impl TasksCommands {
    pub fn new(
        store: TaskStore,
        preferences: PreferenceStore,
        event_capacity: usize,
    ) -> (Self, EventReceiver<TasksEvent>) {
        let (events, receiver) = events::channel(event_capacity);
        (
            Self {
                store,
                preferences,
                events,
            },
            receiver,
        )
    }

    pub async fn select_task(&self, task: Task) {
        self.events.send(TasksEvent::NavigateToEditTaskScreen(task)).await;
    }

    pub async fn request_new_task(&self) {
        self.events.send(TasksEvent::NavigateToAddTaskScreen).await;
    }

    /// Set only the completed flag; no confirmation is emitted
    pub async fn toggle_complete(&self, task: &Task, checked: bool) -> Result<()> {
        debug!(id = task.id, checked, "toggle_complete");
        self.store.set_completed(task.id, checked).await
    }

    /// Delete the task and offer to undo it
    pub async fn delete_task(&self, task: Task) -> Result<()> {
        self.store.delete(&task).await?;
        self.events.send(TasksEvent::ShowUndoDeleteTaskMessage(task)).await;
        Ok(())
    }

    /// Re-insert a deleted task under its original id and creation time
    pub async fn undo_delete(&self, task: Task) -> Result<TaskId> {
        let id = self.store.insert(task).await?;
        info!(id, "undo_delete: restored task");
        Ok(id)
    }

    pub async fn show_saved_confirmation(&self, result: SaveResult) {
        self.events
            .send(TasksEvent::ShowTaskSavedConfirmationMessage(result.message().to_string()))
            .await;
    }

    pub async fn request_delete_all_completed(&self) {
        self.events.send(TasksEvent::NavigateToDeleteAllCompletedScreen).await;
    }

    pub async fn update_sort_order(&self, sort_order: SortOrder) -> Result<()> {
        self.preferences.update_sort_order(sort_order).await
    }

    pub async fn update_hide_completed(&self, hide_completed: bool) -> Result<()> {
        self.preferences.update_hide_completed(hide_completed).await
    }
}

// ============================================================================
// Add / edit
// ============================================================================

/// Commands issued from the add/edit screen
pub struct AddEditCommands {
    store: TaskStore,
    events: EventSender<AddEditTaskEvent>,
}

impl AddEditCommands {
    pub fn new(store: TaskStore, event_capacity: usize) -> (Self, EventReceiver<AddEditTaskEvent>) {
        let (events, receiver) = events::channel(event_capacity);
        (Self { store, events }, receiver)
    }

    /// Create a task; a blank name is reported and nothing is stored
    pub async fn add_task(&self, name: &str, important: bool) -> Result<()> {
        if let Err(e) = validate_name(name) {
            self.events.send(AddEditTaskEvent::ShowInvalidInputMessage(e.to_string())).await;
            return Ok(());
        }

        let id = self.store.insert(Task::new(name).important(important)).await?;
        info!(id, "add_task: created task");
        self.events
            .send(AddEditTaskEvent::NavigateBackWithResult(SaveResult::Added))
            .await;
        Ok(())
    }

    /// Replace name and importance of an existing task
    pub async fn edit_task(&self, existing: &Task, name: &str, important: bool) -> Result<()> {
        if let Err(e) = validate_name(name) {
            self.events.send(AddEditTaskEvent::ShowInvalidInputMessage(e.to_string())).await;
            return Ok(());
        }

        let updated = Task {
            name: name.to_string(),
            important,
            ..existing.clone()
        };
        self.store.update(updated).await?;
        info!(id = existing.id, "edit_task: updated task");
        self.events
            .send(AddEditTaskEvent::NavigateBackWithResult(SaveResult::Updated))
            .await;
        Ok(())
    }
}

// ============================================================================
// Delete all completed
// ============================================================================

/// Confirmation of the delete-all-completed dialog
///
/// The deletion runs on the application scope, so it completes even when
/// the dialog that confirmed it is dismissed right away.
pub struct DeleteAllCompletedCommand {
    store: TaskStore,
    scope: AppScope,
}

impl DeleteAllCompletedCommand {
    pub fn new(store: TaskStore, scope: AppScope) -> Self {
        Self { store, scope }
    }

    /// Start the deletion; the handle may be dropped without cancelling it
    pub fn delete_all_completed(&self) -> JoinHandle<Result<usize>> {
        let store = self.store.clone();
        self.scope.spawn("delete_all_completed", async move {
            let result = store.delete_completed().await;
            if let Err(e) = &result {
                error!(error = %e, "delete_all_completed: failed");
            }
            result
        })
    }
}
