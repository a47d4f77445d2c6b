//! Example 03: Commands and One-Shot Events
//!
//! This example opens the full App from a Config and drives it through
//! the command handlers, printing the events a UI would react to.
//!
//! Run with: cargo run --example 03_commands

use eyre::{Result, eyre};
use todocore::{AddEditTaskEvent, App, Config, SaveResult, TaskQuery, TasksEvent, init_logging};

#[tokio::main]
async fn main() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let config = Config {
        seed_example_tasks: false,
        log_filter: "todocore=info".to_string(),
        ..Config::in_dir(temp_dir.path())
    };
    init_logging(&config.log_filter)?;

    println!("TaskStore Commands Example");
    println!("==========================\n");

    let app = App::open(config).await?;
    let (tasks, mut tasks_events) = app.tasks_commands();
    let (add_edit, mut add_edit_events) = app.add_edit_commands();

    // Add screen: blank names are rejected with a message
    println!("1. Add a task with a blank name");
    add_edit.add_task("   ", false).await?;
    if let Some(AddEditTaskEvent::ShowInvalidInputMessage(message)) = add_edit_events.try_recv() {
        println!("   Rejected: {}\n", message);
    }

    println!("2. Add tasks");
    for (name, important) in [("Buy milk", false), ("Pay rent", true), ("Water plants", false)] {
        add_edit.add_task(name, important).await?;
        if let Some(AddEditTaskEvent::NavigateBackWithResult(result)) = add_edit_events.try_recv() {
            tasks.show_saved_confirmation(result).await;
        }
    }
    while let Some(event) = tasks_events.try_recv() {
        println!("   Event: {:?}", event);
    }
    println!();

    let all = app.store().list(&TaskQuery::default()).await?;
    let milk = all
        .iter()
        .find(|t| t.name == "Buy milk")
        .cloned()
        .ok_or_else(|| eyre!("Buy milk was not stored"))?;

    // Edit screen
    println!("3. Rename \"{}\"", milk.name);
    add_edit.edit_task(&milk, "Buy oat milk", false).await?;
    if let Some(AddEditTaskEvent::NavigateBackWithResult(SaveResult::Updated)) = add_edit_events.try_recv() {
        println!("   {}\n", SaveResult::Updated.message());
    }

    // Delete with undo
    println!("4. Delete and undo");
    let renamed = app.store().get(milk.id).await?.ok_or_else(|| eyre!("Task {} vanished", milk.id))?;
    tasks.delete_task(renamed).await?;
    if let Some(TasksEvent::ShowUndoDeleteTaskMessage(deleted)) = tasks_events.try_recv() {
        println!("   Deleted \"{}\", undoing...", deleted.name);
        let id = tasks.undo_delete(deleted).await?;
        println!("   Restored with ID {}\n", id);
    }

    // Delete all completed runs on the application scope
    println!("5. Complete two tasks and delete all completed");
    for task in app.store().list(&TaskQuery::default()).await?.into_iter().take(2) {
        tasks.toggle_complete(&task, true).await?;
    }
    tasks.request_delete_all_completed().await;
    if let Some(TasksEvent::NavigateToDeleteAllCompletedScreen) = tasks_events.try_recv() {
        let removed = app.delete_all_completed_command().delete_all_completed().await??;
        println!("   Removed {} completed task(s)", removed);
    }
    let remaining = app.store().list(&TaskQuery::default()).await?;
    println!("   Remaining: {:?}\n", remaining.iter().map(|t| &t.name).collect::<Vec<_>>());

    let drained = app.shutdown().await;
    println!("Shut down cleanly: {}", drained);
    println!("\nExample complete!");
    Ok(())
}
