//! Example 02: Filtering and Live Queries
//!
//! This example demonstrates the filter pipeline: search text and the
//! persisted sort/hide preferences combine into one live task list that
//! follows every write to the store.
//!
//! Run with: cargo run --example 02_filtering

use eyre::{Result, eyre};
use std::time::Duration;
use todocore::{FilterPipeline, PreferenceStore, Seed, SortOrder, Task, TaskStore};
use tokio::sync::watch;
use tokio::time::timeout;

fn print_tasks(label: &str, tasks: &[Task]) {
    println!("   {} ({} tasks):", label, tasks.len());
    for task in tasks {
        let flag = if task.important { "!" } else { " " };
        let done = if task.completed { "x" } else { " " };
        println!("   [{}]{} {}", done, flag, task.name);
    }
    println!();
}

/// Wait until the visible list satisfies `accept`
async fn settle<F>(rx: &mut watch::Receiver<Vec<Task>>, accept: F) -> Result<Vec<Task>>
where
    F: Fn(&[Task]) -> bool,
{
    timeout(Duration::from_secs(2), async {
        loop {
            {
                let current = rx.borrow_and_update();
                if accept(&current) {
                    return Ok(current.clone());
                }
            }
            rx.changed().await.map_err(|_| eyre!("Pipeline stopped"))?;
        }
    })
    .await
    .map_err(|_| eyre!("Timed out waiting for task list"))?
}

#[tokio::main]
async fn main() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;

    println!("TaskStore Filtering Example");
    println!("===========================\n");

    let store = TaskStore::open(temp_dir.path().join("tasks.db"), Seed::Examples)?;
    let preferences = PreferenceStore::open(temp_dir.path().join("user_preferences.json"))?;
    let pipeline = FilterPipeline::spawn(store.clone(), preferences.clone()).await?;
    let mut visible = pipeline.tasks();

    // Default preferences: by date, completed tasks shown
    println!("1. Default view (BY_DATE, completed shown)");
    let tasks = settle(&mut visible, |t| t.len() == 8).await?;
    print_tasks("All tasks", &tasks);

    // Search is a case-sensitive substring match
    println!("2. Search for \"Call\"");
    pipeline.set_search_query("Call");
    let tasks = settle(&mut visible, |t| t.len() == 2).await?;
    print_tasks("Matching tasks", &tasks);

    println!("3. Search for \"call\" (case-sensitive, no match)");
    pipeline.set_search_query("call");
    let tasks = settle(&mut visible, |t| t.is_empty()).await?;
    print_tasks("Matching tasks", &tasks);

    // Preferences are persisted and re-drive the query
    println!("4. Clear search, sort BY_NAME, hide completed");
    pipeline.set_search_query("");
    preferences.update_sort_order(SortOrder::ByName).await?;
    preferences.update_hide_completed(true).await?;
    let tasks = settle(&mut visible, |t| t.len() == 6 && t[1].name == "Call Project supervisor").await?;
    print_tasks("Incomplete tasks by name", &tasks);
    println!("   Preferences saved to {}\n", preferences.path().display());

    // Writes to the store flow into the live list
    println!("5. Add a task while the list is live");
    store.insert(Task::new("Buy milk")).await?;
    let tasks = settle(&mut visible, |t| t.iter().any(|task| task.name == "Buy milk")).await?;
    print_tasks("After insert", &tasks);

    println!("Example complete!");
    Ok(())
}
