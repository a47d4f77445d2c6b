//! Example 01: Basic CRUD Operations
//!
//! This example demonstrates inserting, reading, updating and deleting
//! tasks directly on the TaskStore.
//!
//! Run with: cargo run --example 01_basic_crud

use eyre::Result;
use todocore::{Seed, SortOrder, Task, TaskQuery, TaskStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Create a temporary directory for this example
    let temp_dir = tempfile::tempdir()?;
    let db_path = temp_dir.path().join("tasks.db");

    println!("TaskStore Basic CRUD Example");
    println!("============================\n");
    println!("Database: {}\n", db_path.display());

    let store = TaskStore::open(&db_path, Seed::Empty)?;
    println!("Store opened successfully.\n");

    // CREATE
    println!("1. CREATE - Adding two tasks...");
    let milk = store.insert(Task::new("Buy milk")).await?;
    let taxes = store.insert(Task::new("File taxes").important(true)).await?;
    println!("   Created tasks with IDs {} and {}\n", milk, taxes);

    // READ
    println!("2. READ - Retrieving the first task...");
    let retrieved = store.get(milk).await?;
    match &retrieved {
        Some(task) => {
            println!("   Found task:");
            println!("   - ID: {}", task.id);
            println!("   - Name: {}", task.name);
            println!("   - Created: {}", task.created_date_formatted());
        }
        None => println!("   Task not found!"),
    }
    println!();

    // UPDATE
    println!("3. UPDATE - Completing the task...");
    if let Some(task) = retrieved {
        store.update(task.completed(true)).await?;
        let updated = store.get(milk).await?;
        println!(
            "   Completed = {}\n",
            updated.map(|t| t.completed).unwrap_or_default()
        );
    }

    // LIST
    println!("4. LIST - Showing all tasks by date...");
    let all = store.list(&TaskQuery::new("", SortOrder::ByDate, false)).await?;
    println!("   Total tasks: {}", all.len());
    for task in &all {
        let flag = if task.important { "!" } else { " " };
        let done = if task.completed { "x" } else { " " };
        println!("   [{}]{} {} : {}", done, flag, task.id, task.name);
    }
    println!();

    // DELETE
    println!("5. DELETE - Removing completed tasks...");
    let removed = store.delete_completed().await?;
    println!("   Removed {} task(s).\n", removed);

    let remaining = store.list(&TaskQuery::default()).await?;
    println!("   Verification: {} task(s) remain\n", remaining.len());

    println!("Example complete!");
    Ok(())
}
