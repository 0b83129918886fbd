//! Demo 01: Basic Flow
//!
//! Walks a store through add, duplicate rejection, toggle, rename and
//! remove, printing each snapshot.
//!
//! Run with: cargo run --example 01_basic_flow

use eyre::Result;
use tasklist::{EditTask, Messages, Snapshot, TaskStore};

fn show(label: &str, snapshot: &Snapshot) {
    println!("{}", label);
    if snapshot.is_empty() {
        println!("   (empty)");
    }
    for task in snapshot.iter() {
        println!("   - [{}] {} (id {})", if task.done { "x" } else { " " }, task.title, task.id);
    }
    println!();
}

fn main() -> Result<()> {
    println!("tasklist Basic Flow Demo");
    println!("========================\n");

    let messages = Messages::default();
    let mut store = TaskStore::new();

    // ADD
    let task = store.add_task("Buy milk")?;
    show("1. ADD - after adding \"Buy milk\":", &store.snapshot());

    // DUPLICATE
    println!("2. DUPLICATE - adding \"Buy milk\" again...");
    match store.add_task("Buy milk") {
        Ok(_) => println!("   Unexpectedly accepted!"),
        Err(e) if e.is_duplicate_title() => {
            println!("   {}: {}", messages.duplicate_title, messages.duplicate_body);
        }
        Err(e) => return Err(e.into()),
    }
    println!("   Task count is still {}\n", store.tasks_count());

    // TOGGLE
    let before_toggle = store.snapshot();
    store.toggle_task_done(task.id);
    show("3. TOGGLE - marked done:", &store.snapshot());
    show("   Snapshot taken before the toggle is unchanged:", &before_toggle);

    // RENAME
    store.edit_task(EditTask {
        id: task.id,
        new_task_title: "Buy oat milk".to_string(),
    });
    show("4. RENAME - renamed to \"Buy oat milk\":", &store.snapshot());

    // REMOVE
    store.remove_task(task.id);
    show("5. REMOVE - removed:", &store.snapshot());

    println!("Demo complete!");
    Ok(())
}
