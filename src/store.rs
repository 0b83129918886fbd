// In-memory task store with copy-on-write snapshots

use crate::error::{Result, TaskError};
use crate::ids::{ClockIds, IdGenerator};
use crate::models::{EditTask, Task};
use serde::{Serialize, Serializer};
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, info};

/// Immutable, ordered view of the task list at one point in time
///
/// Cloning is cheap. A snapshot never changes after it has been handed out;
/// store mutations build a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Arc<[Task]>);

impl Snapshot {
    fn from_vec(tasks: Vec<Task>) -> Self {
        Self(Arc::from(tasks))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.0
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl Deref for Snapshot {
    type Target = [Task];

    fn deref(&self) -> &[Task] {
        &self.0
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

/// Owner of the authoritative task list
pub struct TaskStore<G = ClockIds> {
    tasks: Snapshot,
    ids: G,
}

impl TaskStore<ClockIds> {
    /// Create an empty store issuing wall-clock ids
    pub fn new() -> Self {
        Self::with_ids(ClockIds::new())
    }
}

impl Default for TaskStore<ClockIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> TaskStore<G> {
    /// Create an empty store with the given id source
    pub fn with_ids(ids: G) -> Self {
        Self {
            tasks: Snapshot::default(),
            ids,
        }
    }

    /// Current snapshot, shared with the store
    pub fn snapshot(&self) -> Snapshot {
        self.tasks.clone()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn tasks_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn find(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    // ========================================================================
    // Intent handlers
    // ========================================================================

    /// Append a new pending task
    ///
    /// Fails with `DuplicateTitle` if a task with exactly the same title
    /// exists; the list is left untouched in that case.
    pub fn add_task(&mut self, title: &str) -> Result<Task> {
        if self.tasks.iter().any(|task| task.title == title) {
            debug!(title, "add_task: duplicate title rejected");
            return Err(TaskError::DuplicateTitle {
                title: title.to_string(),
            });
        }

        let task = Task::new(self.ids.next_id(), title);

        let mut next = Vec::with_capacity(self.tasks.len() + 1);
        next.extend_from_slice(&self.tasks);
        next.push(task.clone());
        self.tasks = Snapshot::from_vec(next);

        info!(id = task.id, title, count = self.tasks.len(), "Task added");
        Ok(task)
    }

    /// Flip the done flag of a task; unknown ids are ignored
    pub fn toggle_task_done(&mut self, id: i64) {
        if self.update_task(id, |task| task.done = !task.done) {
            debug!(id, "toggle_task_done: toggled");
        }
    }

    /// Delete a task; unknown ids are ignored
    ///
    /// Any confirmation must already have been resolved by the caller.
    pub fn remove_task(&mut self, id: i64) {
        if self.find(id).is_none() {
            debug!(id, "remove_task: no such task");
            return;
        }

        let next: Vec<Task> = self.tasks.iter().filter(|task| task.id != id).cloned().collect();
        self.tasks = Snapshot::from_vec(next);

        info!(id, count = self.tasks.len(), "Task removed");
    }

    /// Rename a task; unknown ids are ignored
    ///
    /// Titles are not checked for duplicates here, only on insertion.
    pub fn edit_task(&mut self, edit: EditTask) {
        let EditTask { id, new_task_title } = edit;
        if self.update_task(id, |task| task.title = new_task_title) {
            debug!(id, "edit_task: renamed");
        }
    }

    /// Copy the list, apply `f` to the task with `id` and publish the copy.
    /// Returns false (and publishes nothing) when no task matches.
    fn update_task(&mut self, id: i64, f: impl FnOnce(&mut Task)) -> bool {
        let Some(pos) = self.tasks.iter().position(|task| task.id == id) else {
            debug!(id, "update_task: no such task");
            return false;
        };

        let mut next = self.tasks.to_vec();
        f(&mut next[pos]);
        self.tasks = Snapshot::from_vec(next);
        true
    }
}
