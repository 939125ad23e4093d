//! Ordered in-memory task collection.
//!
//! # Responsibility
//! - Hold tasks in insertion order, which is also display order.
//! - Resolve 1-based user indices against the current order.
//!
//! # Invariants
//! - Removal splices the sequence; later indices shift down by one.
//! - Out-of-range indices (including `0`) map to `TaskNotFound`.

use crate::error::TrackerError;
use crate::model::task::Task;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Snapshot of one task together with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedTask {
    pub index: usize,
    pub task: Task,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps tasks in their given order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Adds a task at the end of the list.
    pub fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Number of tasks in the list.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Task at 1-based `index`, or `TaskNotFound`.
    pub fn get(&self, index: usize) -> Result<&Task, TrackerError> {
        let position = self.position(index)?;
        Ok(&self.tasks[position])
    }

    /// Mutable task at 1-based `index`, or `TaskNotFound`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Task, TrackerError> {
        let position = self.position(index)?;
        Ok(&mut self.tasks[position])
    }

    /// Removes the task at a 1-based index and returns it.
    pub fn remove(&mut self, index: usize) -> Result<Task, TrackerError> {
        let position = self.position(index)?;
        Ok(self.tasks.remove(position))
    }

    /// Removes the first task structurally equal to `task`.
    ///
    /// Reference-based counterpart of [`TaskList::remove`] for callers that
    /// hold a task snapshot rather than its current position. Duplicates
    /// after the first match are left in place.
    pub fn remove_task(&mut self, task: &Task) -> Option<Task> {
        let position = self.tasks.iter().position(|candidate| candidate == task)?;
        Some(self.tasks.remove(position))
    }

    /// Every task with its current index.
    pub fn indexed(&self) -> Vec<IndexedTask> {
        self.select(|_| true)
    }

    /// Tasks whose name contains `keyword` (case-sensitive).
    pub fn find(&self, keyword: &str) -> Vec<IndexedTask> {
        self.select(|task| task.name().contains(keyword))
    }

    /// Tasks whose end timestamp equals `at` exactly.
    pub fn ending_at(&self, at: NaiveDateTime) -> Vec<IndexedTask> {
        self.select(|task| task.ends_at() == Some(at))
    }

    fn select(&self, predicate: impl Fn(&Task) -> bool) -> Vec<IndexedTask> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| predicate(task))
            .map(|(position, task)| IndexedTask {
                index: position + 1,
                task: task.clone(),
            })
            .collect()
    }

    fn position(&self, index: usize) -> Result<usize, TrackerError> {
        if index == 0 || index > self.tasks.len() {
            return Err(TrackerError::TaskNotFound);
        }
        Ok(index - 1)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
