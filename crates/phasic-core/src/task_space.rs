//! Task space abstraction
//!
//! A task space maps domain-level task values to the canonical encoding
//! used for transport between curricula. Two spaces over the same values in
//! a different order are domain-compatible but use different encodings, so
//! translation between them must go through `decode` then `encode`.

use serde::{Deserialize, Serialize};

use crate::error::{CurriculumError, Result};

/// Domain-level task value, opaque to the scheduler
pub type Task = serde_json::Value;

/// Canonical encoded representation of a task within one task space
pub type EncodedTask = usize;

/// Discrete task space over an ordered list of task values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpace {
    tasks: Vec<Task>,
}

impl TaskSpace {
    /// Create a discrete task space over the given task values
    pub fn discrete(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Whether the given domain value belongs to this space
    pub fn contains(&self, task: &Task) -> bool {
        self.tasks.iter().any(|t| t == task)
    }

    /// Encode a domain value into this space's representation
    pub fn encode(&self, task: &Task) -> Result<EncodedTask> {
        self.tasks
            .iter()
            .position(|t| t == task)
            .ok_or_else(|| CurriculumError::Encode(task.to_string()))
    }

    /// Decode an encoded task back into its domain value
    pub fn decode(&self, encoded: EncodedTask) -> Result<Task> {
        self.tasks.get(encoded).cloned().ok_or_else(|| {
            CurriculumError::Decode(format!(
                "index {encoded} out of range for space of {} tasks",
                self.tasks.len()
            ))
        })
    }

    /// Number of tasks in the space
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the space is empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All task values in encoding order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
