//! Flat task sequencer

use tracing::debug;

use phasic_core::{Curriculum, CurriculumError, EncodedTask, Result, Task, TaskSpace};

/// Curriculum that replays a fixed list of tasks in order
///
/// Each task is emitted `num_repeats[i]` times before the cursor advances.
/// With `repeat_list` the sequencer wraps back to the start after the last
/// task; without it, sampling past the end is an exhaustion error on every
/// subsequent call.
pub struct SequentialCurriculum {
    task_list: Vec<Task>,
    num_repeats: Vec<usize>,
    repeat_list: bool,
    task_space: TaskSpace,
    task_index: usize,
    repeat_index: usize,
}

impl SequentialCurriculum {
    /// Create a sequencer over the given task list
    ///
    /// `num_repeats` defaults to one repeat per task when omitted. The
    /// sequencer's task space is positional over `task_list`, so sampled
    /// encodings are list indices.
    pub fn new(
        task_list: Vec<Task>,
        num_repeats: Option<Vec<usize>>,
        repeat_list: bool,
    ) -> Result<Self> {
        if task_list.is_empty() {
            return Err(CurriculumError::Config(
                "task list must not be empty".to_string(),
            ));
        }
        let num_repeats = num_repeats.unwrap_or_else(|| vec![1; task_list.len()]);
        if num_repeats.len() != task_list.len() {
            return Err(CurriculumError::Config(format!(
                "num_repeats has {} entries for {} tasks",
                num_repeats.len(),
                task_list.len()
            )));
        }
        if num_repeats.iter().any(|&r| r == 0) {
            return Err(CurriculumError::Config(
                "repeat counts must be positive".to_string(),
            ));
        }

        let task_space = TaskSpace::discrete(task_list.clone());
        Ok(Self {
            task_list,
            num_repeats,
            repeat_list,
            task_space,
            task_index: 0,
            repeat_index: 0,
        })
    }

    /// Number of samples left before the current pass is exhausted
    ///
    /// Exact for a single pass only; wraparound under `repeat_list` is not
    /// counted.
    pub fn remaining_tasks(&self) -> usize {
        if self.task_index >= self.task_list.len() {
            return 0;
        }
        (self.num_repeats[self.task_index] - self.repeat_index)
            + self.num_repeats[self.task_index + 1..].iter().sum::<usize>()
    }
}

impl Curriculum for SequentialCurriculum {
    fn name(&self) -> &str {
        "sequential"
    }

    fn task_space(&self) -> &TaskSpace {
        &self.task_space
    }

    fn sample(&mut self, k: usize) -> Result<Vec<EncodedTask>> {
        let mut tasks = Vec::with_capacity(k);
        for _ in 0..k {
            if self.task_index >= self.task_list.len() {
                if !self.repeat_list {
                    // Cursor stays at the end so later calls fail the same way
                    return Err(CurriculumError::Exhausted {
                        sampled: self.num_repeats.iter().sum(),
                    });
                }
                self.task_index = 0;
            }

            tasks.push(self.task_index);
            self.repeat_index += 1;

            if self.repeat_index >= self.num_repeats[self.task_index] {
                self.task_index += 1;
                self.repeat_index = 0;
            }
        }
        debug!(sampled = tasks.len(), remaining = self.remaining_tasks(), "sequencer sampled");
        Ok(tasks)
    }
}
