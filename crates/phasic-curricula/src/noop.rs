//! Single-task curriculum

use phasic_core::{Curriculum, CurriculumError, EncodedTask, Result, Task, TaskSpace};

/// Curriculum that always returns the same task
///
/// Used by the phase orchestrator to wrap a raw task value into the
/// curriculum interface.
pub struct NoopCurriculum {
    task: Task,
    encoded: EncodedTask,
    task_space: TaskSpace,
}

impl NoopCurriculum {
    /// Create a curriculum pinned to one task within the given space
    pub fn new(task: Task, task_space: TaskSpace) -> Result<Self> {
        if !task_space.contains(&task) {
            return Err(CurriculumError::Config(format!(
                "task {task} is not in the task space"
            )));
        }
        let encoded = task_space.encode(&task)?;
        Ok(Self {
            task,
            encoded,
            task_space,
        })
    }

    /// The pinned task value
    pub fn task(&self) -> &Task {
        &self.task
    }
}

impl Curriculum for NoopCurriculum {
    fn name(&self) -> &str {
        "noop"
    }

    fn task_space(&self) -> &TaskSpace {
        &self.task_space
    }

    fn sample(&mut self, k: usize) -> Result<Vec<EncodedTask>> {
        Ok(vec![self.encoded; k])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sample_repeats_single_task() {
        let space = TaskSpace::discrete(vec![json!(1), json!(2), json!(3)]);
        let mut curriculum = NoopCurriculum::new(json!(2), space.clone()).unwrap();

        assert_eq!(curriculum.task(), &json!(2));
        let tasks = curriculum.sample(4).unwrap();
        assert_eq!(tasks.len(), 4);
        for encoded in tasks {
            assert_eq!(space.decode(encoded).unwrap(), json!(2));
        }
    }

    #[test]
    fn test_task_outside_space_is_config_error() {
        let space = TaskSpace::discrete(vec![json!(1), json!(2)]);
        let result = NoopCurriculum::new(json!(9), space);
        assert!(matches!(result, Err(CurriculumError::Config(_))));
    }

    #[test]
    fn test_no_update_requirements() {
        let space = TaskSpace::discrete(vec![json!("a")]);
        let curriculum = NoopCurriculum::new(json!("a"), space).unwrap();
        assert!(!curriculum.requires_step_updates());
        assert!(!curriculum.requires_episode_updates());
        assert!(!curriculum.requires_central_updates());
    }
}
