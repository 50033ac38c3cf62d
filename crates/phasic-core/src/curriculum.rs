//! Curriculum trait

use crate::error::Result;
use crate::task_space::{EncodedTask, Task, TaskSpace};

/// Trait for task-sampling curricula
///
/// A curriculum owns a task space and hands out encoded tasks on demand.
/// Training loops report completed episodes back through
/// `update_on_episode`; curricula that do not adapt to training signals
/// keep the default no-op.
pub trait Curriculum: Send + Sync {
    /// Curriculum name
    fn name(&self) -> &str;

    /// The task space this curriculum samples from
    fn task_space(&self) -> &TaskSpace;

    /// Choose the next k tasks, encoded in this curriculum's task space
    fn sample(&mut self, k: usize) -> Result<Vec<EncodedTask>>;

    /// Report a completed episode
    fn update_on_episode(
        &mut self,
        episode_return: f64,
        episode_len: u64,
        episode_task: &Task,
        env_id: Option<usize>,
    ) -> Result<()> {
        let _ = (episode_return, episode_len, episode_task, env_id);
        Ok(())
    }

    /// Whether this curriculum needs per-step updates
    fn requires_step_updates(&self) -> bool {
        false
    }

    /// Whether this curriculum needs per-episode updates
    fn requires_episode_updates(&self) -> bool {
        false
    }

    /// Whether this curriculum needs centrally-aggregated updates
    fn requires_central_updates(&self) -> bool {
        false
    }
}
