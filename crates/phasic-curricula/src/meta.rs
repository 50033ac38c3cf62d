//! Phase orchestration
//!
//! `SequentialMetaCurriculum` chains sub-curricula into ordered phases.
//! Episode updates feed a phase-scoped metrics ledger; when the active
//! phase's stopping condition holds, the next phase becomes active and the
//! ledger resets. Sampled tasks are recoded from the sub-curriculum's task
//! space into the orchestrator's own, so callers see one encoding no
//! matter which phase is active.

use serde::Serialize;
use tracing::{debug, info, warn};

use phasic_core::{Curriculum, CurriculumError, EncodedTask, Result, Task, TaskSpace};

use crate::condition::{PhaseMetrics, StoppingCondition};
use crate::domain_randomization::DomainRandomization;
use crate::noop::NoopCurriculum;

/// Accepted shapes for a phase entry
///
/// Resolved once at construction into a uniform curriculum handle: a bare
/// task space becomes a uniform sampler, a raw task value becomes a
/// single-task curriculum bound to the orchestrator's space.
pub enum Phase {
    Curriculum(Box<dyn Curriculum>),
    Space(TaskSpace),
    Task(Task),
}

impl Phase {
    fn resolve(self, meta_space: &TaskSpace) -> Result<Box<dyn Curriculum>> {
        match self {
            Phase::Curriculum(curriculum) => Ok(curriculum),
            Phase::Space(space) => Ok(Box::new(DomainRandomization::new(space)?)),
            Phase::Task(task) => Ok(Box::new(NoopCurriculum::new(task, meta_space.clone())?)),
        }
    }
}

/// Meta curriculum that runs its phases in order
pub struct SequentialMetaCurriculum {
    task_space: TaskSpace,
    phases: Vec<Box<dyn Curriculum>>,
    stopping_conditions: Vec<StoppingCondition>,
    phase_index: usize,
    metrics: PhaseMetrics,
    total_episodes: u64,
    total_steps: u64,
}

impl SequentialMetaCurriculum {
    /// Create a meta curriculum over the given phases
    ///
    /// There must be exactly one stopping condition per phase except the
    /// last, which runs for the remainder of training.
    pub fn new(
        phases: Vec<Phase>,
        stopping_conditions: Vec<StoppingCondition>,
        task_space: TaskSpace,
    ) -> Result<Self> {
        if phases.is_empty() {
            return Err(CurriculumError::Config(
                "must provide at least one phase".to_string(),
            ));
        }
        if stopping_conditions.len() != phases.len() - 1 {
            return Err(CurriculumError::Config(format!(
                "{} stopping conditions for {} phases, expected one fewer than phases",
                stopping_conditions.len(),
                phases.len()
            )));
        }
        if phases.len() == 1 {
            warn!("sequential meta curriculum has a single phase, consider using it directly");
        }

        let phases = phases
            .into_iter()
            .map(|phase| phase.resolve(&task_space))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            task_space,
            phases,
            stopping_conditions,
            phase_index: 0,
            metrics: PhaseMetrics::default(),
            total_episodes: 0,
            total_steps: 0,
        })
    }

    /// The currently active phase's curriculum
    pub fn current_curriculum(&self) -> &dyn Curriculum {
        self.phases[self.phase_index].as_ref()
    }

    /// Index of the active phase, 0-based
    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    /// Number of phases
    pub fn num_phases(&self) -> usize {
        self.phases.len()
    }

    /// Metrics collected since the last phase transition
    pub fn metrics(&self) -> &PhaseMetrics {
        &self.metrics
    }

    /// Snapshot of scheduling statistics
    pub fn stats(&self) -> MetaStats {
        MetaStats {
            phase_index: self.phase_index,
            num_phases: self.phases.len(),
            phase_episodes: self.metrics.episodes,
            phase_steps: self.metrics.steps,
            mean_episode_return: self.metrics.mean_episode_return(),
            total_episodes: self.total_episodes,
            total_steps: self.total_steps,
        }
    }
}

impl Curriculum for SequentialMetaCurriculum {
    fn name(&self) -> &str {
        "sequential_meta"
    }

    fn task_space(&self) -> &TaskSpace {
        &self.task_space
    }

    /// Sample from the active phase, recoded into the orchestrator's space
    fn sample(&mut self, k: usize) -> Result<Vec<EncodedTask>> {
        let sampled = self.phases[self.phase_index].sample(k)?;

        let sub_space = self.phases[self.phase_index].task_space();
        let mut recoded = Vec::with_capacity(sampled.len());
        for encoded in sampled {
            let task = sub_space.decode(encoded)?;
            recoded.push(self.task_space.encode(&task)?);
        }
        debug!(phase = self.phase_index, sampled = recoded.len(), "meta curriculum sampled");
        Ok(recoded)
    }

    /// Record an episode and advance the phase when its condition holds
    ///
    /// Updates are not forwarded to sub-curricula; only the orchestrator's
    /// ledger accumulates history. At most one transition happens per call
    /// even if the next phase's condition already holds.
    fn update_on_episode(
        &mut self,
        episode_return: f64,
        episode_len: u64,
        _episode_task: &Task,
        _env_id: Option<usize>,
    ) -> Result<()> {
        self.metrics.record(episode_return, episode_len);
        self.total_episodes += 1;
        self.total_steps += episode_len;

        if self.phase_index < self.stopping_conditions.len()
            && self.stopping_conditions[self.phase_index].evaluate(&self.metrics)
        {
            self.phase_index += 1;
            self.metrics.reset();
            info!(
                phase = self.phase_index,
                total_episodes = self.total_episodes,
                "stopping condition met, advancing to next phase"
            );
        }
        Ok(())
    }

    fn requires_episode_updates(&self) -> bool {
        true
    }
}

/// Scheduling statistics snapshot
#[derive(Debug, Clone, Serialize)]
pub struct MetaStats {
    pub phase_index: usize,
    pub num_phases: usize,
    pub phase_episodes: u64,
    pub phase_steps: u64,
    pub mean_episode_return: f64,
    pub total_episodes: u64,
    pub total_steps: u64,
}
