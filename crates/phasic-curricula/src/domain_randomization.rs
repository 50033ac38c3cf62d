//! Uniform-random task sampling

use rand::Rng;

use phasic_core::{Curriculum, CurriculumError, EncodedTask, Result, TaskSpace};

/// Curriculum that samples uniformly at random over its task space
///
/// The default sampler installed when a phase is given as a bare task
/// space.
pub struct DomainRandomization {
    task_space: TaskSpace,
}

impl DomainRandomization {
    /// Create a uniform sampler over the given space
    pub fn new(task_space: TaskSpace) -> Result<Self> {
        if task_space.is_empty() {
            return Err(CurriculumError::Config(
                "cannot sample from an empty task space".to_string(),
            ));
        }
        Ok(Self { task_space })
    }
}

impl Curriculum for DomainRandomization {
    fn name(&self) -> &str {
        "domain_randomization"
    }

    fn task_space(&self) -> &TaskSpace {
        &self.task_space
    }

    fn sample(&mut self, k: usize) -> Result<Vec<EncodedTask>> {
        let mut rng = rand::thread_rng();
        let n = self.task_space.len();
        Ok((0..k).map(|_| rng.gen_range(0..n)).collect())
    }
}
