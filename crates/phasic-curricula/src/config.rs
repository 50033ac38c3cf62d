//! Configuration loading for Phasic curricula
//!
//! Curricula can be described declaratively in TOML and built at startup,
//! so a training run's phase schedule lives next to the rest of its
//! configuration.

use std::path::Path;

use config::File;
use serde::Deserialize;

use phasic_core::{CurriculumError, Result, Task, TaskSpace};

use crate::condition::StoppingCondition;
use crate::meta::{Phase, SequentialMetaCurriculum};
use crate::sequential::SequentialCurriculum;

/// Configuration for one flat sequencer
#[derive(Debug, Clone, Deserialize)]
pub struct SequentialConfig {
    /// Ordered task list
    pub tasks: Vec<Task>,
    /// Per-task repeat counts, one per task; defaults to 1 each
    #[serde(default)]
    pub num_repeats: Option<Vec<usize>>,
    /// Wrap to the start after the last task
    #[serde(default = "default_repeat_list")]
    pub repeat_list: bool,
}

fn default_repeat_list() -> bool {
    true
}

impl SequentialConfig {
    /// Build the configured sequencer
    pub fn build(&self) -> Result<SequentialCurriculum> {
        SequentialCurriculum::new(
            self.tasks.clone(),
            self.num_repeats.clone(),
            self.repeat_list,
        )
    }
}

/// Configuration for a sequential meta curriculum
///
/// `tasks` defines the orchestrator's own task space; every task emitted by
/// a phase must belong to it.
#[derive(Debug, Clone, Deserialize)]
pub struct MetaConfig {
    /// Tasks of the orchestrator's task space, in encoding order
    pub tasks: Vec<Task>,
    /// One sequencer per phase
    pub phases: Vec<SequentialConfig>,
    /// Condition strings, one per phase except the last
    pub stopping_conditions: Vec<String>,
}

impl MetaConfig {
    /// Parse from a TOML string
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| CurriculumError::Config(e.to_string()))
    }

    /// Load from a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| CurriculumError::Config(e.to_string()))?;
        settings
            .try_deserialize()
            .map_err(|e| CurriculumError::Config(e.to_string()))
    }

    /// Build the configured meta curriculum
    ///
    /// Phase/condition count mismatches and malformed condition strings
    /// surface here, before training starts.
    pub fn build(&self) -> Result<SequentialMetaCurriculum> {
        let phases = self
            .phases
            .iter()
            .map(|phase| {
                Ok(Phase::Curriculum(
                    Box::new(phase.build()?) as Box<dyn phasic_core::Curriculum>
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        let conditions = self
            .stopping_conditions
            .iter()
            .map(|s| StoppingCondition::parse(s))
            .collect::<Result<Vec<_>>>()?;
        let task_space = TaskSpace::discrete(self.tasks.clone());
        SequentialMetaCurriculum::new(phases, conditions, task_space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phasic_core::Curriculum;
    use serde_json::json;

    const META_TOML: &str = r#"
        tasks = ["easy", "medium", "hard"]
        stopping_conditions = ["episodes>=2", "steps>=100|episode_return>=0.9"]

        [[phases]]
        tasks = ["easy"]
        num_repeats = [2]

        [[phases]]
        tasks = ["easy", "medium"]

        [[phases]]
        tasks = ["medium", "hard"]
        repeat_list = false
    "#;

    #[test]
    fn test_sequential_config_defaults() {
        let config: SequentialConfig = toml::from_str(r#"tasks = ["a", "b"]"#).unwrap();
        assert!(config.repeat_list);
        assert!(config.num_repeats.is_none());
        assert!(config.build().is_ok());
    }

    #[test]
    fn test_sequential_config_builds() {
        let config: SequentialConfig = toml::from_str(
            r#"
            tasks = ["a", "b"]
            num_repeats = [1, 3]
            "#,
        )
        .unwrap();
        let mut curriculum = config.build().unwrap();
        assert_eq!(curriculum.remaining_tasks(), 4);
        assert_eq!(curriculum.sample(2).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_meta_config_round_trip() {
        let config = MetaConfig::from_toml_str(META_TOML).unwrap();
        assert_eq!(config.phases.len(), 3);

        let mut meta = config.build().unwrap();
        assert_eq!(meta.task_space().len(), 3);
        let sampled = meta.sample(1).unwrap();
        assert_eq!(meta.task_space().decode(sampled[0]).unwrap(), json!("easy"));
    }

    #[test]
    fn test_meta_config_bad_condition_fails_at_build() {
        let mut config = MetaConfig::from_toml_str(META_TOML).unwrap();
        config.stopping_conditions[0] = "reward>=1".to_string();
        assert!(matches!(
            config.build(),
            Err(CurriculumError::Condition(_))
        ));
    }

    #[test]
    fn test_meta_config_count_mismatch_fails_at_build() {
        let mut config = MetaConfig::from_toml_str(META_TOML).unwrap();
        config.stopping_conditions.pop();
        assert!(matches!(config.build(), Err(CurriculumError::Config(_))));
    }
}
