//! Phasic Curricula - Sequential curriculum scheduling
//!
//! This crate provides the curricula that drive phased training:
//! leaf samplers (`NoopCurriculum`, `DomainRandomization`), the flat
//! `SequentialCurriculum` sequencer, the stopping-condition mini-language,
//! and the `SequentialMetaCurriculum` phase orchestrator.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]

pub mod condition;
pub mod config;
pub mod domain_randomization;
pub mod meta;
pub mod noop;
pub mod sequential;

pub use condition::{Comparator, Metric, PhaseMetrics, StoppingCondition};
pub use config::{MetaConfig, SequentialConfig};
pub use domain_randomization::DomainRandomization;
pub use meta::{MetaStats, Phase, SequentialMetaCurriculum};
pub use noop::NoopCurriculum;
pub use sequential::SequentialCurriculum;
