//! Phasic Core - Curriculum traits, task spaces, and shared errors
//!
//! This crate provides the foundational types used by every Phasic
//! curriculum implementation.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]

pub mod curriculum;
pub mod error;
pub mod task_space;

pub use curriculum::Curriculum;
pub use error::{CurriculumError, Result};
pub use task_space::{EncodedTask, Task, TaskSpace};
