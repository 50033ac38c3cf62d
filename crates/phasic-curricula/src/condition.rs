//! Stopping-condition mini-language
//!
//! Conditions gate phase transitions in the meta curriculum. They are given
//! either as predicates over the phase metrics or as strings in a narrow
//! grammar: `metric comparator value` clauses joined by `|` or `&`.
//! Recognized metrics are `steps`, `episodes`, and `episode_return` (mean
//! return of the current phase). All validation happens at parse time so a
//! bad condition fails before training starts.
//!
//! `|` is tested before `&` at every level, so a string mixing both is
//! split on `|` first and each fragment may then split on `&`. Clauses
//! never nest beyond that.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use phasic_core::{CurriculumError, Result};

/// Phase-scoped training metrics read by stopping conditions
///
/// Reset at every phase transition; lifetime totals live on the meta
/// curriculum itself.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PhaseMetrics {
    pub episodes: u64,
    pub steps: u64,
    pub episode_returns: Vec<f64>,
}

impl PhaseMetrics {
    /// Record one completed episode
    pub fn record(&mut self, episode_return: f64, episode_len: u64) {
        self.episodes += 1;
        self.steps += episode_len;
        self.episode_returns.push(episode_return);
    }

    /// Reset all counters for a new phase
    pub fn reset(&mut self) {
        self.episodes = 0;
        self.steps = 0;
        self.episode_returns.clear();
    }

    /// Mean episode return so far, 0.0 before any episode completes
    pub fn mean_episode_return(&self) -> f64 {
        if self.episode_returns.is_empty() {
            0.0
        } else {
            self.episode_returns.iter().sum::<f64>() / self.episode_returns.len() as f64
        }
    }
}

/// Metric referenced by a condition clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Steps,
    Episodes,
    EpisodeReturn,
}

impl Metric {
    /// Current value of this metric for the given phase
    pub fn value(self, metrics: &PhaseMetrics) -> f64 {
        match self {
            Metric::Steps => metrics.steps as f64,
            Metric::Episodes => metrics.episodes as f64,
            Metric::EpisodeReturn => metrics.mean_episode_return(),
        }
    }
}

impl FromStr for Metric {
    type Err = CurriculumError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "steps" => Ok(Metric::Steps),
            "episodes" => Ok(Metric::Episodes),
            "episode_return" => Ok(Metric::EpisodeReturn),
            other => Err(CurriculumError::Condition(format!(
                "unknown metric name: '{other}'"
            ))),
        }
    }
}

/// Numeric comparator in a condition clause
///
/// `=` is exact equality, no epsilon tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
}

impl Comparator {
    /// Apply the relation to metric value and threshold
    pub fn compare(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Comparator::Lt => lhs < rhs,
            Comparator::Gt => lhs > rhs,
            Comparator::Le => lhs <= rhs,
            Comparator::Ge => lhs >= rhs,
            Comparator::Eq => lhs == rhs,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Comparator::Lt => "<",
            Comparator::Gt => ">",
            Comparator::Le => "<=",
            Comparator::Ge => ">=",
            Comparator::Eq => "=",
        };
        write!(f, "{s}")
    }
}

/// A stopping condition evaluable against phase metrics
///
/// Custom predicates receive the live ledger by reference at evaluation
/// time, so their truth value tracks the counters as the meta curriculum
/// mutates them.
#[derive(Clone)]
pub enum StoppingCondition {
    /// `metric comparator value`
    Clause {
        metric: Metric,
        comparator: Comparator,
        threshold: f64,
    },
    /// Logical OR of sub-conditions (`|`-joined)
    Any(Vec<StoppingCondition>),
    /// Logical AND of sub-conditions (`&`-joined)
    All(Vec<StoppingCondition>),
    /// Caller-provided predicate
    Custom(Arc<dyn Fn(&PhaseMetrics) -> bool + Send + Sync>),
}

impl StoppingCondition {
    /// Wrap a caller-provided predicate
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&PhaseMetrics) -> bool + Send + Sync + 'static,
    {
        StoppingCondition::Custom(Arc::new(predicate))
    }

    /// Parse a condition string
    ///
    /// Fails on unknown metrics, missing or doubled comparators, and
    /// non-numeric thresholds. Whitespace around tokens is ignored.
    pub fn parse(expr: &str) -> Result<Self> {
        // `|` checked before `&`: a mixed expression is OR-split first and
        // each fragment parsed independently
        if expr.contains('|') {
            let conditions = expr
                .split('|')
                .map(Self::parse)
                .collect::<Result<Vec<_>>>()?;
            return Ok(StoppingCondition::Any(conditions));
        }
        if expr.contains('&') {
            let conditions = expr
                .split('&')
                .map(Self::parse)
                .collect::<Result<Vec<_>>>()?;
            return Ok(StoppingCondition::All(conditions));
        }
        Self::parse_clause(expr)
    }

    fn parse_clause(expr: &str) -> Result<Self> {
        let bytes = expr.as_bytes();
        let mut found: Option<(usize, usize, Comparator)> = None;
        let mut i = 0;
        while i < bytes.len() {
            // Two-byte comparators matched before their one-byte prefixes
            let op = match bytes[i] {
                b'<' if bytes.get(i + 1) == Some(&b'=') => (2, Comparator::Le),
                b'>' if bytes.get(i + 1) == Some(&b'=') => (2, Comparator::Ge),
                b'<' => (1, Comparator::Lt),
                b'>' => (1, Comparator::Gt),
                b'=' => (1, Comparator::Eq),
                _ => {
                    i += 1;
                    continue;
                }
            };
            if found.is_some() {
                return Err(CurriculumError::Condition(format!(
                    "expected a single comparator in '{expr}'"
                )));
            }
            found = Some((i, op.0, op.1));
            i += op.0;
        }

        let (pos, width, comparator) = found.ok_or_else(|| {
            CurriculumError::Condition(format!("no comparator in '{expr}'"))
        })?;

        let metric: Metric = expr[..pos].trim().parse()?;
        let value = expr[pos + width..].trim();
        let threshold: f64 = value.parse().map_err(|_| {
            CurriculumError::Condition(format!("invalid threshold '{value}' in '{expr}'"))
        })?;

        Ok(StoppingCondition::Clause {
            metric,
            comparator,
            threshold,
        })
    }

    /// Evaluate against the given phase metrics
    pub fn evaluate(&self, metrics: &PhaseMetrics) -> bool {
        match self {
            StoppingCondition::Clause {
                metric,
                comparator,
                threshold,
            } => comparator.compare(metric.value(metrics), *threshold),
            StoppingCondition::Any(conditions) => {
                conditions.iter().any(|c| c.evaluate(metrics))
            }
            StoppingCondition::All(conditions) => {
                conditions.iter().all(|c| c.evaluate(metrics))
            }
            StoppingCondition::Custom(predicate) => predicate(metrics),
        }
    }
}

impl FromStr for StoppingCondition {
    type Err = CurriculumError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Debug for StoppingCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoppingCondition::Clause {
                metric,
                comparator,
                threshold,
            } => write!(f, "Clause({metric:?} {comparator} {threshold})"),
            StoppingCondition::Any(conditions) => f.debug_tuple("Any").field(conditions).finish(),
            StoppingCondition::All(conditions) => f.debug_tuple("All").field(conditions).finish(),
            StoppingCondition::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
