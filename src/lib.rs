//! Deterministic simulation of multi-level feedback queue CPU scheduling.
//!
//! Given a fixed process set and a queue hierarchy, the engine replays the
//! exact timeline of admissions, preemptions and demotions on one simulated
//! processor, then reports per-process and average turnaround metrics.

pub mod core;
pub mod metrics;
pub mod sim;

pub use crate::core::{
    ConfigError, MlfqCore, ProcessRecord, QueueConfig, SchedEvent, MAX_LEVELS,
};
pub use crate::metrics::{MetricsSummary, ProcessMetrics};
pub use crate::sim::{random_workload, ProcessSpec, Sim, Workload};
