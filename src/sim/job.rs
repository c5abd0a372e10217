use rand::prelude::*;
use std::collections::HashSet;

use crate::core::config::QueueConfig;
use crate::core::state::{Pid, Ticks};

/// Static description of one process, as produced by the workload side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpec {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
}

/// A complete simulation input: the process set plus the queue hierarchy it
/// is to be scheduled against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub processes: Vec<ProcessSpec>,
    pub config: QueueConfig,
}

/// Random workload in the reference generator's ranges: 1 to 5 levels with a
/// base quantum of 1 to 10 doubling per level, 1 to 10 processes with
/// distinct arrivals in 1 to 20 and bursts in 1 to 50. Deterministic per
/// seed.
pub fn random_workload(seed: u64) -> Workload {
    let mut rng = StdRng::seed_from_u64(seed);

    let levels = rng.random_range(1..=5);
    let base_quantum: Ticks = rng.random_range(1..=10);
    let config = QueueConfig::doubling(levels, base_quantum)
        .expect("generator ranges always form a valid hierarchy");

    let count = rng.random_range(1..=10);
    let mut taken = HashSet::new();
    let mut processes = Vec::with_capacity(count);
    for i in 0..count {
        let mut arrival: Ticks = rng.random_range(1..=20);
        while !taken.insert(arrival) {
            arrival = rng.random_range(1..=20);
        }
        processes.push(ProcessSpec {
            pid: i as Pid + 1,
            arrival,
            burst: rng.random_range(1..=50),
        });
    }

    Workload { processes, config }
}
