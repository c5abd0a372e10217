use log::info;

use super::job::Workload;
use crate::core::config::ConfigError;
use crate::core::driver::MlfqCore;
use crate::core::event::SchedEvent;
use crate::core::state::ProcessRecord;
use crate::metrics::{self, MetricsSummary};

/// Front door for a full simulation: sorts the workload by arrival, builds
/// the engine and turns the finished records into a metrics summary.
pub struct Sim {
    core: MlfqCore,
}

impl Sim {
    pub fn new(workload: Workload) -> Result<Self, ConfigError> {
        let Workload {
            mut processes,
            config,
        } = workload;
        processes.sort_by(|a, b| a.arrival.cmp(&b.arrival).then_with(|| a.pid.cmp(&b.pid)));
        let records = processes
            .iter()
            .map(|spec| ProcessRecord::new(spec.pid, spec.arrival, spec.burst))
            .collect();

        info!(
            "simulating {} processes over {} queue levels {:?}",
            processes.len(),
            config.level_count(),
            config.quanta()
        );
        let core = MlfqCore::new(records, config)?;
        Ok(Self { core })
    }

    /// Runs the engine to completion and summarizes the result.
    pub fn run(&mut self) -> MetricsSummary {
        self.core.run();
        metrics::summarize(self.core.records())
    }

    pub fn records(&self) -> &[ProcessRecord] {
        self.core.records()
    }

    pub fn events(&self) -> &[SchedEvent] {
        self.core.events()
    }
}
