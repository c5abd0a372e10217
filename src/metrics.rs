//! Derives turnaround metrics from finished process records.

use average::{Estimate, Mean};

use crate::core::state::{Pid, ProcessRecord, Ticks};

/// Per-process report row, the output contract handed to the reporting side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub finish: Ticks,
    pub turnaround: Ticks,
    pub weighted_turnaround: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    /// Rows in ascending pid order.
    pub rows: Vec<ProcessMetrics>,
    pub mean_turnaround: f64,
    pub mean_weighted_turnaround: f64,
}

/// Computes turnaround and weighted turnaround for every record and the
/// arithmetic mean of each across the workload. Requires a completed run.
pub fn summarize(records: &[ProcessRecord]) -> MetricsSummary {
    let mut rows: Vec<ProcessMetrics> = records
        .iter()
        .map(|rec| {
            let finish = rec
                .finished_at
                .expect("summarize called on an unfinished run");
            let turnaround = finish - rec.arrival;
            debug_assert!(
                turnaround >= rec.burst,
                "pid {} turnaround {} below burst {}",
                rec.pid,
                turnaround,
                rec.burst
            );
            ProcessMetrics {
                pid: rec.pid,
                arrival: rec.arrival,
                burst: rec.burst,
                finish,
                turnaround,
                weighted_turnaround: turnaround as f64 / rec.burst as f64,
            }
        })
        .collect();
    rows.sort_by_key(|row| row.pid);

    let mean_turnaround = rows
        .iter()
        .map(|row| row.turnaround as f64)
        .collect::<Mean>()
        .estimate();
    let mean_weighted_turnaround = rows
        .iter()
        .map(|row| row.weighted_turnaround)
        .collect::<Mean>()
        .estimate();

    MetricsSummary {
        rows,
        mean_turnaround,
        mean_weighted_turnaround,
    }
}
