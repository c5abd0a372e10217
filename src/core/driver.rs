use std::cmp::Ordering;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::config::{ConfigError, QueueConfig};
use super::event::SchedEvent;
use super::observer::Observer;
use super::state::{ProcessRecord, SimState};

/// The multi-level feedback queue simulation engine.
///
/// Consumes a workload sorted by ascending arrival and a fixed queue
/// hierarchy, and produces start/finish timestamps for every process by
/// replaying the whole timeline on a single simulated processor. The run is
/// a pure function of its input: identical workloads yield identical
/// timestamps.
pub struct MlfqCore {
    config: QueueConfig,
    state: SimState,
    events: Vec<SchedEvent>,
    observer: Observer,
}

impl MlfqCore {
    /// Validates the workload boundary: at least one process, positive
    /// bursts, unique pids, arrivals strictly ascending (sorted with no
    /// ties). The queue hierarchy was already validated by [`QueueConfig`].
    pub fn new(records: Vec<ProcessRecord>, config: QueueConfig) -> Result<Self, ConfigError> {
        if records.is_empty() {
            return Err(ConfigError::EmptyWorkload);
        }
        let mut seen = FxHashMap::default();
        for (idx, rec) in records.iter().enumerate() {
            if rec.burst == 0 {
                return Err(ConfigError::ZeroBurst { pid: rec.pid });
            }
            if seen.insert(rec.pid, idx).is_some() {
                return Err(ConfigError::DuplicatePid { pid: rec.pid });
            }
        }
        for pair in records.windows(2) {
            match pair[0].arrival.cmp(&pair[1].arrival) {
                Ordering::Greater => return Err(ConfigError::UnsortedArrivals),
                Ordering::Equal => {
                    return Err(ConfigError::DuplicateArrival {
                        arrival: pair[0].arrival,
                    })
                }
                Ordering::Less => {}
            }
        }

        let state = SimState::new(records, config.level_count());
        Ok(Self {
            config,
            state,
            events: Vec::new(),
            observer: Observer::new(),
        })
    }

    /// Runs the simulation to completion. Calling it again on a finished
    /// engine is a no-op.
    pub fn run(&mut self) {
        loop {
            if self.state.in_flight() == 0 {
                if self.state.all_admitted() {
                    break;
                }
                // Idle processor: jump the clock to the next arrival rather
                // than spinning on empty queues.
                self.admit_next();
            }

            // The serving level can be reset to 0 by an admission inside
            // dispatch_one, so the emptiness check re-reads the cursor.
            while !self.state.current_level_empty() {
                self.dispatch_one();
                self.observer.observe(&self.state);
            }
            self.state.bump_cursor();
        }
        debug!(
            "simulation complete at t={} ({} processes)",
            self.state.now(),
            self.state.records().len()
        );
    }

    /// Serve the front of the current level for one slice. The slice is
    /// bounded by the strict minimum of the level quantum, the remaining
    /// burst and the gap to the next arrival.
    fn dispatch_one(&mut self) {
        let level = self.state.level_cursor();
        let idx = self
            .state
            .pop_front(level)
            .expect("dispatch on an empty level");
        let quantum = self.config.quantum(level);
        let now = self.state.now();
        let gap = self.state.next_arrival().map(|arrival| arrival - now);
        let bound = gap.map_or(quantum, |g| quantum.min(g));

        let pid = self.state.record(idx).pid;
        self.state.mark_started(idx);
        self.state.set_running(idx);
        self.events.push(SchedEvent::Dispatched {
            pid,
            level,
            at: now,
        });
        trace!("t={now} dispatch pid={pid} level={level} bound={bound}");

        let remaining = self.state.record(idx).remaining;
        if remaining <= bound {
            // Completes inside the slice.
            self.state.advance(remaining);
            self.state.finish(idx);
            let at = self.state.now();
            self.events.push(SchedEvent::Finished { pid, at });
            debug!("t={at} finished pid={pid}");
        } else if gap.map_or(true, |g| quantum <= g) {
            // Quantum exhausted. A tie between the quantum and the arrival
            // gap lands here: equal values demote, they do not interrupt.
            self.state.advance(quantum);
            self.state.charge(idx, quantum);
            let at = self.state.now();
            if level == self.config.last_level() {
                self.state.requeue(idx, level);
                self.events.push(SchedEvent::Recycled { pid, level, at });
            } else {
                self.state.requeue(idx, level + 1);
                self.events.push(SchedEvent::Demoted {
                    pid,
                    from: level,
                    to: level + 1,
                    at,
                });
                trace!("t={at} demoted pid={pid} to level {}", level + 1);
            }
        } else {
            // A new arrival cuts the slice short. Charge only the elapsed
            // gap, put the instance back on the same level, then admit the
            // arrival behind it.
            let g = gap.expect("arrival interruption without a pending arrival");
            self.state.charge(idx, g);
            self.state.requeue(idx, level);
            self.events.push(SchedEvent::Preempted {
                pid,
                level,
                at: now + g,
            });
            self.admit_next();
        }
    }

    fn admit_next(&mut self) {
        let idx = self.state.admit_next();
        let rec = self.state.record(idx);
        self.events.push(SchedEvent::Admitted {
            pid: rec.pid,
            at: rec.arrival,
        });
        debug!("t={} admitted pid={}", rec.arrival, rec.pid);
    }

    pub fn records(&self) -> &[ProcessRecord] {
        self.state.records()
    }

    pub fn events(&self) -> &[SchedEvent] {
        &self.events
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn into_records(self) -> Vec<ProcessRecord> {
        self.state.into_records()
    }
}
