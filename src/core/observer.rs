use super::state::{ProcState, SimState};

/// Checks the engine's internal invariants after every dispatch. Breaches
/// are programming defects, not runtime errors, so everything here is a
/// debug assertion.
#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn observe(&mut self, state: &SimState) {
        self.step += 1;

        let mut finished = 0;
        for rec in state.records() {
            debug_assert!(
                rec.remaining <= rec.burst,
                "pid {} remaining {} exceeds burst {}",
                rec.pid,
                rec.remaining,
                rec.burst
            );
            match rec.state {
                ProcState::Finished => {
                    finished += 1;
                    debug_assert_eq!(rec.remaining, 0, "pid {} finished with work left", rec.pid);
                    let start = rec.started_at;
                    let finish = rec.finished_at;
                    debug_assert!(
                        start.is_some() && finish.is_some(),
                        "pid {} finished without timestamps",
                        rec.pid
                    );
                    debug_assert!(
                        finish > start && start >= Some(rec.arrival),
                        "pid {} has inconsistent timestamps {:?}/{:?}",
                        rec.pid,
                        start,
                        finish
                    );
                }
                ProcState::Running => {
                    debug_assert!(
                        false,
                        "pid {} left Running between dispatches",
                        rec.pid
                    );
                }
                ProcState::Ready(_) | ProcState::NotArrived => {}
            }
        }

        debug_assert_eq!(
            state.in_flight(),
            state.admitted() - finished,
            "in-flight count diverged at step {}",
            self.step
        );

        for (level, queue) in state.ready_queues().iter().enumerate() {
            for &idx in queue {
                let rec = state.record(idx);
                debug_assert_eq!(
                    rec.state,
                    ProcState::Ready(level),
                    "pid {} queued at level {level} while {:?}",
                    rec.pid,
                    rec.state
                );
                debug_assert!(
                    rec.remaining > 0,
                    "finished pid {} still queued at level {level}",
                    rec.pid
                );
            }
        }
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::new()
    }
}
