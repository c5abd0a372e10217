use crate::core::state::{Level, Pid, Ticks};

/// Scheduling transitions recorded by the engine, in timeline order. The
/// trace makes level movement observable without instrumenting the engine
/// from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    /// Process entered the top-level ready queue at its arrival time.
    Admitted { pid: Pid, at: Ticks },
    /// Process was handed the processor at `at`.
    Dispatched { pid: Pid, level: Level, at: Ticks },
    /// Remaining burst reached zero.
    Finished { pid: Pid, at: Ticks },
    /// Quantum expired on a non-bottom level; moved one level down.
    Demoted {
        pid: Pid,
        from: Level,
        to: Level,
        at: Ticks,
    },
    /// Quantum expired on the bottom level; round-robined back onto it.
    Recycled { pid: Pid, level: Level, at: Ticks },
    /// Slice cut short by a new arrival; re-enqueued at the same level,
    /// ahead of the arriving process.
    Preempted { pid: Pid, level: Level, at: Ticks },
}
