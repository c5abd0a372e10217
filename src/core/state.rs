use rustc_hash::FxHashMap;
use std::collections::VecDeque;

pub type Pid = u32;
pub type Level = usize;
pub type Ticks = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    NotArrived,
    Ready(Level),
    Running,
    Finished,
}

/// One process in the descriptor store. `pid`, `arrival` and `burst` are
/// fixed at construction; the scheduling fields are written only by the
/// engine during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub remaining: Ticks,
    pub started_at: Option<Ticks>,
    pub finished_at: Option<Ticks>,
    pub state: ProcState,
}

impl ProcessRecord {
    pub fn new(pid: Pid, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            pid,
            arrival,
            burst,
            remaining: burst,
            started_at: None,
            finished_at: None,
            state: ProcState::NotArrived,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }
}

/// All mutable simulation state: the clock, the serving cursor, the ready
/// queues and the record arena. Owned exclusively by the engine; queues hold
/// indices into `procs`, never copies of the records themselves.
#[derive(Debug)]
pub struct SimState {
    now: Ticks,
    level_cursor: Level,
    in_flight: usize,
    // Index of the next record (in arrival order) not yet admitted
    admit_cursor: usize,
    ready: Vec<VecDeque<usize>>,
    procs: Vec<ProcessRecord>,
    index_of: FxHashMap<Pid, usize>,
}

impl SimState {
    /// `procs` must already be sorted by ascending arrival.
    pub(crate) fn new(procs: Vec<ProcessRecord>, levels: usize) -> Self {
        let index_of = procs
            .iter()
            .enumerate()
            .map(|(idx, rec)| (rec.pid, idx))
            .collect();
        Self {
            now: 0,
            level_cursor: 0,
            in_flight: 0,
            admit_cursor: 0,
            ready: vec![VecDeque::new(); levels],
            procs,
            index_of,
        }
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn level_cursor(&self) -> Level {
        self.level_cursor
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn admitted(&self) -> usize {
        self.admit_cursor
    }

    pub fn all_admitted(&self) -> bool {
        self.admit_cursor == self.procs.len()
    }

    /// Arrival time of the next not-yet-admitted record, if any.
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.procs.get(self.admit_cursor).map(|rec| rec.arrival)
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.procs
    }

    pub fn into_records(self) -> Vec<ProcessRecord> {
        self.procs
    }

    pub fn record(&self, idx: usize) -> &ProcessRecord {
        &self.procs[idx]
    }

    pub fn record_by_pid(&self, pid: Pid) -> Option<&ProcessRecord> {
        self.index_of.get(&pid).map(|&idx| &self.procs[idx])
    }

    pub(crate) fn ready_queues(&self) -> &[VecDeque<usize>] {
        &self.ready
    }

    pub fn current_level_empty(&self) -> bool {
        self.ready[self.level_cursor].is_empty()
    }

    pub(crate) fn advance(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    /// Admit the next record in arrival order: jump the clock to its arrival,
    /// reset the serving cursor to the top level and enqueue it there.
    pub(crate) fn admit_next(&mut self) -> usize {
        let idx = self.admit_cursor;
        let arrival = self.procs[idx].arrival;
        debug_assert!(
            self.now <= arrival,
            "clock {} ran past arrival {} of pid {}",
            self.now,
            arrival,
            self.procs[idx].pid
        );
        debug_assert_eq!(
            self.procs[idx].state,
            ProcState::NotArrived,
            "pid {} admitted twice",
            self.procs[idx].pid
        );

        self.now = arrival;
        self.level_cursor = 0;
        self.procs[idx].state = ProcState::Ready(0);
        self.ready[0].push_back(idx);
        self.in_flight += 1;
        self.admit_cursor += 1;
        idx
    }

    pub(crate) fn pop_front(&mut self, level: Level) -> Option<usize> {
        self.ready[level].pop_front()
    }

    /// Stamp the first-dispatch time if it is not set yet. Returns true on
    /// the first dispatch of the record.
    pub(crate) fn mark_started(&mut self, idx: usize) -> bool {
        let now = self.now;
        let rec = &mut self.procs[idx];
        if rec.started_at.is_some() {
            return false;
        }
        debug_assert!(
            now >= rec.arrival,
            "pid {} dispatched at {} before its arrival {}",
            rec.pid,
            now,
            rec.arrival
        );
        rec.started_at = Some(now);
        true
    }

    pub(crate) fn set_running(&mut self, idx: usize) {
        let rec = &mut self.procs[idx];
        debug_assert!(
            matches!(rec.state, ProcState::Ready(_)),
            "pid {} dispatched while {:?}",
            rec.pid,
            rec.state
        );
        rec.state = ProcState::Running;
    }

    /// Charge `time` units of service. The caller guarantees the slice ends
    /// before the record completes, so `remaining` stays positive.
    pub(crate) fn charge(&mut self, idx: usize, time: Ticks) {
        let rec = &mut self.procs[idx];
        debug_assert!(
            time < rec.remaining,
            "pid {} charged {} with only {} remaining",
            rec.pid,
            time,
            rec.remaining
        );
        rec.remaining -= time;
    }

    pub(crate) fn requeue(&mut self, idx: usize, level: Level) {
        debug_assert!(level < self.ready.len(), "requeue to unknown level {level}");
        let rec = &mut self.procs[idx];
        debug_assert_eq!(
            rec.state,
            ProcState::Running,
            "pid {} requeued while not running",
            rec.pid
        );
        debug_assert!(rec.remaining > 0, "finished pid {} requeued", rec.pid);
        rec.state = ProcState::Ready(level);
        self.ready[level].push_back(idx);
    }

    pub(crate) fn finish(&mut self, idx: usize) {
        let now = self.now;
        let rec = &mut self.procs[idx];
        debug_assert_eq!(
            rec.state,
            ProcState::Running,
            "pid {} finished while not running",
            rec.pid
        );
        debug_assert!(
            rec.finished_at.is_none(),
            "finish stamped twice for pid {}",
            rec.pid
        );
        rec.remaining = 0;
        rec.state = ProcState::Finished;
        rec.finished_at = Some(now);
        debug_assert!(self.in_flight > 0, "in-flight underflow");
        self.in_flight -= 1;
    }

    /// Move the serving cursor one level deeper. The cursor never wraps back
    /// on its own; only admission resets it to the top level.
    pub(crate) fn bump_cursor(&mut self) {
        if self.level_cursor + 1 < self.ready.len() {
            self.level_cursor += 1;
        }
    }
}
