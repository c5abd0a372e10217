use thiserror::Error;

use super::state::{Level, Pid, Ticks};

/// Upper bound on queue hierarchy depth.
pub const MAX_LEVELS: usize = 5;

/// Rejection reasons for a malformed workload or queue hierarchy. Raised
/// before the simulation starts; the engine itself has no runtime failure
/// modes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("workload contains no processes")]
    EmptyWorkload,
    #[error("queue hierarchy has no levels")]
    NoLevels,
    #[error("queue hierarchy has {count} levels, maximum is 5")]
    TooManyLevels { count: usize },
    #[error("level {level} has a zero time quantum")]
    ZeroQuantum { level: Level },
    #[error("process {pid} has a zero burst time")]
    ZeroBurst { pid: Pid },
    #[error("duplicate process id {pid}")]
    DuplicatePid { pid: Pid },
    #[error("processes are not sorted by ascending arrival time")]
    UnsortedArrivals,
    #[error("duplicate arrival time {arrival}")]
    DuplicateArrival { arrival: Ticks },
}

/// The fixed queue hierarchy: one time quantum per priority level, index 0
/// being the highest priority. Validated at construction and never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    quanta: Vec<Ticks>,
}

impl QueueConfig {
    pub fn new(quanta: Vec<Ticks>) -> Result<Self, ConfigError> {
        if quanta.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        if quanta.len() > MAX_LEVELS {
            return Err(ConfigError::TooManyLevels {
                count: quanta.len(),
            });
        }
        if let Some(level) = quanta.iter().position(|&q| q == 0) {
            return Err(ConfigError::ZeroQuantum { level });
        }
        Ok(Self { quanta })
    }

    /// Hierarchy where each quantum doubles the previous one, the convention
    /// of the reference workload generator.
    pub fn doubling(levels: usize, base_quantum: Ticks) -> Result<Self, ConfigError> {
        let quanta = (0..levels).map(|i| base_quantum << i).collect();
        Self::new(quanta)
    }

    pub fn level_count(&self) -> usize {
        self.quanta.len()
    }

    pub fn quantum(&self, level: Level) -> Ticks {
        self.quanta[level]
    }

    pub fn quanta(&self) -> &[Ticks] {
        &self.quanta
    }

    pub fn last_level(&self) -> Level {
        self.quanta.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_hierarchy_matches_generator_convention() {
        let config = QueueConfig::doubling(4, 3).unwrap();
        assert_eq!(config.quanta(), &[3, 6, 12, 24]);
        assert_eq!(config.level_count(), 4);
        assert_eq!(config.last_level(), 3);
    }

    #[test]
    fn rejects_empty_hierarchy() {
        assert_eq!(QueueConfig::new(vec![]), Err(ConfigError::NoLevels));
    }

    #[test]
    fn rejects_too_many_levels() {
        assert_eq!(
            QueueConfig::doubling(6, 1),
            Err(ConfigError::TooManyLevels { count: 6 })
        );
    }

    #[test]
    fn rejects_zero_quantum() {
        assert_eq!(
            QueueConfig::new(vec![4, 0, 16]),
            Err(ConfigError::ZeroQuantum { level: 1 })
        );
    }
}
