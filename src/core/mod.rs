pub mod config;
pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use config::{ConfigError, QueueConfig, MAX_LEVELS};
pub use driver::MlfqCore;
pub use event::SchedEvent;
pub use observer::Observer;
pub use state::{Level, Pid, ProcState, ProcessRecord, SimState, Ticks};
