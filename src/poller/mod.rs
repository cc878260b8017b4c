//! Long-running-operation polling.
//!
//! This module drives a submitted validation operation to a terminal state:
//! - [`poll`] - The state machine, deadline and interrupt handling
//! - [`progress`] - Cyclic progress indicator

mod poll;
mod progress;

pub use poll::{poll_until_done, FixedTick, PollOutcome, PollState, Probe, ProbeStep, TickScheduler};
pub use progress::ProgressWheel;

use std::time::Duration;

/// API return codes.
pub const API_ACCEPTED: u16 = 202;
pub const API_RESOURCE_MOVE_OK: u16 = 204;
pub const API_RESOURCE_MOVE_FAIL: u16 = 409;

/// Fixed pause between status probes.
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Ceiling over the whole poll phase.
pub const POLL_DEADLINE: Duration = Duration::from_secs(300);

/// Progress wheel resets after this many ticks.
pub const PROGRESS_CYCLE: u32 = 100;
