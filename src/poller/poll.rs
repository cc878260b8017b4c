//! The polling state machine.
//!
//! Drives an operation handle to exactly one terminal state per run:
//! `Submitted -> Polling -> {Done, TimedOut, Cancelled, PollError}`.

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

use super::progress::ProgressWheel;
use super::PROGRESS_CYCLE;
use crate::error::ArmvError;

/// Terminal response captured from the operation, exactly once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct PollOutcome {
    /// Terminal HTTP status code.
    pub status_code: u16,
    /// Raw response body.
    pub body: Vec<u8>,
    /// Status text, e.g. "No Content" or "Conflict".
    pub status_text: String,
}

/// Result of one status probe.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeStep {
    /// The operation is still running.
    Pending,
    /// The operation reached a terminal status.
    Terminal(PollOutcome),
}

/// One status probe against an operation handle.
///
/// Implemented by [`OperationHandle`](crate::validation::OperationHandle)
/// over HTTP, and by scripted fakes in tests.
#[allow(async_fn_in_trait)]
pub trait Probe {
    async fn probe(&mut self) -> Result<ProbeStep, ArmvError>;
}

/// States of one polling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Submitted,
    Polling,
    Done,
    TimedOut,
    Cancelled,
    PollError,
}

/// Decides how long to pause before the next probe.
///
/// The default is a fixed interval; a backoff policy can be swapped in
/// without touching the transition contract of the loop.
pub trait TickScheduler {
    fn interval(&self, tick: u32) -> Duration;
}

/// Fixed pause between probes.
pub struct FixedTick(pub Duration);

impl Default for FixedTick {
    fn default() -> Self {
        FixedTick(super::TICK_INTERVAL)
    }
}

impl TickScheduler for FixedTick {
    fn interval(&self, _tick: u32) -> Duration {
        self.0
    }
}

fn transition(state: &mut PollState, next: PollState) {
    log::debug!("poll state {:?} -> {:?}", *state, next);
    *state = next;
}

/// Poll an operation to a terminal state under a hard deadline.
///
/// A single logical loop: at most one probe is in flight at any time. Per
/// tick, a pending probe advances the progress wheel, sleeps the scheduler's
/// interval and re-checks the deadline; a terminal probe captures the
/// outcome; a probe error propagates unchanged with no retry. A resolved
/// `interrupt` future causes an orderly early return. The progress wheel is
/// cosmetic only and never influences termination.
///
/// # Arguments
/// * `probe` - The operation handle, owned by this loop until it terminates
/// * `scheduler` - Tick pacing policy
/// * `deadline` - Ceiling over the whole poll phase
/// * `interrupt` - Resolves when the run should cancel, e.g. on Ctrl-C
///
/// # Returns
/// * `Ok(PollOutcome)` - The operation reached `Done`
/// * `Err` - `Timeout`, `Cancelled`, or the probe's own error
pub async fn poll_until_done<P: Probe, S: TickScheduler, I: Future<Output = ()>>(
    mut probe: P,
    scheduler: &S,
    deadline: Duration,
    interrupt: I,
) -> Result<PollOutcome, ArmvError> {
    let started = Instant::now();
    let mut state = PollState::Submitted;
    let mut wheel = ProgressWheel::new(PROGRESS_CYCLE);
    let mut tick: u32 = 0;

    tokio::pin!(interrupt);

    loop {
        let step = tokio::select! {
            _ = &mut interrupt => {
                transition(&mut state, PollState::Cancelled);
                wheel.finish();
                return Err(ArmvError::Cancelled);
            }
            step = probe.probe() => step,
        };

        let step = match step {
            Ok(step) => step,
            Err(e) => {
                transition(&mut state, PollState::PollError);
                wheel.finish();
                return Err(e);
            }
        };

        if state == PollState::Submitted {
            transition(&mut state, PollState::Polling);
        }

        if let ProbeStep::Terminal(outcome) = step {
            transition(&mut state, PollState::Done);
            wheel.finish();
            log::info!(
                "operation terminal after {tick} ticks: {} {}",
                outcome.status_code,
                outcome.status_text
            );
            return Ok(outcome);
        }

        wheel.advance();

        tokio::select! {
            _ = &mut interrupt => {
                transition(&mut state, PollState::Cancelled);
                wheel.finish();
                return Err(ArmvError::Cancelled);
            }
            _ = tokio::time::sleep(scheduler.interval(tick)) => {}
        }
        tick = tick.wrapping_add(1);

        if started.elapsed() >= deadline {
            transition(&mut state, PollState::TimedOut);
            wheel.finish();
            return Err(ArmvError::Timeout {
                deadline,
                elapsed: started.elapsed(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Probe that replays a fixed script and counts how often it was asked.
    struct ScriptedProbe {
        script: Vec<Result<ProbeStep, ArmvError>>,
        probes: usize,
    }

    impl ScriptedProbe {
        fn new(script: Vec<Result<ProbeStep, ArmvError>>) -> Self {
            ScriptedProbe { script, probes: 0 }
        }
    }

    impl Probe for &mut ScriptedProbe {
        async fn probe(&mut self) -> Result<ProbeStep, ArmvError> {
            self.probes += 1;
            if self.script.is_empty() {
                panic!("probe issued after the scripted terminal step");
            }
            self.script.remove(0)
        }
    }

    fn terminal_204() -> ProbeStep {
        ProbeStep::Terminal(PollOutcome {
            status_code: 204,
            body: Vec::new(),
            status_text: "No Content".to_string(),
        })
    }

    fn fast_tick() -> FixedTick {
        FixedTick(Duration::from_millis(2))
    }

    /// Interrupt source that never fires.
    fn no_interrupt() -> impl Future<Output = ()> {
        std::future::pending()
    }

    #[tokio::test]
    async fn test_completes_after_two_pending_ticks() {
        let mut probe = ScriptedProbe::new(vec![
            Ok(ProbeStep::Pending),
            Ok(ProbeStep::Pending),
            Ok(terminal_204()),
        ]);

        let outcome = poll_until_done(&mut probe, &fast_tick(), Duration::from_secs(5), no_interrupt())
            .await
            .expect("Scripted probe should complete");

        assert_eq!(outcome.status_code, 204);
        assert_eq!(outcome.status_text, "No Content");
        assert_eq!(probe.probes, 3, "No probe may follow the terminal step");
    }

    #[tokio::test]
    async fn test_times_out_within_deadline_plus_one_tick() {
        let deadline = Duration::from_millis(30);
        let tick = Duration::from_millis(10);
        let mut probe = ScriptedProbe::new((0..1000).map(|_| Ok(ProbeStep::Pending)).collect());

        let started = std::time::Instant::now();
        let err = poll_until_done(&mut probe, &FixedTick(tick), deadline, no_interrupt())
            .await
            .expect_err("Never-completing probe must time out");
        let elapsed = started.elapsed();

        assert!(matches!(err, ArmvError::Timeout { .. }), "Got {err:?}");
        assert!(
            elapsed < deadline + tick + Duration::from_millis(50),
            "Timed out too late: {elapsed:?}"
        );
    }

    #[tokio::test]
    async fn test_probe_error_propagates_without_retry() {
        let mut probe = ScriptedProbe::new(vec![
            Ok(ProbeStep::Pending),
            Err(ArmvError::Api {
                stage: "validation poll",
                detail: "connection reset".to_string(),
            }),
        ]);

        let err = poll_until_done(&mut probe, &fast_tick(), Duration::from_secs(5), no_interrupt())
            .await
            .expect_err("Probe error must surface");

        assert!(
            err.to_string().contains("connection reset"),
            "Error must propagate unchanged: {err}"
        );
        assert_eq!(probe.probes, 2, "A probe error must not be retried");
    }

    #[tokio::test]
    async fn test_immediate_terminal_conflict() {
        let mut probe = ScriptedProbe::new(vec![Ok(ProbeStep::Terminal(PollOutcome {
            status_code: 409,
            body: br#"{"error":{"code":"Conflict"}}"#.to_vec(),
            status_text: "Conflict".to_string(),
        }))]);

        let outcome = poll_until_done(&mut probe, &fast_tick(), Duration::from_secs(5), no_interrupt())
            .await
            .expect("Terminal 409 is a completed poll, not an error");

        assert_eq!(outcome.status_code, 409);
        assert_eq!(probe.probes, 1);
    }

    #[tokio::test]
    async fn test_interrupt_cancels_with_no_further_probes() {
        let mut probe = ScriptedProbe::new((0..1000).map(|_| Ok(ProbeStep::Pending)).collect());

        // Interrupt fires while the loop is sleeping between probes.
        let err = poll_until_done(
            &mut probe,
            &FixedTick(Duration::from_millis(50)),
            Duration::from_secs(5),
            tokio::time::sleep(Duration::from_millis(5)),
        )
        .await
        .expect_err("A fired interrupt must cancel the run");

        assert!(matches!(err, ArmvError::Cancelled), "Got {err:?}");
        assert_eq!(probe.probes, 1, "No probe may follow the interrupt");
    }
}
