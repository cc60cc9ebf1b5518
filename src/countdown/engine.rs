use std::time::Duration;

use super::clock::Clock;
use super::error::CountdownError;
use super::validate_duration;

/// Event produced by a running countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// A tick boundary was crossed. `remaining` is measured from that boundary.
    Tick { remaining: Duration },
    /// The full duration elapsed. Always the last event of a run.
    Finished,
}

#[derive(Debug, Clone, Copy)]
struct ActiveRun {
    started_at: Duration,
    duration: Duration,
    interval: Duration,
    /// Index of the first tick boundary not yet delivered.
    next_tick: u32,
}

/// Single-run countdown timer polled by its owner.
///
/// Tick boundaries sit at elapsed `0, interval, 2 * interval, ...` strictly
/// before `duration`. Each [`poll`](Self::poll) delivers at most one event:
/// the latest crossed boundary (missed boundaries are coalesced), or
/// [`CountdownEvent::Finished`] once the duration has elapsed.
pub struct CountdownEngine<C: Clock> {
    clock: C,
    run: Option<ActiveRun>,
}

impl<C: Clock> CountdownEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, run: None }
    }

    /// Begin a countdown. An active run is replaced and its pending events
    /// are dropped.
    pub fn start(&mut self, duration: Duration, interval: Duration) -> Result<(), CountdownError> {
        validate_duration(duration)?;
        if interval.is_zero() {
            return Err(CountdownError::ZeroInterval);
        }

        if self.run.is_some() {
            tracing::debug!("Replacing active countdown");
        }

        self.run = Some(ActiveRun {
            started_at: self.clock.now(),
            duration,
            interval,
            next_tick: 0,
        });
        tracing::info!(
            duration_ms = duration.as_millis() as u64,
            interval_ms = interval.as_millis() as u64,
            "Countdown started"
        );
        Ok(())
    }

    /// Stop the active run. No event is delivered afterwards. No-op when idle.
    pub fn cancel(&mut self) {
        if self.run.take().is_some() {
            tracing::debug!("Countdown cancelled");
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Continuous remaining time read from the clock, or `None` when idle.
    ///
    /// Unlike tick events this is not quantized to the interval.
    pub fn remaining(&self) -> Option<Duration> {
        self.run
            .map(|run| run.duration.saturating_sub(self.elapsed(&run)))
    }

    /// Deliver the event that is due, if any.
    pub fn poll(&mut self) -> Option<CountdownEvent> {
        let mut run = self.run?;
        let elapsed = self.elapsed(&run);

        if elapsed >= run.duration {
            self.run = None;
            tracing::info!("Countdown finished");
            return Some(CountdownEvent::Finished);
        }

        let crossed = u32::try_from(elapsed.as_nanos() / run.interval.as_nanos())
            .unwrap_or(u32::MAX);
        if crossed < run.next_tick {
            return None;
        }

        run.next_tick = crossed.saturating_add(1);
        self.run = Some(run);

        let boundary = run.interval.saturating_mul(crossed);
        Some(CountdownEvent::Tick {
            remaining: run.duration.saturating_sub(boundary),
        })
    }

    fn elapsed(&self, run: &ActiveRun) -> Duration {
        self.clock.now().saturating_sub(run.started_at)
    }
}
