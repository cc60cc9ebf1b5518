//! Countdown engine.
//!
//! A fixed-duration timer that reports the remaining time at a fixed cadence
//! and signals completion once. The engine never spawns anything: the owner
//! polls it from the UI task and receives [`CountdownEvent`] values back.
//!
//! Time is read through the [`Clock`] trait so the same engine runs against
//! the monotonic system clock in the app and against [`ManualClock`] in tests.

mod clock;
mod engine;
mod error;
mod format;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{CountdownEngine, CountdownEvent};
pub use error::CountdownError;
pub use format::format_hms;

use std::time::Duration;

/// Reject durations that cannot be counted down.
///
/// Used at every selection boundary (presets, CLI, config) so that a zero
/// length never reaches [`CountdownEngine::start`].
pub fn validate_duration(duration: Duration) -> Result<Duration, CountdownError> {
    if duration.is_zero() {
        return Err(CountdownError::ZeroDuration);
    }
    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_positive() {
        let d = Duration::from_millis(1);
        assert_eq!(validate_duration(d).unwrap(), d);
    }

    #[test]
    fn validate_rejects_zero() {
        assert!(matches!(
            validate_duration(Duration::ZERO),
            Err(CountdownError::ZeroDuration)
        ));
    }
}
