//! Intents for the timer state machine.

use std::time::Duration;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerIntent {
    /// User picked a preset duration.
    Select { duration: Duration },

    /// Start/stop button pressed. Acts as `Stop` while running.
    Launch,

    /// Explicit stop.
    Stop,

    /// Countdown engine reported the time left.
    Tick { remaining: Duration },

    /// Countdown engine reported completion.
    Finished,
}

impl Intent for TimerIntent {}
