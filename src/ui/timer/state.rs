//! State for the timer screen.

use std::time::Duration;

use crate::countdown::format_hms;
use crate::ui::mvi::UiState;

/// Countdown length used by `Launch` from `Idle` when nothing was selected.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerPhase {
    /// Nothing selected, nothing running.
    #[default]
    Idle,
    /// A duration was selected but the countdown has not started.
    PreArmed,
    /// Countdown active.
    Running,
}

impl TimerPhase {
    pub fn label(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "Idle",
            TimerPhase::PreArmed => "Ready",
            TimerPhase::Running => "Running",
        }
    }
}

/// Timer screen state.
///
/// `remaining <= configured` holds in every phase, and `remaining` is zero
/// outside `Running`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub(super) phase: TimerPhase,
    pub(super) default_duration: Duration,
    pub(super) configured: Duration,
    pub(super) remaining: Duration,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl UiState for TimerState {}

impl TimerState {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            phase: TimerPhase::Idle,
            default_duration,
            configured: default_duration,
            remaining: Duration::ZERO,
        }
    }

    /// Back to `Idle`: remaining cleared, selection forgotten.
    pub(super) fn into_idle(self) -> Self {
        Self::new(self.default_duration)
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    pub fn configured(&self) -> Duration {
        self.configured
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Remaining time as `HH:MM:SS`.
    pub fn display(&self) -> String {
        format_hms(self.remaining)
    }

    /// `remaining / configured` while running, `1.0` otherwise.
    pub fn progress(&self) -> f64 {
        if !self.is_running() || self.configured.is_zero() {
            return 1.0;
        }
        (self.remaining.as_secs_f64() / self.configured.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            TimerPhase::Running => "Stop",
            TimerPhase::Idle | TimerPhase::PreArmed => "Launch",
        }
    }
}
