//! Reducer for the timer state machine.

use crate::ui::mvi::Reducer;

use super::intent::TimerIntent;
use super::state::{TimerPhase, TimerState};

/// Timer transitions.
///
/// Pure function: starting and cancelling the countdown engine is done by
/// the caller based on the phase before and after the dispatch.
pub struct TimerReducer;

impl Reducer for TimerReducer {
    type State = TimerState;
    type Intent = TimerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TimerIntent::Select { duration } => match state.phase {
                TimerPhase::Idle | TimerPhase::PreArmed if !duration.is_zero() => TimerState {
                    phase: TimerPhase::PreArmed,
                    configured: duration,
                    ..state
                },
                // Configured duration is fixed while running
                _ => state,
            },

            TimerIntent::Launch => match state.phase {
                TimerPhase::Idle => TimerState {
                    phase: TimerPhase::Running,
                    configured: state.default_duration,
                    remaining: state.default_duration,
                    ..state
                },
                TimerPhase::PreArmed => TimerState {
                    phase: TimerPhase::Running,
                    remaining: state.configured,
                    ..state
                },
                // Toggle: the same button stops a running countdown
                TimerPhase::Running => state.into_idle(),
            },

            TimerIntent::Stop => match state.phase {
                TimerPhase::Running => state.into_idle(),
                _ => state,
            },

            TimerIntent::Tick { remaining } => match state.phase {
                TimerPhase::Running => TimerState {
                    remaining: remaining.min(state.remaining),
                    ..state
                },
                _ => state,
            },

            TimerIntent::Finished => match state.phase {
                TimerPhase::Running => state.into_idle(),
                _ => state,
            },
        }
    }
}
