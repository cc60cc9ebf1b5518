//! Countdown timer feature module.
//!
//! Button/display state machine for the timer screen:
//!
//! ```text
//! Idle ──select──→ PreArmed ──launch──→ Running ──stop/finished──→ Idle
//!   └────────────────launch─────────────────↗
//! ```
//!
//! - `state.rs` - phase, durations and derived display values
//! - `intent.rs` - user actions and countdown events
//! - `reducer.rs` - transitions (pure; the engine is driven by the caller)

mod intent;
mod reducer;
mod state;

pub use intent::TimerIntent;
pub use reducer::TimerReducer;
pub use state::{TimerPhase, TimerState, DEFAULT_DURATION};
