use crate::config::Config;
use crate::countdown::{
    format_hms, validate_duration, Clock, CountdownEngine, CountdownEvent, SystemClock,
};
use crate::ui::mvi::Reducer;
use crate::ui::timer::{TimerIntent, TimerPhase, TimerReducer, TimerState};
use ratatui::layout::Rect;
use std::time::Duration;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Timer screen controller.
///
/// Owns the timer state (MVI) and the one countdown engine (resource, managed
/// outside MVI). The engine is started when the state enters `Running` and
/// cancelled when it leaves, so the two never disagree.
pub struct App<C: Clock = SystemClock> {
    should_quit: bool,
    viewport: Rect,
    timer: TimerState,
    engine: CountdownEngine<C>,
    tick_interval: Duration,
    presets: Vec<Duration>,
    show_sun: bool,
}

impl App<SystemClock> {
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(config: &Config, clock: C) -> Self {
        Self {
            should_quit: false,
            viewport: Rect::default(),
            timer: TimerState::new(config.timer.default_duration()),
            engine: CountdownEngine::new(clock),
            tick_interval: config.timer.tick_interval(),
            presets: config.timer.presets(),
            show_sun: config.ui.show_sun,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub fn is_countdown_active(&self) -> bool {
        self.engine.is_running()
    }

    pub fn presets(&self) -> &[Duration] {
        &self.presets
    }

    pub fn show_sun(&self) -> bool {
        self.show_sun
    }

    /// Last known terminal area, used for mouse hit testing.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Rect::new(0, 0, cols, rows);
    }

    /// Chip labels, numbered by their shortcut key.
    pub fn preset_labels(&self) -> Vec<String> {
        self.presets
            .iter()
            .enumerate()
            .map(|(index, preset)| format!("[{}] {}", index + 1, preset_label(*preset)))
            .collect()
    }

    /// Index of the armed preset, if the armed duration is one of them.
    pub fn selected_preset(&self) -> Option<usize> {
        if self.timer.phase() != TimerPhase::PreArmed {
            return None;
        }
        self.presets
            .iter()
            .position(|preset| *preset == self.timer.configured())
    }

    /// Animation progress. Follows the clock continuously while running,
    /// so the sun glides between ticks instead of jumping.
    pub fn progress(&self) -> f64 {
        let configured = self.timer.configured();
        match self.engine.remaining() {
            Some(remaining) if self.timer.is_running() && !configured.is_zero() => {
                (remaining.as_secs_f64() / configured.as_secs_f64()).clamp(0.0, 1.0)
            }
            _ => self.timer.progress(),
        }
    }

    /// Select the preset at `index` (zero-based). Returns whether the
    /// selection was accepted.
    pub fn select_preset(&mut self, index: usize) -> bool {
        let Some(duration) = self.presets.get(index).copied() else {
            tracing::debug!(index, "No preset at index");
            return false;
        };
        self.select(duration)
    }

    /// Arm a countdown of `duration`. Invalid durations are rejected here and
    /// never reach the engine.
    pub fn select(&mut self, duration: Duration) -> bool {
        if let Err(err) = validate_duration(duration) {
            tracing::warn!(%err, "Rejected duration selection");
            return false;
        }
        if self.timer.is_running() {
            tracing::debug!("Selection ignored while running");
            return false;
        }
        self.dispatch_timer(TimerIntent::Select { duration });
        true
    }

    /// Start/stop button.
    pub fn launch(&mut self) {
        self.dispatch_timer(TimerIntent::Launch);
    }

    pub fn stop(&mut self) {
        self.dispatch_timer(TimerIntent::Stop);
    }

    /// Deliver due countdown events to the state machine.
    pub fn on_tick(&mut self) {
        let Some(event) = self.engine.poll() else {
            return;
        };
        let intent = match event {
            CountdownEvent::Tick { remaining } => TimerIntent::Tick { remaining },
            CountdownEvent::Finished => TimerIntent::Finished,
        };
        self.dispatch_timer(intent);
    }

    // ========================================================================
    // Timer state machine (MVI pattern)
    // ========================================================================

    /// Dispatch an intent to the timer reducer, then bring the engine in
    /// line with the new phase.
    fn dispatch_timer(&mut self, intent: TimerIntent) {
        let before = self.timer.phase();
        dispatch_mvi!(self, timer, TimerReducer, intent);
        let after = self.timer.phase();

        if before != after {
            tracing::debug!(?intent, ?before, ?after, "Timer transition");
        }

        match (before, after) {
            (TimerPhase::Running, TimerPhase::Running) => {}
            (_, TimerPhase::Running) => {
                if let Err(err) = self
                    .engine
                    .start(self.timer.configured(), self.tick_interval)
                {
                    tracing::warn!(%err, "Countdown failed to start");
                    dispatch_mvi!(self, timer, TimerReducer, TimerIntent::Stop);
                }
            }
            (TimerPhase::Running, _) => self.engine.cancel(),
            _ => {}
        }
    }
}

impl<C: Clock> Drop for App<C> {
    fn drop(&mut self) {
        if self.engine.is_running() {
            tracing::debug!("Cancelling countdown on teardown");
            self.engine.cancel();
        }
    }
}

/// Short human label for a preset: `10 sec`, `5 min`, `1 h`, else `HH:MM:SS`.
pub fn preset_label(duration: Duration) -> String {
    let secs = duration.as_secs();
    match secs {
        0..=59 => format!("{} sec", secs),
        _ if secs % 3600 == 0 => format!("{} h", secs / 3600),
        _ if secs % 60 == 0 && secs < 3600 => format!("{} min", secs / 60),
        _ => format_hms(duration),
    }
}
