use crate::countdown::Clock;
use crate::ui::app::App;
use crate::ui::input::{handle_key, handle_mouse};
use crossterm::event::{Event, KeyEvent, MouseEvent};

/// Everything the event loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Frame timer fired: poll the countdown and redraw.
    Frame,
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

impl AppEvent {
    /// Map a terminal event. Focus and paste events are not used.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
            Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
            _ => None,
        }
    }
}

pub fn apply_event<C: Clock>(app: &mut App<C>, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(cols, rows) => app.on_resize(cols, rows),
        AppEvent::Frame => app.on_tick(),
        AppEvent::Shutdown => app.request_quit(),
    }
}
