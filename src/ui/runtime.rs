use crate::config::Config;
use crate::shutdown::{spawn_signal_listener, ShutdownHandle};
use crate::ui::app::App;
use crate::ui::events::{apply_event, AppEvent};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crossterm::event::EventStream;
use futures::StreamExt;
use std::io;
use tokio::time::MissedTickBehavior;

/// Run the timer screen until the user quits or a signal arrives.
///
/// Everything happens on the calling task: terminal events, frame ticks and
/// the shutdown notification are multiplexed with `select!`, and the
/// countdown is polled on every frame.
pub async fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(&config);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    let shutdown = ShutdownHandle::new();
    spawn_signal_listener(shutdown.clone());

    let mut terminal_events = EventStream::new();
    let mut frames = tokio::time::interval(config.ui.frame_interval());
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let event: Option<AppEvent> = tokio::select! {
            _ = shutdown.wait() => Some(AppEvent::Shutdown),
            _ = frames.tick() => Some(AppEvent::Frame),
            next = terminal_events.next() => match next {
                Some(event) => AppEvent::from_terminal(event?),
                // Input closed
                None => Some(AppEvent::Shutdown),
            },
        };

        if let Some(event) = event {
            apply_event(&mut app, event);
        }
    }

    // Cancel the countdown before the terminal is handed back
    drop(app);
    drop(guard);
    Ok(())
}
