use crate::countdown::Clock;
use crate::ui::app::App;
use crate::ui::layout::{body_regions, button_rect, hit, layout_regions, preset_rects};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key<C: Clock>(app: &mut App<C>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char(' ') | KeyCode::Enter => app.launch(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.stop(),
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit as usize - '1' as usize;
            app.select_preset(index);
        }
        _ => {}
    }
}

/// Left clicks on the button or a preset chip. Uses the same layout as the
/// renderer, computed from the last known terminal size.
pub fn handle_mouse<C: Clock>(app: &mut App<C>, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let (_, body, _) = layout_regions(app.viewport());
    let regions = body_regions(body);

    if hit(button_rect(regions.button_row), mouse.column, mouse.row) {
        app.launch();
        return;
    }

    // Chips are hidden while running
    if app.timer().is_running() {
        return;
    }

    let labels = app.preset_labels();
    let clicked = preset_rects(regions.presets_row, &labels)
        .into_iter()
        .position(|rect| hit(rect, mouse.column, mouse.row));
    if let Some(index) = clicked {
        app.select_preset(index);
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
