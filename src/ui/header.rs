use crate::countdown::format_hms;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_RUNNING};
use crate::ui::timer::{TimerPhase, TimerState};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, timer: &TimerState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let phase_style = match timer.phase() {
            TimerPhase::Running => Style::default().fg(STATUS_RUNNING),
            TimerPhase::Idle | TimerPhase::PreArmed => text_style,
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Sunset Timer", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(timer.phase().label(), phase_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format_hms(timer.configured()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
