use ratatui::layout::{Constraint, Layout, Position, Rect};

pub const BUTTON_WIDTH: u16 = 14;
const ROW_HEIGHT: u16 = 3;
const CHIP_GAP: u16 = 1;

/// Header, body and footer of the whole screen.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Areas inside the body: sky canvas on top, then clock, button and presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyRegions {
    pub sky: Rect,
    pub clock: Rect,
    pub button_row: Rect,
    pub presets_row: Rect,
}

pub fn body_regions(body: Rect) -> BodyRegions {
    let [sky, clock, button_row, presets_row] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(ROW_HEIGHT),
        Constraint::Length(ROW_HEIGHT),
        Constraint::Length(ROW_HEIGHT),
    ])
    .areas(body);
    BodyRegions {
        sky,
        clock,
        button_row,
        presets_row,
    }
}

/// Horizontally centred slice of `area`, clipped to its width.
pub fn centered_by_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

pub fn button_rect(button_row: Rect) -> Rect {
    centered_by_width(button_row, BUTTON_WIDTH)
}

/// One bordered chip per label, laid out left to right and centred as a group.
/// Chips that do not fit are dropped.
pub fn preset_rects(presets_row: Rect, labels: &[String]) -> Vec<Rect> {
    let widths: Vec<u16> = labels
        .iter()
        .map(|label| label.chars().count() as u16 + 4)
        .collect();
    let total = widths.iter().sum::<u16>()
        + CHIP_GAP * (widths.len().saturating_sub(1)) as u16;
    let group = centered_by_width(presets_row, total);

    let mut rects = Vec::with_capacity(widths.len());
    let mut x = group.x;
    for width in widths {
        if x + width > group.x + group.width {
            break;
        }
        rects.push(Rect {
            x,
            y: group.y,
            width,
            height: group.height,
        });
        x += width + CHIP_GAP;
    }
    rects
}

pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}
