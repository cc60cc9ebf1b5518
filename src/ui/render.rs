use crate::countdown::Clock;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, button_rect, layout_regions, preset_rects};
use crate::ui::sky::{sky_color, sun_position};
use crate::ui::theme::{
    BUTTON_PRIMARY, BUTTON_STOP, CHIP_BACKGROUND, CHIP_SELECTED, CLOCK_TEXT, GROUND, SUN,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};
use ratatui::Frame;

const SUN_RADIUS: f64 = 0.12;
const HORIZON_HALF_WIDTH: f64 = 1.25;

pub fn draw<C: Clock>(frame: &mut Frame<'_>, app: &App<C>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.timer()), header);
    frame.render_widget(Footer::new().widget(footer), footer);

    let progress = app.progress();
    let sky = sky_color(progress);
    frame.render_widget(Clear, body);
    frame.render_widget(Block::default().style(Style::default().bg(sky)), body);

    let regions = body_regions(body);
    draw_sky(frame, app, regions.sky, sky, progress);
    draw_clock(frame, app, regions.clock);
    draw_button(frame, app, regions.button_row);
    if !app.timer().is_running() {
        draw_presets(frame, app, regions.presets_row);
    }
}

fn draw_sky<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect, sky: Color, progress: f64) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let show_sun = app.show_sun() && app.timer().is_running();
    let (sun_x, sun_y) = sun_position(progress);

    let canvas = Canvas::default()
        .background_color(sky)
        .marker(Marker::Braille)
        .x_bounds([-HORIZON_HALF_WIDTH, HORIZON_HALF_WIDTH])
        .y_bounds([-0.1, 1.0 + 2.0 * SUN_RADIUS])
        .paint(move |ctx| {
            ctx.draw(&CanvasLine::new(
                -HORIZON_HALF_WIDTH,
                0.0,
                HORIZON_HALF_WIDTH,
                0.0,
                GROUND,
            ));
            if show_sun {
                // Concentric rings approximate a filled disc
                for ring in 1..=4 {
                    ctx.draw(&Circle {
                        x: sun_x,
                        y: sun_y,
                        radius: SUN_RADIUS * ring as f64 / 4.0,
                        color: SUN,
                    });
                }
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_clock<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let clock = Paragraph::new(app.timer().display())
        .alignment(Alignment::Center)
        .style(Style::default().fg(CLOCK_TEXT).add_modifier(Modifier::BOLD))
        .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(clock, area);
}

fn draw_button<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, row: Rect) {
    let rect = button_rect(row);
    // Rounded corners while running, square while idle
    let (color, border_type) = if app.timer().is_running() {
        (BUTTON_STOP, BorderType::Rounded)
    } else {
        (BUTTON_PRIMARY, BorderType::Plain)
    };
    let style = Style::default().fg(CLOCK_TEXT).bg(color);

    let button = Paragraph::new(app.timer().button_label())
        .alignment(Alignment::Center)
        .style(style.add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(style),
        );
    frame.render_widget(Clear, rect);
    frame.render_widget(button, rect);
}

fn draw_presets<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, row: Rect) {
    let labels = app.preset_labels();
    let selected = app.selected_preset();

    for (index, (rect, label)) in preset_rects(row, &labels)
        .into_iter()
        .zip(labels.iter())
        .enumerate()
    {
        let background = if selected == Some(index) {
            CHIP_SELECTED
        } else {
            CHIP_BACKGROUND
        };
        let style = Style::default().fg(CLOCK_TEXT).bg(background);
        let chip = Paragraph::new(label.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            );
        frame.render_widget(chip, rect);
    }
}
