//! Sky and sun animation.
//!
//! Pure functions of the timer progress (`1.0` = nothing elapsed,
//! `0.0` = done). Nothing here feeds back into the timer.

use ratatui::style::Color;
use std::f64::consts::PI;

use crate::ui::theme::{SKY_IDLE, SKY_RUNNING};

/// Material "fast out, slow in" curve: cubic bezier `(0.4, 0.0, 0.2, 1.0)`.
pub fn fast_out_slow_in(t: f64) -> f64 {
    cubic_bezier(0.4, 0.0, 0.2, 1.0, t)
}

/// Evaluate a CSS-style cubic bezier easing at `t` (bisection on x).
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let curve = |p1: f64, p2: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };

    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..32 {
        let mid = (lo + hi) / 2.0;
        if curve(x1, x2, mid) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    curve(y1, y2, (lo + hi) / 2.0)
}

/// Linear blend between two RGB colours. Non-RGB colours snap at the midpoint.
pub fn lerp_color(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Background colour: shifts from the idle sky to dusk as time elapses.
pub fn sky_color(progress: f64) -> Color {
    lerp_color(SKY_IDLE, SKY_RUNNING, fast_out_slow_in(1.0 - progress))
}

/// Sun centre on the upper half of the unit circle, `y` pointing up.
///
/// Full progress puts the sun on the left horizon, zero on the right.
pub fn sun_position(progress: f64) -> (f64, f64) {
    let theta = progress.clamp(0.0, 1.0) * PI;
    (theta.cos(), theta.sin())
}
