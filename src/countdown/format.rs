use std::time::Duration;

/// Render a duration as `HH:MM:SS`.
///
/// Sub-second remainder is truncated. Hours are not wrapped, so durations of
/// a day or more render as e.g. `25:00:00`.
pub fn format_hms(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
