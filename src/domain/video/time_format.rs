// SPDX-License-Identifier: MPL-2.0
//! Time label formatting.

/// Formats a playback time for the time labels.
///
/// Produces `m:ss` below one hour and `h:mm:ss` from one hour on. Hours
/// (and minutes without an hour field) are unpadded; the remaining fields
/// are always two digits. Negative or non-finite input formats as `0:00`.
///
/// # Examples
///
/// ```
/// use ws_video_player::domain::video::format_duration;
///
/// assert_eq!(format_duration(5.0), "0:05");
/// assert_eq!(format_duration(125.9), "2:05");
/// assert_eq!(format_duration(3665.0), "1:01:05");
/// ```
#[must_use]
pub fn format_duration(time_secs: f64) -> String {
    let total = if time_secs.is_finite() && time_secs > 0.0 {
        time_secs.floor() as u64
    } else {
        0
    };
    let seconds = total % 60;
    let minutes = (total / 60) % 60;
    let hours = total / 3600;

    if hours == 0 {
        format!("{minutes}:{seconds:02}")
    } else {
        format!("{hours}:{minutes:02}:{seconds:02}")
    }
}
