//! Result formatting for the calculator display.
//!
//! Results are rounded to ten decimal places to hide binary floating-point
//! noise, then cut down to fit a twelve character display.

/// Maximum number of characters a formatted result may occupy.
pub const MAX_DISPLAY_LEN: usize = 12;

/// Sentinel shown in place of a number after a failed calculation.
pub const ERROR_SENTINEL: &str = "Error";

/// Scale used to round results to ten decimal places.
const ROUNDING_SCALE: f64 = 1e10;

/// Format a calculation result for display.
///
/// Non-finite values format as [`ERROR_SENTINEL`].
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_SENTINEL.to_string();
    }

    let scaled = value * ROUNDING_SCALE;
    let rounded = if scaled.is_finite() {
        round_half_up(scaled) / ROUNDING_SCALE
    } else {
        // Far beyond ten decimal places of precision anyway
        value
    };

    // Normalize -0 so it never shows up as "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    truncate_for_display(rounded.to_string())
}

/// Round to the nearest integer, with halves going toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Cut a numeric string down to [`MAX_DISPLAY_LEN`] characters.
fn truncate_for_display(text: String) -> String {
    if text.len() <= MAX_DISPLAY_LEN {
        return text;
    }

    let Some((int_part, frac_part)) = text.split_once('.') else {
        return text[..MAX_DISPLAY_LEN].to_string();
    };

    if int_part.len() >= MAX_DISPLAY_LEN {
        return int_part[..MAX_DISPLAY_LEN].to_string();
    }

    // Room left for fraction digits after the integer part and the point
    let frac_budget = MAX_DISPLAY_LEN - int_part.len() - 1;
    let frac_len = frac_budget.min(frac_part.len());
    format!("{}.{}", int_part, &frac_part[..frac_len])
}
