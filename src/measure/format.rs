//! Quantity formatting
//!
//! Renders amounts with precision scaled to magnitude so scaled recipes
//! don't show misleadingly precise measurements ("0.3333 cup").

/// Amounts below this render with two decimal places.
pub const TWO_DECIMAL_BELOW: f64 = 0.1;
/// Amounts at or above this render as whole numbers.
pub const WHOLE_NUMBER_FROM: f64 = 10.0;

/// Number of decimal places used for an amount of this magnitude
pub fn decimal_places(amount: f64) -> usize {
    if amount < TWO_DECIMAL_BELOW {
        2
    } else if amount < WHOLE_NUMBER_FROM {
        1
    } else {
        0
    }
}

/// Round an amount to the precision `format_quantity` would print.
///
/// Rounds half away from zero (1.25 -> 1.3). Non-finite input yields 0.
pub fn round_for_display(amount: f64) -> f64 {
    if !amount.is_finite() {
        return 0.0;
    }

    let scale = 10f64.powi(decimal_places(amount) as i32);
    let rounded = (amount * scale).round() / scale;

    // Normalise -0.0 so it never prints as "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format an amount for display.
///
/// - `amount < 0.1` -> 2 decimal places
/// - `0.1 <= amount < 10` -> 1 decimal place
/// - `amount >= 10` -> whole number
///
/// Trailing zeros are dropped, so the output re-parses to the value it
/// shows and formatting it again yields the same string.
pub fn format_quantity(amount: f64) -> String {
    let places = decimal_places(amount);
    let rendered = format!("{:.*}", places, round_for_display(amount));
    trim_trailing_zeros(rendered)
}

fn trim_trailing_zeros(rendered: String) -> String {
    if !rendered.contains('.') {
        return rendered;
    }
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
