//! decimal rounding.

#[cfg(test)]
mod tests;

/// rounds `value` to the given number of decimal places.
///
/// ties round to the even neighbor, and are judged on the exact binary value of `value`.
/// `0.125` rounds to `0.12`, while `2.675` (stored as `2.67499..`) rounds to `2.67`.
pub(crate) fn round(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    format!("{value:.places$}").parse().unwrap_or(value)
}
