//! Monetary amounts.
//!
//! Prices are stored as plain `f64` dollars (that is what the persisted JSON
//! carries), but every stored value is first snapped to whole cents. Rounding
//! works on the shortest decimal representation of the input rather than on
//! `amount * 100.0`, so `19.995` rounds to `20.00` even though its binary value
//! is slightly below the midpoint.

/// At or above this magnitude an `f64` has no cents left to keep, and the
/// cent count would no longer fit the digit arithmetic below.
const EXACT_LIMIT: f64 = 1e15;

/// Convert a dollar amount to whole cents, rounding half away from zero.
///
/// Returns `None` for non-finite input and for amounts at or above
/// [`EXACT_LIMIT`].
pub fn to_cents(amount: f64) -> Option<i64> {
    if !amount.is_finite() || amount.abs() >= EXACT_LIMIT {
        return None;
    }

    // f64's Display never uses exponent notation and prints the shortest
    // digits that round-trip.
    let repr = amount.abs().to_string();
    let (whole, frac) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let whole: i64 = whole.parse().unwrap_or(0);

    let mut digits = frac.bytes().map(|b| i64::from(b - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|d| d >= 5);

    let cents = whole * 100 + tenths * 10 + hundredths + i64::from(round_up);
    Some(if amount.is_sign_negative() { -cents } else { cents })
}

/// Round a dollar amount to two decimal places.
///
/// Amounts too large to carry cents are returned unchanged; non-finite
/// input yields `0.0`.
pub fn round_money(amount: f64) -> f64 {
    match to_cents(amount) {
        Some(cents) => cents as f64 / 100.0,
        None if amount.is_finite() => amount,
        None => 0.0,
    }
}
