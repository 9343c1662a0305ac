//! Currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Maximum number of fraction digits kept when formatting.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats an amount with comma thousands grouping.
///
/// Absent amounts format as `"0"`. No decimal places are forced: whole
/// amounts have none, fractional amounts keep up to three digits (rounded
/// half away from zero) with trailing zeros dropped. Negative amounts carry
/// a leading `-`.
///
/// # Examples
///
/// ```
/// use statement_engine::calculation::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(None), "0");
/// assert_eq!(format_currency(Some(Decimal::from(1234567))), "1,234,567");
/// assert_eq!(format_currency(Some(Decimal::from(-1500))), "-1,500");
/// ```
pub fn format_currency(value: Option<Decimal>) -> String {
    let Some(value) = value else {
        return "0".to_string();
    };

    let rounded = value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    if rounded.is_zero() {
        return "0".to_string();
    }

    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() {
        formatted.push('-');
    }
    formatted.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
