//! Predicates used by rule tables. Each returns `true` when the value passes.
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// `0001-01-01T00:00:00`, the value clients send for an unset date.
const DEFAULT_DATE_TIMESTAMP: i64 = -62_135_596_800;

pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub fn max_chars(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

pub fn letters_and_spaces(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

pub fn digits_only(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// A single `@` with something on both sides.
pub fn email(value: &str) -> bool {
    match (value.find('@'), value.rfind('@')) {
        (Some(first), Some(last)) => first == last && first > 0 && first < value.len() - 1,
        _ => false,
    }
}

/// Ids are required: zero means the field was missing.
pub fn id_present(value: i32) -> bool {
    value != 0
}

pub fn positive_decimal(value: &Decimal) -> bool {
    value.is_sign_positive() && !value.is_zero()
}

/// At most `scale` fractional digits (trailing zeros count) and at most
/// `precision - scale` integer digits.
pub fn precision_scale(value: &Decimal, precision: u32, scale: u32) -> bool {
    if value.scale() > scale {
        return false;
    }
    integer_digits(value) <= precision - scale
}

fn integer_digits(value: &Decimal) -> u32 {
    let mut whole = value.trunc().abs();
    let ten = Decimal::TEN;
    let mut digits = 0;
    while !whole.is_zero() {
        whole = (whole / ten).trunc();
        digits += 1;
    }
    digits
}

pub fn date_present(value: Option<&NaiveDateTime>) -> bool {
    match value {
        Some(date) => date.and_utc().timestamp() != DEFAULT_DATE_TIMESTAMP,
        None => false,
    }
}
