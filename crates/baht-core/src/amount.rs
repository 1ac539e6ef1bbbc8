//! Canonical two-decimal amounts.
//!
//! Raw input is stripped down to ASCII digits, a leading minus sign and a
//! single decimal mark, then rounded half-up to exactly two fractional digits.
//! Rounding works on the digit string, so integer parts of any length survive
//! unchanged.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

pub const DEFAULT_DECIMAL_MARK: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("malformed input: decimal mark {mark:?} appears {count} times (at most once allowed)")]
    MalformedInput { mark: String, count: usize },
    #[error("decimal mark must not be empty")]
    EmptyDecimalMark,
}

/// A monetary amount reduced to sign, integer digits and two fractional digits.
///
/// Only [`normalize`] constructs values, so the integer part is always a
/// non-empty run of ASCII digits without leading zeros (`"0"` for zero) and the
/// fraction is always two digits. Zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedAmount {
    negative: bool,
    integer: String,
    fraction: String,
}

impl NormalizedAmount {
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn integer(&self) -> &str {
        &self.integer
    }

    pub fn fraction(&self) -> &str {
        &self.fraction
    }

    pub fn is_integer_zero(&self) -> bool {
        self.integer == "0"
    }

    pub fn is_fraction_zero(&self) -> bool {
        self.fraction == "00"
    }

    pub fn is_zero(&self) -> bool {
        self.is_integer_zero() && self.is_fraction_zero()
    }
}

impl fmt::Display for NormalizedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{}{DEFAULT_DECIMAL_MARK}{}",
            self.integer, self.fraction
        )
    }
}

impl FromStr for NormalizedAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s, DEFAULT_DECIMAL_MARK)
    }
}

/// Normalize raw amount text.
///
/// Fails only when `decimal_mark` occurs more than once (or is empty).
/// Everything that is not a digit, the decimal mark, or a minus sign at the
/// very start (after leading whitespace) is discarded, so garbage input
/// degrades to zero.
pub fn normalize(raw: &str, decimal_mark: &str) -> Result<NormalizedAmount, AmountError> {
    if decimal_mark.is_empty() {
        return Err(AmountError::EmptyDecimalMark);
    }
    let count = raw.matches(decimal_mark).count();
    if count > 1 {
        debug!(raw, decimal_mark, count, "rejecting malformed amount");
        return Err(AmountError::MalformedInput {
            mark: decimal_mark.to_string(),
            count,
        });
    }

    let trimmed = raw.trim_start();
    let negative = trimmed.starts_with('-') && !trimmed.starts_with(decimal_mark);
    let (int_raw, frac_raw) = trimmed.split_once(decimal_mark).unwrap_or((trimmed, ""));

    let (integer, fraction) = round_half_up(&ascii_digits(int_raw), &ascii_digits(frac_raw));
    let integer = strip_leading_zeros(integer);
    let negative = negative && !(integer == "0" && fraction == "00");

    debug!(raw, %integer, %fraction, negative, "normalized amount");
    Ok(NormalizedAmount {
        negative,
        integer,
        fraction,
    })
}

fn ascii_digits(s: &str) -> Vec<u8> {
    s.bytes().filter(u8::is_ascii_digit).collect()
}

/// Round `integer.fraction` to two fractional digits, half-up.
fn round_half_up(integer: &[u8], fraction: &[u8]) -> (Vec<u8>, String) {
    let mut cents: Vec<u8> = fraction.iter().copied().take(2).collect();
    cents.resize(2, b'0');

    let mut integer = integer.to_vec();
    if integer.is_empty() {
        integer.push(b'0');
    }

    let round_up = fraction.get(2).is_some_and(|&d| d >= b'5');
    if round_up && increment(&mut cents) && increment(&mut integer) {
        integer.insert(0, b'1');
    }

    (integer, digits_to_string(&cents))
}

/// Add one to an ASCII digit run in place. Returns `true` on carry-out.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

fn strip_leading_zeros(digits: Vec<u8>) -> String {
    let start = digits
        .iter()
        .position(|&d| d != b'0')
        .unwrap_or(digits.len().saturating_sub(1));
    digits_to_string(&digits[start..])
}

fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(d)).collect()
}
