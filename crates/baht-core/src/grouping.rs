//! Thousands-delimited display formatting.

use crate::amount::NormalizedAmount;

pub const DEFAULT_GROUP_MARK: &str = ",";

/// Render `amount` with `group_mark` between every three integer digits.
pub fn group(amount: &NormalizedAmount, group_mark: &str, decimal_mark: &str) -> String {
    let integer = amount.integer();
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3 * group_mark.len() + 4);
    if amount.is_negative() {
        out.push('-');
    }
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(group_mark);
        }
        out.push(c);
    }
    out.push_str(decimal_mark);
    out.push_str(amount.fraction());
    out
}
