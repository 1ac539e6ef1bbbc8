//! Thai numeral spelling.
//!
//! Digits are read left to right against a six-place cycle (units, tens,
//! hundreds, thousands, ten-thousands, hundred-thousands). The units slot
//! doubles as the million anchor, so every six-digit boundary except the last
//! digit re-emits ล้าน and arbitrarily long inputs need no scale table.
//! Irregular pairings (สิบ, ยี่สิบ, เอ็ด) come from [`rules::RULES`].

pub mod rules;

use tracing::debug_span;

use rules::{DigitWord, PlaceWord};

/// Spoken words for digits 0–9.
pub const DIGIT_WORDS: [&str; 10] = [
    "ศูนย์", "หนึ่ง", "สอง", "สาม", "สี่", "ห้า", "หก", "เจ็ด", "แปด", "เก้า",
];

/// Place words by cycle position. Position 0 holds the million word; the
/// units place of the final digit is never spoken.
pub const PLACE_WORDS: [&str; 6] = ["ล้าน", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน"];

pub const CYCLE_LEN: usize = PLACE_WORDS.len();

/// Cycle position of the digit at `index` in a run of `len` digits.
/// `index` must be less than `len`.
pub(crate) fn place_position(len: usize, index: usize) -> usize {
    debug_assert!(index < len, "digit index {index} out of range for length {len}");
    (len - 1 - index) % CYCLE_LEN
}

/// Spell an unsigned digit string.
///
/// Non-digit characters are ignored. An empty or all-zero input spells as
/// the empty string; the caller decides how a zero amount is phrased.
pub fn spell(digits: &str) -> String {
    let values: Vec<u8> = digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect();
    let len = values.len();
    let _span = debug_span!("spell", len).entered();

    let mut out = String::with_capacity(len * 12);
    let mut seen_non_zero = false;
    for (index, &value) in values.iter().enumerate() {
        let place = place_position(len, index);
        let (word, place_word) = match rules::lookup(place, value, seen_non_zero) {
            Some(rule) => (rule.word, rule.place_word),
            None => (DigitWord::Default, PlaceWord::Spoken),
        };

        match word {
            DigitWord::Default => out.push_str(DIGIT_WORDS[usize::from(value)]),
            DigitWord::Irregular(w) => out.push_str(w),
            DigitWord::Silent => {}
        }
        let is_last = index + 1 == len;
        if place_word == PlaceWord::Spoken && !is_last {
            out.push_str(PLACE_WORDS[place]);
        }

        seen_non_zero |= value != 0;
    }
    out
}
