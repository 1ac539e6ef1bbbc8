//! Irregular digit/place pairings of the Thai counting grammar.
//!
//! Each rule matches a (cycle position, digit value) pair and says how the
//! digit word and the place word are spoken. The first matching rule wins;
//! digits with no matching rule use the plain digit word and place word.

/// How the digit itself is spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitWord {
    /// The regular word from the digit table.
    Default,
    /// Nothing is spoken for the digit.
    Silent,
    /// A replacement word.
    Irregular(&'static str),
}

/// Whether the place word of the digit's position is spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceWord {
    Spoken,
    Silent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Cycle position the rule applies to; `None` matches every position.
    pub place: Option<usize>,
    pub digit: u8,
    /// Only match when a more significant non-zero digit was already read.
    pub after_non_zero: bool,
    pub word: DigitWord,
    pub place_word: PlaceWord,
}

impl Rule {
    fn matches(&self, place: usize, digit: u8, after_non_zero: bool) -> bool {
        self.digit == digit
            && self.place.map_or(true, |p| p == place)
            && (!self.after_non_zero || after_non_zero)
    }
}

pub static RULES: &[Rule] = &[
    // A zero at the units/million anchor still carries ล้าน when something
    // bigger precedes it: 1_000_000_000_000 → หนึ่งล้านล้าน.
    Rule {
        place: Some(0),
        digit: 0,
        after_non_zero: true,
        word: DigitWord::Silent,
        place_word: PlaceWord::Spoken,
    },
    Rule {
        place: None,
        digit: 0,
        after_non_zero: false,
        word: DigitWord::Silent,
        place_word: PlaceWord::Silent,
    },
    // สิบเอ็ด, หนึ่งร้อยเอ็ด, เอ็ดล้าน
    Rule {
        place: Some(0),
        digit: 1,
        after_non_zero: true,
        word: DigitWord::Irregular("เอ็ด"),
        place_word: PlaceWord::Spoken,
    },
    // สิบ, never หนึ่งสิบ
    Rule {
        place: Some(1),
        digit: 1,
        after_non_zero: false,
        word: DigitWord::Silent,
        place_word: PlaceWord::Spoken,
    },
    // ยี่สิบ, never สองสิบ
    Rule {
        place: Some(1),
        digit: 2,
        after_non_zero: false,
        word: DigitWord::Irregular("ยี่"),
        place_word: PlaceWord::Spoken,
    },
];

/// Find the first rule for a digit at `place`.
pub fn lookup(place: usize, digit: u8, after_non_zero: bool) -> Option<&'static Rule> {
    RULES
        .iter()
        .find(|r| r.matches(place, digit, after_non_zero))
}
