//! Amount-to-words reading.
//!
//! [`Reader`] ties the pieces together: normalize the raw text, spell the
//! integer and the two-digit fraction separately, then attach the currency
//! word, the sub-currency word or the ถ้วน ("exact") qualifier.

use tracing::debug_span;

use crate::amount::{normalize, AmountError, NormalizedAmount, DEFAULT_DECIMAL_MARK};
use crate::grouping::{group, DEFAULT_GROUP_MARK};
use crate::settings::{settings, Settings};
use crate::speller::{spell, DIGIT_WORDS};

pub const DEFAULT_CURRENCY: &str = "บาท";
pub const DEFAULT_SUB_CURRENCY: &str = "สตางค์";

/// Closes a whole-unit amount with no sub-unit remainder.
pub const EXACT_WORD: &str = "ถ้วน";

/// Prefix for negative amounts.
pub const NEGATIVE_WORD: &str = "ลบ";

/// Word choices and marks for reading and formatting amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reader {
    currency: String,
    sub_currency: String,
    decimal_mark: String,
    group_mark: String,
}

impl Default for Reader {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            sub_currency: DEFAULT_SUB_CURRENCY.to_string(),
            decimal_mark: DEFAULT_DECIMAL_MARK.to_string(),
            group_mark: DEFAULT_GROUP_MARK.to_string(),
        }
    }
}

impl Reader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(s: &Settings) -> Self {
        Self {
            currency: s.words.currency.clone(),
            sub_currency: s.words.sub_currency.clone(),
            decimal_mark: s.marks.decimal.clone(),
            group_mark: s.marks.group.clone(),
        }
    }

    pub fn with_currency(mut self, word: impl Into<String>) -> Self {
        self.currency = word.into();
        self
    }

    pub fn with_sub_currency(mut self, word: impl Into<String>) -> Self {
        self.sub_currency = word.into();
        self
    }

    pub fn with_decimal_mark(mut self, mark: impl Into<String>) -> Self {
        self.decimal_mark = mark.into();
        self
    }

    pub fn with_group_mark(mut self, mark: impl Into<String>) -> Self {
        self.group_mark = mark.into();
        self
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn sub_currency(&self) -> &str {
        &self.sub_currency
    }

    pub fn decimal_mark(&self) -> &str {
        &self.decimal_mark
    }

    pub fn group_mark(&self) -> &str {
        &self.group_mark
    }

    pub fn normalize(&self, raw: &str) -> Result<NormalizedAmount, AmountError> {
        normalize(raw, &self.decimal_mark)
    }

    /// Read raw amount text aloud.
    pub fn read(&self, raw: &str) -> Result<String, AmountError> {
        let amount = self.normalize(raw)?;
        Ok(self.read_amount(&amount))
    }

    pub fn read_amount(&self, amount: &NormalizedAmount) -> String {
        let _span = debug_span!("read_amount", %amount).entered();

        if amount.is_zero() {
            return format!("{}{}{EXACT_WORD}", DIGIT_WORDS[0], self.currency);
        }

        let mut out = String::new();
        if amount.is_negative() {
            out.push_str(NEGATIVE_WORD);
        }
        if !amount.is_integer_zero() {
            out.push_str(&spell(amount.integer()));
            out.push_str(&self.currency);
        }
        if amount.is_fraction_zero() {
            out.push_str(EXACT_WORD);
        } else {
            out.push_str(&spell(amount.fraction()));
            out.push_str(&self.sub_currency);
        }
        out
    }

    /// Normalize raw amount text and render it with group and decimal marks.
    pub fn format(&self, raw: &str) -> Result<String, AmountError> {
        let amount = self.normalize(raw)?;
        Ok(self.format_amount(&amount))
    }

    pub fn format_amount(&self, amount: &NormalizedAmount) -> String {
        group(amount, &self.group_mark, &self.decimal_mark)
    }
}

/// Read `raw` with the global settings.
pub fn read(raw: &str) -> Result<String, AmountError> {
    Reader::from_settings(settings()).read(raw)
}

/// Read `raw` with explicit currency words and decimal mark.
pub fn read_with(
    raw: &str,
    currency: &str,
    sub_currency: &str,
    decimal_mark: &str,
) -> Result<String, AmountError> {
    Reader::new()
        .with_currency(currency)
        .with_sub_currency(sub_currency)
        .with_decimal_mark(decimal_mark)
        .read(raw)
}

/// Format `raw` for display with the global settings.
pub fn format(raw: &str) -> Result<String, AmountError> {
    Reader::from_settings(settings()).format(raw)
}
