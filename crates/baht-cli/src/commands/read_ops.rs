use std::process;

use baht_core::settings::settings;
use baht_core::{spell, Reader};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Command-line replacements for the configured words and marks.
#[derive(Debug, Default, Clone)]
pub struct ReaderOverrides {
    pub currency: Option<String>,
    pub sub_currency: Option<String>,
    pub decimal_mark: Option<String>,
    pub group_mark: Option<String>,
}

impl ReaderOverrides {
    pub fn apply(self, mut reader: Reader) -> Reader {
        if let Some(w) = self.currency {
            reader = reader.with_currency(w);
        }
        if let Some(w) = self.sub_currency {
            reader = reader.with_sub_currency(w);
        }
        if let Some(m) = self.decimal_mark {
            reader = reader.with_decimal_mark(m);
        }
        if let Some(m) = self.group_mark {
            reader = reader.with_group_mark(m);
        }
        reader
    }

    /// Reader built from the global settings with these overrides applied.
    pub fn reader(self) -> Reader {
        self.apply(Reader::from_settings(settings()))
    }
}

pub fn read_cmd(amount: &str, overrides: ReaderOverrides) {
    let reader = overrides.reader();
    let words = die!(reader.read(amount), "Error: {}");
    println!("{words}");
}

pub fn spell_cmd(digits: &str) {
    println!("{}", spell(digits));
}

pub fn normalize_cmd(amount: &str, overrides: ReaderOverrides) {
    let reader = overrides.reader();
    let normalized = die!(reader.normalize(amount), "Error: {}");
    println!("{normalized}");
}

pub fn format_cmd(amount: &str, overrides: ReaderOverrides) {
    let reader = overrides.reader();
    let formatted = die!(reader.format(amount), "Error: {}");
    println!("{formatted}");
}
