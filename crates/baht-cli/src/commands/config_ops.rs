use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Install a custom settings file before any command reads settings.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(baht_core::settings::init_custom(content), "Error: {}");
}

pub fn settings_export() {
    print!("{}", baht_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        baht_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: words.currency={}, words.sub_currency={}, marks.decimal={:?}, marks.group={:?}",
        s.words.currency, s.words.sub_currency, s.marks.decimal, s.marks.group
    );
}
