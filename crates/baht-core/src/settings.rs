//! Global reader settings loaded from TOML.
//!
//! - `init_custom(toml_content)` installs custom settings; it fails with
//!   `AlreadyInitialized` once `settings()` has been read
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Install custom settings. Fails once `settings()` has been read or custom
/// settings were already installed.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    let parsed = parse_settings_toml(&toml_content)?;
    INSTANCE
        .set(parsed)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub words: WordSettings,
    pub marks: MarkSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordSettings {
    pub currency: String,
    pub sub_currency: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkSettings {
    pub decimal: String,
    pub group: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }
    // Marks share the input string with digits and the sign, so they must not
    // contain either.
    macro_rules! check_mark {
        ($field:ident) => {
            check_non_empty!(marks.$field);
            if s
                .marks
                .$field
                .chars()
                .any(|c| c.is_ascii_digit() || c == '-')
            {
                return Err(SettingsError::InvalidValue {
                    field: concat!("marks.", stringify!($field)).to_string(),
                    reason: "must not contain digits or '-'".to_string(),
                });
            }
        };
    }

    check_non_empty!(words.currency);
    check_non_empty!(words.sub_currency);

    check_mark!(decimal);
    check_mark!(group);
    if s.marks.decimal == s.marks.group {
        return Err(SettingsError::InvalidValue {
            field: "marks.group".to_string(),
            reason: "must differ from marks.decimal".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.words.currency, "บาท");
        assert_eq!(s.words.sub_currency, "สตางค์");
        assert_eq!(s.marks.decimal, ".");
        assert_eq!(s.marks.group, ",");
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[words]
currency = "ดอลลาร์"
sub_currency = "เซนต์"

[marks]
decimal = ","
group = "."
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.words.currency, "ดอลลาร์");
        assert_eq!(s.words.sub_currency, "เซนต์");
        assert_eq!(s.marks.decimal, ",");
        assert_eq!(s.marks.group, ".");
    }

    #[test]
    fn error_empty_currency() {
        let toml = r#"
[words]
currency = ""
sub_currency = "สตางค์"

[marks]
decimal = "."
group = ","
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("words.currency"));
    }

    #[test]
    fn error_digit_in_mark() {
        let toml = r#"
[words]
currency = "บาท"
sub_currency = "สตางค์"

[marks]
decimal = "0"
group = ","
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("marks.decimal"));
    }

    #[test]
    fn error_minus_group_mark() {
        let toml = r#"
[words]
currency = "บาท"
sub_currency = "สตางค์"

[marks]
decimal = "."
group = "-"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("marks.group"));
    }

    #[test]
    fn error_identical_marks() {
        let toml = r#"
[words]
currency = "บาท"
sub_currency = "สตางค์"

[marks]
decimal = "."
group = "."
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("must differ"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[words]
currency = "บาท"
sub_currency = "สตางค์"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn init_custom_after_first_read_is_rejected() {
        let before = settings().words.currency.clone();
        let toml = r#"
[words]
currency = "ดอลลาร์"
sub_currency = "เซนต์"

[marks]
decimal = "."
group = ","
"#;
        let err = init_custom(toml.to_string()).unwrap_err();
        assert!(matches!(err, SettingsError::AlreadyInitialized));
        assert_eq!(settings().words.currency, before);
    }

    #[test]
    fn default_toml_matches_embedded() {
        assert_eq!(default_toml(), DEFAULT_SETTINGS_TOML);
    }
}
