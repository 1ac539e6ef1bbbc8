use clap::{Args, Parser, Subcommand};

use baht_cli::commands::read_ops::ReaderOverrides;
use baht_cli::commands::{batch_ops, config_ops, read_ops};

#[derive(Parser)]
#[command(name = "bahttool", about = "Read Thai Baht amounts aloud")]
struct Cli {
    /// Custom settings TOML (default: embedded settings)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct WordArgs {
    /// Currency word spoken after the integer part
    #[arg(long)]
    currency: Option<String>,
    /// Sub-currency word spoken after the fractional part
    #[arg(long)]
    sub_currency: Option<String>,
}

#[derive(Args)]
struct DecimalMarkArgs {
    /// Decimal mark in the input (and output, for format)
    #[arg(long)]
    decimal_mark: Option<String>,
}

/// Marks for commands that print grouped output.
#[derive(Args)]
struct MarkArgs {
    #[command(flatten)]
    decimal: DecimalMarkArgs,
    /// Thousands delimiter for formatted output
    #[arg(long)]
    group_mark: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Read an amount as Thai words
    Read {
        /// Amount, e.g. 1,234.50 or -20
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[command(flatten)]
        words: WordArgs,
        #[command(flatten)]
        decimal: DecimalMarkArgs,
    },
    /// Spell a bare digit string
    Spell {
        /// Digits without sign or separators
        digits: String,
    },
    /// Print the canonical two-decimal form of an amount
    Normalize {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[command(flatten)]
        decimal: DecimalMarkArgs,
    },
    /// Print an amount with thousands delimiters
    Format {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[command(flatten)]
        marks: MarkArgs,
    },
    /// Read amounts from a file (one per line) and write JSONL records
    Batch {
        /// Input file
        input_file: String,
        /// Output JSONL file
        output_file: String,
        #[command(flatten)]
        words: WordArgs,
        #[command(flatten)]
        marks: MarkArgs,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn overrides(
    words: Option<WordArgs>,
    decimal: DecimalMarkArgs,
    group_mark: Option<String>,
) -> ReaderOverrides {
    let (currency, sub_currency) = words
        .map(|w| (w.currency, w.sub_currency))
        .unwrap_or_default();
    ReaderOverrides {
        currency,
        sub_currency,
        decimal_mark: decimal.decimal_mark,
        group_mark,
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref file) = cli.settings {
        config_ops::settings_load(file);
    }

    match cli.command {
        Command::Read {
            amount,
            words,
            decimal,
        } => read_ops::read_cmd(&amount, overrides(Some(words), decimal, None)),
        Command::Spell { digits } => read_ops::spell_cmd(&digits),
        Command::Normalize { amount, decimal } => {
            read_ops::normalize_cmd(&amount, overrides(None, decimal, None))
        }
        Command::Format { amount, marks } => {
            read_ops::format_cmd(&amount, overrides(None, marks.decimal, marks.group_mark))
        }
        Command::Batch {
            input_file,
            output_file,
            words,
            marks,
        } => batch_ops::batch_cmd(
            &input_file,
            &output_file,
            overrides(Some(words), marks.decimal, marks.group_mark),
        ),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_accepts_decimal_mark_only() {
        let cli = Cli::try_parse_from(["bahttool", "read", "1.234,5", "--decimal-mark", ","])
            .unwrap();
        let Command::Read { decimal, .. } = cli.command else {
            panic!("expected read");
        };
        assert_eq!(decimal.decimal_mark.as_deref(), Some(","));

        assert!(Cli::try_parse_from(["bahttool", "read", "5", "--group-mark", "."]).is_err());
        assert!(Cli::try_parse_from(["bahttool", "normalize", "5", "--group-mark", "."]).is_err());
    }

    #[test]
    fn format_accepts_both_marks() {
        let cli = Cli::try_parse_from([
            "bahttool",
            "format",
            "-1234.5",
            "--decimal-mark",
            ",",
            "--group-mark",
            ".",
        ])
        .unwrap();
        let Command::Format { amount, marks } = cli.command else {
            panic!("expected format");
        };
        assert_eq!(amount, "-1234.5");
        let o = overrides(None, marks.decimal, marks.group_mark);
        assert_eq!(o.decimal_mark.as_deref(), Some(","));
        assert_eq!(o.group_mark.as_deref(), Some("."));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
