use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process;

use serde::Serialize;

use baht_core::Reader;

use super::read_ops::ReaderOverrides;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One JSONL output line per input amount.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BatchRecord {
    Read {
        input: String,
        normalized: String,
        formatted: String,
        words: String,
    },
    Failed {
        input: String,
        error: String,
    },
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub failed: usize,
}

pub fn batch_record(reader: &Reader, input: &str) -> BatchRecord {
    match reader.normalize(input) {
        Ok(amount) => BatchRecord::Read {
            input: input.to_string(),
            normalized: amount.to_string(),
            formatted: reader.format_amount(&amount),
            words: reader.read_amount(&amount),
        },
        Err(e) => BatchRecord::Failed {
            input: input.to_string(),
            error: e.to_string(),
        },
    }
}

/// Read one amount per line from `input` and write JSONL records to `output`.
/// Blank lines are skipped.
pub fn run_batch(reader: &Reader, input: &Path, output: &Path) -> Result<BatchSummary, BatchError> {
    let lines = BufReader::new(File::open(input)?);
    let mut out = BufWriter::new(File::create(output)?);
    let mut summary = BatchSummary::default();

    for line in lines.lines() {
        let line = line?;
        let amount = line.trim();
        if amount.is_empty() {
            continue;
        }
        let record = batch_record(reader, amount);
        if matches!(record, BatchRecord::Failed { .. }) {
            summary.failed += 1;
        }
        summary.total += 1;
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
    }
    out.flush()?;
    Ok(summary)
}

pub fn batch_cmd(input_file: &str, output_file: &str, overrides: ReaderOverrides) {
    let reader = overrides.reader();
    let summary = run_batch(&reader, Path::new(input_file), Path::new(output_file))
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        });
    eprintln!(
        "{} amounts written to {output_file} ({} failed)",
        summary.total, summary.failed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn record_for_valid_amount() {
        let record = batch_record(&Reader::new(), "1234.5");
        assert_eq!(
            record,
            BatchRecord::Read {
                input: "1234.5".to_string(),
                normalized: "1234.50".to_string(),
                formatted: "1,234.50".to_string(),
                words: "หนึ่งพันสองร้อยสามสิบสี่บาทห้าสิบสตางค์".to_string(),
            }
        );
    }

    #[test]
    fn record_for_malformed_amount() {
        let record = batch_record(&Reader::new(), "1.2.3");
        match record {
            BatchRecord::Failed { input, error } => {
                assert_eq!(input, "1.2.3");
                assert!(error.contains("malformed"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn batch_writes_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("amounts.txt");
        let output = dir.path().join("out.jsonl");
        fs::write(&input, "5\n\n0.995\n1.2.3\n  -21.25  \n").unwrap();

        let summary = run_batch(&Reader::new(), &input, &output).unwrap();
        assert_eq!(summary, BatchSummary { total: 4, failed: 1 });

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["words"], "ห้าบาทถ้วน");
        assert_eq!(lines[1]["normalized"], "1.00");
        assert_eq!(lines[1]["words"], "หนึ่งบาทถ้วน");
        assert!(lines[2].get("error").is_some());
        assert_eq!(lines[3]["input"], "-21.25");
        assert_eq!(lines[3]["formatted"], "-21.25");
        assert_eq!(lines[3]["words"], "ลบยี่สิบเอ็ดบาทยี่สิบห้าสตางค์");
    }

    #[test]
    fn batch_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_batch(
            &Reader::new(),
            &dir.path().join("missing.txt"),
            &dir.path().join("out.jsonl"),
        )
        .unwrap_err();
        assert!(matches!(err, BatchError::Io(_)));
    }
}
