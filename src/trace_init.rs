//! JSON-lines tracing for hosts that embed the engine.
//!
//! With the `trace` feature, [`init_tracing`] writes every event to
//! `<log_dir>/baht-trace.jsonl`. The interesting records are:
//!
//! - `spell` spans from the speller (field `len`), closed once per call
//! - `read_amount` spans from `Reader::read_amount` (field `amount`)
//! - `normalized amount` / `rejecting malformed amount` events from `normalize`
//! - `baht_engine_*` failure events from the C ABI layer
//!
//! `RUST_LOG` overrides [`DEFAULT_FILTER`]. Without the feature the call is a
//! no-op and nothing is emitted unless the host installs its own subscriber.

#[cfg(feature = "trace")]
use std::sync::Once;

use std::path::Path;

/// File name created inside the host-supplied log directory.
pub const TRACE_FILE: &str = "baht-trace.jsonl";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "baht_core=debug,baht_engine=debug";

#[cfg(feature = "trace")]
static INSTALLED: Once = Once::new();

/// Install the JSON file subscriber. Later calls are ignored, including calls
/// with a different directory.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    INSTALLED.call_once(|| {
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, TRACE_FILE));
        // The writer thread must outlive every engine call the host makes.
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be global in the host; keep it.
        let _ = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_covers_engine_crates() {
        assert!(DEFAULT_FILTER.contains("baht_core=debug"));
        assert!(DEFAULT_FILTER.contains("baht_engine=debug"));
        assert!(TRACE_FILE.ends_with(".jsonl"));
    }

    #[test]
    fn init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        init_tracing(dir.path());
        init_tracing(dir.path());
        assert_eq!(crate::read("21.25").unwrap(), "ยี่สิบเอ็ดบาทยี่สิบห้าสตางค์");
    }
}
