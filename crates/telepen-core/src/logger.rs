//! Log-facade installation for scan diagnostics.
//!
//! The decoder narrates rejected scan rows at `debug` level and decoded
//! payloads through the same facade; library code only uses the `log`
//! macros. Binaries that want to see that narration install this writer
//! once at startup.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

/// Stderr writer tuned for scanning loops.
///
/// Each line carries the time since install and the record target, so
/// per-row attempt narration from the decoder separates cleanly from
/// application output when many frames are processed:
///
/// ```text
/// 0.004s telepen_decoder::scan: row 25: start glyph not found
/// ```
struct ScanDiagnostics {
    level: LevelFilter,
    started: Instant,
}

impl Log for ScanDiagnostics {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let secs = self.started.elapsed().as_secs_f64();
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "{secs:.3}s {}: {}",
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

static DIAGNOSTICS: OnceLock<ScanDiagnostics> = OnceLock::new();

/// Install the diagnostics writer behind the `log` facade.
///
/// Fails when another logger (including an earlier call of this
/// function) already claimed the facade; the existing logger stays in
/// place.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let writer = DIAGNOSTICS.get_or_init(|| ScanDiagnostics {
        level,
        started: Instant::now(),
    });
    log::set_logger(writer)?;
    log::set_max_level(writer.level);
    Ok(())
}

/// Install a `tracing` subscriber for the decode spans instead.
///
/// Respects `RUST_LOG`-style filtering via the default env filter and
/// falls back to `info`.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::Uptime::default())
        .with_writer(std::io::stderr)
        .try_init();
}
