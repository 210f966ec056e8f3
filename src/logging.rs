//! Tracing setup: stderr plus a daily rolling log file.

use std::fmt::Result as FmtResult;
use std::path::Path;

use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling,
};
use tracing_subscriber::{
    fmt::{format::Writer, time::FormatTime, Layer},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer as _,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Local wall-clock timestamps.
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> FmtResult {
        write!(w, "{}", chrono::Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_directive`. The returned guard flushes the
/// file writer on drop and must be held until exit.
pub fn init(default_directive: &str, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let stderr_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let stderr_layer = Layer::default()
        .with_writer(std::io::stderr)
        .with_timer(LocalTimer)
        .with_target(false)
        .with_filter(stderr_filter);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let file_appender = rolling::daily(dir, "famfam-flags.log");
            let (file_writer, guard) = NonBlocking::new(file_appender);
            let file_filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("famfam_flags=debug,info"));

            let layer = Layer::default()
                .with_writer(file_writer)
                .with_timer(LocalTimer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(file_filter);

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}
