//! Diagnostic output on stderr.
//!
//! Stdout carries only passphrases, so every log line goes to stderr,
//! without timestamps and coloured only when stderr is a terminal.

use std::io::{self, IsTerminal};
use tracing_subscriber::fmt::format::{DefaultFields, Format, Full};
use tracing_subscriber::fmt::{MakeWriter, SubscriberBuilder};
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configures the CLI's log format for `writer`.
pub fn subscriber<W>(
    filter: EnvFilter,
    ansi: bool,
    writer: W,
) -> SubscriberBuilder<DefaultFields, Format<Full, ()>, EnvFilter, W>
where
    W: for<'w> MakeWriter<'w> + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .without_time()
        .with_ansi(ansi)
}

/// Installs the global subscriber writing to stderr.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    subscriber(filter, io::stderr().is_terminal(), io::stderr).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(ansi: bool, emit: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = subscriber(EnvFilter::new("warn"), ansi, move || writer.clone()).finish();
        tracing::subscriber::with_default(subscriber, emit);

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_plain_output_has_no_time_or_colour() {
        let output = capture(false, || tracing::warn!(min_length = 6, "Maximum raised"));

        assert!(!output.contains('\u{1b}'));
        assert!(output.trim_start().starts_with("WARN"));
        assert!(output.contains("Maximum raised"));
        assert!(output.contains("min_length=6"));
    }

    #[test]
    fn test_ansi_when_requested() {
        let output = capture(true, || tracing::warn!("coloured"));
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn test_filter_applies() {
        let output = capture(false, || tracing::info!("hidden"));
        assert!(output.is_empty());
    }
}
