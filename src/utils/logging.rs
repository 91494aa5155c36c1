//! Diagnostic logging setup
//!
//! Diagnostics go to stderr so they never mix with values printed on stdout.
//! `RUST_LOG` wins over the `-v` count when it is set.

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}

pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_filter(0), "connect_chat_config=warn");
        assert_eq!(default_filter(1), "connect_chat_config=info");
        assert_eq!(default_filter(2), "connect_chat_config=debug");
        assert_eq!(default_filter(7), "connect_chat_config=trace");
    }
}
