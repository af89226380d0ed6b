//! Console logging setup.
//!
//! `RUST_LOG` wins when set; otherwise the level comes from the `-v` count.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity count.
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,folio=info,folio_core=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber. Later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = filter_for_verbosity(verbosity);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_parse() {
        for verbosity in 0..4 {
            assert!(EnvFilter::try_new(filter_for_verbosity(verbosity)).is_ok());
        }
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
