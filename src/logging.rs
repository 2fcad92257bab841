use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when RUST_LOG is not set, indexed by `-v` count
const LEVELS: [&str; 3] = ["splicer=info", "splicer=debug", "splicer=trace"];

pub fn default_filter(verbosity: u8) -> &'static str {
    LEVELS[usize::from(verbosity).min(LEVELS.len() - 1)]
}

/// Initialize the tracing subscriber.
///
/// Logs always go to stderr: stdout carries the success message, the JSON
/// report or the dry-run output.
pub fn init_logging(verbosity: u8, ansi_colors: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let result = fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(e) = result {
        // Already initialized, e.g. by a test harness
        eprintln!("Warning: Logger initialization failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_saturates() {
        assert_eq!(default_filter(0), "splicer=info");
        assert_eq!(default_filter(1), "splicer=debug");
        assert_eq!(default_filter(2), "splicer=trace");
        assert_eq!(default_filter(9), "splicer=trace");
    }
}
