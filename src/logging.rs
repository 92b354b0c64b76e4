use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "cylenian",
    "cylenian_calendar",
    "cylenian_date",
    "cylenian_moon",
];

/// Builds the filter directive for a CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing based on CLI verbosity level.
///
/// `RUST_LOG` env var overrides the CLI flag if set. Logs go to stderr so
/// JSON output on stdout stays parseable.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert!(default_filter(0).starts_with("cylenian=warn,"));
        assert!(default_filter(1).contains("cylenian_moon=info"));
        assert!(default_filter(2).contains("cylenian_date=debug"));
        assert!(default_filter(7).ends_with("cylenian_moon=trace"));
    }

    #[test]
    fn directives_parse() {
        for verbosity in 0..4 {
            assert!(EnvFilter::try_new(default_filter(verbosity)).is_ok());
        }
    }
}
