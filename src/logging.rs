//! Logging setup using tracing-subscriber
//!
//! Logs go to stderr so that stdout carries only results. `RUST_LOG`
//! overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given debug flag
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "pharma_papers=debug,get_papers_list=debug,warn"
    } else {
        "pharma_papers=info,get_papers_list=info,warn"
    }
}

/// Initialize the CLI logger
pub fn init_cli_logger(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(debug)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: logger already initialized: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert!(default_directive(true).contains("pharma_papers=debug"));
        assert!(default_directive(false).contains("pharma_papers=info"));
    }

    #[test]
    fn test_directives_parse() {
        for debug in [true, false] {
            assert!(default_directive(debug)
                .parse::<EnvFilter>()
                .is_ok());
        }
    }
}
