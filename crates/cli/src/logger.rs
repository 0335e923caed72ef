use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directives; the `folio` prefix also covers the
/// `folio_core`, `folio_generator` and `folio_validator` targets
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "folio=debug,tower_http=debug,warn"
    } else {
        "folio=info,warn"
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `--verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            let directives = default_directives(verbose);
            assert!(EnvFilter::try_new(directives).is_ok(), "{}", directives);
        }
        assert!(default_directives(true).contains("folio=debug"));
        assert!(default_directives(false).contains("folio=info"));
    }
}
