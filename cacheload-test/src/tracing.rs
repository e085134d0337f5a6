//! Logging for tests.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

/// Crates whose logs are captured at every level.
const CRATE_NAMES: &[&str] = &["cacheload", "cacheload_test"];

/// Initializes logging into the output captured by the Rust test runner.
///
/// Logs of the cacheload crates are captured at all levels, other crates only log errors. Set
/// `RUST_LOG` to replace this filter. Calling this more than once is harmless.
///
/// # Example
///
/// ```
/// cacheload_test::tracing::init();
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        CRATE_NAMES
            .iter()
            .filter_map(|name| format!("{name}=TRACE").parse::<Directive>().ok())
            .fold(EnvFilter::new("ERROR"), EnvFilter::add_directive)
    });

    tracing_subscriber::fmt::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .compact()
        .try_init()
        .ok();
}
