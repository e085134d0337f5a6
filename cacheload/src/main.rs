//! Runs the `/cache` load test.
//!
//! ```sh
//! cacheload --host http://localhost:8080 -u 50 -r 10 -t 5m
//! ```
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    cacheload::cli::execute()
}
