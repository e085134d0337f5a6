//! Command line entry point.
//!
//! All flags are parsed by goose, for example `--host`, `--users/-u`, `--hatch-rate/-r`,
//! `--run-time/-t`, `--iterations` and `--timeout`. See `cacheload --help`.

use std::error::Error;
use std::process::ExitCode;

use anyhow::Result;
use goose::metrics::GooseMetrics;
use goose::prelude::*;

use crate::{observability, scenario};

/// Bootstrap the runtime and run the load test.
///
/// Exits with status 1 if any request failed. Unless the run is bounded by `--iterations` or
/// started with `--no-reset-metrics`, goose resets its metrics once all users are running, so
/// failures during ramp-up do not count towards the exit status.
pub fn execute() -> Result<ExitCode> {
    observability::init_tracing();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .thread_name("cacheload-rt")
        .enable_all()
        .build()?;

    let metrics = runtime
        .block_on(async { run(GooseAttack::initialize()?).await })
        .inspect_err(log_failure)?;

    let failed = failed_requests(&metrics);
    if failed > 0 {
        tracing::warn!(failed, "some requests failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn log_failure(err: &GooseError) {
    match err {
        // goose's message for invalid options omits which option is wrong
        GooseError::InvalidOption {
            option,
            value,
            detail,
        } => tracing::error!(%option, %value, %detail, "load test failed"),
        _ => tracing::error!(error = err as &dyn Error, "load test failed"),
    }
}

/// Registers the `/cache` workload on the attack and runs it to completion.
pub async fn run(attack: GooseAttack) -> Result<GooseMetrics, GooseError> {
    attack
        .register_scenario(scenario::request_test()?)
        .execute()
        .await
}

/// Returns the number of requests recorded as failed across all endpoints.
pub fn failed_requests(metrics: &GooseMetrics) -> usize {
    metrics
        .requests
        .values()
        .map(|request| request.fail_count)
        .sum()
}
