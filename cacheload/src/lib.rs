//! A load test that sends a fixed payload to the `/cache` endpoint of a target server.
//!
//! The workload lives in [`scenario`]: a goose scenario, `RequestTest`, with a single transaction,
//! `local_test`, which sends `GET /cache` with the JSON body `{"body": <payload>}`, where the
//! payload is `"aa"` repeated 30,000 times (see [`payload`]).
//!
//! Scheduling, simulated users, hatch rate, run time, per-request metrics and failure recording
//! are all provided by [goose](https://docs.rs/goose). [`cli::run`] registers the workload on a
//! `GooseAttack` and executes it.
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod cli;
pub mod observability;
pub mod payload;
pub mod scenario;
