//! Test utilities for the cacheload load test.
//!
//! This crate provides an in-process target server and logging setup for tests. See the modules
//! for all available utilities.

pub mod server;
pub mod tracing;
