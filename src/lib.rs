//! Core library for the `perfstress` CLI.
//!
//! This crate provides the internal building blocks used by the binary:
//! CLI argument types, the workload trait and registry, and the run
//! machinery that drives setup, warmup, measured iterations, and
//! teardown. The primary user-facing interface is the `perfstress`
//! command-line application; library APIs may evolve as the CLI grows.
pub mod args;
pub mod error;
pub mod logger;
pub mod runner;
pub mod workload;
