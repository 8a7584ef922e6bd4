//! CLI library components for the audit sampler.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
