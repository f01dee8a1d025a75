//! Shared test utilities for the glabs workspace.
//!
//! This crate provides course fixtures and temporary configuration files so
//! the crate test suites do not each carry their own copies. It is a
//! dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`fixtures`] — the `cs1` sample course as YAML and TOML
//! - [`config`] — [`TestConfig`](config::TestConfig) for writing config files to a temp dir

pub mod config;
pub mod fixtures;
