//! Command implementations for glabs-cli

pub mod show;

pub use show::run_show;
