//! Command implementations for the studynotes CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that drives the view layer against the backend
//! - Human-readable and JSON output formatting

pub mod books;
pub mod notes;
pub mod shell;
pub mod upload;

use anyhow::Result;
use serde::Serialize;
use studynotes_client::{ApiClient, ClientConfig};

/// Build the backend client for the given configuration.
pub fn build_client(config: &ClientConfig) -> Result<ApiClient> {
    Ok(ApiClient::new(config)?)
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}
