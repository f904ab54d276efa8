//! CLI module
//!
//! Command-line interface over the retrieval engine.
//!
//! # Commands
//!
//! - `retrieve` - Fetch a page and print its summary
//! - `uri` - Print the query URI for a page without touching the network

mod commands;
mod runner;

pub use commands::{Cli, Commands, PageArgs};
pub use runner::Runner;
