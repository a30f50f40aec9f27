//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod options;
pub mod output;

pub use args::{Cli, Commands, ConfigCommands};
pub use error::{CliError, CliResult};
pub use options::ArgMap;
