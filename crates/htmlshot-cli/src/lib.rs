//! htmlshot CLI library
//!
//! Argument parsing, configuration and the file/stream plumbing around
//! [`htmlshot::capture`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod config;
mod error;
mod input;
mod logging;
mod output;

pub use commands::Cli;
pub use config::{CliConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use input::PageInput;
pub use logging::init_tracing;
pub use output::{open_viewer, render_device_list, ListFormat, OutputTarget};
