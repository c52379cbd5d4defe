#![forbid(unsafe_code)]

//! Command-line host for the wcloud engine.
//!
//! Library half of the `wcloud` binary, so the session driver can be tested
//! without spawning a process.

pub mod app;
pub mod cli;
pub mod error;
pub mod trace;

pub use app::{CloudApp, run};
pub use cli::{Command, FootprintKind, Opts, OutputFormat};
pub use error::{CliError, ParseFootprintError, ParseFormatError};
