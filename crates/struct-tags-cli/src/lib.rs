//! Command line front end for the `struct-tags` parser.
//!
//! The `struct-tags` binary parses annotation strings given as arguments or
//! on stdin and prints the resulting tags as indented text or JSON.
//!
//! # Configuration
//!
//! - `STRUCT_TAGS_LOG_LEVEL`: Log verbosity (trace, debug, info, warn,
//!   error), overridden by `--log-level`. Logs are written to stderr.

mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::run;
