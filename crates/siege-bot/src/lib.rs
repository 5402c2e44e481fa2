//! # Siege Bot
//!
//! Discord bot that looks up Rainbow Six Siege player statistics.
//!
//! This is the binary crate: it resolves configuration from file,
//! environment and command line, sets up logging, and runs the Discord
//! client until it is interrupted.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod cli;
pub mod error;

pub use bot::*;
pub use cli::*;
pub use error::*;
