//! # Siege Commands
//!
//! Message command handling for the Siege stats bot.
//!
//! This crate turns inbound chat messages into stats lookups: it parses the
//! command, posts a placeholder, fetches the player, and edits the
//! placeholder with the composed reply. The Poise framework wiring that feeds
//! gateway events into the dispatcher lives here as well.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod dispatcher;
pub mod framework;
pub mod messenger;
pub mod reply;

pub use command::*;
pub use dispatcher::*;
pub use framework::*;
pub use messenger::*;
pub use reply::*;
