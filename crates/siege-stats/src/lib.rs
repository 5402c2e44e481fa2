//! # Siege Stats
//!
//! Player statistics for the Siege stats bot.
//!
//! This crate owns the player model, the pure stat derivation used to build
//! replies, and the client for the third-party stats provider.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod derivation;
pub mod model;
pub mod provider;
pub mod r6stats;

#[cfg(any(test, feature = "testing"))]
pub mod fixtures;

pub use derivation::*;
pub use model::*;
pub use provider::*;
pub use r6stats::*;
