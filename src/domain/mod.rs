//! Domain types for diffdeck.
//! Defines the core data structures shared by the engine and the loader.

pub mod diff;
pub mod error;
pub mod request;

pub use diff::*;
pub use error::*;
pub use request::*;
