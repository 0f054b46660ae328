//! Line diff engine with collapsible sections and a bounded-concurrency
//! diff loader for interactive review tools.
//!
//! The crate is split in the usual layers: `domain` holds the data model,
//! `engine` the pure diff transforms, `infra` the IO-facing pieces (content
//! sources, the concurrent loader, configuration).

pub mod domain;
pub mod engine;
pub mod infra;
