//! Infrastructure layer (adapters/implementations).
//!
//! IO-facing pieces: content sources, the bounded-concurrency diff loader,
//! file-type helpers and configuration loading.

pub mod config;
pub mod content;
pub mod language;
pub mod loader;
