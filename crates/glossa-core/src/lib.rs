//! # glossa-core
//!
//! Core types, traits, and abstractions for the glossa import pipeline.
//!
//! This crate provides the canonical entity graph (articles, annotations,
//! labels, categories, translations) and the store read interface that the
//! glossa-import crate builds on.

pub mod error;
pub mod logging;
pub mod memory;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::TagStore;
