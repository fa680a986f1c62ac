//! Character-level language model for pseudo-random text generation.
//!
//! This crate provides:
//! - Training of fixed-window character models from a corpus
//! - Weighted random generation from a seed text
//! - Reproducible generation with a seeded generator
//! - Corpus loading helpers
//!
//! The trained model lives in memory only; every run retrains from its corpus.

/// Language model, follow sets and seeding strategies.
pub mod model;

/// Corpus loading.
pub mod io;

/// Error type shared by the crate.
pub mod error;

pub use error::ModelError;
pub use model::follow_set::{CharData, FollowSet};
pub use model::generation_mode::{DEBUG_SEED, GenerationMode};
pub use model::language_model::LanguageModel;
