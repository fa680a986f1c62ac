//! Top-level module for the character-level language model.
//!
//! This module provides:
//! - Per-window follower distributions (`FollowSet`)
//! - The window table, training and generation logic (`LanguageModel`)
//! - Generator seeding strategies (`GenerationMode`)

/// Distribution of the characters that followed a single window.
///
/// Accumulates counts during training, then exposes finalized
/// probabilities and cumulative-probability sampling.
pub mod follow_set;

/// Fixed-window language model (`window_length >= 1`).
///
/// Handles corpus ingestion, probability finalization and
/// weighted random generation from a seed text.
pub mod language_model;

/// Seeding strategy of the model's random generator.
pub mod generation_mode;
