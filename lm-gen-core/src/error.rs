use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`LanguageModel`](crate::model::language_model::LanguageModel)
/// or reading its corpus.
///
/// Short corpora, short seeds and unseen windows are not errors: they end
/// training or generation early instead.
#[derive(Error, Debug)]
pub enum ModelError {
	/// The window length must be at least 1.
	#[error("window length must be >= 1, got {0}")]
	InvalidWindowLength(usize),

	/// The corpus could not be read.
	#[error("cannot read corpus {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}
