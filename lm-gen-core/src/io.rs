use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ModelError;

/// Reads a corpus file and returns its whole content.
///
/// - Reads the entire file into memory
/// - Keeps line breaks: every character, `\n` included, is part of the corpus
/// - Fails if the file is missing or is not valid UTF-8
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<String, ModelError> {
	let path = filename.as_ref();
	let io_error = |source| ModelError::Io { path: path.to_path_buf(), source };

	let mut contents = String::new();
	File::open(path)
		.map_err(io_error)?
		.read_to_string(&mut contents)
		.map_err(io_error)?;

	log::debug!("read {} bytes of corpus from {}", contents.len(), path.display());
	Ok(contents)
}
