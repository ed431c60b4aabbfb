//! Program loading.

use std::path::Path;

use tracing::info;

use crate::asm::assemble_source;
use crate::common::error::SimError;

/// Reads an assembly source file and assembles it into a memory image of at
/// most `max_words` words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or an assembly error
/// with file and line context if any line is malformed.
pub fn load_program(path: &Path, max_words: usize) -> Result<Vec<u32>, SimError> {
    let source = std::fs::read_to_string(path)?;
    let file = path.display().to_string();
    let image = assemble_source(&source, &file, max_words)?;
    info!(file, words = image.len(), "program assembled");
    Ok(image)
}
