use std::{io::ErrorKind, path::Path};

use vimark_buffer::model::{BufferLine, TextBuffer};

use crate::error::AppError;

/// Reads a file into buffer lines. A file that does not exist yet opens empty.
#[tracing::instrument]
pub async fn read_lines(path: &Path) -> Result<Vec<BufferLine>, AppError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(TextBuffer::from_content(&content).lines),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            tracing::debug!("file {:?} does not exist, opening empty buffer", path);
            Ok(Vec::new())
        }
        Err(error) => Err(AppError::from(error)),
    }
}
