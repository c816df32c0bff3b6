//! Reading raw review text from a file, stdin or an inline argument

use crate::error::{NormalizerError, Result};
use log::info;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{self, AsyncRead, AsyncReadExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Inline(String),
    Stdin,
}

impl InputSource {
    /// Inline text takes precedence over a file path; neither means stdin.
    pub fn resolve(file: Option<PathBuf>, text: Option<String>) -> Self {
        match (text, file) {
            (Some(text), _) => InputSource::Inline(text),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Stdin,
        }
    }

    /// Read the whole input. Bytes come back unvalidated; UTF-8 checking
    /// belongs to the normalizer.
    pub async fn read(&self) -> Result<Vec<u8>> {
        match self {
            InputSource::File(path) => read_file(path).await,
            InputSource::Inline(text) => Ok(text.clone().into_bytes()),
            InputSource::Stdin => {
                info!("Reading review from stdin");
                read_all(io::stdin()).await
            }
        }
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(NormalizerError::InvalidArgument(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    info!("Reading review from: {}", path.display());
    let bytes = fs::read(path).await?;
    Ok(bytes)
}

async fn read_all<R: AsyncRead + Unpin>(mut reader: R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Ok(buf)
}
