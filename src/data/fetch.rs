//! Memoized dataset fetch

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EvaluarError, Result};

/// Ensure the dataset file exists locally, fetching it if absent.
///
/// Returns immediately when `path` already exists; otherwise performs one
/// blocking HTTP GET of `url`, creates parent directories, and writes the
/// response body verbatim. No retries, no checksum verification.
pub fn ensure_dataset(path: impl AsRef<Path>, url: &str) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(path.to_path_buf());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| EvaluarError::io(format!("creating {}", parent.display()), e))?;
        }
    }

    let client = reqwest::blocking::Client::builder()
        .user_agent("evaluar/0.1")
        .build()
        .map_err(|e| EvaluarError::Http { message: format!("failed to create HTTP client: {e}") })?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| EvaluarError::Http { message: format!("request to {url} failed: {e}") })?;

    let status = response.status();
    if !status.is_success() {
        return Err(EvaluarError::Http { message: format!("{url} returned {status}") });
    }

    let body = response
        .bytes()
        .map_err(|e| EvaluarError::Http { message: format!("reading body from {url}: {e}") })?;

    fs::write(path, &body)
        .map_err(|e| EvaluarError::io(format!("writing {}", path.display()), e))?;

    Ok(path.to_path_buf())
}
