//! Concurrent file ingestion.
//!
//! Every path gets its own task; outcomes come back over a channel and the
//! caller collects exactly one outcome per path. The first read failure ends
//! collection early. Tasks still running at that point are left to finish on
//! their own and whatever they send is dropped.

use anyhow::{Context, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::sync::mpsc;

use crate::logging::{log_debug, log_info, log_warn};

/// One gist file body, shaped the way the gist API nests it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    pub content: String,
}

/// Path as given on the command line → file body. Paths are not normalized.
pub type FileMap = BTreeMap<String, FileContent>;

#[derive(Debug)]
enum ReadOutcome {
    Content { path: String, content: String },
    Blank { path: String },
    Failed(Error),
}

pub fn is_blank(content: &str) -> bool {
    content.trim().is_empty()
}

async fn read_one(path: String) -> ReadOutcome {
    log_debug(&format!("Reading file: {path}"));

    let bytes = match tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read file: {path}"))
    {
        Ok(bytes) => bytes,
        Err(e) => return ReadOutcome::Failed(e),
    };

    let content = String::from_utf8_lossy(&bytes).into_owned();
    if is_blank(&content) {
        ReadOutcome::Blank { path }
    } else {
        ReadOutcome::Content { path, content }
    }
}

pub async fn load_files(paths: &[String]) -> Result<FileMap> {
    let mut files = FileMap::new();
    if paths.is_empty() {
        return Ok(files);
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    for path in paths {
        let tx = tx.clone();
        let path = path.clone();
        tokio::spawn(async move {
            // Receiver is gone once the loader bailed out; nothing to do then.
            let _ = tx.send(read_one(path).await);
        });
    }
    drop(tx);

    for _ in 0..paths.len() {
        let outcome = rx
            .recv()
            .await
            .context("File reader task ended without reporting")?;

        match outcome {
            ReadOutcome::Content { path, content } => {
                log_info(&format!(
                    "Read {} bytes from file: {}",
                    content.len(),
                    path
                ));
                files.insert(path, FileContent { content });
            }
            ReadOutcome::Blank { path } => {
                log_warn(&format!("Skipping blank file: {path}"));
            }
            ReadOutcome::Failed(e) => return Err(e),
        }
    }

    Ok(files)
}
