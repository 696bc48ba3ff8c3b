//! Store orchestration: load, find, insert, delete
//!
//! The store owns one log file. Reads (`load`, `find`) always go back to
//! disk; the in-memory record set is a transient per-call buffer with no
//! cross-call caching contract. Writes (`insert`, `delete`) serialize
//! through an async mutex, held across the file I/O and released
//! unconditionally on guard drop, success or failure.
//!
//! The mutex is process-local. It gives no guarantee against concurrent
//! writers in other processes. Readers are not excluded from writers: a
//! `find` racing a `delete` may observe either the pre- or post-tombstone
//! file state.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::config::StoreConfig;
use super::errors::{StoreError, StoreResult};
use crate::executor::{FindOptions, ResultPipeline};
use crate::log::{self, ParsedLine};
use crate::query::{Predicate, Query};
use crate::Document;

/// An embedded, file-backed document store.
pub struct Store {
    /// Path to the log file
    path: PathBuf,
    /// Store configuration
    config: StoreConfig,
    /// Exclusive section for log mutation
    write_lock: Mutex<()>,
}

impl Store {
    /// Creates a store over the log file at `path`.
    ///
    /// No I/O happens here; a missing file reads as an empty store and is
    /// created by the first `insert`.
    pub fn new(path: impl Into<PathBuf>, config: StoreConfig) -> Self {
        Self {
            path: path.into(),
            config,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the log file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full log, discarding tombstoned entries.
    ///
    /// The returned record set is the per-call cache; nothing is retained
    /// across calls, so every `load` reflects the current disk state.
    pub async fn load(&self) -> StoreResult<Vec<Document>> {
        let content = self.read_log().await?;
        let documents = log::decode(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            records = documents.len(),
            "loaded log"
        );
        Ok(documents)
    }

    /// Runs a query against the current log content.
    ///
    /// Always reloads from disk, then filters with the compiled predicate
    /// and shapes the result (filter, then sort, then project). Never
    /// mutates the log.
    pub async fn find(&self, query: &Query, options: &FindOptions) -> StoreResult<Vec<Document>> {
        let documents = self.load().await?;
        let predicate = Predicate::new(query, &self.config.text_fields);
        Ok(ResultPipeline::run(documents, &predicate, options))
    }

    /// `find` over raw JSON query and options documents.
    pub async fn find_json(
        &self,
        query: &Value,
        options: Option<&Value>,
    ) -> StoreResult<Vec<Document>> {
        let query = Query::parse(query)?;
        let options = match options {
            Some(value) => FindOptions::parse(value)?,
            None => FindOptions::new(),
        };
        self.find(&query, &options).await
    }

    /// Number of live records matching the query.
    pub async fn count(&self, query: &Query) -> StoreResult<usize> {
        Ok(self.find(query, &FindOptions::new()).await?.len())
    }

    /// Appends one live record to the log.
    ///
    /// The line is terminated before it is written, as a single write, so
    /// the append either fully succeeds or leaves the prior file state; a
    /// partial append can never leave an unterminated line for the next
    /// append to merge into.
    pub async fn insert(&self, document: Document) -> StoreResult<()> {
        let mut line = log::encode_live(&document)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        file.sync_all()
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), "appended record");
        Ok(())
    }

    /// Tombstones every live record matching the query.
    ///
    /// Matching lines get their status tag rewritten in place; payload bytes
    /// and non-live lines are preserved verbatim, so applying the same
    /// delete twice yields the same file content. The rewrite goes through
    /// a temp file and an atomic rename, never a partial in-place overwrite.
    pub async fn delete(&self, query: &Query) -> StoreResult<()> {
        let predicate = Predicate::new(query, &self.config.text_fields);

        let _guard = self.write_lock.lock().await;

        let content = self.read_log().await?;
        if content.is_empty() {
            return Ok(());
        }

        let mut kept_lines: Vec<String> = Vec::new();
        let mut tombstoned = 0usize;

        for (idx, raw) in log::split_lines(&content).enumerate() {
            match ParsedLine::classify(raw) {
                ParsedLine::Live { payload } => {
                    let document = log::decode_live(payload, idx + 1)?;
                    if predicate.matches(&document) {
                        kept_lines.push(log::tombstone_line(raw));
                        tombstoned += 1;
                    } else {
                        kept_lines.push(raw.to_string());
                    }
                }
                // Inert lines survive byte-for-byte
                ParsedLine::Tombstoned { .. } | ParsedLine::Unrecognized { .. } => {
                    kept_lines.push(raw.to_string());
                }
                ParsedLine::Blank => {}
            }
        }

        if tombstoned == 0 {
            return Ok(());
        }

        let mut rewritten = kept_lines.join("\n");
        rewritten.push('\n');
        self.rewrite_log(&rewritten).await?;

        tracing::info!(
            path = %self.path.display(),
            tombstoned,
            "tombstoned matching records"
        );
        Ok(())
    }

    /// Reads the whole log file; a missing file is an empty store.
    async fn read_log(&self) -> StoreResult<String> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }

    /// Replaces the log content via write-then-rename.
    ///
    /// A crash mid-write leaves the old file intact; the rename is the
    /// commit point.
    async fn rewrite_log(&self, content: &str) -> StoreResult<()> {
        let tmp_path = self.path.with_extension("rewrite.tmp");

        let mut tmp = fs::File::create(&tmp_path)
            .await
            .map_err(|e| StoreError::io(&tmp_path, e))?;
        tmp.write_all(content.as_bytes())
            .await
            .map_err(|e| StoreError::io(&tmp_path, e))?;
        tmp.sync_all()
            .await
            .map_err(|e| StoreError::io(&tmp_path, e))?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))
    }
}
