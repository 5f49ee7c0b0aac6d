//! Index workspace documents use case
//!
//! Counts, for every hashtag and mention, how many documents mention it.

use crate::domain::text::{extract, extract_markdown};
use crate::error::Result;
use crate::infrastructure::{FileSystemWorkspace, WorkspaceRepository};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Aggregated annotations across a workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexReport {
    /// Documents that were read successfully
    pub scanned_documents: usize,

    /// Documents that could not be read (e.g. not UTF-8)
    pub skipped_documents: usize,

    /// Hashtag -> number of documents containing it
    pub hashtags: BTreeMap<String, usize>,

    /// Username -> number of documents mentioning it
    pub mentions: BTreeMap<String, usize>,
}

/// Service for indexing the documents of a workspace
pub struct IndexService {
    workspace: FileSystemWorkspace,
}

impl IndexService {
    pub fn new(workspace: FileSystemWorkspace) -> Self {
        IndexService { workspace }
    }

    pub fn execute(&self) -> Result<IndexReport> {
        let config = self.workspace.load_config()?;
        let documents = self.workspace.list_documents(&config);
        let mut report = IndexReport::default();

        for document in &documents {
            let content = match self.workspace.read_document(document) {
                Ok(content) => content,
                Err(e) => {
                    warn!(path = %document.path, error = %e, "skipping unreadable document");
                    report.skipped_documents += 1;
                    continue;
                }
            };

            let result = if document.is_markdown() {
                extract_markdown(&content)
            } else {
                extract(&content)
            };
            debug!(
                path = %document.path,
                hashtags = result.hashtags.len(),
                mentions = result.mentions.len(),
                "indexed document"
            );

            for tag in result.hashtags {
                *report.hashtags.entry(tag).or_insert(0) += 1;
            }
            for username in result.mentions {
                *report.mentions.entry(username).or_insert(0) += 1;
            }
            report.scanned_documents += 1;
        }

        Ok(report)
    }
}
