//! Tag input use case
//!
//! The normalizer itself never fails; rejecting tags that normalize to
//! nothing is a policy of this caller.

use crate::domain::tags::{normalize, to_display};
use crate::error::{AnnotextError, Result};
use tracing::warn;

/// Normalize each raw tag. With `strict`, a tag that normalizes to an empty
/// slug is an error; otherwise it is dropped with a warning.
pub fn normalize_tags(raw_tags: &[String], strict: bool) -> Result<Vec<String>> {
    let mut slugs = Vec::with_capacity(raw_tags.len());

    for raw in raw_tags {
        let slug = normalize(raw);
        if slug.is_empty() {
            if strict {
                return Err(AnnotextError::EmptyTag(raw.clone()));
            }
            warn!(tag = %raw, "dropping tag that normalizes to nothing");
            continue;
        }
        slugs.push(slug);
    }

    Ok(slugs)
}

/// Display form of each raw tag's slug
pub fn display_tags(raw_tags: &[String]) -> Vec<String> {
    raw_tags
        .iter()
        .map(|raw| normalize(raw))
        .filter(|slug| !slug.is_empty())
        .map(|slug| to_display(&slug))
        .collect()
}
