//! Markdown-aware extraction
//!
//! Code blocks and inline code spans are not prose: `#include` in a C
//! snippet is not a hashtag. These helpers find the code regions so that
//! extraction only sees the rest.

use super::annotator::{extract, ExtractionResult};
use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};
use std::ops::Range;

/// Extract annotations from markdown, ignoring code blocks and code spans.
///
/// The returned `text` is the full markdown source.
pub fn extract_markdown(markdown: &str) -> ExtractionResult {
    // Newline between chunks so tokens never join across removed code
    let prose = prose_chunks(markdown).join("\n");

    ExtractionResult {
        text: markdown.to_string(),
        ..extract(&prose)
    }
}

/// Slices of `markdown` that lie outside any code region, in order
pub fn prose_chunks(markdown: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut cursor = 0usize;

    for range in code_ranges(markdown) {
        if range.start > cursor {
            chunks.push(&markdown[cursor..range.start]);
        }
        cursor = range.end;
    }

    if cursor < markdown.len() {
        chunks.push(&markdown[cursor..]);
    }

    chunks
}

/// Byte ranges of fenced/indented code blocks and inline code, merged
fn code_ranges(markdown: &str) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut code_block_start: Option<usize> = None;

    for (event, range) in MdParser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(_)) => {
                code_block_start = Some(range.start);
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(start) = code_block_start.take() {
                    ranges.push(start..range.end);
                }
            }
            Event::Code(_) => {
                ranges.push(range.start..range.end);
            }
            _ => {}
        }
    }

    if let Some(start) = code_block_start.take() {
        ranges.push(start..markdown.len());
    }

    merge_ranges(ranges)
}

fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }

    merged
}
