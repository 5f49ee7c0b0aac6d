//! Output formatting utilities

use crate::application::IndexReport;
use crate::domain::{ExtractionResult, Segment};
use std::collections::{BTreeMap, BTreeSet};

/// Format extraction results, one annotation per line with its sigil
pub fn format_extraction(result: &ExtractionResult) -> String {
    if result.is_empty() {
        return "No annotations found".to_string();
    }

    let mut output = String::new();
    push_section(&mut output, "Hashtags", "#", &result.hashtags);
    push_section(&mut output, "Mentions", "@", &result.mentions);
    push_section(&mut output, "Links", "", &result.links);
    output
}

fn push_section(output: &mut String, title: &str, sigil: &str, values: &BTreeSet<String>) {
    if values.is_empty() {
        return;
    }
    output.push_str(&format!("{}:\n", title));
    for value in values {
        output.push_str(&format!("  {}{}\n", sigil, value));
    }
}

/// Format segments as `kind<TAB>source` lines.
/// Newlines and tabs inside text are escaped to keep one segment per line.
pub fn format_segments(segments: &[Segment]) -> String {
    let mut output = String::new();
    for segment in segments {
        let source = segment
            .source_text()
            .replace('\\', "\\\\")
            .replace('\n', "\\n")
            .replace('\t', "\\t");
        output.push_str(&format!("{}\t{}\n", segment.kind(), source));
    }
    output
}

/// Format an index report
pub fn format_index_report(report: &IndexReport) -> String {
    let mut output = format!("Scanned {} document(s)", report.scanned_documents);
    if report.skipped_documents > 0 {
        output.push_str(&format!(", skipped {}", report.skipped_documents));
    }
    output.push('\n');

    if report.hashtags.is_empty() && report.mentions.is_empty() {
        output.push_str("No hashtags or mentions found\n");
        return output;
    }

    push_counts(&mut output, "Hashtags", "#", &report.hashtags);
    push_counts(&mut output, "Mentions", "@", &report.mentions);
    output
}

fn push_counts(output: &mut String, title: &str, sigil: &str, counts: &BTreeMap<String, usize>) {
    if counts.is_empty() {
        return;
    }
    output.push_str(&format!("{}:\n", title));
    for (value, count) in counts {
        output.push_str(&format!("  {}{}  {}\n", sigil, value, count));
    }
}

/// Format a list of tags, one per line
pub fn format_tag_list(tags: &[String]) -> String {
    let mut output = String::new();
    for tag in tags {
        output.push_str(tag);
        output.push('\n');
    }
    output
}
