//! Hashtag, mention and link annotation
//!
//! Two views over the same three token patterns:
//! - [`extract`] collects the distinct hashtags, mentions and links in a text
//! - [`segment`] splits a text into an ordered sequence of [`Segment`]s that
//!   covers every byte of the input
//!
//! # Examples
//!
//! ```
//! use annotext::{segment, Segment};
//!
//! let segments = segment("hi #art");
//! assert_eq!(
//!     segments,
//!     vec![Segment::Text("hi ".to_string()), Segment::Hashtag("art".to_string())]
//! );
//! ```

use regex::{Matches, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// URL: scheme, optional `www.`, a dotted host and a permissive tail.
/// Host repetition must stay bounded.
const URL_PATTERN: &str =
    r"https?://(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*";

fn hashtag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"#(\w+)").unwrap())
}

fn mention_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"@(\w+)").unwrap())
}

fn url_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(URL_PATTERN).unwrap())
}

/// All three patterns as one alternation, leftmost match first.
fn annotation_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(&format!(r"{}|#\w+|@\w+", URL_PATTERN)).unwrap())
}

/// A typed span of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Segment {
    /// Untouched text, rendered verbatim
    Text(String),
    /// Hashtag without the leading `#`
    Hashtag(String),
    /// Username without the leading `@`
    Mention(String),
    /// Full URL as matched
    Link(String),
}

impl Segment {
    /// Classify one annotation match by its leading character
    fn from_match(matched: &str) -> Self {
        if let Some(tag) = matched.strip_prefix('#') {
            Segment::Hashtag(tag.to_string())
        } else if let Some(username) = matched.strip_prefix('@') {
            Segment::Mention(username.to_string())
        } else {
            Segment::Link(matched.to_string())
        }
    }

    /// The segment's value (sigil stripped for hashtags and mentions)
    pub fn value(&self) -> &str {
        match self {
            Segment::Text(value)
            | Segment::Hashtag(value)
            | Segment::Mention(value)
            | Segment::Link(value) => value,
        }
    }

    /// The exact slice of input this segment was produced from
    pub fn source_text(&self) -> Cow<'_, str> {
        match self {
            Segment::Text(text) | Segment::Link(text) => Cow::Borrowed(text),
            Segment::Hashtag(tag) => Cow::Owned(format!("#{}", tag)),
            Segment::Mention(username) => Cow::Owned(format!("@{}", username)),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Segment::Text(_))
    }

    /// Lowercase name of the segment kind
    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Text(_) => "text",
            Segment::Hashtag(_) => "hashtag",
            Segment::Mention(_) => "mention",
            Segment::Link(_) => "link",
        }
    }
}

/// Distinct annotations found in a text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// The text that was scanned
    pub text: String,

    /// Distinct hashtags, without `#`
    pub hashtags: BTreeSet<String>,

    /// Distinct usernames, without `@`
    pub mentions: BTreeSet<String>,

    /// Distinct URLs
    pub links: BTreeSet<String>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.hashtags.is_empty() && self.mentions.is_empty() && self.links.is_empty()
    }
}

/// Collect the distinct hashtags, mentions and links in `text`.
///
/// Each pattern scans the whole text on its own, so a `#fragment` inside a
/// URL is still reported as a hashtag here even though [`segment`] keeps it
/// inside the link.
pub fn extract(text: &str) -> ExtractionResult {
    let hashtags = hashtag_regex()
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect();
    let mentions = mention_regex()
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect();
    let links = url_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    ExtractionResult {
        text: text.to_string(),
        hashtags,
        mentions,
        links,
    }
}

/// Split `text` into segments in original order.
///
/// Concatenating [`Segment::source_text`] over the result gives back `text`.
/// Empty text segments are never produced, so `segment("")` is empty.
pub fn segment(text: &str) -> Vec<Segment> {
    segments(text).collect()
}

/// Lazy form of [`segment`]
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        text,
        matches: annotation_regex().find_iter(text),
        cursor: 0,
        pending: None,
    }
}

/// Iterator over the segments of a text
#[derive(Debug)]
pub struct Segments<'t> {
    text: &'t str,
    matches: Matches<'static, 't>,
    /// Byte offset of the first character not yet emitted
    cursor: usize,
    /// Annotation found while emitting the plain text before it
    pending: Option<regex::Match<'t>>,
}

impl<'t> Segments<'t> {
    fn annotation(&mut self, found: regex::Match<'t>) -> Segment {
        self.cursor = found.end();
        Segment::from_match(found.as_str())
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if let Some(found) = self.pending.take() {
            return Some(self.annotation(found));
        }

        match self.matches.next() {
            Some(found) if found.start() > self.cursor => {
                let plain = &self.text[self.cursor..found.start()];
                self.cursor = found.start();
                self.pending = Some(found);
                Some(Segment::Text(plain.to_string()))
            }
            Some(found) => Some(self.annotation(found)),
            None if self.cursor < self.text.len() => {
                let rest = &self.text[self.cursor..];
                self.cursor = self.text.len();
                Some(Segment::Text(rest.to_string()))
            }
            None => None,
        }
    }
}
