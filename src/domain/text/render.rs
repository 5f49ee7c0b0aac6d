//! Rendering segments as interactive links
//!
//! Hashtags point at the explore-by-tag route, mentions at the profile
//! route, links open in a new browsing context and plain text is kept as-is.

use super::annotator::Segment;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Placeholder replaced by the hashtag in [`LinkRoutes::tag_route`]
pub const TAG_PLACEHOLDER: &str = "{tag}";

/// Placeholder replaced by the username in [`LinkRoutes::profile_route`]
pub const USERNAME_PLACEHOLDER: &str = "{username}";

pub const DEFAULT_TAG_ROUTE: &str = "/explore?tag={tag}";
pub const DEFAULT_PROFILE_ROUTE: &str = "/profile/{username}";

/// Output formats for rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// HTML fragment with `<a>` elements
    #[default]
    Html,
    /// Markdown with inline links and autolinks
    Markdown,
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(RenderFormat::Html),
            "markdown" | "md" => Ok(RenderFormat::Markdown),
            _ => Err(format!(
                "Invalid format: '{}'. Valid formats are: html, markdown",
                s
            )),
        }
    }
}

/// Route templates for hashtag and mention links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRoutes {
    pub tag_route: String,
    pub profile_route: String,
}

impl Default for LinkRoutes {
    fn default() -> Self {
        LinkRoutes {
            tag_route: DEFAULT_TAG_ROUTE.to_string(),
            profile_route: DEFAULT_PROFILE_ROUTE.to_string(),
        }
    }
}

impl LinkRoutes {
    pub fn new(tag_route: impl Into<String>, profile_route: impl Into<String>) -> Self {
        LinkRoutes {
            tag_route: tag_route.into(),
            profile_route: profile_route.into(),
        }
    }

    /// Link target for a segment, or `None` for plain text
    pub fn href_for(&self, segment: &Segment) -> Option<String> {
        match segment {
            Segment::Text(_) => None,
            Segment::Hashtag(tag) => Some(
                self.tag_route
                    .replace(TAG_PLACEHOLDER, &urlencoding::encode(tag)),
            ),
            Segment::Mention(username) => Some(
                self.profile_route
                    .replace(USERNAME_PLACEHOLDER, &urlencoding::encode(username)),
            ),
            Segment::Link(url) => Some(url.clone()),
        }
    }
}

/// Render segments in the requested format
pub fn render(segments: &[Segment], routes: &LinkRoutes, format: RenderFormat) -> String {
    match format {
        RenderFormat::Html => render_html(segments, routes),
        RenderFormat::Markdown => render_markdown(segments, routes),
    }
}

/// Render segments as an HTML fragment.
///
/// Text is escaped; external links carry `target="_blank"`.
pub fn render_html(segments: &[Segment], routes: &LinkRoutes) -> String {
    let mut output = String::new();

    for segment in segments {
        let Some(href) = routes.href_for(segment) else {
            output.push_str(&escape_html(segment.value()));
            continue;
        };

        let label = escape_html(&segment.source_text());
        let href = escape_html(&href);
        match segment {
            Segment::Link(_) => output.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                href, label
            )),
            _ => output.push_str(&format!(
                "<a href=\"{}\" class=\"{}\">{}</a>",
                href,
                segment.kind(),
                label
            )),
        }
    }

    output
}

/// Render segments as markdown.
///
/// Plain text passes through untouched.
pub fn render_markdown(segments: &[Segment], routes: &LinkRoutes) -> String {
    let mut output = String::new();

    for segment in segments {
        match (segment, routes.href_for(segment)) {
            (Segment::Link(url), _) => output.push_str(&format!("<{}>", url)),
            (_, Some(href)) => {
                output.push_str(&format!("[{}]({})", segment.source_text(), href))
            }
            (_, None) => output.push_str(segment.value()),
        }
    }

    output
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
