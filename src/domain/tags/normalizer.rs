//! Tag normalization
//!
//! Tags are stored as lowercase hyphenated slugs (`hello-world`) and shown to
//! users in a title-cased form (`Hello World`). Arabic letters are kept as-is
//! in both forms.

use std::collections::HashSet;
use std::ops::RangeInclusive;

/// Arabic Unicode block (U+0600 to U+06FF)
const ARABIC_BLOCK: RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

/// Whether a character belongs to the Arabic Unicode block
pub fn is_arabic(ch: char) -> bool {
    ARABIC_BLOCK.contains(&ch)
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || is_arabic(ch)
}

/// Normalize a free-text tag into its storage slug.
///
/// The input is lowercased and trimmed, every run of characters outside
/// `[a-z0-9]` and the Arabic block collapses to a single `-`, and hyphens at
/// either end are dropped. Input made only of punctuation normalizes to an
/// empty string; rejecting empty tags is left to the caller.
///
/// # Examples
///
/// ```
/// use annotext::normalize;
///
/// assert_eq!(normalize("  Hello, World!!  "), "hello-world");
/// assert_eq!(normalize("!!!---"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_separator_run = false;

    for ch in lowered.chars() {
        if is_slug_char(ch) {
            // A separator run only becomes a hyphen once something follows it
            if in_separator_run && !slug.is_empty() {
                slug.push('-');
            }
            in_separator_run = false;
            slug.push(ch);
        } else {
            in_separator_run = true;
        }
    }

    slug
}

/// Turn a normalized slug into its display form.
///
/// Each hyphen-separated word gets its first character uppercased unless that
/// character is Arabic, and words are joined with single spaces.
///
/// # Examples
///
/// ```
/// use annotext::to_display;
///
/// assert_eq!(to_display("hello-world"), "Hello World");
/// assert_eq!(to_display("فن-رائع"), "فن رائع");
/// ```
pub fn to_display(normalized: &str) -> String {
    normalized
        .split('-')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if !is_arabic(first) => first.to_uppercase().chain(chars).collect(),
        _ => word.to_string(),
    }
}

/// Normalize a batch of tags, dropping empty results and duplicates.
///
/// Keeps the first occurrence of each slug, in input order.
pub fn normalize_all<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    tags.into_iter()
        .map(|tag| normalize(tag.as_ref()))
        .filter(|slug| !slug.is_empty() && seen.insert(slug.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("  Hello, World!!  "), "hello-world");
        assert_eq!(normalize("Rust"), "rust");
        assert_eq!(normalize("web3"), "web3");
    }

    #[test]
    fn test_normalize_collapses_separator_runs() {
        assert_eq!(normalize("machine   learning"), "machine-learning");
        assert_eq!(normalize("a--_--b"), "a-b");
        assert_eq!(normalize("snake_case_tag"), "snake-case-tag");
    }

    #[test]
    fn test_normalize_strips_edge_hyphens() {
        assert_eq!(normalize("--rust--"), "rust");
        assert_eq!(normalize("#rust!"), "rust");
        assert_eq!(normalize("C++"), "c");
    }

    #[test]
    fn test_normalize_empty_and_punctuation() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!!---"), "");
    }

    #[test]
    fn test_normalize_keeps_arabic() {
        assert_eq!(normalize("فن رائع"), "فن-رائع");
        assert_eq!(normalize("Art فن"), "art-فن");
    }

    #[test]
    fn test_normalize_non_ascii_latin_is_separator() {
        // Only ASCII letters survive outside the Arabic block
        assert_eq!(normalize("Café Noir"), "caf-noir");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "  Hello, World!!  ",
            "--a--b--",
            "فن رائع",
            "Mixed فن & Art_2024",
            "",
            "!!!",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_to_display() {
        assert_eq!(to_display("hello-world"), "Hello World");
        assert_eq!(to_display("rust"), "Rust");
        assert_eq!(to_display("web3-dev"), "Web3 Dev");
    }

    #[test]
    fn test_to_display_arabic_unchanged() {
        assert_eq!(to_display("فن-رائع"), "فن رائع");
        assert_eq!(to_display("art-فن"), "Art فن");
    }

    #[test]
    fn test_to_display_empty() {
        assert_eq!(to_display(""), "");
    }

    #[test]
    fn test_is_arabic() {
        assert!(is_arabic('ف'));
        assert!(is_arabic('\u{0600}'));
        assert!(is_arabic('\u{06FF}'));
        assert!(!is_arabic('\u{0700}'));
        assert!(!is_arabic('a'));
    }

    #[test]
    fn test_normalize_all_deduplicates() {
        let tags = vec!["Rust", "rust", " RUST ", "!!!", "Machine Learning"];
        assert_eq!(normalize_all(tags), vec!["rust", "machine-learning"]);
    }
}
