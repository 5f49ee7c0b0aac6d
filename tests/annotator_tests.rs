//! Library-level checks for normalization and segmentation

use annotext::domain::text::segments;
use annotext::{extract, normalize, segment, to_display, Segment};

/// Inputs mixing sigils, URLs, scripts and punctuation
fn corpus() -> Vec<String> {
    let pieces = [
        "",
        " ",
        "#",
        "@",
        "#art",
        "@bob",
        "#a#b",
        "@@x",
        "https://",
        "https://example.com/x?y=1&z=#2",
        "http://www.site.org",
        "user@example.com",
        "فن",
        "#فن_رائع",
        "Hello, World!!",
        "--",
        "\n\t",
        "é",
        "🙂",
        "C++",
    ];

    let mut inputs: Vec<String> = pieces.iter().map(|p| p.to_string()).collect();
    for first in pieces {
        for second in pieces {
            inputs.push(format!("{}{}", first, second));
            inputs.push(format!("{} {}", first, second));
        }
    }
    inputs
}

#[test]
fn segments_rebuild_every_input() {
    for input in corpus() {
        let rebuilt: String = segment(&input).iter().map(|s| s.source_text()).collect();
        assert_eq!(rebuilt, input);
    }
}

#[test]
fn segments_never_contain_empty_text() {
    for input in corpus() {
        for seg in segment(&input) {
            assert!(!seg.value().is_empty(), "empty segment for {:?}", input);
        }
    }
}

#[test]
fn segments_never_put_two_text_segments_in_a_row() {
    for input in corpus() {
        let segs = segment(&input);
        for pair in segs.windows(2) {
            assert!(
                !(pair[0].is_text() && pair[1].is_text()),
                "adjacent text segments for {:?}",
                input
            );
        }
    }
}

#[test]
fn lazy_and_eager_segmentation_agree() {
    for input in corpus() {
        assert_eq!(segments(&input).collect::<Vec<_>>(), segment(&input));
    }
}

#[test]
fn segment_is_deterministic() {
    for input in corpus() {
        assert_eq!(segment(&input), segment(&input));
    }
}

#[test]
fn empty_input_has_no_segments() {
    assert!(segment("").is_empty());
}

#[test]
fn documented_example_segments() {
    assert_eq!(
        segment("hello #art @bob see https://example.com/x"),
        vec![
            Segment::Text("hello ".to_string()),
            Segment::Hashtag("art".to_string()),
            Segment::Text(" ".to_string()),
            Segment::Mention("bob".to_string()),
            Segment::Text(" see ".to_string()),
            Segment::Link("https://example.com/x".to_string()),
        ]
    );
}

#[test]
fn extract_hashtags_are_distinct() {
    let result = extract("#a #a #b");
    assert_eq!(
        result.hashtags.into_iter().collect::<Vec<_>>(),
        vec!["a", "b"]
    );
}

#[test]
fn extracted_hashtags_cover_segment_hashtags() {
    for input in corpus() {
        let extracted = extract(&input);
        for seg in segment(&input) {
            if let Segment::Hashtag(tag) = seg {
                assert!(extracted.hashtags.contains(&tag), "{:?} in {:?}", tag, input);
            }
        }
    }
}

#[test]
fn normalize_examples() {
    assert_eq!(normalize("  Hello, World!!  "), "hello-world");
    assert_eq!(normalize("!!!---"), "");
}

#[test]
fn normalize_is_idempotent() {
    for input in corpus() {
        let once = normalize(&input);
        assert_eq!(normalize(&once), once, "input: {:?}", input);
    }
}

#[test]
fn normalized_tags_have_no_edge_or_double_hyphens() {
    for input in corpus() {
        let slug = normalize(&input);
        assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{:?}", slug);
        assert!(!slug.contains("--"), "{:?}", slug);
        assert_eq!(slug, slug.to_lowercase());
    }
}

#[test]
fn display_examples() {
    assert_eq!(to_display("hello-world"), "Hello World");
    assert_eq!(to_display("فن-رائع"), "فن رائع");
}
