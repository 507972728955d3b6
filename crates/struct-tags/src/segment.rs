//! Segmenter extracting `key:"value"` occurrences from an annotation string.

use std::sync::LazyLock;

use regex::Regex;

/// One `key:"value"` occurrence found in an annotation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment<'a> {
    pub raw: &'a str,
    pub key: &'a str,
    pub value: &'a str,
}

// A key is a run of anything but whitespace, colons and quotes, and may be
// padded before its colon. The value stops at the first closing quote, so
// quotes cannot be embedded.
static SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s:"]+)\s*:"([^"]*)""#).unwrap_or_else(|_| unreachable!())
});

/// Find every segment in `input`, left to right.
///
/// Text between segments is ignored; input without any segment yields an
/// empty list.
pub(crate) fn segments(input: &str) -> Vec<Segment<'_>> {
    SEGMENT_RE
        .captures_iter(input)
        .filter_map(|caps| {
            let raw = caps.get(0)?.as_str();
            let key = caps.get(1)?.as_str();
            let value = caps.get(2)?.as_str().trim();
            Some(Segment { raw, key, value })
        })
        .collect()
}
