//! Option records and the grammar that splits an options string into them.

use log::trace;

use crate::delimiter::{leading_word_len, split_before_word};

/// A single option attached to a tag, such as `omitempty` or
/// `embeddedPrefix:author_`.
///
/// A bare flag has no value, which is distinct from an option whose value is
/// the empty string (`default:`).
///
/// # Examples
/// ```
/// use struct_tags::TagOption;
///
/// let flag = TagOption::flag("omitempty");
/// assert!(flag.is_flag());
///
/// let pair = TagOption::with_value("default", "");
/// assert_eq!(pair.value(), Some(""));
/// assert!(!pair.is_flag());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TagOption {
    key: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    value: Option<String>,
}

impl TagOption {
    /// Create a presence-only option.
    #[must_use]
    pub fn flag(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// Create an option carrying a value.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// The option key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The option value, or `None` for a bare flag.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Return `true` when the option carries no value.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        self.value.is_none()
    }
}

/// Split an options string into ordered option records.
///
/// Semicolons take precedence over commas, and commas over colons. Each
/// semicolon-separated segment is first checked for the chained-pair shape
/// (`constraint:OnUpdate:CASCADE,OnDelete:SET NULL;`), which is kept as a
/// single option whose value is the unsplit remainder.
pub(crate) fn decompose_options(options: &str) -> Vec<TagOption> {
    let options = options.trim();
    let mut parsed = Vec::new();
    if options.is_empty() {
        return parsed;
    }

    for segment in split_before_word(options, ';') {
        if segment.is_empty() {
            continue;
        }

        if let Some(option) = chained_pair(segment) {
            trace!("chained option {:?} from segment {segment:?}", option.key);
            parsed.push(option);
            continue;
        }

        parsed.extend(
            split_before_word(segment, ',')
                .into_iter()
                .filter(|token| !token.is_empty())
                .map(classify_token),
        );
    }

    parsed
}

/// Match `KEY:WORD:ANY,WORD:ANY`, returning one option that keeps everything
/// after the first colon as its value.
fn chained_pair(segment: &str) -> Option<TagOption> {
    let (key, rest) = segment.split_once(':')?;
    is_chained_remainder(rest).then(|| TagOption::with_value(key, rest))
}

/// Check `rest` against `WORD*:ANY,WORD*:ANY`.
fn is_chained_remainder(rest: &str) -> bool {
    let Some(after_colon) = skip_word_then_colon(rest) else {
        return false;
    };
    after_colon.match_indices(',').any(|(at, _)| {
        after_colon
            .get(at + 1..)
            .and_then(skip_word_then_colon)
            .is_some()
    })
}

/// Strip a leading (possibly empty) word run and the colon that must follow it.
fn skip_word_then_colon(text: &str) -> Option<&str> {
    let (_, tail) = text.split_at(leading_word_len(text));
    tail.strip_prefix(':')
}

/// Classify one comma-separated token as a key/value pair or a bare flag.
fn classify_token(token: &str) -> TagOption {
    token.split_once(':').map_or_else(
        || TagOption::flag(token),
        |(key, value)| TagOption::with_value(key, value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn flag(key: &str) -> TagOption {
        TagOption::flag(key)
    }

    fn pair(key: &str, value: &str) -> TagOption {
        TagOption::with_value(key, value)
    }

    #[rstest]
    #[case("", vec![])]
    #[case("   ", vec![])]
    #[case("omitempty", vec![flag("omitempty")])]
    #[case("omitempty,default", vec![flag("omitempty"), flag("default")])]
    #[case("embeddedPrefix:author_", vec![pair("embeddedPrefix", "author_")])]
    #[case("key1:value1,key2:value2", vec![pair("key1", "value1"), pair("key2", "value2")])]
    #[case("split:;", vec![pair("split", ";")])]
    #[case("column:age;type:int", vec![pair("column", "age"), pair("type", "int")])]
    #[case("primaryKey;autoIncrement", vec![flag("primaryKey"), flag("autoIncrement")])]
    #[case("default:", vec![pair("default", "")])]
    #[case("9lives,_hidden", vec![flag("9lives"), flag("_hidden")])]
    #[case("url:http://example.com", vec![pair("url", "http://example.com")])]
    fn decomposes_options(#[case] input: &str, #[case] expected: Vec<TagOption>) {
        assert_eq!(decompose_options(input), expected);
    }

    #[test]
    fn merges_chained_pairs_into_one_option() {
        assert_eq!(
            decompose_options("constraint:OnUpdate:CASCADE,OnDelete:SET NULL;"),
            vec![pair("constraint", "OnUpdate:CASCADE,OnDelete:SET NULL;")]
        );
    }

    #[test]
    fn chained_pair_is_checked_per_semicolon_segment() {
        assert_eq!(
            decompose_options("foreignKey:AuthorID;constraint:OnUpdate:CASCADE,OnDelete:SET NULL;"),
            vec![
                pair("foreignKey", "AuthorID"),
                pair("constraint", "OnUpdate:CASCADE,OnDelete:SET NULL;"),
            ]
        );
    }

    #[test]
    fn keeps_duplicate_keys_in_order() {
        assert_eq!(
            decompose_options("tag:a;tag:b;tag"),
            vec![pair("tag", "a"), pair("tag", "b"), flag("tag")]
        );
    }

    #[test]
    fn keeps_interior_whitespace() {
        assert_eq!(
            decompose_options(" OnDelete:SET NULL; "),
            vec![pair("OnDelete", "SET NULL;")]
        );
    }

    #[test]
    fn distinguishes_empty_value_from_flag() {
        let options = decompose_options("default:,required");
        assert_eq!(options, vec![pair("default", ""), flag("required")]);
        assert_eq!(options.first().and_then(TagOption::value), Some(""));
        assert_eq!(options.get(1).and_then(TagOption::value), None);
    }

    #[rstest]
    #[case("OnUpdate:CASCADE,OnDelete:SET NULL;", true)]
    #[case(":x,:y", true)]
    #[case("CASCADE,OnDelete:SET NULL;", false)]
    #[case("value1,key2:value2", false)]
    #[case("a:b", false)]
    #[case("a:b,c", false)]
    #[case("", false)]
    fn recognises_chained_remainders(#[case] rest: &str, #[case] expected: bool) {
        assert_eq!(is_chained_remainder(rest), expected);
    }
}
