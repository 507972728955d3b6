//! Entry point tying the segment, value and option grammars together.

use std::convert::Infallible;

use log::trace;

use crate::option::decompose_options;
use crate::segment::segments;
use crate::tag::Tag;
use crate::value::decompose_value;

/// Parse every `key:"value"` segment in `input` into a [`Tag`].
///
/// The grammar accepts any input: text outside segments is skipped and an
/// input without segments yields an empty list. The error type is
/// [`Infallible`], so the result can be destructured directly.
///
/// # Examples
/// ```
/// let Ok(tags) = struct_tags::parse(
///     r#"gorm:"constraint:OnUpdate:CASCADE,OnDelete:SET NULL;""#,
/// );
/// let tag = &tags[0];
/// assert_eq!(tag.name(), "");
/// assert_eq!(
///     tag.get_option("constraint").and_then(|o| o.value()),
///     Some("OnUpdate:CASCADE,OnDelete:SET NULL;"),
/// );
///
/// let Ok(none) = struct_tags::parse("");
/// assert!(none.is_empty());
/// ```
pub fn parse(input: &str) -> Result<Vec<Tag>, Infallible> {
    let tags = segments(input)
        .into_iter()
        .map(|segment| assemble(segment.raw, segment.key, segment.value))
        .collect();
    Ok(tags)
}

/// Decompose one segment's trimmed `value` and build the tag for `key`.
pub(crate) fn assemble(raw: &str, key: &str, value: &str) -> Tag {
    let parts = decompose_value(value);
    let options = parts.options.map(decompose_options).unwrap_or_default();
    trace!(
        "parsed tag {key:?}: name {:?}, {} option(s)",
        parts.name,
        options.len()
    );
    Tag::new(raw, key, value, parts.name, options)
}
