//! Bridging from field-metadata providers to parsed tags.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use log::debug;

use crate::parser::assemble;
use crate::tag::Tag;

/// Field metadata that can report the raw annotation value for a key.
///
/// Implementations answer "does this field carry an annotation for `key`,
/// and if so what is its raw value". [`StructTag`](crate::StructTag) reads
/// the conventional `key:"value"` layout; maps and pair slices act as
/// pre-extracted metadata.
pub trait TagSource {
    /// Return the raw value annotated under `key`, if any.
    fn tag_value(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl<S: BuildHasher> TagSource for HashMap<String, String, S> {
    fn tag_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl TagSource for BTreeMap<String, String> {
    fn tag_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl TagSource for [(&str, &str)] {
    fn tag_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| Cow::Borrowed(*value))
    }
}

/// Fetch the annotation for `key` from `source` and parse it into a [`Tag`].
///
/// The raw value is read as if it were wrapped as `key:"value"`, so a value
/// that itself contains a double quote is cut short at that quote. The tag
/// keeps `key` as given (trimmed), even when it holds characters a segment
/// key could not, such as interior spaces. Returns `None` when `source` has
/// no annotation for `key` or `key` is blank.
///
/// # Examples
/// ```
/// use struct_tags::{StructTag, lookup};
///
/// let field = StructTag::new(r#"json:"age,omitempty" xml:"age""#);
/// let tag = lookup(&field, "json").expect("json annotation present");
/// assert_eq!(tag.name(), "age");
/// assert!(tag.has_option("omitempty"));
/// assert!(lookup(&field, "excel").is_none());
/// ```
pub fn lookup<S>(source: &S, key: &str) -> Option<Tag>
where
    S: TagSource + ?Sized,
{
    let trimmed_key = key.trim();
    if trimmed_key.is_empty() {
        debug!("blank annotation key {key:?}");
        return None;
    }
    let Some(value) = source.tag_value(key) else {
        debug!("no annotation for key {key:?}");
        return None;
    };
    let quoted = value.split('"').next().unwrap_or_default();
    let raw = format!("{key}:\"{quoted}\"");
    Some(assemble(&raw, trimmed_key, quoted.trim()))
}
