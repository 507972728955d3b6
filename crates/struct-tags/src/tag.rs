//! The parsed representation of one `key:"value"` annotation.

use crate::option::TagOption;

/// A fully decomposed annotation segment.
///
/// For `gorm:"embedded;embeddedPrefix:author_"` the key is `gorm`, the value
/// is `embedded;embeddedPrefix:author_`, the name is `embedded` and the only
/// option is `embeddedPrefix` with the value `author_`.
///
/// Tags are produced by [`parse`](crate::parse) and are immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tag {
    raw: String,
    key: String,
    value: String,
    name: String,
    options: Vec<TagOption>,
}

impl Tag {
    pub(crate) fn new(
        raw: &str,
        key: &str,
        value: &str,
        name: &str,
        options: Vec<TagOption>,
    ) -> Self {
        Self {
            raw: raw.to_owned(),
            key: key.to_owned(),
            value: value.to_owned(),
            name: name.to_owned(),
            options,
        }
    }

    /// The matched `key:"value"` text exactly as it appeared in the input.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The annotation key, e.g. `json`. Never empty.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The trimmed text between the quotes.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The leading name of the value. May be empty, as in `json:",omitempty"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Options in the order they appear in the value.
    #[must_use]
    pub fn options(&self) -> &[TagOption] {
        &self.options
    }

    /// Return `true` when any option has the given key.
    ///
    /// # Examples
    /// ```
    /// let Ok(tags) = struct_tags::parse(r#"json:"id,omitempty""#);
    /// let tag = &tags[0];
    /// assert!(tag.has_option("omitempty"));
    /// assert!(!tag.has_option("string"));
    /// ```
    #[must_use]
    pub fn has_option(&self, key: &str) -> bool {
        self.get_option(key).is_some()
    }

    /// Return the first option with the given key.
    ///
    /// Keys are not unique; use [`options_named`](Self::options_named) to see
    /// every option sharing a key.
    ///
    /// # Examples
    /// ```
    /// let Ok(tags) = struct_tags::parse(r#"gorm:"embedded;embeddedPrefix:author_""#);
    /// let option = tags[0].get_option("embeddedPrefix");
    /// assert_eq!(option.and_then(|o| o.value()), Some("author_"));
    /// ```
    #[must_use]
    pub fn get_option(&self, key: &str) -> Option<&TagOption> {
        self.options.iter().find(|option| option.key() == key)
    }

    /// Iterate over every option with the given key, in order.
    pub fn options_named<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a TagOption> {
        self.options.iter().filter(move |option| option.key() == key)
    }

    /// Rebuild the `key:"value"` form of this tag from its key and value.
    ///
    /// Parsing the result yields a tag with the same key, value, name and
    /// options. Its [`raw`](Self::raw) text matches too unless the original
    /// segment was padded inside its quotes or before its colon, since that
    /// padding is not kept.
    ///
    /// # Examples
    /// ```
    /// let Ok(tags) = struct_tags::parse(r#"db :"  col;index ""#);
    /// let rebuilt = tags[0].to_segment_string();
    /// assert_eq!(rebuilt, r#"db:"col;index""#);
    /// ```
    #[must_use]
    pub fn to_segment_string(&self) -> String {
        format!("{}:\"{}\"", self.key, self.value)
    }
}
