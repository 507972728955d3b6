//! Splitting a tag value into its leading name and options string.

use crate::delimiter::{is_word, leading_word_len};

/// A tag value split into its name and the options that follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ValueParts<'a> {
    pub name: &'a str,
    pub options: Option<&'a str>,
}

/// Decompose a trimmed tag value.
///
/// Rules are tried in order:
///
/// 1. a bare word (including the empty value) is the name, with no options;
/// 2. a word run followed by `,` or `;` is the name, and everything after
///    that delimiter is the options string (`,omitempty` has an empty name);
/// 3. anything else, such as `key:value`, is an options string with an empty
///    name.
pub(crate) fn decompose_value(value: &str) -> ValueParts<'_> {
    if is_word(value) {
        return ValueParts {
            name: value,
            options: None,
        };
    }

    let (name, rest) = value.split_at(leading_word_len(value));
    if let Some(options) = rest.strip_prefix([',', ';']) {
        return ValueParts {
            name,
            options: Some(options),
        };
    }

    ValueParts {
        name: "",
        options: Some(value),
    }
}
