//! Raw field tags in the conventional `key:"value" key2:"value2"` layout.
//!
//! This is the provider side of [`lookup`](crate::lookup): it finds the quoted
//! value for one key and unescapes it, leaving the decomposition of that value
//! to the tag grammar.

use std::borrow::Cow;

use crate::errors::StructTagError;
use crate::lookup::TagSource;

/// A borrowed raw struct tag, e.g. `json:"id" xml:"id"`.
///
/// Pairs are separated by spaces. Keys are runs of printable, non-space
/// characters other than `:` and `"`; values are double-quoted strings using
/// backslash escapes.
///
/// # Examples
/// ```
/// use struct_tags::StructTag;
///
/// let tag = StructTag::new(r#"json:"name,string" xml:"name""#);
/// assert_eq!(tag.lookup("json").as_deref(), Some("name,string"));
/// assert_eq!(tag.lookup("excel"), None);
/// assert_eq!(tag.get("excel"), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StructTag<'a> {
    raw: &'a str,
}

/// One `key:"value"` pair with the value still quoted.
#[derive(Debug, Clone, Copy)]
struct RawPair<'a> {
    key: &'a str,
    quoted: &'a str,
    offset: usize,
}

impl<'a> StructTag<'a> {
    /// Wrap raw tag text.
    #[must_use]
    pub const fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The raw tag text.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Return the unescaped value stored under `key`.
    ///
    /// Scanning stops at the first malformed pair, so a key that appears only
    /// after broken syntax is reported as absent. An explicitly empty value
    /// (`key:""`) is returned as `Some("")`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<String> {
        for pair in self.pairs() {
            let pair = pair.ok()?;
            if pair.key == key {
                return unquote(pair.quoted, pair.offset).ok();
            }
        }
        None
    }

    /// Return the value stored under `key`, or an empty string when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_default()
    }

    /// Return every pair in order with its value unescaped.
    ///
    /// # Errors
    ///
    /// Returns a [`StructTagError`] describing the first malformed pair or
    /// invalid escape sequence.
    pub fn entries(&self) -> Result<Vec<(&'a str, String)>, StructTagError> {
        self.pairs()
            .map(|pair| {
                let pair = pair?;
                Ok((pair.key, unquote(pair.quoted, pair.offset)?))
            })
            .collect()
    }

    fn pairs(&self) -> Pairs<'a> {
        Pairs {
            text: self.raw,
            pos: 0,
            failed: false,
        }
    }
}

impl TagSource for StructTag<'_> {
    fn tag_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.lookup(key).map(Cow::Owned)
    }
}

/// Scanner over the pairs of a raw tag. Yields at most one error, then stops.
struct Pairs<'a> {
    text: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Pairs<'a> {
    fn scan(&mut self) -> Option<Result<RawPair<'a>, StructTagError>> {
        let bytes = self.text.as_bytes();
        while bytes.get(self.pos) == Some(&b' ') {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }

        let key_start = self.pos;
        let mut pos = key_start;
        while let Some(&b) = bytes.get(pos) {
            if b <= b' ' || b == b':' || b == b'"' || b == 0x7f {
                break;
            }
            pos += 1;
        }
        if pos == key_start {
            return Some(Err(StructTagError::MissingKey { offset: pos }));
        }
        if bytes.get(pos) != Some(&b':') {
            return Some(Err(StructTagError::MissingColon { offset: pos }));
        }
        let quote = pos + 1;
        if bytes.get(quote) != Some(&b'"') {
            return Some(Err(StructTagError::MissingOpeningQuote { offset: quote }));
        }

        let mut end = quote + 1;
        loop {
            match bytes.get(end) {
                None => return Some(Err(StructTagError::UnterminatedValue { offset: quote })),
                Some(b'"') => break,
                Some(b'\\') => end += 2,
                Some(_) => end += 1,
            }
        }

        let key = self.text.get(key_start..pos)?;
        let quoted = self.text.get(quote..=end)?;
        self.pos = end + 1;
        Some(Ok(RawPair {
            key,
            quoted,
            offset: quote,
        }))
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = Result<RawPair<'a>, StructTagError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.scan();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

/// Unescape a double-quoted value. `offset` is the byte position of the
/// opening quote within the whole tag.
fn unquote(quoted: &str, offset: usize) -> Result<String, StructTagError> {
    let inner = quoted
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(StructTagError::UnterminatedValue { offset })?;
    if !inner.contains(['\\', '\n']) {
        return Ok(inner.to_owned());
    }

    let mut out = Vec::with_capacity(inner.len());
    let mut chars = inner.char_indices();
    while let Some((at, c)) = chars.next() {
        let here = offset + 1 + at;
        match c {
            '\\' => unescape(&mut chars, &mut out, here)?,
            '\n' => return Err(StructTagError::UnexpectedNewline { offset: here }),
            _ => push_char(&mut out, c),
        }
    }
    String::from_utf8(out).map_err(|_| StructTagError::InvalidUtf8 { offset })
}

fn unescape(
    chars: &mut std::str::CharIndices<'_>,
    out: &mut Vec<u8>,
    offset: usize,
) -> Result<(), StructTagError> {
    let invalid = StructTagError::InvalidEscape { offset };
    let (_, escape) = chars.next().ok_or(invalid)?;
    match escape {
        'a' => out.push(0x07),
        'b' => out.push(0x08),
        'f' => out.push(0x0c),
        'n' => out.push(b'\n'),
        'r' => out.push(b'\r'),
        't' => out.push(b'\t'),
        'v' => out.push(0x0b),
        '\\' => out.push(b'\\'),
        '"' => out.push(b'"'),
        'x' => {
            let byte = take_digits(chars, None, 2, 16).and_then(|v| u8::try_from(v).ok());
            out.push(byte.ok_or(invalid)?);
        }
        '0'..='7' => {
            let byte = take_digits(chars, Some(escape), 3, 8).and_then(|v| u8::try_from(v).ok());
            out.push(byte.ok_or(invalid)?);
        }
        'u' | 'U' => {
            let width = if escape == 'u' { 4 } else { 8 };
            let decoded = take_digits(chars, None, width, 16).and_then(char::from_u32);
            push_char(out, decoded.ok_or(invalid)?);
        }
        _ => return Err(invalid),
    }
    Ok(())
}

/// Read exactly `count` digits in `radix`, counting `first` if it was already
/// consumed.
fn take_digits(
    chars: &mut std::str::CharIndices<'_>,
    first: Option<char>,
    count: usize,
    radix: u32,
) -> Option<u32> {
    let rest = chars
        .by_ref()
        .take(count - usize::from(first.is_some()))
        .map(|(_, c)| c);
    let mut value = 0_u32;
    let mut seen = 0;
    for digit in first.into_iter().chain(rest) {
        value = value.checked_mul(radix)?.checked_add(digit.to_digit(radix)?)?;
        seen += 1;
    }
    (seen == count).then_some(value)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0_u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
