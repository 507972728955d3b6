//! Word-boundary aware splitting shared by the value and option grammars.

/// Return `true` for the characters that make up a bare word: ASCII letters,
/// digits and underscores.
pub(crate) const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Return `true` when `text` is made up of word characters only.
///
/// The empty string counts as a word.
pub(crate) fn is_word(text: &str) -> bool {
    text.chars().all(is_word_char)
}

/// Length in bytes of the word run at the start of `text`.
pub(crate) fn leading_word_len(text: &str) -> usize {
    text.find(|c: char| !is_word_char(c)).unwrap_or(text.len())
}

/// Split `text` on every `delim` that is immediately followed by a word
/// character.
///
/// A delimiter at the end of `text`, or one followed by punctuation or
/// whitespace, is kept as content of the surrounding piece. This is what lets
/// `split:;` carry a literal `;` and `SET NULL;` keep its trailing semicolon.
pub(crate) fn split_before_word(text: &str, delim: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = text;
    let mut search_from = 0;

    while let Some(found) = rest
        .get(search_from..)
        .and_then(|tail| tail.find(delim))
        .map(|offset| offset + search_from)
    {
        let (head, tail) = rest.split_at(found);
        let after = tail.get(delim.len_utf8()..).unwrap_or_default();
        if after.starts_with(is_word_char) {
            pieces.push(head);
            rest = after;
            search_from = 0;
        } else {
            search_from = found + delim.len_utf8();
        }
    }

    pieces.push(rest);
    pieces
}
