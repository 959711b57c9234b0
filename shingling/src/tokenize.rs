//! Tokenization of text into characters or delimited words.
use std::iter::FusedIterator;

/// Creates a lazy iterator of tokens borrowed from `text`.
///
/// If `delimiter` is `None`, each character is a token.
/// Otherwise, tokens are the pieces between delimiters, where a trailing
/// delimiter does not produce an empty last token.
///
/// # Examples
///
/// ```
/// use shingling::tokenize;
///
/// assert_eq!(tokenize("abc", None).collect::<Vec<_>>(), vec!["a", "b", "c"]);
/// assert_eq!(tokenize("abc de ", Some(' ')).collect::<Vec<_>>(), vec!["abc", "de"]);
/// ```
pub fn tokenize(text: &str, delimiter: Option<char>) -> Tokens<'_> {
    Tokens {
        text,
        delimiter,
        offset: 0,
    }
}

/// Iterator created by [`tokenize`].
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    text: &'a str,
    delimiter: Option<char>,
    offset: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.offset..];
        if rest.is_empty() {
            return None;
        }
        let len = if let Some(delim) = self.delimiter {
            if let Some(len) = rest.find(delim) {
                self.offset += len + delim.len_utf8();
                return Some(&rest[..len]);
            }
            rest.len()
        } else {
            // Never fails on a non-empty str.
            rest.chars().next().map_or(rest.len(), char::len_utf8)
        };
        self.offset += len;
        Some(&rest[..len])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.text.len() - self.offset;
        match self.delimiter {
            Some(_) => (usize::from(rest != 0), Some(rest)),
            None => ((rest + 3) / 4, Some(rest)),
        }
    }
}

impl FusedIterator for Tokens<'_> {}
