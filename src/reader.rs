//! Input abstraction for the tokenizer.

/// An object that provides characters to the tokenizer.
///
/// Newline normalization as described in [preprocessing the input
/// stream](https://html.spec.whatwg.org/#preprocessing-the-input-stream) is the reader's job;
/// error emission for controls and noncharacters is done within the tokenizer.
pub trait Reader {
    /// Return the next character from the input stream, or `None` at end of input.
    fn read_char(&mut self) -> Option<char>;

    /// Attempt to consume an entire string at once.
    ///
    /// If the next characters equal `s` (ignoring ASCII case when `case_sensitive` is false),
    /// consume them and return `true`. Otherwise consume nothing and return `false`.
    ///
    /// `s` never contains `\r` or `\n`.
    fn try_read_string(&mut self, s: &str, case_sensitive: bool) -> bool;
}

/// An object that can be converted into a [`Reader`].
///
/// Implemented for `&str` and `&String` so that `Tokenizer::new("<p>hi")` works.
pub trait Readable<'a> {
    /// The reader type this converts into.
    type Reader: Reader + 'a;

    /// Convert self into a reader.
    fn to_reader(self) -> Self::Reader;
}

impl<'a, R: 'a + Reader> Readable<'a> for R {
    type Reader = Self;

    fn to_reader(self) -> Self::Reader {
        self
    }
}

/// A [`Reader`] over a string slice, with `\r\n`/`\r` normalized to `\n`.
pub struct StringReader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> StringReader<'a> {
    fn new(input: &'a str) -> Self {
        StringReader { input, pos: 0 }
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.pos..)?.chars().next()
    }
}

impl<'a> Reader for StringReader<'a> {
    fn read_char(&mut self) -> Option<char> {
        let mut c = self.peek_char()?;
        self.pos += c.len_utf8();

        if c == '\r' {
            c = '\n';
            if self.peek_char() == Some('\n') {
                self.pos += 1;
            }
        }

        Some(c)
    }

    fn try_read_string(&mut self, s: &str, case_sensitive: bool) -> bool {
        debug_assert!(!s.contains('\r'));
        debug_assert!(!s.contains('\n'));

        if let Some(prefix) = self.input.get(self.pos..self.pos + s.len()) {
            if prefix == s || (!case_sensitive && prefix.eq_ignore_ascii_case(s)) {
                self.pos += s.len();
                return true;
            }
        }

        false
    }
}

impl<'a> Readable<'a> for &'a str {
    type Reader = StringReader<'a>;

    fn to_reader(self) -> Self::Reader {
        StringReader::new(self)
    }
}

impl<'a> Readable<'a> for &'a String {
    type Reader = StringReader<'a>;

    fn to_reader(self) -> Self::Reader {
        StringReader::new(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_carriage_returns() {
        let mut r = "a\r\nb\rc".to_reader();
        let mut out = String::new();
        while let Some(c) = r.read_char() {
            out.push(c);
        }
        assert_eq!(out, "a\nb\nc");
    }

    #[test]
    fn try_read_string_does_not_consume_on_mismatch() {
        let mut r = "DOCTYPE html".to_reader();
        assert!(!r.try_read_string("doctype!", true));
        assert!(r.try_read_string("doctype", false));
        assert!(r.try_read_string(" html", true));
        assert_eq!(r.read_char(), None);
    }

    #[test]
    fn try_read_string_out_of_bounds() {
        let mut r = "ab".to_reader();
        assert!(!r.try_read_string("abc", true));
        assert_eq!(r.read_char(), Some('a'));
    }
}
