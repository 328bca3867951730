use crate::machine::{self, ControlToken, MachineState};
use crate::{DefaultEmitter, Emitter, Error, Readable, Reader};

/// Tokenizer states that consumers can switch the tokenizer into.
///
/// The tree builder flips the tokenizer into the RCDATA/RAWTEXT/script data/PLAINTEXT content
/// models after the start tags that require them, and `CdataSection` is the initial state used
/// by some conformance tests.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    /// The data state, the initial state for document parsing.
    Data,
    /// The PLAINTEXT state. There is no way out of this state.
    PlainText,
    /// The RCDATA state (`<title>`, `<textarea>`).
    RcData,
    /// The RAWTEXT state (`<style>`, `<xmp>`, ...).
    RawText,
    /// The script data state.
    ScriptData,
    /// The CDATA section state.
    CdataSection,
}

/// Configuration for a [`Tokenizer`].
#[derive(Clone, Debug, Default)]
pub struct TokenizerOpts {
    /// Initial state, for resuming tokenization inside a content model. Defaults to data.
    pub initial_state: Option<State>,

    /// The name of the last start tag emitted before this tokenizer took over, so that
    /// end-tag matching inside RCDATA/RAWTEXT/script data works across the boundary.
    pub last_start_tag: Option<String>,

    /// Coerce the output to be representable as an XML 1.0 infoset: form feeds in character
    /// data become spaces and `--` runs in comments are split. Off by default.
    pub xml_violation_compat: bool,
}

// this is a stack that can hold 0 to 2 Ts
#[derive(Debug, Default)]
pub(crate) struct Stack2<T: Copy>(Option<(T, Option<T>)>);

impl<T: Copy> Stack2<T> {
    #[inline]
    fn push(&mut self, c: T) {
        self.0 = match self.0 {
            None => Some((c, None)),
            Some((c1, None)) => Some((c1, Some(c))),
            Some((_c1, Some(_c2))) => panic!("stack full!"),
        }
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        let (new_self, rv) = match self.0 {
            Some((c1, Some(c2))) => (Some((c1, None)), Some(c2)),
            Some((c1, None)) => (None, Some(c1)),
            None => (None, None),
        };
        self.0 = new_self;
        rv
    }
}

/// An HTML tokenizer. See crate-level docs for basic usage.
///
/// The tokenizer implements `Iterator<Item = Token>`; the final token is [`Token::Eof`].
pub struct Tokenizer<R: Reader, E: Emitter = DefaultEmitter> {
    eof: bool,
    pub(crate) emitter: E,
    pub(crate) reader: R,
    pub(crate) state: MachineState,
    pub(crate) return_state: Option<MachineState>,
    pub(crate) temporary_buffer: String,
    pub(crate) character_reference_code: u32,
    to_reconsume: Stack2<Option<char>>,
}

impl<R: Reader> Tokenizer<R> {
    /// Create a new tokenizer from some input.
    ///
    /// `input` can be `&str` or `&String`, or any type implementing [`Readable`].
    pub fn new<'a, S: Readable<'a, Reader = R>>(input: S) -> Self {
        Tokenizer::new_with_emitter(input, DefaultEmitter::default())
    }

    /// Create a new tokenizer with explicit options.
    pub fn new_with_opts<'a, S: Readable<'a, Reader = R>>(input: S, opts: TokenizerOpts) -> Self {
        let mut tokenizer = Tokenizer::new(input);
        if let Some(state) = opts.initial_state {
            tokenizer.set_state(state);
        }
        tokenizer.set_last_start_tag(opts.last_start_tag.as_deref());
        tokenizer.emitter.set_xml_violation_compat(opts.xml_violation_compat);
        tokenizer
    }
}

impl<R: Reader, E: Emitter> Tokenizer<R, E> {
    /// Construct a tokenizer from some input and a custom emitter.
    pub fn new_with_emitter<'a, S: Readable<'a, Reader = R>>(input: S, emitter: E) -> Self {
        Tokenizer {
            eof: false,
            emitter,
            reader: input.to_reader(),
            state: MachineState::Data,
            return_state: None,
            temporary_buffer: String::new(),
            character_reference_code: 0,
            to_reconsume: Stack2::default(),
        }
    }

    /// Switch the tokenizer to another content model.
    ///
    /// The tree builder calls this after start tags such as `<title>`, `<style>`, `<script>`
    /// and `<plaintext>`; the matching end tag flips the state back to data from within the
    /// state machine.
    pub fn set_state(&mut self, state: State) {
        self.state = state.into();
    }

    /// Override the name used for the appropriate-end-tag check, so tokenization can start
    /// mid-content-model (fragment parsing, conformance tests).
    pub fn set_last_start_tag(&mut self, last_start_tag: Option<&str>) {
        self.emitter.set_last_start_tag(last_start_tag);
    }

    /// Access the emitter.
    pub fn emitter_mut(&mut self) -> &mut E {
        &mut self.emitter
    }

    #[inline]
    pub(crate) fn read_char(&mut self) -> Option<char> {
        if let Some(c) = self.to_reconsume.pop() {
            return c;
        }

        let c = self.reader.read_char();
        if let Some(x) = c {
            self.validate_char(x);
        }
        c
    }

    #[inline]
    pub(crate) fn unread_char(&mut self, c: Option<char>) {
        self.to_reconsume.push(c);
    }

    /// Try to consume `s` from the input, accounting for a pending reconsumed character.
    pub(crate) fn try_read_string(&mut self, mut s: &str, case_sensitive: bool) -> bool {
        debug_assert!(!s.is_empty());

        let to_reconsume_bak = self.to_reconsume.pop();
        if let Some(c) = to_reconsume_bak {
            let mut chars = s.chars();
            match (c, chars.next()) {
                (Some(x), Some(x2))
                    if x == x2
                        || (!case_sensitive
                            && x.to_ascii_lowercase() == x2.to_ascii_lowercase()) =>
                {
                    s = chars.as_str();
                }
                _ => {
                    self.to_reconsume.push(c);
                    return false;
                }
            }
        }

        if s.is_empty() || self.reader.try_read_string(s, case_sensitive) {
            true
        } else {
            if let Some(c) = to_reconsume_bak {
                self.to_reconsume.push(c);
            }
            false
        }
    }

    fn validate_char(&mut self, c: char) {
        // surrogates cannot occur in a char; \r is already normalized away
        let code = c as u32;
        match code {
            0xfdd0..=0xfdef => {
                self.emitter.emit_error(Error::NoncharacterInInputStream);
            }
            _ if code & 0xfffe == 0xfffe => {
                self.emitter.emit_error(Error::NoncharacterInInputStream);
            }
            0x1..=0x8 | 0xb | 0xe..=0x1f | 0x7f..=0x9f => {
                self.emitter.emit_error(Error::ControlCharacterInInputStream);
            }
            _ => (),
        }
    }

    pub(crate) fn is_consumed_as_part_of_an_attribute(&self) -> bool {
        matches!(
            self.return_state,
            Some(
                MachineState::AttributeValueDoubleQuoted
                    | MachineState::AttributeValueSingleQuoted
                    | MachineState::AttributeValueUnquoted
            )
        )
    }

    /// Flush the temporary buffer either into the attribute under construction or as
    /// character tokens, per [flush code points consumed as a character
    /// reference](https://html.spec.whatwg.org/#flush-code-points-consumed-as-a-character-reference).
    pub(crate) fn flush_code_points_consumed_as_character_reference(&mut self) {
        if self.is_consumed_as_part_of_an_attribute() {
            self.emitter.push_attribute_value(&self.temporary_buffer);
            self.temporary_buffer.clear();
        } else {
            self.flush_buffer_characters();
        }
    }

    pub(crate) fn flush_buffer_characters(&mut self) {
        self.emitter.emit_string(&self.temporary_buffer);
        self.temporary_buffer.clear();
    }

}

impl<R: Reader, E: Emitter> Iterator for Tokenizer<R, E> {
    type Item = E::Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.emitter.pop_token() {
                break Some(token);
            } else if !self.eof {
                match machine::consume(self) {
                    ControlToken::Continue => (),
                    ControlToken::Eof => {
                        self.eof = true;
                        self.emitter.emit_eof();
                    }
                }
            } else {
                break None;
            }
        }
    }
}

