use std::collections::VecDeque;
use std::mem;

use crate::attr::AttrList;
use crate::{Error, State};

/// An emitter is an object providing methods to the tokenizer to produce tokens.
///
/// Domain-specific consumers of the tokenizer can implement this trait to customize per-token
/// allocation or to drop data they do not care about.
///
/// An emitter is assumed to have these internal states:
///
/// * _last start tag_: the most recently emitted start tag's name
/// * _current token_: a tag, doctype or comment under construction
/// * _current attribute_: the attribute currently being accumulated
///
/// The state machine needs a functional implementation of
/// [`Emitter::current_is_appropriate_end_tag_token`] to do correct transitions out of
/// RCDATA/RAWTEXT/script data, whatever else is stubbed out.
pub trait Emitter {
    /// The token type the tokenizer yields when used as an iterator.
    type Token;

    /// Override the _last start tag_. Used to resume tokenization inside RCDATA/RAWTEXT
    /// content models and by the conformance harness.
    fn set_last_start_tag(&mut self, last_start_tag: Option<&str>);

    /// The state machine has reached the end of the input.
    fn emit_eof(&mut self);

    /// A recoverable parse error occurred.
    fn emit_error(&mut self, error: Error);

    /// Retrieve the next finished token, if any.
    fn pop_token(&mut self) -> Option<Self::Token>;

    /// Emit a run of plain characters. Consecutive runs are coalesced into one token.
    fn emit_string(&mut self, s: &str);

    /// Set the _current token_ to a start tag.
    fn init_start_tag(&mut self);

    /// Set the _current token_ to an end tag.
    fn init_end_tag(&mut self);

    /// Set the _current token_ to a comment.
    fn init_comment(&mut self);

    /// Set the _current token_ to a doctype with empty name and absent identifiers.
    fn init_doctype(&mut self);

    /// Begin a new attribute, flushing the previous one onto the current tag. Duplicate names
    /// are dropped with a [`Error::DuplicateAttribute`] error.
    fn init_attribute(&mut self);

    /// Emit the _current token_, assuming it is a tag, and update the _last start tag_.
    ///
    /// The return value switches the tokenizer to a new state; the tree builder drives
    /// content-model switching through [`crate::Tokenizer::set_state`] instead, so the
    /// default emitter always returns `None`.
    #[must_use]
    fn emit_current_tag(&mut self) -> Option<State>;

    /// Emit the _current token_, assuming it is a comment.
    fn emit_current_comment(&mut self);

    /// Emit the _current token_, assuming it is a doctype.
    fn emit_current_doctype(&mut self);

    /// Set the self-closing flag on the current tag. On an end tag this is an
    /// [`Error::EndTagWithTrailingSolidus`] error instead.
    fn set_self_closing(&mut self);

    /// Set the force-quirks flag on the current doctype.
    fn set_force_quirks(&mut self);

    /// Append to the current tag's name.
    fn push_tag_name(&mut self, s: &str);

    /// Append to the current comment's data.
    fn push_comment(&mut self, s: &str);

    /// Append to the current doctype's name.
    fn push_doctype_name(&mut self, s: &str);

    /// Append to the current attribute's name.
    fn push_attribute_name(&mut self, s: &str);

    /// Append to the current attribute's value.
    fn push_attribute_value(&mut self, s: &str);

    /// Set the current doctype's public identifier to the empty string.
    fn set_doctype_public_identifier(&mut self, value: &str);

    /// Set the current doctype's system identifier to the empty string.
    fn set_doctype_system_identifier(&mut self, value: &str);

    /// Append to the current doctype's public identifier.
    fn push_doctype_public_identifier(&mut self, s: &str);

    /// Append to the current doctype's system identifier.
    fn push_doctype_system_identifier(&mut self, s: &str);

    /// Whether the current token is an [appropriate end tag
    /// token](https://html.spec.whatwg.org/#appropriate-end-tag-token): an end tag whose name
    /// matches the last start tag.
    fn current_is_appropriate_end_tag_token(&mut self) -> bool;

    /// Whether the adjusted current node exists and is not in the HTML namespace.
    ///
    /// `<![CDATA[` is only honoured in foreign content; everywhere else it is a bogus
    /// comment. The tree builder keeps this in sync, standalone tokenization returns false.
    fn adjusted_current_node_present_but_not_in_html_namespace(&mut self) -> bool {
        false
    }
}

/// The default implementation of [`Emitter`], producing [`Token`] values.
#[derive(Debug, Default)]
pub struct DefaultEmitter {
    current_characters: String,
    current_token: Option<Token>,
    last_start_tag: String,
    current_attribute: Option<(String, String)>,
    seen_end_tag_attributes: Vec<String>,
    emitted_tokens: VecDeque<Token>,
    in_foreign_content: bool,
    xml_violation_compat: bool,
}

impl DefaultEmitter {
    /// Inform the emitter whether the adjusted current node is in a foreign namespace.
    ///
    /// Only the tree builder calls this; it gates CDATA section recognition.
    pub fn set_foreign_content_active(&mut self, yes: bool) {
        self.in_foreign_content = yes;
    }

    /// Coerce emitted character data and comments to be representable as an XML 1.0
    /// infoset: form feeds become spaces, `--` runs and trailing dashes in comments are
    /// padded apart.
    pub fn set_xml_violation_compat(&mut self, yes: bool) {
        self.xml_violation_compat = yes;
    }

    fn emit_token(&mut self, token: Token) {
        self.flush_current_characters();
        self.emitted_tokens.push_front(token);
    }

    fn flush_current_attribute(&mut self) {
        if let Some((name, value)) = self.current_attribute.take() {
            match self.current_token {
                Some(Token::StartTag(ref mut tag)) => {
                    if !tag.attrs.insert(name, value) {
                        self.emit_error(Error::DuplicateAttribute);
                    }
                }
                Some(Token::EndTag(_)) => {
                    // attributes on end tags are dropped, but duplicates are still an error
                    if self.seen_end_tag_attributes.contains(&name) {
                        self.emit_error(Error::DuplicateAttribute);
                    } else {
                        self.seen_end_tag_attributes.push(name);
                    }
                }
                _ => debug_assert!(false),
            }
        }
    }

    fn flush_current_characters(&mut self) {
        if self.current_characters.is_empty() {
            return;
        }

        let mut s = mem::take(&mut self.current_characters);
        if self.xml_violation_compat && s.contains('\u{c}') {
            s = s.replace('\u{c}', " ");
        }
        self.emitted_tokens.push_front(Token::Character(s));
    }
}

impl Emitter for DefaultEmitter {
    type Token = Token;

    fn set_last_start_tag(&mut self, last_start_tag: Option<&str>) {
        self.last_start_tag.clear();
        self.last_start_tag.push_str(last_start_tag.unwrap_or_default());
    }

    fn emit_eof(&mut self) {
        self.flush_current_characters();
        self.emitted_tokens.push_front(Token::Eof);
    }

    fn emit_error(&mut self, error: Error) {
        // errors do not split character runs, their position is not load-bearing
        self.emitted_tokens.push_front(Token::Error(error));
    }

    fn pop_token(&mut self) -> Option<Self::Token> {
        self.emitted_tokens.pop_back()
    }

    fn emit_string(&mut self, s: &str) {
        self.current_characters.push_str(s);
    }

    fn init_start_tag(&mut self) {
        self.current_token = Some(Token::StartTag(StartTag::default()));
    }

    fn init_end_tag(&mut self) {
        self.current_token = Some(Token::EndTag(EndTag::default()));
        self.seen_end_tag_attributes.clear();
    }

    fn init_comment(&mut self) {
        self.current_token = Some(Token::Comment(String::new()));
    }

    fn init_doctype(&mut self) {
        self.current_token = Some(Token::Doctype(Doctype {
            name: String::new(),
            force_quirks: false,
            public_id: None,
            system_id: None,
        }));
    }

    fn init_attribute(&mut self) {
        self.flush_current_attribute();
        self.current_attribute = Some(Default::default());
    }

    fn emit_current_tag(&mut self) -> Option<State> {
        self.flush_current_attribute();
        let mut token = self.current_token.take().expect("no current tag");
        match token {
            Token::EndTag(_) => {
                if !self.seen_end_tag_attributes.is_empty() {
                    self.emit_error(Error::EndTagWithAttributes);
                    self.seen_end_tag_attributes.clear();
                }
                self.set_last_start_tag(None);
            }
            Token::StartTag(ref mut tag) => {
                self.last_start_tag.clear();
                self.last_start_tag.push_str(&tag.name);
            }
            _ => debug_assert!(false),
        }
        self.emit_token(token);
        None
    }

    fn emit_current_comment(&mut self) {
        let mut comment = self.current_token.take().expect("no current comment");
        match comment {
            Token::Comment(ref mut data) => {
                if self.xml_violation_compat {
                    if data.contains("--") {
                        *data = data.replace("--", "- -");
                    }
                    if data.ends_with('-') {
                        data.push(' ');
                    }
                }
            }
            _ => debug_assert!(false),
        }
        self.emit_token(comment);
    }

    fn emit_current_doctype(&mut self) {
        let doctype = self.current_token.take().expect("no current doctype");
        debug_assert!(matches!(doctype, Token::Doctype(_)));
        self.emit_token(doctype);
    }

    fn set_self_closing(&mut self) {
        match self.current_token {
            Some(Token::StartTag(ref mut tag)) => {
                tag.self_closing = true;
            }
            Some(Token::EndTag(_)) => {
                self.emit_error(Error::EndTagWithTrailingSolidus);
            }
            _ => debug_assert!(false),
        }
    }

    fn set_force_quirks(&mut self) {
        match self.current_token {
            Some(Token::Doctype(ref mut doctype)) => doctype.force_quirks = true,
            _ => debug_assert!(false),
        }
    }

    fn push_tag_name(&mut self, s: &str) {
        match self.current_token {
            Some(
                Token::StartTag(StartTag { ref mut name, .. })
                | Token::EndTag(EndTag { ref mut name, .. }),
            ) => {
                name.push_str(s);
            }
            _ => debug_assert!(false),
        }
    }

    fn push_comment(&mut self, s: &str) {
        match self.current_token {
            Some(Token::Comment(ref mut data)) => data.push_str(s),
            _ => debug_assert!(false),
        }
    }

    fn push_doctype_name(&mut self, s: &str) {
        match self.current_token {
            Some(Token::Doctype(ref mut doctype)) => doctype.name.push_str(s),
            _ => debug_assert!(false),
        }
    }

    fn push_attribute_name(&mut self, s: &str) {
        self.current_attribute
            .as_mut()
            .expect("no current attribute")
            .0
            .push_str(s);
    }

    fn push_attribute_value(&mut self, s: &str) {
        self.current_attribute
            .as_mut()
            .expect("no current attribute")
            .1
            .push_str(s);
    }

    fn set_doctype_public_identifier(&mut self, value: &str) {
        match self.current_token {
            Some(Token::Doctype(ref mut doctype)) => {
                doctype.public_id = Some(value.to_owned());
            }
            _ => debug_assert!(false),
        }
    }

    fn set_doctype_system_identifier(&mut self, value: &str) {
        match self.current_token {
            Some(Token::Doctype(ref mut doctype)) => {
                doctype.system_id = Some(value.to_owned());
            }
            _ => debug_assert!(false),
        }
    }

    fn push_doctype_public_identifier(&mut self, s: &str) {
        match self.current_token {
            Some(Token::Doctype(Doctype {
                public_id: Some(ref mut id),
                ..
            })) => id.push_str(s),
            _ => debug_assert!(false),
        }
    }

    fn push_doctype_system_identifier(&mut self, s: &str) {
        match self.current_token {
            Some(Token::Doctype(Doctype {
                system_id: Some(ref mut id),
                ..
            })) => id.push_str(s),
            _ => debug_assert!(false),
        }
    }

    fn current_is_appropriate_end_tag_token(&mut self) -> bool {
        match self.current_token {
            Some(Token::EndTag(ref tag)) => {
                !self.last_start_tag.is_empty() && self.last_start_tag == tag.name
            }
            _ => false,
        }
    }

    fn adjusted_current_node_present_but_not_in_html_namespace(&mut self) -> bool {
        self.in_foreign_content
    }
}

/// An HTML start tag, such as `<p>` or `<a href="x">`.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct StartTag {
    /// Whether the tag ended in `/>`. Self-closing has no meaning in HTML content; the flag
    /// is acknowledged for void and foreign elements and a parse error otherwise.
    pub self_closing: bool,

    /// The tag name, ASCII-lowercased.
    pub name: String,

    /// The tag's attributes, first occurrence of each name, in source order.
    pub attrs: AttrList,
}

/// An HTML end tag, such as `</p>`.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct EndTag {
    /// The tag name, ASCII-lowercased.
    pub name: String,
}

/// A doctype token. Some examples:
///
/// * `<!DOCTYPE {name}>`
/// * `<!DOCTYPE {name} PUBLIC '{public_id}'>`
/// * `<!DOCTYPE {name} SYSTEM '{system_id}'>`
/// * `<!DOCTYPE {name} PUBLIC '{public_id}' '{system_id}'>`
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct Doctype {
    /// The [force-quirks](https://html.spec.whatwg.org/#force-quirks-flag) flag.
    pub force_quirks: bool,

    /// The doctype's name. `html` for HTML documents.
    pub name: String,

    /// The public identifier, if any. Absent is distinct from empty.
    pub public_id: Option<String>,

    /// The system identifier, if any. Absent is distinct from empty.
    pub system_id: Option<String>,
}

/// A token produced by the tokenizer.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Token {
    /// A start tag.
    StartTag(StartTag),
    /// An end tag.
    EndTag(EndTag),
    /// A run of character data. Consecutive characters are coalesced into one token.
    Character(String),
    /// A comment.
    Comment(String),
    /// A doctype declaration.
    Doctype(Doctype),
    /// A recoverable parse error. The tokenizer continues producing tokens afterwards.
    Error(Error),
    /// End of input. Emitted exactly once, as the final token.
    Eof,
}
