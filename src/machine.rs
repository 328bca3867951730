//! The tokenizer state machine.
//!
//! One call to [`consume`] processes a single input character (or one `try_read_string`
//! lookahead) in the current state, exactly as written in [the
//! spec](https://html.spec.whatwg.org/#tokenization). Anything that outlives a single step
//! (the token under construction, the temporary buffer, the character reference accumulator)
//! lives on the [`crate::Tokenizer`] and its emitter.

use crate::entities::try_read_character_reference;
use crate::{Emitter, Error, Reader, State, Tokenizer};

// When integration tests are running, this enum is visible through the tokenizer; it is not
// part of the public API.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MachineState {
    Data,
    RcData,
    RawText,
    ScriptData,
    PlainText,
    TagOpen,
    EndTagOpen,
    TagName,
    RcDataLessThanSign,
    RcDataEndTagOpen,
    RcDataEndTagName,
    RawTextLessThanSign,
    RawTextEndTagOpen,
    RawTextEndTagName,
    ScriptDataLessThanSign,
    ScriptDataEndTagOpen,
    ScriptDataEndTagName,
    ScriptDataEscapeStart,
    ScriptDataEscapeStartDash,
    ScriptDataEscaped,
    ScriptDataEscapedDash,
    ScriptDataEscapedDashDash,
    ScriptDataEscapedLessThanSign,
    ScriptDataEscapedEndTagOpen,
    ScriptDataEscapedEndTagName,
    ScriptDataDoubleEscapeStart,
    ScriptDataDoubleEscaped,
    ScriptDataDoubleEscapedDash,
    ScriptDataDoubleEscapedDashDash,
    ScriptDataDoubleEscapedLessThanSign,
    ScriptDataDoubleEscapeEnd,
    BeforeAttributeName,
    AttributeName,
    AfterAttributeName,
    BeforeAttributeValue,
    AttributeValueDoubleQuoted,
    AttributeValueSingleQuoted,
    AttributeValueUnquoted,
    AfterAttributeValueQuoted,
    SelfClosingStartTag,
    BogusComment,
    MarkupDeclarationOpen,
    CommentStart,
    CommentStartDash,
    Comment,
    CommentLessThanSign,
    CommentLessThanSignBang,
    CommentLessThanSignBangDash,
    CommentLessThanSignBangDashDash,
    CommentEndDash,
    CommentEnd,
    CommentEndBang,
    Doctype,
    BeforeDoctypeName,
    DoctypeName,
    AfterDoctypeName,
    AfterDoctypePublicKeyword,
    BeforeDoctypePublicIdentifier,
    DoctypePublicIdentifierDoubleQuoted,
    DoctypePublicIdentifierSingleQuoted,
    AfterDoctypePublicIdentifier,
    BetweenDoctypePublicAndSystemIdentifiers,
    AfterDoctypeSystemKeyword,
    BeforeDoctypeSystemIdentifier,
    DoctypeSystemIdentifierDoubleQuoted,
    DoctypeSystemIdentifierSingleQuoted,
    AfterDoctypeSystemIdentifier,
    BogusDoctype,
    CdataSection,
    CdataSectionBracket,
    CdataSectionEnd,
    CharacterReference,
    NamedCharacterReference,
    AmbiguousAmpersand,
    NumericCharacterReference,
    HexadecimalCharacterReferenceStart,
    HexadecimalCharacterReference,
    DecimalCharacterReference,
    NumericCharacterReferenceEnd,
}

impl From<State> for MachineState {
    fn from(state: State) -> Self {
        match state {
            State::Data => MachineState::Data,
            State::PlainText => MachineState::PlainText,
            State::RcData => MachineState::RcData,
            State::RawText => MachineState::RawText,
            State::ScriptData => MachineState::ScriptData,
            State::CdataSection => MachineState::CdataSection,
        }
    }
}

pub(crate) enum ControlToken {
    Continue,
    Eof,
}

macro_rules! ctostr {
    ($c:expr) => {
        &*$c.encode_utf8(&mut [0; 4])
    };
}

macro_rules! switch_to {
    ($slf:expr, $state:ident) => {{
        $slf.state = MachineState::$state;
        ControlToken::Continue
    }};
}

macro_rules! reconsume_in {
    ($slf:expr, $c:expr, $state:ident) => {{
        $slf.unread_char($c);
        $slf.state = MachineState::$state;
        ControlToken::Continue
    }};
}

macro_rules! enter_state {
    // save the current state as the return state, then switch
    ($slf:expr, $state:ident) => {{
        debug_assert!($slf.return_state.is_none());
        $slf.return_state = Some($slf.state);
        $slf.state = MachineState::$state;
        ControlToken::Continue
    }};
}

macro_rules! exit_state {
    ($slf:expr) => {{
        $slf.state = $slf.return_state.take().expect("not in character reference");
        ControlToken::Continue
    }};
}

macro_rules! reconsume_in_return_state {
    ($slf:expr, $c:expr) => {{
        let state = $slf.return_state.take().expect("not in character reference");
        $slf.unread_char($c);
        $slf.state = state;
        ControlToken::Continue
    }};
}

macro_rules! cont {
    () => {
        ControlToken::Continue
    };
}

macro_rules! eof {
    () => {
        ControlToken::Eof
    };
}

macro_rules! error {
    ($slf:expr, $e:ident) => {
        $slf.emitter.emit_error(Error::$e)
    };
}

macro_rules! emit_current_tag_and_switch_to {
    ($slf:expr, $state:ident) => {{
        match $slf.emitter.emit_current_tag().map(MachineState::from) {
            Some(state) => $slf.state = state,
            None => $slf.state = MachineState::$state,
        }
        ControlToken::Continue
    }};
}

macro_rules! mutate_character_reference {
    ($slf:expr, * $mul:literal + $x:ident - $sub:literal) => {
        match $slf
            .character_reference_code
            .checked_mul($mul)
            .and_then(|cr| cr.checked_add($x as u32 - $sub))
        {
            Some(cr) => $slf.character_reference_code = cr,
            None => {
                // provoke the out-of-range branch
                $slf.character_reference_code = 0x0011_0000;
            }
        };
    };
}

/// Process one step of the state machine.
pub(crate) fn consume<R: Reader, E: Emitter>(slf: &mut Tokenizer<R, E>) -> ControlToken {
    match slf.state {
        MachineState::Data => match slf.read_char() {
            Some('&') => enter_state!(slf, CharacterReference),
            Some('<') => switch_to!(slf, TagOpen),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.emit_string("\0");
                cont!()
            }
            Some(x) => {
                slf.emitter.emit_string(ctostr!(x));
                cont!()
            }
            None => eof!(),
        },
        MachineState::RcData => match slf.read_char() {
            Some('&') => enter_state!(slf, CharacterReference),
            Some('<') => switch_to!(slf, RcDataLessThanSign),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.emit_string("\u{fffd}");
                cont!()
            }
            Some(x) => {
                slf.emitter.emit_string(ctostr!(x));
                cont!()
            }
            None => eof!(),
        },
        MachineState::RawText => match slf.read_char() {
            Some('<') => switch_to!(slf, RawTextLessThanSign),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.emit_string("\u{fffd}");
                cont!()
            }
            Some(x) => {
                slf.emitter.emit_string(ctostr!(x));
                cont!()
            }
            None => eof!(),
        },
        MachineState::ScriptData => match slf.read_char() {
            Some('<') => switch_to!(slf, ScriptDataLessThanSign),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.emit_string("\u{fffd}");
                cont!()
            }
            Some(x) => {
                slf.emitter.emit_string(ctostr!(x));
                cont!()
            }
            None => eof!(),
        },
        MachineState::PlainText => match slf.read_char() {
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.emit_string("\u{fffd}");
                cont!()
            }
            Some(x) => {
                slf.emitter.emit_string(ctostr!(x));
                cont!()
            }
            None => eof!(),
        },
        MachineState::TagOpen => match slf.read_char() {
            Some('!') => switch_to!(slf, MarkupDeclarationOpen),
            Some('/') => switch_to!(slf, EndTagOpen),
            Some(x) if x.is_ascii_alphabetic() => {
                slf.emitter.init_start_tag();
                reconsume_in!(slf, Some(x), TagName)
            }
            c @ Some('?') => {
                error!(slf, UnexpectedQuestionMarkInsteadOfTagName);
                slf.emitter.init_comment();
                reconsume_in!(slf, c, BogusComment)
            }
            None => {
                error!(slf, EofBeforeTagName);
                slf.emitter.emit_string("<");
                eof!()
            }
            c @ Some(_) => {
                error!(slf, InvalidFirstCharacterOfTagName);
                slf.emitter.emit_string("<");
                reconsume_in!(slf, c, Data)
            }
        },
        MachineState::EndTagOpen => match slf.read_char() {
            Some(x) if x.is_ascii_alphabetic() => {
                slf.emitter.init_end_tag();
                reconsume_in!(slf, Some(x), TagName)
            }
            Some('>') => {
                error!(slf, MissingEndTagName);
                switch_to!(slf, Data)
            }
            None => {
                error!(slf, EofBeforeTagName);
                slf.emitter.emit_string("</");
                eof!()
            }
            c @ Some(_) => {
                error!(slf, InvalidFirstCharacterOfTagName);
                slf.emitter.init_comment();
                reconsume_in!(slf, c, BogusComment)
            }
        },
        MachineState::TagName => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => switch_to!(slf, BeforeAttributeName),
            Some('/') => switch_to!(slf, SelfClosingStartTag),
            Some('>') => emit_current_tag_and_switch_to!(slf, Data),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.push_tag_name("\u{fffd}");
                cont!()
            }
            Some(x) => {
                slf.emitter.push_tag_name(ctostr!(x.to_ascii_lowercase()));
                cont!()
            }
            None => {
                error!(slf, EofInTag);
                eof!()
            }
        },
        MachineState::RcDataLessThanSign => match slf.read_char() {
            Some('/') => {
                slf.temporary_buffer.clear();
                switch_to!(slf, RcDataEndTagOpen)
            }
            c => {
                slf.emitter.emit_string("<");
                reconsume_in!(slf, c, RcData)
            }
        },
        MachineState::RcDataEndTagOpen => match slf.read_char() {
            Some(x) if x.is_ascii_alphabetic() => {
                slf.emitter.init_end_tag();
                reconsume_in!(slf, Some(x), RcDataEndTagName)
            }
            c => {
                slf.emitter.emit_string("</");
                reconsume_in!(slf, c, RcData)
            }
        },
        MachineState::RcDataEndTagName => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ')
                if slf.emitter.current_is_appropriate_end_tag_token() =>
            {
                switch_to!(slf, BeforeAttributeName)
            }
            Some('/') if slf.emitter.current_is_appropriate_end_tag_token() => {
                switch_to!(slf, SelfClosingStartTag)
            }
            Some('>') if slf.emitter.current_is_appropriate_end_tag_token() => {
                emit_current_tag_and_switch_to!(slf, Data)
            }
            Some(x) if x.is_ascii_alphabetic() => {
                slf.emitter.push_tag_name(ctostr!(x.to_ascii_lowercase()));
                slf.temporary_buffer.push(x);
                cont!()
            }
            c => {
                slf.emitter.emit_string("</");
                slf.flush_buffer_characters();
                reconsume_in!(slf, c, RcData)
            }
        },
        MachineState::RawTextLessThanSign => match slf.read_char() {
            Some('/') => {
                slf.temporary_buffer.clear();
                switch_to!(slf, RawTextEndTagOpen)
            }
            c => {
                slf.emitter.emit_string("<");
                reconsume_in!(slf, c, RawText)
            }
        },
        MachineState::RawTextEndTagOpen => match slf.read_char() {
            Some(x) if x.is_ascii_alphabetic() => {
                slf.emitter.init_end_tag();
                reconsume_in!(slf, Some(x), RawTextEndTagName)
            }
            c => {
                slf.emitter.emit_string("</");
                reconsume_in!(slf, c, RawText)
            }
        },
        MachineState::RawTextEndTagName => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ')
                if slf.emitter.current_is_appropriate_end_tag_token() =>
            {
                switch_to!(slf, BeforeAttributeName)
            }
            Some('/') if slf.emitter.current_is_appropriate_end_tag_token() => {
                switch_to!(slf, SelfClosingStartTag)
            }
            Some('>') if slf.emitter.current_is_appropriate_end_tag_token() => {
                emit_current_tag_and_switch_to!(slf, Data)
            }
            Some(x) if x.is_ascii_alphabetic() => {
                slf.emitter.push_tag_name(ctostr!(x.to_ascii_lowercase()));
                slf.temporary_buffer.push(x);
                cont!()
            }
            c => {
                slf.emitter.emit_string("</");
                slf.flush_buffer_characters();
                reconsume_in!(slf, c, RawText)
            }
        },
        MachineState::ScriptDataLessThanSign => match slf.read_char() {
            Some('/') => {
                slf.temporary_buffer.clear();
                switch_to!(slf, ScriptDataEndTagOpen)
            }
            Some('!') => {
                slf.emitter.emit_string("<!");
                switch_to!(slf, ScriptDataEscapeStart)
            }
            c => {
                slf.emitter.emit_string("<");
                reconsume_in!(slf, c, ScriptData)
            }
        },
        MachineState::ScriptDataEndTagOpen => match slf.read_char() {
            Some(x) if x.is_ascii_alphabetic() => {
                slf.emitter.init_end_tag();
                reconsume_in!(slf, Some(x), ScriptDataEndTagName)
            }
            c => {
                slf.emitter.emit_string("</");
                reconsume_in!(slf, c, ScriptData)
            }
        },
        MachineState::ScriptDataEndTagName => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ')
                if slf.emitter.current_is_appropriate_end_tag_token() =>
            {
                switch_to!(slf, BeforeAttributeName)
            }
            Some('/') if slf.emitter.current_is_appropriate_end_tag_token() => {
                switch_to!(slf, SelfClosingStartTag)
            }
            Some('>') if slf.emitter.current_is_appropriate_end_tag_token() => {
                emit_current_tag_and_switch_to!(slf, Data)
            }
            Some(x) if x.is_ascii_alphabetic() => {
                slf.emitter.push_tag_name(ctostr!(x.to_ascii_lowercase()));
                slf.temporary_buffer.push(x);
                cont!()
            }
            c => {
                slf.emitter.emit_string("</");
                slf.flush_buffer_characters();
                reconsume_in!(slf, c, ScriptData)
            }
        },
        MachineState::ScriptDataEscapeStart => match slf.read_char() {
            Some('-') => {
                slf.emitter.emit_string("-");
                switch_to!(slf, ScriptDataEscapeStartDash)
            }
            c => reconsume_in!(slf, c, ScriptData),
        },
        MachineState::ScriptDataEscapeStartDash => match slf.read_char() {
            Some('-') => {
                slf.emitter.emit_string("-");
                switch_to!(slf, ScriptDataEscapedDashDash)
            }
            c => reconsume_in!(slf, c, ScriptData),
        },
        MachineState::ScriptDataEscaped => match slf.read_char() {
            Some('-') => {
                slf.emitter.emit_string("-");
                switch_to!(slf, ScriptDataEscapedDash)
            }
            Some('<') => switch_to!(slf, ScriptDataEscapedLessThanSign),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.emit_string("\u{fffd}");
                cont!()
            }
            Some(x) => {
                slf.emitter.emit_string(ctostr!(x));
                cont!()
            }
            None => {
                error!(slf, EofInScriptHtmlCommentLikeText);
                eof!()
            }
        },
        MachineState::ScriptDataEscapedDash => match slf.read_char() {
            Some('-') => {
                slf.emitter.emit_string("-");
                switch_to!(slf, ScriptDataEscapedDashDash)
            }
            Some('<') => switch_to!(slf, ScriptDataEscapedLessThanSign),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.emit_string("\u{fffd}");
                switch_to!(slf, ScriptDataEscaped)
            }
            Some(x) => {
                slf.emitter.emit_string(ctostr!(x));
                switch_to!(slf, ScriptDataEscaped)
            }
            None => {
                error!(slf, EofInScriptHtmlCommentLikeText);
                eof!()
            }
        },
        MachineState::ScriptDataEscapedDashDash => match slf.read_char() {
            Some('-') => {
                slf.emitter.emit_string("-");
                cont!()
            }
            Some('<') => switch_to!(slf, ScriptDataEscapedLessThanSign),
            Some('>') => {
                slf.emitter.emit_string(">");
                switch_to!(slf, ScriptData)
            }
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.emit_string("\u{fffd}");
                switch_to!(slf, ScriptDataEscaped)
            }
            Some(x) => {
                slf.emitter.emit_string(ctostr!(x));
                switch_to!(slf, ScriptDataEscaped)
            }
            None => {
                error!(slf, EofInScriptHtmlCommentLikeText);
                eof!()
            }
        },
        MachineState::ScriptDataEscapedLessThanSign => match slf.read_char() {
            Some('/') => {
                slf.temporary_buffer.clear();
                switch_to!(slf, ScriptDataEscapedEndTagOpen)
            }
            Some(x) if x.is_ascii_alphabetic() => {
                slf.temporary_buffer.clear();
                slf.emitter.emit_string("<");
                reconsume_in!(slf, Some(x), ScriptDataDoubleEscapeStart)
            }
            c => {
                slf.emitter.emit_string("<");
                reconsume_in!(slf, c, ScriptDataEscaped)
            }
        },
        MachineState::ScriptDataEscapedEndTagOpen => match slf.read_char() {
            Some(x) if x.is_ascii_alphabetic() => {
                slf.emitter.init_end_tag();
                reconsume_in!(slf, Some(x), ScriptDataEscapedEndTagName)
            }
            c => {
                slf.emitter.emit_string("</");
                reconsume_in!(slf, c, ScriptDataEscaped)
            }
        },
        MachineState::ScriptDataEscapedEndTagName => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ')
                if slf.emitter.current_is_appropriate_end_tag_token() =>
            {
                switch_to!(slf, BeforeAttributeName)
            }
            Some('/') if slf.emitter.current_is_appropriate_end_tag_token() => {
                switch_to!(slf, SelfClosingStartTag)
            }
            Some('>') if slf.emitter.current_is_appropriate_end_tag_token() => {
                emit_current_tag_and_switch_to!(slf, Data)
            }
            Some(x) if x.is_ascii_alphabetic() => {
                slf.emitter.push_tag_name(ctostr!(x.to_ascii_lowercase()));
                slf.temporary_buffer.push(x);
                cont!()
            }
            c => {
                slf.emitter.emit_string("</");
                slf.flush_buffer_characters();
                reconsume_in!(slf, c, ScriptDataEscaped)
            }
        },
        MachineState::ScriptDataDoubleEscapeStart => match slf.read_char() {
            Some(x @ ('\t' | '\n' | '\u{c}' | ' ' | '/' | '>')) => {
                slf.emitter.emit_string(ctostr!(x));
                if slf.temporary_buffer == "script" {
                    switch_to!(slf, ScriptDataDoubleEscaped)
                } else {
                    switch_to!(slf, ScriptDataEscaped)
                }
            }
            Some(x) if x.is_ascii_alphabetic() => {
                slf.temporary_buffer.push(x.to_ascii_lowercase());
                slf.emitter.emit_string(ctostr!(x));
                cont!()
            }
            c => reconsume_in!(slf, c, ScriptDataEscaped),
        },
        MachineState::ScriptDataDoubleEscaped => match slf.read_char() {
            Some('-') => {
                slf.emitter.emit_string("-");
                switch_to!(slf, ScriptDataDoubleEscapedDash)
            }
            Some('<') => {
                slf.emitter.emit_string("<");
                switch_to!(slf, ScriptDataDoubleEscapedLessThanSign)
            }
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.emit_string("\u{fffd}");
                cont!()
            }
            Some(x) => {
                slf.emitter.emit_string(ctostr!(x));
                cont!()
            }
            None => {
                error!(slf, EofInScriptHtmlCommentLikeText);
                eof!()
            }
        },
        MachineState::ScriptDataDoubleEscapedDash => match slf.read_char() {
            Some('-') => {
                slf.emitter.emit_string("-");
                switch_to!(slf, ScriptDataDoubleEscapedDashDash)
            }
            Some('<') => {
                slf.emitter.emit_string("<");
                switch_to!(slf, ScriptDataDoubleEscapedLessThanSign)
            }
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.emit_string("\u{fffd}");
                switch_to!(slf, ScriptDataDoubleEscaped)
            }
            Some(x) => {
                slf.emitter.emit_string(ctostr!(x));
                switch_to!(slf, ScriptDataDoubleEscaped)
            }
            None => {
                error!(slf, EofInScriptHtmlCommentLikeText);
                eof!()
            }
        },
        MachineState::ScriptDataDoubleEscapedDashDash => match slf.read_char() {
            Some('-') => {
                slf.emitter.emit_string("-");
                cont!()
            }
            Some('<') => {
                slf.emitter.emit_string("<");
                switch_to!(slf, ScriptDataDoubleEscapedLessThanSign)
            }
            Some('>') => {
                slf.emitter.emit_string(">");
                switch_to!(slf, ScriptData)
            }
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.emit_string("\u{fffd}");
                switch_to!(slf, ScriptDataDoubleEscaped)
            }
            Some(x) => {
                slf.emitter.emit_string(ctostr!(x));
                switch_to!(slf, ScriptDataDoubleEscaped)
            }
            None => {
                error!(slf, EofInScriptHtmlCommentLikeText);
                eof!()
            }
        },
        MachineState::ScriptDataDoubleEscapedLessThanSign => match slf.read_char() {
            Some('/') => {
                slf.temporary_buffer.clear();
                slf.emitter.emit_string("/");
                switch_to!(slf, ScriptDataDoubleEscapeEnd)
            }
            c => reconsume_in!(slf, c, ScriptDataDoubleEscaped),
        },
        MachineState::ScriptDataDoubleEscapeEnd => match slf.read_char() {
            Some(x @ ('\t' | '\n' | '\u{c}' | ' ' | '/' | '>')) => {
                slf.emitter.emit_string(ctostr!(x));
                if slf.temporary_buffer == "script" {
                    switch_to!(slf, ScriptDataEscaped)
                } else {
                    switch_to!(slf, ScriptDataDoubleEscaped)
                }
            }
            Some(x) if x.is_ascii_alphabetic() => {
                slf.temporary_buffer.push(x.to_ascii_lowercase());
                slf.emitter.emit_string(ctostr!(x));
                cont!()
            }
            c => reconsume_in!(slf, c, ScriptDataDoubleEscaped),
        },
        MachineState::BeforeAttributeName => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => cont!(),
            c @ (Some('/' | '>') | None) => reconsume_in!(slf, c, AfterAttributeName),
            Some('=') => {
                error!(slf, UnexpectedEqualsSignBeforeAttributeName);
                slf.emitter.init_attribute();
                slf.emitter.push_attribute_name("=");
                switch_to!(slf, AttributeName)
            }
            c @ Some(_) => {
                slf.emitter.init_attribute();
                reconsume_in!(slf, c, AttributeName)
            }
        },
        MachineState::AttributeName => match slf.read_char() {
            c @ (Some('\t' | '\n' | '\u{c}' | ' ' | '/' | '>') | None) => {
                reconsume_in!(slf, c, AfterAttributeName)
            }
            Some('=') => switch_to!(slf, BeforeAttributeValue),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.push_attribute_name("\u{fffd}");
                cont!()
            }
            Some(x @ ('"' | '\'' | '<')) => {
                error!(slf, UnexpectedCharacterInAttributeName);
                slf.emitter.push_attribute_name(ctostr!(x));
                cont!()
            }
            Some(x) => {
                slf.emitter
                    .push_attribute_name(ctostr!(x.to_ascii_lowercase()));
                cont!()
            }
        },
        MachineState::AfterAttributeName => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => cont!(),
            Some('/') => switch_to!(slf, SelfClosingStartTag),
            Some('=') => switch_to!(slf, BeforeAttributeValue),
            Some('>') => emit_current_tag_and_switch_to!(slf, Data),
            None => {
                error!(slf, EofInTag);
                eof!()
            }
            c @ Some(_) => {
                slf.emitter.init_attribute();
                reconsume_in!(slf, c, AttributeName)
            }
        },
        MachineState::BeforeAttributeValue => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => cont!(),
            Some('"') => switch_to!(slf, AttributeValueDoubleQuoted),
            Some('\'') => switch_to!(slf, AttributeValueSingleQuoted),
            Some('>') => {
                error!(slf, MissingAttributeValue);
                emit_current_tag_and_switch_to!(slf, Data)
            }
            c => reconsume_in!(slf, c, AttributeValueUnquoted),
        },
        MachineState::AttributeValueDoubleQuoted => match slf.read_char() {
            Some('"') => switch_to!(slf, AfterAttributeValueQuoted),
            Some('&') => enter_state!(slf, CharacterReference),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.push_attribute_value("\u{fffd}");
                cont!()
            }
            Some(x) => {
                slf.emitter.push_attribute_value(ctostr!(x));
                cont!()
            }
            None => {
                error!(slf, EofInTag);
                eof!()
            }
        },
        MachineState::AttributeValueSingleQuoted => match slf.read_char() {
            Some('\'') => switch_to!(slf, AfterAttributeValueQuoted),
            Some('&') => enter_state!(slf, CharacterReference),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.push_attribute_value("\u{fffd}");
                cont!()
            }
            Some(x) => {
                slf.emitter.push_attribute_value(ctostr!(x));
                cont!()
            }
            None => {
                error!(slf, EofInTag);
                eof!()
            }
        },
        MachineState::AttributeValueUnquoted => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => switch_to!(slf, BeforeAttributeName),
            Some('&') => enter_state!(slf, CharacterReference),
            Some('>') => emit_current_tag_and_switch_to!(slf, Data),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.push_attribute_value("\u{fffd}");
                cont!()
            }
            Some(x @ ('"' | '\'' | '<' | '=' | '`')) => {
                error!(slf, UnexpectedCharacterInUnquotedAttributeValue);
                slf.emitter.push_attribute_value(ctostr!(x));
                cont!()
            }
            Some(x) => {
                slf.emitter.push_attribute_value(ctostr!(x));
                cont!()
            }
            None => {
                error!(slf, EofInTag);
                eof!()
            }
        },
        MachineState::AfterAttributeValueQuoted => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => switch_to!(slf, BeforeAttributeName),
            Some('/') => switch_to!(slf, SelfClosingStartTag),
            Some('>') => emit_current_tag_and_switch_to!(slf, Data),
            None => {
                error!(slf, EofInTag);
                eof!()
            }
            c @ Some(_) => {
                error!(slf, MissingWhitespaceBetweenAttributes);
                reconsume_in!(slf, c, BeforeAttributeName)
            }
        },
        MachineState::SelfClosingStartTag => match slf.read_char() {
            Some('>') => {
                slf.emitter.set_self_closing();
                emit_current_tag_and_switch_to!(slf, Data)
            }
            None => {
                error!(slf, EofInTag);
                eof!()
            }
            c @ Some(_) => {
                error!(slf, UnexpectedSolidusInTag);
                reconsume_in!(slf, c, BeforeAttributeName)
            }
        },
        MachineState::BogusComment => match slf.read_char() {
            Some('>') => {
                slf.emitter.emit_current_comment();
                switch_to!(slf, Data)
            }
            None => {
                slf.emitter.emit_current_comment();
                eof!()
            }
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.push_comment("\u{fffd}");
                cont!()
            }
            Some(x) => {
                slf.emitter.push_comment(ctostr!(x));
                cont!()
            }
        },
        MachineState::MarkupDeclarationOpen => {
            if slf.try_read_string("--", true) {
                slf.emitter.init_comment();
                switch_to!(slf, CommentStart)
            } else if slf.try_read_string("doctype", false) {
                switch_to!(slf, Doctype)
            } else if slf.try_read_string("[CDATA[", true) {
                if slf
                    .emitter
                    .adjusted_current_node_present_but_not_in_html_namespace()
                {
                    switch_to!(slf, CdataSection)
                } else {
                    error!(slf, CdataInHtmlContent);
                    slf.emitter.init_comment();
                    slf.emitter.push_comment("[CDATA[");
                    switch_to!(slf, BogusComment)
                }
            } else {
                error!(slf, IncorrectlyOpenedComment);
                slf.emitter.init_comment();
                switch_to!(slf, BogusComment)
            }
        }
        MachineState::CommentStart => match slf.read_char() {
            Some('-') => switch_to!(slf, CommentStartDash),
            Some('>') => {
                error!(slf, AbruptClosingOfEmptyComment);
                slf.emitter.emit_current_comment();
                switch_to!(slf, Data)
            }
            c => reconsume_in!(slf, c, Comment),
        },
        MachineState::CommentStartDash => match slf.read_char() {
            Some('-') => switch_to!(slf, CommentEnd),
            Some('>') => {
                error!(slf, AbruptClosingOfEmptyComment);
                slf.emitter.emit_current_comment();
                switch_to!(slf, Data)
            }
            None => {
                error!(slf, EofInComment);
                slf.emitter.emit_current_comment();
                eof!()
            }
            c @ Some(_) => {
                slf.emitter.push_comment("-");
                reconsume_in!(slf, c, Comment)
            }
        },
        MachineState::Comment => match slf.read_char() {
            Some('<') => {
                slf.emitter.push_comment("<");
                switch_to!(slf, CommentLessThanSign)
            }
            Some('-') => switch_to!(slf, CommentEndDash),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.push_comment("\u{fffd}");
                cont!()
            }
            Some(x) => {
                slf.emitter.push_comment(ctostr!(x));
                cont!()
            }
            None => {
                error!(slf, EofInComment);
                slf.emitter.emit_current_comment();
                eof!()
            }
        },
        MachineState::CommentLessThanSign => match slf.read_char() {
            Some('!') => {
                slf.emitter.push_comment("!");
                switch_to!(slf, CommentLessThanSignBang)
            }
            Some('<') => {
                slf.emitter.push_comment("<");
                cont!()
            }
            c => reconsume_in!(slf, c, Comment),
        },
        MachineState::CommentLessThanSignBang => match slf.read_char() {
            Some('-') => switch_to!(slf, CommentLessThanSignBangDash),
            c => reconsume_in!(slf, c, Comment),
        },
        MachineState::CommentLessThanSignBangDash => match slf.read_char() {
            Some('-') => switch_to!(slf, CommentLessThanSignBangDashDash),
            c => reconsume_in!(slf, c, CommentEndDash),
        },
        MachineState::CommentLessThanSignBangDashDash => match slf.read_char() {
            c @ (Some('>') | None) => reconsume_in!(slf, c, CommentEnd),
            c => {
                error!(slf, NestedComment);
                reconsume_in!(slf, c, CommentEnd)
            }
        },
        MachineState::CommentEndDash => match slf.read_char() {
            Some('-') => switch_to!(slf, CommentEnd),
            None => {
                error!(slf, EofInComment);
                slf.emitter.emit_current_comment();
                eof!()
            }
            c => {
                slf.emitter.push_comment("-");
                reconsume_in!(slf, c, Comment)
            }
        },
        MachineState::CommentEnd => match slf.read_char() {
            Some('>') => {
                slf.emitter.emit_current_comment();
                switch_to!(slf, Data)
            }
            Some('!') => switch_to!(slf, CommentEndBang),
            Some('-') => {
                slf.emitter.push_comment("-");
                cont!()
            }
            None => {
                error!(slf, EofInComment);
                slf.emitter.emit_current_comment();
                eof!()
            }
            c @ Some(_) => {
                slf.emitter.push_comment("--");
                reconsume_in!(slf, c, Comment)
            }
        },
        MachineState::CommentEndBang => match slf.read_char() {
            Some('-') => {
                slf.emitter.push_comment("--!");
                switch_to!(slf, CommentEndDash)
            }
            Some('>') => {
                error!(slf, IncorrectlyClosedComment);
                slf.emitter.emit_current_comment();
                switch_to!(slf, Data)
            }
            None => {
                error!(slf, EofInComment);
                slf.emitter.emit_current_comment();
                eof!()
            }
            c @ Some(_) => {
                slf.emitter.push_comment("--!");
                reconsume_in!(slf, c, Comment)
            }
        },
        MachineState::Doctype => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => switch_to!(slf, BeforeDoctypeName),
            c @ Some('>') => reconsume_in!(slf, c, BeforeDoctypeName),
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.init_doctype();
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
            c @ Some(_) => {
                error!(slf, MissingWhitespaceBeforeDoctypeName);
                reconsume_in!(slf, c, BeforeDoctypeName)
            }
        },
        MachineState::BeforeDoctypeName => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => cont!(),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.init_doctype();
                slf.emitter.push_doctype_name("\u{fffd}");
                switch_to!(slf, DoctypeName)
            }
            Some('>') => {
                error!(slf, MissingDoctypeName);
                slf.emitter.init_doctype();
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.init_doctype();
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
            Some(x) => {
                slf.emitter.init_doctype();
                slf.emitter
                    .push_doctype_name(ctostr!(x.to_ascii_lowercase()));
                switch_to!(slf, DoctypeName)
            }
        },
        MachineState::DoctypeName => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => switch_to!(slf, AfterDoctypeName),
            Some('>') => {
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.push_doctype_name("\u{fffd}");
                cont!()
            }
            Some(x) => {
                slf.emitter
                    .push_doctype_name(ctostr!(x.to_ascii_lowercase()));
                cont!()
            }
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
        },
        MachineState::AfterDoctypeName => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => cont!(),
            Some('>') => {
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
            Some(x @ ('p' | 'P')) => {
                if slf.try_read_string("ublic", false) {
                    switch_to!(slf, AfterDoctypePublicKeyword)
                } else {
                    error!(slf, InvalidCharacterSequenceAfterDoctypeName);
                    slf.emitter.set_force_quirks();
                    reconsume_in!(slf, Some(x), BogusDoctype)
                }
            }
            Some(x @ ('s' | 'S')) => {
                if slf.try_read_string("ystem", false) {
                    switch_to!(slf, AfterDoctypeSystemKeyword)
                } else {
                    error!(slf, InvalidCharacterSequenceAfterDoctypeName);
                    slf.emitter.set_force_quirks();
                    reconsume_in!(slf, Some(x), BogusDoctype)
                }
            }
            c @ Some(_) => {
                error!(slf, InvalidCharacterSequenceAfterDoctypeName);
                slf.emitter.set_force_quirks();
                reconsume_in!(slf, c, BogusDoctype)
            }
        },
        MachineState::AfterDoctypePublicKeyword => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => switch_to!(slf, BeforeDoctypePublicIdentifier),
            Some('"') => {
                error!(slf, MissingWhitespaceAfterDoctypePublicKeyword);
                slf.emitter.set_doctype_public_identifier("");
                switch_to!(slf, DoctypePublicIdentifierDoubleQuoted)
            }
            Some('\'') => {
                error!(slf, MissingWhitespaceAfterDoctypePublicKeyword);
                slf.emitter.set_doctype_public_identifier("");
                switch_to!(slf, DoctypePublicIdentifierSingleQuoted)
            }
            Some('>') => {
                error!(slf, MissingDoctypePublicIdentifier);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
            c @ Some(_) => {
                error!(slf, MissingQuoteBeforeDoctypePublicIdentifier);
                slf.emitter.set_force_quirks();
                reconsume_in!(slf, c, BogusDoctype)
            }
        },
        MachineState::BeforeDoctypePublicIdentifier => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => cont!(),
            Some('"') => {
                slf.emitter.set_doctype_public_identifier("");
                switch_to!(slf, DoctypePublicIdentifierDoubleQuoted)
            }
            Some('\'') => {
                slf.emitter.set_doctype_public_identifier("");
                switch_to!(slf, DoctypePublicIdentifierSingleQuoted)
            }
            Some('>') => {
                error!(slf, MissingDoctypePublicIdentifier);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
            c @ Some(_) => {
                error!(slf, MissingQuoteBeforeDoctypePublicIdentifier);
                slf.emitter.set_force_quirks();
                reconsume_in!(slf, c, BogusDoctype)
            }
        },
        MachineState::DoctypePublicIdentifierDoubleQuoted => match slf.read_char() {
            Some('"') => switch_to!(slf, AfterDoctypePublicIdentifier),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.push_doctype_public_identifier("\u{fffd}");
                cont!()
            }
            Some('>') => {
                error!(slf, AbruptDoctypePublicIdentifier);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            Some(x) => {
                slf.emitter.push_doctype_public_identifier(ctostr!(x));
                cont!()
            }
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
        },
        MachineState::DoctypePublicIdentifierSingleQuoted => match slf.read_char() {
            Some('\'') => switch_to!(slf, AfterDoctypePublicIdentifier),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.push_doctype_public_identifier("\u{fffd}");
                cont!()
            }
            Some('>') => {
                error!(slf, AbruptDoctypePublicIdentifier);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            Some(x) => {
                slf.emitter.push_doctype_public_identifier(ctostr!(x));
                cont!()
            }
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
        },
        MachineState::AfterDoctypePublicIdentifier => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => {
                switch_to!(slf, BetweenDoctypePublicAndSystemIdentifiers)
            }
            Some('>') => {
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            Some('"') => {
                error!(slf, MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers);
                slf.emitter.set_doctype_system_identifier("");
                switch_to!(slf, DoctypeSystemIdentifierDoubleQuoted)
            }
            Some('\'') => {
                error!(slf, MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers);
                slf.emitter.set_doctype_system_identifier("");
                switch_to!(slf, DoctypeSystemIdentifierSingleQuoted)
            }
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
            c @ Some(_) => {
                error!(slf, MissingQuoteBeforeDoctypeSystemIdentifier);
                slf.emitter.set_force_quirks();
                reconsume_in!(slf, c, BogusDoctype)
            }
        },
        MachineState::BetweenDoctypePublicAndSystemIdentifiers => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => cont!(),
            Some('>') => {
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            Some('"') => {
                slf.emitter.set_doctype_system_identifier("");
                switch_to!(slf, DoctypeSystemIdentifierDoubleQuoted)
            }
            Some('\'') => {
                slf.emitter.set_doctype_system_identifier("");
                switch_to!(slf, DoctypeSystemIdentifierSingleQuoted)
            }
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
            c @ Some(_) => {
                error!(slf, MissingQuoteBeforeDoctypeSystemIdentifier);
                slf.emitter.set_force_quirks();
                reconsume_in!(slf, c, BogusDoctype)
            }
        },
        MachineState::AfterDoctypeSystemKeyword => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => switch_to!(slf, BeforeDoctypeSystemIdentifier),
            Some('"') => {
                error!(slf, MissingWhitespaceAfterDoctypeSystemKeyword);
                slf.emitter.set_doctype_system_identifier("");
                switch_to!(slf, DoctypeSystemIdentifierDoubleQuoted)
            }
            Some('\'') => {
                error!(slf, MissingWhitespaceAfterDoctypeSystemKeyword);
                slf.emitter.set_doctype_system_identifier("");
                switch_to!(slf, DoctypeSystemIdentifierSingleQuoted)
            }
            Some('>') => {
                error!(slf, MissingDoctypeSystemIdentifier);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
            c @ Some(_) => {
                error!(slf, MissingQuoteBeforeDoctypeSystemIdentifier);
                slf.emitter.set_force_quirks();
                reconsume_in!(slf, c, BogusDoctype)
            }
        },
        MachineState::BeforeDoctypeSystemIdentifier => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => cont!(),
            Some('"') => {
                slf.emitter.set_doctype_system_identifier("");
                switch_to!(slf, DoctypeSystemIdentifierDoubleQuoted)
            }
            Some('\'') => {
                slf.emitter.set_doctype_system_identifier("");
                switch_to!(slf, DoctypeSystemIdentifierSingleQuoted)
            }
            Some('>') => {
                error!(slf, MissingDoctypeSystemIdentifier);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
            c @ Some(_) => {
                error!(slf, MissingQuoteBeforeDoctypeSystemIdentifier);
                slf.emitter.set_force_quirks();
                reconsume_in!(slf, c, BogusDoctype)
            }
        },
        MachineState::DoctypeSystemIdentifierDoubleQuoted => match slf.read_char() {
            Some('"') => switch_to!(slf, AfterDoctypeSystemIdentifier),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.push_doctype_system_identifier("\u{fffd}");
                cont!()
            }
            Some('>') => {
                error!(slf, AbruptDoctypeSystemIdentifier);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            Some(x) => {
                slf.emitter.push_doctype_system_identifier(ctostr!(x));
                cont!()
            }
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
        },
        MachineState::DoctypeSystemIdentifierSingleQuoted => match slf.read_char() {
            Some('\'') => switch_to!(slf, AfterDoctypeSystemIdentifier),
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                slf.emitter.push_doctype_system_identifier("\u{fffd}");
                cont!()
            }
            Some('>') => {
                error!(slf, AbruptDoctypeSystemIdentifier);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            Some(x) => {
                slf.emitter.push_doctype_system_identifier(ctostr!(x));
                cont!()
            }
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
        },
        MachineState::AfterDoctypeSystemIdentifier => match slf.read_char() {
            Some('\t' | '\n' | '\u{c}' | ' ') => cont!(),
            Some('>') => {
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            None => {
                error!(slf, EofInDoctype);
                slf.emitter.set_force_quirks();
                slf.emitter.emit_current_doctype();
                eof!()
            }
            c @ Some(_) => {
                error!(slf, UnexpectedCharacterAfterDoctypeSystemIdentifier);
                reconsume_in!(slf, c, BogusDoctype)
            }
        },
        MachineState::BogusDoctype => match slf.read_char() {
            Some('>') => {
                slf.emitter.emit_current_doctype();
                switch_to!(slf, Data)
            }
            Some('\0') => {
                error!(slf, UnexpectedNullCharacter);
                cont!()
            }
            Some(_) => cont!(),
            None => {
                slf.emitter.emit_current_doctype();
                eof!()
            }
        },
        MachineState::CdataSection => match slf.read_char() {
            Some(']') => switch_to!(slf, CdataSectionBracket),
            Some(x) => {
                slf.emitter.emit_string(ctostr!(x));
                cont!()
            }
            None => {
                error!(slf, EofInCdata);
                eof!()
            }
        },
        MachineState::CdataSectionBracket => match slf.read_char() {
            Some(']') => switch_to!(slf, CdataSectionEnd),
            c => {
                slf.emitter.emit_string("]");
                reconsume_in!(slf, c, CdataSection)
            }
        },
        MachineState::CdataSectionEnd => match slf.read_char() {
            Some(']') => {
                slf.emitter.emit_string("]");
                cont!()
            }
            Some('>') => switch_to!(slf, Data),
            c => {
                slf.emitter.emit_string("]]");
                reconsume_in!(slf, c, CdataSection)
            }
        },
        MachineState::CharacterReference => {
            slf.temporary_buffer.clear();
            slf.temporary_buffer.push('&');

            match slf.read_char() {
                Some(x) if x.is_ascii_alphanumeric() => {
                    reconsume_in!(slf, Some(x), NamedCharacterReference)
                }
                Some('#') => {
                    slf.temporary_buffer.push('#');
                    switch_to!(slf, NumericCharacterReference)
                }
                c => {
                    slf.flush_code_points_consumed_as_character_reference();
                    reconsume_in_return_state!(slf, c)
                }
            }
        }
        MachineState::NamedCharacterReference => {
            let c = slf.read_char();

            let char_ref = match c {
                Some(x) => try_read_character_reference(x, |rest| slf.try_read_string(rest, true)),
                None => None,
            };

            if let Some(char_ref) = char_ref {
                let ends_with_semicolon = char_ref.name.ends_with(';');
                let next_character = slf.read_char();

                if !slf.is_consumed_as_part_of_an_attribute()
                    || ends_with_semicolon
                    || !matches!(next_character, Some(x) if x == '=' || x.is_ascii_alphanumeric())
                {
                    if !ends_with_semicolon {
                        error!(slf, MissingSemicolonAfterCharacterReference);
                    }

                    slf.temporary_buffer.clear();
                    slf.temporary_buffer.push_str(char_ref.characters);
                } else {
                    // legacy behavior: `&not` followed by `=` or alphanumerics inside an
                    // attribute value stays literal text
                    slf.temporary_buffer.clear();
                    slf.temporary_buffer.push('&');
                    slf.temporary_buffer.push_str(char_ref.name);
                }

                slf.flush_code_points_consumed_as_character_reference();
                reconsume_in_return_state!(slf, next_character)
            } else {
                slf.flush_code_points_consumed_as_character_reference();
                reconsume_in!(slf, c, AmbiguousAmpersand)
            }
        }
        MachineState::AmbiguousAmpersand => match slf.read_char() {
            Some(x) if x.is_ascii_alphanumeric() => {
                if slf.is_consumed_as_part_of_an_attribute() {
                    slf.emitter.push_attribute_value(ctostr!(x));
                } else {
                    slf.emitter.emit_string(ctostr!(x));
                }
                cont!()
            }
            c @ Some(';') => {
                error!(slf, UnknownNamedCharacterReference);
                reconsume_in_return_state!(slf, c)
            }
            c => reconsume_in_return_state!(slf, c),
        },
        MachineState::NumericCharacterReference => {
            slf.character_reference_code = 0;

            match slf.read_char() {
                Some(x @ ('x' | 'X')) => {
                    slf.temporary_buffer.push(x);
                    switch_to!(slf, HexadecimalCharacterReferenceStart)
                }
                Some(x @ '0'..='9') => reconsume_in!(slf, Some(x), DecimalCharacterReference),
                c => {
                    error!(slf, AbsenceOfDigitsInNumericCharacterReference);
                    slf.flush_code_points_consumed_as_character_reference();
                    reconsume_in_return_state!(slf, c)
                }
            }
        }
        MachineState::HexadecimalCharacterReferenceStart => match slf.read_char() {
            c @ Some('0'..='9' | 'A'..='F' | 'a'..='f') => {
                reconsume_in!(slf, c, HexadecimalCharacterReference)
            }
            c => {
                error!(slf, AbsenceOfDigitsInNumericCharacterReference);
                slf.flush_code_points_consumed_as_character_reference();
                reconsume_in_return_state!(slf, c)
            }
        },
        MachineState::HexadecimalCharacterReference => match slf.read_char() {
            Some(x @ '0'..='9') => {
                mutate_character_reference!(slf, *16 + x - 0x0030);
                cont!()
            }
            Some(x @ 'A'..='F') => {
                mutate_character_reference!(slf, *16 + x - 0x0037);
                cont!()
            }
            Some(x @ 'a'..='f') => {
                mutate_character_reference!(slf, *16 + x - 0x0057);
                cont!()
            }
            Some(';') => switch_to!(slf, NumericCharacterReferenceEnd),
            c => {
                error!(slf, MissingSemicolonAfterCharacterReference);
                reconsume_in!(slf, c, NumericCharacterReferenceEnd)
            }
        },
        MachineState::DecimalCharacterReference => match slf.read_char() {
            Some(x @ '0'..='9') => {
                mutate_character_reference!(slf, *10 + x - 0x0030);
                cont!()
            }
            Some(';') => switch_to!(slf, NumericCharacterReferenceEnd),
            c => {
                error!(slf, MissingSemicolonAfterCharacterReference);
                reconsume_in!(slf, c, NumericCharacterReferenceEnd)
            }
        },
        MachineState::NumericCharacterReferenceEnd => {
            match slf.character_reference_code {
                0x00 => {
                    error!(slf, NullCharacterReference);
                    slf.character_reference_code = 0xfffd;
                }
                0x0011_0000.. => {
                    error!(slf, CharacterReferenceOutsideUnicodeRange);
                    slf.character_reference_code = 0xfffd;
                }
                0xd800..=0xdfff => {
                    error!(slf, SurrogateCharacterReference);
                    slf.character_reference_code = 0xfffd;
                }
                0xfdd0..=0xfdef => {
                    error!(slf, NoncharacterCharacterReference);
                }
                x if x & 0xfffe == 0xfffe => {
                    error!(slf, NoncharacterCharacterReference);
                }
                // a control that is not whitespace
                x @ (0x0d | 0x0000..=0x001f | 0x007f..=0x009f)
                    if !matches!(x, 0x0009 | 0x000a | 0x000c | 0x0020) =>
                {
                    error!(slf, ControlCharacterReference);
                    slf.character_reference_code = match x {
                        // windows-1252 mappings for the C1 range
                        0x80 => 0x20ac, // EURO SIGN
                        0x82 => 0x201a, // SINGLE LOW-9 QUOTATION MARK
                        0x83 => 0x0192, // LATIN SMALL LETTER F WITH HOOK
                        0x84 => 0x201e, // DOUBLE LOW-9 QUOTATION MARK
                        0x85 => 0x2026, // HORIZONTAL ELLIPSIS
                        0x86 => 0x2020, // DAGGER
                        0x87 => 0x2021, // DOUBLE DAGGER
                        0x88 => 0x02c6, // MODIFIER LETTER CIRCUMFLEX ACCENT
                        0x89 => 0x2030, // PER MILLE SIGN
                        0x8a => 0x0160, // LATIN CAPITAL LETTER S WITH CARON
                        0x8b => 0x2039, // SINGLE LEFT-POINTING ANGLE QUOTATION MARK
                        0x8c => 0x0152, // LATIN CAPITAL LIGATURE OE
                        0x8e => 0x017d, // LATIN CAPITAL LETTER Z WITH CARON
                        0x91 => 0x2018, // LEFT SINGLE QUOTATION MARK
                        0x92 => 0x2019, // RIGHT SINGLE QUOTATION MARK
                        0x93 => 0x201c, // LEFT DOUBLE QUOTATION MARK
                        0x94 => 0x201d, // RIGHT DOUBLE QUOTATION MARK
                        0x95 => 0x2022, // BULLET
                        0x96 => 0x2013, // EN DASH
                        0x97 => 0x2014, // EM DASH
                        0x98 => 0x02dc, // SMALL TILDE
                        0x99 => 0x2122, // TRADE MARK SIGN
                        0x9a => 0x0161, // LATIN SMALL LETTER S WITH CARON
                        0x9b => 0x203a, // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
                        0x9c => 0x0153, // LATIN SMALL LIGATURE OE
                        0x9e => 0x017e, // LATIN SMALL LETTER Z WITH CARON
                        0x9f => 0x0178, // LATIN CAPITAL LETTER Y WITH DIAERESIS
                        _ => slf.character_reference_code,
                    };
                }
                _ => (),
            }

            slf.temporary_buffer.clear();
            let c = std::char::from_u32(slf.character_reference_code)
                .expect("character reference code was validated above");
            slf.temporary_buffer.push(c);
            slf.flush_code_points_consumed_as_character_reference();
            exit_state!(slf)
        }
    }
}
