//! Direct tests of the token stream, including error tokens and content-model switching.

use html5tree::{Doctype, EndTag, Error, StartTag, State, Token, Tokenizer, TokenizerOpts};
use pretty_assertions::assert_eq;

fn tokens(input: &str) -> Vec<Token> {
    Tokenizer::new(input).collect()
}

/// Like [`tokens`], with error tokens and the final EOF stripped.
fn data_tokens(input: &str) -> Vec<Token> {
    tokens(input)
        .into_iter()
        .filter(|t| !matches!(t, Token::Error(_) | Token::Eof))
        .collect()
}

fn errors(input: &str) -> Vec<Error> {
    tokens(input)
        .into_iter()
        .filter_map(|t| match t {
            Token::Error(e) => Some(e),
            _ => None,
        })
        .collect()
}

fn start_tag(name: &str, attrs: &[(&str, &str)], self_closing: bool) -> Token {
    Token::StartTag(StartTag {
        name: name.to_owned(),
        attrs: attrs
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect(),
        self_closing,
    })
}

#[test]
fn characters_are_coalesced() {
    assert_eq!(
        data_tokens("one&amp;two"),
        vec![Token::Character("one&two".to_owned())]
    );
}

#[test]
fn tag_names_and_attributes_are_lowercased() {
    assert_eq!(
        data_tokens("<DiV CLASS=Mixed>"),
        vec![start_tag("div", &[("class", "Mixed")], false)]
    );
}

#[test]
fn attribute_value_styles() {
    assert_eq!(
        data_tokens("<a one=1 two='2' three=\"3\" four>"),
        vec![start_tag(
            "a",
            &[("one", "1"), ("two", "2"), ("three", "3"), ("four", "")],
            false
        )]
    );
}

#[test]
fn duplicate_attribute_is_an_error_and_dropped() {
    assert_eq!(
        data_tokens("<p id=a id=b>"),
        vec![start_tag("p", &[("id", "a")], false)]
    );
    assert_eq!(errors("<p id=a id=b>"), vec![Error::DuplicateAttribute]);
}

#[test]
fn self_closing_flag() {
    assert_eq!(
        data_tokens("<br/>"),
        vec![start_tag("br", &[], true)]
    );
}

#[test]
fn end_tag_with_attributes_is_an_error() {
    assert_eq!(
        data_tokens("</p class=x>"),
        vec![Token::EndTag(EndTag {
            name: "p".to_owned()
        })]
    );
    assert_eq!(errors("</p class=x>"), vec![Error::EndTagWithAttributes]);
}

#[test]
fn comment_token() {
    assert_eq!(
        data_tokens("<!-- hi -->"),
        vec![Token::Comment(" hi ".to_owned())]
    );
}

#[test]
fn bogus_comment_from_markup_declaration() {
    assert_eq!(
        data_tokens("<!whatever>"),
        vec![Token::Comment("whatever".to_owned())]
    );
    assert_eq!(errors("<!whatever>"), vec![Error::IncorrectlyOpenedComment]);
}

#[test]
fn doctype_with_identifiers() {
    assert_eq!(
        data_tokens("<!DOCTYPE html PUBLIC \"pub\" 'sys'>"),
        vec![Token::Doctype(Doctype {
            name: "html".to_owned(),
            public_id: Some("pub".to_owned()),
            system_id: Some("sys".to_owned()),
            force_quirks: false,
        })]
    );
}

#[test]
fn eof_in_tag_discards_the_tag() {
    assert_eq!(tokens("<div foo"), vec![
        Token::Error(Error::EofInTag),
        Token::Eof,
    ]);
}

#[test]
fn eof_in_comment_still_emits_it() {
    assert_eq!(tokens("<!--x"), vec![
        Token::Error(Error::EofInComment),
        Token::Comment("x".to_owned()),
        Token::Eof,
    ]);
}

#[test]
fn null_in_data_passes_through_with_error() {
    assert_eq!(
        data_tokens("a\u{0}b"),
        vec![Token::Character("a\u{0}b".to_owned())]
    );
    assert_eq!(errors("a\u{0}b"), vec![Error::UnexpectedNullCharacter]);
}

#[test]
fn numeric_reference_replacements() {
    // out of range, surrogate, null, and a windows-1252 C1 remap
    assert_eq!(
        data_tokens("&#x110000;&#xD800;&#0;&#x80;"),
        vec![Token::Character("\u{fffd}\u{fffd}\u{fffd}\u{20ac}".to_owned())]
    );
}

#[test]
fn ambiguous_ampersand() {
    assert_eq!(
        data_tokens("a &xyzzy; b"),
        vec![Token::Character("a &xyzzy; b".to_owned())]
    );
    assert_eq!(
        errors("a &xyzzy; b"),
        vec![Error::UnknownNamedCharacterReference]
    );
}

#[test]
fn rcdata_state_with_last_start_tag() {
    let opts = TokenizerOpts {
        initial_state: Some(State::RcData),
        last_start_tag: Some("title".to_owned()),
        ..TokenizerOpts::default()
    };
    let tokens: Vec<Token> = Tokenizer::new_with_opts("x<b></title>", opts).collect();
    assert_eq!(
        tokens,
        vec![
            Token::Character("x<b>".to_owned()),
            Token::EndTag(EndTag {
                name: "title".to_owned()
            }),
            Token::Eof,
        ]
    );
}

#[test]
fn script_data_escapes() {
    // resume inside <script>, the way the tree builder drives the tokenizer
    let opts = TokenizerOpts {
        initial_state: Some(State::ScriptData),
        last_start_tag: Some("script".to_owned()),
        ..TokenizerOpts::default()
    };
    let tokens: Vec<Token> = Tokenizer::new_with_opts("<!--<script>x</script>--></script>", opts)
        .filter(|t| !matches!(t, Token::Error(_) | Token::Eof))
        .collect();
    assert_eq!(
        tokens,
        vec![
            Token::Character("<!--<script>x</script>-->".to_owned()),
            Token::EndTag(EndTag {
                name: "script".to_owned()
            }),
        ]
    );
}

#[test]
fn cdata_is_a_bogus_comment_in_html_content() {
    assert_eq!(
        data_tokens("<![CDATA[x]]>"),
        vec![Token::Comment("[CDATA[x]]".to_owned())]
    );
    assert_eq!(errors("<![CDATA[x]]>"), vec![Error::CdataInHtmlContent]);
}

#[test]
fn carriage_returns_are_normalized() {
    assert_eq!(
        data_tokens("a\r\nb\rc"),
        vec![Token::Character("a\nb\nc".to_owned())]
    );
}

#[test]
fn xml_violation_compat_coerces_output() {
    let opts = TokenizerOpts {
        xml_violation_compat: true,
        ..TokenizerOpts::default()
    };
    let tokens: Vec<Token> = Tokenizer::new_with_opts("a\u{c}b", opts)
        .filter(|t| !matches!(t, Token::Error(_)))
        .collect();
    assert_eq!(tokens, vec![Token::Character("a b".to_owned()), Token::Eof]);
}
