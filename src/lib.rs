#![deny(missing_docs)]
// This is an HTML parser. HTML can be untrusted input from the internet.
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod attr;
mod dom;
mod emitter;
pub mod encoding;
mod entities;
mod error;
mod machine;
mod reader;
mod serializer;
mod tokenizer;
mod tree_builder;

pub use attr::{AttrList, AttrNamespace, Attribute};
pub use dom::{Document, Element, Namespace, Node, QuirksMode, TagName};
pub use emitter::{DefaultEmitter, Doctype, Emitter, EndTag, StartTag, Token};
pub use error::Error;
pub use reader::{Readable, Reader, StringReader};
pub use serializer::{serialize, serialize_fragment};
pub use tokenizer::{State, Tokenizer, TokenizerOpts};

use tree_builder::TreeBuilder;

/// Options for a document or fragment parse.
#[derive(Clone, Debug, Default)]
pub struct ParseOpts {
    /// An encoding label to use for byte input instead of running the prescan, e.g. from a
    /// `Content-Type` header. Ignored by the `&str` entry points.
    pub encoding_hint: Option<String>,

    /// Coerce tokenizer output to be representable as an XML 1.0 infoset. See
    /// [`TokenizerOpts::xml_violation_compat`].
    pub xml_violation_compat: bool,
}

/// The context element for fragment parsing.
///
/// It determines the initial insertion mode and tokenizer state, and acts as the root of
/// scope walks, but never appears in the output.
#[derive(Clone, Debug)]
pub struct FragmentContext {
    /// The context element's namespace.
    pub ns: Namespace,
    /// The context element's local name.
    pub local: String,
    /// The context element's attributes. Only consulted for `annotation-xml` integration
    /// point checks.
    pub attrs: AttrList,
}

impl FragmentContext {
    /// A context element in the given namespace.
    pub fn new(ns: Namespace, local: impl Into<String>) -> FragmentContext {
        FragmentContext {
            ns,
            local: local.into(),
            attrs: AttrList::new(),
        }
    }

    /// An HTML context element, the common case.
    pub fn html(local: impl Into<String>) -> FragmentContext {
        FragmentContext::new(Namespace::Html, local)
    }
}

/// Parse a complete HTML document from a string.
///
/// This never fails: any input produces a valid tree, with parse errors recovered from
/// according to the WHATWG rules and counted on the returned [`Document`].
pub fn parse_document(input: &str, opts: ParseOpts) -> Document {
    let tokenizer = Tokenizer::new_with_opts(
        input,
        TokenizerOpts {
            xml_violation_compat: opts.xml_violation_compat,
            ..TokenizerOpts::default()
        },
    );
    let mut tree_builder = TreeBuilder::new(tokenizer);
    tree_builder.run();
    tree_builder.into_document()
}

/// Parse a complete HTML document from bytes.
///
/// The encoding is taken from `opts.encoding_hint` if given, otherwise sniffed from the
/// BOM and the first 1024 bytes (`<meta charset>`), falling back to windows-1252.
pub fn parse_bytes(input: &[u8], opts: ParseOpts) -> Document {
    let label = opts
        .encoding_hint
        .as_deref()
        .and_then(encoding::canonical_label)
        .unwrap_or_else(|| encoding::sniff(input));

    let input = if label == "utf-8" {
        encoding::strip_bom(input)
    } else {
        input
    };

    let decoded = encoding::decode(input, label);
    let decoded = decoded.strip_prefix('\u{feff}').unwrap_or(&decoded);
    parse_document(decoded, opts)
}

/// Parse an HTML fragment in the given context, as `innerHTML` does.
///
/// The result is the list of top-level nodes, without a surrounding
/// `html`/`head`/`body` scaffold.
pub fn parse_fragment(input: &str, context: &FragmentContext, opts: ParseOpts) -> Vec<Node> {
    let tokenizer = Tokenizer::new_with_opts(
        input,
        TokenizerOpts {
            xml_violation_compat: opts.xml_violation_compat,
            ..TokenizerOpts::default()
        },
    );
    let mut tree_builder = TreeBuilder::new_for_fragment(tokenizer, context);
    tree_builder.run();
    tree_builder.into_fragment()
}
