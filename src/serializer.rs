//! Serialize a document tree back to HTML text, per [the serialization
//! algorithm](https://html.spec.whatwg.org/#serialising-html-fragments).
//!
//! Re-parsing the serializer's output yields the same tree, which is what the round-trip
//! tests check. No attempt is made to preserve the original source text.

use crate::dom::{Document, Element, Namespace, Node};

/// Elements with no closing tag and no children.
fn is_void(local: &str) -> bool {
    matches!(
        local,
        "area" | "base" | "basefont" | "bgsound" | "br" | "col" | "embed" | "frame" | "hr"
            | "img" | "input" | "keygen" | "link" | "meta" | "param" | "source" | "track"
            | "wbr"
    )
}

/// Elements whose text children are written without escaping.
fn is_rawtext(local: &str) -> bool {
    matches!(
        local,
        "style" | "script" | "xmp" | "iframe" | "noembed" | "noframes" | "plaintext"
    )
}

/// Serialize a whole document, including its doctype.
pub fn serialize(document: &Document) -> String {
    let mut out = String::new();
    if let Some(doctype) = &document.doctype {
        out.push_str("<!DOCTYPE ");
        out.push_str(&doctype.name);
        out.push('>');
    }
    for node in &document.children {
        serialize_node(&mut out, node, false);
    }
    out
}

/// Serialize a list of nodes, as produced by fragment parsing.
pub fn serialize_fragment(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        serialize_node(&mut out, node, false);
    }
    out
}

fn serialize_node(out: &mut String, node: &Node, raw_text: bool) {
    match node {
        Node::Text(text) => {
            if raw_text {
                out.push_str(text);
            } else {
                escape_text(out, text);
            }
        }
        Node::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        Node::Element(element) => serialize_element(out, element),
    }
}

fn serialize_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.name.local);
    for attr in element.attrs.iter() {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        escape_attr(out, &attr.value);
        out.push('"');
    }
    out.push('>');

    let html = element.name.ns == Namespace::Html;
    if html && is_void(&element.name.local) {
        return;
    }

    let raw_text = html && is_rawtext(&element.name.local);
    for child in &element.children {
        serialize_node(out, child, raw_text);
    }

    out.push_str("</");
    out.push_str(&element.name.local);
    out.push('>');
}

fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

fn escape_attr(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::AttrList;
    use crate::dom::TagName;

    fn elem(local: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Node {
        Node::Element(Element {
            name: TagName {
                ns: Namespace::Html,
                local: local.to_owned(),
            },
            attrs: attrs
                .iter()
                .map(|&(k, v)| (k.to_owned(), v.to_owned()))
                .collect::<AttrList>(),
            children,
        })
    }

    #[test]
    fn escapes_text_and_attributes() {
        let tree = vec![elem(
            "p",
            &[("title", "a\"b & c")],
            vec![Node::Text("x < y & z".into())],
        )];
        assert_eq!(
            serialize_fragment(&tree),
            "<p title=\"a&quot;b &amp; c\">x &lt; y &amp; z</p>"
        );
    }

    #[test]
    fn void_elements_have_no_end_tag() {
        let tree = vec![elem("br", &[], vec![])];
        assert_eq!(serialize_fragment(&tree), "<br>");
    }

    #[test]
    fn rawtext_is_not_escaped() {
        let tree = vec![elem("style", &[], vec![Node::Text("a < b".into())])];
        assert_eq!(serialize_fragment(&tree), "<style>a < b</style>");
    }
}
