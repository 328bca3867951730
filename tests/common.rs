//! Shared helpers for the tree tests: dump parsed trees in the html5lib-tests
//! `tree-construction` text format.

use html5tree::{Document, Namespace, Node};

pub fn dump_document(doc: &Document) -> String {
    let mut out = String::new();
    if let Some(doctype) = &doc.doctype {
        let mut line = format!("<!DOCTYPE {}", doctype.name);
        if doctype.public_id.is_some() || doctype.system_id.is_some() {
            line.push_str(&format!(
                " \"{}\" \"{}\"",
                doctype.public_id.clone().unwrap_or_default(),
                doctype.system_id.clone().unwrap_or_default()
            ));
        }
        line.push('>');
        push_line(&mut out, 0, &line);
    }
    for node in &doc.children {
        dump_node(&mut out, node, 0);
    }
    out
}

pub fn dump_fragment(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        dump_node(&mut out, node, 0);
    }
    out
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    out.push_str("| ");
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(text);
    out.push('\n');
}

fn dump_node(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::Text(text) => push_line(out, depth, &format!("\"{}\"", text)),
        Node::Comment(text) => push_line(out, depth, &format!("<!-- {} -->", text)),
        Node::Element(element) => {
            let name = match element.name.ns {
                Namespace::Html => element.name.local.clone(),
                Namespace::Svg => format!("svg {}", element.name.local),
                Namespace::MathMl => format!("math {}", element.name.local),
            };
            push_line(out, depth, &format!("<{}>", name));

            let mut attrs: Vec<(String, &str)> = element
                .attrs
                .iter()
                .map(|attr| {
                    // namespaced attributes print with a space in the reference format:
                    // `xlink href="..."`
                    let name = match attr.prefix() {
                        Some(prefix) => format!("{} {}", prefix, attr.local()),
                        None => attr.name.clone(),
                    };
                    (name, attr.value.as_str())
                })
                .collect();
            attrs.sort();
            for (name, value) in attrs {
                push_line(out, depth + 1, &format!("{}=\"{}\"", name, value));
            }

            let mut child_depth = depth + 1;
            if element.name.ns == Namespace::Html && element.name.local == "template" {
                push_line(out, depth + 1, "content");
                child_depth += 1;
            }
            for child in &element.children {
                dump_node(out, child, child_depth);
            }
        }
    }
}

