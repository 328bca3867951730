//! The document model: an arena of element records keyed by stable identifiers.
//!
//! The tree exists twice during parsing: once here, parent-indexed, and once as the open
//! elements stack, which holds only identifiers. Children lists hold identifiers or inline
//! text/comment literals, so the adoption agency can re-parent subtrees by rewriting a
//! handful of indices without ever cloning nodes or creating cycles.

use crate::attr::AttrList;
use crate::Doctype;

/// Element namespaces the parser distinguishes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Namespace {
    /// The HTML namespace.
    Html,
    /// The SVG namespace.
    Svg,
    /// The MathML namespace.
    MathMl,
}

/// A qualified tag name: a namespace and a local name.
///
/// HTML tag names are ASCII-lowercased by the tokenizer; foreign local names keep the case
/// fixups applied by the tree builder (`foreignObject` and friends).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TagName {
    /// The element's namespace.
    pub ns: Namespace,
    /// The local name.
    pub local: String,
}

impl TagName {
    pub(crate) fn html(local: impl Into<String>) -> TagName {
        TagName {
            ns: Namespace::Html,
            local: local.into(),
        }
    }

    /// True for an HTML element with this local name.
    pub(crate) fn is_html(&self, local: &str) -> bool {
        self.ns == Namespace::Html && self.local == local
    }

    /// `(namespace, local name)` view, for tag-set predicates.
    pub(crate) fn expanded(&self) -> (Namespace, &str) {
        (self.ns, &self.local)
    }
}

/// An opaque identifier for an element in the store.
///
/// Identifiers are never reused; elements live for the whole parse even after they are
/// popped or re-parented.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The document node. Always present, created by [`Store::new`].
    pub(crate) const DOCUMENT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A child slot: an element reference or an inline leaf.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Child {
    Element(NodeId),
    Text(String),
    Comment(String),
}

/// One element record. The document node is an ordinary record with the pseudo tag name
/// `#document` so that insertion targets are uniform.
#[derive(Debug)]
pub(crate) struct ElementRecord {
    pub name: TagName,
    pub attrs: AttrList,
    pub parent: Option<NodeId>,
    /// Set when the element was inserted by foster parenting; the adoption agency uses it
    /// in place of `parent` to find the common ancestor.
    pub foster_parent: Option<NodeId>,
    pub children: Vec<Child>,
}

/// The element store. Owns every element created during a parse.
#[derive(Debug)]
pub(crate) struct Store {
    elems: Vec<ElementRecord>,
}

impl Store {
    pub fn new() -> Store {
        Store {
            elems: vec![ElementRecord {
                name: TagName::html("#document"),
                attrs: AttrList::new(),
                parent: None,
                foster_parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn get(&self, id: NodeId) -> &ElementRecord {
        &self.elems[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut ElementRecord {
        &mut self.elems[id.index()]
    }

    /// Create a detached element.
    pub fn create_element(&mut self, name: TagName, attrs: AttrList) -> NodeId {
        let id = NodeId(self.elems.len() as u32);
        self.elems.push(ElementRecord {
            name,
            attrs,
            parent: None,
            foster_parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Append an element as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, child: NodeId) {
        self.get_mut(child).parent = Some(parent);
        self.get_mut(parent).children.push(Child::Element(child));
    }

    /// Insert an element into `parent` immediately before the `before` element.
    pub fn insert_element_before(&mut self, parent: NodeId, child: NodeId, before: NodeId) {
        self.get_mut(child).parent = Some(parent);
        let pos = self.position_of(parent, before);
        self.get_mut(parent).children.insert(pos, Child::Element(child));
    }

    /// Append text as the last child of `parent`, merging with a trailing text sibling.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        match self.get_mut(parent).children.last_mut() {
            Some(Child::Text(existing)) => existing.push_str(text),
            _ => self.get_mut(parent).children.push(Child::Text(text.to_owned())),
        }
    }

    /// Insert text into `parent` immediately before the `before` element, merging with the
    /// text sibling directly before the insertion point if there is one.
    pub fn insert_text_before(&mut self, parent: NodeId, text: &str, before: NodeId) {
        let pos = self.position_of(parent, before);
        let children = &mut self.get_mut(parent).children;
        if pos > 0 {
            if let Child::Text(existing) = &mut children[pos - 1] {
                existing.push_str(text);
                return;
            }
        }
        children.insert(pos, Child::Text(text.to_owned()));
    }

    /// Append a comment as the last child of `parent`.
    pub fn append_comment(&mut self, parent: NodeId, text: String) {
        self.get_mut(parent).children.push(Child::Comment(text));
    }

    /// Insert a comment into `parent` immediately before the `before` element.
    pub fn insert_comment_before(&mut self, parent: NodeId, text: String, before: NodeId) {
        let pos = self.position_of(parent, before);
        self.get_mut(parent).children.insert(pos, Child::Comment(text));
    }

    /// Detach an element from its parent, if it has one. The record itself stays alive.
    pub fn remove_from_parent(&mut self, child: NodeId) {
        let Some(parent) = self.get(child).parent else {
            return;
        };
        let pos = self.position_of(parent, child);
        let removed = self.get_mut(parent).children.remove(pos);
        debug_assert_eq!(removed, Child::Element(child));
        self.get_mut(child).parent = None;
    }

    /// Move every child of `from` to the end of `to`, preserving order.
    pub fn move_children(&mut self, from: NodeId, to: NodeId) {
        let children = std::mem::take(&mut self.get_mut(from).children);
        for child in children {
            match child {
                Child::Element(id) => self.append_element(to, id),
                Child::Text(text) => self.append_text(to, &text),
                Child::Comment(text) => self.get_mut(to).children.push(Child::Comment(text)),
            }
        }
    }

    fn position_of(&self, parent: NodeId, child: NodeId) -> usize {
        self.get(parent)
            .children
            .iter()
            .position(|c| *c == Child::Element(child))
            .expect("child not found under parent")
    }

    /// Export a child slot as an owned output node.
    pub fn export(&self, child: &Child) -> Node {
        match child {
            Child::Text(text) => Node::Text(text.clone()),
            Child::Comment(text) => Node::Comment(text.clone()),
            Child::Element(id) => {
                let record = self.get(*id);
                Node::Element(Element {
                    name: record.name.clone(),
                    attrs: record.attrs.clone(),
                    children: record.children.iter().map(|c| self.export(c)).collect(),
                })
            }
        }
    }
}

/// How the document's doctype classifies under the WHATWG quirks rules.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuirksMode {
    /// Standards mode.
    NoQuirks,
    /// Limited-quirks ("almost standards") mode.
    LimitedQuirks,
    /// Quirks mode.
    Quirks,
}

/// An element of the output tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    /// The element's qualified tag name.
    pub name: TagName,
    /// The element's attributes, in first-occurrence order.
    pub attrs: AttrList,
    /// The element's children, in tree order.
    pub children: Vec<Node>,
}

/// A node of the output tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    /// An element with its subtree.
    Element(Element),
    /// A text node. Never adjacent to another text node under the same parent.
    Text(String),
    /// A comment.
    Comment(String),
}

impl Node {
    /// The element payload, if this node is an element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// A parsed document: the doctype, the top-level nodes, and what the parse observed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
    /// The doctype, if the input had one.
    pub doctype: Option<Doctype>,
    /// Top-level nodes in tree order. For a non-empty parse this is typically a single
    /// `html` element, possibly surrounded by comments.
    pub children: Vec<Node>,
    /// Quirks mode as determined by the doctype.
    pub quirks_mode: QuirksMode,
    /// Number of parse errors recovered from (tokenizer and tree construction combined).
    pub errors: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_p() -> (Store, NodeId) {
        let mut store = Store::new();
        let p = store.create_element(TagName::html("p"), AttrList::new());
        store.append_element(NodeId::DOCUMENT, p);
        (store, p)
    }

    #[test]
    fn text_is_coalesced_on_append() {
        let (mut store, p) = store_with_p();
        store.append_text(p, "foo");
        store.append_text(p, "bar");
        assert_eq!(store.get(p).children, vec![Child::Text("foobar".into())]);
    }

    #[test]
    fn text_is_coalesced_before_sibling() {
        let (mut store, p) = store_with_p();
        let table = store.create_element(TagName::html("table"), AttrList::new());
        store.append_text(p, "a");
        store.append_element(p, table);
        store.insert_text_before(p, "b", table);
        assert_eq!(
            store.get(p).children,
            vec![Child::Text("ab".into()), Child::Element(table)]
        );
    }

    #[test]
    fn remove_and_reappend_moves_subtree() {
        let (mut store, p) = store_with_p();
        let b = store.create_element(TagName::html("b"), AttrList::new());
        store.append_element(p, b);
        store.append_text(b, "x");

        store.remove_from_parent(b);
        assert!(store.get(p).children.is_empty());
        assert_eq!(store.get(b).parent, None);

        let div = store.create_element(TagName::html("div"), AttrList::new());
        store.append_element(p, div);
        store.append_element(div, b);
        assert_eq!(store.get(b).parent, Some(div));
    }

    #[test]
    fn move_children_preserves_order_and_merges_text() {
        let (mut store, p) = store_with_p();
        let span = store.create_element(TagName::html("span"), AttrList::new());
        store.append_element(NodeId::DOCUMENT, span);
        store.append_text(p, "one");
        let em = store.create_element(TagName::html("em"), AttrList::new());
        store.append_element(p, em);

        store.append_text(span, "zero");
        store.move_children(p, span);
        assert_eq!(
            store.get(span).children,
            vec![Child::Text("zeroone".into()), Child::Element(em)]
        );
        assert_eq!(store.get(em).parent, Some(span));
        assert!(store.get(p).children.is_empty());
    }
}
