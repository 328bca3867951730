use std::fmt::{Debug, Formatter};

/// Attribute namespaces assigned by the [adjust foreign
/// attributes](https://html.spec.whatwg.org/#adjust-foreign-attributes) step.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AttrNamespace {
    /// The XLink namespace (`xlink:href` and friends).
    XLink,
    /// The XML namespace (`xml:lang`, `xml:space`).
    Xml,
    /// The XMLNS namespace (`xmlns`, `xmlns:xlink`).
    Xmlns,
}

/// A single element attribute.
///
/// `name` is the qualified name as written in the source, ASCII-lowercased by the
/// tokenizer (`class`, `xlink:href`). A namespace is assigned only by the foreign-content
/// adjustments; ordinary HTML attributes have none, even when their name contains a colon.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Attribute {
    /// The qualified attribute name.
    pub name: String,
    /// The attribute value.
    pub value: String,
    /// The namespace, for attributes the foreign-content adjustments recognized.
    pub ns: Option<AttrNamespace>,
}

impl Attribute {
    /// The prefix part of a namespaced name: `xlink` in `xlink:href`. `None` for
    /// attributes without a namespace and for the bare `xmlns` attribute.
    pub fn prefix(&self) -> Option<&str> {
        self.ns?;
        let colon = self.name.find(':')?;
        Some(&self.name[..colon])
    }

    /// The local part of the name: `href` in a namespaced `xlink:href`, otherwise the
    /// whole qualified name.
    pub fn local(&self) -> &str {
        if self.ns.is_some() {
            if let Some(colon) = self.name.find(':') {
                return &self.name[colon + 1..];
            }
        }
        &self.name
    }
}

/// An ordered list of attributes with unique qualified names.
///
/// Iteration yields attributes in first-occurrence order; inserting a name that is already
/// present leaves the list unchanged. This matches what the tree expects: browsers keep the
/// first of duplicate attributes and tests compare textual output, so order must be stable.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct AttrList {
    items: Vec<Attribute>,
}

impl AttrList {
    /// Create an empty list.
    pub fn new() -> Self {
        AttrList::default()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an attribute value by qualified name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// True if an attribute with this qualified name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Append an attribute unless the name is already taken. Returns whether it was
    /// inserted.
    pub fn insert(&mut self, name: String, value: String) -> bool {
        if self.contains(&name) {
            return false;
        }
        self.items.push(Attribute {
            name,
            value,
            ns: None,
        });
        true
    }

    /// Append every attribute from `other` whose name is not already present.
    ///
    /// Used for the `<html>`/`<body>` start tags seen a second time, which add their
    /// missing attributes to the existing element.
    pub fn merge_missing(&mut self, other: AttrList) {
        for attr in other.items {
            if !self.contains(&attr.name) {
                self.items.push(attr);
            }
        }
    }

    /// Rename an attribute in place, keeping its position. Used by the foreign-content
    /// case adjustments.
    pub(crate) fn rename(&mut self, from: &str, to: &str) {
        for attr in &mut self.items {
            if attr.name == from {
                attr.name = to.to_owned();
            }
        }
    }

    /// Assign a namespace to an attribute. Used by the foreign-content adjustments.
    pub(crate) fn set_namespace(&mut self, name: &str, ns: AttrNamespace) {
        for attr in &mut self.items {
            if attr.name == name {
                attr.ns = Some(ns);
            }
        }
    }

    /// Iterate over attributes in first-occurrence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.items.iter()
    }
}

impl Debug for AttrList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.items.iter().map(|attr| (&attr.name, &attr.value)))
            .finish()
    }
}

impl FromIterator<(String, String)> for AttrList {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut attrs = AttrList::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

impl IntoIterator for AttrList {
    type Item = Attribute;
    type IntoIter = std::vec::IntoIter<Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttrList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let mut attrs = AttrList::new();
        assert!(attrs.insert("href".into(), "a".into()));
        assert!(!attrs.insert("href".into(), "b".into()));
        assert_eq!(attrs.get("href"), Some("a"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn order_is_preserved() {
        let attrs: AttrList = [("z", "1"), ("a", "2"), ("m", "3")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        let names: Vec<_> = attrs.iter().map(|attr| attr.name.as_str()).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn merge_missing_keeps_existing() {
        let mut attrs: AttrList = [("class", "x")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        let extra: AttrList = [("class", "y"), ("id", "z")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        attrs.merge_missing(extra);
        assert_eq!(attrs.get("class"), Some("x"));
        assert_eq!(attrs.get("id"), Some("z"));
    }

    #[test]
    fn namespace_splits_prefix_and_local() {
        let mut attrs: AttrList = [("xlink:href", "#x"), ("xmlns", "urn:y"), ("href", "#z")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        attrs.set_namespace("xlink:href", AttrNamespace::XLink);
        attrs.set_namespace("xmlns", AttrNamespace::Xmlns);

        let by_name = |name: &str| attrs.iter().find(|a| a.name == name).unwrap().clone();
        let xlink = by_name("xlink:href");
        assert_eq!(xlink.prefix(), Some("xlink"));
        assert_eq!(xlink.local(), "href");

        let xmlns = by_name("xmlns");
        assert_eq!(xmlns.prefix(), None);
        assert_eq!(xmlns.local(), "xmlns");

        // a plain attribute gets no namespace treatment
        let href = by_name("href");
        assert_eq!(href.ns, None);
        assert_eq!(href.local(), "href");
    }
}
