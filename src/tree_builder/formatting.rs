//! The list of active formatting elements and its two consumers: reconstruction and the
//! adoption agency algorithm.

use crate::attr::AttrList;
use crate::dom::{NodeId, TagName};
use crate::{EndTag, Reader, StartTag};

use super::scopes;
use super::{NodeOrText, TreeBuilder};

/// An entry in the list of active formatting elements.
#[derive(Clone, Debug)]
pub(crate) enum FormatEntry {
    /// A formatting element, together with the tag it was created from, so clones can be
    /// made and Noah's Ark comparisons are possible after the element mutates.
    Element(NodeId, StartTag),
    /// A scope marker, pushed at `applet`/`object`/`marquee`/`template`/`caption`/`td`/`th`
    /// boundaries.
    Marker,
}

enum Bookmark {
    Replace(NodeId),
    InsertAfter(NodeId),
}

fn attrs_equal_modulo_order(a: &AttrList, b: &AttrList) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|attr| b.get(&attr.name) == Some(attr.value.as_str()))
}

impl<R: Reader> TreeBuilder<R> {
    pub(crate) fn position_in_active_formatting(&self, element: NodeId) -> Option<usize> {
        self.active_formatting.iter().position(|entry| match entry {
            FormatEntry::Marker => false,
            FormatEntry::Element(node, _) => *node == element,
        })
    }

    fn is_marker_or_open(&self, entry: &FormatEntry) -> bool {
        match entry {
            FormatEntry::Marker => true,
            FormatEntry::Element(node, _) => self.open_elems.contains(node),
        }
    }

    /// Find the most recent formatting entry (up to the last marker) matching `pred`.
    fn find_formatting_entry(
        &self,
        pred: impl Fn(NodeId, &StartTag) -> bool,
    ) -> Option<(usize, NodeId, StartTag)> {
        for (i, entry) in self.active_formatting.iter().enumerate().rev() {
            match entry {
                FormatEntry::Marker => return None,
                FormatEntry::Element(node, tag) => {
                    if pred(*node, tag) {
                        return Some((i, *node, tag.clone()));
                    }
                }
            }
        }
        None
    }

    pub(crate) fn clear_active_formatting_to_marker(&mut self) {
        loop {
            match self.active_formatting.pop() {
                None | Some(FormatEntry::Marker) => break,
                _ => (),
            }
        }
    }

    /// Push a formatting element, applying the Noah's Ark clause: at most three entries
    /// with the same name and attributes between the last marker and the end of the list.
    pub(crate) fn create_formatting_element_for(&mut self, tag: StartTag) -> NodeId {
        let mut first_match = None;
        let mut matches = 0usize;
        for (i, entry) in self.active_formatting.iter().enumerate().rev() {
            match entry {
                FormatEntry::Marker => break,
                FormatEntry::Element(_, old_tag) => {
                    if old_tag.name == tag.name
                        && attrs_equal_modulo_order(&old_tag.attrs, &tag.attrs)
                    {
                        first_match = Some(i);
                        matches += 1;
                    }
                }
            }
        }

        if matches >= 3 {
            self.active_formatting
                .remove(first_match.expect("matches with no index"));
        }

        let elem = self.insert_element(
            true,
            crate::dom::Namespace::Html,
            tag.name.clone(),
            tag.attrs.clone(),
        );
        self.active_formatting.push(FormatEntry::Element(elem, tag));
        elem
    }

    /// <https://html.spec.whatwg.org/#reconstruct-the-active-formatting-elements>
    pub(crate) fn reconstruct_active_formatting_elements(&mut self) {
        {
            let Some(last) = self.active_formatting.last() else {
                return;
            };
            if self.is_marker_or_open(last) {
                return;
            }
        }

        // Rewind: find the latest entry that is a marker or open, the entry after it is
        // where cloning starts.
        let mut entry_index = self.active_formatting.len() - 1;
        loop {
            if entry_index == 0 {
                break;
            }
            entry_index -= 1;
            if self.is_marker_or_open(&self.active_formatting[entry_index]) {
                entry_index += 1;
                break;
            }
        }

        // Create: clone entries onto the stack and into the tree, advancing to the end.
        loop {
            let tag = match &self.active_formatting[entry_index] {
                FormatEntry::Element(_, tag) => tag.clone(),
                FormatEntry::Marker => {
                    unreachable!("found marker during formatting element reconstruction")
                }
            };

            let new_element = self.insert_element(
                true,
                crate::dom::Namespace::Html,
                tag.name.clone(),
                tag.attrs.clone(),
            );
            self.active_formatting[entry_index] = FormatEntry::Element(new_element, tag);

            if entry_index == self.active_formatting.len() - 1 {
                break;
            }
            entry_index += 1;
        }
    }

    /// The misnested `<a>` rule: a second `<a>` inside an open one runs the adoption agency
    /// and then drops whatever is left of the old element.
    pub(crate) fn handle_misnested_a_tags(&mut self, _tag: &StartTag) {
        let Some((_, node, _)) = self.find_formatting_entry(|_, tag| tag.name == "a") else {
            return;
        };

        self.parse_error("nested <a>");
        self.adoption_agency("a");
        if let Some(position) = self.position_in_active_formatting(node) {
            self.active_formatting.remove(position);
        }
        self.remove_from_stack(node);
    }

    /// The ["any other end tag" rule of
    /// in-body](https://html.spec.whatwg.org/#parsing-main-inbody): walk the stack for a
    /// matching element, stopping at specials.
    pub(crate) fn process_end_tag_in_body(&mut self, tag: EndTag) {
        let mut match_idx = None;
        for (i, &elem) in self.open_elems.iter().enumerate().rev() {
            if self.html_elem_named(elem, &tag.name) {
                match_idx = Some(i);
                break;
            }
            if self.elem_in(elem, scopes::special_tag) {
                self.parse_error("found special tag while closing generic tag");
                return;
            }
        }

        let Some(match_idx) = match_idx else {
            // impossible in practice, the root <html> element is special
            self.parse_error("no matching tag to close");
            return;
        };

        self.generate_implied_end_except(&tag.name);

        if match_idx != self.open_elems.len() - 1 {
            self.parse_error("misnested tags");
        }
        self.open_elems.truncate(match_idx);
    }

    /// <https://html.spec.whatwg.org/#adoption-agency-algorithm>
    ///
    /// When the subject has no entry in the active formatting list the "any other end tag"
    /// rule applies instead.
    pub(crate) fn adoption_agency(&mut self, subject: &str) {
        // Step 2. Fast path: the subject is the current node and not in the list.
        if self.current_node_named(subject)
            && self
                .position_in_active_formatting(self.current_node())
                .is_none()
        {
            self.pop();
            return;
        }

        // Steps 3-5. Outer loop, bounded at 8 iterations.
        for _ in 0..8 {
            // Step 6. Locate the formatting element.
            let Some((fmt_elem_index, fmt_elem, fmt_elem_tag)) =
                self.find_formatting_entry(|_, tag| tag.name == subject)
            else {
                return self.process_end_tag_in_body(EndTag {
                    name: subject.to_owned(),
                });
            };

            let Some(fmt_elem_stack_index) =
                self.open_elems.iter().rposition(|&n| n == fmt_elem)
            else {
                self.parse_error("formatting element not open");
                self.active_formatting.remove(fmt_elem_index);
                return;
            };

            if !self.in_scope(scopes::default_scope, |n| n == fmt_elem) {
                self.parse_error("formatting element not in scope");
                return;
            }

            if self.current_node() != fmt_elem {
                self.parse_error("formatting element not current node");
            }

            // Step 9. The furthest block: first special element below the formatting
            // element on the stack.
            let maybe_furthest_block = self
                .open_elems
                .iter()
                .enumerate()
                .skip(fmt_elem_stack_index)
                .find(|&(_, &elem)| self.elem_in(elem, scopes::special_tag))
                .map(|(i, &elem)| (i, elem));

            let Some((furthest_block_index, furthest_block)) = maybe_furthest_block else {
                // Step 10. No furthest block: pop through the formatting element and drop
                // its list entry.
                self.open_elems.truncate(fmt_elem_stack_index);
                self.active_formatting.remove(fmt_elem_index);
                return;
            };

            // Step 11. The common ancestor is the formatting element's parent, or its
            // recorded foster parent when it was inserted by foster parenting.
            let fmt_elem_record = self.store.get(fmt_elem);
            let fmt_was_fostered = fmt_elem_record.foster_parent.is_some();
            let common_ancestor = fmt_elem_record
                .foster_parent
                .or(fmt_elem_record.parent)
                .unwrap_or_else(|| self.open_elems[fmt_elem_stack_index - 1]);

            // Step 12.
            let mut bookmark = Bookmark::Replace(fmt_elem);

            // Step 13. Inner loop.
            let mut node;
            let mut node_index = furthest_block_index;
            let mut last_node = furthest_block;
            let mut inner_counter = 0;
            loop {
                inner_counter += 1;

                node_index -= 1;
                node = self.open_elems[node_index];

                if node == fmt_elem {
                    break;
                }

                // Step 13.5. Nodes seen more than three times are abandoned entirely.
                if inner_counter > 3 {
                    if let Some(position) = self.position_in_active_formatting(node) {
                        self.active_formatting.remove(position);
                    }
                    self.open_elems.remove(node_index);
                    continue;
                }

                let Some(node_formatting_index) = self.position_in_active_formatting(node)
                else {
                    // Step 13.6. Not a formatting element, drop it from the stack.
                    self.open_elems.remove(node_index);
                    continue;
                };

                // Step 13.7. Replace the node with a fresh clone, in the tree, on the
                // stack, and in the list.
                let tag = match &self.active_formatting[node_formatting_index] {
                    FormatEntry::Element(handle, tag) => {
                        debug_assert_eq!(*handle, node);
                        tag.clone()
                    }
                    FormatEntry::Marker => unreachable!("found marker during adoption agency"),
                };
                let new_element = self
                    .store
                    .create_element(TagName::html(tag.name.clone()), tag.attrs.clone());
                self.open_elems[node_index] = new_element;
                self.active_formatting[node_formatting_index] =
                    FormatEntry::Element(new_element, tag);
                node = new_element;

                // Step 13.8.
                if last_node == furthest_block {
                    bookmark = Bookmark::InsertAfter(node);
                }

                // Steps 13.9-13.10. Re-parent last node under the clone.
                self.store.remove_from_parent(last_node);
                self.store.append_element(node, last_node);
                last_node = node;
            }

            // Step 14. Insert last node at the common ancestor, foster parenting if the
            // formatting element itself had been foster-parented.
            self.store.remove_from_parent(last_node);
            if fmt_was_fostered {
                self.foster_parenting = true;
                self.insert_appropriately(NodeOrText::Node(last_node), Some(common_ancestor));
                self.foster_parenting = false;
            } else {
                self.insert_appropriately(NodeOrText::Node(last_node), Some(common_ancestor));
            }

            // Step 15. A new clone of the formatting element.
            let new_element = self.store.create_element(
                TagName::html(fmt_elem_tag.name.clone()),
                fmt_elem_tag.attrs.clone(),
            );
            let new_entry = FormatEntry::Element(new_element, fmt_elem_tag);

            // Steps 16-17. The furthest block's children move into the clone, the clone
            // becomes the furthest block's only child.
            self.store.move_children(furthest_block, new_element);
            self.store.append_element(furthest_block, new_element);

            // Step 18. Put the clone into the list at the bookmark.
            match bookmark {
                Bookmark::Replace(to_replace) => {
                    let index = self
                        .position_in_active_formatting(to_replace)
                        .expect("bookmark not found in active formatting elements");
                    self.active_formatting[index] = new_entry;
                }
                Bookmark::InsertAfter(previous) => {
                    let index = self
                        .position_in_active_formatting(previous)
                        .expect("bookmark not found in active formatting elements")
                        + 1;
                    self.active_formatting.insert(index, new_entry);
                    let old_index = self
                        .position_in_active_formatting(fmt_elem)
                        .expect("formatting element not found in active formatting elements");
                    self.active_formatting.remove(old_index);
                }
            }

            // Step 19. On the stack, the clone goes immediately below the furthest block.
            self.remove_from_stack(fmt_elem);
            let new_furthest_block_index = self
                .open_elems
                .iter()
                .position(|&n| n == furthest_block)
                .expect("furthest block missing from open element stack");
            self.open_elems
                .insert(new_furthest_block_index + 1, new_element);
        }
    }
}
