//! The HTML5 tree builder.
//!
//! Drives the tokenizer, dispatches every token to the current insertion mode (or to the
//! foreign content rules), and materializes the document in the element store. Mode rules
//! live in `rules`, the active formatting list and the adoption agency in `formatting`.

use std::collections::VecDeque;

use log::debug;
use phf::phf_map;

use crate::attr::AttrNamespace;
use crate::dom::{Document, Namespace, Node, NodeId, QuirksMode, Store, TagName};
use crate::{Doctype, FragmentContext, Reader, StartTag, State, Token, Tokenizer};

mod data;
mod formatting;
mod rules;
pub(crate) mod scopes;
mod types;

pub(crate) use self::formatting::FormatEntry;
use self::scopes::ExpandedName;
use self::types::{InsertionMode, InsertionPoint, ProcessResult, RawKind, SplitStatus, TbToken};

pub(crate) enum NodeOrText {
    Node(NodeId),
    Text(String),
    Comment(String),
}

/// The tree construction stage. One instance per parse.
pub(crate) struct TreeBuilder<R: Reader> {
    tokenizer: Tokenizer<R>,
    store: Store,

    mode: InsertionMode,
    /// Original insertion mode, saved by the text and in-table-text modes.
    orig_mode: Option<InsertionMode>,
    /// Stack of template insertion modes.
    template_modes: Vec<InsertionMode>,
    /// Pending table character tokens.
    pending_table_text: Vec<(SplitStatus, String)>,

    doctype: Option<Doctype>,
    quirks_mode: QuirksMode,

    /// Stack of open elements, most recently added at the end.
    open_elems: Vec<NodeId>,
    /// List of active formatting elements.
    active_formatting: Vec<FormatEntry>,

    head_elem: Option<NodeId>,
    form_elem: Option<NodeId>,

    frameset_ok: bool,
    /// Ignore a following U+000A LINE FEED (after `<pre>` and `<textarea>`)?
    ignore_lf: bool,
    foster_parenting: bool,

    /// The context element for fragment parsing.
    context_elem: Option<NodeId>,

    errors: usize,
}

impl<R: Reader> TreeBuilder<R> {
    pub fn new(tokenizer: Tokenizer<R>) -> TreeBuilder<R> {
        TreeBuilder {
            tokenizer,
            store: Store::new(),
            mode: InsertionMode::Initial,
            orig_mode: None,
            template_modes: Vec::new(),
            pending_table_text: Vec::new(),
            doctype: None,
            quirks_mode: QuirksMode::NoQuirks,
            open_elems: Vec::new(),
            active_formatting: Vec::new(),
            head_elem: None,
            form_elem: None,
            frameset_ok: true,
            ignore_lf: false,
            foster_parenting: false,
            context_elem: None,
            errors: 0,
        }
    }

    /// Set up for [fragment parsing](https://html.spec.whatwg.org/#parsing-html-fragments):
    /// a synthetic root under the document, the context element fixing the initial insertion
    /// mode and tokenizer state.
    pub fn new_for_fragment(tokenizer: Tokenizer<R>, context: &FragmentContext) -> TreeBuilder<R> {
        let mut tb = TreeBuilder::new(tokenizer);

        let context_elem = tb.store.create_element(
            TagName {
                ns: context.ns,
                local: context.local.clone(),
            },
            context.attrs.clone(),
        );
        tb.context_elem = Some(context_elem);

        if context.ns == Namespace::Html && context.local == "template" {
            tb.template_modes.push(InsertionMode::InTemplate);
        }

        tb.create_root(crate::AttrList::new());
        tb.mode = tb.reset_insertion_mode();

        if context.ns == Namespace::Html {
            if let Some(state) = tokenizer_state_for_context_elem(&context.local) {
                tb.tokenizer.set_state(state);
                tb.tokenizer.set_last_start_tag(Some(&context.local));
            }
        }

        tb
    }

    /// Run the parse to end of input.
    pub fn run(&mut self) {
        loop {
            let foreign = self.adjusted_current_node_present_but_not_in_html_namespace();
            self.tokenizer
                .emitter
                .set_foreign_content_active(foreign);

            let Some(token) = self.tokenizer.next() else {
                break;
            };
            self.process_token(token);
        }

        self.open_elems.clear();
        self.active_formatting.clear();
    }

    /// Finalize a document parse.
    pub fn into_document(self) -> Document {
        let doc = self.store.get(NodeId::DOCUMENT);
        let children = doc.children.iter().map(|c| self.store.export(c)).collect();
        Document {
            doctype: self.doctype,
            children,
            quirks_mode: self.quirks_mode,
            errors: self.errors,
        }
    }

    /// Finalize a fragment parse: the children of the synthetic root.
    pub fn into_fragment(self) -> Vec<Node> {
        let doc = self.store.get(NodeId::DOCUMENT);
        let root = doc
            .children
            .iter()
            .find_map(|c| match c {
                crate::dom::Child::Element(id) => Some(*id),
                _ => None,
            })
            .expect("fragment parse has a synthetic root");
        self.store
            .get(root)
            .children
            .iter()
            .map(|c| self.store.export(c))
            .collect()
    }

    fn process_token(&mut self, token: Token) {
        let ignore_lf = std::mem::take(&mut self.ignore_lf);

        let token = match token {
            Token::Error(_) => {
                self.errors += 1;
                return;
            }
            Token::Doctype(dt) => {
                if self.mode == InsertionMode::Initial {
                    let (err, quirk) = data::doctype_error_and_quirks(&dt);
                    if err {
                        self.parse_error("bad doctype");
                    }
                    self.doctype = Some(dt);
                    self.quirks_mode = quirk;
                    self.mode = InsertionMode::BeforeHtml;
                } else {
                    self.parse_error("doctype in body");
                }
                return;
            }
            Token::StartTag(tag) => TbToken::StartTag(tag),
            Token::EndTag(tag) => TbToken::EndTag(tag),
            Token::Comment(text) => TbToken::Comment(text),
            Token::Eof => TbToken::Eof,
            Token::Character(mut text) => {
                if ignore_lf && text.starts_with('\n') {
                    text.remove(0);
                }
                if text.is_empty() {
                    return;
                }
                self.process_char_runs(text);
                return;
            }
        };

        self.process_to_completion(token);
    }

    /// Null characters take separate paths through the modes, so break the run apart.
    fn process_char_runs(&mut self, text: String) {
        if !text.contains('\0') {
            self.process_to_completion(TbToken::Characters(SplitStatus::NotSplit, text));
            return;
        }

        for piece in text.split_inclusive('\0') {
            let (run, nul) = match piece.strip_suffix('\0') {
                Some(run) => (run, true),
                None => (piece, false),
            };
            if !run.is_empty() {
                self.process_to_completion(TbToken::Characters(
                    SplitStatus::NotSplit,
                    run.to_owned(),
                ));
            }
            if nul {
                self.process_to_completion(TbToken::NullCharacter);
            }
        }
    }

    fn process_to_completion(&mut self, mut token: TbToken) {
        // Queue of additional tokens yet to be processed. This stays empty in the common
        // case where we don't split whitespace.
        let mut more_tokens = VecDeque::new();

        loop {
            let should_have_acknowledged_self_closing_flag =
                matches!(token, TbToken::StartTag(ref tag) if tag.self_closing);

            let result = if self.is_foreign(&token) {
                self.step_foreign(token)
            } else {
                let mode = self.mode;
                self.step(mode, token)
            };

            match result {
                ProcessResult::Done => {
                    if should_have_acknowledged_self_closing_flag {
                        self.parse_error("unacknowledged self-closing tag");
                    }
                    let Some(new_token) = more_tokens.pop_front() else {
                        return;
                    };
                    token = new_token;
                }
                ProcessResult::DoneAckSelfClosing => {
                    let Some(new_token) = more_tokens.pop_front() else {
                        return;
                    };
                    token = new_token;
                }
                ProcessResult::Reprocess(mode, new_token) => {
                    self.mode = mode;
                    token = new_token;
                }
                ProcessResult::ReprocessForeign(new_token) => {
                    token = new_token;
                }
                ProcessResult::SplitWhitespace(buf) => {
                    let first_is_ws = buf
                        .chars()
                        .next()
                        .map_or(false, |c| c.is_ascii_whitespace());
                    let split_at = buf
                        .find(|c: char| c.is_ascii_whitespace() != first_is_ws)
                        .unwrap_or(buf.len());
                    if split_at == 0 {
                        return;
                    }
                    let status = if first_is_ws {
                        SplitStatus::Whitespace
                    } else {
                        SplitStatus::NotWhitespace
                    };
                    let rest = buf[split_at..].to_owned();
                    token = TbToken::Characters(status, buf[..split_at].to_owned());
                    if !rest.is_empty() {
                        more_tokens.push_back(TbToken::Characters(SplitStatus::NotSplit, rest));
                    }
                }
            }
        }
    }

    pub(crate) fn parse_error(&mut self, _msg: &str) {
        debug!("parse error: {} in insertion mode {:?}", _msg, self.mode);
        self.errors += 1;
    }

    fn unexpected(&mut self, _what: &str) -> ProcessResult {
        self.parse_error("unexpected token");
        ProcessResult::Done
    }

    //§ stack-of-open-elements

    pub(crate) fn push(&mut self, elem: NodeId) {
        self.open_elems.push(elem);
    }

    pub(crate) fn pop(&mut self) -> NodeId {
        self.open_elems.pop().expect("no current element")
    }

    pub(crate) fn remove_from_stack(&mut self, elem: NodeId) {
        if let Some(position) = self.open_elems.iter().rposition(|&x| x == elem) {
            self.open_elems.remove(position);
        }
    }

    pub(crate) fn current_node(&self) -> NodeId {
        *self.open_elems.last().expect("no current element")
    }

    pub(crate) fn adjusted_current_node(&self) -> NodeId {
        if self.open_elems.len() == 1 {
            if let Some(ctx) = self.context_elem {
                return ctx;
            }
        }
        self.current_node()
    }

    fn adjusted_current_node_present_but_not_in_html_namespace(&self) -> bool {
        !self.open_elems.is_empty()
            && self.store.get(self.adjusted_current_node()).name.ns != Namespace::Html
    }

    /// The first element on the stack: the `html` element.
    fn html_elem(&self) -> NodeId {
        self.open_elems[0]
    }

    /// The second element on the stack, if it is a body element.
    pub(crate) fn body_elem(&self) -> Option<NodeId> {
        match self.open_elems.get(1) {
            Some(&node) if self.html_elem_named(node, "body") => Some(node),
            _ => None,
        }
    }

    pub(crate) fn expanded_name_of(&self, elem: NodeId) -> ExpandedName<'_> {
        self.store.get(elem).name.expanded()
    }

    pub(crate) fn elem_in(&self, elem: NodeId, set: impl Fn(ExpandedName) -> bool) -> bool {
        set(self.expanded_name_of(elem))
    }

    pub(crate) fn html_elem_named(&self, elem: NodeId, name: &str) -> bool {
        self.store.get(elem).name.is_html(name)
    }

    pub(crate) fn current_node_named(&self, name: &str) -> bool {
        self.html_elem_named(self.current_node(), name)
    }

    pub(crate) fn current_node_in(&self, set: impl Fn(ExpandedName) -> bool) -> bool {
        self.elem_in(self.current_node(), set)
    }

    pub(crate) fn in_html_elem_named(&self, name: &str) -> bool {
        self.open_elems
            .iter()
            .any(|&elem| self.html_elem_named(elem, name))
    }

    pub(crate) fn in_scope(
        &self,
        scope: impl Fn(ExpandedName) -> bool,
        pred: impl Fn(NodeId) -> bool,
    ) -> bool {
        for &node in self.open_elems.iter().rev() {
            if pred(node) {
                return true;
            }
            if scope(self.expanded_name_of(node)) {
                return false;
            }
        }

        // supposed to be unreachable, <html> is always in scope
        false
    }

    pub(crate) fn in_scope_named(
        &self,
        scope: impl Fn(ExpandedName) -> bool,
        name: &str,
    ) -> bool {
        self.in_scope(scope, |elem| self.html_elem_named(elem, name))
    }

    //§ closing-elements-that-have-implied-end-tags

    pub(crate) fn generate_implied_end_tags(&mut self, set: impl Fn(ExpandedName) -> bool) {
        loop {
            let Some(&elem) = self.open_elems.last() else {
                return;
            };
            if !set(self.expanded_name_of(elem)) {
                return;
            }
            self.pop();
        }
    }

    pub(crate) fn generate_implied_end_except(&mut self, except: &str) {
        self.generate_implied_end_tags(|name| {
            if name.0 == Namespace::Html && name.1 == except {
                false
            } else {
                scopes::cursory_implied_end(name)
            }
        });
    }

    /// Pop elements until the current node is in the set.
    pub(crate) fn pop_until_current(&mut self, set: impl Fn(ExpandedName) -> bool) {
        while !self.current_node_in(&set) {
            self.open_elems.pop();
        }
    }

    /// Pop elements until one from the set has been popped. Returns how many were popped.
    pub(crate) fn pop_until(&mut self, pred: impl Fn(ExpandedName) -> bool) -> usize {
        let mut n = 0;
        loop {
            n += 1;
            match self.open_elems.pop() {
                None => break,
                Some(elem) => {
                    if pred(self.store.get(elem).name.expanded()) {
                        break;
                    }
                }
            }
        }
        n
    }

    pub(crate) fn pop_until_named(&mut self, name: &str) -> usize {
        self.pop_until(|(ns, local)| ns == Namespace::Html && local == name)
    }

    /// Pop until an element with this name is popped; signal an error if other elements had
    /// to be closed on the way.
    pub(crate) fn expect_to_close(&mut self, name: &str) {
        if self.pop_until_named(name) != 1 {
            self.parse_error("unexpected open element while closing");
        }
    }

    pub(crate) fn close_p_element(&mut self) {
        self.generate_implied_end_except("p");
        self.expect_to_close("p");
    }

    pub(crate) fn close_p_element_in_button_scope(&mut self) {
        if self.in_scope_named(scopes::button_scope, "p") {
            self.close_p_element();
        }
    }

    pub(crate) fn close_the_cell(&mut self) {
        self.generate_implied_end_tags(scopes::cursory_implied_end);
        if self.pop_until(scopes::td_th) != 1 {
            self.parse_error("expected to close <td> or <th> with cell");
        }
        self.clear_active_formatting_to_marker();
    }

    pub(crate) fn check_body_end(&mut self) {
        for i in 0..self.open_elems.len() {
            if !self.elem_in(self.open_elems[i], scopes::body_end_ok) {
                self.parse_error("unexpected open tag at end of body");
                return;
            }
        }
    }

    //§ the-insertion-mode

    // https://html.spec.whatwg.org/#reset-the-insertion-mode-appropriately
    pub(crate) fn reset_insertion_mode(&mut self) -> InsertionMode {
        for (i, &mut_node) in self.open_elems.iter().enumerate().rev() {
            let last = i == 0;
            let node = match (last, self.context_elem) {
                (true, Some(ctx)) => ctx,
                _ => mut_node,
            };
            let name = match self.expanded_name_of(node) {
                (Namespace::Html, local) => local,
                _ => continue,
            };
            match name {
                "select" => {
                    for &ancestor in self.open_elems[0..i].iter().rev() {
                        if self.html_elem_named(ancestor, "template") {
                            return InsertionMode::InSelect;
                        } else if self.html_elem_named(ancestor, "table") {
                            return InsertionMode::InSelectInTable;
                        }
                    }
                    return InsertionMode::InSelect;
                }
                "td" | "th" => {
                    if !last {
                        return InsertionMode::InCell;
                    }
                }
                "tr" => return InsertionMode::InRow,
                "tbody" | "thead" | "tfoot" => return InsertionMode::InTableBody,
                "caption" => return InsertionMode::InCaption,
                "colgroup" => return InsertionMode::InColumnGroup,
                "table" => return InsertionMode::InTable,
                "template" => {
                    return *self
                        .template_modes
                        .last()
                        .expect("template on stack but no template mode")
                }
                "head" => {
                    if !last {
                        return InsertionMode::InHead;
                    }
                }
                "body" => return InsertionMode::InBody,
                "frameset" => return InsertionMode::InFrameset,
                "html" => {
                    return match self.head_elem {
                        None => InsertionMode::BeforeHead,
                        Some(_) => InsertionMode::AfterHead,
                    }
                }
                _ => (),
            }
        }
        InsertionMode::InBody
    }

    //§ creating-and-inserting-nodes

    /// <https://html.spec.whatwg.org/#appropriate-place-for-inserting-a-node>
    ///
    /// The second return value says whether the location was reached by foster parenting.
    fn appropriate_place_for_insertion(
        &self,
        override_target: Option<NodeId>,
    ) -> (InsertionPoint, bool) {
        let target = override_target.unwrap_or_else(|| self.current_node());
        if !(self.foster_parenting && self.elem_in(target, scopes::table_outer)) {
            return (InsertionPoint::LastChild(target), false);
        }

        // Foster parenting: find the nearest template or table on the stack.
        let mut iter = self.open_elems.iter().rev().peekable();
        while let Some(&elem) = iter.next() {
            if self.html_elem_named(elem, "template") {
                return (InsertionPoint::LastChild(elem), false);
            } else if self.html_elem_named(elem, "table") {
                if let Some(parent) = self.store.get(elem).parent {
                    return (
                        InsertionPoint::BeforeSibling {
                            parent,
                            before: elem,
                        },
                        true,
                    );
                }
                let prev = **iter.peek().expect("table at stack bottom");
                return (InsertionPoint::LastChild(prev), true);
            }
        }
        (InsertionPoint::LastChild(self.html_elem()), true)
    }

    fn insert_at(&mut self, point: InsertionPoint, child: NodeOrText) {
        match (point, child) {
            (InsertionPoint::LastChild(parent), NodeOrText::Node(node)) => {
                self.store.append_element(parent, node)
            }
            (InsertionPoint::LastChild(parent), NodeOrText::Text(text)) => {
                self.store.append_text(parent, &text)
            }
            (InsertionPoint::LastChild(parent), NodeOrText::Comment(text)) => {
                self.store.append_comment(parent, text)
            }
            (InsertionPoint::BeforeSibling { parent, before }, NodeOrText::Node(node)) => {
                self.store.insert_element_before(parent, node, before)
            }
            (InsertionPoint::BeforeSibling { parent, before }, NodeOrText::Text(text)) => {
                self.store.insert_text_before(parent, &text, before)
            }
            (InsertionPoint::BeforeSibling { parent, before }, NodeOrText::Comment(text)) => {
                self.store.insert_comment_before(parent, text, before)
            }
        }
    }

    /// Insert at the appropriate place, optionally overriding the target (used by the
    /// adoption agency with the common ancestor).
    pub(crate) fn insert_appropriately(
        &mut self,
        child: NodeOrText,
        override_target: Option<NodeId>,
    ) {
        let (point, fostered) = self.appropriate_place_for_insertion(override_target);
        if fostered {
            if let (NodeOrText::Node(node), Some(parent)) = (&child, point_parent(&point)) {
                self.store.get_mut(*node).foster_parent = Some(parent);
            }
        }
        self.insert_at(point, child);
    }

    pub(crate) fn create_root(&mut self, attrs: crate::AttrList) {
        let elem = self.store.create_element(TagName::html("html"), attrs);
        self.push(elem);
        self.store.append_element(NodeId::DOCUMENT, elem);
    }

    /// <https://html.spec.whatwg.org/#create-an-element-for-the-token> followed by insertion
    /// at the appropriate place.
    pub(crate) fn insert_element(
        &mut self,
        push: bool,
        ns: Namespace,
        name: String,
        attrs: crate::AttrList,
    ) -> NodeId {
        let elem = self.store.create_element(TagName { ns, local: name }, attrs);

        let (point, fostered) = self.appropriate_place_for_insertion(None);
        if fostered {
            if let Some(parent) = point_parent(&point) {
                self.store.get_mut(elem).foster_parent = Some(parent);
            }
        }
        self.insert_at(point, NodeOrText::Node(elem));

        if push {
            self.push(elem);
        }
        elem
    }

    pub(crate) fn insert_element_for(&mut self, tag: StartTag) -> NodeId {
        self.insert_element(true, Namespace::Html, tag.name, tag.attrs)
    }

    pub(crate) fn insert_and_pop_element_for(&mut self, tag: StartTag) -> NodeId {
        self.insert_element(false, Namespace::Html, tag.name, tag.attrs)
    }

    pub(crate) fn insert_phantom(&mut self, name: &str) -> NodeId {
        self.insert_element(true, Namespace::Html, name.to_owned(), crate::AttrList::new())
    }

    pub(crate) fn append_text(&mut self, text: String) -> ProcessResult {
        self.insert_appropriately(NodeOrText::Text(text), None);
        ProcessResult::Done
    }

    pub(crate) fn append_comment(&mut self, text: String) -> ProcessResult {
        self.insert_appropriately(NodeOrText::Comment(text), None);
        ProcessResult::Done
    }

    pub(crate) fn append_comment_to_doc(&mut self, text: String) -> ProcessResult {
        self.store.append_comment(NodeId::DOCUMENT, text);
        ProcessResult::Done
    }

    pub(crate) fn append_comment_to_html(&mut self, text: String) -> ProcessResult {
        let target = self.html_elem();
        self.store.append_comment(target, text);
        ProcessResult::Done
    }

    //§ parsing-elements-that-contain-only-text

    /// Switch to the text insertion mode, saving the current mode, and flip the tokenizer
    /// into a raw content model.
    fn to_raw_text_mode(&mut self, kind: RawKind) {
        self.orig_mode = Some(self.mode);
        self.mode = InsertionMode::Text;
        self.tokenizer.set_state(kind.state());
    }

    // The generic raw text / RCDATA parsing algorithm.
    pub(crate) fn parse_raw_data(&mut self, tag: StartTag, kind: RawKind) -> ProcessResult {
        self.insert_element_for(tag);
        self.to_raw_text_mode(kind);
        ProcessResult::Done
    }

    //§ tree-construction (foreign dispatch)

    fn is_foreign(&self, token: &TbToken) -> bool {
        if let TbToken::Eof = *token {
            return false;
        }

        if self.open_elems.is_empty() {
            return false;
        }

        let current = self.adjusted_current_node();
        let name = self.expanded_name_of(current);
        if name.0 == Namespace::Html {
            return false;
        }

        if scopes::mathml_text_integration_point(name) {
            match *token {
                TbToken::Characters(..) | TbToken::NullCharacter => return false,
                TbToken::StartTag(ref tag) if !matches!(&*tag.name, "mglyph" | "malignmark") => {
                    return false;
                }
                _ => (),
            }
        }

        if scopes::svg_html_integration_point(name) {
            match *token {
                TbToken::Characters(..) | TbToken::NullCharacter | TbToken::StartTag(_) => {
                    return false;
                }
                _ => (),
            }
        }

        if name == (Namespace::MathMl, "annotation-xml") {
            if let TbToken::StartTag(ref tag) = *token {
                if tag.name == "svg" {
                    return false;
                }
            }
            if matches!(
                *token,
                TbToken::Characters(..) | TbToken::NullCharacter | TbToken::StartTag(_)
            ) {
                return !self.is_annotation_xml_integration_point(current);
            }
        }

        true
    }

    /// `annotation-xml` whose encoding attribute says HTML is an HTML integration point.
    fn is_annotation_xml_integration_point(&self, elem: NodeId) -> bool {
        self.store
            .get(elem)
            .attrs
            .get("encoding")
            .map_or(false, |encoding| {
                encoding.eq_ignore_ascii_case("text/html")
                    || encoding.eq_ignore_ascii_case("application/xhtml+xml")
            })
    }

    pub(crate) fn enter_foreign(&mut self, mut tag: StartTag, ns: Namespace) -> ProcessResult {
        match ns {
            Namespace::MathMl => adjust_mathml_attributes(&mut tag),
            Namespace::Svg => adjust_svg_attributes(&mut tag),
            Namespace::Html => (),
        }
        adjust_foreign_attributes(&mut tag);

        if tag.self_closing {
            self.insert_element(false, ns, tag.name, tag.attrs);
            ProcessResult::DoneAckSelfClosing
        } else {
            self.insert_element(true, ns, tag.name, tag.attrs);
            ProcessResult::Done
        }
    }

    fn foreign_start_tag(&mut self, mut tag: StartTag) -> ProcessResult {
        let current_ns = self.store.get(self.adjusted_current_node()).name.ns;
        match current_ns {
            Namespace::MathMl => adjust_mathml_attributes(&mut tag),
            Namespace::Svg => {
                adjust_svg_tag_name(&mut tag);
                adjust_svg_attributes(&mut tag);
            }
            Namespace::Html => (),
        }
        adjust_foreign_attributes(&mut tag);
        if tag.self_closing {
            self.insert_element(false, current_ns, tag.name, tag.attrs);
            ProcessResult::DoneAckSelfClosing
        } else {
            self.insert_element(true, current_ns, tag.name, tag.attrs);
            ProcessResult::Done
        }
    }

    //§ in-table and misplaced content

    pub(crate) fn foster_parent_in_body(&mut self, token: TbToken) -> ProcessResult {
        self.foster_parenting = true;
        let result = self.step(InsertionMode::InBody, token);
        self.foster_parenting = false;
        result
    }

    pub(crate) fn process_chars_in_table(&mut self, token: TbToken) -> ProcessResult {
        if self.current_node_in(scopes::table_outer) {
            debug_assert!(self.pending_table_text.is_empty());
            self.orig_mode = Some(self.mode);
            ProcessResult::Reprocess(InsertionMode::InTableText, token)
        } else {
            self.parse_error("unexpected characters in table");
            self.foster_parent_in_body(token)
        }
    }

    pub(crate) fn is_type_hidden(&self, tag: &StartTag) -> bool {
        tag.attrs
            .get("type")
            .map_or(false, |value| value.eq_ignore_ascii_case("hidden"))
    }
}

fn point_parent(point: &InsertionPoint) -> Option<NodeId> {
    match point {
        InsertionPoint::LastChild(parent) => Some(*parent),
        InsertionPoint::BeforeSibling { parent, .. } => Some(*parent),
    }
}

/// Tokenizer state to start in when fragment-parsing inside this HTML context element.
fn tokenizer_state_for_context_elem(local: &str) -> Option<State> {
    match local {
        "title" | "textarea" => Some(State::RcData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some(State::RawText),
        "script" => Some(State::ScriptData),
        // scripting is treated as enabled
        "noscript" => Some(State::RawText),
        "plaintext" => Some(State::PlainText),
        _ => None,
    }
}

//§ adjust-foreign-attributes

static SVG_TAG_ADJUSTMENTS: phf::Map<&'static str, &'static str> = phf_map! {
    "altglyph" => "altGlyph",
    "altglyphdef" => "altGlyphDef",
    "altglyphitem" => "altGlyphItem",
    "animatecolor" => "animateColor",
    "animatemotion" => "animateMotion",
    "animatetransform" => "animateTransform",
    "clippath" => "clipPath",
    "feblend" => "feBlend",
    "fecolormatrix" => "feColorMatrix",
    "fecomponenttransfer" => "feComponentTransfer",
    "fecomposite" => "feComposite",
    "feconvolvematrix" => "feConvolveMatrix",
    "fediffuselighting" => "feDiffuseLighting",
    "fedisplacementmap" => "feDisplacementMap",
    "fedistantlight" => "feDistantLight",
    "fedropshadow" => "feDropShadow",
    "feflood" => "feFlood",
    "fefunca" => "feFuncA",
    "fefuncb" => "feFuncB",
    "fefuncg" => "feFuncG",
    "fefuncr" => "feFuncR",
    "fegaussianblur" => "feGaussianBlur",
    "feimage" => "feImage",
    "femerge" => "feMerge",
    "femergenode" => "feMergeNode",
    "femorphology" => "feMorphology",
    "feoffset" => "feOffset",
    "fepointlight" => "fePointLight",
    "fespecularlighting" => "feSpecularLighting",
    "fespotlight" => "feSpotLight",
    "fetile" => "feTile",
    "feturbulence" => "feTurbulence",
    "foreignobject" => "foreignObject",
    "glyphref" => "glyphRef",
    "lineargradient" => "linearGradient",
    "radialgradient" => "radialGradient",
    "textpath" => "textPath",
};

static SVG_ATTR_ADJUSTMENTS: phf::Map<&'static str, &'static str> = phf_map! {
    "attributename" => "attributeName",
    "attributetype" => "attributeType",
    "basefrequency" => "baseFrequency",
    "baseprofile" => "baseProfile",
    "calcmode" => "calcMode",
    "clippathunits" => "clipPathUnits",
    "diffuseconstant" => "diffuseConstant",
    "edgemode" => "edgeMode",
    "filterunits" => "filterUnits",
    "glyphref" => "glyphRef",
    "gradienttransform" => "gradientTransform",
    "gradientunits" => "gradientUnits",
    "kernelmatrix" => "kernelMatrix",
    "kernelunitlength" => "kernelUnitLength",
    "keypoints" => "keyPoints",
    "keysplines" => "keySplines",
    "keytimes" => "keyTimes",
    "lengthadjust" => "lengthAdjust",
    "limitingconeangle" => "limitingConeAngle",
    "markerheight" => "markerHeight",
    "markerunits" => "markerUnits",
    "markerwidth" => "markerWidth",
    "maskcontentunits" => "maskContentUnits",
    "maskunits" => "maskUnits",
    "numoctaves" => "numOctaves",
    "pathlength" => "pathLength",
    "patterncontentunits" => "patternContentUnits",
    "patterntransform" => "patternTransform",
    "patternunits" => "patternUnits",
    "pointsatx" => "pointsAtX",
    "pointsaty" => "pointsAtY",
    "pointsatz" => "pointsAtZ",
    "preservealpha" => "preserveAlpha",
    "preserveaspectratio" => "preserveAspectRatio",
    "primitiveunits" => "primitiveUnits",
    "refx" => "refX",
    "refy" => "refY",
    "repeatcount" => "repeatCount",
    "repeatdur" => "repeatDur",
    "requiredextensions" => "requiredExtensions",
    "requiredfeatures" => "requiredFeatures",
    "specularconstant" => "specularConstant",
    "specularexponent" => "specularExponent",
    "spreadmethod" => "spreadMethod",
    "startoffset" => "startOffset",
    "stddeviation" => "stdDeviation",
    "stitchtiles" => "stitchTiles",
    "surfacescale" => "surfaceScale",
    "systemlanguage" => "systemLanguage",
    "tablevalues" => "tableValues",
    "targetx" => "targetX",
    "targety" => "targetY",
    "textlength" => "textLength",
    "viewbox" => "viewBox",
    "viewtarget" => "viewTarget",
    "xchannelselector" => "xChannelSelector",
    "ychannelselector" => "yChannelSelector",
    "zoomandpan" => "zoomAndPan",
};

static MATHML_ATTR_ADJUSTMENTS: phf::Map<&'static str, &'static str> = phf_map! {
    "definitionurl" => "definitionURL",
};

// The attributes of https://html.spec.whatwg.org/#adjust-foreign-attributes: these keep
// their qualified name but are put into a namespace.
static FOREIGN_ATTR_ADJUSTMENTS: phf::Map<&'static str, AttrNamespace> = phf_map! {
    "xlink:actuate" => AttrNamespace::XLink,
    "xlink:arcrole" => AttrNamespace::XLink,
    "xlink:href" => AttrNamespace::XLink,
    "xlink:role" => AttrNamespace::XLink,
    "xlink:show" => AttrNamespace::XLink,
    "xlink:title" => AttrNamespace::XLink,
    "xlink:type" => AttrNamespace::XLink,
    "xml:lang" => AttrNamespace::Xml,
    "xml:space" => AttrNamespace::Xml,
    "xmlns" => AttrNamespace::Xmlns,
    "xmlns:xlink" => AttrNamespace::Xmlns,
};

fn adjust_attributes(tag: &mut StartTag, table: &phf::Map<&'static str, &'static str>) {
    let renames: Vec<(String, &str)> = tag
        .attrs
        .iter()
        .filter_map(|attr| table.get(attr.name.as_str()).map(|&to| (attr.name.clone(), to)))
        .collect();
    for (from, to) in renames {
        tag.attrs.rename(&from, to);
    }
}

fn adjust_foreign_attributes(tag: &mut StartTag) {
    let assignments: Vec<(String, AttrNamespace)> = tag
        .attrs
        .iter()
        .filter_map(|attr| {
            FOREIGN_ATTR_ADJUSTMENTS
                .get(attr.name.as_str())
                .map(|&ns| (attr.name.clone(), ns))
        })
        .collect();
    for (name, ns) in assignments {
        tag.attrs.set_namespace(&name, ns);
    }
}

fn adjust_svg_attributes(tag: &mut StartTag) {
    adjust_attributes(tag, &SVG_ATTR_ADJUSTMENTS);
}

fn adjust_mathml_attributes(tag: &mut StartTag) {
    adjust_attributes(tag, &MATHML_ATTR_ADJUSTMENTS);
}

fn adjust_svg_tag_name(tag: &mut StartTag) {
    if let Some(&adjusted) = SVG_TAG_ADJUSTMENTS.get(tag.name.as_str()) {
        tag.name = adjusted.to_owned();
    }
}
