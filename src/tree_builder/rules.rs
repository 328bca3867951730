//! The per-mode token handling rules of [tree
//! construction](https://html.spec.whatwg.org/#tree-construction).
//!
//! One `step` call handles one token in one insertion mode and returns what the driver
//! should do next. The rules are written as flat matches on `(mode, token)`; every arm is a
//! literal transcription of the corresponding spec clause, with recovery behavior included.

use log::debug;

use crate::dom::{Namespace, QuirksMode};
use crate::Reader;

use super::scopes;
use super::types::{InsertionMode, ProcessResult, RawKind, SplitStatus, TbToken};
use super::{FormatEntry, TreeBuilder};

use InsertionMode::*;
use ProcessResult::*;
use SplitStatus::*;
use TbToken::*;

impl<R: Reader> TreeBuilder<R> {
    pub(crate) fn step(&mut self, mode: InsertionMode, token: TbToken) -> ProcessResult {
        debug!("processing {:?} in insertion mode {:?}", token, mode);

        match mode {
            Initial => match token {
                Characters(NotSplit, text) => SplitWhitespace(text),
                Characters(Whitespace, _) => Done,
                Comment(text) => self.append_comment_to_doc(text),
                token => {
                    self.parse_error("missing doctype");
                    self.quirks_mode = QuirksMode::Quirks;
                    Reprocess(BeforeHtml, token)
                }
            },

            BeforeHtml => match token {
                Characters(NotSplit, text) => SplitWhitespace(text),
                Characters(Whitespace, _) => Done,
                Comment(text) => self.append_comment_to_doc(text),
                StartTag(tag) if tag.name == "html" => {
                    self.create_root(tag.attrs);
                    self.mode = BeforeHead;
                    Done
                }
                EndTag(ref tag) if !matches!(&*tag.name, "head" | "body" | "html" | "br") => {
                    self.unexpected("end tag before <html>")
                }
                token => {
                    self.create_root(crate::AttrList::new());
                    Reprocess(BeforeHead, token)
                }
            },

            BeforeHead => match token {
                Characters(NotSplit, text) => SplitWhitespace(text),
                Characters(Whitespace, _) => Done,
                Comment(text) => self.append_comment(text),
                StartTag(ref tag) if tag.name == "html" => self.step(InBody, token),
                StartTag(tag) if tag.name == "head" => {
                    self.head_elem = Some(self.insert_element_for(tag));
                    self.mode = InHead;
                    Done
                }
                EndTag(ref tag) if !matches!(&*tag.name, "head" | "body" | "html" | "br") => {
                    self.unexpected("end tag before <head>")
                }
                token => {
                    self.head_elem = Some(self.insert_phantom("head"));
                    Reprocess(InHead, token)
                }
            },

            InHead => match token {
                Characters(NotSplit, text) => SplitWhitespace(text),
                Characters(Whitespace, text) => self.append_text(text),
                Comment(text) => self.append_comment(text),
                StartTag(ref tag) if tag.name == "html" => self.step(InBody, token),
                StartTag(tag)
                    if matches!(&*tag.name, "base" | "basefont" | "bgsound" | "link" | "meta") =>
                {
                    // FIXME: handle <meta charset=...> re-decode signals
                    self.insert_and_pop_element_for(tag);
                    DoneAckSelfClosing
                }
                StartTag(tag) if tag.name == "title" => self.parse_raw_data(tag, RawKind::Rcdata),
                StartTag(tag) if matches!(&*tag.name, "noframes" | "style" | "noscript") => {
                    // scripting is treated as enabled, so <noscript> is raw text
                    self.parse_raw_data(tag, RawKind::Rawtext)
                }
                StartTag(tag) if tag.name == "script" => {
                    self.parse_raw_data(tag, RawKind::ScriptData)
                }
                StartTag(tag) if tag.name == "template" => {
                    self.insert_element_for(tag);
                    self.active_formatting.push(FormatEntry::Marker);
                    self.frameset_ok = false;
                    self.mode = InTemplate;
                    self.template_modes.push(InTemplate);
                    Done
                }
                EndTag(ref tag) if tag.name == "template" => {
                    if !self.in_html_elem_named("template") {
                        return self.unexpected("</template> with no open template");
                    }
                    self.generate_implied_end_tags(scopes::thorough_implied_end);
                    if !self.current_node_named("template") {
                        self.parse_error("unclosed elements in <template>");
                    }
                    self.pop_until_named("template");
                    self.clear_active_formatting_to_marker();
                    self.template_modes.pop();
                    self.mode = self.reset_insertion_mode();
                    Done
                }
                EndTag(ref tag) if tag.name == "head" => {
                    self.pop();
                    self.mode = AfterHead;
                    Done
                }
                EndTag(ref tag) if !matches!(&*tag.name, "body" | "html" | "br") => {
                    self.unexpected("end tag in <head>")
                }
                StartTag(ref tag) if tag.name == "head" => self.unexpected("<head> in <head>"),
                token => {
                    self.pop();
                    Reprocess(AfterHead, token)
                }
            },

            InHeadNoscript => match token {
                Characters(NotSplit, text) => SplitWhitespace(text),
                Characters(Whitespace, _) => self.step(InHead, token),
                Comment(_) => self.step(InHead, token),
                StartTag(ref tag) if tag.name == "html" => self.step(InBody, token),
                EndTag(ref tag) if tag.name == "noscript" => {
                    self.pop();
                    self.mode = InHead;
                    Done
                }
                StartTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "basefont" | "bgsound" | "link" | "meta" | "noframes" | "style"
                    ) =>
                {
                    self.step(InHead, token)
                }
                StartTag(ref tag) if matches!(&*tag.name, "head" | "noscript") => {
                    self.unexpected("unexpected tag in <noscript>")
                }
                EndTag(ref tag) if tag.name != "br" => {
                    self.unexpected("unexpected end tag in <noscript>")
                }
                token => {
                    self.parse_error("unexpected content in <noscript>");
                    self.pop();
                    Reprocess(InHead, token)
                }
            },

            AfterHead => match token {
                Characters(NotSplit, text) => SplitWhitespace(text),
                Characters(Whitespace, text) => self.append_text(text),
                Comment(text) => self.append_comment(text),
                StartTag(ref tag) if tag.name == "html" => self.step(InBody, token),
                StartTag(tag) if tag.name == "body" => {
                    self.insert_element_for(tag);
                    self.frameset_ok = false;
                    self.mode = InBody;
                    Done
                }
                StartTag(tag) if tag.name == "frameset" => {
                    self.insert_element_for(tag);
                    self.mode = InFrameset;
                    Done
                }
                StartTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes"
                            | "script" | "style" | "template" | "title"
                    ) =>
                {
                    self.parse_error("head-only tag after <head>");
                    let head = self.head_elem.expect("no head element");
                    self.push(head);
                    let result = self.step(InHead, token);
                    self.remove_from_stack(head);
                    result
                }
                EndTag(ref tag) if tag.name == "template" => self.step(InHead, token),
                EndTag(ref tag) if !matches!(&*tag.name, "body" | "html" | "br") => {
                    self.unexpected("end tag after <head>")
                }
                StartTag(ref tag) if tag.name == "head" => {
                    self.unexpected("<head> after <head>")
                }
                token => {
                    self.insert_phantom("body");
                    Reprocess(InBody, token)
                }
            },

            InBody => match token {
                NullCharacter => self.unexpected("null character in body"),
                Characters(NotSplit, text) => SplitWhitespace(text),
                Characters(Whitespace, text) => {
                    self.reconstruct_active_formatting_elements();
                    self.append_text(text)
                }
                Characters(NotWhitespace, text) => {
                    self.reconstruct_active_formatting_elements();
                    self.frameset_ok = false;
                    self.append_text(text)
                }
                Comment(text) => self.append_comment(text),
                StartTag(tag) if tag.name == "html" => {
                    self.parse_error("<html> in body");
                    if !self.in_html_elem_named("template") {
                        let root = self.open_elems[0];
                        self.store.get_mut(root).attrs.merge_missing(tag.attrs);
                    }
                    Done
                }
                StartTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes"
                            | "script" | "style" | "template" | "title"
                    ) =>
                {
                    self.step(InHead, token)
                }
                EndTag(ref tag) if tag.name == "template" => self.step(InHead, token),
                StartTag(tag) if tag.name == "body" => {
                    self.parse_error("<body> in body");
                    if let Some(body) = self.body_elem() {
                        if !self.in_html_elem_named("template") {
                            self.frameset_ok = false;
                            self.store.get_mut(body).attrs.merge_missing(tag.attrs);
                        }
                    }
                    Done
                }
                StartTag(tag) if tag.name == "frameset" => {
                    self.parse_error("<frameset> in body");
                    if self.frameset_ok {
                        if let Some(body) = self.body_elem() {
                            self.store.remove_from_parent(body);
                            self.open_elems.truncate(1);
                            self.insert_element_for(tag);
                            self.mode = InFrameset;
                        }
                    }
                    Done
                }
                Eof => {
                    if !self.template_modes.is_empty() {
                        self.step(InTemplate, Eof)
                    } else {
                        self.check_body_end();
                        Done
                    }
                }
                EndTag(ref tag) if tag.name == "body" => {
                    if self.in_scope_named(scopes::default_scope, "body") {
                        self.check_body_end();
                        self.mode = AfterBody;
                    } else {
                        self.parse_error("</body> with no <body> in scope");
                    }
                    Done
                }
                EndTag(ref tag) if tag.name == "html" => {
                    if self.in_scope_named(scopes::default_scope, "body") {
                        self.check_body_end();
                        Reprocess(AfterBody, token)
                    } else {
                        self.unexpected("</html> with no <body> in scope")
                    }
                }
                StartTag(tag)
                    if matches!(
                        &*tag.name,
                        "address" | "article" | "aside" | "blockquote" | "center" | "details"
                            | "dialog" | "dir" | "div" | "dl" | "fieldset" | "figcaption"
                            | "figure" | "footer" | "header" | "hgroup" | "main" | "menu"
                            | "nav" | "ol" | "p" | "section" | "summary" | "ul"
                    ) =>
                {
                    self.close_p_element_in_button_scope();
                    self.insert_element_for(tag);
                    Done
                }
                StartTag(tag) if scopes::heading_tag((Namespace::Html, &*tag.name)) => {
                    self.close_p_element_in_button_scope();
                    if self.current_node_in(scopes::heading_tag) {
                        self.parse_error("nested heading tags");
                        self.pop();
                    }
                    self.insert_element_for(tag);
                    Done
                }
                StartTag(tag) if matches!(&*tag.name, "pre" | "listing") => {
                    self.close_p_element_in_button_scope();
                    self.insert_element_for(tag);
                    self.ignore_lf = true;
                    self.frameset_ok = false;
                    Done
                }
                StartTag(tag) if tag.name == "form" => {
                    if self.form_elem.is_some() && !self.in_html_elem_named("template") {
                        self.parse_error("nested forms");
                    } else {
                        self.close_p_element_in_button_scope();
                        let node = self.insert_element_for(tag);
                        if !self.in_html_elem_named("template") {
                            self.form_elem = Some(node);
                        }
                    }
                    Done
                }
                StartTag(tag) if tag.name == "li" => {
                    self.frameset_ok = false;
                    for &node in self.open_elems.clone().iter().rev() {
                        if self.html_elem_named(node, "li") {
                            self.generate_implied_end_except("li");
                            if !self.current_node_named("li") {
                                self.parse_error("unclosed elements inside <li>");
                            }
                            self.pop_until_named("li");
                            break;
                        }
                        if self.elem_in(node, scopes::special_tag)
                            && !self.elem_in(node, |(ns, local)| {
                                ns == Namespace::Html
                                    && matches!(local, "address" | "div" | "p")
                            })
                        {
                            break;
                        }
                    }
                    self.close_p_element_in_button_scope();
                    self.insert_element_for(tag);
                    Done
                }
                StartTag(tag) if matches!(&*tag.name, "dd" | "dt") => {
                    self.frameset_ok = false;
                    for &node in self.open_elems.clone().iter().rev() {
                        let closing = if self.html_elem_named(node, "dd") {
                            Some("dd")
                        } else if self.html_elem_named(node, "dt") {
                            Some("dt")
                        } else {
                            None
                        };
                        if let Some(name) = closing {
                            self.generate_implied_end_except(name);
                            if !self.current_node_named(name) {
                                self.parse_error("unclosed elements inside definition list item");
                            }
                            self.pop_until_named(name);
                            break;
                        }
                        if self.elem_in(node, scopes::special_tag)
                            && !self.elem_in(node, |(ns, local)| {
                                ns == Namespace::Html
                                    && matches!(local, "address" | "div" | "p")
                            })
                        {
                            break;
                        }
                    }
                    self.close_p_element_in_button_scope();
                    self.insert_element_for(tag);
                    Done
                }
                StartTag(tag) if tag.name == "plaintext" => {
                    self.close_p_element_in_button_scope();
                    self.insert_element_for(tag);
                    self.tokenizer.set_state(crate::State::PlainText);
                    Done
                }
                StartTag(tag) if tag.name == "button" => {
                    if self.in_scope_named(scopes::default_scope, "button") {
                        self.parse_error("nested buttons");
                        self.generate_implied_end_tags(scopes::cursory_implied_end);
                        self.pop_until_named("button");
                    }
                    self.reconstruct_active_formatting_elements();
                    self.insert_element_for(tag);
                    self.frameset_ok = false;
                    Done
                }
                EndTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "address" | "article" | "aside" | "blockquote" | "button" | "center"
                            | "details" | "dialog" | "dir" | "div" | "dl" | "fieldset"
                            | "figcaption" | "figure" | "footer" | "header" | "hgroup"
                            | "listing" | "main" | "menu" | "nav" | "ol" | "pre" | "section"
                            | "summary" | "ul"
                    ) =>
                {
                    if !self.in_scope_named(scopes::default_scope, &tag.name) {
                        self.unexpected("end tag with no matching element in scope")
                    } else {
                        self.generate_implied_end_tags(scopes::cursory_implied_end);
                        if !self.current_node_named(&tag.name) {
                            self.parse_error("unclosed elements in block close");
                        }
                        self.pop_until_named(&tag.name);
                        Done
                    }
                }
                EndTag(ref tag) if tag.name == "form" => {
                    if !self.in_html_elem_named("template") {
                        let Some(node) = self.form_elem.take() else {
                            return self.unexpected("</form> with no <form>");
                        };
                        if !self.in_scope(scopes::default_scope, |n| n == node) {
                            return self.unexpected("</form> with <form> out of scope");
                        }
                        self.generate_implied_end_tags(scopes::cursory_implied_end);
                        if self.current_node() != node {
                            self.parse_error("unclosed elements in </form>");
                        }
                        self.remove_from_stack(node);
                    } else {
                        if !self.in_scope_named(scopes::default_scope, "form") {
                            return self.unexpected("</form> with no <form> in scope");
                        }
                        self.generate_implied_end_tags(scopes::cursory_implied_end);
                        if !self.current_node_named("form") {
                            self.parse_error("unclosed elements in </form>");
                        }
                        self.pop_until_named("form");
                    }
                    Done
                }
                EndTag(ref tag) if tag.name == "p" => {
                    if !self.in_scope_named(scopes::button_scope, "p") {
                        self.parse_error("no <p> to close");
                        self.insert_phantom("p");
                    }
                    self.close_p_element();
                    Done
                }
                EndTag(ref tag) if tag.name == "li" => {
                    if !self.in_scope_named(scopes::list_item_scope, "li") {
                        self.unexpected("</li> with no <li> in scope")
                    } else {
                        self.generate_implied_end_except("li");
                        if !self.current_node_named("li") {
                            self.parse_error("unclosed elements in </li>");
                        }
                        self.pop_until_named("li");
                        Done
                    }
                }
                EndTag(ref tag) if matches!(&*tag.name, "dd" | "dt") => {
                    if !self.in_scope_named(scopes::default_scope, &tag.name) {
                        self.unexpected("end tag with no matching list item in scope")
                    } else {
                        self.generate_implied_end_except(&tag.name);
                        if !self.current_node_named(&tag.name) {
                            self.parse_error("unclosed elements in list item close");
                        }
                        self.pop_until_named(&tag.name);
                        Done
                    }
                }
                EndTag(ref tag) if scopes::heading_tag((Namespace::Html, &*tag.name)) => {
                    if !self.in_scope(scopes::default_scope, |n| {
                        self.elem_in(n, scopes::heading_tag)
                    }) {
                        self.unexpected("heading end tag with no heading in scope")
                    } else {
                        self.generate_implied_end_tags(scopes::cursory_implied_end);
                        if !self.current_node_named(&tag.name) {
                            self.parse_error("heading closed by different heading");
                        }
                        self.pop_until(scopes::heading_tag);
                        Done
                    }
                }
                StartTag(tag) if tag.name == "a" => {
                    self.handle_misnested_a_tags(&tag);
                    self.reconstruct_active_formatting_elements();
                    self.create_formatting_element_for(tag);
                    Done
                }
                StartTag(tag)
                    if matches!(
                        &*tag.name,
                        "b" | "big" | "code" | "em" | "font" | "i" | "s" | "small" | "strike"
                            | "strong" | "tt" | "u"
                    ) =>
                {
                    self.reconstruct_active_formatting_elements();
                    self.create_formatting_element_for(tag);
                    Done
                }
                StartTag(tag) if tag.name == "nobr" => {
                    self.reconstruct_active_formatting_elements();
                    if self.in_scope_named(scopes::default_scope, "nobr") {
                        self.parse_error("nested <nobr>");
                        self.adoption_agency("nobr");
                        self.reconstruct_active_formatting_elements();
                    }
                    self.create_formatting_element_for(tag);
                    Done
                }
                EndTag(ref tag) if scopes::formatting_tag((Namespace::Html, &*tag.name)) => {
                    self.adoption_agency(&tag.name);
                    Done
                }
                StartTag(tag) if matches!(&*tag.name, "applet" | "marquee" | "object") => {
                    self.reconstruct_active_formatting_elements();
                    self.insert_element_for(tag);
                    self.active_formatting.push(FormatEntry::Marker);
                    self.frameset_ok = false;
                    Done
                }
                EndTag(ref tag) if matches!(&*tag.name, "applet" | "marquee" | "object") => {
                    if !self.in_scope_named(scopes::default_scope, &tag.name) {
                        self.unexpected("end tag with no matching element in scope")
                    } else {
                        self.generate_implied_end_tags(scopes::cursory_implied_end);
                        if !self.current_node_named(&tag.name) {
                            self.parse_error("unclosed elements in marker close");
                        }
                        self.pop_until_named(&tag.name);
                        self.clear_active_formatting_to_marker();
                        Done
                    }
                }
                StartTag(tag) if tag.name == "table" => {
                    if self.quirks_mode != QuirksMode::Quirks {
                        self.close_p_element_in_button_scope();
                    }
                    self.insert_element_for(tag);
                    self.frameset_ok = false;
                    self.mode = InTable;
                    Done
                }
                EndTag(tag) if tag.name == "br" => {
                    self.parse_error("</br> treated as <br>");
                    self.step(
                        InBody,
                        StartTag(crate::StartTag {
                            name: tag.name,
                            ..crate::StartTag::default()
                        }),
                    )
                }
                StartTag(tag)
                    if matches!(&*tag.name, "area" | "br" | "embed" | "img" | "keygen" | "wbr") =>
                {
                    self.reconstruct_active_formatting_elements();
                    self.insert_and_pop_element_for(tag);
                    self.frameset_ok = false;
                    DoneAckSelfClosing
                }
                StartTag(tag) if tag.name == "input" => {
                    self.reconstruct_active_formatting_elements();
                    let is_hidden = self.is_type_hidden(&tag);
                    self.insert_and_pop_element_for(tag);
                    if !is_hidden {
                        self.frameset_ok = false;
                    }
                    DoneAckSelfClosing
                }
                StartTag(tag) if matches!(&*tag.name, "param" | "source" | "track") => {
                    self.insert_and_pop_element_for(tag);
                    DoneAckSelfClosing
                }
                StartTag(tag) if tag.name == "hr" => {
                    self.close_p_element_in_button_scope();
                    self.insert_and_pop_element_for(tag);
                    self.frameset_ok = false;
                    DoneAckSelfClosing
                }
                StartTag(mut tag) if tag.name == "image" => {
                    // "change the token's tag name to img and reprocess it. (Don't ask.)"
                    self.parse_error("<image> treated as <img>");
                    tag.name = "img".to_owned();
                    Reprocess(InBody, StartTag(tag))
                }
                StartTag(tag) if tag.name == "textarea" => {
                    self.insert_element_for(tag);
                    self.ignore_lf = true;
                    self.frameset_ok = false;
                    self.orig_mode = Some(InBody);
                    self.mode = Text;
                    self.tokenizer.set_state(crate::State::RcData);
                    Done
                }
                StartTag(tag) if tag.name == "xmp" => {
                    self.close_p_element_in_button_scope();
                    self.reconstruct_active_formatting_elements();
                    self.frameset_ok = false;
                    self.parse_raw_data(tag, RawKind::Rawtext)
                }
                StartTag(tag) if tag.name == "iframe" => {
                    self.frameset_ok = false;
                    self.parse_raw_data(tag, RawKind::Rawtext)
                }
                StartTag(tag) if matches!(&*tag.name, "noembed" | "noscript") => {
                    // scripting is treated as enabled, so <noscript> is raw text
                    self.parse_raw_data(tag, RawKind::Rawtext)
                }
                StartTag(tag) if tag.name == "select" => {
                    self.reconstruct_active_formatting_elements();
                    self.insert_element_for(tag);
                    self.frameset_ok = false;
                    // `select` inside table structure gets the recovery variant
                    self.mode = match self.mode {
                        InTable | InCaption | InTableBody | InRow | InCell => InSelectInTable,
                        _ => InSelect,
                    };
                    Done
                }
                StartTag(tag) if matches!(&*tag.name, "optgroup" | "option") => {
                    if self.current_node_named("option") {
                        self.pop();
                    }
                    self.reconstruct_active_formatting_elements();
                    self.insert_element_for(tag);
                    Done
                }
                StartTag(tag) if matches!(&*tag.name, "rb" | "rtc") => {
                    if self.in_scope_named(scopes::default_scope, "ruby") {
                        self.generate_implied_end_tags(scopes::cursory_implied_end);
                        if !self.current_node_named("ruby") {
                            self.parse_error("ruby annotation outside <ruby>");
                        }
                    }
                    self.insert_element_for(tag);
                    Done
                }
                StartTag(tag) if matches!(&*tag.name, "rp" | "rt") => {
                    if self.in_scope_named(scopes::default_scope, "ruby") {
                        self.generate_implied_end_except("rtc");
                        if !(self.current_node_named("ruby") || self.current_node_named("rtc")) {
                            self.parse_error("ruby text outside <ruby>");
                        }
                    }
                    self.insert_element_for(tag);
                    Done
                }
                StartTag(tag) if tag.name == "math" => {
                    self.reconstruct_active_formatting_elements();
                    self.enter_foreign(tag, Namespace::MathMl)
                }
                StartTag(tag) if tag.name == "svg" => {
                    self.reconstruct_active_formatting_elements();
                    self.enter_foreign(tag, Namespace::Svg)
                }
                StartTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "caption" | "col" | "colgroup" | "frame" | "head" | "tbody" | "td"
                            | "tfoot" | "th" | "thead" | "tr"
                    ) =>
                {
                    self.unexpected("table structure tag in body")
                }
                StartTag(tag) => {
                    self.reconstruct_active_formatting_elements();
                    self.insert_element_for(tag);
                    Done
                }
                EndTag(tag) => {
                    self.process_end_tag_in_body(tag);
                    Done
                }
            },

            Text => match token {
                Characters(_, text) => self.append_text(text),
                Eof => {
                    self.parse_error("unexpected end of input in text");
                    self.pop();
                    let mode = self.orig_mode.take().expect("no original insertion mode");
                    Reprocess(mode, Eof)
                }
                EndTag(_) => {
                    self.pop();
                    self.mode = self.orig_mode.take().expect("no original insertion mode");
                    Done
                }
                _ => unreachable!("impossible token in text mode"),
            },

            InTable => match token {
                NullCharacter | Characters(..) => self.process_chars_in_table(token),
                Comment(text) => self.append_comment(text),
                StartTag(tag) if tag.name == "caption" => {
                    self.pop_until_current(scopes::table_context);
                    self.active_formatting.push(FormatEntry::Marker);
                    self.insert_element_for(tag);
                    self.mode = InCaption;
                    Done
                }
                StartTag(tag) if tag.name == "colgroup" => {
                    self.pop_until_current(scopes::table_context);
                    self.insert_element_for(tag);
                    self.mode = InColumnGroup;
                    Done
                }
                StartTag(ref tag) if tag.name == "col" => {
                    self.pop_until_current(scopes::table_context);
                    self.insert_phantom("colgroup");
                    Reprocess(InColumnGroup, token)
                }
                StartTag(tag) if matches!(&*tag.name, "tbody" | "tfoot" | "thead") => {
                    self.pop_until_current(scopes::table_context);
                    self.insert_element_for(tag);
                    self.mode = InTableBody;
                    Done
                }
                StartTag(ref tag) if matches!(&*tag.name, "td" | "th" | "tr") => {
                    self.pop_until_current(scopes::table_context);
                    self.insert_phantom("tbody");
                    Reprocess(InTableBody, token)
                }
                StartTag(ref tag) if tag.name == "table" => {
                    self.parse_error("<table> in <table>");
                    if self.in_scope_named(scopes::table_scope, "table") {
                        self.pop_until_named("table");
                        let mode = self.reset_insertion_mode();
                        Reprocess(mode, token)
                    } else {
                        Done
                    }
                }
                EndTag(ref tag) if tag.name == "table" => {
                    if self.in_scope_named(scopes::table_scope, "table") {
                        self.pop_until_named("table");
                        self.mode = self.reset_insertion_mode();
                    } else {
                        self.parse_error("</table> with no <table> in scope");
                    }
                    Done
                }
                EndTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "body" | "caption" | "col" | "colgroup" | "html" | "tbody" | "td"
                            | "tfoot" | "th" | "thead" | "tr"
                    ) =>
                {
                    self.unexpected("stray end tag in table")
                }
                StartTag(ref tag) if matches!(&*tag.name, "style" | "script" | "template") => {
                    self.step(InHead, token)
                }
                EndTag(ref tag) if tag.name == "template" => self.step(InHead, token),
                StartTag(tag) if tag.name == "input" && self.is_type_hidden(&tag) => {
                    self.parse_error("hidden <input> in table");
                    self.insert_and_pop_element_for(tag);
                    DoneAckSelfClosing
                }
                StartTag(tag) if tag.name == "form" => {
                    self.parse_error("<form> in table");
                    if !self.in_html_elem_named("template") && self.form_elem.is_none() {
                        let node = self.insert_and_pop_element_for(tag);
                        self.form_elem = Some(node);
                    }
                    Done
                }
                Eof => self.step(InBody, token),
                token => {
                    self.parse_error("misplaced content in table");
                    self.foster_parent_in_body(token)
                }
            },

            InTableText => match token {
                NullCharacter => self.unexpected("null character in table text"),
                Characters(NotSplit, text) => SplitWhitespace(text),
                Characters(split, text) => {
                    self.pending_table_text.push((split, text));
                    Done
                }
                token => {
                    let pending = std::mem::take(&mut self.pending_table_text);
                    let contains_nonspace = pending
                        .iter()
                        .any(|&(split, _)| split == NotWhitespace);

                    if contains_nonspace {
                        self.parse_error("non-whitespace characters in table structure");
                        for (split, text) in pending {
                            self.foster_parent_in_body(Characters(split, text));
                        }
                    } else {
                        for (_, text) in pending {
                            self.append_text(text);
                        }
                    }

                    let mode = self.orig_mode.take().expect("no original insertion mode");
                    Reprocess(mode, token)
                }
            },

            InCaption => match token {
                StartTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "caption" | "col" | "colgroup" | "tbody" | "td" | "tfoot" | "th"
                            | "thead" | "tr"
                    ) =>
                {
                    if self.close_caption() {
                        Reprocess(InTable, token)
                    } else {
                        Done
                    }
                }
                EndTag(ref tag) if tag.name == "caption" => {
                    self.close_caption();
                    Done
                }
                EndTag(ref tag) if tag.name == "table" => {
                    if self.close_caption() {
                        Reprocess(InTable, token)
                    } else {
                        Done
                    }
                }
                EndTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "body" | "col" | "colgroup" | "html" | "tbody" | "td" | "tfoot" | "th"
                            | "thead" | "tr"
                    ) =>
                {
                    self.unexpected("stray end tag in <caption>")
                }
                token => self.step(InBody, token),
            },

            InColumnGroup => match token {
                Characters(NotSplit, text) => SplitWhitespace(text),
                Characters(Whitespace, text) => self.append_text(text),
                Comment(text) => self.append_comment(text),
                StartTag(ref tag) if tag.name == "html" => self.step(InBody, token),
                StartTag(tag) if tag.name == "col" => {
                    self.insert_and_pop_element_for(tag);
                    DoneAckSelfClosing
                }
                EndTag(ref tag) if tag.name == "colgroup" => {
                    if self.current_node_named("colgroup") {
                        self.pop();
                        self.mode = InTable;
                    } else {
                        self.parse_error("</colgroup> with wrong current node");
                    }
                    Done
                }
                EndTag(ref tag) if tag.name == "col" => self.unexpected("stray </col>"),
                StartTag(ref tag) if tag.name == "template" => self.step(InHead, token),
                EndTag(ref tag) if tag.name == "template" => self.step(InHead, token),
                Eof => self.step(InBody, token),
                token => {
                    if self.current_node_named("colgroup") {
                        self.pop();
                        Reprocess(InTable, token)
                    } else {
                        self.unexpected("misplaced content in <colgroup>")
                    }
                }
            },

            InTableBody => match token {
                StartTag(tag) if tag.name == "tr" => {
                    self.pop_until_current(scopes::table_body_context);
                    self.insert_element_for(tag);
                    self.mode = InRow;
                    Done
                }
                StartTag(ref tag) if matches!(&*tag.name, "th" | "td") => {
                    self.parse_error("cell outside of row");
                    self.pop_until_current(scopes::table_body_context);
                    self.insert_phantom("tr");
                    Reprocess(InRow, token)
                }
                EndTag(ref tag) if matches!(&*tag.name, "tbody" | "tfoot" | "thead") => {
                    if self.in_scope_named(scopes::table_scope, &tag.name) {
                        self.pop_until_current(scopes::table_body_context);
                        self.pop();
                        self.mode = InTable;
                    } else {
                        self.parse_error("stray table section end tag");
                    }
                    Done
                }
                StartTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "caption" | "col" | "colgroup" | "tbody" | "tfoot" | "thead"
                    ) =>
                {
                    self.exit_table_body(token)
                }
                EndTag(ref tag) if tag.name == "table" => self.exit_table_body(token),
                EndTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "body" | "caption" | "col" | "colgroup" | "html" | "td" | "th" | "tr"
                    ) =>
                {
                    self.unexpected("stray end tag in table body")
                }
                token => self.step(InTable, token),
            },

            InRow => match token {
                StartTag(tag) if matches!(&*tag.name, "th" | "td") => {
                    self.pop_until_current(scopes::table_row_context);
                    self.insert_element_for(tag);
                    self.mode = InCell;
                    self.active_formatting.push(FormatEntry::Marker);
                    Done
                }
                EndTag(ref tag) if tag.name == "tr" => {
                    if self.in_scope_named(scopes::table_scope, "tr") {
                        self.pop_until_current(scopes::table_row_context);
                        let node = self.pop();
                        debug_assert!(self.html_elem_named(node, "tr"));
                        self.mode = InTableBody;
                    } else {
                        self.parse_error("stray </tr>");
                    }
                    Done
                }
                StartTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "caption" | "col" | "colgroup" | "tbody" | "tfoot" | "thead" | "tr"
                    ) =>
                {
                    if self.in_scope_named(scopes::table_scope, "tr") {
                        self.pop_until_current(scopes::table_row_context);
                        self.pop();
                        Reprocess(InTableBody, token)
                    } else {
                        self.unexpected("table structure tag with no <tr> in scope")
                    }
                }
                EndTag(ref tag) if tag.name == "table" => {
                    if self.in_scope_named(scopes::table_scope, "tr") {
                        self.pop_until_current(scopes::table_row_context);
                        self.pop();
                        Reprocess(InTableBody, token)
                    } else {
                        self.unexpected("</table> with no <tr> in scope")
                    }
                }
                EndTag(ref tag) if matches!(&*tag.name, "tbody" | "tfoot" | "thead") => {
                    if !self.in_scope_named(scopes::table_scope, &tag.name) {
                        self.unexpected("stray table section end tag in row")
                    } else if self.in_scope_named(scopes::table_scope, "tr") {
                        self.pop_until_current(scopes::table_row_context);
                        self.pop();
                        Reprocess(InTableBody, token)
                    } else {
                        Done
                    }
                }
                EndTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "body" | "caption" | "col" | "colgroup" | "html" | "td" | "th"
                    ) =>
                {
                    self.unexpected("stray end tag in row")
                }
                token => self.step(InTable, token),
            },

            InCell => match token {
                EndTag(ref tag) if matches!(&*tag.name, "td" | "th") => {
                    if self.in_scope_named(scopes::table_scope, &tag.name) {
                        self.generate_implied_end_tags(scopes::cursory_implied_end);
                        if !self.current_node_named(&tag.name) {
                            self.parse_error("unclosed elements in cell");
                        }
                        self.pop_until_named(&tag.name);
                        self.clear_active_formatting_to_marker();
                        self.mode = InRow;
                    } else {
                        self.parse_error("stray cell end tag");
                    }
                    Done
                }
                StartTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "caption" | "col" | "colgroup" | "tbody" | "td" | "tfoot" | "th"
                            | "thead" | "tr"
                    ) =>
                {
                    if self.in_scope(scopes::table_scope, |n| self.elem_in(n, scopes::td_th)) {
                        self.close_the_cell();
                        Reprocess(InRow, token)
                    } else {
                        self.unexpected("table structure tag outside cell")
                    }
                }
                EndTag(ref tag)
                    if matches!(&*tag.name, "body" | "caption" | "col" | "colgroup" | "html") =>
                {
                    self.unexpected("stray end tag in cell")
                }
                EndTag(ref tag)
                    if matches!(&*tag.name, "table" | "tbody" | "tfoot" | "thead" | "tr") =>
                {
                    if self.in_scope_named(scopes::table_scope, &tag.name) {
                        self.close_the_cell();
                        Reprocess(InRow, token)
                    } else {
                        self.unexpected("stray table end tag in cell")
                    }
                }
                token => self.step(InBody, token),
            },

            InSelect => match token {
                NullCharacter => self.unexpected("null character in <select>"),
                Characters(_, text) => self.append_text(text),
                Comment(text) => self.append_comment(text),
                StartTag(ref tag) if tag.name == "html" => self.step(InBody, token),
                StartTag(tag) if tag.name == "option" => {
                    if self.current_node_named("option") {
                        self.pop();
                    }
                    self.insert_element_for(tag);
                    Done
                }
                StartTag(tag) if tag.name == "optgroup" => {
                    if self.current_node_named("option") {
                        self.pop();
                    }
                    if self.current_node_named("optgroup") {
                        self.pop();
                    }
                    self.insert_element_for(tag);
                    Done
                }
                EndTag(ref tag) if tag.name == "optgroup" => {
                    if self.open_elems.len() >= 2
                        && self.current_node_named("option")
                        && self.html_elem_named(
                            self.open_elems[self.open_elems.len() - 2],
                            "optgroup",
                        )
                    {
                        self.pop();
                    }
                    if self.current_node_named("optgroup") {
                        self.pop();
                    } else {
                        self.parse_error("stray </optgroup>");
                    }
                    Done
                }
                EndTag(ref tag) if tag.name == "option" => {
                    if self.current_node_named("option") {
                        self.pop();
                    } else {
                        self.parse_error("stray </option>");
                    }
                    Done
                }
                EndTag(ref tag) if tag.name == "select" => {
                    if self.in_scope_named(scopes::select_scope, "select") {
                        self.pop_until_named("select");
                        self.mode = self.reset_insertion_mode();
                    } else {
                        self.parse_error("stray </select>");
                    }
                    Done
                }
                StartTag(ref tag) if tag.name == "select" => {
                    self.parse_error("<select> in <select>");
                    if self.in_scope_named(scopes::select_scope, "select") {
                        self.pop_until_named("select");
                        self.mode = self.reset_insertion_mode();
                    }
                    Done
                }
                StartTag(ref tag) if matches!(&*tag.name, "input" | "keygen" | "textarea") => {
                    self.parse_error("form control in <select>");
                    if self.in_scope_named(scopes::select_scope, "select") {
                        self.pop_until_named("select");
                        let mode = self.reset_insertion_mode();
                        Reprocess(mode, token)
                    } else {
                        Done
                    }
                }
                StartTag(ref tag) if matches!(&*tag.name, "script" | "template") => {
                    self.step(InHead, token)
                }
                EndTag(ref tag) if tag.name == "template" => self.step(InHead, token),
                Eof => self.step(InBody, token),
                _ => self.unexpected("misplaced content in <select>"),
            },

            InSelectInTable => match token {
                StartTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "caption" | "table" | "tbody" | "tfoot" | "thead" | "tr" | "td" | "th"
                    ) =>
                {
                    self.parse_error("table structure tag in <select> in table");
                    self.pop_until_named("select");
                    let mode = self.reset_insertion_mode();
                    Reprocess(mode, token)
                }
                EndTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "caption" | "table" | "tbody" | "tfoot" | "thead" | "tr" | "td" | "th"
                    ) =>
                {
                    self.parse_error("table structure end tag in <select> in table");
                    if self.in_scope_named(scopes::table_scope, &tag.name) {
                        self.pop_until_named("select");
                        let mode = self.reset_insertion_mode();
                        Reprocess(mode, token)
                    } else {
                        Done
                    }
                }
                token => self.step(InSelect, token),
            },

            InTemplate => match token {
                Characters(..) | NullCharacter | Comment(_) => self.step(InBody, token),
                StartTag(ref tag)
                    if matches!(
                        &*tag.name,
                        "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes"
                            | "script" | "style" | "template" | "title"
                    ) =>
                {
                    self.step(InHead, token)
                }
                EndTag(ref tag) if tag.name == "template" => self.step(InHead, token),
                StartTag(ref tag)
                    if matches!(&*tag.name, "caption" | "colgroup" | "tbody" | "tfoot" | "thead") =>
                {
                    self.retarget_template(InTable, token)
                }
                StartTag(ref tag) if tag.name == "col" => {
                    self.retarget_template(InColumnGroup, token)
                }
                StartTag(ref tag) if tag.name == "tr" => {
                    self.retarget_template(InTableBody, token)
                }
                StartTag(ref tag) if matches!(&*tag.name, "td" | "th") => {
                    self.retarget_template(InRow, token)
                }
                StartTag(_) => self.retarget_template(InBody, token),
                EndTag(_) => self.unexpected("end tag in template"),
                Eof => {
                    if !self.in_html_elem_named("template") {
                        // stop parsing
                        return Done;
                    }
                    self.parse_error("unexpected end of input in template");
                    self.pop_until_named("template");
                    self.clear_active_formatting_to_marker();
                    self.template_modes.pop();
                    let mode = self.reset_insertion_mode();
                    Reprocess(mode, Eof)
                }
            },

            AfterBody => match token {
                Characters(NotSplit, text) => SplitWhitespace(text),
                Characters(Whitespace, _) => self.step(InBody, token),
                Comment(text) => self.append_comment_to_html(text),
                StartTag(ref tag) if tag.name == "html" => self.step(InBody, token),
                EndTag(ref tag) if tag.name == "html" => {
                    if self.context_elem.is_some() {
                        self.unexpected("</html> in fragment")
                    } else {
                        self.mode = AfterAfterBody;
                        Done
                    }
                }
                Eof => Done,
                token => {
                    self.parse_error("content after </body>");
                    Reprocess(InBody, token)
                }
            },

            InFrameset => match token {
                Characters(NotSplit, text) => SplitWhitespace(text),
                Characters(Whitespace, text) => self.append_text(text),
                Comment(text) => self.append_comment(text),
                StartTag(ref tag) if tag.name == "html" => self.step(InBody, token),
                StartTag(tag) if tag.name == "frameset" => {
                    self.insert_element_for(tag);
                    Done
                }
                EndTag(ref tag) if tag.name == "frameset" => {
                    if self.open_elems.len() == 1 {
                        self.parse_error("stray </frameset>");
                    } else {
                        self.pop();
                        if self.context_elem.is_none() && !self.current_node_named("frameset") {
                            self.mode = AfterFrameset;
                        }
                    }
                    Done
                }
                StartTag(tag) if tag.name == "frame" => {
                    self.insert_and_pop_element_for(tag);
                    DoneAckSelfClosing
                }
                StartTag(ref tag) if tag.name == "noframes" => self.step(InHead, token),
                Eof => {
                    if self.open_elems.len() != 1 {
                        self.parse_error("unexpected end of input in frameset");
                    }
                    Done
                }
                _ => self.unexpected("misplaced content in frameset"),
            },

            AfterFrameset => match token {
                Characters(NotSplit, text) => SplitWhitespace(text),
                Characters(Whitespace, text) => self.append_text(text),
                Comment(text) => self.append_comment(text),
                StartTag(ref tag) if tag.name == "html" => self.step(InBody, token),
                EndTag(ref tag) if tag.name == "html" => {
                    self.mode = AfterAfterFrameset;
                    Done
                }
                StartTag(ref tag) if tag.name == "noframes" => self.step(InHead, token),
                Eof => Done,
                _ => self.unexpected("content after frameset"),
            },

            AfterAfterBody => match token {
                Characters(NotSplit, text) => SplitWhitespace(text),
                Characters(Whitespace, _) => self.step(InBody, token),
                Comment(text) => self.append_comment_to_doc(text),
                StartTag(ref tag) if tag.name == "html" => self.step(InBody, token),
                Eof => Done,
                token => {
                    self.parse_error("content after document end");
                    Reprocess(InBody, token)
                }
            },

            AfterAfterFrameset => match token {
                Characters(NotSplit, text) => SplitWhitespace(text),
                Characters(Whitespace, _) => self.step(InBody, token),
                Comment(text) => self.append_comment_to_doc(text),
                StartTag(ref tag) if tag.name == "html" => self.step(InBody, token),
                StartTag(ref tag) if tag.name == "noframes" => self.step(InHead, token),
                Eof => Done,
                _ => self.unexpected("content after frameset document end"),
            },
        }
    }

    /// Close the caption and return whether one was actually open.
    fn close_caption(&mut self) -> bool {
        if !self.in_scope_named(scopes::table_scope, "caption") {
            self.parse_error("caption close with no <caption> in scope");
            return false;
        }
        self.generate_implied_end_tags(scopes::cursory_implied_end);
        if !self.current_node_named("caption") {
            self.parse_error("unclosed elements in <caption>");
        }
        self.pop_until_named("caption");
        self.clear_active_formatting_to_marker();
        self.mode = InTable;
        true
    }

    fn exit_table_body(&mut self, token: TbToken) -> ProcessResult {
        if self
            .in_scope(scopes::table_scope, |n| {
                self.elem_in(n, |(ns, local)| {
                    ns == Namespace::Html && matches!(local, "tbody" | "tfoot" | "thead")
                })
            })
        {
            self.pop_until_current(scopes::table_body_context);
            self.pop();
            Reprocess(InTable, token)
        } else {
            self.unexpected("table structure tag with no section in scope")
        }
    }

    /// Switch the template insertion mode and reprocess (the in-template routing rule).
    fn retarget_template(&mut self, mode: InsertionMode, token: TbToken) -> ProcessResult {
        self.template_modes.pop();
        self.template_modes.push(mode);
        Reprocess(mode, token)
    }

    //§ parsing-main-inforeign

    pub(crate) fn step_foreign(&mut self, token: TbToken) -> ProcessResult {
        debug!("processing {:?} in foreign content", token);

        match token {
            NullCharacter => {
                self.parse_error("null character in foreign content");
                self.append_text("\u{fffd}".to_owned())
            }
            Characters(_, text) => {
                if text.chars().any(|c| !c.is_ascii_whitespace()) {
                    self.frameset_ok = false;
                }
                self.append_text(text)
            }
            Comment(text) => self.append_comment(text),
            StartTag(tag)
                if matches!(
                    &*tag.name,
                    "b" | "big" | "blockquote" | "body" | "br" | "center" | "code" | "dd"
                        | "div" | "dl" | "dt" | "em" | "embed" | "h1" | "h2" | "h3" | "h4"
                        | "h5" | "h6" | "head" | "hr" | "i" | "img" | "li" | "listing"
                        | "menu" | "meta" | "nobr" | "ol" | "p" | "pre" | "ruby" | "s"
                        | "small" | "span" | "strong" | "strike" | "sub" | "sup" | "table"
                        | "tt" | "u" | "ul" | "var"
                ) || (tag.name == "font"
                    && tag
                        .attrs
                        .iter()
                        .any(|attr| matches!(&*attr.name, "color" | "face" | "size"))) =>
            {
                self.foreign_breakout(StartTag(tag))
            }
            EndTag(ref tag) if matches!(&*tag.name, "br" | "p") => {
                self.foreign_breakout(token)
            }
            StartTag(tag) => self.foreign_start_tag(tag),
            EndTag(tag) => self.foreign_end_tag(tag),
            Eof => unreachable!("eof is never dispatched to foreign content"),
        }
    }

    /// The generic foreign end tag walk: pop to the matching element, or hand the token to
    /// the HTML rules once an HTML element is reached.
    fn foreign_end_tag(&mut self, tag: crate::EndTag) -> ProcessResult {
        let mut index = self.open_elems.len() - 1;
        let node = self.open_elems[index];
        if self.store.get(node).name.local.to_ascii_lowercase() != tag.name {
            self.parse_error("mismatched end tag in foreign content");
        }

        loop {
            if index == 0 {
                return Done;
            }
            let node = self.open_elems[index];
            if self.store.get(node).name.local.to_ascii_lowercase() == tag.name {
                while self.open_elems.len() > index {
                    self.pop();
                }
                return Done;
            }
            index -= 1;
            if self.store.get(self.open_elems[index]).name.ns == Namespace::Html {
                return self.step(self.mode, EndTag(tag));
            }
        }
    }

    /// An HTML tag that breaks out of foreign content: close the foreign subtree first,
    /// then process the tag with the HTML rules. In the fragment case there may be nothing
    /// HTML to close back to, so the tag stays foreign.
    fn foreign_breakout(&mut self, token: TbToken) -> ProcessResult {
        if self.context_elem.is_some() {
            return match token {
                StartTag(tag) => self.foreign_start_tag(tag),
                EndTag(tag) => self.foreign_end_tag(tag),
                _ => unreachable!("breakout is only reached for tags"),
            };
        }

        self.parse_error("HTML tag breaks out of foreign content");
        while !self.current_node_in(|name| {
            name.0 == Namespace::Html
                || scopes::mathml_text_integration_point(name)
                || scopes::svg_html_integration_point(name)
        }) {
            self.pop();
        }
        self.step(self.mode, token)
    }
}
