//! Tree construction tests: whole-document and fragment parses against the reference
//! tree shapes, plus structural invariants that must hold for arbitrary input.

mod common;

use common::{dump_document, dump_fragment};
use html5tree::{
    parse_document, parse_fragment, serialize, FragmentContext, Namespace, Node, ParseOpts,
    QuirksMode,
};
use pretty_assertions::assert_eq;

fn parse(input: &str) -> html5tree::Document {
    parse_document(input, ParseOpts::default())
}

fn assert_tree(input: &str, expected: &str) {
    let doc = parse(input);
    assert_eq!(dump_document(&doc), expected, "input: {:?}", input);
}

fn assert_fragment(input: &str, context: FragmentContext, expected: &str) {
    let nodes = parse_fragment(input, &context, ParseOpts::default());
    assert_eq!(dump_fragment(&nodes), expected, "input: {:?}", input);
}

#[test]
fn simple_paragraph_with_attribute() {
    assert_tree(
        "<p class='intro'>Hello!</p>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <p>\n\
         |       class=\"intro\"\n\
         |       \"Hello!\"\n",
    );
}

#[test]
fn implicit_paragraph_close() {
    assert_tree(
        "<p>One<p>Two",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <p>\n\
         |       \"One\"\n\
         |     <p>\n\
         |       \"Two\"\n",
    );
}

#[test]
fn adoption_agency_reparents_formatting() {
    assert_tree(
        "<b>1<p>2</b>3",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <b>\n\
         |       \"1\"\n\
         |     <p>\n\
         |       <b>\n\
         |         \"2\"\n\
         |       \"3\"\n",
    );
}

#[test]
fn table_cell_contents_stay_in_cell() {
    assert_tree(
        "<table><tr><td>x<div>y</td></tr></table>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <table>\n\
         |       <tbody>\n\
         |         <tr>\n\
         |           <td>\n\
         |             \"x\"\n\
         |             <div>\n\
         |               \"y\"\n",
    );
}

#[test]
fn select_closes_option_before_optgroup() {
    assert_tree(
        "<select><option>A<optgroup>B</select>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <select>\n\
         |       <option>\n\
         |         \"A\"\n\
         |       <optgroup>\n\
         |         \"B\"\n",
    );
}

#[test]
fn svg_fragment_keeps_font_foreign() {
    assert_fragment(
        "<font color></font>X",
        FragmentContext::new(Namespace::Svg, "path"),
        "| <svg font>\n\
         |   color=\"\"\n\
         | \"X\"\n",
    );
}

#[test]
fn fragment_list_items() {
    assert_fragment(
        "<li>one<li>two",
        FragmentContext::html("ul"),
        "| <li>\n\
         |   \"one\"\n\
         | <li>\n\
         |   \"two\"\n",
    );
}

#[test]
fn fragment_template_context_routes_cells() {
    assert_fragment(
        "<td>x</td>",
        FragmentContext::html("template"),
        "| <td>\n\
         |   \"x\"\n",
    );
}

#[test]
fn doctype_is_reported_and_classified() {
    let doc = parse("<!DOCTYPE html><p>x");
    assert_eq!(doc.quirks_mode, QuirksMode::NoQuirks);
    assert_eq!(
        dump_document(&doc),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <p>\n\
         |       \"x\"\n"
    );

    let quirky = parse("<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 3.2 Final//EN\"><p>x");
    assert_eq!(quirky.quirks_mode, QuirksMode::Quirks);

    let missing = parse("<p>x");
    assert_eq!(missing.quirks_mode, QuirksMode::Quirks);
    assert!(missing.errors > 0);
}

#[test]
fn table_in_paragraph_depends_on_quirks_mode() {
    // standards mode closes the open <p>
    assert_tree(
        "<!DOCTYPE html><p>a<table><tr><td>b</td></tr></table>",
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <p>\n\
         |       \"a\"\n\
         |     <table>\n\
         |       <tbody>\n\
         |         <tr>\n\
         |           <td>\n\
         |             \"b\"\n",
    );
    // quirks mode nests the table inside it
    assert_tree(
        "<p>a<table><tr><td>b</td></tr></table>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <p>\n\
         |       \"a\"\n\
         |       <table>\n\
         |         <tbody>\n\
         |           <tr>\n\
         |             <td>\n\
         |               \"b\"\n",
    );
}

#[test]
fn comments_land_at_every_level() {
    assert_tree(
        "<!--pre--><p>hi</p><!--post-->",
        "| <!-- pre -->\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <p>\n\
         |       \"hi\"\n\
         |     <!-- post -->\n",
    );
}

#[test]
fn comment_after_document_end_is_top_level() {
    assert_tree(
        "<html><body></body></html><!--tail-->",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         | <!-- tail -->\n",
    );
}

#[test]
fn headings_close_each_other() {
    assert_tree(
        "<h1>a<h2>b",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <h1>\n\
         |       \"a\"\n\
         |     <h2>\n\
         |       \"b\"\n",
    );
}

#[test]
fn list_items_imply_close() {
    assert_tree(
        "<ul><li>one<li>two</ul>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <ul>\n\
         |       <li>\n\
         |         \"one\"\n\
         |       <li>\n\
         |         \"two\"\n",
    );
}

#[test]
fn definition_list_items_imply_close() {
    assert_tree(
        "<dl><dt>t<dd>d</dl>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <dl>\n\
         |       <dt>\n\
         |         \"t\"\n\
         |       <dd>\n\
         |         \"d\"\n",
    );
}

#[test]
fn formatting_is_reconstructed_across_blocks() {
    assert_tree(
        "<p><b>x</p><p>y",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <p>\n\
         |       <b>\n\
         |         \"x\"\n\
         |     <p>\n\
         |       <b>\n\
         |         \"y\"\n",
    );
}

#[test]
fn nested_anchors_are_split() {
    assert_tree(
        "<a href=\"a\">x<a href=\"b\">y",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <a>\n\
         |       href=\"a\"\n\
         |       \"x\"\n\
         |     <a>\n\
         |       href=\"b\"\n\
         |       \"y\"\n",
    );
}

#[test]
fn table_text_is_foster_parented() {
    assert_tree(
        "<table>x<tr><td>y</td></tr></table>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     \"x\"\n\
         |     <table>\n\
         |       <tbody>\n\
         |         <tr>\n\
         |           <td>\n\
         |             \"y\"\n",
    );
}

#[test]
fn misplaced_element_is_foster_parented() {
    assert_tree(
        "<table><div>d</div><tr><td>x</td></tr></table>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <div>\n\
         |       \"d\"\n\
         |     <table>\n\
         |       <tbody>\n\
         |         <tr>\n\
         |           <td>\n\
         |             \"x\"\n",
    );
}

#[test]
fn whitespace_in_table_is_not_fostered() {
    assert_tree(
        "<table> <tr><td>y</td></tr></table>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <table>\n\
         |       \" \"\n\
         |       <tbody>\n\
         |         <tr>\n\
         |           <td>\n\
         |             \"y\"\n",
    );
}

#[test]
fn character_references_in_data() {
    assert_tree(
        "<p>&amp; &notin; &not x &#65;&#x41;</p>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <p>\n\
         |       \"& \u{2209} \u{ac} x AA\"\n",
    );
}

#[test]
fn legacy_character_reference_in_attribute_stays_literal() {
    let doc = parse("<a href=\"?a=b&not=c\">x</a>");
    let html = doc.children[0].as_element().unwrap();
    let body = html.children[1].as_element().unwrap();
    let a = body.children[0].as_element().unwrap();
    assert_eq!(a.attrs.get("href"), Some("?a=b&not=c"));

    // outside the legacy case the reference is resolved
    let doc = parse("<a href=\"?a=b&not;c\">x</a>");
    let html = doc.children[0].as_element().unwrap();
    let body = html.children[1].as_element().unwrap();
    let a = body.children[0].as_element().unwrap();
    assert_eq!(a.attrs.get("href"), Some("?a=b\u{ac}c"));
}

#[test]
fn rcdata_title_does_not_nest_markup() {
    assert_tree(
        "<title>x<b>y</title>z",
        "| <html>\n\
         |   <head>\n\
         |     <title>\n\
         |       \"x<b>y\"\n\
         |   <body>\n\
         |     \"z\"\n",
    );
}

#[test]
fn script_content_is_raw() {
    assert_tree(
        "<body><script>var x = \"<b>\";</script>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <script>\n\
         |       \"var x = \"<b>\";\"\n",
    );
}

#[test]
fn plaintext_swallows_everything() {
    assert_tree(
        "<body><plaintext>a</b>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <plaintext>\n\
         |       \"a</b>\"\n",
    );
}

#[test]
fn template_contents_and_mode_stack() {
    assert_tree(
        "<table><template><tr><td>x</td></tr></template></table>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <table>\n\
         |       <template>\n\
         |         content\n\
         |           <tr>\n\
         |             <td>\n\
         |               \"x\"\n",
    );
}

#[test]
fn frameset_document() {
    assert_tree(
        "<frameset><frame></frameset><noframes>x</noframes>",
        "| <html>\n\
         |   <head>\n\
         |   <frameset>\n\
         |     <frame>\n\
         |   <noframes>\n\
         |     \"x\"\n",
    );
}

#[test]
fn mathml_integration_points() {
    assert_tree(
        "<math><mi>x</mi><annotation-xml encoding=\"text/html\"><p>para</p></annotation-xml></math>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <math math>\n\
         |       <math mi>\n\
         |         \"x\"\n\
         |       <math annotation-xml>\n\
         |         encoding=\"text/html\"\n\
         |         <p>\n\
         |           \"para\"\n",
    );
}

#[test]
fn svg_names_are_case_adjusted() {
    assert_tree(
        "<svg viewbox=\"0 0 1 1\"><foreignobject><div>d</div></foreignobject></svg>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <svg svg>\n\
         |       viewBox=\"0 0 1 1\"\n\
         |       <svg foreignObject>\n\
         |         <div>\n\
         |           \"d\"\n",
    );
}

#[test]
fn foreign_attributes_get_namespaces() {
    assert_tree(
        "<svg><a xlink:href=\"#x\" xml:lang=\"en\"></a></svg>",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <svg svg>\n\
         |       <svg a>\n\
         |         xlink href=\"#x\"\n\
         |         xml lang=\"en\"\n",
    );

    let doc = parse("<svg><a xlink:href=\"#x\" href=\"#y\"></a></svg>");
    let html = doc.children[0].as_element().unwrap();
    let body = html.children[1].as_element().unwrap();
    let svg = body.children[0].as_element().unwrap();
    let a = svg.children[0].as_element().unwrap();
    let xlink = a.attrs.iter().find(|attr| attr.name == "xlink:href").unwrap();
    assert_eq!(xlink.ns, Some(html5tree::AttrNamespace::XLink));
    assert_eq!(xlink.prefix(), Some("xlink"));
    assert_eq!(xlink.local(), "href");
    // the plain attribute stays namespace-less
    let href = a.attrs.iter().find(|attr| attr.name == "href").unwrap();
    assert_eq!(href.ns, None);
}

#[test]
fn html_tag_breaks_out_of_svg() {
    assert_tree(
        "<svg><circle></circle><p>out",
        "| <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <svg svg>\n\
         |       <svg circle>\n\
         |     <p>\n\
         |       \"out\"\n",
    );
}

#[test]
fn duplicate_attributes_keep_first() {
    let doc = parse("<p id=a id=b class=c>x");
    let html = doc.children[0].as_element().unwrap();
    let body = html.children[1].as_element().unwrap();
    let p = body.children[0].as_element().unwrap();
    let attrs: Vec<_> = p
        .attrs
        .iter()
        .map(|attr| (attr.name.clone(), attr.value.clone()))
        .collect();
    assert_eq!(
        attrs,
        vec![
            ("id".to_owned(), "a".to_owned()),
            ("class".to_owned(), "c".to_owned())
        ]
    );
    assert!(doc.errors > 0);
}

fn assert_no_adjacent_text(nodes: &[Node]) {
    let mut last_was_text = false;
    for node in nodes {
        match node {
            Node::Text(_) => {
                assert!(!last_was_text, "adjacent text nodes in output");
                last_was_text = true;
            }
            Node::Comment(_) => last_was_text = false,
            Node::Element(element) => {
                last_was_text = false;
                assert_no_adjacent_text(&element.children);
            }
        }
    }
}

#[test]
fn parsing_is_total_and_deterministic() {
    let inputs = [
        "",
        "<",
        "</",
        "<!",
        "&#xD800;&#x110000;&bogus;",
        "\u{0}a\u{0}b",
        "<table><table><b><i><table></i>x",
        "<p><table><p><select><p></select></p>",
        "<b><i><u></b>x</i>y</u>z",
        "<svg><desc><b></svg>x",
        "<!doctype html><!doctype html><html><head></head><p>",
        "</br></p></html>leftover",
        "<template><template><tr></template></template>",
    ];
    for input in inputs {
        let first = parse(input);
        let second = parse(input);
        assert_eq!(first, second, "parse is not deterministic for {:?}", input);
        assert_no_adjacent_text(&first.children);
    }
}

#[test]
fn serializer_round_trips() {
    let inputs = [
        "<p class='intro'>Hello!</p>",
        "<p>One<p>Two",
        "<b>1<p>2</b>3",
        "<table><tr><td>x<div>y</td></tr></table>",
        "<select><option>A<optgroup>B</select>",
        "<table>x<tr><td>y</td></tr></table>",
    ];
    for input in inputs {
        let first = parse(input);
        let reparsed = parse(&serialize(&first));
        assert_eq!(
            first.children,
            reparsed.children,
            "round trip changed the tree for {:?}",
            input
        );
    }
}

#[test]
fn bytes_entry_point_sniffs_encoding() {
    let doc = html5tree::parse_bytes(
        b"<meta charset=windows-1252><p>caf\xe9</p>",
        ParseOpts::default(),
    );
    let html = doc.children[0].as_element().unwrap();
    let body = html.children[1].as_element().unwrap();
    let p = body.children[0].as_element().unwrap();
    assert_eq!(p.children, vec![Node::Text("caf\u{e9}".to_owned())]);
}
