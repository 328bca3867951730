//! Tag-set predicates: the scope barriers and element classes of the tree construction
//! algorithm, expressed over `(namespace, local name)` pairs.

use crate::dom::Namespace::{self, Html, MathMl, Svg};

pub(crate) type ExpandedName<'a> = (Namespace, &'a str);

pub(crate) fn html_default_scope((ns, local): ExpandedName) -> bool {
    ns == Html
        && matches!(
            local,
            "applet" | "caption" | "html" | "table" | "td" | "th" | "marquee" | "object"
                | "template"
        )
}

pub(crate) fn default_scope(name: ExpandedName) -> bool {
    html_default_scope(name)
        || mathml_text_integration_point(name)
        || svg_html_integration_point(name)
        || (name.0 == MathMl && name.1 == "annotation-xml")
}

pub(crate) fn mathml_text_integration_point((ns, local): ExpandedName) -> bool {
    ns == MathMl && matches!(local, "mi" | "mo" | "mn" | "ms" | "mtext")
}

pub(crate) fn svg_html_integration_point((ns, local): ExpandedName) -> bool {
    ns == Svg && matches!(local, "foreignObject" | "desc" | "title")
}

pub(crate) fn list_item_scope(name: ExpandedName) -> bool {
    default_scope(name) || (name.0 == Html && matches!(name.1, "ol" | "ul"))
}

pub(crate) fn button_scope(name: ExpandedName) -> bool {
    default_scope(name) || (name.0 == Html && name.1 == "button")
}

pub(crate) fn table_scope((ns, local): ExpandedName) -> bool {
    ns == Html && matches!(local, "html" | "table" | "template")
}

// select scope is the odd one out: every element is a barrier except these two
pub(crate) fn select_scope((ns, local): ExpandedName) -> bool {
    !(ns == Html && matches!(local, "optgroup" | "option"))
}

/// The elements closed by [generate implied end
/// tags](https://html.spec.whatwg.org/#generate-implied-end-tags).
pub(crate) fn cursory_implied_end((ns, local): ExpandedName) -> bool {
    ns == Html
        && matches!(
            local,
            "dd" | "dt" | "li" | "optgroup" | "option" | "p" | "rb" | "rp" | "rt" | "rtc"
        )
}

/// The "thoroughly" variant used by `</template>`.
pub(crate) fn thorough_implied_end(name: ExpandedName) -> bool {
    cursory_implied_end(name)
        || (name.0 == Html
            && matches!(
                name.1,
                "caption" | "colgroup" | "tbody" | "td" | "tfoot" | "th" | "thead" | "tr"
            ))
}

pub(crate) fn heading_tag((ns, local): ExpandedName) -> bool {
    ns == Html && matches!(local, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

pub(crate) fn td_th((ns, local): ExpandedName) -> bool {
    ns == Html && matches!(local, "td" | "th")
}

/// Current-node tags that trigger foster parenting for mislocated content.
pub(crate) fn table_outer((ns, local): ExpandedName) -> bool {
    ns == Html && matches!(local, "table" | "tbody" | "tfoot" | "thead" | "tr")
}

pub(crate) fn table_body_context((ns, local): ExpandedName) -> bool {
    ns == Html && matches!(local, "tbody" | "tfoot" | "thead" | "template" | "html")
}

pub(crate) fn table_row_context((ns, local): ExpandedName) -> bool {
    ns == Html && matches!(local, "tr" | "template" | "html")
}

pub(crate) fn table_context((ns, local): ExpandedName) -> bool {
    ns == Html && matches!(local, "table" | "template" | "html")
}

/// Elements that may legitimately still be open when the body ends.
pub(crate) fn body_end_ok((ns, local): ExpandedName) -> bool {
    ns == Html
        && matches!(
            local,
            "dd" | "dt" | "li" | "optgroup" | "option" | "p" | "rb" | "rp" | "rt" | "rtc"
                | "tbody" | "td" | "tfoot" | "th" | "thead" | "tr" | "body" | "html"
        )
}

/// The [special](https://html.spec.whatwg.org/#special) element category.
pub(crate) fn special_tag((ns, local): ExpandedName) -> bool {
    match ns {
        Html => matches!(
            local,
            "address" | "applet" | "area" | "article" | "aside" | "base" | "basefont"
                | "bgsound" | "blockquote" | "body" | "br" | "button" | "caption" | "center"
                | "col" | "colgroup" | "dd" | "details" | "dir" | "div" | "dl" | "dt" | "embed"
                | "fieldset" | "figcaption" | "figure" | "footer" | "form" | "frame"
                | "frameset" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "head" | "header"
                | "hgroup" | "hr" | "html" | "iframe" | "img" | "input" | "li" | "link"
                | "listing" | "main" | "marquee" | "menu" | "meta" | "nav" | "noembed"
                | "noframes" | "noscript" | "object" | "ol" | "p" | "param" | "plaintext"
                | "pre" | "script" | "section" | "select" | "source" | "style" | "summary"
                | "table" | "tbody" | "td" | "template" | "textarea" | "tfoot" | "th" | "thead"
                | "title" | "tr" | "track" | "ul" | "wbr" | "xmp"
        ),
        MathMl => matches!(local, "mi" | "mo" | "mn" | "ms" | "mtext" | "annotation-xml"),
        Svg => matches!(local, "foreignObject" | "desc" | "title"),
    }
}

/// The formatting element tags tracked in the active formatting list.
pub(crate) fn formatting_tag((ns, local): ExpandedName) -> bool {
    ns == Html
        && matches!(
            local,
            "a" | "b" | "big" | "code" | "em" | "font" | "i" | "nobr" | "s" | "small"
                | "strike" | "strong" | "tt" | "u"
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_elements_are_scope_barriers() {
        assert!(default_scope((Svg, "foreignObject")));
        assert!(default_scope((MathMl, "mtext")));
        assert!(!default_scope((Svg, "path")));
    }

    #[test]
    fn select_scope_is_inverted() {
        assert!(!select_scope((Html, "option")));
        assert!(!select_scope((Html, "optgroup")));
        assert!(select_scope((Html, "div")));
        assert!(select_scope((Svg, "desc")));
    }
}
