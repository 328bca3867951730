//! The doctype classification table: which doctypes are errors, and which put the
//! document into quirks or limited-quirks mode.

use crate::dom::QuirksMode;
use crate::Doctype;

// https://html.spec.whatwg.org/#the-initial-insertion-mode
// Public identifier prefixes that force quirks mode.
static QUIRKY_PUBLIC_PREFIXES: &[&str] = &[
    "+//silmaril//dtd html pro v0r11 19970101//",
    "-//advasoft ltd//dtd html 3.0 aswedit + extensions//",
    "-//as//dtd html 3.0 aswedit + extensions//",
    "-//ietf//dtd html 2.0 level 1//",
    "-//ietf//dtd html 2.0 level 2//",
    "-//ietf//dtd html 2.0 strict level 1//",
    "-//ietf//dtd html 2.0 strict level 2//",
    "-//ietf//dtd html 2.0 strict//",
    "-//ietf//dtd html 2.0//",
    "-//ietf//dtd html 2.1e//",
    "-//ietf//dtd html 3.0//",
    "-//ietf//dtd html 3.2 final//",
    "-//ietf//dtd html 3.2//",
    "-//ietf//dtd html 3//",
    "-//ietf//dtd html level 0//",
    "-//ietf//dtd html level 1//",
    "-//ietf//dtd html level 2//",
    "-//ietf//dtd html level 3//",
    "-//ietf//dtd html strict level 0//",
    "-//ietf//dtd html strict level 1//",
    "-//ietf//dtd html strict level 2//",
    "-//ietf//dtd html strict level 3//",
    "-//ietf//dtd html strict//",
    "-//ietf//dtd html//",
    "-//metrius//dtd metrius presentational//",
    "-//microsoft//dtd internet explorer 2.0 html strict//",
    "-//microsoft//dtd internet explorer 2.0 html//",
    "-//microsoft//dtd internet explorer 2.0 tables//",
    "-//microsoft//dtd internet explorer 3.0 html strict//",
    "-//microsoft//dtd internet explorer 3.0 html//",
    "-//microsoft//dtd internet explorer 3.0 tables//",
    "-//netscape comm. corp.//dtd html//",
    "-//netscape comm. corp.//dtd strict html//",
    "-//o'reilly and associates//dtd html 2.0//",
    "-//o'reilly and associates//dtd html extended 1.0//",
    "-//o'reilly and associates//dtd html extended relaxed 1.0//",
    "-//softquad software//dtd hotmetal pro 6.0::19990601::extensions to html 4.0//",
    "-//softquad//dtd hotmetal pro 4.0::19971010::extensions to html 4.0//",
    "-//spyglass//dtd html 2.0 extended//",
    "-//sq//dtd html 2.0 hotmetal + extensions//",
    "-//sun microsystems corp.//dtd hotjava html//",
    "-//sun microsystems corp.//dtd hotjava strict html//",
    "-//w3c//dtd html 3 1995-03-24//",
    "-//w3c//dtd html 3.2 draft//",
    "-//w3c//dtd html 3.2 final//",
    "-//w3c//dtd html 3.2//",
    "-//w3c//dtd html 3.2s draft//",
    "-//w3c//dtd html 4.0 frameset//",
    "-//w3c//dtd html 4.0 transitional//",
    "-//w3c//dtd html experimental 19960712//",
    "-//w3c//dtd html experimental 970421//",
    "-//w3c//dtd w3 html//",
    "-//w3o//dtd w3 html 3.0//",
    "-//webtechs//dtd mozilla html 2.0//",
    "-//webtechs//dtd mozilla html//",
];

static QUIRKY_PUBLIC_MATCHES: &[&str] = &[
    "-//w3o//dtd w3 html strict 3.0//en//",
    "-/w3c/dtd html 4.0 transitional/en",
    "html",
];

static QUIRKY_SYSTEM_MATCHES: &[&str] =
    &["http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd"];

static LIMITED_QUIRKY_PUBLIC_PREFIXES: &[&str] = &[
    "-//w3c//dtd xhtml 1.0 frameset//",
    "-//w3c//dtd xhtml 1.0 transitional//",
];

static HTML4_PUBLIC_PREFIXES: &[&str] = &[
    "-//w3c//dtd html 4.01 frameset//",
    "-//w3c//dtd html 4.01 transitional//",
];

fn lower(s: &Option<String>) -> Option<String> {
    s.as_ref().map(|s| s.to_ascii_lowercase())
}

fn contains_prefix(haystack: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| haystack.starts_with(p))
}

/// Whether the doctype is an error, and the quirks mode it selects.
pub(crate) fn doctype_error_and_quirks(doctype: &Doctype) -> (bool, QuirksMode) {
    let err = doctype.name != "html"
        || doctype.public_id.is_some()
        || !matches!(doctype.system_id.as_deref(), None | Some("about:legacy-compat"));

    let name = doctype.name.as_str();
    let public = lower(&doctype.public_id);
    let system = lower(&doctype.system_id);

    let quirk = match (name, public.as_deref(), system.as_deref()) {
        _ if doctype.force_quirks => QuirksMode::Quirks,
        (n, _, _) if n != "html" => QuirksMode::Quirks,

        (_, Some(p), _) if QUIRKY_PUBLIC_MATCHES.contains(&p) => QuirksMode::Quirks,
        (_, _, Some(s)) if QUIRKY_SYSTEM_MATCHES.contains(&s) => QuirksMode::Quirks,
        (_, Some(p), _) if contains_prefix(p, QUIRKY_PUBLIC_PREFIXES) => QuirksMode::Quirks,
        (_, Some(p), None) if contains_prefix(p, HTML4_PUBLIC_PREFIXES) => QuirksMode::Quirks,

        (_, Some(p), _) if contains_prefix(p, LIMITED_QUIRKY_PUBLIC_PREFIXES) => {
            QuirksMode::LimitedQuirks
        }
        (_, Some(p), Some(_)) if contains_prefix(p, HTML4_PUBLIC_PREFIXES) => {
            QuirksMode::LimitedQuirks
        }

        _ => QuirksMode::NoQuirks,
    };

    (err, quirk)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctype(name: &str, public: Option<&str>, system: Option<&str>) -> Doctype {
        Doctype {
            name: name.to_owned(),
            public_id: public.map(str::to_owned),
            system_id: system.map(str::to_owned),
            force_quirks: false,
        }
    }

    #[test]
    fn modern_doctype_is_standards_mode() {
        let (err, quirk) = doctype_error_and_quirks(&doctype("html", None, None));
        assert!(!err);
        assert_eq!(quirk, QuirksMode::NoQuirks);
    }

    #[test]
    fn html32_is_quirky() {
        let (err, quirk) = doctype_error_and_quirks(&doctype(
            "html",
            Some("-//W3C//DTD HTML 3.2 Final//EN"),
            None,
        ));
        assert!(err);
        assert_eq!(quirk, QuirksMode::Quirks);
    }

    #[test]
    fn html401_transitional_depends_on_system_id() {
        let public = Some("-//W3C//DTD HTML 4.01 Transitional//EN");
        let (_, without) = doctype_error_and_quirks(&doctype("html", public, None));
        assert_eq!(without, QuirksMode::Quirks);
        let (_, with) = doctype_error_and_quirks(&doctype(
            "html",
            public,
            Some("http://www.w3.org/TR/html4/loose.dtd"),
        ));
        assert_eq!(with, QuirksMode::LimitedQuirks);
    }

    #[test]
    fn legacy_compat_is_not_an_error() {
        let (err, quirk) =
            doctype_error_and_quirks(&doctype("html", None, Some("about:legacy-compat")));
        assert!(!err);
        assert_eq!(quirk, QuirksMode::NoQuirks);
    }
}
