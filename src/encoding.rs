//! The encoding prescan: BOM sniffing, the `<meta>` scan over the first 1024 bytes, and
//! decoding to UTF-8.
//!
//! This is the collaborator the tree construction core consumes when handed raw bytes; it
//! follows the [encoding sniffing
//! algorithm](https://html.spec.whatwg.org/#determining-the-character-encoding) far enough
//! for document parsing: BOM, `<meta charset>`, `<meta http-equiv=content-type>`, and the
//! windows-1252 fallback.

use std::borrow::Cow;

use phf::phf_map;

/// Common labels from the [WHATWG encoding labels
/// table](https://encoding.spec.whatwg.org/#names-and-labels), mapped to canonical names.
static ENCODING_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "unicode-1-1-utf-8" => "utf-8",
    "unicode11utf8" => "utf-8",
    "unicode20utf8" => "utf-8",
    "utf-8" => "utf-8",
    "utf8" => "utf-8",
    "x-unicode20utf8" => "utf-8",
    "ansi_x3.4-1968" => "windows-1252",
    "ascii" => "windows-1252",
    "cp1252" => "windows-1252",
    "cp819" => "windows-1252",
    "csisolatin1" => "windows-1252",
    "ibm819" => "windows-1252",
    "iso-8859-1" => "windows-1252",
    "iso-ir-100" => "windows-1252",
    "iso8859-1" => "windows-1252",
    "iso88591" => "windows-1252",
    "iso_8859-1" => "windows-1252",
    "iso_8859-1:1987" => "windows-1252",
    "l1" => "windows-1252",
    "latin1" => "windows-1252",
    "us-ascii" => "windows-1252",
    "windows-1252" => "windows-1252",
    "x-cp1252" => "windows-1252",
    "csunicode" => "utf-16le",
    "iso-10646-ucs-2" => "utf-16le",
    "ucs-2" => "utf-16le",
    "unicode" => "utf-16le",
    "unicodefeff" => "utf-16le",
    "utf-16" => "utf-16le",
    "utf-16le" => "utf-16le",
    "unicodefffe" => "utf-16be",
    "utf-16be" => "utf-16be",
};

/// Resolve an encoding label to its canonical name.
pub fn canonical_label(label: &str) -> Option<&'static str> {
    let trimmed = label
        .trim_matches(|c: char| matches!(c, '\t' | '\n' | '\u{c}' | '\r' | ' '))
        .to_ascii_lowercase();
    ENCODING_LABELS.get(trimmed.as_str()).copied()
}

/// Sniff the document encoding from the first bytes of input.
///
/// Returns a canonical label. `utf-16*` labels found in `<meta>` are coerced to `utf-8`,
/// since a decodable `<meta>` means the document cannot actually be UTF-16.
pub fn sniff(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0xef, 0xbb, 0xbf]) {
        return "utf-8";
    }
    if bytes.starts_with(&[0xfe, 0xff]) {
        return "utf-16be";
    }
    if bytes.starts_with(&[0xff, 0xfe]) {
        return "utf-16le";
    }

    if let Some(label) = prescan(&bytes[..bytes.len().min(1024)]) {
        if label.starts_with("utf-16") {
            return "utf-8";
        }
        return label;
    }

    "windows-1252"
}

/// Decode bytes with the given canonical label. Invalid sequences become U+FFFD.
pub fn decode<'a>(bytes: &'a [u8], label: &str) -> Cow<'a, str> {
    match label {
        "utf-16le" | "utf-16be" => {
            let be = label == "utf-16be";
            let mut units = Vec::with_capacity(bytes.len() / 2);
            for pair in bytes.chunks(2) {
                let unit = match *pair {
                    [a, b] if be => u16::from_be_bytes([a, b]),
                    [a, b] => u16::from_le_bytes([a, b]),
                    // a trailing lone byte decodes to a replacement character
                    _ => 0xfffd,
                };
                units.push(unit);
            }
            Cow::Owned(
                char::decode_utf16(units)
                    .map(|r| r.unwrap_or('\u{fffd}'))
                    .collect(),
            )
        }
        "windows-1252" => Cow::Owned(bytes.iter().map(|&b| windows_1252(b)).collect()),
        _ => String::from_utf8_lossy(bytes),
    }
}

/// Strip a UTF-8 BOM if present. Other BOMs are consumed by their decoders.
pub fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(&[0xef, 0xbb, 0xbf]).unwrap_or(bytes)
}

fn windows_1252(byte: u8) -> char {
    // 0x80..=0x9f has dedicated mappings, everything else is latin-1
    match byte {
        0x80 => '\u{20ac}',
        0x82 => '\u{201a}',
        0x83 => '\u{192}',
        0x84 => '\u{201e}',
        0x85 => '\u{2026}',
        0x86 => '\u{2020}',
        0x87 => '\u{2021}',
        0x88 => '\u{2c6}',
        0x89 => '\u{2030}',
        0x8a => '\u{160}',
        0x8b => '\u{2039}',
        0x8c => '\u{152}',
        0x8e => '\u{17d}',
        0x91 => '\u{2018}',
        0x92 => '\u{2019}',
        0x93 => '\u{201c}',
        0x94 => '\u{201d}',
        0x95 => '\u{2022}',
        0x96 => '\u{2013}',
        0x97 => '\u{2014}',
        0x98 => '\u{2dc}',
        0x99 => '\u{2122}',
        0x9a => '\u{161}',
        0x9b => '\u{203a}',
        0x9c => '\u{153}',
        0x9e => '\u{17e}',
        0x9f => '\u{178}',
        _ => byte as char,
    }
}

/// The [meta prescan](https://html.spec.whatwg.org/#prescan-a-byte-stream-to-determine-its-encoding).
fn prescan(bytes: &[u8]) -> Option<&'static str> {
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos..].starts_with(b"<!--") {
            // skip the comment, including ones that never close
            match find(bytes, pos + 2, b"-->") {
                Some(end) => pos = end + 3,
                None => return None,
            }
        } else if starts_with_ignore_case(&bytes[pos..], b"<meta")
            && matches!(bytes.get(pos + 5), Some(b'\t' | b'\n' | b'\x0c' | b' ' | b'/'))
        {
            pos += 5;
            let mut got_pragma = false;
            let mut need_pragma: Option<bool> = None;
            let mut charset: Option<&'static str> = None;

            while let Some((name, value, after)) = next_attribute(bytes, pos) {
                pos = after;
                match name.as_slice() {
                    b"http-equiv" => {
                        if value.eq_ignore_ascii_case(b"content-type") {
                            got_pragma = true;
                        }
                    }
                    b"content" => {
                        if charset.is_none() {
                            if let Some(label) = charset_from_content(&value) {
                                charset = canonical_label(&label);
                                need_pragma = Some(true);
                            }
                        }
                    }
                    b"charset" => {
                        charset = canonical_label(&String::from_utf8_lossy(&value));
                        need_pragma = Some(false);
                    }
                    _ => (),
                }
            }

            match (need_pragma, charset) {
                (Some(true), Some(label)) if got_pragma => return Some(label),
                (Some(false), Some(label)) => return Some(label),
                _ => (),
            }
        } else if bytes[pos] == b'<' {
            // skip over tags so attribute values containing "<meta" don't confuse us
            match find(bytes, pos + 1, b">") {
                Some(end) => pos = end + 1,
                None => return None,
            }
        } else {
            pos += 1;
        }
    }

    None
}

fn find(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if from >= bytes.len() {
        return None;
    }
    bytes[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| i + from)
}

fn starts_with_ignore_case(bytes: &[u8], prefix: &[u8]) -> bool {
    bytes.len() >= prefix.len() && bytes[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Parse one attribute starting at `pos`, returning `(name, value, position after)`.
fn next_attribute(bytes: &[u8], mut pos: usize) -> Option<(Vec<u8>, Vec<u8>, usize)> {
    while pos < bytes.len()
        && matches!(bytes[pos], b'\t' | b'\n' | b'\x0c' | b'\r' | b' ' | b'/')
    {
        pos += 1;
    }
    if pos >= bytes.len() || bytes[pos] == b'>' {
        return None;
    }

    let mut name = Vec::new();
    while pos < bytes.len() {
        match bytes[pos] {
            b'=' if !name.is_empty() => break,
            b'\t' | b'\n' | b'\x0c' | b'\r' | b' ' | b'/' | b'>' => break,
            b => {
                name.push(b.to_ascii_lowercase());
                pos += 1;
            }
        }
    }

    while pos < bytes.len() && matches!(bytes[pos], b'\t' | b'\n' | b'\x0c' | b'\r' | b' ') {
        pos += 1;
    }
    if pos >= bytes.len() || bytes[pos] != b'=' {
        return Some((name, Vec::new(), pos));
    }
    pos += 1;
    while pos < bytes.len() && matches!(bytes[pos], b'\t' | b'\n' | b'\x0c' | b'\r' | b' ') {
        pos += 1;
    }

    let mut value = Vec::new();
    match bytes.get(pos) {
        Some(&q @ (b'"' | b'\'')) => {
            pos += 1;
            while pos < bytes.len() && bytes[pos] != q {
                value.push(bytes[pos].to_ascii_lowercase());
                pos += 1;
            }
            pos = (pos + 1).min(bytes.len());
        }
        _ => {
            while pos < bytes.len()
                && !matches!(bytes[pos], b'\t' | b'\n' | b'\x0c' | b'\r' | b' ' | b'>')
            {
                value.push(bytes[pos].to_ascii_lowercase());
                pos += 1;
            }
        }
    }

    Some((name, value, pos))
}

/// Extract a charset from a `content="text/html; charset=..."` value.
fn charset_from_content(content: &[u8]) -> Option<String> {
    let lower: Vec<u8> = content.to_ascii_lowercase();
    let idx = find(&lower, 0, b"charset")?;
    let mut pos = idx + "charset".len();
    while pos < lower.len() && lower[pos].is_ascii_whitespace() {
        pos += 1;
    }
    if lower.get(pos) != Some(&b'=') {
        return None;
    }
    pos += 1;
    while pos < lower.len() && lower[pos].is_ascii_whitespace() {
        pos += 1;
    }

    let rest = &lower[pos..];
    let label: &[u8] = match rest.first() {
        Some(&q @ (b'"' | b'\'')) => {
            let end = rest[1..].iter().position(|&b| b == q)?;
            &rest[1..end + 1]
        }
        Some(_) => {
            let end = rest
                .iter()
                .position(|&b| matches!(b, b';' | b' ' | b'\t' | b'\n' | b'\x0c' | b'\r'))
                .unwrap_or(rest.len());
            &rest[..end]
        }
        None => return None,
    };

    Some(String::from_utf8_lossy(label).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_wins() {
        assert_eq!(sniff(b"\xef\xbb\xbf<meta charset=latin1>"), "utf-8");
        assert_eq!(sniff(b"\xff\xfe\x00\x00"), "utf-16le");
    }

    #[test]
    fn meta_charset_is_found() {
        assert_eq!(sniff(b"<html><meta charset='UTF-8'></html>"), "utf-8");
        assert_eq!(sniff(b"<meta charset=latin1>"), "windows-1252");
    }

    #[test]
    fn meta_pragma_requires_content_type() {
        assert_eq!(
            sniff(b"<meta http-equiv=\"content-type\" content=\"text/html; charset=utf-8\">"),
            "utf-8"
        );
        assert_eq!(
            sniff(b"<meta http-equiv=\"refresh\" content=\"text/html; charset=utf-8\">"),
            "windows-1252"
        );
    }

    #[test]
    fn meta_inside_comment_is_skipped() {
        assert_eq!(sniff(b"<!-- <meta charset=utf-8> -->"), "windows-1252");
    }

    #[test]
    fn utf16_meta_is_coerced_to_utf8() {
        assert_eq!(sniff(b"<meta charset=utf-16>"), "utf-8");
    }

    #[test]
    fn no_meta_defaults_to_windows_1252() {
        assert_eq!(sniff(b"<p>hello</p>"), "windows-1252");
    }

    #[test]
    fn windows_1252_maps_c1_range() {
        assert_eq!(decode(b"caf\xe9 \x93x\x94", "windows-1252"), "caf\u{e9} \u{201c}x\u{201d}");
    }

    #[test]
    fn utf16le_decodes_pairs() {
        assert_eq!(decode(b"h\x00i\x00", "utf-16le"), "hi");
    }
}
