//! The WHATWG [named character reference](https://html.spec.whatwg.org/#named-character-references)
//! table, as a first-character-indexed sorted prefix array.
//!
//! Generated from the `entities.json` data of the spec. Do not edit by hand.

/// A named character reference. `name` is the full name as written after the `&`,
/// semicolon included where it is part of the name; `characters` is the expansion.
#[derive(Debug)]
pub(crate) struct CharRef {
    pub(crate) name: &'static str,
    pub(crate) characters: &'static str,
}

/// Find the longest named reference beginning with `first_char`.
///
/// `try_read` attempts to consume the remainder of a candidate name from the input,
/// consuming only on a full match. Candidates are stored longest first, so the first
/// hit is the maximal munch the spec asks for.
pub(crate) fn try_read_character_reference(
    first_char: char,
    mut try_read: impl FnMut(&str) -> bool,
) -> Option<&'static CharRef> {
    let candidates = candidates_for(first_char)?;
    candidates.iter().find(|char_ref| try_read(&char_ref.name[1..]))
}

fn candidates_for(first_char: char) -> Option<&'static [CharRef]> {
    Some(match first_char {
        'A' => UPPER_A,
        'B' => UPPER_B,
        'C' => UPPER_C,
        'D' => UPPER_D,
        'E' => UPPER_E,
        'F' => UPPER_F,
        'G' => UPPER_G,
        'H' => UPPER_H,
        'I' => UPPER_I,
        'J' => UPPER_J,
        'K' => UPPER_K,
        'L' => UPPER_L,
        'M' => UPPER_M,
        'N' => UPPER_N,
        'O' => UPPER_O,
        'P' => UPPER_P,
        'Q' => UPPER_Q,
        'R' => UPPER_R,
        'S' => UPPER_S,
        'T' => UPPER_T,
        'U' => UPPER_U,
        'V' => UPPER_V,
        'W' => UPPER_W,
        'X' => UPPER_X,
        'Y' => UPPER_Y,
        'Z' => UPPER_Z,
        'a' => LOWER_A,
        'b' => LOWER_B,
        'c' => LOWER_C,
        'd' => LOWER_D,
        'e' => LOWER_E,
        'f' => LOWER_F,
        'g' => LOWER_G,
        'h' => LOWER_H,
        'i' => LOWER_I,
        'j' => LOWER_J,
        'k' => LOWER_K,
        'l' => LOWER_L,
        'm' => LOWER_M,
        'n' => LOWER_N,
        'o' => LOWER_O,
        'p' => LOWER_P,
        'q' => LOWER_Q,
        'r' => LOWER_R,
        's' => LOWER_S,
        't' => LOWER_T,
        'u' => LOWER_U,
        'v' => LOWER_V,
        'w' => LOWER_W,
        'x' => LOWER_X,
        'y' => LOWER_Y,
        'z' => LOWER_Z,
        _ => return None,
    })
}

static UPPER_A: &[CharRef] = &[
    CharRef { name: "ApplyFunction;", characters: "\u{2061}" },
    CharRef { name: "Aacute;", characters: "\u{c1}" },
    CharRef { name: "Abreve;", characters: "\u{102}" },
    CharRef { name: "Agrave;", characters: "\u{c0}" },
    CharRef { name: "Assign;", characters: "\u{2254}" },
    CharRef { name: "Atilde;", characters: "\u{c3}" },
    CharRef { name: "AElig;", characters: "\u{c6}" },
    CharRef { name: "Aacute", characters: "\u{c1}" },
    CharRef { name: "Acirc;", characters: "\u{c2}" },
    CharRef { name: "Agrave", characters: "\u{c0}" },
    CharRef { name: "Alpha;", characters: "\u{391}" },
    CharRef { name: "Amacr;", characters: "\u{100}" },
    CharRef { name: "Aogon;", characters: "\u{104}" },
    CharRef { name: "Aring;", characters: "\u{c5}" },
    CharRef { name: "Atilde", characters: "\u{c3}" },
    CharRef { name: "AElig", characters: "\u{c6}" },
    CharRef { name: "Acirc", characters: "\u{c2}" },
    CharRef { name: "Aopf;", characters: "\u{1d538}" },
    CharRef { name: "Aring", characters: "\u{c5}" },
    CharRef { name: "Ascr;", characters: "\u{1d49c}" },
    CharRef { name: "Auml;", characters: "\u{c4}" },
    CharRef { name: "AMP;", characters: "&" },
    CharRef { name: "Acy;", characters: "\u{410}" },
    CharRef { name: "Afr;", characters: "\u{1d504}" },
    CharRef { name: "And;", characters: "\u{2a53}" },
    CharRef { name: "Auml", characters: "\u{c4}" },
    CharRef { name: "AMP", characters: "&" },
];

static UPPER_B: &[CharRef] = &[
    CharRef { name: "Bernoullis;", characters: "\u{212c}" },
    CharRef { name: "Backslash;", characters: "\u{2216}" },
    CharRef { name: "Because;", characters: "\u{2235}" },
    CharRef { name: "Barwed;", characters: "\u{2306}" },
    CharRef { name: "Bumpeq;", characters: "\u{224e}" },
    CharRef { name: "Breve;", characters: "\u{2d8}" },
    CharRef { name: "Barv;", characters: "\u{2ae7}" },
    CharRef { name: "Beta;", characters: "\u{392}" },
    CharRef { name: "Bopf;", characters: "\u{1d539}" },
    CharRef { name: "Bscr;", characters: "\u{212c}" },
    CharRef { name: "Bcy;", characters: "\u{411}" },
    CharRef { name: "Bfr;", characters: "\u{1d505}" },
];

static UPPER_C: &[CharRef] = &[
    CharRef { name: "CounterClockwiseContourIntegral;", characters: "\u{2233}" },
    CharRef { name: "ClockwiseContourIntegral;", characters: "\u{2232}" },
    CharRef { name: "CloseCurlyDoubleQuote;", characters: "\u{201d}" },
    CharRef { name: "CapitalDifferentialD;", characters: "\u{2145}" },
    CharRef { name: "CloseCurlyQuote;", characters: "\u{2019}" },
    CharRef { name: "ContourIntegral;", characters: "\u{222e}" },
    CharRef { name: "CircleMinus;", characters: "\u{2296}" },
    CharRef { name: "CircleTimes;", characters: "\u{2297}" },
    CharRef { name: "CirclePlus;", characters: "\u{2295}" },
    CharRef { name: "CenterDot;", characters: "\u{b7}" },
    CharRef { name: "CircleDot;", characters: "\u{2299}" },
    CharRef { name: "Congruent;", characters: "\u{2261}" },
    CharRef { name: "Coproduct;", characters: "\u{2210}" },
    CharRef { name: "Cayleys;", characters: "\u{212d}" },
    CharRef { name: "Cconint;", characters: "\u{2230}" },
    CharRef { name: "Cedilla;", characters: "\u{b8}" },
    CharRef { name: "Cacute;", characters: "\u{106}" },
    CharRef { name: "Ccaron;", characters: "\u{10c}" },
    CharRef { name: "Ccedil;", characters: "\u{c7}" },
    CharRef { name: "Colone;", characters: "\u{2a74}" },
    CharRef { name: "Conint;", characters: "\u{222f}" },
    CharRef { name: "CupCap;", characters: "\u{224d}" },
    CharRef { name: "Ccedil", characters: "\u{c7}" },
    CharRef { name: "Ccirc;", characters: "\u{108}" },
    CharRef { name: "Colon;", characters: "\u{2237}" },
    CharRef { name: "Cross;", characters: "\u{2a2f}" },
    CharRef { name: "CHcy;", characters: "\u{427}" },
    CharRef { name: "COPY;", characters: "\u{a9}" },
    CharRef { name: "Cdot;", characters: "\u{10a}" },
    CharRef { name: "Copf;", characters: "\u{2102}" },
    CharRef { name: "Cscr;", characters: "\u{1d49e}" },
    CharRef { name: "COPY", characters: "\u{a9}" },
    CharRef { name: "Cap;", characters: "\u{22d2}" },
    CharRef { name: "Cfr;", characters: "\u{212d}" },
    CharRef { name: "Chi;", characters: "\u{3a7}" },
    CharRef { name: "Cup;", characters: "\u{22d3}" },
];

static UPPER_D: &[CharRef] = &[
    CharRef { name: "DoubleLongLeftRightArrow;", characters: "\u{27fa}" },
    CharRef { name: "DiacriticalDoubleAcute;", characters: "\u{2dd}" },
    CharRef { name: "DoubleContourIntegral;", characters: "\u{222f}" },
    CharRef { name: "DoubleLeftRightArrow;", characters: "\u{21d4}" },
    CharRef { name: "DoubleLongRightArrow;", characters: "\u{27f9}" },
    CharRef { name: "DoubleLongLeftArrow;", characters: "\u{27f8}" },
    CharRef { name: "DownLeftRightVector;", characters: "\u{2950}" },
    CharRef { name: "DownRightTeeVector;", characters: "\u{295f}" },
    CharRef { name: "DownRightVectorBar;", characters: "\u{2957}" },
    CharRef { name: "DoubleUpDownArrow;", characters: "\u{21d5}" },
    CharRef { name: "DoubleVerticalBar;", characters: "\u{2225}" },
    CharRef { name: "DownLeftTeeVector;", characters: "\u{295e}" },
    CharRef { name: "DownLeftVectorBar;", characters: "\u{2956}" },
    CharRef { name: "DiacriticalAcute;", characters: "\u{b4}" },
    CharRef { name: "DiacriticalGrave;", characters: "`" },
    CharRef { name: "DiacriticalTilde;", characters: "\u{2dc}" },
    CharRef { name: "DoubleRightArrow;", characters: "\u{21d2}" },
    CharRef { name: "DownArrowUpArrow;", characters: "\u{21f5}" },
    CharRef { name: "DoubleDownArrow;", characters: "\u{21d3}" },
    CharRef { name: "DoubleLeftArrow;", characters: "\u{21d0}" },
    CharRef { name: "DownRightVector;", characters: "\u{21c1}" },
    CharRef { name: "DiacriticalDot;", characters: "\u{2d9}" },
    CharRef { name: "DoubleRightTee;", characters: "\u{22a8}" },
    CharRef { name: "DownLeftVector;", characters: "\u{21bd}" },
    CharRef { name: "DifferentialD;", characters: "\u{2146}" },
    CharRef { name: "DoubleLeftTee;", characters: "\u{2ae4}" },
    CharRef { name: "DoubleUpArrow;", characters: "\u{21d1}" },
    CharRef { name: "DownArrowBar;", characters: "\u{2913}" },
    CharRef { name: "DownTeeArrow;", characters: "\u{21a7}" },
    CharRef { name: "DoubleDot;", characters: "\u{a8}" },
    CharRef { name: "DownArrow;", characters: "\u{2193}" },
    CharRef { name: "DownBreve;", characters: "\u{311}" },
    CharRef { name: "Downarrow;", characters: "\u{21d3}" },
    CharRef { name: "DDotrahd;", characters: "\u{2911}" },
    CharRef { name: "DotEqual;", characters: "\u{2250}" },
    CharRef { name: "Diamond;", characters: "\u{22c4}" },
    CharRef { name: "DownTee;", characters: "\u{22a4}" },
    CharRef { name: "Dagger;", characters: "\u{2021}" },
    CharRef { name: "Dcaron;", characters: "\u{10e}" },
    CharRef { name: "DotDot;", characters: "\u{20dc}" },
    CharRef { name: "Dstrok;", characters: "\u{110}" },
    CharRef { name: "Dashv;", characters: "\u{2ae4}" },
    CharRef { name: "Delta;", characters: "\u{394}" },
    CharRef { name: "DJcy;", characters: "\u{402}" },
    CharRef { name: "DScy;", characters: "\u{405}" },
    CharRef { name: "DZcy;", characters: "\u{40f}" },
    CharRef { name: "Darr;", characters: "\u{21a1}" },
    CharRef { name: "Dopf;", characters: "\u{1d53b}" },
    CharRef { name: "Dscr;", characters: "\u{1d49f}" },
    CharRef { name: "Dcy;", characters: "\u{414}" },
    CharRef { name: "Del;", characters: "\u{2207}" },
    CharRef { name: "Dfr;", characters: "\u{1d507}" },
    CharRef { name: "Dot;", characters: "\u{a8}" },
    CharRef { name: "DD;", characters: "\u{2145}" },
];

static UPPER_E: &[CharRef] = &[
    CharRef { name: "EmptyVerySmallSquare;", characters: "\u{25ab}" },
    CharRef { name: "EmptySmallSquare;", characters: "\u{25fb}" },
    CharRef { name: "ExponentialE;", characters: "\u{2147}" },
    CharRef { name: "Equilibrium;", characters: "\u{21cc}" },
    CharRef { name: "EqualTilde;", characters: "\u{2242}" },
    CharRef { name: "Element;", characters: "\u{2208}" },
    CharRef { name: "Epsilon;", characters: "\u{395}" },
    CharRef { name: "Eacute;", characters: "\u{c9}" },
    CharRef { name: "Ecaron;", characters: "\u{11a}" },
    CharRef { name: "Egrave;", characters: "\u{c8}" },
    CharRef { name: "Exists;", characters: "\u{2203}" },
    CharRef { name: "Eacute", characters: "\u{c9}" },
    CharRef { name: "Ecirc;", characters: "\u{ca}" },
    CharRef { name: "Egrave", characters: "\u{c8}" },
    CharRef { name: "Emacr;", characters: "\u{112}" },
    CharRef { name: "Eogon;", characters: "\u{118}" },
    CharRef { name: "Equal;", characters: "\u{2a75}" },
    CharRef { name: "Ecirc", characters: "\u{ca}" },
    CharRef { name: "Edot;", characters: "\u{116}" },
    CharRef { name: "Eopf;", characters: "\u{1d53c}" },
    CharRef { name: "Escr;", characters: "\u{2130}" },
    CharRef { name: "Esim;", characters: "\u{2a73}" },
    CharRef { name: "Euml;", characters: "\u{cb}" },
    CharRef { name: "ENG;", characters: "\u{14a}" },
    CharRef { name: "ETH;", characters: "\u{d0}" },
    CharRef { name: "Ecy;", characters: "\u{42d}" },
    CharRef { name: "Efr;", characters: "\u{1d508}" },
    CharRef { name: "Eta;", characters: "\u{397}" },
    CharRef { name: "Euml", characters: "\u{cb}" },
    CharRef { name: "ETH", characters: "\u{d0}" },
];

static UPPER_F: &[CharRef] = &[
    CharRef { name: "FilledVerySmallSquare;", characters: "\u{25aa}" },
    CharRef { name: "FilledSmallSquare;", characters: "\u{25fc}" },
    CharRef { name: "Fouriertrf;", characters: "\u{2131}" },
    CharRef { name: "ForAll;", characters: "\u{2200}" },
    CharRef { name: "Fopf;", characters: "\u{1d53d}" },
    CharRef { name: "Fscr;", characters: "\u{2131}" },
    CharRef { name: "Fcy;", characters: "\u{424}" },
    CharRef { name: "Ffr;", characters: "\u{1d509}" },
];

static UPPER_G: &[CharRef] = &[
    CharRef { name: "GreaterSlantEqual;", characters: "\u{2a7e}" },
    CharRef { name: "GreaterEqualLess;", characters: "\u{22db}" },
    CharRef { name: "GreaterFullEqual;", characters: "\u{2267}" },
    CharRef { name: "GreaterGreater;", characters: "\u{2aa2}" },
    CharRef { name: "GreaterEqual;", characters: "\u{2265}" },
    CharRef { name: "GreaterTilde;", characters: "\u{2273}" },
    CharRef { name: "GreaterLess;", characters: "\u{2277}" },
    CharRef { name: "Gammad;", characters: "\u{3dc}" },
    CharRef { name: "Gbreve;", characters: "\u{11e}" },
    CharRef { name: "Gcedil;", characters: "\u{122}" },
    CharRef { name: "Gamma;", characters: "\u{393}" },
    CharRef { name: "Gcirc;", characters: "\u{11c}" },
    CharRef { name: "GJcy;", characters: "\u{403}" },
    CharRef { name: "Gdot;", characters: "\u{120}" },
    CharRef { name: "Gopf;", characters: "\u{1d53e}" },
    CharRef { name: "Gscr;", characters: "\u{1d4a2}" },
    CharRef { name: "Gcy;", characters: "\u{413}" },
    CharRef { name: "Gfr;", characters: "\u{1d50a}" },
    CharRef { name: "GT;", characters: ">" },
    CharRef { name: "Gg;", characters: "\u{22d9}" },
    CharRef { name: "Gt;", characters: "\u{226b}" },
    CharRef { name: "GT", characters: ">" },
];

static UPPER_H: &[CharRef] = &[
    CharRef { name: "HorizontalLine;", characters: "\u{2500}" },
    CharRef { name: "HilbertSpace;", characters: "\u{210b}" },
    CharRef { name: "HumpDownHump;", characters: "\u{224e}" },
    CharRef { name: "HumpEqual;", characters: "\u{224f}" },
    CharRef { name: "HARDcy;", characters: "\u{42a}" },
    CharRef { name: "Hstrok;", characters: "\u{126}" },
    CharRef { name: "Hacek;", characters: "\u{2c7}" },
    CharRef { name: "Hcirc;", characters: "\u{124}" },
    CharRef { name: "Hopf;", characters: "\u{210d}" },
    CharRef { name: "Hscr;", characters: "\u{210b}" },
    CharRef { name: "Hat;", characters: "^" },
    CharRef { name: "Hfr;", characters: "\u{210c}" },
];

static UPPER_I: &[CharRef] = &[
    CharRef { name: "InvisibleComma;", characters: "\u{2063}" },
    CharRef { name: "InvisibleTimes;", characters: "\u{2062}" },
    CharRef { name: "Intersection;", characters: "\u{22c2}" },
    CharRef { name: "ImaginaryI;", characters: "\u{2148}" },
    CharRef { name: "Integral;", characters: "\u{222b}" },
    CharRef { name: "Implies;", characters: "\u{21d2}" },
    CharRef { name: "Iacute;", characters: "\u{cd}" },
    CharRef { name: "Igrave;", characters: "\u{cc}" },
    CharRef { name: "Itilde;", characters: "\u{128}" },
    CharRef { name: "IJlig;", characters: "\u{132}" },
    CharRef { name: "Iacute", characters: "\u{cd}" },
    CharRef { name: "Icirc;", characters: "\u{ce}" },
    CharRef { name: "Igrave", characters: "\u{cc}" },
    CharRef { name: "Imacr;", characters: "\u{12a}" },
    CharRef { name: "Iogon;", characters: "\u{12e}" },
    CharRef { name: "Iukcy;", characters: "\u{406}" },
    CharRef { name: "IEcy;", characters: "\u{415}" },
    CharRef { name: "IOcy;", characters: "\u{401}" },
    CharRef { name: "Icirc", characters: "\u{ce}" },
    CharRef { name: "Idot;", characters: "\u{130}" },
    CharRef { name: "Iopf;", characters: "\u{1d540}" },
    CharRef { name: "Iota;", characters: "\u{399}" },
    CharRef { name: "Iscr;", characters: "\u{2110}" },
    CharRef { name: "Iuml;", characters: "\u{cf}" },
    CharRef { name: "Icy;", characters: "\u{418}" },
    CharRef { name: "Ifr;", characters: "\u{2111}" },
    CharRef { name: "Int;", characters: "\u{222c}" },
    CharRef { name: "Iuml", characters: "\u{cf}" },
    CharRef { name: "Im;", characters: "\u{2111}" },
];

static UPPER_J: &[CharRef] = &[
    CharRef { name: "Jsercy;", characters: "\u{408}" },
    CharRef { name: "Jcirc;", characters: "\u{134}" },
    CharRef { name: "Jukcy;", characters: "\u{404}" },
    CharRef { name: "Jopf;", characters: "\u{1d541}" },
    CharRef { name: "Jscr;", characters: "\u{1d4a5}" },
    CharRef { name: "Jcy;", characters: "\u{419}" },
    CharRef { name: "Jfr;", characters: "\u{1d50d}" },
];

static UPPER_K: &[CharRef] = &[
    CharRef { name: "Kcedil;", characters: "\u{136}" },
    CharRef { name: "Kappa;", characters: "\u{39a}" },
    CharRef { name: "KHcy;", characters: "\u{425}" },
    CharRef { name: "KJcy;", characters: "\u{40c}" },
    CharRef { name: "Kopf;", characters: "\u{1d542}" },
    CharRef { name: "Kscr;", characters: "\u{1d4a6}" },
    CharRef { name: "Kcy;", characters: "\u{41a}" },
    CharRef { name: "Kfr;", characters: "\u{1d50e}" },
];

static UPPER_L: &[CharRef] = &[
    CharRef { name: "LeftArrowRightArrow;", characters: "\u{21c6}" },
    CharRef { name: "LongLeftRightArrow;", characters: "\u{27f7}" },
    CharRef { name: "Longleftrightarrow;", characters: "\u{27fa}" },
    CharRef { name: "LeftDoubleBracket;", characters: "\u{27e6}" },
    CharRef { name: "LeftDownTeeVector;", characters: "\u{2961}" },
    CharRef { name: "LeftDownVectorBar;", characters: "\u{2959}" },
    CharRef { name: "LeftTriangleEqual;", characters: "\u{22b4}" },
    CharRef { name: "LeftAngleBracket;", characters: "\u{27e8}" },
    CharRef { name: "LeftUpDownVector;", characters: "\u{2951}" },
    CharRef { name: "LessEqualGreater;", characters: "\u{22da}" },
    CharRef { name: "LeftRightVector;", characters: "\u{294e}" },
    CharRef { name: "LeftTriangleBar;", characters: "\u{29cf}" },
    CharRef { name: "LeftUpTeeVector;", characters: "\u{2960}" },
    CharRef { name: "LeftUpVectorBar;", characters: "\u{2958}" },
    CharRef { name: "LowerRightArrow;", characters: "\u{2198}" },
    CharRef { name: "LeftDownVector;", characters: "\u{21c3}" },
    CharRef { name: "LeftRightArrow;", characters: "\u{2194}" },
    CharRef { name: "Leftrightarrow;", characters: "\u{21d4}" },
    CharRef { name: "LessSlantEqual;", characters: "\u{2a7d}" },
    CharRef { name: "LongRightArrow;", characters: "\u{27f6}" },
    CharRef { name: "Longrightarrow;", characters: "\u{27f9}" },
    CharRef { name: "LowerLeftArrow;", characters: "\u{2199}" },
    CharRef { name: "LeftTeeVector;", characters: "\u{295a}" },
    CharRef { name: "LeftVectorBar;", characters: "\u{2952}" },
    CharRef { name: "LessFullEqual;", characters: "\u{2266}" },
    CharRef { name: "LongLeftArrow;", characters: "\u{27f5}" },
    CharRef { name: "Longleftarrow;", characters: "\u{27f8}" },
    CharRef { name: "LeftArrowBar;", characters: "\u{21e4}" },
    CharRef { name: "LeftTeeArrow;", characters: "\u{21a4}" },
    CharRef { name: "LeftTriangle;", characters: "\u{22b2}" },
    CharRef { name: "LeftUpVector;", characters: "\u{21bf}" },
    CharRef { name: "LeftCeiling;", characters: "\u{2308}" },
    CharRef { name: "LessGreater;", characters: "\u{2276}" },
    CharRef { name: "Laplacetrf;", characters: "\u{2112}" },
    CharRef { name: "LeftVector;", characters: "\u{21bc}" },
    CharRef { name: "Lleftarrow;", characters: "\u{21da}" },
    CharRef { name: "LeftArrow;", characters: "\u{2190}" },
    CharRef { name: "LeftFloor;", characters: "\u{230a}" },
    CharRef { name: "Leftarrow;", characters: "\u{21d0}" },
    CharRef { name: "LessTilde;", characters: "\u{2272}" },
    CharRef { name: "LessLess;", characters: "\u{2aa1}" },
    CharRef { name: "LeftTee;", characters: "\u{22a3}" },
    CharRef { name: "Lacute;", characters: "\u{139}" },
    CharRef { name: "Lambda;", characters: "\u{39b}" },
    CharRef { name: "Lcaron;", characters: "\u{13d}" },
    CharRef { name: "Lcedil;", characters: "\u{13b}" },
    CharRef { name: "Lmidot;", characters: "\u{13f}" },
    CharRef { name: "Lstrok;", characters: "\u{141}" },
    CharRef { name: "LJcy;", characters: "\u{409}" },
    CharRef { name: "Lang;", characters: "\u{27ea}" },
    CharRef { name: "Larr;", characters: "\u{219e}" },
    CharRef { name: "Lopf;", characters: "\u{1d543}" },
    CharRef { name: "Lscr;", characters: "\u{2112}" },
    CharRef { name: "Lcy;", characters: "\u{41b}" },
    CharRef { name: "Lfr;", characters: "\u{1d50f}" },
    CharRef { name: "Lsh;", characters: "\u{21b0}" },
    CharRef { name: "LT;", characters: "<" },
    CharRef { name: "Ll;", characters: "\u{22d8}" },
    CharRef { name: "Lt;", characters: "\u{226a}" },
    CharRef { name: "LT", characters: "<" },
];

static UPPER_M: &[CharRef] = &[
    CharRef { name: "MediumSpace;", characters: "\u{205f}" },
    CharRef { name: "Mellintrf;", characters: "\u{2133}" },
    CharRef { name: "MinusPlus;", characters: "\u{2213}" },
    CharRef { name: "Mopf;", characters: "\u{1d544}" },
    CharRef { name: "Mscr;", characters: "\u{2133}" },
    CharRef { name: "Map;", characters: "\u{2905}" },
    CharRef { name: "Mcy;", characters: "\u{41c}" },
    CharRef { name: "Mfr;", characters: "\u{1d510}" },
    CharRef { name: "Mu;", characters: "\u{39c}" },
];

static UPPER_N: &[CharRef] = &[
    CharRef { name: "NotNestedGreaterGreater;", characters: "\u{2aa2}\u{338}" },
    CharRef { name: "NotSquareSupersetEqual;", characters: "\u{22e3}" },
    CharRef { name: "NegativeVeryThinSpace;", characters: "\u{200b}" },
    CharRef { name: "NotPrecedesSlantEqual;", characters: "\u{22e0}" },
    CharRef { name: "NotRightTriangleEqual;", characters: "\u{22ed}" },
    CharRef { name: "NotSucceedsSlantEqual;", characters: "\u{22e1}" },
    CharRef { name: "NestedGreaterGreater;", characters: "\u{226b}" },
    CharRef { name: "NotDoubleVerticalBar;", characters: "\u{2226}" },
    CharRef { name: "NotGreaterSlantEqual;", characters: "\u{2a7e}\u{338}" },
    CharRef { name: "NotLeftTriangleEqual;", characters: "\u{22ec}" },
    CharRef { name: "NotSquareSubsetEqual;", characters: "\u{22e2}" },
    CharRef { name: "NegativeMediumSpace;", characters: "\u{200b}" },
    CharRef { name: "NotGreaterFullEqual;", characters: "\u{2267}\u{338}" },
    CharRef { name: "NotRightTriangleBar;", characters: "\u{29d0}\u{338}" },
    CharRef { name: "NegativeThickSpace;", characters: "\u{200b}" },
    CharRef { name: "NotLeftTriangleBar;", characters: "\u{29cf}\u{338}" },
    CharRef { name: "NegativeThinSpace;", characters: "\u{200b}" },
    CharRef { name: "NotGreaterGreater;", characters: "\u{226b}\u{338}" },
    CharRef { name: "NotLessSlantEqual;", characters: "\u{2a7d}\u{338}" },
    CharRef { name: "NotNestedLessLess;", characters: "\u{2aa1}\u{338}" },
    CharRef { name: "NotReverseElement;", characters: "\u{220c}" },
    CharRef { name: "NotSquareSuperset;", characters: "\u{2290}\u{338}" },
    CharRef { name: "NotTildeFullEqual;", characters: "\u{2247}" },
    CharRef { name: "NonBreakingSpace;", characters: "\u{a0}" },
    CharRef { name: "NotPrecedesEqual;", characters: "\u{2aaf}\u{338}" },
    CharRef { name: "NotRightTriangle;", characters: "\u{22eb}" },
    CharRef { name: "NotSucceedsEqual;", characters: "\u{2ab0}\u{338}" },
    CharRef { name: "NotSucceedsTilde;", characters: "\u{227f}\u{338}" },
    CharRef { name: "NotSupersetEqual;", characters: "\u{2289}" },
    CharRef { name: "NotGreaterEqual;", characters: "\u{2271}" },
    CharRef { name: "NotGreaterTilde;", characters: "\u{2275}" },
    CharRef { name: "NotHumpDownHump;", characters: "\u{224e}\u{338}" },
    CharRef { name: "NotLeftTriangle;", characters: "\u{22ea}" },
    CharRef { name: "NotSquareSubset;", characters: "\u{228f}\u{338}" },
    CharRef { name: "NestedLessLess;", characters: "\u{226a}" },
    CharRef { name: "NotGreaterLess;", characters: "\u{2279}" },
    CharRef { name: "NotLessGreater;", characters: "\u{2278}" },
    CharRef { name: "NotSubsetEqual;", characters: "\u{2288}" },
    CharRef { name: "NotVerticalBar;", characters: "\u{2224}" },
    CharRef { name: "NotEqualTilde;", characters: "\u{2242}\u{338}" },
    CharRef { name: "NotTildeEqual;", characters: "\u{2244}" },
    CharRef { name: "NotTildeTilde;", characters: "\u{2249}" },
    CharRef { name: "NotCongruent;", characters: "\u{2262}" },
    CharRef { name: "NotHumpEqual;", characters: "\u{224f}\u{338}" },
    CharRef { name: "NotLessEqual;", characters: "\u{2270}" },
    CharRef { name: "NotLessTilde;", characters: "\u{2274}" },
    CharRef { name: "NotLessLess;", characters: "\u{226a}\u{338}" },
    CharRef { name: "NotPrecedes;", characters: "\u{2280}" },
    CharRef { name: "NotSucceeds;", characters: "\u{2281}" },
    CharRef { name: "NotSuperset;", characters: "\u{2283}\u{20d2}" },
    CharRef { name: "NotElement;", characters: "\u{2209}" },
    CharRef { name: "NotGreater;", characters: "\u{226f}" },
    CharRef { name: "NotCupCap;", characters: "\u{226d}" },
    CharRef { name: "NotExists;", characters: "\u{2204}" },
    CharRef { name: "NotSubset;", characters: "\u{2282}\u{20d2}" },
    CharRef { name: "NotEqual;", characters: "\u{2260}" },
    CharRef { name: "NotTilde;", characters: "\u{2241}" },
    CharRef { name: "NewLine;", characters: "\u{a}" },
    CharRef { name: "NoBreak;", characters: "\u{2060}" },
    CharRef { name: "NotLess;", characters: "\u{226e}" },
    CharRef { name: "Nacute;", characters: "\u{143}" },
    CharRef { name: "Ncaron;", characters: "\u{147}" },
    CharRef { name: "Ncedil;", characters: "\u{145}" },
    CharRef { name: "Ntilde;", characters: "\u{d1}" },
    CharRef { name: "Ntilde", characters: "\u{d1}" },
    CharRef { name: "NJcy;", characters: "\u{40a}" },
    CharRef { name: "Nopf;", characters: "\u{2115}" },
    CharRef { name: "Nscr;", characters: "\u{1d4a9}" },
    CharRef { name: "Ncy;", characters: "\u{41d}" },
    CharRef { name: "Nfr;", characters: "\u{1d511}" },
    CharRef { name: "Not;", characters: "\u{2aec}" },
    CharRef { name: "Nu;", characters: "\u{39d}" },
];

static UPPER_O: &[CharRef] = &[
    CharRef { name: "OpenCurlyDoubleQuote;", characters: "\u{201c}" },
    CharRef { name: "OverParenthesis;", characters: "\u{23dc}" },
    CharRef { name: "OpenCurlyQuote;", characters: "\u{2018}" },
    CharRef { name: "OverBracket;", characters: "\u{23b4}" },
    CharRef { name: "OverBrace;", characters: "\u{23de}" },
    CharRef { name: "Omicron;", characters: "\u{39f}" },
    CharRef { name: "OverBar;", characters: "\u{203e}" },
    CharRef { name: "Oacute;", characters: "\u{d3}" },
    CharRef { name: "Odblac;", characters: "\u{150}" },
    CharRef { name: "Ograve;", characters: "\u{d2}" },
    CharRef { name: "Oslash;", characters: "\u{d8}" },
    CharRef { name: "Otilde;", characters: "\u{d5}" },
    CharRef { name: "Otimes;", characters: "\u{2a37}" },
    CharRef { name: "OElig;", characters: "\u{152}" },
    CharRef { name: "Oacute", characters: "\u{d3}" },
    CharRef { name: "Ocirc;", characters: "\u{d4}" },
    CharRef { name: "Ograve", characters: "\u{d2}" },
    CharRef { name: "Omacr;", characters: "\u{14c}" },
    CharRef { name: "Omega;", characters: "\u{3a9}" },
    CharRef { name: "Oslash", characters: "\u{d8}" },
    CharRef { name: "Otilde", characters: "\u{d5}" },
    CharRef { name: "Ocirc", characters: "\u{d4}" },
    CharRef { name: "Oopf;", characters: "\u{1d546}" },
    CharRef { name: "Oscr;", characters: "\u{1d4aa}" },
    CharRef { name: "Ouml;", characters: "\u{d6}" },
    CharRef { name: "Ocy;", characters: "\u{41e}" },
    CharRef { name: "Ofr;", characters: "\u{1d512}" },
    CharRef { name: "Ouml", characters: "\u{d6}" },
    CharRef { name: "Or;", characters: "\u{2a54}" },
];

static UPPER_P: &[CharRef] = &[
    CharRef { name: "PrecedesSlantEqual;", characters: "\u{227c}" },
    CharRef { name: "Poincareplane;", characters: "\u{210c}" },
    CharRef { name: "PrecedesEqual;", characters: "\u{2aaf}" },
    CharRef { name: "PrecedesTilde;", characters: "\u{227e}" },
    CharRef { name: "Proportional;", characters: "\u{221d}" },
    CharRef { name: "Proportion;", characters: "\u{2237}" },
    CharRef { name: "PlusMinus;", characters: "\u{b1}" },
    CharRef { name: "PartialD;", characters: "\u{2202}" },
    CharRef { name: "Precedes;", characters: "\u{227a}" },
    CharRef { name: "Product;", characters: "\u{220f}" },
    CharRef { name: "Prime;", characters: "\u{2033}" },
    CharRef { name: "Popf;", characters: "\u{2119}" },
    CharRef { name: "Pscr;", characters: "\u{1d4ab}" },
    CharRef { name: "Pcy;", characters: "\u{41f}" },
    CharRef { name: "Pfr;", characters: "\u{1d513}" },
    CharRef { name: "Phi;", characters: "\u{3a6}" },
    CharRef { name: "Psi;", characters: "\u{3a8}" },
    CharRef { name: "Pi;", characters: "\u{3a0}" },
    CharRef { name: "Pr;", characters: "\u{2abb}" },
];

static UPPER_Q: &[CharRef] = &[
    CharRef { name: "QUOT;", characters: "\"" },
    CharRef { name: "Qopf;", characters: "\u{211a}" },
    CharRef { name: "Qscr;", characters: "\u{1d4ac}" },
    CharRef { name: "QUOT", characters: "\"" },
    CharRef { name: "Qfr;", characters: "\u{1d514}" },
];

static UPPER_R: &[CharRef] = &[
    CharRef { name: "ReverseUpEquilibrium;", characters: "\u{296f}" },
    CharRef { name: "RightArrowLeftArrow;", characters: "\u{21c4}" },
    CharRef { name: "ReverseEquilibrium;", characters: "\u{21cb}" },
    CharRef { name: "RightDoubleBracket;", characters: "\u{27e7}" },
    CharRef { name: "RightDownTeeVector;", characters: "\u{295d}" },
    CharRef { name: "RightDownVectorBar;", characters: "\u{2955}" },
    CharRef { name: "RightTriangleEqual;", characters: "\u{22b5}" },
    CharRef { name: "RightAngleBracket;", characters: "\u{27e9}" },
    CharRef { name: "RightUpDownVector;", characters: "\u{294f}" },
    CharRef { name: "RightTriangleBar;", characters: "\u{29d0}" },
    CharRef { name: "RightUpTeeVector;", characters: "\u{295c}" },
    CharRef { name: "RightUpVectorBar;", characters: "\u{2954}" },
    CharRef { name: "RightDownVector;", characters: "\u{21c2}" },
    CharRef { name: "ReverseElement;", characters: "\u{220b}" },
    CharRef { name: "RightTeeVector;", characters: "\u{295b}" },
    CharRef { name: "RightVectorBar;", characters: "\u{2953}" },
    CharRef { name: "RightArrowBar;", characters: "\u{21e5}" },
    CharRef { name: "RightTeeArrow;", characters: "\u{21a6}" },
    CharRef { name: "RightTriangle;", characters: "\u{22b3}" },
    CharRef { name: "RightUpVector;", characters: "\u{21be}" },
    CharRef { name: "RightCeiling;", characters: "\u{2309}" },
    CharRef { name: "RoundImplies;", characters: "\u{2970}" },
    CharRef { name: "RightVector;", characters: "\u{21c0}" },
    CharRef { name: "Rrightarrow;", characters: "\u{21db}" },
    CharRef { name: "RuleDelayed;", characters: "\u{29f4}" },
    CharRef { name: "RightArrow;", characters: "\u{2192}" },
    CharRef { name: "RightFloor;", characters: "\u{230b}" },
    CharRef { name: "Rightarrow;", characters: "\u{21d2}" },
    CharRef { name: "RightTee;", characters: "\u{22a2}" },
    CharRef { name: "Racute;", characters: "\u{154}" },
    CharRef { name: "Rarrtl;", characters: "\u{2916}" },
    CharRef { name: "Rcaron;", characters: "\u{158}" },
    CharRef { name: "Rcedil;", characters: "\u{156}" },
    CharRef { name: "RBarr;", characters: "\u{2910}" },
    CharRef { name: "Rang;", characters: "\u{27eb}" },
    CharRef { name: "Rarr;", characters: "\u{21a0}" },
    CharRef { name: "Ropf;", characters: "\u{211d}" },
    CharRef { name: "Rscr;", characters: "\u{211b}" },
    CharRef { name: "REG;", characters: "\u{ae}" },
    CharRef { name: "Rcy;", characters: "\u{420}" },
    CharRef { name: "Rfr;", characters: "\u{211c}" },
    CharRef { name: "Rho;", characters: "\u{3a1}" },
    CharRef { name: "Rsh;", characters: "\u{21b1}" },
    CharRef { name: "REG", characters: "\u{ae}" },
    CharRef { name: "Re;", characters: "\u{211c}" },
];

static UPPER_S: &[CharRef] = &[
    CharRef { name: "SquareSupersetEqual;", characters: "\u{2292}" },
    CharRef { name: "SquareIntersection;", characters: "\u{2293}" },
    CharRef { name: "SucceedsSlantEqual;", characters: "\u{227d}" },
    CharRef { name: "SquareSubsetEqual;", characters: "\u{2291}" },
    CharRef { name: "ShortRightArrow;", characters: "\u{2192}" },
    CharRef { name: "ShortDownArrow;", characters: "\u{2193}" },
    CharRef { name: "ShortLeftArrow;", characters: "\u{2190}" },
    CharRef { name: "SquareSuperset;", characters: "\u{2290}" },
    CharRef { name: "SucceedsEqual;", characters: "\u{2ab0}" },
    CharRef { name: "SucceedsTilde;", characters: "\u{227f}" },
    CharRef { name: "SupersetEqual;", characters: "\u{2287}" },
    CharRef { name: "ShortUpArrow;", characters: "\u{2191}" },
    CharRef { name: "SquareSubset;", characters: "\u{228f}" },
    CharRef { name: "SmallCircle;", characters: "\u{2218}" },
    CharRef { name: "SquareUnion;", characters: "\u{2294}" },
    CharRef { name: "SubsetEqual;", characters: "\u{2286}" },
    CharRef { name: "Succeeds;", characters: "\u{227b}" },
    CharRef { name: "SuchThat;", characters: "\u{220b}" },
    CharRef { name: "Superset;", characters: "\u{2283}" },
    CharRef { name: "SHCHcy;", characters: "\u{429}" },
    CharRef { name: "SOFTcy;", characters: "\u{42c}" },
    CharRef { name: "Sacute;", characters: "\u{15a}" },
    CharRef { name: "Scaron;", characters: "\u{160}" },
    CharRef { name: "Scedil;", characters: "\u{15e}" },
    CharRef { name: "Square;", characters: "\u{25a1}" },
    CharRef { name: "Subset;", characters: "\u{22d0}" },
    CharRef { name: "Supset;", characters: "\u{22d1}" },
    CharRef { name: "Scirc;", characters: "\u{15c}" },
    CharRef { name: "Sigma;", characters: "\u{3a3}" },
    CharRef { name: "SHcy;", characters: "\u{428}" },
    CharRef { name: "Sopf;", characters: "\u{1d54a}" },
    CharRef { name: "Sqrt;", characters: "\u{221a}" },
    CharRef { name: "Sscr;", characters: "\u{1d4ae}" },
    CharRef { name: "Star;", characters: "\u{22c6}" },
    CharRef { name: "Scy;", characters: "\u{421}" },
    CharRef { name: "Sfr;", characters: "\u{1d516}" },
    CharRef { name: "Sub;", characters: "\u{22d0}" },
    CharRef { name: "Sum;", characters: "\u{2211}" },
    CharRef { name: "Sup;", characters: "\u{22d1}" },
    CharRef { name: "Sc;", characters: "\u{2abc}" },
];

static UPPER_T: &[CharRef] = &[
    CharRef { name: "TildeFullEqual;", characters: "\u{2245}" },
    CharRef { name: "ThickSpace;", characters: "\u{205f}\u{200a}" },
    CharRef { name: "TildeEqual;", characters: "\u{2243}" },
    CharRef { name: "TildeTilde;", characters: "\u{2248}" },
    CharRef { name: "Therefore;", characters: "\u{2234}" },
    CharRef { name: "ThinSpace;", characters: "\u{2009}" },
    CharRef { name: "TripleDot;", characters: "\u{20db}" },
    CharRef { name: "Tcaron;", characters: "\u{164}" },
    CharRef { name: "Tcedil;", characters: "\u{162}" },
    CharRef { name: "Tstrok;", characters: "\u{166}" },
    CharRef { name: "THORN;", characters: "\u{de}" },
    CharRef { name: "TRADE;", characters: "\u{2122}" },
    CharRef { name: "TSHcy;", characters: "\u{40b}" },
    CharRef { name: "Theta;", characters: "\u{398}" },
    CharRef { name: "Tilde;", characters: "\u{223c}" },
    CharRef { name: "THORN", characters: "\u{de}" },
    CharRef { name: "TScy;", characters: "\u{426}" },
    CharRef { name: "Topf;", characters: "\u{1d54b}" },
    CharRef { name: "Tscr;", characters: "\u{1d4af}" },
    CharRef { name: "Tab;", characters: "\u{9}" },
    CharRef { name: "Tau;", characters: "\u{3a4}" },
    CharRef { name: "Tcy;", characters: "\u{422}" },
    CharRef { name: "Tfr;", characters: "\u{1d517}" },
];

static UPPER_U: &[CharRef] = &[
    CharRef { name: "UnderParenthesis;", characters: "\u{23dd}" },
    CharRef { name: "UpArrowDownArrow;", characters: "\u{21c5}" },
    CharRef { name: "UpperRightArrow;", characters: "\u{2197}" },
    CharRef { name: "UpperLeftArrow;", characters: "\u{2196}" },
    CharRef { name: "UpEquilibrium;", characters: "\u{296e}" },
    CharRef { name: "UnderBracket;", characters: "\u{23b5}" },
    CharRef { name: "UpDownArrow;", characters: "\u{2195}" },
    CharRef { name: "Updownarrow;", characters: "\u{21d5}" },
    CharRef { name: "UnderBrace;", characters: "\u{23df}" },
    CharRef { name: "UpArrowBar;", characters: "\u{2912}" },
    CharRef { name: "UpTeeArrow;", characters: "\u{21a5}" },
    CharRef { name: "UnionPlus;", characters: "\u{228e}" },
    CharRef { name: "Uarrocir;", characters: "\u{2949}" },
    CharRef { name: "UnderBar;", characters: "_" },
    CharRef { name: "UpArrow;", characters: "\u{2191}" },
    CharRef { name: "Uparrow;", characters: "\u{21d1}" },
    CharRef { name: "Upsilon;", characters: "\u{3a5}" },
    CharRef { name: "Uacute;", characters: "\u{da}" },
    CharRef { name: "Ubreve;", characters: "\u{16c}" },
    CharRef { name: "Udblac;", characters: "\u{170}" },
    CharRef { name: "Ugrave;", characters: "\u{d9}" },
    CharRef { name: "Utilde;", characters: "\u{168}" },
    CharRef { name: "Uacute", characters: "\u{da}" },
    CharRef { name: "Ubrcy;", characters: "\u{40e}" },
    CharRef { name: "Ucirc;", characters: "\u{db}" },
    CharRef { name: "Ugrave", characters: "\u{d9}" },
    CharRef { name: "Umacr;", characters: "\u{16a}" },
    CharRef { name: "Union;", characters: "\u{22c3}" },
    CharRef { name: "Uogon;", characters: "\u{172}" },
    CharRef { name: "UpTee;", characters: "\u{22a5}" },
    CharRef { name: "Uring;", characters: "\u{16e}" },
    CharRef { name: "Uarr;", characters: "\u{219f}" },
    CharRef { name: "Ucirc", characters: "\u{db}" },
    CharRef { name: "Uopf;", characters: "\u{1d54c}" },
    CharRef { name: "Upsi;", characters: "\u{3d2}" },
    CharRef { name: "Uscr;", characters: "\u{1d4b0}" },
    CharRef { name: "Uuml;", characters: "\u{dc}" },
    CharRef { name: "Ucy;", characters: "\u{423}" },
    CharRef { name: "Ufr;", characters: "\u{1d518}" },
    CharRef { name: "Uuml", characters: "\u{dc}" },
];

static UPPER_V: &[CharRef] = &[
    CharRef { name: "VerticalSeparator;", characters: "\u{2758}" },
    CharRef { name: "VerticalTilde;", characters: "\u{2240}" },
    CharRef { name: "VeryThinSpace;", characters: "\u{200a}" },
    CharRef { name: "VerticalLine;", characters: "|" },
    CharRef { name: "VerticalBar;", characters: "\u{2223}" },
    CharRef { name: "Vdashl;", characters: "\u{2ae6}" },
    CharRef { name: "Verbar;", characters: "\u{2016}" },
    CharRef { name: "Vvdash;", characters: "\u{22aa}" },
    CharRef { name: "VDash;", characters: "\u{22ab}" },
    CharRef { name: "Vdash;", characters: "\u{22a9}" },
    CharRef { name: "Vbar;", characters: "\u{2aeb}" },
    CharRef { name: "Vert;", characters: "\u{2016}" },
    CharRef { name: "Vopf;", characters: "\u{1d54d}" },
    CharRef { name: "Vscr;", characters: "\u{1d4b1}" },
    CharRef { name: "Vcy;", characters: "\u{412}" },
    CharRef { name: "Vee;", characters: "\u{22c1}" },
    CharRef { name: "Vfr;", characters: "\u{1d519}" },
];

static UPPER_W: &[CharRef] = &[
    CharRef { name: "Wcirc;", characters: "\u{174}" },
    CharRef { name: "Wedge;", characters: "\u{22c0}" },
    CharRef { name: "Wopf;", characters: "\u{1d54e}" },
    CharRef { name: "Wscr;", characters: "\u{1d4b2}" },
    CharRef { name: "Wfr;", characters: "\u{1d51a}" },
];

static UPPER_X: &[CharRef] = &[
    CharRef { name: "Xopf;", characters: "\u{1d54f}" },
    CharRef { name: "Xscr;", characters: "\u{1d4b3}" },
    CharRef { name: "Xfr;", characters: "\u{1d51b}" },
    CharRef { name: "Xi;", characters: "\u{39e}" },
];

static UPPER_Y: &[CharRef] = &[
    CharRef { name: "Yacute;", characters: "\u{dd}" },
    CharRef { name: "Yacute", characters: "\u{dd}" },
    CharRef { name: "Ycirc;", characters: "\u{176}" },
    CharRef { name: "YAcy;", characters: "\u{42f}" },
    CharRef { name: "YIcy;", characters: "\u{407}" },
    CharRef { name: "YUcy;", characters: "\u{42e}" },
    CharRef { name: "Yopf;", characters: "\u{1d550}" },
    CharRef { name: "Yscr;", characters: "\u{1d4b4}" },
    CharRef { name: "Yuml;", characters: "\u{178}" },
    CharRef { name: "Ycy;", characters: "\u{42b}" },
    CharRef { name: "Yfr;", characters: "\u{1d51c}" },
];

static UPPER_Z: &[CharRef] = &[
    CharRef { name: "ZeroWidthSpace;", characters: "\u{200b}" },
    CharRef { name: "Zacute;", characters: "\u{179}" },
    CharRef { name: "Zcaron;", characters: "\u{17d}" },
    CharRef { name: "ZHcy;", characters: "\u{416}" },
    CharRef { name: "Zdot;", characters: "\u{17b}" },
    CharRef { name: "Zeta;", characters: "\u{396}" },
    CharRef { name: "Zopf;", characters: "\u{2124}" },
    CharRef { name: "Zscr;", characters: "\u{1d4b5}" },
    CharRef { name: "Zcy;", characters: "\u{417}" },
    CharRef { name: "Zfr;", characters: "\u{2128}" },
];

static LOWER_A: &[CharRef] = &[
    CharRef { name: "andslope;", characters: "\u{2a58}" },
    CharRef { name: "angmsdaa;", characters: "\u{29a8}" },
    CharRef { name: "angmsdab;", characters: "\u{29a9}" },
    CharRef { name: "angmsdac;", characters: "\u{29aa}" },
    CharRef { name: "angmsdad;", characters: "\u{29ab}" },
    CharRef { name: "angmsdae;", characters: "\u{29ac}" },
    CharRef { name: "angmsdaf;", characters: "\u{29ad}" },
    CharRef { name: "angmsdag;", characters: "\u{29ae}" },
    CharRef { name: "angmsdah;", characters: "\u{29af}" },
    CharRef { name: "angrtvbd;", characters: "\u{299d}" },
    CharRef { name: "approxeq;", characters: "\u{224a}" },
    CharRef { name: "awconint;", characters: "\u{2233}" },
    CharRef { name: "alefsym;", characters: "\u{2135}" },
    CharRef { name: "angrtvb;", characters: "\u{22be}" },
    CharRef { name: "angzarr;", characters: "\u{237c}" },
    CharRef { name: "asympeq;", characters: "\u{224d}" },
    CharRef { name: "aacute;", characters: "\u{e1}" },
    CharRef { name: "abreve;", characters: "\u{103}" },
    CharRef { name: "agrave;", characters: "\u{e0}" },
    CharRef { name: "andand;", characters: "\u{2a55}" },
    CharRef { name: "angmsd;", characters: "\u{2221}" },
    CharRef { name: "angsph;", characters: "\u{2222}" },
    CharRef { name: "apacir;", characters: "\u{2a6f}" },
    CharRef { name: "approx;", characters: "\u{2248}" },
    CharRef { name: "atilde;", characters: "\u{e3}" },
    CharRef { name: "aacute", characters: "\u{e1}" },
    CharRef { name: "acirc;", characters: "\u{e2}" },
    CharRef { name: "acute;", characters: "\u{b4}" },
    CharRef { name: "aelig;", characters: "\u{e6}" },
    CharRef { name: "agrave", characters: "\u{e0}" },
    CharRef { name: "aleph;", characters: "\u{2135}" },
    CharRef { name: "alpha;", characters: "\u{3b1}" },
    CharRef { name: "amacr;", characters: "\u{101}" },
    CharRef { name: "amalg;", characters: "\u{2a3f}" },
    CharRef { name: "angle;", characters: "\u{2220}" },
    CharRef { name: "angrt;", characters: "\u{221f}" },
    CharRef { name: "angst;", characters: "\u{c5}" },
    CharRef { name: "aogon;", characters: "\u{105}" },
    CharRef { name: "aring;", characters: "\u{e5}" },
    CharRef { name: "asymp;", characters: "\u{2248}" },
    CharRef { name: "atilde", characters: "\u{e3}" },
    CharRef { name: "awint;", characters: "\u{2a11}" },
    CharRef { name: "acirc", characters: "\u{e2}" },
    CharRef { name: "acute", characters: "\u{b4}" },
    CharRef { name: "aelig", characters: "\u{e6}" },
    CharRef { name: "andd;", characters: "\u{2a5c}" },
    CharRef { name: "andv;", characters: "\u{2a5a}" },
    CharRef { name: "ange;", characters: "\u{29a4}" },
    CharRef { name: "aopf;", characters: "\u{1d552}" },
    CharRef { name: "apid;", characters: "\u{224b}" },
    CharRef { name: "apos;", characters: "'" },
    CharRef { name: "aring", characters: "\u{e5}" },
    CharRef { name: "ascr;", characters: "\u{1d4b6}" },
    CharRef { name: "auml;", characters: "\u{e4}" },
    CharRef { name: "acE;", characters: "\u{223e}\u{333}" },
    CharRef { name: "acd;", characters: "\u{223f}" },
    CharRef { name: "acy;", characters: "\u{430}" },
    CharRef { name: "afr;", characters: "\u{1d51e}" },
    CharRef { name: "amp;", characters: "&" },
    CharRef { name: "and;", characters: "\u{2227}" },
    CharRef { name: "ang;", characters: "\u{2220}" },
    CharRef { name: "apE;", characters: "\u{2a70}" },
    CharRef { name: "ape;", characters: "\u{224a}" },
    CharRef { name: "ast;", characters: "*" },
    CharRef { name: "auml", characters: "\u{e4}" },
    CharRef { name: "ac;", characters: "\u{223e}" },
    CharRef { name: "af;", characters: "\u{2061}" },
    CharRef { name: "amp", characters: "&" },
    CharRef { name: "ap;", characters: "\u{2248}" },
];

static LOWER_B: &[CharRef] = &[
    CharRef { name: "blacktriangleright;", characters: "\u{25b8}" },
    CharRef { name: "blacktriangledown;", characters: "\u{25be}" },
    CharRef { name: "blacktriangleleft;", characters: "\u{25c2}" },
    CharRef { name: "bigtriangledown;", characters: "\u{25bd}" },
    CharRef { name: "bigtriangleup;", characters: "\u{25b3}" },
    CharRef { name: "blacktriangle;", characters: "\u{25b4}" },
    CharRef { name: "blacklozenge;", characters: "\u{29eb}" },
    CharRef { name: "backepsilon;", characters: "\u{3f6}" },
    CharRef { name: "blacksquare;", characters: "\u{25aa}" },
    CharRef { name: "backprime;", characters: "\u{2035}" },
    CharRef { name: "backsimeq;", characters: "\u{22cd}" },
    CharRef { name: "bigotimes;", characters: "\u{2a02}" },
    CharRef { name: "backcong;", characters: "\u{224c}" },
    CharRef { name: "barwedge;", characters: "\u{2305}" },
    CharRef { name: "bbrktbrk;", characters: "\u{23b6}" },
    CharRef { name: "bigoplus;", characters: "\u{2a01}" },
    CharRef { name: "bigsqcup;", characters: "\u{2a06}" },
    CharRef { name: "biguplus;", characters: "\u{2a04}" },
    CharRef { name: "bigwedge;", characters: "\u{22c0}" },
    CharRef { name: "boxminus;", characters: "\u{229f}" },
    CharRef { name: "boxtimes;", characters: "\u{22a0}" },
    CharRef { name: "bsolhsub;", characters: "\u{27c8}" },
    CharRef { name: "backsim;", characters: "\u{223d}" },
    CharRef { name: "because;", characters: "\u{2235}" },
    CharRef { name: "bemptyv;", characters: "\u{29b0}" },
    CharRef { name: "between;", characters: "\u{226c}" },
    CharRef { name: "bigcirc;", characters: "\u{25ef}" },
    CharRef { name: "bigodot;", characters: "\u{2a00}" },
    CharRef { name: "bigstar;", characters: "\u{2605}" },
    CharRef { name: "bnequiv;", characters: "\u{2261}\u{20e5}" },
    CharRef { name: "boxplus;", characters: "\u{229e}" },
    CharRef { name: "barvee;", characters: "\u{22bd}" },
    CharRef { name: "barwed;", characters: "\u{2305}" },
    CharRef { name: "becaus;", characters: "\u{2235}" },
    CharRef { name: "bernou;", characters: "\u{212c}" },
    CharRef { name: "bigcap;", characters: "\u{22c2}" },
    CharRef { name: "bigcup;", characters: "\u{22c3}" },
    CharRef { name: "bigvee;", characters: "\u{22c1}" },
    CharRef { name: "bkarow;", characters: "\u{290d}" },
    CharRef { name: "bottom;", characters: "\u{22a5}" },
    CharRef { name: "bowtie;", characters: "\u{22c8}" },
    CharRef { name: "boxbox;", characters: "\u{29c9}" },
    CharRef { name: "bprime;", characters: "\u{2035}" },
    CharRef { name: "brvbar;", characters: "\u{a6}" },
    CharRef { name: "bullet;", characters: "\u{2022}" },
    CharRef { name: "bumpeq;", characters: "\u{224f}" },
    CharRef { name: "bcong;", characters: "\u{224c}" },
    CharRef { name: "bdquo;", characters: "\u{201e}" },
    CharRef { name: "bepsi;", characters: "\u{3f6}" },
    CharRef { name: "blank;", characters: "\u{2423}" },
    CharRef { name: "blk12;", characters: "\u{2592}" },
    CharRef { name: "blk14;", characters: "\u{2591}" },
    CharRef { name: "blk34;", characters: "\u{2593}" },
    CharRef { name: "block;", characters: "\u{2588}" },
    CharRef { name: "boxDL;", characters: "\u{2557}" },
    CharRef { name: "boxDR;", characters: "\u{2554}" },
    CharRef { name: "boxDl;", characters: "\u{2556}" },
    CharRef { name: "boxDr;", characters: "\u{2553}" },
    CharRef { name: "boxHD;", characters: "\u{2566}" },
    CharRef { name: "boxHU;", characters: "\u{2569}" },
    CharRef { name: "boxHd;", characters: "\u{2564}" },
    CharRef { name: "boxHu;", characters: "\u{2567}" },
    CharRef { name: "boxUL;", characters: "\u{255d}" },
    CharRef { name: "boxUR;", characters: "\u{255a}" },
    CharRef { name: "boxUl;", characters: "\u{255c}" },
    CharRef { name: "boxUr;", characters: "\u{2559}" },
    CharRef { name: "boxVH;", characters: "\u{256c}" },
    CharRef { name: "boxVL;", characters: "\u{2563}" },
    CharRef { name: "boxVR;", characters: "\u{2560}" },
    CharRef { name: "boxVh;", characters: "\u{256b}" },
    CharRef { name: "boxVl;", characters: "\u{2562}" },
    CharRef { name: "boxVr;", characters: "\u{255f}" },
    CharRef { name: "boxdL;", characters: "\u{2555}" },
    CharRef { name: "boxdR;", characters: "\u{2552}" },
    CharRef { name: "boxdl;", characters: "\u{2510}" },
    CharRef { name: "boxdr;", characters: "\u{250c}" },
    CharRef { name: "boxhD;", characters: "\u{2565}" },
    CharRef { name: "boxhU;", characters: "\u{2568}" },
    CharRef { name: "boxhd;", characters: "\u{252c}" },
    CharRef { name: "boxhu;", characters: "\u{2534}" },
    CharRef { name: "boxuL;", characters: "\u{255b}" },
    CharRef { name: "boxuR;", characters: "\u{2558}" },
    CharRef { name: "boxul;", characters: "\u{2518}" },
    CharRef { name: "boxur;", characters: "\u{2514}" },
    CharRef { name: "boxvH;", characters: "\u{256a}" },
    CharRef { name: "boxvL;", characters: "\u{2561}" },
    CharRef { name: "boxvR;", characters: "\u{255e}" },
    CharRef { name: "boxvh;", characters: "\u{253c}" },
    CharRef { name: "boxvl;", characters: "\u{2524}" },
    CharRef { name: "boxvr;", characters: "\u{251c}" },
    CharRef { name: "breve;", characters: "\u{2d8}" },
    CharRef { name: "brvbar", characters: "\u{a6}" },
    CharRef { name: "bsemi;", characters: "\u{204f}" },
    CharRef { name: "bsime;", characters: "\u{22cd}" },
    CharRef { name: "bsolb;", characters: "\u{29c5}" },
    CharRef { name: "bumpE;", characters: "\u{2aae}" },
    CharRef { name: "bumpe;", characters: "\u{224f}" },
    CharRef { name: "bNot;", characters: "\u{2aed}" },
    CharRef { name: "bbrk;", characters: "\u{23b5}" },
    CharRef { name: "beta;", characters: "\u{3b2}" },
    CharRef { name: "beth;", characters: "\u{2136}" },
    CharRef { name: "bnot;", characters: "\u{2310}" },
    CharRef { name: "bopf;", characters: "\u{1d553}" },
    CharRef { name: "boxH;", characters: "\u{2550}" },
    CharRef { name: "boxV;", characters: "\u{2551}" },
    CharRef { name: "boxh;", characters: "\u{2500}" },
    CharRef { name: "boxv;", characters: "\u{2502}" },
    CharRef { name: "bscr;", characters: "\u{1d4b7}" },
    CharRef { name: "bsim;", characters: "\u{223d}" },
    CharRef { name: "bsol;", characters: "\\" },
    CharRef { name: "bull;", characters: "\u{2022}" },
    CharRef { name: "bump;", characters: "\u{224e}" },
    CharRef { name: "bcy;", characters: "\u{431}" },
    CharRef { name: "bfr;", characters: "\u{1d51f}" },
    CharRef { name: "bne;", characters: "=\u{20e5}" },
    CharRef { name: "bot;", characters: "\u{22a5}" },
];

static LOWER_C: &[CharRef] = &[
    CharRef { name: "circlearrowright;", characters: "\u{21bb}" },
    CharRef { name: "circlearrowleft;", characters: "\u{21ba}" },
    CharRef { name: "curvearrowright;", characters: "\u{21b7}" },
    CharRef { name: "curvearrowleft;", characters: "\u{21b6}" },
    CharRef { name: "circledcirc;", characters: "\u{229a}" },
    CharRef { name: "circleddash;", characters: "\u{229d}" },
    CharRef { name: "curlyeqprec;", characters: "\u{22de}" },
    CharRef { name: "curlyeqsucc;", characters: "\u{22df}" },
    CharRef { name: "circledast;", characters: "\u{229b}" },
    CharRef { name: "complement;", characters: "\u{2201}" },
    CharRef { name: "curlywedge;", characters: "\u{22cf}" },
    CharRef { name: "centerdot;", characters: "\u{b7}" },
    CharRef { name: "checkmark;", characters: "\u{2713}" },
    CharRef { name: "complexes;", characters: "\u{2102}" },
    CharRef { name: "capbrcup;", characters: "\u{2a49}" },
    CharRef { name: "circledR;", characters: "\u{ae}" },
    CharRef { name: "circledS;", characters: "\u{24c8}" },
    CharRef { name: "cirfnint;", characters: "\u{2a10}" },
    CharRef { name: "clubsuit;", characters: "\u{2663}" },
    CharRef { name: "cupbrcap;", characters: "\u{2a48}" },
    CharRef { name: "curlyvee;", characters: "\u{22ce}" },
    CharRef { name: "cwconint;", characters: "\u{2232}" },
    CharRef { name: "ccupssm;", characters: "\u{2a50}" },
    CharRef { name: "cemptyv;", characters: "\u{29b2}" },
    CharRef { name: "cirscir;", characters: "\u{29c2}" },
    CharRef { name: "coloneq;", characters: "\u{2254}" },
    CharRef { name: "congdot;", characters: "\u{2a6d}" },
    CharRef { name: "cudarrl;", characters: "\u{2938}" },
    CharRef { name: "cudarrr;", characters: "\u{2935}" },
    CharRef { name: "cularrp;", characters: "\u{293d}" },
    CharRef { name: "curarrm;", characters: "\u{293c}" },
    CharRef { name: "cacute;", characters: "\u{107}" },
    CharRef { name: "capand;", characters: "\u{2a44}" },
    CharRef { name: "capcap;", characters: "\u{2a4b}" },
    CharRef { name: "capcup;", characters: "\u{2a47}" },
    CharRef { name: "capdot;", characters: "\u{2a40}" },
    CharRef { name: "ccaron;", characters: "\u{10d}" },
    CharRef { name: "ccedil;", characters: "\u{e7}" },
    CharRef { name: "circeq;", characters: "\u{2257}" },
    CharRef { name: "cirmid;", characters: "\u{2aef}" },
    CharRef { name: "colone;", characters: "\u{2254}" },
    CharRef { name: "commat;", characters: "@" },
    CharRef { name: "compfn;", characters: "\u{2218}" },
    CharRef { name: "conint;", characters: "\u{222e}" },
    CharRef { name: "coprod;", characters: "\u{2210}" },
    CharRef { name: "copysr;", characters: "\u{2117}" },
    CharRef { name: "cularr;", characters: "\u{21b6}" },
    CharRef { name: "cupcap;", characters: "\u{2a46}" },
    CharRef { name: "cupcup;", characters: "\u{2a4a}" },
    CharRef { name: "cupdot;", characters: "\u{228d}" },
    CharRef { name: "curarr;", characters: "\u{21b7}" },
    CharRef { name: "curren;", characters: "\u{a4}" },
    CharRef { name: "cylcty;", characters: "\u{232d}" },
    CharRef { name: "caret;", characters: "\u{2041}" },
    CharRef { name: "caron;", characters: "\u{2c7}" },
    CharRef { name: "ccaps;", characters: "\u{2a4d}" },
    CharRef { name: "ccedil", characters: "\u{e7}" },
    CharRef { name: "ccirc;", characters: "\u{109}" },
    CharRef { name: "ccups;", characters: "\u{2a4c}" },
    CharRef { name: "cedil;", characters: "\u{b8}" },
    CharRef { name: "check;", characters: "\u{2713}" },
    CharRef { name: "clubs;", characters: "\u{2663}" },
    CharRef { name: "colon;", characters: ":" },
    CharRef { name: "comma;", characters: "," },
    CharRef { name: "crarr;", characters: "\u{21b5}" },
    CharRef { name: "cross;", characters: "\u{2717}" },
    CharRef { name: "csube;", characters: "\u{2ad1}" },
    CharRef { name: "csupe;", characters: "\u{2ad2}" },
    CharRef { name: "ctdot;", characters: "\u{22ef}" },
    CharRef { name: "cuepr;", characters: "\u{22de}" },
    CharRef { name: "cuesc;", characters: "\u{22df}" },
    CharRef { name: "cupor;", characters: "\u{2a45}" },
    CharRef { name: "curren", characters: "\u{a4}" },
    CharRef { name: "cuvee;", characters: "\u{22ce}" },
    CharRef { name: "cuwed;", characters: "\u{22cf}" },
    CharRef { name: "cwint;", characters: "\u{2231}" },
    CharRef { name: "caps;", characters: "\u{2229}\u{fe00}" },
    CharRef { name: "cdot;", characters: "\u{10b}" },
    CharRef { name: "cedil", characters: "\u{b8}" },
    CharRef { name: "cent;", characters: "\u{a2}" },
    CharRef { name: "chcy;", characters: "\u{447}" },
    CharRef { name: "cirE;", characters: "\u{29c3}" },
    CharRef { name: "circ;", characters: "\u{2c6}" },
    CharRef { name: "cire;", characters: "\u{2257}" },
    CharRef { name: "comp;", characters: "\u{2201}" },
    CharRef { name: "cong;", characters: "\u{2245}" },
    CharRef { name: "copf;", characters: "\u{1d554}" },
    CharRef { name: "copy;", characters: "\u{a9}" },
    CharRef { name: "cscr;", characters: "\u{1d4b8}" },
    CharRef { name: "csub;", characters: "\u{2acf}" },
    CharRef { name: "csup;", characters: "\u{2ad0}" },
    CharRef { name: "cups;", characters: "\u{222a}\u{fe00}" },
    CharRef { name: "cap;", characters: "\u{2229}" },
    CharRef { name: "cent", characters: "\u{a2}" },
    CharRef { name: "cfr;", characters: "\u{1d520}" },
    CharRef { name: "chi;", characters: "\u{3c7}" },
    CharRef { name: "cir;", characters: "\u{25cb}" },
    CharRef { name: "copy", characters: "\u{a9}" },
    CharRef { name: "cup;", characters: "\u{222a}" },
];

static LOWER_D: &[CharRef] = &[
    CharRef { name: "downharpoonright;", characters: "\u{21c2}" },
    CharRef { name: "downharpoonleft;", characters: "\u{21c3}" },
    CharRef { name: "doublebarwedge;", characters: "\u{2306}" },
    CharRef { name: "downdownarrows;", characters: "\u{21ca}" },
    CharRef { name: "divideontimes;", characters: "\u{22c7}" },
    CharRef { name: "diamondsuit;", characters: "\u{2666}" },
    CharRef { name: "dotsquare;", characters: "\u{22a1}" },
    CharRef { name: "downarrow;", characters: "\u{2193}" },
    CharRef { name: "doteqdot;", characters: "\u{2251}" },
    CharRef { name: "dotminus;", characters: "\u{2238}" },
    CharRef { name: "drbkarow;", characters: "\u{2910}" },
    CharRef { name: "dzigrarr;", characters: "\u{27ff}" },
    CharRef { name: "dbkarow;", characters: "\u{290f}" },
    CharRef { name: "ddagger;", characters: "\u{2021}" },
    CharRef { name: "ddotseq;", characters: "\u{2a77}" },
    CharRef { name: "demptyv;", characters: "\u{29b1}" },
    CharRef { name: "diamond;", characters: "\u{22c4}" },
    CharRef { name: "digamma;", characters: "\u{3dd}" },
    CharRef { name: "dotplus;", characters: "\u{2214}" },
    CharRef { name: "dwangle;", characters: "\u{29a6}" },
    CharRef { name: "dagger;", characters: "\u{2020}" },
    CharRef { name: "daleth;", characters: "\u{2138}" },
    CharRef { name: "dcaron;", characters: "\u{10f}" },
    CharRef { name: "dfisht;", characters: "\u{297f}" },
    CharRef { name: "divide;", characters: "\u{f7}" },
    CharRef { name: "divonx;", characters: "\u{22c7}" },
    CharRef { name: "dlcorn;", characters: "\u{231e}" },
    CharRef { name: "dlcrop;", characters: "\u{230d}" },
    CharRef { name: "dollar;", characters: "$" },
    CharRef { name: "drcorn;", characters: "\u{231f}" },
    CharRef { name: "drcrop;", characters: "\u{230c}" },
    CharRef { name: "dstrok;", characters: "\u{111}" },
    CharRef { name: "dashv;", characters: "\u{22a3}" },
    CharRef { name: "dblac;", characters: "\u{2dd}" },
    CharRef { name: "ddarr;", characters: "\u{21ca}" },
    CharRef { name: "delta;", characters: "\u{3b4}" },
    CharRef { name: "dharl;", characters: "\u{21c3}" },
    CharRef { name: "dharr;", characters: "\u{21c2}" },
    CharRef { name: "diams;", characters: "\u{2666}" },
    CharRef { name: "disin;", characters: "\u{22f2}" },
    CharRef { name: "divide", characters: "\u{f7}" },
    CharRef { name: "doteq;", characters: "\u{2250}" },
    CharRef { name: "dtdot;", characters: "\u{22f1}" },
    CharRef { name: "dtrif;", characters: "\u{25be}" },
    CharRef { name: "duarr;", characters: "\u{21f5}" },
    CharRef { name: "duhar;", characters: "\u{296f}" },
    CharRef { name: "dArr;", characters: "\u{21d3}" },
    CharRef { name: "dHar;", characters: "\u{2965}" },
    CharRef { name: "darr;", characters: "\u{2193}" },
    CharRef { name: "dash;", characters: "\u{2010}" },
    CharRef { name: "diam;", characters: "\u{22c4}" },
    CharRef { name: "djcy;", characters: "\u{452}" },
    CharRef { name: "dopf;", characters: "\u{1d555}" },
    CharRef { name: "dscr;", characters: "\u{1d4b9}" },
    CharRef { name: "dscy;", characters: "\u{455}" },
    CharRef { name: "dsol;", characters: "\u{29f6}" },
    CharRef { name: "dtri;", characters: "\u{25bf}" },
    CharRef { name: "dzcy;", characters: "\u{45f}" },
    CharRef { name: "dcy;", characters: "\u{434}" },
    CharRef { name: "deg;", characters: "\u{b0}" },
    CharRef { name: "dfr;", characters: "\u{1d521}" },
    CharRef { name: "die;", characters: "\u{a8}" },
    CharRef { name: "div;", characters: "\u{f7}" },
    CharRef { name: "dot;", characters: "\u{2d9}" },
    CharRef { name: "dd;", characters: "\u{2146}" },
    CharRef { name: "deg", characters: "\u{b0}" },
];

static LOWER_E: &[CharRef] = &[
    CharRef { name: "exponentiale;", characters: "\u{2147}" },
    CharRef { name: "eqslantless;", characters: "\u{2a95}" },
    CharRef { name: "expectation;", characters: "\u{2130}" },
    CharRef { name: "eqslantgtr;", characters: "\u{2a96}" },
    CharRef { name: "elinters;", characters: "\u{23e7}" },
    CharRef { name: "emptyset;", characters: "\u{2205}" },
    CharRef { name: "eqvparsl;", characters: "\u{29e5}" },
    CharRef { name: "epsilon;", characters: "\u{3b5}" },
    CharRef { name: "eqcolon;", characters: "\u{2255}" },
    CharRef { name: "equivDD;", characters: "\u{2a78}" },
    CharRef { name: "eacute;", characters: "\u{e9}" },
    CharRef { name: "easter;", characters: "\u{2a6e}" },
    CharRef { name: "ecaron;", characters: "\u{11b}" },
    CharRef { name: "ecolon;", characters: "\u{2255}" },
    CharRef { name: "egrave;", characters: "\u{e8}" },
    CharRef { name: "egsdot;", characters: "\u{2a98}" },
    CharRef { name: "elsdot;", characters: "\u{2a97}" },
    CharRef { name: "emptyv;", characters: "\u{2205}" },
    CharRef { name: "emsp13;", characters: "\u{2004}" },
    CharRef { name: "emsp14;", characters: "\u{2005}" },
    CharRef { name: "eparsl;", characters: "\u{29e3}" },
    CharRef { name: "eqcirc;", characters: "\u{2256}" },
    CharRef { name: "equals;", characters: "=" },
    CharRef { name: "equest;", characters: "\u{225f}" },
    CharRef { name: "eDDot;", characters: "\u{2a77}" },
    CharRef { name: "eacute", characters: "\u{e9}" },
    CharRef { name: "ecirc;", characters: "\u{ea}" },
    CharRef { name: "efDot;", characters: "\u{2252}" },
    CharRef { name: "egrave", characters: "\u{e8}" },
    CharRef { name: "emacr;", characters: "\u{113}" },
    CharRef { name: "empty;", characters: "\u{2205}" },
    CharRef { name: "eogon;", characters: "\u{119}" },
    CharRef { name: "eplus;", characters: "\u{2a71}" },
    CharRef { name: "epsiv;", characters: "\u{3f5}" },
    CharRef { name: "eqsim;", characters: "\u{2242}" },
    CharRef { name: "equiv;", characters: "\u{2261}" },
    CharRef { name: "erDot;", characters: "\u{2253}" },
    CharRef { name: "erarr;", characters: "\u{2971}" },
    CharRef { name: "esdot;", characters: "\u{2250}" },
    CharRef { name: "exist;", characters: "\u{2203}" },
    CharRef { name: "eDot;", characters: "\u{2251}" },
    CharRef { name: "ecir;", characters: "\u{2256}" },
    CharRef { name: "ecirc", characters: "\u{ea}" },
    CharRef { name: "edot;", characters: "\u{117}" },
    CharRef { name: "emsp;", characters: "\u{2003}" },
    CharRef { name: "ensp;", characters: "\u{2002}" },
    CharRef { name: "eopf;", characters: "\u{1d556}" },
    CharRef { name: "epar;", characters: "\u{22d5}" },
    CharRef { name: "epsi;", characters: "\u{3b5}" },
    CharRef { name: "escr;", characters: "\u{212f}" },
    CharRef { name: "esim;", characters: "\u{2242}" },
    CharRef { name: "euml;", characters: "\u{eb}" },
    CharRef { name: "euro;", characters: "\u{20ac}" },
    CharRef { name: "excl;", characters: "!" },
    CharRef { name: "ecy;", characters: "\u{44d}" },
    CharRef { name: "efr;", characters: "\u{1d522}" },
    CharRef { name: "egs;", characters: "\u{2a96}" },
    CharRef { name: "ell;", characters: "\u{2113}" },
    CharRef { name: "els;", characters: "\u{2a95}" },
    CharRef { name: "eng;", characters: "\u{14b}" },
    CharRef { name: "eta;", characters: "\u{3b7}" },
    CharRef { name: "eth;", characters: "\u{f0}" },
    CharRef { name: "euml", characters: "\u{eb}" },
    CharRef { name: "ee;", characters: "\u{2147}" },
    CharRef { name: "eg;", characters: "\u{2a9a}" },
    CharRef { name: "el;", characters: "\u{2a99}" },
    CharRef { name: "eth", characters: "\u{f0}" },
];

static LOWER_F: &[CharRef] = &[
    CharRef { name: "fallingdotseq;", characters: "\u{2252}" },
    CharRef { name: "fpartint;", characters: "\u{2a0d}" },
    CharRef { name: "female;", characters: "\u{2640}" },
    CharRef { name: "ffilig;", characters: "\u{fb03}" },
    CharRef { name: "ffllig;", characters: "\u{fb04}" },
    CharRef { name: "forall;", characters: "\u{2200}" },
    CharRef { name: "frac12;", characters: "\u{bd}" },
    CharRef { name: "frac13;", characters: "\u{2153}" },
    CharRef { name: "frac14;", characters: "\u{bc}" },
    CharRef { name: "frac15;", characters: "\u{2155}" },
    CharRef { name: "frac16;", characters: "\u{2159}" },
    CharRef { name: "frac18;", characters: "\u{215b}" },
    CharRef { name: "frac23;", characters: "\u{2154}" },
    CharRef { name: "frac25;", characters: "\u{2156}" },
    CharRef { name: "frac34;", characters: "\u{be}" },
    CharRef { name: "frac35;", characters: "\u{2157}" },
    CharRef { name: "frac38;", characters: "\u{215c}" },
    CharRef { name: "frac45;", characters: "\u{2158}" },
    CharRef { name: "frac56;", characters: "\u{215a}" },
    CharRef { name: "frac58;", characters: "\u{215d}" },
    CharRef { name: "frac78;", characters: "\u{215e}" },
    CharRef { name: "fflig;", characters: "\u{fb00}" },
    CharRef { name: "filig;", characters: "\u{fb01}" },
    CharRef { name: "fjlig;", characters: "fj" },
    CharRef { name: "fllig;", characters: "\u{fb02}" },
    CharRef { name: "fltns;", characters: "\u{25b1}" },
    CharRef { name: "forkv;", characters: "\u{2ad9}" },
    CharRef { name: "frac12", characters: "\u{bd}" },
    CharRef { name: "frac14", characters: "\u{bc}" },
    CharRef { name: "frac34", characters: "\u{be}" },
    CharRef { name: "frasl;", characters: "\u{2044}" },
    CharRef { name: "frown;", characters: "\u{2322}" },
    CharRef { name: "flat;", characters: "\u{266d}" },
    CharRef { name: "fnof;", characters: "\u{192}" },
    CharRef { name: "fopf;", characters: "\u{1d557}" },
    CharRef { name: "fork;", characters: "\u{22d4}" },
    CharRef { name: "fscr;", characters: "\u{1d4bb}" },
    CharRef { name: "fcy;", characters: "\u{444}" },
    CharRef { name: "ffr;", characters: "\u{1d523}" },
];

static LOWER_G: &[CharRef] = &[
    CharRef { name: "gtreqqless;", characters: "\u{2a8c}" },
    CharRef { name: "gtrapprox;", characters: "\u{2a86}" },
    CharRef { name: "gtreqless;", characters: "\u{22db}" },
    CharRef { name: "gvertneqq;", characters: "\u{2269}\u{fe00}" },
    CharRef { name: "geqslant;", characters: "\u{2a7e}" },
    CharRef { name: "gesdotol;", characters: "\u{2a84}" },
    CharRef { name: "gnapprox;", characters: "\u{2a8a}" },
    CharRef { name: "gesdoto;", characters: "\u{2a82}" },
    CharRef { name: "gtquest;", characters: "\u{2a7c}" },
    CharRef { name: "gtrless;", characters: "\u{2277}" },
    CharRef { name: "gacute;", characters: "\u{1f5}" },
    CharRef { name: "gammad;", characters: "\u{3dd}" },
    CharRef { name: "gbreve;", characters: "\u{11f}" },
    CharRef { name: "gesdot;", characters: "\u{2a80}" },
    CharRef { name: "gesles;", characters: "\u{2a94}" },
    CharRef { name: "gtlPar;", characters: "\u{2995}" },
    CharRef { name: "gtrarr;", characters: "\u{2978}" },
    CharRef { name: "gtrdot;", characters: "\u{22d7}" },
    CharRef { name: "gtrsim;", characters: "\u{2273}" },
    CharRef { name: "gamma;", characters: "\u{3b3}" },
    CharRef { name: "gcirc;", characters: "\u{11d}" },
    CharRef { name: "gescc;", characters: "\u{2aa9}" },
    CharRef { name: "gimel;", characters: "\u{2137}" },
    CharRef { name: "gneqq;", characters: "\u{2269}" },
    CharRef { name: "gnsim;", characters: "\u{22e7}" },
    CharRef { name: "grave;", characters: "`" },
    CharRef { name: "gsime;", characters: "\u{2a8e}" },
    CharRef { name: "gsiml;", characters: "\u{2a90}" },
    CharRef { name: "gtcir;", characters: "\u{2a7a}" },
    CharRef { name: "gtdot;", characters: "\u{22d7}" },
    CharRef { name: "gdot;", characters: "\u{121}" },
    CharRef { name: "geqq;", characters: "\u{2267}" },
    CharRef { name: "gesl;", characters: "\u{22db}\u{fe00}" },
    CharRef { name: "gjcy;", characters: "\u{453}" },
    CharRef { name: "gnap;", characters: "\u{2a8a}" },
    CharRef { name: "gneq;", characters: "\u{2a88}" },
    CharRef { name: "gopf;", characters: "\u{1d558}" },
    CharRef { name: "gscr;", characters: "\u{210a}" },
    CharRef { name: "gsim;", characters: "\u{2273}" },
    CharRef { name: "gtcc;", characters: "\u{2aa7}" },
    CharRef { name: "gvnE;", characters: "\u{2269}\u{fe00}" },
    CharRef { name: "gEl;", characters: "\u{2a8c}" },
    CharRef { name: "gap;", characters: "\u{2a86}" },
    CharRef { name: "gcy;", characters: "\u{433}" },
    CharRef { name: "gel;", characters: "\u{22db}" },
    CharRef { name: "geq;", characters: "\u{2265}" },
    CharRef { name: "ges;", characters: "\u{2a7e}" },
    CharRef { name: "gfr;", characters: "\u{1d524}" },
    CharRef { name: "ggg;", characters: "\u{22d9}" },
    CharRef { name: "glE;", characters: "\u{2a92}" },
    CharRef { name: "gla;", characters: "\u{2aa5}" },
    CharRef { name: "glj;", characters: "\u{2aa4}" },
    CharRef { name: "gnE;", characters: "\u{2269}" },
    CharRef { name: "gne;", characters: "\u{2a88}" },
    CharRef { name: "gE;", characters: "\u{2267}" },
    CharRef { name: "ge;", characters: "\u{2265}" },
    CharRef { name: "gg;", characters: "\u{226b}" },
    CharRef { name: "gl;", characters: "\u{2277}" },
    CharRef { name: "gt;", characters: ">" },
    CharRef { name: "gt", characters: ">" },
];

static LOWER_H: &[CharRef] = &[
    CharRef { name: "hookrightarrow;", characters: "\u{21aa}" },
    CharRef { name: "hookleftarrow;", characters: "\u{21a9}" },
    CharRef { name: "heartsuit;", characters: "\u{2665}" },
    CharRef { name: "hksearow;", characters: "\u{2925}" },
    CharRef { name: "hkswarow;", characters: "\u{2926}" },
    CharRef { name: "harrcir;", characters: "\u{2948}" },
    CharRef { name: "hairsp;", characters: "\u{200a}" },
    CharRef { name: "hamilt;", characters: "\u{210b}" },
    CharRef { name: "hardcy;", characters: "\u{44a}" },
    CharRef { name: "hearts;", characters: "\u{2665}" },
    CharRef { name: "hellip;", characters: "\u{2026}" },
    CharRef { name: "hercon;", characters: "\u{22b9}" },
    CharRef { name: "homtht;", characters: "\u{223b}" },
    CharRef { name: "horbar;", characters: "\u{2015}" },
    CharRef { name: "hslash;", characters: "\u{210f}" },
    CharRef { name: "hstrok;", characters: "\u{127}" },
    CharRef { name: "hybull;", characters: "\u{2043}" },
    CharRef { name: "hyphen;", characters: "\u{2010}" },
    CharRef { name: "harrw;", characters: "\u{21ad}" },
    CharRef { name: "hcirc;", characters: "\u{125}" },
    CharRef { name: "hoarr;", characters: "\u{21ff}" },
    CharRef { name: "hArr;", characters: "\u{21d4}" },
    CharRef { name: "half;", characters: "\u{bd}" },
    CharRef { name: "harr;", characters: "\u{2194}" },
    CharRef { name: "hbar;", characters: "\u{210f}" },
    CharRef { name: "hopf;", characters: "\u{1d559}" },
    CharRef { name: "hscr;", characters: "\u{1d4bd}" },
    CharRef { name: "hfr;", characters: "\u{1d525}" },
];

static LOWER_I: &[CharRef] = &[
    CharRef { name: "imagline;", characters: "\u{2110}" },
    CharRef { name: "imagpart;", characters: "\u{2111}" },
    CharRef { name: "infintie;", characters: "\u{29dd}" },
    CharRef { name: "integers;", characters: "\u{2124}" },
    CharRef { name: "intercal;", characters: "\u{22ba}" },
    CharRef { name: "intlarhk;", characters: "\u{2a17}" },
    CharRef { name: "intprod;", characters: "\u{2a3c}" },
    CharRef { name: "isindot;", characters: "\u{22f5}" },
    CharRef { name: "iacute;", characters: "\u{ed}" },
    CharRef { name: "igrave;", characters: "\u{ec}" },
    CharRef { name: "iiiint;", characters: "\u{2a0c}" },
    CharRef { name: "iinfin;", characters: "\u{29dc}" },
    CharRef { name: "incare;", characters: "\u{2105}" },
    CharRef { name: "inodot;", characters: "\u{131}" },
    CharRef { name: "intcal;", characters: "\u{22ba}" },
    CharRef { name: "iquest;", characters: "\u{bf}" },
    CharRef { name: "isinsv;", characters: "\u{22f3}" },
    CharRef { name: "itilde;", characters: "\u{129}" },
    CharRef { name: "iacute", characters: "\u{ed}" },
    CharRef { name: "icirc;", characters: "\u{ee}" },
    CharRef { name: "iexcl;", characters: "\u{a1}" },
    CharRef { name: "igrave", characters: "\u{ec}" },
    CharRef { name: "iiint;", characters: "\u{222d}" },
    CharRef { name: "iiota;", characters: "\u{2129}" },
    CharRef { name: "ijlig;", characters: "\u{133}" },
    CharRef { name: "imacr;", characters: "\u{12b}" },
    CharRef { name: "image;", characters: "\u{2111}" },
    CharRef { name: "imath;", characters: "\u{131}" },
    CharRef { name: "imped;", characters: "\u{1b5}" },
    CharRef { name: "infin;", characters: "\u{221e}" },
    CharRef { name: "iogon;", characters: "\u{12f}" },
    CharRef { name: "iprod;", characters: "\u{2a3c}" },
    CharRef { name: "iquest", characters: "\u{bf}" },
    CharRef { name: "isinE;", characters: "\u{22f9}" },
    CharRef { name: "isins;", characters: "\u{22f4}" },
    CharRef { name: "isinv;", characters: "\u{2208}" },
    CharRef { name: "iukcy;", characters: "\u{456}" },
    CharRef { name: "icirc", characters: "\u{ee}" },
    CharRef { name: "iecy;", characters: "\u{435}" },
    CharRef { name: "iexcl", characters: "\u{a1}" },
    CharRef { name: "imof;", characters: "\u{22b7}" },
    CharRef { name: "iocy;", characters: "\u{451}" },
    CharRef { name: "iopf;", characters: "\u{1d55a}" },
    CharRef { name: "iota;", characters: "\u{3b9}" },
    CharRef { name: "iscr;", characters: "\u{1d4be}" },
    CharRef { name: "isin;", characters: "\u{2208}" },
    CharRef { name: "iuml;", characters: "\u{ef}" },
    CharRef { name: "icy;", characters: "\u{438}" },
    CharRef { name: "iff;", characters: "\u{21d4}" },
    CharRef { name: "ifr;", characters: "\u{1d526}" },
    CharRef { name: "int;", characters: "\u{222b}" },
    CharRef { name: "iuml", characters: "\u{ef}" },
    CharRef { name: "ic;", characters: "\u{2063}" },
    CharRef { name: "ii;", characters: "\u{2148}" },
    CharRef { name: "in;", characters: "\u{2208}" },
    CharRef { name: "it;", characters: "\u{2062}" },
];

static LOWER_J: &[CharRef] = &[
    CharRef { name: "jsercy;", characters: "\u{458}" },
    CharRef { name: "jcirc;", characters: "\u{135}" },
    CharRef { name: "jmath;", characters: "\u{237}" },
    CharRef { name: "jukcy;", characters: "\u{454}" },
    CharRef { name: "jopf;", characters: "\u{1d55b}" },
    CharRef { name: "jscr;", characters: "\u{1d4bf}" },
    CharRef { name: "jcy;", characters: "\u{439}" },
    CharRef { name: "jfr;", characters: "\u{1d527}" },
];

static LOWER_K: &[CharRef] = &[
    CharRef { name: "kappav;", characters: "\u{3f0}" },
    CharRef { name: "kcedil;", characters: "\u{137}" },
    CharRef { name: "kgreen;", characters: "\u{138}" },
    CharRef { name: "kappa;", characters: "\u{3ba}" },
    CharRef { name: "khcy;", characters: "\u{445}" },
    CharRef { name: "kjcy;", characters: "\u{45c}" },
    CharRef { name: "kopf;", characters: "\u{1d55c}" },
    CharRef { name: "kscr;", characters: "\u{1d4c0}" },
    CharRef { name: "kcy;", characters: "\u{43a}" },
    CharRef { name: "kfr;", characters: "\u{1d528}" },
];

static LOWER_L: &[CharRef] = &[
    CharRef { name: "leftrightsquigarrow;", characters: "\u{21ad}" },
    CharRef { name: "longleftrightarrow;", characters: "\u{27f7}" },
    CharRef { name: "leftrightharpoons;", characters: "\u{21cb}" },
    CharRef { name: "leftharpoondown;", characters: "\u{21bd}" },
    CharRef { name: "leftrightarrows;", characters: "\u{21c6}" },
    CharRef { name: "leftleftarrows;", characters: "\u{21c7}" },
    CharRef { name: "leftrightarrow;", characters: "\u{2194}" },
    CharRef { name: "leftthreetimes;", characters: "\u{22cb}" },
    CharRef { name: "longrightarrow;", characters: "\u{27f6}" },
    CharRef { name: "looparrowright;", characters: "\u{21ac}" },
    CharRef { name: "leftarrowtail;", characters: "\u{21a2}" },
    CharRef { name: "leftharpoonup;", characters: "\u{21bc}" },
    CharRef { name: "longleftarrow;", characters: "\u{27f5}" },
    CharRef { name: "looparrowleft;", characters: "\u{21ab}" },
    CharRef { name: "lessapprox;", characters: "\u{2a85}" },
    CharRef { name: "lesseqqgtr;", characters: "\u{2a8b}" },
    CharRef { name: "lmoustache;", characters: "\u{23b0}" },
    CharRef { name: "longmapsto;", characters: "\u{27fc}" },
    CharRef { name: "leftarrow;", characters: "\u{2190}" },
    CharRef { name: "lesseqgtr;", characters: "\u{22da}" },
    CharRef { name: "lvertneqq;", characters: "\u{2268}\u{fe00}" },
    CharRef { name: "laemptyv;", characters: "\u{29b4}" },
    CharRef { name: "ldrushar;", characters: "\u{294b}" },
    CharRef { name: "leqslant;", characters: "\u{2a7d}" },
    CharRef { name: "lesdotor;", characters: "\u{2a83}" },
    CharRef { name: "llcorner;", characters: "\u{231e}" },
    CharRef { name: "lnapprox;", characters: "\u{2a89}" },
    CharRef { name: "lrcorner;", characters: "\u{231f}" },
    CharRef { name: "lurdshar;", characters: "\u{294a}" },
    CharRef { name: "larrbfs;", characters: "\u{291f}" },
    CharRef { name: "larrsim;", characters: "\u{2973}" },
    CharRef { name: "lbrksld;", characters: "\u{298f}" },
    CharRef { name: "lbrkslu;", characters: "\u{298d}" },
    CharRef { name: "ldrdhar;", characters: "\u{2967}" },
    CharRef { name: "lesdoto;", characters: "\u{2a81}" },
    CharRef { name: "lessdot;", characters: "\u{22d6}" },
    CharRef { name: "lessgtr;", characters: "\u{2276}" },
    CharRef { name: "lesssim;", characters: "\u{2272}" },
    CharRef { name: "lotimes;", characters: "\u{2a34}" },
    CharRef { name: "lozenge;", characters: "\u{25ca}" },
    CharRef { name: "ltquest;", characters: "\u{2a7b}" },
    CharRef { name: "luruhar;", characters: "\u{2966}" },
    CharRef { name: "lAtail;", characters: "\u{291b}" },
    CharRef { name: "lacute;", characters: "\u{13a}" },
    CharRef { name: "lagran;", characters: "\u{2112}" },
    CharRef { name: "lambda;", characters: "\u{3bb}" },
    CharRef { name: "langle;", characters: "\u{27e8}" },
    CharRef { name: "larrfs;", characters: "\u{291d}" },
    CharRef { name: "larrhk;", characters: "\u{21a9}" },
    CharRef { name: "larrlp;", characters: "\u{21ab}" },
    CharRef { name: "larrpl;", characters: "\u{2939}" },
    CharRef { name: "larrtl;", characters: "\u{21a2}" },
    CharRef { name: "latail;", characters: "\u{2919}" },
    CharRef { name: "lbrace;", characters: "{" },
    CharRef { name: "lbrack;", characters: "[" },
    CharRef { name: "lcaron;", characters: "\u{13e}" },
    CharRef { name: "lcedil;", characters: "\u{13c}" },
    CharRef { name: "ldquor;", characters: "\u{201e}" },
    CharRef { name: "lesdot;", characters: "\u{2a7f}" },
    CharRef { name: "lesges;", characters: "\u{2a93}" },
    CharRef { name: "lfisht;", characters: "\u{297c}" },
    CharRef { name: "lfloor;", characters: "\u{230a}" },
    CharRef { name: "lharul;", characters: "\u{296a}" },
    CharRef { name: "llhard;", characters: "\u{296b}" },
    CharRef { name: "lmidot;", characters: "\u{140}" },
    CharRef { name: "lmoust;", characters: "\u{23b0}" },
    CharRef { name: "loplus;", characters: "\u{2a2d}" },
    CharRef { name: "lowast;", characters: "\u{2217}" },
    CharRef { name: "lowbar;", characters: "_" },
    CharRef { name: "lparlt;", characters: "\u{2993}" },
    CharRef { name: "lrhard;", characters: "\u{296d}" },
    CharRef { name: "lsaquo;", characters: "\u{2039}" },
    CharRef { name: "lsquor;", characters: "\u{201a}" },
    CharRef { name: "lstrok;", characters: "\u{142}" },
    CharRef { name: "lthree;", characters: "\u{22cb}" },
    CharRef { name: "ltimes;", characters: "\u{22c9}" },
    CharRef { name: "ltlarr;", characters: "\u{2976}" },
    CharRef { name: "ltrPar;", characters: "\u{2996}" },
    CharRef { name: "lAarr;", characters: "\u{21da}" },
    CharRef { name: "lBarr;", characters: "\u{290e}" },
    CharRef { name: "langd;", characters: "\u{2991}" },
    CharRef { name: "laquo;", characters: "\u{ab}" },
    CharRef { name: "larrb;", characters: "\u{21e4}" },
    CharRef { name: "lates;", characters: "\u{2aad}\u{fe00}" },
    CharRef { name: "lbarr;", characters: "\u{290c}" },
    CharRef { name: "lbbrk;", characters: "\u{2772}" },
    CharRef { name: "lbrke;", characters: "\u{298b}" },
    CharRef { name: "lceil;", characters: "\u{2308}" },
    CharRef { name: "ldquo;", characters: "\u{201c}" },
    CharRef { name: "lescc;", characters: "\u{2aa8}" },
    CharRef { name: "lhard;", characters: "\u{21bd}" },
    CharRef { name: "lharu;", characters: "\u{21bc}" },
    CharRef { name: "lhblk;", characters: "\u{2584}" },
    CharRef { name: "llarr;", characters: "\u{21c7}" },
    CharRef { name: "lltri;", characters: "\u{25fa}" },
    CharRef { name: "lneqq;", characters: "\u{2268}" },
    CharRef { name: "lnsim;", characters: "\u{22e6}" },
    CharRef { name: "loang;", characters: "\u{27ec}" },
    CharRef { name: "loarr;", characters: "\u{21fd}" },
    CharRef { name: "lobrk;", characters: "\u{27e6}" },
    CharRef { name: "lopar;", characters: "\u{2985}" },
    CharRef { name: "lrarr;", characters: "\u{21c6}" },
    CharRef { name: "lrhar;", characters: "\u{21cb}" },
    CharRef { name: "lrtri;", characters: "\u{22bf}" },
    CharRef { name: "lsime;", characters: "\u{2a8d}" },
    CharRef { name: "lsimg;", characters: "\u{2a8f}" },
    CharRef { name: "lsquo;", characters: "\u{2018}" },
    CharRef { name: "ltcir;", characters: "\u{2a79}" },
    CharRef { name: "ltdot;", characters: "\u{22d6}" },
    CharRef { name: "ltrie;", characters: "\u{22b4}" },
    CharRef { name: "ltrif;", characters: "\u{25c2}" },
    CharRef { name: "lArr;", characters: "\u{21d0}" },
    CharRef { name: "lHar;", characters: "\u{2962}" },
    CharRef { name: "lang;", characters: "\u{27e8}" },
    CharRef { name: "laquo", characters: "\u{ab}" },
    CharRef { name: "larr;", characters: "\u{2190}" },
    CharRef { name: "late;", characters: "\u{2aad}" },
    CharRef { name: "lcub;", characters: "{" },
    CharRef { name: "ldca;", characters: "\u{2936}" },
    CharRef { name: "ldsh;", characters: "\u{21b2}" },
    CharRef { name: "leqq;", characters: "\u{2266}" },
    CharRef { name: "lesg;", characters: "\u{22da}\u{fe00}" },
    CharRef { name: "ljcy;", characters: "\u{459}" },
    CharRef { name: "lnap;", characters: "\u{2a89}" },
    CharRef { name: "lneq;", characters: "\u{2a87}" },
    CharRef { name: "lopf;", characters: "\u{1d55d}" },
    CharRef { name: "lozf;", characters: "\u{29eb}" },
    CharRef { name: "lpar;", characters: "(" },
    CharRef { name: "lscr;", characters: "\u{1d4c1}" },
    CharRef { name: "lsim;", characters: "\u{2272}" },
    CharRef { name: "lsqb;", characters: "[" },
    CharRef { name: "ltcc;", characters: "\u{2aa6}" },
    CharRef { name: "ltri;", characters: "\u{25c3}" },
    CharRef { name: "lvnE;", characters: "\u{2268}\u{fe00}" },
    CharRef { name: "lEg;", characters: "\u{2a8b}" },
    CharRef { name: "lap;", characters: "\u{2a85}" },
    CharRef { name: "lat;", characters: "\u{2aab}" },
    CharRef { name: "lcy;", characters: "\u{43b}" },
    CharRef { name: "leg;", characters: "\u{22da}" },
    CharRef { name: "leq;", characters: "\u{2264}" },
    CharRef { name: "les;", characters: "\u{2a7d}" },
    CharRef { name: "lfr;", characters: "\u{1d529}" },
    CharRef { name: "lgE;", characters: "\u{2a91}" },
    CharRef { name: "lnE;", characters: "\u{2268}" },
    CharRef { name: "lne;", characters: "\u{2a87}" },
    CharRef { name: "loz;", characters: "\u{25ca}" },
    CharRef { name: "lrm;", characters: "\u{200e}" },
    CharRef { name: "lsh;", characters: "\u{21b0}" },
    CharRef { name: "lE;", characters: "\u{2266}" },
    CharRef { name: "le;", characters: "\u{2264}" },
    CharRef { name: "lg;", characters: "\u{2276}" },
    CharRef { name: "ll;", characters: "\u{226a}" },
    CharRef { name: "lt;", characters: "<" },
    CharRef { name: "lt", characters: "<" },
];

static LOWER_M: &[CharRef] = &[
    CharRef { name: "measuredangle;", characters: "\u{2221}" },
    CharRef { name: "mapstodown;", characters: "\u{21a7}" },
    CharRef { name: "mapstoleft;", characters: "\u{21a4}" },
    CharRef { name: "mapstoup;", characters: "\u{21a5}" },
    CharRef { name: "multimap;", characters: "\u{22b8}" },
    CharRef { name: "maltese;", characters: "\u{2720}" },
    CharRef { name: "minusdu;", characters: "\u{2a2a}" },
    CharRef { name: "mapsto;", characters: "\u{21a6}" },
    CharRef { name: "marker;", characters: "\u{25ae}" },
    CharRef { name: "mcomma;", characters: "\u{2a29}" },
    CharRef { name: "midast;", characters: "*" },
    CharRef { name: "midcir;", characters: "\u{2af0}" },
    CharRef { name: "middot;", characters: "\u{b7}" },
    CharRef { name: "minusb;", characters: "\u{229f}" },
    CharRef { name: "minusd;", characters: "\u{2238}" },
    CharRef { name: "mnplus;", characters: "\u{2213}" },
    CharRef { name: "models;", characters: "\u{22a7}" },
    CharRef { name: "mstpos;", characters: "\u{223e}" },
    CharRef { name: "mDDot;", characters: "\u{223a}" },
    CharRef { name: "mdash;", characters: "\u{2014}" },
    CharRef { name: "micro;", characters: "\u{b5}" },
    CharRef { name: "middot", characters: "\u{b7}" },
    CharRef { name: "minus;", characters: "\u{2212}" },
    CharRef { name: "mumap;", characters: "\u{22b8}" },
    CharRef { name: "macr;", characters: "\u{af}" },
    CharRef { name: "male;", characters: "\u{2642}" },
    CharRef { name: "malt;", characters: "\u{2720}" },
    CharRef { name: "micro", characters: "\u{b5}" },
    CharRef { name: "mlcp;", characters: "\u{2adb}" },
    CharRef { name: "mldr;", characters: "\u{2026}" },
    CharRef { name: "mopf;", characters: "\u{1d55e}" },
    CharRef { name: "mscr;", characters: "\u{1d4c2}" },
    CharRef { name: "macr", characters: "\u{af}" },
    CharRef { name: "map;", characters: "\u{21a6}" },
    CharRef { name: "mcy;", characters: "\u{43c}" },
    CharRef { name: "mfr;", characters: "\u{1d52a}" },
    CharRef { name: "mho;", characters: "\u{2127}" },
    CharRef { name: "mid;", characters: "\u{2223}" },
    CharRef { name: "mp;", characters: "\u{2213}" },
    CharRef { name: "mu;", characters: "\u{3bc}" },
];

static LOWER_N: &[CharRef] = &[
    CharRef { name: "ntrianglerighteq;", characters: "\u{22ed}" },
    CharRef { name: "nLeftrightarrow;", characters: "\u{21ce}" },
    CharRef { name: "nleftrightarrow;", characters: "\u{21ae}" },
    CharRef { name: "ntrianglelefteq;", characters: "\u{22ec}" },
    CharRef { name: "nshortparallel;", characters: "\u{2226}" },
    CharRef { name: "ntriangleright;", characters: "\u{22eb}" },
    CharRef { name: "ntriangleleft;", characters: "\u{22ea}" },
    CharRef { name: "nRightarrow;", characters: "\u{21cf}" },
    CharRef { name: "nrightarrow;", characters: "\u{219b}" },
    CharRef { name: "nLeftarrow;", characters: "\u{21cd}" },
    CharRef { name: "nleftarrow;", characters: "\u{219a}" },
    CharRef { name: "nsubseteqq;", characters: "\u{2ac5}\u{338}" },
    CharRef { name: "nsupseteqq;", characters: "\u{2ac6}\u{338}" },
    CharRef { name: "ngeqslant;", characters: "\u{2a7e}\u{338}" },
    CharRef { name: "nleqslant;", characters: "\u{2a7d}\u{338}" },
    CharRef { name: "nparallel;", characters: "\u{2226}" },
    CharRef { name: "nshortmid;", characters: "\u{2224}" },
    CharRef { name: "nsubseteq;", characters: "\u{2288}" },
    CharRef { name: "nsupseteq;", characters: "\u{2289}" },
    CharRef { name: "naturals;", characters: "\u{2115}" },
    CharRef { name: "ncongdot;", characters: "\u{2a6d}\u{338}" },
    CharRef { name: "notindot;", characters: "\u{22f5}\u{338}" },
    CharRef { name: "napprox;", characters: "\u{2249}" },
    CharRef { name: "natural;", characters: "\u{266e}" },
    CharRef { name: "nearrow;", characters: "\u{2197}" },
    CharRef { name: "nexists;", characters: "\u{2204}" },
    CharRef { name: "notinva;", characters: "\u{2209}" },
    CharRef { name: "notinvb;", characters: "\u{22f7}" },
    CharRef { name: "notinvc;", characters: "\u{22f6}" },
    CharRef { name: "notniva;", characters: "\u{220c}" },
    CharRef { name: "notnivb;", characters: "\u{22fe}" },
    CharRef { name: "notnivc;", characters: "\u{22fd}" },
    CharRef { name: "npolint;", characters: "\u{2a14}" },
    CharRef { name: "npreceq;", characters: "\u{2aaf}\u{338}" },
    CharRef { name: "nsqsube;", characters: "\u{22e2}" },
    CharRef { name: "nsqsupe;", characters: "\u{22e3}" },
    CharRef { name: "nsubset;", characters: "\u{2282}\u{20d2}" },
    CharRef { name: "nsucceq;", characters: "\u{2ab0}\u{338}" },
    CharRef { name: "nsupset;", characters: "\u{2283}\u{20d2}" },
    CharRef { name: "nvinfin;", characters: "\u{29de}" },
    CharRef { name: "nvltrie;", characters: "\u{22b4}\u{20d2}" },
    CharRef { name: "nvrtrie;", characters: "\u{22b5}\u{20d2}" },
    CharRef { name: "nwarrow;", characters: "\u{2196}" },
    CharRef { name: "nVDash;", characters: "\u{22af}" },
    CharRef { name: "nVdash;", characters: "\u{22ae}" },
    CharRef { name: "nacute;", characters: "\u{144}" },
    CharRef { name: "nbumpe;", characters: "\u{224f}\u{338}" },
    CharRef { name: "ncaron;", characters: "\u{148}" },
    CharRef { name: "ncedil;", characters: "\u{146}" },
    CharRef { name: "nearhk;", characters: "\u{2924}" },
    CharRef { name: "nequiv;", characters: "\u{2262}" },
    CharRef { name: "nesear;", characters: "\u{2928}" },
    CharRef { name: "nexist;", characters: "\u{2204}" },
    CharRef { name: "nltrie;", characters: "\u{22ec}" },
    CharRef { name: "notinE;", characters: "\u{22f9}\u{338}" },
    CharRef { name: "nparsl;", characters: "\u{2afd}\u{20e5}" },
    CharRef { name: "nprcue;", characters: "\u{22e0}" },
    CharRef { name: "nrarrc;", characters: "\u{2933}\u{338}" },
    CharRef { name: "nrarrw;", characters: "\u{219d}\u{338}" },
    CharRef { name: "nrtrie;", characters: "\u{22ed}" },
    CharRef { name: "nsccue;", characters: "\u{22e1}" },
    CharRef { name: "nsimeq;", characters: "\u{2244}" },
    CharRef { name: "ntilde;", characters: "\u{f1}" },
    CharRef { name: "numero;", characters: "\u{2116}" },
    CharRef { name: "nvDash;", characters: "\u{22ad}" },
    CharRef { name: "nvHarr;", characters: "\u{2904}" },
    CharRef { name: "nvdash;", characters: "\u{22ac}" },
    CharRef { name: "nvlArr;", characters: "\u{2902}" },
    CharRef { name: "nvrArr;", characters: "\u{2903}" },
    CharRef { name: "nwarhk;", characters: "\u{2923}" },
    CharRef { name: "nwnear;", characters: "\u{2927}" },
    CharRef { name: "nabla;", characters: "\u{2207}" },
    CharRef { name: "napid;", characters: "\u{224b}\u{338}" },
    CharRef { name: "napos;", characters: "\u{149}" },
    CharRef { name: "natur;", characters: "\u{266e}" },
    CharRef { name: "nbump;", characters: "\u{224e}\u{338}" },
    CharRef { name: "ncong;", characters: "\u{2247}" },
    CharRef { name: "ndash;", characters: "\u{2013}" },
    CharRef { name: "neArr;", characters: "\u{21d7}" },
    CharRef { name: "nearr;", characters: "\u{2197}" },
    CharRef { name: "nedot;", characters: "\u{2250}\u{338}" },
    CharRef { name: "nesim;", characters: "\u{2242}\u{338}" },
    CharRef { name: "ngeqq;", characters: "\u{2267}\u{338}" },
    CharRef { name: "ngsim;", characters: "\u{2275}" },
    CharRef { name: "nhArr;", characters: "\u{21ce}" },
    CharRef { name: "nharr;", characters: "\u{21ae}" },
    CharRef { name: "nhpar;", characters: "\u{2af2}" },
    CharRef { name: "nlArr;", characters: "\u{21cd}" },
    CharRef { name: "nlarr;", characters: "\u{219a}" },
    CharRef { name: "nleqq;", characters: "\u{2266}\u{338}" },
    CharRef { name: "nless;", characters: "\u{226e}" },
    CharRef { name: "nlsim;", characters: "\u{2274}" },
    CharRef { name: "nltri;", characters: "\u{22ea}" },
    CharRef { name: "notin;", characters: "\u{2209}" },
    CharRef { name: "notni;", characters: "\u{220c}" },
    CharRef { name: "npart;", characters: "\u{2202}\u{338}" },
    CharRef { name: "nprec;", characters: "\u{2280}" },
    CharRef { name: "nrArr;", characters: "\u{21cf}" },
    CharRef { name: "nrarr;", characters: "\u{219b}" },
    CharRef { name: "nrtri;", characters: "\u{22eb}" },
    CharRef { name: "nsime;", characters: "\u{2244}" },
    CharRef { name: "nsmid;", characters: "\u{2224}" },
    CharRef { name: "nspar;", characters: "\u{2226}" },
    CharRef { name: "nsubE;", characters: "\u{2ac5}\u{338}" },
    CharRef { name: "nsube;", characters: "\u{2288}" },
    CharRef { name: "nsucc;", characters: "\u{2281}" },
    CharRef { name: "nsupE;", characters: "\u{2ac6}\u{338}" },
    CharRef { name: "nsupe;", characters: "\u{2289}" },
    CharRef { name: "ntilde", characters: "\u{f1}" },
    CharRef { name: "numsp;", characters: "\u{2007}" },
    CharRef { name: "nvsim;", characters: "\u{223c}\u{20d2}" },
    CharRef { name: "nwArr;", characters: "\u{21d6}" },
    CharRef { name: "nwarr;", characters: "\u{2196}" },
    CharRef { name: "nGtv;", characters: "\u{226b}\u{338}" },
    CharRef { name: "nLtv;", characters: "\u{226a}\u{338}" },
    CharRef { name: "nang;", characters: "\u{2220}\u{20d2}" },
    CharRef { name: "napE;", characters: "\u{2a70}\u{338}" },
    CharRef { name: "nbsp;", characters: "\u{a0}" },
    CharRef { name: "ncap;", characters: "\u{2a43}" },
    CharRef { name: "ncup;", characters: "\u{2a42}" },
    CharRef { name: "ngeq;", characters: "\u{2271}" },
    CharRef { name: "nges;", characters: "\u{2a7e}\u{338}" },
    CharRef { name: "ngtr;", characters: "\u{226f}" },
    CharRef { name: "nisd;", characters: "\u{22fa}" },
    CharRef { name: "njcy;", characters: "\u{45a}" },
    CharRef { name: "nldr;", characters: "\u{2025}" },
    CharRef { name: "nleq;", characters: "\u{2270}" },
    CharRef { name: "nles;", characters: "\u{2a7d}\u{338}" },
    CharRef { name: "nmid;", characters: "\u{2224}" },
    CharRef { name: "nopf;", characters: "\u{1d55f}" },
    CharRef { name: "npar;", characters: "\u{2226}" },
    CharRef { name: "npre;", characters: "\u{2aaf}\u{338}" },
    CharRef { name: "nsce;", characters: "\u{2ab0}\u{338}" },
    CharRef { name: "nscr;", characters: "\u{1d4c3}" },
    CharRef { name: "nsim;", characters: "\u{2241}" },
    CharRef { name: "nsub;", characters: "\u{2284}" },
    CharRef { name: "nsup;", characters: "\u{2285}" },
    CharRef { name: "ntgl;", characters: "\u{2279}" },
    CharRef { name: "ntlg;", characters: "\u{2278}" },
    CharRef { name: "nvap;", characters: "\u{224d}\u{20d2}" },
    CharRef { name: "nvge;", characters: "\u{2265}\u{20d2}" },
    CharRef { name: "nvgt;", characters: ">\u{20d2}" },
    CharRef { name: "nvle;", characters: "\u{2264}\u{20d2}" },
    CharRef { name: "nvlt;", characters: "<\u{20d2}" },
    CharRef { name: "nGg;", characters: "\u{22d9}\u{338}" },
    CharRef { name: "nGt;", characters: "\u{226b}\u{20d2}" },
    CharRef { name: "nLl;", characters: "\u{22d8}\u{338}" },
    CharRef { name: "nLt;", characters: "\u{226a}\u{20d2}" },
    CharRef { name: "nap;", characters: "\u{2249}" },
    CharRef { name: "nbsp", characters: "\u{a0}" },
    CharRef { name: "ncy;", characters: "\u{43d}" },
    CharRef { name: "nfr;", characters: "\u{1d52b}" },
    CharRef { name: "ngE;", characters: "\u{2267}\u{338}" },
    CharRef { name: "nge;", characters: "\u{2271}" },
    CharRef { name: "ngt;", characters: "\u{226f}" },
    CharRef { name: "nis;", characters: "\u{22fc}" },
    CharRef { name: "niv;", characters: "\u{220b}" },
    CharRef { name: "nlE;", characters: "\u{2266}\u{338}" },
    CharRef { name: "nle;", characters: "\u{2270}" },
    CharRef { name: "nlt;", characters: "\u{226e}" },
    CharRef { name: "not;", characters: "\u{ac}" },
    CharRef { name: "npr;", characters: "\u{2280}" },
    CharRef { name: "nsc;", characters: "\u{2281}" },
    CharRef { name: "num;", characters: "#" },
    CharRef { name: "ne;", characters: "\u{2260}" },
    CharRef { name: "ni;", characters: "\u{220b}" },
    CharRef { name: "not", characters: "\u{ac}" },
    CharRef { name: "nu;", characters: "\u{3bd}" },
];

static LOWER_O: &[CharRef] = &[
    CharRef { name: "otimesas;", characters: "\u{2a36}" },
    CharRef { name: "olcross;", characters: "\u{29bb}" },
    CharRef { name: "omicron;", characters: "\u{3bf}" },
    CharRef { name: "orderof;", characters: "\u{2134}" },
    CharRef { name: "orslope;", characters: "\u{2a57}" },
    CharRef { name: "oacute;", characters: "\u{f3}" },
    CharRef { name: "odblac;", characters: "\u{151}" },
    CharRef { name: "odsold;", characters: "\u{29bc}" },
    CharRef { name: "ograve;", characters: "\u{f2}" },
    CharRef { name: "ominus;", characters: "\u{2296}" },
    CharRef { name: "origof;", characters: "\u{22b6}" },
    CharRef { name: "oslash;", characters: "\u{f8}" },
    CharRef { name: "otilde;", characters: "\u{f5}" },
    CharRef { name: "otimes;", characters: "\u{2297}" },
    CharRef { name: "oacute", characters: "\u{f3}" },
    CharRef { name: "ocirc;", characters: "\u{f4}" },
    CharRef { name: "odash;", characters: "\u{229d}" },
    CharRef { name: "oelig;", characters: "\u{153}" },
    CharRef { name: "ofcir;", characters: "\u{29bf}" },
    CharRef { name: "ograve", characters: "\u{f2}" },
    CharRef { name: "ohbar;", characters: "\u{29b5}" },
    CharRef { name: "olarr;", characters: "\u{21ba}" },
    CharRef { name: "olcir;", characters: "\u{29be}" },
    CharRef { name: "oline;", characters: "\u{203e}" },
    CharRef { name: "omacr;", characters: "\u{14d}" },
    CharRef { name: "omega;", characters: "\u{3c9}" },
    CharRef { name: "operp;", characters: "\u{29b9}" },
    CharRef { name: "oplus;", characters: "\u{2295}" },
    CharRef { name: "orarr;", characters: "\u{21bb}" },
    CharRef { name: "order;", characters: "\u{2134}" },
    CharRef { name: "oslash", characters: "\u{f8}" },
    CharRef { name: "otilde", characters: "\u{f5}" },
    CharRef { name: "ovbar;", characters: "\u{233d}" },
    CharRef { name: "oast;", characters: "\u{229b}" },
    CharRef { name: "ocir;", characters: "\u{229a}" },
    CharRef { name: "ocirc", characters: "\u{f4}" },
    CharRef { name: "odiv;", characters: "\u{2a38}" },
    CharRef { name: "odot;", characters: "\u{2299}" },
    CharRef { name: "ogon;", characters: "\u{2db}" },
    CharRef { name: "oint;", characters: "\u{222e}" },
    CharRef { name: "omid;", characters: "\u{29b6}" },
    CharRef { name: "oopf;", characters: "\u{1d560}" },
    CharRef { name: "opar;", characters: "\u{29b7}" },
    CharRef { name: "ordf;", characters: "\u{aa}" },
    CharRef { name: "ordm;", characters: "\u{ba}" },
    CharRef { name: "oror;", characters: "\u{2a56}" },
    CharRef { name: "oscr;", characters: "\u{2134}" },
    CharRef { name: "osol;", characters: "\u{2298}" },
    CharRef { name: "ouml;", characters: "\u{f6}" },
    CharRef { name: "ocy;", characters: "\u{43e}" },
    CharRef { name: "ofr;", characters: "\u{1d52c}" },
    CharRef { name: "ogt;", characters: "\u{29c1}" },
    CharRef { name: "ohm;", characters: "\u{3a9}" },
    CharRef { name: "olt;", characters: "\u{29c0}" },
    CharRef { name: "ord;", characters: "\u{2a5d}" },
    CharRef { name: "ordf", characters: "\u{aa}" },
    CharRef { name: "ordm", characters: "\u{ba}" },
    CharRef { name: "orv;", characters: "\u{2a5b}" },
    CharRef { name: "ouml", characters: "\u{f6}" },
    CharRef { name: "oS;", characters: "\u{24c8}" },
    CharRef { name: "or;", characters: "\u{2228}" },
];

static LOWER_P: &[CharRef] = &[
    CharRef { name: "preccurlyeq;", characters: "\u{227c}" },
    CharRef { name: "precnapprox;", characters: "\u{2ab9}" },
    CharRef { name: "precapprox;", characters: "\u{2ab7}" },
    CharRef { name: "pitchfork;", characters: "\u{22d4}" },
    CharRef { name: "parallel;", characters: "\u{2225}" },
    CharRef { name: "plusacir;", characters: "\u{2a23}" },
    CharRef { name: "pointint;", characters: "\u{2a15}" },
    CharRef { name: "precneqq;", characters: "\u{2ab5}" },
    CharRef { name: "precnsim;", characters: "\u{22e8}" },
    CharRef { name: "profalar;", characters: "\u{232e}" },
    CharRef { name: "profline;", characters: "\u{2312}" },
    CharRef { name: "profsurf;", characters: "\u{2313}" },
    CharRef { name: "pertenk;", characters: "\u{2031}" },
    CharRef { name: "planckh;", characters: "\u{210e}" },
    CharRef { name: "pluscir;", characters: "\u{2a22}" },
    CharRef { name: "plussim;", characters: "\u{2a26}" },
    CharRef { name: "plustwo;", characters: "\u{2a27}" },
    CharRef { name: "precsim;", characters: "\u{227e}" },
    CharRef { name: "parsim;", characters: "\u{2af3}" },
    CharRef { name: "percnt;", characters: "%" },
    CharRef { name: "period;", characters: "." },
    CharRef { name: "permil;", characters: "\u{2030}" },
    CharRef { name: "phmmat;", characters: "\u{2133}" },
    CharRef { name: "planck;", characters: "\u{210f}" },
    CharRef { name: "plankv;", characters: "\u{210f}" },
    CharRef { name: "plusdo;", characters: "\u{2214}" },
    CharRef { name: "plusdu;", characters: "\u{2a25}" },
    CharRef { name: "plusmn;", characters: "\u{b1}" },
    CharRef { name: "preceq;", characters: "\u{2aaf}" },
    CharRef { name: "primes;", characters: "\u{2119}" },
    CharRef { name: "prnsim;", characters: "\u{22e8}" },
    CharRef { name: "propto;", characters: "\u{221d}" },
    CharRef { name: "prurel;", characters: "\u{22b0}" },
    CharRef { name: "puncsp;", characters: "\u{2008}" },
    CharRef { name: "parsl;", characters: "\u{2afd}" },
    CharRef { name: "phone;", characters: "\u{260e}" },
    CharRef { name: "plusb;", characters: "\u{229e}" },
    CharRef { name: "pluse;", characters: "\u{2a72}" },
    CharRef { name: "plusmn", characters: "\u{b1}" },
    CharRef { name: "pound;", characters: "\u{a3}" },
    CharRef { name: "prcue;", characters: "\u{227c}" },
    CharRef { name: "prime;", characters: "\u{2032}" },
    CharRef { name: "prnap;", characters: "\u{2ab9}" },
    CharRef { name: "prsim;", characters: "\u{227e}" },
    CharRef { name: "para;", characters: "\u{b6}" },
    CharRef { name: "part;", characters: "\u{2202}" },
    CharRef { name: "perp;", characters: "\u{22a5}" },
    CharRef { name: "phiv;", characters: "\u{3d5}" },
    CharRef { name: "plus;", characters: "+" },
    CharRef { name: "popf;", characters: "\u{1d561}" },
    CharRef { name: "pound", characters: "\u{a3}" },
    CharRef { name: "prap;", characters: "\u{2ab7}" },
    CharRef { name: "prec;", characters: "\u{227a}" },
    CharRef { name: "prnE;", characters: "\u{2ab5}" },
    CharRef { name: "prod;", characters: "\u{220f}" },
    CharRef { name: "prop;", characters: "\u{221d}" },
    CharRef { name: "pscr;", characters: "\u{1d4c5}" },
    CharRef { name: "par;", characters: "\u{2225}" },
    CharRef { name: "para", characters: "\u{b6}" },
    CharRef { name: "pcy;", characters: "\u{43f}" },
    CharRef { name: "pfr;", characters: "\u{1d52d}" },
    CharRef { name: "phi;", characters: "\u{3c6}" },
    CharRef { name: "piv;", characters: "\u{3d6}" },
    CharRef { name: "prE;", characters: "\u{2ab3}" },
    CharRef { name: "pre;", characters: "\u{2aaf}" },
    CharRef { name: "psi;", characters: "\u{3c8}" },
    CharRef { name: "pi;", characters: "\u{3c0}" },
    CharRef { name: "pm;", characters: "\u{b1}" },
    CharRef { name: "pr;", characters: "\u{227a}" },
];

static LOWER_Q: &[CharRef] = &[
    CharRef { name: "quaternions;", characters: "\u{210d}" },
    CharRef { name: "quatint;", characters: "\u{2a16}" },
    CharRef { name: "questeq;", characters: "\u{225f}" },
    CharRef { name: "qprime;", characters: "\u{2057}" },
    CharRef { name: "quest;", characters: "?" },
    CharRef { name: "qint;", characters: "\u{2a0c}" },
    CharRef { name: "qopf;", characters: "\u{1d562}" },
    CharRef { name: "qscr;", characters: "\u{1d4c6}" },
    CharRef { name: "quot;", characters: "\"" },
    CharRef { name: "qfr;", characters: "\u{1d52e}" },
    CharRef { name: "quot", characters: "\"" },
];

static LOWER_R: &[CharRef] = &[
    CharRef { name: "rightleftharpoons;", characters: "\u{21cc}" },
    CharRef { name: "rightharpoondown;", characters: "\u{21c1}" },
    CharRef { name: "rightrightarrows;", characters: "\u{21c9}" },
    CharRef { name: "rightleftarrows;", characters: "\u{21c4}" },
    CharRef { name: "rightsquigarrow;", characters: "\u{219d}" },
    CharRef { name: "rightthreetimes;", characters: "\u{22cc}" },
    CharRef { name: "rightarrowtail;", characters: "\u{21a3}" },
    CharRef { name: "rightharpoonup;", characters: "\u{21c0}" },
    CharRef { name: "risingdotseq;", characters: "\u{2253}" },
    CharRef { name: "rightarrow;", characters: "\u{2192}" },
    CharRef { name: "rmoustache;", characters: "\u{23b1}" },
    CharRef { name: "rationals;", characters: "\u{211a}" },
    CharRef { name: "raemptyv;", characters: "\u{29b3}" },
    CharRef { name: "realpart;", characters: "\u{211c}" },
    CharRef { name: "rppolint;", characters: "\u{2a12}" },
    CharRef { name: "rtriltri;", characters: "\u{29ce}" },
    CharRef { name: "rarrbfs;", characters: "\u{2920}" },
    CharRef { name: "rarrsim;", characters: "\u{2974}" },
    CharRef { name: "rbrksld;", characters: "\u{298e}" },
    CharRef { name: "rbrkslu;", characters: "\u{2990}" },
    CharRef { name: "rdldhar;", characters: "\u{2969}" },
    CharRef { name: "realine;", characters: "\u{211b}" },
    CharRef { name: "rotimes;", characters: "\u{2a35}" },
    CharRef { name: "ruluhar;", characters: "\u{2968}" },
    CharRef { name: "rAtail;", characters: "\u{291c}" },
    CharRef { name: "racute;", characters: "\u{155}" },
    CharRef { name: "rangle;", characters: "\u{27e9}" },
    CharRef { name: "rarrap;", characters: "\u{2975}" },
    CharRef { name: "rarrfs;", characters: "\u{291e}" },
    CharRef { name: "rarrhk;", characters: "\u{21aa}" },
    CharRef { name: "rarrlp;", characters: "\u{21ac}" },
    CharRef { name: "rarrpl;", characters: "\u{2945}" },
    CharRef { name: "rarrtl;", characters: "\u{21a3}" },
    CharRef { name: "ratail;", characters: "\u{291a}" },
    CharRef { name: "rbrace;", characters: "}" },
    CharRef { name: "rbrack;", characters: "]" },
    CharRef { name: "rcaron;", characters: "\u{159}" },
    CharRef { name: "rcedil;", characters: "\u{157}" },
    CharRef { name: "rdquor;", characters: "\u{201d}" },
    CharRef { name: "rfisht;", characters: "\u{297d}" },
    CharRef { name: "rfloor;", characters: "\u{230b}" },
    CharRef { name: "rharul;", characters: "\u{296c}" },
    CharRef { name: "rmoust;", characters: "\u{23b1}" },
    CharRef { name: "roplus;", characters: "\u{2a2e}" },
    CharRef { name: "rpargt;", characters: "\u{2994}" },
    CharRef { name: "rsaquo;", characters: "\u{203a}" },
    CharRef { name: "rsquor;", characters: "\u{2019}" },
    CharRef { name: "rthree;", characters: "\u{22cc}" },
    CharRef { name: "rtimes;", characters: "\u{22ca}" },
    CharRef { name: "rAarr;", characters: "\u{21db}" },
    CharRef { name: "rBarr;", characters: "\u{290f}" },
    CharRef { name: "radic;", characters: "\u{221a}" },
    CharRef { name: "rangd;", characters: "\u{2992}" },
    CharRef { name: "range;", characters: "\u{29a5}" },
    CharRef { name: "raquo;", characters: "\u{bb}" },
    CharRef { name: "rarrb;", characters: "\u{21e5}" },
    CharRef { name: "rarrc;", characters: "\u{2933}" },
    CharRef { name: "rarrw;", characters: "\u{219d}" },
    CharRef { name: "ratio;", characters: "\u{2236}" },
    CharRef { name: "rbarr;", characters: "\u{290d}" },
    CharRef { name: "rbbrk;", characters: "\u{2773}" },
    CharRef { name: "rbrke;", characters: "\u{298c}" },
    CharRef { name: "rceil;", characters: "\u{2309}" },
    CharRef { name: "rdquo;", characters: "\u{201d}" },
    CharRef { name: "reals;", characters: "\u{211d}" },
    CharRef { name: "rhard;", characters: "\u{21c1}" },
    CharRef { name: "rharu;", characters: "\u{21c0}" },
    CharRef { name: "rlarr;", characters: "\u{21c4}" },
    CharRef { name: "rlhar;", characters: "\u{21cc}" },
    CharRef { name: "rnmid;", characters: "\u{2aee}" },
    CharRef { name: "roang;", characters: "\u{27ed}" },
    CharRef { name: "roarr;", characters: "\u{21fe}" },
    CharRef { name: "robrk;", characters: "\u{27e7}" },
    CharRef { name: "ropar;", characters: "\u{2986}" },
    CharRef { name: "rrarr;", characters: "\u{21c9}" },
    CharRef { name: "rsquo;", characters: "\u{2019}" },
    CharRef { name: "rtrie;", characters: "\u{22b5}" },
    CharRef { name: "rtrif;", characters: "\u{25b8}" },
    CharRef { name: "rArr;", characters: "\u{21d2}" },
    CharRef { name: "rHar;", characters: "\u{2964}" },
    CharRef { name: "race;", characters: "\u{223d}\u{331}" },
    CharRef { name: "rang;", characters: "\u{27e9}" },
    CharRef { name: "raquo", characters: "\u{bb}" },
    CharRef { name: "rarr;", characters: "\u{2192}" },
    CharRef { name: "rcub;", characters: "}" },
    CharRef { name: "rdca;", characters: "\u{2937}" },
    CharRef { name: "rdsh;", characters: "\u{21b3}" },
    CharRef { name: "real;", characters: "\u{211c}" },
    CharRef { name: "rect;", characters: "\u{25ad}" },
    CharRef { name: "rhov;", characters: "\u{3f1}" },
    CharRef { name: "ring;", characters: "\u{2da}" },
    CharRef { name: "ropf;", characters: "\u{1d563}" },
    CharRef { name: "rpar;", characters: ")" },
    CharRef { name: "rscr;", characters: "\u{1d4c7}" },
    CharRef { name: "rsqb;", characters: "]" },
    CharRef { name: "rtri;", characters: "\u{25b9}" },
    CharRef { name: "rcy;", characters: "\u{440}" },
    CharRef { name: "reg;", characters: "\u{ae}" },
    CharRef { name: "rfr;", characters: "\u{1d52f}" },
    CharRef { name: "rho;", characters: "\u{3c1}" },
    CharRef { name: "rlm;", characters: "\u{200f}" },
    CharRef { name: "rsh;", characters: "\u{21b1}" },
    CharRef { name: "reg", characters: "\u{ae}" },
    CharRef { name: "rx;", characters: "\u{211e}" },
];

static LOWER_S: &[CharRef] = &[
    CharRef { name: "straightepsilon;", characters: "\u{3f5}" },
    CharRef { name: "shortparallel;", characters: "\u{2225}" },
    CharRef { name: "smallsetminus;", characters: "\u{2216}" },
    CharRef { name: "straightphi;", characters: "\u{3d5}" },
    CharRef { name: "succcurlyeq;", characters: "\u{227d}" },
    CharRef { name: "succnapprox;", characters: "\u{2aba}" },
    CharRef { name: "sqsubseteq;", characters: "\u{2291}" },
    CharRef { name: "sqsupseteq;", characters: "\u{2292}" },
    CharRef { name: "subsetneqq;", characters: "\u{2acb}" },
    CharRef { name: "succapprox;", characters: "\u{2ab8}" },
    CharRef { name: "supsetneqq;", characters: "\u{2acc}" },
    CharRef { name: "spadesuit;", characters: "\u{2660}" },
    CharRef { name: "subseteqq;", characters: "\u{2ac5}" },
    CharRef { name: "subsetneq;", characters: "\u{228a}" },
    CharRef { name: "supseteqq;", characters: "\u{2ac6}" },
    CharRef { name: "supsetneq;", characters: "\u{228b}" },
    CharRef { name: "scpolint;", characters: "\u{2a13}" },
    CharRef { name: "setminus;", characters: "\u{2216}" },
    CharRef { name: "shortmid;", characters: "\u{2223}" },
    CharRef { name: "smeparsl;", characters: "\u{29e4}" },
    CharRef { name: "sqsubset;", characters: "\u{228f}" },
    CharRef { name: "sqsupset;", characters: "\u{2290}" },
    CharRef { name: "subseteq;", characters: "\u{2286}" },
    CharRef { name: "succneqq;", characters: "\u{2ab6}" },
    CharRef { name: "succnsim;", characters: "\u{22e9}" },
    CharRef { name: "supseteq;", characters: "\u{2287}" },
    CharRef { name: "searrow;", characters: "\u{2198}" },
    CharRef { name: "simplus;", characters: "\u{2a24}" },
    CharRef { name: "simrarr;", characters: "\u{2972}" },
    CharRef { name: "subedot;", characters: "\u{2ac3}" },
    CharRef { name: "submult;", characters: "\u{2ac1}" },
    CharRef { name: "subplus;", characters: "\u{2abf}" },
    CharRef { name: "subrarr;", characters: "\u{2979}" },
    CharRef { name: "succsim;", characters: "\u{227f}" },
    CharRef { name: "supdsub;", characters: "\u{2ad8}" },
    CharRef { name: "supedot;", characters: "\u{2ac4}" },
    CharRef { name: "suphsol;", characters: "\u{27c9}" },
    CharRef { name: "suphsub;", characters: "\u{2ad7}" },
    CharRef { name: "suplarr;", characters: "\u{297b}" },
    CharRef { name: "supmult;", characters: "\u{2ac2}" },
    CharRef { name: "supplus;", characters: "\u{2ac0}" },
    CharRef { name: "swarrow;", characters: "\u{2199}" },
    CharRef { name: "sacute;", characters: "\u{15b}" },
    CharRef { name: "scaron;", characters: "\u{161}" },
    CharRef { name: "scedil;", characters: "\u{15f}" },
    CharRef { name: "scnsim;", characters: "\u{22e9}" },
    CharRef { name: "searhk;", characters: "\u{2925}" },
    CharRef { name: "seswar;", characters: "\u{2929}" },
    CharRef { name: "sfrown;", characters: "\u{2322}" },
    CharRef { name: "shchcy;", characters: "\u{449}" },
    CharRef { name: "sigmaf;", characters: "\u{3c2}" },
    CharRef { name: "sigmav;", characters: "\u{3c2}" },
    CharRef { name: "simdot;", characters: "\u{2a6a}" },
    CharRef { name: "smashp;", characters: "\u{2a33}" },
    CharRef { name: "softcy;", characters: "\u{44c}" },
    CharRef { name: "solbar;", characters: "\u{233f}" },
    CharRef { name: "spades;", characters: "\u{2660}" },
    CharRef { name: "sqcaps;", characters: "\u{2293}\u{fe00}" },
    CharRef { name: "sqcups;", characters: "\u{2294}\u{fe00}" },
    CharRef { name: "sqsube;", characters: "\u{2291}" },
    CharRef { name: "sqsupe;", characters: "\u{2292}" },
    CharRef { name: "square;", characters: "\u{25a1}" },
    CharRef { name: "squarf;", characters: "\u{25aa}" },
    CharRef { name: "ssetmn;", characters: "\u{2216}" },
    CharRef { name: "ssmile;", characters: "\u{2323}" },
    CharRef { name: "sstarf;", characters: "\u{22c6}" },
    CharRef { name: "subdot;", characters: "\u{2abd}" },
    CharRef { name: "subset;", characters: "\u{2282}" },
    CharRef { name: "subsim;", characters: "\u{2ac7}" },
    CharRef { name: "subsub;", characters: "\u{2ad5}" },
    CharRef { name: "subsup;", characters: "\u{2ad3}" },
    CharRef { name: "succeq;", characters: "\u{2ab0}" },
    CharRef { name: "supdot;", characters: "\u{2abe}" },
    CharRef { name: "supset;", characters: "\u{2283}" },
    CharRef { name: "supsim;", characters: "\u{2ac8}" },
    CharRef { name: "supsub;", characters: "\u{2ad4}" },
    CharRef { name: "supsup;", characters: "\u{2ad6}" },
    CharRef { name: "swarhk;", characters: "\u{2926}" },
    CharRef { name: "swnwar;", characters: "\u{292a}" },
    CharRef { name: "sbquo;", characters: "\u{201a}" },
    CharRef { name: "sccue;", characters: "\u{227d}" },
    CharRef { name: "scirc;", characters: "\u{15d}" },
    CharRef { name: "scnap;", characters: "\u{2aba}" },
    CharRef { name: "scsim;", characters: "\u{227f}" },
    CharRef { name: "sdotb;", characters: "\u{22a1}" },
    CharRef { name: "sdote;", characters: "\u{2a66}" },
    CharRef { name: "seArr;", characters: "\u{21d8}" },
    CharRef { name: "searr;", characters: "\u{2198}" },
    CharRef { name: "setmn;", characters: "\u{2216}" },
    CharRef { name: "sharp;", characters: "\u{266f}" },
    CharRef { name: "sigma;", characters: "\u{3c3}" },
    CharRef { name: "simeq;", characters: "\u{2243}" },
    CharRef { name: "simgE;", characters: "\u{2aa0}" },
    CharRef { name: "simlE;", characters: "\u{2a9f}" },
    CharRef { name: "simne;", characters: "\u{2246}" },
    CharRef { name: "slarr;", characters: "\u{2190}" },
    CharRef { name: "smile;", characters: "\u{2323}" },
    CharRef { name: "smtes;", characters: "\u{2aac}\u{fe00}" },
    CharRef { name: "sqcap;", characters: "\u{2293}" },
    CharRef { name: "sqcup;", characters: "\u{2294}" },
    CharRef { name: "sqsub;", characters: "\u{228f}" },
    CharRef { name: "sqsup;", characters: "\u{2290}" },
    CharRef { name: "srarr;", characters: "\u{2192}" },
    CharRef { name: "starf;", characters: "\u{2605}" },
    CharRef { name: "strns;", characters: "\u{af}" },
    CharRef { name: "subnE;", characters: "\u{2acb}" },
    CharRef { name: "subne;", characters: "\u{228a}" },
    CharRef { name: "supnE;", characters: "\u{2acc}" },
    CharRef { name: "supne;", characters: "\u{228b}" },
    CharRef { name: "swArr;", characters: "\u{21d9}" },
    CharRef { name: "swarr;", characters: "\u{2199}" },
    CharRef { name: "szlig;", characters: "\u{df}" },
    CharRef { name: "scap;", characters: "\u{2ab8}" },
    CharRef { name: "scnE;", characters: "\u{2ab6}" },
    CharRef { name: "sdot;", characters: "\u{22c5}" },
    CharRef { name: "sect;", characters: "\u{a7}" },
    CharRef { name: "semi;", characters: ";" },
    CharRef { name: "sext;", characters: "\u{2736}" },
    CharRef { name: "shcy;", characters: "\u{448}" },
    CharRef { name: "sime;", characters: "\u{2243}" },
    CharRef { name: "simg;", characters: "\u{2a9e}" },
    CharRef { name: "siml;", characters: "\u{2a9d}" },
    CharRef { name: "smid;", characters: "\u{2223}" },
    CharRef { name: "smte;", characters: "\u{2aac}" },
    CharRef { name: "solb;", characters: "\u{29c4}" },
    CharRef { name: "sopf;", characters: "\u{1d564}" },
    CharRef { name: "spar;", characters: "\u{2225}" },
    CharRef { name: "squf;", characters: "\u{25aa}" },
    CharRef { name: "sscr;", characters: "\u{1d4c8}" },
    CharRef { name: "star;", characters: "\u{2606}" },
    CharRef { name: "subE;", characters: "\u{2ac5}" },
    CharRef { name: "sube;", characters: "\u{2286}" },
    CharRef { name: "succ;", characters: "\u{227b}" },
    CharRef { name: "sung;", characters: "\u{266a}" },
    CharRef { name: "sup1;", characters: "\u{b9}" },
    CharRef { name: "sup2;", characters: "\u{b2}" },
    CharRef { name: "sup3;", characters: "\u{b3}" },
    CharRef { name: "supE;", characters: "\u{2ac6}" },
    CharRef { name: "supe;", characters: "\u{2287}" },
    CharRef { name: "szlig", characters: "\u{df}" },
    CharRef { name: "scE;", characters: "\u{2ab4}" },
    CharRef { name: "sce;", characters: "\u{2ab0}" },
    CharRef { name: "scy;", characters: "\u{441}" },
    CharRef { name: "sect", characters: "\u{a7}" },
    CharRef { name: "sfr;", characters: "\u{1d530}" },
    CharRef { name: "shy;", characters: "\u{ad}" },
    CharRef { name: "sim;", characters: "\u{223c}" },
    CharRef { name: "smt;", characters: "\u{2aaa}" },
    CharRef { name: "sol;", characters: "/" },
    CharRef { name: "squ;", characters: "\u{25a1}" },
    CharRef { name: "sub;", characters: "\u{2282}" },
    CharRef { name: "sum;", characters: "\u{2211}" },
    CharRef { name: "sup1", characters: "\u{b9}" },
    CharRef { name: "sup2", characters: "\u{b2}" },
    CharRef { name: "sup3", characters: "\u{b3}" },
    CharRef { name: "sup;", characters: "\u{2283}" },
    CharRef { name: "sc;", characters: "\u{227b}" },
    CharRef { name: "shy", characters: "\u{ad}" },
];

static LOWER_T: &[CharRef] = &[
    CharRef { name: "twoheadrightarrow;", characters: "\u{21a0}" },
    CharRef { name: "twoheadleftarrow;", characters: "\u{219e}" },
    CharRef { name: "trianglerighteq;", characters: "\u{22b5}" },
    CharRef { name: "trianglelefteq;", characters: "\u{22b4}" },
    CharRef { name: "triangleright;", characters: "\u{25b9}" },
    CharRef { name: "triangledown;", characters: "\u{25bf}" },
    CharRef { name: "triangleleft;", characters: "\u{25c3}" },
    CharRef { name: "thickapprox;", characters: "\u{2248}" },
    CharRef { name: "therefore;", characters: "\u{2234}" },
    CharRef { name: "triangleq;", characters: "\u{225c}" },
    CharRef { name: "thetasym;", characters: "\u{3d1}" },
    CharRef { name: "thicksim;", characters: "\u{223c}" },
    CharRef { name: "timesbar;", characters: "\u{2a31}" },
    CharRef { name: "triangle;", characters: "\u{25b5}" },
    CharRef { name: "triminus;", characters: "\u{2a3a}" },
    CharRef { name: "trpezium;", characters: "\u{23e2}" },
    CharRef { name: "topfork;", characters: "\u{2ada}" },
    CharRef { name: "triplus;", characters: "\u{2a39}" },
    CharRef { name: "tritime;", characters: "\u{2a3b}" },
    CharRef { name: "target;", characters: "\u{2316}" },
    CharRef { name: "tcaron;", characters: "\u{165}" },
    CharRef { name: "tcedil;", characters: "\u{163}" },
    CharRef { name: "telrec;", characters: "\u{2315}" },
    CharRef { name: "there4;", characters: "\u{2234}" },
    CharRef { name: "thetav;", characters: "\u{3d1}" },
    CharRef { name: "thinsp;", characters: "\u{2009}" },
    CharRef { name: "thksim;", characters: "\u{223c}" },
    CharRef { name: "timesb;", characters: "\u{22a0}" },
    CharRef { name: "timesd;", characters: "\u{2a30}" },
    CharRef { name: "topbot;", characters: "\u{2336}" },
    CharRef { name: "topcir;", characters: "\u{2af1}" },
    CharRef { name: "tprime;", characters: "\u{2034}" },
    CharRef { name: "tridot;", characters: "\u{25ec}" },
    CharRef { name: "tstrok;", characters: "\u{167}" },
    CharRef { name: "theta;", characters: "\u{3b8}" },
    CharRef { name: "thkap;", characters: "\u{2248}" },
    CharRef { name: "thorn;", characters: "\u{fe}" },
    CharRef { name: "tilde;", characters: "\u{2dc}" },
    CharRef { name: "times;", characters: "\u{d7}" },
    CharRef { name: "trade;", characters: "\u{2122}" },
    CharRef { name: "trisb;", characters: "\u{29cd}" },
    CharRef { name: "tshcy;", characters: "\u{45b}" },
    CharRef { name: "twixt;", characters: "\u{226c}" },
    CharRef { name: "tbrk;", characters: "\u{23b4}" },
    CharRef { name: "tdot;", characters: "\u{20db}" },
    CharRef { name: "thorn", characters: "\u{fe}" },
    CharRef { name: "times", characters: "\u{d7}" },
    CharRef { name: "tint;", characters: "\u{222d}" },
    CharRef { name: "toea;", characters: "\u{2928}" },
    CharRef { name: "topf;", characters: "\u{1d565}" },
    CharRef { name: "tosa;", characters: "\u{2929}" },
    CharRef { name: "trie;", characters: "\u{225c}" },
    CharRef { name: "tscr;", characters: "\u{1d4c9}" },
    CharRef { name: "tscy;", characters: "\u{446}" },
    CharRef { name: "tau;", characters: "\u{3c4}" },
    CharRef { name: "tcy;", characters: "\u{442}" },
    CharRef { name: "tfr;", characters: "\u{1d531}" },
    CharRef { name: "top;", characters: "\u{22a4}" },
];

static LOWER_U: &[CharRef] = &[
    CharRef { name: "upharpoonright;", characters: "\u{21be}" },
    CharRef { name: "upharpoonleft;", characters: "\u{21bf}" },
    CharRef { name: "updownarrow;", characters: "\u{2195}" },
    CharRef { name: "upuparrows;", characters: "\u{21c8}" },
    CharRef { name: "ulcorner;", characters: "\u{231c}" },
    CharRef { name: "urcorner;", characters: "\u{231d}" },
    CharRef { name: "uparrow;", characters: "\u{2191}" },
    CharRef { name: "upsilon;", characters: "\u{3c5}" },
    CharRef { name: "uwangle;", characters: "\u{29a7}" },
    CharRef { name: "uacute;", characters: "\u{fa}" },
    CharRef { name: "ubreve;", characters: "\u{16d}" },
    CharRef { name: "udblac;", characters: "\u{171}" },
    CharRef { name: "ufisht;", characters: "\u{297e}" },
    CharRef { name: "ugrave;", characters: "\u{f9}" },
    CharRef { name: "ulcorn;", characters: "\u{231c}" },
    CharRef { name: "ulcrop;", characters: "\u{230f}" },
    CharRef { name: "urcorn;", characters: "\u{231d}" },
    CharRef { name: "urcrop;", characters: "\u{230e}" },
    CharRef { name: "utilde;", characters: "\u{169}" },
    CharRef { name: "uacute", characters: "\u{fa}" },
    CharRef { name: "ubrcy;", characters: "\u{45e}" },
    CharRef { name: "ucirc;", characters: "\u{fb}" },
    CharRef { name: "udarr;", characters: "\u{21c5}" },
    CharRef { name: "udhar;", characters: "\u{296e}" },
    CharRef { name: "ugrave", characters: "\u{f9}" },
    CharRef { name: "uharl;", characters: "\u{21bf}" },
    CharRef { name: "uharr;", characters: "\u{21be}" },
    CharRef { name: "uhblk;", characters: "\u{2580}" },
    CharRef { name: "ultri;", characters: "\u{25f8}" },
    CharRef { name: "umacr;", characters: "\u{16b}" },
    CharRef { name: "uogon;", characters: "\u{173}" },
    CharRef { name: "uplus;", characters: "\u{228e}" },
    CharRef { name: "upsih;", characters: "\u{3d2}" },
    CharRef { name: "uring;", characters: "\u{16f}" },
    CharRef { name: "urtri;", characters: "\u{25f9}" },
    CharRef { name: "utdot;", characters: "\u{22f0}" },
    CharRef { name: "utrif;", characters: "\u{25b4}" },
    CharRef { name: "uuarr;", characters: "\u{21c8}" },
    CharRef { name: "uArr;", characters: "\u{21d1}" },
    CharRef { name: "uHar;", characters: "\u{2963}" },
    CharRef { name: "uarr;", characters: "\u{2191}" },
    CharRef { name: "ucirc", characters: "\u{fb}" },
    CharRef { name: "uopf;", characters: "\u{1d566}" },
    CharRef { name: "upsi;", characters: "\u{3c5}" },
    CharRef { name: "uscr;", characters: "\u{1d4ca}" },
    CharRef { name: "utri;", characters: "\u{25b5}" },
    CharRef { name: "uuml;", characters: "\u{fc}" },
    CharRef { name: "ucy;", characters: "\u{443}" },
    CharRef { name: "ufr;", characters: "\u{1d532}" },
    CharRef { name: "uml;", characters: "\u{a8}" },
    CharRef { name: "uuml", characters: "\u{fc}" },
    CharRef { name: "uml", characters: "\u{a8}" },
];

static LOWER_V: &[CharRef] = &[
    CharRef { name: "vartriangleright;", characters: "\u{22b3}" },
    CharRef { name: "vartriangleleft;", characters: "\u{22b2}" },
    CharRef { name: "varsubsetneqq;", characters: "\u{2acb}\u{fe00}" },
    CharRef { name: "varsupsetneqq;", characters: "\u{2acc}\u{fe00}" },
    CharRef { name: "varsubsetneq;", characters: "\u{228a}\u{fe00}" },
    CharRef { name: "varsupsetneq;", characters: "\u{228b}\u{fe00}" },
    CharRef { name: "varepsilon;", characters: "\u{3f5}" },
    CharRef { name: "varnothing;", characters: "\u{2205}" },
    CharRef { name: "varpropto;", characters: "\u{221d}" },
    CharRef { name: "varkappa;", characters: "\u{3f0}" },
    CharRef { name: "varsigma;", characters: "\u{3c2}" },
    CharRef { name: "vartheta;", characters: "\u{3d1}" },
    CharRef { name: "vzigzag;", characters: "\u{299a}" },
    CharRef { name: "vangrt;", characters: "\u{299c}" },
    CharRef { name: "varphi;", characters: "\u{3d5}" },
    CharRef { name: "varrho;", characters: "\u{3f1}" },
    CharRef { name: "veebar;", characters: "\u{22bb}" },
    CharRef { name: "vellip;", characters: "\u{22ee}" },
    CharRef { name: "verbar;", characters: "|" },
    CharRef { name: "vsubnE;", characters: "\u{2acb}\u{fe00}" },
    CharRef { name: "vsubne;", characters: "\u{228a}\u{fe00}" },
    CharRef { name: "vsupnE;", characters: "\u{2acc}\u{fe00}" },
    CharRef { name: "vsupne;", characters: "\u{228b}\u{fe00}" },
    CharRef { name: "vBarv;", characters: "\u{2ae9}" },
    CharRef { name: "vDash;", characters: "\u{22a8}" },
    CharRef { name: "varpi;", characters: "\u{3d6}" },
    CharRef { name: "vdash;", characters: "\u{22a2}" },
    CharRef { name: "veeeq;", characters: "\u{225a}" },
    CharRef { name: "vltri;", characters: "\u{22b2}" },
    CharRef { name: "vnsub;", characters: "\u{2282}\u{20d2}" },
    CharRef { name: "vnsup;", characters: "\u{2283}\u{20d2}" },
    CharRef { name: "vprop;", characters: "\u{221d}" },
    CharRef { name: "vrtri;", characters: "\u{22b3}" },
    CharRef { name: "vArr;", characters: "\u{21d5}" },
    CharRef { name: "vBar;", characters: "\u{2ae8}" },
    CharRef { name: "varr;", characters: "\u{2195}" },
    CharRef { name: "vert;", characters: "|" },
    CharRef { name: "vopf;", characters: "\u{1d567}" },
    CharRef { name: "vscr;", characters: "\u{1d4cb}" },
    CharRef { name: "vcy;", characters: "\u{432}" },
    CharRef { name: "vee;", characters: "\u{2228}" },
    CharRef { name: "vfr;", characters: "\u{1d533}" },
];

static LOWER_W: &[CharRef] = &[
    CharRef { name: "wedbar;", characters: "\u{2a5f}" },
    CharRef { name: "wedgeq;", characters: "\u{2259}" },
    CharRef { name: "weierp;", characters: "\u{2118}" },
    CharRef { name: "wreath;", characters: "\u{2240}" },
    CharRef { name: "wcirc;", characters: "\u{175}" },
    CharRef { name: "wedge;", characters: "\u{2227}" },
    CharRef { name: "wopf;", characters: "\u{1d568}" },
    CharRef { name: "wscr;", characters: "\u{1d4cc}" },
    CharRef { name: "wfr;", characters: "\u{1d534}" },
    CharRef { name: "wp;", characters: "\u{2118}" },
    CharRef { name: "wr;", characters: "\u{2240}" },
];

static LOWER_X: &[CharRef] = &[
    CharRef { name: "xoplus;", characters: "\u{2a01}" },
    CharRef { name: "xotime;", characters: "\u{2a02}" },
    CharRef { name: "xsqcup;", characters: "\u{2a06}" },
    CharRef { name: "xuplus;", characters: "\u{2a04}" },
    CharRef { name: "xwedge;", characters: "\u{22c0}" },
    CharRef { name: "xcirc;", characters: "\u{25ef}" },
    CharRef { name: "xdtri;", characters: "\u{25bd}" },
    CharRef { name: "xhArr;", characters: "\u{27fa}" },
    CharRef { name: "xharr;", characters: "\u{27f7}" },
    CharRef { name: "xlArr;", characters: "\u{27f8}" },
    CharRef { name: "xlarr;", characters: "\u{27f5}" },
    CharRef { name: "xodot;", characters: "\u{2a00}" },
    CharRef { name: "xrArr;", characters: "\u{27f9}" },
    CharRef { name: "xrarr;", characters: "\u{27f6}" },
    CharRef { name: "xutri;", characters: "\u{25b3}" },
    CharRef { name: "xcap;", characters: "\u{22c2}" },
    CharRef { name: "xcup;", characters: "\u{22c3}" },
    CharRef { name: "xmap;", characters: "\u{27fc}" },
    CharRef { name: "xnis;", characters: "\u{22fb}" },
    CharRef { name: "xopf;", characters: "\u{1d569}" },
    CharRef { name: "xscr;", characters: "\u{1d4cd}" },
    CharRef { name: "xvee;", characters: "\u{22c1}" },
    CharRef { name: "xfr;", characters: "\u{1d535}" },
    CharRef { name: "xi;", characters: "\u{3be}" },
];

static LOWER_Y: &[CharRef] = &[
    CharRef { name: "yacute;", characters: "\u{fd}" },
    CharRef { name: "yacute", characters: "\u{fd}" },
    CharRef { name: "ycirc;", characters: "\u{177}" },
    CharRef { name: "yacy;", characters: "\u{44f}" },
    CharRef { name: "yicy;", characters: "\u{457}" },
    CharRef { name: "yopf;", characters: "\u{1d56a}" },
    CharRef { name: "yscr;", characters: "\u{1d4ce}" },
    CharRef { name: "yucy;", characters: "\u{44e}" },
    CharRef { name: "yuml;", characters: "\u{ff}" },
    CharRef { name: "ycy;", characters: "\u{44b}" },
    CharRef { name: "yen;", characters: "\u{a5}" },
    CharRef { name: "yfr;", characters: "\u{1d536}" },
    CharRef { name: "yuml", characters: "\u{ff}" },
    CharRef { name: "yen", characters: "\u{a5}" },
];

static LOWER_Z: &[CharRef] = &[
    CharRef { name: "zigrarr;", characters: "\u{21dd}" },
    CharRef { name: "zacute;", characters: "\u{17a}" },
    CharRef { name: "zcaron;", characters: "\u{17e}" },
    CharRef { name: "zeetrf;", characters: "\u{2128}" },
    CharRef { name: "zdot;", characters: "\u{17c}" },
    CharRef { name: "zeta;", characters: "\u{3b6}" },
    CharRef { name: "zhcy;", characters: "\u{436}" },
    CharRef { name: "zopf;", characters: "\u{1d56b}" },
    CharRef { name: "zscr;", characters: "\u{1d4cf}" },
    CharRef { name: "zwnj;", characters: "\u{200c}" },
    CharRef { name: "zcy;", characters: "\u{437}" },
    CharRef { name: "zfr;", characters: "\u{1d537}" },
    CharRef { name: "zwj;", characters: "\u{200d}" },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_for(input: &str) -> Option<(&'static CharRef, usize)> {
        let mut chars = input.chars();
        let first = chars.next().unwrap();
        let rest = chars.as_str();
        let mut consumed = 0;
        let char_ref = try_read_character_reference(first, |candidate| {
            if rest.starts_with(candidate) {
                consumed = candidate.len();
                true
            } else {
                false
            }
        })?;
        Some((char_ref, consumed + first.len_utf8()))
    }

    #[test]
    fn maximal_munch() {
        // "not" is a reference by itself, but "notin;" is longer and must win
        let (char_ref, len) = reference_for("notin; x").unwrap();
        assert_eq!(char_ref.characters, "\u{2209}");
        assert_eq!(len, 6);
    }

    #[test]
    fn semicolonless_fallback() {
        let (char_ref, len) = reference_for("amp=").unwrap();
        assert_eq!(char_ref.characters, "&");
        assert_eq!(char_ref.name, "amp");
        assert_eq!(len, 3);
    }

    #[test]
    fn case_matters() {
        let (upper, _) = reference_for("AElig;").unwrap();
        assert_eq!(upper.characters, "\u{c6}");
        let (lower, _) = reference_for("aelig;").unwrap();
        assert_eq!(lower.characters, "\u{e6}");
    }

    #[test]
    fn unknown_name() {
        assert!(reference_for("thisisnotanentity;").is_none());
    }
}
