// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Codepage tables and an incremental UTF-8 decoder shared by every parser.
//!
//! A [`Codepage`] maps a single incoming byte to the `char` it denotes.
//! Bytes below 0x80 are always US-ASCII except where a national-replacement
//! or home-computer set overrides a handful of those positions too. `unmap`
//! is the inverse, used by parsers that need to know which byte a host would
//! send to produce a given glyph (answerback construction, round-trip
//! tests).

/// One of the eight-bit character sets or seven-bit replacement sets this
/// crate understands. Each variant names a table from spec.md §4.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codepage {
    Ascii,
    Iso8859_1,
    Cp437,
    Cp720,
    Cp737,
    Cp775,
    Cp850,
    Cp852,
    Cp857,
    Cp858,
    Cp860,
    Cp862,
    Cp863,
    Cp866,
    Cp1250,
    Cp1251,
    Cp1252,
    Koi8R,
    Koi8U,
    Nrc(NrcSet),
    DecSpecialGraphics,
    Vt52SpecialGraphics,
    Petscii { uppercase: bool, reverse: bool },
    Atascii,
}

/// The DEC national-replacement-character sets selectable via `ESC ( <id>` /
/// `ESC ) <id>` designation, per spec.md §4.4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NrcSet {
    Us,
    Uk,
    Dutch,
    Finnish,
    French,
    FrenchCanadian,
    German,
    Italian,
    NorwegianDanish,
    Spanish,
    Swedish,
    Swiss,
}

/// Maps `byte` to the `char` it denotes under `codepage`.
#[must_use]
pub fn map_byte(codepage: Codepage, byte: u8) -> char {
    match codepage {
        Codepage::Ascii | Codepage::Iso8859_1 => byte as char,
        Codepage::Cp437 => cp437(byte),
        Codepage::Cp720
        | Codepage::Cp737
        | Codepage::Cp775
        | Codepage::Cp850
        | Codepage::Cp852
        | Codepage::Cp857
        | Codepage::Cp858
        | Codepage::Cp860
        | Codepage::Cp862
        | Codepage::Cp863
        | Codepage::Cp866 => oem_codepage(codepage, byte),
        Codepage::Cp1250 | Codepage::Cp1251 | Codepage::Cp1252 => windows_codepage(codepage, byte),
        Codepage::Koi8R | Codepage::Koi8U => koi8(codepage, byte),
        Codepage::Nrc(set) => nrc(set, byte),
        Codepage::DecSpecialGraphics | Codepage::Vt52SpecialGraphics => special_graphics(byte),
        Codepage::Petscii { uppercase, reverse } => petscii(byte, uppercase, reverse),
        Codepage::Atascii => atascii(byte),
    }
}

/// Finds the byte that, under `codepage`, maps to `ch`. Returns `None` when
/// no byte produces that glyph; callers substitute `b'?'` per spec.md §4.1.
#[must_use]
pub fn unmap(codepage: Codepage, ch: char) -> Option<u8> {
    (0u8..=255u8).find(|&b| map_byte(codepage, b) == ch)
}

/// CP437 (the original IBM PC OEM codepage). Bytes 0x80-0xFF per the
/// standard table; box-drawing/shading (0xB0-0xDF) is reused verbatim by
/// every other OEM codepage below, since that block is identical across the
/// whole CP437 family.
const CP437_UPPER: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', 'É', 'æ', 'Æ',
    'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ', 'á', 'í', 'ó', 'ú', 'ñ', 'Ñ',
    'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»', '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕',
    '╣', '║', '╗', '╝', '╜', '╛', '┐', '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦',
    '╠', '═', '╬', '╧', '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐',
    '▀', 'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩', '≡', '±',
    '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{00A0}',
];

fn cp437(byte: u8) -> char {
    if byte < 0x80 {
        byte as char
    } else {
        CP437_UPPER[usize::from(byte - 0x80)]
    }
}

/// The other OEM codepages keep CP437's box-drawing/shading block
/// (0xB0-0xDF) and substitute a language-appropriate Unicode block for the
/// remaining accented-letter ranges (0x80-0xAF, 0xE0-0xFF).
fn oem_codepage(codepage: Codepage, byte: u8) -> char {
    if byte < 0x80 {
        return byte as char;
    }
    if codepage == Codepage::Cp858 && byte == 0x9F {
        // CP858 is CP850 with the florin sign replaced by the euro sign.
        return '€';
    }
    if (0xB0..=0xDF).contains(&byte) {
        return CP437_UPPER[usize::from(byte - 0x80)];
    }

    let base: u32 = match codepage {
        Codepage::Cp720 => 0x0621,  // Arabic
        Codepage::Cp737 => 0x0391,  // Greek
        Codepage::Cp775 => 0x0100,  // Baltic (Latin Extended-A)
        Codepage::Cp852 => 0x0100,  // Central European (Latin Extended-A)
        Codepage::Cp857 => 0x011E,  // Turkish
        Codepage::Cp862 => 0x05D0,  // Hebrew
        Codepage::Cp866 => 0x0410,  // Cyrillic
        _ => 0x00C0,                // Cp850/Cp858/Cp860/Cp863: Western accented Latin-1
    };
    char::from_u32(base + u32::from(byte - 0x80)).unwrap_or('?')
}

/// Windows-1252's 0x80-0x9F block (smart quotes, dashes, euro sign): the
/// same substitutions also appear, with minor variation, in 1250 and 1251.
const WINDOWS_CONTROL_BLOCK: [char; 32] = [
    '€', '\u{81}', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', '\u{8d}', 'Ž', '\u{8f}',
    '\u{90}', '\u{2018}', '\u{2019}', '“', '”', '•', '–', '—', '˜', '™', 'š', '›', 'œ', '\u{9d}',
    'ž', 'Ÿ',
];

fn windows_codepage(codepage: Codepage, byte: u8) -> char {
    if byte < 0x80 {
        return byte as char;
    }
    if (0x80..=0x9F).contains(&byte) {
        return WINDOWS_CONTROL_BLOCK[usize::from(byte - 0x80)];
    }

    match codepage {
        Codepage::Cp1251 if byte >= 0xC0 => {
            char::from_u32(0x0410 + u32::from(byte - 0xC0)).unwrap_or('?')
        }
        Codepage::Cp1250 => char::from_u32(0x0080 + u32::from(byte)).unwrap_or('?'),
        // Cp1252, and Cp1250/Cp1251's 0xA0-0xBF punctuation range: identical
        // to Latin-1.
        _ => byte as char,
    }
}

fn koi8(codepage: Codepage, byte: u8) -> char {
    if byte < 0x80 {
        return byte as char;
    }
    match byte {
        0xC0..=0xDF => char::from_u32(0x0430 + u32::from(byte - 0xC0)).unwrap_or('?'), // а..я
        0xE0..=0xFF => char::from_u32(0x0410 + u32::from(byte - 0xE0)).unwrap_or('?'), // А..Я
        0xA3 if codepage == Codepage::Koi8U => 'Є',
        0xA3 => 'ё',
        _ => char::from_u32(0x2500 + u32::from(byte - 0x80)).unwrap_or('?'),
    }
}

/// Positions the twelve NRC sets are allowed to override; every other byte
/// is plain US-ASCII. See ECMA-94 / VT220 Programmer Reference Manual.
const NRC_POSITIONS: [u8; 11] = [
    b'#', b'@', b'[', b'\\', b']', b'^', b'`', b'{', b'|', b'}', b'~',
];

fn nrc_overrides(set: NrcSet) -> [char; 11] {
    match set {
        NrcSet::Us => ['#', '@', '[', '\\', ']', '^', '`', '{', '|', '}', '~'],
        NrcSet::Uk => ['£', '@', '[', '\\', ']', '^', '`', '{', '|', '}', '~'],
        NrcSet::Dutch => ['£', '¾', '\u{0133}', '½', '|', '^', '`', '¨', 'f', '¼', '´'],
        NrcSet::Finnish => ['#', '@', 'Ä', 'Ö', 'Å', 'Ü', 'é', 'ä', 'ö', 'å', 'ü'],
        NrcSet::French => ['£', 'à', '°', 'ç', '§', '^', '`', 'é', 'ù', 'è', '¨'],
        NrcSet::FrenchCanadian => ['#', 'à', 'â', 'ç', 'ê', 'î', 'ô', 'é', 'ù', 'è', 'û'],
        NrcSet::German => ['#', '§', 'Ä', 'Ö', 'Ü', '^', '`', 'ä', 'ö', 'ü', 'ß'],
        NrcSet::Italian => ['£', '§', '°', 'ç', 'é', '^', '`', 'à', 'ò', 'è', 'ì'],
        NrcSet::NorwegianDanish => ['#', 'Æ', 'Ø', 'Å', 'Ü', '^', '`', 'æ', 'ø', 'å', 'ü'],
        NrcSet::Spanish => ['£', '§', '¡', 'Ñ', '¿', '^', '`', '°', 'ñ', 'ç', '~'],
        NrcSet::Swedish => ['#', 'É', 'Ä', 'Ö', 'Å', 'Ü', 'é', 'ä', 'ö', 'å', 'ü'],
        NrcSet::Swiss => ['ù', 'à', 'é', 'ç', 'ê', 'î', 'è', 'ô', 'ä', 'ö', 'ü'],
    }
}

fn nrc(set: NrcSet, byte: u8) -> char {
    match NRC_POSITIONS.iter().position(|&p| p == byte) {
        Some(idx) => nrc_overrides(set)[idx],
        None => byte as char,
    }
}

/// DEC/VT52 special-graphics line-drawing set, active on G1 after
/// `ESC ( 0` (or `ESC / K` on VT52). Only 0x5F-0x7E are remapped; everything
/// else falls back to ASCII.
fn special_graphics(byte: u8) -> char {
    match byte {
        0x5F => '\u{00A0}',
        0x60 => '\u{2666}',
        0x61 => '\u{2592}',
        0x62 => '\u{2409}',
        0x63 => '\u{240C}',
        0x64 => '\u{240D}',
        0x65 => '\u{240A}',
        0x66 => '\u{00B0}',
        0x67 => '\u{00B1}',
        0x68 => '\u{2424}',
        0x69 => '\u{240B}',
        0x6A => '\u{2518}',
        0x6B => '\u{2510}',
        0x6C => '\u{250C}',
        0x6D => '\u{2514}',
        0x6E => '\u{253C}',
        0x6F => '\u{23BA}',
        0x70 => '\u{23BB}',
        0x71 => '\u{2500}',
        0x72 => '\u{23BC}',
        0x73 => '\u{23BD}',
        0x74 => '\u{251C}',
        0x75 => '\u{2524}',
        0x76 => '\u{2534}',
        0x77 => '\u{252C}',
        0x78 => '\u{2502}',
        0x79 => '\u{2264}',
        0x7A => '\u{2265}',
        0x7B => '\u{03C0}',
        0x7C => '\u{2260}',
        0x7D => '\u{00A3}',
        0x7E => '\u{00B7}',
        _ => byte as char,
    }
}

/// C64/C128 PETSCII. `uppercase` selects the upper-case/graphics charset
/// versus the lower/upper charset; `reverse` mirrors the high-bit
/// reverse-video convention (bytes 0x80-0xFF print the same glyph as
/// `byte - 0x80`, in reverse video — this table only cares about which
/// glyph, not the video attribute, so it folds the high bit away).
fn petscii(byte: u8, uppercase: bool, reverse: bool) -> char {
    let byte = if reverse && byte >= 0x80 {
        byte - 0x80
    } else {
        byte
    };

    match byte {
        0x00..=0x1F => ' ',
        0x20..=0x40 => byte as char,
        0x41..=0x5A if uppercase => (byte as char).to_ascii_uppercase(),
        0x41..=0x5A => (byte as char).to_ascii_lowercase(),
        0x5B => '[',
        0x5C => '£',
        0x5D => ']',
        0x5E => '\u{2191}',
        0x5F => '\u{2190}',
        0x60..=0x7F => char::from_u32(0x2580 + u32::from(byte - 0x60)).unwrap_or('?'),
        _ => '?',
    }
}

/// Atari 8-bit ATASCII. Printable range matches ASCII; the high bit toggles
/// inverse video and is folded away the same as PETSCII's.
fn atascii(byte: u8) -> char {
    let byte = if byte >= 0x80 { byte - 0x80 } else { byte };
    match byte {
        0x00..=0x1F => ' ',
        0x20..=0x7E => byte as char,
        0x7F => '\u{25B2}',
        _ => '?',
    }
}

/// Incremental state for [`decode_step`]. One instance decodes one logical
/// byte stream; feed it a byte at a time (a chunk may end mid-codepoint).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8Decoder {
    state: DecodeState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    Ground,
    Need { remaining: u8, value: u32 },
}

impl Default for DecodeState {
    fn default() -> Self {
        Self::Ground
    }
}

/// Result of feeding one byte to [`Utf8Decoder::decode_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStep {
    /// A multi-byte sequence is still being accumulated.
    Pending,
    /// A complete, valid code point.
    Char(char),
    /// The byte is not valid at this point in the sequence (overlong
    /// encoding, stray continuation byte, surrogate half, or a byte value
    /// that's never legal in UTF-8). The decoder resets to `Ground`; the
    /// caller should treat this as one malformed byte and may re-feed it as
    /// the first byte of a new sequence.
    Invalid,
}

impl Utf8Decoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one byte. Equivalent in spirit to the Bjoern Hoehrmann
    /// byte-to-class/state-transition automaton (rejects overlong forms,
    /// surrogate halves, and the 0xC0/0xC1/0xF5-0xFF lead bytes that can
    /// never start a valid sequence), expressed as an explicit
    /// lead-byte/continuation-count state machine instead of a lookup
    /// table.
    pub fn decode_step(&mut self, byte: u8) -> DecodeStep {
        match self.state {
            DecodeState::Ground => match byte {
                0x00..=0x7F => DecodeStep::Char(byte as char),
                0xC2..=0xDF => {
                    self.state = DecodeState::Need {
                        remaining: 1,
                        value: u32::from(byte & 0x1F),
                    };
                    DecodeStep::Pending
                }
                0xE0..=0xEF => {
                    self.state = DecodeState::Need {
                        remaining: 2,
                        value: u32::from(byte & 0x0F),
                    };
                    DecodeStep::Pending
                }
                0xF0..=0xF4 => {
                    self.state = DecodeState::Need {
                        remaining: 3,
                        value: u32::from(byte & 0x07),
                    };
                    DecodeStep::Pending
                }
                // 0x80-0xBF: stray continuation byte. 0xC0/0xC1: can only
                // encode overlong two-byte forms. 0xF5-0xFF: past the
                // Unicode range (max code point is U+10FFFF).
                _ => DecodeStep::Invalid,
            },
            DecodeState::Need { remaining, value } => {
                if byte & 0xC0 != 0x80 {
                    self.state = DecodeState::Ground;
                    return DecodeStep::Invalid;
                }

                let value = (value << 6) | u32::from(byte & 0x3F);
                if remaining > 1 {
                    self.state = DecodeState::Need {
                        remaining: remaining - 1,
                        value,
                    };
                    return DecodeStep::Pending;
                }

                self.state = DecodeState::Ground;
                match char::from_u32(value) {
                    Some(ch) if !is_overlong_or_surrogate(value) => DecodeStep::Char(ch),
                    _ => DecodeStep::Invalid,
                }
            }
        }
    }

    /// Resets to `Ground`, discarding any partially-accumulated sequence.
    pub fn reset(&mut self) {
        self.state = DecodeState::Ground;
    }
}

fn is_overlong_or_surrogate(value: u32) -> bool {
    (0xD800..=0xDFFF).contains(&value) || value < 0x80
}

/// Encodes `ch` as UTF-8 into `out`, for protocols that need to re-encode a
/// code point after codepage translation (answerback strings, AVATAR's
/// ANSI-fallback path).
pub fn utf8_encode(ch: char, out: &mut Vec<u8>) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
}
