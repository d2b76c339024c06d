// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Translates abstract key presses into the byte sequence a given terminal
//! mode expects on the wire. A named key's sequence is resolved through
//! three tiers, in priority order: a user-bound keymap loaded from disk, an
//! emulation-bound keymap, and finally the hard-coded per-emulation table in
//! this module. Unicode input skips all three tiers and is encoded directly.

use std::collections::HashMap;

use crate::terminal::{ArrowKeyMode, KeypadMode};

const fn char_to_ctrl_code(c: u8) -> u8 {
    // https://catern.com/posts/terminal_quirks.html
    // man ascii
    c & 0b0001_1111
}

/// A key event, independent of any particular keyboard layout: either a
/// Unicode scalar (ordinary typing) or one of the named keys spec.md §4.8
/// enumerates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Unicode(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    ArrowRight,
    ArrowLeft,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Insert,
    Delete,
    PageUp,
    PageDown,
    /// F1-F36.
    Function(u8),
    /// Keypad digit/operator: `b'0'..=b'9'`, `b'-'`, `b','`, `b'.'`, `b'\n'`.
    KeyPad(u8),
    InFocus,
    LostFocus,
}

/// Modifier state accompanying a [`Key`]. Ctrl only affects `Unicode` keys
/// (mapped to the C0 control byte); Shift is carried for user/emulation
/// keymaps to key on but has no hard-coded effect of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    #[must_use]
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Which emulation's named-key table and Unicode encoding rule applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardEmulation {
    /// ANSI/VT100/VT220/AVATAR/DEBUG: named keys use the ANSI or VT100
    /// application-keypad cursor-key tables depending on `ArrowKeyMode`;
    /// Unicode is UTF-8 for xterm/Linux-flavoured sessions, low 8 bits
    /// otherwise.
    Ansi { utf8: bool },
    Vt52,
    Petscii,
    Atascii,
}

/// Keymap override tiers: a loaded-from-disk user keymap and/or an
/// emulation-specific keymap, either of which preempts the hard-coded table.
#[derive(Default)]
pub struct KeymapOverrides<'a> {
    pub user: Option<&'a HashMap<Key, Vec<u8>>>,
    pub emulation: Option<&'a HashMap<Key, Vec<u8>>>,
}

fn apply_alt(mut bytes: Vec<u8>, alt: bool) -> Vec<u8> {
    if alt {
        bytes.insert(0, 0x1B);
    }
    bytes
}

/// Encodes `event` to the bytes that should go out on the wire.
///
/// `new_line_mode` (LNM) causes CR to be followed by LF; `telnet_ascii` does
/// the same unconditionally, per spec.md §4.8's telnet-transport rule, and
/// takes priority when both could apply (it's not a mode the remote end can
/// toggle off).
#[must_use]
pub fn encode(
    event: KeyEvent,
    emulation: KeyboardEmulation,
    arrow_mode: ArrowKeyMode,
    keypad_mode: KeypadMode,
    new_line_mode: bool,
    telnet_ascii: bool,
    overrides: &KeymapOverrides,
) -> Vec<u8> {
    if let Key::Unicode(c) = event.key {
        return encode_unicode(c, event.modifiers, emulation);
    }

    if let Some(bytes) = overrides.user.and_then(|m| m.get(&event.key)) {
        return apply_alt(bytes.clone(), event.modifiers.alt);
    }
    if let Some(bytes) = overrides.emulation.and_then(|m| m.get(&event.key)) {
        return apply_alt(bytes.clone(), event.modifiers.alt);
    }

    let bytes = hard_coded(event.key, emulation, arrow_mode, keypad_mode, new_line_mode, telnet_ascii);
    apply_alt(bytes, event.modifiers.alt)
}

fn encode_unicode(c: char, modifiers: Modifiers, emulation: KeyboardEmulation) -> Vec<u8> {
    if modifiers.ctrl && c.is_ascii() {
        return apply_alt(vec![char_to_ctrl_code(c as u8)], modifiers.alt);
    }

    let bytes = match emulation {
        KeyboardEmulation::Ansi { utf8: true } => {
            let mut buf = [0u8; 4];
            c.encode_utf8(&mut buf).as_bytes().to_vec()
        }
        _ => vec![(u32::from(c) & 0xFF) as u8],
    };

    apply_alt(bytes, modifiers.alt)
}

fn hard_coded(
    key: Key,
    emulation: KeyboardEmulation,
    arrow_mode: ArrowKeyMode,
    keypad_mode: KeypadMode,
    new_line_mode: bool,
    telnet_ascii: bool,
) -> Vec<u8> {
    match key {
        Key::Unicode(_) => Vec::new(), // handled in `encode_unicode`
        Key::Enter => {
            if new_line_mode || telnet_ascii {
                b"\r\n".to_vec()
            } else {
                vec![b'\r']
            }
        }
        Key::Backspace => vec![char_to_ctrl_code(b'H')],
        Key::Tab => vec![char_to_ctrl_code(b'i')],
        Key::Escape => vec![0x1B],
        Key::ArrowUp => arrow_bytes(b'A', emulation, arrow_mode),
        Key::ArrowDown => arrow_bytes(b'B', emulation, arrow_mode),
        Key::ArrowRight => arrow_bytes(b'C', emulation, arrow_mode),
        Key::ArrowLeft => arrow_bytes(b'D', emulation, arrow_mode),
        Key::Home => home_end_bytes(b'H', emulation, arrow_mode),
        Key::End => home_end_bytes(b'F', emulation, arrow_mode),
        Key::Insert => b"\x1b[2~".to_vec(),
        Key::Delete => b"\x1b[3~".to_vec(),
        Key::PageUp => b"\x1b[5~".to_vec(),
        Key::PageDown => b"\x1b[6~".to_vec(),
        Key::InFocus => b"\x1b[I".to_vec(),
        Key::LostFocus => b"\x1b[O".to_vec(),
        Key::Function(n) => function_key_bytes(n),
        Key::KeyPad(c) => keypad_bytes(c, keypad_mode),
    }
}

fn arrow_bytes(final_byte: u8, emulation: KeyboardEmulation, arrow_mode: ArrowKeyMode) -> Vec<u8> {
    if matches!(emulation, KeyboardEmulation::Vt52) {
        return vec![0x1B, final_byte];
    }

    match arrow_mode {
        ArrowKeyMode::Vt52 => vec![0x1B, final_byte],
        ArrowKeyMode::Vt100Application => vec![0x1B, b'O', final_byte],
        ArrowKeyMode::Ansi => vec![0x1B, b'[', final_byte],
    }
}

fn home_end_bytes(final_byte: u8, emulation: KeyboardEmulation, arrow_mode: ArrowKeyMode) -> Vec<u8> {
    arrow_bytes(final_byte, emulation, arrow_mode)
}

/// xterm's F1-F20 table, extended for F21-F36 by continuing the same
/// `CSI Pn ~` numbering rather than the (rarely implemented) shift-modifier
/// parameter form.
fn function_key_bytes(n: u8) -> Vec<u8> {
    match n {
        1 => b"\x1bOP".to_vec(),
        2 => b"\x1bOQ".to_vec(),
        3 => b"\x1bOR".to_vec(),
        4 => b"\x1bOS".to_vec(),
        5 => b"\x1b[15~".to_vec(),
        6 => b"\x1b[17~".to_vec(),
        7 => b"\x1b[18~".to_vec(),
        8 => b"\x1b[19~".to_vec(),
        9 => b"\x1b[20~".to_vec(),
        10 => b"\x1b[21~".to_vec(),
        11 => b"\x1b[23~".to_vec(),
        12 => b"\x1b[24~".to_vec(),
        n @ 13..=36 => format!("\x1b[{}~", u16::from(n) + 12).into_bytes(),
        _ => Vec::new(),
    }
}

fn keypad_bytes(c: u8, keypad_mode: KeypadMode) -> Vec<u8> {
    if matches!(keypad_mode, KeypadMode::Application) {
        return vec![c];
    }

    match c {
        b'0' => b"\x1b[Op".to_vec(),
        b'1' => b"\x1b[Oq".to_vec(),
        b'2' => b"\x1b[Or".to_vec(),
        b'3' => b"\x1b[Os".to_vec(),
        b'4' => b"\x1b[Ot".to_vec(),
        b'5' => b"\x1b[Ou".to_vec(),
        b'6' => b"\x1b[Ov".to_vec(),
        b'7' => b"\x1b[Ow".to_vec(),
        b'8' => b"\x1b[Ox".to_vec(),
        b'9' => b"\x1b[Oy".to_vec(),
        b'-' => b"\x1b[Om".to_vec(),
        b',' => b"\x1b[Ol".to_vec(),
        b'.' => b"\x1b[On".to_vec(),
        b'\n' => b"\x1b[OM".to_vec(),
        _ => {
            warn!("Unknown keypad key: {c}");
            vec![c]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_overrides() -> KeymapOverrides<'static> {
        KeymapOverrides::default()
    }

    #[test]
    fn arrow_keys_respect_arrow_mode() {
        let ansi = KeyboardEmulation::Ansi { utf8: false };
        let up = KeyEvent::new(Key::ArrowUp, Modifiers::default());

        assert_eq!(
            encode(up, ansi, ArrowKeyMode::Ansi, KeypadMode::Numeric, false, false, &no_overrides()),
            b"\x1b[A"
        );
        assert_eq!(
            encode(up, ansi, ArrowKeyMode::Vt100Application, KeypadMode::Numeric, false, false, &no_overrides()),
            b"\x1bOA"
        );
        assert_eq!(
            encode(up, KeyboardEmulation::Vt52, ArrowKeyMode::Ansi, KeypadMode::Numeric, false, false, &no_overrides()),
            b"\x1bA"
        );
    }

    #[test]
    fn new_line_mode_appends_lf_after_cr() {
        let ansi = KeyboardEmulation::Ansi { utf8: false };
        let enter = KeyEvent::new(Key::Enter, Modifiers::default());

        assert_eq!(encode(enter, ansi, ArrowKeyMode::Ansi, KeypadMode::Numeric, false, false, &no_overrides()), b"\r");
        assert_eq!(encode(enter, ansi, ArrowKeyMode::Ansi, KeypadMode::Numeric, true, false, &no_overrides()), b"\r\n");
        assert_eq!(encode(enter, ansi, ArrowKeyMode::Ansi, KeypadMode::Numeric, false, true, &no_overrides()), b"\r\n");
    }

    #[test]
    fn unicode_ctrl_maps_to_control_byte() {
        let ansi = KeyboardEmulation::Ansi { utf8: false };
        let ctrl_c = KeyEvent::new(Key::Unicode('C'), Modifiers { ctrl: true, ..Modifiers::default() });
        assert_eq!(encode(ctrl_c, ansi, ArrowKeyMode::Ansi, KeypadMode::Numeric, false, false, &no_overrides()), vec![3]);
    }

    #[test]
    fn unicode_non_ascii_is_utf8_for_xterm_utf8_emulation() {
        let emulation = KeyboardEmulation::Ansi { utf8: true };
        let event = KeyEvent::new(Key::Unicode('é'), Modifiers::default());
        assert_eq!(
            encode(event, emulation, ArrowKeyMode::Ansi, KeypadMode::Numeric, false, false, &no_overrides()),
            "é".as_bytes().to_vec()
        );
    }

    #[test]
    fn alt_prepends_escape() {
        let ansi = KeyboardEmulation::Ansi { utf8: false };
        let event = KeyEvent::new(Key::Unicode('a'), Modifiers { alt: true, ..Modifiers::default() });
        assert_eq!(
            encode(event, ansi, ArrowKeyMode::Ansi, KeypadMode::Numeric, false, false, &no_overrides()),
            vec![0x1B, b'a']
        );
    }

    #[test]
    fn user_keymap_preempts_hard_coded_table() {
        let ansi = KeyboardEmulation::Ansi { utf8: false };
        let mut user = HashMap::new();
        user.insert(Key::ArrowUp, vec![b'k']);
        let overrides = KeymapOverrides { user: Some(&user), emulation: None };

        let up = KeyEvent::new(Key::ArrowUp, Modifiers::default());
        assert_eq!(
            encode(up, ansi, ArrowKeyMode::Ansi, KeypadMode::Numeric, false, false, &overrides),
            b"k"
        );
    }

    #[test]
    fn keypad_falls_back_when_not_in_application_mode() {
        let ansi = KeyboardEmulation::Ansi { utf8: false };
        let key5 = KeyEvent::new(Key::KeyPad(b'5'), Modifiers::default());
        assert_eq!(
            encode(key5, ansi, ArrowKeyMode::Ansi, KeypadMode::Numeric, false, false, &no_overrides()),
            b"\x1b[Ou"
        );
        assert_eq!(
            encode(key5, ansi, ArrowKeyMode::Ansi, KeypadMode::Application, false, false, &no_overrides()),
            vec![b'5']
        );
    }

    #[test]
    fn function_keys_use_xterm_table() {
        let ansi = KeyboardEmulation::Ansi { utf8: false };
        let f1 = KeyEvent::new(Key::Function(1), Modifiers::default());
        let f5 = KeyEvent::new(Key::Function(5), Modifiers::default());
        assert_eq!(encode(f1, ansi, ArrowKeyMode::Ansi, KeypadMode::Numeric, false, false, &no_overrides()), b"\x1bOP");
        assert_eq!(encode(f5, ansi, ArrowKeyMode::Ansi, KeypadMode::Numeric, false, false, &no_overrides()), b"\x1b[15~");
    }
}
