// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! AVATAR/ANSI: a BBS-era control-code protocol built around a single lead
//! byte (`^V`, 0x16) that switches into a small command table, plus two
//! top-level run-length shortcuts (`^Y` for a single repeated character,
//! `^V ^Y` for a repeated pattern). Colour is a single CGA attribute byte
//! rather than SGR parameters.
//!
//! Open Question (spec.md §9): `^V ^L` and `^V ^M` both clear a rectangular
//! area with an attribute/character/dimensions; they differ only in which of
//! attribute/character comes first in the byte stream. Some AVATAR revisions
//! treat them as synonyms; this parser keeps them distinct, matching the
//! order spec.md's component text actually gives for each.

use termemu_common::buffer_states::format_tag::FormatTag;
use termemu_common::buffer_states::fonts::FontWeight;
use termemu_common::buffer_states::tchar::TChar;
use termemu_common::codepage::{Codepage, map_byte};
use termemu_common::colors::TerminalColor;

use crate::ansi::{TerminalOutput, TermemuAnsiParser};
use crate::dispatch;
use crate::terminal::{Parser, Status, Terminal, dispatch_c0_control};

/// Maps a 3-bit CGA colour index (0-7) to the palette this crate already
/// has, in the logical order AVATAR uses: black, blue, green, cyan, red,
/// magenta, yellow/brown, white.
fn cga_logical_color(index: u8, bright: bool) -> TerminalColor {
    match (index & 0x07, bright) {
        (0, false) => TerminalColor::Black,
        (0, true) => TerminalColor::BrightBlack,
        (1, false) => TerminalColor::Blue,
        (1, true) => TerminalColor::BrightBlue,
        (2, false) => TerminalColor::Green,
        (2, true) => TerminalColor::BrightGreen,
        (3, false) => TerminalColor::Cyan,
        (3, true) => TerminalColor::BrightCyan,
        (4, false) => TerminalColor::Red,
        (4, true) => TerminalColor::BrightRed,
        (5, false) => TerminalColor::Magenta,
        (5, true) => TerminalColor::BrightMagenta,
        (6, false) => TerminalColor::Yellow,
        (6, true) => TerminalColor::BrightYellow,
        (_, false) => TerminalColor::White,
        (_, true) => TerminalColor::BrightWhite,
    }
}

/// Low 3 bits: foreground. Bit 3: bold/bright foreground. Bits 4-6:
/// background. Bit 7: blink.
fn cga_attribute_to_tag(attr: u8) -> FormatTag {
    let fg = attr & 0x07;
    let bold = attr & 0x08 != 0;
    let bg = (attr >> 4) & 0x07;
    let blink = attr & 0x80 != 0;

    let mut tag = FormatTag::default();
    tag.colors.set_color(cga_logical_color(fg, bold));
    tag.colors.set_background_color(cga_logical_color(bg, false));
    tag.font_weight = if bold { FontWeight::Bold } else { FontWeight::Normal };
    tag.blink = blink;
    tag
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum ScanState {
    #[default]
    Ground,
    AfterCtrlV,
    NeedParams { cmd: u8, arity: u8, collected: Vec<u8> },
    SingleCharRle { ch: Option<u8> },
    PatternRleLen,
    PatternRleBytes { remaining: u8, collected: Vec<u8> },
    PatternRleCount { pattern: Vec<u8> },
}

pub struct AvatarParser {
    state: ScanState,
    ansi_fallback: Option<TermemuAnsiParser>,
    /// Whether `ESC` diverts into the ANSI fallback parser at all.
    allow_ansi_fallback: bool,
}

impl Default for AvatarParser {
    fn default() -> Self {
        Self {
            state: ScanState::Ground,
            ansi_fallback: None,
            allow_ansi_fallback: true,
        }
    }
}

impl AvatarParser {
    #[must_use]
    pub fn new(allow_ansi_fallback: bool) -> Self {
        Self {
            allow_ansi_fallback,
            ..Self::default()
        }
    }

    fn write_printable(ctx: &mut Terminal, byte: u8) {
        let ch = map_byte(Codepage::Cp437, byte);
        ctx.buffer.insert_text(&[TChar::from(ch)]);
    }

    fn ground(&mut self, ctx: &mut Terminal, byte: u8) -> Status {
        match byte {
            0x16 => {
                self.state = ScanState::AfterCtrlV;
                Status::NoCharYet
            }
            0x19 => {
                self.state = ScanState::SingleCharRle { ch: None };
                Status::NoCharYet
            }
            0x0C => {
                ctx.buffer.erase_display();
                ctx.buffer.set_cursor_pos(Some(1), Some(1));
                Status::OneChar(TerminalOutput::ClearDisplay)
            }
            0x0D => dispatch_c0_control(ctx, byte),
            0x0A => dispatch_c0_control(ctx, byte),
            0x1B if self.allow_ansi_fallback => {
                let mut inner = TermemuAnsiParser::new();
                let outputs = inner.push(&[byte]);
                if outputs.is_empty() {
                    self.ansi_fallback = Some(inner);
                    Status::NoCharYet
                } else {
                    for out in &outputs {
                        dispatch::apply(&mut ctx.buffer, out, &mut ctx.outgoing, &ctx.answerback);
                    }
                    Status::ManyChars(outputs)
                }
            }
            0x00..=0x1F => Status::NoCharYet,
            _ => {
                Self::write_printable(ctx, byte);
                Status::OneChar(TerminalOutput::Data(vec![byte]))
            }
        }
    }

    fn after_ansi_fallback(&mut self, ctx: &mut Terminal, byte: u8) -> Status {
        let Some(mut inner) = self.ansi_fallback.take() else {
            self.state = ScanState::Ground;
            return Status::NoCharYet;
        };

        let outputs = inner.push(&[byte]);
        if outputs.is_empty() {
            self.ansi_fallback = Some(inner);
            Status::NoCharYet
        } else {
            for out in &outputs {
                dispatch::apply(&mut ctx.buffer, out, &mut ctx.outgoing, &ctx.answerback);
            }
            Status::ManyChars(outputs)
        }
    }

    fn after_ctrl_v(&mut self, ctx: &mut Terminal, byte: u8) -> Status {
        self.state = ScanState::Ground;
        match byte {
            0x01 => {
                self.state = ScanState::NeedParams { cmd: 0x01, arity: 1, collected: Vec::new() };
                Status::NoCharYet
            }
            0x02 => {
                let mut tag = ctx.buffer.current_tag();
                tag.blink = true;
                ctx.buffer.set_current_tag(tag);
                Status::NoCharYet
            }
            0x03 => {
                ctx.buffer.move_cursor_relative(None, Some(-1));
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: None, y: Some(-1) })
            }
            0x04 => {
                ctx.buffer.move_cursor_relative(None, Some(1));
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: None, y: Some(1) })
            }
            0x05 => {
                ctx.buffer.move_cursor_relative(Some(-1), None);
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: Some(-1), y: None })
            }
            0x06 => {
                ctx.buffer.move_cursor_relative(Some(1), None);
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: Some(1), y: None })
            }
            0x07 => {
                ctx.buffer.erase_line_to_end();
                Status::OneChar(TerminalOutput::ClearLineForwards)
            }
            0x08 => {
                self.state = ScanState::NeedParams { cmd: 0x08, arity: 2, collected: Vec::new() };
                Status::NoCharYet
            }
            0x09 => {
                ctx.status.insert_mode = true;
                Status::NoCharYet
            }
            0x0A => {
                self.state = ScanState::NeedParams { cmd: 0x0A, arity: 5, collected: Vec::new() };
                Status::NoCharYet
            }
            0x0B => {
                self.state = ScanState::NeedParams { cmd: 0x0B, arity: 5, collected: Vec::new() };
                Status::NoCharYet
            }
            0x0C => {
                self.state = ScanState::NeedParams { cmd: 0x0C, arity: 4, collected: Vec::new() };
                Status::NoCharYet
            }
            0x0D => {
                self.state = ScanState::NeedParams { cmd: 0x0D, arity: 4, collected: Vec::new() };
                Status::NoCharYet
            }
            0x0E => {
                ctx.buffer.delete_chars(1);
                Status::OneChar(TerminalOutput::Delete(1))
            }
            0x10 => {
                ctx.status.insert_mode = false;
                Status::NoCharYet
            }
            0x19 => {
                self.state = ScanState::PatternRleLen;
                Status::NoCharYet
            }
            _ => Status::NoCharYet,
        }
    }

    fn run_command(&mut self, ctx: &mut Terminal, cmd: u8, params: &[u8]) -> Status {
        self.state = ScanState::Ground;
        match cmd {
            0x01 => {
                let tag = cga_attribute_to_tag(params[0]);
                ctx.buffer.set_current_tag(tag);
                Status::NoCharYet
            }
            0x08 => {
                let row = usize::from(params[0].saturating_sub(1));
                let col = usize::from(params[1].saturating_sub(1));
                ctx.buffer.set_cursor_pos(Some(col + 1), Some(row + 1));
                Status::OneChar(TerminalOutput::SetCursorPos { x: Some(col + 1), y: Some(row + 1) })
            }
            0x0A | 0x0B => {
                let n = usize::from(params[0]).max(1);
                let top = usize::from(params[1].saturating_sub(1));
                let left = usize::from(params[2].saturating_sub(1));
                let bottom = usize::from(params[3].saturating_sub(1));
                let right = usize::from(params[4].saturating_sub(1));
                if cmd == 0x0A {
                    ctx.buffer.rectangle_scroll_up(top, bottom, left, right, n);
                } else {
                    ctx.buffer.rectangle_scroll_down(top, bottom, left, right, n);
                }
                Status::NoCharYet
            }
            0x0C | 0x0D => {
                let (attr, ch) = if cmd == 0x0C {
                    (params[0], params[1])
                } else {
                    (params[1], params[0])
                };
                let lines = usize::from(params[2]).max(1);
                let cols = usize::from(params[3]).max(1);

                let tag = cga_attribute_to_tag(attr);
                ctx.buffer.set_current_tag(tag);

                let start_x = ctx.buffer.get_cursor().pos.x;
                let (_, start_y) = ctx.buffer.cursor_report_pos();
                let fill = TChar::from(map_byte(Codepage::Cp437, ch));

                for line in 0..lines {
                    ctx.buffer.set_cursor_pos(Some(start_x + 1), Some(start_y + line + 1));
                    ctx.buffer.fill_line_with_character(start_x, start_x + cols.saturating_sub(1), fill.clone());
                }
                ctx.buffer.set_cursor_pos(Some(start_x + 1), Some(start_y + 1));
                Status::NoCharYet
            }
            _ => Status::NoCharYet,
        }
    }

    fn write_repeated(ctx: &mut Terminal, ch: u8, count: u8) -> Status {
        if count == 0 {
            return Status::NoCharYet;
        }

        if ch < 0x20 {
            let mut produced = Vec::new();
            for _ in 0..count {
                if let Status::OneChar(out) = dispatch_c0_control(ctx, ch) {
                    produced.push(out);
                }
            }
            return if produced.is_empty() { Status::NoCharYet } else { Status::ManyChars(produced) };
        }

        let tchar = TChar::from(map_byte(Codepage::Cp437, ch));
        let text: Vec<TChar> = std::iter::repeat(tchar).take(usize::from(count)).collect();
        ctx.buffer.insert_text(&text);
        Status::ManyChars(vec![TerminalOutput::Data(vec![ch; usize::from(count)])])
    }
}

impl Parser for AvatarParser {
    fn feed_byte(&mut self, ctx: &mut Terminal, byte: u8) -> Status {
        match std::mem::take(&mut self.state) {
            ScanState::Ground => {
                if self.ansi_fallback.is_some() {
                    return self.after_ansi_fallback(ctx, byte);
                }
                self.ground(ctx, byte)
            }
            ScanState::AfterCtrlV => self.after_ctrl_v(ctx, byte),
            ScanState::NeedParams { cmd, arity, mut collected } => {
                collected.push(byte);
                if collected.len() < usize::from(arity) {
                    self.state = ScanState::NeedParams { cmd, arity, collected };
                    Status::NoCharYet
                } else {
                    self.run_command(ctx, cmd, &collected)
                }
            }
            ScanState::SingleCharRle { ch: None } => {
                self.state = ScanState::SingleCharRle { ch: Some(byte) };
                Status::NoCharYet
            }
            ScanState::SingleCharRle { ch: Some(ch) } => Self::write_repeated(ctx, ch, byte),
            ScanState::PatternRleLen => {
                if byte == 0 {
                    Status::NoCharYet
                } else {
                    self.state = ScanState::PatternRleBytes { remaining: byte, collected: Vec::new() };
                    Status::NoCharYet
                }
            }
            ScanState::PatternRleBytes { remaining, mut collected } => {
                collected.push(byte);
                if collected.len() < usize::from(remaining) {
                    self.state = ScanState::PatternRleBytes { remaining, collected };
                    Status::NoCharYet
                } else {
                    self.state = ScanState::PatternRleCount { pattern: collected };
                    Status::NoCharYet
                }
            }
            ScanState::PatternRleCount { pattern } => {
                let repeat_count = usize::from(byte);
                let mut bytes = Vec::with_capacity(pattern.len() * repeat_count);
                for _ in 0..repeat_count {
                    bytes.extend_from_slice(&pattern);
                }
                ctx.repeat.set(bytes);
                Status::RepeatState
            }
        }
    }

    fn reset(&mut self) {
        self.state = ScanState::Ground;
        *self.ansi_fallback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(p: &mut AvatarParser, ctx: &mut Terminal, bytes: &[u8]) -> Status {
        let mut last = Status::NoCharYet;
        for &b in bytes {
            last = p.feed_byte(ctx, b);
        }
        last
    }

    #[test]
    fn single_char_rle_repeats_the_character() {
        let mut ctx = Terminal::new(80, 24);
        let mut p = AvatarParser::default();
        feed(&mut p, &mut ctx, &[0x19, b'A', 5]);
        assert_eq!(ctx.buffer.get_cursor().pos.x, 5);
    }

    #[test]
    fn pattern_rle_expands_via_repeat_buffer() {
        let mut ctx = Terminal::new(80, 24);
        let mut p = AvatarParser::default();
        let status = feed(&mut p, &mut ctx, &[0x16, 0x19, 2, b'X', b'Y', 3]);
        assert_eq!(status, Status::RepeatState);
        assert_eq!(ctx.repeat.take(), vec![b'X', b'Y', b'X', b'Y', b'X', b'Y']);
    }

    #[test]
    fn cga_attribute_sets_fg_bg_and_bold() {
        let mut ctx = Terminal::new(80, 24);
        let mut p = AvatarParser::default();
        // fg=red(4)|bold(8) = 0x0C, bg=blue(1)<<4 = 0x10 -> attr 0x1C
        feed(&mut p, &mut ctx, &[0x16, 0x01, 0x1C]);
        let tag = ctx.buffer.current_tag();
        assert_eq!(tag.colors.color, TerminalColor::BrightRed);
        assert_eq!(tag.colors.background_color, TerminalColor::Blue);
        assert_eq!(tag.font_weight, FontWeight::Bold);
    }
}
