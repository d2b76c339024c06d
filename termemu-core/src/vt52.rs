// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! VT52: a much smaller escape grammar than VT100/VT220, direct-cursor-
//! addressing via two raw coordinate bytes rather than decimal parameters,
//! and (per terminal configuration) an optional fallback into ANSI `CSI...m`
//! for colour that real VT52s never had.
//!
//! Open Question (spec.md §9): DECID (`ESC Z`) is answered as `ESC / K`,
//! identifying as a VT52 with no copier.

use termemu_common::buffer_states::tchar::TChar;
use termemu_common::codepage::{Codepage, map_byte};

use crate::ansi::TerminalOutput;
use crate::ansi_components::csi_commands::sgr::ansi_parser_inner_csi_finished_sgr_ansi;
use crate::terminal::{Parser, Status, Terminal};

/// `ESC / K`: identify as a VT52 with no graphics copier, per the Open
/// Question decision recorded in spec.md §9.
pub const DECID_RESPONSE: &[u8] = b"\x1b/K";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum ScanState {
    #[default]
    Ground,
    Escape,
    DirectRow,
    DirectCol(u8),
    /// Diverted into `CSI ... m` for the optional-SGR variant. Accumulates
    /// parameter bytes until the terminating `m`.
    AnsiSgr(Vec<u8>),
}

#[derive(Debug, Clone)]
pub struct Vt52Parser {
    state: ScanState,
    /// Whether `ESC [ ... m` is recognised as an SGR fallback. Mirrors
    /// `Vt52Config::color`; real VT52s had no colour at all.
    color: bool,
}

impl Default for Vt52Parser {
    fn default() -> Self {
        Self {
            state: ScanState::Ground,
            color: true,
        }
    }
}

impl Vt52Parser {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self {
            state: ScanState::Ground,
            color,
        }
    }

    fn escape(&mut self, ctx: &mut Terminal, byte: u8) -> Status {
        match byte {
            b'A' => {
                ctx.buffer.move_cursor_relative(None, Some(-1));
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: None, y: Some(-1) })
            }
            b'B' => {
                ctx.buffer.move_cursor_relative(None, Some(1));
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: None, y: Some(1) })
            }
            b'C' => {
                ctx.buffer.move_cursor_relative(Some(1), None);
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: Some(1), y: None })
            }
            b'D' => {
                ctx.buffer.move_cursor_relative(Some(-1), None);
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: Some(-1), y: None })
            }
            b'H' => {
                ctx.buffer.set_cursor_pos(Some(1), Some(1));
                Status::OneChar(TerminalOutput::SetCursorPos { x: Some(1), y: Some(1) })
            }
            b'I' => {
                ctx.buffer.move_cursor_relative(None, Some(-1));
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: None, y: Some(-1) })
            }
            b'J' => {
                ctx.buffer.erase_display_to_end();
                Status::OneChar(TerminalOutput::ClearDisplayfromCursortoEndofDisplay)
            }
            b'K' => {
                ctx.buffer.erase_line_to_end();
                Status::OneChar(TerminalOutput::ClearLineForwards)
            }
            b'Y' => {
                self.state = ScanState::DirectRow;
                Status::NoCharYet
            }
            b'Z' => {
                ctx.outgoing.extend_from_slice(DECID_RESPONSE);
                Status::NoCharYet
            }
            b'=' => {
                ctx.status.keypad_mode = crate::terminal::KeypadMode::Application;
                Status::OneChar(TerminalOutput::ApplicationKeypadMode)
            }
            b'>' => {
                ctx.status.keypad_mode = crate::terminal::KeypadMode::Numeric;
                Status::OneChar(TerminalOutput::NormalKeypadMode)
            }
            b'F' => {
                ctx.status.vt52_graphics_mode = true;
                Status::NoCharYet
            }
            b'G' => {
                ctx.status.vt52_graphics_mode = false;
                Status::NoCharYet
            }
            b'[' if self.color => {
                self.state = ScanState::AnsiSgr(Vec::new());
                Status::NoCharYet
            }
            _ => Status::NoCharYet,
        }
    }

    fn finish_sgr(&mut self, ctx: &mut Terminal, params: &[u8]) -> Status {
        self.state = ScanState::Ground;

        let mut outputs = Vec::new();
        let _ = ansi_parser_inner_csi_finished_sgr_ansi(params, &mut outputs);

        for out in &outputs {
            if let TerminalOutput::Sgr(sgr) = out {
                ctx.buffer.apply_sgr(sgr);
            }
        }

        if outputs.is_empty() {
            Status::NoCharYet
        } else {
            Status::ManyChars(outputs)
        }
    }
}

impl Parser for Vt52Parser {
    fn feed_byte(&mut self, ctx: &mut Terminal, byte: u8) -> Status {
        match std::mem::take(&mut self.state) {
            ScanState::Ground => {
                if byte == 0x1B {
                    self.state = ScanState::Escape;
                    return Status::NoCharYet;
                }

                let ch = map_byte(Codepage::Vt52SpecialGraphics, byte);
                if ctx.status.vt52_graphics_mode {
                    ctx.buffer.insert_text(&[TChar::from(ch)]);
                } else {
                    ctx.buffer.insert_text(&[TChar::from(map_byte(Codepage::Ascii, byte))]);
                }
                Status::OneChar(TerminalOutput::Data(vec![byte]))
            }
            ScanState::Escape => {
                self.state = ScanState::Ground;
                self.escape(ctx, byte)
            }
            ScanState::DirectRow => {
                self.state = ScanState::DirectCol(byte);
                Status::NoCharYet
            }
            ScanState::DirectCol(row) => {
                self.state = ScanState::Ground;
                let row = usize::from(row.saturating_sub(0x20));
                let col = usize::from(byte.saturating_sub(0x20));
                ctx.buffer.set_cursor_pos(Some(col + 1), Some(row + 1));
                Status::OneChar(TerminalOutput::SetCursorPos { x: Some(col + 1), y: Some(row + 1) })
            }
            ScanState::AnsiSgr(mut params) => {
                if byte == b'm' {
                    self.finish_sgr(ctx, &params)
                } else {
                    params.push(byte);
                    self.state = ScanState::AnsiSgr(params);
                    Status::NoCharYet
                }
            }
        }
    }

    fn reset(&mut self) {
        self.state = ScanState::Ground;
    }

    fn owns_cr_lf(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_cursor_addressing_uses_raw_coordinate_bytes() {
        let mut ctx = Terminal::new(80, 24);
        let mut p = Vt52Parser::default();
        for b in [0x1B, b'Y', 0x20 + 5, 0x20 + 10] {
            p.feed_byte(&mut ctx, b);
        }
        assert_eq!(ctx.buffer.get_cursor().pos.y, 5);
        assert_eq!(ctx.buffer.get_cursor().pos.x, 10);
    }

    #[test]
    fn decid_answers_esc_slash_k() {
        let mut ctx = Terminal::new(80, 24);
        let mut p = Vt52Parser::default();
        p.feed_byte(&mut ctx, 0x1B);
        p.feed_byte(&mut ctx, b'Z');
        assert_eq!(ctx.outgoing, DECID_RESPONSE);
    }

    #[test]
    fn optional_sgr_fallback_sets_bold() {
        let mut ctx = Terminal::new(80, 24);
        let mut p = Vt52Parser::new(true);
        for b in *b"\x1b[1m" {
            p.feed_byte(&mut ctx, b);
        }
        assert_eq!(
            ctx.buffer.current_tag().font_weight,
            termemu_common::buffer_states::fonts::FontWeight::Bold
        );
    }

    #[test]
    fn does_not_own_cr_lf() {
        assert!(!Vt52Parser::default().owns_cr_lf());
    }
}
