// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! ATASCII (Atari 8-bit): like PETSCII, a control-code-driven protocol with
//! no escape grammar. Its defining quirk is that end-of-line is its own
//! code point (0x9B), not CR/LF.

use termemu_common::buffer_states::tchar::TChar;
use termemu_common::codepage::{Codepage, map_byte};

use crate::ansi::TerminalOutput;
use crate::terminal::{Parser, Status, Terminal};

#[derive(Debug, Clone, Default)]
pub struct AtasciiParser;

impl Parser for AtasciiParser {
    fn feed_byte(&mut self, ctx: &mut Terminal, byte: u8) -> Status {
        match byte {
            0x9B => {
                ctx.buffer.handle_cr();
                ctx.buffer.handle_lf();
                Status::OneChar(TerminalOutput::Newline)
            }
            0x7D => {
                ctx.buffer.erase_display();
                ctx.buffer.set_cursor_pos(Some(1), Some(1));
                Status::OneChar(TerminalOutput::ClearDisplay)
            }
            0xFE => {
                ctx.buffer.handle_backspace();
                Status::OneChar(TerminalOutput::Backspace)
            }
            0x1C => {
                ctx.buffer.move_cursor_relative(None, Some(-1));
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: None, y: Some(-1) })
            }
            0x1D => {
                ctx.buffer.move_cursor_relative(None, Some(1));
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: None, y: Some(1) })
            }
            0x1E => {
                ctx.buffer.move_cursor_relative(Some(-1), None);
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: Some(-1), y: None })
            }
            0x1F => {
                ctx.buffer.move_cursor_relative(Some(1), None);
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: Some(1), y: None })
            }
            0x00..=0x1F => Status::NoCharYet,
            _ => {
                let ch = map_byte(Codepage::Atascii, byte);
                ctx.buffer.insert_text(&[TChar::from(ch)]);
                Status::OneChar(TerminalOutput::Data(vec![byte]))
            }
        }
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eol_marker_performs_cr_and_lf() {
        let mut ctx = Terminal::new(40, 24);
        let mut p = AtasciiParser;
        ctx.buffer.insert_text(&[TChar::from('x')]);
        p.feed_byte(&mut ctx, 0x9B);
        assert_eq!(ctx.buffer.get_cursor().pos.x, 0);
        assert_eq!(ctx.buffer.get_cursor().pos.y, 1);
    }

    #[test]
    fn prints_via_atascii_codepage() {
        let mut ctx = Terminal::new(40, 24);
        let mut p = AtasciiParser;
        let status = p.feed_byte(&mut ctx, b'A');
        assert_eq!(status, Status::OneChar(TerminalOutput::Data(vec![b'A'])));
    }
}
