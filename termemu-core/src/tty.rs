// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain ANSI X3.64 TTY: printable bytes only, no escape sequences, no
//! private CR/LF handling. The dispatcher's CR/LF preprocessing does all the
//! work this protocol needs outside of printing.

use termemu_common::buffer_states::tchar::TChar;
use termemu_common::codepage::{Codepage, map_byte};

use crate::ansi::TerminalOutput;
use crate::terminal::{Parser, Status, Terminal};

#[derive(Debug, Clone, Default)]
pub struct TtyParser;

impl Parser for TtyParser {
    fn feed_byte(&mut self, ctx: &mut Terminal, byte: u8) -> Status {
        if byte < 0x20 {
            return Status::NoCharYet;
        }

        let ch = map_byte(Codepage::Ascii, byte);
        ctx.buffer.insert_text(&[TChar::from(ch)]);
        Status::OneChar(TerminalOutput::Data(vec![byte]))
    }

    fn reset(&mut self) {}

    fn owns_cr_lf(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_ascii_and_ignores_other_controls() {
        let mut ctx = Terminal::new(10, 3);
        let mut p = TtyParser::default();
        assert_eq!(p.feed_byte(&mut ctx, b'h'), Status::OneChar(TerminalOutput::Data(vec![b'h'])));
        assert_eq!(p.feed_byte(&mut ctx, 0x07), Status::NoCharYet);
        assert_eq!(ctx.buffer.get_cursor().pos.x, 1);
    }
}
