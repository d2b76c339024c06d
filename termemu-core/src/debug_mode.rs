// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! DEBUG: a diagnostic pass-through that renders every incoming byte as a
//! two-digit hex dump instead of interpreting it, for inspecting a
//! connection that's speaking a protocol nothing else here recognises. CR/LF
//! still move the cursor, so the dump stays readable line by line.

use termemu_common::buffer_states::tchar::TChar;

use crate::ansi::TerminalOutput;
use crate::terminal::{Parser, Status, Terminal};

#[derive(Debug, Clone, Default)]
pub struct DebugParser;

impl Parser for DebugParser {
    fn feed_byte(&mut self, ctx: &mut Terminal, byte: u8) -> Status {
        match byte {
            0x0D => {
                ctx.buffer.handle_cr();
                return Status::OneChar(TerminalOutput::CarriageReturn);
            }
            0x0A => {
                ctx.buffer.handle_lf();
                return Status::OneChar(TerminalOutput::Newline);
            }
            _ => {}
        }

        let text: Vec<TChar> = format!("{byte:02X} ").chars().map(TChar::from).collect();
        ctx.buffer.insert_text(&text);
        Status::ManyChars(vec![TerminalOutput::Data(vec![byte])])
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_byte_as_two_hex_digits() {
        let mut ctx = Terminal::new(40, 24);
        let mut p = DebugParser;
        p.feed_byte(&mut ctx, 0xAB);
        assert_eq!(ctx.buffer.get_cursor().pos.x, 3);
    }
}
