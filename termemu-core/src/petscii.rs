// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! PETSCII (Commodore 64/128): control codes in 0x00-0x1F and 0x80-0x9F
//! select colour, reverse video, and case mode instead of driving an escape
//! grammar. There is no CSI; colour is "the current pen colour" applied to
//! every subsequently printed cell until changed.

use termemu_common::buffer_states::tchar::TChar;
use termemu_common::codepage::{Codepage, map_byte};
use termemu_common::colors::TerminalColor;

use crate::ansi::TerminalOutput;
use crate::terminal::{Parser, Status, Terminal, dispatch_c0_control};

#[derive(Debug, Clone)]
pub struct PetsciiParser {
    /// "Pen" colour set by the last colour-change control code.
    color: TerminalColor,
}

impl Default for PetsciiParser {
    fn default() -> Self {
        Self {
            color: TerminalColor::White,
        }
    }
}

impl PetsciiParser {
    fn set_print_colors(&self, ctx: &mut Terminal) {
        let mut tag = ctx.buffer.current_tag();
        if ctx.status.petscii_reverse {
            tag.colors.set_color(TerminalColor::White);
            tag.colors.set_background_color(self.color);
        } else {
            tag.colors.set_color(self.color);
            tag.colors.set_background_color(TerminalColor::DefaultBackground);
        }
        ctx.buffer.set_current_tag(tag);
    }
}

impl Parser for PetsciiParser {
    fn feed_byte(&mut self, ctx: &mut Terminal, byte: u8) -> Status {
        match byte {
            0x0D | 0x0A | 0x08 => dispatch_c0_control(ctx, byte),
            0x93 => {
                ctx.buffer.erase_display();
                ctx.buffer.set_cursor_pos(Some(1), Some(1));
                Status::OneChar(TerminalOutput::ClearDisplay)
            }
            0x13 => {
                ctx.buffer.set_cursor_pos(Some(1), Some(1));
                Status::OneChar(TerminalOutput::SetCursorPos { x: Some(1), y: Some(1) })
            }
            0x11 => {
                ctx.buffer.move_cursor_relative(None, Some(1));
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: None, y: Some(1) })
            }
            0x91 => {
                ctx.buffer.move_cursor_relative(None, Some(-1));
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: None, y: Some(-1) })
            }
            0x1D => {
                ctx.buffer.move_cursor_relative(Some(1), None);
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: Some(1), y: None })
            }
            0x9D => {
                ctx.buffer.move_cursor_relative(Some(-1), None);
                Status::OneChar(TerminalOutput::SetCursorPosRel { x: Some(-1), y: None })
            }
            0x12 => {
                ctx.status.petscii_reverse = true;
                Status::NoCharYet
            }
            0x92 => {
                ctx.status.petscii_reverse = false;
                Status::NoCharYet
            }
            0x0E => {
                ctx.status.petscii_uppercase = false;
                Status::NoCharYet
            }
            0x8E => {
                ctx.status.petscii_uppercase = true;
                Status::NoCharYet
            }
            0x05 => {
                self.color = TerminalColor::White;
                Status::NoCharYet
            }
            0x1C => {
                self.color = TerminalColor::Red;
                Status::NoCharYet
            }
            0x1E => {
                self.color = TerminalColor::Green;
                Status::NoCharYet
            }
            0x1F => {
                self.color = TerminalColor::Blue;
                Status::NoCharYet
            }
            0x81 => {
                self.color = TerminalColor::BrightYellow;
                Status::NoCharYet
            }
            0x90 => {
                self.color = TerminalColor::Black;
                Status::NoCharYet
            }
            0x96 => {
                self.color = TerminalColor::BrightRed;
                Status::NoCharYet
            }
            0x99 => {
                self.color = TerminalColor::BrightGreen;
                Status::NoCharYet
            }
            0x9A => {
                self.color = TerminalColor::BrightBlue;
                Status::NoCharYet
            }
            0x9C => {
                self.color = TerminalColor::Magenta;
                Status::NoCharYet
            }
            0x9E => {
                self.color = TerminalColor::Yellow;
                Status::NoCharYet
            }
            0x9F => {
                self.color = TerminalColor::Cyan;
                Status::NoCharYet
            }
            0x00..=0x1F | 0x80..=0x9F => Status::NoCharYet,
            _ => {
                let ch = map_byte(
                    Codepage::Petscii {
                        uppercase: ctx.status.petscii_uppercase,
                        reverse: ctx.status.petscii_reverse,
                    },
                    byte,
                );
                self.set_print_colors(ctx);
                ctx.buffer.insert_text(&[TChar::from(ch)]);
                Status::OneChar(TerminalOutput::Data(vec![byte]))
            }
        }
    }

    fn reset(&mut self) {
        self.color = TerminalColor::White;
    }
}
