// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Adapts the existing [`crate::ansi::TermemuAnsiParser`] (VT100/VT220) to
//! the [`Parser`] trait so it can sit in the [`crate::terminal::Emulation`]
//! sum type alongside the newer protocols.

use crate::ansi::{TerminalOutput, TermemuAnsiParser};
use crate::dispatch;
use crate::terminal::{Parser, Status, Terminal};

/// `linux_extensions` gates the Linux-console/xterm deltas over plain
/// VT220 that SPEC_FULL §4.5 describes as layered on top of the same state
/// machine rather than a separate emulation: currently just DEL (0x7F)
/// being treated as backspace instead of needing ^H.
#[derive(Debug, Default)]
pub struct Vt100Parser {
    inner: TermemuAnsiParser,
    linux_extensions: bool,
}

impl Vt100Parser {
    #[must_use]
    pub const fn new(linux_extensions: bool) -> Self {
        Self {
            inner: TermemuAnsiParser::new(),
            linux_extensions,
        }
    }
}

impl Parser for Vt100Parser {
    fn feed_byte(&mut self, ctx: &mut Terminal, byte: u8) -> Status {
        if self.linux_extensions && byte == 0x7F {
            ctx.buffer.handle_backspace();
            return Status::OneChar(TerminalOutput::Backspace);
        }

        let outputs = self.inner.push(&[byte]);

        for out in &outputs {
            dispatch::apply(&mut ctx.buffer, out, &mut ctx.outgoing, &ctx.answerback);
            dispatch::apply_status(&mut ctx.status, out);
        }

        let mut iter = outputs.into_iter();
        match (iter.next(), iter.next()) {
            (None, _) => Status::NoCharYet,
            (Some(first), None) => Status::OneChar(first),
            (Some(first), Some(second)) => {
                let mut all = vec![first, second];
                all.extend(iter);
                Status::ManyChars(all)
            }
        }
    }

    fn reset(&mut self) {
        self.inner = TermemuAnsiParser::new();
    }
}
