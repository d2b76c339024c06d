// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared emulator state and the protocol-agnostic dispatcher.
//!
//! `Terminal` is the explicit context threaded through every parser: the
//! screen, the answerback channel, and the bookkeeping (`Pending`,
//! `RepeatBuffer`, `EmulatorStatus`) that every protocol needs but none of
//! them owns exclusively. `Emulation` is a sum type over the parser
//! identities; dispatch is a `match`, not a function-pointer table.

use termemu_buffer::buffer::Buffer;

use crate::ansi::TerminalOutput;
use crate::atascii::AtasciiParser;
use crate::avatar::AvatarParser;
use crate::debug_mode::DebugParser;
use crate::petscii::PetsciiParser;
use crate::tty::TtyParser;
use crate::vt100::Vt100Parser;
use crate::vt52::Vt52Parser;

/// Default capacity of a [`Pending`] buffer, per spec.md §3 ("≥ 128 bytes").
pub const DEFAULT_PENDING_CAPACITY: usize = 256;

/// Fixed-capacity accumulator for an in-progress escape sequence. On
/// overflow it resets rather than growing, so adversarial input can't drive
/// unbounded memory use.
#[derive(Debug, Clone)]
pub struct Pending {
    bytes: Vec<u8>,
    capacity: usize,
}

impl Pending {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity.min(DEFAULT_PENDING_CAPACITY)),
            capacity,
        }
    }

    /// Appends `byte`. Returns `false` (and resets to empty) if this would
    /// reach capacity, per spec.md §4.7's "Pending reaches capacity minus
    /// one" defensive reset.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.bytes.len() + 1 >= self.capacity {
            self.bytes.clear();
            return false;
        }
        self.bytes.push(byte);
        true
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Drains and returns the accumulated bytes.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.bytes)
    }
}

impl Default for Pending {
    fn default() -> Self {
        Self::new(DEFAULT_PENDING_CAPACITY)
    }
}

/// Bytes a parser (AVATAR's pattern RLE) asks the dispatcher to re-feed
/// through the same parser. Owned by `Terminal`, not by the parser, since
/// the dispatcher is what drains and re-drives it.
#[derive(Debug, Clone, Default)]
pub struct RepeatBuffer {
    bytes: Vec<u8>,
}

impl RepeatBuffer {
    pub fn set(&mut self, bytes: Vec<u8>) {
        self.bytes = bytes;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.bytes)
    }
}

/// VT52/VT100 application-vs-numeric keypad state (§3, §4.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeypadMode {
    #[default]
    Numeric,
    Application,
}

/// Which byte sequence cursor keys emit (§4.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrowKeyMode {
    #[default]
    Ansi,
    Vt100Application,
    Vt52,
}

/// Mouse reporting mode (§4.5), off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseProtocol {
    #[default]
    None,
    X10,
    Normal,
    ButtonEvent,
    AnyEvent,
}

/// Mouse report wire encoding (§4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseEncoding {
    #[default]
    X10,
    Utf8,
    Sgr,
}

/// Protocol-level flags every parser reads and writes, per spec.md §3's
/// "Emulator status" record. Cursor position, scroll region, and current
/// attribute already live on `Buffer`; this holds the flags that sit above
/// the screen model.
#[derive(Debug, Clone)]
pub struct EmulatorStatus {
    pub insert_mode: bool,
    pub line_wrap: bool,
    pub origin_mode: bool,
    pub reverse_video: bool,
    pub visible_cursor: bool,
    pub new_line_mode: bool,
    pub keypad_mode: KeypadMode,
    pub arrow_key_mode: ArrowKeyMode,
    pub vt52_graphics_mode: bool,
    pub petscii_uppercase: bool,
    pub petscii_reverse: bool,
    pub mouse_protocol: MouseProtocol,
    pub mouse_encoding: MouseEncoding,
    pub bracketed_paste: bool,
}

impl Default for EmulatorStatus {
    fn default() -> Self {
        Self {
            insert_mode: false,
            line_wrap: true,
            origin_mode: false,
            reverse_video: false,
            visible_cursor: true,
            new_line_mode: false,
            keypad_mode: KeypadMode::default(),
            arrow_key_mode: ArrowKeyMode::default(),
            vt52_graphics_mode: false,
            petscii_uppercase: true,
            petscii_reverse: false,
            mouse_protocol: MouseProtocol::default(),
            mouse_encoding: MouseEncoding::default(),
            bracketed_paste: false,
        }
    }
}

/// Shared C0 control handling (CR/LF/BS/BEL) for protocols whose command
/// tables can produce a bare control byte outside the normal input stream
/// (AVATAR's single-char RLE, PETSCII/ATASCII's control-code range), so each
/// doesn't reimplement it.
#[must_use]
pub fn dispatch_c0_control(ctx: &mut Terminal, byte: u8) -> Status {
    match byte {
        0x08 => {
            ctx.buffer.handle_backspace();
            Status::OneChar(TerminalOutput::Backspace)
        }
        0x0A => {
            ctx.buffer.handle_lf();
            Status::OneChar(TerminalOutput::Newline)
        }
        0x0D => {
            ctx.buffer.handle_cr();
            Status::OneChar(TerminalOutput::CarriageReturn)
        }
        _ => Status::NoCharYet,
    }
}

/// The explicit context threaded through every parser: the screen, the
/// answerback channel, and the shared bookkeeping described in spec.md §3.
/// Replaces the globals (`q_status`, `q_emul_buffer`, ...) the design this
/// crate generalises from mutated directly.
pub struct Terminal {
    pub buffer: Buffer,
    pub status: EmulatorStatus,
    pub pending: Pending,
    pub repeat: RepeatBuffer,
    pub outgoing: Vec<u8>,
    pub answerback: Vec<u8>,
    pub bytes_received: u64,
}

impl Terminal {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            status: EmulatorStatus::default(),
            pending: Pending::default(),
            repeat: RepeatBuffer::default(),
            outgoing: Vec::new(),
            answerback: Vec::new(),
            bytes_received: 0,
        }
    }

    /// Resets every piece of shared state to its emulation-independent
    /// default, per spec.md §3's "Lifetimes" / reset description. Parser
    /// local state is reset separately, by `Emulation::reset`.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.repeat.take();
        self.status = EmulatorStatus::default();
        self.buffer.set_current_tag(termemu_common::buffer_states::format_tag::FormatTag::default());
    }
}

/// Outcome of [`Emulation::feed_byte`]. Unlike spec.md §4.7's C-shaped
/// `feed_byte(b) -> Status` plus out-parameter plus "call again with a
/// dummy byte until NO_CHAR_YET", the cells produced are carried directly
/// in the variant — there's no reason for a caller to re-enter the parser
/// just to drain a queue it can already see.
#[derive(Debug, PartialEq)]
pub enum Status {
    /// The byte was consumed into `Pending`; nothing is ready to render.
    NoCharYet,
    /// Exactly one output was produced.
    OneChar(TerminalOutput),
    /// More than one output was produced (a literal run, an RLE expansion,
    /// ANSI fallback output).
    ManyChars(Vec<TerminalOutput>),
    /// The parser populated `Terminal::repeat`; the dispatcher must drain
    /// and re-feed it through the same parser before continuing.
    RepeatState,
}

/// One method per spec.md §4.7; implemented once per protocol and combined
/// into the `Emulation` sum type below instead of a vtable or
/// integer-keyed function-pointer table.
pub trait Parser {
    fn feed_byte(&mut self, ctx: &mut Terminal, byte: u8) -> Status;

    /// Resets local scan state to its initial value. Called by RIS/
    /// `reset_emulation` and on emulation switch.
    fn reset(&mut self);

    /// Whether this protocol owns its own CR/LF handling (spec.md §4.7).
    /// When `false`, `Terminal::feed_byte` intercepts `\r`/`\n` before the
    /// parser ever sees them.
    fn owns_cr_lf(&self) -> bool {
        true
    }
}

/// The ~10 protocols this core understands, as a closed sum type (per
/// spec.md §9's parser-polymorphism design note) rather than a dynamically
/// dispatched trait object.
pub enum Emulation {
    Tty(TtyParser),
    Vt100(Vt100Parser),
    Avatar(AvatarParser),
    Vt52(Vt52Parser),
    Petscii(PetsciiParser),
    Atascii(AtasciiParser),
    Debug(DebugParser),
}

impl Emulation {
    #[must_use]
    pub fn feed_byte(&mut self, ctx: &mut Terminal, byte: u8) -> Status {
        ctx.bytes_received += 1;

        if !self.owns_cr_lf() {
            match byte {
                b'\r' => {
                    ctx.buffer.handle_cr();
                    return Status::OneChar(TerminalOutput::CarriageReturn);
                }
                b'\n' => {
                    ctx.buffer.handle_lf();
                    return Status::OneChar(TerminalOutput::Newline);
                }
                _ => {}
            }
        }

        let status = match self {
            Self::Tty(p) => p.feed_byte(ctx, byte),
            Self::Vt100(p) => p.feed_byte(ctx, byte),
            Self::Avatar(p) => p.feed_byte(ctx, byte),
            Self::Vt52(p) => p.feed_byte(ctx, byte),
            Self::Petscii(p) => p.feed_byte(ctx, byte),
            Self::Atascii(p) => p.feed_byte(ctx, byte),
            Self::Debug(p) => p.feed_byte(ctx, byte),
        };

        if matches!(status, Status::RepeatState) {
            self.drive_repeat_buffer(ctx)
        } else {
            status
        }
    }

    /// Drains `ctx.repeat` and re-feeds every byte through `self`, per
    /// spec.md §4.7. Sub-results are collected rather than individually
    /// flushed, since this crate's `Status` already carries its payload.
    fn drive_repeat_buffer(&mut self, ctx: &mut Terminal) -> Status {
        let bytes = ctx.repeat.take();
        let mut produced = Vec::new();

        for b in bytes {
            match self.feed_byte(ctx, b) {
                Status::OneChar(out) => produced.push(out),
                Status::ManyChars(outs) => produced.extend(outs),
                Status::NoCharYet | Status::RepeatState => {}
            }
        }

        if produced.is_empty() {
            Status::NoCharYet
        } else {
            Status::ManyChars(produced)
        }
    }

    pub fn reset(&mut self) {
        match self {
            Self::Tty(p) => p.reset(),
            Self::Vt100(p) => p.reset(),
            Self::Avatar(p) => p.reset(),
            Self::Vt52(p) => p.reset(),
            Self::Petscii(p) => p.reset(),
            Self::Atascii(p) => p.reset(),
            Self::Debug(p) => p.reset(),
        }
    }

    #[must_use]
    pub const fn owns_cr_lf(&self) -> bool {
        match self {
            Self::Tty(_) | Self::Vt52(_) => false,
            Self::Vt100(_) | Self::Avatar(_) | Self::Petscii(_) | Self::Atascii(_) | Self::Debug(_) => true,
        }
    }
}
