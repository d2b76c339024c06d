// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Applies parsed [`TerminalOutput`] values to a [`Buffer`].
//!
//! This is the seam between the protocol parsers in this crate and the
//! grid model in `termemu-buffer`: parsers never touch a `Buffer`
//! directly, they only ever emit `TerminalOutput`.

use termemu_buffer::buffer::Buffer;
use termemu_common::buffer_states::mode::Mode;
use termemu_common::buffer_states::modes::mouse::MouseTrack;
use termemu_common::buffer_states::modes::rl_bracket::RlBracket;
use termemu_common::buffer_states::tchar::TChar;

use crate::ansi::TerminalOutput;
use crate::terminal::{EmulatorStatus, MouseEncoding, MouseProtocol};

/// Primary Device Attributes (DA1) response for `ESC [ c`, per SPEC_FULL §4.4:
/// VT220 with the 62 terminal class plus selective-erase/user-defined-keys/
/// national-replacement-character-set/technical-character-set/user-windows/
/// ANSI-colour/horizontal-scrolling capability bits.
pub const DEFAULT_PRIMARY_DA_RESPONSE: &[u8] = b"\x1b[?62;1;2;6;7;8;9c";

/// Secondary Device Attributes (DA2) response for `ESC [ > c` / `ESC [ > Ps c`.
pub const DEFAULT_SECONDARY_DA_RESPONSE: &[u8] = b"\x1b[>0;100;0c";

/// `XTVERSION` (`ESC [ > c` with no digits) response, a DCS string per xterm's
/// own convention.
pub const XT_VERSION_RESPONSE: &[u8] = b"\x1bP>|termemu(0.1.0)\x1b\\";

/// Apply a single parsed terminal action to `buffer`. Bytes the host must
/// transmit back down the wire (DA/DSR responses, ENQ answerback) are
/// appended to `outgoing` rather than returned, so a caller accumulating a
/// batch via `apply_all` gets one contiguous byte run instead of having to
/// stitch together a `Vec<Vec<u8>>`.
pub fn apply(buffer: &mut Buffer, output: &TerminalOutput, outgoing: &mut Vec<u8>, answerback: &[u8]) {
    match output {
        TerminalOutput::Data(bytes) => insert_bytes(buffer, bytes),
        TerminalOutput::SetCursorPos { x, y } => buffer.set_cursor_pos(*x, *y),
        TerminalOutput::SetCursorPosRel { x, y } => buffer.move_cursor_relative(*x, *y),
        TerminalOutput::CarriageReturn => buffer.handle_cr(),
        TerminalOutput::Newline => buffer.handle_lf(),
        TerminalOutput::Backspace => buffer.handle_backspace(),
        TerminalOutput::ClearDisplayfromCursortoEndofDisplay => buffer.erase_display_to_end(),
        TerminalOutput::ClearDisplayfromStartofDisplaytoCursor => {
            buffer.erase_display_from_start();
        }
        TerminalOutput::ClearDisplay => buffer.erase_display(),
        TerminalOutput::ClearScrollbackandDisplay => buffer.erase_scrollback_and_display(),
        TerminalOutput::ClearLineForwards => buffer.erase_line_to_end(),
        TerminalOutput::ClearLineBackwards => buffer.erase_line_to_start(),
        TerminalOutput::ClearLine => buffer.erase_line(),
        TerminalOutput::InsertLines(n) => buffer.insert_lines(*n),
        TerminalOutput::DeleteLines(n) => buffer.delete_lines(*n),
        TerminalOutput::Delete(n) => buffer.delete_chars(*n),
        TerminalOutput::InsertSpaces(n) => buffer.insert_spaces(*n),
        TerminalOutput::Sgr(sgr) => buffer.apply_sgr(sgr),
        TerminalOutput::Mode(mode) => apply_mode(buffer, mode),
        TerminalOutput::SetTopAndBottomMargins {
            top_margin,
            bottom_margin,
        } => buffer.set_scroll_region(*top_margin, *bottom_margin),

        // Answer-back channel, per SPEC_FULL §6.2: ENQ, DA and DSR are the
        // three occasions the core talks back to the host.
        TerminalOutput::RequestDeviceAttributes => {
            outgoing.extend_from_slice(DEFAULT_PRIMARY_DA_RESPONSE);
        }
        TerminalOutput::RequestSecondaryDeviceAttributes { .. } => {
            outgoing.extend_from_slice(DEFAULT_SECONDARY_DA_RESPONSE);
        }
        TerminalOutput::RequestXtVersion => outgoing.extend_from_slice(XT_VERSION_RESPONSE),
        TerminalOutput::CursorReport => {
            let (x, y) = buffer.cursor_report_pos();
            outgoing.extend_from_slice(format!("\x1b[{};{}R", y + 1, x + 1).as_bytes());
        }
        TerminalOutput::Enq => outgoing.extend_from_slice(answerback),

        // A headless text buffer has no separate framebuffer/cursor-save
        // slot, and no window manager to talk to — these are acknowledged by
        // the parser but have nothing to mutate here.
        _ => {}
    }
}

/// Apply a batch of parsed actions in order, accumulating any outgoing bytes.
pub fn apply_all(buffer: &mut Buffer, outputs: &[TerminalOutput], outgoing: &mut Vec<u8>, answerback: &[u8]) {
    for output in outputs {
        apply(buffer, output, outgoing, answerback);
    }
}

fn insert_bytes(buffer: &mut Buffer, bytes: &[u8]) {
    let chars = TChar::from_vec(bytes).unwrap_or_else(|_| {
        // A `Data` chunk can end mid-codepoint when it's split across reads;
        // fall back to treating the raw bytes as individual cells rather
        // than dropping the chunk.
        bytes.iter().map(|&b| TChar::from(b)).collect()
    });
    buffer.insert_text(&chars);
}

/// Apply the subset of `TerminalOutput` that updates protocol-level flags
/// (mouse reporting, bracketed paste) rather than the screen grid, per
/// SPEC_FULL §4.5's Linux/xterm extensions over the VT220 mode set. Kept
/// separate from `apply` because those flags live on `EmulatorStatus`, not
/// `Buffer` — callers without a `Terminal` (the six core scenarios, plain
/// `TermemuAnsiParser` use) never need to call this.
pub fn apply_status(status: &mut EmulatorStatus, output: &TerminalOutput) {
    let TerminalOutput::Mode(mode) = output else {
        return;
    };

    match mode {
        Mode::MouseMode(track) => {
            let (protocol, encoding) = mouse_protocol_and_encoding(track);
            status.mouse_protocol = protocol;
            status.mouse_encoding = encoding;
        }
        Mode::BracketedPaste(rl_bracket) => {
            status.bracketed_paste = matches!(rl_bracket, RlBracket::Enabled);
        }
        Mode::Decckm(decckm) => {
            status.arrow_key_mode = if matches!(
                decckm,
                termemu_common::buffer_states::modes::decckm::Decckm::Application
            ) {
                crate::terminal::ArrowKeyMode::Vt100Application
            } else {
                crate::terminal::ArrowKeyMode::Ansi
            };
        }
        _ => {}
    }
}

fn mouse_protocol_and_encoding(track: &MouseTrack) -> (MouseProtocol, MouseEncoding) {
    match track {
        MouseTrack::NoTracking | MouseTrack::Query(_) => (MouseProtocol::None, MouseEncoding::X10),
        MouseTrack::XtMsex10 => (MouseProtocol::X10, MouseEncoding::X10),
        MouseTrack::XtMseX11 => (MouseProtocol::Normal, MouseEncoding::X10),
        MouseTrack::XtMseBtn => (MouseProtocol::ButtonEvent, MouseEncoding::X10),
        MouseTrack::XtMseAny | MouseTrack::XtMseUrXvt => (MouseProtocol::AnyEvent, MouseEncoding::X10),
        MouseTrack::XtMseUtf => (MouseProtocol::Normal, MouseEncoding::Utf8),
        MouseTrack::XtMseSgr | MouseTrack::XtMseSgrPixels => (MouseProtocol::Normal, MouseEncoding::Sgr),
    }
}

fn apply_mode(buffer: &mut Buffer, mode: &Mode) {
    if let Mode::LineFeedMode(lnm) = mode {
        buffer.set_line_feed_mode(matches!(
            lnm,
            termemu_common::buffer_states::modes::lnm::Lnm::NewLine
        ));
    }
}

/// Render the buffer's visible rows as plain text, one line per row.
#[must_use]
pub fn render_visible(buffer: &Buffer) -> String {
    let mut out = String::new();

    for row in buffer.visible_rows() {
        for cell in row.get_characters() {
            if cell.is_continuation() {
                continue;
            }
            out.push_str(&cell.into_utf8());
        }
        out.push('\n');
    }

    out
}
