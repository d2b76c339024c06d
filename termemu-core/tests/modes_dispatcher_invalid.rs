// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use termemu_core::ansi::TerminalOutput;
use termemu_core::ansi::TermemuAnsiParser;

fn push_seq(seq: &str) -> Vec<TerminalOutput> {
    let mut parser = TermemuAnsiParser::default();
    parser.push(seq.as_bytes())
}

#[test]
fn unknown_private_mode_sequence_is_invalid() {
    let outs = push_seq("\x1b[?9999l");
    println!("unknown private disable -> {:?}", outs);
    assert!(
        outs.iter()
            .any(|o| matches!(o, TerminalOutput::Invalid | TerminalOutput::Mode { .. })),
        "Expected Invalid or Mode for unknown mode"
    );
}
