// Copyright (C) 2026 the termemu authors
// MIT license, see LICENSE file.

use termemu_core::ansi::TerminalOutput;
use termemu_core::ansi::TermemuAnsiParser;

fn push_seq(seq: &str) -> Vec<TerminalOutput> {
    let mut parser = TermemuAnsiParser::default();
    parser.push(seq.as_bytes())
}

#[test]
fn unknown_mode_fallback() {
    let outs = push_seq("\x1b[?9999h");
    println!("unknown enable -> {:?}", outs);
    // parser may mark as Invalid or Mode(Unknown)
    assert!(
        outs.iter()
            .any(|o| matches!(o, TerminalOutput::Mode { .. } | TerminalOutput::Invalid)),
        "Expected Mode or Invalid for unknown private mode, got {:?}",
        outs
    );
}
