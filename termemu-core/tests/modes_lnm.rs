// Copyright (C) 2026 the termemu authors
// MIT license, see LICENSE file.

use termemu_core::ansi::*;

fn push_seq(seq: &str) -> Vec<TerminalOutput> {
    let mut parser = TermemuAnsiParser::default();
    parser.push(seq.as_bytes())
}

#[test]
fn lnm_enable_disable() {
    let enable = push_seq("\x1b[20h");
    let disable = push_seq("\x1b[20l");
    println!("LNM enable {:?} disable {:?}", enable, disable);
    assert!(
        enable
            .iter()
            .any(|o| matches!(o, TerminalOutput::Mode { .. }))
    );
    assert!(
        disable
            .iter()
            .any(|o| matches!(o, TerminalOutput::Mode { .. }))
    );
}
