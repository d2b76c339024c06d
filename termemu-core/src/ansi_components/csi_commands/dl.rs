// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ansi::TerminalOutput;
use crate::ansi::{ParserOutcome, parse_param_as};
use crate::error::ParserFailures;

/// Delete Lines
///
/// DL deletes a specified number of lines starting at the cursor position,
/// shifting lines below up and leaving blank lines at the bottom of the
/// scroll region.
///
/// ESC [ Pn M
///
/// # Errors
/// Will return an error if the parameter is not a valid number
pub fn ansi_parser_inner_csi_finished_set_position_m_dl(
    params: &[u8],
    output: &mut Vec<TerminalOutput>,
) -> ParserOutcome {
    let Ok(param) = parse_param_as::<usize>(params) else {
        warn!("Invalid dl command");
        output.push(TerminalOutput::Invalid);

        return ParserOutcome::InvalidParserFailure(ParserFailures::UnhandledDLCommand(format!(
            "{params:?}"
        )));
    };

    let param = match param {
        Some(0 | 1) | None => 1,
        Some(n) => n,
    };

    output.push(TerminalOutput::DeleteLines(param));

    ParserOutcome::Finished
}
