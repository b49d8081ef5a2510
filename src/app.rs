//! The read-parse-execute loop

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{TallyError, TallyResult};
use crate::ledger::Ledger;
use crate::parser::parse_command;
use crate::ui::Ui;

/// Read commands from `input` until `end` or end of input
///
/// Invalid commands and missing entries are reported through `ui` and the
/// loop carries on. Only I/O failures end it early.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    ui: &mut Ui<W>,
    ledger: &mut Ledger,
) -> TallyResult<()> {
    ui.print_welcome()?;

    let mut buf = Vec::new();
    loop {
        ui.print_prompt()?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(|e| TallyError::Io(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            debug!("end of input");
            break;
        }

        // bytes that are not UTF-8 become U+FFFD rather than ending the session
        let line = String::from_utf8_lossy(&buf);
        let command = parse_command(&line);
        command.execute(ledger, ui)?;
        if command.is_exit() {
            break;
        }
    }

    Ok(())
}
