use std::io::Read;

use secded_code::{decode_codeword, Syndrome};

use crate::cmd::{open_input, InspectArgs};
use crate::exit::{io_error, CliResult, SUCCESS};
use crate::output::{print_inspect_rows, InspectRow, OutputFormat};

pub fn run(args: InspectArgs, format: OutputFormat) -> CliResult<i32> {
    let mut input = open_input(args.input.as_deref())?;
    let mut wire = Vec::new();
    input
        .read_to_end(&mut wire)
        .map_err(|err| io_error("failed reading input", err))?;

    let limit = args.limit.unwrap_or(usize::MAX);
    let rows: Vec<InspectRow> = wire
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, &codeword)| {
            let decoded = decode_codeword(codeword);
            InspectRow {
                index,
                codeword,
                syndrome: Syndrome::of(codeword),
                nibble: decoded.nibble,
                outcome: decoded.outcome,
            }
        })
        .collect();

    print_inspect_rows(&rows, format);

    if wire.len() > rows.len() {
        tracing::info!(
            shown = rows.len(),
            total = wire.len(),
            "inspection truncated by --limit"
        );
    }

    Ok(SUCCESS)
}
