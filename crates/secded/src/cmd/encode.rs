use secded_stream::copy_encode;

use crate::cmd::{open_input, open_output, EncodeArgs};
use crate::exit::{stream_error, CliResult, SUCCESS};
use crate::output::{print_encode_report, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let mut input = open_input(args.input.as_deref())?;
    let (output, to_stdout) = open_output(args.output.as_deref())?;

    let (bytes_in, codewords_out) =
        copy_encode(&mut input, output).map_err(|err| stream_error("encode failed", err))?;

    if to_stdout {
        // Codewords own stdout; keep the report on stderr.
        tracing::info!(bytes_in, codewords_out, "encode complete");
    } else {
        print_encode_report(bytes_in, codewords_out, format);
    }

    Ok(SUCCESS)
}
