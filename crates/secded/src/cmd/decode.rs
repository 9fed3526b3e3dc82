use secded_stream::copy_decode;

use crate::cmd::{open_input, open_output, DecodeArgs};
use crate::exit::{stream_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_decode_report, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let input = open_input(args.input.as_deref())?;
    let (mut output, to_stdout) = open_output(args.output.as_deref())?;

    let (bytes_out, stats) =
        copy_decode(input, &mut output).map_err(|err| stream_error("decode failed", err))?;

    if stats.uncorrectable > 0 {
        tracing::warn!(
            count = stats.uncorrectable,
            "uncorrectable double-bit errors detected; affected bytes passed through"
        );
    }
    if stats.trailing_dropped {
        tracing::warn!("input had an odd codeword count; trailing nibble dropped");
    }

    if to_stdout {
        tracing::info!(
            codewords = stats.codewords,
            bytes_out,
            corrected = stats.corrected,
            uncorrectable = stats.uncorrectable,
            "decode complete"
        );
    } else {
        print_decode_report(bytes_out, &stats, format);
    }

    if args.strict && stats.uncorrectable > 0 {
        return Ok(DATA_INVALID);
    }
    Ok(SUCCESS)
}
