use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use secded_code::{DecodeStats, Outcome, Syndrome};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct EncodeReport<'a> {
    schema_id: &'a str,
    input_bytes: u64,
    output_codewords: u64,
}

pub fn print_encode_report(input_bytes: u64, output_codewords: u64, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let report = EncodeReport {
                schema_id: "https://schemas.3leaps.dev/secded/cli/v1/encode-report.schema.json",
                input_bytes,
                output_codewords,
            };
            println!("{}", to_json(&report));
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["INPUT BYTES", "OUTPUT CODEWORDS"])
                .add_row(vec![input_bytes.to_string(), output_codewords.to_string()]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("encoded {input_bytes} bytes into {output_codewords} codewords");
        }
    }
}

#[derive(Serialize)]
struct DecodeReport<'a> {
    schema_id: &'a str,
    codewords: u64,
    output_bytes: u64,
    clean: u64,
    corrected: u64,
    check_bit_only: u64,
    uncorrectable: u64,
    trailing_dropped: bool,
}

pub fn print_decode_report(output_bytes: u64, stats: &DecodeStats, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let report = DecodeReport {
                schema_id: "https://schemas.3leaps.dev/secded/cli/v1/decode-report.schema.json",
                codewords: stats.codewords,
                output_bytes,
                clean: stats.clean,
                corrected: stats.corrected,
                check_bit_only: stats.check_bit_only,
                uncorrectable: stats.uncorrectable,
                trailing_dropped: stats.trailing_dropped,
            };
            println!("{}", to_json(&report));
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![
                    "CODEWORDS",
                    "BYTES OUT",
                    "CLEAN",
                    "CORRECTED",
                    "CHECK-BIT",
                    "UNCORRECTABLE",
                    "TRAILING DROPPED",
                ])
                .add_row(vec![
                    stats.codewords.to_string(),
                    output_bytes.to_string(),
                    stats.clean.to_string(),
                    stats.corrected.to_string(),
                    stats.check_bit_only.to_string(),
                    stats.uncorrectable.to_string(),
                    stats.trailing_dropped.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "decoded {} codewords into {} bytes (clean={}, corrected={}, check-bit={}, uncorrectable={}, trailing_dropped={})",
                stats.codewords,
                output_bytes,
                stats.clean,
                stats.corrected,
                stats.check_bit_only,
                stats.uncorrectable,
                stats.trailing_dropped
            );
        }
    }
}

/// One inspected codeword.
pub struct InspectRow {
    pub index: usize,
    pub codeword: u8,
    pub syndrome: Syndrome,
    pub nibble: u8,
    pub outcome: Outcome,
}

#[derive(Serialize)]
struct InspectRowOutput<'a> {
    schema_id: &'a str,
    index: usize,
    codeword: String,
    s1: u8,
    s2: u8,
    s3: u8,
    check: u8,
    error_pos: u8,
    outcome: &'a str,
    nibble: String,
}

fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Clean => "clean",
        Outcome::Corrected { .. } => "corrected",
        Outcome::CheckBitOnly => "check-bit-only",
        Outcome::UncorrectableDetected => "uncorrectable",
    }
}

pub fn print_inspect_rows(rows: &[InspectRow], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for row in rows {
                let out = InspectRowOutput {
                    schema_id: "https://schemas.3leaps.dev/secded/cli/v1/codeword.schema.json",
                    index: row.index,
                    codeword: format!("{:#04x}", row.codeword),
                    s1: row.syndrome.s1,
                    s2: row.syndrome.s2,
                    s3: row.syndrome.s3,
                    check: row.syndrome.check,
                    error_pos: row.syndrome.error_pos(),
                    outcome: outcome_name(row.outcome),
                    nibble: format!("{:#x}", row.nibble),
                };
                println!("{}", to_json(&out));
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![
                    "#", "CODEWORD", "S1", "S2", "S3", "CHECK", "POS", "OUTCOME", "NIBBLE",
                ]);
            for row in rows {
                table.add_row(vec![
                    row.index.to_string(),
                    format!("{:#04x}", row.codeword),
                    row.syndrome.s1.to_string(),
                    row.syndrome.s2.to_string(),
                    row.syndrome.s3.to_string(),
                    row.syndrome.check.to_string(),
                    row.syndrome.error_pos().to_string(),
                    outcome_name(row.outcome).to_string(),
                    format!("{:#x}", row.nibble),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in rows {
                println!(
                    "#{} codeword={:#04x} syndrome={}{}{} check={} pos={} outcome={} nibble={:#x}",
                    row.index,
                    row.codeword,
                    row.syndrome.s3,
                    row.syndrome.s2,
                    row.syndrome.s1,
                    row.syndrome.check,
                    row.syndrome.error_pos(),
                    outcome_name(row.outcome),
                    row.nibble
                );
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}
