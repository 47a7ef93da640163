use std::io::Write;

use serde::Serialize;

use crate::checker::{check_all, check_contrast, Conformance};
use crate::error::ReportError;
use crate::types::{CheckResult, ColorRecord, ContrastResult};

pub const TITLE: &str = "WCAG Color Contrast Analysis for Gathered Roots Cleaning (Updated)";
pub const AA_LINE: &str = "AA Standard: 4.5:1 for normal text, 3:1 for large text";
pub const AAA_LINE: &str = "AAA Standard: 7:1 for normal text, 4.5:1 for large text";

pub const PASS: &str = "✓ PASS";
pub const FAIL: &str = "✗ FAIL";

const HEADER_WIDTH: usize = 70;
const RECORD_WIDTH: usize = 60;

fn marker(pass: bool) -> &'static str {
    if pass {
        PASS
    } else {
        FAIL
    }
}

fn write_header(out: &mut impl Write) -> std::io::Result<()> {
    let rule = "=".repeat(HEADER_WIDTH);
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{AA_LINE}")?;
    writeln!(out, "{AAA_LINE}")?;
    writeln!(out, "{rule}")
}

/// One record block. The label pads to 32 columns but is never cut.
fn write_block(out: &mut impl Write, result: &ContrastResult) -> std::io::Result<()> {
    writeln!(out, "{:<32} | {:>5.2}:1", result.label, result.ratio)?;
    writeln!(
        out,
        "  AA Normal Text: {:<8} | AA Large Text: {:<8}",
        marker(result.pass_aa),
        marker(result.pass_aa_large)
    )?;
    writeln!(
        out,
        "  AAA Normal Text: {:<7} | AAA Large Text: {:<7}",
        marker(result.pass_aaa),
        marker(result.pass_aaa_large)
    )?;
    writeln!(out, "{}", "-".repeat(RECORD_WIDTH))
}

/// Write the plain-text report for `records`, in order.
///
/// A record that fails to decode aborts the report before its block is
/// written; earlier blocks stay in `out`.
pub fn write_text_report(
    out: &mut impl Write,
    records: &[ColorRecord],
) -> Result<Vec<ContrastResult>, ReportError> {
    write_header(out)?;

    let mut results = Vec::with_capacity(records.len());
    for record in records {
        let result = check_contrast(record)?;
        write_block(out, &result)?;
        results.push(result);
    }

    out.flush()?;
    Ok(results)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    title: &'a str,
    level: Conformance,
    #[serde(flatten)]
    results: &'a CheckResult,
}

/// Write the results as pretty JSON, split by `level`.
pub fn write_json_report(
    out: &mut impl Write,
    records: &[ColorRecord],
    level: Conformance,
) -> Result<CheckResult, ReportError> {
    let results = check_all(records, level)?;
    let report = JsonReport {
        title: TITLE,
        level,
        results: &results,
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(results)
}
