use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::ColorError;
use crate::math::wcag::{check_wcag_thresholds, contrast_ratio};
use crate::types::{CheckResult, ColorRecord, ContrastResult};

/// Target WCAG conformance level, judged on normal-size text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
pub enum Conformance {
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl fmt::Display for Conformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aa => f.write_str("AA"),
            Self::Aaa => f.write_str("AAA"),
        }
    }
}

/// Check contrast for a single color record.
pub fn check_contrast(record: &ColorRecord) -> Result<ContrastResult, ColorError> {
    let ratio = contrast_ratio(record.foreground, record.background)?;
    let wcag = check_wcag_thresholds(ratio);

    debug!(
        label = record.label,
        fg = record.foreground,
        bg = record.background,
        ratio,
        "checked contrast"
    );

    Ok(ContrastResult {
        label: record.label.to_string(),
        foreground: record.foreground.to_string(),
        background: record.background.to_string(),
        ratio,
        pass_aa: wcag.pass_aa,
        pass_aa_large: wcag.pass_aa_large,
        pass_aaa: wcag.pass_aaa,
        pass_aaa_large: wcag.pass_aaa_large,
    })
}

/// Whether a result meets `level` for normal text.
pub fn meets(result: &ContrastResult, level: Conformance) -> bool {
    match level {
        Conformance::Aa => result.pass_aa,
        Conformance::Aaa => result.pass_aaa,
    }
}

/// Check all records and split them into passed/violations, keeping order.
/// Stops at the first record that fails to decode.
pub fn check_all(records: &[ColorRecord], level: Conformance) -> Result<CheckResult, ColorError> {
    let mut out = CheckResult::default();

    for record in records {
        let result = check_contrast(record)?;
        if meets(&result, level) {
            out.passed.push(result);
        } else {
            out.violations.push(result);
        }
    }

    Ok(out)
}
