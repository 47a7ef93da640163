use serde::Serialize;

/// A foreground/background pair to check, with a human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRecord {
    pub foreground: &'static str,
    pub background: &'static str,
    pub label: &'static str,
}

impl ColorRecord {
    pub const fn new(foreground: &'static str, background: &'static str, label: &'static str) -> Self {
        Self {
            foreground,
            background,
            label,
        }
    }
}

/// Contrast of one record plus its verdict against every WCAG threshold.
/// `ratio` is unrounded; formatting happens in the reporter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    pub label: String,
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
}

/// Results split by whether they meet the requested conformance level.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckResult {
    pub passed: Vec<ContrastResult>,
    pub violations: Vec<ContrastResult>,
}
