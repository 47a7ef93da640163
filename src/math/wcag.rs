use super::hex::{parse_hex_rgb, Rgb};
use crate::error::ColorError;

/// Minimum ratio for AA, normal text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AA, large text.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for AAA, normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AAA, large text.
pub const AAA_LARGE: f64 = 4.5;

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
pub fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.x.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * srgb_to_linear(rgb.r) + 0.7152 * srgb_to_linear(rgb.g) + 0.0722 * srgb_to_linear(rgb.b)
}

/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn ratio_from_luminance(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Calculate WCAG contrast ratio between two hex colors.
pub fn contrast_ratio(hex1: &str, hex2: &str) -> Result<f64, ColorError> {
    let l1 = relative_luminance(parse_hex_rgb(hex1)?);
    let l2 = relative_luminance(parse_hex_rgb(hex2)?);
    Ok(ratio_from_luminance(l1, l2))
}

/// Determine pass/fail for all WCAG thresholds.
pub fn check_wcag_thresholds(ratio: f64) -> WcagResult {
    WcagResult {
        pass_aa: ratio >= AA_NORMAL,
        pass_aa_large: ratio >= AA_LARGE,
        pass_aaa: ratio >= AAA_NORMAL,
        pass_aaa_large: ratio >= AAA_LARGE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WcagResult {
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
}
