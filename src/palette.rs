//! Brand palette checked by the report.

use crate::types::ColorRecord;

const PRIMARY_TEAL: &str = "#006978";
const PRIMARY_GREEN: &str = "#2D5A4F";
const DARK_TEXT: &str = "#333333";
const LIGHT_TEXT: &str = "#666666";
const WHITE: &str = "#FFFFFF";
const BEIGE: &str = "#F5F5DC";

pub const RECORDS: [ColorRecord; 8] = [
    ColorRecord::new(PRIMARY_TEAL, WHITE, "Primary Teal on White"),
    ColorRecord::new(PRIMARY_TEAL, BEIGE, "Primary Teal on Background"),
    ColorRecord::new(PRIMARY_GREEN, WHITE, "Improved Primary Green on White"),
    ColorRecord::new(PRIMARY_GREEN, BEIGE, "Improved Primary Green on Background"),
    ColorRecord::new(DARK_TEXT, WHITE, "Dark Text on White"),
    ColorRecord::new(DARK_TEXT, BEIGE, "Dark Text on Background"),
    ColorRecord::new(LIGHT_TEXT, WHITE, "Improved Light Text on White"),
    ColorRecord::new(LIGHT_TEXT, BEIGE, "Improved Light Text on Background"),
];
