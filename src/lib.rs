pub mod checker;
pub mod error;
pub mod math;
pub mod palette;
pub mod report;
pub mod types;

pub use checker::{check_all, check_contrast, Conformance};
pub use error::{ColorError, ReportError};
pub use math::hex::{parse_hex_rgb, Rgb};
pub use math::wcag::{contrast_ratio, relative_luminance};
pub use types::{CheckResult, ColorRecord, ContrastResult};
