pub mod hex;
pub mod wcag;
