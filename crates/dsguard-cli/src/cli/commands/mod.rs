//! Command handlers, one file per tool.

mod checksums;
mod validate;

pub use checksums::{run_generate, run_verify};
pub use validate::run_validate;
