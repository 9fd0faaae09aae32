//! ShowcaseErrorCode trait for stable, machine-readable failure codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait ShowcaseErrorCode {
    /// Returns the error code string (e.g., "METADATA_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted report line: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const METADATA_NOT_FOUND: &str = "METADATA_NOT_FOUND";
pub const METADATA_PARSE_ERROR: &str = "METADATA_PARSE_ERROR";
pub const METADATA_IO_ERROR: &str = "METADATA_IO_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const SHOWCASE_ERROR: &str = "SHOWCASE_ERROR";
