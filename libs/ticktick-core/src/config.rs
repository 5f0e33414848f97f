//! Configuration for export runs

use std::path::{Path, PathBuf};

/// Official TickTick API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.ticktick.com";

/// Configuration for a TickTick export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// API endpoint, without a trailing slash
    pub base_url: String,
    /// Directory the per-project CSV files are written into
    pub output_dir: PathBuf,
}

impl ExportConfig {
    /// Create a configuration with an explicit endpoint and output directory
    #[must_use]
    pub fn new<P: AsRef<Path>>(base_url: impl Into<String>, output_dir: P) -> Self {
        Self {
            base_url: base_url.into(),
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads `TICKTICK_BASE_URL` and `TICKTICK_OUTPUT_DIR`; either falls
    /// back to its default when unset.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("TICKTICK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let output_dir = std::env::var("TICKTICK_OUTPUT_DIR")
            .map_or_else(|_| PathBuf::from("."), PathBuf::from);

        Self::new(base_url, output_dir)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, ".")
    }
}
