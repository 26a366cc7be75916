#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::StripSettings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_exclusive, validate_path, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use toml_config::StripFileConfig;

pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Strip settings after CLI flags have been layered over the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripConfig {
    pub input: String,
    pub output: Option<String>,
    pub language: Option<String>,
    pub in_place: bool,
    pub max_file_bytes: u64,
    pub report: bool,
}

impl StripConfig {
    pub fn new(input: String) -> Self {
        Self {
            input,
            output: None,
            language: None,
            in_place: false,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            report: false,
        }
    }

    /// Fills every setting the command line left unset from `file`.
    pub fn merge_file(mut self, file: &StripFileConfig, cli_max_file_bytes: Option<u64>) -> Result<Self> {
        let section = file.section()?;

        if self.language.is_none() {
            self.language = section.language.clone();
        }
        // 命令列指定 --output 時不採用檔案裡的 in_place
        if self.output.is_none() {
            self.in_place = self.in_place || section.in_place.unwrap_or(false);
        }
        self.max_file_bytes = cli_max_file_bytes
            .or(section.max_file_bytes)
            .unwrap_or(DEFAULT_MAX_FILE_BYTES);

        Ok(self)
    }
}

impl StripSettings for StripConfig {
    fn input(&self) -> &str {
        &self.input
    }

    fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    fn in_place(&self) -> bool {
        self.in_place
    }

    fn max_file_bytes(&self) -> u64 {
        self.max_file_bytes
    }
}

impl Validate for StripConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        validate_exclusive("in_place", self.in_place, "output", self.output.is_some())?;
        validate_positive_number("max_file_bytes", self.max_file_bytes, 1)?;
        Ok(())
    }
}
