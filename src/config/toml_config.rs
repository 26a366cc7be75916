use crate::utils::error::{DecommentError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StripFileConfig {
    pub strip: Option<StripSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StripSection {
    pub language: Option<String>,
    pub max_file_bytes: Option<u64>,
    pub in_place: Option<bool>,
}

impl StripFileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| DecommentError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${STRIP_LANGUAGE})，找不到的變數視為錯誤
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DecommentError::ConfigError {
            message: e.to_string(),
        })?;

        let mut missing = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.push(var_name.to_string());
                String::new()
            })
        });

        if !missing.is_empty() {
            return Err(DecommentError::ConfigError {
                message: format!("Undefined environment variables: {}", missing.join(", ")),
            });
        }

        Ok(result.into_owned())
    }

    /// The `[strip]` table; a config file without one is a mistake.
    pub fn section(&self) -> Result<&StripSection> {
        validate_required_field("strip", &self.strip)
    }
}

impl Validate for StripFileConfig {
    fn validate(&self) -> Result<()> {
        let section = self.section()?;

        if let Some(language) = &section.language {
            validate_non_empty_string("strip.language", language)?;
        }

        if let Some(max) = section.max_file_bytes {
            validate_positive_number("strip.max_file_bytes", max, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_strip_section() {
        let toml_content = r#"
[strip]
language = "python"
max_file_bytes = 2048
in_place = true
"#;

        let config = StripFileConfig::from_toml_str(toml_content).unwrap();
        let section = config.section().unwrap();

        assert_eq!(section.language.as_deref(), Some("python"));
        assert_eq!(section.max_file_bytes, Some(2048));
        assert_eq!(section.in_place, Some(true));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DECOMMENT_TEST_LANGUAGE", "lua");

        let toml_content = r#"
[strip]
language = "${DECOMMENT_TEST_LANGUAGE}"
"#;

        let config = StripFileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.section().unwrap().language.as_deref(), Some("lua"));

        std::env::remove_var("DECOMMENT_TEST_LANGUAGE");
    }

    #[test]
    fn test_undefined_env_var_is_error() {
        let toml_content = r#"
[strip]
language = "${DECOMMENT_TEST_SURELY_UNDEFINED}"
"#;

        assert!(matches!(
            StripFileConfig::from_toml_str(toml_content),
            Err(DecommentError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        assert!(StripFileConfig::from_toml_str("[strip]\nmax_file_bytes = 0\n").is_err());
        assert!(matches!(
            StripFileConfig::from_toml_str("language = \"python\"\n"),
            Err(DecommentError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[strip]\nlanguage = \"cpp\"\n").unwrap();

        let config = StripFileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.section().unwrap().language.as_deref(), Some("cpp"));
    }
}
