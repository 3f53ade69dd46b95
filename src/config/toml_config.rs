use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_file_name, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern must compile"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub file_name: Option<String>,
    pub sort: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| EtlError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }
        if let Some(file_name) = &self.output.file_name {
            validate_file_name("output.file_name", file_name, &["xlsx"])?;
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
    fn test_parse_output_section() {
        let toml_content = r#"
[output]
path = "./exports"
file_name = "numbers.xlsx"
sort = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.output.path.as_deref(), Some("./exports"));
        assert_eq!(config.output.file_name.as_deref(), Some("numbers.xlsx"));
        assert_eq!(config.output.sort, Some(true));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.output.path.is_none());
        assert!(config.output.sort.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PHONE_EXTRACTOR_TEST_OUT", "/tmp/phones");

        let config = TomlConfig::from_toml_str(
            r#"
[output]
path = "${PHONE_EXTRACTOR_TEST_OUT}"
"#,
        )
        .unwrap();
        assert_eq!(config.output.path.as_deref(), Some("/tmp/phones"));

        std::env::remove_var("PHONE_EXTRACTOR_TEST_OUT");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[output\npath = ");
        assert!(matches!(result, Err(EtlError::ConfigError { .. })));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[output]
file_name = "../escape.xlsx"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nfile_name = \"from-file.xlsx\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output.file_name.as_deref(), Some("from-file.xlsx"));
    }
}
