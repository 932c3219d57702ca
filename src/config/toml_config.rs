use crate::utils::error::{OrbitError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔格式，所有欄位皆可省略：
///
/// ```toml
/// [input]
/// path = "data.txt"
/// delimiter = ")"
///
/// [count]
/// center = "COM"
/// cycle_check = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub count: Option<CountConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountConfig {
    pub center: Option<String>,
    pub cycle_check: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(OrbitError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OrbitError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ORBIT_INPUT})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OrbitError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn input_path(&self) -> Option<&str> {
        self.input.as_ref()?.path.as_deref()
    }

    /// 分隔字元必須剛好是一個字元
    pub fn delimiter(&self) -> Result<Option<char>> {
        match self.input.as_ref().and_then(|i| i.delimiter.as_deref()) {
            Some(raw) => validation::parse_delimiter("input.delimiter", raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn center(&self) -> Option<&str> {
        self.count.as_ref()?.center.as_deref()
    }

    pub fn cycle_check(&self) -> Option<bool> {
        self.count.as_ref()?.cycle_check
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.input_path() {
            validation::validate_path("input.path", path)?;
        }

        if let Some(delimiter) = self.delimiter()? {
            validation::validate_delimiter("input.delimiter", delimiter)?;
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
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[input]
path = "maps/day6.txt"
delimiter = "-"

[count]
center = "SUN"
cycle_check = false
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), Some("maps/day6.txt"));
        assert_eq!(config.delimiter().unwrap(), Some('-'));
        assert_eq!(config.center(), Some("SUN"));
        assert_eq!(config.cycle_check(), Some(false));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.input_path(), None);
        assert_eq!(config.delimiter().unwrap(), None);
        assert_eq!(config.center(), None);
        assert_eq!(config.cycle_check(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ORBIT_MAP_TEST_INPUT", "/tmp/orbits.txt");

        let toml_content = r#"
[input]
path = "${ORBIT_MAP_TEST_INPUT}"

[count]
center = "${ORBIT_MAP_TEST_UNSET_CENTER}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), Some("/tmp/orbits.txt"));
        assert_eq!(config.center(), Some("${ORBIT_MAP_TEST_UNSET_CENTER}"));

        std::env::remove_var("ORBIT_MAP_TEST_INPUT");
    }

    #[test]
    fn test_config_validation() {
        let multi_char = TomlConfig::from_toml_str("[input]\ndelimiter = \"->\"\n").unwrap();
        assert!(multi_char.validate().is_err());

        let newline = TomlConfig::from_toml_str("[input]\ndelimiter = \"\\n\"\n").unwrap();
        assert!(newline.validate().is_err());

        let tab = TomlConfig::from_toml_str("[input]\ndelimiter = \"\\t\"\n").unwrap();
        assert_eq!(tab.delimiter().unwrap(), Some('\t'));
        assert!(tab.validate().is_ok());

        // 起點名稱不做限制，找不到就是 0
        let padded = TomlConfig::from_toml_str("[count]\ncenter = \" B\"\n").unwrap();
        assert!(padded.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[input\npath = 1").unwrap_err();
        assert!(matches!(err, OrbitError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[count]\ncenter = \"B\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.center(), Some("B"));
    }
}
