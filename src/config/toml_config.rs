use crate::config::StripConfig;
use crate::domain::model::{AnchorCheck, ExclusionRange};
use crate::utils::error::{Result, StripError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub target: TargetConfig,
    #[serde(default)]
    pub anchors: Vec<AnchorCheck>,
    #[serde(default)]
    pub ranges: Vec<ExclusionRange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub path: String,
    pub description: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| StripError::ConfigError {
                message: format!(
                    "cannot read config file '{}': {}",
                    path.as_ref().display(),
                    e
                ),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| StripError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PROJECT_ROOT})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn into_strip_config(self) -> StripConfig {
        StripConfig::new(self.target.path, self.anchors, self.ranges)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_strip_config().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[target]
path = "client/src/lib/i18n.tsx"
description = "Drop unused languages"

[[anchors]]
index = 190
contains = "ru: {"
label = "ru"

[[anchors]]
index = 752
contains = "pt: {"

[[ranges]]
start = 190
end = 480
label = "ru, de, fr"

[[ranges]]
start = 752
end = 847
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = TomlConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.target.path, "client/src/lib/i18n.tsx");
        assert_eq!(config.anchors.len(), 2);
        assert_eq!(config.anchors[0].label.as_deref(), Some("ru"));
        assert_eq!(config.anchors[1].label, None);
        assert_eq!(config.ranges[1], ExclusionRange::new(752, 847));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("I18N_STRIP_TEST_ROOT", "/srv/happygames");

        let toml_content = r#"
[target]
path = "${I18N_STRIP_TEST_ROOT}/client/src/lib/i18n.tsx"

[[anchors]]
index = 0
contains = "en: {"

[[ranges]]
start = 1
end = 2
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.target.path, "/srv/happygames/client/src/lib/i18n.tsx");

        std::env::remove_var("I18N_STRIP_TEST_ROOT");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let toml_content = r#"
[target]
path = "${I18N_STRIP_SURELY_UNSET}/i18n.tsx"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.target.path, "${I18N_STRIP_SURELY_UNSET}/i18n.tsx");
    }

    #[test]
    fn test_config_without_ranges_fails_validation() {
        let toml_content = r#"
[target]
path = "i18n.tsx"

[[anchors]]
index = 0
contains = "en: {"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(StripError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[target\npath = 1").unwrap_err();
        assert!(matches!(err, StripError::ConfigError { .. }));
    }

    #[test]
    fn test_unreadable_config_file_is_config_error() {
        let err = TomlConfig::from_file("/nonexistent/i18n-strip.toml").unwrap_err();
        assert!(matches!(
            &err,
            StripError::ConfigError { message } if message.contains("/nonexistent/i18n-strip.toml")
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(BASIC.as_bytes()).unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap().into_strip_config();
        assert_eq!(config.anchors.len(), 2);
        assert_eq!(config.ranges.len(), 2);
    }
}
