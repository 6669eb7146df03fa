use crate::config::validate_report_config;
use crate::domain::dates::parse_calendar_date;
use crate::domain::model::{
    OutputFiles, ReportConfig, DEFAULT_FISCAL_YEAR, DEFAULT_REFERENCE_DATE, DEFAULT_TRAININGS,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{validate_file_name, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub report: ReportSection,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSection {
    pub trainings: Option<Vec<String>>,
    pub fiscal_year: Option<i32>,
    pub reference_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub counts: Option<String>,
    pub fiscal_year: Option<String>,
    pub expiring: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REPORT_INPUT})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReportError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("source.path", &self.source.path)?;
        validate_path("load.output_path", &self.load.output_path)?;

        let files = self.output_files();
        validate_file_name("load.filenames.counts", &files.counts)?;
        validate_file_name("load.filenames.fiscal_year", &files.fiscal_year)?;
        validate_file_name("load.filenames.expiring", &files.expiring)?;

        if files.counts == files.fiscal_year
            || files.counts == files.expiring
            || files.fiscal_year == files.expiring
        {
            return Err(ReportError::ConfigValidationError {
                field: "load.filenames".to_string(),
                message: "each report needs its own output file".to_string(),
            });
        }

        validate_report_config("report.", &self.report_config()?)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_files(&self) -> OutputFiles {
        let defaults = OutputFiles::default();
        let names = self.load.filenames.clone().unwrap_or_default();

        OutputFiles {
            counts: names.counts.unwrap_or(defaults.counts),
            fiscal_year: names.fiscal_year.unwrap_or(defaults.fiscal_year),
            expiring: names.expiring.unwrap_or(defaults.expiring),
        }
    }

    fn report_config(&self) -> Result<ReportConfig> {
        let training_names = match &self.report.trainings {
            Some(names) => names.iter().cloned().collect(),
            None => DEFAULT_TRAININGS.iter().map(|s| s.to_string()).collect(),
        };

        let reference_date = parse_calendar_date(
            self.report
                .reference_date
                .as_deref()
                .unwrap_or(DEFAULT_REFERENCE_DATE),
        )
        .map_err(|e| ReportError::InvalidConfigValueError {
            field: "report.reference_date".to_string(),
            value: self.report.reference_date.clone().unwrap_or_default(),
            reason: e.to_string(),
        })?;

        Ok(ReportConfig {
            training_names,
            fiscal_year: self.report.fiscal_year.unwrap_or(DEFAULT_FISCAL_YEAR),
            reference_date,
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
[pipeline]
name = "training-report"
description = "Lab safety reports"
version = "1.0"

[source]
path = "trainings.txt"

[load]
output_path = "./reports"
"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str(MINIMAL).unwrap();

        assert_eq!(config.pipeline.name, "training-report");
        assert_eq!(config.input_path(), "trainings.txt");
        assert_eq!(config.output_path(), "./reports");
        assert_eq!(config.output_files(), OutputFiles::default());
        assert_eq!(config.report_config().unwrap(), ReportConfig::default());
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config() {
        let toml_content = r#"
[pipeline]
name = "fy23"
description = "FY23 audit"
version = "2.0"

[source]
path = "data/people.json"

[report]
trainings = ["X-Ray Safety", "Laser Safety"]
fiscal_year = 2023
reference_date = "6/1/2023"

[load]
output_path = "out"

[load.filenames]
counts = "counts.json"
expiring = "expiring.json"

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let report = config.report_config().unwrap();

        assert_eq!(report.training_names.len(), 2);
        assert_eq!(report.fiscal_year, 2023);
        assert_eq!(report.reference_date.to_string(), "2023-06-01");

        let files = config.output_files();
        assert_eq!(files.counts, "counts.json");
        assert_eq!(files.fiscal_year, "output2.json");
        assert_eq!(files.expiring, "expiring.json");
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TRAINING_REPORT_TEST_INPUT", "/data/trainings.json");

        let toml_content = MINIMAL.replace("trainings.txt", "${TRAINING_REPORT_TEST_INPUT}");
        let config = TomlConfig::from_toml_str(&toml_content).unwrap();
        assert_eq!(config.source.path, "/data/trainings.json");

        std::env::remove_var("TRAINING_REPORT_TEST_INPUT");
    }

    #[test]
    fn test_unknown_env_var_is_left_as_written() {
        let toml_content = MINIMAL.replace("trainings.txt", "${TRAINING_REPORT_UNSET_VAR}");
        let config = TomlConfig::from_toml_str(&toml_content).unwrap();
        assert_eq!(config.source.path, "${TRAINING_REPORT_UNSET_VAR}");
    }

    #[test]
    fn test_config_validation() {
        let bad_year = format!("{}\n[report]\nfiscal_year = 0\n", MINIMAL);
        let config = TomlConfig::from_toml_str(&bad_year).unwrap();
        assert!(config.validate().is_err());

        let no_trainings = format!("{}\n[report]\ntrainings = []\n", MINIMAL);
        let config = TomlConfig::from_toml_str(&no_trainings).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ReportError::MissingConfigError { .. })
        ));

        let bad_date = format!("{}\n[report]\nreference_date = \"soon\"\n", MINIMAL);
        let config = TomlConfig::from_toml_str(&bad_date).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ReportError::InvalidConfigValueError { .. })
        ));

        let clashing = format!(
            "{}\n[load.filenames]\ncounts = \"same.json\"\nexpiring = \"same.json\"\n",
            MINIMAL
        );
        let config = TomlConfig::from_toml_str(&clashing).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(TomlConfig::from_toml_str("[pipeline\nname = ").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pipeline.name, "training-report");
    }
}
