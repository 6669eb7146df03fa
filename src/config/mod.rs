pub mod toml_config;

use crate::domain::model::ReportConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_training_names};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const MIN_FISCAL_YEAR: i32 = 1;
pub const MAX_FISCAL_YEAR: i32 = 9999;

/// Checks report parameters. `prefix` is the section name used in error messages.
pub fn validate_report_config(prefix: &str, config: &ReportConfig) -> Result<()> {
    validate_training_names(&format!("{}trainings", prefix), &config.training_names)?;
    validate_range(
        &format!("{}fiscal_year", prefix),
        config.fiscal_year,
        MIN_FISCAL_YEAR,
        MAX_FISCAL_YEAR,
    )?;
    Ok(())
}

#[cfg(feature = "cli")]
mod cli {
    use super::validate_report_config;
    use crate::domain::dates::parse_calendar_date;
    use crate::domain::model::{
        OutputFiles, ReportConfig, DEFAULT_FISCAL_YEAR, DEFAULT_REFERENCE_DATE, DEFAULT_TRAININGS,
    };
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use chrono::NaiveDate;
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "training-report")]
    #[command(about = "Generate training completion reports from a JSON roster")]
    pub struct CliConfig {
        /// JSON file with people and their training completions
        #[arg(long, default_value = "trainings.txt")]
        pub input: String,

        #[arg(long, default_value = ".")]
        pub output_path: String,

        /// Training to include in the fiscal year report (repeatable)
        #[arg(long = "training", value_name = "NAME", default_values = DEFAULT_TRAININGS)]
        pub trainings: Vec<String>,

        #[arg(long, default_value_t = DEFAULT_FISCAL_YEAR)]
        pub fiscal_year: i32,

        /// Date expirations are measured against
        #[arg(long, default_value = DEFAULT_REFERENCE_DATE, value_parser = parse_date_arg)]
        pub reference_date: NaiveDate,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log CPU and memory usage after each phase")]
        pub monitor: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,
    }

    fn parse_date_arg(value: &str) -> std::result::Result<NaiveDate, String> {
        parse_calendar_date(value).map_err(|e| e.to_string())
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> &str {
            &self.input
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_files(&self) -> OutputFiles {
            OutputFiles::default()
        }

        fn report_config(&self) -> Result<ReportConfig> {
            Ok(ReportConfig {
                training_names: self.trainings.iter().cloned().collect(),
                fiscal_year: self.fiscal_year,
                reference_date: self.reference_date,
            })
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("input", &self.input)?;
            validate_path("output_path", &self.output_path)?;
            validate_report_config("", &self.report_config()?)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults_match_fixed_report_parameters() {
            let config = CliConfig::parse_from(["training-report"]);

            assert_eq!(config.input, "trainings.txt");
            assert_eq!(config.output_path, ".");
            assert_eq!(config.report_config().unwrap(), ReportConfig::default());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_overrides() {
            let config = CliConfig::parse_from([
                "training-report",
                "--input",
                "data/people.json",
                "--training",
                "X-Ray Safety",
                "--training",
                "Laser Safety",
                "--fiscal-year",
                "2023",
                "--reference-date",
                "1/15/2024",
            ]);

            let report = config.report_config().unwrap();
            assert_eq!(report.training_names.len(), 2);
            assert!(report.training_names.contains("Laser Safety"));
            assert_eq!(report.fiscal_year, 2023);
            assert_eq!(report.reference_date.to_string(), "2024-01-15");
        }

        #[test]
        fn test_invalid_reference_date_is_rejected() {
            let result =
                CliConfig::try_parse_from(["training-report", "--reference-date", "2023-13-01"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_validation_rejects_bad_values() {
            let mut config = CliConfig::parse_from(["training-report"]);
            config.fiscal_year = 0;
            assert!(config.validate().is_err());

            let mut config = CliConfig::parse_from(["training-report"]);
            config.trainings = vec!["   ".to_string()];
            assert!(config.validate().is_err());

            let mut config = CliConfig::parse_from(["training-report"]);
            config.input = String::new();
            assert!(config.validate().is_err());
        }
    }
}
