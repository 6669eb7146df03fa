use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::dates::FiscalYear;
use crate::domain::model::{Person, ReportSet};
use crate::domain::services::{count_completions, filter_by_fiscal_year, find_expiring};
use crate::utils::error::{ReportError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

/// Reads the training roster, builds the three reports and writes them as JSON.
pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self, name: &str) -> String {
        Path::new(self.config.output_path())
            .join(name)
            .to_string_lossy()
            .into_owned()
    }
}

/// Pretty JSON with 4-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Person>> {
        let path = self.config.input_path();
        tracing::debug!("Reading training records from: {}", path);

        let raw = self
            .storage
            .read_file(path)
            .await
            .map_err(|e| ReportError::InputReadError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let people: Vec<Person> =
            serde_json::from_slice(&raw).map_err(|e| ReportError::InputParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            "Parsed {} people with {} completions",
            people.len(),
            people.iter().map(|p| p.completions.len()).sum::<usize>()
        );

        Ok(people)
    }

    async fn transform(&self, people: &[Person]) -> Result<ReportSet> {
        let report = self.config.report_config()?;
        let fiscal_year = FiscalYear::new(report.fiscal_year)?;

        tracing::debug!(
            "Fiscal year {} window: {} to {}",
            fiscal_year.year(),
            fiscal_year.start(),
            fiscal_year.end()
        );

        let completion_counts = count_completions(people);
        let fiscal_year_roster = filter_by_fiscal_year(people, &report.training_names, fiscal_year);
        let expiring = find_expiring(people, report.reference_date);

        tracing::debug!(
            "{} training types, {} people with expired or expiring trainings as of {}",
            completion_counts.len(),
            expiring.len(),
            report.reference_date
        );

        Ok(ReportSet {
            completion_counts,
            fiscal_year_roster,
            expiring,
        })
    }

    async fn load(&self, reports: ReportSet) -> Result<Vec<String>> {
        let files = self.config.output_files();
        let outputs = [
            (files.counts, to_pretty_json(&reports.completion_counts)?),
            (files.fiscal_year, to_pretty_json(&reports.fiscal_year_roster)?),
            (files.expiring, to_pretty_json(&reports.expiring)?),
        ];

        let mut written = Vec::new();
        let mut failed = Vec::new();

        // 逐一寫入，單一檔案失敗不影響其他檔案
        for (name, data) in outputs {
            let path = self.output_file(&name);
            match self.storage.write_file(&path, &data).await {
                Ok(()) => written.push(path),
                Err(e) => {
                    tracing::error!("❌ Failed to write {}: {}", path, e);
                    failed.push(path);
                }
            }
        }

        if !failed.is_empty() {
            return Err(ReportError::OutputWriteError { failed });
        }

        Ok(written)
    }
}
