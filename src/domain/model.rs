use crate::domain::dates::{calendar_date, optional_calendar_date};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const DEFAULT_TRAININGS: [&str; 3] = [
    "Electrical Safety for Labs",
    "X-Ray Safety",
    "Laboratory Safety Training",
];
pub const DEFAULT_FISCAL_YEAR: i32 = 2024;
pub const DEFAULT_REFERENCE_DATE: &str = "2023-10-01";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub completions: Vec<Completion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub name: String,
    #[serde(with = "calendar_date")]
    pub timestamp: NaiveDate,
    #[serde(
        default,
        with = "optional_calendar_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires: Option<NaiveDate>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Completion>, D::Error> {
    Ok(Option::<Vec<Completion>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Training name -> number of completion records.
pub type CompletionCounts = BTreeMap<String, usize>;

/// Training name -> people who completed it inside the fiscal year, in input order.
pub type FiscalYearRoster = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingStatus {
    #[serde(rename = "expired")]
    Expired,
    #[serde(rename = "expires soon")]
    ExpiresSoon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiringTraining {
    pub name: String,
    pub status: TrainingStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiringPerson {
    pub name: String,
    pub trainings: Vec<ExpiringTraining>,
}

/// Parameters for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub training_names: BTreeSet<String>,
    pub fiscal_year: i32,
    pub reference_date: NaiveDate,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            training_names: DEFAULT_TRAININGS.iter().map(|s| s.to_string()).collect(),
            fiscal_year: DEFAULT_FISCAL_YEAR,
            reference_date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFiles {
    pub counts: String,
    pub fiscal_year: String,
    pub expiring: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            counts: "output1.json".to_string(),
            fiscal_year: "output2.json".to_string(),
            expiring: "output3.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSet {
    pub completion_counts: CompletionCounts,
    pub fiscal_year_roster: FiscalYearRoster,
    pub expiring: Vec<ExpiringPerson>,
}
