use crate::utils::error::{ReportError, Result};
use std::collections::BTreeSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Output names are joined onto the output directory, so they must stay inside it.
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "File name must not contain path separators".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_training_names(field_name: &str, names: &BTreeSet<String>) -> Result<()> {
    if names.is_empty() {
        return Err(ReportError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for name in names {
        validate_non_empty_string(field_name, name)?;
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("source.path", "trainings.txt").is_ok());
        assert!(validate_path("source.path", "").is_err());
        assert!(validate_path("source.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("load.filenames.counts", "output1.json").is_ok());
        assert!(validate_file_name("load.filenames.counts", "../output1.json").is_err());
        assert!(validate_file_name("load.filenames.counts", "..").is_err());
    }

    #[test]
    fn test_validate_training_names() {
        let names: BTreeSet<String> = ["X-Ray Safety".to_string()].into_iter().collect();
        assert!(validate_training_names("report.trainings", &names).is_ok());

        assert!(matches!(
            validate_training_names("report.trainings", &BTreeSet::new()),
            Err(ReportError::MissingConfigError { .. })
        ));

        let blank: BTreeSet<String> = ["  ".to_string()].into_iter().collect();
        assert!(validate_training_names("report.trainings", &blank).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("report.fiscal_year", 2024, 1, 9999).is_ok());
        assert!(validate_range("report.fiscal_year", 0, 1, 9999).is_err());
        assert!(validate_range("report.fiscal_year", 10_000, 1, 9999).is_err());
    }
}
