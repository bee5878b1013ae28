//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handling never reads process-wide environment variables,
//! which keeps behaviour consistent across threads and test harnesses.

use crate::analytics::age::parse_birth_date;
use crate::{CandidateError, CandidateResult};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    data_dir: Option<PathBuf>,
    reference_date: Option<NaiveDate>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// * `data_dir` - directory holding the JSON candidate store; `None` keeps candidates in
    ///   memory only.
    /// * `reference_date` - fixed "today" for age computation; `None` uses the local calendar
    ///   date at the moment each report is computed.
    ///
    /// # Errors
    ///
    /// Returns `CandidateError::InvalidInput` if `data_dir` exists but is not a directory.
    pub fn new(
        data_dir: Option<PathBuf>,
        reference_date: Option<NaiveDate>,
    ) -> CandidateResult<Self> {
        if let Some(dir) = &data_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(CandidateError::InvalidInput(format!(
                    "candidate data path is not a directory: {}",
                    dir.display()
                )));
            }
        }

        Ok(Self {
            data_dir,
            reference_date,
        })
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// The date ages are computed against for a report started now.
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Parse the optional fixed reference date from an environment value.
///
/// `None`, empty and whitespace-only values mean "use the system clock".
pub fn reference_date_from_env_value(value: Option<String>) -> CandidateResult<Option<NaiveDate>> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    Ok(value.map(|v| parse_birth_date(&v)).transpose()?)
}

/// Parse the optional candidate data directory from an environment value.
pub fn data_dir_from_env_value(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnalysisError;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn reference_date_defaults_to_none() {
        assert_eq!(reference_date_from_env_value(None).unwrap(), None);
        assert_eq!(
            reference_date_from_env_value(Some("   ".into())).unwrap(),
            None
        );
    }

    #[test]
    fn reference_date_parses_registry_format() {
        let date = reference_date_from_env_value(Some("01/01/2024".into())).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn reference_date_rejects_iso_format() {
        let err = reference_date_from_env_value(Some("2024-01-01".into())).unwrap_err();
        assert!(matches!(
            err,
            CandidateError::Analysis(AnalysisError::InvalidDateFormat { .. })
        ));
    }

    #[test]
    fn fixed_reference_date_is_used_as_today() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let cfg = CoreConfig::new(None, Some(date)).unwrap();
        assert_eq!(cfg.today(), date);
    }

    #[test]
    fn data_dir_may_not_exist_yet() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = CoreConfig::new(Some(temp_dir.path().join("later")), None).unwrap();
        assert!(cfg.data_dir().is_some());
    }

    #[test]
    fn data_dir_rejects_regular_file() {
        let file = NamedTempFile::new().expect("Failed to create temp file");
        let err = CoreConfig::new(Some(file.path().to_path_buf()), None).unwrap_err();
        assert!(matches!(err, CandidateError::InvalidInput(_)));
    }

    #[test]
    fn data_dir_ignores_blank_env_value() {
        assert_eq!(data_dir_from_env_value(Some("".into())), None);
        assert_eq!(
            data_dir_from_env_value(Some("/tmp/citel".into())),
            Some(PathBuf::from("/tmp/citel"))
        );
    }
}
