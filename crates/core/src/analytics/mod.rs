//! Candidate analytics engine.
//!
//! Pure functions turning a borrowed candidate slice into aggregate reports. Nothing here
//! performs I/O or reads the clock: the reference date for age computation is supplied by the
//! caller through [`CandidateAnalysis::new`].

pub mod age;
pub mod compatibility;
pub mod metrics;
pub mod reports;
pub mod rounding;

use crate::error::AnalysisResult;
use api_shared::{AnalysisRes, Candidate};
use chrono::NaiveDate;
use rounding::round_report;
use std::collections::BTreeMap;

/// Facade running every report against one reference date.
///
/// Average and percentage reports are rounded to two decimals here, once, with
/// [`rounding::round_two_decimals`]. Count reports are returned as is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateAnalysis {
    today: NaiveDate,
}

impl CandidateAnalysis {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Run all five reports and merge them into one composite.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidDateFormat` if any candidate has a malformed birth date.
    /// No partial report is produced.
    pub fn analyze(&self, candidates: &[Candidate]) -> AnalysisResult<AnalysisRes> {
        tracing::debug!(
            "analysing {} candidates as of {}",
            candidates.len(),
            self.today
        );

        Ok(AnalysisRes {
            candidates_by_state: self.candidates_by_state(candidates),
            mean_bmi_by_age_bracket: self.mean_bmi_by_age_bracket(candidates)?,
            obesity_percentage_by_sex: self.obesity_percentage_by_sex(candidates),
            mean_age_by_blood_type: self.mean_age_by_blood_type(candidates)?,
            possible_donors: self.possible_donors(candidates)?,
        })
    }

    pub fn candidates_by_state(&self, candidates: &[Candidate]) -> BTreeMap<String, u64> {
        reports::candidates_by_state(candidates)
    }

    pub fn mean_bmi_by_age_bracket(
        &self,
        candidates: &[Candidate],
    ) -> AnalysisResult<BTreeMap<String, f64>> {
        reports::mean_bmi_by_age_bracket(candidates, self.today).map(round_report)
    }

    pub fn obesity_percentage_by_sex(&self, candidates: &[Candidate]) -> BTreeMap<String, f64> {
        round_report(reports::obesity_percentage_by_sex(candidates))
    }

    pub fn mean_age_by_blood_type(
        &self,
        candidates: &[Candidate],
    ) -> AnalysisResult<BTreeMap<String, f64>> {
        reports::mean_age_by_blood_type(candidates, self.today).map(round_report)
    }

    pub fn possible_donors(
        &self,
        candidates: &[Candidate],
    ) -> AnalysisResult<BTreeMap<String, u64>> {
        reports::possible_donors(candidates, self.today)
    }
}
