//! Report aggregators.
//!
//! Each function is an independent, order-insensitive reduction over a borrowed candidate
//! slice. Averages and percentages are returned unrounded; rounding belongs to the facade in
//! [`crate::analytics::CandidateAnalysis`].
//!
//! Aggregators that need an age compute it for every candidate, so a single malformed birth
//! date fails the whole report.

use super::age::age_in_years;
use super::compatibility::receptor_types;
use super::metrics::{body_mass_index, is_donor_eligible, is_obese, AgeBracket, Sex};
use crate::error::AnalysisResult;
use api_shared::Candidate;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Running arithmetic mean.
#[derive(Clone, Copy, Debug, Default)]
struct Mean {
    sum: f64,
    count: u64,
}

impl Mean {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn value(self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

fn finish<K: ToString>(groups: BTreeMap<K, Mean>) -> BTreeMap<String, f64> {
    groups
        .into_iter()
        .map(|(key, mean)| (key.to_string(), mean.value()))
        .collect()
}

/// Number of candidates per state label (exact, case-sensitive).
pub fn candidates_by_state(candidates: &[Candidate]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for candidate in candidates {
        *counts.entry(candidate.state.clone()).or_insert(0) += 1;
    }
    counts
}

/// Mean BMI per age bracket. Brackets with no candidates are absent.
pub fn mean_bmi_by_age_bracket(
    candidates: &[Candidate],
    today: NaiveDate,
) -> AnalysisResult<BTreeMap<String, f64>> {
    let mut groups: BTreeMap<AgeBracket, Mean> = BTreeMap::new();
    for candidate in candidates {
        let age = age_in_years(&candidate.birth_date, today)?;
        let bmi = body_mass_index(candidate.weight, candidate.height);
        groups.entry(AgeBracket::from_age(age)).or_default().push(bmi);
    }
    Ok(finish(groups))
}

/// Percentage of obese candidates (BMI > 30) within each sex partition.
///
/// Both partitions are always reported; an empty partition reports 0. Candidates whose sex is
/// neither label are ignored entirely.
pub fn obesity_percentage_by_sex(candidates: &[Candidate]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<Sex, (u64, u64)> = Sex::ALL.iter().map(|s| (*s, (0, 0))).collect();

    for candidate in candidates {
        let Some(sex) = Sex::classify(&candidate.sex) else {
            continue;
        };
        let (total, obese) = totals.entry(sex).or_default();
        *total += 1;
        if is_obese(body_mass_index(candidate.weight, candidate.height)) {
            *obese += 1;
        }
    }

    totals
        .into_iter()
        .map(|(sex, (total, obese))| {
            let percentage = if total == 0 {
                0.0
            } else {
                obese as f64 / total as f64 * 100.0
            };
            (sex.label().to_string(), percentage)
        })
        .collect()
}

/// Mean age per blood-type string. Absent or blank blood types are not grouped.
pub fn mean_age_by_blood_type(
    candidates: &[Candidate],
    today: NaiveDate,
) -> AnalysisResult<BTreeMap<String, f64>> {
    let mut groups: BTreeMap<&str, Mean> = BTreeMap::new();
    for candidate in candidates {
        let age = age_in_years(&candidate.birth_date, today)?;
        let Some(blood_type) = candidate
            .blood_type
            .as_deref()
            .filter(|b| !b.trim().is_empty())
        else {
            continue;
        };
        groups.entry(blood_type).or_default().push(f64::from(age));
    }
    Ok(finish(groups))
}

/// Number of eligible donors able to give to each receptor type.
///
/// Every eligible donor adds one to each type in its receptor set. Receptor types nobody can
/// give to are absent.
pub fn possible_donors(
    candidates: &[Candidate],
    today: NaiveDate,
) -> AnalysisResult<BTreeMap<String, u64>> {
    let mut counts = BTreeMap::new();
    for candidate in candidates {
        let age = age_in_years(&candidate.birth_date, today)?;
        if !is_donor_eligible(age, candidate.weight) {
            continue;
        }
        let donor = candidate.blood_type.as_deref().unwrap_or_default();
        for receptor in receptor_types(donor) {
            *counts.entry(receptor.to_string()).or_insert(0) += 1;
        }
    }
    Ok(counts)
}
