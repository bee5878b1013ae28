//! Per-candidate classification rules: BMI, age brackets, donor eligibility and sex partition.

use crate::constants::{
    MAX_DONOR_AGE, MIN_DONOR_AGE, MIN_DONOR_WEIGHT_KG, OBESITY_BMI_THRESHOLD, SEX_FEMALE, SEX_MALE,
};

/// Body-mass index: `weight / height²` (kg, m).
///
/// No range checks; a zero height yields an infinite (or NaN) result.
pub fn body_mass_index(weight: f64, height: f64) -> f64 {
    weight / (height * height)
}

pub fn is_obese(bmi: f64) -> bool {
    bmi > OBESITY_BMI_THRESHOLD
}

/// Blood donation rule: age within 16..=69 and weight strictly above 50 kg.
pub fn is_donor_eligible(age: i32, weight: f64) -> bool {
    (MIN_DONOR_AGE..=MAX_DONOR_AGE).contains(&age) && weight > MIN_DONOR_WEIGHT_KG
}

/// Fixed age ranges used for grouping. Upper bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeBracket {
    UpTo10,
    From11To20,
    From21To30,
    From31To40,
    From41To50,
    From51To60,
    Over60,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 7] = [
        AgeBracket::UpTo10,
        AgeBracket::From11To20,
        AgeBracket::From21To30,
        AgeBracket::From31To40,
        AgeBracket::From41To50,
        AgeBracket::From51To60,
        AgeBracket::Over60,
    ];

    /// Total over all integers; negative ages land in the first bracket.
    pub fn from_age(age: i32) -> Self {
        match age {
            i32::MIN..=10 => AgeBracket::UpTo10,
            11..=20 => AgeBracket::From11To20,
            21..=30 => AgeBracket::From21To30,
            31..=40 => AgeBracket::From31To40,
            41..=50 => AgeBracket::From41To50,
            51..=60 => AgeBracket::From51To60,
            _ => AgeBracket::Over60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeBracket::UpTo10 => "0-10",
            AgeBracket::From11To20 => "11-20",
            AgeBracket::From21To30 => "21-30",
            AgeBracket::From31To40 => "31-40",
            AgeBracket::From41To50 => "41-50",
            AgeBracket::From51To60 => "51-60",
            AgeBracket::Over60 => "61+",
        }
    }
}

impl std::fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sex partitions recognised by the obesity report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Case-insensitive match against the registry labels; anything else is `None`.
    pub fn classify(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case(SEX_MALE) {
            Some(Sex::Male)
        } else if value.eq_ignore_ascii_case(SEX_FEMALE) {
            Some(Sex::Female)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => SEX_MALE,
            Sex::Female => SEX_FEMALE,
        }
    }
}
