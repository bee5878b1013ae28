//! ABO/Rh donor compatibility.
//!
//! A static graph from donor blood type to the receptor types that can accept it. Strings that
//! are not one of the eight recognised types have no receptors.

use std::str::FromStr;

/// The eight ABO/Rh blood types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BloodType {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown blood type: {0}")]
pub struct UnknownBloodType(pub String);

use BloodType::*;

impl BloodType {
    pub const ALL: [BloodType; 8] = [
        APositive, ANegative, BPositive, BNegative, AbPositive, AbNegative, OPositive, ONegative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            APositive => "A+",
            ANegative => "A-",
            BPositive => "B+",
            BNegative => "B-",
            AbPositive => "AB+",
            AbNegative => "AB-",
            OPositive => "O+",
            ONegative => "O-",
        }
    }

    /// Receptor types that can receive blood from a donor of this type.
    pub fn receptors(self) -> &'static [BloodType] {
        match self {
            APositive => &[APositive, AbPositive],
            ANegative => &[APositive, ANegative, AbPositive, AbNegative],
            BPositive => &[BPositive, AbPositive],
            BNegative => &[BPositive, BNegative, AbPositive, AbNegative],
            AbPositive => &[AbPositive],
            AbNegative => &[AbPositive, AbNegative],
            OPositive => &[APositive, BPositive, OPositive, AbPositive],
            ONegative => &[
                APositive, BPositive, OPositive, AbPositive, ANegative, BNegative, ONegative,
                AbNegative,
            ],
        }
    }
}

impl FromStr for BloodType {
    type Err = UnknownBloodType;

    /// Exact, case-sensitive match on the usual notation (`"AB-"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownBloodType(s.to_string()))
    }
}

impl std::fmt::Display for BloodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receptor types for a donor given as free text; empty for unrecognised input.
pub fn receptor_types(donor: &str) -> &'static [BloodType] {
    donor
        .parse::<BloodType>()
        .map(BloodType::receptors)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(types: &[BloodType]) -> Vec<&'static str> {
        let mut out: Vec<_> = types.iter().map(|t| t.as_str()).collect();
        out.sort_unstable();
        out
    }

    #[test]
    fn receptor_table_matches_transfusion_rules() {
        let expected: [(&str, &[&str]); 8] = [
            ("A+", &["A+", "AB+"]),
            ("A-", &["A+", "A-", "AB+", "AB-"]),
            ("B+", &["AB+", "B+"]),
            ("B-", &["AB+", "AB-", "B+", "B-"]),
            ("AB+", &["AB+"]),
            ("AB-", &["AB+", "AB-"]),
            ("O+", &["A+", "AB+", "B+", "O+"]),
            ("O-", &["A+", "A-", "AB+", "AB-", "B+", "B-", "O+", "O-"]),
        ];

        for (donor, receptors) in expected {
            let mut receptors = receptors.to_vec();
            receptors.sort_unstable();
            assert_eq!(labels(receptor_types(donor)), receptors, "donor {donor}");
        }
    }

    #[test]
    fn unknown_types_have_no_receptors() {
        assert!(receptor_types("C+").is_empty());
        assert!(receptor_types("a+").is_empty());
        assert!(receptor_types("").is_empty());
    }

    #[test]
    fn every_type_can_donate_to_itself() {
        for blood_type in BloodType::ALL {
            assert!(blood_type.receptors().contains(&blood_type), "{blood_type}");
        }
    }

    #[test]
    fn ab_positive_receives_from_everyone() {
        for donor in BloodType::ALL {
            assert!(donor.receptors().contains(&BloodType::AbPositive), "{donor}");
        }
    }

    #[test]
    fn parse_round_trips_notation() {
        assert_eq!("AB-".parse::<BloodType>(), Ok(BloodType::AbNegative));
        assert_eq!(
            "ab-".parse::<BloodType>(),
            Err(UnknownBloodType("ab-".to_string()))
        );
    }
}
