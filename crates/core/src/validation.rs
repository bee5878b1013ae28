//! Input validation utilities.
//!
//! This module checks candidates before they are stored or analysed. Validation returns a
//! normalised copy: required text is trimmed and the email is lowercased so duplicate checks
//! compare like with like.

use crate::analytics::age::parse_birth_date;
use crate::{CandidateError, CandidateResult};
use api_shared::Candidate;
use citel_types::{EmailAddress, NonEmptyText};

fn required(field: &'static str, value: &str) -> CandidateResult<String> {
    NonEmptyText::new(value)
        .map(|text| text.as_str().to_owned())
        .map_err(|source| CandidateError::InvalidField { field, source })
}

/// Validates height and weight, which feed the BMI and donor rules.
///
/// # Errors
///
/// Returns `CandidateError::InvalidInput` if either value is not a finite positive number.
pub fn validate_measurements(candidate: &Candidate) -> CandidateResult<()> {
    for (field, value) in [("altura", candidate.height), ("peso", candidate.weight)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(CandidateError::InvalidInput(format!(
                "{field} must be a positive number, got {value}"
            )));
        }
    }
    Ok(())
}

/// Validates a candidate submitted for registration and returns its normalised form.
///
/// Any client-supplied `id` is dropped; storage assigns ids.
///
/// # Errors
///
/// Returns a `CandidateError` if:
/// - a required text field (`nome`, `cpf`, `rg`, `sexo`, `mae`, `pai`, `email`) is blank,
/// - the email is malformed,
/// - `data_nasc` is not a valid `dd/MM/yyyy` date,
/// - height or weight is not a positive number.
pub fn validate_new_candidate(candidate: Candidate) -> CandidateResult<Candidate> {
    let name = required("nome", &candidate.name)?;
    let cpf = required("cpf", &candidate.cpf)?;
    let rg = required("rg", &candidate.rg)?;
    let sex = required("sexo", &candidate.sex)?;
    let mother = required("mae", &candidate.mother)?;
    let father = required("pai", &candidate.father)?;
    let email = EmailAddress::parse(&candidate.email).map_err(|source| {
        CandidateError::InvalidField {
            field: "email",
            source,
        }
    })?;

    parse_birth_date(&candidate.birth_date)?;
    validate_measurements(&candidate)?;

    Ok(Candidate {
        id: None,
        name,
        cpf,
        rg,
        sex,
        mother,
        father,
        email: email.as_str().to_owned(),
        ..candidate
    })
}
