//! Constants used throughout the citel core crate.
//!
//! Classification thresholds, storage filenames and wire formats live here so the analytics
//! and storage code never hardcode them inline.

/// Filename of the JSON candidate store inside the configured data directory.
pub const CANDIDATES_JSON_FILENAME: &str = "candidates.json";

/// `chrono` format string for birth dates (`dd/MM/yyyy`).
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

/// Default bind address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Youngest age (inclusive) at which a candidate may donate blood.
pub const MIN_DONOR_AGE: i32 = 16;

/// Oldest age (inclusive) at which a candidate may donate blood.
pub const MAX_DONOR_AGE: i32 = 69;

/// Donors must weigh strictly more than this, in kilograms.
pub const MIN_DONOR_WEIGHT_KG: f64 = 50.0;

/// A BMI strictly above this value counts as obese.
pub const OBESITY_BMI_THRESHOLD: f64 = 30.0;

/// Sex label for the male partition of the obesity report.
pub const SEX_MALE: &str = "masculino";

/// Sex label for the female partition of the obesity report.
pub const SEX_FEMALE: &str = "feminino";
