//! # Citel Core
//!
//! Core business logic for the candidate registry.
//!
//! This crate contains pure data operations:
//! - The analytics engine (`analytics`): age, BMI, bracketing, donor eligibility, blood-type
//!   compatibility and the five aggregate reports
//! - Candidate storage behind the `CandidateRepository` trait
//! - Registration with validation and duplicate checks (`CandidateService`)
//!
//! **No API concerns**: HTTP servers, status codes and OpenAPI documents belong in `api-rest`.

pub mod analytics;
pub mod config;
pub mod constants;
pub mod error;
pub mod repositories;
pub mod service;
pub mod validation;

pub use api_shared::{AnalysisRes, Candidate};
pub use citel_types::{EmailAddress, NonEmptyText, TextError};

pub use analytics::CandidateAnalysis;
pub use config::CoreConfig;
pub use constants::DEFAULT_REST_ADDR;
pub use error::{AnalysisError, AnalysisResult, CandidateError, CandidateResult};
pub use repositories::{
    CandidateRepository, InMemoryCandidateRepository, JsonFileCandidateRepository,
};
pub use service::CandidateService;
