use citel_types::TextError;

/// Failures raised by the analytics engine.
///
/// The analytics functions are total apart from birth-date parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("invalid date format: {value} (expected dd/MM/yyyy)")]
    InvalidDateFormat { value: String },
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, thiserror::Error)]
pub enum CandidateError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid {field}: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: TextError,
    },
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("CPF already registered: {0}")]
    DuplicateCpf(String),
    #[error("email already registered: {0}")]
    DuplicateEmail(String),
    #[error("candidate not found: {0}")]
    NotFound(u64),

    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to read candidate file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write candidate file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize candidates: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize candidates: {0}")]
    Deserialization(serde_json::Error),
    #[error("candidate store lock poisoned")]
    StorePoisoned,
}

impl CandidateError {
    /// Whether the failure was caused by the caller's input rather than by storage.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CandidateError::InvalidInput(_)
                | CandidateError::InvalidField { .. }
                | CandidateError::Analysis(_)
        )
    }
}

pub type CandidateResult<T> = std::result::Result<T, CandidateError>;
