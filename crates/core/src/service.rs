//! Candidate service.
//!
//! Pure data operations over an injected [`CandidateRepository`]: registration with duplicate
//! checks, lookup, deletion and analysis. No API concerns live here; HTTP status mapping
//! belongs in `api-rest`.

use crate::analytics::CandidateAnalysis;
use crate::config::CoreConfig;
use crate::error::{CandidateError, CandidateResult};
use crate::repositories::{
    CandidateRepository, InMemoryCandidateRepository, JsonFileCandidateRepository,
};
use crate::validation::{validate_measurements, validate_new_candidate};
use api_shared::{AnalysisRes, Candidate};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone)]
pub struct CandidateService {
    cfg: Arc<CoreConfig>,
    repository: Arc<dyn CandidateRepository>,
}

impl CandidateService {
    pub fn new(cfg: Arc<CoreConfig>, repository: Arc<dyn CandidateRepository>) -> Self {
        Self { cfg, repository }
    }

    /// Builds a service over the store selected by configuration.
    ///
    /// With a data directory configured candidates are kept in its JSON file, otherwise in
    /// memory.
    ///
    /// # Errors
    ///
    /// Returns `CandidateError` if the JSON store cannot be opened.
    pub fn from_config(cfg: Arc<CoreConfig>) -> CandidateResult<Self> {
        let repository: Arc<dyn CandidateRepository> = match cfg.data_dir() {
            Some(dir) => Arc::new(JsonFileCandidateRepository::open(dir)?),
            None => {
                tracing::info!("no candidate data directory configured; using in-memory store");
                Arc::new(InMemoryCandidateRepository::new())
            }
        };
        Ok(Self::new(cfg, repository))
    }

    /// Analysis facade for a report started now.
    pub fn analysis(&self) -> CandidateAnalysis {
        CandidateAnalysis::new(self.cfg.today())
    }

    pub fn find_all(&self) -> CandidateResult<Vec<Candidate>> {
        self.repository.fetch_all()
    }

    /// # Errors
    ///
    /// Returns `CandidateError::NotFound` if no candidate has this id.
    pub fn find_by_id(&self, id: u64) -> CandidateResult<Candidate> {
        self.repository
            .find_by_id(id)?
            .ok_or(CandidateError::NotFound(id))
    }

    /// Registers one candidate.
    ///
    /// # Errors
    ///
    /// Returns a `CandidateError` if validation fails, the CPF or email is already
    /// registered, or storage fails.
    pub fn create(&self, candidate: Candidate) -> CandidateResult<Candidate> {
        let candidate = validate_new_candidate(candidate)?;
        self.check_not_registered(&candidate)?;
        let saved = self.repository.save(candidate)?;
        tracing::info!("registered candidate {:?}", saved.id);
        Ok(saved)
    }

    /// Registers a batch of candidates, all or nothing.
    ///
    /// Every candidate is validated and checked for duplicates (against storage and within the
    /// batch) before anything is written.
    ///
    /// # Errors
    ///
    /// Returns the first `CandidateError` encountered; nothing is stored in that case.
    pub fn create_batch(&self, candidates: Vec<Candidate>) -> CandidateResult<Vec<Candidate>> {
        let mut cpfs = HashSet::new();
        let mut emails = HashSet::new();
        let mut validated = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let candidate = validate_new_candidate(candidate)?;
            self.check_not_registered(&candidate)?;

            if !cpfs.insert(candidate.cpf.clone()) {
                tracing::error!("CPF repeated within batch");
                return Err(CandidateError::DuplicateCpf(candidate.cpf));
            }
            if !emails.insert(candidate.email.clone()) {
                tracing::error!("email repeated within batch");
                return Err(CandidateError::DuplicateEmail(candidate.email));
            }

            validated.push(candidate);
        }

        let saved = self.repository.save_all(validated)?;
        tracing::info!("registered {} candidates", saved.len());
        Ok(saved)
    }

    fn check_not_registered(&self, candidate: &Candidate) -> CandidateResult<()> {
        if self.repository.exists_by_cpf(&candidate.cpf)? {
            tracing::error!("CPF already registered");
            return Err(CandidateError::DuplicateCpf(candidate.cpf.clone()));
        }
        if self.repository.exists_by_email(&candidate.email)? {
            tracing::error!("email already registered");
            return Err(CandidateError::DuplicateEmail(candidate.email.clone()));
        }
        Ok(())
    }

    pub fn delete_all(&self) -> CandidateResult<()> {
        self.repository.delete_all()?;
        tracing::info!("deleted all candidates");
        Ok(())
    }

    /// Composite report over candidates supplied by the caller.
    ///
    /// # Errors
    ///
    /// Returns `CandidateError::InvalidInput` for a non-positive height or weight and
    /// `CandidateError::Analysis` for a malformed birth date.
    pub fn analyze(&self, candidates: &[Candidate]) -> CandidateResult<AnalysisRes> {
        for candidate in candidates {
            validate_measurements(candidate)?;
        }
        Ok(self.analysis().analyze(candidates)?)
    }

    /// Composite report over every stored candidate, or `None` when nothing is stored.
    pub fn analyze_stored(&self) -> CandidateResult<Option<AnalysisRes>> {
        let candidates = self.repository.fetch_all()?;
        if candidates.is_empty() {
            return Ok(None);
        }
        self.analyze(&candidates).map(Some)
    }
}
