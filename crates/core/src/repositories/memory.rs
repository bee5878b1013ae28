use super::{CandidateRepository, CandidateTable};
use crate::error::{CandidateError, CandidateResult};
use api_shared::Candidate;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Candidate store held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryCandidateRepository {
    table: RwLock<CandidateTable>,
}

impl InMemoryCandidateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> CandidateResult<RwLockReadGuard<'_, CandidateTable>> {
        self.table.read().map_err(|_| CandidateError::StorePoisoned)
    }

    fn write(&self) -> CandidateResult<RwLockWriteGuard<'_, CandidateTable>> {
        self.table.write().map_err(|_| CandidateError::StorePoisoned)
    }
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn fetch_all(&self) -> CandidateResult<Vec<Candidate>> {
        Ok(self.read()?.rows())
    }

    fn find_by_id(&self, id: u64) -> CandidateResult<Option<Candidate>> {
        Ok(self.read()?.get(id))
    }

    fn save(&self, candidate: Candidate) -> CandidateResult<Candidate> {
        self.write()?.insert_unique(candidate)
    }

    fn save_all(&self, candidates: Vec<Candidate>) -> CandidateResult<Vec<Candidate>> {
        let mut table = self.write()?;
        let mut next = table.clone();
        let saved = next.insert_all(candidates)?;
        *table = next;
        Ok(saved)
    }

    fn exists_by_cpf(&self, cpf: &str) -> CandidateResult<bool> {
        Ok(self.read()?.contains_cpf(cpf))
    }

    fn exists_by_email(&self, email: &str) -> CandidateResult<bool> {
        Ok(self.read()?.contains_email(email))
    }

    fn delete_all(&self) -> CandidateResult<()> {
        self.write()?.clear();
        Ok(())
    }
}
