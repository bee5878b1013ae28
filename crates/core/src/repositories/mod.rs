//! Candidate storage.
//!
//! Storage is an injected capability: services hold an `Arc<dyn CandidateRepository>` and
//! never reach for a process-wide store. Two implementations are provided:
//!
//! - [`InMemoryCandidateRepository`]: the default, nothing survives a restart.
//! - [`JsonFileCandidateRepository`]: the whole collection as one JSON document in the
//!   configured data directory, rewritten on each mutation.
//!
//! Both hand out owned copies from `fetch_all`, so a report runs over its own snapshot while
//! other requests keep writing.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileCandidateRepository;
pub use memory::InMemoryCandidateRepository;

use crate::error::{CandidateError, CandidateResult};
use api_shared::Candidate;
use std::collections::BTreeMap;

/// Storage operations required by the candidate service.
pub trait CandidateRepository: Send + Sync {
    /// Every stored candidate, ordered by id.
    fn fetch_all(&self) -> CandidateResult<Vec<Candidate>>;

    fn find_by_id(&self, id: u64) -> CandidateResult<Option<Candidate>>;

    /// Store a candidate under a freshly assigned id and return the stored copy.
    ///
    /// Fails with `DuplicateCpf` or `DuplicateEmail` if a stored candidate already has the
    /// same non-blank CPF or email. The check and the insert happen under one lock.
    fn save(&self, candidate: Candidate) -> CandidateResult<Candidate>;

    /// Store several candidates in one step; either all are stored or none are.
    ///
    /// Uniqueness is enforced as for `save`, including between candidates of the batch.
    fn save_all(&self, candidates: Vec<Candidate>) -> CandidateResult<Vec<Candidate>>;

    fn exists_by_cpf(&self, cpf: &str) -> CandidateResult<bool>;

    fn exists_by_email(&self, email: &str) -> CandidateResult<bool>;

    fn delete_all(&self) -> CandidateResult<()>;
}

/// Id-keyed candidate collection shared by the repository implementations.
#[derive(Clone, Debug, Default)]
pub(crate) struct CandidateTable {
    last_id: u64,
    rows: BTreeMap<u64, Candidate>,
}

impl CandidateTable {
    /// Rebuild a table from persisted rows. Rows without an id are numbered after `last_id`.
    pub(crate) fn from_rows(last_id: u64, rows: Vec<Candidate>) -> Self {
        let mut table = Self {
            last_id,
            rows: BTreeMap::new(),
        };
        for row in rows {
            let id = match row.id {
                Some(id) => id,
                None => table.last_id + 1,
            };
            table.last_id = table.last_id.max(id);
            table.rows.insert(id, Candidate { id: Some(id), ..row });
        }
        table
    }

    pub(crate) fn last_id(&self) -> u64 {
        self.last_id
    }

    pub(crate) fn rows(&self) -> Vec<Candidate> {
        self.rows.values().cloned().collect()
    }

    pub(crate) fn get(&self, id: u64) -> Option<Candidate> {
        self.rows.get(&id).cloned()
    }

    pub(crate) fn insert(&mut self, candidate: Candidate) -> Candidate {
        self.last_id += 1;
        let stored = Candidate {
            id: Some(self.last_id),
            ..candidate
        };
        self.rows.insert(self.last_id, stored.clone());
        stored
    }

    /// Insert after checking that the CPF and email are not already taken.
    /// Blank keys are not checked.
    pub(crate) fn insert_unique(&mut self, candidate: Candidate) -> CandidateResult<Candidate> {
        if !candidate.cpf.is_empty() && self.contains_cpf(&candidate.cpf) {
            return Err(CandidateError::DuplicateCpf(candidate.cpf));
        }
        if !candidate.email.is_empty() && self.contains_email(&candidate.email) {
            return Err(CandidateError::DuplicateEmail(candidate.email));
        }
        Ok(self.insert(candidate))
    }

    /// Insert every candidate with `insert_unique`. Stops at the first duplicate; callers
    /// apply this to a copy so a failed batch leaves the table untouched.
    pub(crate) fn insert_all(
        &mut self,
        candidates: Vec<Candidate>,
    ) -> CandidateResult<Vec<Candidate>> {
        candidates
            .into_iter()
            .map(|candidate| self.insert_unique(candidate))
            .collect()
    }

    pub(crate) fn contains_cpf(&self, cpf: &str) -> bool {
        self.rows.values().any(|c| c.cpf == cpf)
    }

    pub(crate) fn contains_email(&self, email: &str) -> bool {
        self.rows.values().any(|c| c.email == email)
    }

    /// Removes every row. Ids keep counting from where they were.
    pub(crate) fn clear(&mut self) {
        self.rows.clear();
    }
}
