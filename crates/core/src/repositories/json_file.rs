//! Candidate store persisted as a single JSON document.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//!   candidates.json   # { "last_id": 3, "candidates": [ ... ] }
//! ```
//!
//! The document is rewritten in full after every mutation. A mutation is applied to a copy of
//! the table and only becomes visible once the write succeeded, so a failed write leaves both
//! the file and the in-memory view unchanged.

use super::{CandidateRepository, CandidateTable};
use crate::constants::CANDIDATES_JSON_FILENAME;
use crate::error::{CandidateError, CandidateResult};
use api_shared::Candidate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

#[derive(Serialize, Deserialize)]
struct StoredCandidates {
    #[serde(default)]
    last_id: u64,
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// Candidate store backed by `<data_dir>/candidates.json`.
#[derive(Debug)]
pub struct JsonFileCandidateRepository {
    path: PathBuf,
    table: Mutex<CandidateTable>,
}

impl JsonFileCandidateRepository {
    /// Open (or create) the store in `data_dir`.
    ///
    /// A missing directory is created; a missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns `CandidateError` if the directory cannot be created or the existing document
    /// cannot be read or parsed.
    pub fn open(data_dir: &Path) -> CandidateResult<Self> {
        fs::create_dir_all(data_dir).map_err(CandidateError::StorageDirCreation)?;

        let path = data_dir.join(CANDIDATES_JSON_FILENAME);
        let table = if path.is_file() {
            let contents = fs::read_to_string(&path).map_err(CandidateError::FileRead)?;
            let stored: StoredCandidates =
                serde_json::from_str(&contents).map_err(CandidateError::Deserialization)?;
            CandidateTable::from_rows(stored.last_id, stored.candidates)
        } else {
            CandidateTable::default()
        };

        tracing::info!(
            "opened candidate store {} ({} candidates)",
            path.display(),
            table.rows().len()
        );

        Ok(Self {
            path,
            table: Mutex::new(table),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> CandidateResult<MutexGuard<'_, CandidateTable>> {
        self.table.lock().map_err(|_| CandidateError::StorePoisoned)
    }

    fn persist(&self, table: &CandidateTable) -> CandidateResult<()> {
        let stored = StoredCandidates {
            last_id: table.last_id(),
            candidates: table.rows(),
        };
        let json = serde_json::to_string_pretty(&stored).map_err(CandidateError::Serialization)?;
        fs::write(&self.path, json).map_err(CandidateError::FileWrite)
    }

    /// Apply `change` to a copy of the table, persist it, then publish it.
    ///
    /// If `change` fails nothing is written.
    fn mutate<T>(
        &self,
        change: impl FnOnce(&mut CandidateTable) -> CandidateResult<T>,
    ) -> CandidateResult<T> {
        let mut table = self.lock()?;
        let mut next = table.clone();
        let out = change(&mut next)?;
        self.persist(&next)?;
        *table = next;
        Ok(out)
    }
}

impl CandidateRepository for JsonFileCandidateRepository {
    fn fetch_all(&self) -> CandidateResult<Vec<Candidate>> {
        Ok(self.lock()?.rows())
    }

    fn find_by_id(&self, id: u64) -> CandidateResult<Option<Candidate>> {
        Ok(self.lock()?.get(id))
    }

    fn save(&self, candidate: Candidate) -> CandidateResult<Candidate> {
        self.mutate(|table| table.insert_unique(candidate))
    }

    fn save_all(&self, candidates: Vec<Candidate>) -> CandidateResult<Vec<Candidate>> {
        self.mutate(|table| table.insert_all(candidates))
    }

    fn exists_by_cpf(&self, cpf: &str) -> CandidateResult<bool> {
        Ok(self.lock()?.contains_cpf(cpf))
    }

    fn exists_by_email(&self, email: &str) -> CandidateResult<bool> {
        Ok(self.lock()?.contains_email(email))
    }

    fn delete_all(&self) -> CandidateResult<()> {
        self.mutate(|table| {
            table.clear();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn candidate(cpf: &str) -> Candidate {
        Candidate {
            name: "Ana".into(),
            cpf: cpf.to_string(),
            state: "SP".into(),
            ..Candidate::default()
        }
    }

    #[test]
    fn open_creates_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("nested").join("store");

        let repo = JsonFileCandidateRepository::open(&data_dir).expect("open should succeed");

        assert!(data_dir.is_dir());
        assert!(repo.fetch_all().unwrap().is_empty());
        assert!(!repo.path().exists(), "file is only written on mutation");
    }

    #[test]
    fn candidates_survive_reopen() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        {
            let repo = JsonFileCandidateRepository::open(temp_dir.path()).unwrap();
            repo.save_all(vec![candidate("111"), candidate("222")]).unwrap();
        }

        let repo = JsonFileCandidateRepository::open(temp_dir.path()).unwrap();
        let all = repo.fetch_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, Some(1));
        assert_eq!(all[1].cpf, "222");
        assert!(repo.exists_by_cpf("111").unwrap());

        let third = repo.save(candidate("333")).unwrap();
        assert_eq!(third.id, Some(3));
    }

    #[test]
    fn ids_are_not_reused_after_delete_and_reopen() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        {
            let repo = JsonFileCandidateRepository::open(temp_dir.path()).unwrap();
            repo.save(candidate("111")).unwrap();
            repo.delete_all().unwrap();
        }

        let repo = JsonFileCandidateRepository::open(temp_dir.path()).unwrap();
        assert!(repo.fetch_all().unwrap().is_empty());
        assert_eq!(repo.save(candidate("222")).unwrap().id, Some(2));
    }

    #[test]
    fn duplicate_save_leaves_file_unchanged() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = JsonFileCandidateRepository::open(temp_dir.path()).unwrap();
        repo.save(candidate("111")).unwrap();
        let before = fs::read_to_string(repo.path()).unwrap();

        let err = repo.save(candidate("111")).unwrap_err();

        assert!(matches!(err, CandidateError::DuplicateCpf(_)));
        assert_eq!(fs::read_to_string(repo.path()).unwrap(), before);
        assert_eq!(repo.fetch_all().unwrap().len(), 1);
    }

    #[test]
    fn corrupt_document_is_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join(CANDIDATES_JSON_FILENAME), "{ not json")
            .expect("should write corrupt file");

        let err = JsonFileCandidateRepository::open(temp_dir.path()).unwrap_err();
        assert!(matches!(err, CandidateError::Deserialization(_)));
    }

    #[test]
    fn stored_document_uses_wire_field_names() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = JsonFileCandidateRepository::open(temp_dir.path()).unwrap();
        repo.save(candidate("111")).unwrap();

        let raw = fs::read_to_string(repo.path()).unwrap();
        assert!(raw.contains("\"last_id\": 1"));
        assert!(raw.contains("\"nome\": \"Ana\""));
        assert!(raw.contains("\"estado\": \"SP\""));
    }
}
