use chrono::NaiveDate;
use citel_core::analytics::age::parse_birth_date;
use citel_core::{Candidate, CandidateService, CoreConfig};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "citel")]
#[command(about = "Citel candidate registry CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a JSON file holding an array of candidates
    Analyze {
        /// Path to the JSON file
        file: PathBuf,
        /// Date ages are computed against (dd/MM/yyyy, defaults to today)
        #[arg(long, value_parser = parse_reference_date)]
        reference_date: Option<NaiveDate>,
    },
    /// List stored candidates
    List {
        /// Directory holding candidates.json
        #[arg(long, env = "CANDIDATE_DATA_DIR")]
        data_dir: PathBuf,
    },
    /// Delete every stored candidate
    DeleteAll {
        /// Directory holding candidates.json
        #[arg(long, env = "CANDIDATE_DATA_DIR")]
        data_dir: PathBuf,
    },
}

fn parse_reference_date(value: &str) -> Result<NaiveDate, String> {
    parse_birth_date(value).map_err(|e| e.to_string())
}

fn load_candidates(path: &Path) -> Result<Vec<Candidate>, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn stored_service(data_dir: PathBuf) -> Result<CandidateService, Box<dyn std::error::Error>> {
    let cfg = Arc::new(CoreConfig::new(Some(data_dir), None)?);
    Ok(CandidateService::from_config(cfg)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze {
            file,
            reference_date,
        }) => {
            let candidates = load_candidates(&file)?;
            if candidates.is_empty() {
                println!("No candidates found in {}.", file.display());
                return Ok(());
            }

            let cfg = Arc::new(CoreConfig::new(None, reference_date)?);
            let service = CandidateService::from_config(cfg)?;
            let report = service.analyze(&candidates)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Some(Commands::List { data_dir }) => {
            let candidates = stored_service(data_dir)?.find_all()?;
            if candidates.is_empty() {
                println!("No candidates found.");
            } else {
                for candidate in candidates {
                    println!(
                        "ID: {}, Name: {}, CPF: {}, Email: {}, State: {}",
                        candidate.id.unwrap_or_default(),
                        candidate.name,
                        candidate.cpf,
                        candidate.email,
                        candidate.state
                    );
                }
            }
        }
        Some(Commands::DeleteAll { data_dir }) => {
            stored_service(data_dir)?.delete_all()?;
            println!("All candidates were deleted.");
        }
        None => {
            println!("Use 'citel --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn analyze_accepts_reference_date() {
        let cli = Cli::try_parse_from([
            "citel",
            "analyze",
            "candidates.json",
            "--reference-date",
            "01/01/2024",
        ])
        .expect("arguments should parse");

        match cli.command {
            Some(Commands::Analyze {
                file,
                reference_date,
            }) => {
                assert_eq!(file, PathBuf::from("candidates.json"));
                assert_eq!(reference_date, NaiveDate::from_ymd_opt(2024, 1, 1));
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn analyze_rejects_malformed_reference_date() {
        let result = Cli::try_parse_from([
            "citel",
            "analyze",
            "candidates.json",
            "--reference-date",
            "2024-01-01",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn list_takes_data_dir_flag() {
        let cli = Cli::try_parse_from(["citel", "list", "--data-dir", "/tmp/citel"])
            .expect("arguments should parse");
        assert!(matches!(
            cli.command,
            Some(Commands::List { data_dir }) if data_dir == PathBuf::from("/tmp/citel")
        ));
    }

    #[test]
    fn load_candidates_reads_wire_format() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("candidates.json");
        std::fs::write(
            &path,
            r#"[{"nome": "Ana", "data_nasc": "01/01/2000", "estado": "SP", "altura": 1.75, "peso": 70.0}]"#,
        )
        .expect("should write file");

        let candidates = load_candidates(&path).expect("file should load");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Ana");
        assert_eq!(candidates[0].state, "SP");
    }

    #[test]
    fn load_candidates_reports_invalid_json() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("candidates.json");
        std::fs::write(&path, "{ not json").expect("should write file");

        assert!(load_candidates(&path).is_err());
    }
}
