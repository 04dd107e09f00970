use std::path::Path;

use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::features::dataset::dto::{Bill, Dataset, Legislator, Vote, VoteResult};

pub const LEGISLATORS_FILE: &str = "legislators.csv";
pub const BILLS_FILE: &str = "bills.csv";
pub const VOTES_FILE: &str = "votes.csv";
pub const VOTE_RESULTS_FILE: &str = "vote_results.csv";

pub fn load_table<T>(dir: &Path, filename: &str) -> Result<Vec<T>, AppError>
where
    T: DeserializeOwned,
{
    let path = dir.join(filename);
    let mut reader = csv::Reader::from_path(&path)
        .map_err(|err| AppError::load(format!("failed to open {}: {err}", path.display())))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T = record
            .map_err(|err| AppError::load(format!("malformed row in {}: {err}", path.display())))?;
        rows.push(row);
    }

    Ok(rows)
}

pub fn load_dataset(dir: &Path) -> Result<Dataset, AppError> {
    let legislators: Vec<Legislator> = load_table(dir, LEGISLATORS_FILE)?;
    let bills: Vec<Bill> = load_table(dir, BILLS_FILE)?;
    let votes: Vec<Vote> = load_table(dir, VOTES_FILE)?;
    let vote_results: Vec<VoteResult> = load_table(dir, VOTE_RESULTS_FILE)?;

    tracing::debug!(
        legislators = legislators.len(),
        bills = bills.len(),
        votes = votes.len(),
        vote_results = vote_results.len(),
        "dataset loaded"
    );

    Ok(Dataset {
        legislators,
        bills,
        votes,
        vote_results,
    })
}
