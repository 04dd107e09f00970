use std::collections::HashMap;

use tracing::warn;

use crate::features::dataset::dto::{VoteResult, VoteType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub supported: u32,
    pub opposed: u32,
}

impl VoteTally {
    fn record(&mut self, vote_type: VoteType) {
        match vote_type {
            VoteType::Support => self.supported += 1,
            VoteType::Oppose => self.opposed += 1,
        }
    }
}

pub fn tally_results<F>(vote_results: &[VoteResult], group_key: F) -> HashMap<u64, VoteTally>
where
    F: Fn(&VoteResult) -> Option<u64>,
{
    let mut tallies: HashMap<u64, VoteTally> = HashMap::new();

    for result in vote_results {
        let Some(key) = group_key(result) else {
            continue;
        };

        match VoteType::from_wire(result.vote_type) {
            Some(vote_type) => tallies.entry(key).or_default().record(vote_type),
            None => warn!(
                vote_result_id = result.id,
                vote_type = result.vote_type,
                "unrecognized vote type, result counted nowhere"
            ),
        }
    }

    tallies
}
