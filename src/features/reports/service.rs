use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::features::dataset::dto::{Bill, Legislator, Vote, VoteResult};
use crate::features::reports::dto::{BillVoteCount, LegislatorVoteCount, UNAVAILABLE_SPONSOR};
use crate::features::reports::helpers::tally_results;

pub fn legislator_vote_counts(
    legislators: &[Legislator],
    vote_results: &[VoteResult],
) -> Vec<LegislatorVoteCount> {
    let tallies = tally_results(vote_results, |result| Some(result.legislator_id));

    legislators
        .iter()
        .map(|legislator| {
            let tally = tallies.get(&legislator.id).copied().unwrap_or_default();
            LegislatorVoteCount {
                id: legislator.id,
                name: legislator.name.clone(),
                num_supported_bills: tally.supported,
                num_opposed_bills: tally.opposed,
            }
        })
        .collect()
}

pub fn bill_vote_counts(
    bills: &[Bill],
    vote_results: &[VoteResult],
    votes: &[Vote],
    legislators: &[Legislator],
) -> Vec<BillVoteCount> {
    let known_bills: HashSet<u64> = bills.iter().map(|bill| bill.id).collect();

    let mut bill_by_vote: HashMap<u64, u64> = HashMap::new();
    let mut votes_per_bill: HashMap<u64, u32> = HashMap::new();
    for vote in votes {
        if !known_bills.contains(&vote.bill_id) {
            warn!(
                vote_id = vote.id,
                bill_id = vote.bill_id,
                "vote references unknown bill, dropping it"
            );
            continue;
        }
        bill_by_vote.insert(vote.id, vote.bill_id);
        *votes_per_bill.entry(vote.bill_id).or_insert(0) += 1;
    }

    for (&bill_id, &vote_count) in &votes_per_bill {
        if vote_count > 1 {
            warn!(
                bill_id,
                vote_count, "bill has multiple votes, summing counts across all of them"
            );
        }
    }

    let sponsor_names: HashMap<u64, &str> = legislators
        .iter()
        .map(|legislator| (legislator.id, legislator.name.as_str()))
        .collect();

    let tallies = tally_results(vote_results, |result| {
        bill_by_vote.get(&result.vote_id).copied()
    });

    bills
        .iter()
        .map(|bill| {
            let tally = tallies.get(&bill.id).copied().unwrap_or_default();
            let primary_sponsor = bill
                .sponsor_id
                .and_then(|sponsor_id| sponsor_names.get(&sponsor_id))
                .map_or_else(|| UNAVAILABLE_SPONSOR.to_string(), |name| (*name).to_string());

            BillVoteCount {
                id: bill.id,
                title: bill.title.clone(),
                supporter_count: tally.supported,
                opposer_count: tally.opposed,
                primary_sponsor,
            }
        })
        .collect()
}
