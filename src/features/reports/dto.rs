use serde::{Deserialize, Serialize};

pub const LEGISLATOR_VOTE_COUNT_FILE: &str = "legislator_vote_count.csv";
pub const BILLS_VOTE_COUNT_FILE: &str = "bills_vote_count.csv";

pub const LEGISLATOR_VOTE_COUNT_HEADER: [&str; 4] =
    ["id", "name", "num_supported_bills", "num_opposed_bills"];
pub const BILL_VOTE_COUNT_HEADER: [&str; 5] =
    ["id", "title", "supporter_count", "opposer_count", "primary_sponsor"];

pub const UNAVAILABLE_SPONSOR: &str = "Unavailable";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegislatorVoteCount {
    pub id: u64,
    pub name: String,
    pub num_supported_bills: u32,
    pub num_opposed_bills: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillVoteCount {
    pub id: u64,
    pub title: String,
    pub supporter_count: u32,
    pub opposer_count: u32,
    pub primary_sponsor: String,
}
