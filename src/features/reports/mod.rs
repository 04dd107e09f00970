pub mod dto;
pub mod helpers;
pub mod service;

pub use dto::{BillVoteCount, LegislatorVoteCount};
pub use service::{bill_vote_counts, legislator_vote_counts};
