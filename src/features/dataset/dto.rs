use serde::{Deserialize, Serialize};

// Canonical wire form for a vote result: 1 = support, 2 = oppose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteType {
    Support,
    Oppose,
}

impl VoteType {
    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Support),
            2 => Some(Self::Oppose),
            _ => None,
        }
    }

    pub fn to_wire(self) -> u8 {
        match self {
            Self::Support => 1,
            Self::Oppose => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Legislator {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: u64,
    pub title: String,
    pub sponsor_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    pub id: u64,
    pub bill_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteResult {
    pub id: u64,
    pub legislator_id: u64,
    pub vote_id: u64,
    pub vote_type: u8,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub legislators: Vec<Legislator>,
    pub bills: Vec<Bill>,
    pub votes: Vec<Vote>,
    pub vote_results: Vec<VoteResult>,
}
