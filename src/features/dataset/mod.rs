pub mod dto;
pub mod loader;
pub mod writer;

pub use dto::{Bill, Dataset, Legislator, Vote, VoteResult, VoteType};
pub use loader::load_dataset;
pub use writer::{render_csv_table, save_csv_table};
