use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vote_tally::config::load_config;
use vote_tally::core::error::AppError;
use vote_tally::features::dataset::loader::load_dataset;
use vote_tally::features::dataset::writer::{render_csv_table, save_csv_table};
use vote_tally::features::reports::dto::{
    BILL_VOTE_COUNT_HEADER, BILLS_VOTE_COUNT_FILE, LEGISLATOR_VOTE_COUNT_FILE,
    LEGISLATOR_VOTE_COUNT_HEADER,
};
use vote_tally::features::reports::{bill_vote_counts, legislator_vote_counts};

#[derive(Parser, Debug)]
#[command(
    name = "vote-tally",
    about = "Aggregate legislative voting data into deliverable reports",
    version
)]
struct Cli {
    /// Log intermediate result tables at debug level
    #[arg(long)]
    debug: bool,

    /// Directory holding the four source tables (overrides PROVIDED_DATA_DIR)
    #[arg(long, value_name = "DIR")]
    input_dir: Option<PathBuf>,

    /// Directory receiving the report tables (overrides DELIVERABLE_DATA_DIR)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = load_config(cli.input_dir, cli.output_dir)?;
    let dataset = load_dataset(&config.provided_data_dir)?;

    let legislator_counts = legislator_vote_counts(&dataset.legislators, &dataset.vote_results);
    if cli.debug {
        tracing::debug!(
            "legislator vote counts:\n{}",
            render_csv_table(&LEGISLATOR_VOTE_COUNT_HEADER, &legislator_counts)?
        );
    }
    save_csv_table(
        &config.deliverable_data_dir,
        LEGISLATOR_VOTE_COUNT_FILE,
        &LEGISLATOR_VOTE_COUNT_HEADER,
        &legislator_counts,
    )?;

    let bill_counts = bill_vote_counts(
        &dataset.bills,
        &dataset.vote_results,
        &dataset.votes,
        &dataset.legislators,
    );
    if cli.debug {
        tracing::debug!(
            "bill vote counts:\n{}",
            render_csv_table(&BILL_VOTE_COUNT_HEADER, &bill_counts)?
        );
    }
    save_csv_table(
        &config.deliverable_data_dir,
        BILLS_VOTE_COUNT_FILE,
        &BILL_VOTE_COUNT_HEADER,
        &bill_counts,
    )?;

    Ok(())
}

fn init_tracing(debug: bool) {
    let baseline = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(baseline.parse().unwrap()))
        .with_target(false)
        .init();
}
