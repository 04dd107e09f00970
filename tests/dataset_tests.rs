use std::fs;
use std::path::Path;

use vote_tally::core::error::AppError;
use vote_tally::features::dataset::loader::{
    BILLS_FILE, LEGISLATORS_FILE, VOTE_RESULTS_FILE, VOTES_FILE, load_dataset, load_table,
};
use vote_tally::features::dataset::writer::{render_csv_table, save_csv_table};
use vote_tally::features::reports::dto::{
    BILL_VOTE_COUNT_HEADER, BILLS_VOTE_COUNT_FILE, BillVoteCount, LEGISLATOR_VOTE_COUNT_FILE,
    LEGISLATOR_VOTE_COUNT_HEADER, LegislatorVoteCount,
};
use vote_tally::features::reports::{bill_vote_counts, legislator_vote_counts};

fn seed_provided_data(dir: &Path) {
    fs::write(dir.join(LEGISLATORS_FILE), "id,name\n1,Alice\n2,Bob\n").expect("legislators.csv");
    fs::write(dir.join(BILLS_FILE), "id,title,sponsor_id\n10,Act A,1\n11,Act B,\n")
        .expect("bills.csv");
    fs::write(dir.join(VOTES_FILE), "id,bill_id\n100,10\n").expect("votes.csv");
    fs::write(
        dir.join(VOTE_RESULTS_FILE),
        "id,legislator_id,vote_id,vote_type\n1000,1,100,1\n1001,2,100,2\n",
    )
    .expect("vote_results.csv");
}

#[test]
fn loads_all_four_tables() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    seed_provided_data(temp_dir.path());

    let dataset = load_dataset(temp_dir.path()).expect("dataset loads");

    assert_eq!(dataset.legislators.len(), 2);
    assert_eq!(dataset.bills.len(), 2);
    assert_eq!(dataset.votes.len(), 1);
    assert_eq!(dataset.vote_results.len(), 2);

    assert_eq!(dataset.legislators[0].name, "Alice");
    assert_eq!(dataset.bills[0].sponsor_id, Some(1));
    assert_eq!(
        dataset.bills[1].sponsor_id, None,
        "empty sponsor field loads as absent"
    );
    assert_eq!(dataset.vote_results[1].vote_type, 2);
}

#[test]
fn missing_table_is_a_load_error() {
    let temp_dir = tempfile::tempdir().expect("temp dir");

    let err = load_dataset(temp_dir.path()).expect_err("missing tables must fail");

    assert!(matches!(err, AppError::Load(_)));
}

#[test]
fn missing_required_column_is_a_load_error() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    seed_provided_data(temp_dir.path());
    fs::write(temp_dir.path().join(LEGISLATORS_FILE), "id\n1\n").expect("legislators.csv");

    let err = load_dataset(temp_dir.path()).expect_err("missing column must fail");

    assert!(matches!(err, AppError::Load(_)));
}

#[test]
fn empty_report_still_has_a_header_row() {
    let temp_dir = tempfile::tempdir().expect("temp dir");

    let path = save_csv_table::<LegislatorVoteCount>(
        temp_dir.path(),
        LEGISLATOR_VOTE_COUNT_FILE,
        &LEGISLATOR_VOTE_COUNT_HEADER,
        &[],
    )
    .expect("save succeeds");

    let contents = fs::read_to_string(path).expect("read back");
    assert_eq!(contents, "id,name,num_supported_bills,num_opposed_bills\n");
}

#[test]
fn rendered_table_matches_saved_file() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let rows = vec![LegislatorVoteCount {
        id: 1,
        name: "Alice".to_string(),
        num_supported_bills: 2,
        num_opposed_bills: 0,
    }];

    let path = save_csv_table(
        temp_dir.path(),
        LEGISLATOR_VOTE_COUNT_FILE,
        &LEGISLATOR_VOTE_COUNT_HEADER,
        &rows,
    )
    .expect("save succeeds");

    let saved = fs::read_to_string(path).expect("read back");
    let rendered = render_csv_table(&LEGISLATOR_VOTE_COUNT_HEADER, &rows).expect("render");
    assert_eq!(saved, rendered);
}

#[test]
fn pipeline_writes_both_reports_and_is_idempotent() {
    let input_dir = tempfile::tempdir().expect("input dir");
    seed_provided_data(input_dir.path());

    let run = |output_dir: &Path| {
        let dataset = load_dataset(input_dir.path()).expect("dataset loads");

        let legislator_counts =
            legislator_vote_counts(&dataset.legislators, &dataset.vote_results);
        save_csv_table(
            output_dir,
            LEGISLATOR_VOTE_COUNT_FILE,
            &LEGISLATOR_VOTE_COUNT_HEADER,
            &legislator_counts,
        )
        .expect("legislator report saves");

        let bill_counts = bill_vote_counts(
            &dataset.bills,
            &dataset.vote_results,
            &dataset.votes,
            &dataset.legislators,
        );
        save_csv_table(
            output_dir,
            BILLS_VOTE_COUNT_FILE,
            &BILL_VOTE_COUNT_HEADER,
            &bill_counts,
        )
        .expect("bill report saves");
    };

    let first_out = tempfile::tempdir().expect("first output dir");
    let second_out = tempfile::tempdir().expect("second output dir");
    run(first_out.path());
    run(second_out.path());

    for filename in [LEGISLATOR_VOTE_COUNT_FILE, BILLS_VOTE_COUNT_FILE] {
        let first = fs::read(first_out.path().join(filename)).expect("first run output");
        let second = fs::read(second_out.path().join(filename)).expect("second run output");
        assert_eq!(first, second, "{filename} must be byte-identical across runs");
    }

    let legislator_rows: Vec<LegislatorVoteCount> =
        load_table(first_out.path(), LEGISLATOR_VOTE_COUNT_FILE).expect("round trip");
    assert_eq!(legislator_rows.len(), 2);
    assert_eq!(legislator_rows[0].name, "Alice");
    assert_eq!(legislator_rows[0].num_supported_bills, 1);
    assert_eq!(legislator_rows[0].num_opposed_bills, 0);
    assert_eq!(legislator_rows[1].num_supported_bills, 0);
    assert_eq!(legislator_rows[1].num_opposed_bills, 1);

    let bill_rows: Vec<BillVoteCount> =
        load_table(first_out.path(), BILLS_VOTE_COUNT_FILE).expect("round trip");
    assert_eq!(bill_rows.len(), 2);
    assert_eq!(bill_rows[0].supporter_count, 1);
    assert_eq!(bill_rows[0].opposer_count, 1);
    assert_eq!(bill_rows[0].primary_sponsor, "Alice");
    assert_eq!(bill_rows[1].supporter_count, 0);
    assert_eq!(bill_rows[1].primary_sponsor, "Unavailable");
}
