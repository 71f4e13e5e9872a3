//! PNR store integration tests

use std::io::Write;

use railvox_gateway::PnrStore;

/// Write a tabular snapshot and load it back
fn store_from(rows: &str) -> PnrStore {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{rows}").unwrap();
    file.flush().unwrap();
    PnrStore::load(file.path()).unwrap()
}

#[test]
fn hit_reports_train_name_and_status() {
    let store = store_from(
        "pnr,train_name,status\n\
         1234567890,Rajdhani Express,Confirmed\n\
         2345678901,Duronto Express,Waitlisted\n",
    );

    let line = store.status_line("2345678901");
    assert!(line.contains("Duronto Express"));
    assert!(line.contains("Waitlisted"));
    assert!(line.contains("2345678901"));
}

#[test]
fn miss_is_the_exact_no_details_message() {
    let store = store_from("pnr,train_name,status\n1234567890,Rajdhani Express,Confirmed\n");

    assert_eq!(
        store.status_line("5555555555"),
        "No details found for PNR 5555555555."
    );
}

#[test]
fn surrounding_whitespace_in_the_query_is_ignored() {
    let store = store_from("pnr,train_name,status\n1234567890,Rajdhani Express,Confirmed\n");

    let line = store.status_line("  1234567890  ");
    assert!(line.contains("Rajdhani Express"));
}

#[test]
fn malformed_rows_are_skipped_not_fatal() {
    let store = store_from(
        "pnr,train_name,status\n\
         not-a-number,Ghost Train,Lost\n\
         1234567890,Rajdhani Express,Confirmed\n\
         1111111111,,Confirmed\n",
    );

    assert_eq!(store.len(), 1);
    assert!(store.lookup(1_234_567_890).is_some());
}

#[test]
fn unreadable_file_is_an_error() {
    assert!(PnrStore::load(std::path::Path::new("/no/such/pnr.csv")).is_err());
}
