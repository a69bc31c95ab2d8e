mod common;

use chrono::NaiveDate;
use encoding_rs::UTF_8;
use staylog::error::StaylogError;
use staylog::loader::{self, dataset_key};

use common::TestWorkspace;

#[test]
fn dataset_key_is_the_file_stem() {
    assert_eq!(dataset_key(std::path::Path::new("data/ferran.csv")), "ferran");
    assert_eq!(dataset_key(std::path::Path::new("stays")), "stays");
}

#[test]
fn dates_are_parsed_day_first() {
    let ws = TestWorkspace::new();
    let path = ws.write(
        "stays.csv",
        "city,country,start_date,end_date\nParis,France,01/02/2023,03/02/2023\n",
    );
    let loaded = loader::load_sources(&[path], UTF_8).expect("load");
    let (key, dataset) = &loaded[0];
    assert_eq!(key, "stays");
    assert_eq!(
        dataset.records()[0].start_date,
        NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()
    );
}

#[test]
fn extra_columns_and_header_casing_are_tolerated() {
    let ws = TestWorkspace::new();
    let path = ws.write(
        "stays.csv",
        "notes,City,Country,START_DATE,end_date\nhello,Paris,France,01/01/2022,10/01/2022\n",
    );
    let loaded = loader::load_sources(&[path], UTF_8).expect("load");
    let record = &loaded[0].1.records()[0];
    assert_eq!(record.city, "Paris");
    assert_eq!(record.country, "France");
}

#[test]
fn tsv_sources_resolve_a_tab_delimiter() {
    let ws = TestWorkspace::new();
    let path = ws.write(
        "stays.tsv",
        "city\tcountry\tstart_date\tend_date\nLuzern\tSwitzerland\t15/02/2022\t01/03/2022\n",
    );
    let loaded = loader::load_sources(&[path], UTF_8).expect("load");
    assert_eq!(loaded[0].1.len(), 1);
    assert_eq!(loaded[0].1.records()[0].city, "Luzern");
}

#[test]
fn unsupported_extension_keeps_the_key_with_zero_records() {
    let ws = TestWorkspace::new();
    let path = ws.write("notes.txt", "not tabular at all");
    let loaded = loader::load_sources(&[path], UTF_8).expect("load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].0, "notes");
    assert!(loaded[0].1.is_empty());
}

#[test]
fn missing_required_column_is_a_hard_error() {
    let ws = TestWorkspace::new();
    let path = ws.write(
        "stays.csv",
        "city,start_date,end_date\nParis,01/01/2022,10/01/2022\n",
    );
    let err = loader::load_sources(&[path], UTF_8).unwrap_err();
    match err.downcast_ref::<StaylogError>() {
        Some(StaylogError::MissingColumn { column, .. }) => assert_eq!(column, "country"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn unparseable_date_is_a_hard_error_with_row_context() {
    let ws = TestWorkspace::new();
    let path = ws.write(
        "stays.csv",
        "city,country,start_date,end_date\nParis,France,soon,10/01/2022\n",
    );
    let err = loader::load_sources(&[path], UTF_8).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StaylogError>(),
        Some(StaylogError::BadDate { value }) if value == "soon"
    ));
    assert!(format!("{err:#}").contains("row 2"));
}

#[test]
fn one_bad_source_fails_the_load_but_unsupported_ones_do_not() {
    let ws = TestWorkspace::new();
    let good = ws.write_sample("good.csv");
    let ignored = ws.write("ignored.dat", "binary-ish");
    let loaded = loader::load_sources(&[good, ignored], UTF_8).expect("load");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].1.len(), 4);
    assert!(loaded[1].1.is_empty());
}
