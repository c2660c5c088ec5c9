//! Pipeline property tests
//!
//! Exercises the full convert path: parse, normalize, sheet naming, and
//! workbook serialization, with read-back through the XLSX reader.

use std::io::Cursor;

use ismr_sheets::prelude::*;
use pretty_assertions::assert_eq;

fn input(name: &str, text: &str) -> InputFile {
    InputFile::new(name, text.as_bytes().to_vec())
}

fn read_back(result: &ExportResult) -> Workbook {
    let bytes = result.workbook.as_ref().expect("expected workbook bytes");
    XlsxReader::read(Cursor::new(bytes.clone())).expect("produced workbook must parse")
}

#[test]
fn one_sheet_per_file_in_input_order() {
    let files = vec![
        input("beta.ismr", "b,1\n"),
        input("alpha.ismr", "a,1\n"),
        input("gamma.txt", "g,1\n"),
    ];

    let result = convert(&files, &ConvertOptions::default()).unwrap();
    let workbook = read_back(&result);

    let names: Vec<&str> = workbook.sheets().map(Sheet::name).collect();
    assert_eq!(names, ["beta", "alpha", "gamma"]);
    assert_eq!(result.statuses.len(), 3);
    assert_eq!(result.success_count(), 3);
}

#[test]
fn ragged_rows_are_right_padded() {
    let files = vec![input("data.ismr", "a,b,c\nd,e\n")];

    let result = convert(&files, &ConvertOptions::default()).unwrap();
    let workbook = read_back(&result);
    let sheet = workbook.sheet(0).unwrap();

    assert_eq!(
        sheet.rows(),
        &[
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["d".to_string(), "e".to_string(), String::new()],
        ]
    );
}

#[test]
fn row_count_matches_retained_data_lines() {
    let text = "# comment\nGPS,1\n\nGLO,2\n   \nGAL,3\n# trailing\n";
    let files = vec![input("sats.ismr", text)];

    let result = convert(&files, &ConvertOptions::default()).unwrap();

    match &result.statuses[0].outcome {
        FileOutcome::Success { sheet, rows } => {
            assert_eq!(sheet, "sats");
            assert_eq!(*rows, 3);
        }
        other => panic!("expected success, got {:?}", other),
    }

    let workbook = read_back(&result);
    assert_eq!(workbook.sheet(0).unwrap().row_count(), 3);
}

#[test]
fn comment_only_file_warns_and_creates_no_sheet() {
    let files = vec![
        input("empty.ismr", "# a\n# b\n"),
        input("data.ismr", "x,y\n"),
    ];

    let result = convert(&files, &ConvertOptions::default()).unwrap();

    assert!(matches!(
        result.statuses[0].outcome,
        FileOutcome::Warning(ref reason) if reason == "empty or only comments"
    ));

    let workbook = read_back(&result);
    assert_eq!(workbook.sheet_count(), 1);
    assert_eq!(workbook.sheet(0).unwrap().name(), "data");
}

#[test]
fn all_files_empty_yields_no_workbook() {
    let files = vec![
        input("a.ismr", "# only comments\n"),
        input("b.ismr", "\n\n"),
    ];

    let result = convert(&files, &ConvertOptions::default()).unwrap();

    assert!(result.workbook.is_none());
    assert_eq!(result.statuses.len(), 2);
    assert_eq!(result.success_count(), 0);
}

#[test]
fn empty_file_list_yields_no_workbook() {
    let result = convert(&[], &ConvertOptions::default()).unwrap();
    assert!(result.workbook.is_none());
    assert!(result.statuses.is_empty());
}

#[test]
fn colliding_names_are_disambiguated() {
    // Both sanitize to "day_01"
    let files = vec![
        input("day 01.ismr", "a,1\n"),
        input("day-01.txt", "b,2\n"),
        input("day.01.ismr", "c,3\n"),
    ];

    let result = convert(&files, &ConvertOptions::default()).unwrap();
    let workbook = read_back(&result);

    let names: Vec<&str> = workbook.sheets().map(Sheet::name).collect();
    assert_eq!(names, ["day_01", "day_01_2", "day_01_3"]);

    // All three files succeeded; none was rejected for the collision
    assert_eq!(result.success_count(), 3);
}

#[test]
fn header_flag_changes_presentation_not_content() {
    let files = vec![input("data.ismr", "name,value\nGPS,1\n")];

    let plain = convert(&files, &ConvertOptions { use_header: false }).unwrap();
    let headed = convert(&files, &ConvertOptions { use_header: true }).unwrap();

    let plain_wb = read_back(&plain);
    let headed_wb = read_back(&headed);

    // Same rows either way, including row 0
    assert_eq!(
        plain_wb.sheet(0).unwrap().rows(),
        headed_wb.sheet(0).unwrap().rows()
    );
    assert_eq!(plain.statuses, headed.statuses);

    assert!(!plain_wb.sheet(0).unwrap().header_row());
    assert!(headed_wb.sheet(0).unwrap().header_row());
}

#[test]
fn conversion_is_idempotent() {
    let files = vec![
        input("one.ismr", "a,b\nc\n"),
        input("two.ismr", "# note\n1,2,3\n"),
    ];

    let first = convert(&files, &ConvertOptions::default()).unwrap();
    let second = convert(&files, &ConvertOptions::default()).unwrap();

    assert_eq!(first.statuses, second.statuses);

    let wb1 = read_back(&first);
    let wb2 = read_back(&second);

    assert_eq!(wb1.sheet_count(), wb2.sheet_count());
    for (a, b) in wb1.sheets().zip(wb2.sheets()) {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.rows(), b.rows());
    }
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let files = vec![InputFile::new(
        "raw.ismr",
        b"ok,\xff\xfe\nnext,1\n".to_vec(),
    )];

    let result = convert(&files, &ConvertOptions::default()).unwrap();

    assert!(matches!(
        result.statuses[0].outcome,
        FileOutcome::Success { rows: 2, .. }
    ));

    let workbook = read_back(&result);
    assert!(workbook
        .sheet(0)
        .unwrap()
        .cell(0, 1)
        .unwrap()
        .contains('\u{FFFD}'));
}

#[test]
fn statuses_keep_input_order_across_mixed_outcomes() {
    let files = vec![
        input("good.ismr", "1,2\n"),
        input("blank.ismr", ""),
        input("also_good.txt", "3\n"),
    ];

    let result = convert(&files, &ConvertOptions::default()).unwrap();

    let names: Vec<&str> = result.statuses.iter().map(|s| s.file_name.as_str()).collect();
    assert_eq!(names, ["good.ismr", "blank.ismr", "also_good.txt"]);
    assert!(matches!(result.statuses[0].outcome, FileOutcome::Success { .. }));
    assert!(matches!(result.statuses[1].outcome, FileOutcome::Warning(_)));
    assert!(matches!(result.statuses[2].outcome, FileOutcome::Success { .. }));
}

#[test]
fn extensionless_and_dotfile_names_get_usable_sheets() {
    let files = vec![input("README", "a\n"), input(".ismr", "b\n")];

    let result = convert(&files, &ConvertOptions::default()).unwrap();
    let workbook = read_back(&result);

    let names: Vec<&str> = workbook.sheets().map(Sheet::name).collect();
    assert_eq!(names, ["README", "Sheet"]);
}
