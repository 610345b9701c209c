// tests/pipeline.rs

use bzip2::write::BzEncoder;
use bzip2::Compression;
use chrono::{TimeZone, Utc};
use mbstats::archive::{read_archive, ScanOptions};
use mbstats::extract::{self, EDITOR_ARCHIVE, EDITOR_ENTRY, EDIT_ARCHIVE, EDIT_ENTRY};
use mbstats::model::*;
use mbstats::reader::{read_all_editor_stats, read_year};
use mbstats::writer::write_editor_stats;
use mbstats::Error;
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

/// Writes a `.tar.bz2` holding a decoy entry followed by `entry` with `lines`.
fn write_archive(path: &Path, entry: &str, lines: &[String]) {
    let file = File::create(path).unwrap();
    let mut builder = tar::Builder::new(BzEncoder::new(file, Compression::default()));

    let mut append = |name: &str, data: &[u8]| {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        builder.append_data(&mut header, name, data).unwrap();
    };
    append("TIMESTAMP", b"2021-01-01 00:00:00+00\n");
    let mut data = lines.join("\n");
    data.push('\n');
    append(entry, data.as_bytes());

    builder.into_inner().unwrap().finish().unwrap();
}

fn editor_row(id: i32, name: &str, created: &str, active: &str) -> String {
    format!("{id}\t{name}\t0\t\\N\t\\N\t\\N\t{created}\t\\N\t{active}\t\\N\t\\N\t\\N\t\\N\tpw\tha1\tf")
}

fn edit_row(id: i32, editor: i32, et: i16, status: i16, open: &str) -> String {
    format!("{id}\t{editor}\t{et}\t{status}\t0\t{open}\t\\N\t2030-01-01 00:00:00+00\t\\N\t1")
}

fn quiet() -> ScanOptions {
    ScanOptions::default()
}

/// Dump directory with alice (id 1) and bob (id 2, unknown creation time).
/// Editor 77 only appears in the edit table.
fn sample_dump() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_archive(
        &dir.path().join(EDITOR_ARCHIVE),
        EDITOR_ENTRY,
        &[
            editor_row(1, "alice", "2010-01-01 00:00:00+00", "2020-01-01 00:00:00+00"),
            editor_row(2, "bob", r"\N", "2021-06-01 12:00:00.5+00"),
        ],
    );

    let mut edits = Vec::new();
    let mut id = 0;
    let mut push = |editor, et, status, open: &str| {
        id += 1;
        edits.push(edit_row(id, editor, et, status, open));
    };
    for day in 1..=3 {
        push(1, 5, 2, &format!("2019-02-0{day} 10:00:00.123+00"));
    }
    push(1, 5, 2, "2020-03-01 00:00:00+00");
    push(1, 5, 2, "2020-04-01 00:00:00+00");
    // Not applied, so never counted.
    push(1, 5, 1, "2019-05-01 00:00:00+00");
    push(1, 6, 9, "2019-05-01 00:00:00+00");
    push(2, 5, 3, "2019-05-01 00:00:00+00");
    push(2, 7, 2, "2020-07-01 00:00:00+00");
    push(77, 5, 2, "2020-08-01 00:00:00+00");

    write_archive(&dir.path().join(EDIT_ARCHIVE), EDIT_ENTRY, &edits);
    dir
}

#[test]
fn extracts_yearly_counts_per_editor() {
    let dump = sample_dump();
    let (editors, stats) = extract::extract_dump(dump.path(), &quiet()).unwrap();

    assert_eq!(editors.len(), 2);
    assert_eq!(editors[&1].name, "alice");
    assert_eq!(editors[&2].created, None);

    assert_eq!(stats.keys().copied().collect::<Vec<_>>(), vec![2019, 2020]);
    assert_eq!(stats[&2019].len(), 1);
    assert_eq!(stats[&2019][&1], EditStats::from([(5, 3)]));
    assert_eq!(stats[&2020][&1], EditStats::from([(5, 2)]));
    assert_eq!(stats[&2020][&2], EditStats::from([(7, 1)]));
    assert_eq!(stats[&2020][&77], EditStats::from([(5, 1)]));
}

#[test]
fn extraction_is_repeatable() {
    let dump = sample_dump();
    let first = extract::extract_dump(dump.path(), &quiet()).unwrap();
    let second = extract::extract_dump(dump.path(), &quiet()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn written_summaries_read_back_unchanged() {
    let dump = sample_dump();
    let out = tempfile::tempdir().unwrap();
    let (editors, stats) = extract::extract_dump(dump.path(), &quiet()).unwrap();

    let paths = write_editor_stats(out.path(), stats, &editors, false).unwrap();
    assert_eq!(
        paths,
        vec![out.path().join("editors-2019.json"), out.path().join("editors-2020.json")]
    );

    let y2019 = read_year(out.path(), 2019).unwrap();
    assert_eq!(
        y2019,
        vec![EditorStats {
            id: 1,
            name: "alice".to_string(),
            created: Some(Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap()),
            active: Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
            edits: EditStats::from([(5, 3)]),
        }]
    );

    let y2020 = read_year(out.path(), 2020).unwrap();
    let bob = y2020.iter().find(|es| es.id == 2).unwrap();
    assert_eq!(bob.name, "bob");
    assert_eq!(bob.created, None);
    assert_eq!(
        bob.active,
        Some(Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap() + chrono::Duration::milliseconds(500))
    );

    let orphan = y2020.iter().find(|es| es.id == 77).unwrap();
    assert_eq!(orphan.name, "");
    assert_eq!(orphan.created, None);
    assert_eq!(orphan.active, None);
    assert_eq!(orphan.edits, EditStats::from([(5, 1)]));

    // No zero counts are ever written.
    for es in y2019.iter().chain(&y2020) {
        assert!(es.edits.values().all(|&n| n > 0));
    }
}

#[test]
fn reads_only_requested_years_in_order() {
    let out = tempfile::tempdir().unwrap();
    let mut stats = YearStatsMap::new();
    for year in [2021, 2005, 2012, 1999] {
        let mut editors = EditorStatsMap::new();
        editors.insert(year, EditStats::from([(1, 1)]));
        stats.insert(year, editors);
    }
    write_editor_stats(out.path(), stats, &EditorInfoMap::new(), false).unwrap();
    fs::write(out.path().join("editors-latest.json"), "garbage").unwrap();
    fs::write(out.path().join("notes.txt"), "garbage").unwrap();

    let years = read_all_editor_stats(out.path(), 2000, 2020).unwrap();
    let found: Vec<i32> = years.iter().map(|ys| ys.year).collect();
    assert_eq!(found, vec![2005, 2012]);
    assert_eq!(years[1].stats[0].id, 2012);
}

#[test]
fn corrupt_summary_aborts_whole_read() {
    let out = tempfile::tempdir().unwrap();
    fs::write(
        out.path().join("editors-2010.json"),
        r#"{"id":1,"name":"a","created":"0001-01-01T00:00:00Z","active":"0001-01-01T00:00:00Z","edits":{"1":1}}"#,
    )
    .unwrap();
    fs::write(out.path().join("editors-2011.json"), "{not json").unwrap();
    let err = read_all_editor_stats(out.path(), 2000, 2020).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }), "got {:?}", err);
}

#[test]
fn missing_entry_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump.tar.bz2");
    write_archive(&path, "mbdump/other", &["1\t2".to_string()]);

    let err = read_archive(&path, EDIT_ENTRY, &quiet(), |_| {}).unwrap_err();
    match err {
        Error::EntryNotFound { entry, archive } => {
            assert_eq!(entry, EDIT_ENTRY);
            assert_eq!(archive, path);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn malformed_row_aborts_extraction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(EDIT_ARCHIVE);
    let bad = edit_row(2, 1, 5, 2, "yesterday");
    write_archive(
        &path,
        EDIT_ENTRY,
        &[edit_row(1, 1, 5, 2, "2019-01-01 00:00:00+00"), bad.clone()],
    );

    let err = extract::read_edit_archive(&path, &quiet()).unwrap_err();
    assert_eq!(err.exit_code(), 1);
    match err {
        Error::BadRow { entry, line, .. } => {
            assert_eq!(entry, EDIT_ENTRY);
            assert_eq!(line, bad);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn missing_archive_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = extract::extract_dump(dir.path(), &quiet()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "got {:?}", err);
}

#[test]
fn scan_counts_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.tar.bz2");
    write_archive(&path, "t", &["a".into(), "b".into(), "c".into()]);
    let mut seen = Vec::new();
    let rows = read_archive(&path, "t", &quiet(), |p| seen.push(p.string(0).to_string())).unwrap();
    assert_eq!(rows, 3);
    assert_eq!(seen, vec!["a", "b", "c"]);
}
