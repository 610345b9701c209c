// src/extract.rs

use crate::archive::{read_archive, ScanOptions};
use crate::error::Result;
use crate::model::*;
use crate::parser::LineParser;
use chrono::Datelike;
use std::path::Path;
use tracing::info;

/// Archive holding the editor table, relative to the dump directory
pub const EDITOR_ARCHIVE: &str = "mbdump-editor.tar.bz2";
/// Archive holding the edit table, relative to the dump directory
pub const EDIT_ARCHIVE: &str = "mbdump-edit.tar.bz2";

pub const EDITOR_ENTRY: &str = "mbdump/editor_sanitised";
pub const EDIT_ENTRY: &str = "mbdump/edit";

/// `edit.status` value for edits that were accepted into the database.
/// Everything else (open, failed vote, failed dependency, error, failed
/// prerequisite, no votes, deleted) is ignored.
pub const STATUS_APPLIED: i32 = 2;

// Column positions in the editor table:
//
//   id, name, privs, email, website, bio, member_since, email_confirm_date,
//   last_login_date, last_updated, birth_date, gender, area, password, ha1, deleted
const EDITOR_ID_COL: usize = 0;
const EDITOR_NAME_COL: usize = 1;
const EDITOR_CREATED_COL: usize = 6;
const EDITOR_ACTIVE_COL: usize = 8;

// Column positions in the edit table:
//
//   id, editor, type, status, autoedit, open_time, close_time, expire_time,
//   language, quality
const EDIT_EDITOR_COL: usize = 1;
const EDIT_TYPE_COL: usize = 2;
const EDIT_STATUS_COL: usize = 3;
const EDIT_OPEN_TIME_COL: usize = 5;

/// Reads editor metadata from the editor archive at `path`.
pub fn read_editor_archive(path: &Path, opts: &ScanOptions) -> Result<EditorInfoMap> {
    let mut editors = EditorInfoMap::new();
    read_archive(path, EDITOR_ENTRY, opts, |p| add_editor_row(p, &mut editors))?;
    info!("Read {} editors from {}", editors.len(), path.display());
    Ok(editors)
}

/// Reads per-year, per-editor edit type counts from the edit archive at `path`.
pub fn read_edit_archive(path: &Path, opts: &ScanOptions) -> Result<YearStatsMap> {
    let mut stats = YearStatsMap::new();
    read_archive(path, EDIT_ENTRY, opts, |p| add_edit_row(p, &mut stats))?;
    info!("Read applied edits spanning {} years from {}", stats.len(), path.display());
    Ok(stats)
}

/// Records one editor row. A repeated id replaces the earlier entry.
pub fn add_editor_row(p: &mut LineParser<'_>, editors: &mut EditorInfoMap) {
    let id: EditorId = p.int(EDITOR_ID_COL);
    let info = EditorInfo {
        name: p.string(EDITOR_NAME_COL).to_string(),
        // Some old accounts have no member_since.
        created: p.opt_time(EDITOR_CREATED_COL),
        active: p.opt_time(EDITOR_ACTIVE_COL),
    };
    if p.error().is_none() {
        editors.insert(id, info);
    }
}

/// Counts one edit row if it was applied; other rows are skipped before any
/// further columns are looked at.
pub fn add_edit_row(p: &mut LineParser<'_>, stats: &mut YearStatsMap) {
    if p.int::<i32>(EDIT_STATUS_COL) != STATUS_APPLIED {
        return;
    }
    let year = p.time(EDIT_OPEN_TIME_COL).year();
    let editor: EditorId = p.int(EDIT_EDITOR_COL);
    let et: EditType = p.int(EDIT_TYPE_COL);
    if p.error().is_some() {
        return;
    }
    *stats
        .entry(year)
        .or_default()
        .entry(editor)
        .or_default()
        .entry(et)
        .or_insert(0) += 1;
}

/// Reads both archives from `dump_dir`, editors first.
pub fn extract_dump(dump_dir: &Path, opts: &ScanOptions) -> Result<(EditorInfoMap, YearStatsMap)> {
    let editors = read_editor_archive(&dump_dir.join(EDITOR_ARCHIVE), opts)?;
    let stats = read_edit_archive(&dump_dir.join(EDIT_ARCHIVE), opts)?;
    Ok((editors, stats))
}
