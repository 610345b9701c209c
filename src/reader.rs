// src/reader.rs

use crate::error::{Error, Result};
use crate::model::{EditorStats, YearSummary};
use crate::writer::summary_file_name;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Reads every record from a summary file written by `write_editor_stats`.
pub fn read_editor_stats(path: &Path) -> Result<Vec<EditorStats>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    serde_json::Deserializer::from_reader(BufReader::new(file))
        .into_iter::<EditorStats>()
        .map(|r| {
            r.map_err(|source| Error::Decode {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}

/// Reads the summary file for a single year from `dir`.
pub fn read_year(dir: &Path, year: i32) -> Result<Vec<EditorStats>> {
    read_editor_stats(&dir.join(summary_file_name(year)))
}

/// Extracts the year from a summary file name like "editors-2020.json".
pub fn parse_summary_year(file_name: &str) -> Option<i32> {
    let digits = file_name.strip_prefix("editors-")?.strip_suffix(".json")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Reads all summary files in `dir` whose year lies in `[min_year, max_year]`,
/// sorted by ascending year. Files without a year in their name are ignored.
pub fn read_all_editor_stats(dir: &Path, min_year: i32, max_year: i32) -> Result<Vec<YearSummary>> {
    let mut all = Vec::new();
    for item in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let item = item.map_err(|e| Error::io(dir, e))?;
        let name = item.file_name();
        let Some(year) = name.to_str().and_then(parse_summary_year) else {
            continue;
        };
        if year < min_year || year > max_year {
            continue;
        }
        let path = item.path();
        debug!("Reading {}", path.display());
        let stats = read_editor_stats(&path)?;
        all.push(YearSummary { year, stats });
    }
    all.sort_by_key(|ys| ys.year);
    Ok(all)
}
