// src/writer.rs

use crate::error::{Error, Result};
use crate::model::*;
use indicatif::{ProgressBar, ProgressDrawTarget};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the summary file for `year`, e.g. "editors-2020.json".
pub fn summary_file_name(year: i32) -> String {
    format!("editors-{}.json", year)
}

/// Writes one summary file per year into `dir`, creating it if needed. Each
/// file holds one JSON object per line, one per editor with edits that year,
/// merged with whatever metadata `editors` has for them.
///
/// Returns the paths written, in order.
pub fn write_editor_stats(
    dir: &Path,
    stats: YearStatsMap,
    editors: &EditorInfoMap,
    progress_bar: bool,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let bar = if progress_bar {
        ProgressBar::new(stats.len() as u64)
    } else {
        ProgressBar::with_draw_target(Some(stats.len() as u64), ProgressDrawTarget::hidden())
    };
    bar.set_message("Writing editor stats");

    let mut written = Vec::with_capacity(stats.len());
    for (year, year_stats) in stats {
        let path = dir.join(summary_file_name(year));
        info!("Writing {}", path.display());
        let n = write_year(&path, year_stats, editors)?;
        info!("Wrote {} editors to {}", n, path.display());
        written.push(path);
        bar.inc(1);
    }
    bar.finish_with_message("Writing complete");

    Ok(written)
}

fn write_year(path: &Path, year_stats: EditorStatsMap, editors: &EditorInfoMap) -> Result<usize> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut w = BufWriter::new(file);

    let mut n = 0;
    for (id, edits) in year_stats {
        let record = merge_editor(id, edits, editors.get(&id));
        serde_json::to_writer(&mut w, &record).map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        w.write_all(b"\n").map_err(|e| Error::io(path, e))?;
        n += 1;
    }

    let file = w.into_inner().map_err(|e| Error::io(path, e.into_error()))?;
    file.sync_all().map_err(|e| Error::io(path, e))?;
    Ok(n)
}

/// Combines counts with an editor's metadata. Editors missing from the editor
/// dump keep an empty name and unset timestamps.
pub fn merge_editor(id: EditorId, edits: EditStats, info: Option<&EditorInfo>) -> EditorStats {
    let mut es = EditorStats {
        id,
        edits,
        ..Default::default()
    };
    if let Some(info) = info {
        es.name = info.name.clone();
        es.created = info.created;
        es.active = info.active;
    }
    es
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn file_names_embed_year() {
        assert_eq!(summary_file_name(2020), "editors-2020.json");
    }

    #[test]
    fn orphaned_editor_gets_empty_metadata() {
        let es = merge_editor(4, EditStats::from([(1, 2)]), None);
        assert_eq!(es.id, 4);
        assert_eq!(es.name, "");
        assert_eq!(es.created, None);
        assert_eq!(es.active, None);
        assert_eq!(es.count(1), 2);
    }

    #[test]
    fn known_editor_gets_metadata() {
        let info = EditorInfo {
            name: "carol".to_string(),
            created: Some(Utc.with_ymd_and_hms(2012, 3, 4, 0, 0, 0).unwrap()),
            active: None,
        };
        let es = merge_editor(5, EditStats::new(), Some(&info));
        assert_eq!(es.name, "carol");
        assert_eq!(es.created, info.created);
    }

    #[test]
    fn writes_one_line_per_editor_in_encounter_order() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/out");

        let mut year = EditorStatsMap::new();
        year.insert(20, EditStats::from([(1, 1)]));
        year.insert(10, EditStats::from([(2, 3)]));
        let stats = YearStatsMap::from([(2019, year)]);

        let paths = write_editor_stats(&out, stats, &EditorInfoMap::new(), false).unwrap();
        assert_eq!(paths, vec![out.join("editors-2019.json")]);

        let text = fs::read_to_string(&paths[0]).unwrap();
        let ids: Vec<i32> = text
            .lines()
            .map(|l| serde_json::from_str::<EditorStats>(l).unwrap().id)
            .collect();
        assert_eq!(ids, vec![20, 10]);
    }
}
