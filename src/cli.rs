// src/cli.rs

use crate::archive::ScanOptions;
use crate::report::DEFAULT_BAR_WIDTH;
use crate::stats::HistogramShape;
use chrono::{Datelike, Utc};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use std::time::Duration;

fn last_year() -> i32 {
    Utc::now().year() - 1
}

/// Process MusicBrainz database dumps and write per-year editor stats for mbstats.
#[derive(Parser, Debug)]
#[command(name = "read-mbdump", author, version, about, long_about = None)]
pub struct DumpArgs {
    /// Directory containing mbdump-editor.tar.bz2 and mbdump-edit.tar.bz2
    pub dump_dir: PathBuf,

    /// Directory to write editors-<year>.json files to
    pub out_dir: PathBuf,

    /// Seconds between progress log lines while reading an archive
    #[arg(long, default_value_t = 5)]
    pub log_interval_secs: u64,

    /// Draw progress bars on stderr
    #[arg(long)]
    pub progress: bool,
}

impl DumpArgs {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            log_interval: Duration::from_secs(self.log_interval_secs),
            progress_bar: self.progress,
        }
    }
}

/// Generate MusicBrainz editor stats using data written by read-mbdump.
#[derive(Parser, Debug)]
#[command(name = "mbstats", author, version, about, long_about = None)]
#[command(group(ArgGroup::new("action").required(true).multiple(false)))]
pub struct StatsArgs {
    /// Directory containing editors-<year>.json files
    pub input_dir: PathBuf,

    /// Year to display stats from (for single-year reports)
    #[arg(long, default_value_t = last_year())]
    pub year: i32,

    /// First year to display stats from (for yearly reports)
    #[arg(long, default_value_t = 2000)]
    pub min_year: i32,

    /// Last year to display stats from (for yearly reports)
    #[arg(long, default_value_t = last_year())]
    pub max_year: i32,

    /// Print edit type counts for the named editor
    #[arg(long, group = "action", value_name = "NAME")]
    pub editor: Option<String>,

    /// Print a histogram of per-editor counts for the edit type
    #[arg(long, group = "action", value_name = "EDIT_TYPE")]
    pub editor_histogram: Option<String>,

    /// Print editor names and counts for the edit type
    #[arg(long, group = "action", value_name = "EDIT_TYPE")]
    pub editor_list: Option<String>,

    /// Print yearly average account age of editors with the edit type
    #[arg(long, group = "action", value_name = "EDIT_TYPE")]
    pub yearly_age: Option<String>,

    /// Print yearly number of editors with the edit type
    #[arg(long, group = "action", value_name = "EDIT_TYPE")]
    pub yearly_editors: Option<String>,

    /// Print yearly number of edits of the edit type
    #[arg(long, group = "action", value_name = "EDIT_TYPE")]
    pub yearly_edits: Option<String>,

    /// Print all edit types by descending number of editors
    #[arg(long, group = "action")]
    pub edit_types: bool,

    /// Print pairs of edit types with correlated per-editor counts
    #[arg(long, group = "action")]
    pub correlations: bool,

    /// Minimum value for histograms
    #[arg(long, default_value_t = 1)]
    pub histogram_min: i64,

    /// Maximum value for histograms
    #[arg(long, default_value_t = 100)]
    pub histogram_max: i64,

    /// Buckets to use for histograms
    #[arg(long, default_value_t = 10)]
    pub histogram_buckets: usize,

    /// Width of the longest histogram bar
    #[arg(long, default_value_t = DEFAULT_BAR_WIDTH)]
    pub bar_width: usize,
}

/// The report selected on the command line
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Editor(String),
    EditorHistogram(String),
    EditorList(String),
    YearlyAge(String),
    YearlyEditors(String),
    YearlyEdits(String),
    EditTypes,
    Correlations,
}

impl StatsArgs {
    pub fn action(&self) -> Option<Action> {
        let action = if let Some(name) = &self.editor {
            Action::Editor(name.clone())
        } else if let Some(et) = &self.editor_histogram {
            Action::EditorHistogram(et.clone())
        } else if let Some(et) = &self.editor_list {
            Action::EditorList(et.clone())
        } else if let Some(et) = &self.yearly_age {
            Action::YearlyAge(et.clone())
        } else if let Some(et) = &self.yearly_editors {
            Action::YearlyEditors(et.clone())
        } else if let Some(et) = &self.yearly_edits {
            Action::YearlyEdits(et.clone())
        } else if self.edit_types {
            Action::EditTypes
        } else if self.correlations {
            Action::Correlations
        } else {
            return None;
        };
        Some(action)
    }

    pub fn histogram_shape(&self) -> HistogramShape {
        HistogramShape {
            min: self.histogram_min,
            max: self.histogram_max,
            buckets: self.histogram_buckets,
        }
    }
}
