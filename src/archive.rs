// src/archive.rs

use crate::error::{Error, Result};
use crate::parser::LineParser;
use bzip2::read::MultiBzDecoder;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

const MB: f64 = 1024.0 * 1024.0;

/// How a scan reports its progress.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Minimum wall time between progress log lines
    pub log_interval: Duration,
    /// Draw an indicatif bar on stderr in addition to the log lines
    pub progress_bar: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            log_interval: Duration::from_secs(5),
            progress_bar: false,
        }
    }
}

/// Wraps a reader and counts the bytes read through it.
pub struct CountingReader<R> {
    inner: R,
    count: u64,
}

impl<R: Read> CountingReader<R> {
    pub fn new(inner: R) -> Self {
        CountingReader { inner, count: 0 }
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n as u64;
        Ok(n)
    }
}

/// Opens the `.tar.bz2` archive at `path`, finds the entry called `entry` and
/// passes a parser for each of its lines to `f`. Returns the number of rows read.
///
/// Entries are scanned front to back; the archive is never indexed or fully
/// decompressed into memory.
pub fn read_archive<F>(path: &Path, entry: &str, opts: &ScanOptions, f: F) -> Result<u64>
where
    F: FnMut(&mut LineParser<'_>),
{
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut archive = tar::Archive::new(MultiBzDecoder::new(BufReader::new(file)));

    for item in archive.entries().map_err(|e| Error::io(path, e))? {
        let item = item.map_err(|e| Error::io(path, e))?;
        if item.path_bytes().as_ref() == entry.as_bytes() {
            let size = item.size();
            return scan_lines(item, entry, size, opts, f);
        }
    }

    Err(Error::EntryNotFound {
        entry: entry.to_string(),
        archive: path.to_path_buf(),
    })
}

/// Feeds each line of `reader` to `f`, failing on the first row whose parser
/// recorded an error. `size` is the expected byte length used for progress.
pub fn scan_lines<R, F>(reader: R, name: &str, size: u64, opts: &ScanOptions, mut f: F) -> Result<u64>
where
    R: Read,
    F: FnMut(&mut LineParser<'_>),
{
    info!("Processing {} ({:.1} MB)", name, size as f64 / MB);

    let bar = if opts.progress_bar {
        ProgressBar::new(size)
    } else {
        ProgressBar::with_draw_target(Some(size), ProgressDrawTarget::hidden())
    };
    if let Ok(style) = ProgressStyle::with_template(
        "  {msg} {bar:40.cyan/blue} {bytes}/{total_bytes} [{elapsed_precise}]",
    ) {
        bar.set_style(style.progress_chars("##-"));
    }
    bar.set_message(name.to_string());

    let mut reader = BufReader::new(CountingReader::new(reader));
    let mut buf = Vec::new();
    let mut rows = 0u64;
    let mut log_time = Instant::now();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches('\n').trim_end_matches('\r');

        let mut parser = LineParser::new(line);
        f(&mut parser);
        if let Err(source) = parser.finish() {
            bar.abandon();
            return Err(Error::BadRow {
                entry: name.to_string(),
                line: line.to_string(),
                source,
            });
        }

        rows += 1;
        let nbytes = reader.get_ref().count();
        bar.set_position(nbytes);
        let now = Instant::now();
        if now.duration_since(log_time) >= opts.log_interval {
            info!(
                "Read {:4.1}% ({} rows, {:.1} MB)",
                percent(nbytes, size),
                rows,
                nbytes as f64 / MB
            );
            log_time = now;
        }
    }

    bar.finish_with_message(format!("{} done", name));
    info!("Read {} rows from {}", rows, name);
    Ok(rows)
}

fn percent(n: u64, total: u64) -> f64 {
    if total == 0 {
        100.0
    } else {
        n as f64 / total as f64 * 100.0
    }
}
