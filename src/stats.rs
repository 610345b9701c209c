// src/stats.rs

use crate::error::Result;
use crate::histogram::Histogram;
use crate::model::*;
use chrono::{NaiveDate, Utc};
use std::cmp::Reverse;
use std::collections::BTreeMap;

const SECONDS_PER_YEAR: f64 = 86400.0 * 365.0;

/// Minimum |r| for a pair of edit types to count as correlated
pub const CORRELATION_THRESHOLD: f64 = 0.5;

/// Shape of the per-editor histograms.
#[derive(Debug, Clone, Copy)]
pub struct HistogramShape {
    pub min: i64,
    pub max: i64,
    pub buckets: usize,
}

impl Default for HistogramShape {
    fn default() -> Self {
        HistogramShape {
            min: 1,
            max: 100,
            buckets: 10,
        }
    }
}

/// Totals for one edit type within a set of editor stats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTypeTotal {
    pub edit_type: EditType,
    pub edits: u64,
    pub editors: usize,
}

/// A pair of edit types whose per-editor counts are correlated
#[derive(Debug, Clone, PartialEq)]
pub struct Correlation {
    pub first: EditType,
    pub second: EditType,
    pub coefficient: f64,
}

/// Number of editors with at least one edit of type `et`.
pub fn count_editors(stats: &[EditorStats], et: EditType) -> usize {
    stats.iter().filter(|es| es.count(et) > 0).count()
}

/// Total number of edits of each type.
pub fn count_edit_types(stats: &[EditorStats]) -> BTreeMap<EditType, u64> {
    let mut counts = BTreeMap::new();
    for es in stats {
        for (&et, &n) in &es.edits {
            *counts.entry(et).or_insert(0) += n as u64;
        }
    }
    counts
}

/// Every edit type seen in `stats`, with the most widely used types first.
pub fn edit_type_totals(stats: &[EditorStats]) -> Vec<EditTypeTotal> {
    let mut totals: Vec<EditTypeTotal> = count_edit_types(stats)
        .into_iter()
        .map(|(edit_type, edits)| EditTypeTotal {
            edit_type,
            edits,
            editors: count_editors(stats, edit_type),
        })
        .collect();
    totals.sort_by_key(|t| Reverse(t.editors));
    totals
}

/// Finds the editor called `name`.
pub fn find_editor<'a>(stats: &'a [EditorStats], name: &str) -> Option<&'a EditorStats> {
    stats.iter().find(|es| es.name == name)
}

/// Editors with edits of type `et` and their counts, in file order.
pub fn editor_list(stats: &[EditorStats], et: EditType) -> Vec<(&str, u32)> {
    stats
        .iter()
        .filter_map(|es| match es.count(et) {
            0 => None,
            n => Some((es.name.as_str(), n)),
        })
        .collect()
}

/// Histogram of per-editor counts of `et`. Editors without any such edits
/// are left out rather than counted as zero.
pub fn editor_histogram(stats: &[EditorStats], et: EditType, shape: HistogramShape) -> Result<Histogram> {
    let mut hist = Histogram::new(shape.min, shape.max, shape.buckets)?;
    for es in stats {
        let n = es.count(et);
        if n > 0 {
            hist.add(n as i64);
        }
    }
    Ok(hist)
}

/// Number of editors with edits of type `et`, per year.
pub fn yearly_editors(years: &[YearSummary], et: EditType) -> Vec<(i32, usize)> {
    years
        .iter()
        .map(|ys| (ys.year, count_editors(&ys.stats, et)))
        .collect()
}

/// Total edits of type `et`, per year.
pub fn yearly_edits(years: &[YearSummary], et: EditType) -> Vec<(i32, u64)> {
    years
        .iter()
        .map(|ys| {
            let total = ys.stats.iter().map(|es| es.count(et) as u64).sum();
            (ys.year, total)
        })
        .collect()
}

/// Mean account age in years, measured at the start of the following year,
/// of editors in `year` with edits of type `et`. Editors without a creation
/// time are left out. Returns `None` if nobody qualifies.
pub fn average_account_age(year: i32, stats: &[EditorStats], et: EditType) -> Option<f64> {
    let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        .and_hms_opt(0, 0, 0)?
        .and_local_timezone(Utc)
        .single()?;

    let mut sum = 0.0;
    let mut n = 0usize;
    for es in stats.iter().filter(|es| es.count(et) > 0) {
        if let Some(created) = es.created {
            let age = end.signed_duration_since(created);
            sum += age.num_milliseconds() as f64 / 1000.0 / SECONDS_PER_YEAR;
            n += 1;
        }
    }
    (n > 0).then(|| sum / n as f64)
}

/// [`average_account_age`] for each year, reporting 0 for years where
/// nobody qualifies.
pub fn yearly_average_age(years: &[YearSummary], et: EditType) -> Vec<(i32, f64)> {
    years
        .iter()
        .map(|ys| (ys.year, average_account_age(ys.year, &ys.stats, et).unwrap_or(0.0)))
        .collect()
}

/// Pearson correlation coefficient of two equal-length samples. Undefined
/// (and `None`) when the lengths differ, the samples are empty, or either
/// sample has no variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.is_empty() {
        return None;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Pairs of edit types whose per-editor counts have |r| above
/// [`CORRELATION_THRESHOLD`]. Each editor in `stats` contributes one sample
/// to every type's vector, zero if they made no edits of that type.
pub fn edit_type_correlations(stats: &[EditorStats]) -> Vec<Correlation> {
    let types: Vec<EditType> = count_edit_types(stats).into_keys().collect();
    let vectors: Vec<Vec<f64>> = types
        .iter()
        .map(|&et| stats.iter().map(|es| es.count(et) as f64).collect())
        .collect();

    let mut found = Vec::new();
    for i in 0..types.len() {
        for j in 0..i {
            if let Some(r) = pearson(&vectors[i], &vectors[j]) {
                if r.abs() > CORRELATION_THRESHOLD {
                    found.push(Correlation {
                        first: types[i],
                        second: types[j],
                        coefficient: r,
                    });
                }
            }
        }
    }
    found
}
