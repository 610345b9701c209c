// src/histogram.rs

use crate::error::{Error, Result};
use std::io::{self, Write};

/// A linear histogram over the inclusive range `[min, max]`.
#[derive(Debug, Clone)]
pub struct Histogram {
    min: i64,
    span: i64,
    buckets: Vec<Bucket>,
    underflow: u64,
    overflow: u64,
}

/// One bucket of a [`Histogram`], covering `[min, max]` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub min: i64,
    pub max: i64,
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram counting values in `[min, max]` across `num_buckets` buckets.
    ///
    /// Bucket `i` starts at `min + floor(i * (max - min + 1) / num_buckets)`, so
    /// bucket widths can differ by one and the last bucket always ends at `max`.
    /// With fewer values than buckets some buckets are empty (their `max` is
    /// below their `min`).
    pub fn new(min: i64, max: i64, num_buckets: usize) -> Result<Self> {
        if num_buckets == 0 {
            return Err(Error::InvalidArgument("histogram needs at least one bucket".into()));
        }
        if max < min {
            return Err(Error::InvalidArgument(format!(
                "histogram max {} is less than min {}",
                max, min
            )));
        }
        let span = max - min + 1;
        let start = |i: usize| min + (i as i128 * span as i128 / num_buckets as i128) as i64;
        let buckets = (0..num_buckets)
            .map(|i| Bucket {
                min: start(i),
                max: start(i + 1) - 1,
                count: 0,
            })
            .collect();
        Ok(Histogram {
            min,
            span,
            buckets,
            underflow: 0,
            overflow: 0,
        })
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn underflow(&self) -> u64 {
        self.underflow
    }

    pub fn overflow(&self) -> u64 {
        self.overflow
    }

    fn first(&self) -> &Bucket {
        &self.buckets[0]
    }

    fn last(&self) -> &Bucket {
        &self.buckets[self.buckets.len() - 1]
    }

    /// Records `n`.
    pub fn add(&mut self, n: i64) {
        if n < self.first().min {
            self.underflow += 1;
            return;
        }
        if n > self.last().max {
            self.overflow += 1;
            return;
        }

        // Scaling the offset down can land low: with [4, 50] and 10 buckets
        // bucket 2 starts at 4 + 94 / 10 = 13, but 13 maps to (13 - 4) * 10 / 47
        // = 1. Move up past the candidate, skipping empty buckets.
        let nb = self.buckets.len() as i128;
        let mut i = ((n - self.min) as i128 * nb / self.span as i128) as usize;
        while n > self.buckets[i].max {
            i += 1;
        }
        self.buckets[i].count += 1;
    }

    /// Writes one line per bucket (plus underflow and overflow lines when
    /// nonzero) to `w`. Labels are right-aligned to at least `label_width`;
    /// the largest count gets a bar `bar_width` characters long.
    pub fn write<W: Write>(&self, w: &mut W, label_width: usize, bar_width: usize) -> io::Result<()> {
        let overflow_label = format!(">{}", self.last().max);
        let underflow_label = format!("<{}", self.first().min);

        let mut label_width = label_width.max(overflow_label.len());
        let mut max_count = self.underflow.max(self.overflow);
        for b in &self.buckets {
            max_count = max_count.max(b.count);
            label_width = label_width.max(bucket_label(b).len());
        }

        let mut line = |label: &str, count: u64| -> io::Result<()> {
            let len = if max_count == 0 {
                0
            } else {
                (count as f64 / max_count as f64 * bar_width as f64).round() as usize
            };
            writeln!(w, "{:>width$} |{} {}", label, "#".repeat(len), count, width = label_width)
        };

        if self.underflow > 0 {
            line(&underflow_label, self.underflow)?;
        }
        for b in &self.buckets {
            line(&bucket_label(b), b.count)?;
        }
        if self.overflow > 0 {
            line(&overflow_label, self.overflow)?;
        }
        Ok(())
    }
}

fn bucket_label(b: &Bucket) -> String {
    if b.min == b.max {
        b.min.to_string()
    } else {
        format!("{}-{}", b.min, b.max)
    }
}
