// src/parser.rs

use crate::error::ParseError;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;
use std::str::FromStr;

/// Column value used for SQL NULL in PostgreSQL dumps
pub const NULL_COL: &str = r"\N";

/// Extracts typed tab-separated values from a single dump line.
///
/// The first failing accessor records its error and every later call returns
/// a zero value without parsing anything, so callers can pull all the columns
/// they need and then check [`LineParser::finish`] once.
#[derive(Debug)]
pub struct LineParser<'a> {
    cols: Vec<&'a str>,
    err: Option<ParseError>,
}

impl<'a> LineParser<'a> {
    pub fn new(line: &'a str) -> Self {
        LineParser {
            cols: line.split('\t').collect(),
            err: None,
        }
    }

    /// Returns the raw text of column `i`.
    pub fn string(&mut self, i: usize) -> &'a str {
        if self.err.is_some() {
            return "";
        }
        match self.cols.get(i).copied() {
            Some(s) => s,
            None => {
                self.err = Some(ParseError::MissingColumn {
                    index: i,
                    available: self.cols.len(),
                });
                ""
            }
        }
    }

    /// Parses column `i` as a base-10 integer. NULL is an error.
    pub fn int<T>(&mut self, i: usize) -> T
    where
        T: FromStr + Default,
        T::Err: Display,
    {
        let s = self.string(i);
        if self.err.is_some() {
            return T::default();
        }
        if s == NULL_COL {
            self.err = Some(ParseError::Null { index: i });
            return T::default();
        }
        match s.parse() {
            Ok(v) => v,
            Err(e) => {
                self.err = Some(ParseError::InvalidInt {
                    index: i,
                    value: s.to_string(),
                    reason: e.to_string(),
                });
                T::default()
            }
        }
    }

    /// Parses column `i` as a timestamp. NULL is an error.
    pub fn time(&mut self, i: usize) -> DateTime<Utc> {
        match self.opt_time(i) {
            Some(t) => t,
            None => {
                if self.err.is_none() {
                    self.err = Some(ParseError::Null { index: i });
                }
                DateTime::<Utc>::default()
            }
        }
    }

    /// Parses column `i` as a timestamp, returning `None` for NULL.
    pub fn opt_time(&mut self, i: usize) -> Option<DateTime<Utc>> {
        let s = self.string(i);
        if self.err.is_some() || s == NULL_COL {
            return None;
        }
        match parse_timestamp(s) {
            Some(t) => Some(t),
            None => {
                self.err = Some(ParseError::InvalidTime {
                    index: i,
                    value: s.to_string(),
                });
                None
            }
        }
    }

    /// The first error hit by any accessor, if any.
    pub fn error(&self) -> Option<&ParseError> {
        self.err.as_ref()
    }

    pub fn finish(self) -> Result<(), ParseError> {
        match self.err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Parses PostgreSQL's `YYYY-MM-DD HH:MM:SS[.fraction][±HH[:MM]]` timestamp
/// text. A missing offset is taken as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%#z") {
        Ok(t) => Some(t.with_timezone(&Utc)),
        Err(_) => NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
            .ok()
            .map(|t| Utc.from_utc_datetime(&t)),
    }
}
