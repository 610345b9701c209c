// src/model.rs

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Uniquely identifies an editor account in both dumps
pub type EditorId = i32;

/// Numeric code for a kind of edit (see `edit_types`)
pub type EditType = i16;

/// Per-type edit counts for one editor within one year.
/// Entries are only ever created by incrementing, so no count is zero.
pub type EditStats = BTreeMap<EditType, u32>;

/// Maps an editor to their edit counts, in the order editors were first seen
pub type EditorStatsMap = IndexMap<EditorId, EditStats>;

/// Maps a calendar year to the editors who made applied edits in it
pub type YearStatsMap = BTreeMap<i32, EditorStatsMap>;

/// Editor metadata keyed by id, as read from the editor dump
pub type EditorInfoMap = HashMap<EditorId, EditorInfo>;

/// The subset of an editor row that we keep around during extraction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorInfo {
    pub name: String,
    /// `member_since`; missing for some old accounts
    pub created: Option<DateTime<Utc>>,
    /// `last_login_date`
    pub active: Option<DateTime<Utc>>,
}

/// One editor's edits within a single year. This is the unit written to and
/// read back from the per-year summary files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorStats {
    pub id: EditorId,
    pub name: String,
    #[serde(with = "zero_time")]
    pub created: Option<DateTime<Utc>>,
    #[serde(with = "zero_time")]
    pub active: Option<DateTime<Utc>>,
    pub edits: EditStats,
}

impl EditorStats {
    /// Number of edits of type `et`, zero if the editor made none.
    pub fn count(&self, et: EditType) -> u32 {
        self.edits.get(&et).copied().unwrap_or(0)
    }
}

/// All editor stats loaded for one year
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    pub year: i32,
    pub stats: Vec<EditorStats>,
}

/// Serializes unset timestamps as the zero instant `0001-01-01T00:00:00Z`
/// so every record carries both fields.
pub mod zero_time {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn zero() -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    pub fn serialize<S: Serializer>(t: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error> {
        t.unwrap_or_else(zero).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
        let t = DateTime::<Utc>::deserialize(d)?;
        Ok(if t == zero() { None } else { Some(t) })
    }
}
