// src/lib.rs

//! Summarizes MusicBrainz database dumps into per-year editor activity files
//! and computes statistics over them.
//!
//! `read-mbdump` streams the editor and edit tables out of the `.tar.bz2`
//! dumps ([`extract`]) and writes one `editors-<year>.json` file per year
//! ([`writer`]). `mbstats` loads those files back ([`reader`]) and prints
//! reports ([`stats`], [`report`]).

pub mod archive;
pub mod cli;
pub mod edit_types;
pub mod error;
pub mod extract;
pub mod histogram;
pub mod model;
pub mod parser;
pub mod reader;
pub mod report;
pub mod stats;
pub mod writer;

pub use error::{Error, Result};
