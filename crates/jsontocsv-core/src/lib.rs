//! jsontocsv Core Library
//!
//! Turns an ESCO record dump (`{"data": [...]}`) into a two-column CSV of
//! `esco_uri,data` rows.

pub mod config;
pub mod csv;
pub mod error;
pub mod logging;
pub mod record;
pub mod sink;
