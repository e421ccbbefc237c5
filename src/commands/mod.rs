//! CLI commands for jsontocsv

pub mod convert;
pub mod dispatch;
