//! edgar13f: export a fund's latest 13F holdings from SEC EDGAR as a tab-delimited table

pub mod cli;
pub mod config;
pub mod edgar;
pub mod holdings;
pub mod markup;
pub mod pipeline;
pub mod writer;
