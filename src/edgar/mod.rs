//! EDGAR (SEC Electronic Data Gathering, Analysis, and Retrieval) module
//!
//! Looks up a filer on the EDGAR company search page and follows its most recent
//! 13F filing through to the complete submission text file.

pub mod types;
pub mod errors;
pub mod client;
pub mod resolver;
pub mod locator;

pub use types::*;
pub use errors::{FilingError, Result};
pub use client::{HttpPageSource, PageSource};

// Re-export commonly used functions
pub use resolver::{resolve, search_url};
pub use locator::{latest_filing, locate, raw_text_url};
