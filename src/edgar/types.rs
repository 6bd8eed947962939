//! Data types for EDGAR pages and filings

use chrono::NaiveDate;
use scraper::{Html, Selector};
use url::Url;

/// Form type queried on the company search page. EDGAR matches it as a prefix,
/// so amendments (`13F-HR/A`) and notices (`13F-NT`) are listed too.
pub const HOLDINGS_FORM: &str = "13F";

/// Parsed EDGAR company search page listing a filer's 13F reports, most recent first
#[derive(Debug)]
pub struct SearchPage {
    pub identifier: String,
    pub url: Url,
    pub html: Html,
}

/// Most recent 13F filing as listed on the search page
#[derive(Debug, Clone, PartialEq)]
pub struct LatestFiling {
    /// Absolute URL of the filing's detail ("documents") page
    pub documents_url: Url,
    /// Form type from the results row, e.g. `13F-HR`
    pub form_type: Option<String>,
    pub filing_date: Option<NaiveDate>,
}

impl LatestFiling {
    pub fn describe(&self) -> String {
        let form = self.form_type.as_deref().unwrap_or(HOLDINGS_FORM);
        match self.filing_date {
            Some(date) => format!("{} filed {}", form, date),
            None => form.to_string(),
        }
    }
}

pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static CSS selector is valid")
}
