//! Company lookup on the EDGAR search page

use scraper::Html;
use tracing::{debug, info};
use url::Url;

use crate::edgar::types::{selector, HOLDINGS_FORM};
use crate::edgar::{FilingError, PageSource, Result, SearchPage};

const NO_MATCHING_CIK: &str = "No matching CIK.";
const NO_MATCHING_TICKER: &str = "No matching Ticker Symbol.";

/// Company search URL listing up to 40 13F filings for `identifier`
pub fn search_url(base: &Url, identifier: &str) -> Result<Url> {
    let mut url = base.join("/cgi-bin/browse-edgar")?;
    url.query_pairs_mut()
        .append_pair("action", "getcompany")
        .append_pair("CIK", identifier)
        .append_pair("type", HOLDINGS_FORM)
        .append_pair("dateb", "")
        .append_pair("owner", "exclude")
        .append_pair("count", "40");
    Ok(url)
}

/// Query EDGAR for `identifier` and check that it has at least one 13F report
pub async fn resolve<S: PageSource + ?Sized>(source: &S, identifier: &str) -> Result<SearchPage> {
    let url = search_url(source.base_url(), identifier)?;
    info!("Searching EDGAR for {}", identifier);

    let body = source.fetch(&url).await?;
    parse_search_page(identifier, url, &body)
}

/// Validate a fetched search page
pub fn parse_search_page(identifier: &str, url: Url, body: &str) -> Result<SearchPage> {
    let html = Html::parse_document(body);

    let unknown = html
        .root_element()
        .text()
        .map(str::trim)
        .any(|t| t.contains(NO_MATCHING_CIK) || t.contains(NO_MATCHING_TICKER));
    if unknown {
        return Err(FilingError::IdentifierNotFound(identifier.to_string()));
    }

    if html.select(&selector("a#documentsbutton")).next().is_none() {
        return Err(FilingError::NoHoldingsReports(identifier.to_string()));
    }

    debug!("Search page for {} lists 13F filings", identifier);
    Ok(SearchPage {
        identifier: identifier.to_string(),
        url,
        html,
    })
}
