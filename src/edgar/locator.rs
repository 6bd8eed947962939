//! Navigation from the search page to the raw text of the latest 13F filing

use chrono::NaiveDate;
use scraper::{ElementRef, Html};
use tracing::{debug, info};
use url::Url;

use crate::edgar::types::selector;
use crate::edgar::{FilingError, LatestFiling, PageSource, Result, SearchPage};
use crate::markup::Document;

/// Find the documents link of the most recent filing on the search page
pub fn latest_filing(page: &SearchPage) -> Result<LatestFiling> {
    let button_selector = selector("a#documentsbutton");
    let button = page
        .html
        .select(&button_selector)
        .next()
        .ok_or(FilingError::MissingDocumentsLink)?;
    let href = button
        .value()
        .attr("href")
        .ok_or(FilingError::MissingDocumentsLink)?;
    let documents_url = page.url.join(href)?;

    // Metadata comes from the results row holding the same button
    let (form_type, filing_date) = page
        .html
        .select(&selector("table.tableFile2 tr"))
        .find(|row| row.select(&button_selector).next().is_some())
        .map(|row| row_metadata(&row))
        .unwrap_or((None, None));

    Ok(LatestFiling {
        documents_url,
        form_type,
        filing_date,
    })
}

fn row_metadata(row: &ElementRef<'_>) -> (Option<String>, Option<NaiveDate>) {
    let cells: Vec<String> = row
        .select(&selector("td"))
        .map(|td| td.text().collect::<String>().trim().to_string())
        .collect();

    let form_type = cells.first().filter(|c| !c.is_empty()).cloned();
    let filing_date = cells
        .get(3)
        .and_then(|c| NaiveDate::parse_from_str(c, "%Y-%m-%d").ok());

    (form_type, filing_date)
}

/// Find the link to the complete submission text file on a filing detail page
pub fn raw_text_url(detail_url: &Url, body: &str) -> Result<Url> {
    let html = Html::parse_document(body);

    let href = html
        .select(&selector("a"))
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let text = a.text().collect::<String>();
            (text.trim().ends_with(".txt") || href.trim().ends_with(".txt")).then_some(href)
        })
        .next()
        .ok_or_else(|| FilingError::MissingRawTextLink(detail_url.to_string()))?;

    Ok(detail_url.join(href)?)
}

/// Fetch the raw text of the most recent 13F filing listed on `page`
pub async fn locate<S: PageSource + ?Sized>(source: &S, page: &SearchPage) -> Result<Document> {
    let filing = latest_filing(page)?;
    info!("Latest filing for {}: {}", page.identifier, filing.describe());

    let detail = source.fetch(&filing.documents_url).await?;
    let txt_url = raw_text_url(&filing.documents_url, &detail)?;
    debug!("Raw text for {} at {}", page.identifier, txt_url);

    let raw = source.fetch(&txt_url).await?;
    Document::parse(&raw)
}
