//! Holdings table extraction from a parsed 13F filing

use tracing::debug;

use crate::edgar::{FilingError, Result};
use crate::markup::{Document, Element};

/// Element wrapping one holding in the information table
pub const RECORD_BLOCK: &str = "infoTable";

/// Cell value for a field a holding does not report
pub const SENTINEL: &str = "N/A";

/// Header plus one row per holding; every row is as long as the header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoldingsTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Build the table for every `infoTable` in `doc`
pub fn extract_table(doc: &Document) -> Result<HoldingsTable> {
    let header = discover_header(doc)?;
    let rows = extract_rows(doc, &header);
    Ok(HoldingsTable { header, rows })
}

/// Field names of the record block with the most populated fields.
///
/// Blocks are not merged: a field that only appears in shorter blocks is dropped.
/// On equal length the earlier block wins.
pub fn discover_header(doc: &Document) -> Result<Vec<String>> {
    let mut blocks = doc.find_all(RECORD_BLOCK).peekable();
    if blocks.peek().is_none() {
        return Err(FilingError::EmptyReport);
    }

    let mut header: Vec<String> = Vec::new();
    for block in blocks {
        let fields = block_fields(block);
        if fields.len() > header.len() {
            header = fields;
        }
    }

    debug!("Discovered {} columns: {:?}", header.len(), header);
    Ok(header)
}

/// One row per record block, values aligned with `header`
pub fn extract_rows(doc: &Document, header: &[String]) -> Vec<Vec<String>> {
    doc.find_all(RECORD_BLOCK)
        .map(|block| {
            header
                .iter()
                .map(|column| cell(block, column))
                .collect()
        })
        .collect()
}

fn cell(block: &Element, column: &str) -> String {
    match block.find(column).map(Element::text) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => SENTINEL.to_string(),
    }
}

/// Names of leaf descendants carrying text, first occurrence only, in document order
fn block_fields(block: &Element) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    for element in block.descendants() {
        if element.is_leaf() && !element.text().is_empty() && !fields.contains(&element.name) {
            fields.push(element.name.clone());
        }
    }
    fields
}
