//! End-to-end export of a filer's latest 13F holdings

use std::path::{Path, PathBuf};

use tracing::info;

use crate::edgar::{self, PageSource, Result};
use crate::holdings::{self, HoldingsTable};
use crate::writer;

/// Resolve `identifier`, locate its latest 13F and extract the holdings table
pub async fn fetch_holdings<S: PageSource + ?Sized>(source: &S, identifier: &str) -> Result<HoldingsTable> {
    let search_page = edgar::resolve(source, identifier).await?;
    let document = edgar::locate(source, &search_page).await?;

    let table = holdings::extract_table(&document)?;
    info!(
        "Extracted {} holdings with {} columns for {}",
        table.rows.len(),
        table.header.len(),
        identifier
    );
    Ok(table)
}

/// Fetch the latest 13F for `identifier` and write it to `<output_dir>/<identifier>_13F.txt`.
/// Nothing is written unless every step before it succeeds.
pub async fn export_latest_13f<S: PageSource + ?Sized>(
    source: &S,
    identifier: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    writer::check_identifier(identifier)?;
    let table = fetch_holdings(source, identifier).await?;
    writer::write_table(output_dir, identifier, &table)
}
