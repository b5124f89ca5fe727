// src/services/terms.rs

//! Term catalog lookup.
//!
//! The class search page carries a term `<select>`; its options map
//! human-readable term names to the catalog's internal term identifiers.
//! Fetched exactly once at startup.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::TermCatalog;
use crate::utils::http::PageFetcher;

const TERM_SELECT: &str = "select#term";
const OPTION: &str = "option";

/// Fetch the term catalog from the class search page.
///
/// The term options are populated client-side, so the fetch waits out the
/// async-load settle window.
pub async fn fetch_terms(fetcher: &dyn PageFetcher, base_url: &str) -> Result<TermCatalog> {
    let html = fetcher.fetch_rendered(base_url, true).await?;
    parse_terms(&Html::parse_document(&html))
}

/// Parse term options out of a rendered search page.
fn parse_terms(document: &Html) -> Result<TermCatalog> {
    let select_sel = parse_selector(TERM_SELECT)?;
    let option_sel = parse_selector(OPTION)?;

    let select = document.select(&select_sel).next().ok_or_else(|| {
        AppError::extract("term catalog", format!("no '{TERM_SELECT}' element in page"))
    })?;

    let mut catalog = TermCatalog::new();
    for option in select.select(&option_sel) {
        let Some(value) = option.value().attr("value") else {
            continue;
        };
        let name: String = option.text().collect();
        let name = name.trim();
        if name.is_empty() || value.is_empty() {
            continue;
        }
        catalog.insert(name, value);
    }

    Ok(catalog)
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
