//! Search criteria for the monitored course.

use std::str::FromStr;

use crate::error::{AppError, Result};

use super::terms::TermCatalog;

/// Seat filter applied by the catalog search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    All,
    Open,
}

impl SearchType {
    /// Query-string value understood by the catalog.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Open => "open",
        }
    }
}

impl FromStr for SearchType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(Self::All),
            "open" => Ok(Self::Open),
            other => Err(AppError::validation(format!(
                "Search type must be 'all' or 'open', got '{other}'"
            ))),
        }
    }
}

/// Validated search parameters for one course target.
///
/// Immutable once constructed; the internal term id is resolved at
/// construction so the rest of the program never consults the term
/// catalog again.
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    subject: String,
    term: String,
    term_id: String,
    catalog_number: u32,
    search_type: SearchType,
}

impl SearchCriteria {
    /// Validate user input against the term catalog fetched at startup.
    ///
    /// The catalog is an explicit argument, not ambient state, so this
    /// cannot run before the mapping exists.
    pub fn new(
        subject: &str,
        term: &str,
        catalog_number: u32,
        search_type: SearchType,
        terms: &TermCatalog,
    ) -> Result<Self> {
        if subject.len() != 3 || !subject.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(AppError::validation(
                "Course subject is three capital letters (ex: CSE)",
            ));
        }

        let term_id = terms.get(term).ok_or_else(|| {
            AppError::validation(format!("Term must be one of: {}", terms.names().join(", ")))
        })?;

        if catalog_number == 0 {
            return Err(AppError::validation("Catalog number must be positive"));
        }

        Ok(Self {
            subject: subject.to_string(),
            term: term.to_string(),
            term_id: term_id.to_string(),
            catalog_number,
            search_type,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Term name as the user typed it.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Catalog-internal term identifier resolved at construction.
    pub fn term_id(&self) -> &str {
        &self.term_id
    }

    pub fn catalog_number(&self) -> u32 {
        self.catalog_number
    }

    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    /// Display title for notifications, e.g. "CSE-571".
    pub fn course_title(&self) -> String {
        format!("{}-{}", self.subject, self.catalog_number)
    }
}
