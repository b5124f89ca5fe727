// src/utils/url.rs

//! Search URL construction.

use url::Url;

use crate::error::Result;
use crate::models::SearchCriteria;

/// Build the class list query URL for the given criteria.
///
/// The `term` parameter carries the catalog's internal term id, not the
/// display name the user typed.
pub fn search_url(base: &str, criteria: &SearchCriteria) -> Result<String> {
    let catalog_nbr = criteria.catalog_number().to_string();
    let url = Url::parse_with_params(
        base,
        [
            ("subject", criteria.subject()),
            ("term", criteria.term_id()),
            ("catalogNbr", catalog_nbr.as_str()),
            ("searchType", criteria.search_type().as_str()),
        ],
    )?;
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use crate::models::{SearchType, TermCatalog};

    use super::*;

    fn criteria() -> SearchCriteria {
        let mut terms = TermCatalog::new();
        terms.insert("Fall 2025", "2257");
        SearchCriteria::new("CSE", "Fall 2025", 571, SearchType::All, &terms).unwrap()
    }

    #[test]
    fn test_search_url() {
        let url = search_url(
            "https://catalog.apps.asu.edu/catalog/classes/classlist",
            &criteria(),
        )
        .unwrap();
        assert_eq!(
            url,
            "https://catalog.apps.asu.edu/catalog/classes/classlist\
             ?subject=CSE&term=2257&catalogNbr=571&searchType=all"
        );
    }

    #[test]
    fn test_search_url_encodes_values() {
        let mut terms = TermCatalog::new();
        terms.insert("Fall 2025", "22 57");
        let criteria =
            SearchCriteria::new("CSE", "Fall 2025", 571, SearchType::Open, &terms).unwrap();

        let url = search_url("https://example.com/classlist", &criteria).unwrap();
        assert!(url.contains("term=22%2057") || url.contains("term=22+57"));
        assert!(url.contains("searchType=open"));
    }

    #[test]
    fn test_search_url_rejects_invalid_base() {
        assert!(search_url("not a url", &criteria()).is_err());
    }
}
