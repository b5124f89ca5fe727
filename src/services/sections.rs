// src/services/sections.rs

//! Course section extractor.
//!
//! Turns a rendered class list document into section records using the
//! catalog's CSS structure.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::CourseSection;

/// The catalog stripes result rows with alternating odd/even classes.
const ROW_SELECTOR: &str = ".focus.class-accordion.odd, .focus.class-accordion.even";

const NUMBER_SELECTOR: &str = "div.class-results-cell.number";
const INSTRUCTOR_SELECTOR: &str = "div.class-results-cell.instructor";
const LOCATION_SELECTOR: &str = "div.class-results-cell.text-nowrap.location";
const SEATS_SELECTOR: &str = "div.class-results-cell.seats";

/// Extracts section records from a rendered class list document.
pub struct SectionExtractor {
    row_sel: Selector,
    number_sel: Selector,
    instructor_sel: Selector,
    location_sel: Selector,
    seats_sel: Selector,
    seat_pattern: Regex,
}

impl SectionExtractor {
    /// Create an extractor with all selectors and the seat pattern parsed.
    pub fn new() -> Result<Self> {
        Ok(Self {
            row_sel: parse_selector(ROW_SELECTOR)?,
            number_sel: parse_selector(NUMBER_SELECTOR)?,
            instructor_sel: parse_selector(INSTRUCTOR_SELECTOR)?,
            location_sel: parse_selector(LOCATION_SELECTOR)?,
            seats_sel: parse_selector(SEATS_SELECTOR)?,
            seat_pattern: Regex::new(r"(\d+)\s+of\s+(\d+)")
                .map_err(|e| AppError::extract("seat pattern", e))?,
        })
    }

    /// Extract all section rows, preserving document order.
    ///
    /// A row missing one of the expected cells, or whose seats cell has no
    /// parsable count, is malformed input and fails the whole extraction.
    pub fn extract(&self, document: &Html) -> Result<Vec<CourseSection>> {
        let mut sections = Vec::new();
        for (index, row) in document.select(&self.row_sel).enumerate() {
            sections.push(self.parse_row(row, index)?);
        }
        Ok(sections)
    }

    fn parse_row(&self, row: ElementRef<'_>, index: usize) -> Result<CourseSection> {
        let number = self.cell_text(row, &self.number_sel, "number", index)?;
        let instructor = self.cell_text(row, &self.instructor_sel, "instructor", index)?;
        let location = self.cell_text(row, &self.location_sel, "location", index)?;
        let seats = self.cell_text(row, &self.seats_sel, "seats", index)?;
        let (available, total) = self.parse_seats(&seats)?;

        Ok(CourseSection {
            number,
            instructor,
            location,
            available,
            total,
        })
    }

    fn cell_text(
        &self,
        row: ElementRef<'_>,
        selector: &Selector,
        field: &str,
        index: usize,
    ) -> Result<String> {
        let cell = row.select(selector).next().ok_or_else(|| {
            AppError::extract(format!("row {index}"), format!("missing {field} cell"))
        })?;
        let text: String = cell.text().collect();
        Ok(normalize_whitespace(&text))
    }

    /// Parse "<available> of <total>" out of a seats cell.
    ///
    /// The catalog pads the cell with non-breaking spaces; cells showing
    /// only "waitlist" or similar have no count and are malformed input.
    pub fn parse_seats(&self, text: &str) -> Result<(u32, u32)> {
        let cleaned = text.replace('\u{a0}', " ");
        let captures = self.seat_pattern.captures(&cleaned).ok_or_else(|| {
            AppError::extract(
                "seats",
                format!("no '<available> of <total>' pattern in '{}'", cleaned.trim()),
            )
        })?;

        let available = captures[1]
            .parse()
            .map_err(|e| AppError::extract("seats", format!("available count: {e}")))?;
        let total = captures[2]
            .parse()
            .map_err(|e| AppError::extract("seats", format!("total count: {e}")))?;
        Ok((available, total))
    }
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
