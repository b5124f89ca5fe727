// src/models/mod.rs

//! Domain models for the seat monitor.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod criteria;
mod section;
mod terms;

// Re-export all public types
pub use config::{Config, HttpConfig, MonitorConfig, WebhookConfig};
pub use criteria::{SearchCriteria, SearchType};
pub use section::CourseSection;
pub use terms::TermCatalog;
