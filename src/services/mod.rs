//! Service layer for the seat monitor.
//!
//! This module contains the business logic for:
//! - Section extraction from rendered listings (`SectionExtractor`)
//! - Term catalog lookup (`fetch_terms`)
//! - Webhook delivery (`WebhookClient`, `DiscordWebhook`)

mod sections;
mod terms;
mod webhook;

pub use sections::SectionExtractor;
pub use terms::fetch_terms;
pub use webhook::{DiscordWebhook, WebhookClient};
