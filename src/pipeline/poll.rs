// src/pipeline/poll.rs

//! The monitor loop: sleep, fetch, extract, diff, notify, update state.

use std::time::Duration;

use scraper::Html;

use crate::error::Result;
use crate::models::{Config, CourseSection, SearchCriteria};
use crate::services::SectionExtractor;
use crate::utils::http::PageFetcher;
use crate::utils::url::search_url;

use super::diff::MonitorState;
use super::notify::SectionNotifier;

/// Run the monitor until the process is terminated or a cycle fails.
///
/// The caller resolves the webhook destination and the term catalog before
/// this starts; any error inside a cycle (fetch, extraction, delivery)
/// propagates out and ends the monitor.
pub async fn run_monitor(
    config: &Config,
    criteria: &SearchCriteria,
    fetcher: &dyn PageFetcher,
    notifier: &SectionNotifier<'_>,
    poll_interval: Duration,
) -> Result<()> {
    let url = search_url(&config.monitor.base_url, criteria)?;
    let extractor = SectionExtractor::new()?;
    let mut state = MonitorState::new();

    log::info!(
        "Monitoring {} ({}) every {}s",
        criteria.course_title(),
        criteria.term(),
        poll_interval.as_secs()
    );
    log::debug!("Search URL: {url}");

    loop {
        tokio::time::sleep(poll_interval).await;

        let html = fetcher.fetch_rendered(&url, true).await?;
        let sections = extractor.extract(&Html::parse_document(&html))?;
        log::debug!("Cycle returned {} sections", sections.len());

        run_cycle(&mut state, sections, notifier).await?;
    }
}

/// Process one cycle's records against the state, in extraction order.
///
/// Each record is logged, announced if the differencer says so, and then
/// written to state. Announcement and state update are independent: a
/// suppressed notification still overwrites the stored record.
pub async fn run_cycle(
    state: &mut MonitorState,
    sections: Vec<CourseSection>,
    notifier: &SectionNotifier<'_>,
) -> Result<()> {
    for section in sections {
        log::info!("checking {}", section.describe());
        notifier.announce(state.decide(&section), &section).await?;
        state.observe(section);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::services::WebhookClient;

    use super::*;

    #[derive(Default)]
    struct RecordingWebhook {
        sent: Mutex<Vec<String>>,
    }

    impl RecordingWebhook {
        fn messages(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WebhookClient for RecordingWebhook {
        async fn deliver(&self, message: &str) -> Result<()> {
            self.sent.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    fn make_section(number: &str, available: u32, total: u32) -> CourseSection {
        CourseSection {
            number: number.to_string(),
            instructor: "Staff".to_string(),
            location: "Tempe".to_string(),
            available,
            total,
        }
    }

    #[tokio::test]
    async fn test_first_cycle_announces_discovery() {
        let webhook = RecordingWebhook::default();
        let notifier = SectionNotifier::new(&webhook, "CSE-571");
        let mut state = MonitorState::new();

        run_cycle(
            &mut state,
            vec![make_section("101", 0, 30), make_section("102", 3, 30)],
            &notifier,
        )
        .await
        .unwrap();

        let messages = webhook.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.contains("discovered")));
        assert_eq!(state.len(), 2);
    }

    #[tokio::test]
    async fn test_repeat_cycle_is_silent() {
        let webhook = RecordingWebhook::default();
        let notifier = SectionNotifier::new(&webhook, "CSE-571");
        let mut state = MonitorState::new();

        let records = vec![make_section("101", 0, 30)];
        run_cycle(&mut state, records.clone(), &notifier).await.unwrap();
        run_cycle(&mut state, records, &notifier).await.unwrap();

        assert_eq!(webhook.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_seats_opening_announces_availability() {
        let webhook = RecordingWebhook::default();
        let notifier = SectionNotifier::new(&webhook, "CSE-571");
        let mut state = MonitorState::new();

        run_cycle(&mut state, vec![make_section("101", 0, 30)], &notifier)
            .await
            .unwrap();
        run_cycle(&mut state, vec![make_section("101", 5, 30)], &notifier)
            .await
            .unwrap();

        let messages = webhook.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[1].contains("availability"));
        assert!(messages[1].contains("5/30 seats open"));
        assert_eq!(state.get("101"), Some(&make_section("101", 5, 30)));
    }

    #[tokio::test]
    async fn test_section_filling_up_stays_silent_but_updates_state() {
        let webhook = RecordingWebhook::default();
        let notifier = SectionNotifier::new(&webhook, "CSE-571");
        let mut state = MonitorState::new();

        run_cycle(&mut state, vec![make_section("101", 5, 30)], &notifier)
            .await
            .unwrap();
        run_cycle(&mut state, vec![make_section("101", 0, 30)], &notifier)
            .await
            .unwrap();

        // Only the discovery message; the zero-available record is stored
        assert_eq!(webhook.messages().len(), 1);
        assert_eq!(state.get("101"), Some(&make_section("101", 0, 30)));
    }
}
