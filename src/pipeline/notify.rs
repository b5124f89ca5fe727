//! Notification rendering and dispatch.
//!
//! Turns a differencer decision into a chat message and hands it to the
//! webhook client. Delivery failures propagate to the caller; there is no
//! retry or queueing.

use crate::error::Result;
use crate::models::CourseSection;
use crate::services::WebhookClient;

use super::diff::Decision;

/// Renders decisions into messages for one monitored course.
pub struct SectionNotifier<'a> {
    webhook: &'a dyn WebhookClient,
    course_title: String,
}

impl<'a> SectionNotifier<'a> {
    /// Create a notifier for the course identified by `course_title`
    /// (e.g. "CSE-571").
    pub fn new(webhook: &'a dyn WebhookClient, course_title: impl Into<String>) -> Self {
        Self {
            webhook,
            course_title: course_title.into(),
        }
    }

    /// Announce a decision for a section. `NoChange` sends nothing.
    pub async fn announce(&self, decision: Decision, section: &CourseSection) -> Result<()> {
        let Some(message) = self.render(decision, section) else {
            return Ok(());
        };
        log::debug!("Delivering: {message}");
        self.webhook.deliver(&message).await
    }

    fn render(&self, decision: Decision, section: &CourseSection) -> Option<String> {
        let lead_in = match decision {
            Decision::Discovered => "discovered",
            Decision::Availability => "availability",
            Decision::NoChange => return None,
        };
        Some(format!(
            "**{} {}:** {}",
            self.course_title,
            lead_in,
            section.describe()
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct RecordingWebhook {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl WebhookClient for RecordingWebhook {
        async fn deliver(&self, message: &str) -> Result<()> {
            self.sent.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    fn sample_section() -> CourseSection {
        CourseSection {
            number: "10101".to_string(),
            instructor: "Ada Lovelace".to_string(),
            location: "Tempe - CAVC351".to_string(),
            available: 5,
            total: 30,
        }
    }

    #[test]
    fn test_render_discovered() {
        let webhook = RecordingWebhook::default();
        let notifier = SectionNotifier::new(&webhook, "CSE-571");
        assert_eq!(
            notifier.render(Decision::Discovered, &sample_section()),
            Some(
                "**CSE-571 discovered:** 10101 Ada Lovelace *at* Tempe - CAVC351, \
                 5/30 seats open"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_render_availability() {
        let webhook = RecordingWebhook::default();
        let notifier = SectionNotifier::new(&webhook, "CSE-571");
        let message = notifier
            .render(Decision::Availability, &sample_section())
            .unwrap();
        assert!(message.starts_with("**CSE-571 availability:**"));
    }

    #[test]
    fn test_render_no_change_is_silent() {
        let webhook = RecordingWebhook::default();
        let notifier = SectionNotifier::new(&webhook, "CSE-571");
        assert_eq!(notifier.render(Decision::NoChange, &sample_section()), None);
    }

    #[tokio::test]
    async fn test_announce_delivers_once() {
        let webhook = RecordingWebhook::default();
        let notifier = SectionNotifier::new(&webhook, "CSE-571");

        notifier
            .announce(Decision::Discovered, &sample_section())
            .await
            .unwrap();
        notifier
            .announce(Decision::NoChange, &sample_section())
            .await
            .unwrap();

        let sent = webhook.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("discovered"));
    }
}
