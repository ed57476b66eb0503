use folio_models::contact::ContactSubmission;
use folio_notify_contracts::NotifierService;
use tracing::debug;

/// Notifier that only records the delivery in the operational log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl NotifierService for LogNotifier {
    async fn deliver(&self, submission: ContactSubmission) -> anyhow::Result<()> {
        debug!(email = %submission.email, "no notification channel configured, submission stays in the log");
        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use folio_models::contact::ContactSubmissionInput;

    use super::*;

    #[tokio::test]
    async fn deliver_always_succeeds() {
        // Arrange
        let submission = ContactSubmission::validate(ContactSubmissionInput {
            name: Some("Jane Doe".into()),
            email: Some("jane@example.com".into()),
            message: Some("Hello, I'd like to collaborate.".into()),
        })
        .unwrap();

        let sut = LogNotifier;

        // Act
        let result = sut.deliver(submission).await;

        // Assert
        result.unwrap();
        sut.ping().await.unwrap();
    }
}
