use std::time::Duration;

use anyhow::{anyhow, Context};
use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use folio_models::contact::{ContactSubmission, ContactSubmissionInput};
use folio_notify_contracts::NotifierService;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Notifier> {
    notifier: Notifier,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Upper bound for a single notifier delivery.
    pub delivery_timeout: Duration,
}

impl<Notifier> ContactFeatureServiceImpl<Notifier> {
    pub fn new(notifier: Notifier, config: ContactFeatureConfig) -> Self {
        Self { notifier, config }
    }
}

impl<Notifier> ContactFeatureService for ContactFeatureServiceImpl<Notifier>
where
    Notifier: NotifierService,
{
    async fn submit(&self, input: ContactSubmissionInput) -> Result<(), ContactSubmitError> {
        let submission =
            ContactSubmission::validate(input).map_err(ContactSubmitError::Validation)?;

        info!(
            name = %submission.name,
            email = %submission.email,
            message = %submission.message,
            "contact form submission received"
        );

        tokio::time::timeout(
            self.config.delivery_timeout,
            self.notifier.deliver(submission),
        )
        .await
        .map_err(|_| {
            anyhow!(
                "Notifier did not finish within {:?}",
                self.config.delivery_timeout
            )
        })?
        .context("Failed to deliver contact submission")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use folio_models::contact::{ContactField, ContactFieldError};
    use folio_notify_contracts::MockNotifierService;
    use folio_utils::assert_matches;

    use super::*;

    fn config() -> ContactFeatureConfig {
        ContactFeatureConfig {
            delivery_timeout: Duration::from_secs(10),
        }
    }

    fn input() -> ContactSubmissionInput {
        ContactSubmissionInput {
            name: Some("Jane Doe".into()),
            email: Some("Jane@Example.com".into()),
            message: Some("Hello, I'd like to collaborate.".into()),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let expected = ContactSubmission::validate(ContactSubmissionInput {
            email: Some("jane@example.com".into()),
            ..input()
        })
        .unwrap();

        let notifier = MockNotifierService::new().with_deliver(expected, true);

        let sut = ContactFeatureServiceImpl::new(notifier, config());

        // Act
        let result = sut.submit(input()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn invalid_submission_is_not_delivered() {
        // Arrange
        let notifier = MockNotifierService::new();

        let sut = ContactFeatureServiceImpl::new(notifier, config());

        // Act
        let result = sut
            .submit(ContactSubmissionInput {
                name: Some("J".into()),
                ..input()
            })
            .await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSubmitError::Validation(errors)) if *errors == [ContactFieldError {
                field: ContactField::Name,
                message: "Name must be between 2 and 100 characters",
            }]
        );
    }

    #[tokio::test]
    async fn empty_submission() {
        // Arrange
        let sut = ContactFeatureServiceImpl::new(MockNotifierService::new(), config());

        // Act
        let result = sut.submit(ContactSubmissionInput::default()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Validation(errors)) if errors.len() == 3);
    }

    #[tokio::test]
    async fn delivery_failed() {
        // Arrange
        let submission = ContactSubmission::validate(input()).unwrap();
        let notifier = MockNotifierService::new().with_deliver(submission, false);

        let sut = ContactFeatureServiceImpl::new(notifier, config());

        // Act
        let result = sut.submit(input()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Other(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn delivery_timed_out() {
        // Arrange
        let mut notifier = MockNotifierService::new();
        notifier
            .expect_deliver()
            .once()
            .return_once(|_| Box::pin(std::future::pending()));

        let sut = ContactFeatureServiceImpl::new(notifier, config());

        // Act
        let result = sut.submit(input()).await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSubmitError::Other(err)) if err.to_string().contains("did not finish")
        );
    }
}
