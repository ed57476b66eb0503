use std::future::Future;

use folio_models::contact::ContactSubmission;

/// Forwards accepted contact submissions to a human.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotifierService: Send + Sync + 'static {
    /// Deliver the submission. Returns an error if delivery failed.
    fn deliver(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Check that the notification channel is reachable.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockNotifierService {
    pub fn with_deliver(mut self, submission: ContactSubmission, result: bool) -> Self {
        self.expect_deliver()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| {
                let result = match result {
                    true => Ok(()),
                    false => Err(anyhow::anyhow!("delivery failed")),
                };
                Box::pin(std::future::ready(result))
            });
        self
    }
}
