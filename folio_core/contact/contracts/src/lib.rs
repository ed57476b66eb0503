use std::future::Future;

use folio_models::contact::{ContactFieldError, ContactSubmissionInput};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a contact form submission and, if it is valid, record it and
    /// forward it to the configured notifier.
    fn submit(
        &self,
        input: ContactSubmissionInput,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The submission is invalid.")]
    Validation(Vec<ContactFieldError>),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        input: ContactSubmissionInput,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(input))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
