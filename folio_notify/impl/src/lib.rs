use folio_models::contact::ContactSubmission;
use folio_notify_contracts::NotifierService;

pub use crate::{log::LogNotifier, smtp::SmtpNotifier};

pub mod log;
pub mod smtp;

/// The notifier selected by configuration.
#[derive(Debug, Clone)]
pub enum NotifierServiceImpl {
    Log(LogNotifier),
    Smtp(SmtpNotifier),
}

impl From<LogNotifier> for NotifierServiceImpl {
    fn from(value: LogNotifier) -> Self {
        Self::Log(value)
    }
}

impl From<SmtpNotifier> for NotifierServiceImpl {
    fn from(value: SmtpNotifier) -> Self {
        Self::Smtp(value)
    }
}

impl NotifierService for NotifierServiceImpl {
    async fn deliver(&self, submission: ContactSubmission) -> anyhow::Result<()> {
        match self {
            Self::Log(notifier) => notifier.deliver(submission).await,
            Self::Smtp(notifier) => notifier.deliver(submission).await,
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match self {
            Self::Log(notifier) => notifier.ping().await,
            Self::Smtp(notifier) => notifier.ping().await,
        }
    }
}
