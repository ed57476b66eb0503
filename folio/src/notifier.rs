use anyhow::Context;
use folio_config::NotifierConfig;
use folio_notify_impl::{LogNotifier, NotifierServiceImpl, SmtpNotifier};

/// Create the notifier selected by the config
pub fn connect(config: &NotifierConfig) -> anyhow::Result<NotifierServiceImpl> {
    match config {
        NotifierConfig::Log => Ok(LogNotifier.into()),
        NotifierConfig::Smtp(smtp) => SmtpNotifier::new(
            &smtp.url,
            smtp.from.clone().into_mailbox(),
            smtp.recipient.clone().into_mailbox(),
        )
        .map(Into::into)
        .context("Failed to configure SMTP notifier"),
    }
}
