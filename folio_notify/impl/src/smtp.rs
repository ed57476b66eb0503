use anyhow::{anyhow, Context};
use folio_models::contact::ContactSubmission;
use folio_notify_contracts::NotifierService;
use lettre::{
    message::{header, Mailbox},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::info;

/// Notifier that forwards submissions by email.
#[derive(Debug, Clone)]
pub struct SmtpNotifier {
    from: Mailbox,
    recipient: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpNotifier {
    pub fn new(url: &str, from: Mailbox, recipient: Mailbox) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)
            .context("Invalid smtp url")?
            .build();

        Ok(Self {
            from,
            recipient,
            transport,
        })
    }

    fn build_message(&self, submission: ContactSubmission) -> anyhow::Result<Message> {
        let ContactSubmission {
            name,
            email,
            message,
        } = submission;

        let body = format!(
            "New contact form submission\n\nName: {name}\nEmail: {email}\n\nMessage:\n{message}\n"
        );

        Message::builder()
            .from(self.from.clone())
            .to(self.recipient.clone())
            .reply_to(Mailbox::new(Some(name.to_string()), email.into_inner()))
            .subject(format!("Portfolio Contact: {name}"))
            .header(header::ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(Into::into)
    }
}

impl NotifierService for SmtpNotifier {
    async fn deliver(&self, submission: ContactSubmission) -> anyhow::Result<()> {
        let message = self.build_message(submission)?;

        let response = self.transport.send(message).await?;
        if !response.is_positive() {
            return Err(anyhow!(
                "Smtp server rejected the message with code {}",
                response.code()
            ));
        }

        info!(recipient = %self.recipient, "forwarded contact submission by email");
        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
