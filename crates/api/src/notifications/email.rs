//! SMTP delivery of contact leads.
//!
//! Delivery is best-effort: the request is already stored when the mail
//! goes out, so a send failure is logged and never surfaced to the
//! visitor.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use effekt_db::models::contact::ContactRequestRow;

use crate::config::SmtpConfig;

/// Outbound mailer for contact-request notifications.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: String,
}

impl Mailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, lettre::transport::smtp::Error> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
            to: config.to.clone(),
        })
    }

    /// Send a plain-text notification for a stored contact request.
    pub async fn send_contact_lead(&self, lead: &ContactRequestRow) -> anyhow::Result<()> {
        let subject = match &lead.stage_label {
            Some(label) => format!("Contact request: {label}"),
            None => "Contact request".to_string(),
        };

        let mut body = format!(
            "Name: {}\nEmail: {}\nPhone: {}\n",
            lead.name,
            lead.email,
            lead.phone.as_deref().unwrap_or("-"),
        );
        if let Some(branch) = &lead.branch {
            body.push_str(&format!("Branch: {branch}\n"));
        }
        if let Some(page_url) = &lead.page_url {
            body.push_str(&format!("Page: {page_url}\n"));
        }
        body.push_str(&format!("\n{}\n", lead.message));

        let message = Message::builder()
            .from(self.from.parse()?)
            .reply_to(lead.email.parse()?)
            .to(self.to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        self.transport.send(message).await?;
        Ok(())
    }
}
