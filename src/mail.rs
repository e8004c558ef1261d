use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailConfig;
use crate::error::{AppError, Result};

fn subject_line(name: &str, email: &str) -> String {
    let who = if name.is_empty() { email } else { name };
    format!("Website contact from {}", who)
}

fn body_text(name: &str, email: &str, phone: &str, message: &str) -> String {
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\n\n{}",
        name, email, phone, message
    )
}

/// Assemble the contact email. Pure, so it is testable without a server.
fn build_message(
    mail: &MailConfig,
    name: &str,
    email: &str,
    phone: &str,
    message: &str,
) -> Result<Message> {
    let from: Mailbox = mail
        .username
        .parse()
        .map_err(|e| AppError::Mail(format!("invalid sender address: {}", e)))?;
    let to: Mailbox = mail
        .recipient
        .parse()
        .map_err(|e| AppError::Mail(format!("invalid recipient address: {}", e)))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(subject_line(name, email))
        .header(ContentType::TEXT_PLAIN)
        .body(body_text(name, email, phone, message))
        .map_err(|e| AppError::Mail(e.to_string()))
}

/// Send the contact form to the configured recipient over SMTP.
///
/// The connection upgrades via STARTTLS and authenticates with the
/// configured credentials. Any transport failure surfaces as
/// [`AppError::Mail`], which the handler turns into a 500 with the reason.
pub async fn send_contact_email(
    mail: &MailConfig,
    name: &str,
    email: &str,
    phone: &str,
    message: &str,
) -> Result<()> {
    let email_message = build_message(mail, name, email, phone, message)?;

    let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&mail.host)
        .map_err(|e| AppError::Mail(e.to_string()))?
        .port(mail.port)
        .credentials(Credentials::new(
            mail.username.clone(),
            mail.password.clone(),
        ))
        .build();

    transport
        .send(email_message)
        .await
        .map_err(|e| AppError::Mail(e.to_string()))?;

    tracing::info!("Contact email sent to {}", mail.recipient);
    Ok(())
}
