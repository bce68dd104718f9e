use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

use crate::domain::projection::RunwayResult;
use crate::services::notification::Notification;
use crate::services::runway_report::{generate_html_report, REPORT_TITLE};

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("invalid email address: {0:?}")]
    InvalidAddress(String),
    #[error("failed to deliver email to {address}: {source}")]
    Delivery { address: String, source: io::Error },
}

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// An address of the shape `local@domain.tld` without whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(address: &str) -> Result<Self, EmailError> {
        if !EMAIL_PATTERN.is_match(address) {
            return Err(EmailError::InvalidAddress(address.to_string()));
        }
        Ok(Self(address.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: EmailAddress,
    pub subject: String,
    pub html_body: String,
}

impl EmailMessage {
    pub fn runway_analysis(to: EmailAddress, result: &RunwayResult, generated_on: NaiveDate) -> Self {
        Self {
            to,
            subject: format!("Your {REPORT_TITLE}"),
            html_body: generate_html_report(result, generated_on),
        }
    }

    /// Renders headers and body as a minimal RFC 822 style message.
    pub fn to_mime(&self) -> String {
        format!(
            "To: {}\r\nSubject: {}\r\nMIME-Version: 1.0\r\nContent-Type: text/html; charset=utf-8\r\n\r\n{}",
            self.to, self.subject, self.html_body
        )
    }
}

/// Describes an interface for handing a rendered message to a transport.
#[allow(async_fn_in_trait)]
pub trait Mailer {
    async fn deliver(&self, message: &EmailMessage) -> Result<(), EmailError>;
}

/// Stand-in transport that drops each message into a local directory.
pub struct OutboxMailer {
    outbox_dir: PathBuf,
}

impl OutboxMailer {
    pub fn new(outbox_dir: impl Into<PathBuf>) -> Self {
        Self {
            outbox_dir: outbox_dir.into(),
        }
    }

    /// Outbox file for the `attempt`-th message to the same recipient:
    /// `founder_example.com.eml`, then `founder_example.com-1.eml`, ...
    pub fn message_path(&self, message: &EmailMessage, attempt: usize) -> PathBuf {
        let name: String = message
            .to
            .as_str()
            .chars()
            .map(|ch| if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' { ch } else { '_' })
            .collect();
        if attempt == 0 {
            self.outbox_dir.join(format!("{name}.eml"))
        } else {
            self.outbox_dir.join(format!("{name}-{attempt}.eml"))
        }
    }

    /// Creates the first free message file; existing messages are never replaced.
    async fn create_message_file(
        &self,
        message: &EmailMessage,
    ) -> io::Result<(PathBuf, tokio::fs::File)> {
        let mut attempt = 0;
        loop {
            let path = self.message_path(message, attempt);
            match open_new(&path).await {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(e),
            }
        }
    }
}

async fn open_new(path: &Path) -> io::Result<tokio::fs::File> {
    tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
}

impl Mailer for OutboxMailer {
    async fn deliver(&self, message: &EmailMessage) -> Result<(), EmailError> {
        let delivery_error = |source: io::Error| EmailError::Delivery {
            address: message.to.to_string(),
            source,
        };
        tokio::fs::create_dir_all(&self.outbox_dir)
            .await
            .map_err(delivery_error)?;
        let (path, mut file) = self
            .create_message_file(message)
            .await
            .map_err(delivery_error)?;
        file.write_all(message.to_mime().as_bytes())
            .await
            .map_err(delivery_error)?;
        file.flush().await.map_err(delivery_error)?;
        log::info!("queued email for {} at {}", message.to, path.display());
        Ok(())
    }
}

/// Validates `address`, renders the analysis and hands it to `mailer`.
///
/// Every outcome is reported as a [`Notification`]; an invalid address never
/// reaches the mailer.
pub async fn send_runway_email<M: Mailer>(
    mailer: &M,
    address: &str,
    result: &RunwayResult,
    generated_on: NaiveDate,
) -> Notification {
    let to = match EmailAddress::parse(address) {
        Ok(to) => to,
        Err(e) => {
            log::warn!("{e}");
            return Notification::invalid_email();
        }
    };

    let message = EmailMessage::runway_analysis(to, result, generated_on);
    match mailer.deliver(&message).await {
        Ok(()) => Notification::email_sent(message.to.as_str()),
        Err(e) => {
            log::error!("Error sending email: {e}");
            Notification::email_failed()
        }
    }
}
