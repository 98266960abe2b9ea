//! Two-factor verification code sender
//!
//! Generates a 6-digit code, hands it to a [`MailTransport`] and returns it
//! to the caller. Codes are neither stored nor verified here.

use rand::Rng;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

pub const VERIFICATION_SUBJECT: &str = "Your Verification Code";

/// Lowest and highest code values (inclusive)
const CODE_RANGE: std::ops::RangeInclusive<u32> = 100_000..=999_999;

/// A message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid recipient address: {0:?}")]
    InvalidRecipient(String),

    #[error("Mail transport failed: {0}")]
    Transport(String),
}

/// Outbound mail delivery
///
/// Failures must be returned, never swallowed.
pub trait MailTransport: Send + Sync {
    fn send(&self, mail: &OutgoingMail) -> Result<(), MailError>;
}

/// Transport that writes each message to the structured log
#[derive(Debug, Default, Clone)]
pub struct LogMailTransport;

impl MailTransport for LogMailTransport {
    fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        info!(
            from = %mail.from,
            to = ?mail.to,
            subject = %mail.subject,
            "Outgoing mail: {}",
            mail.body
        );
        Ok(())
    }
}

/// Draw a verification code uniformly from 100000..=999999
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(CODE_RANGE)
}

/// Sends verification codes through a mail transport
#[derive(Clone)]
pub struct TwoFactorSender {
    transport: Arc<dyn MailTransport>,
    from: String,
}

impl TwoFactorSender {
    pub fn new(transport: Arc<dyn MailTransport>, from: impl Into<String>) -> Self {
        Self {
            transport,
            from: from.into(),
        }
    }

    /// Generate a code, mail it to `email` and return it
    pub fn send_verification_code(&self, email: &str) -> Result<u32, MailError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(MailError::InvalidRecipient(email.to_string()));
        }

        let code = generate_code(&mut rand::thread_rng());

        self.transport.send(&OutgoingMail {
            from: self.from.clone(),
            to: vec![email.to_string()],
            subject: VERIFICATION_SUBJECT.to_string(),
            body: format!("Your verification code is {}", code),
        })?;

        info!("Verification code sent to {}", email);
        Ok(code)
    }
}
