//! Security collaborators

pub mod two_factor;

pub use two_factor::{
    LogMailTransport, MailError, MailTransport, OutgoingMail, TwoFactorSender,
};
