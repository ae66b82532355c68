//! Comment notifier implementations.

mod console;
mod relay;

pub use console::LogNotifier;
pub use relay::{MailConfig, MailRelayNotifier};
