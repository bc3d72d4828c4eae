//! folio-notify
//!
//! Lead-intent detection and the outbound notification path: a fire-and-forget
//! HTTP dispatcher, a log-only fallback, and the receiving `/api/notify` endpoint.

pub mod dispatch;
pub mod error;
pub mod intent;
pub mod receiver;

pub use dispatch::{notifier_from_config, HttpNotifier, LogNotifier, NotifyConfig, NotifyPayload};
pub use error::NotifyError;
pub use intent::{is_lead_intent, lead_message};
