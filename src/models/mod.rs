//! Display records for the chat shell.
//!
//! Both record types borrow `'static` text: every instance lives in the fixed
//! data set (see [`crate::data`]) for the whole process lifetime.

mod chat;
mod message;

pub use chat::ChatSummary;
pub use message::{DeliveryStatus, ThreadMessage};
