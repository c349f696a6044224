//! Application state management
//!
//! All mutable UI state lives in a single [`ViewStore`] owned by the shell:
//! - [`Theme`]: light or dark palette
//! - [`Section`]: active navigation destination
//! - selected chat, composer draft and emoji picker visibility

mod section;
mod store;

pub use section::{Section, Theme};
pub use store::ViewStore;
