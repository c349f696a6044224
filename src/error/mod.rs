//! Error handling for the process boundary.
//!
//! The view logic itself cannot fail: every mutation is total and a blank
//! send is a silent no-op. What can fail is everything around it, namely
//! terminal setup, configuration from the environment and the log file.
//!
//! | Variant | Raised by | Fatal |
//! |---------|-----------|-------|
//! | `Terminal` | raw mode / alternate screen setup | Yes |
//! | `Config` | invalid environment variable or CLI value | Yes |
//! | `Logging` | log directory or file creation | No (logging is skipped) |
//! | `Io` | any other I/O | Yes |

mod chat_error;
mod result;

pub use chat_error::ChatError;
pub use result::ChatResult;
