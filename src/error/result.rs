use super::chat_error::ChatError;

/// Result alias for fallible setup operations.
pub type ChatResult<T> = Result<T, ChatError>;
