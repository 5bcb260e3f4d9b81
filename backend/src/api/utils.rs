//! API utility functions
//!
//! Validation helpers shared by the API handlers.

use crate::error::AppError;

/// Maximum message length in characters
pub const MAX_MESSAGE_LENGTH: usize = 10_000;

/// Validate a chat message
///
/// # Arguments
/// * `message` - Message text to validate
///
/// # Returns
/// * `Ok(())` - Message is valid
/// * `Err(AppError)` - Message is blank or too long
pub fn validate_message(message: &str) -> Result<(), AppError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }
    if trimmed.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(AppError::Validation(format!(
            "Message exceeds maximum length of {} characters",
            MAX_MESSAGE_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_messages_are_rejected() {
        for message in ["", "   ", "\n\t"] {
            let error = validate_message(message).unwrap_err();
            assert_eq!(error.to_string(), "Message is required");
        }
    }

    #[test]
    fn test_long_message_is_rejected() {
        let message = "a".repeat(MAX_MESSAGE_LENGTH + 1);
        assert!(validate_message(&message).is_err());
        assert!(validate_message(&"a".repeat(MAX_MESSAGE_LENGTH)).is_ok());
    }
}
