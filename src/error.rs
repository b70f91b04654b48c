/*!
 * Error Handling for the GCM Sealing Core
 *
 * Provides the error type returned by every fallible operation, numeric
 * error codes, and user-facing messages.
 */

use thiserror::Error;

/// Error type for all sealing and opening operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid key length: expected 16, 24 or 32 bytes - got {actual} bytes")]
    InvalidKeyLength { actual: usize },

    #[error("Unsupported nonce length: expected 12 bytes - got {actual} bytes")]
    UnsupportedNonceLength { actual: usize },

    #[error("Authentication failed: tag does not match")]
    AuthenticationFailure,

    #[error("Message too long: {blocks} blocks requested, at most {limit} available")]
    MessageTooLong { blocks: u64, limit: u64 },
}

/// Error code constants
pub mod error_codes {
    // AES-GCM errors: 3000-3999
    pub const AES_INVALID_KEY_SIZE: u32 = 3003;
    pub const AES_INVALID_NONCE_SIZE: u32 = 3004;
    pub const AES_AUTHENTICATION_FAILED: u32 = 3005;
    pub const AES_COUNTER_EXHAUSTED: u32 = 3006;
}

impl CryptoError {
    /// Get the numeric error code for this error
    pub fn error_code(&self) -> u32 {
        match self {
            CryptoError::InvalidKeyLength { .. } => error_codes::AES_INVALID_KEY_SIZE,
            CryptoError::UnsupportedNonceLength { .. } => error_codes::AES_INVALID_NONCE_SIZE,
            CryptoError::AuthenticationFailure => error_codes::AES_AUTHENTICATION_FAILED,
            CryptoError::MessageTooLong { .. } => error_codes::AES_COUNTER_EXHAUSTED,
        }
    }

    /// Get a user-friendly error message
    pub fn user_friendly_message(&self) -> String {
        match self {
            CryptoError::InvalidKeyLength { actual } => format!(
                "The key is {} bytes long. Use a 16, 24 or 32 byte AES key.",
                actual
            ),
            CryptoError::UnsupportedNonceLength { actual } => format!(
                "The nonce is {} bytes long. Only 12 byte nonces are supported.",
                actual
            ),
            CryptoError::AuthenticationFailure => {
                "The message could not be authenticated. It may have been tampered with."
                    .to_string()
            }
            CryptoError::MessageTooLong { .. } => {
                "The message is too long to encrypt under a single nonce.".to_string()
            }
        }
    }

    /// Get the error category/type as a string
    pub fn error_type(&self) -> &'static str {
        match self {
            CryptoError::InvalidKeyLength { .. } => "InvalidKeyLength",
            CryptoError::UnsupportedNonceLength { .. } => "UnsupportedNonceLength",
            CryptoError::AuthenticationFailure => "AuthenticationFailure",
            CryptoError::MessageTooLong { .. } => "MessageTooLong",
        }
    }
}

/// Result type alias for cryptographic operations
pub type CryptoResult<T> = Result<T, CryptoError>;
