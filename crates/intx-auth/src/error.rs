//! Error types for credential handling

/// Errors that can occur while loading or using credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Secret material is malformed or undecodable
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for credential operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("INTX_CREDENTIALS".to_string());
        assert!(err.to_string().contains("INTX_CREDENTIALS"));
    }
}
