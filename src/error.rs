//! Authorization error types.
//!
//! Permission evaluation itself never fails: a missing organization context
//! degrades to deny-all rather than raising an error. Errors only occur at
//! the edges - parsing role strings and loading session data from a
//! provider.

use crate::role::ParseRoleError;
use thiserror::Error;

/// Errors from the edges of the authorization layer.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// A role string could not be parsed.
    #[error(transparent)]
    InvalidRole(#[from] ParseRoleError),

    /// The session provider failed to load session data.
    #[error("session provider error: {message}")]
    Provider {
        /// What the provider was doing when it failed.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AuthzError {
    /// Create a provider error with a message only.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }

    /// Create a provider error wrapping an underlying cause.
    pub fn provider_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Provider {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for authorization operations.
pub type Result<T> = std::result::Result<T, AuthzError>;
