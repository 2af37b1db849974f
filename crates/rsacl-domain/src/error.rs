//! Domain error types for identity resolution.

use thiserror::Error;

/// Domain-specific errors for identity resolution.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An entity kind with no registered ACL identity mapping was handed
    /// to the object identity resolver. Upstream code should treat this as
    /// a configuration or programming error, not a recoverable condition:
    /// a guessed key would attach the permission check to the wrong
    /// protected resource.
    #[error("no ACL identity mapping for entity kind: {type_name}")]
    UnmappedEntityKind { type_name: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
