//! Model types for ACL identity resolution.
//!
//! This module contains:
//! - Object identity types (EntityType, ObjectIdentity)
//! - Security identifiers (Sid)
//! - Domain entities and the authentication surface the resolvers consume

mod types;
#[cfg(test)]
mod types_proptest;

pub use types::*;
