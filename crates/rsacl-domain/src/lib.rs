//! rsacl-domain: Identity resolution core for object-level ACL checks
//!
//! This crate produces the two canonical inputs every ACL lookup starts
//! from: the object identity a protected entity's ACL is stored under, and
//! the set of security identifiers (sids) an authenticated principal can
//! be matched against. It decides nothing about access itself; the
//! permission evaluator consumes both results.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                rsacl-domain                 │
//! ├─────────────────────────────────────────────┤
//! │  model/      - Identities, sids, entities   │
//! │  hierarchy   - Authority closure expansion  │
//! │  resolver/   - Entity and sid resolution    │
//! └─────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod hierarchy;
pub mod model;
pub mod resolver;

// Re-export commonly used types at the crate root
pub use error::{DomainError, DomainResult};
pub use hierarchy::{RoleHierarchy, RoleHierarchyBuilder};
pub use resolver::{resolve_object_identity, SidResolver};
