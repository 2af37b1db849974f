//! Resolution of entities and principals into ACL lookup inputs.
//!
//! Two independent resolvers feed a permission check:
//! [`resolve_object_identity`] maps a protected entity to the key its ACL
//! is stored under, and [`SidResolver`] maps an authentication to every
//! security identifier an ACL entry may match it by. Both are stateless,
//! synchronous, and safe to call from any number of concurrent checks.

mod object_identity;
mod sid;
#[cfg(test)]
mod tests;

pub use object_identity::resolve_object_identity;
pub use sid::SidResolver;
