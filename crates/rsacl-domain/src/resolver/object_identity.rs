//! Object identity resolution: entity instance to ACL lookup key.

use tracing::warn;

use crate::error::{DomainError, DomainResult};
use crate::model::{DomainEntity, EntityType, ObjectIdentity};

/// Resolves a domain entity to the canonical key its ACL is stored under.
///
/// Dispatch is an exhaustive match on the entity's exact kind: adding a
/// variant to [`DomainEntity`] refuses to compile until a mapping (or an
/// explicit rejection) is added here. Kinds without an ACL of their own
/// fail with [`DomainError::UnmappedEntityKind`]: a guessed key would
/// attach the permission check to the wrong protected resource, which is
/// strictly worse than failing the request.
pub fn resolve_object_identity(entity: DomainEntity<'_>) -> DomainResult<ObjectIdentity> {
    match entity {
        DomainEntity::Course(course) => Ok(ObjectIdentity::new(EntityType::Course, course.id)),
        DomainEntity::Quiz(quiz) => Ok(ObjectIdentity::new(EntityType::Quiz, quiz.id)),
        // Groups key under their own tag; sharing a tag with Quiz would
        // collide every group's ACL with a quiz of the same numeric id.
        DomainEntity::Group(group) => Ok(ObjectIdentity::new(EntityType::Group, group.id)),
        DomainEntity::Question(_) | DomainEntity::Attempt(_) => {
            let type_name = entity.kind_name().to_string();
            warn!(kind = %type_name, "entity kind has no ACL identity mapping");
            Err(DomainError::UnmappedEntityKind { type_name })
        }
    }
}
