//! Security identifier resolution: authentication to sid set.

use std::collections::HashSet;

use tracing::debug;

use crate::hierarchy::RoleHierarchy;
use crate::model::{Authentication, Sid};

/// Resolves an authentication into the full set of sids a permission
/// evaluator matches ACL entries against.
///
/// The role hierarchy is injected at construction: built once during
/// startup, never mutated afterward, and shared read-only across any
/// number of concurrent checks.
#[derive(Debug, Clone)]
pub struct SidResolver {
    hierarchy: RoleHierarchy,
}

impl SidResolver {
    /// Creates a resolver with the given role hierarchy.
    pub fn new(hierarchy: RoleHierarchy) -> Self {
        Self { hierarchy }
    }

    /// Creates a resolver with the identity (no-op) hierarchy.
    pub fn without_hierarchy() -> Self {
        Self {
            hierarchy: RoleHierarchy::none(),
        }
    }

    /// Resolves the ordered, duplicate-free sid set for an authentication.
    ///
    /// Order: the principal sid first, one authority sid per authority in
    /// the reachable-authority closure (closure order), then one group sid
    /// per group for group-aware principals. An empty authority set and a
    /// principal without group capability are both valid; resolution
    /// cannot fail on well-formed input.
    pub fn resolve_sids(&self, authentication: &Authentication) -> Vec<Sid> {
        let reachable = self
            .hierarchy
            .reachable_authorities(authentication.authorities().iter().cloned());

        let mut sids = Vec::with_capacity(reachable.len() + 1);
        let mut seen = HashSet::new();

        let principal = Sid::principal(authentication.principal().name());
        push_unique(&mut sids, &mut seen, principal);
        for authority in reachable {
            push_unique(&mut sids, &mut seen, Sid::authority(authority));
        }
        if let Some(groups) = authentication.principal().groups() {
            for group in groups {
                push_unique(&mut sids, &mut seen, Sid::group(group.name.clone()));
            }
        }

        debug!(
            principal = %authentication.principal().name(),
            count = sids.len(),
            "resolved sid set"
        );
        sids
    }
}

fn push_unique(sids: &mut Vec<Sid>, seen: &mut HashSet<Sid>, sid: Sid) {
    if seen.insert(sid.clone()) {
        sids.push(sid);
    }
}
