//! Role hierarchy expansion.
//!
//! A [`RoleHierarchy`] is process-wide configuration: which authorities
//! imply which other authorities. It is assembled once during startup,
//! treated as immutable afterward, and shared read-only across concurrent
//! resolutions. No runtime mutation of the graph is supported.

use std::collections::{HashMap, HashSet, VecDeque};

/// Immutable authority implication graph.
///
/// [`reachable_authorities`](RoleHierarchy::reachable_authorities) expands
/// a set of directly granted authorities into its transitive closure. The
/// closure always contains every directly granted authority; with no
/// configured implications the expansion is the identity function.
#[derive(Debug, Clone, Default)]
pub struct RoleHierarchy {
    /// Authorities implied directly by each authority, in insertion order.
    implied: HashMap<String, Vec<String>>,
}

impl RoleHierarchy {
    /// Creates the identity hierarchy: no authority implies any other.
    pub fn none() -> Self {
        Self::default()
    }

    /// Starts building a hierarchy from implication edges.
    pub fn builder() -> RoleHierarchyBuilder {
        RoleHierarchyBuilder::default()
    }

    /// Expands directly granted authorities into the reachable-authority
    /// closure.
    ///
    /// Total over any input (empty in, empty out) and monotonic: the
    /// closure is a superset of the input. The walk is breadth-first from
    /// the direct authorities in their given order, keeps the first
    /// occurrence of each authority, and terminates on cyclic
    /// configurations.
    pub fn reachable_authorities<I, S>(&self, direct: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut queue: VecDeque<String> = direct.into_iter().map(Into::into).collect();
        let mut seen: HashSet<String> = HashSet::new();
        let mut closure = Vec::new();

        while let Some(authority) = queue.pop_front() {
            if !seen.insert(authority.clone()) {
                continue;
            }
            if let Some(implied) = self.implied.get(&authority) {
                queue.extend(implied.iter().cloned());
            }
            closure.push(authority);
        }

        closure
    }
}

/// Builder assembling a [`RoleHierarchy`] from implication edges.
#[derive(Debug, Default)]
pub struct RoleHierarchyBuilder {
    implied: HashMap<String, Vec<String>>,
}

impl RoleHierarchyBuilder {
    /// Records that holders of `higher` also hold `lower`. Duplicate
    /// edges collapse.
    pub fn implies(mut self, higher: impl Into<String>, lower: impl Into<String>) -> Self {
        let entry = self.implied.entry(higher.into()).or_default();
        let lower = lower.into();
        if !entry.contains(&lower) {
            entry.push(lower);
        }
        self
    }

    /// Finalizes the hierarchy.
    pub fn build(self) -> RoleHierarchy {
        RoleHierarchy {
            implied: self.implied,
        }
    }
}
