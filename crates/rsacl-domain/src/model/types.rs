//! Core type definitions for ACL identity resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminator for the entity kinds that carry an ACL of their own.
///
/// The set is closed on purpose: every protectable kind is a deliberate,
/// reviewed addition, and the dispatch in
/// [`resolve_object_identity`](crate::resolver::resolve_object_identity)
/// must name it explicitly. Distinct kinds can never collide on their tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    /// A course grouping quizzes.
    Course,
    /// A quiz.
    Quiz,
    /// A user group.
    Group,
}

impl EntityType {
    /// Returns the stable tag the ACL store keys this kind under.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Course => "Course",
            EntityType::Quiz => "Quiz",
            EntityType::Group => "Group",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical `(kind, id)` key used to index an object's ACL.
///
/// Equality is by value: two identities resolved from distinct instances
/// of the same entity compare equal, which is what lets a check find
/// permissions persisted by an earlier request. Identities are built on
/// demand per resolution call and never retained beyond the single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectIdentity {
    /// The kind portion of the key.
    pub entity_type: EntityType,
    /// The entity's persistent numeric identifier.
    pub entity_id: i64,
}

impl ObjectIdentity {
    /// Creates a new ObjectIdentity.
    pub fn new(entity_type: EntityType, entity_id: i64) -> Self {
        Self {
            entity_type,
            entity_id,
        }
    }
}

impl fmt::Display for ObjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.entity_id)
    }
}

/// A security identifier an ACL entry can be matched against.
///
/// Equality and hashing are by variant and payload, so a sid set computed
/// from overlapping sources (an authority held directly and reachable
/// through the hierarchy) deduplicates without double-counting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sid {
    /// The authenticated principal's own identity.
    Principal { name: String },
    /// A granted-authority name.
    Authority { authority: String },
    /// A group the principal belongs to.
    Group { group: String },
}

impl Sid {
    /// Creates a principal sid.
    pub fn principal(name: impl Into<String>) -> Self {
        Self::Principal { name: name.into() }
    }

    /// Creates an authority sid.
    pub fn authority(authority: impl Into<String>) -> Self {
        Self::Authority {
            authority: authority.into(),
        }
    }

    /// Creates a group sid.
    pub fn group(group: impl Into<String>) -> Self {
        Self::Group {
            group: group.into(),
        }
    }
}

impl fmt::Display for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sid::Principal { name } => write!(f, "Principal[{name}]"),
            Sid::Authority { authority } => write!(f, "Authority[{authority}]"),
            Sid::Group { group } => write!(f, "Group[{group}]"),
        }
    }
}

/// A course grouping quizzes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub name: String,
}

impl Course {
    /// Creates a new Course.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub id: i64,
    pub name: String,
}

impl Quiz {
    /// Creates a new Quiz.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A user group. Groups carry an ACL of their own and also appear as
/// group sids for every account that belongs to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

impl Group {
    /// Creates a new Group.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A question inside a quiz. Questions inherit protection from their quiz
/// and have no ACL of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
}

/// A user's attempt at a quiz. Attempts inherit protection from their quiz
/// and have no ACL of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAttempt {
    pub id: i64,
}

/// Borrowed reference to a domain entity submitted for identity resolution.
///
/// This enum is the dispatch table of the object identity resolver: every
/// kind the system can hand to a permission check appears here, whether or
/// not it has an ACL mapping of its own. Adding a variant refuses to
/// compile until the resolver names it.
#[derive(Debug, Clone, Copy)]
pub enum DomainEntity<'a> {
    Course(&'a Course),
    Quiz(&'a Quiz),
    Group(&'a Group),
    Question(&'a Question),
    Attempt(&'a QuizAttempt),
}

impl DomainEntity<'_> {
    /// Returns the runtime kind name, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DomainEntity::Course(_) => "Course",
            DomainEntity::Quiz(_) => "Quiz",
            DomainEntity::Group(_) => "Group",
            DomainEntity::Question(_) => "Question",
            DomainEntity::Attempt(_) => "QuizAttempt",
        }
    }
}

/// A user account: the group-aware principal representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub authorities: Vec<String>,
    pub groups: Vec<Group>,
}

impl Account {
    /// Creates an account with no group memberships.
    pub fn new(username: impl Into<String>, authorities: Vec<String>) -> Self {
        Self {
            username: username.into(),
            authorities,
            groups: Vec::new(),
        }
    }

    /// Creates an account with group memberships.
    pub fn with_groups(
        username: impl Into<String>,
        authorities: Vec<String>,
        groups: Vec<Group>,
    ) -> Self {
        Self {
            username: username.into(),
            authorities,
            groups,
        }
    }
}

/// The principal carried by an authentication.
///
/// Only [`Principal::Account`] can enumerate group memberships; a bare
/// token identity has no group capability, which is a valid state and not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    /// A bare identity (e.g. established from a token).
    Token { username: String },
    /// A full account loaded by the authentication pipeline.
    Account(Account),
}

impl Principal {
    /// Returns the principal's unique identity.
    pub fn name(&self) -> &str {
        match self {
            Principal::Token { username } => username,
            Principal::Account(account) => &account.username,
        }
    }

    /// Returns the principal's group memberships, if this principal kind
    /// exposes them.
    pub fn groups(&self) -> Option<&[Group]> {
        match self {
            Principal::Token { .. } => None,
            Principal::Account(account) => Some(&account.groups),
        }
    }
}

/// The resolver-facing view of an authentication result.
///
/// The authority collection may be empty but can never be absent; an
/// authentication without authority information is unrepresentable here
/// by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    principal: Principal,
    authorities: Vec<String>,
}

impl Authentication {
    /// Creates an authentication from a principal and its directly
    /// granted authorities.
    pub fn new(principal: Principal, authorities: Vec<String>) -> Self {
        Self {
            principal,
            authorities,
        }
    }

    /// Builds an authentication for a full account, granting the
    /// account's own authorities.
    pub fn for_account(account: Account) -> Self {
        let authorities = account.authorities.clone();
        Self {
            principal: Principal::Account(account),
            authorities,
        }
    }

    /// Builds an authentication for a bare token identity.
    pub fn for_token(username: impl Into<String>, authorities: Vec<String>) -> Self {
        Self {
            principal: Principal::Token {
                username: username.into(),
            },
            authorities,
        }
    }

    /// Returns the authenticated principal.
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Returns the directly granted authorities.
    pub fn authorities(&self) -> &[String] {
        &self.authorities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_tags_are_distinct() {
        let tags = [
            EntityType::Course.as_str(),
            EntityType::Quiz.as_str(),
            EntityType::Group.as_str(),
        ];
        for (i, a) in tags.iter().enumerate() {
            for b in tags.iter().skip(i + 1) {
                assert_ne!(a, b, "entity tags must never collide");
            }
        }
    }

    #[test]
    fn test_object_identity_value_equality() {
        let a = ObjectIdentity::new(EntityType::Quiz, 42);
        let b = ObjectIdentity::new(EntityType::Quiz, 42);
        assert_eq!(a, b);
        assert_ne!(a, ObjectIdentity::new(EntityType::Course, 42));
        assert_ne!(a, ObjectIdentity::new(EntityType::Quiz, 43));
    }

    #[test]
    fn test_object_identity_display() {
        let identity = ObjectIdentity::new(EntityType::Quiz, 42);
        assert_eq!(identity.to_string(), "Quiz:42");
    }

    #[test]
    fn test_sid_equality_is_by_variant_and_payload() {
        assert_eq!(Sid::authority("USER"), Sid::authority("USER"));
        assert_ne!(Sid::authority("USER"), Sid::group("USER"));
        assert_ne!(Sid::principal("USER"), Sid::authority("USER"));
    }

    #[test]
    fn test_sid_set_deduplicates_in_hash_set() {
        use std::collections::HashSet;

        let sids: HashSet<Sid> = [
            Sid::authority("USER"),
            Sid::authority("USER"),
            Sid::group("staff"),
        ]
        .into_iter()
        .collect();
        assert_eq!(sids.len(), 2);
    }

    #[test]
    fn test_sid_display() {
        assert_eq!(Sid::principal("alice").to_string(), "Principal[alice]");
        assert_eq!(Sid::authority("USER").to_string(), "Authority[USER]");
        assert_eq!(Sid::group("staff").to_string(), "Group[staff]");
    }

    #[test]
    fn test_token_principal_has_no_group_capability() {
        let principal = Principal::Token {
            username: "alice".to_string(),
        };
        assert_eq!(principal.name(), "alice");
        assert!(principal.groups().is_none());
    }

    #[test]
    fn test_account_principal_exposes_groups() {
        let account = Account::with_groups(
            "alice",
            vec!["USER".to_string()],
            vec![Group::new(7, "staff")],
        );
        let principal = Principal::Account(account);
        assert_eq!(principal.name(), "alice");
        assert_eq!(principal.groups().unwrap().len(), 1);
    }

    #[test]
    fn test_for_account_grants_account_authorities() {
        let account = Account::new("bob", vec!["ADMIN".to_string()]);
        let auth = Authentication::for_account(account);
        assert_eq!(auth.authorities(), ["ADMIN".to_string()]);
        assert_eq!(auth.principal().name(), "bob");
    }
}
