//! Property-based tests for model types.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::model::{EntityType, ObjectIdentity, Sid};

    /// Strategy over every protectable entity kind.
    fn entity_type_strategy() -> impl Strategy<Value = EntityType> {
        prop_oneof![
            Just(EntityType::Course),
            Just(EntityType::Quiz),
            Just(EntityType::Group),
        ]
    }

    proptest! {
        #[test]
        fn test_same_kind_and_id_are_equal(
            entity_type in entity_type_strategy(),
            id in any::<i64>()
        ) {
            let a = ObjectIdentity::new(entity_type, id);
            let b = ObjectIdentity::new(entity_type, id);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn test_distinct_kinds_never_collide(id in any::<i64>()) {
            let course = ObjectIdentity::new(EntityType::Course, id);
            let quiz = ObjectIdentity::new(EntityType::Quiz, id);
            let group = ObjectIdentity::new(EntityType::Group, id);
            prop_assert_ne!(course, quiz);
            prop_assert_ne!(quiz, group);
            prop_assert_ne!(course, group);
        }

        #[test]
        fn test_sid_variants_with_equal_payload_are_distinct(payload in "[a-zA-Z0-9]{1,12}") {
            let principal = Sid::principal(payload.clone());
            let authority = Sid::authority(payload.clone());
            let group = Sid::group(payload);
            prop_assert_ne!(&principal, &authority);
            prop_assert_ne!(&authority, &group);
            prop_assert_ne!(&principal, &group);
        }

        #[test]
        fn test_sid_equality_tracks_payload(a in "[A-Z]{1,8}", b in "[A-Z]{1,8}") {
            let equal = a == b;
            prop_assert_eq!(Sid::authority(a) == Sid::authority(b), equal);
        }
    }
}
