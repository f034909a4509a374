//! Reference to the content entity an alias was generated for.

/// A content entity that can own path aliases.
pub trait ContentEntity {
    /// Machine name of the entity type, e.g. `"node"`.
    fn entity_type_id(&self) -> &str;

    fn id(&self) -> i32;
}

/// Owned snapshot of a [`ContentEntity`]'s type and id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub entity_type: String,
    pub id: i32,
}

impl EntityRef {
    pub fn new(entity_type: impl Into<String>, id: i32) -> Self {
        Self {
            entity_type: entity_type.into(),
            id,
        }
    }

    pub fn from_entity<E: ContentEntity + ?Sized>(entity: &E) -> Self {
        Self::new(entity.entity_type_id(), entity.id())
    }
}

impl ContentEntity for EntityRef {
    fn entity_type_id(&self) -> &str {
        &self.entity_type
    }

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Node {
        nid: i32,
    }

    impl ContentEntity for Node {
        fn entity_type_id(&self) -> &str {
            "node"
        }

        fn id(&self) -> i32 {
            self.nid
        }
    }

    #[test]
    fn test_from_entity() {
        let reference = EntityRef::from_entity(&Node { nid: 5 });

        assert_eq!(reference.entity_type, "node");
        assert_eq!(reference.id, 5);
    }
}
