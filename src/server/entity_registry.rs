//! Entity registry collecting the routes of every resource

use axum::Router;
use std::collections::BTreeMap;

/// Trait that describes how to build routes for an entity
///
/// Each resource (dishes, orders) implements this trait to provide its
/// REST routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "order")
    fn entity_type(&self) -> &str;

    /// The plural form used as the collection path (e.g., "orders")
    fn plural(&self) -> &str;

    /// Build the routes for this entity
    ///
    /// Typically:
    /// - GET/POST /{plural}
    /// - GET/PUT[/DELETE] /{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Registry for all entities served by the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// The entity type name is the key; registering it again replaces the
    /// previous descriptor.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        tracing::debug!(entity = %entity_type, path = %format!("/{}", descriptor.plural()), "registered entity");
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Merge every registered entity's routes into one router
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Registered entity types, sorted
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    /// Collection paths of the registered entities
    pub fn collection_paths(&self) -> Vec<String> {
        self.descriptors
            .values()
            .map(|d| format!("/{}", d.plural()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal descriptor with no routes
    struct MockDescriptor {
        entity_type: String,
        plural: String,
    }

    impl MockDescriptor {
        fn new(entity_type: &str, plural: &str) -> Self {
            Self {
                entity_type: entity_type.to_string(),
                plural: plural.to_string(),
            }
        }
    }

    impl EntityDescriptor for MockDescriptor {
        fn entity_type(&self) -> &str {
            &self.entity_type
        }

        fn plural(&self) -> &str {
            &self.plural
        }

        fn build_routes(&self) -> Router {
            Router::new()
        }
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = EntityRegistry::new();
        assert!(registry.entity_types().is_empty());
    }

    #[test]
    fn test_register_entities_sorted() {
        let mut registry = EntityRegistry::new();
        registry.register(Box::new(MockDescriptor::new("order", "orders")));
        registry.register(Box::new(MockDescriptor::new("dish", "dishes")));
        assert_eq!(registry.entity_types(), vec!["dish", "order"]);
        assert_eq!(registry.collection_paths(), vec!["/dishes", "/orders"]);
    }

    #[test]
    fn test_register_duplicate_replaces() {
        let mut registry = EntityRegistry::new();
        registry.register(Box::new(MockDescriptor::new("dish", "dishes")));
        registry.register(Box::new(MockDescriptor::new("dish", "plats")));
        assert_eq!(registry.entity_types().len(), 1);
        assert_eq!(registry.collection_paths(), vec!["/plats"]);
    }

    #[test]
    fn test_build_routes_empty_registry() {
        let registry = EntityRegistry::new();
        let _router = registry.build_routes();
    }
}
