//! Module system
//!
//! A module groups the resources of one service and knows how to register
//! their routes with the server.

use crate::server::entity_registry::EntityRegistry;

/// Trait for service modules
pub trait Module: Send + Sync {
    /// Unique name for this module
    fn name(&self) -> &str;

    /// Module version
    fn version(&self) -> &str;

    /// List of entity types this module manages (singular names)
    fn entity_types(&self) -> Vec<&str>;

    /// Register this module's entity descriptors
    fn register_entities(&self, registry: &mut EntityRegistry);
}
