//! Server module for building the HTTP application
//!
//! The [`ServerBuilder`] collects entity descriptors (directly or through a
//! [`Module`](crate::core::Module)), adds health routes, fallbacks and the
//! HTTP middleware stack, and serves the result.

pub mod builder;
pub mod entity_registry;
pub mod router;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
