//! Storage implementations

#[cfg(feature = "in-memory")]
pub mod in_memory;

#[cfg(feature = "in-memory")]
pub use in_memory::InMemoryDataService;
