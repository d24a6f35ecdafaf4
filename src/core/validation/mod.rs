//! Validation system
//!
//! Request bodies are checked by [`ValidationPipeline`]s built from the
//! reusable checks in [`validators`] plus resource-specific steps. Nothing is
//! written to a store until a pipeline has run to completion.

pub mod pipeline;
pub mod validators;

pub use pipeline::{RequestPayload, ValidationPipeline};
pub use validators::FieldCheck;
