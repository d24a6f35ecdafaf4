//! Core module containing the traits and types shared by every resource

pub mod entity;
pub mod error;
pub mod extractors;
pub mod id;
pub mod module;
pub mod service;
pub mod validation;

pub use entity::{Entity, RecordId};
pub use error::{ErrorResponse, RequestError, ServiceError, ValidationError};
pub use extractors::{DataPayload, DataResponse};
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator, fresh_id};
pub use module::Module;
pub use service::DataService;
pub use validation::{RequestPayload, ValidationPipeline};
