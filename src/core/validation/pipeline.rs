//! Ordered, short-circuiting validation pipelines
//!
//! A pipeline is a list of named steps run in order against a request
//! context. The first step that returns `Err` stops the run and its error is
//! what the client sees, so step order decides which message surfaces when a
//! request breaks several rules at once.

use crate::core::error::ServiceError;
use crate::core::validation::validators::FieldCheck;
use serde_json::Value;

type Step<C> = Box<dyn Fn(&C) -> Result<(), ServiceError> + Send + Sync>;

/// Context types that carry the request's `data` object
pub trait RequestPayload {
    fn payload(&self) -> &Value;
}

impl RequestPayload for Value {
    fn payload(&self) -> &Value {
        self
    }
}

/// Ordered list of validation steps over a context `C`
pub struct ValidationPipeline<C> {
    steps: Vec<(&'static str, Step<C>)>,
}

impl<C> ValidationPipeline<C> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step that sees the whole context
    pub fn step<F>(mut self, name: &'static str, check: F) -> Self
    where
        F: Fn(&C) -> Result<(), ServiceError> + Send + Sync + 'static,
    {
        self.steps.push((name, Box::new(check)));
        self
    }

    /// Names of the steps, in execution order
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|(name, _)| *name).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order, stopping at the first failure
    pub fn run(&self, ctx: &C) -> Result<(), ServiceError> {
        for (name, check) in &self.steps {
            if let Err(err) = check(ctx) {
                tracing::debug!(step = name, error = %err, "validation step rejected request");
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<C: RequestPayload> ValidationPipeline<C> {
    /// Append a step that only looks at the request payload
    pub fn field<V: FieldCheck>(self, name: &'static str, check: V) -> Self {
        self.step(name, move |ctx: &C| check(ctx.payload()))
    }
}

impl<C> Default for ValidationPipeline<C> {
    fn default() -> Self {
        Self::new()
    }
}
