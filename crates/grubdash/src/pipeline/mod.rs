//! # Validation Pipelines
//!
//! A request is checked by an ordered list of stages before anything is written. Each stage
//! is a plain function over a [`RequestContext`] that either lets the request through
//! (`Ok(())`) or rejects it with exactly one error. [`Pipeline::run`] stops at the first
//! rejection, so later stages never see a request an earlier stage refused.
//!
//! ```rust
//! use grubdash::pipeline::{Payload, Pipeline, RequestContext, stages};
//! use grubdash::model::Order;
//! use grubdash::order_actor::OrderError;
//!
//! let pipeline: Pipeline<Order, OrderError> = Pipeline::new("example")
//!     .stage("deliverTo", stages::require_field("deliverTo"));
//!
//! let data = Payload::new();
//! let err = pipeline.run(&RequestContext::new(&data)).unwrap_err();
//! assert_eq!(err.to_string(), "Order must include a deliverTo");
//! ```

pub mod stages;

use std::fmt::Display;
use tracing::{debug, trace};

/// The `data` member of a request body.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// What a stage gets to look at.
#[derive(Debug)]
pub struct RequestContext<'a, T> {
    /// Fields supplied by the caller.
    pub data: &'a Payload,
    /// The stored record the request targets, once it has been resolved by id.
    pub current: Option<&'a T>,
}

impl<'a, T> RequestContext<'a, T> {
    /// Context for a request that does not target an existing record (create).
    pub fn new(data: &'a Payload) -> Self {
        Self {
            data,
            current: None,
        }
    }

    /// Context for a request against a resolved record (update, delete).
    pub fn resolved(data: &'a Payload, current: &'a T) -> Self {
        Self {
            data,
            current: Some(current),
        }
    }
}

/// A single validation step.
pub type Stage<T, E> = Box<dyn Fn(&RequestContext<'_, T>) -> Result<(), E> + Send + Sync>;

/// An ordered, named chain of stages.
pub struct Pipeline<T, E> {
    name: &'static str,
    stages: Vec<(&'static str, Stage<T, E>)>,
}

impl<T: 'static, E: Display + 'static> Pipeline<T, E> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            stages: Vec::new(),
        }
    }

    /// Appends a stage. Stages run in the order they are added.
    pub fn stage(
        mut self,
        label: &'static str,
        stage: impl Fn(&RequestContext<'_, T>) -> Result<(), E> + Send + Sync + 'static,
    ) -> Self {
        self.stages.push((label, Box::new(stage)));
        self
    }

    /// Runs every stage in order and returns the first rejection.
    pub fn run(&self, ctx: &RequestContext<'_, T>) -> Result<(), E> {
        for (label, stage) in &self.stages {
            if let Err(e) = stage(ctx) {
                debug!(pipeline = self.name, stage = label, error = %e, "Stage rejected request");
                return Err(e);
            }
            trace!(pipeline = self.name, stage = label, "Stage passed");
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
