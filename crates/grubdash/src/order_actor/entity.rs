//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] implementation that lets [`Order`] be managed
//! by the generic [`ResourceActor`](actor_framework::ResourceActor). Every hook runs its
//! validation pipeline first, so a request is either rejected with one [`OrderError`] or
//! applied in full.

use super::validation::{self, dishes};
use super::OrderError;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::pipeline::stages::text;
use crate::pipeline::{Payload, Pipeline, RequestContext};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::sync::LazyLock;

static CREATE: LazyLock<Pipeline<Order, OrderError>> = LazyLock::new(validation::create_pipeline);
static UPDATE: LazyLock<Pipeline<Order, OrderError>> = LazyLock::new(validation::update_pipeline);
static DELETE: LazyLock<Pipeline<Order, OrderError>> = LazyLock::new(validation::delete_pipeline);

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Context = ();
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Creates a new Order from the request payload.
    ///
    /// A supplied status is stored exactly as sent, known or not. `null` counts as absent.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        let data = &params.data;
        CREATE.run(&RequestContext::new(data))?;

        Ok(Self {
            id,
            deliver_to: text(data, "deliverTo"),
            mobile_number: text(data, "mobileNumber"),
            status: data.get("status").filter(|status| !status.is_null()).cloned(),
            dishes: dishes(data)?,
        })
    }

    /// Handles updates to the Order entity.
    ///
    /// # Fields Updated
    /// - `deliver_to`
    /// - `mobile_number`
    /// - `dishes`
    ///
    /// `status` is required and checked against the lifecycle but never written.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), OrderError> {
        let data = &update.data;
        UPDATE.run(&RequestContext::resolved(data, &*self))?;

        let dishes = dishes(data)?;
        self.deliver_to = text(data, "deliverTo");
        self.mobile_number = text(data, "mobileNumber");
        self.dishes = dishes;
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), OrderError> {
        DELETE.run(&RequestContext::resolved(&Payload::new(), self))
    }
}
