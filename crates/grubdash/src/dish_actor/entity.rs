//! Entity trait implementation for the Dish domain type.
//!
//! Dishes have no lifecycle of their own: create and update both replace every field once
//! the pipeline accepts the payload. Deletion is not offered by the HTTP layer.

use super::validation::{self, price};
use super::DishError;
use crate::model::{Dish, DishCreate, DishId, DishUpdate};
use crate::pipeline::stages::text;
use crate::pipeline::{Pipeline, RequestContext};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::sync::LazyLock;

static CREATE: LazyLock<Pipeline<Dish, DishError>> = LazyLock::new(validation::create_pipeline);
static UPDATE: LazyLock<Pipeline<Dish, DishError>> = LazyLock::new(validation::update_pipeline);

#[async_trait]
impl ActorEntity for Dish {
    type Id = DishId;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Context = ();
    type Error = DishError;

    fn id(&self) -> &DishId {
        &self.id
    }

    fn from_create_params(id: DishId, params: DishCreate) -> Result<Self, DishError> {
        let data = &params.data;
        CREATE.run(&RequestContext::new(data))?;

        Ok(Self {
            id,
            name: text(data, "name"),
            description: text(data, "description"),
            price: price(data)?,
            image_url: text(data, "image_url"),
        })
    }

    async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), DishError> {
        let data = &update.data;
        UPDATE.run(&RequestContext::resolved(data, &*self))?;

        self.price = price(data)?;
        self.name = text(data, "name");
        self.description = text(data, "description");
        self.image_url = text(data, "image_url");
        Ok(())
    }
}
