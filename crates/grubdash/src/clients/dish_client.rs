//! # Dish Client
//!
//! Provides a high‑level API for interacting with the `Dish` actor.
use crate::dish_actor::DishError;
use crate::model::{Dish, DishCreate, DishId, DishUpdate};
use crate::pipeline::Payload;
use actor_framework::ActorClient;
use actor_framework::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Dish actor.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, data))]
    pub async fn create_dish(&self, data: Payload) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner
            .create(DishCreate { data })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn find_dish(&self, id: DishId) -> Result<Dish, DishError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| DishError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_dishes(&self) -> Result<Vec<Dish>, DishError> {
        self.list().await
    }

    #[instrument(skip(self, data))]
    pub async fn update_dish(&self, id: DishId, data: Payload) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner
            .update(id, DishUpdate { data })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = DishError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<DishError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => DishError::NotFound(id),
            Err(other) => DishError::ActorCommunicationError(other.to_string()),
        }
    }
}
