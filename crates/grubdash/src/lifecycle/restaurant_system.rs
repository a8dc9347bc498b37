use crate::clients::{DishClient, OrderClient};
use crate::{dish_actor, order_actor};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Default mailbox capacity of each actor.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// The running actors of the service and the clients to reach them.
pub struct RestaurantSystem {
    pub order_client: OrderClient,
    pub dish_client: DishClient,
    handles: Vec<JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Spawns the order and dish actors. Must be called inside a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (order_actor, order_client) = order_actor::new(buffer_size);
        let (dish_actor, dish_client) = dish_actor::new(buffer_size);

        let order_handle = tokio::spawn(order_actor.run(()));
        let dish_handle = tokio::spawn(dish_actor.run(()));
        info!(buffer_size, "Restaurant system started");

        Self {
            order_client,
            dish_client,
            handles: vec![order_handle, dish_handle],
        }
    }

    /// Drops the clients and waits for every actor to stop.
    ///
    /// An actor task that panicked is reported as an error, after the others have been
    /// awaited.
    pub async fn shutdown(self) -> Result<(), String> {
        let Self {
            order_client,
            dish_client,
            handles,
        } = self;
        drop(order_client);
        drop(dish_client);

        let mut failures = Vec::new();
        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                failures.push(e.to_string());
            }
        }

        if failures.is_empty() {
            info!("Restaurant system stopped");
            Ok(())
        } else {
            Err(failures.join("; "))
        }
    }
}

impl Default for RestaurantSystem {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}
