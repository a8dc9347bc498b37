use actor_framework::ActorClient;
use grubdash::lifecycle::RestaurantSystem;
use grubdash::model::OrderStatus;
use grubdash::order_actor::OrderError;
use grubdash::pipeline::Payload;
use serde_json::{json, Value};

fn data(value: Value) -> Payload {
    value.as_object().cloned().unwrap_or_default()
}

/// Full end-to-end test with all real actors: a dish goes on the menu, an order for it is
/// placed, changed and removed, and the system shuts down cleanly.
#[tokio::test]
async fn test_full_restaurant_system_integration() {
    let system = RestaurantSystem::new(8);

    let dish = system
        .dish_client
        .create_dish(data(json!({
            "name": "Dolcelatte and chickpea spaghetti",
            "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
            "price": 19,
            "image_url": "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg"
        })))
        .await
        .expect("Failed to create dish");

    let order = system
        .order_client
        .create_order(data(json!({
            "deliverTo": "Rick Sanchez (C-132)",
            "mobileNumber": "(202) 456-1111",
            "status": "pending",
            "dishes": [{"dishId": dish.id.0, "quantity": 2}]
        })))
        .await
        .expect("Failed to create order");
    assert_eq!(order.known_status(), Some(OrderStatus::Pending));
    assert_eq!(order.dishes[0].dish_id.as_deref(), Some(dish.id.0.as_str()));

    let updated = system
        .order_client
        .update_order(
            order.id.clone(),
            data(json!({
                "id": order.id.0,
                "deliverTo": "Morty Smith",
                "mobileNumber": "(202) 456-1112",
                "status": "preparing",
                "dishes": [{"dishId": dish.id.0, "quantity": 3}]
            })),
        )
        .await
        .expect("Failed to update order");
    assert_eq!(updated.deliver_to, "Morty Smith");
    assert_eq!(updated.dishes[0].quantity, 3);

    // The update does not move the status, so the order is still deletable
    system
        .order_client
        .delete_order(order.id.clone())
        .await
        .expect("Failed to delete order");
    assert!(matches!(
        system.order_client.find_order(order.id).await,
        Err(OrderError::NotFound(_))
    ));

    let menu = system.dish_client.list().await.unwrap();
    assert_eq!(menu.len(), 1);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_shutdown_with_queued_work() {
    let system = RestaurantSystem::default();

    let mut tasks = Vec::new();
    for i in 0..10 {
        let client = system.order_client.clone();
        tasks.push(tokio::spawn(async move {
            client
                .create_order(data(json!({
                    "deliverTo": format!("Table {i}"),
                    "mobileNumber": "555",
                    "dishes": [{"dishId": "d1", "quantity": 1}]
                })))
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let orders = system.order_client.list_orders().await.unwrap();
    assert_eq!(orders.len(), 10);

    system.shutdown().await.unwrap();
}
