use actor_framework::ActorClient;
use grubdash::clients::OrderClient;
use grubdash::model::{Order, OrderId, OrderStatus};
use grubdash::order_actor::{self, OrderError};
use grubdash::pipeline::Payload;
use serde_json::{json, Value};

/// Real Order actor, driven through its client.
/// Every test spawns its own actor so the stores never overlap.
fn spawn_orders() -> OrderClient {
    let (actor, client) = order_actor::new(16);
    tokio::spawn(actor.run(()));
    client
}

fn data(value: Value) -> Payload {
    value.as_object().cloned().unwrap_or_default()
}

fn new_order(status: Option<&str>) -> Payload {
    let mut payload = data(json!({
        "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
        "mobileNumber": "(505) 143-3369",
        "dishes": [{"dishId": "d1", "quantity": 2}]
    }));
    if let Some(status) = status {
        payload.insert("status".into(), json!(status));
    }
    payload
}

fn update_to(status: &str) -> Payload {
    data(json!({
        "deliverTo": "Rick Sanchez (C-132)",
        "mobileNumber": "(202) 456-1111",
        "status": status,
        "dishes": [{"dishId": "d2", "quantity": 1}, {"dishId": "d3", "quantity": 4}]
    }))
}

async fn create(client: &OrderClient, status: Option<&str>) -> Order {
    client.create_order(new_order(status)).await.unwrap()
}

#[tokio::test]
async fn test_created_order_is_retrievable() {
    let client = spawn_orders();

    let order = create(&client, None).await;
    assert_eq!(order.deliver_to, "308 Negra Arroyo Lane, Albuquerque, NM");
    assert_eq!(order.status, None);
    assert_eq!(order.dishes.len(), 1);
    assert_eq!(order.dishes[0].quantity, 2);

    // Reading twice without a mutation in between gives the same record
    let first = client.find_order(order.id.clone()).await.unwrap();
    let second = client.find_order(order.id.clone()).await.unwrap();
    assert_eq!(first, order);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_create_rejections_are_not_stored() {
    let client = spawn_orders();

    let mut empty_dishes = new_order(None);
    empty_dishes.insert("dishes".into(), json!([]));
    let err = client.create_order(empty_dishes).await.unwrap_err();
    assert_eq!(err, OrderError::InvalidDishList);
    assert!(err.to_string().contains("at least one dish"));

    let mut zero_quantity = new_order(None);
    zero_quantity.insert(
        "dishes".into(),
        json!([{"dishId": "d1", "quantity": 1}, {"dishId": "d2", "quantity": 0}]),
    );
    let err = client.create_order(zero_quantity).await.unwrap_err();
    assert_eq!(err, OrderError::InvalidQuantity(1));
    assert!(err.to_string().contains("Dish 1"));

    let mut no_phone = new_order(None);
    no_phone.insert("mobileNumber".into(), json!(""));
    assert_eq!(
        client.create_order(no_phone).await.unwrap_err(),
        OrderError::MissingField("mobileNumber")
    );

    assert!(client.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_stores_unknown_status_as_sent() {
    let client = spawn_orders();

    let order = create(&client, Some("bogus")).await;
    assert_eq!(order.status, Some(json!("bogus")));
    assert_eq!(order.known_status(), None);

    // Not pending, so it cannot be deleted; not delivered, so it can still be changed
    assert_eq!(
        client.delete_order(order.id.clone()).await.unwrap_err(),
        OrderError::DeleteNotPending
    );
    let updated = client
        .update_order(order.id.clone(), update_to("pending"))
        .await
        .unwrap();
    assert_eq!(updated.status, Some(json!("bogus")));
}

#[tokio::test]
async fn test_list_keeps_creation_order() {
    let client = spawn_orders();

    let a = create(&client, None).await;
    let b = create(&client, Some("preparing")).await;
    let c = create(&client, Some("pending")).await;
    assert_ne!(a.id, b.id);

    let ids: Vec<OrderId> = client
        .list_orders()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);
}

#[tokio::test]
async fn test_update_replaces_details_but_not_status() {
    let client = spawn_orders();
    let order = create(&client, Some("pending")).await;

    let updated = client
        .update_order(order.id.clone(), update_to("out-for-delivery"))
        .await
        .unwrap();

    assert_eq!(updated.id, order.id);
    assert_eq!(updated.deliver_to, "Rick Sanchez (C-132)");
    assert_eq!(updated.mobile_number, "(202) 456-1111");
    assert_eq!(updated.dishes.len(), 2);
    assert_eq!(updated.known_status(), Some(OrderStatus::Pending));

    let stored = client.find_order(order.id).await.unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_with_matching_or_missing_body_id() {
    let client = spawn_orders();
    let order = create(&client, None).await;

    let mut with_id = update_to("preparing");
    with_id.insert("id".into(), json!(order.id.0));
    assert!(client.update_order(order.id.clone(), with_id).await.is_ok());

    // No id in the body: proceeds without the check
    assert!(client
        .update_order(order.id.clone(), update_to("preparing"))
        .await
        .is_ok());

    let mut other_id = update_to("preparing");
    other_id.insert("id".into(), json!("someone-else"));
    let err = client
        .update_order(order.id.clone(), other_id)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::IdMismatch {
            body: "someone-else".into(),
            route: order.id.0.clone()
        }
    );
}

#[tokio::test]
async fn test_delivered_order_cannot_be_changed() {
    let client = spawn_orders();
    let order = create(&client, Some("delivered")).await;

    for status in ["pending", "preparing", "delivered", "not-a-status"] {
        let err = client
            .update_order(order.id.clone(), update_to(status))
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::DeliveredImmutable, "target {status}");
    }

    let stored = client.find_order(order.id).await.unwrap();
    assert_eq!(stored.deliver_to, order.deliver_to);
}

#[tokio::test]
async fn test_update_rejects_unknown_status() {
    let client = spawn_orders();
    let order = create(&client, None).await;

    let err = client
        .update_order(order.id.clone(), update_to("cancelled"))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::InvalidStatus);

    let stored = client.find_order(order.id.clone()).await.unwrap();
    assert_eq!(stored, order);
}

#[tokio::test]
async fn test_delete_requires_pending() {
    let client = spawn_orders();
    let preparing = create(&client, Some("preparing")).await;
    let pending = create(&client, Some("pending")).await;
    let unset = create(&client, None).await;

    let err = client.delete_order(preparing.id.clone()).await.unwrap_err();
    assert_eq!(err, OrderError::DeleteNotPending);
    assert!(client.find_order(preparing.id.clone()).await.is_ok());

    client.delete_order(pending.id.clone()).await.unwrap();
    assert_eq!(
        client.find_order(pending.id.clone()).await.unwrap_err(),
        OrderError::NotFound(pending.id.0.clone())
    );

    // No status counts as pending
    client.delete_order(unset.id.clone()).await.unwrap();

    let remaining = client.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, preparing.id);
}

#[tokio::test]
async fn test_missing_order_is_not_found() {
    let client = spawn_orders();
    let id = OrderId::from("does-not-exist");

    assert_eq!(
        client.find_order(id.clone()).await.unwrap_err(),
        OrderError::NotFound("does-not-exist".into())
    );
    assert_eq!(
        client
            .update_order(id.clone(), update_to("pending"))
            .await
            .unwrap_err(),
        OrderError::NotFound("does-not-exist".into())
    );
    assert_eq!(
        client.delete_order(id).await.unwrap_err(),
        OrderError::NotFound("does-not-exist".into())
    );
}

#[tokio::test]
async fn test_concurrent_updates_are_serialized() {
    let client = spawn_orders();
    let order = create(&client, None).await;

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let id = order.id.clone();
        tasks.push(tokio::spawn(async move {
            let mut payload = update_to("preparing");
            payload.insert("deliverTo".into(), json!(format!("Table {i}")));
            client.update_order(id, payload).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    // Whichever update landed last, the record holds one complete request's fields
    let stored = client.find_order(order.id).await.unwrap();
    assert!(stored.deliver_to.starts_with("Table "));
    assert_eq!(stored.mobile_number, "(202) 456-1111");
    assert_eq!(stored.dishes.len(), 2);
}
