/// Represents a customer order for one or more dishes.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Update parameters ([`OrderUpdate`])
use crate::pipeline::Payload;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    /// A fresh identifier: 32 lowercase hex characters.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an order is in its lifecycle.
///
/// `Pending → Preparing → OutForDelivery → Delivered`. `Delivered` is terminal: a delivered
/// order can no longer be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// No transition leaves a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the four order statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// One line of an order: which dish, how many.
///
/// Members other than `dishId` and `quantity` that the caller sent for the line are kept
/// as they were and echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDish {
    #[serde(rename = "dishId", default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    pub quantity: u32,
    #[serde(flatten)]
    pub details: Payload,
}

impl OrderDish {
    pub fn new(dish_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            dish_id: Some(dish_id.into()),
            quantity,
            details: Payload::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub deliver_to: String,
    pub mobile_number: String,
    /// Whatever the caller supplied on create, kept as it was sent. Absent when nothing was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    pub dishes: Vec<OrderDish>,
}

impl Order {
    /// The stored status, if it is one of the four known ones.
    pub fn known_status(&self) -> Option<OrderStatus> {
        self.status.as_ref()?.as_str()?.parse().ok()
    }

    /// An order created without a status counts as pending. One created with an unknown
    /// status does not.
    pub fn is_pending(&self) -> bool {
        self.status.is_none() || self.known_status() == Some(OrderStatus::Pending)
    }

    pub fn is_delivered(&self) -> bool {
        self.known_status().is_some_and(|status| status.is_terminal())
    }
}

/// Payload for creating a new order: the raw `data` member of the request body.
#[derive(Debug, Clone, Default)]
pub struct OrderCreate {
    pub data: Payload,
}

/// Payload for replacing an order's delivery details and dishes.
#[derive(Debug, Clone, Default)]
pub struct OrderUpdate {
    pub data: Payload,
}
