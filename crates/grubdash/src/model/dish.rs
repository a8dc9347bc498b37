/// Represents a dish on the menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Dish`](#impl-ActorEntity-for-Dish) for details on:
/// - Creation parameters ([`DishCreate`])
/// - Update parameters ([`DishUpdate`])
use crate::pipeline::Payload;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Dishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub String);

impl DishId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}

impl From<String> for DishId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DishId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub description: String,
    /// Kept as the number that was sent, so `8` stays `8`.
    pub price: Number,
    pub image_url: String,
}

/// Payload for adding a dish to the menu.
#[derive(Debug, Clone, Default)]
pub struct DishCreate {
    pub data: Payload,
}

/// Payload for replacing a dish's details.
#[derive(Debug, Clone, Default)]
pub struct DishUpdate {
    pub data: Payload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_url_keeps_its_snake_case_wire_name() {
        let dish = Dish {
            id: DishId::from("d1"),
            name: "Falafel".into(),
            description: "Crispy".into(),
            price: Number::from_f64(8.5).unwrap(),
            image_url: "https://example.com/falafel.jpg".into(),
        };
        assert_eq!(
            serde_json::to_value(&dish).unwrap(),
            json!({
                "id": "d1",
                "name": "Falafel",
                "description": "Crispy",
                "price": 8.5,
                "image_url": "https://example.com/falafel.jpg"
            })
        );
    }
}
