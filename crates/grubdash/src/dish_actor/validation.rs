//! Dish validation stages and pipelines.

use super::DishError;
use crate::model::Dish;
use crate::pipeline::stages::{match_route_id, require_field};
use crate::pipeline::{Payload, Pipeline, RequestContext};
use serde_json::{Number, Value};

/// The price, if it is a JSON number above zero. Numeric strings are refused.
pub fn price(data: &Payload) -> Result<Number, DishError> {
    match data.get("price") {
        Some(Value::Number(price)) if price.as_f64().is_some_and(|p| p > 0.0) => Ok(price.clone()),
        _ => Err(DishError::InvalidPrice),
    }
}

pub fn validate_price(ctx: &RequestContext<'_, Dish>) -> Result<(), DishError> {
    price(ctx.data).map(|_| ())
}

pub fn create_pipeline() -> Pipeline<Dish, DishError> {
    Pipeline::new("dish.create")
        .stage("name", require_field("name"))
        .stage("description", require_field("description"))
        .stage("image_url", require_field("image_url"))
        .stage("price", validate_price)
}

pub fn update_pipeline() -> Pipeline<Dish, DishError> {
    Pipeline::new("dish.update")
        .stage("route id", match_route_id())
        .stage("name", require_field("name"))
        .stage("description", require_field("description"))
        .stage("price", validate_price)
        .stage("image_url", require_field("image_url"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DishId;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn price_must_be_a_positive_number() {
        assert_eq!(price(&payload(json!({"price": 12}))), Ok(Number::from(12)));
        assert_eq!(
            price(&payload(json!({"price": 0.5}))).map(|p| p.as_f64()),
            Ok(Some(0.5))
        );
        // The integer form survives, it is not turned into 12.0
        assert_eq!(price(&payload(json!({"price": 12}))).unwrap().to_string(), "12");
        for bad in [json!({}), json!({"price": 0}), json!({"price": -3}), json!({"price": "12"})] {
            assert_eq!(price(&payload(bad)), Err(DishError::InvalidPrice));
        }
    }

    #[test]
    fn create_checks_image_url_before_price() {
        let data = payload(json!({"name": "Soup", "description": "Hot", "price": "free"}));
        assert_eq!(
            create_pipeline().run(&RequestContext::new(&data)),
            Err(DishError::MissingField("image_url"))
        );
    }

    #[test]
    fn update_checks_price_before_image_url() {
        let current = Dish {
            id: DishId::from("d1"),
            name: "Soup".into(),
            description: "Hot".into(),
            price: Number::from(4),
            image_url: "soup.png".into(),
        };
        let data = payload(json!({"id": "d1", "name": "Soup", "description": "Cold"}));
        assert_eq!(
            update_pipeline().run(&RequestContext::resolved(&data, &current)),
            Err(DishError::InvalidPrice)
        );
    }
}
