//! Stages shared by every resource: required fields and route/body id matching.

use super::{Payload, RequestContext};
use actor_framework::ActorEntity;
use serde_json::Value;

/// Errors the shared stages know how to build.
pub trait StageError {
    /// `field` is absent, `null` or an empty string.
    fn missing_field(field: &'static str) -> Self;

    /// The body carries an `id` that differs from the one in the route.
    fn id_mismatch(body_id: String, route_id: String) -> Self;
}

/// Returns the value of `field` if it counts as supplied.
///
/// Absent, `null` and `""` all count as not supplied.
pub fn supplied<'a>(data: &'a Payload, field: &str) -> Option<&'a Value> {
    match data.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(value) => Some(value),
    }
}

/// The supplied value of `field` as text. Strings are taken as they are, other JSON values
/// in their compact JSON form, and a field that is not supplied reads as `""`.
pub fn text(data: &Payload, field: &str) -> String {
    match supplied(data, field) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Rejects the request unless `field` is supplied.
pub fn require_field<T, E>(field: &'static str) -> impl Fn(&RequestContext<'_, T>) -> Result<(), E>
where
    E: StageError,
{
    move |ctx| match supplied(ctx.data, field) {
        Some(_) => Ok(()),
        None => Err(E::missing_field(field)),
    }
}

/// Rejects the request when the body names a different record than the route.
///
/// The route id is the id of the record the request was resolved to. A body without an
/// `id` passes.
pub fn match_route_id<T, E>() -> impl Fn(&RequestContext<'_, T>) -> Result<(), E>
where
    T: ActorEntity,
    E: StageError,
{
    |ctx| {
        let (Some(_), Some(current)) = (supplied(ctx.data, "id"), ctx.current) else {
            return Ok(());
        };
        let route_id = current.id().to_string();
        let body_id = text(ctx.data, "id");
        if body_id == route_id {
            Ok(())
        } else {
            Err(E::id_mismatch(body_id, route_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Missing(&'static str),
        Mismatch(String, String),
    }

    impl StageError for TestError {
        fn missing_field(field: &'static str) -> Self {
            TestError::Missing(field)
        }

        fn id_mismatch(body_id: String, route_id: String) -> Self {
            TestError::Mismatch(body_id, route_id)
        }
    }

    #[derive(Clone, Debug)]
    struct Plate {
        id: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("plate error")]
    struct PlateError;

    #[async_trait::async_trait]
    impl ActorEntity for Plate {
        type Id = String;
        type Create = ();
        type Update = ();
        type Context = ();
        type Error = PlateError;

        fn id(&self) -> &String {
            &self.id
        }

        fn from_create_params(id: String, _: ()) -> Result<Self, Self::Error> {
            Ok(Self { id })
        }

        async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn payload(value: serde_json::Value) -> Payload {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn require_field_treats_null_and_empty_as_missing() {
        let stage = require_field::<Plate, TestError>("name");

        for data in [json!({}), json!({"name": null}), json!({"name": ""})] {
            let data = payload(data);
            assert_eq!(stage(&RequestContext::new(&data)), Err(TestError::Missing("name")));
        }

        let data = payload(json!({"name": "Dolcelatte"}));
        assert_eq!(stage(&RequestContext::new(&data)), Ok(()));

        // Present non-string values count as supplied
        let data = payload(json!({"name": []}));
        assert_eq!(stage(&RequestContext::new(&data)), Ok(()));
    }

    #[test]
    fn text_renders_non_strings_as_json() {
        let data = payload(json!({"name": "Soup", "price": 12, "tags": ["hot"], "gone": null}));
        assert_eq!(text(&data, "name"), "Soup");
        assert_eq!(text(&data, "price"), "12");
        assert_eq!(text(&data, "tags"), r#"["hot"]"#);
        assert_eq!(text(&data, "gone"), "");
        assert_eq!(text(&data, "absent"), "");
    }

    #[test]
    fn match_route_id_compares_against_resolved_record() {
        let stage = match_route_id::<Plate, TestError>();
        let plate = Plate { id: "abc".into() };

        let data = payload(json!({"id": "abc"}));
        assert_eq!(stage(&RequestContext::resolved(&data, &plate)), Ok(()));

        let data = payload(json!({"id": "xyz"}));
        assert_eq!(
            stage(&RequestContext::resolved(&data, &plate)),
            Err(TestError::Mismatch("xyz".into(), "abc".into()))
        );

        let data = payload(json!({"id": 42}));
        assert_eq!(
            stage(&RequestContext::resolved(&data, &plate)),
            Err(TestError::Mismatch("42".into(), "abc".into()))
        );
    }

    #[test]
    fn match_route_id_passes_without_body_id() {
        let stage = match_route_id::<Plate, TestError>();
        let plate = Plate { id: "abc".into() };

        for data in [json!({}), json!({"id": ""}), json!({"id": null})] {
            let data = payload(data);
            assert_eq!(stage(&RequestContext::resolved(&data, &plate)), Ok(()));
        }
    }
}
