//! Closed "one of N shapes" roles.
//!
//! Every role is a Rust enum with one variant per shape. Roles with a discriminator key
//! use serde's internally tagged representation; roles told apart by field presence
//! deserialize through [`object`] and pick a shape by key.

use serde::{
    de::{self, DeserializeOwned, Unexpected},
    Deserialize, Deserializer, Serialize,
};
use serde_json::{Map, Value};

/// Introspection shared by every variant role.
pub trait Variant: Serialize + DeserializeOwned {
    /// Role name, e.g. `ChatMember`.
    const ROLE: &'static str;
    /// JSON key holding the shape literal. `None` when shapes are told apart by fields.
    const DISCRIMINATOR: Option<&'static str>;
    /// Every shape of the closed set, in declaration order.
    const SHAPES: &'static [&'static str];

    /// Name of the active shape. Always one of [`Variant::SHAPES`].
    fn shape(&self) -> &'static str;
}

/// Implements [`Variant`] for an enum: `Variant => "shape"` per member.
macro_rules! variant_role {
    ($role:ident, discriminator = $disc:expr; $($member:ident => $shape:literal),+ $(,)?) => {
        impl $crate::variant::Variant for $role {
            const ROLE: &'static str = stringify!($role);
            const DISCRIMINATOR: Option<&'static str> = $disc;
            const SHAPES: &'static [&'static str] = &[$($shape),+];

            fn shape(&self) -> &'static str {
                match self {
                    $(Self::$member { .. } => $shape,)+
                }
            }
        }
    };
}

/// `From<Shape> for Role` for every payload-carrying member.
macro_rules! from_shapes {
    ($role:ident { $($member:ident($payload:ty)),+ $(,)? }) => {
        $(
            impl From<$payload> for $role {
                fn from(shape: $payload) -> Self {
                    Self::$member(shape)
                }
            }
        )+
    };
}

pub(crate) use from_shapes;
pub(crate) use variant_role;

/// Buffer the next value as a JSON object.
pub(crate) fn object<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Map<String, Value>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        other => Err(de::Error::invalid_type(unexpected(&other), &"a JSON object")),
    }
}

/// Finish decoding a shape picked from a buffered object.
pub(crate) fn shape_from<T: DeserializeOwned, E: de::Error>(map: Map<String, Value>) -> Result<T, E> {
    serde_json::from_value(Value::Object(map)).map_err(E::custom)
}

/// Error for an object matching no shape of a field-presence role.
pub(crate) fn no_shape<E: de::Error>(role: &str, shapes: &'static [&'static str]) -> E {
    E::unknown_variant(&format!("<{role} without a known field set>"), shapes)
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(tag = "kind", rename_all = "snake_case")]
    enum Shape {
        Circle(Circle),
        Empty,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Circle {
        radius: i32,
    }

    variant_role!(Shape, discriminator = Some("kind"); Circle => "circle", Empty => "empty");
    from_shapes!(Shape { Circle(Circle) });

    #[test]
    fn shape_names_follow_members() {
        assert_eq!(Shape::ROLE, "Shape");
        assert_eq!(Shape::SHAPES, &["circle", "empty"]);
        assert_eq!(Shape::from(Circle { radius: 2 }).shape(), "circle");
        assert_eq!(Shape::Empty.shape(), "empty");
    }

    #[test]
    fn object_rejects_non_objects() {
        let err = object(&mut serde_json::Deserializer::from_str("[1,2]")).unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn no_shape_reads_as_unknown_variant() {
        let err: serde_json::Error = no_shape("Thing", &["a", "b"]);
        let err = crate::Error::from_decode(err);
        assert!(err.is_forward_compat());
    }
}
