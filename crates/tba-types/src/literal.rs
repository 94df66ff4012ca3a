//! Zero-sized types for fields the API pins to a single value.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

macro_rules! literal {
    ($(#[$meta:meta])* $name:ident: $ty:ty = $value:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $name {
            pub const VALUE: $ty = $value;
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                Self::VALUE.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let found = <$ty>::deserialize(deserializer)?;
                if found == Self::VALUE {
                    Ok($name)
                } else {
                    Err(de::Error::custom(format_args!(
                        "expected literal {}, found {found}",
                        Self::VALUE
                    )))
                }
            }
        }
    };
}

literal!(
    /// Encodes as `true`; any other value fails to decode.
    True: bool = true
);

literal!(
    /// Encodes as `0`; any other value fails to decode.
    Zero: i64 = 0
);
