//! Plain-value serde: `Present(v)` encodes as `v`, `Empty` as null.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::optional::{option_of, Optional};

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Optional::Present(value) => serializer.serialize_some(value),
            Optional::Empty => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(option_of)
    }
}
