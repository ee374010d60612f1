//! Deserialization helpers for optional JS fields.
//!
//! `serde-wasm-bindgen` hands a key that is present but set to `undefined` or
//! `null` to the field's deserializer, so `#[serde(default)]` alone does not
//! cover it.

use serde::{Deserialize, Deserializer};

/// Read a field, mapping `undefined` and `null` to `T::default()`.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
