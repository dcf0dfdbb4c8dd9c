//! Lenient deserialization helpers.
//!
//! PokeAPI sends `null` for many fields that are normally populated
//! (sprites, cries, base experience). These helpers coerce `null` into the
//! field's default instead of failing the whole record.

use serde::{Deserialize, Deserializer};

/// Deserialize a value, mapping JSON `null` to `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
