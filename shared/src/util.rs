//! Lenient serde helpers for backend payloads

use serde::{Deserialize, Deserializer};

/// Accept a JSON string or number and keep it as text.
///
/// Prices travel as decimal text; some endpoints send them as bare numbers.
/// `null` becomes an empty string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
        Raw::Null => String::new(),
    })
}

/// Treat `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Boolean that may arrive as `true`/`false`, `0`/`1` or `null`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Bool(b) => Some(b),
        Raw::Int(n) => Some(n != 0),
        Raw::Null => None,
    })
}
