//! JSON adapter and document helpers.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned};

use crate::error::{Error, HostError};

nullable_adapter! {
    /// [`Nullable`](crate::Nullable) with JSON encoding and decoding.
    ///
    /// An absent value is encoded as `null`; a present value is encoded using its own `Serialize` implementation.
    /// When decoding, `null` (or a missing struct field) produces an absent value.
    ///
    /// # Examples
    ///
    /// ```
    /// use nullable::Json;
    /// use serde::{Deserialize, Serialize};
    ///
    /// #[derive(Debug, Serialize, Deserialize)]
    /// struct Person {
    ///     name: Json<String>,
    ///     age: Json<u8>,
    /// }
    ///
    /// let raw = r#"{"name":"John Doe","age":null}"#;
    /// let person: Person = nullable::json::from_str(raw)?;
    /// assert_eq!(person.name.value(), "John Doe");
    /// assert!(person.age.is_null());
    /// assert_eq!(nullable::json::to_string(&person)?, raw);
    /// # anyhow::Ok(())
    /// ```
    ///
    /// Encoding fails if the held value cannot be represented in JSON:
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use nullable::{ErrorKind, Json};
    ///
    /// let absent = Json::<HashMap<(u8, u8), u8>>::null();
    /// assert_eq!(nullable::json::to_string(&absent)?, "null");
    /// let present = Json::of(HashMap::from([((1_u8, 2_u8), 3_u8)]));
    /// let err = nullable::json::to_string(&present).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Encoding);
    /// # anyhow::Ok(())
    /// ```
    Json
}

impl<T: Serialize> Serialize for Json<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.get() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Json<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

fn encoding_error(err: serde_json::Error) -> Error {
    tracing::debug!(%err, "failed encoding JSON");
    Error::encoding(HostError::Json(err))
}

fn decoding_error(err: serde_json::Error) -> Error {
    tracing::debug!(%err, line = err.line(), column = err.column(), "failed decoding JSON");
    Error::decoding(HostError::Json(err))
}

/// Encodes `value` as a compact JSON string.
///
/// # Errors
///
/// Returns an [encoding](crate::ErrorKind::Encoding) error if `value` cannot be represented in JSON,
/// e.g. if it contains a map with non-string keys.
#[tracing::instrument(level = "trace", skip_all)]
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(encoding_error)
}

/// Encodes `value` as a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an [encoding](crate::ErrorKind::Encoding) error if `value` cannot be represented in JSON.
#[tracing::instrument(level = "trace", skip_all)]
pub fn to_string_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    serde_json::to_string_pretty(value).map_err(encoding_error)
}

/// Encodes `value` as compact JSON bytes.
///
/// # Errors
///
/// Returns an [encoding](crate::ErrorKind::Encoding) error if `value` cannot be represented in JSON.
#[tracing::instrument(level = "trace", skip_all)]
pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(value).map_err(encoding_error)
}

/// Decodes a value from a JSON string.
///
/// # Errors
///
/// Returns a [decoding](crate::ErrorKind::Decoding) error if `raw` is not valid JSON
/// or doesn't match the shape of `T`.
#[tracing::instrument(level = "trace", skip_all, fields(raw.len = raw.len()))]
pub fn from_str<T: DeserializeOwned>(raw: &str) -> Result<T, Error> {
    serde_json::from_str(raw).map_err(decoding_error)
}

/// Decodes a value from JSON bytes.
///
/// # Errors
///
/// Returns a [decoding](crate::ErrorKind::Decoding) error if `raw` is not valid JSON
/// or doesn't match the shape of `T`.
#[tracing::instrument(level = "trace", skip_all, fields(raw.len = raw.len()))]
pub fn from_slice<T: DeserializeOwned>(raw: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(raw).map_err(decoding_error)
}
