//! YAML adapter and document helpers.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned};

use crate::error::{Error, HostError};

nullable_adapter! {
    /// [`Nullable`](crate::Nullable) with YAML encoding and decoding.
    ///
    /// An absent value is encoded as `null`; a present value is encoded using its own `Serialize` implementation.
    /// When decoding, any YAML null (`null`, `~` or an empty value) as well as a missing struct field
    /// produces an absent value.
    ///
    /// Absent fields are usually omitted from YAML documents. Use [`Self::is_null()`] with `skip_serializing_if`
    /// to get the same on encoding:
    ///
    /// ```
    /// use nullable::Yaml;
    /// use serde::{Deserialize, Serialize};
    ///
    /// #[derive(Debug, Serialize, Deserialize)]
    /// struct Person {
    ///     #[serde(skip_serializing_if = "Yaml::is_null")]
    ///     name: Yaml<String>,
    ///     #[serde(skip_serializing_if = "Yaml::is_null")]
    ///     age: Yaml<u8>,
    /// }
    ///
    /// let raw = "name: John Doe\n";
    /// let person: Person = nullable::yaml::from_str(raw)?;
    /// assert_eq!(person.name.value(), "John Doe");
    /// assert!(person.age.is_null());
    /// assert_eq!(nullable::yaml::to_string(&person)?, raw);
    /// # anyhow::Ok(())
    /// ```
    Yaml
}

impl<T: Serialize> Serialize for Yaml<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.get() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Yaml<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// Encodes `value` as a YAML document.
///
/// # Errors
///
/// Returns an [encoding](crate::ErrorKind::Encoding) error if `value` cannot be represented in YAML.
#[tracing::instrument(level = "trace", skip_all)]
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    serde_yaml::to_string(value).map_err(|err| {
        tracing::debug!(%err, "failed encoding YAML");
        Error::encoding(HostError::Yaml(err))
    })
}

/// Decodes a value from a YAML document.
///
/// # Errors
///
/// Returns a [decoding](crate::ErrorKind::Decoding) error if `raw` is not valid YAML
/// or doesn't match the shape of `T`.
#[tracing::instrument(level = "trace", skip_all, fields(raw.len = raw.len()))]
pub fn from_str<T: DeserializeOwned>(raw: &str) -> Result<T, Error> {
    serde_yaml::from_str(raw).map_err(|err| {
        let location = err.location();
        tracing::debug!(
            %err,
            line = location.as_ref().map(serde_yaml::Location::line),
            column = location.as_ref().map(serde_yaml::Location::column),
            "failed decoding YAML"
        );
        Error::decoding(HostError::Yaml(err))
    })
}
