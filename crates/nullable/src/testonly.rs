//! Test-only functionality shared among multiple test modules.

use serde::{Deserialize, Serialize, Serializer, ser::Error as _};

use crate::types::{NullString, NullU8};
#[cfg(feature = "json")]
use crate::Json;
use crate::Nullable;
#[cfg(feature = "yaml")]
use crate::Yaml;

pub(crate) const PERSON_NAME: &str = "John Doe";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Person {
    pub name: NullString,
    pub age: NullU8,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Card {
    pub id: String,
    pub person: Nullable<Person>,
}

#[cfg(feature = "json")]
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct JsonPerson {
    pub name: Json<String>,
    pub age: Json<u8>,
}

#[cfg(feature = "json")]
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct JsonCard {
    pub id: String,
    pub person: Json<JsonPerson>,
}

#[cfg(feature = "yaml")]
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct YamlPerson {
    #[serde(skip_serializing_if = "Yaml::is_null")]
    pub name: Yaml<String>,
    #[serde(skip_serializing_if = "Yaml::is_null")]
    pub age: Yaml<u8>,
}

#[cfg(feature = "yaml")]
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct YamlCard {
    pub id: String,
    #[serde(skip_serializing_if = "Yaml::is_null")]
    pub person: Yaml<YamlPerson>,
}

/// Value that no format can encode.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Unrepresentable;

impl Serialize for Unrepresentable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("value cannot be represented"))
    }
}
