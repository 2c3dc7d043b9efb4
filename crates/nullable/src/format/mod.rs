//! Format adapters binding [`Nullable`](crate::Nullable) to structured data formats.
//!
//! # How it works
//!
//! Each adapter is a thin wrapper around `Nullable<T>` implementing [`serde::Serialize`] and [`serde::Deserialize`]:
//!
//! - An absent value is encoded as the format-native `null`. A present value is delegated to the host serializer
//!   as is, so nested structures (including nested adapters) are handled by the usual `serde` rules.
//! - When decoding, the value is first read into an `Option<T>`. `null` produces an absent adapter; any other value,
//!   including the zero value of `T`, produces a present one.
//!
//! Adapters require `T: Serialize` for encoding and `T: Deserialize<'de>` for decoding; errors of the host serializer
//! (e.g., for a type the format cannot represent) are returned unchanged.
//!
//! # Absent fields
//!
//! When a struct field of an adapter type is missing from the input, `serde` routes the missing field through
//! the same `Option` decoding path, so the field becomes absent; `#[serde(default)]` is not required.
//! As a consequence, decoded values **cannot** distinguish an omitted field from a field explicitly set to `null`;
//! both are observed as [`is_null()`](crate::Nullable::is_null).
//!
//! # Document helpers
//!
//! The `json` and `yaml` modules (behind the corresponding features) provide helpers (de)serializing whole documents.
//! These forward to `serde_json` and `serde_yaml` respectively, classifying errors into encoding and decoding ones
//! (see [`Error`](crate::Error)).

#[cfg(feature = "json")]
pub use self::json::Json;
#[cfg(feature = "yaml")]
pub use self::yaml::Yaml;

#[macro_use]
mod macros;
#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
pub mod json;
#[cfg(feature = "yaml")]
#[cfg_attr(docsrs, doc(cfg(feature = "yaml")))]
pub mod yaml;
