//! `nullable` – immutable nullable values with JSON and YAML adapters.
//!
//! # Overview
//!
//! A plain field of type `T` cannot tell "no value" from the zero value of `T`: `0`, `""` and `false`
//! all look like defaults. [`Nullable<T>`] keeps these states apart: it either holds exactly one value of `T`
//! (which may be the zero value), or nothing at all. Containers are immutable; "changing" a container means
//! constructing a new one.
//!
//! Format adapters (the `format` module) bind `Nullable` to structured data formats via `serde`:
//!
//! - `Json<T>` encodes an absent value as JSON `null`. Requires the `json` feature.
//! - `Yaml<T>` encodes an absent value as YAML `null`; it can also be omitted from output
//!   with `#[serde(skip_serializing_if = "Yaml::is_null")]`. Requires the `yaml` feature.
//!
//! When decoding, `null` produces an absent value, and any other value (including a zero value) produces
//! a present one. A missing struct field is decoded as absent, too; callers cannot distinguish an omitted field
//! from an explicit `null`, only "no value was transmitted" from "a value was transmitted".
//!
//! # Crate features
//!
//! ## `json`
//!
//! *(On by default)*
//!
//! Enables the `Json` adapter and JSON document helpers in `format::json` (also re-exported as `nullable::json`).
//!
//! ## `yaml`
//!
//! *(On by default)*
//!
//! Enables the `Yaml` adapter and YAML document helpers in `format::yaml` (also re-exported as `nullable::yaml`).
//!
//! The `format` module, `Error` and related types are only available if at least one
//! of these features is enabled.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use nullable::Nullable;
//!
//! let mut greeting = Nullable::<String>::default();
//! assert!(greeting.is_null());
//! assert_eq!(greeting.value(), "");
//! assert_eq!(greeting.to_string(), "null");
//!
//! greeting = Nullable::of(String::new());
//! assert!(!greeting.is_null());
//! assert_eq!(greeting.to_string(), "");
//!
//! greeting = Nullable::of("Hello, world!".into());
//! assert_eq!(greeting.value(), "Hello, world!");
//! ```
//!
//! ## JSON round trip
//!
//! *(Requires the `json` feature)*
//!
//! ```
//! # #[cfg(not(feature = "json"))]
//! # fn main() {}
//! # #[cfg(feature = "json")]
//! # fn main() -> anyhow::Result<()> {
//! use nullable::Json;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Person {
//!     name: Json<String>,
//!     age: Json<u8>,
//! }
//!
//! let raw = r#"{"name":"John Doe","age":18}"#;
//! let person: Person = nullable::json::from_str(raw)?;
//! assert_eq!(person.name.value(), "John Doe");
//! assert_eq!(person.age.value(), 18);
//! assert_eq!(nullable::json::to_string(&person)?, raw);
//!
//! let person: Person = nullable::json::from_str(r#"{"name":"John Doe"}"#)?;
//! assert!(person.age.is_null());
//! assert_eq!(
//!     nullable::json::to_string(&person)?,
//!     r#"{"name":"John Doe","age":null}"#
//! );
//! # Ok(())
//! # }
//! ```

// Documentation settings
#![doc(html_root_url = "https://docs.rs/nullable/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
// Linter settings
#![warn(missing_docs)]

#[cfg(any(feature = "json", feature = "yaml"))]
pub use self::error::{Error, ErrorKind, Format, HostError};
#[cfg(feature = "json")]
pub use self::format::Json;
#[cfg(feature = "yaml")]
pub use self::format::Yaml;
pub use self::nullable::{NULL, Nullable};

#[cfg(any(feature = "json", feature = "yaml"))]
mod error;
#[cfg(any(feature = "json", feature = "yaml"))]
pub mod format;
mod nullable;
#[cfg(test)]
mod testonly;
pub mod types;

#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
pub use self::format::json;
#[cfg(feature = "yaml")]
#[cfg_attr(docsrs, doc(cfg(feature = "yaml")))]
pub use self::format::yaml;

#[cfg(all(doctest, feature = "json", feature = "yaml"))]
doc_comment::doctest!("../README.md");
