//! Encoding and decoding errors.

use std::fmt;

/// Structured data format handled by an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Format {
    /// JSON.
    Json,
    /// YAML.
    Yaml,
}

impl fmt::Display for Format {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        })
    }
}

/// Kind of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Value cannot be represented in the target format.
    Encoding,
    /// Input is not a valid encoding of the target type or of `null`.
    Decoding,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Encoding => "encoding",
            Self::Decoding => "decoding",
        })
    }
}

/// Error reported by the host serializer, kept as is.
#[derive(Debug)]
#[non_exhaustive]
pub enum HostError {
    /// Error produced by `serde_json`.
    #[cfg(feature = "json")]
    #[cfg_attr(docsrs, doc(cfg(feature = "json")))]
    Json(serde_json::Error),
    /// Error produced by `serde_yaml`.
    #[cfg(feature = "yaml")]
    #[cfg_attr(docsrs, doc(cfg(feature = "yaml")))]
    Yaml(serde_yaml::Error),
}

impl HostError {
    /// Returns the format of the serializer that has produced this error.
    pub fn format(&self) -> Format {
        match self {
            #[cfg(feature = "json")]
            Self::Json(_) => Format::Json,
            #[cfg(feature = "yaml")]
            Self::Yaml(_) => Format::Yaml,
        }
    }

    fn as_error(&self) -> &(dyn std::error::Error + 'static) {
        match self {
            #[cfg(feature = "json")]
            Self::Json(err) => err,
            #[cfg(feature = "yaml")]
            Self::Yaml(err) => err,
        }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_error(), formatter)
    }
}

/// Error encoding or decoding a document containing nullable values.
pub struct Error {
    kind: ErrorKind,
    inner: HostError,
}

impl fmt::Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Error")
            .field("kind", &self.kind)
            .field("format", &self.inner.format())
            .field("inner", &self.inner)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "error {kind} {format}: {err}",
            kind = self.kind,
            format = self.inner.format(),
            err = self.inner
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_error())
    }
}

impl Error {
    pub(crate) fn encoding(inner: HostError) -> Self {
        Self {
            kind: ErrorKind::Encoding,
            inner,
        }
    }

    pub(crate) fn decoding(inner: HostError) -> Self {
        Self {
            kind: ErrorKind::Decoding,
            inner,
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the format in which the error has occurred.
    pub fn format(&self) -> Format {
        self.inner.format()
    }

    /// Returns the wrapped host serializer error.
    pub fn inner(&self) -> &HostError {
        &self.inner
    }

    /// Unwraps the host serializer error.
    pub fn into_inner(self) -> HostError {
        self.inner
    }
}
