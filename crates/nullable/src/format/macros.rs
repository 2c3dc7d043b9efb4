/// Defines a format adapter: a transparent wrapper around [`Nullable`](crate::Nullable)
/// dereferencing to it. (De)serialization hooks are implemented separately for each format.
macro_rules! nullable_adapter {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name<T>($crate::Nullable<T>);

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::null()
            }
        }

        impl<T> $name<T> {
            /// Creates an absent value.
            pub const fn null() -> Self {
                Self($crate::Nullable::null())
            }

            /// Creates a present value, even if it is the zero value of `T`.
            pub const fn of(value: T) -> Self {
                Self($crate::Nullable::of(value))
            }

            /// Checks whether this value is absent.
            pub const fn is_null(&self) -> bool {
                self.0.is_null()
            }

            /// Unwraps the underlying container.
            pub fn into_inner(self) -> $crate::Nullable<T> {
                self.0
            }
        }

        impl<T> ::std::ops::Deref for $name<T> {
            type Target = $crate::Nullable<T>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<T> AsRef<$crate::Nullable<T>> for $name<T> {
            fn as_ref(&self) -> &$crate::Nullable<T> {
                &self.0
            }
        }

        impl<T> From<$crate::Nullable<T>> for $name<T> {
            fn from(value: $crate::Nullable<T>) -> Self {
                Self(value)
            }
        }

        impl<T> From<$name<T>> for $crate::Nullable<T> {
            fn from(value: $name<T>) -> Self {
                value.0
            }
        }

        impl<T> From<Option<T>> for $name<T> {
            fn from(value: Option<T>) -> Self {
                Self(value.into())
            }
        }

        impl<T: ::std::fmt::Display> ::std::fmt::Display for $name<T> {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, formatter)
            }
        }

        impl<T: ::std::fmt::Debug> ::std::fmt::Debug for $name<T> {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.0, formatter)
            }
        }
    };
}
