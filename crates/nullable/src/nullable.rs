//! Immutable nullable container.

use std::fmt;

/// Token used to render an absent value.
pub const NULL: &str = "null";

/// Container holding either nothing or exactly one value of type `T`.
///
/// Unlike a plain field of type `T`, a `Nullable<T>` distinguishes an absent value from a zero value:
/// [`Nullable::of`]`(0)` is present, while [`Nullable::default()`] is not. Containers are immutable;
/// there are no methods changing the presence or the held value after construction.
///
/// # Rendering
///
/// All formatting traits ([`Display`](fmt::Display), [`Debug`], [`LowerHex`](fmt::LowerHex), [`LowerExp`](fmt::LowerExp)
/// etc.) render the absent state as [`NULL`] and forward to the held value otherwise, keeping all formatter options
/// (width, precision, flags).
///
/// ```
/// use nullable::Nullable;
///
/// #[derive(Debug)]
/// struct Card {
///     id: &'static str,
///     holder: Nullable<&'static str>,
/// }
///
/// let card = Nullable::of(Card { id: "card-id", holder: Nullable::null() });
/// assert_eq!(format!("{card:?}"), r#"Card { id: "card-id", holder: null }"#);
/// assert_eq!(format!("{:>6.2}", Nullable::of(1.0_f64)), "  1.00");
/// assert_eq!(format!("{:>6}", Nullable::<f64>::null()), "  null");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nullable<T>(Option<T>);

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> Nullable<T> {
    /// Creates an absent container.
    pub const fn null() -> Self {
        Self(None)
    }

    /// Creates a present container holding `value`, even if it is the zero value of `T`.
    pub const fn of(value: T) -> Self {
        Self(Some(value))
    }

    /// Checks whether this container holds no value.
    pub const fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// Returns a reference to the held value, if any.
    pub const fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Converts this container into an [`Option`].
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Returns the held value, or the zero value of `T` if the container is absent.
    pub fn into_value(self) -> T
    where
        T: Default,
    {
        self.0.unwrap_or_default()
    }

    /// Returns a copy of the held value, or the zero value of `T` if the container is absent.
    pub fn value(&self) -> T
    where
        T: Clone + Default,
    {
        self.0.clone().unwrap_or_default()
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.0
    }
}

macro_rules! impl_fmt_traits {
    ($($trait:ident),*) => {
        $(
        impl<T: fmt::$trait> fmt::$trait for Nullable<T> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                match &self.0 {
                    Some(value) => fmt::$trait::fmt(value, formatter),
                    None => formatter.pad(NULL),
                }
            }
        }
        )*
    };
}

impl_fmt_traits!(Display, Debug, LowerHex, UpperHex, Octal, Binary, LowerExp, UpperExp);

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        testonly::{Card, Person},
        types::{NullString, NullU8},
    };

    #[test]
    fn default_container_is_null() {
        let unit = Nullable::<()>::default();
        assert!(unit.is_null());
        assert!(!Nullable::of(()).is_null());

        let string = NullString::default();
        assert!(string.is_null());
        assert_eq!(string.value(), "");
        assert_eq!(string.get(), None);
        assert_eq!(string, Nullable::null());
    }

    #[test]
    fn zero_value_is_present() {
        let empty = NullString::of(String::new());
        assert!(!empty.is_null());
        assert_eq!(empty.get().map(String::as_str), Some(""));
        assert_ne!(empty, NullString::null());

        let zero = NullU8::of(0);
        assert!(!zero.is_null());
        assert_eq!(zero.into_option(), Some(0));
    }

    #[test]
    fn null_literal_is_a_value() {
        let literal = Nullable::of(NULL);
        assert!(!literal.is_null());
        assert_eq!(literal.value(), "null");
    }

    #[test]
    fn nested_nullables() {
        let outer = Nullable::<Nullable<u8>>::null();
        assert!(outer.is_null());
        assert!(outer.value().is_null());

        let outer = Nullable::of(Nullable::<u8>::null());
        assert!(!outer.is_null());
        assert!(outer.value().is_null());

        let outer = Nullable::of(Nullable::of(5_u8));
        assert_eq!(outer.value().value(), 5);
    }

    #[test]
    fn holding_references() {
        let mut name = String::from("John");
        {
            let nullable = Nullable::of(name.as_str());
            assert_eq!(nullable.value(), "John");
        }
        name.push_str(" Doe");
        let nullable = Nullable::of(&name);
        assert_eq!(nullable.get().copied(), Some(&name));
        assert_eq!(Nullable::<&str>::null().into_value(), "");
    }

    #[test]
    fn option_conversions() {
        let nullable = Nullable::from(Some(3_u32));
        assert_eq!(nullable, Nullable::of(3));
        assert_eq!(Option::<u32>::from(nullable), Some(3));

        let nullable = Nullable::<u32>::from(None);
        assert!(nullable.is_null());
        assert_eq!(Option::<u32>::from(nullable), None);
    }

    #[test]
    fn rendering_null() {
        assert_eq!(NullString::null().to_string(), NULL);
        assert_eq!(NullU8::null().to_string(), NULL);
        assert_eq!(format!("{:?}", Nullable::<Person>::null()), NULL);
        assert_eq!(format!("{:?}", NullString::null()), NULL);
        assert_eq!(format!("[{:<6}]", NullU8::null()), "[null  ]");
    }

    #[test]
    fn rendering_values() {
        assert_eq!(NullString::of(String::new()).to_string(), "");
        assert_eq!(NullString::of("null".into()).to_string(), "null");
        assert_eq!(format!("{:?}", NullString::of("test".into())), r#""test""#);
        assert_eq!(NullU8::of(0).to_string(), "0");
        assert_eq!(format!("{:+05}", Nullable::of(42_i32)), "+0042");
        assert_eq!(format!("{:.1}", Nullable::of(0.75_f32)), "0.8");
    }

    #[test]
    fn rendering_with_numeric_formats() {
        assert_eq!(format!("{:#x}", Nullable::of(255_u32)), "0xff");
        assert_eq!(format!("{:X}", Nullable::of(255_u32)), "FF");
        assert_eq!(format!("{:o}", Nullable::of(8_u8)), "10");
        assert_eq!(format!("{:08b}", Nullable::of(5_u8)), "00000101");
        assert_eq!(format!("{:e}", Nullable::of(1500.0_f64)), "1.5e3");
        assert_eq!(format!("{:E}", Nullable::of(1500.0_f64)), "1.5E3");

        assert_eq!(format!("{:x}", NullU8::null()), NULL);
        assert_eq!(format!("{:>5b}", NullU8::null()), " null");
        assert_eq!(format!("{:e}", Nullable::<f64>::null()), NULL);
    }

    #[test]
    fn rendering_nested_structure() {
        let person = Person {
            name: Nullable::of("John Doe".into()),
            age: Nullable::of(18),
        };
        assert_eq!(
            format!("{:?}", Nullable::of(person.clone())),
            r#"Person { name: "John Doe", age: 18 }"#
        );

        let card = Nullable::of(Card {
            id: "card-id".into(),
            person: Nullable::null(),
        });
        assert!(card.get().unwrap().person.is_null());
        assert_eq!(
            format!("{card:?}"),
            r#"Card { id: "card-id", person: null }"#
        );

        let card = Nullable::of(Card {
            id: "card-id".into(),
            person: Nullable::of(person),
        });
        assert_eq!(
            format!("{card:?}"),
            r#"Card { id: "card-id", person: Person { name: "John Doe", age: 18 } }"#
        );
    }

    proptest! {
        #[test]
        fn constructed_container_holds_value(value: i64) {
            let nullable = Nullable::of(value);
            prop_assert!(!nullable.is_null());
            prop_assert_eq!(nullable.value(), value);
            prop_assert_eq!(nullable.to_string(), value.to_string());
        }

        #[test]
        fn constructed_string_container_holds_value(value in ".*") {
            let nullable = Nullable::of(value.clone());
            prop_assert!(!nullable.is_null());
            prop_assert_eq!(nullable.get(), Some(&value));
            prop_assert_eq!(format!("{nullable:?}"), format!("{value:?}"));
        }
    }
}
