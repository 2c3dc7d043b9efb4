//! Aliases for nullable primitive types.

use crate::Nullable;

macro_rules! nullable_aliases {
    ($($name:ident => $ty:ty,)*) => {
        $(
        #[doc = concat!("Nullable [`", stringify!($ty), "`].")]
        pub type $name = Nullable<$ty>;
        )*
    };
}

nullable_aliases!(
    NullBool => bool,
    NullChar => char,
    NullI8 => i8,
    NullI16 => i16,
    NullI32 => i32,
    NullI64 => i64,
    NullIsize => isize,
    NullU8 => u8,
    NullU16 => u16,
    NullU32 => u32,
    NullU64 => u64,
    NullUsize => usize,
    NullF32 => f32,
    NullF64 => f64,
    NullString => String,
);

/// Nullable byte.
pub type NullByte = NullU8;
