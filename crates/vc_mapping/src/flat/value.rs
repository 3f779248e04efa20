use core::fmt;

use serde_json::value::RawValue;

use super::FlatMap;

// -----------------------------------------------------------------------------
// Flat

/// A flattened value.
///
/// Records flatten to [`Flat::Map`], sequences to [`Flat::Seq`] and everything
/// else to one of the scalar variants. Entries produced by the engine inside
/// maps and sequences are [`Flat::Raw`]: fragments that were already encoded
/// and are written to the output verbatim.
///
/// Decoding never produces `Raw`; a decoded object is a `Map` of decoded
/// values, a decoded array is a `Seq`.
///
/// # Examples
///
/// ```
/// use vc_mapping::{Flat, FlatMap};
///
/// let mut map = FlatMap::new();
/// map.insert("x", Flat::from(1_i32));
/// map.insert("name", Flat::from("point"));
///
/// let bytes = vc_mapping::codec::encode_to_vec(&Flat::Map(map)).unwrap();
/// assert_eq!(bytes, br#"{"x":1,"name":"point"}"#);
/// ```
#[derive(Clone, Default)]
pub enum Flat {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    /// A pre-encoded fragment.
    Raw(Box<RawValue>),
    Seq(Vec<Flat>),
    Map(FlatMap),
}

impl Flat {
    /// Returns a short name of the variant, used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Flat::Null => "null",
            Flat::Bool(_) => "bool",
            Flat::Int(_) | Flat::Uint(_) => "integer",
            Flat::Float(_) => "float",
            Flat::Str(_) => "string",
            Flat::Raw(_) => "raw",
            Flat::Seq(_) => "sequence",
            Flat::Map(_) => "map",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Flat::Null)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Flat::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as `i64` if it is a number that fits without loss.
    ///
    /// Floats with no fractional part are accepted.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Flat::Int(i) => Some(i),
            Flat::Uint(u) => i64::try_from(u).ok(),
            Flat::Float(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                Some(f as i64)
            }
            _ => None,
        }
    }

    /// Returns the value as `u64` if it is a number that fits without loss.
    ///
    /// Floats with no fractional part are accepted.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Flat::Int(i) => u64::try_from(i).ok(),
            Flat::Uint(u) => Some(u),
            Flat::Float(f) if f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64 => {
                Some(f as u64)
            }
            _ => None,
        }
    }

    /// Returns any numeric variant as `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Flat::Int(i) => Some(i as f64),
            Flat::Uint(u) => Some(u as f64),
            Flat::Float(f) => Some(f),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Flat::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_seq(&self) -> Option<&[Flat]> {
        match self {
            Flat::Seq(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&FlatMap> {
        match self {
            Flat::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the encoded text of a [`Flat::Raw`] fragment.
    #[inline]
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Flat::Raw(raw) => Some(raw.get()),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Traits

impl PartialEq for Flat {
    /// Numbers compare by value across `Int` and `Uint`,
    /// raw fragments compare by their encoded text.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Flat::Null, Flat::Null) => true,
            (Flat::Bool(a), Flat::Bool(b)) => a == b,
            (Flat::Int(_) | Flat::Uint(_), Flat::Int(_) | Flat::Uint(_)) => {
                match (self.as_i64(), other.as_i64()) {
                    (Some(a), Some(b)) => a == b,
                    (None, None) => self.as_u64() == other.as_u64(),
                    _ => false,
                }
            }
            (Flat::Float(a), Flat::Float(b)) => a == b,
            (Flat::Str(a), Flat::Str(b)) => a == b,
            (Flat::Raw(a), Flat::Raw(b)) => a.get() == b.get(),
            (Flat::Seq(a), Flat::Seq(b)) => a == b,
            (Flat::Map(a), Flat::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Flat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flat::Null => f.write_str("Null"),
            Flat::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Flat::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Flat::Uint(u) => f.debug_tuple("Uint").field(u).finish(),
            Flat::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Flat::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Flat::Raw(raw) => f.debug_tuple("Raw").field(&raw.get()).finish(),
            Flat::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Flat::Map(map) => f.debug_tuple("Map").field(map).finish(),
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Flat {
            #[inline]
            fn from(value: $ty) -> Self {
                Flat::Int(value as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Flat {
            #[inline]
            fn from(value: $ty) -> Self {
                Flat::Uint(value as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Flat {
    #[inline]
    fn from(value: bool) -> Self {
        Flat::Bool(value)
    }
}

impl From<f32> for Flat {
    #[inline]
    fn from(value: f32) -> Self {
        Flat::Float(value as f64)
    }
}

impl From<f64> for Flat {
    #[inline]
    fn from(value: f64) -> Self {
        Flat::Float(value)
    }
}

impl From<char> for Flat {
    #[inline]
    fn from(value: char) -> Self {
        Flat::Str(value.to_string())
    }
}

impl From<String> for Flat {
    #[inline]
    fn from(value: String) -> Self {
        Flat::Str(value)
    }
}

impl From<&str> for Flat {
    #[inline]
    fn from(value: &str) -> Self {
        Flat::Str(value.to_owned())
    }
}

impl From<Vec<Flat>> for Flat {
    #[inline]
    fn from(value: Vec<Flat>) -> Self {
        Flat::Seq(value)
    }
}

impl From<FlatMap> for Flat {
    #[inline]
    fn from(value: FlatMap) -> Self {
        Flat::Map(value)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Flat;

    #[test]
    fn numeric_views() {
        assert_eq!(Flat::Uint(7).as_i64(), Some(7));
        assert_eq!(Flat::Int(-1).as_u64(), None);
        assert_eq!(Flat::Float(3.0).as_i64(), Some(3));
        assert_eq!(Flat::Float(3.5).as_i64(), None);
        assert_eq!(Flat::Uint(u64::MAX).as_i64(), None);
        assert_eq!(Flat::Int(2).as_f64(), Some(2.0));
        assert_eq!(Flat::Str("1".into()).as_i64(), None);
    }

    #[test]
    fn integer_equality_ignores_sign_variant() {
        assert_eq!(Flat::Int(5), Flat::Uint(5));
        assert_ne!(Flat::Int(-5), Flat::Uint(5));
        assert_eq!(Flat::Uint(u64::MAX), Flat::Uint(u64::MAX));
        assert_ne!(Flat::Int(1), Flat::Float(1.0));
    }
}
