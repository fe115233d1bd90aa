//! Runtime argument values handed to the formatter.
//!
//! Data-driven tests pass heterogeneous values, so [`Argument`] models them as
//! a closed set of variants. Primitive scalars and primitive arrays carry
//! their [`PrimitiveKind`] so each kind keeps its own rendering rule.

use std::borrow::Cow;
use std::fmt;

/// Declare the supported primitive kinds together with their scalar and
/// array containers and the matching `From` conversions.
macro_rules! primitive_kinds {
    ($($variant:ident($ty:ty) => $name:literal),+ $(,)?) => {
        /// Primitive element kinds with a dedicated rendering rule.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PrimitiveKind {
            $(
                #[doc = concat!("The `", $name, "` kind.")]
                $variant,
            )+
        }

        impl PrimitiveKind {
            /// Return the Rust type name of the kind.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        /// A single primitive value.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum Primitive {
            $(
                #[doc = concat!("A `", $name, "` value.")]
                $variant($ty),
            )+
        }

        impl Primitive {
            /// Return the kind of the stored value.
            #[must_use]
            pub const fn kind(&self) -> PrimitiveKind {
                match self {
                    $(Self::$variant(_) => PrimitiveKind::$variant,)+
                }
            }
        }

        impl fmt::Display for Primitive {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant(value) => value.render(f),)+
                }
            }
        }

        /// A homogeneous array of primitive values.
        #[derive(Debug, Clone, PartialEq)]
        pub enum PrimitiveArray {
            $(
                #[doc = concat!("A `", $name, "` array.")]
                $variant(Vec<$ty>),
            )+
        }

        impl PrimitiveArray {
            /// Return the element kind of the array.
            #[must_use]
            pub const fn kind(&self) -> PrimitiveKind {
                match self {
                    $(Self::$variant(_) => PrimitiveKind::$variant,)+
                }
            }

            /// Return the number of elements.
            #[must_use]
            pub fn len(&self) -> usize {
                match self {
                    $(Self::$variant(values) => values.len(),)+
                }
            }

            /// Return `true` when the array holds no elements.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }

        impl fmt::Display for PrimitiveArray {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant(values) => render_list(values, f),)+
                }
            }
        }

        $(
            impl From<$ty> for Primitive {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Self::Primitive(Primitive::$variant(value))
                }
            }

            impl From<Vec<$ty>> for PrimitiveArray {
                fn from(values: Vec<$ty>) -> Self {
                    Self::$variant(values)
                }
            }

            impl From<Vec<$ty>> for Argument {
                fn from(values: Vec<$ty>) -> Self {
                    Self::PrimitiveArray(PrimitiveArray::$variant(values))
                }
            }

            impl<const N: usize> From<[$ty; N]> for Argument {
                fn from(values: [$ty; N]) -> Self {
                    Self::PrimitiveArray(PrimitiveArray::$variant(values.to_vec()))
                }
            }

            impl From<&[$ty]> for Argument {
                fn from(values: &[$ty]) -> Self {
                    Self::PrimitiveArray(PrimitiveArray::$variant(values.to_vec()))
                }
            }
        )+
    };
}

primitive_kinds! {
    Bool(bool) => "bool",
    Char(char) => "char",
    I8(i8) => "i8",
    I16(i16) => "i16",
    I32(i32) => "i32",
    I64(i64) => "i64",
    I128(i128) => "i128",
    Isize(isize) => "isize",
    U8(u8) => "u8",
    U16(u16) => "u16",
    U32(u32) => "u32",
    U64(u64) => "u64",
    U128(u128) => "u128",
    Usize(usize) => "usize",
    F32(f32) => "f32",
    F64(f64) => "f64",
}

/// Per-kind textual rendering of a primitive.
trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! render_with_display {
    ($($ty:ty),+) => {
        $(
            impl Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

render_with_display!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Floats always show a fractional part (`5.0`, not `5`) so integral floats
// stay distinguishable from integers in a name.
impl Render for f32 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Render for f64 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

fn render_list<T: Render>(values: &[T], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (position, value) in values.iter().enumerate() {
        if position > 0 {
            f.write_str(", ")?;
        }
        value.render(f)?;
    }
    f.write_str("]")
}

/// One argument of a data-driven test case.
///
/// # Examples
/// ```
/// use dataprovider_names::Argument;
/// assert_eq!(Argument::from("x"), Argument::Text("x".into()));
/// assert_eq!(Argument::from(None::<i32>), Argument::Null);
/// assert!(matches!(Argument::from(vec![1_u8, 2]), Argument::PrimitiveArray(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Argument {
    /// An absent value.
    #[default]
    Null,
    /// Text, rendered as-is apart from sanitisation.
    Text(String),
    /// A single primitive value.
    Primitive(Primitive),
    /// An array of primitive values.
    PrimitiveArray(PrimitiveArray),
    /// An array of arbitrary arguments, possibly nested.
    Array(Vec<Argument>),
    /// Any other value, captured by its textual description. `None` stands
    /// for a value whose description is absent.
    Object(Option<String>),
}

/// Dispatch classification of an [`Argument`].
///
/// Computed once per value by [`Argument::shape`] so the formatter handles
/// every case in a single `match`.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<'a> {
    /// No value.
    Null,
    /// Empty text.
    EmptyText,
    /// An array of primitives.
    PrimitiveArray(&'a PrimitiveArray),
    /// An array of arguments.
    ObjectArray(&'a [Argument]),
    /// A leaf value with its natural text, `None` when absent.
    Scalar(Option<Cow<'a, str>>),
}

impl Argument {
    /// Capture an arbitrary value through its [`Display`](fmt::Display)
    /// implementation.
    ///
    /// # Examples
    /// ```
    /// use dataprovider_names::Argument;
    /// let arg = Argument::object(std::net::Ipv4Addr::LOCALHOST);
    /// assert_eq!(arg, Argument::Object(Some("127.0.0.1".into())));
    /// ```
    #[must_use]
    pub fn object(value: impl fmt::Display) -> Self {
        Self::Object(Some(value.to_string()))
    }

    /// Capture a value whose description may be absent.
    #[must_use]
    pub const fn described(description: Option<String>) -> Self {
        Self::Object(description)
    }

    /// Build an argument array from anything convertible into arguments.
    ///
    /// # Examples
    /// ```
    /// use dataprovider_names::Argument;
    /// let nested = Argument::array(["a", "b"]);
    /// assert_eq!(
    ///     nested,
    ///     Argument::Array(vec![Argument::from("a"), Argument::from("b")])
    /// );
    /// ```
    #[must_use]
    pub fn array<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Array(values.into_iter().map(Into::into).collect())
    }

    /// Return `true` for [`Argument::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Classify the argument for formatting.
    ///
    /// Priority follows: null, arrays, empty text, then everything else as a
    /// scalar.
    #[must_use]
    pub fn shape(&self) -> Shape<'_> {
        match self {
            Self::Null => Shape::Null,
            Self::PrimitiveArray(values) => Shape::PrimitiveArray(values),
            Self::Array(values) => Shape::ObjectArray(values),
            Self::Text(text) if text.is_empty() => Shape::EmptyText,
            Self::Text(text) => Shape::Scalar(Some(Cow::Borrowed(text))),
            Self::Primitive(value) => Shape::Scalar(Some(Cow::Owned(value.to_string()))),
            Self::Object(description) => Shape::Scalar(description.as_deref().map(Cow::Borrowed)),
        }
    }
}

impl From<Primitive> for Argument {
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}

impl From<PrimitiveArray> for Argument {
    fn from(values: PrimitiveArray) -> Self {
        Self::PrimitiveArray(values)
    }
}

impl From<Vec<Self>> for Argument {
    fn from(values: Vec<Self>) -> Self {
        Self::Array(values)
    }
}

impl From<&str> for Argument {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Argument {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Argument {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Cow<'_, str>> for Argument {
    fn from(text: Cow<'_, str>) -> Self {
        Self::Text(text.into_owned())
    }
}

impl<T: Into<Self>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Argument {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => flag.into(),
            Value::Number(number) => number
                .as_i64()
                .map(Self::from)
                .or_else(|| number.as_u64().map(Self::from))
                .or_else(|| number.as_f64().map(Self::from))
                .unwrap_or_else(|| Self::object(number)),
            Value::String(text) => Self::Text(text),
            Value::Array(values) => Self::array(values),
            object @ Value::Object(_) => Self::object(object),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Primitive::from(true), "true")]
    #[case(Primitive::from('x'), "x")]
    #[case(Primitive::from(-7_i8), "-7")]
    #[case(Primitive::from(42_u64), "42")]
    #[case(Primitive::from(i128::MIN), "-170141183460469231731687303715884105728")]
    #[case(Primitive::from(5.0_f64), "5.0")]
    #[case(Primitive::from(0.5_f32), "0.5")]
    #[case(Primitive::from(f64::NAN), "NaN")]
    fn renders_primitives(#[case] value: Primitive, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case(PrimitiveArray::from(vec![1_i32, 2, 3]), "[1, 2, 3]")]
    #[case(PrimitiveArray::from(vec![true, false]), "[true, false]")]
    #[case(PrimitiveArray::from(vec!['a', 'b']), "[a, b]")]
    #[case(PrimitiveArray::from(vec![1.5_f64, 2.0]), "[1.5, 2.0]")]
    #[case(PrimitiveArray::from(vec![255_u8]), "[255]")]
    #[case(PrimitiveArray::from(Vec::<i16>::new()), "[]")]
    fn renders_primitive_arrays(#[case] values: PrimitiveArray, #[case] expected: &str) {
        assert_eq!(values.to_string(), expected);
    }

    #[test]
    fn reports_kinds() {
        assert_eq!(Primitive::from(1_u16).kind(), PrimitiveKind::U16);
        assert_eq!(PrimitiveArray::from(vec![1_isize]).kind().as_str(), "isize");
        assert_eq!(PrimitiveArray::from(vec![0.0_f32; 3]).len(), 3);
        assert!(PrimitiveArray::from(Vec::<char>::new()).is_empty());
    }

    #[test]
    fn classifies_in_priority_order() {
        assert_eq!(Argument::Null.shape(), Shape::Null);
        assert_eq!(Argument::from("").shape(), Shape::EmptyText);
        assert_eq!(
            Argument::from("x").shape(),
            Shape::Scalar(Some(Cow::Borrowed("x")))
        );
        assert_eq!(Argument::described(None).shape(), Shape::Scalar(None));
        assert_eq!(
            Argument::from(7_i32).shape(),
            Shape::Scalar(Some(Cow::Owned("7".to_string())))
        );
        let empty = Argument::Array(Vec::new());
        assert_eq!(empty.shape(), Shape::ObjectArray(&[]));
        let bytes = Argument::from([1_u8, 2]);
        assert!(matches!(bytes.shape(), Shape::PrimitiveArray(values) if values.len() == 2));
    }

    #[test]
    fn converts_options_and_collections() {
        assert!(Argument::from(None::<&str>).is_null());
        assert_eq!(Argument::from(Some("x")), Argument::from("x"));
        assert_eq!(
            Argument::from(vec![Argument::Null]),
            Argument::Array(vec![Argument::Null])
        );
        assert_eq!(
            Argument::array([Some(1_i32), None]),
            Argument::Array(vec![Argument::from(1_i32), Argument::Null])
        );
        let slice: &[u32] = &[4, 5];
        assert_eq!(Argument::from(slice), Argument::from(vec![4_u32, 5]));
    }

    #[cfg(feature = "json")]
    #[test]
    fn converts_json_values() {
        let value = serde_json::json!([null, true, -3, u64::MAX, 1.5, "s", {"k": 1}]);
        assert_eq!(
            Argument::from(value),
            Argument::Array(vec![
                Argument::Null,
                Argument::from(true),
                Argument::from(-3_i64),
                Argument::from(u64::MAX),
                Argument::from(1.5_f64),
                Argument::from("s"),
                Argument::object(r#"{"k":1}"#),
            ])
        );
    }
}
