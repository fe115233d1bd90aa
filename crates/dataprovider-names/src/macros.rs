//! Public macro helpers exported by `dataprovider-names`.

/// Build a `Vec<Argument>` from heterogeneous values.
///
/// Each expression is converted with `Argument::from`, so strings, primitives,
/// primitive arrays, `Option`s and ready-made arguments can be mixed.
///
/// # Examples
/// ```
/// use dataprovider_names::{Argument, arguments, format_arguments};
/// let args = arguments!["a", 5_i32, Argument::Null, [1_u8, 2]];
/// assert_eq!(format_arguments(&args), "a, 5, <null>, [1, 2]");
/// ```
#[macro_export]
macro_rules! arguments {
    () => {
        ::std::vec::Vec::<$crate::Argument>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Argument::from($value)),+]
    };
}
