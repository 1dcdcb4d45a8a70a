//! Macros for defining units and conversions.

/// Generates `From` implementations between every pair of the listed units, for every representation.
///
/// Conversions follow [`Quantity::to`](crate::Quantity::to): for integer amounts, only conversions into a finer unit
/// compile.
#[macro_export]
macro_rules! impl_unit_conversions {
    // Single unit left: nothing to pair it with.
    ($unit:ty) => {};

    // Pair the first unit with all others, then recurse on the rest.
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl<T: $crate::Representation> From<$crate::Quantity<$first, T>> for $crate::Quantity<$rest, T> {
                #[inline]
                fn from(value: $crate::Quantity<$first, T>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl<T: $crate::Representation> From<$crate::Quantity<$rest, T>> for $crate::Quantity<$first, T> {
                #[inline]
                fn from(value: $crate::Quantity<$rest, T>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($($rest),+);
    };
}
