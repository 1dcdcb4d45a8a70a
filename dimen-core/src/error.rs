//! Error types for type-erased quantity operations.
//!
//! Typed quantities report every structural mistake at compile time. Once a quantity has been erased into a
//! [`DynQuantity`](crate::dynamic::DynQuantity) the same checks run at runtime and surface as [`QuantityError`].

use alloc::string::String;

/// Result type for type-erased quantity operations.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Error type for type-erased quantity operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// The two units measure different dimensions.
    #[error("incompatible dimensions: `{from}` cannot be expressed in `{to}`")]
    IncompatibleDimensions {
        /// Symbol of the source unit.
        from: String,
        /// Symbol of the target unit.
        to: String,
    },

    /// A product, quotient or power left the `[-8, 8]` exponent range.
    #[error("dimension exponent out of range [-8, 8] in `{0}`")]
    ExponentOutOfRange(String),

    /// Combining two scales does not fit in 128 bits.
    #[error("scale overflow combining `{0}` and `{1}`")]
    ScaleOverflow(String, String),
}
