//! Quantity type and its operation rules.
//!
//! # Result units
//!
//! - **Additive** (`+`, `-`, `+=`, `-=`): the left operand's unit wins. The right operand is converted into it
//!   exactly, so `3000 kg + 72 hg == 3007.2 kg`. With an integer representation, converting into a coarser unit
//!   is rejected at compile time; convert explicitly first.
//! - **Multiplicative** (`*`, `/`): the left operand keeps its unit. With a floating-point common representation
//!   the right operand is normalized to the canonical unit of its dimension, so `3000 kg * 72 hg` is
//!   `21_600_000 kg·g`. With an integer common representation the right operand keeps its unit and no conversion
//!   happens at all: `5 mm * 10 mm` is `50 mm·mm` and `3000 kg * 72 hg` is `216_000 kg·hg`. Either way the result
//!   is exact in its unit and can be re-expressed with [`Quantity::to`]. See [`Normalize`].
//! - **Comparison**: exact across units and representations, including integer amounts whose scaled terms would
//!   overflow.
//! - **Scalar**: `q * s`, `s * q`, `q / s` and `q % s` keep the unit.
//!
//! # Result representation
//!
//! Binary operations compute in the common representation of both amounts (see [`Promote`]).

use crate::dimension::{DimDiv, DimMul, DimPow, Dimension, DimensionVector};
use crate::ratio::compare_fractions;
use crate::repr::{Float, Promote, Representation};
use crate::unit::{rescale, Conversion, Normalize, Normalized, Per, Pow, Prod, Symbol, Unit};
use crate::Ratio;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;
use typenum::{Integer, P2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An amount of representation `T` measured in unit `U`.
///
/// `Quantity<U, T>` is a plain `T` at runtime; the unit exists only in the type.
///
/// # Examples
///
/// ```rust
/// use dimen_core::{Quantity, Ratio, Unit, dimension::Mass};
///
/// #[derive(Clone, Copy, Debug)]
/// pub struct Kilogram;
/// impl Unit for Kilogram {
///     const SCALE: Ratio = Ratio::integer(1000);
///     type Dim = Mass;
///     const SYMBOL: &'static str = "kg";
/// }
///
/// #[derive(Clone, Copy, Debug)]
/// pub struct Hectogram;
/// impl Unit for Hectogram {
///     const SCALE: Ratio = Ratio::integer(100);
///     type Dim = Mass;
///     const SYMBOL: &'static str = "hg";
/// }
///
/// let q1 = Quantity::<Kilogram, f64>::new(3000.0);
/// let q2 = Quantity::<Hectogram, i32>::new(72);
/// assert_eq!((q1 + q2).amount(), 3007.2);
/// assert_eq!((q1 * q2).amount(), 21_600_000.0);
/// ```
pub struct Quantity<U: Unit, T: Representation = f64>(T, PhantomData<U>);

impl<U: Unit, T: Representation> Quantity<U, T> {
    /// Forces the unit's scale and dimension to be evaluated, so an overflowing scale or an out-of-range exponent
    /// fails to compile wherever the quantity is built.
    const WELL_FORMED: () = {
        let _scale = U::SCALE;
        let _exponents = <U::Dim as Dimension>::EXPONENTS;
    };

    /// The zero amount.
    pub const ZERO: Self = Self::new(T::ZERO);

    /// Creates a new quantity; `amount` is interpreted in `U`.
    ///
    /// ```rust
    /// use dimen_core::{Meter, Quantity};
    /// let d = Quantity::<Meter, i32>::new(5);
    /// assert_eq!(d.amount(), 5);
    /// ```
    #[inline]
    pub const fn new(amount: T) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::WELL_FORMED;
        Self(amount, PhantomData)
    }

    /// Returns the stored amount, expressed in `U`.
    #[inline]
    pub const fn amount(&self) -> T {
        self.0
    }

    /// Converts this quantity to another unit of the same dimension, keeping the representation.
    ///
    /// The amount is multiplied by `scale(U) / scale(V)`. For integer representations the factor must be an
    /// integer (moving to a finer unit); anything else fails to compile.
    ///
    /// ```rust
    /// use dimen_core::{Gram, Quantity, Ratio, Unit, dimension::Mass};
    ///
    /// #[derive(Clone, Copy, Debug)]
    /// pub struct Kilogram;
    /// impl Unit for Kilogram {
    ///     const SCALE: Ratio = Ratio::integer(1000);
    ///     type Dim = Mass;
    ///     const SYMBOL: &'static str = "kg";
    /// }
    ///
    /// let g = Quantity::<Kilogram>::new(1.0).to::<Gram>();
    /// assert_eq!(g.amount(), 1000.0);
    /// assert_eq!(g.to::<Kilogram>().amount(), 1.0);
    /// ```
    #[inline]
    pub fn to<V: Unit<Dim = U::Dim>>(self) -> Quantity<V, T> {
        Quantity::new(rescale::<U, V, T>(self.0))
    }

    /// Changes the representation to `R` without loss (`R` must be `T`'s promotion target).
    ///
    /// ```rust
    /// use dimen_core::{Meter, Quantity};
    /// let d = Quantity::<Meter, i32>::new(5).cast::<f64>();
    /// assert_eq!(d.amount(), 5.0);
    /// ```
    #[inline]
    pub fn cast<R>(self) -> Quantity<U, R>
    where
        R: Representation,
        T: Promote<R, Common = R>,
    {
        Quantity::new(self.0.lift())
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Returns the smaller of two quantities in the same unit.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two quantities in the same unit.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }

    /// Raises the quantity to the type-level integer power `E`.
    ///
    /// The dimension exponents and the scale are multiplied by `E`; the amount becomes `amountᴱ`. Negative powers
    /// of integer amounts are rejected at compile time.
    ///
    /// ```rust
    /// use dimen_core::{Meter, Quantity};
    /// use typenum::P3;
    ///
    /// let side = Quantity::<Meter, i64>::new(3);
    /// let volume = side.pow::<P3>();
    /// assert_eq!(volume.amount(), 27);
    /// assert_eq!(volume.to_string(), "27 m³");
    /// ```
    #[inline]
    pub fn pow<E: Integer>(self) -> Quantity<Pow<U, E>, T>
    where
        U::Dim: DimPow<E>,
    {
        #[allow(clippy::let_unit_value)]
        let () = IntegerPower::<T, E>::CHECK;
        Quantity::new(self.0.powi(E::I32))
    }

    /// The dimension of `U` as a runtime exponent vector.
    #[inline]
    pub fn dimension(&self) -> DimensionVector {
        <U::Dim as Dimension>::EXPONENTS
    }

    /// The scale of `U` relative to the canonical unit of its dimension.
    #[inline]
    pub fn scale(&self) -> Ratio {
        U::SCALE
    }

    /// Display adapter for the unit symbol.
    #[inline]
    pub fn symbol(&self) -> Symbol<U> {
        Symbol::new()
    }
}

impl<U: Unit, T: Float> Quantity<U, T> {
    /// A constant representing NaN for this quantity type.
    pub const NAN: Self = Self::new(T::NAN);
}

/// Rejects negative powers of integer amounts.
struct IntegerPower<T, E>(PhantomData<(T, E)>);

impl<T: Representation, E: Integer> IntegerPower<T, E> {
    const CHECK: () = assert!(
        T::IS_FLOAT || E::I32 >= 0,
        "lossy integer conversion: negative power of an integer amount"
    );
}

impl<U: Unit, T: Float> Quantity<Prod<U, U>, T>
where
    U::Dim: DimMul<U::Dim>,
{
    /// Square root of a product of a unit with itself.
    ///
    /// ```rust
    /// use dimen_core::{Meter, Quantity};
    /// let a = Quantity::<Meter>::new(4.0) * Quantity::<Meter>::new(4.0);
    /// assert_eq!(a.sqrt().amount(), 4.0);
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<U, T> {
        Quantity::new(self.0.sqrt())
    }
}

impl<U: Unit, T: Float> Quantity<Pow<U, P2>, T>
where
    U::Dim: DimPow<P2>,
{
    /// Square root of a squared unit.
    #[inline]
    pub fn sqrt(self) -> Quantity<U, T> {
        Quantity::new(self.0.sqrt())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Marker trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, T: Representation> Clone for Quantity<U, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, T: Representation> Copy for Quantity<U, T> {}

impl<U: Unit, T: Representation> Default for Quantity<U, T> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: Unit, T: Representation + Hash> Hash for Quantity<U, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<U: Unit, T: Representation> fmt::Debug for Quantity<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity<{}>({:?})", Symbol::<U>::new(), self.0)
    }
}

/// Writes a space before the first non-empty chunk, so unitless amounts print bare.
struct Spaced<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    started: bool,
}

impl fmt::Write for Spaced<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if !self.started && !s.is_empty() {
            self.started = true;
            self.f.write_str(" ")?;
        }
        self.f.write_str(s)
    }
}

impl<U: Unit, T: Representation> fmt::Display for Quantity<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)?;
        U::write_symbol(&mut Spaced { f, started: false })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Additive operations (left operand's unit wins)
// ─────────────────────────────────────────────────────────────────────────────

impl<U, V, Tx, Ty> Add<Quantity<V, Ty>> for Quantity<U, Tx>
where
    U: Unit,
    V: Unit<Dim = U::Dim>,
    Tx: Promote<Ty>,
    Ty: Representation,
{
    type Output = Quantity<U, Tx::Common>;

    #[inline]
    fn add(self, rhs: Quantity<V, Ty>) -> Self::Output {
        Quantity::new(self.0.lift() + rescale::<V, U, _>(Tx::lift_rhs(rhs.0)))
    }
}

impl<U, V, Tx, Ty> Sub<Quantity<V, Ty>> for Quantity<U, Tx>
where
    U: Unit,
    V: Unit<Dim = U::Dim>,
    Tx: Promote<Ty>,
    Ty: Representation,
{
    type Output = Quantity<U, Tx::Common>;

    #[inline]
    fn sub(self, rhs: Quantity<V, Ty>) -> Self::Output {
        Quantity::new(self.0.lift() - rescale::<V, U, _>(Tx::lift_rhs(rhs.0)))
    }
}

impl<U, V, Tx, Ty> AddAssign<Quantity<V, Ty>> for Quantity<U, Tx>
where
    U: Unit,
    V: Unit<Dim = U::Dim>,
    Tx: Promote<Ty, Common = Tx>,
    Ty: Representation,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<V, Ty>) {
        self.0 = self.0 + rescale::<V, U, Tx>(Tx::lift_rhs(rhs.0));
    }
}

impl<U, V, Tx, Ty> SubAssign<Quantity<V, Ty>> for Quantity<U, Tx>
where
    U: Unit,
    V: Unit<Dim = U::Dim>,
    Tx: Promote<Ty, Common = Tx>,
    Ty: Representation,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<V, Ty>) {
        self.0 = self.0 - rescale::<V, U, Tx>(Tx::lift_rhs(rhs.0));
    }
}

impl<U: Unit, T: Representation + Neg<Output = T>> Neg for Quantity<U, T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Unit, T: Representation> Sum for Quantity<U, T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| Self::new(acc.0 + q.0))
    }
}

impl<'a, U: Unit, T: Representation> Sum<&'a Quantity<U, T>> for Quantity<U, T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Multiplicative operations (right operand normalized per representation)
// ─────────────────────────────────────────────────────────────────────────────

impl<U, V, Tx, Ty> Mul<Quantity<V, Ty>> for Quantity<U, Tx>
where
    U: Unit,
    V: Unit,
    Tx: Promote<Ty>,
    Ty: Representation,
    <Tx::Common as Representation>::Arithmetic: Normalize<V>,
    U::Dim: DimMul<V::Dim>,
{
    type Output = Quantity<Prod<U, Normalized<V, Tx::Common>>, Tx::Common>;

    #[inline]
    fn mul(self, rhs: Quantity<V, Ty>) -> Self::Output {
        let y = rescale::<V, Normalized<V, Tx::Common>, _>(Tx::lift_rhs(rhs.0));
        Quantity::new(self.0.lift() * y)
    }
}

impl<U, V, Tx, Ty> Div<Quantity<V, Ty>> for Quantity<U, Tx>
where
    U: Unit,
    V: Unit,
    Tx: Promote<Ty>,
    Ty: Representation,
    <Tx::Common as Representation>::Arithmetic: Normalize<V>,
    U::Dim: DimDiv<V::Dim>,
{
    type Output = Quantity<Per<U, Normalized<V, Tx::Common>>, Tx::Common>;

    #[inline]
    fn div(self, rhs: Quantity<V, Ty>) -> Self::Output {
        let y = rescale::<V, Normalized<V, Tx::Common>, _>(Tx::lift_rhs(rhs.0));
        Quantity::new(self.0.lift() / y)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalar operations
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! scalar_ops {
    ($($s:ty),* $(,)?) => {$(
        impl<U: Unit, T: Promote<$s>> Mul<$s> for Quantity<U, T> {
            type Output = Quantity<U, T::Common>;

            #[inline]
            fn mul(self, rhs: $s) -> Self::Output {
                Quantity::new(self.0.lift() * T::lift_rhs(rhs))
            }
        }

        impl<U: Unit, T: Representation> Mul<Quantity<U, T>> for $s
        where
            $s: Promote<T>,
        {
            type Output = Quantity<U, <$s as Promote<T>>::Common>;

            #[inline]
            fn mul(self, rhs: Quantity<U, T>) -> Self::Output {
                Quantity::new(self.lift() * <$s as Promote<T>>::lift_rhs(rhs.0))
            }
        }

        impl<U: Unit, T: Promote<$s>> Div<$s> for Quantity<U, T> {
            type Output = Quantity<U, T::Common>;

            #[inline]
            fn div(self, rhs: $s) -> Self::Output {
                Quantity::new(self.0.lift() / T::lift_rhs(rhs))
            }
        }

        impl<U: Unit, T: Promote<$s>> Rem<$s> for Quantity<U, T> {
            type Output = Quantity<U, T::Common>;

            #[inline]
            fn rem(self, rhs: $s) -> Self::Output {
                Quantity::new(self.0.lift() % T::lift_rhs(rhs))
            }
        }

        impl<U: Unit, T: Promote<$s, Common = T>> MulAssign<$s> for Quantity<U, T> {
            #[inline]
            fn mul_assign(&mut self, rhs: $s) {
                self.0 = self.0 * T::lift_rhs(rhs);
            }
        }

        impl<U: Unit, T: Promote<$s, Common = T>> DivAssign<$s> for Quantity<U, T> {
            #[inline]
            fn div_assign(&mut self, rhs: $s) {
                self.0 = self.0 / T::lift_rhs(rhs);
            }
        }
    )*};
}

scalar_ops!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Comparison (exact, by cross-multiplication)
// ─────────────────────────────────────────────────────────────────────────────

/// Orders `x` in `U` against `y` in `V` by comparing `x · p` with `y · q`, where `scale(U) / scale(V) = p / q`.
///
/// When an integer term overflows, signs decide first and the magnitudes are then compared as the fractions
/// `|x| / q` and `|y| / p`, which needs no multiplication.
fn compare_amounts<U, V, Tx, Ty>(x: Tx, y: Ty) -> Option<Ordering>
where
    U: Unit,
    V: Unit<Dim = U::Dim>,
    Tx: Promote<Ty>,
    Ty: Representation,
{
    let factor = Conversion::<U, V, Tx::Common>::CROSS_FACTOR;
    let (x, y) = (x.lift(), Tx::lift_rhs(y));
    match (x.checked_scale(factor.numer()), y.checked_scale(factor.denom())) {
        (Some(lhs), Some(rhs)) => lhs.partial_cmp(&rhs),
        _ => {
            let (sx, mx) = x.sign_magnitude();
            let (sy, my) = y.sign_magnitude();
            if sx != sy {
                return Some(sx.cmp(&sy));
            }
            let magnitudes = compare_fractions(mx, factor.denom(), my, factor.numer());
            Some(if sx == Ordering::Less {
                magnitudes.reverse()
            } else {
                magnitudes
            })
        }
    }
}

impl<U, V, Tx, Ty> PartialEq<Quantity<V, Ty>> for Quantity<U, Tx>
where
    U: Unit,
    V: Unit<Dim = U::Dim>,
    Tx: Promote<Ty>,
    Ty: Representation,
{
    #[inline]
    fn eq(&self, other: &Quantity<V, Ty>) -> bool {
        compare_amounts::<U, V, Tx, Ty>(self.0, other.0) == Some(Ordering::Equal)
    }
}

impl<U, V, Tx, Ty> PartialOrd<Quantity<V, Ty>> for Quantity<U, Tx>
where
    U: Unit,
    V: Unit<Dim = U::Dim>,
    Tx: Promote<Ty>,
    Ty: Representation,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<V, Ty>) -> Option<Ordering> {
        compare_amounts::<U, V, Tx, Ty>(self.0, other.0)
    }
}

impl<U: Unit, T: Representation + Eq + Promote<T>> Eq for Quantity<U, T> {}

impl<U: Unit, T: Representation + Ord + Promote<T>> Ord for Quantity<U, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit, T: Representation + Serialize> Serialize for Quantity<U, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, T: Representation + Deserialize<'de>> Deserialize<'de> for Quantity<U, T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Quantity::new)
    }
}

/// Serde helper module for serializing quantities together with their unit symbol.
///
/// Use it with `#[serde(with = "...")]` where self-describing data is wanted. The symbol is checked on input.
///
/// ```rust
/// use dimen_core::{Meter, Quantity};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "dimen_core::serde_with_unit")]
///     max_distance: Quantity<Meter>, // {"amount": 100.0, "unit": "m"}
///     min_distance: Quantity<Meter>, // 50.0
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use alloc::string::{String, ToString};
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<U, T>` as `{"amount": .., "unit": ".."}`.
    pub fn serialize<U, T, S>(quantity: &Quantity<U, T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        T: Representation + Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("amount", &quantity.amount())?;
        state.serialize_field("unit", &Symbol::<U>::new().to_string())?;
        state.end()
    }

    /// Deserializes a `Quantity<U, T>` from `amount` and an optional `unit`, which must match `U` when present.
    pub fn deserialize<'de, U, T, D>(deserializer: D) -> Result<Quantity<U, T>, D::Error>
    where
        U: Unit,
        T: Representation + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Amount,
            Unit,
        }

        struct QuantityVisitor<U, T>(PhantomData<(U, T)>);

        impl<'de, U: Unit, T: Representation + Deserialize<'de>> Visitor<'de> for QuantityVisitor<U, T> {
            type Value = Quantity<U, T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with amount and unit fields")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Quantity<U, T>, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut amount: Option<T> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Amount => {
                            if amount.is_some() {
                                return Err(de::Error::duplicate_field("amount"));
                            }
                            amount = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let amount = amount.ok_or_else(|| de::Error::missing_field("amount"))?;
                if let Some(found) = unit {
                    let expected = Symbol::<U>::new().to_string();
                    if found != expected {
                        return Err(de::Error::custom(format_args!(
                            "unit mismatch: expected '{expected}', found '{found}'"
                        )));
                    }
                }
                Ok(Quantity::new(amount))
            }
        }

        deserializer.deserialize_struct("Quantity", &["amount", "unit"], QuantityVisitor(PhantomData))
    }
}
