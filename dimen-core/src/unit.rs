//! Unit types and traits.
//!
//! A unit is a zero-sized type bound to one [`Dimension`] and an exact [`Ratio`] scale relative to the canonical
//! unit of that dimension. Units combine structurally:
//!
//! | Type | Dimension | Scale | Symbol |
//! |---|---|---|---|
//! | [`Canonical<D>`] | `D` | 1 | base symbols of `D` (`g·m·s⁻²`) |
//! | [`Prod<A, B>`] | `A · B` | `scale(A) · scale(B)` | `A·B` |
//! | [`Per<A, B>`] | `A / B` | `scale(A) / scale(B)` | `A/B` |
//! | [`Pow<A, N>`] | `Aᴺ` | `scale(A)ᴺ` | `Aᴺ` |
//!
//! All scales are folded at compile time; an overflowing scale is a compile-time error.
//!
//! Composite symbols keep the operands in the order they were combined, so `Prod<Second, Meter>` prints `s·m` and
//! `kg·hg` stays distinct from `hg·kg`. Only [`Canonical`] symbols are ordered by dimension index. To get that form
//! for a composite quantity, convert it to the canonical unit of its dimension:
//!
//! ```rust
//! use dimen_core::{Canonical, Meter, Prod, Quantity, Second};
//!
//! let q = Quantity::<Prod<Second, Meter>>::new(2.0);
//! assert_eq!(q.to_string(), "2 s·m");
//! assert_eq!(q.to::<Canonical<_>>().to_string(), "2 m·s");
//! ```

use crate::dimension::{
    Amount, Current, DimDiv, DimMul, DimPow, Dimension, Dimensionless, Length, LuminousIntensity, Mass,
    SymbolForm, Temperature, Time,
};
use crate::repr::{FloatArithmetic, IntegerArithmetic, Representation};
use crate::Ratio;
use core::fmt;
use core::marker::PhantomData;
use typenum::Integer;

/// Trait implemented by every **unit** type.
///
/// * `SCALE` is the exact factor from this unit to the canonical unit of the same dimension. Kilogram has
///   `SCALE == 1000` because the canonical mass unit is the gram.
/// * `Dim` ties the unit to its underlying [`Dimension`].
/// * `SYMBOL` is the printable symbol of a named unit (`"kg"`). Structural units leave it empty and render through
///   [`Unit::write_symbol`].
///
/// Named units are normally declared with `#[derive(Unit)]`:
///
/// ```rust
/// use dimen_core::{dimension::Length, Quantity, Ratio, Unit};
///
/// #[derive(Clone, Copy, Debug)]
/// pub struct Furlong;
/// impl Unit for Furlong {
///     const SCALE: Ratio = Ratio::new(201_168, 1000);
///     type Dim = Length;
///     const SYMBOL: &'static str = "fur";
/// }
///
/// let f = Quantity::<Furlong>::new(2.0);
/// assert_eq!(f.to::<dimen_core::Meter>().amount(), 402.336);
/// ```
pub trait Unit {
    /// Exact unit-to-canonical scale.
    const SCALE: Ratio;

    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Printable symbol of a named unit.
    const SYMBOL: &'static str;

    /// How the symbol binds inside a larger composite symbol.
    const FORM: SymbolForm = SymbolForm::Atom;

    /// Writes the symbol of this unit.
    #[inline]
    fn write_symbol(w: &mut dyn fmt::Write) -> fmt::Result {
        w.write_str(Self::SYMBOL)
    }
}

/// Writes `U`'s symbol, parenthesized when `U` binds looser than the context allows.
fn write_operand<U: Unit>(w: &mut dyn fmt::Write, paren: bool) -> fmt::Result {
    if paren {
        w.write_char('(')?;
        U::write_symbol(w)?;
        w.write_char(')')
    } else {
        U::write_symbol(w)
    }
}

macro_rules! marker_impls {
    ($($ty:ident<$($p:ident),+>),* $(,)?) => {$(
        impl<$($p),+> Clone for $ty<$($p),+> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($p),+> Copy for $ty<$($p),+> {}

        impl<$($p),+> PartialEq for $ty<$($p),+> {
            #[inline]
            fn eq(&self, _: &Self) -> bool {
                true
            }
        }

        impl<$($p),+> Default for $ty<$($p),+> {
            #[inline]
            fn default() -> Self {
                Self(PhantomData)
            }
        }
    )*};
}

// ─────────────────────────────────────────────────────────────────────────────
// Canonical units
// ─────────────────────────────────────────────────────────────────────────────

/// The scale-1 unit of dimension `D`.
///
/// Its symbol is the product of base symbols in dimension order, so `Canonical<Mass>` prints `g` and
/// `Canonical<ForceDim>` prints `g·m·s⁻²`.
pub struct Canonical<D>(PhantomData<D>);

impl<D: Dimension> Unit for Canonical<D> {
    const SCALE: Ratio = Ratio::ONE;
    type Dim = D;
    const SYMBOL: &'static str = "";
    const FORM: SymbolForm = D::EXPONENTS.form();

    #[inline]
    fn write_symbol(w: &mut dyn fmt::Write) -> fmt::Result {
        D::EXPONENTS.write_symbol(w)
    }
}

impl<D: Dimension> fmt::Debug for Canonical<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Canonical({})", D::EXPONENTS)
    }
}

/// Gram, the canonical mass unit.
pub type Gram = Canonical<Mass>;
/// Metre, the canonical length unit.
pub type Meter = Canonical<Length>;
/// Second, the canonical time unit.
pub type Second = Canonical<Time>;
/// Ampere, the canonical current unit.
pub type Ampere = Canonical<Current>;
/// Kelvin, the canonical temperature unit.
pub type Kelvin = Canonical<Temperature>;
/// Mole, the canonical amount-of-substance unit.
pub type Mole = Canonical<Amount>;
/// Candela, the canonical luminous-intensity unit.
pub type Candela = Canonical<LuminousIntensity>;
/// The dimensionless unit. Quantities in it print as bare numbers.
pub type Unitless = Canonical<Dimensionless>;

// ─────────────────────────────────────────────────────────────────────────────
// Composite units
// ─────────────────────────────────────────────────────────────────────────────

/// Unit representing the product `A · B`.
pub struct Prod<A, B>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Prod<A, B>
where
    A::Dim: DimMul<B::Dim>,
{
    const SCALE: Ratio = A::SCALE.mul(B::SCALE);
    type Dim = <A::Dim as DimMul<B::Dim>>::Output;
    const SYMBOL: &'static str = "";
    const FORM: SymbolForm = SymbolForm::Product;

    fn write_symbol(w: &mut dyn fmt::Write) -> fmt::Result {
        write_operand::<A>(w, matches!(A::FORM, SymbolForm::Quotient))?;
        w.write_char('·')?;
        write_operand::<B>(w, matches!(B::FORM, SymbolForm::Quotient))
    }
}

impl<A, B> fmt::Debug for Prod<A, B>
where
    A: Unit,
    B: Unit,
    A::Dim: DimMul<B::Dim>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prod({})", Symbol::<Self>::new())
    }
}

/// Unit representing the quotient `N / D`.
///
/// `Per<Meter, Second>` is the metre per second. Its dimension is the exponent difference and its scale the
/// quotient of scales.
pub struct Per<N, D>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D>
where
    N::Dim: DimDiv<D::Dim>,
{
    const SCALE: Ratio = N::SCALE.div(D::SCALE);
    type Dim = <N::Dim as DimDiv<D::Dim>>::Output;
    const SYMBOL: &'static str = "";
    const FORM: SymbolForm = SymbolForm::Quotient;

    fn write_symbol(w: &mut dyn fmt::Write) -> fmt::Result {
        write_operand::<N>(w, matches!(N::FORM, SymbolForm::Quotient))?;
        w.write_char('/')?;
        write_operand::<D>(w, matches!(D::FORM, SymbolForm::Product | SymbolForm::Quotient))
    }
}

impl<N, D> fmt::Debug for Per<N, D>
where
    N: Unit,
    D: Unit,
    N::Dim: DimDiv<D::Dim>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Per({})", Symbol::<Self>::new())
    }
}

/// Unit representing `A` raised to the type-level integer `E`.
///
/// ```rust
/// use dimen_core::{Meter, Pow, Symbol};
/// use typenum::P3;
///
/// assert_eq!(Symbol::<Pow<Meter, P3>>::new().to_string(), "m³");
/// ```
pub struct Pow<A, E>(PhantomData<(A, E)>);

impl<A: Unit, E: Integer> Unit for Pow<A, E>
where
    A::Dim: DimPow<E>,
{
    const SCALE: Ratio = A::SCALE.pow(E::I32);
    type Dim = <A::Dim as DimPow<E>>::Output;
    const SYMBOL: &'static str = "";
    const FORM: SymbolForm = SymbolForm::Power;

    fn write_symbol(w: &mut dyn fmt::Write) -> fmt::Result {
        write_operand::<A>(w, !matches!(A::FORM, SymbolForm::Atom))?;
        crate::dimension::write_superscript(w, E::I32)
    }
}

impl<A, E> fmt::Debug for Pow<A, E>
where
    A: Unit,
    E: Integer,
    A::Dim: DimPow<E>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pow({})", Symbol::<Self>::new())
    }
}

marker_impls!(Canonical<D>, Prod<A, B>, Per<N, D>, Pow<A, E>);

/// Selects the unit the right operand of `*` or `/` is expressed in.
///
/// Float amounts move to [`Canonical`], so the scale of a product is the scale of its left operand. Integer amounts
/// keep their own unit: moving a unit finer than the canonical one into it would truncate.
pub trait Normalize<V: Unit> {
    /// Unit of the right operand inside the product.
    type Unit: Unit<Dim = V::Dim>;
}

impl<V: Unit> Normalize<V> for FloatArithmetic {
    type Unit = Canonical<V::Dim>;
}

impl<V: Unit> Normalize<V> for IntegerArithmetic {
    type Unit = V;
}

/// The unit `V` takes on the right of `*` or `/` when amounts are carried in `T`.
pub type Normalized<V, T> = <<T as Representation>::Arithmetic as Normalize<V>>::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// Symbols and conversion factors
// ─────────────────────────────────────────────────────────────────────────────

/// Display adapter for the symbol of `U`.
pub struct Symbol<U>(PhantomData<U>);

impl<U> Symbol<U> {
    /// Creates the adapter.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<U> Default for Symbol<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Unit> fmt::Display for Symbol<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        U::write_symbol(f)
    }
}

/// The exact factor converting amounts of `From` into `To` when carried in representation `T`.
///
/// Evaluating [`Conversion::FACTOR`] for a pair that cannot be realized exactly in `T` fails to compile. The
/// error names the failure kind and rustc's instantiation note names both units.
pub struct Conversion<From, To, T>(PhantomData<(From, To, T)>);

impl<From, To, T> Conversion<From, To, T>
where
    From: Unit,
    To: Unit<Dim = From::Dim>,
    T: Representation,
{
    /// `scale(From) / scale(To)`, checked to be an integer not above `T::MAX_FACTOR` for integer `T`.
    pub const FACTOR: Ratio = {
        let factor = From::SCALE.div(To::SCALE);
        assert!(
            T::IS_FLOAT || factor.is_integer(),
            "lossy integer conversion: the target unit is coarser than the source and the amount is an integer"
        );
        assert!(
            T::IS_FLOAT || factor.numer() <= T::MAX_FACTOR,
            "narrowing representation: the conversion factor does not fit in the integer representation"
        );
        factor
    };

    /// `scale(From) / scale(To)` for cross-multiplied comparisons.
    ///
    /// Unchecked: comparisons fall back to an overflow-free path when a term does not fit in `T`.
    pub const CROSS_FACTOR: Ratio = From::SCALE.div(To::SCALE);

    /// Converts an amount.
    #[inline]
    pub fn apply(amount: T) -> T {
        amount.scale(Self::FACTOR)
    }
}

/// Converts an amount of `From` into `To`, exactly when `T` is an integer.
#[inline]
pub fn rescale<From, To, T>(amount: T) -> T
where
    From: Unit,
    To: Unit<Dim = From::Dim>,
    T: Representation,
{
    Conversion::<From, To, T>::apply(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Area, ForceDim, VelocityDim};
    use typenum::{N1, P2};

    #[derive(Clone, Copy, Debug)]
    struct Kilo;
    impl Unit for Kilo {
        const SCALE: Ratio = Ratio::integer(1000);
        type Dim = Mass;
        const SYMBOL: &'static str = "kg";
    }

    #[derive(Clone, Copy, Debug)]
    struct Hecto;
    impl Unit for Hecto {
        const SCALE: Ratio = Ratio::integer(100);
        type Dim = Mass;
        const SYMBOL: &'static str = "hg";
    }

    #[derive(Clone, Copy, Debug)]
    struct Hour;
    impl Unit for Hour {
        const SCALE: Ratio = Ratio::integer(3600);
        type Dim = Time;
        const SYMBOL: &'static str = "h";
    }

    fn symbol<U: Unit>() -> String {
        Symbol::<U>::new().to_string()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Scales
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn composite_scales_are_exact() {
        assert_eq!(<Prod<Kilo, Hecto>>::SCALE, Ratio::integer(100_000));
        assert_eq!(<Per<Hecto, Kilo>>::SCALE, Ratio::new(1, 10));
        assert_eq!(<Pow<Kilo, P2>>::SCALE, Ratio::integer(1_000_000));
        assert_eq!(<Pow<Hecto, N1>>::SCALE, Ratio::new(1, 100));
        assert_eq!(<Canonical<ForceDim>>::SCALE, Ratio::ONE);
    }

    #[test]
    fn composite_dimensions_combine_exponents() {
        assert_eq!(<Per<Meter, Hour> as Unit>::Dim::EXPONENTS, VelocityDim::EXPONENTS);
        assert_eq!(<Prod<Meter, Meter> as Unit>::Dim::EXPONENTS, Area::EXPONENTS);
        assert_eq!(<Pow<Meter, P2> as Unit>::Dim::EXPONENTS, Area::EXPONENTS);
    }

    #[test]
    fn conversion_factors() {
        assert_eq!(Conversion::<Kilo, Hecto, i32>::FACTOR, Ratio::integer(10));
        assert_eq!(Conversion::<Hecto, Kilo, f64>::FACTOR, Ratio::new(1, 10));
        assert_eq!(Conversion::<Hecto, Kilo, i32>::CROSS_FACTOR, Ratio::new(1, 10));
        assert_eq!(rescale::<Kilo, Gram, i64>(3), 3000);
        assert_eq!(rescale::<Hecto, Kilo, f64>(72.0), 7.2);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Symbols
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn normalization_depends_on_arithmetic() {
        assert_eq!(symbol::<Normalized<Hecto, f64>>(), "g");
        assert_eq!(symbol::<Normalized<Hecto, f32>>(), "g");
        assert_eq!(symbol::<Normalized<Hecto, i32>>(), "hg");
        assert_eq!(<Normalized<Hour, u8>>::SCALE, Ratio::integer(3600));
    }

    #[test]
    fn canonical_symbols() {
        assert_eq!(symbol::<Gram>(), "g");
        assert_eq!(symbol::<Unitless>(), "");
        assert_eq!(symbol::<Canonical<ForceDim>>(), "g·m·s⁻²");
        assert_eq!(symbol::<Canonical<Area>>(), "m²");
    }

    #[test]
    fn composite_symbols() {
        assert_eq!(symbol::<Prod<Kilo, Hecto>>(), "kg·hg");
        assert_eq!(symbol::<Per<Meter, Hour>>(), "m/h");
        assert_eq!(symbol::<Per<Meter, Prod<Hour, Hour>>>(), "m/(h·h)");
        assert_eq!(symbol::<Prod<Per<Meter, Hour>, Kilo>>(), "(m/h)·kg");
        assert_eq!(symbol::<Pow<Kilo, N1>>(), "kg⁻¹");
        assert_eq!(symbol::<Pow<Per<Meter, Hour>, P2>>(), "(m/h)²");
        assert_eq!(symbol::<Per<Kilo, Canonical<Area>>>(), "kg/m²");
    }

    #[test]
    fn debug_output_uses_symbols() {
        assert_eq!(format!("{:?}", Per::<Meter, Hour>::default()), "Per(m/h)");
        assert_eq!(format!("{:?}", Meter::default()), "Canonical(m)");
    }
}
