//! Dimension types and traits.
//!
//! A dimension is a vector of signed integer exponents over the seven fundamental dimensions, in this fixed order:
//! mass, length, time, electric current, temperature, amount of substance and luminous intensity.
//!
//! At the type level a dimension is [`Dim<M, L, T, I, K, N, J>`] whose parameters are [`typenum`] integers, so two
//! dimensions are equal exactly when their types are equal. [`DimMul`], [`DimDiv`] and [`DimPow`] compute composite
//! dimensions by adding, subtracting and scaling exponents. At run time the same exponents are available as a
//! [`DimensionVector`].
//!
//! ```rust
//! use dimen_core::dimension::{BaseDimension, DimDiv, Dimension, Length, Time, VelocityDim};
//!
//! type Speed = <Length as DimDiv<Time>>::Output;
//! assert_eq!(<Speed as Dimension>::EXPONENTS, VelocityDim::EXPONENTS);
//! assert_eq!(VelocityDim::EXPONENTS.get(BaseDimension::Time), -1);
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Mul, Sub};
use typenum::{Diff, Integer, Prod, Sum, N1, N2, N3, P1, P2, P3, Z0};

/// Number of fundamental dimensions.
pub const BASE_DIMENSIONS: usize = 7;

/// Smallest exponent a dimension may carry.
pub const MIN_EXPONENT: i32 = -8;

/// Largest exponent a dimension may carry.
pub const MAX_EXPONENT: i32 = 8;

/// The fundamental dimensions, in index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDimension {
    /// Mass (M), canonical unit gram.
    Mass,
    /// Length (L), canonical unit metre.
    Length,
    /// Time (T), canonical unit second.
    Time,
    /// Electric current (I), canonical unit ampere.
    Current,
    /// Thermodynamic temperature (Θ), canonical unit kelvin.
    Temperature,
    /// Amount of substance (N), canonical unit mole.
    Amount,
    /// Luminous intensity (J), canonical unit candela.
    LuminousIntensity,
}

impl BaseDimension {
    /// All fundamental dimensions in index order.
    pub const ALL: [BaseDimension; BASE_DIMENSIONS] = [
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::LuminousIntensity,
    ];

    /// Position of this dimension in an exponent vector.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol of the canonical (scale 1) unit of this dimension.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Mass => "g",
            BaseDimension::Length => "m",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Amount => "mol",
            BaseDimension::LuminousIntensity => "cd",
        }
    }
}

/// Runtime view of a dimension: one exponent per [`BaseDimension`].
///
/// Values are always within `[MIN_EXPONENT, MAX_EXPONENT]`; every constructor checks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct DimensionVector([i8; BASE_DIMENSIONS]);

/// How a symbol binds when it is embedded in a larger composite symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolForm {
    /// A single symbol such as `kg` (or nothing at all).
    Atom,
    /// A symbol with an exponent such as `m²`.
    Power,
    /// A product such as `kg·m`.
    Product,
    /// A quotient such as `m/s`.
    Quotient,
}

impl DimensionVector {
    /// The dimensionless vector.
    pub const DIMENSIONLESS: Self = Self([0; BASE_DIMENSIONS]);

    /// Builds a vector from exponents in [`BaseDimension`] order.
    ///
    /// # Panics
    ///
    /// Panics if an exponent is outside `[-8, 8]`. When evaluated for a type-level dimension this is a compile-time
    /// error.
    pub const fn from_exponents(exponents: [i32; BASE_DIMENSIONS]) -> Self {
        match Self::checked(exponents) {
            Some(v) => v,
            None => panic!("dimension exponent out of range [-8, 8]"),
        }
    }

    /// Builds a vector from exponents, or `None` if any is out of range.
    pub const fn checked(exponents: [i32; BASE_DIMENSIONS]) -> Option<Self> {
        let mut out = [0i8; BASE_DIMENSIONS];
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            let e = exponents[i];
            if e < MIN_EXPONENT || e > MAX_EXPONENT {
                return None;
            }
            out[i] = e as i8;
            i += 1;
        }
        Some(Self(out))
    }

    /// Vector with exponent 1 on `base` and 0 elsewhere.
    pub const fn base(base: BaseDimension) -> Self {
        let mut out = [0i8; BASE_DIMENSIONS];
        out[base.index()] = 1;
        Self(out)
    }

    /// Exponent of one fundamental dimension.
    #[inline]
    pub const fn get(&self, base: BaseDimension) -> i32 {
        self.0[base.index()] as i32
    }

    /// All exponents in index order.
    #[inline]
    pub const fn exponents(&self) -> [i8; BASE_DIMENSIONS] {
        self.0
    }

    /// `true` for the zero vector.
    pub const fn is_dimensionless(&self) -> bool {
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Elementwise equality, usable in const contexts.
    pub const fn same(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Exponent sum (dimension of a product), or `None` if out of range.
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        let mut out = [0i32; BASE_DIMENSIONS];
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = self.0[i] as i32 + other.0[i] as i32;
            i += 1;
        }
        Self::checked(out)
    }

    /// Exponent difference (dimension of a quotient), or `None` if out of range.
    pub const fn checked_div(&self, other: &Self) -> Option<Self> {
        let mut out = [0i32; BASE_DIMENSIONS];
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = self.0[i] as i32 - other.0[i] as i32;
            i += 1;
        }
        Self::checked(out)
    }

    /// Exponents scaled by `n` (dimension of a power), or `None` if out of range.
    pub const fn checked_pow(&self, n: i32) -> Option<Self> {
        let mut out = [0i32; BASE_DIMENSIONS];
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = (self.0[i] as i32).saturating_mul(n);
            i += 1;
        }
        Self::checked(out)
    }

    /// Binding of the canonical symbol of this dimension.
    pub const fn form(&self) -> SymbolForm {
        let mut nonzero = 0;
        let mut last = 0;
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            if self.0[i] != 0 {
                nonzero += 1;
                last = self.0[i];
            }
            i += 1;
        }
        match (nonzero, last) {
            (0, _) | (1, 1) => SymbolForm::Atom,
            (1, _) => SymbolForm::Power,
            _ => SymbolForm::Product,
        }
    }

    /// Writes the canonical unit symbol: base symbols in index order joined by `·`, with superscript exponents.
    ///
    /// The dimensionless vector writes nothing.
    pub fn write_symbol(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        let mut first = true;
        for base in BaseDimension::ALL {
            let e = self.get(base);
            if e == 0 {
                continue;
            }
            if !first {
                w.write_char('·')?;
            }
            first = false;
            w.write_str(base.symbol())?;
            if e != 1 {
                write_superscript(w, e)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_symbol(f)
    }
}

/// Writes `n` with Unicode superscript digits (`⁻²`, `³`, …).
pub fn write_superscript(w: &mut dyn fmt::Write, n: i32) -> fmt::Result {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    if n < 0 {
        w.write_char('⁻')?;
    }
    let mut magnitude = n.unsigned_abs();
    let mut buf = ['⁰'; 10];
    let mut len = 0;
    loop {
        buf[len] = DIGITS[(magnitude % 10) as usize];
        len += 1;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    for c in buf[..len].iter().rev() {
        w.write_char(*c)?;
    }
    Ok(())
}

/// Trait implemented by every type-level **dimension**.
///
/// The only implementor is [`Dim`]; use the provided aliases ([`Mass`], [`Length`], …) or compose them with
/// [`DimMul`], [`DimDiv`] and [`DimPow`].
pub trait Dimension {
    /// Exponents of this dimension. Evaluating it fails to compile when an exponent leaves `[-8, 8]`.
    const EXPONENTS: DimensionVector;
}

/// A dimension given by its seven exponents (mass, length, time, current, temperature, amount, luminous intensity).
///
/// This type is never instantiated; it only exists as a type-level tag.
pub struct Dim<M, L, T, I, K, N, J>(PhantomData<(M, L, T, I, K, N, J)>);

impl<M, L, T, I, K, N, J> Dimension for Dim<M, L, T, I, K, N, J>
where
    M: Integer,
    L: Integer,
    T: Integer,
    I: Integer,
    K: Integer,
    N: Integer,
    J: Integer,
{
    const EXPONENTS: DimensionVector =
        DimensionVector::from_exponents([M::I32, L::I32, T::I32, I::I32, K::I32, N::I32, J::I32]);
}

/// Dimension of a product: exponents are added.
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// The resulting dimension.
    type Output: Dimension;
}

/// Dimension of a quotient: exponents are subtracted.
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// The resulting dimension.
    type Output: Dimension;
}

/// Dimension of an integer power: exponents are multiplied by `E`.
pub trait DimPow<E: Integer>: Dimension {
    /// The resulting dimension.
    type Output: Dimension;
}

impl<Ma, La, Ta, Ia, Ka, Na, Ja, Mb, Lb, Tb, Ib, Kb, Nb, Jb> DimMul<Dim<Mb, Lb, Tb, Ib, Kb, Nb, Jb>>
    for Dim<Ma, La, Ta, Ia, Ka, Na, Ja>
where
    Ma: Integer + Add<Mb>,
    La: Integer + Add<Lb>,
    Ta: Integer + Add<Tb>,
    Ia: Integer + Add<Ib>,
    Ka: Integer + Add<Kb>,
    Na: Integer + Add<Nb>,
    Ja: Integer + Add<Jb>,
    Mb: Integer,
    Lb: Integer,
    Tb: Integer,
    Ib: Integer,
    Kb: Integer,
    Nb: Integer,
    Jb: Integer,
    Sum<Ma, Mb>: Integer,
    Sum<La, Lb>: Integer,
    Sum<Ta, Tb>: Integer,
    Sum<Ia, Ib>: Integer,
    Sum<Ka, Kb>: Integer,
    Sum<Na, Nb>: Integer,
    Sum<Ja, Jb>: Integer,
{
    type Output = Dim<
        Sum<Ma, Mb>,
        Sum<La, Lb>,
        Sum<Ta, Tb>,
        Sum<Ia, Ib>,
        Sum<Ka, Kb>,
        Sum<Na, Nb>,
        Sum<Ja, Jb>,
    >;
}

impl<Ma, La, Ta, Ia, Ka, Na, Ja, Mb, Lb, Tb, Ib, Kb, Nb, Jb> DimDiv<Dim<Mb, Lb, Tb, Ib, Kb, Nb, Jb>>
    for Dim<Ma, La, Ta, Ia, Ka, Na, Ja>
where
    Ma: Integer + Sub<Mb>,
    La: Integer + Sub<Lb>,
    Ta: Integer + Sub<Tb>,
    Ia: Integer + Sub<Ib>,
    Ka: Integer + Sub<Kb>,
    Na: Integer + Sub<Nb>,
    Ja: Integer + Sub<Jb>,
    Mb: Integer,
    Lb: Integer,
    Tb: Integer,
    Ib: Integer,
    Kb: Integer,
    Nb: Integer,
    Jb: Integer,
    Diff<Ma, Mb>: Integer,
    Diff<La, Lb>: Integer,
    Diff<Ta, Tb>: Integer,
    Diff<Ia, Ib>: Integer,
    Diff<Ka, Kb>: Integer,
    Diff<Na, Nb>: Integer,
    Diff<Ja, Jb>: Integer,
{
    type Output = Dim<
        Diff<Ma, Mb>,
        Diff<La, Lb>,
        Diff<Ta, Tb>,
        Diff<Ia, Ib>,
        Diff<Ka, Kb>,
        Diff<Na, Nb>,
        Diff<Ja, Jb>,
    >;
}

impl<M, L, T, I, K, N, J, E> DimPow<E> for Dim<M, L, T, I, K, N, J>
where
    E: Integer,
    M: Integer + Mul<E>,
    L: Integer + Mul<E>,
    T: Integer + Mul<E>,
    I: Integer + Mul<E>,
    K: Integer + Mul<E>,
    N: Integer + Mul<E>,
    J: Integer + Mul<E>,
    Prod<M, E>: Integer,
    Prod<L, E>: Integer,
    Prod<T, E>: Integer,
    Prod<I, E>: Integer,
    Prod<K, E>: Integer,
    Prod<N, E>: Integer,
    Prod<J, E>: Integer,
{
    type Output = Dim<Prod<M, E>, Prod<L, E>, Prod<T, E>, Prod<I, E>, Prod<K, E>, Prod<N, E>, Prod<J, E>>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Fundamental dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// Dimension of pure numbers.
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Mass (M).
pub type Mass = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Length (L).
pub type Length = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
/// Time (T).
pub type Time = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
/// Electric current (I).
pub type Current = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
/// Thermodynamic temperature (Θ).
pub type Temperature = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
/// Amount of substance (N).
pub type Amount = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
/// Luminous intensity (J).
pub type LuminousIntensity = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;

// ─────────────────────────────────────────────────────────────────────────────
// Common derived dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// Area (L²).
pub type Area = Dim<Z0, P2, Z0, Z0, Z0, Z0, Z0>;
/// Volume (L³).
pub type Volume = Dim<Z0, P3, Z0, Z0, Z0, Z0, Z0>;
/// Velocity (L·T⁻¹).
pub type VelocityDim = Dim<Z0, P1, N1, Z0, Z0, Z0, Z0>;
/// Acceleration (L·T⁻²).
pub type AccelerationDim = Dim<Z0, P1, N2, Z0, Z0, Z0, Z0>;
/// Force (M·L·T⁻²).
pub type ForceDim = Dim<P1, P1, N2, Z0, Z0, Z0, Z0>;
/// Energy (M·L²·T⁻²).
pub type EnergyDim = Dim<P1, P2, N2, Z0, Z0, Z0, Z0>;
/// Power (M·L²·T⁻³).
pub type PowerDim = Dim<P1, P2, N3, Z0, Z0, Z0, Z0>;
/// Pressure (M·L⁻¹·T⁻²).
pub type PressureDim = Dim<P1, N1, N2, Z0, Z0, Z0, Z0>;
/// Frequency (T⁻¹).
pub type FrequencyDim = Dim<Z0, Z0, N1, Z0, Z0, Z0, Z0>;
/// Electric charge (I·T).
pub type ChargeDim = Dim<Z0, Z0, P1, P1, Z0, Z0, Z0>;
