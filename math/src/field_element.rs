use std::convert::TryFrom;
use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;
use std::str::FromStr;

use arbitrary::Arbitrary;
use arbitrary::Unstructured;
use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;
use serde::de;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use super::error::{MathError, ParseFieldElementError};
use super::traits::*;

/// Base field element ∈ ℤ_{8380417}.
///
/// In Montgomery representation.
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq)]
pub struct FieldElement(u32);

/// Simplifies constructing [FieldElement]s.
///
/// The type [`FieldElement`] must be in scope for this macro to work.
/// See [`FieldElement::from`] for supported types.
///
/// # Examples
///
/// ```
/// use math::prelude::*;
/// let a = fe!(42);
/// let b = fe!(-12); // correctly translates to `FieldElement::P - 12`
/// let c = fe!(42 - 12);
/// assert_eq!(a + b, c);
///```
#[macro_export]
macro_rules! fe {
    ($value:expr) => {
        $crate::field_element::FieldElement::from($value)
    };
}

impl<'a> Arbitrary<'a> for FieldElement {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        u.arbitrary().map(FieldElement::new)
    }
}

impl Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        Self::try_new(value).map_err(de::Error::custom)
    }
}

impl FieldElement {
    /// Width of the canonical little-endian encoding.
    pub const BYTES: usize = 4;

    /// Dilithium prime modulus: 8380417
    pub const P: u32 = 8380417;
    pub const MAX: u32 = Self::P - 1;

    /// R^2 mod P for Montgomery form
    /// R = 2^32 mod 8380417 = 4193792
    /// R^2 = 4193792^2 mod 8380417 = 2365951
    const R2: u32 = 2365951;

    /// Smallest quadratic non-residue modulo `P`.
    ///
    /// `P ≡ 1 (mod 4)`, so `-1` is a square and cannot define the quadratic
    /// extension; 5 is the first value failing Euler's criterion.
    pub const NON_RESIDUE: Self = Self::new(5);

    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(Self::montyred((value as u64) * (Self::R2 as u64)))
    }

    /// Construct a new base field element iff the given value is
    /// [canonical][Self::is_canonical], an error otherwise.
    pub fn try_new(v: u32) -> Result<Self, ParseFieldElementError> {
        Self::is_canonical(v)
            .then(|| Self::new(v))
            .ok_or(ParseFieldElementError::NotCanonical(v as u64))
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.canonical_representation()
    }

    #[inline]
    const fn canonical_representation(&self) -> u32 {
        Self::montyred(self.0 as u64)
    }

    #[must_use]
    #[inline]
    pub const fn mod_pow(&self, exp: u32) -> Self {
        let mut acc = FieldElement::ONE;
        let bit_length = u32::BITS - exp.leading_zeros();
        let mut i = 0;
        while i < bit_length {
            acc = Self(Self::montyred(acc.0 as u64 * acc.0 as u64));
            if exp & (1 << (bit_length - 1 - i)) != 0 {
                acc = Self(Self::montyred(acc.0 as u64 * self.0 as u64));
            }
            i += 1;
        }

        acc
    }

    /// Legendre symbol test: true iff `self` has a square root in the field.
    pub fn is_square(&self) -> bool {
        self.is_zero() || self.mod_pow((Self::P - 1) / 2).is_one()
    }

    /// Montgomery reduction
    #[inline(always)]
    pub const fn montyred(x: u64) -> u32 {
        // n' = -P^(-1) mod 2^32
        const N_PRIME: u32 = 4236238847;

        let xl = x as u32;
        let m = xl.wrapping_mul(N_PRIME);

        // t = (x + m * P) / R
        let mn = (m as u64) * (Self::P as u64);
        let t = (x.wrapping_add(mn)) >> 32;

        // Products of reduced operands land below 2P; only wide inputs to
        // `new` take the division path.
        if t < 2 * Self::P as u64 {
            if t >= Self::P as u64 {
                (t - Self::P as u64) as u32
            } else {
                t as u32
            }
        } else {
            (t % Self::P as u64) as u32
        }
    }

    /// Canonical value in little-endian byte order.
    #[inline]
    pub const fn to_bytes(&self) -> [u8; FieldElement::BYTES] {
        self.canonical_representation().to_le_bytes()
    }

    /// Inverse of [`to_bytes`][Self::to_bytes]; rejects non-canonical values.
    pub fn from_bytes(
        bytes: &[u8; FieldElement::BYTES],
    ) -> Result<Self, ParseFieldElementError> {
        Self::try_new(u32::from_le_bytes(*bytes))
    }

    #[inline]
    pub const fn is_canonical(x: u32) -> bool {
        x < Self::P
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let canonical_value = Self::canonical_representation(self);
        let cutoff = 256;
        if canonical_value >= Self::P - cutoff {
            write!(f, "-{}", Self::P - canonical_value)
        } else if canonical_value <= cutoff {
            write!(f, "{canonical_value}")
        } else {
            write!(f, "{canonical_value:>07}")
        }
    }
}

impl FromStr for FieldElement {
    type Err = ParseFieldElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: u32 = s
            .parse()
            .map_err(ParseFieldElementError::ParseIntError)?;
        Self::try_new(parsed)
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self::new((value % Self::P as u64) as u32)
    }
}

impl From<usize> for FieldElement {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

macro_rules! impl_from_small_unsigned_int_for_fe {
    ($($t:ident),+ $(,)?) => {$(
        impl From<$t> for FieldElement {
            fn from(value: $t) -> Self {
                Self::new(u32::from(value))
            }
        }
    )+};
}

impl_from_small_unsigned_int_for_fe!(u8, u16, u32);

impl From<i64> for FieldElement {
    fn from(value: i64) -> Self {
        let remainder = value.rem_euclid(Self::P as i64);
        Self::new(remainder as u32)
    }
}

macro_rules! impl_from_small_signed_int_for_fe {
    ($($t:ident),+ $(,)?) => {$(
        impl From<$t> for FieldElement {
            fn from(value: $t) -> Self {
                i64::from(value).into()
            }
        }
    )+};
}

impl_from_small_signed_int_for_fe!(i8, i16, i32);

impl From<FieldElement> for u32 {
    fn from(elem: FieldElement) -> Self {
        elem.canonical_representation()
    }
}

impl From<FieldElement> for u64 {
    fn from(elem: FieldElement) -> Self {
        elem.canonical_representation() as u64
    }
}

impl From<FieldElement> for [u8; FieldElement::BYTES] {
    fn from(fe: FieldElement) -> Self {
        // The Montgomery form is not an encoding; map to canonical first.
        fe.to_bytes()
    }
}

impl TryFrom<[u8; FieldElement::BYTES]> for FieldElement {
    type Error = ParseFieldElementError;

    fn try_from(array: [u8; FieldElement::BYTES]) -> Result<Self, Self::Error> {
        Self::from_bytes(&array)
    }
}

impl TryFrom<&[u8]> for FieldElement {
    type Error = ParseFieldElementError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; FieldElement::BYTES]>::try_from(bytes)
            .map_err(|_| {
                ParseFieldElementError::num_bytes(Self::BYTES, bytes.len())
            })?
            .try_into()
    }
}

impl Inverse for FieldElement {
    #[inline]
    fn inverse(&self) -> Result<Self, MathError> {
        if self.is_zero() {
            return Err(MathError::DivisionByZero);
        }

        // Fermat: a^(p-2) = a^(-1) mod p
        Ok(self.mod_pow(Self::P - 2))
    }
}

impl ModPowU32 for FieldElement {
    #[inline]
    fn mod_pow_u32(&self, exp: u32) -> Self {
        self.mod_pow(exp)
    }
}

impl rand::distributions::Distribution<FieldElement>
    for rand::distributions::Standard
{
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        FieldElement::new(rng.gen_range(0..=FieldElement::MAX))
    }
}

impl FiniteField for FieldElement {
    fn to_le_bytes(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }
}

impl Zero for FieldElement {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }
}

impl ConstZero for FieldElement {
    const ZERO: Self = Self::new(0);
}

impl One for FieldElement {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_one(&self) -> bool {
        self == &Self::ONE
    }
}

impl ConstOne for FieldElement {
    const ONE: Self = Self::new(1);
}

impl Add for FieldElement {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        let sum = self.0 as u64 + rhs.0 as u64;
        if sum >= Self::P as u64 {
            Self((sum - Self::P as u64) as u32)
        } else {
            Self(sum as u32)
        }
    }
}

impl AddAssign for FieldElement {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl SubAssign for FieldElement {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul for FieldElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(Self::montyred((self.0 as u64) * (rhs.0 as u64)))
    }
}

impl Neg for FieldElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::zero() - self
    }
}

impl Sub for FieldElement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        if self.0 >= rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self(self.0 + Self::P - rhs.0)
        }
    }
}
