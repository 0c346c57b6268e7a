use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::MathError;

pub trait ModPowU32 {
    #[must_use]
    fn mod_pow_u32(&self, exp: u32) -> Self;
}

pub trait Inverse
where
    Self: Sized + Zero,
{
    /// Multiplicative inverse, or [`MathError::DivisionByZero`] for zero.
    fn inverse(&self) -> Result<Self, MathError>;

    fn inverse_or_zero(&self) -> Self {
        self.inverse().unwrap_or_else(|_| Self::zero())
    }
}

pub trait AddGroup:
    Copy
    + ConstZero
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
{
}

impl<T> AddGroup for T where
    T: Copy
        + ConstZero
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + AddAssign
        + SubAssign
{
}

pub trait MulGroup: Copy + ConstOne + One + Mul<Output = Self> + MulAssign {}

impl<T> MulGroup for T where
    T: Copy + ConstOne + One + Mul<Output = T> + MulAssign
{
}

pub trait FieldCore:
    Debug + Display + Default + Eq + Serialize + DeserializeOwned + Hash
{
}

impl<T> FieldCore for T where
    T: Debug + Display + Default + Eq + Serialize + DeserializeOwned + Hash
{
}

pub trait FiniteField:
    AddGroup
    + MulGroup
    + FieldCore
    + Neg<Output = Self>
    + Inverse
    + ModPowU32
    + Send
    + Sync
{
    /// Canonical fixed-width little-endian encoding.
    fn to_le_bytes(&self) -> Vec<u8>;

    #[inline(always)]
    fn square(self) -> Self {
        self * self
    }
}

#[cfg(test)]
mod tests {
    use test_strategy::proptest;

    use super::*;
    use crate::extension_field::ExtensionFieldElement;
    use crate::field_element::FieldElement;

    fn field_laws_hold<FF: FiniteField>(a: FF, b: FF, c: FF) -> bool {
        let distributes = a * (b + c) == a * b + a * c;
        let commutes = a * b == b * a && a + b == b + a;
        let negates = (a + -a).is_zero();
        let squares = a.square() == a * a;
        let inverts = a.is_zero() || (a * a.inverse_or_zero()).is_one();
        distributes && commutes && negates && squares && inverts
    }

    #[proptest]
    fn base_field_satisfies_field_laws(
        a: FieldElement,
        b: FieldElement,
        c: FieldElement,
    ) {
        proptest::prop_assert!(field_laws_hold(a, b, c));
    }

    #[proptest]
    fn extension_field_satisfies_field_laws(
        a: ExtensionFieldElement,
        b: ExtensionFieldElement,
        c: ExtensionFieldElement,
    ) {
        proptest::prop_assert!(field_laws_hold(a, b, c));
    }

    #[test]
    fn encodings_have_declared_widths() {
        assert_eq!(FieldElement::BYTES, FieldElement::ONE.to_le_bytes().len());
        assert_eq!(
            ExtensionFieldElement::BYTES,
            ExtensionFieldElement::U.to_le_bytes().len()
        );
    }
}
