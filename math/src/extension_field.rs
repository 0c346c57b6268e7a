//! Quadratic extension 𝔽_{p²} = 𝔽_p\[u\] / (u² − β).
//!
//! β is [`FieldElement::NON_RESIDUE`]. Elements are `c0 + c1·u`, stored as a
//! pair of base field elements. The extension introduces no modulus of its
//! own; every component is kept canonical by [`FieldElement`].
//!
//! Nothing here depends on the particular modulus: the arithmetic only relies
//! on the base field's contract (canonical elements, exact add/sub/mul, a
//! fallible inverse) and on β being a non-square in it.
//!
//! All arithmetic is by value on a `Copy` type. The compound assignments
//! (`+=`, `-=`, `*=`) copy both operands before the receiver is written, so
//! `z *= z` and `z += z` give the same bits as `z * z` and `z + z`.

use std::convert::TryFrom;
use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

use arbitrary::Arbitrary;
use arbitrary::Unstructured;
use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;

use crate::error::{MathError, ParseFieldElementError};
use crate::field_element::FieldElement;
use crate::traits::*;

/// Element `c0 + c1·u` of the quadratic extension of [`FieldElement`].
#[derive(
    Debug, Copy, Clone, Default, Hash, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct ExtensionFieldElement {
    pub c0: FieldElement,
    pub c1: FieldElement,
}

/// Simplifies constructing [ExtensionFieldElement]s.
///
/// Each coefficient accepts anything [`FieldElement::from`] accepts. With a
/// single argument the result is the embedded base field element.
///
/// # Examples
///
/// ```
/// use math::prelude::*;
/// let a = xfe!(3, 4);
/// let b = xfe!(1, -4);
/// assert_eq!(a + b, xfe!(4));
/// ```
#[macro_export]
macro_rules! xfe {
    ($c0:expr) => {
        $crate::extension_field::ExtensionFieldElement::new(
            $crate::field_element::FieldElement::from($c0),
            $crate::field_element::FieldElement::new(0),
        )
    };
    ($c0:expr, $c1:expr) => {
        $crate::extension_field::ExtensionFieldElement::new(
            $crate::field_element::FieldElement::from($c0),
            $crate::field_element::FieldElement::from($c1),
        )
    };
}

impl ExtensionFieldElement {
    /// Width of [`to_bytes`][Self::to_bytes]: `c0` then `c1`.
    pub const BYTES: usize = 2 * FieldElement::BYTES;

    /// β, with `u² = β`.
    pub const NON_RESIDUE: FieldElement = FieldElement::NON_RESIDUE;

    /// The adjoined root `u`.
    pub const U: Self = Self::new(FieldElement::ZERO, FieldElement::ONE);

    #[inline]
    pub const fn new(c0: FieldElement, c1: FieldElement) -> Self {
        Self { c0, c1 }
    }

    /// `c0 − c1·u`, the image under the Frobenius map.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// `c0² − β·c1²`, i.e. `self · self.conjugate()`.
    ///
    /// Zero exactly when `self` is zero, because β is not a square.
    #[inline]
    pub fn norm(self) -> FieldElement {
        self.c0.square() - Self::NON_RESIDUE * self.c1.square()
    }

    /// Concatenation of the canonical encodings of `c0` and `c1`.
    pub fn to_bytes(&self) -> [u8; ExtensionFieldElement::BYTES] {
        let mut bytes = [0u8; ExtensionFieldElement::BYTES];
        let (lo, hi) = bytes.split_at_mut(FieldElement::BYTES);
        lo.copy_from_slice(&self.c0.to_bytes());
        hi.copy_from_slice(&self.c1.to_bytes());
        bytes
    }

    /// Inverse of [`to_bytes`][Self::to_bytes].
    ///
    /// Fails with [`MathError::InvalidEncoding`] when either half is not a
    /// canonical base field element.
    pub fn from_bytes(
        bytes: &[u8; ExtensionFieldElement::BYTES],
    ) -> Result<Self, MathError> {
        let (lo, hi) = bytes.split_at(FieldElement::BYTES);
        let c0 = FieldElement::try_from(lo)?;
        let c1 = FieldElement::try_from(hi)?;
        Ok(Self::new(c0, c1))
    }
}

impl<'a> Arbitrary<'a> for ExtensionFieldElement {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::new(u.arbitrary()?, u.arbitrary()?))
    }
}

impl rand::distributions::Distribution<ExtensionFieldElement>
    for rand::distributions::Standard
{
    fn sample<R: rand::Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> ExtensionFieldElement {
        ExtensionFieldElement::new(rng.gen(), rng.gen())
    }
}

impl fmt::Display for ExtensionFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} + {}·u)", self.c0, self.c1)
    }
}

impl From<FieldElement> for ExtensionFieldElement {
    fn from(value: FieldElement) -> Self {
        Self::new(value, FieldElement::ZERO)
    }
}

impl From<ExtensionFieldElement> for [u8; ExtensionFieldElement::BYTES] {
    fn from(xfe: ExtensionFieldElement) -> Self {
        xfe.to_bytes()
    }
}

impl TryFrom<&[u8]> for ExtensionFieldElement {
    type Error = MathError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array = <&[u8; ExtensionFieldElement::BYTES]>::try_from(bytes)
            .map_err(|_| {
                ParseFieldElementError::num_bytes(Self::BYTES, bytes.len())
            })?;
        Self::from_bytes(array)
    }
}

impl Zero for ExtensionFieldElement {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }
}

impl ConstZero for ExtensionFieldElement {
    const ZERO: Self = Self::new(FieldElement::ZERO, FieldElement::ZERO);
}

impl One for ExtensionFieldElement {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_one(&self) -> bool {
        self == &Self::ONE
    }
}

impl ConstOne for ExtensionFieldElement {
    const ONE: Self = Self::new(FieldElement::ONE, FieldElement::ZERO);
}

impl Add for ExtensionFieldElement {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl Sub for ExtensionFieldElement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl Neg for ExtensionFieldElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}

impl Mul for ExtensionFieldElement {
    type Output = Self;

    /// `(a0 + a1·u)(b0 + b1·u) = (a0·b0 + β·a1·b1) + (a0·b1 + a1·b0)·u`,
    /// with the cross term computed Karatsuba style.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let Self { c0: a0, c1: a1 } = self;
        let Self { c0: b0, c1: b1 } = rhs;

        let v0 = a0 * b0;
        let v1 = a1 * b1;
        let c0 = v0 + Self::NON_RESIDUE * v1;
        let c1 = (a0 + a1) * (b0 + b1) - v0 - v1;

        Self::new(c0, c1)
    }
}

impl Mul<FieldElement> for ExtensionFieldElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: FieldElement) -> Self {
        Self::new(self.c0 * rhs, self.c1 * rhs)
    }
}

impl AddAssign for ExtensionFieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl SubAssign for ExtensionFieldElement {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs
    }
}

impl MulAssign for ExtensionFieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs
    }
}

impl Inverse for ExtensionFieldElement {
    /// `(a + b·u)⁻¹ = (a − b·u) · (a² − β·b²)⁻¹`, one base field inversion.
    fn inverse(&self) -> Result<Self, MathError> {
        let norm_inverse = self.norm().inverse()?;
        Ok(self.conjugate() * norm_inverse)
    }
}

impl ModPowU32 for ExtensionFieldElement {
    fn mod_pow_u32(&self, exp: u32) -> Self {
        let mut acc = Self::ONE;
        let bit_length = u32::BITS - exp.leading_zeros();
        for i in (0..bit_length).rev() {
            acc = acc.square();
            if exp & (1 << i) != 0 {
                acc *= *self;
            }
        }
        acc
    }
}

impl FiniteField for ExtensionFieldElement {
    fn to_le_bytes(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    /// `(a0 + a1·u)² = (a0² + β·a1²) + 2·a0·a1·u`.
    ///
    /// Field arithmetic is exact, so this equals `self * self` bit for bit.
    #[inline]
    fn square(self) -> Self {
        let Self { c0: a0, c1: a1 } = self;
        let cross = a0 * a1;
        Self::new(a0.square() + Self::NON_RESIDUE * a1.square(), cross + cross)
    }
}

#[cfg(test)]
mod extension_field_element_test {
    use proptest::prelude::*;
    use proptest_arbitrary_interop::arb;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use test_strategy::proptest;

    use super::*;
    use crate::xfe;

    const TEST_TIMES: usize = 1 << 10;

    impl proptest::arbitrary::Arbitrary for ExtensionFieldElement {
        type Parameters = ();

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            arb().boxed()
        }

        type Strategy = BoxedStrategy<Self>;
    }

    fn seeded_rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(0xf2)
    }

    #[proptest]
    fn square_is_mul_with_self(x: ExtensionFieldElement) {
        prop_assert_eq!(x * x, x.square());
    }

    #[proptest]
    fn aliased_square_matches_aliased_mul(x: ExtensionFieldElement) {
        let mut got = x;
        got = got.square();
        let mut want = x;
        want *= want;
        prop_assert_eq!(got.to_bytes(), want.to_bytes());
    }

    #[proptest]
    fn aliased_add_matches_non_aliased(x: ExtensionFieldElement) {
        let expected = x + x;
        let mut z = x;
        z += z;
        prop_assert_eq!(expected, z);
    }

    #[proptest]
    fn aliased_sub_is_zero(x: ExtensionFieldElement) {
        let mut z = x;
        z -= z;
        prop_assert!(z.is_zero());
    }

    #[proptest]
    fn aliased_mul_assign_matches_mul(
        x: ExtensionFieldElement,
        y: ExtensionFieldElement,
    ) {
        let expected = x * y;
        let mut z = x;
        z *= y;
        prop_assert_eq!(expected, z);
    }

    #[test]
    fn mul_by_inverse_then_self_recovers_other_operand() {
        let mut rng = seeded_rng();
        for _ in 0..TEST_TIMES {
            let x: ExtensionFieldElement = rng.gen();
            let y: ExtensionFieldElement = rng.gen();
            if x.is_zero() {
                continue;
            }

            // x⁻¹·y·x − y = 0
            let mut z = x.inverse().unwrap();
            z *= y;
            z *= x;
            z -= y;
            assert!(z.is_zero(), "x = {x}, y = {y}");
        }
    }

    #[proptest]
    fn multiplication_with_inverse_gives_identity(
        #[filter(!#x.is_zero())] x: ExtensionFieldElement,
    ) {
        prop_assert!((x.inverse().unwrap() * x).is_one());
    }

    #[test]
    fn inverse_of_zero_is_division_by_zero() {
        assert_eq!(
            Err(MathError::DivisionByZero),
            ExtensionFieldElement::ZERO.inverse()
        );
    }

    #[test]
    fn inverse_of_pure_imaginary_element() {
        // u⁻¹ = u / β
        let inverse = ExtensionFieldElement::U.inverse().unwrap();
        let beta_inverse =
            ExtensionFieldElement::NON_RESIDUE.inverse().unwrap();
        assert_eq!(ExtensionFieldElement::U * beta_inverse, inverse);
    }

    #[test]
    fn difference_of_squares() {
        let mut rng = seeded_rng();
        for _ in 0..TEST_TIMES {
            let x: ExtensionFieldElement = rng.gen();
            let y: ExtensionFieldElement = rng.gen();

            // (x+y)(x−y) = x² − y²
            let mut l0 = x + y;
            let l1 = x - y;
            l0 *= l1;
            let mut r0 = x.square();
            r0 -= y.square();
            assert_eq!(l0, r0, "x = {x}, y = {y}");
        }
    }

    #[test]
    fn u_squared_is_non_residue() {
        let u = ExtensionFieldElement::U;
        assert_eq!(xfe!(5u32), u.square());
        assert_eq!(
            ExtensionFieldElement::from(ExtensionFieldElement::NON_RESIDUE),
            u * u
        );
    }

    #[proptest]
    fn norm_is_product_with_conjugate(x: ExtensionFieldElement) {
        prop_assert_eq!(
            ExtensionFieldElement::from(x.norm()),
            x * x.conjugate()
        );
    }

    #[proptest]
    fn norm_is_multiplicative(
        x: ExtensionFieldElement,
        y: ExtensionFieldElement,
    ) {
        prop_assert_eq!((x * y).norm(), x.norm() * y.norm());
    }

    #[proptest]
    fn embedded_base_field_multiplies_like_base_field(
        a: FieldElement,
        b: FieldElement,
    ) {
        let product =
            ExtensionFieldElement::from(a) * ExtensionFieldElement::from(b);
        prop_assert_eq!(ExtensionFieldElement::from(a * b), product);
    }

    #[proptest]
    fn mod_pow_agrees_with_repeated_multiplication(
        x: ExtensionFieldElement,
        #[strategy(0u32..64)] exp: u32,
    ) {
        let repeated =
            (0..exp).fold(ExtensionFieldElement::ONE, |acc, _| acc * x);
        prop_assert_eq!(repeated, x.mod_pow_u32(exp));
    }

    #[proptest]
    fn bytes_round_trip(x: ExtensionFieldElement) {
        let bytes = x.to_bytes();
        let decoded = ExtensionFieldElement::try_from(&bytes[..])?;
        prop_assert_eq!(x, decoded);
    }

    #[proptest]
    fn byte_layout_is_c0_then_c1(x: ExtensionFieldElement) {
        let bytes = x.to_bytes();
        prop_assert_eq!(&x.c0.to_bytes()[..], &bytes[..FieldElement::BYTES]);
        prop_assert_eq!(&x.c1.to_bytes()[..], &bytes[FieldElement::BYTES..]);
    }

    #[test]
    fn wrong_length_is_invalid_encoding() {
        for len in [0, 4, 7, 9, 16] {
            let buf = vec![0u8; len];
            let err = ExtensionFieldElement::try_from(&buf[..]).unwrap_err();
            assert_eq!(
                MathError::InvalidEncoding(
                    ParseFieldElementError::InvalidNumBytes {
                        expected: ExtensionFieldElement::BYTES,
                        found: len,
                    }
                ),
                err
            );
        }
    }

    #[proptest]
    fn non_canonical_half_is_invalid_encoding(
        x: ExtensionFieldElement,
        #[strategy(FieldElement::P..)] too_big: u32,
        high_half: bool,
    ) {
        let mut bytes = x.to_bytes();
        let range = if high_half {
            FieldElement::BYTES..ExtensionFieldElement::BYTES
        } else {
            0..FieldElement::BYTES
        };
        bytes[range].copy_from_slice(&too_big.to_le_bytes());
        let err = ExtensionFieldElement::from_bytes(&bytes).unwrap_err();
        prop_assert_eq!(
            MathError::InvalidEncoding(ParseFieldElementError::NotCanonical(
                too_big as u64
            )),
            err
        );
    }

    #[proptest]
    fn serialization_and_deserialization_to_and_from_json_is_identity(
        x: ExtensionFieldElement,
    ) {
        let serialized = serde_json::to_string(&x).unwrap();
        let deserialized: ExtensionFieldElement =
            serde_json::from_str(&serialized).unwrap();
        prop_assert_eq!(x, deserialized);
    }

    #[test]
    fn zero_and_one() {
        assert!(ExtensionFieldElement::zero().is_zero());
        assert!(!ExtensionFieldElement::U.is_zero());
        assert!(!xfe!(0, 1).is_one());
        assert!(xfe!(1).is_one());
        assert_eq!(
            ExtensionFieldElement::default(),
            ExtensionFieldElement::ZERO
        );
    }

    #[test]
    fn display_test() {
        assert_eq!("(7 + -1·u)", format!("{}", xfe!(7, -1)));
    }
}
