pub use crate::{fe, xfe};
pub use crate::{
    error::MathError,
    extension_field::ExtensionFieldElement,
    field_element::FieldElement,
    traits::{FiniteField, Inverse, ModPowU32},
};
pub use num_traits::{ConstOne, ConstZero, One, Zero};
