use std::num::ParseIntError;

use thiserror::Error;

use crate::field_element::FieldElement;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("invalid encoding: {0}")]
    InvalidEncoding(#[from] ParseFieldElementError),
    #[error("division by zero")]
    DivisionByZero,
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseFieldElementError {
    #[error("invalid `u32`")]
    ParseIntError(#[source] ParseIntError),
    #[error("incorrect number of bytes: {found} != {expected}")]
    InvalidNumBytes { expected: usize, found: usize },
    #[error(
        "non-canonical {0} >= {p} == `FieldElement::P`",
        p = FieldElement::P
    )]
    NotCanonical(u64),
}

impl ParseFieldElementError {
    pub(crate) const fn num_bytes(expected: usize, found: usize) -> Self {
        Self::InvalidNumBytes { expected, found }
    }
}
