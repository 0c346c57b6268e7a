//! Prime field arithmetic modulo 8380417 and its quadratic extension.

pub mod error;
pub mod extension_field;
pub mod field_element;
pub mod prelude;
pub mod traits;

pub use extension_field::ExtensionFieldElement;
pub use field_element::FieldElement;
