//! Dilithium5 key types and key generation.

mod keypair;
mod private;
mod public;

pub use keypair::{generate_key, generate_key_with_rng, new_key_from_seed};
pub use private::PrivateKey;
pub use public::PublicKey;
