pub mod error;
pub mod hash;
pub mod keys;
mod lattice;
pub mod params;
pub mod scheme;
pub mod sign;
pub(crate) mod utils;

pub use error::{SignError, SignResult};
pub use keys::{
    PrivateKey, PublicKey, generate_key, generate_key_with_rng,
    new_key_from_seed,
};
pub use params::{
    PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, SEED_SIZE, SIGNATURE_SIZE,
};
pub use scheme::{Dilithium5, SCHEME, Scheme, SignatureOpts, scheme};
pub use sign::{Signature, sign_to, verify};
