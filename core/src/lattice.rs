//! Binding to the ML-DSA-87 core (the standardised Dilithium5 parameter set).
//!
//! This is the only module that names `fips204`; everything above it sees
//! fixed-width byte arrays and opaque key values.

use fips204::ml_dsa_87;
use fips204::traits::{KeyGen, SerDes, Signer, Verifier};

/// Seed width the core key generator consumes.
pub(crate) const SEED_SIZE: usize = 32;
pub(crate) const PUBLIC_KEY_SIZE: usize = ml_dsa_87::PK_LEN;
pub(crate) const PRIVATE_KEY_SIZE: usize = ml_dsa_87::SK_LEN;
pub(crate) const SIGNATURE_SIZE: usize = ml_dsa_87::SIG_LEN;

pub(crate) type CorePublicKey = ml_dsa_87::PublicKey;
pub(crate) type CorePrivateKey = ml_dsa_87::PrivateKey;

/// Empty context string: this binding never signs with a context.
const NO_CONTEXT: &[u8] = &[];

// Private key layout: rho (32) | key (32) | tr (64) | s1 (L polys) |
// s2 (K polys) | t0 (K polys). s1 and s2 pack `ETA - c` in 3 bits.
const L: usize = 7;
const K: usize = 8;
const ETA: u32 = 2;
const SECRET_OFFSET: usize = 32 + 32 + 64;
const SECRET_LEN: usize = (L + K) * 256 * 3 / 8;

pub(crate) fn keygen(
    seed: &[u8; SEED_SIZE],
) -> (CorePublicKey, CorePrivateKey) {
    ml_dsa_87::KG::keygen_from_seed(seed)
}

/// Hedged signing; the core draws fresh randomness for every call.
pub(crate) fn sign(
    sk: &CorePrivateKey,
    message: &[u8],
) -> Result<[u8; SIGNATURE_SIZE], &'static str> {
    sk.try_sign(message, NO_CONTEXT)
}

pub(crate) fn verify(
    pk: &CorePublicKey,
    message: &[u8],
    signature: &[u8; SIGNATURE_SIZE],
) -> bool {
    pk.verify(message, signature, NO_CONTEXT)
}

pub(crate) fn public_from_private(sk: &CorePrivateKey) -> CorePublicKey {
    sk.get_public_key()
}

pub(crate) fn encode_public(pk: &CorePublicKey) -> [u8; PUBLIC_KEY_SIZE] {
    pk.clone().into_bytes()
}

pub(crate) fn decode_public(
    bytes: [u8; PUBLIC_KEY_SIZE],
) -> Result<CorePublicKey, &'static str> {
    CorePublicKey::try_from_bytes(bytes)
}

pub(crate) fn encode_private(sk: &CorePrivateKey) -> [u8; PRIVATE_KEY_SIZE] {
    sk.clone().into_bytes()
}

/// The core's decoder does not range check `s1` and `s2`; a key carrying an
/// out-of-range coefficient would not re-encode to the same bytes.
pub(crate) fn decode_private(
    bytes: [u8; PRIVATE_KEY_SIZE],
) -> Result<CorePrivateKey, &'static str> {
    if !secret_vectors_in_range(&bytes) {
        return Err("secret coefficient out of range");
    }
    CorePrivateKey::try_from_bytes(bytes)
}

/// Every packed `s1`/`s2` coefficient must lie in `[0, 2·ETA]`.
fn secret_vectors_in_range(bytes: &[u8; PRIVATE_KEY_SIZE]) -> bool {
    bytes[SECRET_OFFSET..SECRET_OFFSET + SECRET_LEN]
        .chunks_exact(3)
        .all(|chunk| {
            let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], 0]);
            (0..8).all(|i| (word >> (3 * i)) & 0b111 <= 2 * ETA)
        })
}
