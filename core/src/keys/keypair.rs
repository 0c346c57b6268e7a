use rand::rngs::OsRng;
use rand::RngCore;

use super::{PrivateKey, PublicKey};
use crate::error::SignResult;
use crate::lattice;
use crate::params::SEED_SIZE;
use crate::utils::{expand_seed, read_seed};

/// Generate a fresh key pair from the operating system's entropy source.
pub fn generate_key() -> SignResult<(PublicKey, PrivateKey)> {
    generate_key_with_rng(&mut OsRng)
}

/// Generate a key pair from `SEED_SIZE` bytes read out of `rng`.
///
/// Fails only when `rng` cannot supply the seed.
pub fn generate_key_with_rng<R>(
    rng: &mut R,
) -> SignResult<(PublicKey, PrivateKey)>
where
    R: RngCore + ?Sized,
{
    let seed = read_seed(rng)?;
    Ok(new_key_from_seed(&seed))
}

/// Deterministically derive a key pair from a 32-byte seed.
///
/// The seed is stretched with SHAKE256 before it reaches the lattice key
/// generator, so equal seeds always give byte-identical keys.
pub fn new_key_from_seed(seed: &[u8; SEED_SIZE]) -> (PublicKey, PrivateKey) {
    let inner = expand_seed(seed);
    let (pk, sk) = lattice::keygen(&inner);
    log::debug!("derived Dilithium5 key pair from seed");
    (PublicKey::from_core(pk), PrivateKey::from_core(sk))
}
