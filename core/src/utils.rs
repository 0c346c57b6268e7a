//! Small helpers to keep code DRY and straightforward.

use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::{SignError, SignResult};
use crate::hash::shake256_into;
use crate::lattice;
use crate::params::SEED_SIZE;

/// Read exactly [`SEED_SIZE`] bytes from `rng`.
pub(crate) fn read_seed<R>(
    rng: &mut R,
) -> SignResult<Zeroizing<[u8; SEED_SIZE]>>
where
    R: RngCore + ?Sized,
{
    let mut seed = Zeroizing::new([0u8; SEED_SIZE]);
    rng.try_fill_bytes(&mut seed[..]).map_err(|err| {
        log::warn!("entropy source failed while reading a key seed: {err}");
        SignError::EntropySource(err)
    })?;
    Ok(seed)
}

/// Stretch the caller's seed into the seed the lattice core expects.
pub(crate) fn expand_seed(
    seed: &[u8; SEED_SIZE],
) -> Zeroizing<[u8; lattice::SEED_SIZE]> {
    let mut inner = Zeroizing::new([0u8; lattice::SEED_SIZE]);
    shake256_into(seed, &mut inner[..]);
    inner
}
