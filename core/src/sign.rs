use crate::error::{SignError, SignResult};
use crate::keys::{PrivateKey, PublicKey};
use crate::lattice;
use crate::params::SIGNATURE_SIZE;

/// Detached Dilithium5 signature.
pub type Signature = [u8; SIGNATURE_SIZE];

/// Sign `message` with `sk`, writing the signature into `signature`.
///
/// Signing is hedged: two calls on the same message produce different,
/// equally valid signatures.
///
/// # Panics
///
/// Panics if `signature` is shorter than [`SIGNATURE_SIZE`]. Only the first
/// [`SIGNATURE_SIZE`] bytes are written.
pub fn sign_to(
    sk: &PrivateKey,
    message: &[u8],
    signature: &mut [u8],
) -> SignResult<()> {
    assert!(
        signature.len() >= SIGNATURE_SIZE,
        "signature buffer must be at least {SIGNATURE_SIZE} bytes, got {}",
        signature.len()
    );
    let sig = lattice::sign(&sk.core, message).map_err(|err| {
        log::warn!("Dilithium5 signing failed: {err}");
        SignError::Signing(err)
    })?;
    signature[..SIGNATURE_SIZE].copy_from_slice(&sig);
    Ok(())
}

/// Check that `signature` is a valid signature of `message` under `pk`.
///
/// Malformed input never panics; a signature of the wrong length is
/// simply rejected.
pub fn verify(pk: &PublicKey, message: &[u8], signature: &[u8]) -> bool {
    match <&Signature>::try_from(signature) {
        Ok(sig) => lattice::verify(&pk.core, message, sig),
        Err(_) => {
            log::trace!("rejecting signature of {} bytes", signature.len());
            false
        }
    }
}
