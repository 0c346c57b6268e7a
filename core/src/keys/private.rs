use std::fmt;

use zeroize::Zeroizing;

use super::PublicKey;
use crate::error::{SignError, SignResult};
use crate::lattice::{self, CorePrivateKey};
use crate::params::{PRIVATE_KEY_SIZE, SIGNATURE_SIZE};
use crate::scheme::{Dilithium5, SCHEME};
use crate::sign::{sign_to, Signature};

/// Dilithium5 private key.
#[derive(Clone)]
pub struct PrivateKey {
    pub(crate) core: CorePrivateKey,
}

impl PrivateKey {
    pub(crate) fn from_core(core: CorePrivateKey) -> Self {
        Self { core }
    }

    /// Decode a packed private key.
    pub fn from_packed(buf: &[u8; PRIVATE_KEY_SIZE]) -> SignResult<Self> {
        lattice::decode_private(*buf)
            .map(Self::from_core)
            .map_err(SignError::MalformedPrivateKey)
    }

    /// Fixed-width encoding of the key. The bytes are a copy.
    pub fn pack(&self) -> [u8; PRIVATE_KEY_SIZE] {
        lattice::encode_private(&self.core)
    }

    /// Replace this key with the one encoded in `buf`.
    ///
    /// On error `self` is left untouched.
    pub fn unpack(&mut self, buf: &[u8; PRIVATE_KEY_SIZE]) -> SignResult<()> {
        *self = Self::from_packed(buf)?;
        Ok(())
    }

    /// Packed key as an owned buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pack().to_vec()
    }

    /// Public key matching this private key.
    pub fn public(&self) -> PublicKey {
        PublicKey::from_core(lattice::public_from_private(&self.core))
    }

    /// Sign `message` into a freshly allocated signature.
    pub fn sign(&self, message: &[u8]) -> SignResult<Signature> {
        let mut signature = [0u8; SIGNATURE_SIZE];
        sign_to(self, message, &mut signature)?;
        Ok(signature)
    }

    pub fn scheme(&self) -> &'static Dilithium5 {
        &SCHEME
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = SignError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let buf = <&[u8; PRIVATE_KEY_SIZE]>::try_from(bytes).map_err(|_| {
            log::debug!("rejecting private key of {} bytes", bytes.len());
            SignError::PrivateKeySize {
                expected: PRIVATE_KEY_SIZE,
                found: bytes.len(),
            }
        })?;
        Self::from_packed(buf)
    }
}

impl PartialEq for PrivateKey {
    /// Compares the packed encodings without an early exit.
    fn eq(&self, other: &Self) -> bool {
        let lhs = Zeroizing::new(self.pack());
        let rhs = Zeroizing::new(other.pack());
        lhs.iter().zip(rhs.iter()).fold(0u8, |acc, (a, b)| acc | (a ^ b)) == 0
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}
