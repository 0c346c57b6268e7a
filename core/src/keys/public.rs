use std::fmt;

use crate::error::{SignError, SignResult};
use crate::lattice::{self, CorePublicKey};
use crate::params::PUBLIC_KEY_SIZE;
use crate::scheme::{Dilithium5, SCHEME};

/// Dilithium5 public key.
#[derive(Clone)]
pub struct PublicKey {
    pub(crate) core: CorePublicKey,
}

impl PublicKey {
    pub(crate) fn from_core(core: CorePublicKey) -> Self {
        Self { core }
    }

    /// Decode a packed public key.
    pub fn from_packed(buf: &[u8; PUBLIC_KEY_SIZE]) -> SignResult<Self> {
        lattice::decode_public(*buf)
            .map(Self::from_core)
            .map_err(SignError::MalformedPublicKey)
    }

    /// Fixed-width encoding of the key. The bytes are a copy.
    pub fn pack(&self) -> [u8; PUBLIC_KEY_SIZE] {
        lattice::encode_public(&self.core)
    }

    /// Replace this key with the one encoded in `buf`.
    ///
    /// On error `self` is left untouched.
    pub fn unpack(&mut self, buf: &[u8; PUBLIC_KEY_SIZE]) -> SignResult<()> {
        *self = Self::from_packed(buf)?;
        Ok(())
    }

    /// Packed key as an owned buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pack().to_vec()
    }

    /// Check `signature` on `message`; see [`crate::verify`].
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        crate::sign::verify(self, message, signature)
    }

    pub fn scheme(&self) -> &'static Dilithium5 {
        &SCHEME
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = SignError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let buf = <&[u8; PUBLIC_KEY_SIZE]>::try_from(bytes).map_err(|_| {
            log::debug!("rejecting public key of {} bytes", bytes.len());
            SignError::PublicKeySize {
                expected: PUBLIC_KEY_SIZE,
                found: bytes.len(),
            }
        })?;
        Self::from_packed(buf)
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.pack() == other.pack()
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let packed = self.pack();
        f.debug_struct("PublicKey")
            .field("prefix", &format_args!("{:02x?}", &packed[..8]))
            .finish_non_exhaustive()
    }
}
