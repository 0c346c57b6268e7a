//! Algorithm-agnostic signature scheme surface and its Dilithium5 binding.

use crate::error::{SignError, SignResult};
use crate::keys::{self, PrivateKey, PublicKey};
use crate::params::{
    DILITHIUM5_INFO, ObjectIdentifier, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE,
    SEED_SIZE, SchemeInfo,
};
use crate::sign;

/// Per-call signing options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignatureOpts {
    /// Domain-separation context. Must be empty for schemes without
    /// context support.
    pub context: String,
}

impl SignatureOpts {
    pub fn with_context(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

/// A signature scheme with fixed-width keys and detached signatures.
///
/// Keys are bound to their scheme through the associated types, so handing a
/// key of one scheme to another does not compile.
pub trait Scheme: Send + Sync {
    type PublicKey;
    type PrivateKey;

    fn info(&self) -> &'static SchemeInfo;

    fn name(&self) -> &'static str {
        self.info().name
    }

    fn public_key_size(&self) -> usize {
        self.info().public_key_size
    }

    fn private_key_size(&self) -> usize {
        self.info().private_key_size
    }

    fn signature_size(&self) -> usize {
        self.info().signature_size
    }

    fn seed_size(&self) -> usize {
        self.info().seed_size
    }

    fn tls_identifier(&self) -> u16 {
        self.info().tls_identifier
    }

    fn oid(&self) -> ObjectIdentifier {
        self.info().oid
    }

    fn supports_context(&self) -> bool {
        self.info().supports_context
    }

    fn generate_key(&self) -> SignResult<(Self::PublicKey, Self::PrivateKey)>;

    /// Sign `message`.
    ///
    /// # Panics
    ///
    /// Panics if `opts` carries a context the scheme cannot honour.
    fn sign(
        &self,
        sk: &Self::PrivateKey,
        message: &[u8],
        opts: Option<&SignatureOpts>,
    ) -> SignResult<Vec<u8>>;

    /// # Panics
    ///
    /// Panics if `opts` carries a context the scheme cannot honour.
    fn verify(
        &self,
        pk: &Self::PublicKey,
        message: &[u8],
        signature: &[u8],
        opts: Option<&SignatureOpts>,
    ) -> bool;

    /// Derive a key pair from `seed`.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is not [`Scheme::seed_size`] bytes long.
    fn derive_key(&self, seed: &[u8]) -> (Self::PublicKey, Self::PrivateKey);

    fn unmarshal_binary_public_key(
        &self,
        bytes: &[u8],
    ) -> SignResult<Self::PublicKey>;

    fn unmarshal_binary_private_key(
        &self,
        bytes: &[u8],
    ) -> SignResult<Self::PrivateKey>;
}

/// The Dilithium5 binding. Stateless; use [`SCHEME`] or [`scheme()`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dilithium5;

pub static SCHEME: Dilithium5 = Dilithium5;

pub fn scheme() -> &'static Dilithium5 {
    &SCHEME
}

impl Dilithium5 {
    fn check_context(&self, opts: Option<&SignatureOpts>) {
        let wants_context = opts.is_some_and(|opts| !opts.context.is_empty());
        if wants_context && !self.supports_context() {
            panic!("{}", SignError::ContextNotSupported);
        }
    }
}

impl Scheme for Dilithium5 {
    type PublicKey = PublicKey;
    type PrivateKey = PrivateKey;

    fn info(&self) -> &'static SchemeInfo {
        &DILITHIUM5_INFO
    }

    fn generate_key(&self) -> SignResult<(PublicKey, PrivateKey)> {
        keys::generate_key()
    }

    fn sign(
        &self,
        sk: &PrivateKey,
        message: &[u8],
        opts: Option<&SignatureOpts>,
    ) -> SignResult<Vec<u8>> {
        self.check_context(opts);
        let mut signature = vec![0u8; self.signature_size()];
        sign::sign_to(sk, message, &mut signature)?;
        Ok(signature)
    }

    fn verify(
        &self,
        pk: &PublicKey,
        message: &[u8],
        signature: &[u8],
        opts: Option<&SignatureOpts>,
    ) -> bool {
        self.check_context(opts);
        let valid = sign::verify(pk, message, signature);
        if !valid {
            log::debug!("Dilithium5 signature rejected");
        }
        valid
    }

    fn derive_key(&self, seed: &[u8]) -> (PublicKey, PrivateKey) {
        match <&[u8; SEED_SIZE]>::try_from(seed) {
            Ok(seed) => keys::new_key_from_seed(seed),
            Err(_) => panic!(
                "{}",
                SignError::InvalidSeedSize {
                    expected: SEED_SIZE,
                    found: seed.len(),
                }
            ),
        }
    }

    fn unmarshal_binary_public_key(
        &self,
        bytes: &[u8],
    ) -> SignResult<PublicKey> {
        debug_assert_eq!(PUBLIC_KEY_SIZE, self.public_key_size());
        PublicKey::try_from(bytes)
    }

    fn unmarshal_binary_private_key(
        &self,
        bytes: &[u8],
    ) -> SignResult<PrivateKey> {
        debug_assert_eq!(PRIVATE_KEY_SIZE, self.private_key_size());
        PrivateKey::try_from(bytes)
    }
}
