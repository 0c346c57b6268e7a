use thiserror::Error;

/// Result type specialized for signature operations.
pub type SignResult<T> = std::result::Result<T, SignError>;

/// Errors that can arise while deriving, encoding or using Dilithium5 keys.
///
/// `InvalidSeedSize` and `ContextNotSupported` describe caller bugs; the
/// scheme methods panic with their message instead of returning them.
/// Verification never produces an error, only `false`.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SignError {
    #[error("entropy source failed: {0}")]
    EntropySource(#[source] rand::Error),
    #[error("seed must be {expected} bytes, got {found}")]
    InvalidSeedSize { expected: usize, found: usize },
    #[error("packed public key must be {expected} bytes, got {found}")]
    PublicKeySize { expected: usize, found: usize },
    #[error("packed private key must be {expected} bytes, got {found}")]
    PrivateKeySize { expected: usize, found: usize },
    #[error("malformed public key: {0}")]
    MalformedPublicKey(&'static str),
    #[error("malformed private key: {0}")]
    MalformedPrivateKey(&'static str),
    #[error("signing context is not supported by this scheme")]
    ContextNotSupported,
    #[error("signature generation failed: {0}")]
    Signing(&'static str),
}
