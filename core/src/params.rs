use std::fmt;

use crate::lattice;

/// Seed length accepted by [`new_key_from_seed`](crate::new_key_from_seed).
///
/// Independent of the core's own seed width; the two are bridged by SHAKE256.
pub const SEED_SIZE: usize = 32;

/// Length in bytes of a packed public key.
pub const PUBLIC_KEY_SIZE: usize = lattice::PUBLIC_KEY_SIZE;

/// Length in bytes of a packed private key.
pub const PRIVATE_KEY_SIZE: usize = lattice::PRIVATE_KEY_SIZE;

/// Length in bytes of a signature.
pub const SIGNATURE_SIZE: usize = lattice::SIGNATURE_SIZE;

/// Experimental TLS code point for this scheme.
pub const TLS_IDENTIFIER: u16 = 0xfe09;

/// `1.3.6.1.4.1.2.267.6.6.5`
pub const OID: ObjectIdentifier =
    ObjectIdentifier::new(&[1, 3, 6, 1, 4, 1, 2, 267, 6, 6, 5]);

pub const SCHEME_NAME: &str = "Dilithium5";

/// ASN.1 object identifier as a list of arcs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectIdentifier(&'static [u32]);

impl ObjectIdentifier {
    pub const fn new(arcs: &'static [u32]) -> Self {
        Self(arcs)
    }

    pub const fn arcs(&self) -> &'static [u32] {
        self.0
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut arcs = self.0.iter();
        if let Some(first) = arcs.next() {
            write!(f, "{first}")?;
        }
        arcs.try_for_each(|arc| write!(f, ".{arc}"))
    }
}

/// Static description of a signature scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchemeInfo {
    pub name: &'static str,
    pub public_key_size: usize,
    pub private_key_size: usize,
    pub signature_size: usize,
    pub seed_size: usize,
    pub tls_identifier: u16,
    pub oid: ObjectIdentifier,
    pub supports_context: bool,
}

/// Descriptor of the Dilithium5 binding.
pub const DILITHIUM5_INFO: SchemeInfo = SchemeInfo {
    name: SCHEME_NAME,
    public_key_size: PUBLIC_KEY_SIZE,
    private_key_size: PRIVATE_KEY_SIZE,
    signature_size: SIGNATURE_SIZE,
    seed_size: SEED_SIZE,
    tls_identifier: TLS_IDENTIFIER,
    oid: OID,
    supports_context: false,
};
