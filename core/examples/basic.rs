use dilithium_core::{PublicKey, Scheme, generate_key, scheme};

fn main() {
    let message = b"example Dilithium5 signing message";
    let (pk, sk) = generate_key().expect("key generation should succeed");

    let packed = pk.pack();
    let mut restored =
        PublicKey::try_from(&packed[..]).expect("packed key should unpack");
    restored.unpack(&packed).expect("unpacking twice is fine");
    assert_eq!(pk, restored);

    let signature = sk.sign(message).expect("signing should succeed");
    assert!(
        restored.verify(message, &signature),
        "signature should verify with the restored public key"
    );

    let s = scheme();
    println!(
        "{} (OID {}, TLS 0x{:04x})",
        s.name(),
        s.oid(),
        s.tls_identifier()
    );
    println!("Public key prefix: {:02X?}", &packed[..16]);
    println!("Signature is {} bytes", signature.len());
}
