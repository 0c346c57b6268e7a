use sha3::{
    Shake256,
    digest::{ExtendableOutput, Update, XofReader},
};

/// Hash helper that captures the shared mechanics of SHAKE-based XOFs.
fn squeeze_xof_into<Hash>(input: &[u8], out: &mut [u8])
where
    Hash: Default + Update + ExtendableOutput,
{
    let mut hasher = Hash::default();
    hasher.update(input);
    hasher.finalize_xof().read(out);
}

/// Fill `out` with SHAKE256(`input`).
pub fn shake256_into(input: &[u8], out: &mut [u8]) {
    squeeze_xof_into::<Shake256>(input, out)
}

#[cfg(test)]
pub(crate) fn shake256(out_len: usize, input: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; out_len];
    shake256_into(input, &mut out);
    out
}
