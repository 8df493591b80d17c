use super::{blst_core, Error, PublicKey, Signature, DST};
use rand::RngCore;

/// The minimum number of bytes of input key material accepted by `SecretKey::from_ikm`.
pub const IKM_MIN_BYTES: usize = 32;

#[derive(Clone)]
pub struct SecretKey(blst_core::SecretKey);

impl SecretKey {
    /// Generate a new key from `rand::thread_rng` entropy.
    pub fn random() -> Self {
        let mut ikm = [0u8; IKM_MIN_BYTES];
        rand::thread_rng().fill_bytes(&mut ikm);
        loop {
            if let Ok(sk) = Self::from_ikm(&ikm) {
                return sk;
            }
            rand::thread_rng().fill_bytes(&mut ikm);
        }
    }

    /// Derive a key from some input key material (at least 32 bytes).
    pub fn from_ikm(ikm: &[u8]) -> Result<Self, Error> {
        if ikm.len() < IKM_MIN_BYTES {
            return Err(Error::InvalidByteLength {
                got: ikm.len(),
                expected: IKM_MIN_BYTES,
            });
        }
        blst_core::SecretKey::key_gen(ikm, &[])
            .map(SecretKey)
            .map_err(Into::into)
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_point(self.0.sk_to_pk())
    }

    /// Sign some message. The message is hashed to the curve with `DST`.
    pub fn sign(&self, msg: &[u8]) -> Signature {
        Signature::from_point(self.0.sign(msg, DST, &[]))
    }
}
