use super::{PublicKey, SecretKey};
use hashing::canonical_hash;
use std::fmt;

#[derive(Clone)]
pub struct Keypair {
    pub pk: PublicKey,
    pub sk: SecretKey,
}

impl Keypair {
    pub fn random() -> Self {
        Self::from_secret_key(SecretKey::random())
    }

    /// Generates a reproducible keypair for `index`. For tests and testnets only.
    pub fn deterministic(index: u64) -> Self {
        let mut ikm = canonical_hash(&index.to_be_bytes());
        loop {
            if let Ok(sk) = SecretKey::from_ikm(&ikm) {
                return Self::from_secret_key(sk);
            }
            ikm = canonical_hash(&ikm);
        }
    }

    pub fn from_secret_key(sk: SecretKey) -> Self {
        Self {
            pk: sk.public_key(),
            sk,
        }
    }
}

impl fmt::Debug for Keypair {
    /// Defers to `self.pk` to avoid leaking the secret key.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.pk.fmt(f)
    }
}
