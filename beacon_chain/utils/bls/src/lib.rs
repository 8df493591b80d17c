mod aggregate_public_key;
mod aggregate_signature;
mod keypair;
mod public_key;
mod secret_key;
mod signature;

pub use aggregate_public_key::AggregatePublicKey;
pub use aggregate_signature::AggregateSignature;
pub use keypair::Keypair;
pub use public_key::{PublicKey, PUBLIC_KEY_BYTES_LEN};
pub use secret_key::SecretKey;
pub use signature::{Signature, INFINITY_SIGNATURE, SIGNATURE_BYTES_LEN};

use blst::min_pk as blst_core;
use blst::BLST_ERROR as BlstError;
use hashing::proof_of_possession_hash;

/// Domain separation tag for every signature produced or verified by this crate.
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    BlstError(BlstError),
    InvalidByteLength { got: usize, expected: usize },
    /// An aggregate public key was requested over zero keys.
    EmptyAggregate,
}

impl From<BlstError> for Error {
    fn from(e: BlstError) -> Error {
        Error::BlstError(e)
    }
}

/// For some signature and public key, ensure that the signature message was the public key and it
/// was signed by the secret key that corresponds to that public key.
pub fn verify_proof_of_possession(sig: &Signature, pubkey: &PublicKey) -> bool {
    let hash = proof_of_possession_hash(&pubkey.as_bytes());
    sig.verify(&hash, pubkey)
}

pub fn create_proof_of_possession(keypair: &Keypair) -> Signature {
    let hash = proof_of_possession_hash(&keypair.pk.as_bytes());
    keypair.sk.sign(&hash)
}
