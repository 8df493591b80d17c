use ethereum_hashing::{hash, hash32_concat, hash_fixed};

/// The length of every hash produced by this crate.
pub const HASH_BYTES: usize = 32;

/// Domain prefix for proof-of-possession messages.
const PROOF_OF_POSSESSION_DOMAIN: &[u8] = b"POSSESSION";

/// The 32-byte hash used for block hashes, state roots, shuffling seeds and signing messages.
pub fn canonical_hash(input: &[u8]) -> Vec<u8> {
    hash(input)
}

/// As `canonical_hash`, returning a fixed-size array.
pub fn canonical_hash_fixed(input: &[u8]) -> [u8; HASH_BYTES] {
    hash_fixed(input)
}

/// Hash the concatenation of two 32-byte values.
pub fn hash_pair(left: &[u8], right: &[u8]) -> [u8; HASH_BYTES] {
    hash32_concat(left, right)
}

/// The message a validator signs to prove it holds the secret key for `pubkey_bytes`.
pub fn proof_of_possession_hash(pubkey_bytes: &[u8]) -> Vec<u8> {
    let mut preimage = Vec::with_capacity(PROOF_OF_POSSESSION_DOMAIN.len() + pubkey_bytes.len());
    preimage.extend_from_slice(PROOF_OF_POSSESSION_DOMAIN);
    preimage.extend_from_slice(pubkey_bytes);
    canonical_hash(&preimage)
}
