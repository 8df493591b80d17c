use super::history::recent_block_hash;
use hashing::canonical_hash;
use ssz::SszStream;
use types::{AttestationRecord, Hash256};

/// The hashes an attestation signs over: the canonical hashes for slots
/// `slot - cycle_length + 1 ..= slot - len(oblique_parent_hashes)`, followed by the oblique
/// parent hashes.
///
/// Returns `None` if any of those slots falls outside the `recent_block_hashes` window of the
/// block at `block_slot`.
pub fn get_signed_parent_hashes(
    recent_block_hashes: &[Hash256],
    block_slot: u64,
    cycle_length: u64,
    attestation: &AttestationRecord,
) -> Option<Vec<Hash256>> {
    let oblique_count = attestation.oblique_parent_hashes.len() as i64;
    let first = attestation.slot as i64 - cycle_length as i64 + 1;
    let last = attestation.slot as i64 - oblique_count;

    let mut hashes = Vec::with_capacity(cycle_length as usize);
    for slot in first..=last {
        hashes.push(recent_block_hash(
            recent_block_hashes,
            block_slot,
            cycle_length,
            slot,
        )?);
    }
    hashes.extend_from_slice(&attestation.oblique_parent_hashes);
    Some(hashes)
}

/// The message signed by each attester:
/// `H(slot || parent_hashes || shard_id || shard_block_hash || justified_slot)`, integers
/// big-endian.
pub fn attestation_signing_message(
    slot: u64,
    parent_hashes: &[Hash256],
    shard_id: u16,
    shard_block_hash: &Hash256,
    justified_slot: u64,
) -> Vec<u8> {
    let mut s = SszStream::new();
    s.append(&slot);
    for hash in parent_hashes {
        s.append(hash);
    }
    s.append(&shard_id);
    s.append(shard_block_hash);
    s.append(&justified_slot);
    canonical_hash(&s.drain())
}
