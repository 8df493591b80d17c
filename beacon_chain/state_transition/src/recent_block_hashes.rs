use types::Hash256;

/// Advance the `recent_block_hashes` window from the parent block to its child.
///
/// The `d = slot - parent_slot` oldest hashes are dropped and `parent_hash` is appended once
/// per slot between the parent and the child, so skipped slots resolve to the parent. The
/// window keeps its length.
pub fn fill_recent_block_hashes(
    recent_block_hashes: &[Hash256],
    parent_slot: u64,
    slot: u64,
    parent_hash: Hash256,
) -> Vec<Hash256> {
    let distance = slot.saturating_sub(parent_slot);
    let shift = std::cmp::min(distance, recent_block_hashes.len() as u64) as usize;

    let mut hashes = Vec::with_capacity(recent_block_hashes.len());
    hashes.extend_from_slice(&recent_block_hashes[shift..]);
    hashes.extend(std::iter::repeat(parent_hash).take(shift));
    hashes
}
