use types::Hash256;

/// Canonical block hashes older than the `recent_block_hashes` window.
pub trait ChainHistory: Sync {
    /// The hash of the most recent block with `slot_number <= slot`, if known.
    fn block_hash_at_slot(&self, slot: u64) -> Option<Hash256>;
}

/// A history which knows nothing beyond the window.
pub struct NoHistory;

impl ChainHistory for NoHistory {
    fn block_hash_at_slot(&self, _slot: u64) -> Option<Hash256> {
        None
    }
}

/// Reads the canonical hash for `slot` from a `recent_block_hashes` window belonging to a block
/// at `block_slot`.
///
/// The window holds `2 * cycle_length` hashes, the first of which is for slot
/// `block_slot - 2 * cycle_length`. Slots before genesis are negative and resolve to the zero
/// hashes the genesis window starts with.
pub fn recent_block_hash(
    recent_block_hashes: &[Hash256],
    block_slot: u64,
    cycle_length: u64,
    slot: i64,
) -> Option<Hash256> {
    let window_start = block_slot as i64 - 2 * cycle_length as i64;
    let index = slot - window_start;
    if index < 0 {
        return None;
    }
    recent_block_hashes.get(index as usize).copied()
}
