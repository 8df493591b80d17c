use super::ssz::{ssz_encode, Decodable, DecodeError, Encodable, SszStream, TreeHash};
use super::{hash256, hash_record_fields, AttestationRecord, Hash256};
use std::collections::{HashMap, HashSet};

/// The voters recorded against one block hash.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoteEntry {
    pub voter_indices: HashSet<usize>,
    pub total_voter_deposits: u64,
}

impl VoteEntry {
    /// Count `validator_index` as a voter, adding `balance` the first time it is seen.
    ///
    /// Returns `false` if the validator had already voted for this hash.
    pub fn add_voter(&mut self, validator_index: usize, balance: u64) -> bool {
        if self.voter_indices.insert(validator_index) {
            self.total_voter_deposits = self.total_voter_deposits.saturating_add(balance);
            true
        } else {
            false
        }
    }
}

/// Maps a block hash to the validators who have voted for it.
pub type BlockVoteCache = HashMap<Hash256, VoteEntry>;

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveState {
    pub pending_attestations: Vec<AttestationRecord>,
    /// Hashes of the last `2 * cycle_length` slots, oldest first.
    pub recent_block_hashes: Vec<Hash256>,
    /// Not part of the consensus encoding.
    pub block_vote_cache: BlockVoteCache,
}

impl ActiveState {
    pub fn zero() -> Self {
        Self {
            pending_attestations: vec![],
            recent_block_hashes: vec![],
            block_vote_cache: BlockVoteCache::new(),
        }
    }

    pub fn canonical_hash(&self) -> Hash256 {
        hash256(&ssz_encode(self))
    }
}

impl Encodable for ActiveState {
    fn ssz_append(&self, s: &mut SszStream) {
        s.append_vec(&self.pending_attestations);
        s.append_vec(&self.recent_block_hashes);
    }
}

impl Decodable for ActiveState {
    fn ssz_decode(bytes: &[u8], i: usize) -> Result<(Self, usize), DecodeError> {
        let (pending_attestations, i) = <_>::ssz_decode(bytes, i)?;
        let (recent_block_hashes, i) = <_>::ssz_decode(bytes, i)?;

        Ok((
            Self {
                pending_attestations,
                recent_block_hashes,
                block_vote_cache: BlockVoteCache::new(),
            },
            i,
        ))
    }
}

impl TreeHash for ActiveState {
    fn tree_hash(&self) -> Vec<u8> {
        hash_record_fields(&[
            self.pending_attestations.tree_hash(),
            self.recent_block_hashes.tree_hash(),
        ])
    }
}
