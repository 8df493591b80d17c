extern crate bls;
extern crate boolean_bitfield;
extern crate ethereum_types;
extern crate ssz;

pub mod active_state;
pub mod attestation_record;
pub mod block;
pub mod chain_config;
pub mod crosslink_record;
pub mod crystallized_state;
pub mod shard_and_committee;
pub mod validator_record;

use self::boolean_bitfield::BooleanBitfield;
use self::ethereum_types::{H160, H256};

pub use crate::active_state::{ActiveState, BlockVoteCache, VoteEntry};
pub use crate::attestation_record::AttestationRecord;
pub use crate::block::Block;
pub use crate::chain_config::{
    ChainConfig, ChainConfigError, LoadError, MAX_VALIDATOR_COUNT_LIMIT,
};
pub use crate::crosslink_record::CrosslinkRecord;
pub use crate::crystallized_state::CrystallizedState;
pub use crate::shard_and_committee::ShardAndCommittee;
pub use crate::validator_record::ValidatorRecord;

pub type Hash256 = H256;
pub type Address = H160;
pub type Bitfield = BooleanBitfield;

/// Hash some ssz bytes into a `Hash256`.
pub fn hash256(bytes: &[u8]) -> Hash256 {
    Hash256::from_slice(&ssz::hash(bytes))
}

/// Tree hash of a record: the hash of its field hashes, given in sorted field-name order.
pub(crate) fn hash_record_fields(sorted_field_hashes: &[Vec<u8>]) -> Vec<u8> {
    ssz::hash(&sorted_field_hashes.concat())
}
