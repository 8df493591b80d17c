use super::ssz::{ssz_encode, Decodable, DecodeError, Encodable, SszStream, TreeHash};
use super::validator_record::ValidatorRecord;
use super::{hash256, hash_record_fields, CrosslinkRecord, Hash256, ShardAndCommittee};

#[derive(Debug, Clone, PartialEq)]
pub struct CrystallizedState {
    pub validators: Vec<ValidatorRecord>,
    pub last_state_recalc: u64,
    /// Committees for the previous and the current cycle, one entry per slot.
    pub shard_and_committee_for_slots: Vec<Vec<ShardAndCommittee>>,
    pub last_justified_slot: u64,
    pub justified_streak: u64,
    pub last_finalized_slot: u64,
    pub current_dynasty: u64,
    pub crosslink_records: Vec<CrosslinkRecord>,
    pub dynasty_seed: Hash256,
    pub dynasty_start: u64,
}

impl CrystallizedState {
    pub fn zero() -> Self {
        Self {
            validators: vec![],
            last_state_recalc: 0,
            shard_and_committee_for_slots: vec![],
            last_justified_slot: 0,
            justified_streak: 0,
            last_finalized_slot: 0,
            current_dynasty: 0,
            crosslink_records: vec![],
            dynasty_seed: Hash256::zero(),
            dynasty_start: 0,
        }
    }

    /// Indices of the validators active in the current dynasty.
    pub fn active_validator_indices(&self) -> Vec<usize> {
        self.validators
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_active_in(self.current_dynasty))
            .map(|(i, _)| i)
            .collect()
    }

    /// Sum of the balances of every validator active in the current dynasty.
    pub fn total_deposits(&self) -> u64 {
        self.validators
            .iter()
            .filter(|v| v.is_active_in(self.current_dynasty))
            .fold(0u64, |acc, v| acc.saturating_add(v.balance))
    }

    pub fn canonical_hash(&self) -> Hash256 {
        hash256(&ssz_encode(self))
    }
}

impl Encodable for CrystallizedState {
    fn ssz_append(&self, s: &mut SszStream) {
        s.append_vec(&self.validators);
        s.append(&self.last_state_recalc);
        s.append_vec(&self.shard_and_committee_for_slots);
        s.append(&self.last_justified_slot);
        s.append(&self.justified_streak);
        s.append(&self.last_finalized_slot);
        s.append(&self.current_dynasty);
        s.append_vec(&self.crosslink_records);
        s.append(&self.dynasty_seed);
        s.append(&self.dynasty_start);
    }
}

impl Decodable for CrystallizedState {
    fn ssz_decode(bytes: &[u8], i: usize) -> Result<(Self, usize), DecodeError> {
        let (validators, i) = <_>::ssz_decode(bytes, i)?;
        let (last_state_recalc, i) = <_>::ssz_decode(bytes, i)?;
        let (shard_and_committee_for_slots, i) = <_>::ssz_decode(bytes, i)?;
        let (last_justified_slot, i) = <_>::ssz_decode(bytes, i)?;
        let (justified_streak, i) = <_>::ssz_decode(bytes, i)?;
        let (last_finalized_slot, i) = <_>::ssz_decode(bytes, i)?;
        let (current_dynasty, i) = <_>::ssz_decode(bytes, i)?;
        let (crosslink_records, i) = <_>::ssz_decode(bytes, i)?;
        let (dynasty_seed, i) = <_>::ssz_decode(bytes, i)?;
        let (dynasty_start, i) = <_>::ssz_decode(bytes, i)?;

        Ok((
            Self {
                validators,
                last_state_recalc,
                shard_and_committee_for_slots,
                last_justified_slot,
                justified_streak,
                last_finalized_slot,
                current_dynasty,
                crosslink_records,
                dynasty_seed,
                dynasty_start,
            },
            i,
        ))
    }
}

impl TreeHash for CrystallizedState {
    fn tree_hash(&self) -> Vec<u8> {
        hash_record_fields(&[
            self.crosslink_records.tree_hash(),
            self.current_dynasty.tree_hash(),
            self.dynasty_seed.tree_hash(),
            self.dynasty_start.tree_hash(),
            self.justified_streak.tree_hash(),
            self.last_finalized_slot.tree_hash(),
            self.last_justified_slot.tree_hash(),
            self.last_state_recalc.tree_hash(),
            self.shard_and_committee_for_slots.tree_hash(),
            self.validators.tree_hash(),
        ])
    }
}
