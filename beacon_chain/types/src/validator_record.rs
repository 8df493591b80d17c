use super::bls::PublicKey;
use super::ssz::{Decodable, DecodeError, Encodable, SszStream, TreeHash};
use super::{hash_record_fields, Address, Hash256};

pub const SSZ_VALIDATOR_RECORD_LENGTH: usize = {
    48 +            // pubkey
    2 +             // withdrawal_shard
    20 +            // withdrawal_address
    32 +            // randao_commitment
    8 +             // balance
    8 +             // start_dynasty
    8 // end_dynasty
};

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorRecord {
    pub pubkey: PublicKey,
    pub withdrawal_shard: u16,
    pub withdrawal_address: Address,
    pub randao_commitment: Hash256,
    pub balance: u64,
    pub start_dynasty: u64,
    pub end_dynasty: u64,
}

impl ValidatorRecord {
    /// A validator is active in `dynasty` if `start_dynasty <= dynasty < end_dynasty`.
    pub fn is_active_in(&self, dynasty: u64) -> bool {
        self.start_dynasty <= dynasty && dynasty < self.end_dynasty
    }
}

impl Encodable for ValidatorRecord {
    fn ssz_append(&self, s: &mut SszStream) {
        s.append(&self.pubkey);
        s.append(&self.withdrawal_shard);
        s.append(&self.withdrawal_address);
        s.append(&self.randao_commitment);
        s.append(&self.balance);
        s.append(&self.start_dynasty);
        s.append(&self.end_dynasty);
    }
}

impl Decodable for ValidatorRecord {
    fn ssz_decode(bytes: &[u8], i: usize) -> Result<(Self, usize), DecodeError> {
        let (pubkey, i) = <_>::ssz_decode(bytes, i)?;
        let (withdrawal_shard, i) = <_>::ssz_decode(bytes, i)?;
        let (withdrawal_address, i) = <_>::ssz_decode(bytes, i)?;
        let (randao_commitment, i) = <_>::ssz_decode(bytes, i)?;
        let (balance, i) = <_>::ssz_decode(bytes, i)?;
        let (start_dynasty, i) = <_>::ssz_decode(bytes, i)?;
        let (end_dynasty, i) = <_>::ssz_decode(bytes, i)?;

        Ok((
            Self {
                pubkey,
                withdrawal_shard,
                withdrawal_address,
                randao_commitment,
                balance,
                start_dynasty,
                end_dynasty,
            },
            i,
        ))
    }
}

impl TreeHash for ValidatorRecord {
    fn tree_hash(&self) -> Vec<u8> {
        hash_record_fields(&[
            self.balance.tree_hash(),
            self.end_dynasty.tree_hash(),
            self.pubkey.tree_hash(),
            self.randao_commitment.tree_hash(),
            self.start_dynasty.tree_hash(),
            self.withdrawal_address.tree_hash(),
            self.withdrawal_shard.tree_hash(),
        ])
    }
}
