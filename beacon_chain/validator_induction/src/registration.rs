use bls::{create_proof_of_possession, Keypair, PublicKey, Signature};
use types::{Address, Hash256, ValidatorRecord};

/// A deposit admission event, as emitted by the validator registration contract.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorRegistration {
    pub pubkey: PublicKey,
    pub withdrawal_shard: u16,
    pub withdrawal_address: Address,
    pub randao_commitment: Hash256,
    /// Deposit in Gwei.
    pub amount: u64,
    pub proof_of_possession: Signature,
}

impl ValidatorRegistration {
    /// A registration for `keypair` with zero withdrawal credentials and a valid proof of
    /// possession.
    pub fn new(keypair: &Keypair, amount: u64) -> Self {
        Self {
            pubkey: keypair.pk.clone(),
            withdrawal_shard: 0,
            withdrawal_address: Address::zero(),
            randao_commitment: Hash256::zero(),
            amount,
            proof_of_possession: create_proof_of_possession(keypair),
        }
    }
}

impl PartialEq<ValidatorRecord> for ValidatorRegistration {
    fn eq(&self, v: &ValidatorRecord) -> bool {
        (self.pubkey == v.pubkey)
            & (self.withdrawal_shard == v.withdrawal_shard)
            & (self.withdrawal_address == v.withdrawal_address)
            & (self.randao_commitment == v.randao_commitment)
            & (self.amount == v.balance)
    }
}
