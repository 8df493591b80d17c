use bls::verify_proof_of_possession;
use types::{ChainConfig, ValidatorRecord};

use super::registration::ValidatorRegistration;

/// Inducts validators into a validator set.
pub struct ValidatorInductor<'a> {
    /// The dynasty in which inducted validators become active.
    pub start_dynasty: u64,
    config: &'a ChainConfig,
    validators: &'a mut Vec<ValidatorRecord>,
    empty_validator_start: usize,
}

#[derive(Debug, PartialEq, Clone)]
pub enum ValidatorInductionError {
    InvalidShard,
    InvalidProofOfPossession,
    InvalidDepositAmount { got: u64, expected: u64 },
}

impl<'a> ValidatorInductor<'a> {
    pub fn new(
        start_dynasty: u64,
        config: &'a ChainConfig,
        validators: &'a mut Vec<ValidatorRecord>,
    ) -> Self {
        Self {
            start_dynasty,
            config,
            validators,
            empty_validator_start: 0,
        }
    }

    /// Attempt to induct a validator into the validator set.
    ///
    /// Returns an error if the registration is invalid, otherwise returns the index of the
    /// validator in the set.
    pub fn induct(
        &mut self,
        rego: &ValidatorRegistration,
    ) -> Result<usize, ValidatorInductionError> {
        let v = self.process_registration(rego)?;
        Ok(self.add_validator(v))
    }

    /// Verify a `ValidatorRegistration` and return a `ValidatorRecord` if valid.
    fn process_registration(
        &self,
        r: &ValidatorRegistration,
    ) -> Result<ValidatorRecord, ValidatorInductionError> {
        /*
         * Ensure withdrawal shard is not too high.
         */
        if r.withdrawal_shard >= self.config.shard_count {
            return Err(ValidatorInductionError::InvalidShard);
        }

        /*
         * Only full deposits are accepted.
         */
        if r.amount != self.config.deposit_size {
            return Err(ValidatorInductionError::InvalidDepositAmount {
                got: r.amount,
                expected: self.config.deposit_size,
            });
        }

        /*
         * Prove validator has knowledge of their secret key.
         */
        if !verify_proof_of_possession(&r.proof_of_possession, &r.pubkey) {
            return Err(ValidatorInductionError::InvalidProofOfPossession);
        }

        Ok(ValidatorRecord {
            pubkey: r.pubkey.clone(),
            withdrawal_shard: r.withdrawal_shard,
            withdrawal_address: r.withdrawal_address,
            randao_commitment: r.randao_commitment,
            balance: r.amount,
            start_dynasty: self.start_dynasty,
            end_dynasty: self.config.default_end_dynasty,
        })
    }

    /// Returns the index of the first record whose validator has left the set and holds no
    /// balance. If no such record exists, `None` is returned.
    fn first_withdrawn_validator(&mut self) -> Option<usize> {
        for i in self.empty_validator_start..self.validators.len() {
            let v = &self.validators[i];
            if v.end_dynasty <= self.start_dynasty && v.balance == 0 {
                self.empty_validator_start = i + 1;
                return Some(i);
            }
        }
        None
    }

    /// Adds a `ValidatorRecord` by replacing the first withdrawn validator. If no such withdrawn
    /// validator exists, adds the new validator to the end of the list.
    fn add_validator(&mut self, v: ValidatorRecord) -> usize {
        match self.first_withdrawn_validator() {
            Some(i) => {
                self.validators[i] = v;
                i
            }
            None => {
                self.validators.push(v);
                self.validators.len() - 1
            }
        }
    }
}
