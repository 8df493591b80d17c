use super::history::{recent_block_hash, ChainHistory};
use super::message::{attestation_signing_message, get_signed_parent_hashes};
use super::validate_bitfield::validate_attester_bitfield;
use super::validate_for_block::validate_attestation_for_block;
use super::validate_justification::validate_justification;
use super::validate_signature::validate_attestation_signature;
use super::{Error, Invalid, Outcome};
use types::{AttestationRecord, ChainConfig, CrystallizedState, Hash256};

/// The facts established by a valid attestation.
#[derive(Debug, PartialEq, Clone)]
pub struct ValidatedAttestation {
    /// Validator indices of the attesters, in bitfield order.
    pub voters: Vec<usize>,
    /// Every block hash the attesters signed.
    pub parent_hashes: Vec<Hash256>,
}

/// The context against which the attestations of a single block are validated.
pub struct AttestationValidationContext<'a, H: ChainHistory + ?Sized> {
    /// The slot of the block carrying the attestations.
    pub block_slot: u64,
    /// The slot of the parent of that block.
    pub parent_block_slot: u64,
    /// The `recent_block_hashes` window, already advanced to `block_slot`.
    pub recent_block_hashes: &'a [Hash256],
    /// The crystallized state of the parent.
    pub crystallized_state: &'a CrystallizedState,
    pub config: &'a ChainConfig,
    /// Resolves justified hashes older than the window.
    pub history: &'a H,
}

impl<'a, H: ChainHistory + ?Sized> AttestationValidationContext<'a, H> {
    /// Validate some attestation against the context.
    ///
    /// On success the voters and the hashes they signed are returned so the caller can update
    /// the block vote cache.
    pub fn validate_attestation(&self, a: &AttestationRecord) -> Result<Outcome, Error> {
        let cycle_length = self.config.cycle_length;

        valid_or_reject!(validate_attestation_for_block(
            a.slot,
            self.parent_block_slot,
            cycle_length
        ));

        let justified_hash = self.canonical_hash_at(a.justified_slot);
        valid_or_reject!(validate_justification(
            a,
            self.crystallized_state.last_justified_slot,
            justified_hash
        ));

        let committee = valid_or_reject!(self.committee_for(a.slot, a.shard_id));

        valid_or_reject!(validate_attester_bitfield(
            &a.attester_bitfield,
            committee.len()
        ));

        let parent_hashes = match get_signed_parent_hashes(
            self.recent_block_hashes,
            self.block_slot,
            cycle_length,
            a,
        ) {
            Some(hashes) => hashes,
            None => reject!(Invalid::AttestationSlotOutOfRange),
        };

        let message = attestation_signing_message(
            a.slot,
            &parent_hashes,
            a.shard_id,
            &a.shard_block_hash,
            a.justified_slot,
        );
        let voters = valid_or_reject!(validate_attestation_signature(
            a,
            committee,
            &self.crystallized_state.validators,
            &message
        ));

        accept!(ValidatedAttestation {
            voters,
            parent_hashes,
        })
    }

    /// The canonical block hash at `slot`, from the window or else the chain history.
    pub fn canonical_hash_at(&self, slot: u64) -> Option<Hash256> {
        recent_block_hash(
            self.recent_block_hashes,
            self.block_slot,
            self.config.cycle_length,
            slot as i64,
        )
        .or_else(|| self.history.block_hash_at_slot(slot))
    }

    /// The committee assigned to `shard_id` at `slot`.
    fn committee_for(&self, slot: u64, shard_id: u16) -> Result<Outcome<&'a [usize]>, Error> {
        let state = self.crystallized_state;
        let earliest_slot = state.last_state_recalc as i64 - self.config.cycle_length as i64;
        let index = slot as i64 - earliest_slot;

        let slot_committees = match usize::try_from(index)
            .ok()
            .and_then(|i| state.shard_and_committee_for_slots.get(i))
        {
            Some(committees) => committees,
            None => reject!(Invalid::AttestationSlotOutOfRange),
        };

        match slot_committees.iter().find(|sac| sac.shard_id == shard_id) {
            Some(sac) => accept!(&sac.committee[..]),
            None => reject!(Invalid::NoCommitteeForShard),
        }
    }
}
