use super::{Error, Invalid, Outcome};

/// Check that an attestation is valid to be included in a block whose parent is at
/// `parent_block_slot`.
pub fn validate_attestation_for_block(
    attestation_slot: u64,
    parent_block_slot: u64,
    cycle_length: u64,
) -> Result<Outcome<()>, Error> {
    /*
     * An attestation may not be for a slot later than the parent block.
     */
    verify_or!(
        attestation_slot <= parent_block_slot,
        reject!(Invalid::AttestationSlotOutOfRange)
    );

    /*
     * A block may not include attestations for slots more than `cycle_length - 1` prior to
     * the parent block slot.
     */
    verify_or!(
        attestation_slot >= parent_block_slot.saturating_sub(cycle_length.saturating_sub(1)),
        reject!(Invalid::AttestationSlotOutOfRange)
    );

    accept!()
}
