use super::{Error, Invalid, Outcome};
use types::{AttestationRecord, Hash256};

/// Check that the attestation's justified checkpoint is no newer than the last justified slot
/// and names the canonical block at that slot.
///
/// `canonical_hash` is the canonical block hash at `attestation.justified_slot`, or `None` if it
/// cannot be resolved.
pub fn validate_justification(
    attestation: &AttestationRecord,
    last_justified_slot: u64,
    canonical_hash: Option<Hash256>,
) -> Result<Outcome<()>, Error> {
    verify_or!(
        attestation.justified_slot <= last_justified_slot,
        reject!(Invalid::AttestationJustificationInvalid)
    );

    verify_or!(
        canonical_hash == Some(attestation.justified_block_hash),
        reject!(Invalid::AttestationJustificationInvalid)
    );

    accept!()
}
