use super::{Error, Invalid, Outcome};
use bls::AggregatePublicKey;
use types::{AttestationRecord, ValidatorRecord};

/// Verify the aggregate signature of an attestation against the public keys of the committee
/// members whose bits are set.
///
/// Returns the validator indices of the voters, in bitfield order.
pub fn validate_attestation_signature(
    attestation: &AttestationRecord,
    committee: &[usize],
    validators: &[ValidatorRecord],
    message: &[u8],
) -> Result<Outcome<Vec<usize>>, Error> {
    let voters: Vec<usize> = attestation
        .attester_bitfield
        .set_indices()
        .filter_map(|bit| committee.get(bit).copied())
        .collect();

    /*
     * An attestation without any attesters carries no signature worth checking.
     */
    verify_or!(
        !voters.is_empty(),
        reject!(Invalid::AttestationSignatureInvalid)
    );

    let pubkeys = voters
        .iter()
        .map(|i| {
            validators
                .get(*i)
                .map(|v| &v.pubkey)
                .ok_or(Error::UnknownValidator(*i))
        })
        .collect::<Result<Vec<_>, Error>>()?;
    let aggregate_public_key = AggregatePublicKey::aggregate(&pubkeys)?;

    verify_or!(
        attestation
            .aggregate_sig
            .verify(message, &aggregate_public_key),
        reject!(Invalid::AttestationSignatureInvalid)
    );

    accept!(voters)
}
