/// Reasons an attestation is rejected. Any of these invalidates the block carrying it.
#[derive(Debug, PartialEq, Clone)]
pub enum Invalid {
    AttestationSlotOutOfRange,
    AttestationJustificationInvalid,
    /// The attestation slot has no committee for its shard, so its attesters cannot be
    /// resolved.
    NoCommitteeForShard,
    AttestationBitfieldInvalid,
    AttestationSignatureInvalid,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Outcome<T = crate::context::ValidatedAttestation> {
    Valid(T),
    Invalid(Invalid),
}

/// Failures which indicate a malformed state rather than a bad attestation.
#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    UnknownValidator(usize),
    BlsError(bls::Error),
}

impl From<bls::Error> for Error {
    fn from(e: bls::Error) -> Error {
        Error::BlsError(e)
    }
}
