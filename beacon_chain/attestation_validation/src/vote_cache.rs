use super::{Error, ValidatedAttestation};
use types::{BlockVoteCache, ValidatorRecord};

/// Record the voters of a validated attestation against every hash it signed.
///
/// A validator's balance is counted at most once per hash.
pub fn update_block_vote_cache(
    cache: &mut BlockVoteCache,
    attestation: &ValidatedAttestation,
    validators: &[ValidatorRecord],
) -> Result<(), Error> {
    for hash in &attestation.parent_hashes {
        let entry = cache.entry(*hash).or_default();
        for voter in &attestation.voters {
            let balance = validators
                .get(*voter)
                .ok_or(Error::UnknownValidator(*voter))?
                .balance;
            entry.add_voter(*voter, balance);
        }
    }
    Ok(())
}
