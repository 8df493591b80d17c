use super::{blst_core, Error, PublicKey};

/// The sum of one or more public keys.
#[derive(Clone)]
pub struct AggregatePublicKey(blst_core::AggregatePublicKey);

impl AggregatePublicKey {
    /// Aggregate `pubkeys`. Fails if `pubkeys` is empty.
    pub fn aggregate(pubkeys: &[&PublicKey]) -> Result<Self, Error> {
        if pubkeys.is_empty() {
            return Err(Error::EmptyAggregate);
        }
        let points: Vec<&blst_core::PublicKey> = pubkeys.iter().map(|pk| pk.point()).collect();
        blst_core::AggregatePublicKey::aggregate(&points, false)
            .map(AggregatePublicKey)
            .map_err(Into::into)
    }

    pub fn to_public_key(&self) -> PublicKey {
        PublicKey::from_point(self.0.to_public_key())
    }
}
