use super::ChainTester;
use beacon_chain::{BeaconChain, BeaconChainError};
use bls::Keypair;
use logging::test_logger;
use types::ChainConfig;
use validator_induction::ValidatorRegistration;

impl ChainTester {
    /// A chain over `validator_count` deterministic validators, each with a full deposit.
    pub fn genesis(config: ChainConfig, validator_count: u64) -> Result<Self, BeaconChainError> {
        let validator_keypairs: Vec<Keypair> =
            (0..validator_count).map(Keypair::deterministic).collect();
        let validator_registrations: Vec<ValidatorRegistration> = validator_keypairs
            .iter()
            .map(|keypair| ValidatorRegistration::new(keypair, config.deposit_size))
            .collect();

        let chain = BeaconChain::genesis(&validator_registrations, config, test_logger())?;

        Ok(Self {
            chain,
            validator_keypairs,
        })
    }
}
