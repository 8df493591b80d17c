use super::BeaconChainError;
use state_transition::{genesis_block, genesis_states, GENESIS_DYNASTY};
use types::{ActiveState, Block, ChainConfig, CrystallizedState, Hash256};
use validator_induction::{ValidatorInductor, ValidatorRegistration};

/// A ChainHead structure represents the "head" or "tip" of a beacon chain blockchain.
///
/// Initially, a "genesis" chainhead will be created and then new blocks will be built upon it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainHead {
    /// The hash of the block that is the head of the chain.
    pub head_hash: Hash256,
    pub block: Block,
    /// The active state at this head block.
    pub active_state: ActiveState,
    /// The crystallized state at this head block.
    pub crystallized_state: CrystallizedState,
}

impl ChainHead {
    /// Initialize a new ChainHead with genesis parameters.
    ///
    /// Used when syncing a chain from scratch.
    pub fn genesis(
        initial_validator_entries: &[ValidatorRegistration],
        config: &ChainConfig,
    ) -> Result<Self, BeaconChainError> {
        /*
         * Parse the ValidatorRegistrations into ValidatorRecords and induct them.
         *
         * Ignore any records which fail proof-of-possession or are invalid.
         */
        let mut validators = vec![];
        {
            let mut inductor = ValidatorInductor::new(GENESIS_DYNASTY, config, &mut validators);
            for registration in initial_validator_entries {
                let _ = inductor.induct(registration);
            }
        }

        let (crystallized_state, active_state) = genesis_states(validators, config)?;
        let block = genesis_block(&crystallized_state, &active_state);

        Ok(Self {
            head_hash: block.canonical_hash(),
            block,
            active_state,
            crystallized_state,
        })
    }
}
