extern crate attestation_validation;
#[macro_use]
extern crate slog;
extern crate ssz;
extern crate state_transition;
extern crate types;
extern crate validator_induction;

mod block_processing;
mod block_production;
mod chain_head;
mod errors;
mod history;
mod store;

use slog::Logger;
use std::collections::HashSet;
use types::{ChainConfig, Hash256};
use validator_induction::ValidatorRegistration;

pub use crate::block_processing::BlockStatus;
pub use crate::chain_head::ChainHead;
pub use crate::errors::BeaconChainError;
pub use crate::history::CanonicalHistory;
pub use crate::store::ChainStore;

/// An in-memory beacon chain: every imported block and its states, plus the canonical head.
pub struct BeaconChain {
    pub config: ChainConfig,
    pub store: ChainStore,
    /// Proof-of-work block hashes which a beacon block may reference.
    pub pow_chain: HashSet<Hash256>,
    pub canonical: CanonicalHistory,
    pub head: ChainHead,
    log: Logger,
}

impl BeaconChain {
    /// Build a chain holding only the genesis block, inducting `initial_validator_entries`.
    pub fn genesis(
        initial_validator_entries: &[ValidatorRegistration],
        config: ChainConfig,
        log: Logger,
    ) -> Result<Self, BeaconChainError> {
        let head = ChainHead::genesis(initial_validator_entries, &config)?;

        let mut store = ChainStore::default();
        store.put_block(head.head_hash, head.block.clone());
        store.put_active_state(head.block.active_state_root, head.active_state.clone());
        store.put_crystallized_state(
            head.block.crystallized_state_root,
            head.crystallized_state.clone(),
        );

        let mut canonical = CanonicalHistory::default();
        canonical.insert(head.block.slot_number, head.head_hash);

        let mut pow_chain = HashSet::new();
        pow_chain.insert(head.block.pow_chain_ref);

        info!(
            log,
            "Beacon chain initialized";
            "validators" => head.crystallized_state.validators.len(),
            "rejected_registrations" =>
                initial_validator_entries.len() - head.crystallized_state.validators.len(),
            "genesis_hash" => format!("{:?}", head.head_hash),
        );

        Ok(Self {
            config,
            store,
            pow_chain,
            canonical,
            head,
            log,
        })
    }

    /// Allow blocks to reference the given proof-of-work block.
    pub fn add_pow_chain_ref(&mut self, hash: Hash256) {
        self.pow_chain.insert(hash);
    }
}
