use std::collections::HashMap;
use types::{ActiveState, Block, CrystallizedState, Hash256};

/// In-memory storage of blocks by hash and of states by root.
#[derive(Default)]
pub struct ChainStore {
    blocks: HashMap<Hash256, Block>,
    active_states: HashMap<Hash256, ActiveState>,
    crystallized_states: HashMap<Hash256, CrystallizedState>,
}

impl ChainStore {
    pub fn put_block(&mut self, hash: Hash256, block: Block) {
        self.blocks.insert(hash, block);
    }

    pub fn get_block(&self, hash: &Hash256) -> Option<&Block> {
        self.blocks.get(hash)
    }

    pub fn block_exists(&self, hash: &Hash256) -> bool {
        self.blocks.contains_key(hash)
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn put_active_state(&mut self, root: Hash256, state: ActiveState) {
        self.active_states.insert(root, state);
    }

    pub fn get_active_state(&self, root: &Hash256) -> Option<&ActiveState> {
        self.active_states.get(root)
    }

    /// Store a crystallized state unless one with the same root is already present.
    pub fn put_crystallized_state(&mut self, root: Hash256, state: CrystallizedState) {
        self.crystallized_states.entry(root).or_insert(state);
    }

    pub fn get_crystallized_state(&self, root: &Hash256) -> Option<&CrystallizedState> {
        self.crystallized_states.get(root)
    }
}
