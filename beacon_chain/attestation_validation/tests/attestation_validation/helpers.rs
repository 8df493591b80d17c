use attestation_validation::{AttestationValidationContext, ChainHistory};
use bls::{AggregateSignature, Keypair, SecretKey};
use hashing::canonical_hash;
use ssz::SszStream;
use std::collections::HashMap;
use types::{
    AttestationRecord, Bitfield, ChainConfig, CrystallizedState, Hash256, ShardAndCommittee,
    ValidatorRecord,
};

/// Justified hashes for slots older than the window.
#[derive(Default)]
pub struct MapHistory(pub HashMap<u64, Hash256>);

impl ChainHistory for MapHistory {
    fn block_hash_at_slot(&self, slot: u64) -> Option<Hash256> {
        self.0.get(&slot).copied()
    }
}

pub struct TestRig {
    pub attestation: AttestationRecord,
    pub keypairs: Vec<Keypair>,
    pub block_slot: u64,
    pub parent_block_slot: u64,
    pub recent_block_hashes: Vec<Hash256>,
    pub crystallized_state: CrystallizedState,
    pub config: ChainConfig,
    pub history: MapHistory,
}

impl TestRig {
    pub fn context(&self) -> AttestationValidationContext<'_, MapHistory> {
        AttestationValidationContext {
            block_slot: self.block_slot,
            parent_block_slot: self.parent_block_slot,
            recent_block_hashes: &self.recent_block_hashes,
            crystallized_state: &self.crystallized_state,
            config: &self.config,
            history: &self.history,
        }
    }

    /// The hashes an attestation at `attestation_slot` without oblique hashes signs over.
    pub fn parent_hashes_for(&self, attestation_slot: u64) -> Vec<Hash256> {
        let cycle_length = self.config.cycle_length;
        let window_start = self.block_slot - 2 * cycle_length;
        let last = (attestation_slot - window_start) as usize;
        let first = last + 1 - cycle_length as usize;
        self.recent_block_hashes[first..=last].to_vec()
    }

    /// Re-sign the rig attestation with the given committee members.
    pub fn sign_attestation(&mut self, signers: &[usize]) {
        let parent_hashes = self.parent_hashes_for(self.attestation.slot);
        let secret_keys: Vec<Option<SecretKey>> = (0..self.keypairs.len())
            .map(|i| {
                if signers.contains(&i) {
                    Some(self.keypairs[i].sk.clone())
                } else {
                    None
                }
            })
            .collect();
        let (bitfield, aggregate_sig) =
            sign(&self.attestation, &parent_hashes, &secret_keys);
        self.attestation.attester_bitfield = bitfield;
        self.attestation.aggregate_sig = aggregate_sig;
    }
}

pub fn generate_message_hash(
    slot: u64,
    parent_hashes: &[Hash256],
    shard_id: u16,
    shard_block_hash: &Hash256,
    justified_slot: u64,
) -> Vec<u8> {
    let mut stream = SszStream::new();
    stream.append(&slot);
    for hash in parent_hashes {
        stream.append(hash);
    }
    stream.append(&shard_id);
    stream.append(shard_block_hash);
    stream.append(&justified_slot);
    let bytes = stream.drain();
    canonical_hash(&bytes)
}

fn sign(
    attestation: &AttestationRecord,
    parent_hashes: &[Hash256],
    signing_keys: &[Option<SecretKey>],
) -> (Bitfield, AggregateSignature) {
    let mut attester_bitfield = Bitfield::empty(signing_keys.len());
    let mut aggregate_sig = AggregateSignature::new();

    let attestation_message = generate_message_hash(
        attestation.slot,
        parent_hashes,
        attestation.shard_id,
        &attestation.shard_block_hash,
        attestation.justified_slot,
    );

    for (i, secret_key) in signing_keys.iter().enumerate() {
        /*
         * If the signing key is Some, set the bitfield bit to true
         * and sign the aggregate sig.
         */
        if let Some(sk) = secret_key {
            attester_bitfield.set_voted(i);
            aggregate_sig.add(&sk.sign(&attestation_message));
        }
    }

    (attester_bitfield, aggregate_sig)
}

pub fn setup_attestation_validation_test(shard_id: u16, attester_count: usize) -> TestRig {
    let config = ChainConfig::standard();
    let cycle_length = config.cycle_length;

    let block_slot = 10_000;
    let parent_block_slot = block_slot - 1;
    let attestation_slot = parent_block_slot;
    let last_justified_slot = attestation_slot - 1;
    let shard_block_hash = Hash256::from_slice(&canonical_hash(b"shard_block"));

    let recent_block_hashes: Vec<Hash256> = (0..cycle_length * 2)
        .map(|i| Hash256::from_low_u64_be(i + 1))
        .collect();
    // The window starts at slot `block_slot - 2 * cycle_length`.
    let justified_block_hash =
        recent_block_hashes[(last_justified_slot - (block_slot - 2 * cycle_length)) as usize];

    let keypairs: Vec<Keypair> = (0..attester_count as u64)
        .map(Keypair::deterministic)
        .collect();
    let validators: Vec<ValidatorRecord> = keypairs
        .iter()
        .map(|kp| ValidatorRecord {
            pubkey: kp.pk.clone(),
            withdrawal_shard: 0,
            withdrawal_address: Default::default(),
            randao_commitment: Hash256::zero(),
            balance: config.deposit_size,
            start_dynasty: 1,
            end_dynasty: config.default_end_dynasty,
        })
        .collect();

    let committee = ShardAndCommittee {
        shard_id,
        committee: (0..attester_count).collect(),
    };

    let mut crystallized_state = CrystallizedState::zero();
    crystallized_state.validators = validators;
    crystallized_state.current_dynasty = 1;
    crystallized_state.last_state_recalc = block_slot - block_slot % cycle_length;
    crystallized_state.last_justified_slot = last_justified_slot;
    crystallized_state.shard_and_committee_for_slots =
        vec![vec![committee]; 2 * cycle_length as usize];

    let attestation = AttestationRecord {
        slot: attestation_slot,
        shard_id,
        oblique_parent_hashes: vec![],
        shard_block_hash,
        attester_bitfield: Bitfield::new(),
        justified_slot: last_justified_slot,
        justified_block_hash,
        aggregate_sig: AggregateSignature::new(),
    };

    let mut rig = TestRig {
        attestation,
        keypairs,
        block_slot,
        parent_block_slot,
        recent_block_hashes,
        crystallized_state,
        config,
        history: MapHistory::default(),
    };
    let all: Vec<usize> = (0..attester_count).collect();
    rig.sign_attestation(&all);
    rig
}
