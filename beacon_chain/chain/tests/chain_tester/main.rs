use beacon_chain::BeaconChain;
use bls::Keypair;

mod block;
mod genesis;

pub struct ChainTester {
    pub chain: BeaconChain,
    pub validator_keypairs: Vec<Keypair>,
}
