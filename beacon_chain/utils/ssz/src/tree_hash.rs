use ethereum_types::{H160, H256};
use hashing::canonical_hash;

pub const CHUNKSIZE: usize = 128;
const LENGTH_MIX_BYTES: usize = 32;

pub trait TreeHash {
    fn tree_hash(&self) -> Vec<u8>;
}

/// Returns a 32 byte hash of `list`, a list of equally sized item hashes.
///
/// Items smaller than a chunk are packed together, `CHUNKSIZE / item_len` per chunk, with the
/// final chunk right-padded with zeros. The root is mixed with the number of items so lists that
/// only differ by trailing padding hash differently.
pub fn merkle_hash(list: &[Vec<u8>]) -> Vec<u8> {
    let mut chunks = to_chunks(list);

    while chunks.len() > 1 {
        if chunks.len() % 2 == 1 {
            chunks.push(vec![0; CHUNKSIZE]);
        }
        chunks = chunks
            .chunks(2)
            .map(|pair| {
                let mut joined = Vec::with_capacity(pair[0].len() + pair[1].len());
                joined.extend_from_slice(&pair[0]);
                joined.extend_from_slice(&pair[1]);
                canonical_hash(&joined)
            })
            .collect();
    }

    let mut root = chunks.pop().unwrap_or_else(|| vec![0; CHUNKSIZE]);
    root.extend_from_slice(&length_mix(list.len()));
    canonical_hash(&root)
}

fn to_chunks(list: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let Some(first) = list.first() else {
        return vec![vec![0; CHUNKSIZE]];
    };

    let item_len = first.len().max(1);
    if item_len >= CHUNKSIZE {
        return list.to_vec();
    }

    list.chunks(CHUNKSIZE / item_len)
        .map(|items| {
            let mut chunk = items.concat();
            if chunk.len() < CHUNKSIZE {
                chunk.resize(CHUNKSIZE, 0);
            }
            chunk
        })
        .collect()
}

fn length_mix(len: usize) -> [u8; LENGTH_MIX_BYTES] {
    let mut mix = [0; LENGTH_MIX_BYTES];
    mix[LENGTH_MIX_BYTES - 8..].copy_from_slice(&(len as u64).to_be_bytes());
    mix
}

macro_rules! impl_tree_hash_for_uint {
    ($type: ident) => {
        impl TreeHash for $type {
            fn tree_hash(&self) -> Vec<u8> {
                self.to_be_bytes().to_vec()
            }
        }
    };
}

impl_tree_hash_for_uint!(u8);
impl_tree_hash_for_uint!(u16);
impl_tree_hash_for_uint!(u32);
impl_tree_hash_for_uint!(u64);
impl_tree_hash_for_uint!(u128);

impl TreeHash for H256 {
    fn tree_hash(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl TreeHash for H160 {
    fn tree_hash(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl<T> TreeHash for Vec<T>
where
    T: TreeHash,
{
    fn tree_hash(&self) -> Vec<u8> {
        let hashes: Vec<Vec<u8>> = self.iter().map(TreeHash::tree_hash).collect();
        merkle_hash(&hashes)
    }
}
