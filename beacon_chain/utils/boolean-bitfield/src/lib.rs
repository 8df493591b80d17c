/*
 * A bitfield over the members of a committee.
 *
 * Bit `i` lives in byte `i / 8` under the mask `128 >> (i % 8)`, so the first committee member
 * is the most significant bit of the first byte.
 */
use ssz::{decode_ssz_bytes, hash, Decodable, DecodeError, Encodable, SszStream, TreeHash};
use std::fmt;

#[derive(Eq, PartialEq, Clone, Default, Hash)]
pub struct BooleanBitfield {
    vec: Vec<u8>,
}

impl BooleanBitfield {
    /// Create a new bitfield with no underlying bytes.
    pub fn new() -> Self {
        Self { vec: vec![] }
    }

    /// Create a zeroed bitfield large enough to hold `bits` bits.
    pub fn empty(bits: usize) -> Self {
        Self {
            vec: vec![0; Self::bytes_for(bits)],
        }
    }

    /// Wrap some existing bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            vec: bytes.to_vec(),
        }
    }

    /// The number of bytes needed to represent `bits` bits.
    pub fn bytes_for(bits: usize) -> usize {
        (bits + 7) / 8
    }

    /// Returns `true` if bit `i` is set. Bits beyond the underlying bytes are never set.
    pub fn has_voted(&self, i: usize) -> bool {
        match self.vec.get(i / 8) {
            Some(byte) => byte & mask(i) != 0,
            None => false,
        }
    }

    /// Set bit `i`, extending the underlying bytes if required.
    pub fn set_voted(&mut self, i: usize) {
        if i / 8 >= self.vec.len() {
            self.vec.resize(i / 8 + 1, 0);
        }
        self.vec[i / 8] |= mask(i);
    }

    /// Count the set bits.
    pub fn popcount(&self) -> usize {
        self.vec.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    /// Returns the index of the highest set bit, if any.
    pub fn highest_set_bit(&self) -> Option<usize> {
        self.vec
            .iter()
            .enumerate()
            .rev()
            .find(|(_, byte)| **byte != 0)
            .map(|(i, byte)| i * 8 + 7 - byte.trailing_zeros() as usize)
    }

    /// Iterate the indices of all set bits, ascending.
    pub fn set_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.vec.len() * 8).filter(move |i| self.has_voted(*i))
    }

    /// The length of the underlying byte vector.
    pub fn num_bytes(&self) -> usize {
        self.vec.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.vec
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.vec.clone()
    }
}

fn mask(i: usize) -> u8 {
    128 >> (i % 8)
}

impl fmt::Debug for BooleanBitfield {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in &self.vec {
            write!(f, "{:08b}", byte)?;
        }
        Ok(())
    }
}

impl Encodable for BooleanBitfield {
    fn ssz_append(&self, s: &mut SszStream) {
        s.append_bytes(&self.vec);
    }
}

impl Decodable for BooleanBitfield {
    fn ssz_decode(bytes: &[u8], index: usize) -> Result<(Self, usize), DecodeError> {
        let (vec, i) = decode_ssz_bytes(bytes, index)?;
        Ok((Self { vec }, i))
    }
}

impl TreeHash for BooleanBitfield {
    fn tree_hash(&self) -> Vec<u8> {
        hash(&self.vec)
    }
}
