/*
 * Simple serialization ("ssz") for beacon chain records.
 *
 * Two interfaces share a single byte layout:
 *
 * - `Encodable`/`Decodable`, implemented statically by each record type.
 * - `SszType`/`SszValue`, a descriptor-driven encoding of dynamically typed values.
 *
 * Layout: integers are fixed-width big-endian, addresses and hashes are raw bytes, byte strings
 * carry a 4-byte length prefix and lists carry a 4-byte element count. Records concatenate their
 * fields in declaration order.
 */
mod decode;
mod encode;
mod impls;
pub mod schema;
mod tree_hash;

pub use crate::decode::{
    decode_length, decode_ssz, decode_ssz_bytes, decode_ssz_list, decode_uint24, Decodable,
    DecodeError,
};
pub use crate::encode::{encode_length, Encodable, SszStream};
pub use crate::impls::uint24_bytes;
pub use crate::schema::{deserialize, hash_ssz, serialize, SerializationError, SszType, SszValue};
pub use crate::tree_hash::{merkle_hash, TreeHash, CHUNKSIZE};
pub use hashing::canonical_hash as hash;

pub const LENGTH_BYTES: usize = 4;
pub const MAX_LIST_SIZE: usize = 1 << (LENGTH_BYTES * 8);

/// Convenience function to SSZ encode some value.
pub fn ssz_encode<T>(val: &T) -> Vec<u8>
where
    T: Encodable,
{
    let mut stream = SszStream::new();
    stream.append(val);
    stream.drain()
}

/// Decode a value that must occupy all of `bytes`.
pub fn decode<T>(bytes: &[u8]) -> Result<T, DecodeError>
where
    T: Decodable,
{
    let (value, i) = T::ssz_decode(bytes, 0)?;
    if i == bytes.len() {
        Ok(value)
    } else {
        Err(DecodeError::TooLong)
    }
}
