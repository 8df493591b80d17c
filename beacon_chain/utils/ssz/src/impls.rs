use super::decode::{decode_ssz_list, Decodable, DecodeError};
use super::encode::{Encodable, SszStream};
use bytes::{BufMut, BytesMut};
use ethereum_types::{H160, H256};

macro_rules! impl_encodable_for_uint {
    ($type: ident, $put: ident) => {
        impl Encodable for $type {
            fn ssz_append(&self, s: &mut SszStream) {
                let mut buf = BytesMut::with_capacity(std::mem::size_of::<$type>());
                buf.$put(*self);
                s.append_encoded_raw(&buf);
            }
        }
    };
}

macro_rules! impl_decodable_for_uint {
    ($type: ident) => {
        impl Decodable for $type {
            fn ssz_decode(bytes: &[u8], index: usize) -> Result<(Self, usize), DecodeError> {
                let len = std::mem::size_of::<$type>();
                let end = index.checked_add(len).ok_or(DecodeError::TooShort)?;
                let slice = bytes.get(index..end).ok_or(DecodeError::TooShort)?;
                let mut arr = [0u8; std::mem::size_of::<$type>()];
                arr.copy_from_slice(slice);
                Ok(($type::from_be_bytes(arr), end))
            }
        }
    };
}

impl_encodable_for_uint!(u8, put_u8);
impl_encodable_for_uint!(u16, put_u16);
impl_encodable_for_uint!(u32, put_u32);
impl_encodable_for_uint!(u64, put_u64);
impl_encodable_for_uint!(u128, put_u128);

impl_decodable_for_uint!(u8);
impl_decodable_for_uint!(u16);
impl_decodable_for_uint!(u32);
impl_decodable_for_uint!(u64);
impl_decodable_for_uint!(u128);

impl Encodable for H256 {
    fn ssz_append(&self, s: &mut SszStream) {
        s.append_encoded_raw(self.as_bytes());
    }
}

impl Decodable for H256 {
    fn ssz_decode(bytes: &[u8], index: usize) -> Result<(Self, usize), DecodeError> {
        let slice = bytes.get(index..index + 32).ok_or(DecodeError::TooShort)?;
        Ok((H256::from_slice(slice), index + 32))
    }
}

impl Encodable for H160 {
    fn ssz_append(&self, s: &mut SszStream) {
        s.append_encoded_raw(self.as_bytes());
    }
}

impl Decodable for H160 {
    fn ssz_decode(bytes: &[u8], index: usize) -> Result<(Self, usize), DecodeError> {
        let slice = bytes.get(index..index + 20).ok_or(DecodeError::TooShort)?;
        Ok((H160::from_slice(slice), index + 20))
    }
}

impl<T> Encodable for Vec<T>
where
    T: Encodable,
{
    fn ssz_append(&self, s: &mut SszStream) {
        s.append_vec(self);
    }
}

impl<T> Decodable for Vec<T>
where
    T: Decodable,
{
    fn ssz_decode(bytes: &[u8], index: usize) -> Result<(Self, usize), DecodeError> {
        decode_ssz_list(bytes, index)
    }
}

/// Big-endian encoding of the low 24 bits of `value`.
pub fn uint24_bytes(value: u32) -> [u8; 3] {
    let b = value.to_be_bytes();
    [b[1], b[2], b[3]]
}
