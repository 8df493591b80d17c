use super::LENGTH_BYTES;

#[derive(Debug, PartialEq, Clone)]
pub enum DecodeError {
    TooShort,
    TooLong,
    Invalid(String),
}

pub trait Decodable: Sized {
    /// Decode a value starting at `index`, returning it along with the index of the next byte.
    fn ssz_decode(bytes: &[u8], index: usize) -> Result<(Self, usize), DecodeError>;
}

/// Decode the given bytes for the given type
///
/// The single ssz encoded value will be decoded as the given type at the
/// given index.
pub fn decode_ssz<T>(ssz_bytes: &[u8], index: usize) -> Result<(T, usize), DecodeError>
where
    T: Decodable,
{
    if index > ssz_bytes.len() {
        return Err(DecodeError::TooShort);
    }
    T::ssz_decode(ssz_bytes, index)
}

/// Decode a list, prefixed by its element count, of some decodable type.
pub fn decode_ssz_list<T>(ssz_bytes: &[u8], index: usize) -> Result<(Vec<T>, usize), DecodeError>
where
    T: Decodable,
{
    let count = decode_length(ssz_bytes, index, LENGTH_BYTES)?;
    let mut i = index + LENGTH_BYTES;

    /*
     * Each item takes at least one byte, so a count larger than the remaining bytes is
     * malformed. Checking early avoids a huge allocation.
     */
    if count > ssz_bytes.len().saturating_sub(i) {
        return Err(DecodeError::TooShort);
    }

    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let (item, next) = T::ssz_decode(ssz_bytes, i)?;
        items.push(item);
        i = next;
    }
    Ok((items, i))
}

/// Decode a byte string prefixed with its length.
pub fn decode_ssz_bytes(ssz_bytes: &[u8], index: usize) -> Result<(Vec<u8>, usize), DecodeError> {
    let len = decode_length(ssz_bytes, index, LENGTH_BYTES)?;
    let start = index + LENGTH_BYTES;
    let end = start.checked_add(len).ok_or(DecodeError::TooShort)?;
    let bytes = ssz_bytes.get(start..end).ok_or(DecodeError::TooShort)?;
    Ok((bytes.to_vec(), end))
}

/// Decode a 24-bit big-endian unsigned integer.
pub fn decode_uint24(ssz_bytes: &[u8], index: usize) -> Result<(u32, usize), DecodeError> {
    let bytes = ssz_bytes
        .get(index..index + 3)
        .ok_or(DecodeError::TooShort)?;
    let value = bytes
        .iter()
        .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte));
    Ok((value, index + 3))
}

/// Given some number of bytes, interpret the first `length_bytes` bytes from `index` as a
/// big-endian integer and return the result.
pub fn decode_length(
    bytes: &[u8],
    index: usize,
    length_bytes: usize,
) -> Result<usize, DecodeError> {
    let prefix = bytes
        .get(index..index + length_bytes)
        .ok_or(DecodeError::TooShort)?;
    let mut len: usize = 0;
    for (i, byte) in prefix.iter().enumerate() {
        let offset = (length_bytes - i - 1) * 8;
        len |= (*byte as usize) << offset;
    }
    Ok(len)
}
