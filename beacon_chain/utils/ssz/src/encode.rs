use super::LENGTH_BYTES;

pub trait Encodable {
    fn ssz_append(&self, s: &mut SszStream);
}

/// Provides a buffer for appending ssz-encodable values.
///
/// Use the `append()` fn to add a value to a list, then use
/// the `drain()` method to consume the struct and return the
/// ssz encoded bytes.
#[derive(Default)]
pub struct SszStream {
    buffer: Vec<u8>,
}

impl SszStream {
    /// Create a new, empty stream for writing ssz values.
    pub fn new() -> Self {
        SszStream { buffer: Vec::new() }
    }

    /// Append some ssz encodable value to the stream.
    pub fn append<E>(&mut self, value: &E) -> &mut Self
    where
        E: Encodable,
    {
        value.ssz_append(self);
        self
    }

    /// Append a byte string, prefixed with its length.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buffer
            .extend_from_slice(&encode_length(bytes.len(), LENGTH_BYTES));
        self.buffer.extend_from_slice(bytes);
        self
    }

    /// Append some ssz encoded bytes to the stream without a length prefix.
    pub fn append_encoded_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buffer.extend_from_slice(bytes);
        self
    }

    /// Append the element count of a list.
    pub fn append_list_length(&mut self, len: usize) -> &mut Self {
        self.buffer
            .extend_from_slice(&encode_length(len, LENGTH_BYTES));
        self
    }

    /// Append some list of encodable values to the stream.
    ///
    /// The number of items is written first, then each item in turn.
    pub fn append_vec<E>(&mut self, vec: &[E]) -> &mut Self
    where
        E: Encodable,
    {
        self.append_list_length(vec.len());
        for item in vec {
            item.ssz_append(self);
        }
        self
    }

    /// Consume the stream and return the underlying bytes.
    pub fn drain(self) -> Vec<u8> {
        self.buffer
    }
}

/// Encode some length into a ssz size prefix.
///
/// The ssz size prefix is 4 bytes, which is treated as a continuous
/// 32bit big-endian integer.
pub fn encode_length(len: usize, length_bytes: usize) -> Vec<u8> {
    assert!(length_bytes > 0); // For sanity
    assert!((len as u128) < 2u128.pow(length_bytes as u32 * 8));
    let mut header: Vec<u8> = vec![0; length_bytes];
    for (i, header_byte) in header.iter_mut().enumerate() {
        let offset = (length_bytes - i - 1) * 8;
        *header_byte = ((len >> offset) & 0xff) as u8;
    }
    header
}
