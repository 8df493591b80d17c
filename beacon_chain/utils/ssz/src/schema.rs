//! Descriptor-driven ssz for values whose type is only known at runtime.
//!
//! The byte layout is the same one produced by the `Encodable` implementations, so a typed record
//! can be checked against its schema.
use super::decode::{decode_length, decode_ssz_bytes, DecodeError};
use super::encode::encode_length;
use super::tree_hash::merkle_hash;
use super::{LENGTH_BYTES, MAX_LIST_SIZE};
use ethereum_types::{H160, H256};
use hashing::canonical_hash;
use num_bigint::{BigInt, Sign};
use std::str::FromStr;

const INTEGER_BITS: [usize; 9] = [8, 16, 24, 32, 40, 48, 64, 128, 256];

#[derive(Debug, PartialEq, Clone)]
pub enum SerializationError {
    UnknownType(String),
    NegativeUnsigned,
    IntegerOutOfRange { bits: usize },
    TypeMismatch { expected: String },
    ListTooLong(usize),
    Decode(DecodeError),
}

impl From<DecodeError> for SerializationError {
    fn from(e: DecodeError) -> SerializationError {
        SerializationError::Decode(e)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum SszType {
    Uint(usize),
    Int(usize),
    Address,
    Hash32,
    Bytes,
    List(Box<SszType>),
    /// Named fields in declaration order.
    Container(Vec<(String, SszType)>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum SszValue {
    Integer(BigInt),
    Address(H160),
    Hash32(H256),
    Bytes(Vec<u8>),
    List(Vec<SszValue>),
    /// Field values in the declaration order of the matching `SszType::Container`.
    Container(Vec<SszValue>),
}

impl SszValue {
    pub fn uint<T: Into<BigInt>>(value: T) -> Self {
        SszValue::Integer(value.into())
    }
}

impl SszType {
    /// Parse a textual descriptor such as `uint64`, `hash32` or `[int40]`.
    pub fn parse(name: &str) -> Result<SszType, SerializationError> {
        let unknown = || SerializationError::UnknownType(name.to_string());

        if let Some(inner) = name.strip_prefix('[') {
            let inner = inner.strip_suffix(']').ok_or_else(unknown)?;
            return Ok(SszType::List(Box::new(SszType::parse(inner)?)));
        }

        match name {
            "address" => return Ok(SszType::Address),
            "hash32" => return Ok(SszType::Hash32),
            "bytes" => return Ok(SszType::Bytes),
            _ => {}
        }

        let (signed, digits) = if let Some(digits) = name.strip_prefix("uint") {
            (false, digits)
        } else if let Some(digits) = name.strip_prefix("int") {
            (true, digits)
        } else {
            return Err(unknown());
        };

        let bits = usize::from_str(digits).map_err(|_| unknown())?;
        if !INTEGER_BITS.contains(&bits) {
            return Err(unknown());
        }

        Ok(if signed {
            SszType::Int(bits)
        } else {
            SszType::Uint(bits)
        })
    }

    fn name(&self) -> String {
        match self {
            SszType::Uint(bits) => format!("uint{}", bits),
            SszType::Int(bits) => format!("int{}", bits),
            SszType::Address => "address".to_string(),
            SszType::Hash32 => "hash32".to_string(),
            SszType::Bytes => "bytes".to_string(),
            SszType::List(inner) => format!("[{}]", inner.name()),
            SszType::Container(_) => "container".to_string(),
        }
    }
}

impl FromStr for SszType {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SszType::parse(s)
    }
}

pub fn serialize(value: &SszValue, typ: &SszType) -> Result<Vec<u8>, SerializationError> {
    let mut out = vec![];
    serialize_into(value, typ, &mut out)?;
    Ok(out)
}

fn serialize_into(
    value: &SszValue,
    typ: &SszType,
    out: &mut Vec<u8>,
) -> Result<(), SerializationError> {
    let mismatch = || SerializationError::TypeMismatch {
        expected: typ.name(),
    };

    match (typ, value) {
        (SszType::Uint(bits), SszValue::Integer(v)) => {
            out.extend_from_slice(&unsigned_bytes(v, *bits)?);
        }
        (SszType::Int(bits), SszValue::Integer(v)) => {
            out.extend_from_slice(&signed_bytes(v, *bits)?);
        }
        (SszType::Address, SszValue::Address(a)) => out.extend_from_slice(a.as_bytes()),
        (SszType::Hash32, SszValue::Hash32(h)) => out.extend_from_slice(h.as_bytes()),
        (SszType::Bytes, SszValue::Bytes(b)) => {
            out.extend_from_slice(&length_prefix(b.len())?);
            out.extend_from_slice(b);
        }
        (SszType::List(inner), SszValue::List(items)) => {
            out.extend_from_slice(&length_prefix(items.len())?);
            for item in items {
                serialize_into(item, inner, out)?;
            }
        }
        (SszType::Container(fields), SszValue::Container(values)) => {
            if fields.len() != values.len() {
                return Err(mismatch());
            }
            for ((_, field_type), field_value) in fields.iter().zip(values) {
                serialize_into(field_value, field_type, out)?;
            }
        }
        _ => return Err(mismatch()),
    }
    Ok(())
}

/// Decode `bytes` as a single value of type `typ`. Every byte must be consumed.
pub fn deserialize(bytes: &[u8], typ: &SszType) -> Result<SszValue, SerializationError> {
    let (value, i) = deserialize_at(bytes, 0, typ)?;
    if i != bytes.len() {
        return Err(DecodeError::TooLong.into());
    }
    Ok(value)
}

fn deserialize_at(
    bytes: &[u8],
    index: usize,
    typ: &SszType,
) -> Result<(SszValue, usize), SerializationError> {
    match typ {
        SszType::Uint(bits) | SszType::Int(bits) => {
            let width = bits / 8;
            let slice = take(bytes, index, width)?;
            let v = match typ {
                SszType::Int(_) => BigInt::from_signed_bytes_be(slice),
                _ => BigInt::from_bytes_be(Sign::Plus, slice),
            };
            Ok((SszValue::Integer(v), index + width))
        }
        SszType::Address => {
            let slice = take(bytes, index, 20)?;
            Ok((SszValue::Address(H160::from_slice(slice)), index + 20))
        }
        SszType::Hash32 => {
            let slice = take(bytes, index, 32)?;
            Ok((SszValue::Hash32(H256::from_slice(slice)), index + 32))
        }
        SszType::Bytes => {
            let (b, i) = decode_ssz_bytes(bytes, index)?;
            Ok((SszValue::Bytes(b), i))
        }
        SszType::List(inner) => {
            let count = decode_length(bytes, index, LENGTH_BYTES)?;
            let mut i = index + LENGTH_BYTES;
            if count > bytes.len().saturating_sub(i) {
                return Err(DecodeError::TooShort.into());
            }
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                let (item, next) = deserialize_at(bytes, i, inner)?;
                items.push(item);
                i = next;
            }
            Ok((SszValue::List(items), i))
        }
        SszType::Container(fields) => {
            let mut i = index;
            let mut values = Vec::with_capacity(fields.len());
            for (_, field_type) in fields {
                let (value, next) = deserialize_at(bytes, i, field_type)?;
                values.push(value);
                i = next;
            }
            Ok((SszValue::Container(values), i))
        }
    }
}

/// Tree hash of a dynamically typed value.
pub fn hash_ssz(value: &SszValue, typ: &SszType) -> Result<Vec<u8>, SerializationError> {
    let mismatch = || SerializationError::TypeMismatch {
        expected: typ.name(),
    };

    match (typ, value) {
        (SszType::Uint(_), _)
        | (SszType::Int(_), _)
        | (SszType::Address, _)
        | (SszType::Hash32, _) => serialize(value, typ),
        (SszType::Bytes, SszValue::Bytes(b)) => Ok(canonical_hash(b)),
        (SszType::List(inner), SszValue::List(items)) => {
            let hashes = items
                .iter()
                .map(|item| hash_ssz(item, inner))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(merkle_hash(&hashes))
        }
        (SszType::Container(fields), SszValue::Container(values)) => {
            if fields.len() != values.len() {
                return Err(mismatch());
            }
            let mut named: Vec<(&String, &SszType, &SszValue)> = fields
                .iter()
                .zip(values)
                .map(|((name, t), v)| (name, t, v))
                .collect();
            named.sort_by(|a, b| a.0.cmp(b.0));

            let mut joined = vec![];
            for (_, t, v) in named {
                joined.extend_from_slice(&hash_ssz(v, t)?);
            }
            Ok(canonical_hash(&joined))
        }
        _ => Err(mismatch()),
    }
}

fn take(bytes: &[u8], index: usize, len: usize) -> Result<&[u8], DecodeError> {
    let end = index.checked_add(len).ok_or(DecodeError::TooShort)?;
    bytes.get(index..end).ok_or(DecodeError::TooShort)
}

fn length_prefix(len: usize) -> Result<Vec<u8>, SerializationError> {
    if len >= MAX_LIST_SIZE {
        return Err(SerializationError::ListTooLong(len));
    }
    Ok(encode_length(len, LENGTH_BYTES))
}

fn unsigned_bytes(v: &BigInt, bits: usize) -> Result<Vec<u8>, SerializationError> {
    let width = bits / 8;
    let (sign, magnitude) = v.to_bytes_be();
    if sign == Sign::Minus {
        return Err(SerializationError::NegativeUnsigned);
    }
    if sign == Sign::NoSign {
        return Ok(vec![0; width]);
    }
    if magnitude.len() > width {
        return Err(SerializationError::IntegerOutOfRange { bits });
    }
    let mut out = vec![0; width - magnitude.len()];
    out.extend_from_slice(&magnitude);
    Ok(out)
}

fn signed_bytes(v: &BigInt, bits: usize) -> Result<Vec<u8>, SerializationError> {
    let width = bits / 8;
    let bound = BigInt::from(1u8) << (bits - 1);
    if *v >= bound || *v < -bound {
        return Err(SerializationError::IntegerOutOfRange { bits });
    }
    let twos = v.to_signed_bytes_be();
    let fill = if v.sign() == Sign::Minus { 0xff } else { 0x00 };
    let mut out = vec![fill; width.saturating_sub(twos.len())];
    out.extend_from_slice(&twos);
    Ok(out)
}
