//! Core property types: [`PropertyTypeInfo`], [`PropertyData`], and [`Property`].

use bytemuck::cast_slice;
use serde::{Deserialize, Serialize};

use crate::error::PropertyError;

// ---------------------------------------------------------------------------
// PropertyTypeInfo
// ---------------------------------------------------------------------------

/// Declares how a property's payload bytes are interpreted.
///
/// The tag is fixed when the property is created and checked before every
/// typed decode; it is never inferred from the payload length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyTypeInfo {
    /// Packed array of `f32` values in native endianness.
    Float,
    /// Length-tracked UTF-8 text. Embedded NUL bytes are legal and count
    /// toward the tracked length; no terminator is stored or relied upon.
    String,
    /// Packed array of `i32` values in native endianness.
    Integer,
    /// Opaque binary payload.
    Buffer,
}

// ---------------------------------------------------------------------------
// PropertyData
// ---------------------------------------------------------------------------

/// Typed payload of a single property.
///
/// Producers that only know the wire-level encoding go through
/// [`PropertyData::from_bytes`]; consumers read the typed variants directly
/// or through the byte view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PropertyData {
    /// Float array payload.
    Float(Vec<f32>),
    /// Integer array payload.
    Integer(Vec<i32>),
    /// Text payload with exact tracked length.
    String(String),
    /// Opaque binary payload.
    Buffer(Vec<u8>),
}

impl PropertyData {
    /// Returns the type tag matching this payload.
    pub fn type_info(&self) -> PropertyTypeInfo {
        match self {
            Self::Float(_) => PropertyTypeInfo::Float,
            Self::Integer(_) => PropertyTypeInfo::Integer,
            Self::String(_) => PropertyTypeInfo::String,
            Self::Buffer(_) => PropertyTypeInfo::Buffer,
        }
    }

    /// Decodes a raw byte payload according to `type_info`.
    ///
    /// Numeric payloads must hold a whole number of elements in the store's
    /// native endianness; string payloads must be valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidPayload`] if `bytes` is inconsistent
    /// with `type_info`.
    pub fn from_bytes(type_info: PropertyTypeInfo, bytes: &[u8]) -> Result<Self, PropertyError> {
        match type_info {
            PropertyTypeInfo::Float => Ok(Self::Float(decode_packed::<f32>(bytes)?)),
            PropertyTypeInfo::Integer => Ok(Self::Integer(decode_packed::<i32>(bytes)?)),
            PropertyTypeInfo::String => match std::str::from_utf8(bytes) {
                Ok(text) => Ok(Self::String(text.to_string())),
                Err(err) => Err(PropertyError::InvalidPayload(format!(
                    "string payload is not valid UTF-8: {err}"
                ))),
            },
            PropertyTypeInfo::Buffer => Ok(Self::Buffer(bytes.to_vec())),
        }
    }

    /// Wire-level byte view of the payload.
    ///
    /// Packed numeric variants are viewed in native endianness; strings are
    /// viewed as their exact UTF-8 bytes with no terminator.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Float(values) => cast_slice(values),
            Self::Integer(values) => cast_slice(values),
            Self::String(text) => text.as_bytes(),
            Self::Buffer(bytes) => bytes,
        }
    }

    /// Payload size in bytes (not element count).
    pub fn byte_len(&self) -> usize {
        self.as_bytes().len()
    }
}

/// Decodes a packed native-endian buffer into whole elements.
fn decode_packed<T: bytemuck::AnyBitPattern>(bytes: &[u8]) -> Result<Vec<T>, PropertyError> {
    let width = std::mem::size_of::<T>();
    if !bytes.len().is_multiple_of(width) {
        return Err(PropertyError::InvalidPayload(format!(
            "payload of {} bytes is not a whole number of {width}-byte elements",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(width)
        .map(bytemuck::pod_read_unaligned)
        .collect())
}

// ---------------------------------------------------------------------------
// Property
// ---------------------------------------------------------------------------

/// A single typed, named value inside a [`Material`](crate::Material).
///
/// Keys are matched case-insensitively but stored verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    key: String,
    data: PropertyData,
}

impl Property {
    pub(crate) fn new(key: impl Into<String>, data: PropertyData) -> Self {
        Self {
            key: key.into(),
            data,
        }
    }

    /// The key, with the spelling it was inserted under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Type tag declaring how the payload is interpreted.
    pub fn type_info(&self) -> PropertyTypeInfo {
        self.data.type_info()
    }

    /// The typed payload.
    pub fn data(&self) -> &PropertyData {
        &self.data
    }

    /// Wire-level byte view of the payload.
    pub fn bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }

    /// Payload size in bytes (not element count).
    pub fn byte_len(&self) -> usize {
        self.data.byte_len()
    }

    /// Returns `true` if `candidate` matches this property's key, ignoring
    /// ASCII case.
    pub fn key_matches(&self, candidate: &str) -> bool {
        self.key.eq_ignore_ascii_case(candidate)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_payload_round_trips_through_bytes() {
        let original = PropertyData::Float(vec![0.25, -1.5, 3.0]);
        let bytes = original.as_bytes().to_vec();
        assert_eq!(bytes.len(), 12);

        let decoded = PropertyData::from_bytes(PropertyTypeInfo::Float, &bytes).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(decoded.as_bytes(), &bytes[..]);
    }

    #[test]
    fn test_integer_payload_round_trips_through_bytes() {
        let original = PropertyData::Integer(vec![-7, 0, 65536]);
        let bytes = original.as_bytes().to_vec();

        let decoded = PropertyData::from_bytes(PropertyTypeInfo::Integer, &bytes).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(decoded.byte_len(), 12);
    }

    #[test]
    fn test_string_payload_keeps_embedded_nul_and_exact_length() {
        let text = "before\0after";
        let decoded =
            PropertyData::from_bytes(PropertyTypeInfo::String, text.as_bytes()).unwrap();

        assert_eq!(decoded, PropertyData::String(text.to_string()));
        assert_eq!(decoded.byte_len(), text.len());
        assert_eq!(decoded.as_bytes(), text.as_bytes());
    }

    #[test]
    fn test_buffer_payload_is_opaque() {
        let bytes = [0u8, 159, 146, 150]; // not valid UTF-8, not 4-aligned meaning
        let decoded = PropertyData::from_bytes(PropertyTypeInfo::Buffer, &bytes).unwrap();
        assert_eq!(decoded, PropertyData::Buffer(bytes.to_vec()));
    }

    #[test]
    fn test_misaligned_float_payload_is_rejected() {
        let result = PropertyData::from_bytes(PropertyTypeInfo::Float, &[0u8; 7]);
        assert!(matches!(result, Err(PropertyError::InvalidPayload(_))));
    }

    #[test]
    fn test_non_utf8_string_payload_is_rejected() {
        let result = PropertyData::from_bytes(PropertyTypeInfo::String, &[0xFF, 0xFE]);
        assert!(matches!(result, Err(PropertyError::InvalidPayload(_))));
    }

    #[test]
    fn test_type_info_matches_variant() {
        assert_eq!(
            PropertyData::Float(vec![]).type_info(),
            PropertyTypeInfo::Float
        );
        assert_eq!(
            PropertyData::Integer(vec![]).type_info(),
            PropertyTypeInfo::Integer
        );
        assert_eq!(
            PropertyData::String(String::new()).type_info(),
            PropertyTypeInfo::String
        );
        assert_eq!(
            PropertyData::Buffer(vec![]).type_info(),
            PropertyTypeInfo::Buffer
        );
    }

    #[test]
    fn test_key_matches_ignores_ascii_case_only() {
        let property = Property::new("Mat.Opacity", PropertyData::Float(vec![1.0]));
        assert!(property.key_matches("mat.opacity"));
        assert!(property.key_matches("MAT.OPACITY"));
        assert!(!property.key_matches(" mat.opacity")); // no trimming
        assert_eq!(property.key(), "Mat.Opacity"); // stored verbatim
    }
}
