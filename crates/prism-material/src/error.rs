//! Property lookup and decode error types.

use thiserror::Error;

use crate::property::PropertyTypeInfo;

/// Errors returned by property lookups, typed decodes, and texture queries.
#[derive(Debug, Error)]
pub enum PropertyError {
    /// No property with the requested key exists in the store.
    ///
    /// Absence of an optional attribute is an expected, common outcome;
    /// well-behaved callers do not log this variant as an error.
    #[error("property not found: {key}")]
    KeyNotFound {
        /// The key that failed to resolve.
        key: String,
    },

    /// The stored type tag disagrees with the requested decode.
    ///
    /// This is a producer/consumer contract violation and is always
    /// surfaced, never papered over by reinterpreting bytes.
    #[error("type mismatch for {key}: stored {stored:?}, requested {requested:?}")]
    TypeMismatch {
        /// The key the caller queried.
        key: String,
        /// Tag the property was stored with.
        stored: PropertyTypeInfo,
        /// Tag the caller asked to decode as.
        requested: PropertyTypeInfo,
    },

    /// A texture channel index exceeded
    /// [`MAX_TEXTURE_CHANNELS`](crate::keys::MAX_TEXTURE_CHANNELS) or an
    /// output buffer had zero capacity.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// A raw payload was inconsistent with its declared type tag, or a
    /// stored value has no decoding in the requested domain.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}
