//! The material property table: an owning, growable collection of
//! [`Property`] entries with case-insensitive key lookup.

use serde::{Deserialize, Serialize};

use crate::error::PropertyError;
use crate::property::{Property, PropertyData, PropertyTypeInfo};

// ---------------------------------------------------------------------------
// Material
// ---------------------------------------------------------------------------

/// Key/value table describing the surface appearance of one material.
///
/// The typical lifecycle is populate-once, read-many: a format-specific
/// importer inserts typed properties under semantic keys, then renderers
/// query them through the typed accessors. Entries keep insertion order;
/// lookup does not depend on it. Shared reads are safe, mutation requires
/// exclusive access — the reader/writer discipline the store needs is
/// exactly what the borrow checker enforces.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Live entries in insertion order. No two entries share a
    /// case-insensitively-equal key.
    properties: Vec<Property>,
}

impl Material {
    /// Creates an empty material.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `key`, overwriting any existing entry whose key
    /// matches case-insensitively.
    ///
    /// Overwrites replace the entry in its slot, so iteration order stays
    /// stable; the stored key spelling is updated to `key`. Ownership of
    /// the payload transfers to the store.
    pub fn set(&mut self, key: impl Into<String>, data: PropertyData) {
        let key = key.into();
        match self.position(&key) {
            Some(index) => {
                let prior = self.properties[index].type_info();
                if prior != data.type_info() {
                    log::debug!(
                        "property '{key}' overwritten with a different type: {prior:?} -> {:?}",
                        data.type_info()
                    );
                }
                self.properties[index] = Property::new(key, data);
            }
            None => self.properties.push(Property::new(key, data)),
        }
    }

    /// Stores a float array under `key`.
    pub fn set_floats(&mut self, key: impl Into<String>, values: &[f32]) {
        self.set(key, PropertyData::Float(values.to_vec()));
    }

    /// Stores a single float under `key`.
    pub fn set_float(&mut self, key: impl Into<String>, value: f32) {
        self.set(key, PropertyData::Float(vec![value]));
    }

    /// Stores an integer array under `key`.
    pub fn set_integers(&mut self, key: impl Into<String>, values: &[i32]) {
        self.set(key, PropertyData::Integer(values.to_vec()));
    }

    /// Stores a single integer under `key`.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.set(key, PropertyData::Integer(vec![value]));
    }

    /// Stores a string under `key`. The exact length is tracked; embedded
    /// NUL bytes are preserved.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, PropertyData::String(value.into()));
    }

    /// Stores an opaque binary buffer under `key`.
    pub fn set_buffer(&mut self, key: impl Into<String>, bytes: &[u8]) {
        self.set(key, PropertyData::Buffer(bytes.to_vec()));
    }

    /// Producer entry point: decodes `bytes` according to `type_info` and
    /// stores the result under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidPayload`] if `bytes` is inconsistent
    /// with `type_info`; nothing is inserted in that case.
    pub fn set_raw(
        &mut self,
        key: impl Into<String>,
        type_info: PropertyTypeInfo,
        bytes: &[u8],
    ) -> Result<(), PropertyError> {
        let data = PropertyData::from_bytes(type_info, bytes)?;
        self.set(key, data);
        Ok(())
    }

    /// Looks up a property by exact, case-insensitive key match.
    ///
    /// Absence is an expected outcome, not an error; optional-attribute
    /// lookups call this constantly. The returned borrow is valid only
    /// while the material is unmodified.
    pub fn find(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.key_matches(key))
    }

    /// Removes the entry for `key` if present. Returns whether anything
    /// was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(index) => {
                self.properties.remove(index);
                true
            }
            None => false,
        }
    }

    /// Releases all entries.
    pub fn clear(&mut self) {
        self.properties.clear();
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if the material holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.key_matches(key))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
