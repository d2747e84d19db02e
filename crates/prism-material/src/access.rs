//! Typed decoding of stored properties with caller-capacity negotiation.
//!
//! Array accessors take the caller's output slice and report how many
//! elements were actually copied; copying fewer than stored or fewer than
//! requested is success, not an error, and the destination tail is never
//! touched.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::PropertyError;
use crate::keys;
use crate::material::Material;
use crate::property::{PropertyData, PropertyTypeInfo};

// ---------------------------------------------------------------------------
// Color4
// ---------------------------------------------------------------------------

/// Linear RGBA color as returned by [`Material::color`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color4 {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component; 1.0 is fully opaque.
    pub a: f32,
}

// ---------------------------------------------------------------------------
// Typed accessors
// ---------------------------------------------------------------------------

impl Material {
    /// Copies up to `out.len()` elements of the float array stored under
    /// `key` into `out` and returns the number copied.
    ///
    /// The copied count is `min(out.len(), stored element count)`; elements
    /// of `out` past that count are left untouched.
    ///
    /// # Errors
    ///
    /// [`PropertyError::KeyNotFound`] if the key is absent,
    /// [`PropertyError::TypeMismatch`] if the property was not stored as
    /// [`PropertyTypeInfo::Float`], and [`PropertyError::OutOfRange`] if
    /// `out` has zero capacity.
    pub fn float_array(&self, key: &str, out: &mut [f32]) -> Result<usize, PropertyError> {
        if out.is_empty() {
            return Err(PropertyError::OutOfRange(format!(
                "zero-capacity output buffer for '{key}', at least one element is required"
            )));
        }
        let values = self.floats_for(key)?;
        let copied = values.len().min(out.len());
        out[..copied].copy_from_slice(&values[..copied]);
        Ok(copied)
    }

    /// First element of the float array stored under `key`.
    ///
    /// # Errors
    ///
    /// [`PropertyError::KeyNotFound`] if the key is absent or the stored
    /// array is empty (there is no first element), and
    /// [`PropertyError::TypeMismatch`] on a wrong type tag.
    pub fn float(&self, key: &str) -> Result<f32, PropertyError> {
        match self.floats_for(key)?.first() {
            Some(&value) => Ok(value),
            None => Err(PropertyError::KeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// Copies up to `out.len()` elements of the integer array stored under
    /// `key` into `out` and returns the number copied.
    ///
    /// Same capacity-negotiation contract as [`Material::float_array`].
    ///
    /// # Errors
    ///
    /// [`PropertyError::KeyNotFound`], [`PropertyError::TypeMismatch`], or
    /// [`PropertyError::OutOfRange`] on a zero-capacity buffer.
    pub fn integer_array(&self, key: &str, out: &mut [i32]) -> Result<usize, PropertyError> {
        if out.is_empty() {
            return Err(PropertyError::OutOfRange(format!(
                "zero-capacity output buffer for '{key}', at least one element is required"
            )));
        }
        let values = self.integers_for(key)?;
        let copied = values.len().min(out.len());
        out[..copied].copy_from_slice(&values[..copied]);
        Ok(copied)
    }

    /// First element of the integer array stored under `key`.
    ///
    /// # Errors
    ///
    /// Same contract as [`Material::float`].
    pub fn integer(&self, key: &str) -> Result<i32, PropertyError> {
        match self.integers_for(key)?.first() {
            Some(&value) => Ok(value),
            None => Err(PropertyError::KeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// Decodes the float array stored under `key` as a linear RGBA color.
    ///
    /// Missing trailing components take deterministic defaults: 0.0 for
    /// the color channels and 1.0 (fully opaque) for alpha. Stored
    /// components past the fourth are ignored.
    ///
    /// # Errors
    ///
    /// [`PropertyError::KeyNotFound`] or [`PropertyError::TypeMismatch`].
    pub fn color(&self, key: &str) -> Result<Color4, PropertyError> {
        let mut components = [0.0, 0.0, 0.0, 1.0];
        self.float_array(key, &mut components)?;
        Ok(Color4 {
            r: components[0],
            g: components[1],
            b: components[2],
            a: components[3],
        })
    }

    /// Borrows the string stored under `key`.
    ///
    /// The borrow tracks the exact stored length — embedded NUL bytes are
    /// preserved, no terminator is involved — and stays valid only while
    /// the material is unmodified.
    ///
    /// # Errors
    ///
    /// [`PropertyError::KeyNotFound`] or [`PropertyError::TypeMismatch`].
    pub fn string(&self, key: &str) -> Result<&str, PropertyError> {
        let property = self.find(key).ok_or_else(|| PropertyError::KeyNotFound {
            key: key.to_string(),
        })?;
        match property.data() {
            PropertyData::String(text) => Ok(text),
            other => Err(PropertyError::TypeMismatch {
                key: key.to_string(),
                stored: other.type_info(),
                requested: PropertyTypeInfo::String,
            }),
        }
    }

    /// The material's display name, if a producer stored one under
    /// [`keys::NAME`].
    ///
    /// # Errors
    ///
    /// Same contract as [`Material::string`].
    pub fn name(&self) -> Result<&str, PropertyError> {
        self.string(keys::NAME)
    }

    fn floats_for(&self, key: &str) -> Result<&[f32], PropertyError> {
        let property = self.find(key).ok_or_else(|| PropertyError::KeyNotFound {
            key: key.to_string(),
        })?;
        match property.data() {
            PropertyData::Float(values) => Ok(values),
            other => Err(PropertyError::TypeMismatch {
                key: key.to_string(),
                stored: other.type_info(),
                requested: PropertyTypeInfo::Float,
            }),
        }
    }

    fn integers_for(&self, key: &str) -> Result<&[i32], PropertyError> {
        let property = self.find(key).ok_or_else(|| PropertyError::KeyNotFound {
            key: key.to_string(),
        })?;
        match property.data() {
            PropertyData::Integer(values) => Ok(values),
            other => Err(PropertyError::TypeMismatch {
                key: key.to_string(),
                stored: other.type_info(),
                requested: PropertyTypeInfo::Integer,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_array_round_trips_exactly() {
        let mut material = Material::new();
        material.set_floats("$clr.diffuse", &[0.1, 0.2, 0.3, 1.0]);

        let mut out = [0.0f32; 4];
        let copied = material.float_array("$clr.diffuse", &mut out).unwrap();
        assert_eq!(copied, 4);
        assert_eq!(out, [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn test_float_array_partial_copy_never_touches_the_tail() {
        let mut material = Material::new();
        material.set_floats("$clr.diffuse", &[0.1, 0.2, 0.3, 1.0]);

        let mut out = [9.0f32; 4];
        let copied = material.float_array("$clr.diffuse", &mut out[..2]).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(out, [0.1, 0.2, 9.0, 9.0]);
    }

    #[test]
    fn test_float_array_reports_fewer_than_requested_when_stored_is_short() {
        let mut material = Material::new();
        material.set_floats("$mat.opacity", &[0.75]);

        let mut out = [5.0f32; 3];
        let copied = material.float_array("$mat.opacity", &mut out).unwrap();
        assert_eq!(copied, 1);
        assert_eq!(out, [0.75, 5.0, 5.0]);
    }

    #[test]
    fn test_float_array_zero_capacity_is_out_of_range() {
        let mut material = Material::new();
        material.set_float("$mat.opacity", 1.0);

        let result = material.float_array("$mat.opacity", &mut []);
        assert!(matches!(result, Err(PropertyError::OutOfRange(_))));
    }

    #[test]
    fn test_float_on_absent_key_is_key_not_found() {
        let material = Material::new();
        let result = material.float("$mat.never.inserted");
        assert!(matches!(result, Err(PropertyError::KeyNotFound { .. })));
    }

    #[test]
    fn test_float_on_empty_stored_array_is_key_not_found() {
        let mut material = Material::new();
        material.set_floats("$mat.empty", &[]);

        let result = material.float("$mat.empty");
        assert!(matches!(result, Err(PropertyError::KeyNotFound { .. })));
    }

    #[test]
    fn test_string_property_read_as_float_is_type_mismatch() {
        let mut material = Material::new();
        material.set_string("$mat.name", "stone");

        let mut out = [0.0f32; 1];
        let result = material.float_array("$mat.name", &mut out);
        assert!(matches!(
            result,
            Err(PropertyError::TypeMismatch {
                stored: PropertyTypeInfo::String,
                requested: PropertyTypeInfo::Float,
                ..
            })
        ));
    }

    #[test]
    fn test_integer_array_round_trips_and_negotiates_capacity() {
        let mut material = Material::new();
        material.set_integers("$mat.flags", &[1, 0, 7, -2]);

        let mut out = [0i32; 8];
        let copied = material.integer_array("$mat.flags", &mut out).unwrap();
        assert_eq!(copied, 4);
        assert_eq!(&out[..4], [1, 0, 7, -2]);
        assert_eq!(&out[4..], [0, 0, 0, 0]);
    }

    #[test]
    fn test_integer_reads_the_first_element() {
        let mut material = Material::new();
        material.set_integer("$mat.wireframe", 1);
        assert_eq!(material.integer("$mat.wireframe").unwrap(), 1);
    }

    #[test]
    fn test_color_reads_four_components() {
        let mut material = Material::new();
        material.set_floats("$clr.specular", &[0.9, 0.8, 0.7, 0.5]);

        let color = material.color("$clr.specular").unwrap();
        assert_eq!(
            color,
            Color4 {
                r: 0.9,
                g: 0.8,
                b: 0.7,
                a: 0.5
            }
        );
    }

    #[test]
    fn test_color_defaults_alpha_to_opaque_for_rgb_arrays() {
        let mut material = Material::new();
        material.set_floats("$clr.diffuse", &[0.2, 0.4, 0.6]);

        let color = material.color("$clr.diffuse").unwrap();
        assert_eq!(color.r, 0.2);
        assert_eq!(color.g, 0.4);
        assert_eq!(color.b, 0.6);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_string_round_trips_with_embedded_nul() {
        let mut material = Material::new();
        material.set_string("$mat.name", "two\0parts");

        let text = material.string("$mat.name").unwrap();
        assert_eq!(text, "two\0parts");
        assert_eq!(text.len(), 9);
    }

    #[test]
    fn test_string_on_float_property_is_type_mismatch() {
        let mut material = Material::new();
        material.set_float("$mat.opacity", 1.0);

        assert!(matches!(
            material.string("$mat.opacity"),
            Err(PropertyError::TypeMismatch {
                stored: PropertyTypeInfo::Float,
                requested: PropertyTypeInfo::String,
                ..
            })
        ));
    }

    #[test]
    fn test_name_reads_the_standard_name_key() {
        let mut material = Material::new();
        material.set_string(keys::NAME, "brushed_steel");
        assert_eq!(material.name().unwrap(), "brushed_steel");
    }

    #[test]
    fn test_color4_serializes_for_external_persistence() {
        let color = Color4 {
            r: 1.0,
            g: 0.5,
            b: 0.0,
            a: 1.0,
        };
        let json = serde_json::to_string(&color).unwrap();
        let back: Color4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }
}
