//! Shading-model selection, stored as an integer property under
//! [`keys::SHADING_MODEL`].

use serde::{Deserialize, Serialize};

use crate::error::PropertyError;
use crate::keys;
use crate::material::Material;

// ---------------------------------------------------------------------------
// ShadingMode
// ---------------------------------------------------------------------------

/// Shading models a producer can request for a material.
///
/// The list follows the classic fixed set exchanged by content tools; a
/// renderer is free to substitute the closest model it implements. The API
/// does not distinguish specular from diffuse shaders, so the specular term
/// of diffuse-only models like Oren-Nayar stays undefined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShadingMode {
    /// Per-face flat shading, diffuse only.
    Flat,
    /// Per-vertex diffuse (gouraud) shading.
    Gouraud,
    /// Per-pixel diffuse/specular phong shading.
    Phong,
    /// Per-pixel phong-blinn shading; cheaper than phong.
    Blinn,
    /// Per-pixel toon shading, often combined with edge detection.
    Toon,
    /// Oren-Nayar: lambertian shading extended with a roughness term.
    OrenNayar,
    /// Minnaert: lambertian shading extended with a darkness term.
    Minnaert,
    /// Cook-Torrance microfacet shading.
    CookTorrance,
    /// No shading at all; output the raw surface color.
    NoShading,
}

impl ShadingMode {
    /// Stable integer value producers store the mode under.
    pub fn raw(self) -> i32 {
        match self {
            Self::Flat => 1,
            Self::Gouraud => 2,
            Self::Phong => 3,
            Self::Blinn => 4,
            Self::Toon => 5,
            Self::OrenNayar => 6,
            Self::Minnaert => 7,
            Self::CookTorrance => 8,
            Self::NoShading => 9,
        }
    }

    /// Maps a stored integer back to a shading mode, or `None` if the
    /// value is unrecognized.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            1 => Some(Self::Flat),
            2 => Some(Self::Gouraud),
            3 => Some(Self::Phong),
            4 => Some(Self::Blinn),
            5 => Some(Self::Toon),
            6 => Some(Self::OrenNayar),
            7 => Some(Self::Minnaert),
            8 => Some(Self::CookTorrance),
            9 => Some(Self::NoShading),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Shading accessors
// ---------------------------------------------------------------------------

impl Material {
    /// The shading model requested for this material.
    ///
    /// # Errors
    ///
    /// [`PropertyError::KeyNotFound`] if no model was stored,
    /// [`PropertyError::TypeMismatch`] if the key holds a non-integer
    /// property, and [`PropertyError::InvalidPayload`] if the stored value
    /// maps to no known mode.
    pub fn shading_mode(&self) -> Result<ShadingMode, PropertyError> {
        let raw = self.integer(keys::SHADING_MODEL)?;
        ShadingMode::from_raw(raw).ok_or_else(|| {
            PropertyError::InvalidPayload(format!("unrecognized shading mode value {raw}"))
        })
    }

    /// Stores `mode` under the standard shading-model key.
    pub fn set_shading_mode(&mut self, mode: ShadingMode) {
        self.set_integer(keys::SHADING_MODEL, mode.raw());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shading_mode_round_trips_through_the_store() {
        let mut material = Material::new();
        material.set_shading_mode(ShadingMode::CookTorrance);

        assert_eq!(material.shading_mode().unwrap(), ShadingMode::CookTorrance);
        assert_eq!(
            material.integer(keys::SHADING_MODEL).unwrap(),
            ShadingMode::CookTorrance.raw()
        );
    }

    #[test]
    fn test_raw_values_are_injective() {
        let modes = [
            ShadingMode::Flat,
            ShadingMode::Gouraud,
            ShadingMode::Phong,
            ShadingMode::Blinn,
            ShadingMode::Toon,
            ShadingMode::OrenNayar,
            ShadingMode::Minnaert,
            ShadingMode::CookTorrance,
            ShadingMode::NoShading,
        ];
        let mut raws: Vec<i32> = modes.iter().map(|m| m.raw()).collect();
        raws.sort_unstable();
        raws.dedup();
        assert_eq!(raws.len(), modes.len());

        for mode in modes {
            assert_eq!(ShadingMode::from_raw(mode.raw()), Some(mode));
        }
    }

    #[test]
    fn test_missing_shading_mode_is_key_not_found() {
        let material = Material::new();
        assert!(matches!(
            material.shading_mode(),
            Err(PropertyError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_unrecognized_stored_value_is_invalid_payload() {
        let mut material = Material::new();
        material.set_integer(keys::SHADING_MODEL, 77);

        assert!(matches!(
            material.shading_mode(),
            Err(PropertyError::InvalidPayload(_))
        ));
    }
}
