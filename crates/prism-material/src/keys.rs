//! Key composition for the standard material property namespace.
//!
//! A full key is either a bare name (the constants below) or a channelled
//! key encoding a texture usage kind and channel index. The exact strings
//! are the interoperability contract between producers and consumers:
//! producers must emit these names for consumers to recognize standard
//! attributes, while unrecognized keys are preserved and retrievable but
//! carry no standard semantics. Matching is case-insensitive everywhere in
//! the store; there is no other normalization.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Standard bare keys
// ---------------------------------------------------------------------------

/// Name of the material (string).
pub const NAME: &str = "$mat.name";

/// Shading model to use (integer, see [`ShadingMode`](crate::ShadingMode)).
pub const SHADING_MODEL: &str = "$mat.shadingm";

/// 1 to render the material as wireframe (integer).
pub const ENABLE_WIREFRAME: &str = "$mat.wireframe";

/// Base opacity of the material (float).
pub const OPACITY: &str = "$mat.opacity";

/// Height scaling of a bump map (float).
pub const BUMP_SCALING: &str = "$mat.bumpscaling";

/// Base shininess of the material, the exponent of the phong equation
/// (float).
pub const SHININESS: &str = "$mat.shininess";

/// Strength of the specular highlight (float).
pub const SHININESS_STRENGTH: &str = "$mat.shinpercent";

/// Diffuse base color (float array, see [`Material::color`](crate::Material::color)).
pub const COLOR_DIFFUSE: &str = "$clr.diffuse";

/// Ambient base color (float array).
pub const COLOR_AMBIENT: &str = "$clr.ambient";

/// Specular base color (float array).
pub const COLOR_SPECULAR: &str = "$clr.specular";

/// Emissive base color (float array).
pub const COLOR_EMISSIVE: &str = "$clr.emissive";

/// Roughness parameter of the Oren-Nayar shading model (float).
pub const OREN_NAYAR_ROUGHNESS: &str = "$shading.orennayar.roughness";

/// Darkness parameter of the Minnaert shading model (float).
pub const MINNAERT_DARKNESS: &str = "$shading.minnaert.darkness";

/// Index of refraction for the Cook-Torrance shading model (float).
pub const COOK_TORRANCE_REFRACTIVE_INDEX: &str = "$shading.cookt.refracti";

/// Roughness parameter of the Cook-Torrance shading model (float).
pub const COOK_TORRANCE_PARAM: &str = "$shading.cookt.param";

/// Path to a scene background image, stored by some producers (string).
pub const GLOBAL_BACKGROUND_IMAGE: &str = "$global.bg.image2d";

// ---------------------------------------------------------------------------
// Texture channels
// ---------------------------------------------------------------------------

/// Highest number of channels a single texture usage kind may occupy,
/// matching the maximum number of simultaneously bound texture stages the
/// consuming renderer is assumed to support. Channel indices are validated
/// against this ceiling before any key composition.
pub const MAX_TEXTURE_CHANNELS: u32 = 8;

/// Semantic role of a texture slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureUsage {
    /// Combined with the diffuse base color.
    Diffuse,
    /// Combined with the ambient base color.
    Ambient,
    /// Combined with the specular base color.
    Specular,
    /// Combined with the emissive base color.
    Emissive,
    /// Tangent-space normal map.
    Normals,
    /// Height map; input for applications that derive normals themselves.
    Height,
    /// Per-texel shininess exponent.
    Shininess,
    /// Per-texel opacity.
    Opacity,
}

impl TextureUsage {
    /// All usage kinds, for iteration.
    pub const ALL: [Self; 8] = [
        Self::Diffuse,
        Self::Ambient,
        Self::Specular,
        Self::Emissive,
        Self::Normals,
        Self::Height,
        Self::Shininess,
        Self::Opacity,
    ];

    /// Tag embedded in channelled keys.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Diffuse => "diffuse",
            Self::Ambient => "ambient",
            Self::Specular => "specular",
            Self::Emissive => "emissive",
            Self::Normals => "normals",
            Self::Height => "bump",
            Self::Shininess => "shininess",
            Self::Opacity => "opacity",
        }
    }
}

/// Which of the four per-channel attributes a channelled key addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureProperty {
    /// File reference of the texture (string).
    File,
    /// Operator combining the layer with the preceding one (integer, see
    /// [`TextureOp`](crate::TextureOp)).
    CombineOp,
    /// Index of the UV coordinate set to sample with (integer).
    UvSource,
    /// Blend strength of the layer (float).
    BlendFactor,
}

impl TextureProperty {
    /// Tag embedded in channelled keys.
    pub fn tag(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::CombineOp => "op",
            Self::UvSource => "uvw",
            Self::BlendFactor => "blend",
        }
    }
}

/// Composes the channelled key for one texture attribute, e.g.
/// `$tex.file.diffuse[0]` for the first diffuse file reference.
pub fn channel_key(prop: TextureProperty, usage: TextureUsage, channel: u32) -> String {
    format!("$tex.{}.{}[{channel}]", prop.tag(), usage.tag())
}

/// Composes the bracket-free alias some producers emit for channel 0,
/// e.g. `$tex.file.diffuse`.
///
/// The alias is resolved at lookup time only; it is never mirrored into a
/// second physical entry.
pub fn channel_key_unindexed(prop: TextureProperty, usage: TextureUsage) -> String {
    format!("$tex.{}.{}", prop.tag(), usage.tag())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_key_composition_is_exact() {
        assert_eq!(
            channel_key(TextureProperty::File, TextureUsage::Diffuse, 0),
            "$tex.file.diffuse[0]"
        );
        assert_eq!(
            channel_key(TextureProperty::CombineOp, TextureUsage::Emissive, 2),
            "$tex.op.emissive[2]"
        );
        assert_eq!(
            channel_key(TextureProperty::UvSource, TextureUsage::Height, 1),
            "$tex.uvw.bump[1]"
        );
        assert_eq!(
            channel_key(TextureProperty::BlendFactor, TextureUsage::Shininess, 3),
            "$tex.blend.shininess[3]"
        );
    }

    #[test]
    fn test_unindexed_alias_drops_the_bracketed_index() {
        assert_eq!(
            channel_key_unindexed(TextureProperty::File, TextureUsage::Specular),
            "$tex.file.specular"
        );
        assert_eq!(
            channel_key_unindexed(TextureProperty::BlendFactor, TextureUsage::Opacity),
            "$tex.blend.opacity"
        );
    }

    #[test]
    fn test_usage_tags_are_distinct() {
        let mut tags: Vec<&str> = TextureUsage::ALL.iter().map(|u| u.tag()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), TextureUsage::ALL.len());
    }

    #[test]
    fn test_height_usage_keeps_the_bump_tag() {
        // Height maps keep the historical "bump" tag on the wire.
        assert_eq!(TextureUsage::Height.tag(), "bump");
    }
}
