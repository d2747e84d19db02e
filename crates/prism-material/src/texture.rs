//! Composite texture-slot queries: assembling one texture channel's
//! properties into a single [`TextureSlot`] answer.

use serde::{Deserialize, Serialize};

use crate::error::PropertyError;
use crate::keys::{self, MAX_TEXTURE_CHANNELS, TextureProperty, TextureUsage};
use crate::material::Material;

// ---------------------------------------------------------------------------
// TextureOp
// ---------------------------------------------------------------------------

/// Arithmetic rule for combining a texture layer with the preceding layer
/// in a multi-texture stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureOp {
    /// `T = T1 * T2`
    #[default]
    Multiply,
    /// `T = T1 + T2`
    Add,
    /// `T = T1 - T2`
    Subtract,
    /// `T = T1 / T2`
    Divide,
    /// `T = (T1 + T2) - (T1 * T2)`
    SmoothAdd,
    /// `T = T1 + (T2 - 0.5)`
    SignedAdd,
}

impl TextureOp {
    /// Stable integer value producers store the operator under.
    pub fn raw(self) -> i32 {
        self as i32
    }

    /// Maps a stored integer back to an operator, or `None` if the value
    /// is unrecognized.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Multiply),
            1 => Some(Self::Add),
            2 => Some(Self::Subtract),
            3 => Some(Self::Divide),
            4 => Some(Self::SmoothAdd),
            5 => Some(Self::SignedAdd),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// TextureSlot
// ---------------------------------------------------------------------------

/// Fully resolved description of one texture slot.
///
/// Produced by [`Material::texture`]; sibling properties the producer never
/// stored appear here with their documented defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextureSlot {
    /// File reference exactly as the producer stored it.
    pub path: String,
    /// Index of the UV coordinate set this slot samples. Defaults to 0.
    pub uv_source: u32,
    /// Blend strength applied when combining with the preceding layer.
    /// Defaults to 1.0.
    pub blend_factor: f32,
    /// Combine rule against the preceding layer. Defaults to
    /// [`TextureOp::Multiply`].
    pub combine_op: TextureOp,
}

// ---------------------------------------------------------------------------
// Texture queries
// ---------------------------------------------------------------------------

impl Material {
    /// Assembles the full description of one texture slot.
    ///
    /// The file reference is required — a slot without a path is
    /// meaningless. The UV source index, blend factor, and combine operator
    /// are resolved independently and default when absent (0, 1.0, and
    /// [`TextureOp::Multiply`]); the query never fails solely because an
    /// optional sibling is missing. Channel 0 also resolves through the
    /// bracket-free alias keys some producers emit.
    ///
    /// # Errors
    ///
    /// [`PropertyError::OutOfRange`] if `channel` is not below
    /// [`MAX_TEXTURE_CHANNELS`] (checked before any key composition),
    /// [`PropertyError::KeyNotFound`] if no file reference is stored, and
    /// [`PropertyError::TypeMismatch`] if a present property was stored
    /// under the wrong type tag.
    pub fn texture(
        &self,
        usage: TextureUsage,
        channel: u32,
    ) -> Result<TextureSlot, PropertyError> {
        if channel >= MAX_TEXTURE_CHANNELS {
            return Err(PropertyError::OutOfRange(format!(
                "texture channel {channel} exceeds the supported maximum of {MAX_TEXTURE_CHANNELS}"
            )));
        }

        let path = match self.resolve_channel_key(TextureProperty::File, usage, channel) {
            Some(key) => self.string(&key)?.to_string(),
            None => {
                return Err(PropertyError::KeyNotFound {
                    key: keys::channel_key(TextureProperty::File, usage, channel),
                });
            }
        };

        let uv_source = match self.resolve_channel_key(TextureProperty::UvSource, usage, channel) {
            Some(key) => {
                let index = self.integer(&key)?;
                if index < 0 {
                    log::warn!("negative UV source index {index} for '{key}', using set 0");
                }
                index.max(0) as u32
            }
            None => 0,
        };

        let blend_factor =
            match self.resolve_channel_key(TextureProperty::BlendFactor, usage, channel) {
                Some(key) => self.float(&key)?,
                None => 1.0,
            };

        let combine_op = match self.resolve_channel_key(TextureProperty::CombineOp, usage, channel)
        {
            Some(key) => {
                let raw = self.integer(&key)?;
                TextureOp::from_raw(raw).unwrap_or_else(|| {
                    log::warn!(
                        "unrecognized texture combine op {raw} for '{key}', falling back to multiply"
                    );
                    TextureOp::Multiply
                })
            }
            None => TextureOp::default(),
        };

        Ok(TextureSlot {
            path,
            uv_source,
            blend_factor,
            combine_op,
        })
    }

    /// Number of channels of `usage` that carry a file reference.
    pub fn texture_count(&self, usage: TextureUsage) -> u32 {
        (0..MAX_TEXTURE_CHANNELS)
            .filter(|&channel| {
                self.resolve_channel_key(TextureProperty::File, usage, channel)
                    .is_some()
            })
            .count() as u32
    }

    /// Resolves the key under which a channel attribute is actually stored:
    /// the indexed form, or (channel 0 only) the unindexed alias.
    fn resolve_channel_key(
        &self,
        prop: TextureProperty,
        usage: TextureUsage,
        channel: u32,
    ) -> Option<String> {
        let indexed = keys::channel_key(prop, usage, channel);
        if self.find(&indexed).is_some() {
            return Some(indexed);
        }
        if channel == 0 {
            let bare = keys::channel_key_unindexed(prop, usage);
            if self.find(&bare).is_some() {
                return Some(bare);
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
