//! Typed key/value attribute store for surface-appearance parameters.
//!
//! Heterogeneous content importers describe a surface by inserting typed
//! properties — float arrays, integer arrays, strings, raw buffers — under
//! semantic string keys; renderers read them back through bounds-checked
//! typed accessors and composite texture-slot queries, without knowing
//! every key a producer might emit. The store only holds and retrieves
//! typed byte sequences under the naming convention in [`keys`]; it never
//! interprets color spaces, units, or texture pixel data.
//!
//! ```
//! use prism_material::{Material, TextureOp, TextureProperty, TextureUsage, keys};
//!
//! let mut material = Material::new();
//! material.set_string(keys::NAME, "brushed_steel");
//! material.set_floats(keys::COLOR_DIFFUSE, &[0.6, 0.6, 0.65, 1.0]);
//! material.set_string(
//!     keys::channel_key(TextureProperty::File, TextureUsage::Diffuse, 0),
//!     "textures/steel_albedo.png",
//! );
//!
//! let slot = material.texture(TextureUsage::Diffuse, 0).unwrap();
//! assert_eq!(slot.path, "textures/steel_albedo.png");
//! assert_eq!(slot.uv_source, 0);
//! assert_eq!(slot.combine_op, TextureOp::Multiply);
//! ```

mod access;
mod error;
mod material;
mod property;
mod shading;
mod texture;

pub mod keys;

pub use access::Color4;
pub use error::PropertyError;
pub use keys::{MAX_TEXTURE_CHANNELS, TextureProperty, TextureUsage};
pub use material::Material;
pub use property::{Property, PropertyData, PropertyTypeInfo};
pub use shading::ShadingMode;
pub use texture::{TextureOp, TextureSlot};
