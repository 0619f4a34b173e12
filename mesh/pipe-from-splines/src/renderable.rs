//! Hand-off surface toward the rendering collaborator.

use crate::buffers::PipeBuffers;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An opaque reference to a texture owned by the host's material
/// system. The core never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextureHandle(u64);

impl TextureHandle {
    /// Wrap a host-assigned texture id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The host-assigned id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// A generated pipe mesh paired with its material texture, ready to
/// hand to a renderer.
///
/// `recompute_normals` asks the renderer to derive smooth-shading
/// vertex normals from `buffers.vertices` and `buffers.triangles`
/// (area- or angle-weighted, the renderer's choice); the core never
/// computes normals itself. It is set on construction and stays `true`
/// for freshly generated geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipeRenderable {
    /// The generated mesh buffers.
    pub buffers: PipeBuffers,
    /// Texture to apply, if any.
    pub texture: Option<TextureHandle>,
    /// Whether the renderer should recompute vertex normals.
    pub recompute_normals: bool,
}

impl PipeRenderable {
    /// Wrap freshly generated buffers.
    #[must_use]
    pub const fn new(buffers: PipeBuffers) -> Self {
        Self {
            buffers,
            texture: None,
            recompute_normals: true,
        }
    }

    /// Attach a texture handle.
    #[must_use]
    pub const fn with_texture(mut self, texture: TextureHandle) -> Self {
        self.texture = Some(texture);
        self
    }
}
