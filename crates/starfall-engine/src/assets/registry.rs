use std::collections::HashMap;
use crate::assets::manifest::AssetManifest;
use crate::error::AssetError;

/// Index of a texture in the host's texture table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Wire encoding for optional texture slots: -1.0 means "no texture".
pub fn texture_slot(id: Option<TextureId>) -> f32 {
    id.map_or(-1.0, |t| t.0 as f32)
}

/// Registry of named textures, built from an AssetManifest.
/// Provides name-based texture lookup for game code.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    textures: HashMap<String, TextureId>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed AssetManifest. Ids follow manifest order.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let textures = manifest
            .textures
            .iter()
            .enumerate()
            .map(|(i, desc)| (desc.name.clone(), TextureId(i as u32)))
            .collect();
        Self { textures }
    }

    /// Look up a texture by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<TextureId> {
        self.textures.get(name).copied()
    }

    /// Look up a texture the game cannot run without.
    pub fn require(&self, name: &str) -> Result<TextureId, AssetError> {
        self.get(name)
            .ok_or_else(|| AssetError::MissingTexture(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
