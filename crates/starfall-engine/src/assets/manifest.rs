use serde::{Deserialize, Serialize};
use crate::error::AssetError;

/// Asset manifest describing the textures a game may reference.
/// Loaded from a JSON document supplied by the host page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Textures in load order; the index becomes the `TextureId`.
    pub textures: Vec<TextureDescriptor>,
}

/// Describes a single texture image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Name used by game code (e.g., "earth").
    pub name: String,
    /// Relative path to the image (e.g., "assets/earthmap1k.jpg").
    pub path: String,
    /// Credit line shown by the host, if any.
    #[serde(default)]
    pub attribution: Option<String>,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        let manifest: Self = serde_json::from_str(json)?;
        for (i, tex) in manifest.textures.iter().enumerate() {
            if tex.name.is_empty() {
                return Err(AssetError::EmptyName { index: i });
            }
            if manifest.textures[..i].iter().any(|t| t.name == tex.name) {
                return Err(AssetError::DuplicateTexture(tex.name.clone()));
            }
        }
        Ok(manifest)
    }
}
