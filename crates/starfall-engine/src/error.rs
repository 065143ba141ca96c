/// Errors raised while loading or resolving game assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("texture #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("texture listed twice in manifest: {0}")]
    DuplicateTexture(String),
    #[error("required texture not in manifest: {0}")]
    MissingTexture(String),
}
