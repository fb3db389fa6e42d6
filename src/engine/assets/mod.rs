// Asset references
//
// Flipbooks are addressed through typed handles; the flipbook data itself
// lives in `engine::sprite::FlipbookLibrary`.

mod handle;

pub use handle::FlipbookHandle;

/// Asset registration errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset already loaded: {0}")]
    AlreadyLoaded(String),

    #[error("Flipbook {path} has no frames")]
    EmptyFlipbook { path: String },

    #[error("Flipbook {path} has invalid frame rate {fps}")]
    InvalidFrameRate { path: String, fps: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::AlreadyLoaded("ninja/idle".to_string());
        assert_eq!(err.to_string(), "Asset already loaded: ninja/idle");

        let err = AssetError::EmptyFlipbook {
            path: "ninja/die".to_string(),
        };
        assert_eq!(err.to_string(), "Flipbook ninja/die has no frames");
    }
}
