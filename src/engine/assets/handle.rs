// Type-safe asset handle system

use std::marker::PhantomData;

/// Unique identifier for an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub(crate) u64);

impl AssetId {
    /// Create a new asset ID from a string path
    pub fn from_path(path: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// Type-safe handle to a loaded asset
///
/// Handles are opaque references: two handles compare equal when they point
/// at the same asset, which is all the character logic ever asks of them.
#[derive(Debug)]
pub struct AssetHandle<T> {
    pub(crate) id: AssetId,
    _phantom: PhantomData<fn() -> T>,
}

// Manual impls so the marker type does not need to be Clone/Eq itself
impl<T> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AssetHandle<T> {}

impl<T> PartialEq for AssetHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for AssetHandle<T> {}

impl<T> std::hash::Hash for AssetHandle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> AssetHandle<T> {
    pub(crate) fn new(id: AssetId) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Create a handle for the asset stored at `path`
    pub fn from_path(path: &str) -> Self {
        Self::new(AssetId::from_path(path))
    }
}

/// Marker type for flipbook (sprite animation) assets
#[derive(Debug)]
pub struct FlipbookAsset;

pub type FlipbookHandle = AssetHandle<FlipbookAsset>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_id_from_path() {
        let id1 = AssetId::from_path("ninja/idle");
        let id2 = AssetId::from_path("ninja/idle");
        let id3 = AssetId::from_path("ninja/run");

        assert_eq!(id1, id2, "Same paths should produce same IDs");
        assert_ne!(id1, id3, "Different paths should produce different IDs");
    }

    #[test]
    fn test_handle_equality_follows_path() {
        let idle_a = FlipbookHandle::from_path("ninja/idle");
        let idle_b = FlipbookHandle::from_path("ninja/idle");
        let run = FlipbookHandle::from_path("ninja/run");

        assert_eq!(idle_a, idle_b);
        assert_ne!(idle_a, run);
        assert_eq!(idle_a.id, idle_b.id);
    }

    #[test]
    fn test_handle_is_copy() {
        let handle = FlipbookHandle::from_path("ninja/attack");
        let copy = handle;
        assert_eq!(handle, copy);
    }
}
