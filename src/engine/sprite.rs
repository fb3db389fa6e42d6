// Flipbook sprites
//
// A flipbook is a whole animation clip: a fixed number of frames played at a
// fixed rate. The sprite component plays exactly one flipbook at a time (no
// blending) and keeps playing it until something replaces it.

use std::collections::HashMap;

use super::assets::{AssetError, FlipbookHandle};

/// A single flipbook clip
#[derive(Debug, Clone)]
pub struct Flipbook {
    /// Asset path the flipbook was registered under (e.g. "ninja/idle")
    pub path: String,
    /// Number of frames in the flipbook
    pub frame_count: usize,
    /// Playback rate in frames per second
    pub fps: f32,
    /// Whether the flipbook loops
    pub looping: bool,
}

impl Flipbook {
    pub fn new(path: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            path: path.to_string(),
            frame_count,
            fps,
            looping,
        }
    }

    /// Duration of each frame in seconds
    pub fn frame_duration(&self) -> f32 {
        1.0 / self.fps
    }

    /// Create a looping flipbook
    pub fn looping(path: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(path, frame_count, fps, true)
    }

    /// Create a one-shot flipbook (plays once, holds the last frame)
    pub fn one_shot(path: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(path, frame_count, fps, false)
    }
}

/// Registry of loaded flipbooks, addressed by handle
#[derive(Debug, Default)]
pub struct FlipbookLibrary {
    flipbooks: HashMap<FlipbookHandle, Flipbook>,
}

impl FlipbookLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a flipbook and return its handle
    pub fn register(&mut self, flipbook: Flipbook) -> Result<FlipbookHandle, AssetError> {
        if flipbook.frame_count == 0 {
            return Err(AssetError::EmptyFlipbook {
                path: flipbook.path,
            });
        }
        if !(flipbook.fps > 0.0) {
            return Err(AssetError::InvalidFrameRate {
                path: flipbook.path,
                fps: flipbook.fps,
            });
        }

        let handle = FlipbookHandle::from_path(&flipbook.path);
        if self.flipbooks.contains_key(&handle) {
            return Err(AssetError::AlreadyLoaded(flipbook.path));
        }

        log::debug!("Registered flipbook {}", flipbook.path);
        self.flipbooks.insert(handle, flipbook);
        Ok(handle)
    }

    pub fn get(&self, handle: FlipbookHandle) -> Option<&Flipbook> {
        self.flipbooks.get(&handle)
    }

    pub fn len(&self) -> usize {
        self.flipbooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flipbooks.is_empty()
    }
}

/// The renderable sprite of a character
///
/// Holds the currently assigned flipbook (possibly none), the playback
/// position within it, and the horizontal flip used for facing.
#[derive(Debug, Default)]
pub struct SpriteComponent {
    flipbook: Option<FlipbookHandle>,
    current_frame: usize,
    frame_timer: f32,
    playing: bool,
    flip_horizontal: bool,
}

impl SpriteComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the flipbook currently assigned
    pub fn flipbook(&self) -> Option<FlipbookHandle> {
        self.flipbook
    }

    /// Assign a flipbook and restart playback from its first frame.
    ///
    /// Assigning `None` is allowed and simply shows nothing.
    pub fn set_flipbook(&mut self, flipbook: Option<FlipbookHandle>) {
        self.flipbook = flipbook;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.playing = flipbook.is_some();
    }

    /// Set horizontal flip state
    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    /// Advance playback (called every tick)
    pub fn update(&mut self, library: &FlipbookLibrary, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.flipbook.and_then(|handle| library.get(handle)) else {
            return;
        };

        let frame_duration = clip.frame_duration();
        self.frame_timer += dt;

        while self.frame_timer >= frame_duration {
            self.frame_timer -= frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Hold the last frame
                    self.current_frame = clip.frame_count - 1;
                    self.playing = false;
                    break;
                }
            }
        }
    }
}

// Playback inspection; nothing draws sprites yet
#[cfg(test)]
impl SpriteComponent {
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn library_with(flipbook: Flipbook) -> (FlipbookLibrary, FlipbookHandle) {
        let mut library = FlipbookLibrary::new();
        let handle = library.register(flipbook).expect("valid flipbook");
        (library, handle)
    }

    #[test]
    fn test_flipbook_duration() {
        let flipbook = Flipbook::looping("ninja/run", 6, 10.0);
        assert_relative_eq!(flipbook.frame_duration(), 0.1);
        assert!(flipbook.looping);
    }

    #[test]
    fn test_register_returns_path_handle() {
        let (library, handle) = library_with(Flipbook::looping("ninja/idle", 10, 10.0));
        assert_eq!(handle, FlipbookHandle::from_path("ninja/idle"));
        assert_eq!(library.len(), 1);
        assert!(library.get(handle).is_some());
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let (mut library, _) = library_with(Flipbook::looping("ninja/idle", 10, 10.0));
        let result = library.register(Flipbook::looping("ninja/idle", 4, 8.0));
        assert!(matches!(result, Err(AssetError::AlreadyLoaded(_))));
    }

    #[test]
    fn test_register_rejects_empty_and_bad_rate() {
        let mut library = FlipbookLibrary::new();
        assert!(matches!(
            library.register(Flipbook::looping("ninja/empty", 0, 10.0)),
            Err(AssetError::EmptyFlipbook { .. })
        ));
        assert!(matches!(
            library.register(Flipbook::looping("ninja/frozen", 4, 0.0)),
            Err(AssetError::InvalidFrameRate { .. })
        ));
        assert!(library.is_empty());
    }

    #[test]
    fn test_set_flipbook_restarts_playback() {
        let (library, handle) = library_with(Flipbook::looping("ninja/run", 4, 10.0));
        let mut sprite = SpriteComponent::new();
        sprite.set_flipbook(Some(handle));
        sprite.update(&library, 0.25);
        assert_eq!(sprite.current_frame(), 2);

        sprite.set_flipbook(Some(handle));
        assert_eq!(sprite.current_frame(), 0);
    }

    #[test]
    fn test_looping_wraps() {
        let (library, handle) = library_with(Flipbook::looping("ninja/run", 3, 10.0));
        let mut sprite = SpriteComponent::new();
        sprite.set_flipbook(Some(handle));

        sprite.update(&library, 0.35);
        assert_eq!(sprite.current_frame(), 0);
        assert!(sprite.is_playing());
    }

    #[test]
    fn test_one_shot_holds_last_frame() {
        let (library, handle) = library_with(Flipbook::one_shot("ninja/die", 3, 10.0));
        let mut sprite = SpriteComponent::new();
        sprite.set_flipbook(Some(handle));

        sprite.update(&library, 0.5);
        assert_eq!(sprite.current_frame(), 2);
        assert!(!sprite.is_playing());
    }

    #[test]
    fn test_unset_flipbook_is_harmless() {
        let library = FlipbookLibrary::new();
        let mut sprite = SpriteComponent::new();
        sprite.set_flipbook(None);
        sprite.update(&library, 1.0);

        assert_eq!(sprite.flipbook(), None);
        assert_eq!(sprite.current_frame(), 0);
        assert!(!sprite.is_playing());
    }

    #[test]
    fn test_unknown_handle_does_not_advance() {
        let library = FlipbookLibrary::new();
        let mut sprite = SpriteComponent::new();
        sprite.set_flipbook(Some(FlipbookHandle::from_path("ninja/missing")));
        sprite.update(&library, 1.0);
        assert_eq!(sprite.current_frame(), 0);
    }

    #[test]
    fn test_flip_horizontal() {
        let mut sprite = SpriteComponent::new();
        assert!(!sprite.is_flipped_horizontal());
        sprite.set_flip_horizontal(true);
        assert!(sprite.is_flipped_horizontal());
    }
}
