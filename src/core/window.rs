/// Window dimensions in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero (minimized windows report this)
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Window-manager primitives the shell drives
///
/// Requests are best effort: environments that lack a primitive report an
/// error or silently ignore it, and the caller keeps running either way.
pub trait WindowContext {
    /// Get window dimensions in physical pixels
    fn dimensions(&self) -> WindowDimensions;

    /// Request the window to redraw
    fn request_redraw(&self);

    /// Show or hide title bar and borders
    fn set_decorated(&self, decorated: bool);

    /// Keep the window above others
    fn set_pinned(&self, pinned: bool);

    fn set_fullscreen(&self, fullscreen: bool);

    /// Hand the pointer to the window manager for an interactive move
    fn begin_drag(&self) -> anyhow::Result<()>;
}
