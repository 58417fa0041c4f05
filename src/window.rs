use std::sync::Arc;

use winit::window::{Fullscreen, Window as WinitWindow, WindowLevel};

use crate::core::{WindowContext, WindowDimensions};

/// Wrapper around winit Window exposing the shell's window primitives
#[derive(Clone)]
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }
}

impl WindowContext for Window {
    fn dimensions(&self) -> WindowDimensions {
        let size = self.inner.inner_size();
        WindowDimensions::new(size.width, size.height)
    }

    fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    fn set_decorated(&self, decorated: bool) {
        self.inner.set_decorations(decorated);
    }

    fn set_pinned(&self, pinned: bool) {
        let level = if pinned {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };
        // Ignored on Wayland and other environments without stacking control
        self.inner.set_window_level(level);
    }

    fn set_fullscreen(&self, fullscreen: bool) {
        self.inner
            .set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));
    }

    fn begin_drag(&self) -> anyhow::Result<()> {
        self.inner
            .drag_window()
            .map_err(|e| anyhow::anyhow!("interactive move rejected by the window manager: {e}"))
    }
}
