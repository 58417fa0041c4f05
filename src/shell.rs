use crate::core::{Action, WindowContext};

/// Window-manager toggles, each independent of the others
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    pub fullscreen: bool,
    pub decorated: bool,
    pub pinned: bool,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self {
            fullscreen: false,
            decorated: true,
            pinned: false,
        }
    }
}

/// What the event loop should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Owns toggle state and forwards actions to the window
#[derive(Debug, Clone, Default)]
pub struct ClockShell {
    state: ToggleState,
    desktop: bool,
}

impl ClockShell {
    pub fn new(state: ToggleState) -> Self {
        Self {
            state,
            desktop: false,
        }
    }

    /// Shell for a clock kept below other windows without decorations
    ///
    /// Borderless, pin and drag requests are ignored so the window stays put.
    pub fn desktop() -> Self {
        Self {
            state: ToggleState {
                decorated: false,
                ..ToggleState::default()
            },
            desktop: true,
        }
    }

    pub fn is_desktop(&self) -> bool {
        self.desktop
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Apply `action` to the window; state flips even if the window ignores it
    pub fn apply(&mut self, action: Action, window: &dyn WindowContext) -> Outcome {
        log::debug!("action {action:?}");
        if self.desktop
            && matches!(
                action,
                Action::ToggleBorderless | Action::TogglePin | Action::BeginDrag
            )
        {
            log::debug!("{action:?} ignored in desktop mode");
            return Outcome::Continue;
        }

        match action {
            Action::ToggleBorderless => {
                self.state.decorated = !self.state.decorated;
                window.set_decorated(self.state.decorated);
            }
            Action::TogglePin => {
                self.state.pinned = !self.state.pinned;
                window.set_pinned(self.state.pinned);
                log::info!("{}", self.pin_tooltip());
            }
            Action::ToggleFullscreen => {
                self.state.fullscreen = !self.state.fullscreen;
                window.set_fullscreen(self.state.fullscreen);
            }
            Action::ExitFullscreen => {
                if self.state.fullscreen {
                    self.state.fullscreen = false;
                    window.set_fullscreen(false);
                }
            }
            Action::BeginDrag => {
                if let Err(e) = window.begin_drag() {
                    log::warn!("window move unavailable: {e:#}");
                }
            }
            Action::Quit => return Outcome::Exit,
        }
        Outcome::Continue
    }

    pub fn borderless_label(&self) -> &'static str {
        if self.state.decorated {
            "⬚"
        } else {
            "▣"
        }
    }

    pub fn borderless_tooltip(&self) -> &'static str {
        "Toggle borderless mode"
    }

    pub fn pin_label(&self) -> &'static str {
        if self.state.pinned {
            "📍"
        } else {
            "📌"
        }
    }

    pub fn pin_tooltip(&self) -> &'static str {
        if self.state.pinned {
            "Always on top: ON"
        } else {
            "Always on top: OFF"
        }
    }
}
