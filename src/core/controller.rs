/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyB,
    KeyT,
    KeyQ,
    F11,
    Escape,
    MouseLeft,
}

/// User intent forwarded to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ToggleBorderless,
    TogglePin,
    ToggleFullscreen,
    ExitFullscreen,
    Quit,
    BeginDrag,
}

/// Button -> action table
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(Button, Action)>,
}

impl KeyBindings {
    pub fn new(bindings: Vec<(Button, Action)>) -> Self {
        Self { bindings }
    }

    /// Action bound to `button`, if any
    pub fn action_for(&self, button: Button) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == button)
            .map(|(_, action)| *action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Button, Action)> {
        self.bindings.iter()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(vec![
            (Button::F11, Action::ToggleFullscreen),
            (Button::Escape, Action::ExitFullscreen),
            (Button::KeyB, Action::ToggleBorderless),
            (Button::KeyT, Action::TogglePin),
            (Button::KeyQ, Action::Quit),
            (Button::MouseLeft, Action::BeginDrag),
        ])
    }
}
