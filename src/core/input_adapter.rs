use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Action, Button, KeyBindings};

/// Adapter that turns winit window events into shell actions
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    bindings: KeyBindings,
}

impl WinitController {
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Action for a press event; releases and key repeats yield nothing
    pub fn process_event(&self, event: &WindowEvent) -> Option<Action> {
        self.pressed_button(event)
            .and_then(|button| self.bindings.action_for(button))
    }

    fn pressed_button(&self, event: &WindowEvent) -> Option<Button> {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                match event.physical_key {
                    PhysicalKey::Code(code) => Self::keycode_to_button(code),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => Self::mouse_button_to_button(*button),
            _ => None,
        }
    }

    /// Map winit KeyCode to Button
    pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyB => Some(Button::KeyB),
            KeyCode::KeyT => Some(Button::KeyT),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::F11 => Some(Button::F11),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map winit MouseButton to Button
    pub fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            _ => None,
        }
    }
}
