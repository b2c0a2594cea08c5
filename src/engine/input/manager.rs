// Input manager - turns window events into per-tick input frames

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::{InputFrame, PlayerInput};
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Samples keyboard and mouse-button events into action state
pub struct InputManager {
    /// Key / button bindings
    config: InputConfig,

    /// Action state
    player: PlayerInput,
}

impl InputManager {
    /// Create a new input manager with the given bindings
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            // Key repeat never counts as a fresh press
            if event.repeat {
                return;
            }
            self.apply(InputSource::key(key_code), event.state);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.apply(InputSource::mouse(button), state);
    }

    fn apply(&mut self, source: InputSource, state: ElementState) {
        if let Some(action) = self.config.get_action(source) {
            match state {
                ElementState::Pressed => self.player.press(action),
                ElementState::Released => self.player.release(action),
            }
        }
    }

    /// Sample the input for the current tick
    pub fn poll(&self) -> InputFrame {
        self.player.frame()
    }

    /// Clear edges once the tick has consumed its frame
    pub fn end_frame(&mut self) {
        self.player.end_frame();
    }

    /// Check if an action was pressed since the last frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.player.just_pressed(action)
    }

    /// Drop all held state, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.player.reset();
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut PlayerInput {
        &mut self.player
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}
