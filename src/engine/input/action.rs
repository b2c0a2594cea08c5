// Controller action definitions and default bindings

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Represents all logical actions the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (level-triggered)
    MoveForward,
    MoveBack,
    StrafeLeft,
    StrafeRight,
    Run,

    // One-shot actions (edge-triggered)
    Jump,
    Roll,
    Attack,

    // Meta actions
    ToggleHitbox,
    Pause,
    Quit,
}

#[cfg(test)]
impl Action {
    /// Every action, in declaration order
    pub const ALL: [Action; 11] = [
        Action::MoveForward,
        Action::MoveBack,
        Action::StrafeLeft,
        Action::StrafeRight,
        Action::Run,
        Action::Jump,
        Action::Roll,
        Action::Attack,
        Action::ToggleHitbox,
        Action::Pause,
        Action::Quit,
    ];
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default keyboard/mouse bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Movement (WASD, camera relative)
        (InputSource::key(KeyCode::KeyW), Action::MoveForward),
        (InputSource::key(KeyCode::KeyS), Action::MoveBack),
        (InputSource::key(KeyCode::KeyA), Action::StrafeLeft),
        (InputSource::key(KeyCode::KeyD), Action::StrafeRight),
        (InputSource::key(KeyCode::ShiftLeft), Action::Run),
        // One-shots
        (InputSource::key(KeyCode::KeyE), Action::Jump),
        (InputSource::key(KeyCode::Space), Action::Roll),
        (InputSource::mouse(MouseButton::Left), Action::Attack),
        // Debug / meta
        (InputSource::key(KeyCode::KeyH), Action::ToggleHitbox),
        (InputSource::key(KeyCode::KeyP), Action::Pause),
        (InputSource::key(KeyCode::Escape), Action::Quit),
    ]
}
