// Input handling system
//
// Keyboard and mouse-button input for the character controller.
//
// ## Architecture
//
// - `action`: Defines controller actions and default key bindings
// - `config`: Binding table and remapping
// - `player`: Per-action pressed / just-pressed state and the sampled `InputFrame`
// - `manager`: Feeds winit events in, hands one `InputFrame` out per tick
//
// Mouse motion and scroll are not actions; they go straight to the orbit
// camera (see `engine::renderer::camera`).
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::default();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once per tick
// let frame = input.poll();
// state.tick(&frame, dt, &mut animator);
// input.end_frame();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

pub use action::Action;
pub use manager::InputManager;
pub use player::InputFrame;
