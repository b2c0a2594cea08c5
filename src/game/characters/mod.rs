// Character system
//
// Everything about the controlled character:
// - Body (position, facing, vertical motion) and fixed stats
// - Action state machine
// - Motion integration (gravity, planar movement, facing)
// - Hitbox tracking
// - Animation collaborator interface and clip timeline

pub mod animation;
pub mod character;
pub mod hitbox;
pub mod motion;
pub mod state;
pub mod stats;

pub use animation::{AnimationPlayer, ClipPlayer};
pub use character::Character;
pub use hitbox::Hitbox;
pub use motion::{wish_direction, MotionIntegrator};
pub use state::{ActionInput, ActionState, ActionStateMachine};
