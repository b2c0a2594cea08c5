// Gameplay: the controlled character and the per-tick controller

pub mod characters;
pub mod controller;

pub use controller::GameState;
