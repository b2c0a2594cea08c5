// Engine modules: frame clock, input, physics, renderer seam

pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
