// Per-tick input state and the sampled input frame

use super::action::Action;
use glam::Vec2;
use std::collections::HashSet;

/// Input sampled for one simulation tick.
///
/// Axes and `run_held` are level state; the `*_pressed` flags are edges that
/// are true only on the tick the action went from released to pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    /// Movement axes: x = strafe (+right), y = forward (+forward)
    pub move_axes: Vec2,
    pub run_held: bool,
    pub jump_pressed: bool,
    pub roll_pressed: bool,
    pub attack_pressed: bool,
    pub debug_toggle_pressed: bool,
    pub pause_pressed: bool,
}

impl InputFrame {
    /// What the simulation sees while paused: no movement and no action
    /// edges, only the pause edge that can resume the game
    pub fn while_paused(&self) -> Self {
        Self {
            pause_pressed: self.pause_pressed,
            ..Self::default()
        }
    }
}

/// Pressed / edge state for every action
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions that went down since the last `end_frame`
    just_pressed: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this tick
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Register an action press. Holding an already-pressed action does not
    /// produce a new edge.
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Feed a sampled level (polling style); edges are derived from the
    /// previous level of the same action only
    #[cfg(test)]
    pub fn set_level(&mut self, action: Action, down: bool) {
        if down {
            self.press(action);
        } else {
            self.release(action);
        }
    }

    /// Clear edge state; call once per tick after the frame was consumed
    pub(crate) fn end_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Reset all input state (e.g. on focus loss)
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }

    /// Movement axes from the directional actions, each component in -1..=1
    pub fn move_axes(&self) -> Vec2 {
        let mut axes = Vec2::ZERO;

        if self.is_pressed(Action::MoveForward) {
            axes.y += 1.0;
        }
        if self.is_pressed(Action::MoveBack) {
            axes.y -= 1.0;
        }
        if self.is_pressed(Action::StrafeRight) {
            axes.x += 1.0;
        }
        if self.is_pressed(Action::StrafeLeft) {
            axes.x -= 1.0;
        }

        axes
    }

    /// Snapshot the current state as an input frame
    pub fn frame(&self) -> InputFrame {
        InputFrame {
            move_axes: self.move_axes(),
            run_held: self.is_pressed(Action::Run),
            jump_pressed: self.just_pressed(Action::Jump),
            roll_pressed: self.just_pressed(Action::Roll),
            attack_pressed: self.just_pressed(Action::Attack),
            debug_toggle_pressed: self.just_pressed(Action::ToggleHitbox),
            pause_pressed: self.just_pressed(Action::Pause),
        }
    }
}
