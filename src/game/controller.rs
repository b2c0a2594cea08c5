// Per-tick controller: owns the gameplay state and runs one simulation step

use log::debug;

use crate::engine::input::InputFrame;
use crate::engine::renderer::{CameraConfig, FrameSnapshot, OrbitCamera, Projection};

use super::characters::{
    wish_direction, ActionInput, ActionState, ActionStateMachine, AnimationPlayer, Character,
    Hitbox, MotionIntegrator,
};

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// State entered this tick, if any
    pub entered: Option<ActionState>,
    /// The character touched down this tick
    pub landed: bool,
}

/// All mutable gameplay state, owned by the main loop
#[derive(Debug)]
pub struct GameState {
    pub character: Character,
    pub actions: ActionStateMachine,
    pub camera: OrbitCamera,
    pub hitbox: Hitbox,
    pub motion: MotionIntegrator,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Character::default(), CameraConfig::default())
    }
}

impl GameState {
    pub fn new(character: Character, camera: CameraConfig) -> Self {
        let mut hitbox = Hitbox::default();
        hitbox.update(&character);
        Self {
            character,
            actions: ActionStateMachine::new(),
            camera: OrbitCamera::new(camera),
            hitbox,
            motion: MotionIntegrator::default(),
        }
    }

    /// Current action
    pub fn state(&self) -> ActionState {
        self.actions.state()
    }

    /// Run one simulation step.
    ///
    /// Order: hitbox toggle, state transitions (jump impulse on entering
    /// Jumping), gravity and ground clamp (landing resolves the jump), planar
    /// displacement and facing, hitbox recompute. Animation advance and
    /// drawing happen afterwards in the caller.
    pub fn tick<A: AnimationPlayer + ?Sized>(
        &mut self,
        input: &InputFrame,
        dt: f32,
        animator: &mut A,
    ) -> TickReport {
        if input.debug_toggle_pressed {
            self.hitbox.toggle_visible();
        }

        let action_input = ActionInput::from_frame(input, self.character.grounded);
        let mut entered = self.actions.update(&action_input, dt, animator);
        if entered == Some(ActionState::Jumping) {
            self.motion.start_jump(&mut self.character);
        }

        let landed = self.motion.apply_gravity(&mut self.character, dt);
        if landed {
            debug!("Landed at {:?}", self.character.position);
            let landing = ActionInput {
                grounded: true,
                ..action_input
            };
            if let Some(state) = self.actions.land(&landing, animator) {
                entered = Some(state);
            }
        }

        let wish = wish_direction(
            self.camera.planar_forward(),
            self.camera.planar_right(),
            input.move_axes,
        );
        self.motion
            .move_planar(&mut self.character, self.actions.state(), wish, dt);

        self.hitbox.update(&self.character);

        TickReport { entered, landed }
    }

    /// Copy out what the renderer needs for this frame
    pub fn snapshot(&self, projection: &Projection) -> FrameSnapshot {
        let camera = self
            .camera
            .view(self.character.position, self.character.height());
        FrameSnapshot {
            view: camera.view,
            projection: projection.matrix(),
            eye: camera.eye,
            model: self.character.model_matrix(),
            hitbox: self.hitbox.bounds,
            hitbox_visible: self.hitbox.visible,
        }
    }
}
