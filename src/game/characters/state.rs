// Action state machine

use log::debug;

use crate::engine::input::InputFrame;

use super::animation::{AnimationPlayer, ClipId};

/// One-shot timers within this margin of zero count as expired, so a timer
/// fed exact fractions of its duration finishes on the expected tick despite
/// float rounding
const TIMER_EPSILON: f32 = 1e-5;

/// The character's current action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionState {
    /// Standing still
    #[default]
    Idle,
    /// Walking
    Moving,
    /// Running with the run modifier held
    Running,
    /// Committed roll along the facing direction; runs for its clip duration
    Rolling,
    /// Committed attack; runs for its clip duration
    Attacking,
    /// Airborne after a jump; ends on landing
    Jumping,
}

impl ActionState {
    /// Whether planar input steers the character in this state
    pub fn is_steerable(&self) -> bool {
        !matches!(self, Self::Rolling | Self::Attacking)
    }

    /// Clip played for this state
    pub fn clip(&self) -> ClipId {
        match self {
            Self::Idle => ClipId::Idle,
            Self::Moving => ClipId::Walk,
            Self::Running => ClipId::Run,
            Self::Rolling => ClipId::Roll,
            Self::Attacking => ClipId::Attack,
            Self::Jumping => ClipId::Jump,
        }
    }

    /// Locomotion state for the given movement intent
    pub fn locomotion(moving: bool, run_held: bool) -> Self {
        match (moving, run_held) {
            (true, true) => Self::Running,
            (true, false) => Self::Moving,
            (false, _) => Self::Idle,
        }
    }
}

/// Per-tick inputs of the state machine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActionInput {
    /// Movement-intent magnitude; 0 = none
    pub move_magnitude: f32,
    pub run_held: bool,
    pub jump_pressed: bool,
    pub roll_pressed: bool,
    pub attack_pressed: bool,
    pub grounded: bool,
}

impl ActionInput {
    pub fn from_frame(frame: &InputFrame, grounded: bool) -> Self {
        Self {
            move_magnitude: frame.move_axes.length(),
            run_held: frame.run_held,
            jump_pressed: frame.jump_pressed,
            roll_pressed: frame.roll_pressed,
            attack_pressed: frame.attack_pressed,
            grounded,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.move_magnitude > 0.0
    }

    fn locomotion_target(&self) -> ActionState {
        ActionState::locomotion(self.is_moving(), self.run_held)
    }
}

/// Holds the active action and the remaining time of a one-shot.
///
/// Transition priority per tick:
/// 1. Rolling / Attacking count down and fall back to locomotion when done.
/// 2. Jumping waits for ground contact.
/// 3. Otherwise edges fire in order jump (grounded only) > roll > attack,
///    and without an edge the locomotion state follows the input.
#[derive(Debug)]
pub struct ActionStateMachine {
    current_state: ActionState,
    previous_state: ActionState,
    state_time: f32,
    time_left: f32,
}

impl Default for ActionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: ActionState::Idle,
            previous_state: ActionState::Idle,
            state_time: 0.0,
            time_left: 0.0,
        }
    }

    /// Get the current state
    pub fn state(&self) -> ActionState {
        self.current_state
    }

    /// Get the previous state
    pub fn previous_state(&self) -> ActionState {
        self.previous_state
    }

    /// Get time spent in current state
    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    /// Remaining time of a timed one-shot (Rolling / Attacking)
    pub fn time_left(&self) -> Option<f32> {
        match self.current_state {
            ActionState::Rolling | ActionState::Attacking => Some(self.time_left),
            _ => None,
        }
    }

    /// Move to `new_state`, resetting the state clock. Returns `false` when
    /// already in that state.
    fn transition(&mut self, new_state: ActionState) -> bool {
        if self.current_state == new_state {
            return false;
        }
        debug!("Action state {:?} -> {:?}", self.current_state, new_state);
        self.previous_state = self.current_state;
        self.current_state = new_state;
        self.state_time = 0.0;
        true
    }

    fn enter_loop<A: AnimationPlayer + ?Sized>(
        &mut self,
        state: ActionState,
        animator: &mut A,
    ) -> Option<ActionState> {
        if !self.transition(state) {
            return None;
        }
        self.time_left = 0.0;
        animator.play_loop(state.clip());
        Some(state)
    }

    fn enter_one_shot<A: AnimationPlayer + ?Sized>(
        &mut self,
        state: ActionState,
        animator: &mut A,
    ) -> ActionState {
        self.transition(state);
        self.time_left = animator.play_one_shot(state.clip());
        state
    }

    /// Run one tick of transitions. Returns the state entered this tick, if
    /// any. Entering `Jumping` is the caller's cue to apply the jump impulse.
    pub fn update<A: AnimationPlayer + ?Sized>(
        &mut self,
        input: &ActionInput,
        dt: f32,
        animator: &mut A,
    ) -> Option<ActionState> {
        self.state_time += dt;

        match self.current_state {
            ActionState::Rolling | ActionState::Attacking => {
                self.time_left -= dt;
                if self.time_left <= TIMER_EPSILON {
                    self.time_left = 0.0;
                    self.enter_loop(input.locomotion_target(), animator)
                } else {
                    None
                }
            }
            ActionState::Jumping => {
                if input.grounded {
                    self.land(input, animator)
                } else {
                    None
                }
            }
            ActionState::Idle | ActionState::Moving | ActionState::Running => {
                if input.jump_pressed && input.grounded {
                    Some(self.enter_one_shot(ActionState::Jumping, animator))
                } else if input.roll_pressed {
                    Some(self.enter_one_shot(ActionState::Rolling, animator))
                } else if input.attack_pressed {
                    Some(self.enter_one_shot(ActionState::Attacking, animator))
                } else {
                    self.enter_loop(input.locomotion_target(), animator)
                }
            }
        }
    }

    /// Resolve a jump on ground contact. Does nothing outside `Jumping`.
    pub fn land<A: AnimationPlayer + ?Sized>(
        &mut self,
        input: &ActionInput,
        animator: &mut A,
    ) -> Option<ActionState> {
        if self.current_state != ActionState::Jumping {
            return None;
        }
        self.enter_loop(input.locomotion_target(), animator)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use glam::Mat4;

    /// Animation collaborator that records every request
    #[derive(Debug, Default)]
    pub(crate) struct RecordingAnimator {
        pub loops: Vec<ClipId>,
        pub one_shots: Vec<ClipId>,
        pub one_shot_secs: f32,
        pub advanced: f32,
    }

    impl RecordingAnimator {
        pub fn with_one_shot_secs(secs: f32) -> Self {
            Self {
                one_shot_secs: secs,
                ..Default::default()
            }
        }
    }

    impl AnimationPlayer for RecordingAnimator {
        fn play_loop(&mut self, clip: ClipId) {
            self.loops.push(clip);
        }

        fn play_one_shot(&mut self, clip: ClipId) -> f32 {
            self.one_shots.push(clip);
            self.one_shot_secs
        }

        fn advance(&mut self, dt: f32) {
            self.advanced += dt;
        }

        fn bone_transforms(&self) -> &[Mat4] {
            &[]
        }
    }

    fn grounded() -> ActionInput {
        ActionInput {
            grounded: true,
            ..Default::default()
        }
    }

    fn walking() -> ActionInput {
        ActionInput {
            move_magnitude: 1.0,
            ..grounded()
        }
    }

    #[test]
    fn test_initial_state() {
        let sm = ActionStateMachine::new();
        assert_eq!(sm.state(), ActionState::Idle);
        assert_eq!(sm.time_left(), None);
    }

    #[test]
    fn test_locomotion_follows_input() {
        let mut sm = ActionStateMachine::new();
        let mut anim = RecordingAnimator::default();

        assert_eq!(sm.update(&walking(), 0.1, &mut anim), Some(ActionState::Moving));
        let running = ActionInput {
            run_held: true,
            ..walking()
        };
        assert_eq!(sm.update(&running, 0.1, &mut anim), Some(ActionState::Running));
        assert_eq!(sm.update(&grounded(), 0.1, &mut anim), Some(ActionState::Idle));
        assert_eq!(anim.loops, vec![ClipId::Walk, ClipId::Run, ClipId::Idle]);
        assert_eq!(sm.previous_state(), ActionState::Running);
    }

    #[test]
    fn test_holding_same_input_does_not_restart_loop() {
        let mut sm = ActionStateMachine::new();
        let mut anim = RecordingAnimator::default();

        for _ in 0..10 {
            sm.update(&walking(), 0.016, &mut anim);
        }
        assert_eq!(sm.state(), ActionState::Moving);
        assert_eq!(anim.loops, vec![ClipId::Walk]);

        // Idle while already idle requests nothing either
        let mut sm = ActionStateMachine::new();
        let mut anim = RecordingAnimator::default();
        sm.update(&grounded(), 0.016, &mut anim);
        assert!(anim.loops.is_empty());
    }

    #[test]
    fn test_run_modifier_without_movement_is_idle() {
        let mut sm = ActionStateMachine::new();
        let mut anim = RecordingAnimator::default();
        let input = ActionInput {
            run_held: true,
            ..grounded()
        };
        assert_eq!(sm.update(&input, 0.1, &mut anim), None);
        assert_eq!(sm.state(), ActionState::Idle);
    }

    #[test]
    fn test_jump_wins_when_grounded() {
        let mut sm = ActionStateMachine::new();
        let mut anim = RecordingAnimator::with_one_shot_secs(1.1);
        let input = ActionInput {
            jump_pressed: true,
            roll_pressed: true,
            attack_pressed: true,
            ..grounded()
        };
        assert_eq!(sm.update(&input, 0.016, &mut anim), Some(ActionState::Jumping));
        assert_eq!(anim.one_shots, vec![ClipId::Jump]);
    }

    #[test]
    fn test_roll_wins_over_attack_when_airborne() {
        let mut sm = ActionStateMachine::new();
        let mut anim = RecordingAnimator::with_one_shot_secs(0.5);
        let input = ActionInput {
            jump_pressed: true,
            roll_pressed: true,
            attack_pressed: true,
            grounded: false,
            ..Default::default()
        };
        assert_eq!(sm.update(&input, 0.016, &mut anim), Some(ActionState::Rolling));
        assert_eq!(anim.one_shots, vec![ClipId::Roll]);
        assert_eq!(sm.time_left(), Some(0.5));
    }

    #[test]
    fn test_attack_alone() {
        let mut sm = ActionStateMachine::new();
        let mut anim = RecordingAnimator::with_one_shot_secs(0.5);
        let input = ActionInput {
            attack_pressed: true,
            ..walking()
        };
        assert_eq!(sm.update(&input, 0.016, &mut anim), Some(ActionState::Attacking));
    }

    #[test]
    fn test_roll_runs_to_completion() {
        let mut sm = ActionStateMachine::new();
        let mut anim = RecordingAnimator::with_one_shot_secs(0.3);
        let start = ActionInput {
            roll_pressed: true,
            ..grounded()
        };
        sm.update(&start, 0.0, &mut anim);
        assert_eq!(sm.state(), ActionState::Rolling);

        // Input changes and new edges are ignored while committed
        let busy = ActionInput {
            attack_pressed: true,
            run_held: true,
            ..walking()
        };
        assert_eq!(sm.update(&busy, 0.1, &mut anim), None);
        assert_eq!(sm.update(&busy, 0.1, &mut anim), None);
        assert_eq!(sm.state(), ActionState::Rolling);

        // Third tick: cumulative 0.3 expires the roll
        assert_eq!(sm.update(&walking(), 0.1, &mut anim), Some(ActionState::Moving));
        assert_eq!(sm.time_left(), None);
        assert_eq!(anim.one_shots, vec![ClipId::Roll]);
        assert_eq!(anim.loops, vec![ClipId::Walk]);
    }

    #[test]
    fn test_attack_expiry_resolves_running_and_idle() {
        let mut anim = RecordingAnimator::with_one_shot_secs(0.2);
        let attack = ActionInput {
            attack_pressed: true,
            ..grounded()
        };

        let mut sm = ActionStateMachine::new();
        sm.update(&attack, 0.0, &mut anim);
        let running = ActionInput {
            run_held: true,
            ..walking()
        };
        assert_eq!(sm.update(&running, 0.5, &mut anim), Some(ActionState::Running));

        let mut sm = ActionStateMachine::new();
        sm.update(&attack, 0.0, &mut anim);
        assert_eq!(sm.update(&grounded(), 0.5, &mut anim), Some(ActionState::Idle));
        assert_eq!(anim.loops.last(), Some(&ClipId::Idle));
    }

    #[test]
    fn test_jump_waits_for_ground() {
        let mut sm = ActionStateMachine::new();
        let mut anim = RecordingAnimator::with_one_shot_secs(0.2);
        let jump = ActionInput {
            jump_pressed: true,
            ..grounded()
        };
        sm.update(&jump, 0.016, &mut anim);

        // Long after the clip would have ended, still airborne
        let airborne = ActionInput {
            grounded: false,
            roll_pressed: true,
            ..walking()
        };
        for _ in 0..20 {
            assert_eq!(sm.update(&airborne, 0.1, &mut anim), None);
        }
        assert_eq!(sm.state(), ActionState::Jumping);

        assert_eq!(sm.update(&walking(), 0.016, &mut anim), Some(ActionState::Moving));
    }

    #[test]
    fn test_land_only_affects_jumping() {
        let mut sm = ActionStateMachine::new();
        let mut anim = RecordingAnimator::with_one_shot_secs(0.5);
        assert_eq!(sm.land(&walking(), &mut anim), None);

        let roll = ActionInput {
            roll_pressed: true,
            ..grounded()
        };
        sm.update(&roll, 0.0, &mut anim);
        assert_eq!(sm.land(&walking(), &mut anim), None);
        assert_eq!(sm.state(), ActionState::Rolling);
    }

    #[test]
    fn test_zero_dt_keeps_timer() {
        let mut sm = ActionStateMachine::new();
        let mut anim = RecordingAnimator::with_one_shot_secs(0.3);
        let roll = ActionInput {
            roll_pressed: true,
            ..grounded()
        };
        sm.update(&roll, 0.0, &mut anim);
        for _ in 0..5 {
            sm.update(&grounded(), 0.0, &mut anim);
        }
        assert_eq!(sm.time_left(), Some(0.3));
        assert_eq!(sm.state_time(), 0.0);
    }

    #[test]
    fn test_zero_duration_one_shot_ends_next_tick() {
        let mut sm = ActionStateMachine::new();
        let mut anim = RecordingAnimator::with_one_shot_secs(0.0);
        let attack = ActionInput {
            attack_pressed: true,
            ..grounded()
        };
        sm.update(&attack, 0.0, &mut anim);
        assert_eq!(sm.update(&grounded(), 0.0, &mut anim), Some(ActionState::Idle));
    }

    #[test]
    fn test_state_helpers() {
        assert!(ActionState::Jumping.is_steerable());
        assert!(!ActionState::Rolling.is_steerable());
        assert_eq!(ActionState::Moving.clip(), ClipId::Walk);
        assert_eq!(ActionState::locomotion(true, true), ActionState::Running);
    }

    #[test]
    fn test_input_from_frame() {
        let frame = InputFrame {
            move_axes: glam::Vec2::new(1.0, 1.0),
            jump_pressed: true,
            ..Default::default()
        };
        let input = ActionInput::from_frame(&frame, true);
        assert!(input.is_moving());
        assert!(input.jump_pressed);
        assert!((input.move_magnitude - 2.0_f32.sqrt()).abs() < 1e-6);
    }
}
