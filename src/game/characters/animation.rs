// Character animation playback
//
// Skeletal sampling and skinning live in the external renderer. The
// controller only needs to request clips and learn how long a one-shot runs;
// `ClipPlayer` keeps the clip timeline and a bone palette for the draw call.

use std::collections::HashMap;

use glam::Mat4;
use log::warn;

/// Duration used for a one-shot whose clip has no usable rate
pub const FALLBACK_ONE_SHOT_SECS: f32 = 0.7;

/// Bone palette size handed to the skinning shader
pub const MAX_BONES: usize = 100;

/// The clips the controller can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipId {
    Idle,
    Walk,
    Run,
    Roll,
    Attack,
    Jump,
}

impl ClipId {
    /// Asset name of the clip
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Run => "run",
            Self::Roll => "roll",
            Self::Attack => "attack",
            Self::Jump => "jump",
        }
    }
}

/// Animation registry errors
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("Animation clip not found: {0:?}")]
    ClipNotFound(ClipId),

    #[error("Animation clip already registered: {0:?}")]
    DuplicateClip(ClipId),

    #[error("Invalid rate for clip {clip:?}: {ticks_per_second} ticks/s")]
    InvalidRate { clip: ClipId, ticks_per_second: f32 },
}

/// Timing metadata of a skeletal clip
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub id: ClipId,
    /// Length of the clip in animation ticks
    pub duration_ticks: f32,
    /// Playback rate; 0 means the source did not specify one
    pub ticks_per_second: f32,
    /// Whether the clip repeats until replaced
    pub looping: bool,
}

impl AnimationClip {
    pub fn new(id: ClipId, duration_ticks: f32, ticks_per_second: f32, looping: bool) -> Self {
        Self {
            id,
            duration_ticks,
            ticks_per_second,
            looping,
        }
    }

    /// Create a looping clip
    pub fn looping(id: ClipId, duration_ticks: f32, ticks_per_second: f32) -> Self {
        Self::new(id, duration_ticks, ticks_per_second, true)
    }

    /// Create a one-shot clip (plays once)
    pub fn one_shot(id: ClipId, duration_ticks: f32, ticks_per_second: f32) -> Self {
        Self::new(id, duration_ticks, ticks_per_second, false)
    }

    /// Whether the clip carries a usable playback rate
    pub fn has_rate(&self) -> bool {
        self.ticks_per_second.is_finite() && self.ticks_per_second > 0.0
    }

    /// Natural duration in seconds, or the fallback when the rate is unusable
    pub fn duration_secs(&self) -> f32 {
        if self.has_rate() {
            self.duration_ticks / self.ticks_per_second
        } else {
            FALLBACK_ONE_SHOT_SECS
        }
    }
}

/// Registry of clips by id
#[derive(Debug, Default)]
pub struct ClipLibrary {
    clips: HashMap<ClipId, AnimationClip>,
}

impl ClipLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The character's clip set. Durations are in ticks at 30 ticks/s as
    /// exported from the authoring tool.
    pub fn standard() -> Self {
        let mut library = Self::new();
        let clips = [
            AnimationClip::looping(ClipId::Idle, 60.0, 30.0),
            AnimationClip::looping(ClipId::Walk, 32.0, 30.0),
            AnimationClip::looping(ClipId::Run, 22.0, 30.0),
            AnimationClip::one_shot(ClipId::Roll, 30.0, 30.0),
            AnimationClip::one_shot(ClipId::Attack, 36.0, 30.0),
            AnimationClip::one_shot(ClipId::Jump, 33.0, 30.0),
        ];
        for clip in clips {
            // Ids in the table above are unique
            let _ = library.insert(clip);
        }
        library
    }

    /// Register a clip
    pub fn insert(&mut self, clip: AnimationClip) -> Result<(), AnimationError> {
        if self.clips.contains_key(&clip.id) {
            return Err(AnimationError::DuplicateClip(clip.id));
        }
        self.clips.insert(clip.id, clip);
        Ok(())
    }

    /// Look up a clip
    pub fn get(&self, id: ClipId) -> Result<&AnimationClip, AnimationError> {
        self.clips.get(&id).ok_or(AnimationError::ClipNotFound(id))
    }

    /// Look up a clip that must have a usable rate
    pub fn get_timed(&self, id: ClipId) -> Result<&AnimationClip, AnimationError> {
        let clip = self.get(id)?;
        if !clip.has_rate() {
            return Err(AnimationError::InvalidRate {
                clip: id,
                ticks_per_second: clip.ticks_per_second,
            });
        }
        Ok(clip)
    }
}

/// Animation collaborator used by the action state machine
pub trait AnimationPlayer {
    /// Switch to a clip that repeats until replaced
    fn play_loop(&mut self, clip: ClipId);

    /// Start a clip once and report how long it runs in seconds
    fn play_one_shot(&mut self, clip: ClipId) -> f32;

    /// Advance playback by `dt` seconds
    fn advance(&mut self, dt: f32);

    /// Final bone matrices for skinning
    fn bone_transforms(&self) -> &[Mat4];
}

/// Timeline player over a `ClipLibrary`
#[derive(Debug)]
pub struct ClipPlayer {
    library: ClipLibrary,
    current: ClipId,
    /// Whether the current clip was requested as a loop
    looping: bool,
    /// Playback position in ticks
    time_ticks: f32,
    bones: Vec<Mat4>,
}

impl ClipPlayer {
    /// Create a player that starts on `initial` as a loop
    pub fn new(library: ClipLibrary, initial: ClipId) -> Self {
        Self {
            library,
            current: initial,
            looping: true,
            time_ticks: 0.0,
            bones: vec![Mat4::IDENTITY; MAX_BONES],
        }
    }

    /// Player over the standard clip set, idling
    pub fn with_standard_clips() -> Self {
        Self::new(ClipLibrary::standard(), ClipId::Idle)
    }

    /// Currently playing clip
    pub fn current_clip(&self) -> ClipId {
        self.current
    }

    /// Playback position in seconds
    pub fn time_secs(&self) -> f32 {
        match self.library.get(self.current) {
            Ok(clip) if clip.has_rate() => self.time_ticks / clip.ticks_per_second,
            _ => 0.0,
        }
    }

    fn start(&mut self, clip: ClipId, looping: bool) {
        self.current = clip;
        self.looping = looping;
        self.time_ticks = 0.0;
    }
}

impl AnimationPlayer for ClipPlayer {
    fn play_loop(&mut self, clip: ClipId) {
        if self.current == clip && self.looping {
            return;
        }
        match self.library.get(clip) {
            Ok(c) if !c.looping => warn!("Clip '{}' is not authored as a loop", clip.name()),
            Ok(_) => {}
            Err(err) => warn!("{}; holding the current pose", err),
        }
        self.start(clip, true);
    }

    fn play_one_shot(&mut self, clip: ClipId) -> f32 {
        let duration = match self.library.get_timed(clip) {
            Ok(c) => c.duration_secs(),
            Err(err) => {
                warn!("{}; using {}s", err, FALLBACK_ONE_SHOT_SECS);
                FALLBACK_ONE_SHOT_SECS
            }
        };
        self.start(clip, false);
        duration
    }

    fn advance(&mut self, dt: f32) {
        let Ok(clip) = self.library.get(self.current) else {
            return;
        };
        if !clip.has_rate() || clip.duration_ticks <= 0.0 {
            return;
        }

        self.time_ticks += dt * clip.ticks_per_second;
        if self.looping {
            self.time_ticks %= clip.duration_ticks;
        } else {
            self.time_ticks = self.time_ticks.min(clip.duration_ticks);
        }
    }

    fn bone_transforms(&self) -> &[Mat4] {
        &self.bones
    }
}
