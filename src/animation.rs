//! Animation clips and the per-entity animation state machine.
//!
//! Clip tables (frame counts, looping, tick cadence) are plain data,
//! deserializable from JSON config files with compiled-in defaults per
//! entity kind. The `Animator` advances a frame index on a fixed tick
//! cadence and reports one-shot clip completion back to the entity, which
//! owns the life-cycle condition. Rendering is elsewhere; this module
//! never touches a texture, so it tests without SDL.

use crate::combat::Condition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of an animation clip. One active clip per entity per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Attack,
    Hit,
    Death,
}

impl AnimationState {
    /// Asset-key suffix for this clip.
    pub fn key(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Run => "run",
            AnimationState::Attack => "attack",
            AnimationState::Hit => "hit",
            AnimationState::Death => "death",
        }
    }
}

/// Maps the life-cycle condition to the clip that drives the animation,
/// with priority death > hit > attack > locomotion.
pub fn select_state(condition: Condition, locomotion: AnimationState) -> AnimationState {
    match condition {
        Condition::Dead => AnimationState::Death,
        Condition::Hit => AnimationState::Hit,
        Condition::Attacking => AnimationState::Attack,
        Condition::Normal => locomotion,
    }
}

/// One clip: how many frames it has and whether it loops.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClipConfig {
    pub frames: usize,
    pub looping: bool,
}

impl ClipConfig {
    fn looping(frames: usize) -> ClipConfig {
        ClipConfig {
            frames,
            looping: true,
        }
    }

    fn one_shot(frames: usize) -> ClipConfig {
        ClipConfig {
            frames,
            looping: false,
        }
    }
}

/// The clip table for one entity kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationSet {
    /// Simulation ticks per animation frame.
    pub tick_rate: u32,
    pub clips: HashMap<AnimationState, ClipConfig>,
}

impl AnimationSet {
    pub fn load_from_file(path: &str) -> Result<AnimationSet, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let set: AnimationSet = serde_json::from_str(&content)?;
        Ok(set)
    }

    /// Loads a clip table, degrading to the compiled-in fallback when the
    /// file is missing or malformed.
    pub fn load_or(path: &str, fallback: AnimationSet) -> AnimationSet {
        match AnimationSet::load_from_file(path) {
            Ok(set) => set,
            Err(e) => {
                eprintln!("Warning: using built-in clips, {} unusable: {}", path, e);
                fallback
            }
        }
    }

    /// Clip lookup; unknown states fall back to idle, and a missing idle
    /// falls back to a single looping frame so rendering never starves.
    pub fn clip(&self, state: AnimationState) -> ClipConfig {
        self.clips
            .get(&state)
            .or_else(|| self.clips.get(&AnimationState::Idle))
            .copied()
            .unwrap_or(ClipConfig::looping(1))
    }

    pub fn player_default(tick_rate: u32) -> AnimationSet {
        AnimationSet {
            tick_rate,
            clips: HashMap::from([
                (AnimationState::Idle, ClipConfig::looping(5)),
                (AnimationState::Run, ClipConfig::looping(6)),
                (AnimationState::Attack, ClipConfig::one_shot(3)),
                (AnimationState::Hit, ClipConfig::one_shot(4)),
                (AnimationState::Death, ClipConfig::one_shot(4)),
            ]),
        }
    }

    pub fn tooth_default(tick_rate: u32) -> AnimationSet {
        AnimationSet {
            tick_rate,
            clips: HashMap::from([
                (AnimationState::Idle, ClipConfig::looping(8)),
                (AnimationState::Run, ClipConfig::looping(6)),
                (AnimationState::Attack, ClipConfig::one_shot(5)),
                (AnimationState::Hit, ClipConfig::one_shot(4)),
                (AnimationState::Death, ClipConfig::one_shot(4)),
            ]),
        }
    }

    pub fn seashell_default(tick_rate: u32) -> AnimationSet {
        AnimationSet {
            tick_rate,
            clips: HashMap::from([
                (AnimationState::Idle, ClipConfig::looping(1)),
                (AnimationState::Attack, ClipConfig::one_shot(6)),
                (AnimationState::Hit, ClipConfig::one_shot(4)),
                (AnimationState::Death, ClipConfig::one_shot(4)),
            ]),
        }
    }

    pub fn coin_default() -> AnimationSet {
        AnimationSet {
            tick_rate: 7,
            clips: HashMap::from([(AnimationState::Idle, ClipConfig::looping(8))]),
        }
    }

    pub fn palm_default() -> AnimationSet {
        AnimationSet {
            tick_rate: 7,
            clips: HashMap::from([(AnimationState::Idle, ClipConfig::looping(4))]),
        }
    }

    pub fn water_default() -> AnimationSet {
        AnimationSet {
            tick_rate: 10,
            clips: HashMap::from([(AnimationState::Idle, ClipConfig::looping(4))]),
        }
    }
}

/// Per-entity animation playhead.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    state: AnimationState,
    frame: usize,
    timer: u32,
    kill_flag: bool,
}

impl Animator {
    pub fn new() -> Animator {
        Animator::default()
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Current frame index, always within `0..clip.frames`.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Raised once the death clip has fully played; the game controller
    /// removes the entity on its next tick.
    pub fn kill_flag(&self) -> bool {
        self.kill_flag
    }

    /// Advances one simulation tick toward `desired`.
    ///
    /// A state change resets the frame and timer. The frame advances once
    /// per `tick_rate` ticks; on clip end, looping clips wrap, one-shot
    /// clips report completion (returned so the entity can clear the
    /// owning condition), and the death clip freezes on its final frame
    /// and raises the kill flag.
    pub fn tick(&mut self, set: &AnimationSet, desired: AnimationState) -> Option<AnimationState> {
        if desired != self.state {
            self.state = desired;
            self.frame = 0;
            self.timer = 0;
        }

        let clip = set.clip(self.state);
        if clip.frames == 0 {
            return None;
        }

        // A finished death clip stays frozen on the terminal frame.
        if self.kill_flag {
            self.frame = clip.frames - 1;
            return None;
        }

        self.timer += 1;
        if self.timer >= set.tick_rate {
            self.timer = 0;
            self.frame += 1;
        }

        if self.frame < clip.frames {
            return None;
        }

        if clip.looping {
            self.frame = 0;
            None
        } else if self.state == AnimationState::Death {
            self.frame = clip.frames - 1;
            self.kill_flag = true;
            None
        } else {
            let finished = self.state;
            self.frame = 0;
            Some(finished)
        }
    }
}
