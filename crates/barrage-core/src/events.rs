//! Fire-and-forget requests emitted by the simulation for the effect, audio,
//! camera and scene collaborators. The core never reads anything back.

use serde::{Deserialize, Serialize};

use crate::enums::EffectKind;
use crate::types::{Color, Position};

/// One request to a presentation collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PresentationEvent {
    /// Play a visual effect.
    Effect {
        kind: EffectKind,
        position: Position,
        color: Color,
        scale: f64,
    },
    /// Play a sound. `pitch_variance` is the random detune range in cents.
    Sound {
        sound: String,
        volume: f64,
        pitch_variance: f64,
    },
    /// Shake the camera.
    Shake { duration_ms: f64, intensity: f64 },
    /// Fade the camera out.
    Fade { duration_ms: f64 },
    /// The match ended; hand the final score to the next scene.
    MatchEnded { final_score: u32 },
    /// A command was rejected with no state change.
    CommandRejected { reason: String },
}

impl PresentationEvent {
    pub fn effect(kind: EffectKind, position: Position, color: Color, scale: f64) -> Self {
        PresentationEvent::Effect {
            kind,
            position,
            color,
            scale,
        }
    }

    pub fn sound(sound: impl Into<String>, volume: f64, pitch_variance: f64) -> Self {
        PresentationEvent::Sound {
            sound: sound.into(),
            volume,
            pitch_variance,
        }
    }
}
