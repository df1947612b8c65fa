//! Read-only status derived from the morph state every tick.

use std::fmt;

use crate::gesture::NEUTRAL_SCALE;
use crate::state::MorphState;

/// Below this scale the hand reads as closed.
pub const CLOSED_SCALE: f32 = 0.8;
/// Above this scale the hand reads as open and photo sprites reveal.
pub const REVEAL_SCALE: f32 = 1.3;

/// Coarse hand posture shown in the status panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandState {
    Closed,
    Open,
    Moving,
    /// Nothing has been computed yet.
    Waiting,
}

impl HandState {
    pub fn for_scale(scale: f32) -> Self {
        if scale < CLOSED_SCALE {
            HandState::Closed
        } else if scale > REVEAL_SCALE {
            HandState::Open
        } else {
            HandState::Moving
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HandState::Closed  => "CLOSED",
            HandState::Open    => "OPEN",
            HandState::Moving  => "MOVING",
            HandState::Waiting => "WAITING",
        }
    }
}

impl fmt::Display for HandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// `{handState, scaleFactor, isDetected}` for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppSignal {
    pub hand_state:   HandState,
    pub scale_factor: f32,
    /// Heuristic: true whenever the target differs from neutral.  A hand
    /// whose pose maps to exactly the neutral scale reads as undetected.
    pub is_detected:  bool,
}

impl AppSignal {
    /// Status before the first tick.
    pub fn waiting() -> Self {
        AppSignal {
            hand_state:   HandState::Waiting,
            scale_factor: NEUTRAL_SCALE,
            is_detected:  false,
        }
    }

    pub fn from_morph(morph: &MorphState) -> Self {
        AppSignal {
            hand_state:   HandState::for_scale(morph.current_scale),
            scale_factor: morph.current_scale,
            is_detected:  morph.target_scale != NEUTRAL_SCALE,
        }
    }

    /// Scale as a whole percentage, e.g. `"135%"`.
    pub fn expansion_percent(&self) -> String {
        format!("{:.0}%", self.scale_factor * 100.0)
    }
}

impl Default for AppSignal {
    fn default() -> Self {
        AppSignal::waiting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn morph(target: f32, current: f32) -> MorphState {
        MorphState { target_scale: target, current_scale: current }
    }

    #[test]
    fn thresholds() {
        assert_eq!(HandState::for_scale(0.79), HandState::Closed);
        assert_eq!(HandState::for_scale(0.8), HandState::Moving);
        assert_eq!(HandState::for_scale(1.3), HandState::Moving);
        assert_eq!(HandState::for_scale(1.31), HandState::Open);
    }

    #[test]
    fn detection_heuristic() {
        assert!(!AppSignal::from_morph(&morph(1.0, 1.7)).is_detected);
        assert!(AppSignal::from_morph(&morph(1.0001, 1.0)).is_detected);
        assert!(AppSignal::from_morph(&morph(0.4, 1.0)).is_detected);
    }

    #[test]
    fn waiting_before_first_tick() {
        let s = AppSignal::default();
        assert_eq!(s.hand_state, HandState::Waiting);
        assert_eq!(s.scale_factor, 1.0);
        assert!(!s.is_detected);
        assert_eq!(s.hand_state.to_string(), "WAITING");
    }

    #[test]
    fn expansion_percent_rounds() {
        let s = AppSignal::from_morph(&morph(2.0, 1.346));
        assert_eq!(s.expansion_percent(), "135%");
    }
}
