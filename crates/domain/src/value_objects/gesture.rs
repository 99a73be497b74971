//! Drag gesture classification
//!
//! A released drag is classified from its net horizontal offset and its
//! release velocity. Either one crossing its threshold is enough to commit.
//! When offset and velocity point in opposite directions and both cross
//! their thresholds, Right wins.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

pub const DEFAULT_SWIPE_THRESHOLD: f64 = 100.0;
pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 500.0;

/// Committed swipe direction.
///
/// Right marks a question as discussed; Left saves it for later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Right,
    Left,
}

impl SwipeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
        }
    }

    /// Display name for the outcome this direction records
    pub fn outcome_label(&self) -> &'static str {
        match self {
            Self::Right => "discussed",
            Self::Left => "saved for later",
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwipeDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" | "r" => Ok(Self::Right),
            "left" | "l" => Ok(Self::Left),
            other => Err(DomainError::parse(format!("Unknown swipe direction: {other}"))),
        }
    }
}

/// Result of classifying a released drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureDecision {
    Right,
    Left,
    /// Card springs back; no state changes
    Cancel,
}

impl GestureDecision {
    pub fn direction(&self) -> Option<SwipeDirection> {
        match self {
            Self::Right => Some(SwipeDirection::Right),
            Self::Left => Some(SwipeDirection::Left),
            Self::Cancel => None,
        }
    }
}

/// Pointer state at the moment the drag is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Net horizontal displacement (signed, px)
    pub offset_x: f64,
    /// Horizontal velocity at release (signed, px/s)
    pub velocity_x: f64,
}

impl DragRelease {
    pub fn new(offset_x: f64, velocity_x: f64) -> Self {
        Self {
            offset_x,
            velocity_x,
        }
    }
}

/// Tunable gesture thresholds (`{swipeThreshold, velocityThreshold}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GestureConfig {
    /// Minimum |offset| in px that commits a swipe
    pub swipe_threshold: f64,
    /// Minimum |velocity| in px/s that commits a swipe
    pub velocity_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
        }
    }
}

impl GestureConfig {
    /// Build a config; thresholds must be finite and non-negative.
    pub fn new(swipe_threshold: f64, velocity_threshold: f64) -> Result<Self, DomainError> {
        let config = Self {
            swipe_threshold,
            velocity_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, value) in [
            ("swipeThreshold", self.swipe_threshold),
            ("velocityThreshold", self.velocity_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::validation(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// Classify a released drag.
    ///
    /// NaN inputs never cross a threshold and therefore cancel.
    pub fn classify(&self, offset_x: f64, velocity_x: f64) -> GestureDecision {
        let right = offset_x > self.swipe_threshold || velocity_x > self.velocity_threshold;
        let left = offset_x < -self.swipe_threshold || velocity_x < -self.velocity_threshold;

        if right {
            GestureDecision::Right
        } else if left {
            GestureDecision::Left
        } else {
            GestureDecision::Cancel
        }
    }

    pub fn classify_release(&self, release: DragRelease) -> GestureDecision {
        self.classify(release.offset_x, release.velocity_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_thresholds() {
        let config = GestureConfig::default();
        assert_eq!(config.classify(150.0, 0.0), GestureDecision::Right);
        assert_eq!(config.classify(-150.0, 0.0), GestureDecision::Left);
        assert_eq!(config.classify(30.0, 0.0), GestureDecision::Cancel);
        assert_eq!(config.classify(0.0, 600.0), GestureDecision::Right);
        assert_eq!(config.classify(0.0, -600.0), GestureDecision::Left);
    }

    #[test]
    fn thresholds_are_exclusive() {
        let config = GestureConfig::default();
        assert_eq!(config.classify(100.0, 0.0), GestureDecision::Cancel);
        assert_eq!(config.classify(-100.0, -500.0), GestureDecision::Cancel);
        assert_eq!(config.classify(100.5, 0.0), GestureDecision::Right);
    }

    #[test]
    fn contradictory_signals_resolve_right() {
        let config = GestureConfig::default();
        assert_eq!(config.classify(-150.0, 600.0), GestureDecision::Right);
        assert_eq!(config.classify(150.0, -600.0), GestureDecision::Right);
    }

    #[test]
    fn nan_cancels() {
        let config = GestureConfig::default();
        assert_eq!(config.classify(f64::NAN, f64::NAN), GestureDecision::Cancel);
    }

    #[test]
    fn rejects_negative_or_infinite_thresholds() {
        assert!(GestureConfig::new(-1.0, 500.0).is_err());
        assert!(GestureConfig::new(100.0, f64::INFINITY).is_err());
        assert!(GestureConfig::new(80.0, 400.0).is_ok());
    }

    #[test]
    fn config_uses_camel_case_and_defaults_missing_fields() {
        let config: GestureConfig =
            serde_json::from_str(r#"{"swipeThreshold": 80}"#).expect("valid config");
        assert_eq!(config.swipe_threshold, 80.0);
        assert_eq!(config.velocity_threshold, DEFAULT_VELOCITY_THRESHOLD);
    }

    #[test]
    fn direction_parse() {
        assert_eq!("RIGHT".parse::<SwipeDirection>().ok(), Some(SwipeDirection::Right));
        assert_eq!("l".parse::<SwipeDirection>().ok(), Some(SwipeDirection::Left));
        assert!("up".parse::<SwipeDirection>().is_err());
    }

    proptest! {
        #[test]
        fn right_wins_whenever_right_condition_holds(
            offset in -1_000.0f64..1_000.0,
            velocity in -5_000.0f64..5_000.0,
        ) {
            let config = GestureConfig::default();
            let decision = config.classify(offset, velocity);
            let right = offset > config.swipe_threshold || velocity > config.velocity_threshold;
            let left = offset < -config.swipe_threshold || velocity < -config.velocity_threshold;
            match decision {
                GestureDecision::Right => prop_assert!(right),
                GestureDecision::Left => prop_assert!(left && !right),
                GestureDecision::Cancel => prop_assert!(!left && !right),
            }
        }

        #[test]
        fn mirrored_gestures_mirror_unless_contradictory(
            offset in -1_000.0f64..1_000.0,
            velocity in -5_000.0f64..5_000.0,
        ) {
            let config = GestureConfig::default();
            let forward = config.classify(offset, velocity);
            let mirrored = config.classify(-offset, -velocity);
            let contradictory = forward == GestureDecision::Right && mirrored == GestureDecision::Right;
            if !contradictory {
                let expected = match forward {
                    GestureDecision::Right => GestureDecision::Left,
                    GestureDecision::Left => GestureDecision::Right,
                    GestureDecision::Cancel => GestureDecision::Cancel,
                };
                prop_assert_eq!(mirrored, expected);
            }
        }
    }
}
