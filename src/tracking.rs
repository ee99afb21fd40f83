// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Tracked-object input types and the render filter.
//!
//! These mirror what the upstream tracking engine hands over each frame.
//! The engine itself (detection, association, lifecycle) is an external
//! collaborator; this crate only consumes its output.

use std::fmt;
use std::str::FromStr;

use crate::error::{OverlayError, Result};
use crate::geometry::Point2;
use crate::skeleton::Joint;

/// Lifecycle state of a tracked object for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackingState {
    /// The object is actively tracked.
    Ok,
    /// Tracking is disabled for this object; the detection is still valid.
    Off,
    /// The object was lost and is being searched for.
    Searching,
    /// The object left the scene and its track is ending.
    Terminate,
}

impl TrackingState {
    /// Returns the string representation used in engine metadata.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Off => "off",
            Self::Searching => "searching",
            Self::Terminate => "terminate",
        }
    }
}

impl fmt::Display for TrackingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrackingState {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(Self::Ok),
            "off" => Ok(Self::Off),
            "searching" => Ok(Self::Searching),
            "terminate" => Ok(Self::Terminate),
            _ => Err(OverlayError::ContractViolation(format!(
                "invalid tracking state '{s}', expected one of: ok, off, searching, terminate"
            ))),
        }
    }
}

/// Decide whether an object in `state` should be drawn.
///
/// With `show_only_ok` set, only actively tracked objects render; otherwise
/// objects with tracking disabled render too. Searching/terminating objects
/// never render under either mode.
#[must_use]
pub const fn should_render(state: TrackingState, show_only_ok: bool) -> bool {
    if show_only_ok {
        matches!(state, TrackingState::Ok)
    } else {
        matches!(state, TrackingState::Ok | TrackingState::Off)
    }
}

/// One detection instance from the tracking engine.
#[derive(Debug, Clone)]
pub struct TrackedObject {
    /// Stable track identity. Negative means untracked/invalid.
    pub id: i32,
    /// Lifecycle state for the current frame.
    pub state: TrackingState,
    /// One 2D position per [`Joint`], in detection-frame coordinates,
    /// indexed by [`Joint::index`].
    pub keypoints: Vec<Point2>,
}

impl TrackedObject {
    /// Create a new tracked object, validating the keypoint cardinality.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::ContractViolation`] if `keypoints` does not
    /// hold exactly one entry per [`Joint`].
    pub fn new(id: i32, state: TrackingState, keypoints: Vec<Point2>) -> Result<Self> {
        if keypoints.len() != Joint::COUNT {
            return Err(OverlayError::ContractViolation(format!(
                "object {id} has {} keypoints, expected {}",
                keypoints.len(),
                Joint::COUNT
            )));
        }
        Ok(Self {
            id,
            state,
            keypoints,
        })
    }

    /// Get the keypoint for a joint.
    #[must_use]
    pub fn keypoint(&self, joint: Joint) -> Point2 {
        self.keypoints[joint.index()]
    }
}
