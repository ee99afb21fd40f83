// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Synthetic tracked-object generation for the demo CLI.
//!
//! Stands in for the external tracking engine so the overlay can be
//! exercised without cameras or models. Poses are seeded, so the same seed
//! always produces the same frame.

use crate::geometry::Point2;
use crate::skeleton::Joint;
use crate::tracking::{TrackedObject, TrackingState};

/// Generate `count` plausible in-frame skeletons in detection coordinates.
///
/// Track ids run 0..count; every third object reports tracking `Off` so the
/// strict-filter flag has something to act on.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn synthetic_objects(count: usize, width: f32, height: f32, seed: u64) -> Vec<TrackedObject> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut objects = Vec::with_capacity(count);

    for i in 0..count {
        let body_height = height * (0.35 + 0.25 * rng.f32());
        let cx = width * (0.15 + 0.7 * rng.f32());
        let cy = height * (0.4 + 0.2 * rng.f32());

        let state = if i % 3 == 2 {
            TrackingState::Off
        } else {
            TrackingState::Ok
        };

        let keypoints = synthetic_pose(cx, cy, body_height, &mut rng);
        objects.push(TrackedObject {
            id: i as i32,
            state,
            keypoints,
        });
    }

    objects
}

/// Build one pose around `(cx, cy)` (hip center) with a little jitter.
fn synthetic_pose(cx: f32, cy: f32, body_height: f32, rng: &mut fastrand::Rng) -> Vec<Point2> {
    let h = body_height;
    let mut jitter = |amount: f32| (rng.f32() - 0.5) * amount * h;

    let sway = jitter(0.06);
    let head_x = cx + sway;
    let head_y = cy - 0.48 * h;

    let mut keypoints = vec![Point2::default(); Joint::COUNT];
    let mut set = |joint: Joint, x: f32, y: f32| {
        keypoints[joint.index()] = Point2::new(x, y);
    };

    set(Joint::Nose, head_x, head_y);
    set(Joint::Neck, cx + sway * 0.5, cy - 0.38 * h);
    set(Joint::RightEye, head_x + 0.02 * h, head_y - 0.02 * h);
    set(Joint::LeftEye, head_x - 0.02 * h, head_y - 0.02 * h);
    set(Joint::RightEar, head_x + 0.045 * h, head_y);
    set(Joint::LeftEar, head_x - 0.045 * h, head_y);

    set(Joint::RightShoulder, cx + 0.13 * h, cy - 0.35 * h);
    set(Joint::LeftShoulder, cx - 0.13 * h, cy - 0.35 * h);
    set(Joint::RightElbow, cx + 0.17 * h, cy - 0.18 * h + jitter(0.05));
    set(Joint::LeftElbow, cx - 0.17 * h, cy - 0.18 * h + jitter(0.05));
    set(Joint::RightWrist, cx + 0.19 * h, cy - 0.02 * h + jitter(0.06));
    set(Joint::LeftWrist, cx - 0.19 * h, cy - 0.02 * h + jitter(0.06));

    set(Joint::RightHip, cx + 0.08 * h, cy);
    set(Joint::LeftHip, cx - 0.08 * h, cy);
    set(Joint::RightKnee, cx + 0.09 * h + jitter(0.04), cy + 0.24 * h);
    set(Joint::LeftKnee, cx - 0.09 * h + jitter(0.04), cy + 0.24 * h);
    set(Joint::RightAnkle, cx + 0.10 * h + jitter(0.04), cy + 0.47 * h);
    set(Joint::LeftAnkle, cx - 0.10 * h + jitter(0.04), cy + 0.47 * h);

    keypoints
}
