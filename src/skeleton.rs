// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Skeleton topology: the fixed joint schema and the bone table.
//!
//! The bone table is data, not logic, so alternate topologies can be swapped
//! in without touching the renderer.

use std::fmt;

/// Named anatomical landmarks, in the order the tracking engine emits them.
///
/// Every [`crate::tracking::TrackedObject`] carries exactly one 2D keypoint
/// per joint, indexed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Joint {
    /// Nose tip.
    Nose = 0,
    /// Base of the neck.
    Neck = 1,
    /// Right shoulder.
    RightShoulder = 2,
    /// Right elbow.
    RightElbow = 3,
    /// Right wrist.
    RightWrist = 4,
    /// Left shoulder.
    LeftShoulder = 5,
    /// Left elbow.
    LeftElbow = 6,
    /// Left wrist.
    LeftWrist = 7,
    /// Right hip.
    RightHip = 8,
    /// Right knee.
    RightKnee = 9,
    /// Right ankle.
    RightAnkle = 10,
    /// Left hip.
    LeftHip = 11,
    /// Left knee.
    LeftKnee = 12,
    /// Left ankle.
    LeftAnkle = 13,
    /// Right eye.
    RightEye = 14,
    /// Left eye.
    LeftEye = 15,
    /// Right ear.
    RightEar = 16,
    /// Left ear.
    LeftEar = 17,
}

impl Joint {
    /// Total number of joints in the schema.
    pub const COUNT: usize = 18;

    /// All joints, in schema order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Nose,
        Self::Neck,
        Self::RightShoulder,
        Self::RightElbow,
        Self::RightWrist,
        Self::LeftShoulder,
        Self::LeftElbow,
        Self::LeftWrist,
        Self::RightHip,
        Self::RightKnee,
        Self::RightAnkle,
        Self::LeftHip,
        Self::LeftKnee,
        Self::LeftAnkle,
        Self::RightEye,
        Self::LeftEye,
        Self::RightEar,
        Self::LeftEar,
    ];

    /// Returns the keypoint index of this joint.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a joint by keypoint index.
    ///
    /// # Returns
    ///
    /// * `Some` joint if `index < Joint::COUNT`, otherwise `None`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the joint name as used in engine metadata.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::Neck => "neck",
            Self::RightShoulder => "right_shoulder",
            Self::RightElbow => "right_elbow",
            Self::RightWrist => "right_wrist",
            Self::LeftShoulder => "left_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightHip => "right_hip",
            Self::RightKnee => "right_knee",
            Self::RightAnkle => "right_ankle",
            Self::LeftHip => "left_hip",
            Self::LeftKnee => "left_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightEye => "right_eye",
            Self::LeftEye => "left_eye",
            Self::RightEar => "right_ear",
            Self::LeftEar => "left_ear",
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Skeleton bone table (pairs of joints forming topology edges).
///
/// Covers the head/eye/ear bones, both neck-shoulder-elbow-wrist chains,
/// both hip-knee-ankle chains, and the hip-hip bone. The synthetic
/// spine-to-neck bone is not listed here; its spine endpoint is a derived
/// point (see [`crate::geometry::spine_point`]) and the renderer adds it.
pub const SKELETON_BONES: [(Joint, Joint); 16] = [
    (Joint::Nose, Joint::Neck),
    (Joint::Neck, Joint::RightShoulder),
    (Joint::RightShoulder, Joint::RightElbow),
    (Joint::RightElbow, Joint::RightWrist),
    (Joint::Neck, Joint::LeftShoulder),
    (Joint::LeftShoulder, Joint::LeftElbow),
    (Joint::LeftElbow, Joint::LeftWrist),
    (Joint::RightHip, Joint::RightKnee),
    (Joint::RightKnee, Joint::RightAnkle),
    (Joint::LeftHip, Joint::LeftKnee),
    (Joint::LeftKnee, Joint::LeftAnkle),
    (Joint::RightHip, Joint::LeftHip),
    (Joint::Nose, Joint::RightEye),
    (Joint::Nose, Joint::LeftEye),
    (Joint::LeftEye, Joint::LeftEar),
    (Joint::RightEye, Joint::RightEar),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_index_round_trip() {
        for joint in Joint::ALL {
            assert_eq!(Joint::from_index(joint.index()), Some(joint));
        }
        assert_eq!(Joint::from_index(Joint::COUNT), None);
    }

    #[test]
    fn test_bone_table_indices_in_range() {
        for (a, b) in SKELETON_BONES {
            assert!(a.index() < Joint::COUNT);
            assert!(b.index() < Joint::COUNT);
        }
    }

    #[test]
    fn test_joint_names_unique() {
        let mut names: Vec<&str> = Joint::ALL.iter().map(|j| j.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Joint::COUNT);
    }

    #[test]
    fn test_bone_table_has_no_self_loops() {
        for (a, b) in SKELETON_BONES {
            assert_ne!(a, b);
        }
    }
}
