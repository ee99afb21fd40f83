// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the overlay library

use body_overlay::{
    render_2d, should_render, spine_point, Color, Joint, Point2, Scale, TrackedObject,
    TrackingState, DEFAULT_ID_COLOR, ID_COLORS,
};
use image::{Rgba, RgbaImage};

/// A hand-placed pose on a 640x480 frame, coordinates chosen so probed
/// bones and circles do not overlap each other.
fn test_pose() -> Vec<Point2> {
    let mut keypoints = vec![Point2::default(); Joint::COUNT];
    let mut set = |joint: Joint, x: f32, y: f32| {
        keypoints[joint.index()] = Point2::new(x, y);
    };

    set(Joint::Nose, 320.0, 60.0);
    set(Joint::Neck, 320.0, 100.0);
    set(Joint::RightShoulder, 260.0, 110.0);
    set(Joint::RightElbow, 240.0, 170.0);
    set(Joint::RightWrist, 230.0, 230.0);
    set(Joint::LeftShoulder, 380.0, 110.0);
    set(Joint::LeftElbow, 400.0, 170.0);
    set(Joint::LeftWrist, 410.0, 230.0);
    set(Joint::RightHip, 290.0, 240.0);
    set(Joint::RightKnee, 285.0, 330.0);
    set(Joint::RightAnkle, 283.0, 420.0);
    set(Joint::LeftHip, 350.0, 240.0);
    set(Joint::LeftKnee, 355.0, 330.0);
    set(Joint::LeftAnkle, 357.0, 420.0);
    set(Joint::RightEye, 310.0, 50.0);
    set(Joint::LeftEye, 330.0, 50.0);
    set(Joint::RightEar, 300.0, 55.0);
    set(Joint::LeftEar, 340.0, 55.0);

    keypoints
}

/// Expected channel value for a color drawn on a black frame, after the
/// 0.9/0.1 composite against the pre-draw snapshot.
fn composited(channel: u8) -> i32 {
    (f64::from(channel) * 0.9).round() as i32
}

/// Assert a pixel carries `color` modulo the composite blend (tolerance 1).
fn assert_drawn(frame: &RgbaImage, x: u32, y: u32, color: Color) {
    let pixel = frame.get_pixel(x, y);
    for (actual, expected) in pixel.0[..3]
        .iter()
        .zip([composited(color.0), composited(color.1), composited(color.2)])
    {
        assert!(
            (i32::from(*actual) - expected).abs() <= 1,
            "pixel at ({x},{y}) is {:?}, expected ~{:?}",
            pixel.0,
            color
        );
    }
}

fn assert_background(frame: &RgbaImage, x: u32, y: u32) {
    assert_eq!(
        frame.get_pixel(x, y).0,
        [0, 0, 0, 0],
        "pixel at ({x},{y}) should be untouched"
    );
}

#[test]
fn test_color_assignment_properties() {
    // Deterministic
    assert_eq!(Color::from_track_id(11), Color::from_track_id(11));
    // Palette period 8
    for id in 0..8 {
        assert_eq!(Color::from_track_id(id), Color::from_track_id(id + 8));
    }
    // Negative ids fall back to the default color
    assert_eq!(Color::from_track_id(-5), DEFAULT_ID_COLOR);
}

#[test]
fn test_filter_modes() {
    assert!(should_render(TrackingState::Ok, true));
    assert!(should_render(TrackingState::Ok, false));
    assert!(!should_render(TrackingState::Off, true));
    assert!(should_render(TrackingState::Off, false));
    assert!(!should_render(TrackingState::Searching, true));
    assert!(!should_render(TrackingState::Searching, false));
}

#[test]
fn test_spine_is_hip_midpoint_after_mapping() {
    let keypoints = test_pose();
    let spine = spine_point(&keypoints).unwrap();
    assert_eq!(spine, Point2::new(320.0, 240.0));

    // Mapping commutes with the midpoint: scale the mean, or mean the scaled.
    let scale = Scale::new(0.5, 2.0);
    let left = keypoints[Joint::LeftHip.index()];
    let right = keypoints[Joint::RightHip.index()];
    let mapped_mean = spine.to_pixel(scale);
    let mean_of_mapped = ((left + right) / 2.0).to_pixel(scale);
    assert_eq!(mapped_mean, mean_of_mapped);
}

#[test]
fn test_empty_object_list_leaves_frame_identical() {
    let mut frame = RgbaImage::from_pixel(640, 480, Rgba([17, 94, 201, 255]));
    let before = frame.clone();
    render_2d(&mut frame, Scale::IDENTITY, &[], false).unwrap();
    assert_eq!(frame, before);
}

#[test]
fn test_palette_color_used_for_tracked_object() {
    let mut frame = RgbaImage::new(640, 480);
    let object = TrackedObject::new(3, TrackingState::Ok, test_pose()).unwrap();
    render_2d(&mut frame, Scale::IDENTITY, &[object], true).unwrap();

    let expected = {
        let [r, g, b] = ID_COLORS[3];
        Color(r, g, b, 255)
    };
    // Every joint circle plus the spine circle carries the palette color.
    for keypoint in test_pose() {
        let (x, y) = keypoint.to_pixel(Scale::IDENTITY);
        assert_drawn(&frame, x as u32, y as u32, expected);
    }
    assert_drawn(&frame, 320, 240, expected);
    // The synthetic spine bone runs straight down from the neck.
    assert_drawn(&frame, 320, 170, expected);
}

#[test]
fn test_negative_id_uses_default_color() {
    let mut frame = RgbaImage::new(640, 480);
    let object = TrackedObject::new(-5, TrackingState::Ok, test_pose()).unwrap();
    render_2d(&mut frame, Scale::IDENTITY, &[object], true).unwrap();

    assert_drawn(&frame, 290, 240, DEFAULT_ID_COLOR);
}

#[test]
fn test_out_of_bounds_neck_skips_incident_bones_only() {
    let mut keypoints = test_pose();
    keypoints[Joint::Neck.index()] = Point2::new(10000.0, 10000.0);

    let mut frame = RgbaImage::new(640, 480);
    let object = TrackedObject::new(0, TrackingState::Ok, keypoints).unwrap();
    render_2d(&mut frame, Scale::IDENTITY, &[object], true).unwrap();

    let expected = {
        let [r, g, b] = ID_COLORS[0];
        Color(r, g, b, 255)
    };
    // Unrelated geometry still renders: hip circles and the hip-hip bone.
    assert_drawn(&frame, 290, 240, expected);
    assert_drawn(&frame, 350, 240, expected);
    assert_drawn(&frame, 320, 240, expected);

    // Bones incident to the neck are dropped whole, not truncated: the
    // spine-to-neck segment and the old neck circle position stay empty.
    assert_background(&frame, 320, 170);
    assert_background(&frame, 320, 100);
}

#[test]
fn test_scale_maps_detection_to_display() {
    // Detection space is 1280x960; the display frame is 640x480.
    let scale = Scale::new(0.5, 0.5);
    let keypoints: Vec<Point2> = test_pose().iter().map(|kp| *kp * 2.0).collect();

    let mut frame = RgbaImage::new(640, 480);
    let object = TrackedObject::new(1, TrackingState::Ok, keypoints).unwrap();
    render_2d(&mut frame, scale, &[object], true).unwrap();

    let expected = {
        let [r, g, b] = ID_COLORS[1];
        Color(r, g, b, 255)
    };
    // Hip keypoint (580, 480) in detection space lands at (290, 240).
    assert_drawn(&frame, 290, 240, expected);
}

#[test]
fn test_objects_draw_in_input_order() {
    let mut frame = RgbaImage::new(640, 480);
    let first = TrackedObject::new(0, TrackingState::Ok, test_pose()).unwrap();
    let second = TrackedObject::new(1, TrackingState::Ok, test_pose()).unwrap();
    render_2d(&mut frame, Scale::IDENTITY, &[first, second], true).unwrap();

    // Identical poses overlap everywhere; the later object wins.
    let expected = {
        let [r, g, b] = ID_COLORS[1];
        Color(r, g, b, 255)
    };
    assert_drawn(&frame, 290, 240, expected);
}

#[test]
fn test_wrong_keypoint_count_fails_fast() {
    let object = TrackedObject {
        id: 9,
        state: TrackingState::Ok,
        keypoints: vec![Point2::default(); Joint::COUNT - 1],
    };
    let mut frame = RgbaImage::new(64, 48);
    let err = render_2d(&mut frame, Scale::IDENTITY, &[object], true).unwrap_err();
    assert!(err.to_string().contains("Contract violation"));
}

#[test]
fn test_constructor_enforces_joint_cardinality() {
    assert!(TrackedObject::new(0, TrackingState::Ok, vec![Point2::default(); Joint::COUNT]).is_ok());
    assert!(TrackedObject::new(0, TrackingState::Ok, vec![]).is_err());
}
