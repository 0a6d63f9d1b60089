use egui::pos2;
use inkday::canvas::{LOGICAL_CANVAS_SIZE, StrokeCapture, TAP_THRESHOLD};

#[test]
fn tap_is_classified_as_dot() {
    let mut capture = StrokeCapture::new();
    capture.begin(pos2(50.0, 50.0));
    let stroke = capture.end(pos2(51.0, 50.5)).expect("stroke should commit");

    assert!(stroke.is_dot());
    // The dot is a clean single point at the gesture origin.
    assert_eq!(stroke.points(), &[pos2(50.0, 50.0)]);
}

#[test]
fn jitter_below_threshold_still_counts_as_tap() {
    let mut capture = StrokeCapture::new();
    capture.begin(pos2(100.0, 100.0));
    let just_under = pos2(100.0 + TAP_THRESHOLD - 0.1, 100.0);
    let stroke = capture.end(just_under).unwrap();

    assert!(stroke.is_dot());
    assert_eq!(stroke.points().len(), 1);
}

#[test]
fn displacement_at_threshold_is_a_line() {
    let mut capture = StrokeCapture::new();
    capture.begin(pos2(100.0, 100.0));
    let stroke = capture.end(pos2(100.0 + TAP_THRESHOLD, 100.0)).unwrap();

    assert!(!stroke.is_dot());
    assert_eq!(stroke.points().len(), 2);
}

#[test]
fn drag_is_classified_as_line() {
    let mut capture = StrokeCapture::new();
    capture.begin(pos2(10.0, 10.0));
    assert!(capture.extend(pos2(20.0, 10.0)).is_none());
    assert!(capture.extend(pos2(20.0, 20.0)).is_none());
    let stroke = capture.end(pos2(30.0, 20.0)).unwrap();

    assert!(!stroke.is_dot());
    assert_eq!(
        stroke.points(),
        &[
            pos2(10.0, 10.0),
            pos2(20.0, 10.0),
            pos2(20.0, 20.0),
            pos2(30.0, 20.0),
        ]
    );
}

#[test]
fn extended_gesture_is_never_reclassified_as_tap() {
    // Out and back: the pointer travelled, so this is a line even though
    // start and end are within the tap threshold.
    let mut capture = StrokeCapture::new();
    capture.begin(pos2(10.0, 10.0));
    capture.extend(pos2(40.0, 40.0));
    let stroke = capture.end(pos2(11.0, 10.0)).unwrap();

    assert!(!stroke.is_dot());
    assert_eq!(stroke.points().len(), 3);
}

#[test]
fn repeated_points_do_not_mark_the_gesture_extended() {
    let mut capture = StrokeCapture::new();
    capture.begin(pos2(10.0, 10.0));
    capture.extend(pos2(10.0, 10.0));
    capture.extend(pos2(10.0, 10.0));
    let stroke = capture.end(pos2(10.5, 10.0)).unwrap();

    assert!(stroke.is_dot());
}

#[test]
fn leaving_the_canvas_commits_at_the_boundary() {
    let mut capture = StrokeCapture::new();
    capture.begin(pos2(290.0, 150.0));
    let stroke = capture
        .extend(pos2(LOGICAL_CANVAS_SIZE + 10.0, 150.0))
        .expect("crossing the boundary should commit");

    assert!(!stroke.is_dot());
    let last = *stroke.points().last().unwrap();
    assert_eq!(last, pos2(LOGICAL_CANVAS_SIZE, 150.0));

    // The capture is idle until the next pointer-down.
    assert!(!capture.is_active());
    assert!(capture.extend(pos2(150.0, 150.0)).is_none());
    assert!(capture.end(pos2(150.0, 150.0)).is_none());
}

#[test]
fn fast_flick_without_moves_is_a_line() {
    // Only down and up events arrived, but the displacement is large.
    let mut capture = StrokeCapture::new();
    capture.begin(pos2(10.0, 10.0));
    let stroke = capture.end(pos2(40.0, 40.0)).unwrap();

    assert!(!stroke.is_dot());
    assert_eq!(stroke.points(), &[pos2(10.0, 10.0), pos2(40.0, 40.0)]);
}

#[test]
fn cancel_discards_the_gesture() {
    let mut capture = StrokeCapture::new();
    capture.begin(pos2(10.0, 10.0));
    capture.extend(pos2(20.0, 20.0));
    capture.cancel();

    assert!(!capture.is_active());
    assert!(capture.end(pos2(30.0, 30.0)).is_none());
}

#[test]
fn preview_tracks_the_in_progress_points() {
    let mut capture = StrokeCapture::new();
    assert!(capture.preview_points().is_none());

    capture.begin(pos2(10.0, 10.0));
    capture.extend(pos2(20.0, 20.0));
    assert_eq!(
        capture.preview_points().unwrap(),
        &[pos2(10.0, 10.0), pos2(20.0, 20.0)]
    );
}
