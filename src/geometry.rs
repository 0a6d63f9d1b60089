use egui::{Pos2, Rect};

/// Distance from a point to a line segment.
///
/// A zero-length segment degrades to point distance, which is what the
/// rasterizer relies on when stamping dots.
pub fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Axis-aligned bounding box of a point set, padded on every side.
pub fn bounding_rect(points: &[Pos2], padding: f32) -> Rect {
    let Some(first) = points.first() else {
        return Rect::NOTHING;
    };

    let mut min = *first;
    let mut max = *first;
    for point in &points[1..] {
        min = min.min(*point);
        max = max.max(*point);
    }

    Rect::from_min_max(min, max).expand(padding)
}
