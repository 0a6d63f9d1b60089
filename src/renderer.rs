use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke};

use crate::canvas::{DOT_RADIUS, LINE_WIDTH, LOGICAL_CANVAS_SIZE};
use crate::drawing::Drawing;
use crate::stroke::Stroke;

/// Map a point from logical canvas space into a display rect.
pub fn logical_to_screen(display: Rect, point: Pos2) -> Pos2 {
    let scale = display.width() / LOGICAL_CANVAS_SIZE;
    display.min + point.to_vec2() * scale
}

/// Map a display-space point back into logical canvas space.
pub fn screen_to_logical(display: Rect, point: Pos2) -> Pos2 {
    let scale = display.width() / LOGICAL_CANVAS_SIZE;
    ((point - display.min) / scale).to_pos2()
}

/// Paints drawings into an egui [`Painter`], rescaling every point and the
/// stroke width uniformly by `display_size / logical_size`.
///
/// Stored coordinates are never mutated; scaling is purely a presentation
/// transform, so the same drawing renders identically on the editing
/// surface, a thumbnail, or a widget.
pub struct DrawingRenderer {
    ink: Color32,
    preview: Option<Vec<Pos2>>,
}

impl Default for DrawingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingRenderer {
    pub fn new() -> Self {
        Self {
            ink: Color32::BLACK,
            preview: None,
        }
    }

    /// Points of the in-progress stroke to draw on top of the committed
    /// drawing, or `None` to clear the preview.
    pub fn set_preview(&mut self, points: Option<Vec<Pos2>>) {
        self.preview = points;
    }

    /// Draw a committed drawing plus any preview stroke into `display`.
    pub fn render(&self, painter: &Painter, display: Rect, drawing: &Drawing) {
        for stroke in drawing.strokes() {
            self.paint_stroke(painter, display, stroke);
        }

        if let Some(points) = &self.preview {
            self.paint_polyline(painter, display, points);
        }
    }

    fn paint_stroke(&self, painter: &Painter, display: Rect, stroke: &Stroke) {
        if !stroke.is_renderable() {
            return;
        }

        let scale = display.width() / LOGICAL_CANVAS_SIZE;
        if stroke.is_dot() {
            if let Some(center) = stroke.center() {
                painter.circle_filled(
                    logical_to_screen(display, center),
                    DOT_RADIUS * scale,
                    self.ink,
                );
            }
        } else {
            self.paint_polyline(painter, display, stroke.points());
        }
    }

    fn paint_polyline(&self, painter: &Painter, display: Rect, points: &[Pos2]) {
        let scale = display.width() / LOGICAL_CANVAS_SIZE;
        let width = LINE_WIDTH * scale;
        let mapped: Vec<Pos2> = points
            .iter()
            .map(|p| logical_to_screen(display, *p))
            .collect();

        // egui lines are butt-capped; stamp a disc on each vertex to get the
        // round caps and joins the format calls for.
        for point in &mapped {
            painter.circle_filled(*point, width / 2.0, self.ink);
        }
        if mapped.len() >= 2 {
            painter.add(Shape::line(mapped, EguiStroke::new(width, self.ink)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn coordinate_mapping_round_trips() {
        let display = Rect::from_min_size(pos2(40.0, 100.0), vec2(600.0, 600.0));
        let logical = pos2(150.0, 37.5);

        let screen = logical_to_screen(display, logical);
        assert_eq!(screen, pos2(340.0, 175.0));

        let back = screen_to_logical(display, screen);
        assert!((back.x - logical.x).abs() < 1e-4);
        assert!((back.y - logical.y).abs() < 1e-4);
    }
}
