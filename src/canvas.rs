use egui::{Pos2, Rect, pos2};

use crate::stroke::Stroke;

/// Side length of the square logical canvas. All stroke coordinates live in
/// `[0, LOGICAL_CANVAS_SIZE]` on both axes; display surfaces rescale.
pub const LOGICAL_CANVAS_SIZE: f32 = 300.0;

/// Standard stroke width in logical units.
pub const LINE_WIDTH: f32 = 4.0;

/// A tap renders as a filled circle of half the standard line width.
pub const DOT_RADIUS: f32 = LINE_WIDTH / 2.0;

/// Maximum start-to-end displacement (logical units) for a gesture to count
/// as a tap when no intermediate point was recorded.
pub const TAP_THRESHOLD: f32 = 3.0;

/// The logical canvas bounds.
pub fn canvas_rect() -> Rect {
    Rect::from_min_max(
        Pos2::ZERO,
        pos2(LOGICAL_CANVAS_SIZE, LOGICAL_CANVAS_SIZE),
    )
}

fn clamp_to_canvas(p: Pos2) -> Pos2 {
    pos2(
        p.x.clamp(0.0, LOGICAL_CANVAS_SIZE),
        p.y.clamp(0.0, LOGICAL_CANVAS_SIZE),
    )
}

/// The stroke currently under the pointer.
#[derive(Debug)]
struct InProgressStroke {
    points: Vec<Pos2>,
    start: Pos2,
    // Set once a second distinct point is recorded; an extended gesture is
    // never reclassified as a tap.
    extended: bool,
}

impl InProgressStroke {
    fn new(start: Pos2) -> Self {
        Self {
            points: vec![start],
            start,
            extended: false,
        }
    }

    fn push(&mut self, point: Pos2) {
        if self.points.last() == Some(&point) {
            return;
        }
        self.points.push(point);
        self.extended = true;
    }

    fn finalize(mut self, at: Pos2) -> Stroke {
        let displacement = self.start.distance(at);
        if !self.extended && displacement < TAP_THRESHOLD {
            // Jitter under the tap threshold: substitute a clean single-point
            // dot at the gesture origin.
            return Stroke::dot(self.start);
        }

        self.push(at);
        if self.points.len() < 2 {
            Stroke::dot(self.start)
        } else {
            Stroke::line(self.points)
        }
    }
}

/// Converts a raw pointer gesture (down / move / up) into a finished
/// [`Stroke`], classifying taps as dots and drags as polylines.
///
/// The capture itself is side-effect free: committing the returned stroke to
/// a drawing and its history is the caller's job.
#[derive(Debug, Default)]
pub struct StrokeCapture {
    current: Option<InProgressStroke>,
}

impl StrokeCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke at the given point. Any stroke still in progress
    /// (a missed pointer-up) is dropped.
    pub fn begin(&mut self, at: Pos2) {
        if self.current.is_some() {
            log::debug!("starting a stroke while one is in progress; dropping the old one");
        }
        self.current = Some(InProgressStroke::new(clamp_to_canvas(at)));
    }

    /// Append a point to the in-progress stroke.
    ///
    /// If the pointer has left the canvas the stroke is committed immediately
    /// at the boundary crossing and returned; the capture then stays idle
    /// until the next [`begin`](Self::begin).
    pub fn extend(&mut self, to: Pos2) -> Option<Stroke> {
        if !canvas_rect().contains(to) {
            let stroke = self.current.take()?;
            return Some(stroke.finalize(clamp_to_canvas(to)));
        }

        if let Some(stroke) = self.current.as_mut() {
            stroke.push(to);
        }
        None
    }

    /// Finish the in-progress stroke at the given point.
    ///
    /// A gesture whose total displacement stays under [`TAP_THRESHOLD`] with
    /// no intermediate extension is forced to a dot; everything else becomes
    /// a line.
    pub fn end(&mut self, at: Pos2) -> Option<Stroke> {
        let stroke = self.current.take()?;
        Some(stroke.finalize(clamp_to_canvas(at)))
    }

    /// Abandon the in-progress stroke without committing it.
    pub fn cancel(&mut self) {
        self.current = None;
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Points recorded so far, for drawing a live preview.
    pub fn preview_points(&self) -> Option<&[Pos2]> {
        self.current.as_ref().map(|s| s.points.as_slice())
    }
}
