use egui::Pos2;
use serde::{Deserialize, Serialize};

/// One continuous pointer gesture, captured as either a dot or a polyline.
///
/// Points are in logical canvas coordinates (see [`crate::canvas`]) and are
/// never mutated after capture; consumers rescale at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Pos2>,
    // Older persisted drawings predate this flag; absent means a line stroke.
    #[serde(rename = "isDot", default)]
    is_dot: bool,
}

impl Stroke {
    /// Create a line stroke from an ordered point sequence.
    ///
    /// A line needs at least 2 points to be visually meaningful; shorter
    /// sequences are accepted but render as nothing.
    pub fn line(points: Vec<Pos2>) -> Self {
        Self {
            points,
            is_dot: false,
        }
    }

    /// Create a dot stroke (a tap) centered at the given point.
    pub fn dot(center: Pos2) -> Self {
        Self {
            points: vec![center],
            is_dot: true,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn is_dot(&self) -> bool {
        self.is_dot
    }

    /// The tap center for a dot stroke, or the first point of a line.
    pub fn center(&self) -> Option<Pos2> {
        self.points.first().copied()
    }

    /// Whether the stroke has enough points to produce visible output.
    pub fn is_renderable(&self) -> bool {
        if self.is_dot {
            !self.points.is_empty()
        } else {
            self.points.len() >= 2
        }
    }
}
