use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::drawing::Drawing;

/// The persisted record for one calendar day: optional free-text body and an
/// optional sketch.
///
/// Entries are created lazily the first time a user adds text or a stroke to
/// a date; the drawing field is cleared when the drawing becomes empty, and
/// the record itself is only deleted through explicit user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub drawing: Option<Drawing>,
}

impl DayEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            body: None,
            drawing: None,
        }
    }

    /// Set the body text; blank text clears the field.
    pub fn set_body(&mut self, body: &str) {
        if body.trim().is_empty() {
            self.body = None;
        } else {
            self.body = Some(body.to_owned());
        }
    }

    /// Set the sketch; an empty drawing clears the field.
    pub fn set_drawing(&mut self, drawing: Drawing) {
        if drawing.is_empty() {
            self.drawing = None;
        } else {
            self.drawing = Some(drawing);
        }
    }

    /// The entry's sketch, or an empty drawing if none was recorded.
    pub fn drawing(&self) -> Drawing {
        self.drawing.clone().unwrap_or_default()
    }

    /// True when the entry carries no content and need not exist on disk.
    pub fn is_empty(&self) -> bool {
        self.body.is_none() && self.drawing.is_none()
    }
}
