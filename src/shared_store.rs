use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::codec;
use crate::drawing::Drawing;
use crate::store::{StoreError, StoreResult};

/// One-way export of serialized drawings across the process boundary.
///
/// The widget process renders from its own copy of the drawing bytes rather
/// than subscribing to the journal store; this writes that copy. Exports are
/// eventually consistent and best-effort, never load-bearing for the editor.
#[derive(Debug, Clone)]
pub struct WidgetExport {
    root: PathBuf,
}

impl WidgetExport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn drawing_path(&self, date: NaiveDate) -> PathBuf {
        self.root.join(format!("{date}.json"))
    }

    /// Publish a day's drawing bytes, also refreshing the `latest` slot the
    /// widget shows by default.
    pub fn publish(&self, date: NaiveDate, drawing: &Drawing) -> StoreResult<()> {
        fs::create_dir_all(&self.root)?;
        let bytes = codec::encode(drawing);
        fs::write(self.drawing_path(date), &bytes)?;
        fs::write(self.root.join("latest.json"), &bytes)?;
        Ok(())
    }

    /// Drop a day's export after its drawing was cleared.
    pub fn remove(&self, date: NaiveDate) -> StoreResult<()> {
        let path = self.drawing_path(date);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Read back a published drawing the way the widget process does.
    ///
    /// Missing exports yield `None`; malformed bytes decode fail-open to an
    /// empty drawing inside [`codec::decode`].
    pub fn fetch(&self, date: NaiveDate) -> StoreResult<Option<Drawing>> {
        let path = self.drawing_path(date);
        if !path.exists() {
            return Ok(None);
        }
        let bytes =
            fs::read(&path).map_err(|e| StoreError::Read(format!("{}: {e}", path.display())))?;
        Ok(Some(codec::decode(&bytes)))
    }
}
