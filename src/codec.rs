//! Byte-level encoding of drawings.
//!
//! The wire format is a JSON array of stroke records, e.g.
//! `[{"points":[{"x":10.0,"y":10.0},{"x":20.0,"y":10.0}],"isDot":false}]`.
//! Array order is z-order. The same bytes are written to the journal store
//! and to the widget export, so both sides of the process boundary decode
//! the identical representation.

use crate::drawing::Drawing;

/// Serialize a drawing for storage.
pub fn encode(drawing: &Drawing) -> Vec<u8> {
    serde_json::to_vec(drawing).unwrap_or_else(|err| {
        // Only reachable if serde_json itself fails on plain structs.
        log::error!("failed to encode drawing: {err}");
        b"[]".to_vec()
    })
}

/// Deserialize a drawing, failing open.
///
/// Malformed bytes yield an empty drawing with a warning; a stroke record
/// without the `isDot` field decodes as a line stroke (older persisted data
/// lacks the flag).
pub fn decode(bytes: &[u8]) -> Drawing {
    match serde_json::from_slice(bytes) {
        Ok(drawing) => drawing,
        Err(err) => {
            log::warn!("discarding malformed drawing data ({} bytes): {err}", bytes.len());
            Drawing::new()
        }
    }
}
