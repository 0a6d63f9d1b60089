use crate::drawing::Drawing;

/// Oldest snapshots are evicted beyond this depth to bound memory.
pub const MAX_HISTORY_DEPTH: usize = 50;

/// Linear undo/redo history over whole-drawing snapshots.
///
/// The current drawing is always exactly what is rendered and what gets
/// persisted after a committing operation. A new commit after an undo clears
/// the redo stack; there is no branching.
#[derive(Debug, Default)]
pub struct DrawingHistory {
    current: Drawing,
    undo_stack: Vec<Drawing>,
    redo_stack: Vec<Drawing>,
}

fn push_trimmed(stack: &mut Vec<Drawing>, drawing: Drawing) {
    if stack.len() >= MAX_HISTORY_DEPTH {
        stack.remove(0);
    }
    stack.push(drawing);
}

impl DrawingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Drawing {
        &self.current
    }

    /// Replace the current drawing, pushing the previous one onto the undo
    /// stack and clearing the redo stack.
    pub fn commit(&mut self, new_drawing: Drawing) {
        let previous = std::mem::replace(&mut self.current, new_drawing);
        push_trimmed(&mut self.undo_stack, previous);
        self.redo_stack.clear();
    }

    /// Step back one snapshot. No-op (returns false) when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let undone = std::mem::replace(&mut self.current, previous);
        push_trimmed(&mut self.redo_stack, undone);
        true
    }

    /// Step forward one snapshot. No-op (returns false) when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let redone = std::mem::replace(&mut self.current, next);
        push_trimmed(&mut self.undo_stack, redone);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Empty both stacks, keeping the current drawing.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Swap in a different drawing and drop all history, so edits never leak
    /// across day entries.
    pub fn reset(&mut self, drawing: Drawing) {
        self.current = drawing;
        self.clear();
    }
}
