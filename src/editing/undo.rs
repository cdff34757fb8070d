//! Managing undo state
//!
//! Each entry is a full snapshot of whatever the host is editing, tagged
//! with the name of the user action that produced it.

use std::collections::VecDeque;

use crate::core::settings::UNDO_STACK_SIZE;

/// A snapshot plus the action that led to it
#[derive(Debug, Clone)]
struct UndoEntry<T> {
    label: String,
    state: T,
}

/// A bounded stack of snapshots that can be undone and redone.
#[derive(Debug, Clone)]
pub struct UndoState<T: Clone> {
    max_undo_count: usize,
    stack: VecDeque<UndoEntry<T>>,
    /// The index in `stack` of the live snapshot.
    live_index: usize,
}

impl<T: Clone> UndoState<T> {
    /// Create a new undo state holding only the initial snapshot.
    pub fn new(init_state: T) -> Self {
        Self::with_capacity(UNDO_STACK_SIZE, init_state)
    }

    /// Create a new undo state keeping at most `max_undo_count` snapshots.
    pub fn with_capacity(max_undo_count: usize, init_state: T) -> Self {
        let mut stack = VecDeque::new();
        stack.push_back(UndoEntry {
            label: String::new(),
            state: init_state,
        });
        UndoState {
            max_undo_count: max_undo_count.max(1),
            stack,
            live_index: 0,
        }
    }

    /// Step back one action, returning the snapshot to restore.
    pub fn undo(&mut self) -> Option<&T> {
        if self.live_index == 0 {
            return None;
        }
        self.live_index -= 1;
        self.stack.get(self.live_index).map(|entry| &entry.state)
    }

    /// Step forward over a previously undone action.
    pub fn redo(&mut self) -> Option<&T> {
        if self.live_index + 1 >= self.stack.len() {
            return None;
        }
        self.live_index += 1;
        self.stack.get(self.live_index).map(|entry| &entry.state)
    }

    /// Record the snapshot produced by a named action.
    ///
    /// Anything that was undone is dropped; the oldest snapshot falls off
    /// once the stack is full.
    pub fn push(&mut self, label: impl Into<String>, state: T) {
        self.stack.truncate(self.live_index + 1);
        self.stack.push_back(UndoEntry {
            label: label.into(),
            state,
        });
        self.live_index = self.stack.len() - 1;

        if self.stack.len() > self.max_undo_count {
            self.stack.pop_front();
            self.live_index -= 1;
        }
    }

    /// The live snapshot.
    pub fn current(&self) -> Option<&T> {
        self.stack.get(self.live_index).map(|entry| &entry.state)
    }

    /// Name of the action `undo` would revert, if any.
    pub fn undo_label(&self) -> Option<&str> {
        if self.live_index == 0 {
            return None;
        }
        self.stack
            .get(self.live_index)
            .map(|entry| entry.label.as_str())
    }

    pub fn can_undo(&self) -> bool {
        self.live_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.live_index + 1 < self.stack.len()
    }

    /// Number of snapshots kept, including the initial one.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.live_index
    }
}
