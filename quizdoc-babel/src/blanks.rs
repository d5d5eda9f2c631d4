//! Fill-blank answer slot synchronization
//!
//! A fill-in-the-blanks question keeps one answer-input slot per `Blank`
//! node in its document, ordered by depth-first traversal. Slots have no
//! persistent identity: ordinals are assigned purely by position, and when
//! the blank count changes the slot list is resized at the tail — truncated
//! (highest ordinals dropped first) or extended with empty slots — never
//! reordered.
//!
//! Synchronization runs on every committed edit transaction, so it has to
//! be cheap: one traversal to count, then at most one tail resize. An
//! unchanged count must not touch existing slots at all, or in-progress
//! answer text and input focus would be lost mid-keystroke.
//!
//! Known limitation: inserting a new blank before existing ones shifts
//! every later ordinal, so previously typed answers attach to the wrong
//! blank. Only tail-based count resize is implemented.

use crate::ast::Document;
use serde::Serialize;
use std::cmp::Ordering;

/// One answer-input binding for a blank placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlankSlot {
    pub answer: String,
}

/// An answer object in the submission payload for one blank.
///
/// `id` is the blank's 1-based ordinal, assigned by position at export
/// time — it is never stored on the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlankAnswer {
    pub id: usize,
    pub answer: String,
}

/// The slot list owned by a question's answer model.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerSlots {
    slots: Vec<BlankSlot>,
}

impl AnswerSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[BlankSlot] {
        &self.slots
    }

    /// Mutable access to one slot, for typing into it.
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut BlankSlot> {
        self.slots.get_mut(index)
    }

    /// Recompute the slot list against the current document.
    ///
    /// `None` means the editor has not mounted: all slots are cleared.
    /// Otherwise the list is resized at the tail to match the document's
    /// blank count. An equal count is a strict no-op — existing slots are
    /// not rebuilt, so typed answers survive unrelated edits.
    pub fn sync(&mut self, doc: Option<&Document>) {
        let Some(doc) = doc else {
            self.slots.clear();
            return;
        };

        let total = doc.count_blanks();
        match total.cmp(&self.slots.len()) {
            Ordering::Equal => {}
            Ordering::Less => self.slots.truncate(total),
            Ordering::Greater => self.slots.resize_with(total, BlankSlot::default),
        }
    }

    /// Build the submission payload.
    ///
    /// Returns `None` when there are no blanks: a question without blanks is
    /// unanswered, not answered with an empty list.
    pub fn export(&self) -> Option<Vec<BlankAnswer>> {
        if self.slots.is_empty() {
            return None;
        }
        Some(
            self.slots
                .iter()
                .enumerate()
                .map(|(index, slot)| BlankAnswer {
                    id: index + 1,
                    answer: slot.answer.clone(),
                })
                .collect(),
        )
    }
}
