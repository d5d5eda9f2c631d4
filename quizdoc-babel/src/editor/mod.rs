//! Editor host: the live editing session over one document
//!
//! The host owns the current tree and is the only writer. All edits arrive
//! as [`Transaction`] values and are applied sequentially on the calling
//! thread; there is no background work anywhere in this crate, matching the
//! single-UI-thread model of the surrounding application.
//!
//! Change listeners fire synchronously, once per committed transaction, in
//! the same call that applied it. Ordering between listeners is
//! unspecified and must not be relied upon. The fill-blank synchronizer is
//! wired up as one such listener (see `blanks`); widget layers register
//! another to re-render.

pub mod transaction;
pub mod views;

pub use transaction::{EditError, NodePath, Transaction};
pub use views::{NodeView, NodeViewKind, ViewOptions};

use crate::ast::{Document, Fragment};

/// Identifier handed out by [`Editor::on_change`], for unsubscribing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type ChangeListener = Box<dyn FnMut(&Document)>;

/// A live editing session bound to one editing surface.
#[derive(Default)]
pub struct Editor {
    doc: Option<Document>,
    listeners: Vec<(ListenerId, ChangeListener)>,
    next_listener: u64,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current tree, or `None` before the first content is set.
    pub fn content(&self) -> Option<&Document> {
        self.doc.as_ref()
    }

    /// Replace the whole document (mount, or programmatic reset).
    pub fn set_content(&mut self, doc: Document) {
        // Replace cannot fail.
        let _ = self.apply(Transaction::Replace(doc));
    }

    /// Splice a fragment in at the given cursor position.
    pub fn insert_fragment(&mut self, fragment: Fragment, at: NodePath) -> Result<(), EditError> {
        self.apply(Transaction::InsertFragment { at, fragment })
    }

    /// Apply one transaction and notify listeners.
    ///
    /// On error the current tree is left exactly as it was and no listener
    /// fires.
    pub fn apply(&mut self, tx: Transaction) -> Result<(), EditError> {
        let empty = Document::default();
        let current = self.doc.as_ref().unwrap_or(&empty);
        let next = tx.apply(current)?;
        self.doc = Some(next);
        if let Some(doc) = &self.doc {
            for (_, listener) in &mut self.listeners {
                listener(doc);
            }
        }
        Ok(())
    }

    /// Subscribe to committed transactions.
    pub fn on_change(&mut self, listener: impl FnMut(&Document) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unsubscribe. Returns false if the id was already removed.
    pub fn off_change(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("doc", &self.doc)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Block, Inline, InlineMath, Paragraph, TextRun};
    use crate::blanks::AnswerSlots;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn one_paragraph_doc() -> Document {
        Document::new(vec![Block::Paragraph(Paragraph::new(vec![Inline::Text(
            TextRun::new("Let "),
        )]))])
    }

    #[test]
    fn content_is_none_before_mount() {
        let editor = Editor::new();
        assert!(editor.content().is_none());
    }

    #[test]
    fn set_content_mounts_the_document() {
        let mut editor = Editor::new();
        editor.set_content(one_paragraph_doc());
        assert_eq!(editor.content(), Some(&one_paragraph_doc()));
    }

    #[test]
    fn listeners_fire_once_per_committed_transaction() {
        let mut editor = Editor::new();
        let fired = Rc::new(RefCell::new(0));
        let fired_in_listener = Rc::clone(&fired);
        editor.on_change(move |_| *fired_in_listener.borrow_mut() += 1);

        editor.set_content(one_paragraph_doc());
        editor
            .apply(Transaction::InsertBlank {
                at: NodePath::inline(0, 1),
            })
            .unwrap();

        assert_eq!(*fired.borrow(), 2);
    }

    #[test]
    fn failed_transactions_do_not_notify_or_modify() {
        let mut editor = Editor::new();
        editor.set_content(one_paragraph_doc());

        let fired = Rc::new(RefCell::new(0));
        let fired_in_listener = Rc::clone(&fired);
        editor.on_change(move |_| *fired_in_listener.borrow_mut() += 1);

        let result = editor.apply(Transaction::RemoveNode {
            at: NodePath::block(7),
        });

        assert!(result.is_err());
        assert_eq!(*fired.borrow(), 0);
        assert_eq!(editor.content(), Some(&one_paragraph_doc()));
    }

    #[test]
    fn off_change_unsubscribes() {
        let mut editor = Editor::new();
        let fired = Rc::new(RefCell::new(0));
        let fired_in_listener = Rc::clone(&fired);
        let id = editor.on_change(move |_| *fired_in_listener.borrow_mut() += 1);

        assert!(editor.off_change(id));
        assert!(!editor.off_change(id));

        editor.set_content(one_paragraph_doc());
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn blank_slots_stay_in_sync_through_the_change_listener() {
        let mut editor = Editor::new();
        let slots = Rc::new(RefCell::new(AnswerSlots::new()));

        let slots_in_listener = Rc::clone(&slots);
        editor.on_change(move |doc| slots_in_listener.borrow_mut().sync(Some(doc)));

        editor.set_content(one_paragraph_doc());
        assert_eq!(slots.borrow().len(), 0);

        editor
            .apply(Transaction::InsertBlank {
                at: NodePath::inline(0, 1),
            })
            .unwrap();
        assert_eq!(slots.borrow().len(), 1);

        // Typed answer survives an unrelated edit.
        slots.borrow_mut().slot_mut(0).unwrap().answer = "42".to_string();
        editor
            .apply(Transaction::InsertFragment {
                at: NodePath::inline(0, 0),
                fragment: Fragment::Inline(vec![Inline::Math(InlineMath::new("x"))]),
            })
            .unwrap();
        assert_eq!(slots.borrow().len(), 1);
        assert_eq!(slots.borrow().slots()[0].answer, "42");

        // Removing the blank truncates the slot list.
        let doc = editor.content().unwrap().clone();
        let Block::Paragraph(para) = &doc.children[0] else {
            panic!("expected a paragraph");
        };
        let blank_index = para
            .children
            .iter()
            .position(|inline| matches!(inline, Inline::Blank))
            .unwrap();
        editor
            .apply(Transaction::RemoveNode {
                at: NodePath::inline(0, blank_index),
            })
            .unwrap();
        assert_eq!(slots.borrow().len(), 0);
    }
}
