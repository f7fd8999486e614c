use crate::models::{Filter, ListOrder, Note, NoteError, ACTIVE_STATUS, COMPLETED_STATUS};
use std::collections::VecDeque;

/// In-memory note collection, most recent note at the head.
#[derive(Clone, Debug)]
pub(crate) struct NoteStore {
    notes: VecDeque<Note>,
    next_seq: u64,
    order: ListOrder,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::with_order(ListOrder::default())
    }

    pub fn with_order(order: ListOrder) -> Self {
        Self {
            notes: VecDeque::new(),
            next_seq: 1,
            order,
        }
    }

    #[cfg(test)]
    pub fn order(&self) -> ListOrder {
        self.order
    }

    /// Prepends a note built from the inputs as given.
    ///
    /// The only rejected input is an empty name; status is never validated.
    pub fn add_note(&mut self, name: &str, status: &str) -> Result<Note, NoteError> {
        if name.is_empty() {
            return Err(NoteError::EmptyName);
        }

        let note = Note {
            seq: self.next_seq,
            name: name.to_string(),
            status: status.to_string(),
        };
        self.next_seq += 1;
        self.notes.push_front(note.clone());

        log::debug!(
            "note #{} added ({} stored, status {:?})",
            note.seq,
            self.notes.len(),
            note.status
        );
        Ok(note)
    }

    /// Notes matching `filter`, in the store's display order.
    pub fn get_notes(&self, filter: Filter) -> Vec<Note> {
        let ordered: Vec<Note> = order_notes(&self.notes, self.order)
            .into_iter()
            .cloned()
            .collect();
        filter_notes(&ordered, filter)
    }

    /// Head-first view of every note, independent of the display order.
    pub fn recent(&self) -> impl Iterator<Item = &Note> + '_ {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the notes `filter` accepts, preserving input order.
pub(crate) fn filter_notes(notes: &[Note], filter: Filter) -> Vec<Note> {
    notes.iter().filter(|n| filter.matches(n)).cloned().collect()
}

/// Applies `order` to a head-first (most recent first) sequence.
pub(crate) fn order_notes<'a, I>(head_first: I, order: ListOrder) -> Vec<&'a Note>
where
    I: IntoIterator<Item = &'a Note>,
    I::IntoIter: DoubleEndedIterator,
{
    let iter = head_first.into_iter();
    match order {
        ListOrder::Recent => iter.collect(),
        ListOrder::Grouped => {
            let mut oldest_first: Vec<&Note> = iter.rev().collect();
            // Stable: insertion order survives inside each group.
            oldest_first.sort_by_key(|n| status_rank(&n.status));
            oldest_first
        }
    }
}

fn status_rank(status: &str) -> u8 {
    match status {
        ACTIVE_STATUS => 0,
        COMPLETED_STATUS => 1,
        _ => 2,
    }
}
