use crate::types::{Record, RecordId};
use std::time::SystemTime;

/// Ordered rows of one collection.
///
/// Row order is creation order. Ids are never reused within a table.
#[derive(Debug, Clone)]
pub struct Table<R> {
    rows: Vec<R>,
    next_id: u64,
    revision: u64,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }
}

impl<R: Record> Table<R> {
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of successful mutations applied to this table.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.rows.iter().find(|row| row.id() == id)
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }

    pub(super) fn insert(&mut self, form: R::Form, now: SystemTime) -> R {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;

        let row = R::from_form(id, form, now);
        self.rows.push(row.clone());
        self.revision += 1;
        row
    }

    pub(super) fn update(&mut self, id: RecordId, form: R::Form, now: SystemTime) -> Option<R> {
        let index = self.position(id)?;
        let row = &mut self.rows[index];
        row.apply_form(form, now);
        self.revision += 1;
        Some(row.clone())
    }

    pub(super) fn remove(&mut self, id: RecordId) -> Option<R> {
        let index = self.position(id)?;
        self.revision += 1;
        Some(self.rows.remove(index))
    }
}
