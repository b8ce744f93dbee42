use crate::types::{CollectionId, Name, RecordId};
use serde::Serialize;
use std::time::SystemTime;

/// Anything with a display name. The prefix index needs nothing else.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Named + ?Sized> Named for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A record stored in one of the tracked collections.
pub trait Record: Named + Clone + Serialize {
    const COLLECTION: CollectionId;

    /// Editable fields: everything except identity and timestamps.
    type Form: Clone;

    fn id(&self) -> RecordId;

    /// Foreign key into another collection, if the record has one.
    fn parent(&self) -> Option<(CollectionId, RecordId)>;

    /// Foreign key a form would introduce.
    fn form_parent(form: &Self::Form) -> Option<(CollectionId, RecordId)>;

    fn from_form(id: RecordId, form: Self::Form, now: SystemTime) -> Self;

    fn to_form(&self) -> Self::Form;

    /// Current fields with the name replaced.
    fn renamed(&self, name: Name) -> Self::Form;

    /// Replaces editable fields, keeping `created_at` and bumping `updated_at`.
    fn apply_form(&mut self, form: Self::Form, now: SystemTime);
}
