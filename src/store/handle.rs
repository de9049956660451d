use std::fmt;
use std::rc::Rc;

use super::{SectionData, SectionId, Slot, Store};
use crate::value::Value;

/// A cheap, clonable reference to one section of a parsed [`Store`].
#[derive(Clone)]
pub struct Handle {
    store: Rc<Store>,
    id: SectionId,
}

impl Handle {
    pub(super) fn new(store: Rc<Store>, id: SectionId) -> Self {
        Self { store, id }
    }

    fn data(&self) -> &SectionData {
        self.store.section(self.id)
    }

    fn child(&self, id: SectionId) -> Handle {
        Handle::new(Rc::clone(&self.store), id)
    }

    fn values(&self, name: &str) -> Option<&[Value]> {
        match self.data().slots.get(name) {
            Some(Slot::Values { values, .. }) => Some(values.as_slice()),
            _ => None,
        }
    }

    fn instances(&self, name: &str) -> &[SectionId] {
        match self.data().slots.get(name) {
            Some(Slot::Sections { ids, .. }) => ids.as_slice(),
            _ => &[],
        }
    }

    pub fn name(&self) -> &str {
        &self.data().name
    }

    pub fn title(&self) -> Option<&str> {
        self.data().title.as_deref()
    }

    /// Name-only lookup; for repeatable sections this is the first instance.
    pub fn section(&self, name: &str) -> Option<Handle> {
        self.instances(name).first().map(|id| self.child(*id))
    }

    pub fn titled_section(&self, name: &str, title: &str) -> Option<Handle> {
        self.instances(name)
            .iter()
            .find(|id| self.store.section(**id).title.as_deref() == Some(title))
            .map(|id| self.child(*id))
    }

    /// First value of the option `name`, or `None` when it holds none.
    pub fn scalar(&self, name: &str) -> Option<Value> {
        self.values(name)?.first().cloned()
    }

    pub fn list_len(&self, name: &str) -> usize {
        self.values(name).map_or(0, <[Value]>::len)
    }

    pub fn list_element(&self, name: &str, index: usize) -> Option<Value> {
        self.values(name)?.get(index).cloned()
    }

    /// Whether `name` was given in the text rather than defaulted.
    #[cfg(test)]
    pub(crate) fn is_set(&self, name: &str) -> bool {
        match self.data().slots.get(name) {
            Some(Slot::Values { set, .. }) => *set,
            Some(Slot::Sections { present, .. }) => *present,
            None => false,
        }
    }

    pub fn instance_count(&self, name: &str) -> usize {
        self.instances(name).len()
    }

    /// Title and handle of the `index`-th instance of `name`, in document order.
    pub fn nth_instance(&self, name: &str, index: usize) -> Option<(String, Handle)> {
        let id = *self.instances(name).get(index)?;
        let title = self.store.section(id).title.clone().unwrap_or_default();
        Some((title, self.child(id)))
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.id == other.id
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("name", &self.name())
            .field("title", &self.title())
            .finish()
    }
}
