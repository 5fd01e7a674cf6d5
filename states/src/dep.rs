use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use crate::ctx::Entry;

/// Read-only view of the context handed to [`Compute::compute`](crate::Compute::compute).
pub struct Dep<'a> {
    inner: &'a BTreeMap<TypeId, Entry>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(inner: &'a BTreeMap<TypeId, Entry>) -> Self {
        Self { inner }
    }

    /// # Panics
    /// Panics if `T` is not registered; a compute reading an unregistered
    /// state is a wiring bug.
    pub fn state<T: 'static>(&self) -> &'a T {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.slot.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("Dependency {} is not registered", type_name::<T>()))
    }
}
