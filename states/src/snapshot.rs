use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

/// Cloned states captured when a command is dispatched.
///
/// Commands read their inputs from here, so two dispatches of the same
/// command each keep the input that was current at their own dispatch.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert_cloned(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was not snapshotted (not registered, or its
    /// `State::snapshot` returns `None`).
    pub fn state<T: 'static>(&self) -> &T {
        self.get::<T>()
            .unwrap_or_else(|| panic!("State snapshot for {} is missing", type_name::<T>()))
    }
}
