use std::any::TypeId;

use crate::{Dep, State, Updater};

/// Ids of the states/computes a compute reads.
pub type ComputeDeps = Vec<TypeId>;

/// A derived value, recomputed whenever one of its dependencies changes.
///
/// `compute` must stay side-effect free: results are published through the
/// updater, never by doing IO. IO belongs in a [`Command`](crate::Command).
pub trait Compute: State {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);
}
