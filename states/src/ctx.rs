use std::any::{Any, TypeId, type_name};
use std::collections::{BTreeMap, BTreeSet};

use flume::Receiver;
use log::{debug, error, warn};

use crate::runtime::spawn;
use crate::updater::Message;
use crate::{
    Command, CommandSnapshot, Compute, Dep, Error, Graph, State, StateSyncStatus, TopologyError,
    Updater,
};

/// Upper bound on drain/compute rounds per sync, so a compute that keeps
/// republishing cannot stall a frame.
const MAX_SYNC_ROUNDS: usize = 16;

pub(crate) enum Slot {
    State(Box<dyn State>),
    Compute(Box<dyn Compute>),
}

impl Slot {
    pub(crate) fn as_any(&self) -> &dyn Any {
        match self {
            Slot::State(state) => state.as_any(),
            Slot::Compute(compute) => compute.as_any(),
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        match self {
            Slot::State(state) => state.as_any_mut(),
            Slot::Compute(compute) => compute.as_any_mut(),
        }
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        match self {
            Slot::State(state) => state.snapshot(),
            Slot::Compute(compute) => compute.snapshot(),
        }
    }
}

pub(crate) struct Entry {
    pub(crate) slot: Slot,
    status: StateSyncStatus,
}

/// Owner of every state, compute and command of a page.
///
/// Lives on the UI thread. Call [`StateCtx::sync_computes`] once per frame to
/// apply what async commands have sent back.
pub struct StateCtx {
    storage: BTreeMap<TypeId, Entry>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,

    graph: Graph<TypeId>,
    compute_order: Vec<TypeId>,

    updater: Updater,
    recv: Receiver<Message>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            storage: BTreeMap::new(),
            commands: BTreeMap::new(),
            graph: Graph::new(),
            compute_order: Vec::new(),
            updater: Updater::new(send),
            recv,
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage.insert(
            TypeId::of::<T>(),
            Entry {
                slot: Slot::State(Box::new(state)),
                status: StateSyncStatus::Init,
            },
        );
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        for dep in compute.deps() {
            self.graph.route_to(dep, id);
        }

        self.storage.insert(
            id,
            Entry {
                slot: Slot::Compute(Box::new(compute)),
                status: StateSyncStatus::Init,
            },
        );

        match self.graph.topology_sort() {
            Ok(order) => {
                let mut sorted: Vec<TypeId> = order
                    .into_iter()
                    .filter(|id| self.is_compute(id))
                    .collect();
                let isolated: Vec<TypeId> = self
                    .compute_ids()
                    .filter(|id| !sorted.contains(id))
                    .collect();
                sorted.extend(isolated);
                self.compute_order = sorted;
            }
            Err(err) => {
                error!("Compute {} breaks the dependency graph: {err}", type_name::<T>());
                self.compute_order.push(id);
            }
        }
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Box::new(command));
    }

    /// Check that the recorded computes form a DAG.
    pub fn verify_deps(&self) -> Result<(), TopologyError<TypeId>> {
        self.graph.topology_sort().map(|_| ())
    }

    pub fn updater(&self) -> Updater {
        self.updater.clone()
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.slot.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never added.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access; marks `T` dirty so dependent computes rerun.
    ///
    /// # Panics
    /// Panics if `T` was never added.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let entry = self
            .storage
            .get_mut(&TypeId::of::<T>())
            .unwrap_or_else(|| panic!("{}", Error::state_not_found(type_name::<T>())));
        entry.status = StateSyncStatus::Dirty;
        entry
            .slot
            .as_any_mut()
            .downcast_mut::<T>()
            .unwrap_or_else(|| panic!("{}", Error::state_not_found(type_name::<T>())))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Latest value of a compute, `None` if it was never recorded.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.slot.as_any().downcast_ref::<T>())
    }

    /// Run `C` against a snapshot of the current states.
    ///
    /// Synchronous updates made by the command are applied before this
    /// returns; the async part is spawned and reports back through the updater.
    pub fn dispatch<C: Command>(&mut self) {
        if let Err(err) = self.dispatch_id(TypeId::of::<C>(), type_name::<C>()) {
            error!("{err}");
            return;
        }
        self.sync_computes();
    }

    fn dispatch_id(&self, id: TypeId, name: &'static str) -> Result<(), Error> {
        let command = self
            .commands
            .get(&id)
            .ok_or_else(|| Error::command_not_found(name))?;

        let mut snap = CommandSnapshot::new();
        for (state_id, entry) in &self.storage {
            if let Some(cloned) = entry.slot.snapshot() {
                snap.insert_cloned(*state_id, cloned);
            }
        }

        debug!("Dispatching {name}");
        let fut = command.run(snap, self.updater.clone());
        spawn(name, fut);
        Ok(())
    }

    /// Apply queued updates and dispatches, then rerun stale computes until
    /// nothing changes.
    pub fn sync_computes(&mut self) {
        for _ in 0..MAX_SYNC_ROUNDS {
            let drained = self.drain_messages();
            let computed = self.run_computed();
            if !drained && !computed {
                return;
            }
        }
        warn!("StateCtx did not settle after {MAX_SYNC_ROUNDS} rounds");
    }

    fn drain_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(message) = self.recv.try_recv() {
            any = true;
            match message {
                Message::Mutate { id, name, apply } => match self.storage.get_mut(&id) {
                    Some(entry) => {
                        apply(entry.slot.as_any_mut());
                        entry.status = StateSyncStatus::Dirty;
                    }
                    None => error!("Dropping update for unregistered {name}"),
                },
                Message::Dispatch { id, name } => {
                    if let Err(err) = self.dispatch_id(id, name) {
                        error!("{err}");
                    }
                }
            }
        }
        any
    }

    /// Run every compute whose own slot or one of its deps is not clean.
    /// Results arrive through the updater and are applied by the next drain.
    fn run_computed(&mut self) -> bool {
        let stale: BTreeSet<TypeId> = self
            .storage
            .iter()
            .filter(|(_, entry)| entry.status != StateSyncStatus::Clean)
            .map(|(id, _)| *id)
            .collect();
        if stale.is_empty() {
            return false;
        }

        let mut ran = false;
        for id in &self.compute_order {
            let Some(Entry {
                slot: Slot::Compute(compute),
                status,
            }) = self.storage.get(id)
            else {
                continue;
            };
            let should_run = *status == StateSyncStatus::Init
                || compute.deps().iter().any(|dep| stale.contains(dep));
            if should_run {
                compute.compute(Dep::new(&self.storage), self.updater.clone());
                ran = true;
            }
        }

        for id in &stale {
            if let Some(entry) = self.storage.get_mut(id) {
                entry.status = StateSyncStatus::Clean;
            }
        }
        ran
    }

    fn is_compute(&self, id: &TypeId) -> bool {
        matches!(
            self.storage.get(id),
            Some(Entry {
                slot: Slot::Compute(_),
                ..
            })
        )
    }

    fn compute_ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.storage
            .iter()
            .filter(|(_, entry)| matches!(entry.slot, Slot::Compute(_)))
            .map(|(id, _)| *id)
    }
}
