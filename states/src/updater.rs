use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::{debug, error};

use crate::{Command, State};

pub(crate) type Mutation = Box<dyn FnOnce(&mut dyn Any) + Send>;

pub(crate) enum Message {
    Mutate {
        id: TypeId,
        name: &'static str,
        apply: Mutation,
    },
    Dispatch {
        id: TypeId,
        name: &'static str,
    },
}

/// Send-safe handle used by commands and computes to change the context.
///
/// Messages are queued and applied in order on the UI thread by
/// `StateCtx::sync_computes`.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Message>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Message>) -> Self {
        Self { send }
    }

    /// Replace the whole value of `T`.
    pub fn set<T: State + Send>(&self, value: T) {
        self.update::<T>(move |slot| *slot = value);
    }

    /// Mutate `T` in place. The closure runs on the UI thread against the
    /// current value, not against the snapshot the command was given.
    pub fn update<T: State>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        let apply: Mutation = Box::new(move |any| match any.downcast_mut::<T>() {
            Some(slot) => f(slot),
            None => error!("Updater type mismatch for {}", type_name::<T>()),
        });
        self.push(Message::Mutate {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            apply,
        });
    }

    /// Queue a dispatch of `C`, run on the next sync.
    pub fn dispatch<C: Command>(&self) {
        self.push(Message::Dispatch {
            id: TypeId::of::<C>(),
            name: type_name::<C>(),
        });
    }

    fn push(&self, message: Message) {
        if self.send.send(message).is_err() {
            debug!("StateCtx dropped, discarding update");
        }
    }
}
