use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use crate::{CommandSnapshot, Updater};

/// Future returned by [`Command::run`].
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Manual-only side effect, executed through `StateCtx::dispatch`.
///
/// Everything a command does synchronously in `run` (before the returned
/// future is polled) is applied to the context before `dispatch` returns.
/// This is what lets a command flip a busy flag that guards the next dispatch.
pub trait Command: Any {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture;
}

/// A finished future, for commands that bail out before doing any IO.
pub fn done() -> CommandFuture {
    Box::pin(std::future::ready(()))
}
