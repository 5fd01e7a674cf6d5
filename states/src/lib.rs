//! Reactive state container for the roster desk.
//!
//! - [`State`]: plain values owned by the UI thread.
//! - [`Compute`]: derived values, rerun when a dependency changes.
//! - [`Command`]: manual-only side effects, dispatched explicitly.
//! - [`Updater`]: Send-safe channel back into the context for async work.

mod basic_state;
mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod runtime;
mod snapshot;
mod state;
mod state_sync_status;
mod updater;

pub use basic_state::Time;
pub use command::{Command, CommandFuture, done};
pub use compute::{Compute, ComputeDeps};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use graph::{Graph, TopologyError};
pub use snapshot::CommandSnapshot;
pub use state::State;
pub use state_sync_status::StateSyncStatus;
pub use updater::Updater;
