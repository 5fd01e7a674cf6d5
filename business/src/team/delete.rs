use std::any::Any;

use log::{debug, error, info};
use roster_states::{Command, CommandFuture, CommandSnapshot, State, Updater, done};

use crate::config::StoreConfig;
use crate::store::TeamStore;
use crate::team::{MemberId, Roster};
use crate::toast::{notify_error, notify_success};

/// Id of the card whose delete control was pressed.
///
/// Read once at dispatch, so the UI may overwrite it for the next delete
/// while earlier requests are still running.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteMemberInput {
    pub id: Option<MemberId>,
}

impl State for DeleteMemberInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }
}

#[derive(Default)]
pub struct DeleteMemberCommand;

impl Command for DeleteMemberCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let Some(id) = snap.state::<DeleteMemberInput>().id else {
            debug!("DeleteMemberCommand dispatched without an id");
            return done();
        };

        let store = TeamStore::new(snap.state::<StoreConfig>().clone());
        updater.update::<Roster>(move |roster| {
            roster.deleting.insert(id);
        });

        Box::pin(async move {
            match store.delete_member(id).await {
                Ok(()) => {
                    info!("Deleted team member {id}");
                    updater.update::<Roster>(move |roster| {
                        roster.deleting.remove(&id);
                        roster.remove(id);
                    });
                    notify_success(&updater, "Team member deleted");
                }
                Err(err) => {
                    error!("Failed to delete team member {id}: {err}");
                    updater.update::<Roster>(move |roster| {
                        roster.deleting.remove(&id);
                    });
                    notify_error(&updater, "Failed to delete team member");
                }
            }
        })
    }
}
