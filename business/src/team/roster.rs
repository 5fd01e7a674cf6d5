use std::any::Any;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::{debug, error, info};
use roster_states::{Command, CommandFuture, CommandSnapshot, State, Time, Updater, done};

use crate::config::StoreConfig;
use crate::store::TeamStore;
use crate::team::{MemberId, TeamMember};
use crate::toast::notify_error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RosterStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    /// At least one fetch finished, successfully or not.
    Loaded,
}

/// Members currently displayed, newest first.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub members: Vec<TeamMember>,
    pub status: RosterStatus,
    /// Frame time at which the last successful fetch was issued.
    pub last_fetch: Option<DateTime<Utc>>,
    /// Ids with a delete request in flight.
    pub deleting: HashSet<MemberId>,
}

impl Roster {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, RosterStatus::Idle | RosterStatus::Loading)
    }

    pub fn is_deleting(&self, id: MemberId) -> bool {
        self.deleting.contains(&id)
    }

    /// Drop the member with `id`; `false` if it was not present.
    pub fn remove(&mut self, id: MemberId) -> bool {
        let before = self.members.len();
        self.members.retain(|member| member.id != id);
        self.members.len() != before
    }
}

impl State for Roster {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

/// Fetch every member, newest first, and replace the roster.
///
/// At most one fetch is outstanding: a dispatch while `Loading` is dropped.
#[derive(Default)]
pub struct LoadRosterCommand;

impl Command for LoadRosterCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        if snap.state::<Roster>().status == RosterStatus::Loading {
            debug!("Roster fetch already in flight, skipping");
            return done();
        }

        let store = TeamStore::new(snap.state::<StoreConfig>().clone());
        let issued_at = snap.state::<Time>().now();
        updater.update::<Roster>(|roster| roster.status = RosterStatus::Loading);

        Box::pin(async move {
            match store.list_members().await {
                Ok(members) => {
                    info!("Fetched {} team members", members.len());
                    updater.update::<Roster>(move |roster| {
                        roster.members = members;
                        roster.status = RosterStatus::Loaded;
                        roster.last_fetch = Some(issued_at);
                    });
                }
                Err(err) => {
                    error!("Failed to fetch team members: {err}");
                    updater.update::<Roster>(|roster| roster.status = RosterStatus::Loaded);
                    notify_error(&updater, "Failed to fetch team members");
                }
            }
        })
    }
}
