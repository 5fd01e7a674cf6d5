use std::any::{Any, TypeId};

use roster_states::{Compute, ComputeDeps, Dep, State, Updater};

use crate::team::{Role, Roster, TeamMember};

/// Roster split by role, order preserved.
#[derive(Debug, Clone, Default)]
pub struct TeamPartition {
    pub officials: Vec<TeamMember>,
    pub volunteers: Vec<TeamMember>,
}

impl TeamPartition {
    pub fn from_members(members: &[TeamMember]) -> Self {
        let (officials, volunteers) = members
            .iter()
            .cloned()
            .partition(|member| member.role == Role::Official);
        Self {
            officials,
            volunteers,
        }
    }

    pub fn members(&self, role: Role) -> &[TeamMember] {
        match role {
            Role::Official => &self.officials,
            Role::Volunteer => &self.volunteers,
        }
    }

    pub fn count(&self, role: Role) -> usize {
        self.members(role).len()
    }
}

impl State for TeamPartition {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Compute for TeamPartition {
    fn deps(&self) -> ComputeDeps {
        vec![TypeId::of::<Roster>()]
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let roster = deps.state::<Roster>();
        updater.set(Self::from_members(&roster.members));
    }
}

/// Tab currently shown on the team page.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamTab {
    pub selected: Role,
}

impl State for TeamTab {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
