use chrono::{TimeZone, Utc};
use roster_business::team::{MemberId, Role, Roster, RosterStatus, TeamMember};

use crate::state::State;

/// Address nothing listens on; widget tests never reach the store.
pub const UNREACHABLE_STORE: &str = "http://127.0.0.1:9";

pub fn member(id: &str, name: &str, role: Role, responsibility: &str) -> TeamMember {
    TeamMember {
        id: MemberId::new(id),
        name: name.to_owned(),
        email: None,
        mobile: None,
        responsibilities: responsibility.to_owned(),
        shift_details: None,
        role,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
    }
}

/// A. Roy (official, Event Director) and S. Nair (volunteer, Stage
/// Coordinator, evening shift), newest first.
pub fn roy_and_nair() -> Vec<TeamMember> {
    let mut nair = member("v1", "S. Nair", Role::Volunteer, "Stage Coordinator");
    nair.shift_details = Some("Evening (2PM-8PM)".to_owned());
    nair.mobile = Some("555-0102".to_owned());

    let mut roy = member("o1", "A. Roy", Role::Official, "Event Director");
    roy.email = Some("a.roy@example.org".to_owned());
    roy.mobile = Some("555-0101".to_owned());

    vec![nair, roy]
}

/// State whose roster is already loaded with `members`.
pub fn loaded_state(members: Vec<TeamMember>) -> State {
    let mut state = State::test(UNREACHABLE_STORE.to_owned());
    state.ctx.update::<Roster>(|roster| {
        roster.members = members;
        roster.status = RosterStatus::Loaded;
    });
    state.ctx.sync_computes();
    state
}
