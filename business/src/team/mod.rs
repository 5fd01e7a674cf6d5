//! Team roster page: model, loader, add form, delete action and view.

mod delete;
mod form;
mod model;
mod roster;
mod view;

pub use delete::{DeleteMemberCommand, DeleteMemberInput};
pub use form::{
    CancelMemberFormCommand, MemberForm, MemberFormError, MemberFormInput, SelectCategoryCommand,
    SubmitMemberCommand, ToggleMemberFormCommand,
};
pub use model::{
    MemberId, NewTeamMember, OFFICIAL_RESPONSIBILITIES, Role, SHIFTS, TeamMember,
    VOLUNTEER_RESPONSIBILITIES,
};
pub use roster::{LoadRosterCommand, Roster, RosterStatus};
pub use view::{TeamPartition, TeamTab};
