//! Domain layer of the roster desk.

pub mod config;
pub mod http;
pub mod store;
pub mod team;
pub mod toast;

pub use config::StoreConfig;
pub use store::{StoreError, StoreResult, TeamStore};
pub use toast::{TOAST_TTL, Toast, ToastKind, Toasts};

use roster_states::{StateCtx, Time};

use crate::team::{
    CancelMemberFormCommand, DeleteMemberCommand, DeleteMemberInput, LoadRosterCommand,
    MemberForm, MemberFormInput, Roster, SelectCategoryCommand, SubmitMemberCommand,
    TeamPartition, TeamTab, ToggleMemberFormCommand,
};

/// Register every state, compute and command of the team page on `ctx`.
pub fn install(ctx: &mut StateCtx, config: StoreConfig) {
    ctx.add_state(Time::default());
    ctx.add_state(config);
    ctx.add_state(Toasts::default());
    ctx.add_state(Roster::default());
    ctx.add_state(MemberForm::default());
    ctx.add_state(MemberFormInput::default());
    ctx.add_state(DeleteMemberInput::default());
    ctx.add_state(TeamTab::default());

    ctx.record_compute(TeamPartition::default());

    ctx.record_command(LoadRosterCommand);
    ctx.record_command(ToggleMemberFormCommand);
    ctx.record_command(CancelMemberFormCommand);
    ctx.record_command(SelectCategoryCommand);
    ctx.record_command(SubmitMemberCommand);
    ctx.record_command(DeleteMemberCommand);
}
