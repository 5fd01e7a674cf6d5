use egui::{Align, Layout, Response, Ui};
use roster_business::team::{
    LoadRosterCommand, MemberForm, Roster, RosterStatus, ToggleMemberFormCommand,
};
use roster_states::StateCtx;

use super::{member_form, member_grid, team_tabs};

/// Height of the area holding the loading spinner.
const SPINNER_AREA_HEIGHT: f32 = 400.0;

/// Displays the whole team page.
///
/// The first frame with an `Idle` roster starts the initial fetch. While a
/// fetch is running only a centred spinner is shown.
pub fn team_page(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    if state_ctx.state::<Roster>().status == RosterStatus::Idle {
        state_ctx.dispatch::<LoadRosterCommand>();
    }

    if state_ctx.state::<Roster>().is_loading() {
        return ui
            .allocate_ui_with_layout(
                egui::vec2(ui.available_width(), SPINNER_AREA_HEIGHT),
                Layout::centered_and_justified(egui::Direction::TopDown),
                |ui| ui.spinner(),
            )
            .inner;
    }

    ui.vertical(|ui| {
        header(state_ctx, ui);
        ui.add_space(16.0);

        if state_ctx.state::<MemberForm>().visible {
            member_form(state_ctx, ui);
            ui.add_space(16.0);
        }

        let selected = team_tabs(state_ctx, ui);
        ui.add_space(12.0);
        member_grid(state_ctx, ui, selected);
    })
    .response
}

fn header(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let last_fetch = state_ctx.state::<Roster>().last_fetch;
    let toggle = ui
        .horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Team Management");
                ui.weak("Manage officials and volunteers");
                if let Some(at) = last_fetch {
                    ui.small(format!("Last updated {}", at.format("%H:%M:%S UTC")));
                }
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.button("➕ Add Member").clicked()
            })
            .inner
        })
        .inner;

    if toggle {
        state_ctx.dispatch::<ToggleMemberFormCommand>();
    }
}
