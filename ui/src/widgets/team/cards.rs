use egui::{Align, Color32, CornerRadius, Frame, Grid, Layout, Margin, RichText, Stroke, Ui};
use roster_business::team::{
    DeleteMemberCommand, DeleteMemberInput, MemberId, Role, Roster, TeamMember, TeamPartition,
};
use roster_states::StateCtx;

use crate::utils::colors::{COLOR_MUTED, COLOR_OFFICIAL, COLOR_RED, COLOR_VOLUNTEER};

/// Width of one member card.
const CARD_WIDTH: f32 = 280.0;

/// Upper bound on cards per row.
const MAX_COLUMNS: usize = 3;

fn accent(role: Role) -> Color32 {
    match role {
        Role::Official => COLOR_OFFICIAL,
        Role::Volunteer => COLOR_VOLUNTEER,
    }
}

fn badge(ui: &mut Ui, text: &str, color: Color32) {
    Frame::NONE
        .stroke(Stroke::new(1.0, color))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(color));
        });
}

fn detail(ui: &mut Ui, icon: &str, text: &str) {
    ui.label(RichText::new(format!("{icon} {text}")).small().color(COLOR_MUTED));
}

/// Displays one member card. Returns `true` when its delete control was pressed.
pub fn member_card(ui: &mut Ui, member: &TeamMember, deleting: bool) -> bool {
    let color = accent(member.role);
    let mut delete = false;

    Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);

            ui.horizontal(|ui| {
                let icon = match member.role {
                    Role::Official => "👤",
                    Role::Volunteer => "✔",
                };
                ui.label(RichText::new(icon).size(22.0).color(color));
                ui.vertical(|ui| {
                    ui.strong(&member.name);
                    if let Some(responsibility) = member.responsibility() {
                        badge(ui, responsibility, color);
                    }
                });
                ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                    if deleting {
                        ui.spinner();
                    } else {
                        delete = ui
                            .button(RichText::new("🗑").color(COLOR_RED))
                            .on_hover_text("Delete")
                            .clicked();
                    }
                });
            });

            ui.add_space(8.0);
            if member.role.has_shifts() {
                if let Some(shift) = member.shift() {
                    detail(ui, "📅", shift);
                }
                if let Some(responsibility) = member.responsibility() {
                    detail(ui, "💼", responsibility);
                }
            }
            if let Some(email) = member.email() {
                detail(ui, "✉", email);
            }
            if let Some(mobile) = member.mobile() {
                detail(ui, "☎", mobile);
            }
        });

    delete
}

/// Displays the cards of `role`, or a placeholder when there are none.
pub fn member_grid(state_ctx: &mut StateCtx, ui: &mut Ui, role: Role) {
    let mut to_delete: Option<MemberId> = None;

    {
        let roster = state_ctx.state::<Roster>();
        let members = state_ctx
            .cached::<TeamPartition>()
            .map(|partition| partition.members(role))
            .unwrap_or_default();

        if members.is_empty() {
            Frame::group(ui.style())
                .inner_margin(Margin::same(32))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.weak(format!(
                            "No {} added yet. Click \"Add Member\" to get started.",
                            role.plural()
                        ));
                    });
                });
        } else {
            let columns = ((ui.available_width() / CARD_WIDTH) as usize).clamp(1, MAX_COLUMNS);
            Grid::new(("member_grid", role))
                .spacing([16.0, 16.0])
                .show(ui, |ui| {
                    for (index, member) in members.iter().enumerate() {
                        if member_card(ui, member, roster.is_deleting(member.id)) {
                            to_delete = Some(member.id);
                        }
                        if (index + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        }
    }

    if let Some(id) = to_delete {
        state_ctx.state_mut::<DeleteMemberInput>().id = Some(id);
        state_ctx.dispatch::<DeleteMemberCommand>();
    }
}
