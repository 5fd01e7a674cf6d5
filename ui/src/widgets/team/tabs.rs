use egui::Ui;
use roster_business::team::{Role, TeamPartition, TeamTab};
use roster_states::StateCtx;

pub fn tab_title(role: Role, count: usize) -> String {
    match role {
        Role::Official => format!("Officials ({count})"),
        Role::Volunteer => format!("Volunteers ({count})"),
    }
}

/// Tab strip with member counts. Returns the selected role.
pub fn team_tabs(state_ctx: &mut StateCtx, ui: &mut Ui) -> Role {
    let selected = state_ctx.state::<TeamTab>().selected;
    let counts = state_ctx
        .cached::<TeamPartition>()
        .map(|partition| Role::ALL.map(|role| partition.count(role)))
        .unwrap_or_default();

    let picked = ui
        .horizontal(|ui| {
            let mut picked = None;
            for (role, count) in Role::ALL.into_iter().zip(counts) {
                let icon = match role {
                    Role::Official => "🛡",
                    Role::Volunteer => "✔",
                };
                let label = format!("{icon} {}", tab_title(role, count));
                if ui.selectable_label(selected == role, label).clicked() {
                    picked = Some(role);
                }
            }
            picked
        })
        .inner;

    match picked {
        Some(role) if role != selected => {
            state_ctx.state_mut::<TeamTab>().selected = role;
            role
        }
        _ => selected,
    }
}
