use egui::{Button, ComboBox, Frame, Grid, Margin, Response, TextEdit, Ui};
use roster_business::team::{
    CancelMemberFormCommand, MemberForm, MemberFormInput, Role, SHIFTS, SelectCategoryCommand,
    SubmitMemberCommand,
};
use roster_states::StateCtx;

/// Width of the text inputs and selectors.
const FIELD_WIDTH: f32 = 260.0;

enum FormAction {
    Select(Role),
    Submit,
    Cancel,
}

/// Displays the add-member form.
///
/// Edits go to a local copy of the draft that is written back only when it
/// changed; category switches, submit and cancel go through commands.
pub fn member_form(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let original = state_ctx.state::<MemberForm>().clone();
    let mut draft = original.clone();
    let mut action = None;

    let response = Frame::group(ui.style())
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.heading("Add Team Member");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                for role in Role::ALL {
                    let icon = match role {
                        Role::Official => "🛡",
                        Role::Volunteer => "✔",
                    };
                    let label = format!("{icon} {}", role.label());
                    if ui.selectable_label(draft.category == role, label).clicked()
                        && draft.category != role
                    {
                        action = Some(FormAction::Select(role));
                    }
                }
            });
            ui.add_space(8.0);

            Grid::new("member_form_grid")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| fields(ui, &mut draft));

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let submit = ui.add_enabled(!draft.submitting, Button::new("Add Member"));
                if draft.submitting {
                    ui.spinner();
                }
                if submit.clicked() {
                    action = Some(FormAction::Submit);
                }
                if ui.button("Cancel").clicked() {
                    action = Some(FormAction::Cancel);
                }
            });
        })
        .response;

    if draft != original {
        *state_ctx.state_mut::<MemberForm>() = draft;
    }

    match action {
        Some(FormAction::Select(role)) => {
            state_ctx.state_mut::<MemberFormInput>().category = role;
            state_ctx.dispatch::<SelectCategoryCommand>();
        }
        Some(FormAction::Submit) => state_ctx.dispatch::<SubmitMemberCommand>(),
        Some(FormAction::Cancel) => state_ctx.dispatch::<CancelMemberFormCommand>(),
        None => {}
    }

    response
}

fn fields(ui: &mut Ui, draft: &mut MemberForm) {
    ui.label("Full Name");
    ui.add(
        TextEdit::singleline(&mut draft.name)
            .hint_text("Enter full name")
            .desired_width(FIELD_WIDTH),
    );
    ui.end_row();

    ui.label("Role");
    let options = draft.responsibility_options();
    select(ui, "member_role", "Select role", options, &mut draft.responsibilities);
    ui.end_row();

    ui.label("Email");
    ui.add(
        TextEdit::singleline(&mut draft.email)
            .hint_text("Enter email")
            .desired_width(FIELD_WIDTH),
    );
    ui.end_row();

    ui.label("Phone");
    ui.add(
        TextEdit::singleline(&mut draft.mobile)
            .hint_text("Enter phone number")
            .desired_width(FIELD_WIDTH),
    );
    ui.end_row();

    if draft.category.has_shifts() {
        ui.label("Shift");
        select(ui, "member_shift", "Select shift", SHIFTS, &mut draft.shift);
        ui.end_row();
    }
}

fn select(ui: &mut Ui, id: &str, placeholder: &str, options: &[&str], value: &mut String) {
    let selected_text = if value.is_empty() {
        placeholder.to_owned()
    } else {
        value.clone()
    };

    ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .width(FIELD_WIDTH)
        .show_ui(ui, |ui| {
            ui.selectable_value(value, String::new(), placeholder);
            for option in options {
                ui.selectable_value(value, (*option).to_owned(), *option);
            }
        });
}
