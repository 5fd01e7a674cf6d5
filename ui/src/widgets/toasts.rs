use egui::{Align2, Area, Color32, CornerRadius, Frame, Id, Label, Margin, RichText, Sense};
use roster_business::{ToastKind, Toasts};
use roster_states::StateCtx;

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Distance of the overlay from the bottom-right corner.
const TOAST_OFFSET: f32 = 16.0;

/// Displays pending toasts stacked in the bottom-right corner. Clicking a
/// toast dismisses it before it expires.
pub fn toasts(state_ctx: &mut StateCtx, ctx: &egui::Context) {
    let mut dismissed: Option<u64> = None;

    {
        let toasts = state_ctx.state::<Toasts>();
        if toasts.is_empty() {
            return;
        }

        Area::new(Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, [-TOAST_OFFSET, -TOAST_OFFSET])
            .show(ctx, |ui| {
                for toast in toasts.items() {
                    let fill = match toast.kind {
                        ToastKind::Success => COLOR_GREEN,
                        ToastKind::Error => COLOR_RED,
                    };
                    Frame::NONE
                        .fill(fill)
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            let clicked = ui
                                .add(
                                    Label::new(RichText::new(&toast.message).color(Color32::WHITE))
                                        .sense(Sense::click()),
                                )
                                .on_hover_text("Dismiss")
                                .clicked();
                            if clicked {
                                dismissed = Some(toast.id);
                            }
                        });
                    ui.add_space(6.0);
                }
            });
    }

    if let Some(id) = dismissed {
        state_ctx.update::<Toasts>(|toasts| toasts.dismiss(id));
    }
}

#[cfg(test)]
mod toasts_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use roster_business::{ToastKind, Toasts};

    use crate::state::State;
    use crate::test_utils::UNREACHABLE_STORE;

    fn state_with_two_toasts() -> State {
        let mut state = State::test(UNREACHABLE_STORE.to_owned());
        state.ctx.update::<Toasts>(|toasts| {
            toasts.push(ToastKind::Error, "Failed to fetch team members");
            toasts.push(ToastKind::Success, "Team member deleted");
        });
        state
    }

    #[test]
    fn clicking_a_toast_dismisses_only_that_toast() {
        let mut harness = Harness::new_state(
            |ctx, state: &mut State| super::toasts(&mut state.ctx, ctx),
            state_with_two_toasts(),
        );
        harness.step();

        harness
            .query_by_label("Failed to fetch team members")
            .expect("error toast")
            .click();
        harness.step();
        harness.step();

        assert!(harness.query_by_label("Failed to fetch team members").is_none());
        assert!(harness.query_by_label("Team member deleted").is_some());
        assert_eq!(
            harness.state().ctx.state::<Toasts>().last_message(),
            Some("Team member deleted")
        );
    }
}
