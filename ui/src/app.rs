use std::time::Duration;

use chrono::Utc;
use roster_business::Toasts;
use roster_business::team::{MemberForm, Roster};
use roster_states::{StateCtx, Time};

use crate::{state::State, widgets};

/// Repaint interval while requests are in flight or toasts are shown.
/// Command results arrive through a channel that does not wake the UI.
const PENDING_REPAINT: Duration = Duration::from_millis(100);

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tick(&mut self.state.ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                widgets::team_page(&mut self.state.ctx, ui);
            });
        });

        widgets::toasts(&mut self.state.ctx, ctx);

        if has_pending_work(&self.state.ctx) {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}

/// Advance the frame clock, expire toasts and apply command results.
fn tick(state_ctx: &mut StateCtx) {
    let now = Utc::now();
    state_ctx.update::<Time>(|time| *time.as_mut() = now);
    if state_ctx.state::<Toasts>().needs_expire(now) {
        state_ctx.update::<Toasts>(|toasts| toasts.expire(now));
    }
    state_ctx.sync_computes();
}

fn has_pending_work(state_ctx: &StateCtx) -> bool {
    let roster = state_ctx.state::<Roster>();
    roster.is_loading()
        || !roster.deleting.is_empty()
        || state_ctx.state::<MemberForm>().submitting
        || !state_ctx.state::<Toasts>().is_empty()
}
