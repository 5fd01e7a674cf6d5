use std::time::Duration;

use egui_kittest::Harness;
use roster_ui::state::State;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Start a store whose table holds `rows` and render `app` against it.
    pub async fn new(rows: Value, app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        Self::with_listing(ResponseTemplate::new(200).set_body_json(rows), app).await
    }

    /// Like [`TestCtx::new`], but every listing answers with `status`.
    #[allow(unused)]
    pub async fn failing(status: u16, app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        Self::with_listing(ResponseTemplate::new(status), app).await
    }

    async fn with_listing(
        listing: ResponseTemplate,
        app: impl FnMut(&mut egui::Ui, &mut State) + 'a,
    ) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/team_members"))
            .respond_with(listing)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let harness = Harness::new_ui_state(app, state);

        Self {
            mock_server,
            harness,
        }
    }

    #[allow(unused)]
    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Render frames until `done` holds, failing after about two seconds.
    pub async fn wait_for(&mut self, what: &str, done: impl Fn(&Harness<'a, State>) -> bool) {
        for _ in 0..100 {
            self.harness.state_mut().ctx.sync_computes();
            self.harness.step();
            if done(&self.harness) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("timed out waiting for {what}");
    }
}

#[allow(unused)]
/// The page as the app renders it: team page plus toast overlay.
pub fn page(ui: &mut egui::Ui, state: &mut State) {
    state.ctx.sync_computes();
    roster_ui::widgets::team_page(&mut state.ctx, ui);
    roster_ui::widgets::toasts(&mut state.ctx, ui.ctx());
}

#[allow(unused)]
pub fn roy_and_nair() -> Value {
    json!([
        {
            "id": "v1",
            "name": "S. Nair",
            "email": null,
            "mobile": "555-0102",
            "responsibilities": "Stage Coordinator",
            "shift_details": "Evening (2PM-8PM)",
            "role": "volunteer",
            "created_at": "2024-05-02T10:00:00Z"
        },
        {
            "id": "o1",
            "name": "A. Roy",
            "email": "a.roy@example.org",
            "mobile": "555-0101",
            "responsibilities": "Event Director",
            "shift_details": null,
            "role": "official",
            "created_at": "2024-05-01T10:00:00Z"
        }
    ])
}
