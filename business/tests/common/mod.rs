use std::time::Duration;

use roster_business::{StoreConfig, install};
use roster_states::StateCtx;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const API_KEY: &str = "test-anon-key";

#[allow(unused)]
pub async fn setup() -> (MockServer, StateCtx) {
    let mock_server = MockServer::start().await;
    let mut ctx = StateCtx::new();
    install(
        &mut ctx,
        StoreConfig::new(mock_server.uri()).with_api_key(API_KEY),
    );
    ctx.sync_computes();
    (mock_server, ctx)
}

#[allow(unused)]
/// Sync the context until `done` holds, failing after about two seconds.
pub async fn wait_until(ctx: &mut StateCtx, done: impl Fn(&StateCtx) -> bool) {
    for _ in 0..100 {
        ctx.sync_computes();
        if done(ctx) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("context did not reach the expected state");
}

/// Let in-flight futures finish without waiting for a particular state.
#[allow(unused)]
pub async fn settle(ctx: &mut StateCtx) {
    tokio::time::sleep(Duration::from_millis(100)).await;
    ctx.sync_computes();
}

pub fn official(id: &str, name: &str, responsibility: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{id}@example.org"),
        "mobile": "555-0101",
        "responsibilities": responsibility,
        "shift_details": null,
        "role": "official",
        "created_at": created_at,
    })
}

pub fn volunteer(id: &str, name: &str, responsibility: &str, shift: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": null,
        "mobile": null,
        "responsibilities": responsibility,
        "shift_details": shift,
        "role": "volunteer",
        "created_at": created_at,
    })
}
