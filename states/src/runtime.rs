use crate::CommandFuture;

/// Spawn a command future on the platform executor.
///
/// Native builds need an entered tokio runtime; without one the future is
/// dropped and an error is logged.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn spawn(name: &'static str, fut: CommandFuture) {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            drop(handle.spawn(fut));
        }
        Err(err) => {
            log::error!("Cannot run {name}: no tokio runtime entered ({err})");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn spawn(_name: &'static str, fut: CommandFuture) {
    wasm_bindgen_futures::spawn_local(fut);
}
