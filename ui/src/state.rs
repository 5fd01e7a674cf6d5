use log::{error, info};
use roster_business::{StoreConfig, install};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(load_config())
    }
}

impl State {
    pub fn with_config(config: StoreConfig) -> Self {
        let mut ctx = StateCtx::new();
        install(&mut ctx, config);
        Self { ctx }
    }

    pub fn test(base_url: String) -> Self {
        Self::with_config(StoreConfig::new(base_url))
    }
}

/// Store settings from the environment (native) or from build-time
/// variables (web). An unusable configuration is logged and every store
/// operation then fails with its usual toast.
fn load_config() -> StoreConfig {
    #[cfg(not(target_arch = "wasm32"))]
    let loaded = StoreConfig::from_env();

    #[cfg(target_arch = "wasm32")]
    let loaded = StoreConfig::from_vars(
        [
            ("ROSTER_STORE_URL", option_env!("ROSTER_STORE_URL")),
            ("ROSTER_STORE_KEY", option_env!("ROSTER_STORE_KEY")),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value))),
    );

    match loaded {
        Ok(config) => {
            info!("Using team store at {}", config.url);
            config
        }
        Err(err) => {
            error!("Store configuration unavailable: {err:#}");
            StoreConfig::default()
        }
    }
}
