use std::sync::Arc;

use super::{config::Config, rate_limit::RateLimiter};
use crate::catalog::Catalog;
use crate::error::Result;

pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub limiter: RateLimiter,
}

impl AppState {
    /// Loads and validates the catalog named by `config`.
    pub fn load(config: Config) -> Result<Arc<Self>> {
        let catalog = Catalog::load_validated(&config.data_dir)?;
        Ok(Self::new(config, catalog))
    }

    pub fn new(config: Config, catalog: Catalog) -> Arc<Self> {
        let limiter = RateLimiter::from_config(&config);
        Arc::new(Self {
            config,
            catalog,
            limiter,
        })
    }
}
