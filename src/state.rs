use crate::config::Config;
use crate::templates::TemplateEngine;
use crate::upstream::UpstreamClient;
use anyhow::Result;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: Arc<UpstreamClient>,
    pub templates: Arc<TemplateEngine>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let upstream = UpstreamClient::new(&config.upstream);
        let templates = TemplateEngine::new()?;

        Ok(Self {
            config: Arc::new(config),
            upstream: Arc::new(upstream),
            templates: Arc::new(templates),
        })
    }
}
