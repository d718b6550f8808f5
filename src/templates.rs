//! MiniJinja template engine wrapper

use anyhow::Result;
use minijinja::{Environment, Value};
use std::path::Path;

pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();

        env.set_debug(cfg!(debug_assertions));

        // Page templates live next to the handlers that render them
        let template_path = "src/web/templates";
        if Path::new(template_path).exists() {
            env.set_loader(minijinja::path_loader(template_path));
        } else {
            tracing::warn!("Template directory not found: {}", template_path);
        }

        Ok(Self { env })
    }

    /// Render a template with context
    pub fn render(&self, template_name: &str, ctx: Value) -> Result<String> {
        let template = self.env.get_template(template_name)?;
        Ok(template.render(ctx)?)
    }

    /// Add a template from string - requires owned strings for 'static lifetime
    pub fn add_template(&mut self, name: &str, content: &str) -> Result<()> {
        // MiniJinja needs 'static strings, so we leak the memory
        // This is okay for templates as they're loaded once at startup
        let name_static: &'static str = Box::leak(name.to_string().into_boxed_str());
        let content_static: &'static str = Box::leak(content.to_string().into_boxed_str());
        self.env.add_template(name_static, content_static)?;
        Ok(())
    }
}
