//! README rendering.
//! Wraps the MiniJinja engine behind [`TemplateRenderer`] and builds the template
//! context (project metadata plus badges) in [`ReadmeRenderer`].
use crate::constants::badges;
use crate::error::Result;
use crate::scanner::ProjectInfo;
use crate::template::{resolve_template, TemplateStore};
use cruet::case::{
    camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case, snake::to_snake_case,
    train::to_train_case,
};
use log::debug;
use minijinja::{AutoEscape, Environment};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::json;

/// Characters left as-is when encoding a URI component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the shields.io license badge, encoding the license as a single path segment.
pub fn license_badge(license: &str) -> String {
    format!(
        "{}{}{}",
        badges::LICENSE_PREFIX,
        utf8_percent_encode(license, URI_COMPONENT),
        badges::LICENSE_SUFFIX
    )
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with the case filters registered and
    /// auto-escaping turned off, since the output is markdown.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("train_case", to_train_case);

        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` on a syntax error or a failing expression
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

/// Renders a project's README from a template found in a [`TemplateStore`].
pub struct ReadmeRenderer<'a> {
    engine: &'a dyn TemplateRenderer,
    store: &'a dyn TemplateStore,
}

impl<'a> ReadmeRenderer<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, store: &'a dyn TemplateStore) -> Self {
        Self { engine, store }
    }

    /// Builds the template context: the project fields plus `badges.build` and
    /// `badges.license`.
    pub fn context(&self, info: &ProjectInfo) -> Result<serde_json::Value> {
        let mut context = serde_json::to_value(info)?;
        if let Some(fields) = context.as_object_mut() {
            fields.insert(
                "badges".to_string(),
                json!({ "build": badges::BUILD, "license": license_badge(&info.license) }),
            );
        }
        Ok(context)
    }

    /// Renders `info` with the template named `template_name`.
    ///
    /// `"default"` selects the template matching the project type. A missing
    /// template falls back to `default`.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if neither template exists
    /// * `Error::MinijinjaError` if the template fails to render
    pub fn render(&self, info: &ProjectInfo, template_name: &str) -> Result<String> {
        let template = resolve_template(self.store, template_name, info)?;
        debug!("Rendering template '{}'.", template.name);
        let context = self.context(info)?;
        self.engine.render(&template.source, &context)
    }
}
