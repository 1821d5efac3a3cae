//! Template selection and lookup.
//! Selection is a pure function of the requested name and the scanned project;
//! reading template sources goes through [`TemplateStore`].

use crate::constants::{DEFAULT_TEMPLATE, TEMPLATE_EXTENSION};
use crate::error::{Error, Result};
use crate::scanner::ProjectInfo;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for the places templates are read from.
pub trait TemplateStore {
    /// Returns the source of the template called `name`, or `None` if it does not exist.
    fn load(&self, name: &str) -> Result<Option<String>>;

    /// Human-readable location, used in error messages.
    fn location(&self) -> String;
}

/// Store reading `<dir>/<name>.hbs` files.
pub struct DirectoryTemplateStore<P: AsRef<Path>> {
    dir: P,
}

impl<P: AsRef<Path>> DirectoryTemplateStore<P> {
    pub fn new(dir: P) -> Self {
        Self { dir }
    }

    pub fn template_path(&self, name: &str) -> PathBuf {
        self.dir.as_ref().join(format!("{}.{}", name, TEMPLATE_EXTENSION))
    }
}

impl<P: AsRef<Path>> TemplateStore for DirectoryTemplateStore<P> {
    /// # Errors
    /// * `Error::IoError` if the template file exists but cannot be read
    fn load(&self, name: &str) -> Result<Option<String>> {
        // Names are plain file stems; anything else never leaves the directory.
        if name.is_empty() || name.contains(['/', '\\']) || name == ".." {
            debug!("Ignoring invalid template name '{}'.", name);
            return Ok(None);
        }

        let path = self.template_path(name);
        if !path.is_file() {
            debug!("Template '{}' does not exist.", path.display());
            return Ok(None);
        }

        debug!("Loading template from {}", path.display());
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn location(&self) -> String {
        self.dir.as_ref().display().to_string()
    }
}

/// A template picked for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTemplate {
    pub name: String,
    pub source: String,
}

/// Maps the requested template name to the one to look up first.
///
/// `"default"` stands for "whatever fits the project", so it is replaced by the
/// project type. Any other name is used verbatim.
pub fn effective_template_name(template_name: &str, info: &ProjectInfo) -> String {
    if template_name == DEFAULT_TEMPLATE {
        info.project_type.to_string()
    } else {
        template_name.to_string()
    }
}

/// Finds the template to render `info` with, falling back to `default`.
///
/// # Errors
/// * `Error::TemplateNotFound` if neither the effective template nor `default` exists
pub fn resolve_template(
    store: &dyn TemplateStore,
    template_name: &str,
    info: &ProjectInfo,
) -> Result<ResolvedTemplate> {
    let name = effective_template_name(template_name, info);
    if let Some(source) = store.load(&name)? {
        return Ok(ResolvedTemplate { name, source });
    }

    if name != DEFAULT_TEMPLATE {
        debug!("Template '{}' not found, falling back to '{}'.", name, DEFAULT_TEMPLATE);
        if let Some(source) = store.load(DEFAULT_TEMPLATE)? {
            return Ok(ResolvedTemplate { name: DEFAULT_TEMPLATE.to_string(), source });
        }
    }

    Err(Error::TemplateNotFound { name, templates_dir: store.location() })
}
