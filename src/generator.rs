//! Ties the scanner and the renderer together and writes the result.

use crate::error::{Error, Result};
use crate::renderer::{MiniJinjaRenderer, ReadmeRenderer};
use crate::scanner::scan;
use crate::template::DirectoryTemplateStore;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Scans `root` and renders its README with `template_name` from `templates_dir`.
///
/// # Errors
/// * `Error::ScanFailure` if the project cannot be scanned
/// * `Error::TemplateNotFound` if no template resolves
/// * `Error::MinijinjaError` if rendering fails
pub fn generate_readme<P: AsRef<Path>, T: AsRef<Path>>(
    root: P,
    template_name: &str,
    templates_dir: T,
) -> Result<String> {
    let engine = MiniJinjaRenderer::new();
    let store = DirectoryTemplateStore::new(templates_dir.as_ref());

    let info = scan(root)?;
    ReadmeRenderer::new(&engine, &store).render(&info, template_name)
}

/// Writes `content` to `dest_path`, creating parent directories and replacing any
/// existing file. Relative paths resolve against the current directory.
///
/// # Returns
/// * `Result<PathBuf>` - Absolute path of the written file
///
/// # Errors
/// * `Error::WriteFailure` if the directory or the file cannot be written
pub fn write_output<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<PathBuf> {
    let dest_path = dest_path.as_ref();
    let abs_path = if dest_path.is_absolute() {
        dest_path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|source| write_failure(dest_path, source))?
            .join(dest_path)
    };

    if let Some(parent) = abs_path.parent() {
        fs::create_dir_all(parent).map_err(|source| write_failure(&abs_path, source))?;
    }

    debug!("Writing file: {}", abs_path.display());
    fs::write(&abs_path, content).map_err(|source| write_failure(&abs_path, source))?;
    Ok(abs_path)
}

fn write_failure(path: &Path, source: std::io::Error) -> Error {
    Error::WriteFailure { path: path.display().to_string(), source }
}
