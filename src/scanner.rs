//! Project scanning.
//! Classifies a directory as a Node, Python or unclassified project and collects the
//! metadata the README templates are rendered from.

use crate::constants::{usage, DEFAULT_LICENSE, PACKAGE_JSON, REQUIREMENTS_TXT};
use crate::error::{Error, Result};
use crate::git::detect_repository;
use crate::manifest::{read_package_manifest, read_requirements, PackageManifest};
use log::{debug, warn};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Project classification, decided by the marker files present in the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Node,
    Python,
    Default,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Node => "node",
            ProjectType::Python => "python",
            ProjectType::Default => "default",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the renderer knows about a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub project_name: String,
    pub description: String,
    pub license: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub usage_example: String,
    pub dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    pub scripts: Vec<String>,
}

impl ProjectInfo {
    /// An unclassified project with every optional field empty.
    pub fn new<S: Into<String>>(project_name: S) -> Self {
        Self {
            project_name: project_name.into(),
            description: String::new(),
            license: DEFAULT_LICENSE.to_string(),
            project_type: ProjectType::Default,
            usage_example: usage::DEFAULT.to_string(),
            dependencies: Vec::new(),
            author: None,
            repository: None,
            scripts: Vec::new(),
        }
    }

    fn from_package_manifest(manifest: PackageManifest, dir_name: String) -> Self {
        let usage_example = match manifest.usage_script() {
            Some(script) => format!("{}{}", usage::NODE_RUN_PREFIX, script),
            None => usage::NODE_FALLBACK.to_string(),
        };

        Self {
            project_name: non_empty(manifest.name).unwrap_or(dir_name),
            description: manifest.description.unwrap_or_default(),
            license: manifest
                .license
                .as_ref()
                .and_then(|l| l.name())
                .map_or_else(|| DEFAULT_LICENSE.to_string(), String::from),
            project_type: ProjectType::Node,
            usage_example,
            dependencies: manifest.dependencies.keys().cloned().collect(),
            author: manifest.author.as_ref().and_then(|a| a.display_name()),
            repository: manifest.repository.as_ref().and_then(|r| r.url()).map(String::from),
            scripts: manifest.scripts.keys().cloned().collect(),
        }
    }

    fn from_requirements(dependencies: Vec<String>, dir_name: String) -> Self {
        Self {
            project_type: ProjectType::Python,
            usage_example: usage::PYTHON.to_string(),
            dependencies,
            ..Self::new(dir_name)
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Scans `root` and builds its [`ProjectInfo`].
///
/// Marker files are checked in a fixed order: `package.json` first, then
/// `requirements.txt`. When the manifest does not name a repository, the first
/// remote of `.git/config` is used instead. Failing to read the git configuration
/// only logs a warning.
///
/// # Errors
/// * `Error::ScanFailure` if the root is not a readable directory, or a marker file
///   exists but cannot be read or parsed
pub fn scan<P: AsRef<Path>>(root: P) -> Result<ProjectInfo> {
    let root = root.as_ref();
    let scan_failure = |reason: String| Error::ScanFailure {
        root: root.display().to_string(),
        reason,
    };

    let root = fs::canonicalize(root).map_err(|e| scan_failure(e.to_string()))?;
    fs::read_dir(&root).map_err(|e| scan_failure(e.to_string()))?;

    let dir_name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!("Scanning project in '{}'.", root.display());

    let package_json = root.join(PACKAGE_JSON);
    let requirements_txt = root.join(REQUIREMENTS_TXT);

    let mut info = if package_json.is_file() {
        ProjectInfo::from_package_manifest(read_package_manifest(&package_json)?, dir_name)
    } else if requirements_txt.is_file() {
        ProjectInfo::from_requirements(read_requirements(&requirements_txt)?, dir_name)
    } else {
        ProjectInfo::new(dir_name)
    };

    if info.repository.is_none() {
        info.repository = match detect_repository(&root) {
            Ok(repository) => repository,
            Err(e) => {
                warn!("Could not detect git repository: {}", e);
                None
            }
        };
    }

    debug!("Detected a '{}' project named '{}'.", info.project_type, info.project_name);
    Ok(info)
}
