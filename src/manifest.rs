//! Parsing of the marker files that classify a project.
//! Handles the Node `package.json` manifest and the Python `requirements.txt` list.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// The subset of a `package.json` that ends up in the README.
#[derive(Debug, Default, Deserialize)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub license: Option<License>,
    #[serde(default, deserialize_with = "map_or_empty")]
    pub dependencies: IndexMap<String, Value>,
    #[serde(default, deserialize_with = "map_or_empty")]
    pub scripts: IndexMap<String, Value>,
    pub author: Option<Person>,
    pub repository: Option<Repository>,
}

/// `author` is either `"Jane <jane@example.com>"` or an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Person {
    Name(String),
    Details {
        name: Option<String>,
        email: Option<String>,
        url: Option<String>,
    },
    Unknown(Value),
}

/// `repository` is either a shorthand string or `{ "type": "git", "url": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Repository {
    Url(String),
    Details { url: Option<String> },
    Unknown(Value),
}

/// `license` is an SPDX string or the legacy `{ "type": "MIT", "url": ... }` object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum License {
    Name(String),
    Details {
        #[serde(rename = "type")]
        kind: Option<String>,
    },
    Unknown(Value),
}

/// Reads an object field, treating `null` or any other non-object value as empty.
fn map_or_empty<'de, D>(deserializer: D) -> std::result::Result<IndexMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MapOrOther {
        Map(IndexMap<String, Value>),
        Other(Value),
    }

    Ok(match MapOrOther::deserialize(deserializer)? {
        MapOrOther::Map(map) => map,
        MapOrOther::Other(_) => IndexMap::new(),
    })
}

/// Truthiness as npm tooling sees it: empty strings, zero, `false` and `null` are unset.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl Person {
    /// Flattens the person into the `name <email> (url)` form npm uses.
    pub fn display_name(&self) -> Option<String> {
        match self {
            Person::Name(name) => Some(name.clone()).filter(|n| !n.trim().is_empty()),
            Person::Details { name, email, url } => {
                let parts: Vec<String> = [
                    name.clone(),
                    email.as_ref().map(|e| format!("<{e}>")),
                    url.as_ref().map(|u| format!("({u})")),
                ]
                .into_iter()
                .flatten()
                .filter(|part| !part.trim().is_empty())
                .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(" "))
                }
            }
            Person::Unknown(_) => None,
        }
    }
}

impl Repository {
    pub fn url(&self) -> Option<&str> {
        let url = match self {
            Repository::Url(url) => Some(url.as_str()),
            Repository::Details { url } => url.as_deref(),
            Repository::Unknown(_) => None,
        };
        url.filter(|u| !u.trim().is_empty())
    }
}

impl License {
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            License::Name(name) => Some(name.as_str()),
            License::Details { kind } => kind.as_deref(),
            License::Unknown(_) => None,
        };
        name.filter(|n| !n.trim().is_empty())
    }
}

impl PackageManifest {
    /// Script name used in the usage example: `dev`, else `start`, else the first one.
    /// `dev` and `start` only count when they carry a command.
    pub fn usage_script(&self) -> Option<&str> {
        let declared = |name: &str| self.scripts.get(name).is_some_and(is_truthy);
        if declared("dev") {
            Some("dev")
        } else if declared("start") {
            Some("start")
        } else {
            self.scripts.keys().next().map(String::as_str)
        }
    }
}

fn scan_failure(path: &Path, reason: impl std::fmt::Display) -> Error {
    Error::ScanFailure {
        root: path.parent().unwrap_or(path).display().to_string(),
        reason: format!("'{}': {}", path.display(), reason),
    }
}

/// Reads and parses a `package.json` file.
///
/// # Errors
/// * `Error::ScanFailure` if the file cannot be read or is not a valid manifest
pub fn read_package_manifest<P: AsRef<Path>>(path: P) -> Result<PackageManifest> {
    let path = path.as_ref();
    debug!("Loading package manifest from {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| scan_failure(path, e))?;
    parse_package_manifest(&content).map_err(|e| scan_failure(path, e))
}

pub fn parse_package_manifest(content: &str) -> serde_json::Result<PackageManifest> {
    serde_json::from_str(content)
}

/// Reads a `requirements.txt` file into its dependency lines.
///
/// # Errors
/// * `Error::ScanFailure` if the file cannot be read
pub fn read_requirements<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    debug!("Loading requirements from {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| scan_failure(path, e))?;
    Ok(parse_requirements(&content))
}

/// Returns the trimmed, non-empty lines in declaration order.
pub fn parse_requirements(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
