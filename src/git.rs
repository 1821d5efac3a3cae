//! Repository URL detection from the project's local git configuration.

use crate::constants::GIT_CONFIG;
use crate::error::Result;
use log::debug;
use std::path::{Path, PathBuf};
use url::Url;

/// Returns the path of the git configuration file under `root`.
pub fn git_config_path<P: AsRef<Path>>(root: P) -> PathBuf {
    GIT_CONFIG.iter().fold(root.as_ref().to_path_buf(), |path, part| path.join(part))
}

/// Reads the first `remote.<name>.url` entry of `<root>/.git/config` and returns it
/// as a browsable https URL.
///
/// # Returns
/// * `Ok(None)` if there is no git configuration or it declares no remote
///
/// # Errors
/// * `Error::Git2Error` if the configuration file exists but cannot be parsed
pub fn detect_repository<P: AsRef<Path>>(root: P) -> Result<Option<String>> {
    let config_path = git_config_path(root);
    if !config_path.is_file() {
        debug!("No git configuration at '{}'.", config_path.display());
        return Ok(None);
    }

    let config = git2::Config::open(&config_path)?;
    let mut entries = config.entries(Some(r"remote\..*\.url"))?;
    while let Some(entry) = entries.next() {
        let entry = entry?;
        if let Some(raw) = entry.value() {
            let url = normalize_remote_url(raw);
            debug!("Resolved repository '{}' from remote '{}'.", url, raw);
            return Ok(Some(url));
        }
    }

    debug!("No remote url in '{}'.", config_path.display());
    Ok(None)
}

/// Rewrites a git remote into an https URL.
///
/// `git@host:org/repo.git` and `ssh://git@host/org/repo.git` both become
/// `https://host/org/repo`. Any other value only loses its trailing `.git`.
pub fn normalize_remote_url(raw: &str) -> String {
    let raw = raw.trim();

    let url = if let Some((host, path)) =
        raw.strip_prefix("git@").and_then(|rest| rest.split_once(':'))
    {
        format!("https://{}/{}", host, path.trim_start_matches('/'))
    } else {
        match Url::parse(raw) {
            Ok(parsed) if parsed.scheme() == "ssh" => match parsed.host_str() {
                Some(host) => format!("https://{}{}", host, parsed.path()),
                None => raw.to_string(),
            },
            _ => raw.to_string(),
        }
    };

    match url.strip_suffix(".git") {
        Some(stripped) => stripped.to_string(),
        None => url,
    }
}
