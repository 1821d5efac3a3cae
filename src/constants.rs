//! Common constants used throughout the autoreadme application.

/// Node package manifest, checked first
pub const PACKAGE_JSON: &str = "package.json";

/// Python requirements file, checked when no Node manifest exists
pub const REQUIREMENTS_TXT: &str = "requirements.txt";

/// Git configuration file, relative to the project root
pub const GIT_CONFIG: [&str; 2] = [".git", "config"];

/// Template file extension
pub const TEMPLATE_EXTENSION: &str = "hbs";

/// Name of the fallback template, also the CLI default
pub const DEFAULT_TEMPLATE: &str = "default";

/// Default output path
pub const DEFAULT_OUTPUT: &str = "README.md";

/// Templates bundled with the crate
pub const BUNDLED_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

pub const DEFAULT_LICENSE: &str = "MIT";

/// Usage instructions per project type
pub mod usage {
    pub const NODE_FALLBACK: &str = "npm install && npm start";
    pub const NODE_RUN_PREFIX: &str = "npm install && npm run ";
    pub const PYTHON: &str = "pip install -r requirements.txt && python main.py";
    pub const DEFAULT: &str = "See examples in README";
}

/// Badge strings injected into the template context
pub mod badges {
    pub const BUILD: &str = "![build](https://img.shields.io/badge/build-passing-brightgreen)";

    /// The license badge wraps the URL-encoded license name
    pub const LICENSE_PREFIX: &str = "![license](https://img.shields.io/badge/license-";
    pub const LICENSE_SUFFIX: &str = "-blue)";
}
