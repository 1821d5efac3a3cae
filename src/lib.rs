//! autoreadme generates a README for a project from its metadata.
//! It detects the project type from its marker files, collects name, license,
//! dependencies and repository, and renders them through a template.

/// Command-line interface module for the autoreadme application
pub mod cli;

/// Common constants: marker files, defaults and badge formats
pub mod constants;

/// Error types and handling for the autoreadme application
pub mod error;

/// Scan, render and write orchestration
pub mod generator;

/// Repository URL detection from `.git/config`
pub mod git;

pub mod logger;

/// `package.json` and `requirements.txt` parsing
pub mod manifest;

/// Template rendering engine and README context
pub mod renderer;

/// Project type detection and metadata collection
pub mod scanner;

/// Template selection and lookup
pub mod template;
