use autoreadme::constants::usage;
use autoreadme::error::Error;
use autoreadme::scanner::{scan, ProjectType};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use test_log::test;

fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn dir_name(root: &Path) -> String {
    fs::canonicalize(root).unwrap().file_name().unwrap().to_string_lossy().into_owned()
}

#[test]
fn test_node_project() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "package.json",
        r#"{
            "name": "widget",
            "description": "Makes widgets",
            "license": "Apache-2.0",
            "author": "Jane Doe",
            "scripts": {"build": "tsc", "start": "node .", "dev": "vite"},
            "dependencies": {"react": "^18", "axios": "^1"}
        }"#,
    );

    let info = scan(temp_dir.path()).unwrap();
    assert_eq!(info.project_type, ProjectType::Node);
    assert_eq!(info.project_name, "widget");
    assert_eq!(info.description, "Makes widgets");
    assert_eq!(info.license, "Apache-2.0");
    assert_eq!(info.author.as_deref(), Some("Jane Doe"));
    assert!(info.usage_example.contains("run dev"));
    assert_eq!(info.usage_example, "npm install && npm run dev");
    assert_eq!(info.dependencies, vec!["react", "axios"]);
    assert_eq!(info.scripts, vec!["build", "start", "dev"]);
}

#[test]
fn test_node_project_defaults() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "package.json", "{}");

    let info = scan(temp_dir.path()).unwrap();
    assert_eq!(info.project_type, ProjectType::Node);
    assert_eq!(info.project_name, dir_name(temp_dir.path()));
    assert_eq!(info.description, "");
    assert_eq!(info.license, "MIT");
    assert_eq!(info.usage_example, usage::NODE_FALLBACK);
    assert!(info.dependencies.is_empty());
    assert!(info.scripts.is_empty());
}

#[test]
fn test_node_usage_falls_back_to_start_then_first_script() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "package.json", r#"{"scripts": {"test": "jest", "start": "node ."}}"#);
    assert_eq!(scan(temp_dir.path()).unwrap().usage_example, "npm install && npm run start");

    write(temp_dir.path(), "package.json", r#"{"scripts": {"lint": "eslint", "test": "jest"}}"#);
    assert_eq!(scan(temp_dir.path()).unwrap().usage_example, "npm install && npm run lint");
}

#[test]
fn test_node_project_with_null_fields() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "package.json",
        r#"{"name": "w", "dependencies": null, "scripts": null, "license": null}"#,
    );

    let info = scan(temp_dir.path()).unwrap();
    assert_eq!(info.project_type, ProjectType::Node);
    assert_eq!(info.project_name, "w");
    assert!(info.dependencies.is_empty());
    assert!(info.scripts.is_empty());
    assert_eq!(info.license, "MIT");
    assert_eq!(info.usage_example, usage::NODE_FALLBACK);
}

#[test]
fn test_node_project_with_legacy_license_object() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "package.json",
        r#"{"name": "w", "license": {"type": "BSD-3-Clause", "url": "x"}}"#,
    );
    assert_eq!(scan(temp_dir.path()).unwrap().license, "BSD-3-Clause");

    write(temp_dir.path(), "package.json", r#"{"name": "w", "license": 42}"#);
    assert_eq!(scan(temp_dir.path()).unwrap().license, "MIT");
}

#[test]
fn test_node_usage_ignores_empty_dev_script() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "package.json", r#"{"scripts": {"dev": "", "start": "node ."}}"#);
    assert_eq!(scan(temp_dir.path()).unwrap().usage_example, "npm install && npm run start");
}

#[test]
fn test_python_project() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "requirements.txt", "flask\n\nrequests");

    let info = scan(temp_dir.path()).unwrap();
    assert_eq!(info.project_type, ProjectType::Python);
    assert_eq!(info.dependencies, vec!["flask", "requests"]);
    assert_eq!(info.usage_example, usage::PYTHON);
    assert_eq!(info.project_name, dir_name(temp_dir.path()));
    assert!(info.scripts.is_empty());
}

#[test]
fn test_package_json_takes_priority() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "requirements.txt", "flask\n");
    write(temp_dir.path(), "package.json", r#"{"name": "hybrid"}"#);

    let info = scan(temp_dir.path()).unwrap();
    assert_eq!(info.project_type, ProjectType::Node);
    assert!(info.dependencies.is_empty());
}

#[test]
fn test_unclassified_project() {
    let temp_dir = TempDir::new().unwrap();

    let info = scan(temp_dir.path()).unwrap();
    assert_eq!(info.project_type, ProjectType::Default);
    assert!(info.dependencies.is_empty());
    assert_eq!(info.license, "MIT");
    assert_eq!(info.usage_example, usage::DEFAULT);
    assert_eq!(info.repository, None);
    assert_eq!(info.author, None);
}

#[test]
fn test_repository_from_git_remote() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        ".git/config",
        "[remote \"origin\"]\n\turl = git@github.com:acme/widget.git\n",
    );
    write(temp_dir.path(), "requirements.txt", "flask\n");

    let info = scan(temp_dir.path()).unwrap();
    assert_eq!(info.repository.as_deref(), Some("https://github.com/acme/widget"));
}

#[test]
fn test_manifest_repository_wins_over_git_remote() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        ".git/config",
        "[remote \"origin\"]\n\turl = git@github.com:acme/widget.git\n",
    );
    write(
        temp_dir.path(),
        "package.json",
        r#"{"repository": {"type": "git", "url": "https://example.com/widget"}}"#,
    );

    let info = scan(temp_dir.path()).unwrap();
    assert_eq!(info.repository.as_deref(), Some("https://example.com/widget"));
}

#[test]
fn test_broken_git_config_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), ".git/config", "[remote \"origin\"\n");

    let info = scan(temp_dir.path()).unwrap();
    assert_eq!(info.project_type, ProjectType::Default);
    assert_eq!(info.repository, None);
}

#[test]
fn test_invalid_package_json() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "package.json", "{ \"name\": ");

    match scan(temp_dir.path()) {
        Err(Error::ScanFailure { reason, .. }) => assert!(reason.contains("package.json")),
        other => panic!("Expected ScanFailure, got {:?}", other),
    }
}

#[test]
fn test_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let result = scan(temp_dir.path().join("missing"));
    assert!(matches!(result, Err(Error::ScanFailure { .. })));
}

#[test]
fn test_root_is_a_file() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "file.txt", "");
    let result = scan(temp_dir.path().join("file.txt"));
    assert!(matches!(result, Err(Error::ScanFailure { .. })));
}
