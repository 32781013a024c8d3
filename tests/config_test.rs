use promptforge::config::{load_config, BuildConfig};
use promptforge::error::Error;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FULL_CONFIG: &str = r#"
templates_dir: src/templates
base_dir: src/base
targets_dir: src/targets
dist_dir: dist

template_extensions: [".md"]

targets:
  .github:
    folder_mappings:
      prompts: prompts
      agents: agents
    file_suffix_rules:
      agents: ".agent.md"
    include_base_folders: [prompts, agents]
  .opencode:
    folder_mappings:
      prompts: command
    include_base_folders: [prompts]

passthrough_folders: [docs]
passthrough_files: [AGENTS.md]
"#;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("promptforge.yaml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, FULL_CONFIG);

    let config = load_config(&path).unwrap();

    assert_eq!(config.base_dir, PathBuf::from("src/base"));
    assert_eq!(config.dist_dir, PathBuf::from("dist"));
    assert_eq!(config.template_extensions, vec![".md".to_string()]);
    assert_eq!(config.passthrough_folders, vec!["docs".to_string()]);
    assert_eq!(config.passthrough_files, vec!["AGENTS.md".to_string()]);

    // Declaration order is preserved, so build order matches the file
    let names: Vec<&String> = config.targets.keys().collect();
    assert_eq!(names, vec![".github", ".opencode"]);

    let github = &config.targets[".github"];
    assert_eq!(github.file_suffix_rules["agents"], ".agent.md");
    assert_eq!(github.include_base_folders, vec!["prompts", "agents"]);

    let opencode = &config.targets[".opencode"];
    assert_eq!(opencode.folder_mappings["prompts"], "command");
    assert!(opencode.file_suffix_rules.is_empty());
}

#[test]
fn test_optional_fields_default() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
templates_dir: templates
base_dir: base
targets_dir: targets
dist_dir: dist
targets:
  x:
    include_base_folders: [prompts]
"#,
    );

    let config = load_config(&path).unwrap();

    assert_eq!(config.template_extensions, vec![".md".to_string()]);
    assert!(config.passthrough_folders.is_empty());
    assert!(config.passthrough_files.is_empty());
    assert!(config.targets["x"].folder_mappings.is_empty());
    assert!(config.targets["x"].file_suffix_rules.is_empty());
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let result = load_config(dir.path().join("nope.yaml"));
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_malformed_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "targets: [not, a, mapping");
    let result = load_config(&path);
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_template_eligibility() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, FULL_CONFIG);
    let config: BuildConfig = load_config(&path).unwrap();

    assert!(config.is_template_eligible(Path::new("prompts/foo.md")));
    assert!(config.is_template_eligible(Path::new("foo.agent.md")));
    assert!(!config.is_template_eligible(Path::new("logo.png")));
    assert!(!config.is_template_eligible(Path::new("Makefile")));
}
