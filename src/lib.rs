//! Promptforge builds a single source-of-truth tree of agent definition
//! files (prompts, skills, agents, instructions) into the differing
//! directory and file-naming conventions required by downstream tools.

/// Command-line interface module for the promptforge application
pub mod cli;

/// Build configuration handling
/// Loads and validates the YAML build configuration (promptforge.yaml)
pub mod config;

/// Error types and handling for the promptforge application
pub mod error;

/// Logger initialization
pub mod logger;

/// Output path derivation and override resolution
/// Maps base-folder files to their target-specific destinations
pub mod mapper;

/// Template rendering with a two-tier include search path
pub mod renderer;

/// Core build orchestration
/// Combines all components to emit the final dist/ tree
pub mod builder;
