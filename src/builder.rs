//! Core build orchestration for promptforge.
//! Walks the configured base folders for every target, applies folder and
//! suffix mappings, honors target-specific overrides, and copies
//! passthrough items, emitting the final dist/ tree.

use log::warn;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    config::BuildConfig,
    error::{Error, Result},
    mapper,
    renderer::TemplateRenderer,
};

/// Markers whose absence lets a file skip template parsing entirely
const BLOCK_MARKER: &str = "{%";
const EXPRESSION_MARKER: &str = "{{";

/// Recursively collects all regular files under `root`, sorted by file
/// name for deterministic traversal. A missing directory contributes zero
/// files.
fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn rel_path<'p>(path: &'p Path, root: &Path) -> Result<&'p Path> {
    path.strip_prefix(root)
        .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))
}

/// Drives a full or single-target build.
///
/// Holds the immutable configuration, the template renderer and the set of
/// output paths written so far (reported in the final summary).
pub struct Builder<'a> {
    config: &'a BuildConfig,
    renderer: &'a dyn TemplateRenderer,
    processed: HashSet<PathBuf>,
}

impl<'a> Builder<'a> {
    pub fn new(config: &'a BuildConfig, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { config, renderer, processed: HashSet::new() }
    }

    /// Number of distinct output files written so far.
    pub fn files_written(&self) -> usize {
        self.processed.len()
    }

    /// Removes the entire output directory. A missing directory is a no-op.
    pub fn clean(&self) -> Result<()> {
        let dist_dir = &self.config.dist_dir;
        if dist_dir.exists() {
            println!("Cleaning {}...", dist_dir.display());
            fs::remove_dir_all(dist_dir).map_err(Error::IoError)?;
        }
        Ok(())
    }

    /// Removes a single target's output subtree. A missing directory is a
    /// no-op.
    pub fn clean_target(&self, target_name: &str) -> Result<()> {
        let target_dir = self.config.dist_dir.join(target_name);
        if target_dir.exists() {
            println!("Cleaning {}...", target_dir.display());
            fs::remove_dir_all(&target_dir).map_err(Error::IoError)?;
        }
        Ok(())
    }

    /// Builds every configured target in declaration order, then the
    /// passthrough folders and files, and prints the final summary.
    pub fn build_all(&mut self) -> Result<()> {
        let config = self.config;
        for target_name in config.targets.keys() {
            self.build_target(target_name)?;
        }

        println!("Processing passthrough items...");
        let copied = self.process_passthrough()?;
        if copied > 0 {
            println!("  {} files", copied);
        }

        println!(
            "Build complete. Generated {} total files.",
            self.processed.len()
        );
        Ok(())
    }

    /// Builds a single target: its configured base folders first (with
    /// override suppression), then the target-specific tree in full.
    ///
    /// # Errors
    /// * `Error::UnknownTargetError` if the configuration does not declare
    ///   `target_name`
    pub fn build_target(&mut self, target_name: &str) -> Result<()> {
        let config = self.config;
        let target = config.targets.get(target_name).ok_or_else(|| {
            Error::UnknownTargetError { name: target_name.to_string() }
        })?;

        println!("Building target: {}", target_name);

        let mut total = 0;
        for folder_name in &target.include_base_folders {
            let copied = self.process_base_folder(target_name, folder_name)?;
            if copied > 0 {
                println!("  {}: {} files", folder_name, copied);
            }
            total += copied;
        }

        let target_files = self.process_target_files(target_name)?;
        if target_files > 0 {
            println!("  target-specific: {} files", target_files);
        }
        total += target_files;

        println!("  total: {} files", total);
        Ok(())
    }

    /// Copies one base folder into the target's output tree, applying
    /// folder and suffix mappings and skipping files shadowed by a
    /// target-specific override.
    fn process_base_folder(&mut self, target_name: &str, folder_name: &str) -> Result<usize> {
        let config = self.config;
        let target = config.targets.get(target_name).ok_or_else(|| {
            Error::UnknownTargetError { name: target_name.to_string() }
        })?;

        let base_folder = config.base_dir.join(folder_name);
        let mut copied = 0;

        for src_file in walk_files(&base_folder)? {
            let rel = rel_path(&src_file, &base_folder)?;
            let output_path = mapper::target_output_path(
                rel,
                target_name,
                folder_name,
                target,
                &config.dist_dir,
            );

            if mapper::has_override(&output_path, target_name, &config.dist_dir, &config.targets_dir)
            {
                println!(
                    "  skipping {} (target override exists)",
                    src_file.display()
                );
                continue;
            }

            self.copy_and_process(&src_file, &output_path)?;
            copied += 1;
        }

        Ok(copied)
    }

    /// Copies the target-specific source tree (overrides and additions)
    /// into the target's output tree. These always win and are never
    /// override-checked.
    fn process_target_files(&mut self, target_name: &str) -> Result<usize> {
        let config = self.config;
        let target_src = config.targets_dir.join(target_name);
        let mut copied = 0;

        for src_file in walk_files(&target_src)? {
            let rel = rel_path(&src_file, &target_src)?;
            let output_path = config.dist_dir.join(target_name).join(rel);
            self.copy_and_process(&src_file, &output_path)?;
            copied += 1;
        }

        Ok(copied)
    }

    /// Copies passthrough folders and files into the output root, with no
    /// folder or suffix transformation.
    fn process_passthrough(&mut self) -> Result<usize> {
        let config = self.config;
        let mut copied = 0;

        for folder_name in &config.passthrough_folders {
            let src_folder = config.targets_dir.join(folder_name);
            let dest_folder = config.dist_dir.join(folder_name);

            for src_file in walk_files(&src_folder)? {
                let rel = rel_path(&src_file, &src_folder)?;
                let output_path = dest_folder.join(rel);
                self.copy_and_process(&src_file, &output_path)?;
                copied += 1;
            }
        }

        for file_name in &config.passthrough_files {
            let src_file = config.targets_dir.join(file_name);
            if !src_file.is_file() {
                continue;
            }
            let output_path = config.dist_dir.join(file_name);
            self.copy_and_process(&src_file, &output_path)?;
            copied += 1;
        }

        Ok(copied)
    }

    /// Emits one file: creates parent directories, copies binary content
    /// verbatim, renders template-eligible text content, and overwrites
    /// any previous file at the destination.
    fn copy_and_process(&mut self, src_file: &Path, dest_file: &Path) -> Result<()> {
        if let Some(parent) = dest_file.parent() {
            fs::create_dir_all(parent).map_err(Error::IoError)?;
        }

        let bytes = fs::read(src_file).map_err(Error::IoError)?;
        match String::from_utf8(bytes) {
            Ok(content) => {
                let output = if self.config.is_template_eligible(src_file) {
                    self.render_with_fallback(content, src_file)
                } else {
                    content
                };
                fs::write(dest_file, output).map_err(Error::IoError)?;
            }
            // Binary file, copy byte-for-byte without template processing
            Err(_) => {
                fs::copy(src_file, dest_file).map_err(Error::IoError)?;
            }
        }

        self.processed.insert(dest_file.to_path_buf());
        Ok(())
    }

    /// Renders eligible content, degrading to the original text on any
    /// rendering failure. Template problems never abort a file's copy.
    fn render_with_fallback(&self, content: String, src_file: &Path) -> String {
        if !content.contains(BLOCK_MARKER) && !content.contains(EXPRESSION_MARKER) {
            return content;
        }

        match self.renderer.render(&content) {
            Ok(rendered) => rendered,
            Err(Error::TemplateError(err))
                if matches!(err.kind(), minijinja::ErrorKind::TemplateNotFound) =>
            {
                warn!(
                    "Template not found while processing {}: {}",
                    src_file.display(),
                    err
                );
                content
            }
            Err(err) => {
                warn!(
                    "Error processing template in {}: {}",
                    src_file.display(),
                    err
                );
                content
            }
        }
    }
}
